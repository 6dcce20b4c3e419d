mod hub;

pub use hub::{Event, EventHub};
