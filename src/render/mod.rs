mod text;

pub use text::{filled_cells, render_bar, render_gauge};
