use crate::events::{Event, EventHub};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

#[derive(Debug, Default)]
struct AnimationState {
    animate: bool,
    /// Bumped on every trigger. A reset only clears the flag it was scheduled for.
    generation: u64,
}

#[derive(Debug)]
struct PendingReset {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

/// One-shot load-in animation flag.
///
/// `trigger()` raises the flag and schedules a reset one scheduler tick later.
/// A newer trigger supersedes any reset that has not fired yet.
#[derive(Debug)]
pub struct AnimationTrigger {
    chart: String,
    state: Arc<Mutex<AnimationState>>,
    pending: Mutex<Option<PendingReset>>,
    event_hub: EventHub,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clear the flag if no newer trigger happened since `generation`.
fn clear_if_current(state: &Mutex<AnimationState>, generation: u64) -> bool {
    let mut s = lock(state);
    if s.generation != generation {
        return false;
    }
    s.animate = false;
    true
}

impl AnimationTrigger {
    pub fn new(chart: impl Into<String>, event_hub: EventHub) -> Self {
        Self {
            chart: chart.into(),
            state: Arc::new(Mutex::new(AnimationState::default())),
            pending: Mutex::new(None),
            event_hub,
        }
    }

    pub fn is_animating(&self) -> bool {
        lock(&self.state).animate
    }

    /// Raise the flag and schedule its reset on the current tokio runtime.
    ///
    /// Outside a runtime there is no scheduler tick to wait for, so the flag
    /// settles immediately.
    pub fn trigger(&self) {
        let generation = {
            let mut s = lock(&self.state);
            s.animate = true;
            s.generation += 1;
            s.generation
        };

        let mut pending = lock(&self.pending);
        if let Some(previous) = pending.take() {
            previous.token.cancel();
        }

        let Ok(rt) = Handle::try_current() else {
            debug!(chart = %self.chart, "no tokio runtime, settling animation synchronously");
            if clear_if_current(&self.state, generation) {
                self.publish_settled();
            }
            return;
        };

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let state = Arc::clone(&self.state);
        let event_hub = self.event_hub.clone();
        let chart = self.chart.clone();

        let handle = rt.spawn(async move {
            tokio::select! {
                biased;
                () = cancelled.cancelled() => {
                    debug!(%chart, generation, "animation reset superseded");
                }
                () = tokio::task::yield_now() => {
                    if clear_if_current(&state, generation) {
                        debug!(%chart, generation, "animation settled");
                        let _ = event_hub.publish(Event::AnimationSettled { chart });
                    }
                }
            }
        });

        *pending = Some(PendingReset { token, handle });
    }

    /// Wait for the pending reset, if any, to finish.
    pub async fn settle(&self) {
        let pending = lock(&self.pending).take();
        if let Some(reset) = pending {
            if let Err(e) = reset.handle.await {
                debug!(chart = %self.chart, "animation reset task ended abnormally: {e}");
            }
        }
    }

    fn publish_settled(&self) {
        let _ = self.event_hub.publish(Event::AnimationSettled { chart: self.chart.clone() });
    }
}

impl Drop for AnimationTrigger {
    fn drop(&mut self) {
        let pending = self.pending.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(reset) = pending.take() {
            reset.token.cancel();
        }
    }
}
