/// Trailing-edge throttle over a caller-supplied millisecond clock.
///
/// The first event of a window arms a deadline; events arriving while armed
/// are coalesced into that same deadline. [`poll`](Self::poll) fires exactly
/// once when the deadline elapses and disarms, so the consumer samples at most
/// once per window, using whatever state is current at fire time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Throttle {
    deadline_ms: Option<u64>,
}

impl Throttle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a deadline at `now_ms + delay_ms` unless one is already pending.
    ///
    /// Returns whether this call armed the window.
    pub fn arm(&mut self, now_ms: u64, delay_ms: u64) -> bool {
        if self.deadline_ms.is_some() {
            return false;
        }
        self.deadline_ms = Some(now_ms.saturating_add(delay_ms));
        true
    }

    /// Cancels any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// The pending deadline, if armed. Adapters can use this to schedule
    /// their next timer callback.
    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Fires the pending deadline if `now_ms` has reached it.
    ///
    /// Returns `true` exactly once per armed window; the throttle disarms and
    /// is ready to be armed again.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}
