use alloc::sync::Arc;

/// Default throttle window between a scroll event and the resulting sample.
///
/// Bursts of scroll events are sampled at most once per window (trailing
/// edge). Tunable via [`ScrollSpyOptions::with_scroll_event_delay_ms`];
/// adapters that schedule their own timers should use the configured value.
pub const SCROLL_EVENT_DELAY_MS: u64 = 300;

/// A callback fired when the active heading changes.
///
/// The argument is the new active item id, or `None` when the viewport is
/// above every heading.
pub type OnActiveChangeCallback = Arc<dyn Fn(Option<&str>) + Send + Sync>;

/// Configuration for [`crate::ScrollSpy`].
#[derive(Clone)]
pub struct ScrollSpyOptions {
    /// Throttle window for scroll sampling, in milliseconds.
    pub scroll_event_delay_ms: u64,

    /// Optional observer for active-item changes.
    ///
    /// Invoked synchronously, in write order, and only when the value
    /// actually changes.
    pub on_active_change: Option<OnActiveChangeCallback>,
}

impl ScrollSpyOptions {
    pub fn new() -> Self {
        Self {
            scroll_event_delay_ms: SCROLL_EVENT_DELAY_MS,
            on_active_change: None,
        }
    }

    pub fn with_scroll_event_delay_ms(mut self, delay_ms: u64) -> Self {
        self.scroll_event_delay_ms = delay_ms;
        self
    }

    pub fn with_on_active_change(
        mut self,
        on_active_change: Option<impl Fn(Option<&str>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_active_change = on_active_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for ScrollSpyOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ScrollSpyOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollSpyOptions")
            .field("scroll_event_delay_ms", &self.scroll_event_delay_ms)
            .finish_non_exhaustive()
    }
}
