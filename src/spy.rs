use alloc::string::String;
use alloc::sync::Arc;

use crate::search::active_item;
use crate::{HeadingRegistry, ScrollSpyOptions, Subscription, Throttle, Viewport};

struct Session<C> {
    container: C,
    subscription: Subscription,
}

/// A scroll-position-driven active-section tracker.
///
/// The spy owns its collaborators (a [`HeadingRegistry`] and a [`Viewport`])
/// and is driven entirely by the embedding adapter:
/// - [`start_listening_to_scroll`](Self::start_listening_to_scroll) opens a
///   listening session on a container (at most one at a time).
/// - [`handle_scroll_event`](Self::handle_scroll_event) delivers scroll
///   events; bursts are coalesced by a trailing-edge throttle.
/// - [`tick`](Self::tick) is the adapter's timer callback; it runs the
///   sampling step once the throttle window elapses.
///
/// Each sample asks the registry to refresh anchor positions, reads the live
/// scroll offset, and resolves the active heading (largest `top <= offset`).
/// The result is readable via [`active_item_id`](Self::active_item_id) and
/// observable via the `on_active_change` option.
pub struct ScrollSpy<R, V: Viewport> {
    registry: R,
    viewport: V,
    options: ScrollSpyOptions,
    session: Option<Session<V::Container>>,
    throttle: Throttle,
    active_item_id: Option<String>,
}

impl<R: HeadingRegistry, V: Viewport> ScrollSpy<R, V> {
    /// Creates a spy that is not yet listening. The active item starts as
    /// `None` and stays that way until a sample runs.
    pub fn new(registry: R, viewport: V, options: ScrollSpyOptions) -> Self {
        Self {
            registry,
            viewport,
            options,
            session: None,
            throttle: Throttle::new(),
            active_item_id: None,
        }
    }

    pub fn options(&self) -> &ScrollSpyOptions {
        &self.options
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    /// The id of the heading currently judged to be in view, or `None` when
    /// the viewport is above every heading (or nothing was sampled yet).
    pub fn active_item_id(&self) -> Option<&str> {
        self.active_item_id.as_deref()
    }

    pub fn is_listening(&self) -> bool {
        self.session.is_some()
    }

    /// Whether a throttled sample is pending. Adapters can pair this with
    /// [`Throttle::deadline_ms`] via [`throttle`](Self::throttle) to schedule
    /// their next timer callback.
    pub fn has_pending_sample(&self) -> bool {
        self.throttle.is_armed()
    }

    pub fn throttle(&self) -> &Throttle {
        &self.throttle
    }

    pub fn set_on_active_change(
        &mut self,
        on_active_change: Option<impl Fn(Option<&str>) + Send + Sync + 'static>,
    ) {
        self.options.on_active_change = on_active_change.map(|f| Arc::new(f) as _);
    }

    /// Opens a listening session on `container`, tearing down any previous
    /// session first: the old listener is detached and a pending sample is
    /// cancelled, so no stale sample can land after the switch.
    ///
    /// `None` (an unresolvable container) degrades to "never samples": the
    /// previous session is still torn down, but no listener is attached.
    pub fn start_listening_to_scroll(&mut self, container: Option<V::Container>) {
        self.teardown_session();
        let Some(container) = container else {
            spdebug!("start_listening_to_scroll: no container, staying detached");
            return;
        };
        let subscription = self.viewport.listen_scroll(&container);
        spdebug!(
            subscription = subscription.into_raw(),
            "start_listening_to_scroll"
        );
        self.session = Some(Session {
            container,
            subscription,
        });
    }

    /// Tears down the current listening session, if any. The active item is
    /// left as-is.
    pub fn stop_listening_to_scroll(&mut self) {
        self.teardown_session();
    }

    fn teardown_session(&mut self) {
        self.throttle.cancel();
        if let Some(session) = self.session.take() {
            self.viewport.unlisten_scroll(session.subscription);
        }
    }

    /// Delivers a scroll event from the adapter.
    ///
    /// Events for anything but the current session's container are ignored,
    /// so a detached source that keeps firing cannot produce samples. The
    /// first event of a window arms the throttle; events inside the window
    /// are coalesced into the already-pending sample.
    pub fn handle_scroll_event(&mut self, container: &V::Container, now_ms: u64)
    where
        V::Container: PartialEq,
    {
        let Some(session) = &self.session else {
            return;
        };
        if session.container != *container {
            return;
        }
        if self
            .throttle
            .arm(now_ms, self.options.scroll_event_delay_ms)
        {
            sptrace!(now_ms, "scroll event armed sample window");
        }
    }

    /// Timer callback: runs the sampling step if the throttle window has
    /// elapsed. Returns whether a sample ran.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.throttle.poll(now_ms) {
            return false;
        }
        self.sample();
        true
    }

    /// Commands the viewport to scroll to `(0, 0)`.
    ///
    /// Does not touch the active item; the next sample resolves it naturally.
    pub fn scroll_to_top(&mut self) {
        self.viewport.scroll_to(0, 0);
    }

    fn sample(&mut self) {
        self.registry.refresh_positions();
        let offset = self.viewport.scroll_offset();
        let next = active_item(self.registry.items(), offset).map(|item| item.id.clone());
        sptrace!(offset, active = next.as_deref(), "sample");
        self.set_active_item_id(next);
    }

    fn set_active_item_id(&mut self, id: Option<String>) {
        if self.active_item_id == id {
            return;
        }
        self.active_item_id = id;
        if let Some(on_active_change) = &self.options.on_active_change {
            on_active_change(self.active_item_id.as_deref());
        }
    }
}

impl<R, V: Viewport> core::fmt::Debug for ScrollSpy<R, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollSpy")
            .field("active_item_id", &self.active_item_id)
            .field("is_listening", &self.session.is_some())
            .field("throttle", &self.throttle)
            .finish_non_exhaustive()
    }
}
