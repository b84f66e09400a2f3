use crate::Subscription;

/// Scroll primitives the spy consumes.
///
/// Implementations wrap whatever the embedding UI offers: a DOM window, a TUI
/// pane, or a plain struct in tests. All offsets are vertical distances from
/// the top of the scroll container, in the same coordinate space as
/// [`crate::HeadingItem::top`].
///
/// Listener routing: [`listen_scroll`](Self::listen_scroll) registers interest
/// in scroll events on a container and returns a [`Subscription`]; after
/// [`unlisten_scroll`](Self::unlisten_scroll) the adapter must stop delivering
/// events for that subscription. The spy holds at most one subscription at a
/// time.
pub trait Viewport {
    /// Opaque scroll-container handle (e.g. an element id or widget handle).
    type Container;

    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> u64;

    /// Programmatically scrolls to the given position.
    fn scroll_to(&mut self, x: u64, y: u64);

    /// Attaches a scroll listener to `container`.
    fn listen_scroll(&mut self, container: &Self::Container) -> Subscription;

    /// Detaches a previously attached scroll listener.
    fn unlisten_scroll(&mut self, subscription: Subscription);
}
