// Example: track the active section while a reader scrolls through a page.
use scrollspy::{
    HeadingItem, HeadingLevel, HeadingList, SCROLL_EVENT_DELAY_MS, ScrollSpy, ScrollSpyOptions,
    Subscription, Viewport,
};

/// A simulated scroll container: one page, one listener slot.
#[derive(Default)]
struct SimViewport {
    scroll_y: u64,
    listening: Option<Subscription>,
}

impl Viewport for SimViewport {
    type Container = &'static str;

    fn scroll_offset(&self) -> u64 {
        self.scroll_y
    }

    fn scroll_to(&mut self, _x: u64, y: u64) {
        self.scroll_y = y;
    }

    fn listen_scroll(&mut self, container: &&'static str) -> Subscription {
        println!("listening to scroll on {container:?}");
        let subscription = Subscription::from_raw(1);
        self.listening = Some(subscription);
        subscription
    }

    fn unlisten_scroll(&mut self, subscription: Subscription) {
        if self.listening == Some(subscription) {
            self.listening = None;
        }
    }
}

fn main() {
    let headings = HeadingList::new(vec![
        HeadingItem::new("intro", HeadingLevel::H2, "Introduction", 100),
        HeadingItem::new("setup", HeadingLevel::H3, "Setup", 400),
        HeadingItem::new("usage", HeadingLevel::H3, "Usage", 900),
        HeadingItem::new("api", HeadingLevel::H2, "API reference", 1200),
        HeadingItem::new("faq", HeadingLevel::H2, "FAQ", 1900),
    ]);

    let options = ScrollSpyOptions::new().with_on_active_change(Some(|id: Option<&str>| {
        println!("  active section -> {id:?}");
    }));
    let mut spy = ScrollSpy::new(headings, SimViewport::default(), options);
    spy.start_listening_to_scroll(Some("article"));

    let mut now_ms = 0u64;
    for target in [0u64, 150, 450, 1238, 2500, 50] {
        spy.viewport_mut().scroll_y = target;
        println!("scrolled to y={target} at t={now_ms}");
        spy.handle_scroll_event(&"article", now_ms);

        // A real adapter would schedule a timer for the throttle deadline;
        // here we just advance the clock past it.
        now_ms += SCROLL_EVENT_DELAY_MS;
        spy.tick(now_ms);
    }

    spy.scroll_to_top();
    spy.handle_scroll_event(&"article", now_ms);
    spy.tick(now_ms + SCROLL_EVENT_DELAY_MS);
    println!("back at top, active={:?}", spy.active_item_id());
}
