// Example: switching scroll containers tears the old listener down, so a
// pending sample never lands against a detached container.
use scrollspy::{
    HeadingItem, HeadingLevel, HeadingList, SCROLL_EVENT_DELAY_MS, ScrollSpy, ScrollSpyOptions,
    Subscription, Viewport,
};

#[derive(Default)]
struct SimViewport {
    scroll_y: u64,
    next_subscription: u64,
    subscriptions: Vec<(&'static str, Subscription)>,
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
        self.next_subscription += 1;
        let subscription = Subscription::from_raw(self.next_subscription);
        self.subscriptions.push((*container, subscription));
        subscription
    }

    fn unlisten_scroll(&mut self, subscription: Subscription) {
        self.subscriptions.retain(|(_, s)| *s != subscription);
    }
}

fn main() {
    let headings = HeadingList::new(vec![
        HeadingItem::new("one", HeadingLevel::H2, "One", 100),
        HeadingItem::new("two", HeadingLevel::H2, "Two", 800),
    ]);
    let mut spy = ScrollSpy::new(headings, SimViewport::default(), ScrollSpyOptions::new());

    spy.start_listening_to_scroll(Some("article"));
    spy.viewport_mut().scroll_y = 900;
    spy.handle_scroll_event(&"article", 0);
    println!(
        "pending sample on \"article\": {}",
        spy.has_pending_sample()
    );

    // Switch before the window elapses: the pending sample is cancelled and
    // the old listener detached.
    spy.start_listening_to_scroll(Some("changelog"));
    println!(
        "after switch: pending={}, listeners={:?}",
        spy.has_pending_sample(),
        spy.viewport().subscriptions
    );

    // Events from the stale container are ignored outright.
    spy.handle_scroll_event(&"article", 10);
    spy.tick(SCROLL_EVENT_DELAY_MS + 10);
    println!("stale event sampled nothing: active={:?}", spy.active_item_id());

    spy.handle_scroll_event(&"changelog", 20);
    spy.tick(SCROLL_EVENT_DELAY_MS + 20);
    println!("live event sampled: active={:?}", spy.active_item_id());
}
