//! A headless scroll spy: scroll-position-driven active-section tracking.
//!
//! Given an ordered list of heading anchors and a scroll offset, [`ScrollSpy`]
//! continuously resolves which heading the user is currently viewing and exposes
//! it as an observable value, plus a scroll-to-top command.
//!
//! It is UI-agnostic. An embedding adapter is expected to provide:
//! - the current scroll offset and a scroll-to command (the [`Viewport`] trait)
//! - the ordered heading anchors and their recomputation (the [`HeadingRegistry`] trait)
//! - delivery of scroll events and timer ticks, with an explicit `now_ms` clock
//!
//! There are no OS timers and no event loop inside: scroll events arm a
//! trailing-edge throttle, and the adapter's `tick(now_ms)` fires the pending
//! sample once the window elapses. This keeps every timing property
//! deterministic under test.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod options;
mod registry;
mod search;
mod spy;
mod throttle;
mod types;
mod viewport;


pub use options::{OnActiveChangeCallback, SCROLL_EVENT_DELAY_MS, ScrollSpyOptions};
pub use registry::{HeadingList, HeadingRegistry, RepositionCallback};
pub use search::active_item;
pub use spy::ScrollSpy;
pub use throttle::Throttle;
pub use types::{HeadingItem, HeadingLevel, Subscription};
pub use viewport::Viewport;
