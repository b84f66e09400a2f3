use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::HeadingItem;

/// Supplier of the ordered heading anchors the spy tracks against.
///
/// Contract: [`items`](Self::items) is ordered by ascending `top` whenever a
/// search runs. The spy does not sort; a registry that violates this yields
/// undefined (but non-panicking) results.
pub trait HeadingRegistry {
    /// The current heading anchors, ordered by ascending `top`.
    fn items(&self) -> &[HeadingItem];

    /// Recomputes `top` values in place (e.g. after layout changes).
    ///
    /// Called once per sample, before the scroll offset is read.
    fn refresh_positions(&mut self);
}

/// Callback that recomputes heading `top` values in place.
pub type RepositionCallback = Arc<dyn Fn(&mut [HeadingItem]) + Send + Sync>;

/// A basic in-memory [`HeadingRegistry`].
///
/// Useful for demos and for embedders whose layout engine can expose
/// repositioning as a closure. Embedders with their own heading pipeline
/// should implement [`HeadingRegistry`] directly instead.
#[derive(Clone, Default)]
pub struct HeadingList {
    items: Vec<HeadingItem>,
    reposition: Option<RepositionCallback>,
}

impl HeadingList {
    pub fn new(items: Vec<HeadingItem>) -> Self {
        Self {
            items,
            reposition: None,
        }
    }

    /// Sets the closure [`refresh_positions`](HeadingRegistry::refresh_positions)
    /// delegates to. Without one, positions are treated as static.
    pub fn with_reposition(
        mut self,
        reposition: impl Fn(&mut [HeadingItem]) + Send + Sync + 'static,
    ) -> Self {
        self.reposition = Some(Arc::new(reposition));
        self
    }

    pub fn set_reposition(
        &mut self,
        reposition: Option<impl Fn(&mut [HeadingItem]) + Send + Sync + 'static>,
    ) {
        self.reposition = reposition.map(|f| Arc::new(f) as _);
    }

    pub fn set_items(&mut self, items: Vec<HeadingItem>) {
        self.items = items;
    }

    pub fn items_mut(&mut self) -> &mut [HeadingItem] {
        &mut self.items
    }
}

impl HeadingRegistry for HeadingList {
    fn items(&self) -> &[HeadingItem] {
        &self.items
    }

    fn refresh_positions(&mut self) {
        if let Some(reposition) = &self.reposition {
            reposition(&mut self.items);
        }
    }
}

impl core::fmt::Debug for HeadingList {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HeadingList")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}
