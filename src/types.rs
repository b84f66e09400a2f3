use alloc::string::String;

/// Nesting rank of a heading anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeadingLevel {
    /// Top-level section heading.
    H2,
    /// Sub-section heading.
    H3,
}

/// A named, positioned anchor point within a longer document.
///
/// The registry that supplies these owns them; the spy only reads the latest
/// `top` at sample time.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeadingItem {
    /// Unique identifier, stable across the document's lifetime.
    pub id: String,
    pub level: HeadingLevel,
    /// Display label. Not used by the tracking logic itself.
    pub title: String,
    /// Vertical anchor offset, in the same coordinate space as the viewport
    /// scroll offset. The registry may recompute this after layout changes.
    pub top: u64,
}

impl HeadingItem {
    pub fn new(
        id: impl Into<String>,
        level: HeadingLevel,
        title: impl Into<String>,
        top: u64,
    ) -> Self {
        Self {
            id: id.into(),
            level,
            title: title.into(),
            top,
        }
    }
}

/// Opaque handle for an attached scroll listener.
///
/// Returned by [`crate::Viewport::listen_scroll`] and redeemed by
/// [`crate::Viewport::unlisten_scroll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subscription(u64);

impl Subscription {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn into_raw(self) -> u64 {
        self.0
    }
}
