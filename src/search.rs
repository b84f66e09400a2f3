use crate::HeadingItem;

/// Returns the heading whose section the viewport is currently in: the last
/// item (in original order) with `top <= scroll_offset`.
///
/// `None` when the offset is above every anchor, or when `items` is empty.
/// The boundary is inclusive: an offset exactly equal to an item's `top`
/// selects that item. When several items share a `top`, the last one in
/// original order wins.
///
/// `items` must be ordered by ascending `top`. The reverse linear scan is
/// fine at realistic sizes (tens of headings); for large lists the same
/// contract could be served by `partition_point` over the sorted `top`s
/// without changing observable behavior.
pub fn active_item(items: &[HeadingItem], scroll_offset: u64) -> Option<&HeadingItem> {
    items.iter().rev().find(|item| item.top <= scroll_offset)
}
