#![forbid(unsafe_code)]

//! Fixed-row-height window math.
//!
//! All functions are pure. Offsets and heights share one unit (pixels for a
//! GUI, cells for a terminal); only the ratio matters.

use std::ops::Range;

/// Largest valid scroll offset: `max(0, len * row_height - viewport_height)`.
#[must_use]
pub fn max_scroll_offset(len: usize, viewport_height: u32, row_height: u32) -> u32 {
    let content = (len as u64).saturating_mul(u64::from(row_height));
    let max = content.saturating_sub(u64::from(viewport_height));
    u32::try_from(max).unwrap_or(u32::MAX)
}

/// Clamp a requested scroll offset into `[0, max_scroll_offset]`.
#[must_use]
pub fn clamp_offset(len: usize, scroll_offset: u32, viewport_height: u32, row_height: u32) -> u32 {
    scroll_offset.min(max_scroll_offset(len, viewport_height, row_height))
}

/// Rows intersecting the viewport, as `[start, end)`.
///
/// Over-scrolled offsets are clamped first. A zero row height, zero viewport,
/// or empty list yields an empty range.
#[must_use]
pub fn visible_range(
    len: usize,
    scroll_offset: u32,
    viewport_height: u32,
    row_height: u32,
) -> Range<usize> {
    if len == 0 || row_height == 0 || viewport_height == 0 {
        return 0..0;
    }
    let offset = u64::from(clamp_offset(len, scroll_offset, viewport_height, row_height));
    let row = u64::from(row_height);
    let start = usize::try_from(offset / row).unwrap_or(usize::MAX).min(len);
    let end_row = (offset + u64::from(viewport_height)).div_ceil(row);
    let end = usize::try_from(end_row).unwrap_or(usize::MAX).min(len);
    start..end
}

/// Widen a range by `overscan` rows on each side, bounded by `len`.
#[must_use]
pub fn with_overscan(range: Range<usize>, overscan: usize, len: usize) -> Range<usize> {
    if range.is_empty() {
        return range;
    }
    range.start.saturating_sub(overscan)..range.end.saturating_add(overscan).min(len)
}

/// Item count including the placeholder slot, if this list reserves one.
#[inline]
#[must_use]
pub fn effective_len(items_len: usize, placeholder: Option<usize>) -> usize {
    items_len + usize::from(placeholder.is_some())
}
