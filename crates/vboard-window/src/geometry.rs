#![forbid(unsafe_code)]

//! Row geometry selection for the presentation layer.
//!
//! While a row is being dragged its position comes from the drag engine;
//! otherwise it comes from the window, inset by the grid gutter so rows do
//! not touch.

/// Rectangle of a rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowGeometry {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl RowGeometry {
    #[must_use]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Pick the geometry a row is painted with.
///
/// `drag` wins whenever it is present and the row is being dragged. The
/// virtual geometry is shrunk by `grid` in height and inset by `grid` on both
/// horizontal sides.
#[must_use]
pub fn merge(
    virtual_geometry: RowGeometry,
    drag: Option<RowGeometry>,
    is_dragging: bool,
    grid: u32,
) -> RowGeometry {
    if is_dragging && let Some(drag) = drag {
        return drag;
    }
    RowGeometry {
        x: virtual_geometry.x.saturating_add(grid),
        y: virtual_geometry.y,
        width: virtual_geometry.width.saturating_sub(grid.saturating_mul(2)),
        height: virtual_geometry.height.saturating_sub(grid),
    }
}
