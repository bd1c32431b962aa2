/// Axis-aligned bounding rectangle, `(x, y)` being the top-left corner.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisAlignedBox {
    pub x: f64,
    pub y: f64,
    /// Width, non-negative.
    pub w: f64,
    /// Height, non-negative.
    pub h: f64,
}

impl AxisAlignedBox {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Broad-phase overlap test.
    /// Inequalities are strict: boxes that only share an edge do not overlap.
    #[inline]
    pub fn overlap(a: &AxisAlignedBox, b: &AxisAlignedBox) -> bool {
        a.x + a.w > b.x && a.x < b.x + b.w && a.y + a.h > b.y && a.y < b.y + b.h
    }
}
