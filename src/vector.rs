use ultraviolet::DVec2;

/// 2D position/velocity vector used throughout the simulation.
///
/// Double precision so that momentum and energy checks stay tight over many frames.
pub type Vector2 = DVec2;

/// Squared Euclidean distance between two points.
#[inline]
pub fn distance_sq(a: Vector2, b: Vector2) -> f64 {
    (a - b).mag_sq()
}

/// True when both components are finite.
#[inline]
pub fn is_finite(v: Vector2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}
