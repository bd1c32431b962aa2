use crate::aabb::AxisAlignedBox;
use crate::vector::{Vector2, distance_sq, is_finite};

use anyhow::{Result, ensure};

/// A circular, non-rotating rigid body ("ball").
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Unique within a simulation, stable for the body's lifetime.
    pub id: u64,
    /// Centre position.
    pub pos: Vector2,
    /// Velocity in units per second.
    pub vel: Vector2,
    /// Radius, strictly positive.
    pub radius: f64,
    /// Mass, strictly positive.
    pub mass: f64,
    /// Fraction of velocity lost every frame, in `[0, 1)`.
    pub friction: f64,
    /// Render-only RGB colour. Ignored by the physics.
    pub color: [u8; 3],
}

impl Body {
    pub const DEFAULT_FRICTION: f64 = 0.007;

    /// Creates a body at rest with the default friction.
    /// No validation is performed, see [`Body::try_new`].
    pub fn new(id: u64, pos: Vector2, radius: f64, mass: f64) -> Self {
        Self {
            id,
            pos,
            vel: Vector2::zero(),
            radius,
            mass,
            friction: Self::DEFAULT_FRICTION,
            color: [255, 255, 255],
        }
    }

    /// Creates a body, rejecting parameters that would break the collision math.
    pub fn try_new(id: u64, pos: Vector2, radius: f64, mass: f64) -> Result<Self> {
        let body = Self::new(id, pos, radius, mass);
        body.validate()?;
        Ok(body)
    }

    /// Rejects bodies the collision math cannot handle. Radius and mass must
    /// be positive, friction in `[0, 1)`, position and velocity finite.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.radius.is_finite() && self.radius > 0.0,
            "body {}: radius must be positive, got {}",
            self.id,
            self.radius
        );
        ensure!(
            self.mass.is_finite() && self.mass > 0.0,
            "body {}: mass must be positive, got {}",
            self.id,
            self.mass
        );
        ensure!(
            (0.0..1.0).contains(&self.friction),
            "body {}: friction must be in [0, 1), got {}",
            self.id,
            self.friction
        );
        ensure!(
            is_finite(self.pos) && is_finite(self.vel),
            "body {}: position and velocity must be finite",
            self.id
        );
        Ok(())
    }

    pub fn with_velocity(mut self, vel: Vector2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_friction(mut self, friction: f64) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = color;
        self
    }

    /// Square box circumscribing the circle.
    pub fn bounding_box(&self) -> AxisAlignedBox {
        let side = 2.0 * self.radius;
        AxisAlignedBox::new(self.pos.x - self.radius, self.pos.y - self.radius, side, side)
    }

    /// Broad-phase test against another body.
    pub fn rect_overlaps(&self, other: &Body) -> bool {
        AxisAlignedBox::overlap(&self.bounding_box(), &other.bounding_box())
    }

    /// Narrow-phase test. Circles that exactly touch count as overlapping.
    pub fn circle_overlaps(&self, other: &Body) -> bool {
        let r = self.radius + other.radius;
        distance_sq(self.pos, other.pos) <= r * r
    }

    /// Whether `point` lies inside (or on) the circle. Used for pointer hit testing.
    pub fn contains_point(&self, point: Vector2) -> bool {
        distance_sq(point, self.pos) <= self.radius * self.radius
    }

    pub fn momentum(&self) -> Vector2 {
        self.vel * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.mag_sq()
    }

    /// Exponential velocity decay, applied once per frame.
    pub fn apply_friction(&mut self) {
        self.vel *= 1.0 - self.friction;
    }

    /// Clamps the body inside `[0, width] x [0, height]` and reflects the
    /// velocity component of the violated edge.
    ///
    /// Each axis checks its two edges as an either/or pair, so a body wider
    /// than the boundary only gets one edge corrected per frame.
    pub fn resolve_wall_collision(&mut self, width: f64, height: f64) {
        let r = self.radius;

        if self.pos.x - r < 0.0 {
            self.pos.x = r;
            self.vel.x = -self.vel.x;
        } else if self.pos.x > width - r {
            self.pos.x = width - r;
            self.vel.x = -self.vel.x;
        }

        if self.pos.y > height - r {
            self.pos.y = height - r;
            self.vel.y = -self.vel.y;
        } else if self.pos.y - r < 0.0 {
            self.pos.y = r;
            self.vel.y = -self.vel.y;
        }
    }

    /// Advances the position by `vel * dt`. No collision checks happen here.
    pub fn integrate(&mut self, dt: f64) {
        self.pos += self.vel * dt;
    }
}

/// Resolves a collision between `a` and `b` if their circles overlap.
///
/// Both bodies are pushed apart along the line of centres until they just
/// touch, then a single elastic impulse (restitution 1) is exchanged along
/// the contact normal. Both displacements use the normal taken before
/// either body moves, so the pair ends exactly `a.radius + b.radius` apart
/// instead of re-deriving `b`'s push from `a`'s corrected centre.
/// Returns `false` when the pair is not in contact or the centres coincide,
/// in which case neither body is touched.
pub fn resolve_collision(a: &mut Body, b: &mut Body) -> bool {
    if !a.rect_overlaps(b) || !a.circle_overlaps(b) {
        return false;
    }

    let delta = b.pos - a.pos;
    let distance = delta.mag();

    // The contact normal is undefined for coincident centres.
    if distance == 0.0 {
        log::debug!(
            "skipping contact between bodies {} and {}: coincident centres",
            a.id,
            b.id
        );
        return false;
    }

    let normal = delta / distance;

    // Negative while the circles interpenetrate; each body takes half.
    let overlap = 0.5 * (distance - a.radius - b.radius);
    a.pos += normal * overlap;
    b.pos -= normal * overlap;

    let m1 = a.mass;
    let m2 = b.mass;
    let p = 2.0 * normal.dot(a.vel - b.vel) / (m1 + m2);

    a.vel -= normal * (p * m2);
    b.vel += normal * (p * m1);

    true
}
