use crate::body::Body;
use crate::vector::Vector2;

/// Pointer drag state: which body was grabbed and where.
///
/// Releasing flicks the body with a velocity proportional to the vector
/// from the release point back to the grab point, like pulling a slingshot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Drag {
    grabbed: Option<(u64, Vector2)>,
}

impl Drag {
    /// Velocity per unit of drag distance applied on release.
    pub const DEFAULT_RELEASE_MULTIPLIER: f64 = 5.0;

    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the grabbed body, if any.
    pub fn grabbed_id(&self) -> Option<u64> {
        self.grabbed.map(|(id, _)| id)
    }

    /// Grabs the first body (in slice order) under `point`.
    /// Leaves the current grab untouched when nothing is hit.
    pub fn grab(&mut self, bodies: &[Body], point: Vector2) -> Option<u64> {
        let id = bodies.iter().find(|b| b.contains_point(point))?.id;
        log::debug!("grabbed body {id} at ({}, {})", point.x, point.y);
        self.grabbed = Some((id, point));
        Some(id)
    }

    /// Releases the grabbed body at `point`, setting its velocity to
    /// `multiplier * (grab_point - point)`. Returns the new velocity.
    pub fn release(&mut self, bodies: &mut [Body], point: Vector2, multiplier: f64) -> Option<Vector2> {
        let (id, grab_point) = self.grabbed.take()?;
        let body = bodies.iter_mut().find(|b| b.id == id)?;
        body.vel = (grab_point - point) * multiplier;
        log::debug!("released body {id} with velocity ({}, {})", body.vel.x, body.vel.y);
        Some(body.vel)
    }

    /// Aim segment for a renderer: from the grabbed body's centre, in the
    /// direction the body will be flicked, as long as the current drag.
    pub fn line(&self, bodies: &[Body], pointer: Vector2) -> Option<(Vector2, Vector2)> {
        let (id, grab_point) = self.grabbed?;
        let body = bodies.iter().find(|b| b.id == id)?;
        Some((body.pos, body.pos + (grab_point - pointer)))
    }
}
