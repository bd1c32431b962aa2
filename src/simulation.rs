use crate::{
    body::{self, Body},
    interaction::Drag,
    vector::Vector2,
};

/// Advances every body by one frame, in slice order.
///
/// `elapsed_ms` is the frame duration in milliseconds; `width`/`height` is
/// the boundary the bodies bounce inside. Each body runs its full
/// [`update`] before the next one starts, so later bodies observe the
/// positions and velocities already written by earlier ones.
pub fn step(bodies: &mut [Body], elapsed_ms: f64, width: f64, height: f64) {
    let dt = elapsed_ms / 1000.0;
    for index in 0..bodies.len() {
        update(bodies, index, dt, width, height);
    }
}

/// Per-body frame update: friction, walls, every pairwise contact against
/// the other bodies in slice order, then integration by `dt` seconds.
pub fn update(bodies: &mut [Body], index: usize, dt: f64, width: f64, height: f64) {
    bodies[index].apply_friction();
    bodies[index].resolve_wall_collision(width, height);

    for other in 0..bodies.len() {
        if other == index || bodies[index].id == bodies[other].id {
            continue;
        }
        let (a, b) = pair_mut(bodies, index, other);
        body::resolve_collision(a, b);
    }

    bodies[index].integrate(dt);
}

/// Two distinct mutable borrows into `bodies`, returned as `(bodies[i], bodies[j])`.
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

/// Owns a fixed population of bodies inside a rectangular boundary.
#[derive(Clone, Debug)]
pub struct Simulation {
    /// Boundary width.
    pub width: f64,
    /// Boundary height.
    pub height: f64,
    /// Number of completed steps.
    pub frame: usize,
    /// All bodies, in resolution order.
    pub bodies: Vec<Body>,
    /// Pointer drag in progress, if any.
    pub drag: Drag,
    /// Velocity per unit of drag distance given on [`Simulation::release`].
    pub release_multiplier: f64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

impl Simulation {
    pub const DEFAULT_WIDTH: f64 = 800.0;
    pub const DEFAULT_HEIGHT: f64 = 600.0;
    /// One frame at 60 Hz.
    pub const DEFAULT_FRAME_MS: f64 = 1000.0 / 60.0;

    /// Empty simulation with the given boundary.
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_bodies(Vec::new(), width, height)
    }

    pub fn with_bodies(bodies: Vec<Body>, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            frame: 0,
            bodies,
            drag: Drag::new(),
            release_multiplier: Drag::DEFAULT_RELEASE_MULTIPLIER,
        }
    }

    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Changes the boundary; bodies are pushed back inside on the next step.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Advances the simulation by `elapsed_ms` milliseconds.
    pub fn step(&mut self, elapsed_ms: f64) {
        log::trace!("step: elapsed={}ms frame={}", elapsed_ms, self.frame);
        step(&mut self.bodies, elapsed_ms, self.width, self.height);
        self.frame += 1;
    }

    pub fn body(&self, id: u64) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_mut(&mut self, id: u64) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Sum of `mass * velocity` over all bodies.
    pub fn total_momentum(&self) -> Vector2 {
        self.bodies.iter().fold(Vector2::zero(), |acc, b| acc + b.momentum())
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Starts dragging the first body under `point`.
    pub fn grab(&mut self, point: Vector2) -> Option<u64> {
        self.drag.grab(&self.bodies, point)
    }

    /// Ends the drag at `point`, flicking the grabbed body with `release_multiplier`.
    pub fn release(&mut self, point: Vector2) -> Option<Vector2> {
        self.drag.release(&mut self.bodies, point, self.release_multiplier)
    }
}
