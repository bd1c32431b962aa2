use crate::{
    body::Body,
    simulation::Simulation,
    utils,
    vector::Vector2,
};

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_Create(width: f64, height: f64) -> *mut Simulation {
    Box::into_raw(Box::new(Simulation::new(width, height)))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_Destroy(handle: *mut Simulation) {
    if !handle.is_null() {
        unsafe { drop(Box::from_raw(handle)) };
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_Step(handle: *mut Simulation, elapsed_ms: f64) {
    if let Some(sim) = unsafe { handle.as_mut() } {
        sim.step(elapsed_ms);
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_Resize(handle: *mut Simulation, width: f64, height: f64) {
    if let Some(sim) = unsafe { handle.as_mut() } {
        sim.resize(width, height);
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_GetBodyCount(handle: *const Simulation) -> usize {
    let sim = unsafe { handle.as_ref() };
    sim.map_or(0, |sim| sim.bodies.len())
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_GetBodies(handle: *const Simulation) -> *const Body {
    let sim = unsafe { handle.as_ref() };
    sim.map_or(std::ptr::null(), |sim| sim.bodies.as_ptr())
}

/// Adds one body. Returns `false` (and adds nothing) for a non-positive
/// radius or mass, or an id already in use.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_AddBody(
    handle: *mut Simulation,
    id: u64,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    radius: f64,
    mass: f64,
) -> bool {
    let Some(sim) = (unsafe { handle.as_mut() }) else {
        return false;
    };
    if sim.body(id).is_some() {
        log::warn!("Simulation_AddBody: id {id} already in use");
        return false;
    }
    match Body::try_new(id, Vector2::new(x, y), radius, mass) {
        Ok(body) => {
            sim.add_body(body.with_velocity(Vector2::new(vx, vy)));
            true
        }
        Err(e) => {
            log::warn!("Simulation_AddBody: {e}");
            false
        }
    }
}

/// Replaces the population with `n` random balls.
/// Returns `false` and keeps the current population when the sizes are invalid.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_SpawnRandom(
    handle: *mut Simulation,
    n: usize,
    min_size: f64,
    max_size: f64,
    seed: u64,
) -> bool {
    let Some(sim) = (unsafe { handle.as_mut() }) else {
        return false;
    };
    match utils::random_balls(n, min_size, max_size, sim.width, sim.height, seed) {
        Ok(bodies) => {
            sim.bodies = bodies;
            sim.drag = Default::default();
            sim.frame = 0;
            true
        }
        Err(e) => {
            log::warn!("Simulation_SpawnRandom: {e}");
            false
        }
    }
}

/// Returns the grabbed body's id, or -1 when nothing is under the pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_Grab(handle: *mut Simulation, x: f64, y: f64) -> i64 {
    let sim = unsafe { handle.as_mut() };
    sim.and_then(|sim| sim.grab(Vector2::new(x, y)))
        .map_or(-1, |id| id as i64)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_Release(handle: *mut Simulation, x: f64, y: f64) {
    if let Some(sim) = unsafe { handle.as_mut() } {
        sim.release(Vector2::new(x, y));
    }
}

/// Ignored unless `multiplier` is finite.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_SetReleaseMultiplier(handle: *mut Simulation, multiplier: f64) {
    if let Some(sim) = unsafe { handle.as_mut() } {
        if multiplier.is_finite() {
            sim.release_multiplier = multiplier;
        }
    }
}
