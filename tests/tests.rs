use ball_simulation::{AxisAlignedBox, Body, Simulation, Vector2, resolve_collision, step, utils};

/// Body with no friction, so that only collisions change its velocity.
pub fn frictionless(id: u64, x: f64, y: f64, radius: f64, mass: f64, vx: f64, vy: f64) -> Body {
    Body::new(id, Vector2::new(x, y), radius, mass)
        .with_velocity(Vector2::new(vx, vy))
        .with_friction(0.0)
}

/// Momentum of two bodies projected on the unit normal from `a` to `b`.
pub fn normal_momentum(a: &Body, b: &Body, normal: Vector2) -> f64 {
    a.mass * a.vel.dot(normal) + b.mass * b.vel.dot(normal)
}

// ==================================================================================
// Broad and narrow phase
// ==================================================================================

#[test]
fn aabb_overlap_and_touching() {
    let a = AxisAlignedBox::new(0.0, 0.0, 10.0, 10.0);
    assert!(AxisAlignedBox::overlap(&a, &AxisAlignedBox::new(5.0, 5.0, 10.0, 10.0)));
    assert!(!AxisAlignedBox::overlap(&a, &AxisAlignedBox::new(10.0, 0.0, 10.0, 10.0)));
}

#[test]
fn aabb_overlap_symmetry_on_random_boxes() {
    let mut rng = fastrand::Rng::with_seed(11);
    let boxes: Vec<AxisAlignedBox> = (0..64)
        .map(|_| {
            AxisAlignedBox::new(
                rng.f64() * 100.0,
                rng.f64() * 100.0,
                rng.f64() * 30.0,
                rng.f64() * 30.0,
            )
        })
        .collect();

    for a in &boxes {
        for b in &boxes {
            assert_eq!(AxisAlignedBox::overlap(a, b), AxisAlignedBox::overlap(b, a));
        }
    }
}

#[test]
fn circles_touching_at_radius_sum_overlap() {
    let a = frictionless(0, 20.0, 20.0, 5.0, 1.0, 0.0, 0.0);
    let b = frictionless(1, 30.0, 20.0, 5.0, 1.0, 0.0, 0.0);
    assert!(a.circle_overlaps(&b));
    assert!(b.circle_overlaps(&a));
}

// ==================================================================================
// Collision response
// ==================================================================================

#[test]
fn normal_momentum_is_conserved_for_unequal_masses() {
    let cases = [
        (1.0, 3.0, Vector2::new(10.0, 0.0), Vector2::new(-10.0, 0.0)),
        (2.5, 0.4, Vector2::new(3.0, -1.0), Vector2::new(-7.0, 2.0)),
        (10.0, 1.0, Vector2::new(0.0, 0.0), Vector2::new(-4.0, -4.0)),
    ];

    for (m1, m2, v1, v2) in cases {
        let mut a = frictionless(0, 100.0, 100.0, 6.0, m1, v1.x, v1.y);
        let mut b = frictionless(1, 107.0, 104.0, 6.0, m2, v2.x, v2.y);
        let normal = (b.pos - a.pos) / (b.pos - a.pos).mag();
        let before = normal_momentum(&a, &b, normal);
        let total_before = a.momentum() + b.momentum();

        assert!(resolve_collision(&mut a, &mut b));

        let after = normal_momentum(&a, &b, normal);
        assert!((after - before).abs() <= 1e-9 * before.abs().max(1.0), "{before} vs {after}");
        assert!((a.momentum() + b.momentum() - total_before).mag() < 1e-9);
    }
}

#[test]
fn equal_masses_exchange_normal_velocity() {
    let mut a = frictionless(0, 40.0, 40.0, 5.0, 4.0, 12.0, 0.0);
    let mut b = frictionless(1, 48.0, 40.0, 5.0, 4.0, -2.0, 0.0);
    assert!(resolve_collision(&mut a, &mut b));
    assert!((a.vel.x - -2.0).abs() < 1e-12);
    assert!((b.vel.x - 12.0).abs() < 1e-12);
}

#[test]
fn two_body_scenario_separates_to_radius_sum() {
    let mut bodies = vec![
        frictionless(0, 50.0, 50.0, 5.0, 1.0, 10.0, 0.0),
        frictionless(1, 58.0, 50.0, 5.0, 3.0, -10.0, 0.0),
    ];
    let before = bodies[0].momentum() + bodies[1].momentum();

    step(&mut bodies, 0.0, 200.0, 100.0);

    let separation = bodies[1].pos - bodies[0].pos;
    assert_eq!(separation, Vector2::new(10.0, 0.0));
    let after = bodies[0].momentum() + bodies[1].momentum();
    assert!((after.x - before.x).abs() < 1e-9);
    assert_eq!(after.y, 0.0);
}

#[test]
fn coincident_centres_never_produce_nan() {
    let mut bodies = vec![
        frictionless(0, 50.0, 50.0, 5.0, 1.0, 1.0, 0.0),
        frictionless(1, 50.0, 50.0, 5.0, 2.0, 0.0, 0.0),
    ];
    step(&mut bodies, 16.0, 200.0, 100.0);
    for b in &bodies {
        assert!(b.pos.x.is_finite() && b.pos.y.is_finite());
        assert!(b.vel.x.is_finite() && b.vel.y.is_finite());
    }
}

// ==================================================================================
// Friction, walls, integration
// ==================================================================================

#[test]
fn wall_reflection_at_left_edge() {
    let mut b = frictionless(0, 3.0, 50.0, 5.0, 1.0, -10.0, 0.0);
    b.resolve_wall_collision(200.0, 100.0);
    assert_eq!(b.pos.x, 5.0);
    assert_eq!(b.vel.x, 10.0);
}

#[test]
fn friction_decays_towards_zero() {
    let mut b = Body::new(0, Vector2::new(50.0, 50.0), 5.0, 1.0).with_velocity(Vector2::new(100.0, 0.0));
    b.apply_friction();
    assert!((b.vel.x - 99.3).abs() < 1e-12);

    let mut speed = b.vel.mag();
    for _ in 0..1000 {
        b.apply_friction();
        assert!(b.vel.mag() < speed);
        assert!(b.vel.x >= 0.0);
        speed = b.vel.mag();
    }
}

#[test]
fn integration_is_plain_euler() {
    // Overlaps another body, but integration itself never re-checks contacts.
    let mut a = frictionless(0, 50.0, 50.0, 5.0, 1.0, 3.0, -6.0);
    let p = a.pos;
    let v = a.vel;
    a.integrate(0.25);
    assert_eq!(a.pos, p + v * 0.25);
}

#[test]
fn step_runs_friction_before_walls_before_integration() {
    let mut bodies = vec![Body::new(0, Vector2::new(3.0, 50.0), 5.0, 1.0).with_velocity(Vector2::new(-100.0, 0.0))];
    step(&mut bodies, 100.0, 200.0, 100.0);

    // Friction first (-99.3), reflected by the wall (99.3), clamped to x = 5, then moved.
    let vx = 100.0 * (1.0 - Body::DEFAULT_FRICTION);
    assert!((bodies[0].vel.x - vx).abs() < 1e-12);
    assert!((bodies[0].pos.x - (5.0 + vx * 0.1)).abs() < 1e-12);
}

// ==================================================================================
// Whole simulation
// ==================================================================================

#[test]
fn random_population_stays_finite_and_never_gains_energy() {
    let mut rng = fastrand::Rng::with_seed(5);
    let bodies = utils::random_balls(30, 5.0, 25.0, 800.0, 600.0, 5)
        .unwrap()
        .into_iter()
        .map(|b| b.with_velocity(Vector2::new(rng.f64() * 400.0 - 200.0, rng.f64() * 400.0 - 200.0)))
        .collect();
    let mut sim = Simulation::with_bodies(bodies, 800.0, 600.0);

    let mut energy = sim.kinetic_energy();
    for _ in 0..600 {
        sim.step(Simulation::DEFAULT_FRAME_MS);
        let now = sim.kinetic_energy();
        assert!(now.is_finite());
        assert!(now <= energy * (1.0 + 1e-9), "energy grew from {energy} to {now}");
        energy = now;
    }
    assert_eq!(sim.frame, 600);
    assert!(sim.bodies.iter().all(|b| b.pos.x.is_finite() && b.pos.y.is_finite()));
}

#[test]
fn every_pair_is_resolved_from_both_sides() {
    // Body 0's contact with body 2 pushes it back into body 1, so body 1's own
    // pass has to resolve the (1, 0) pair again, and body 2's pass the (2, 0) pair.
    let mut bodies = vec![
        frictionless(0, 50.0, 50.0, 5.0, 1.0, 0.0, 0.0),
        frictionless(1, 58.0, 50.0, 5.0, 1.0, -4.0, 0.0),
        frictionless(2, 41.0, 50.0, 5.0, 1.0, 2.0, 0.0),
    ];
    let before = bodies.iter().fold(Vector2::zero(), |acc, b| acc + b.momentum());

    step(&mut bodies, 0.0, 200.0, 100.0);

    // Resolving each unordered pair once would leave 50, 59, 40 and velocities 2, 0, -4.
    assert_eq!(bodies[0].pos, Vector2::new(49.75, 50.0));
    assert_eq!(bodies[1].pos, Vector2::new(59.5, 50.0));
    assert_eq!(bodies[2].pos, Vector2::new(39.75, 50.0));

    assert_eq!(bodies[0].vel, Vector2::new(-4.0, 0.0));
    assert_eq!(bodies[1].vel, Vector2::new(2.0, 0.0));
    assert_eq!(bodies[2].vel, Vector2::new(0.0, 0.0));

    let after = bodies.iter().fold(Vector2::zero(), |acc, b| acc + b.momentum());
    assert_eq!(after, before);
}

#[test]
fn resolution_order_is_deterministic() {
    let make = || utils::random_balls(25, 10.0, 40.0, 400.0, 300.0, 9).unwrap();
    let mut a = Simulation::with_bodies(make(), 400.0, 300.0);
    let mut b = Simulation::with_bodies(make(), 400.0, 300.0);
    for _ in 0..100 {
        a.step(16.0);
        b.step(16.0);
    }
    assert_eq!(a.bodies, b.bodies);
}
