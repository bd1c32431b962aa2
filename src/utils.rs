use crate::body::Body;
use crate::vector::Vector2;

use anyhow::{Result, ensure};

/// Mass of a ball from its colour and radius.
/// Bigger and brighter balls are heavier.
pub fn mass_from(color: [u8; 3], radius: f64) -> f64 {
    let [r, g, b] = color.map(|c| c as f64 / 255.0);
    let half_radius = 127.0 / 255.0 * radius;
    let half_color = 128.0 / 255.0 * (r + g + b);
    half_radius + half_color
}

/// Uniformly random opaque colour.
pub fn random_color(rng: &mut fastrand::Rng) -> [u8; 3] {
    [rng.u8(..), rng.u8(..), rng.u8(..)]
}

/// Generates `n` balls scattered over a `width` x `height` area.
/// - Ids are `0..n`, in order.
/// - Radius is uniform in `[min_size, min_size + max_size)`.
/// - Mass derives from radius and a random colour, see [`mass_from`].
///
/// Placement ignores overlaps and walls; the first simulation step pushes
/// everything apart and back inside.
///
/// Fails when the size range could produce a non-positive radius, or when
/// any generated body does not pass [`Body::validate`].
pub fn random_balls(
    n: usize,
    min_size: f64,
    max_size: f64,
    width: f64,
    height: f64,
    seed: u64,
) -> Result<Vec<Body>> {
    ensure!(
        min_size.is_finite() && min_size > 0.0,
        "min_size must be positive, got {min_size}"
    );
    ensure!(
        max_size.is_finite() && max_size >= 0.0,
        "max_size must be non-negative, got {max_size}"
    );

    let mut rng = fastrand::Rng::with_seed(seed);

    (0..n)
        .map(|i| -> Result<Body> {
            let pos = Vector2::new(rng.f64() * width, rng.f64() * height);
            let radius = rng.f64() * max_size + min_size;
            let color = random_color(&mut rng);
            let mass = mass_from(color, radius);

            Ok(Body::try_new(i as u64, pos, radius, mass)?.with_color(color))
        })
        .collect()
}
