//! Scenario files for the headless driver.
//!
//! A scenario is a YAML document describing the boundary, the frame timing
//! and the initial population. Bodies can be listed explicitly, generated
//! randomly, or both (explicit bodies come first):
//!
//! ```yaml
//! boundary:
//!   width: 800.0
//!   height: 600.0
//! frame_ms: 16.0            # elapsed time fed to every step
//! frames: 600               # steps to run
//! friction: 0.007           # applied to every body
//! release_multiplier: 5.0   # pointer flick strength
//!
//! spawn:
//!   count: 20
//!   min_size: 10.0
//!   max_size: 100.0
//!   seed: 42
//!
//! bodies:
//!   - { x: 100.0, y: 100.0, vx: 50.0, vy: 0.0, radius: 20.0, mass: 10.0 }
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::body::Body;
use crate::interaction::Drag;
use crate::simulation::Simulation;
use crate::utils;
use crate::vector::Vector2;

/// Size of the rectangle bodies bounce inside.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct BoundaryConfig {
    pub width: f64,
    pub height: f64,
}

/// Random population, see [`utils::random_balls`].
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SpawnConfig {
    pub count: usize,
    pub min_size: f64,
    pub max_size: f64,
    #[serde(default)]
    pub seed: u64,
}

/// One explicitly placed body.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct BodyConfig {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub vx: f64,
    #[serde(default)]
    pub vy: f64,
    pub radius: f64,
    pub mass: f64,
}

/// Top-level scenario loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub boundary: BoundaryConfig,
    #[serde(default = "default_frame_ms")]
    pub frame_ms: f64,
    #[serde(default = "default_frames")]
    pub frames: usize,
    #[serde(default = "default_friction")]
    pub friction: f64,
    #[serde(default = "default_release_multiplier")]
    pub release_multiplier: f64,
    #[serde(default)]
    pub spawn: Option<SpawnConfig>,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

fn default_frame_ms() -> f64 {
    Simulation::DEFAULT_FRAME_MS
}

fn default_frames() -> usize {
    600
}

fn default_friction() -> f64 {
    Body::DEFAULT_FRICTION
}

fn default_release_multiplier() -> f64 {
    Drag::DEFAULT_RELEASE_MULTIPLIER
}

impl ScenarioConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("invalid scenario")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let reader = BufReader::new(file);
        serde_yaml::from_reader(reader).with_context(|| format!("invalid scenario {}", path.display()))
    }

    /// Builds the runtime simulation, rejecting any body the collision math cannot handle.
    pub fn build(&self) -> Result<Simulation> {
        let BoundaryConfig { width, height } = self.boundary;
        anyhow::ensure!(
            width > 0.0 && height > 0.0,
            "boundary must be positive, got {width}x{height}"
        );

        let explicit = self.bodies.iter().enumerate().map(|(i, bc)| {
            Body::new(i as u64, Vector2::new(bc.x, bc.y), bc.radius, bc.mass)
                .with_velocity(Vector2::new(bc.vx, bc.vy))
        });

        let offset = self.bodies.len() as u64;
        let spawned = self
            .spawn
            .map(|s| utils::random_balls(s.count, s.min_size, s.max_size, width, height, s.seed))
            .transpose()
            .context("invalid spawn")?
            .unwrap_or_default()
            .into_iter()
            .map(|b| Body { id: b.id + offset, ..b });

        let bodies = explicit
            .chain(spawned)
            .map(|b| -> Result<Body> {
                let b = b.with_friction(self.friction);
                b.validate()?;
                Ok(b)
            })
            .collect::<Result<Vec<_>>>()?;

        anyhow::ensure!(
            self.release_multiplier.is_finite(),
            "release_multiplier must be finite, got {}",
            self.release_multiplier
        );

        log::info!("scenario: {} bodies in {}x{}", bodies.len(), width, height);
        let mut sim = Simulation::with_bodies(bodies, width, height);
        sim.release_multiplier = self.release_multiplier;
        Ok(sim)
    }
}
