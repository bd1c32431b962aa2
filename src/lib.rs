pub mod aabb;
pub mod body;
pub mod c_api;
pub mod configuration;
pub mod interaction;
pub mod simulation;
pub mod utils;
pub mod vector;

pub use aabb::AxisAlignedBox;
pub use body::{Body, resolve_collision};
pub use configuration::ScenarioConfig;
pub use interaction::Drag;
pub use simulation::{Simulation, step};
pub use vector::Vector2;
