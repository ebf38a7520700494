pub use cgmath;
pub use config::AvoidanceConfig;
pub use controller::AvoidanceController;
pub use danger::{DangerVector, ObstacleMask};
#[cfg(feature = "debug")]
pub use debug::take_debug_frame;
pub use error::{AvoidanceError, Result};
pub use heuristic::{choose_increment, random_increment, TurnPolicy};
pub use nav::{NavigationSink, Pose, PoseSensor, Waypoint};
pub use safety::evaluate_safety;

mod config;
mod controller;
mod danger;
mod debug;
mod error;
mod heuristic;
pub mod math;
mod nav;
mod safety;
