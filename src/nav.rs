use cgmath::Deg;

use crate::math::Point2d;

/// Named navigation targets consumed by the actuation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waypoint {
    /// The primary goal the vehicle tracks its heading toward.
    Goal,
    /// A secondary target projected further along the intended trajectory.
    Trajectory,
}

/// Read access to the vehicle's pose estimate.
///
/// Readings are taken synchronously at the point of the call; the estimator
/// itself lives outside this crate.
pub trait PoseSensor {
    /// The current heading in degrees, measured clockwise from north.
    fn heading(&self) -> Deg<f64>;

    /// The current position in m.
    fn position(&self) -> Point2d;
}

/// Commands accepted by the navigation/actuation layer.
///
/// Implementations decide what the commands mean kinematically; the
/// controller only issues them, once per cycle, in order.
pub trait NavigationSink {
    /// Places `waypoint` at `distance` m ahead of the current position along
    /// the current heading.
    fn move_waypoint_forward(&mut self, waypoint: Waypoint, distance: f64);

    /// Places `waypoint` at the current position.
    fn set_waypoint_here(&mut self, waypoint: Waypoint);

    /// Tracks heading toward `waypoint`.
    fn set_heading_target(&mut self, waypoint: Waypoint);

    /// Sets the absolute heading target, already normalized to (-180°, 180°].
    fn set_heading(&mut self, heading: Deg<f64>);
}

/// A point-in-time pose reading.
///
/// Callers that sample their estimator at the start of a cycle can hand the
/// snapshot straight to the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Position in m.
    pub position: Point2d,
    /// Heading in degrees, clockwise from north.
    pub heading: Deg<f64>,
}

impl PoseSensor for Pose {
    fn heading(&self) -> Deg<f64> {
        self.heading
    }

    fn position(&self) -> Point2d {
        self.position
    }
}
