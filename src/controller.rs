use cgmath::Deg;
use log::debug;
use rand::Rng;

use crate::config::AvoidanceConfig;
use crate::danger::DangerVector;
use crate::debug::debug_decision;
use crate::error::Result;
use crate::heuristic::{choose_increment, random_increment, TurnPolicy};
use crate::math::normalize_heading;
use crate::nav::{NavigationSink, PoseSensor, Waypoint};
use crate::safety::evaluate_safety;

/// The trajectory waypoint leads the goal waypoint by this factor.
const TRAJECTORY_LEAD: f64 = 1.25;

/// The reactive obstacle-avoidance controller.
///
/// Owns all decision state that persists between control cycles: the fixed
/// configuration, the trajectory-confidence accumulator, the avoidance
/// increment prepared for the next blocked cycle, and the random source used
/// to break symmetric ties. The external scheduler calls
/// [cycle](Self::cycle) once per tick and must not overlap calls.
pub struct AvoidanceController<R: Rng> {
    /// The fixed configuration.
    config: AvoidanceConfig,
    /// Consecutive-clear-cycle accumulator that scales forward travel.
    confidence: u32,
    /// The signed heading delta to apply on the next blocked cycle, in degrees.
    increment: f64,
    /// Random source for turn-direction tie-breaks.
    rng: R,
}

impl<R: Rng> AvoidanceController<R> {
    /// Creates a controller with the given configuration and random source.
    ///
    /// Fails if the configuration is invalid. Confidence starts at the floor,
    /// and an initial turn direction is drawn at random so the first cycle
    /// can never read an unset increment.
    pub fn new(config: AvoidanceConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let increment = random_increment(config.turn_increment, &mut rng);
        Ok(Self {
            config,
            confidence: config.confidence_floor,
            increment,
            rng,
        })
    }

    /// Runs one control cycle.
    ///
    /// Evaluates the forward window of `danger`, then either advances the
    /// navigation targets or holds position and turns away from the
    /// obstacle. All pose reads and sink commands happen synchronously
    /// within the call. `danger` must match the configured sector count.
    pub fn cycle<P, N>(&mut self, danger: &DangerVector, pose: &P, nav: &mut N)
    where
        P: PoseSensor,
        N: NavigationSink,
    {
        debug_assert_eq!(danger.len(), self.config.sectors);

        let safe = evaluate_safety(danger, self.config.safety_threshold);
        debug!("{:?}, safe to go forward: {}", danger, safe);

        if safe {
            self.advance(danger, nav);
        } else {
            self.avoid(pose, nav);
        }

        debug_decision(
            danger,
            self.config.safety_threshold,
            safe,
            self.confidence,
            self.increment,
        );
    }

    /// Forward travel for the current cycle, in m: scaled by confidence and
    /// clamped to the configured maximum.
    pub fn move_distance(&self) -> f64 {
        f64::min(
            self.config.max_distance,
            self.config.distance_scale * self.confidence as f64,
        )
    }

    /// The current trajectory confidence.
    pub fn confidence(&self) -> u32 {
        self.confidence
    }

    /// The heading delta prepared for the next blocked cycle, in degrees.
    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// The controller's configuration.
    pub fn config(&self) -> &AvoidanceConfig {
        &self.config
    }

    /// Advances the navigation targets and grows trajectory confidence.
    fn advance<N: NavigationSink>(&mut self, danger: &DangerVector, nav: &mut N) {
        let distance = self.move_distance();
        nav.move_waypoint_forward(Waypoint::Goal, distance);
        nav.move_waypoint_forward(Waypoint::Trajectory, TRAJECTORY_LEAD * distance);
        nav.set_heading_target(Waypoint::Goal);

        // Pick the next turn direction while the view ahead is fresh, so it
        // is ready the moment a cycle comes up blocked.
        self.increment = match self.config.turn_policy {
            TurnPolicy::TowardClearerSide => {
                choose_increment(danger, self.config.turn_increment, &mut self.rng)
            }
            TurnPolicy::Random => random_increment(self.config.turn_increment, &mut self.rng),
        };
        debug!(
            "advancing {:.2} m, next avoidance increment {:+.1}",
            distance, self.increment
        );

        self.confidence = self.confidence.saturating_add(self.config.confidence_reward);
    }

    /// Holds position, turns away from the obstacle and decays confidence.
    fn avoid<P: PoseSensor, N: NavigationSink>(&mut self, pose: &P, nav: &mut N) {
        nav.set_waypoint_here(Waypoint::Goal);
        nav.set_waypoint_here(Waypoint::Trajectory);

        let heading = normalize_heading(pose.heading() + Deg(self.increment));
        nav.set_heading(heading);
        debug!(
            "holding at {:?}, turning {:+.1} to heading {:?}",
            pose.position(),
            self.increment,
            heading
        );

        let floor = self.config.confidence_floor;
        if self.confidence > floor + self.config.confidence_penalty {
            self.confidence -= self.config.confidence_penalty;
        } else {
            self.confidence = floor;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn move_distance_clamps_to_the_maximum() {
        let config = AvoidanceConfig {
            distance_scale: 1.0,
            confidence_floor: 100,
            ..Default::default()
        };
        let controller = AvoidanceController::new(config, StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(controller.confidence(), 100);
        assert_approx_eq!(controller.move_distance(), 2.25);
    }

    #[test]
    fn starts_at_the_floor_with_a_full_turn_step_prepared() {
        let controller =
            AvoidanceController::new(AvoidanceConfig::default(), StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(controller.confidence(), 1);
        assert_approx_eq!(controller.increment().abs(), 10.0);
    }

    #[test]
    fn rejects_an_invalid_configuration() {
        let config = AvoidanceConfig {
            sectors: 4,
            ..Default::default()
        };
        assert!(AvoidanceController::new(config, StdRng::seed_from_u64(1)).is_err());
    }
}
