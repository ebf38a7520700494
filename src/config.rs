use crate::error::{AvoidanceError, Result};
use crate::heuristic::TurnPolicy;

/// Fixed configuration of the avoidance decision core.
///
/// Built once at startup; every field is read-only to the controller while
/// it runs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AvoidanceConfig {
    /// Number of angular sectors in the danger vector; must be odd and at least 3.
    pub sectors: usize,
    /// A forward-window sector at or above this score blocks the cycle.
    pub safety_threshold: u8,
    /// Upper bound on forward travel in a single cycle, in m.
    pub max_distance: f64,
    /// Forward travel per unit of trajectory confidence, in m.
    pub distance_scale: f64,
    /// Confidence gained on each clear cycle.
    pub confidence_reward: u32,
    /// Confidence lost on each blocked cycle.
    pub confidence_penalty: u32,
    /// Confidence never drops below this floor.
    pub confidence_floor: u32,
    /// Magnitude of a single avoidance turn, in degrees.
    pub turn_increment: f64,
    /// How the turn direction is chosen on blocked cycles.
    pub turn_policy: TurnPolicy,
}

impl Default for AvoidanceConfig {
    fn default() -> Self {
        Self {
            sectors: 5,
            safety_threshold: 3,
            max_distance: 2.25,
            distance_scale: 0.05,
            confidence_reward: 2,
            confidence_penalty: 4,
            confidence_floor: 1,
            turn_increment: 10.0,
            turn_policy: TurnPolicy::TowardClearerSide,
        }
    }
}

impl AvoidanceConfig {
    /// Checks that the configuration is one the decision logic can operate with.
    pub fn validate(&self) -> Result<()> {
        if self.sectors < 3 {
            return Err(AvoidanceError::TooFewSectors(self.sectors));
        }
        if self.sectors % 2 == 0 {
            return Err(AvoidanceError::EvenSectors(self.sectors));
        }
        if self.safety_threshold == 0 {
            return Err(AvoidanceError::Config(
                "safety threshold must be positive".into(),
            ));
        }
        if self.max_distance <= 0.0 || self.distance_scale <= 0.0 {
            return Err(AvoidanceError::Config(
                "travel distances must be positive".into(),
            ));
        }
        if self.turn_increment <= 0.0 {
            return Err(AvoidanceError::Config(
                "turn increment must be positive".into(),
            ));
        }
        if self.confidence_floor == 0 {
            return Err(AvoidanceError::Config(
                "confidence floor must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_configuration_is_valid() {
        assert_eq!(AvoidanceConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_sector_layouts_without_a_centre() {
        let config = AvoidanceConfig {
            sectors: 4,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(AvoidanceError::EvenSectors(4)));

        let config = AvoidanceConfig {
            sectors: 1,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(AvoidanceError::TooFewSectors(1)));
    }

    #[test]
    fn rejects_degenerate_thresholds_and_distances() {
        let config = AvoidanceConfig {
            safety_threshold: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AvoidanceConfig {
            distance_scale: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AvoidanceConfig {
            confidence_floor: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
