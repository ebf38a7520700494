use rand::Rng;

use crate::danger::DangerVector;

/// How the controller picks a turn direction when a cycle is blocked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnPolicy {
    /// Turn toward whichever side of the forward window reads less danger,
    /// breaking symmetric ties at random.
    TowardClearerSide,
    /// Ignore the danger readings and pick a random direction every time.
    Random,
}

/// Chooses the signed heading delta for the next blocked cycle by comparing
/// the two sectors either side of centre.
///
/// The turn is always toward the side with less danger: negative deltas turn
/// toward the left sector, positive toward the right. When both sides read
/// equal, the obstacle is symmetric and the direction is drawn from `rng`.
pub fn choose_increment<R: Rng>(danger: &DangerVector, magnitude: f64, rng: &mut R) -> f64 {
    use std::cmp::Ordering::*;
    match danger.left_of_centre().cmp(&danger.right_of_centre()) {
        Less => -magnitude,
        Greater => magnitude,
        Equal => random_increment(magnitude, rng),
    }
}

/// Draws a turn direction at random: `magnitude` or `-magnitude`, equally likely.
pub fn random_increment<R: Rng>(magnitude: f64, rng: &mut R) -> f64 {
    if rng.gen() {
        magnitude
    } else {
        -magnitude
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn turns_toward_the_clearer_left_side() {
        let mut rng = StdRng::seed_from_u64(7);
        let danger = DangerVector::new(&[0, 1, 0, 2, 0]).unwrap();
        for _ in 0..100 {
            assert_eq!(choose_increment(&danger, 10.0, &mut rng), -10.0);
        }
    }

    #[test]
    fn turns_toward_the_clearer_right_side() {
        let mut rng = StdRng::seed_from_u64(7);
        let danger = DangerVector::new(&[0, 2, 0, 1, 0]).unwrap();
        for _ in 0..100 {
            assert_eq!(choose_increment(&danger, 10.0, &mut rng), 10.0);
        }
    }

    #[test]
    fn symmetric_tie_breaks_to_either_side() {
        let mut rng = StdRng::seed_from_u64(7);
        let danger = DangerVector::new(&[0, 2, 0, 2, 0]).unwrap();
        let mut seen = [false, false];
        for _ in 0..100 {
            let increment = choose_increment(&danger, 10.0, &mut rng);
            assert!(increment == 10.0 || increment == -10.0);
            seen[(increment > 0.0) as usize] = true;
        }
        assert!(seen[0] && seen[1]);
    }

    #[test]
    fn random_fallback_only_flips_the_sign() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false, false];
        for _ in 0..100 {
            let increment = random_increment(10.0, &mut rng);
            assert!(increment == 10.0 || increment == -10.0);
            seen[(increment > 0.0) as usize] = true;
        }
        assert!(seen[0] && seen[1]);
    }
}
