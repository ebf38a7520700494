//! Per-sector danger readings and the auxiliary obstacle mask.

use smallvec::SmallVec;

use crate::error::{AvoidanceError, Result};

/// Sector count the backing storage is sized for; longer vectors spill to the heap.
const TYPICAL_SECTORS: usize = 5;

/// Ordered per-sector obstacle-proximity scores, one per angular slice of the
/// forward field of view, indexed left to right.
///
/// The length is fixed at construction and always odd, so a unique centre
/// sector exists; the centre sector faces straight ahead.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DangerVector {
    scores: SmallVec<[u8; TYPICAL_SECTORS]>,
}

impl DangerVector {
    /// Creates a danger vector from per-sector scores.
    ///
    /// Fails unless the slice covers an odd number of sectors, at least 3,
    /// so that the centre sector and both of its neighbours exist.
    pub fn new(scores: &[u8]) -> Result<Self> {
        if scores.len() < 3 {
            return Err(AvoidanceError::TooFewSectors(scores.len()));
        }
        if scores.len() % 2 == 0 {
            return Err(AvoidanceError::EvenSectors(scores.len()));
        }
        Ok(Self {
            scores: SmallVec::from_slice(scores),
        })
    }

    /// The number of sectors.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// The index of the centre (forward) sector.
    pub fn mid(&self) -> usize {
        (self.scores.len() - 1) / 2
    }

    /// The score of the centre sector.
    pub fn centre(&self) -> u8 {
        self.scores[self.mid()]
    }

    /// The score of the sector immediately left of centre.
    pub fn left_of_centre(&self) -> u8 {
        self.scores[self.mid() - 1]
    }

    /// The score of the sector immediately right of centre.
    pub fn right_of_centre(&self) -> u8 {
        self.scores[self.mid() + 1]
    }

    /// All sector scores, left to right.
    pub fn scores(&self) -> &[u8] {
        &self.scores
    }

    /// Marks every sector whose score reaches `threshold`.
    ///
    /// Each sector is judged independently; this is unrelated to the
    /// forward-window safety check and exists for consumers that want full
    /// per-sector obstacle status.
    pub fn obstacle_mask(&self, threshold: u8) -> ObstacleMask {
        ObstacleMask {
            present: self.scores.iter().map(|score| *score >= threshold).collect(),
        }
    }
}

impl std::fmt::Debug for DangerVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DangerVector({:?})", &self.scores[..])
    }
}

/// Per-sector obstacle presence derived from a [DangerVector] and a threshold.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleMask {
    present: SmallVec<[bool; TYPICAL_SECTORS]>,
}

impl ObstacleMask {
    /// Whether the sector at `index` holds an obstacle.
    pub fn is_present(&self, index: usize) -> bool {
        self.present[index]
    }

    /// Per-sector presence flags, left to right.
    pub fn sectors(&self) -> &[bool] {
        &self.present
    }

    /// Whether any sector holds an obstacle.
    pub fn any(&self) -> bool {
        self.present.iter().any(|present| *present)
    }
}

impl std::fmt::Debug for ObstacleMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ObstacleMask({:?})", &self.present[..])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_even_and_short_vectors() {
        assert_eq!(
            DangerVector::new(&[0, 0, 0, 0]),
            Err(AvoidanceError::EvenSectors(4))
        );
        assert_eq!(
            DangerVector::new(&[0, 0]),
            Err(AvoidanceError::TooFewSectors(2))
        );
        assert_eq!(DangerVector::new(&[]), Err(AvoidanceError::TooFewSectors(0)));
    }

    #[test]
    fn centre_sector_is_unique() {
        let danger = DangerVector::new(&[1, 2, 3, 4, 5]).unwrap();
        assert_eq!(danger.mid(), 2);
        assert_eq!(danger.centre(), 3);
        assert_eq!(danger.left_of_centre(), 2);
        assert_eq!(danger.right_of_centre(), 4);

        let danger = DangerVector::new(&[7, 8, 9]).unwrap();
        assert_eq!(danger.mid(), 1);
        assert_eq!(danger.centre(), 8);
    }

    #[test]
    fn mask_judges_each_sector_independently() {
        let danger = DangerVector::new(&[0, 3, 1, 5, 2]).unwrap();
        let mask = danger.obstacle_mask(3);
        assert_eq!(mask.sectors(), &[false, true, false, true, false]);
        assert!(mask.is_present(1));
        assert!(!mask.is_present(2));
        assert!(mask.any());
        assert!(!danger.obstacle_mask(6).any());
    }
}
