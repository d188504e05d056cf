//! # Moment Correction (NTP E.060 Chapter 21)
//!
//! Applies the minimum-moment rules for seismic dual systems to the raw
//! envelope moments at the three control points of a beam span (left face,
//! midspan, right face).
//!
//! ## Rules
//!
//! - The positive moment at each beam face must be at least a fraction of the
//!   negative moment at that face: 1/3 for Dual 1 systems, 1/2 for Dual 2.
//! - No moment, positive or negative, may fall below one quarter of the
//!   largest moment magnitude anywhere on the span.
//!
//! ## Sign Convention
//!
//! Negative moments (top-fiber tension at supports) are stored negative;
//! positive moments are stored positive. The correction works on magnitudes
//! and restores the signs on output.
//!
//! ## Example
//!
//! ```rust
//! use viga_core::calculations::moment_correction::{correct_moments, MomentSet, StructuralSystem};
//!
//! let raw = MomentSet::new([-10.0, -20.0, -15.0], [5.0, 2.0, 3.0]);
//! let corrected = correct_moments(&raw, StructuralSystem::Dual2);
//! assert_eq!(corrected.positive, [5.0, 5.0, 7.5]);
//! ```

use serde::{Deserialize, Serialize};

/// Seismic structural system classification per NTP E.060.
///
/// The system determines the face-moment fraction used in moment correction
/// and the confinement-zone length in shear design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StructuralSystem {
    /// Dual 1: face positive moments ≥ 1/3 of the face negative moment
    Dual1,
    /// Dual 2: face positive moments ≥ 1/2 of the face negative moment
    #[default]
    Dual2,
}

impl StructuralSystem {
    /// Parse a system label. Comparison is case-insensitive; anything other
    /// than "dual1" maps to Dual 2, matching the legacy UI behavior.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("dual1") {
            StructuralSystem::Dual1
        } else {
            StructuralSystem::Dual2
        }
    }

    /// Minimum face positive moment as a fraction of the face negative moment
    pub fn face_fraction(&self) -> f64 {
        match self {
            StructuralSystem::Dual1 => 1.0 / 3.0,
            StructuralSystem::Dual2 => 1.0 / 2.0,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            StructuralSystem::Dual1 => "Dual 1",
            StructuralSystem::Dual2 => "Dual 2",
        }
    }
}

impl std::fmt::Display for StructuralSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Bending moments at the three control points of a span (T·m).
///
/// Order is always left face, midspan, right face.
///
/// ## JSON Example
///
/// ```json
/// { "negative": [-10.0, -20.0, -15.0], "positive": [5.0, 2.0, 3.0] }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MomentSet {
    /// Negative moments (top-fiber tension), stored negative or as magnitudes
    pub negative: [f64; 3],
    /// Positive moments (bottom-fiber tension)
    pub positive: [f64; 3],
}

impl MomentSet {
    pub fn new(negative: [f64; 3], positive: [f64; 3]) -> Self {
        Self { negative, positive }
    }

    /// Largest moment magnitude among all six control values
    pub fn max_magnitude(&self) -> f64 {
        self.negative
            .iter()
            .chain(self.positive.iter())
            .fold(0.0_f64, |acc, m| acc.max(m.abs()))
    }
}

/// Apply the E.060 face and global minimum-moment rules.
///
/// Pure arithmetic, always defined for finite inputs; all-zero input yields
/// all-zero output. Corrected negatives come out negative-signed, corrected
/// positives positive-signed.
pub fn correct_moments(moments: &MomentSet, system: StructuralSystem) -> MomentSet {
    let mn = moments.negative.map(f64::abs);
    let mp = moments.positive.map(f64::abs);

    let f = system.face_fraction();
    // Face floor applies at the two beam faces only, never at midspan
    let face_floor = [f * mn[0], 0.0, f * mn[2]];

    let min_global = moments.max_magnitude() / 4.0;

    let positive = [0usize, 1, 2].map(|i| mp[i].max(face_floor[i]).max(min_global));
    let negative = mn.map(|m| -m.max(min_global));

    MomentSet { negative, positive }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dual1_fixture() {
        let raw = MomentSet::new([-10.0, -20.0, -15.0], [5.0, 2.0, 3.0]);
        let corrected = correct_moments(&raw, StructuralSystem::Dual1);
        assert_eq!(corrected.negative, [-10.0, -20.0, -15.0]);
        assert_eq!(corrected.positive, [5.0, 5.0, 5.0]);
    }

    #[test]
    fn test_dual2_fixture() {
        let raw = MomentSet::new([-10.0, -20.0, -15.0], [5.0, 2.0, 3.0]);
        let corrected = correct_moments(&raw, StructuralSystem::Dual2);
        assert_eq!(corrected.negative, [-10.0, -20.0, -15.0]);
        assert_eq!(corrected.positive, [5.0, 5.0, 7.5]);
    }

    #[test]
    fn test_all_zero() {
        let raw = MomentSet::default();
        let corrected = correct_moments(&raw, StructuralSystem::Dual2);
        assert_eq!(corrected.negative, [0.0; 3]);
        assert_eq!(corrected.positive, [0.0; 3]);
    }

    #[test]
    fn test_idempotent() {
        // Corrected moments already satisfy their own floors
        let raw = MomentSet::new([-10.0, -20.0, -15.0], [5.0, 2.0, 3.0]);
        for system in [StructuralSystem::Dual1, StructuralSystem::Dual2] {
            let once = correct_moments(&raw, system);
            let twice = correct_moments(&once, system);
            for i in 0..3 {
                assert!((once.negative[i] - twice.negative[i]).abs() < 1e-12);
                assert!((once.positive[i] - twice.positive[i]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_monotonic_in_positive_moment() {
        let raw = MomentSet::new([-10.0, -20.0, -15.0], [5.0, 2.0, 3.0]);
        let base = correct_moments(&raw, StructuralSystem::Dual2);
        for i in 0..3 {
            let mut bumped = raw;
            bumped.positive[i] += 4.0;
            let corrected = correct_moments(&bumped, StructuralSystem::Dual2);
            assert!(corrected.positive[i] >= base.positive[i]);
        }
    }

    #[test]
    fn test_monotonic_in_negative_moment() {
        let raw = MomentSet::new([-10.0, -20.0, -15.0], [5.0, 2.0, 3.0]);
        let base = correct_moments(&raw, StructuralSystem::Dual2);
        for i in 0..3 {
            let mut bumped = raw;
            bumped.negative[i] -= 4.0;
            let corrected = correct_moments(&bumped, StructuralSystem::Dual2);
            assert!(corrected.negative[i].abs() >= base.negative[i].abs());
        }
    }

    #[test]
    fn test_global_floor_applies_to_negatives() {
        // Largest moment is positive 40: the global floor 10 lifts weak negatives
        let raw = MomentSet::new([-2.0, -3.0, -2.0], [40.0, 1.0, 40.0]);
        let corrected = correct_moments(&raw, StructuralSystem::Dual2);
        assert_eq!(corrected.negative, [-10.0, -10.0, -10.0]);
        assert_eq!(corrected.positive, [40.0, 10.0, 40.0]);
    }

    #[test]
    fn test_system_label_parsing() {
        assert_eq!(StructuralSystem::from_label("dual1"), StructuralSystem::Dual1);
        assert_eq!(StructuralSystem::from_label("DUAL1"), StructuralSystem::Dual1);
        assert_eq!(StructuralSystem::from_label("dual2"), StructuralSystem::Dual2);
        // Unknown labels fall back to the stricter 1/2 factor
        assert_eq!(StructuralSystem::from_label("portico"), StructuralSystem::Dual2);
    }

    #[test]
    fn test_face_fractions() {
        assert!((StructuralSystem::Dual1.face_fraction() - 1.0 / 3.0).abs() < 1e-12);
        assert!((StructuralSystem::Dual2.face_fraction() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let raw = MomentSet::new([-10.0, -20.0, -15.0], [5.0, 2.0, 3.0]);
        let json = serde_json::to_string(&raw).unwrap();
        let roundtrip: MomentSet = serde_json::from_str(&json).unwrap();
        assert_eq!(raw, roundtrip);
    }
}
