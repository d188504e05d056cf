//! Rebar Catalog
//!
//! Fixed catalog of reinforcement bar designations used in Peruvian practice,
//! with nominal areas and diameters. The catalog must stay exact: downstream
//! reports compare placed steel against these values.
//!
//! ## Designations
//!
//! Mixed metric and imperial designations are commercially available:
//! 6mm, 8mm and 12mm metric bars alongside 3/8" through 1" imperial bars.
//!
//! ## Example
//!
//! ```rust
//! use viga_core::materials::BarSize;
//!
//! let bar = BarSize::In5_8;
//! assert_eq!(bar.designation(), "5/8\"");
//! assert_eq!(bar.area_cm2(), 1.99);
//! assert_eq!(bar.diameter_cm(), 1.59);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Reinforcement bar designation.
///
/// Each variant maps to a fixed (area, diameter) pair. Area values follow the
/// canonical table in `vigapp/models/constants`; the shear tables historically
/// carried slightly different 1/2" and 5/8" areas, unified here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BarSize {
    /// 6mm (0.28 cm², 0.60 cm)
    Mm6,
    /// 8mm (0.50 cm², 0.80 cm)
    Mm8,
    /// 3/8" (0.71 cm², 0.95 cm)
    In3_8,
    /// 12mm (1.13 cm², 1.20 cm)
    Mm12,
    /// 1/2" (1.29 cm², 1.27 cm)
    #[default]
    In1_2,
    /// 5/8" (1.99 cm², 1.59 cm)
    In5_8,
    /// 3/4" (2.84 cm², 1.91 cm)
    In3_4,
    /// 1" (5.10 cm², 2.54 cm)
    In1,
}

impl BarSize {
    /// All catalog bars for UI selection, smallest first
    pub const ALL: [BarSize; 8] = [
        BarSize::Mm6,
        BarSize::Mm8,
        BarSize::In3_8,
        BarSize::Mm12,
        BarSize::In1_2,
        BarSize::In5_8,
        BarSize::In3_4,
        BarSize::In1,
    ];

    /// Sizes commonly used as stirrups
    pub const STIRRUPS: [BarSize; 3] = [BarSize::In3_8, BarSize::In1_2, BarSize::In5_8];

    /// Nominal cross-sectional area in cm²
    pub fn area_cm2(&self) -> f64 {
        match self {
            BarSize::Mm6 => 0.28,
            BarSize::Mm8 => 0.50,
            BarSize::In3_8 => 0.71,
            BarSize::Mm12 => 1.13,
            BarSize::In1_2 => 1.29,
            BarSize::In5_8 => 1.99,
            BarSize::In3_4 => 2.84,
            BarSize::In1 => 5.10,
        }
    }

    /// Nominal diameter in cm
    pub fn diameter_cm(&self) -> f64 {
        match self {
            BarSize::Mm6 => 0.60,
            BarSize::Mm8 => 0.80,
            BarSize::In3_8 => 0.95,
            BarSize::Mm12 => 1.20,
            BarSize::In1_2 => 1.27,
            BarSize::In5_8 => 1.59,
            BarSize::In3_4 => 1.91,
            BarSize::In1 => 2.54,
        }
    }

    /// Commercial designation string (e.g., `5/8"`, `8mm`)
    pub fn designation(&self) -> &'static str {
        match self {
            BarSize::Mm6 => "6mm",
            BarSize::Mm8 => "8mm",
            BarSize::In3_8 => "3/8\"",
            BarSize::Mm12 => "12mm",
            BarSize::In1_2 => "1/2\"",
            BarSize::In5_8 => "5/8\"",
            BarSize::In3_4 => "3/4\"",
            BarSize::In1 => "1\"",
        }
    }

    /// Look up a bar by its commercial designation.
    ///
    /// Unknown designations are a programming/config error, not user data,
    /// and raise [`CalcError::BarNotFound`].
    pub fn from_designation(designation: &str) -> CalcResult<BarSize> {
        match designation.trim() {
            "6mm" => Ok(BarSize::Mm6),
            "8mm" => Ok(BarSize::Mm8),
            "3/8\"" => Ok(BarSize::In3_8),
            "12mm" => Ok(BarSize::Mm12),
            "1/2\"" => Ok(BarSize::In1_2),
            "5/8\"" => Ok(BarSize::In5_8),
            "3/4\"" => Ok(BarSize::In3_4),
            "1\"" => Ok(BarSize::In1),
            other => Err(CalcError::bar_not_found(other)),
        }
    }

    /// Check if this size is accepted as a stirrup
    pub fn is_stirrup_size(&self) -> bool {
        Self::STIRRUPS.contains(self)
    }
}

impl std::fmt::Display for BarSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.designation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_values_exact() {
        // The catalog is a compatibility contract; check every entry.
        let expected: [(BarSize, &str, f64, f64); 8] = [
            (BarSize::Mm6, "6mm", 0.28, 0.60),
            (BarSize::Mm8, "8mm", 0.50, 0.80),
            (BarSize::In3_8, "3/8\"", 0.71, 0.95),
            (BarSize::Mm12, "12mm", 1.13, 1.20),
            (BarSize::In1_2, "1/2\"", 1.29, 1.27),
            (BarSize::In5_8, "5/8\"", 1.99, 1.59),
            (BarSize::In3_4, "3/4\"", 2.84, 1.91),
            (BarSize::In1, "1\"", 5.10, 2.54),
        ];
        for (bar, name, area, diam) in expected {
            assert_eq!(bar.designation(), name);
            assert_eq!(bar.area_cm2(), area);
            assert_eq!(bar.diameter_cm(), diam);
        }
    }

    #[test]
    fn test_from_designation_roundtrip() {
        for bar in BarSize::ALL {
            assert_eq!(BarSize::from_designation(bar.designation()).unwrap(), bar);
        }
    }

    #[test]
    fn test_from_designation_unknown() {
        let err = BarSize::from_designation("7/8\"").unwrap_err();
        assert_eq!(err.error_code(), "BAR_NOT_FOUND");
    }

    #[test]
    fn test_stirrup_sizes() {
        assert!(BarSize::In3_8.is_stirrup_size());
        assert!(!BarSize::In1.is_stirrup_size());
    }

    #[test]
    fn test_serialization() {
        let bar = BarSize::In3_4;
        let json = serde_json::to_string(&bar).unwrap();
        let parsed: BarSize = serde_json::from_str(&json).unwrap();
        assert_eq!(bar, parsed);
    }
}
