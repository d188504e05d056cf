//! # Beam Design Calculations
//!
//! This module contains the design calculation types. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Pipeline
//!
//! Raw envelope moments go through [`moment_correction`] first; the corrected
//! set feeds [`flexure`], which derives the effective depth and required steel
//! areas. [`shear`] runs independently off the factored shear demand and the
//! same section.
//!
//! ## Available Calculations
//!
//! - [`moment_correction`] - E.060 minimum-moment redistribution
//! - [`flexure`] - Required/limiting steel areas, layered effective depth
//! - [`shear`] - Stirrup spacing and zone layout

pub mod flexure;
pub mod moment_correction;
pub mod shear;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use flexure::{FlexureInput, FlexureResult, RebarRow, SectionLocation, SteelArea};
pub use moment_correction::{correct_moments, MomentSet, StructuralSystem};
pub use shear::{BeamSupport, ShearInput, ShearResult};

/// Enum wrapper for all calculation types.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Flexural steel design for a beam span
    Flexure(FlexureInput),
    /// Stirrup layout for a beam span
    Shear(ShearInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Flexure(f) => &f.label,
            CalculationItem::Shear(s) => &s.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Flexure(_) => "Flexure",
            CalculationItem::Shear(_) => "Shear",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculation_item_labels() {
        let shear = CalculationItem::Shear(ShearInput::new(
            "V-201", 30.0, 6.0, 50.0, 30.0, 60.0, 210.0,
        ));
        assert_eq!(shear.label(), "V-201");
        assert_eq!(shear.calc_type(), "Shear");
    }

    #[test]
    fn test_calculation_item_serialization() {
        let item = CalculationItem::Shear(ShearInput::new(
            "V-201", 30.0, 6.0, 50.0, 30.0, 60.0, 210.0,
        ));
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"Shear\""));
        let back: CalculationItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.label(), "V-201");
    }
}
