//! # Beam Section
//!
//! Rectangular reinforced-concrete section geometry and material strengths.
//! The effective depth `d` is always derived from the rebar layout (see
//! [`crate::calculations::flexure::effective_depth`]), never set directly.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Rectangular beam section with concrete and steel strengths.
///
/// All geometry in centimeters, strengths in kg/cm².
///
/// ## JSON Example
///
/// ```json
/// {
///   "b_cm": 30.0,
///   "h_cm": 60.0,
///   "cover_cm": 4.0,
///   "fc_kg_cm2": 210.0,
///   "fy_kg_cm2": 4200.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamSection {
    /// Section width b (cm)
    pub b_cm: f64,

    /// Section height h (cm)
    pub h_cm: f64,

    /// Clear cover r (cm), measured to the stirrup
    pub cover_cm: f64,

    /// Concrete compressive strength f'c (kg/cm²)
    pub fc_kg_cm2: f64,

    /// Steel yield strength fy (kg/cm²)
    pub fy_kg_cm2: f64,
}

impl BeamSection {
    pub fn new(b_cm: f64, h_cm: f64, cover_cm: f64, fc_kg_cm2: f64, fy_kg_cm2: f64) -> Self {
        Self {
            b_cm,
            h_cm,
            cover_cm,
            fc_kg_cm2,
            fy_kg_cm2,
        }
    }

    /// Validate section parameters.
    pub fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("b_cm", self.b_cm),
            ("h_cm", self.h_cm),
            ("cover_cm", self.cover_cm),
            ("fc_kg_cm2", self.fc_kg_cm2),
            ("fy_kg_cm2", self.fy_kg_cm2),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be finite",
                ));
            }
            if value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be positive",
                ));
            }
        }
        if self.cover_cm >= self.h_cm {
            return Err(CalcError::invalid_input(
                "cover_cm",
                self.cover_cm.to_string(),
                "Cover must be smaller than the section height",
            ));
        }
        Ok(())
    }

    /// Gross concrete area b*h (cm²)
    pub fn gross_area_cm2(&self) -> f64 {
        self.b_cm * self.h_cm
    }
}

impl Default for BeamSection {
    fn default() -> Self {
        // Typical 30x60 beam, f'c 210, Grade 60 steel
        Self {
            b_cm: 30.0,
            h_cm: 60.0,
            cover_cm: 4.0,
            fc_kg_cm2: 210.0,
            fy_kg_cm2: 4200.0,
        }
    }
}
