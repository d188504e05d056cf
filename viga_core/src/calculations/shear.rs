//! # Shear Design (Stirrup Layout)
//!
//! Computes concrete shear capacity, required stirrup spacing in the
//! confinement and central zones, zone lengths and stirrup counts for a
//! rectangular beam per NTP E.060.
//!
//! ## Zones
//!
//! Seismic detailing splits the clear span into confinement zones `Lo` at the
//! supports (2h for Dual 1 systems, 2d otherwise) and a central zone `Lc`.
//! Cantilevers have a single confinement zone at the support.
//!
//! ## Example
//!
//! ```rust
//! use viga_core::calculations::shear::{calculate, ShearInput};
//!
//! let input = ShearInput::new("V-101", 30.0, 6.0, 50.0, 30.0, 60.0, 210.0)
//!     .with_long_bar_diam(1.27);
//! let result = calculate(&input).unwrap();
//!
//! assert!(result.ok);
//! assert!((result.lc_m - 4.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::moment_correction::StructuralSystem;
use crate::equations::shear::{central_spacing_cap, concrete_shear_capacity, confinement_spacing_cap};
use crate::errors::{CalcError, CalcResult};
use crate::materials::BarSize;

/// Support condition of the span.
///
/// Determines how the confinement zones are laid out: supported beams confine
/// both ends, cantilevers only the support end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BeamSupport {
    /// Simply supported or continuous span (confinement zone at both faces)
    #[default]
    Supported,
    /// Cantilever (single confinement zone at the support)
    Cantilever,
}

/// Input parameters for shear design.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "V-101",
///   "vu_ton": 30.0,
///   "clear_span_m": 6.0,
///   "d_cm": 50.0,
///   "b_cm": 30.0,
///   "h_cm": 60.0,
///   "fc_kg_cm2": 210.0,
///   "fy_kg_cm2": 4200.0,
///   "phi": 0.85,
///   "system": "Dual2",
///   "stirrup": "In3_8",
///   "long_bar_diam_cm": 1.27,
///   "legs": 2,
///   "support": "Supported"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShearInput {
    /// User label for this beam
    pub label: String,

    /// Factored shear demand Vu (T)
    pub vu_ton: f64,

    /// Clear span Ln (m); negative values are clamped to zero
    pub clear_span_m: f64,

    /// Effective depth d (cm), typically taken from the flexure result
    pub d_cm: f64,

    /// Section width b (cm)
    pub b_cm: f64,

    /// Section height h (cm)
    pub h_cm: f64,

    /// Concrete strength f'c (kg/cm²)
    pub fc_kg_cm2: f64,

    /// Steel yield strength fy (kg/cm²)
    pub fy_kg_cm2: f64,

    /// Strength-reduction factor for shear (0.85 per E.060)
    pub phi: f64,

    /// Seismic system (sets the confinement length: 2h for Dual 1, 2d otherwise)
    pub system: StructuralSystem,

    /// Stirrup size
    pub stirrup: BarSize,

    /// Longitudinal bar diameter (cm), caps the confinement spacing
    pub long_bar_diam_cm: f64,

    /// Stirrup legs crossing the shear plane
    pub legs: u32,

    /// Support condition
    pub support: BeamSupport,
}

impl ShearInput {
    /// Create an input with the E.060 defaults: fy = 4200 kg/cm², φ = 0.85,
    /// Dual 2 system, 3/8" two-leg stirrups, supported span.
    pub fn new(
        label: impl Into<String>,
        vu_ton: f64,
        clear_span_m: f64,
        d_cm: f64,
        b_cm: f64,
        h_cm: f64,
        fc_kg_cm2: f64,
    ) -> Self {
        Self {
            label: label.into(),
            vu_ton,
            clear_span_m,
            d_cm,
            b_cm,
            h_cm,
            fc_kg_cm2,
            fy_kg_cm2: 4200.0,
            phi: 0.85,
            system: StructuralSystem::Dual2,
            stirrup: BarSize::In3_8,
            long_bar_diam_cm: 1.0,
            legs: 2,
            support: BeamSupport::Supported,
        }
    }

    pub fn with_stirrup(mut self, stirrup: BarSize) -> Self {
        self.stirrup = stirrup;
        self
    }

    pub fn with_long_bar_diam(mut self, diam_cm: f64) -> Self {
        self.long_bar_diam_cm = diam_cm;
        self
    }

    pub fn with_system(mut self, system: StructuralSystem) -> Self {
        self.system = system;
        self
    }

    pub fn with_support(mut self, support: BeamSupport) -> Self {
        self.support = support;
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("d_cm", self.d_cm),
            ("b_cm", self.b_cm),
            ("h_cm", self.h_cm),
            ("fc_kg_cm2", self.fc_kg_cm2),
            ("fy_kg_cm2", self.fy_kg_cm2),
            ("phi", self.phi),
            ("long_bar_diam_cm", self.long_bar_diam_cm),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be finite and positive",
                ));
            }
        }
        if !self.vu_ton.is_finite() || self.vu_ton < 0.0 {
            return Err(CalcError::invalid_input(
                "vu_ton",
                self.vu_ton.to_string(),
                "Shear demand must be finite and non-negative",
            ));
        }
        if self.legs == 0 {
            return Err(CalcError::invalid_input(
                "legs",
                self.legs.to_string(),
                "Stirrups need at least one leg",
            ));
        }
        Ok(())
    }

    /// Stirrup steel area crossing the shear plane (cm²)
    pub fn stirrup_area_cm2(&self) -> f64 {
        self.legs as f64 * self.stirrup.area_cm2()
    }
}

/// Results from shear design.
///
/// All capacities in tons, spacings in cm, zone lengths in meters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShearResult {
    /// Label copied from the input
    pub label: String,

    /// Concrete shear capacity Vc (T)
    pub vc_ton: f64,

    /// Shear the stirrups must carry, Vu/φ - Vc clamped at zero (T)
    pub vs_required_ton: f64,

    /// Steel shear capacity at the provided spacing (T)
    pub vs_ton: f64,

    /// φVc (T)
    pub phi_vc_ton: f64,

    /// φ(Vc + Vs) (T)
    pub phi_vc_vs_ton: f64,

    /// Governing stirrup spacing in the confinement zone (cm)
    pub s_sc_cm: f64,

    /// Governing stirrup spacing in the central zone (cm)
    pub s_sr_cm: f64,

    /// Confinement zone length Lo (m)
    pub lo_m: f64,

    /// Central zone length Lc (m)
    pub lc_m: f64,

    /// Stirrup count in each confinement zone
    pub n_sc: u32,

    /// Stirrup count in the central zone
    pub n_sr: u32,

    /// Real spacing after rounding the confinement count up (cm)
    pub sep_sc_real_cm: f64,

    /// Real spacing after rounding the central count up (cm)
    pub sep_sr_real_cm: f64,

    /// Capacity covers the demand: Vu ≤ φ(Vc + Vs)
    pub ok: bool,
}

/// Round a zone length up to a whole stirrup count; zero length or an
/// unusable spacing yields zero stirrups.
fn stirrup_count(zone_cm: f64, spacing_cm: f64) -> (u32, f64) {
    if zone_cm <= 0.0 || spacing_cm <= 0.0 || !spacing_cm.is_finite() {
        return (0, 0.0);
    }
    let n = (zone_cm / spacing_cm).ceil() as u32;
    (n, zone_cm / n as f64)
}

/// Calculate the stirrup layout for a beam.
///
/// # Errors
///
/// Returns [`CalcError::InvalidInput`] for non-positive geometry or strengths,
/// a negative shear demand, or zero stirrup legs.
pub fn calculate(input: &ShearInput) -> CalcResult<ShearResult> {
    input.validate()?;

    let vc = concrete_shear_capacity(input.fc_kg_cm2, input.b_cm, input.d_cm);
    let phi_vc = input.phi * vc;

    let av = input.stirrup_area_cm2();
    let de = input.stirrup.diameter_cm();

    // Shear the stirrups must carry (T)
    let vs_required = (input.vu_ton / input.phi - vc).max(0.0);

    let s_required_cm = if vs_required > 0.0 {
        av * input.fy_kg_cm2 * input.d_cm / (vs_required * 1000.0)
    } else {
        f64::INFINITY
    };

    let sc_cap = confinement_spacing_cap(input.d_cm, input.long_bar_diam_cm, de);
    let sr_cap = central_spacing_cap(input.d_cm);

    let s_sc = s_required_cm.min(sc_cap);
    let s_sr = s_required_cm.min(sr_cap);

    let vs_provided = av * input.fy_kg_cm2 * input.d_cm / s_sc.min(s_sr) / 1000.0;
    let phi_vc_vs = input.phi * (vc + vs_provided);
    let ok = input.vu_ton <= phi_vc_vs;

    let lo_cm = match input.system {
        StructuralSystem::Dual1 => 2.0 * input.h_cm,
        StructuralSystem::Dual2 => 2.0 * input.d_cm,
    };
    let ln_cm = (input.clear_span_m * 100.0).max(0.0);
    let lc_cm = match input.support {
        BeamSupport::Supported => (ln_cm - 2.0 * lo_cm).max(0.0),
        BeamSupport::Cantilever => (ln_cm - lo_cm).max(0.0),
    };

    let (n_sc, sep_sc_real) = stirrup_count(lo_cm, s_sc);
    let (n_sr, sep_sr_real) = stirrup_count(lc_cm, s_sr);

    Ok(ShearResult {
        label: input.label.clone(),
        vc_ton: vc,
        vs_required_ton: vs_required,
        vs_ton: vs_provided,
        phi_vc_ton: phi_vc,
        phi_vc_vs_ton: phi_vc_vs,
        s_sc_cm: s_sc,
        s_sr_cm: s_sr,
        lo_m: lo_cm / 100.0,
        lc_m: lc_cm / 100.0,
        n_sc,
        n_sr,
        sep_sc_real_cm: sep_sc_real,
        sep_sr_real_cm: sep_sr_real,
        ok,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> ShearInput {
        ShearInput::new("Test Beam", 30.0, 6.0, 50.0, 30.0, 60.0, 210.0)
            .with_long_bar_diam(1.27)
    }

    #[test]
    fn test_design_fixture() {
        // Regression case from the legacy shear window
        let result = calculate(&test_input()).unwrap();
        assert!(result.ok);
        assert!((result.s_sc_cm - 12.55).abs() < 0.1);
        assert!((result.lc_m - 4.0).abs() < 1e-9);
        assert!(result.phi_vc_vs_ton >= 30.0);
    }

    #[test]
    fn test_concrete_capacity() {
        let result = calculate(&test_input()).unwrap();
        assert!((result.vc_ton - 11.52).abs() < 0.01);
        assert!((result.phi_vc_ton - 0.85 * result.vc_ton).abs() < 1e-12);
    }

    #[test]
    fn test_stirrup_distribution() {
        let mut input = test_input();
        input.vu_ton = 40.0;
        let result = calculate(&input).unwrap();
        assert!(result.n_sc > 0);
        assert!(result.n_sr > 0);
        assert!(result.sep_sc_real_cm > 0.0);
        assert!(result.sep_sr_real_cm > 0.0);
        // Real spacings never exceed the governing design spacings
        assert!(result.sep_sc_real_cm <= result.s_sc_cm + 1e-9);
        assert!(result.sep_sr_real_cm <= result.s_sr_cm + 1e-9);
    }

    #[test]
    fn test_low_demand_spacing_from_caps() {
        // Vu below phi*Vc: no steel required, spacing governed by the caps
        let mut input = test_input();
        input.vu_ton = 5.0;
        let result = calculate(&input).unwrap();
        assert_eq!(result.vs_required_ton, 0.0);
        assert!((result.s_sc_cm - 12.5).abs() < 1e-9);
        assert!((result.s_sr_cm - 25.0).abs() < 1e-9);
        assert!(result.ok);
    }

    #[test]
    fn test_confinement_length_by_system() {
        let dual2 = calculate(&test_input()).unwrap();
        assert!((dual2.lo_m - 1.0).abs() < 1e-12); // 2d = 100 cm

        let dual1 = calculate(&test_input().with_system(StructuralSystem::Dual1)).unwrap();
        assert!((dual1.lo_m - 1.2).abs() < 1e-12); // 2h = 120 cm
    }

    #[test]
    fn test_cantilever_single_confinement_zone() {
        let result = calculate(&test_input().with_support(BeamSupport::Cantilever)).unwrap();
        // Lc = Ln - Lo = 6.0 - 1.0 = 5.0 m
        assert!((result.lc_m - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_span_central_zone_clamped() {
        let mut input = test_input();
        input.clear_span_m = 1.5; // shorter than 2*Lo
        let result = calculate(&input).unwrap();
        assert_eq!(result.lc_m, 0.0);
        assert_eq!(result.n_sr, 0);
        assert_eq!(result.sep_sr_real_cm, 0.0);
    }

    #[test]
    fn test_negative_span_clamped() {
        let mut input = test_input();
        input.clear_span_m = -2.0;
        let result = calculate(&input).unwrap();
        assert_eq!(result.lc_m, 0.0);
        assert_eq!(result.n_sr, 0);
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        let mut input = test_input();
        input.b_cm = 0.0;
        assert!(calculate(&input).is_err());

        let mut input = test_input();
        input.legs = 0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_spacing_caps_within_code_limits() {
        let result = calculate(&test_input()).unwrap();
        assert!(result.s_sc_cm <= 15.0);
        assert!(result.s_sr_cm <= 25.0);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: ShearInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.vu_ton, roundtrip.vu_ton);
        assert_eq!(input.stirrup, roundtrip.stirrup);

        let result = calculate(&input).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("vc_ton"));
        assert!(json.contains("phi_vc_vs_ton"));
        let back: ShearResult = serde_json::from_str(&json).unwrap();
        assert!((result.vc_ton - back.vc_ton).abs() < 1e-12);
    }
}
