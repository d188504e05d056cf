//! # Flexural Steel Design
//!
//! Computes the effective depth from a multi-layer rebar layout, the section's
//! reinforcement limits, and the required steel area at each of the six
//! control sections (three negative, three positive) for a set of corrected
//! moments.
//!
//! ## Assumptions
//!
//! - Rectangular section, single tension-steel group per control section
//! - Up to 4 rebar layers with a 2.5 cm clear spacing between layers
//! - Whitney stress block per NTP E.060 / ACI 318
//!
//! ## Example
//!
//! ```rust
//! use viga_core::calculations::flexure::{calculate, FlexureInput, RebarRow, SectionLocation};
//! use viga_core::calculations::moment_correction::MomentSet;
//! use viga_core::materials::BarSize;
//! use viga_core::section::BeamSection;
//!
//! let input = FlexureInput {
//!     label: "V-101".to_string(),
//!     section: BeamSection::default(),
//!     phi: 0.9,
//!     stirrup: BarSize::In3_8,
//!     default_bar: BarSize::In5_8,
//!     rows: vec![
//!         RebarRow::new(2, BarSize::In5_8, 1, SectionLocation::top(0)),
//!         RebarRow::new(2, BarSize::In5_8, 1, SectionLocation::bottom(1)),
//!     ],
//!     moments: MomentSet::new([-10.0, -20.0, -15.0], [5.0, 5.0, 7.5]),
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.effective_depth_cm > 0.0);
//! assert!(result.as_min_cm2 < result.as_max_cm2);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::moment_correction::MomentSet;
use crate::equations::flexure::{required_steel_area, steel_area_limits};
use crate::errors::{CalcError, CalcResult};
use crate::materials::BarSize;
use crate::section::BeamSection;

/// Clear spacing between rebar layers (cm)
const LAYER_CLEAR_SPACING_CM: f64 = 2.5;

/// Beam face where a rebar group sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeamFace {
    /// Top steel resists the negative (support) moments
    Top,
    /// Bottom steel resists the positive moments
    Bottom,
}

/// One of the six control sections of the span.
///
/// `position` indexes the control points: 0 = left face, 1 = midspan,
/// 2 = right face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionLocation {
    pub face: BeamFace,
    pub position: u8,
}

impl SectionLocation {
    pub fn top(position: u8) -> Self {
        Self {
            face: BeamFace::Top,
            position,
        }
    }

    pub fn bottom(position: u8) -> Self {
        Self {
            face: BeamFace::Bottom,
            position,
        }
    }
}

/// A group of equal bars placed in one layer at one control section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RebarRow {
    /// Number of bars in the group
    pub count: u32,
    /// Bar designation
    pub bar: BarSize,
    /// Layer number, 1 (closest to the face) through 4
    pub layer: u8,
    /// Control section this group belongs to
    pub location: SectionLocation,
}

impl RebarRow {
    pub fn new(count: u32, bar: BarSize, layer: u8, location: SectionLocation) -> Self {
        Self {
            count,
            bar,
            layer,
            location,
        }
    }

    /// Total steel area of the group (cm²)
    pub fn area_cm2(&self) -> f64 {
        self.count as f64 * self.bar.area_cm2()
    }
}

/// Effective depth from a multi-layer rebar layout (cm).
///
/// Per layer, the governing row is the row with the largest total area among
/// the rows assigned to it; its area and diameter represent the whole layer
/// even when mixed diameters were entered (a documented simplification of the
/// legacy design window). Layers with no rows keep the pre-selected
/// longitudinal bar diameter and contribute zero area.
///
/// Depth chain (de = stirrup diameter, db_k = layer-k governing diameter):
///
/// ```text
/// d1 = h - r - de - db1/2
/// d2 = h - r - de - db1 - 2.5 - db2/2
/// d3 = h - r - de - db1 - 2.5 - db2 - 2.5 - db3/2
/// d4 = d3 - 3
/// ```
///
/// The layer-4 offset is a fixed 3 cm, asymmetric with the layer-2/3 pattern;
/// it is preserved as-is for compatibility with the legacy results. The final
/// depth is the area-weighted mean over the populated layers; with zero total
/// area it falls back to d1.
pub fn effective_depth(
    h: f64,
    cover: f64,
    stirrup_diam_cm: f64,
    default_bar_diam_cm: f64,
    rows: &[RebarRow],
) -> f64 {
    let de = stirrup_diam_cm;
    let mut layer_areas = [0.0_f64; 4];
    let mut layer_diams = [default_bar_diam_cm; 4];

    for row in rows {
        if !(1..=4).contains(&row.layer) {
            continue;
        }
        let idx = (row.layer - 1) as usize;
        let area = row.area_cm2();
        if area > layer_areas[idx] {
            layer_areas[idx] = area;
            layer_diams[idx] = row.bar.diameter_cm();
        }
    }

    let mut max_layer = 1;
    for layer in 1..=4 {
        if layer_areas[layer - 1] > 0.0 {
            max_layer = layer;
        }
    }

    let db1 = layer_diams[0];
    let d1 = h - cover - de - 0.5 * db1;
    if max_layer == 1 {
        return d1;
    }

    let db2 = layer_diams[1];
    let d2 = h - cover - de - db1 - LAYER_CLEAR_SPACING_CM - 0.5 * db2;
    if max_layer == 2 {
        let (a1, a2) = (layer_areas[0], layer_areas[1]);
        let total = a1 + a2;
        return if total > 0.0 {
            (d1 * a1 + d2 * a2) / total
        } else {
            d1
        };
    }

    let db3 = layer_diams[2];
    let d3 = h
        - cover
        - de
        - db1
        - LAYER_CLEAR_SPACING_CM
        - db2
        - LAYER_CLEAR_SPACING_CM
        - 0.5 * db3;
    if max_layer == 3 {
        let (a1, a2, a3) = (layer_areas[0], layer_areas[1], layer_areas[2]);
        let total = a1 + a2 + a3;
        return if total > 0.0 {
            (d1 * a1 + d2 * a2 + d3 * a3) / total
        } else {
            d1
        };
    }

    let d4 = d3 - 3.0;
    let (a1, a2, a3, a4) = (
        layer_areas[0],
        layer_areas[1],
        layer_areas[2],
        layer_areas[3],
    );
    let total = a1 + a2 + a3 + a4;
    if total > 0.0 {
        (d1 * a1 + d2 * a2 + d3 * a3 + d4 * a4) / total
    } else {
        d1
    }
}

/// Input parameters for flexural steel design.
///
/// Moments are expected to be already corrected (see
/// [`crate::calculations::moment_correction::correct_moments`]).
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "V-101",
///   "section": { "b_cm": 30.0, "h_cm": 60.0, "cover_cm": 4.0,
///                "fc_kg_cm2": 210.0, "fy_kg_cm2": 4200.0 },
///   "phi": 0.9,
///   "stirrup": "In3_8",
///   "default_bar": "In5_8",
///   "rows": [
///     { "count": 2, "bar": "In5_8", "layer": 1,
///       "location": { "face": "Top", "position": 0 } }
///   ],
///   "moments": { "negative": [-10.0, -20.0, -15.0], "positive": [5.0, 5.0, 7.5] }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlexureInput {
    /// User label for this beam (e.g., "V-101")
    pub label: String,

    /// Section geometry and material strengths
    pub section: BeamSection,

    /// Strength-reduction factor for flexure (0.90 per E.060)
    pub phi: f64,

    /// Stirrup size (enters the effective-depth chain)
    pub stirrup: BarSize,

    /// Longitudinal bar pre-selection; diameter default for empty layers
    pub default_bar: BarSize,

    /// Placed rebar groups across all control sections
    pub rows: Vec<RebarRow>,

    /// Corrected design moments (T·m)
    pub moments: MomentSet,
}

impl FlexureInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.section.validate()?;
        if !self.phi.is_finite() || self.phi <= 0.0 || self.phi > 1.0 {
            return Err(CalcError::invalid_input(
                "phi",
                self.phi.to_string(),
                "Strength-reduction factor must be in (0, 1]",
            ));
        }
        for row in &self.rows {
            if !(1..=4).contains(&row.layer) {
                return Err(CalcError::invalid_input(
                    "layer",
                    row.layer.to_string(),
                    "Rebar layers are numbered 1 through 4",
                ));
            }
            if row.location.position > 2 {
                return Err(CalcError::invalid_input(
                    "position",
                    row.location.position.to_string(),
                    "Control positions are 0 (left face), 1 (midspan), 2 (right face)",
                ));
            }
        }
        Ok(())
    }

    /// Effective depth derived from the placed rebar (cm)
    pub fn effective_depth_cm(&self) -> f64 {
        effective_depth(
            self.section.h_cm,
            self.section.cover_cm,
            self.stirrup.diameter_cm(),
            self.default_bar.diameter_cm(),
            &self.rows,
        )
    }

    /// Total placed steel at one control section (cm²)
    pub fn provided_area_cm2(&self, location: SectionLocation) -> f64 {
        self.rows
            .iter()
            .filter(|row| row.location == location)
            .map(RebarRow::area_cm2)
            .sum()
    }
}

/// Steel area result at one control section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelArea {
    /// Raw area from the quadratic formula, before limits (cm²)
    pub required_raw_cm2: f64,
    /// Required area clamped to [As_min, As_max] (cm²)
    pub required_cm2: f64,
    /// Placed steel at this section (cm²)
    pub provided_cm2: f64,
}

impl SteelArea {
    /// Placed steel covers the requirement
    pub fn is_adequate(&self) -> bool {
        self.provided_cm2 >= self.required_cm2
    }
}

/// Results from flexural steel design.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "V-101",
///   "effective_depth_cm": 54.26,
///   "as_min_cm2": 3.93,
///   "as_max_cm2": 25.98,
///   "negative": [ { "required_raw_cm2": 5.1, "required_cm2": 5.1, "provided_cm2": 5.68 } ],
///   "positive": []
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlexureResult {
    /// Label copied from the input
    pub label: String,

    /// Effective depth used for all six sections (cm)
    pub effective_depth_cm: f64,

    /// Minimum reinforcement for the section (cm²)
    pub as_min_cm2: f64,

    /// Maximum reinforcement for the section (cm²)
    pub as_max_cm2: f64,

    /// Steel at the negative-moment sections (left face, midspan, right face)
    pub negative: [SteelArea; 3],

    /// Steel at the positive-moment sections
    pub positive: [SteelArea; 3],
}

impl FlexureResult {
    /// All six sections have enough placed steel
    pub fn all_adequate(&self) -> bool {
        self.negative
            .iter()
            .chain(self.positive.iter())
            .all(SteelArea::is_adequate)
    }

    /// Largest required area anywhere on the span (cm²)
    pub fn governing_required_cm2(&self) -> f64 {
        self.negative
            .iter()
            .chain(self.positive.iter())
            .fold(0.0_f64, |acc, s| acc.max(s.required_cm2))
    }
}

/// Calculate required steel areas for a beam span.
///
/// This is a pure function: given the corrected moments, section and placed
/// rebar, it derives the effective depth, evaluates the flexure formula at
/// each control section and clamps element-wise to the reinforcement limits.
///
/// # Errors
///
/// Returns [`CalcError::InvalidInput`] for non-positive geometry, a φ outside
/// (0, 1], a layer outside 1..=4 or a control position outside 0..=2.
pub fn calculate(input: &FlexureInput) -> CalcResult<FlexureResult> {
    input.validate()?;

    let section = &input.section;
    let d = input.effective_depth_cm();
    let (as_min, as_max) = steel_area_limits(section.fc_kg_cm2, section.fy_kg_cm2, section.b_cm, d);

    let steel_at = |mu: f64, location: SectionLocation| -> SteelArea {
        let raw = required_steel_area(
            mu,
            section.fc_kg_cm2,
            section.b_cm,
            d,
            section.fy_kg_cm2,
            input.phi,
        );
        SteelArea {
            required_raw_cm2: raw,
            required_cm2: raw.max(as_min).min(as_max),
            provided_cm2: input.provided_area_cm2(location),
        }
    };

    let negative =
        [0usize, 1, 2].map(|i| steel_at(input.moments.negative[i], SectionLocation::top(i as u8)));
    let positive =
        [0usize, 1, 2].map(|i| steel_at(input.moments.positive[i], SectionLocation::bottom(i as u8)));

    Ok(FlexureResult {
        label: input.label.clone(),
        effective_depth_cm: d,
        as_min_cm2: as_min,
        as_max_cm2: as_max,
        negative,
        positive,
    })
}
