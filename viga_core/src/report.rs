//! # Report Data
//!
//! Plain labeled values consumed by the external report renderers (HTML, PDF,
//! DXF). The engine exposes numbers plus labels and units; rendering is
//! entirely out of scope.
//!
//! Labels reproduce the legacy memoria/report wording (Spanish) so existing
//! templates keep working.
//!
//! ## Example
//!
//! ```rust
//! use viga_core::calculations::shear::{calculate, ShearInput};
//! use viga_core::report::shear_rows;
//!
//! let input = ShearInput::new("V-101", 30.0, 6.0, 50.0, 30.0, 60.0, 210.0)
//!     .with_long_bar_diam(1.27);
//! let result = calculate(&input).unwrap();
//! for row in shear_rows(&result) {
//!     println!("{}: {} {}", row.label, row.value, row.unit);
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::flexure::FlexureResult;
use crate::calculations::moment_correction::MomentSet;
use crate::calculations::shear::ShearResult;

/// One labeled value for a report table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportValue {
    /// Row label as shown in the report
    pub label: String,
    /// Formatted value
    pub value: String,
    /// Unit suffix, empty when dimensionless
    pub unit: &'static str,
}

impl ReportValue {
    fn new(label: impl Into<String>, value: String, unit: &'static str) -> Self {
        Self {
            label: label.into(),
            value,
            unit,
        }
    }
}

const POSITIONS: [&str; 3] = ["cara izq.", "centro", "cara der."];

/// Rows for the moment-correction table: original and corrected values side
/// by side, per control point.
pub fn moment_rows(original: &MomentSet, corrected: &MomentSet) -> Vec<ReportValue> {
    let mut rows = Vec::with_capacity(12);
    for (i, position) in POSITIONS.iter().enumerate() {
        rows.push(ReportValue::new(
            format!("Mu- {}", position),
            format!("{:.2}", original.negative[i]),
            "T·m",
        ));
        rows.push(ReportValue::new(
            format!("Mu- {} corregido", position),
            format!("{:.2}", corrected.negative[i]),
            "T·m",
        ));
    }
    for (i, position) in POSITIONS.iter().enumerate() {
        rows.push(ReportValue::new(
            format!("Mu+ {}", position),
            format!("{:.2}", original.positive[i]),
            "T·m",
        ));
        rows.push(ReportValue::new(
            format!("Mu+ {} corregido", position),
            format!("{:.2}", corrected.positive[i]),
            "T·m",
        ));
    }
    rows
}

/// Rows for the flexural design table.
pub fn flexure_rows(result: &FlexureResult) -> Vec<ReportValue> {
    let mut rows = vec![
        ReportValue::new("d", format!("{:.2}", result.effective_depth_cm), "cm"),
        ReportValue::new("As mín", format!("{:.2}", result.as_min_cm2), "cm²"),
        ReportValue::new("As máx", format!("{:.2}", result.as_max_cm2), "cm²"),
    ];
    for (i, position) in POSITIONS.iter().enumerate() {
        rows.push(ReportValue::new(
            format!("As- requerido {}", position),
            format!("{:.2}", result.negative[i].required_cm2),
            "cm²",
        ));
        rows.push(ReportValue::new(
            format!("As- colocado {}", position),
            format!("{:.2}", result.negative[i].provided_cm2),
            "cm²",
        ));
    }
    for (i, position) in POSITIONS.iter().enumerate() {
        rows.push(ReportValue::new(
            format!("As+ requerido {}", position),
            format!("{:.2}", result.positive[i].required_cm2),
            "cm²",
        ));
        rows.push(ReportValue::new(
            format!("As+ colocado {}", position),
            format!("{:.2}", result.positive[i].provided_cm2),
            "cm²",
        ));
    }
    rows.push(ReportValue::new(
        "Cumple",
        if result.all_adequate() { "SI" } else { "NO" }.to_string(),
        "",
    ));
    rows
}

/// Rows for the shear design table.
pub fn shear_rows(result: &ShearResult) -> Vec<ReportValue> {
    vec![
        ReportValue::new("Vc", format!("{:.2}", result.vc_ton), "T"),
        ReportValue::new("Vs", format!("{:.2}", result.vs_ton), "T"),
        ReportValue::new("ϕVc", format!("{:.2}", result.phi_vc_ton), "T"),
        ReportValue::new("ϕ(Vc+Vs)", format!("{:.2}", result.phi_vc_vs_ton), "T"),
        ReportValue::new("Separación SC", format!("{:.2}", result.s_sc_cm), "cm"),
        ReportValue::new("Separación SR", format!("{:.2}", result.s_sr_cm), "cm"),
        ReportValue::new("Lo", format!("{:.2}", result.lo_m), "m"),
        ReportValue::new("Lc", format!("{:.2}", result.lc_m), "m"),
        ReportValue::new("Estribos zona confinada", result.n_sc.to_string(), ""),
        ReportValue::new("Estribos zona central", result.n_sr.to_string(), ""),
        ReportValue::new(
            "Separación real SC",
            format!("{:.2}", result.sep_sc_real_cm),
            "cm",
        ),
        ReportValue::new(
            "Separación real SR",
            format!("{:.2}", result.sep_sr_real_cm),
            "cm",
        ),
        ReportValue::new(
            "Cumple",
            if result.ok { "SI" } else { "NO" }.to_string(),
            "",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::moment_correction::{correct_moments, StructuralSystem};
    use crate::calculations::shear::{calculate as shear_calculate, ShearInput};

    #[test]
    fn test_moment_rows() {
        let raw = MomentSet::new([-10.0, -20.0, -15.0], [5.0, 2.0, 3.0]);
        let corrected = correct_moments(&raw, StructuralSystem::Dual2);
        let rows = moment_rows(&raw, &corrected);
        assert_eq!(rows.len(), 12);
        assert!(rows.iter().any(|r| r.label == "Mu+ cara der. corregido" && r.value == "7.50"));
    }

    #[test]
    fn test_shear_rows_labels() {
        let input = ShearInput::new("V-101", 30.0, 6.0, 50.0, 30.0, 60.0, 210.0)
            .with_long_bar_diam(1.27);
        let result = shear_calculate(&input).unwrap();
        let rows = shear_rows(&result);

        let find = |label: &str| rows.iter().find(|r| r.label == label).unwrap();
        assert_eq!(find("Vc").value, "11.52");
        assert_eq!(find("Lc").value, "4.00");
        assert_eq!(find("Cumple").value, "SI");
        assert_eq!(find("Separación SC").unit, "cm");
    }

    #[test]
    fn test_rows_serialize() {
        let raw = MomentSet::new([-10.0, -20.0, -15.0], [5.0, 2.0, 3.0]);
        let corrected = correct_moments(&raw, StructuralSystem::Dual1);
        let json = serde_json::to_string(&moment_rows(&raw, &corrected)).unwrap();
        assert!(json.contains("corregido"));
    }
}
