//! # Equation Registry
//!
//! Central registry of the design equations used by the engine. Each equation
//! carries metadata (code reference, formula strings, variable definitions) so
//! that external report renderers can display the calculation basis without
//! the engine producing any HTML or PDF itself.
//!
//! ## Usage
//!
//! ```rust
//! use viga_core::equations::registry::Equation;
//!
//! let meta = Equation::RequiredSteelArea.metadata();
//! println!("{}: {}", meta.name, meta.formula_plain);
//! println!("Reference: {}", meta.reference.citation());
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a design code or standard.
///
/// All equations should cite their source for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// NTP E.060 - Concreto Armado (Peruvian concrete code)
    NTE060 { section: &'static str },
    /// ACI 318 - Building Code Requirements for Structural Concrete
    ACI318 {
        year: u16,
        section: &'static str,
    },
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::NTE060 { section } => format!("NTP E.060 Art. {}", section),
            CodeReference::ACI318 { year, section } => {
                format!("ACI 318-{} Section {}", year % 100, section)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::NTE060 { .. } => "E.060",
            CodeReference::ACI318 { .. } => "ACI 318",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in the calculation appendix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Minimum-moment redistribution rules
    MomentCorrection,
    /// Required flexural steel
    FlexuralDesign,
    /// Minimum/maximum reinforcement limits
    ReinforcementLimits,
    /// Effective depth from the rebar layout
    SectionGeometry,
    /// Concrete and steel shear capacity
    ShearCapacity,
    /// Stirrup spacing and zone layout
    StirrupLayout,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::MomentCorrection => "Moment Correction",
            EquationCategory::FlexuralDesign => "Flexural Design",
            EquationCategory::ReinforcementLimits => "Reinforcement Limits",
            EquationCategory::SectionGeometry => "Section Geometry",
            EquationCategory::ShearCapacity => "Shear Capacity",
            EquationCategory::StirrupLayout => "Stirrup Layout",
        }
    }

    /// Sort order for the appendix (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::MomentCorrection => 1,
            EquationCategory::SectionGeometry => 2,
            EquationCategory::FlexuralDesign => 3,
            EquationCategory::ReinforcementLimits => 4,
            EquationCategory::ShearCapacity => 5,
            EquationCategory::StirrupLayout => 6,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "Mu", "As", "Vc")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "T·m", "cm²", "kg/cm²")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self {
            symbol,
            description,
            units,
        }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a design equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in LaTeX-like notation for report rendering
    pub formula_tex: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping in the appendix
    pub category: EquationCategory,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All design equations used by viga_core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// Mu+ at face ≥ f · |Mu-| at face (f = 1/3 Dual 1, 1/2 Dual 2)
    MomentFaceFloor,
    /// Every moment ≥ Mu_max / 4
    MomentGlobalFloor,
    /// As from the Whitney stress-block quadratic
    RequiredSteelArea,
    /// β1 as a function of f'c
    Beta1,
    /// As_min = 0.7 sqrt(f'c)/fy b d
    MinimumSteelArea,
    /// As_max = 0.75 ρ_b b d
    MaximumSteelArea,
    /// Area-weighted effective depth over up to 4 layers
    EffectiveDepthLayered,
    /// Vc = 0.53 sqrt(f'c) b d
    ConcreteShearCapacity,
    /// S = Av fy d / Vs
    RequiredStirrupSpacing,
    /// S ≤ min(d/4, 10 db, 24 de, 30) in the confinement zone
    ConfinementSpacingCap,
    /// S ≤ min(d/2, 30) in the central zone
    CentralSpacingCap,
    /// Lo = 2h (Dual 1) or 2d (Dual 2)
    ConfinementLength,
    /// Lc = Ln - 2 Lo (supported) or Ln - Lo (cantilever)
    CentralZoneLength,
    /// n = ceil(L / S), real spacing L/n
    StirrupCount,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::MomentFaceFloor => EquationMetadata {
                name: "Face Positive Moment Floor",
                description: "Minimum positive moment at a beam face as a fraction of the negative moment at that face",
                formula_tex: r"M_u^+ \geq f \cdot |M_u^-| \quad (f = 1/3 \text{ Dual 1}, 1/2 \text{ Dual 2})",
                formula_plain: "Mu+ >= f * |Mu-|, f = 1/3 (Dual 1) or 1/2 (Dual 2)",
                reference: CodeReference::NTE060 { section: "21.4.4" },
                variables: vec![
                    Variable::new("Mu+", "Positive design moment at the face", "T·m"),
                    Variable::new("Mu-", "Negative design moment at the face", "T·m"),
                    Variable::new("f", "System-dependent fraction", "-"),
                ],
                assumptions: vec!["Applies at the two beam faces only"],
                category: EquationCategory::MomentCorrection,
            },

            Equation::MomentGlobalFloor => EquationMetadata {
                name: "Global Moment Floor",
                description: "No design moment may fall below one quarter of the largest moment on the span",
                formula_tex: r"|M_u| \geq M_{u,max} / 4",
                formula_plain: "|Mu| >= Mu_max / 4",
                reference: CodeReference::NTE060 { section: "21.4.4" },
                variables: vec![
                    Variable::new("Mu_max", "Largest moment magnitude on the span", "T·m"),
                ],
                assumptions: vec!["Applies to all six control moments"],
                category: EquationCategory::MomentCorrection,
            },

            Equation::RequiredSteelArea => EquationMetadata {
                name: "Required Steel Area",
                description: "Tension steel area from the rectangular stress block, closed form",
                formula_tex: r"A_s = \frac{1.7 f'_c b d}{2 f_y} - \frac{1}{2}\sqrt{\frac{2.89 (f'_c b d)^2}{f_y^2} - \frac{6.8 f'_c b M_u}{\phi f_y^2}}",
                formula_plain: "As = 1.7 f'c b d/(2 fy) - 0.5 sqrt(2.89 (f'c b d)^2/fy^2 - 6.8 f'c b Mu/(phi fy^2))",
                reference: CodeReference::ACI318 { year: 2019, section: "22.2" },
                variables: vec![
                    Variable::new("Mu", "Factored moment", "kg·cm"),
                    Variable::new("As", "Required tension steel", "cm²"),
                    Variable::new("b", "Section width", "cm"),
                    Variable::new("d", "Effective depth", "cm"),
                    Variable::new("phi", "Strength-reduction factor", "-"),
                ],
                assumptions: vec![
                    "Whitney rectangular stress block",
                    "Radicand clamped at zero; adequacy checked against As_max",
                ],
                category: EquationCategory::FlexuralDesign,
            },

            Equation::Beta1 => EquationMetadata {
                name: "Stress Block Factor",
                description: "Depth factor of the equivalent rectangular stress block",
                formula_tex: r"\beta_1 = 0.85 - 0.05 \frac{f'_c - 280}{70} \leq 0.85",
                formula_plain: "beta1 = 0.85 for f'c <= 280; 0.85 - 0.05 (f'c-280)/70 above",
                reference: CodeReference::NTE060 { section: "10.2.7" },
                variables: vec![Variable::new("f'c", "Concrete strength", "kg/cm²")],
                assumptions: vec![],
                category: EquationCategory::FlexuralDesign,
            },

            Equation::MinimumSteelArea => EquationMetadata {
                name: "Minimum Reinforcement",
                description: "Lower bound on tension steel for a rectangular section",
                formula_tex: r"A_{s,min} = \frac{0.7 \sqrt{f'_c}}{f_y} b d",
                formula_plain: "As_min = 0.7 sqrt(f'c)/fy * b * d",
                reference: CodeReference::NTE060 { section: "10.5" },
                variables: vec![
                    Variable::new("As_min", "Minimum steel area", "cm²"),
                ],
                assumptions: vec![],
                category: EquationCategory::ReinforcementLimits,
            },

            Equation::MaximumSteelArea => EquationMetadata {
                name: "Maximum Reinforcement",
                description: "Upper bound on tension steel, 75% of the balanced ratio",
                formula_tex: r"A_{s,max} = 0.75 \left( \frac{0.85 f'_c \beta_1}{f_y} \cdot \frac{6000}{6000 + f_y} \right) b d",
                formula_plain: "As_max = 0.75 * (0.85 f'c beta1/fy) * (6000/(6000+fy)) * b * d",
                reference: CodeReference::NTE060 { section: "10.3" },
                variables: vec![
                    Variable::new("As_max", "Maximum steel area", "cm²"),
                ],
                assumptions: vec![],
                category: EquationCategory::ReinforcementLimits,
            },

            Equation::EffectiveDepthLayered => EquationMetadata {
                name: "Layered Effective Depth",
                description: "Area-weighted effective depth over up to four rebar layers",
                formula_tex: r"d = \frac{\sum_k d_k A_{s,k}}{\sum_k A_{s,k}}, \quad d_1 = h - r - d_e - d_{b1}/2",
                formula_plain: "d = sum(d_k As_k)/sum(As_k); d1 = h - r - de - db1/2; 2.5 cm between layers",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("h", "Section height", "cm"),
                    Variable::new("r", "Clear cover", "cm"),
                    Variable::new("de", "Stirrup diameter", "cm"),
                    Variable::new("db_k", "Layer-k governing bar diameter", "cm"),
                ],
                assumptions: vec![
                    "Each layer is represented by its largest bar group",
                    "Layer 4 sits a fixed 3 cm below layer 3",
                ],
                category: EquationCategory::SectionGeometry,
            },

            Equation::ConcreteShearCapacity => EquationMetadata {
                name: "Concrete Shear Capacity",
                description: "Shear carried by the concrete section alone",
                formula_tex: r"V_c = 0.53 \sqrt{f'_c} \, b \, d",
                formula_plain: "Vc = 0.53 sqrt(f'c) b d",
                reference: CodeReference::NTE060 { section: "11.3" },
                variables: vec![
                    Variable::new("Vc", "Concrete shear capacity", "kg"),
                ],
                assumptions: vec!["Normal-weight concrete, no axial load"],
                category: EquationCategory::ShearCapacity,
            },

            Equation::RequiredStirrupSpacing => EquationMetadata {
                name: "Required Stirrup Spacing",
                description: "Spacing that supplies the steel shear the demand requires",
                formula_tex: r"S = \frac{A_v f_y d}{V_s}, \quad V_s = \frac{V_u}{\phi} - V_c",
                formula_plain: "S = Av fy d / Vs, Vs = Vu/phi - Vc",
                reference: CodeReference::NTE060 { section: "11.5" },
                variables: vec![
                    Variable::new("Av", "Stirrup area crossing the plane", "cm²"),
                    Variable::new("Vs", "Steel shear demand", "kg"),
                    Variable::new("Vu", "Factored shear", "kg"),
                ],
                assumptions: vec!["Vs clamped at zero when Vu <= phi Vc"],
                category: EquationCategory::StirrupLayout,
            },

            Equation::ConfinementSpacingCap => EquationMetadata {
                name: "Confinement Zone Spacing Cap",
                description: "Maximum stirrup spacing allowed near the supports",
                formula_tex: r"S \leq \min(d/4,\; 10 d_b,\; 24 d_e,\; 30)",
                formula_plain: "S <= min(d/4, 10 db_long, 24 db_stirrup, 30 cm)",
                reference: CodeReference::NTE060 { section: "21.4.4" },
                variables: vec![
                    Variable::new("db", "Longitudinal bar diameter", "cm"),
                    Variable::new("de", "Stirrup diameter", "cm"),
                ],
                assumptions: vec![],
                category: EquationCategory::StirrupLayout,
            },

            Equation::CentralSpacingCap => EquationMetadata {
                name: "Central Zone Spacing Cap",
                description: "Maximum stirrup spacing outside the confinement zones",
                formula_tex: r"S \leq \min(d/2,\; 30)",
                formula_plain: "S <= min(d/2, 30 cm)",
                reference: CodeReference::NTE060 { section: "11.5.5" },
                variables: vec![],
                assumptions: vec![],
                category: EquationCategory::StirrupLayout,
            },

            Equation::ConfinementLength => EquationMetadata {
                name: "Confinement Zone Length",
                description: "Length of the confined zone at each support",
                formula_tex: r"L_o = 2h \;(\text{Dual 1}), \quad L_o = 2d \;(\text{Dual 2})",
                formula_plain: "Lo = 2h (Dual 1) or 2d (Dual 2)",
                reference: CodeReference::NTE060 { section: "21.4.4" },
                variables: vec![
                    Variable::new("Lo", "Confinement zone length", "cm"),
                ],
                assumptions: vec![],
                category: EquationCategory::StirrupLayout,
            },

            Equation::CentralZoneLength => EquationMetadata {
                name: "Central Zone Length",
                description: "Span length left between the confinement zones",
                formula_tex: r"L_c = L_n - 2 L_o \;(\text{supported}), \quad L_c = L_n - L_o \;(\text{cantilever})",
                formula_plain: "Lc = Ln - 2 Lo (supported) or Ln - Lo (cantilever), clamped at 0",
                reference: CodeReference::NTE060 { section: "21.4.4" },
                variables: vec![
                    Variable::new("Ln", "Clear span", "cm"),
                ],
                assumptions: vec!["Cantilevers confine the support end only"],
                category: EquationCategory::StirrupLayout,
            },

            Equation::StirrupCount => EquationMetadata {
                name: "Stirrup Count",
                description: "Whole stirrup count per zone and resulting real spacing",
                formula_tex: r"n = \lceil L / S \rceil, \quad S_{real} = L / n",
                formula_plain: "n = ceil(L/S), S_real = L/n",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("L", "Zone length", "cm"),
                    Variable::new("S", "Design spacing", "cm"),
                ],
                assumptions: vec!["Zero-length zones place zero stirrups"],
                category: EquationCategory::StirrupLayout,
            },
        }
    }
}

/// All registered equations in appendix order.
pub const ALL_EQUATIONS: [Equation; 14] = [
    Equation::MomentFaceFloor,
    Equation::MomentGlobalFloor,
    Equation::EffectiveDepthLayered,
    Equation::RequiredSteelArea,
    Equation::Beta1,
    Equation::MinimumSteelArea,
    Equation::MaximumSteelArea,
    Equation::ConcreteShearCapacity,
    Equation::RequiredStirrupSpacing,
    Equation::ConfinementSpacingCap,
    Equation::CentralSpacingCap,
    Equation::ConfinementLength,
    Equation::CentralZoneLength,
    Equation::StirrupCount,
];

/// Equations used by a flexure calculation.
pub fn flexure_equations() -> Vec<Equation> {
    vec![
        Equation::EffectiveDepthLayered,
        Equation::RequiredSteelArea,
        Equation::Beta1,
        Equation::MinimumSteelArea,
        Equation::MaximumSteelArea,
    ]
}

/// Equations used by a shear calculation.
pub fn shear_equations() -> Vec<Equation> {
    vec![
        Equation::ConcreteShearCapacity,
        Equation::RequiredStirrupSpacing,
        Equation::ConfinementSpacingCap,
        Equation::CentralSpacingCap,
        Equation::ConfinementLength,
        Equation::CentralZoneLength,
        Equation::StirrupCount,
    ]
}

/// Generate a markdown appendix of all equations, grouped by category.
///
/// Intended for documentation and report audit trails.
pub fn generate_equations_markdown() -> String {
    let mut equations: Vec<Equation> = ALL_EQUATIONS.to_vec();
    equations.sort_by_key(|e| e.metadata().category.sort_order());

    let mut out = String::from("# Design Equations\n");
    let mut current: Option<EquationCategory> = None;
    for equation in equations {
        let meta = equation.metadata();
        if current != Some(meta.category) {
            out.push_str(&format!("\n## {}\n\n", meta.category.display_name()));
            current = Some(meta.category);
        }
        out.push_str(&format!("### {}\n\n", meta.name));
        out.push_str(&format!("{}\n\n", meta.description));
        out.push_str(&format!("```\n{}\n```\n\n", meta.formula_plain));
        out.push_str(&format!("Reference: {}\n\n", meta.reference.citation()));
        if !meta.variables.is_empty() {
            for v in &meta.variables {
                out.push_str(&format!("- `{}` - {} ({})\n", v.symbol, v.description, v.units));
            }
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_equation_has_metadata() {
        for equation in ALL_EQUATIONS {
            let meta = equation.metadata();
            assert!(!meta.name.is_empty());
            assert!(!meta.formula_plain.is_empty());
            assert!(!meta.formula_tex.is_empty());
        }
    }

    #[test]
    fn test_citations() {
        let meta = Equation::ConcreteShearCapacity.metadata();
        assert_eq!(meta.reference.citation(), "NTP E.060 Art. 11.3");
        assert_eq!(meta.reference.short_form(), "E.060");
    }

    #[test]
    fn test_calculation_equation_lists() {
        assert!(flexure_equations().contains(&Equation::RequiredSteelArea));
        assert!(shear_equations().contains(&Equation::ConcreteShearCapacity));
        // The shear list never references the flexure quadratic
        assert!(!shear_equations().contains(&Equation::RequiredSteelArea));
    }

    #[test]
    fn test_markdown_appendix() {
        let md = generate_equations_markdown();
        assert!(md.contains("# Design Equations"));
        assert!(md.contains("## Stirrup Layout"));
        assert!(md.contains("Vc = 0.53 sqrt(f'c) b d"));
    }
}
