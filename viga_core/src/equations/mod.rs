//! # Design Equations
//!
//! Fundamental design formulas used by the calculations, kept in one place so
//! they can be verified against the code references and documented once.
//!
//! ## Modules
//!
//! - [`flexure`] - Required steel area, β1, reinforcement limits
//! - [`shear`] - Concrete shear capacity and spacing caps
//! - [`registry`] - Equation metadata for report appendix generation
//!
//! ## Sign Conventions
//!
//! - **Negative moments**: top-fiber tension at supports, stored negative
//! - **Positive moments**: bottom-fiber tension, stored positive
//! - Formulas operate on magnitudes; sign handling stays in the calculations
//!
//! ## References
//!
//! - NTP E.060: Concreto Armado
//! - ACI 318: Building Code Requirements for Structural Concrete

pub mod flexure;
pub mod registry;
pub mod shear;

// Re-export commonly used items
pub use flexure::{beta1, required_steel_area, steel_area_limits};
pub use shear::{central_spacing_cap, concrete_shear_capacity, confinement_spacing_cap};
pub use registry::{
    flexure_equations, generate_equations_markdown, shear_equations, CodeReference, Equation,
    EquationCategory, EquationMetadata, Variable, ALL_EQUATIONS,
};
