//! # viga_core - Reinforced-Concrete Beam Design Engine
//!
//! `viga_core` is the computational heart of VigApp, implementing the
//! flexural and shear design of reinforced-concrete beams per the Peruvian
//! code NTP E.060 with a clean, LLM-friendly API. All inputs and outputs are
//! JSON-serializable, making it ideal for integration with AI assistants via
//! MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Report-Agnostic**: The engine exposes labeled numeric data; HTML/PDF
//!   rendering lives in external collaborators
//!
//! ## Quick Start
//!
//! ```rust
//! use viga_core::calculations::moment_correction::{correct_moments, MomentSet, StructuralSystem};
//!
//! // Envelope moments at the three control points (T·m)
//! let raw = MomentSet::new([-10.0, -20.0, -15.0], [5.0, 2.0, 3.0]);
//! let corrected = correct_moments(&raw, StructuralSystem::Dual2);
//! assert_eq!(corrected.positive, [5.0, 5.0, 7.5]);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Moment correction, flexural steel, stirrup layout
//! - [`equations`] - Design formulas and their metadata registry
//! - [`materials`] - Rebar catalog
//! - [`section`] - Beam section geometry and strengths
//! - [`report`] - Labeled values for external report renderers
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod report;
pub mod section;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    correct_moments, BeamSupport, CalculationItem, FlexureInput, FlexureResult, MomentSet,
    ShearInput, ShearResult, StructuralSystem,
};
pub use errors::{CalcError, CalcResult};
pub use materials::BarSize;
pub use section::BeamSection;
