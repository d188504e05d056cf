//! # Materials Database
//!
//! Material definitions for reinforced-concrete beam design.
//!
//! ## Contents
//!
//! - [`rebar`] - Fixed rebar catalog (designation, area, diameter)
//!
//! Concrete and steel strengths (f'c, fy) are plain stress values carried on
//! the beam section rather than a material database entry: NTP E.060 design
//! only needs the two scalars.
//!
//! ## Example
//!
//! ```rust
//! use viga_core::materials::BarSize;
//!
//! let stirrup = BarSize::In3_8;
//! println!("{} = {} cm2", stirrup, stirrup.area_cm2());
//! ```

pub mod rebar;

pub use rebar::BarSize;
