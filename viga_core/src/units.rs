//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - NTP E.060 design uses a small, consistent set of metric units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Metric Units (Primary)
//!
//! The engine follows the mixed MKS convention of NTP E.060 practice:
//! - Length: meters (m) for spans, centimeters (cm) for section geometry
//! - Force: tons (T = 1000 kg), kilograms (kg)
//! - Stress: kilograms per square centimeter (kg/cm²)
//! - Moment: ton-meters (T·m) at the interface, kg·cm inside the flexure formula
//! - Area: square centimeters (cm²)
//!
//! ## Example
//!
//! ```rust
//! use viga_core::units::{Meters, Centimeters, TonMeters, KilogramCentimeters};
//!
//! let span = Meters(6.0);
//! let span_cm: Centimeters = span.into();
//! assert_eq!(span_cm.0, 600.0);
//!
//! let mu = TonMeters(20.0);
//! let mu_kgcm: KilogramCentimeters = mu.into();
//! assert_eq!(mu_kgcm.0, 2_000_000.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters (clear spans)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimeters (section geometry, spacings)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in kilograms-force
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Force in metric tons (1 T = 1000 kg)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tons(pub f64);

impl From<Kilograms> for Tons {
    fn from(kg: Kilograms) -> Self {
        Tons(kg.0 / 1000.0)
    }
}

impl From<Tons> for Kilograms {
    fn from(t: Tons) -> Self {
        Kilograms(t.0 * 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in ton-meters (the interface unit for bending moments)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TonMeters(pub f64);

/// Moment in kilogram-centimeters (internal unit of the flexure formula)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilogramCentimeters(pub f64);

impl From<TonMeters> for KilogramCentimeters {
    fn from(tm: TonMeters) -> Self {
        // 1 T·m = 1000 kg * 100 cm
        KilogramCentimeters(tm.0 * 100_000.0)
    }
}

impl From<KilogramCentimeters> for TonMeters {
    fn from(kgcm: KilogramCentimeters) -> Self {
        TonMeters(kgcm.0 / 100_000.0)
    }
}

// ============================================================================
// Stress and Area Units
// ============================================================================

/// Stress in kilograms per square centimeter (f'c, fy)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerCm2(pub f64);

/// Area in square centimeters (steel areas)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cm2(pub f64);

// ============================================================================
// Arithmetic on same-unit values
// ============================================================================

macro_rules! impl_unit_ops {
    ($($t:ty),*) => {
        $(
            impl Add for $t {
                type Output = Self;
                fn add(self, rhs: Self) -> Self {
                    Self(self.0 + rhs.0)
                }
            }

            impl Sub for $t {
                type Output = Self;
                fn sub(self, rhs: Self) -> Self {
                    Self(self.0 - rhs.0)
                }
            }

            impl Mul<f64> for $t {
                type Output = Self;
                fn mul(self, rhs: f64) -> Self {
                    Self(self.0 * rhs)
                }
            }
        )*
    };
}

impl_unit_ops!(Meters, Centimeters, Kilograms, Tons, TonMeters, KilogramCentimeters, Cm2);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversion() {
        let span = Meters(6.0);
        let cm: Centimeters = span.into();
        assert_eq!(cm.0, 600.0);
        let back: Meters = cm.into();
        assert_eq!(back.0, 6.0);
    }

    #[test]
    fn test_force_conversion() {
        let v: Kilograms = Tons(11.52).into();
        assert!((v.0 - 11_520.0).abs() < 1e-9);
    }

    #[test]
    fn test_moment_conversion() {
        let mu: KilogramCentimeters = TonMeters(10.0).into();
        assert_eq!(mu.0, 1_000_000.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Centimeters(50.0) + Centimeters(10.0);
        assert_eq!(a.0, 60.0);
        let b = Tons(2.0) * 0.85;
        assert!((b.0 - 1.7).abs() < 1e-12);
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&TonMeters(12.5)).unwrap();
        assert_eq!(json, "12.5");
        let back: TonMeters = serde_json::from_str("12.5").unwrap();
        assert_eq!(back.0, 12.5);
    }
}
