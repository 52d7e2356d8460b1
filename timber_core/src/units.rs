//! # Unit Types
//!
//! Lightweight newtype wrappers for the SI units used by the design engine.
//! Public input and result structs keep plain `f64` fields with the unit in the
//! field name (`span_m`, `depth_mm`); these wrappers are used at the points
//! where the engine converts between the "user" units and the consistent
//! N/mm/MPa system used by capacity and deflection formulas.
//!
//! ## Unit System
//!
//! - Length: metres (spans), millimetres (sections, deflections)
//! - Force: kilonewtons (actions), newtons (formula internals)
//! - Moment: kilonewton-metres (actions), newton-millimetres (capacities)
//! - Distributed load: kN/m, which is numerically equal to N/mm
//! - Stress and modulus: MPa (N/mm²)
//!
//! ## Example
//!
//! ```rust
//! use timber_core::units::{Metres, Millimetres, NewtonMillimetres, KilonewtonMetres};
//!
//! let span = Metres(4.0);
//! let span_mm: Millimetres = span.into();
//! assert_eq!(span_mm.0, 4000.0);
//!
//! let capacity: KilonewtonMetres = NewtonMillimetres(9_676_800.0).into();
//! assert!((capacity.0 - 9.6768).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metres(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimetres(pub f64);

impl From<Metres> for Millimetres {
    fn from(m: Metres) -> Self {
        Millimetres(m.0 * 1000.0)
    }
}

impl From<Millimetres> for Metres {
    fn from(mm: Millimetres) -> Self {
        Metres(mm.0 / 1000.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

impl From<Newtons> for Kilonewtons {
    fn from(n: Newtons) -> Self {
        Kilonewtons(n.0 / 1000.0)
    }
}

impl From<Kilonewtons> for Newtons {
    fn from(kn: Kilonewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in newton-millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimetres(pub f64);

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonMetres(pub f64);

impl From<NewtonMillimetres> for KilonewtonMetres {
    fn from(nmm: NewtonMillimetres) -> Self {
        KilonewtonMetres(nmm.0 / 1e6)
    }
}

impl From<KilonewtonMetres> for NewtonMillimetres {
    fn from(knm: KilonewtonMetres) -> Self {
        NewtonMillimetres(knm.0 * 1e6)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Metres);
impl_arithmetic!(Millimetres);
impl_arithmetic!(Newtons);
impl_arithmetic!(Kilonewtons);
impl_arithmetic!(NewtonMillimetres);
impl_arithmetic!(KilonewtonMetres);

/// Convert a span in metres to millimetres
#[inline]
pub fn m_to_mm(m: f64) -> f64 {
    Millimetres::from(Metres(m)).value()
}

/// Convert a force in kilonewtons to newtons
#[inline]
pub fn kn_to_n(kn: f64) -> f64 {
    Newtons::from(Kilonewtons(kn)).value()
}
