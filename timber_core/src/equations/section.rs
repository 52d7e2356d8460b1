//! # Cross-Section Property Formulas
//!
//! Geometric properties of solid rectangular timber sections bending about the
//! major axis. Inputs in mm give outputs in mm², mm³ and mm⁴.
//!
//! ## Notation
//!
//! - `b` = breadth of section (perpendicular to bending)
//! - `d` = depth of section (parallel to bending)
//! - `A` = area, `Z` = section modulus, `I` = second moment of area
//! - `As` = effective shear area, `Ap` = bearing area
//!
//! ## References
//!
//! - NZS AS 1720.1:2022 Section 3.2
//! - Roark's Formulas for Stress and Strain, 8th Edition, Chapter 3

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// =============================================================================

/// Cross-sectional area of a rectangle
///
/// ```text
///     ┌─────────┐
///     │         │
///   d │         │
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// A = b × d
///
/// # Example
/// ```rust
/// use timber_core::equations::section::rectangular_area;
///
/// let area = rectangular_area(90.0, 240.0);
/// assert_eq!(area, 21_600.0);
/// ```
#[inline]
pub fn rectangular_area(b: f64, d: f64) -> f64 {
    b * d
}

/// Second moment of area about the major (x) axis
///
/// # Formula
/// Ix = bd³/12
///
/// # Example
/// ```rust
/// use timber_core::equations::section::rectangular_moment_of_inertia;
///
/// // 90 x 240: Ix = 90 × 240³ / 12 = 103.68 × 10⁶ mm⁴
/// let ix = rectangular_moment_of_inertia(90.0, 240.0);
/// assert!((ix - 103.68e6).abs() < 1.0);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, d: f64) -> f64 {
    b * d.powi(3) / 12.0
}

/// Elastic section modulus about the major axis
///
/// # Formula
/// Zx = I/(d/2) = bd²/6
///
/// # Example
/// ```rust
/// use timber_core::equations::section::rectangular_section_modulus;
///
/// let zx = rectangular_section_modulus(90.0, 240.0);
/// assert!((zx - 864_000.0).abs() < 1e-6);
/// ```
#[inline]
pub fn rectangular_section_modulus(b: f64, d: f64) -> f64 {
    b * d.powi(2) / 6.0
}

/// Effective shear area used by AS 1720.1 Eq. 3.2(14)
///
/// # Formula
/// As = 2bd/3
///
/// Peak shear stress in a rectangle is 1.5 × V/A, so V = fs × (2/3)A.
#[inline]
pub fn rectangular_shear_area(b: f64, d: f64) -> f64 {
    2.0 * b * d / 3.0
}

/// Bearing area under a support of the given length
///
/// # Formula
/// Ap = bearing length × b
#[inline]
pub fn bearing_area(bearing_length: f64, b: f64) -> f64 {
    bearing_length * b
}

// =============================================================================
// UNIT TESTS
// =============================================================================
