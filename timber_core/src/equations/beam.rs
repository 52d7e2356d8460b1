//! # Beam Formulas
//!
//! Closed-form elementary load cases used by the analysis and deflection
//! engines. Every function is unit-agnostic: pass consistent units (the
//! engines use kN/m/kNm for actions and N/mm/MPa for deflections).
//!
//! ## Notation
//!
//! - `L` = simple span, `ℓ` (`ell`) = back span of an overhanging beam
//! - `a` = load position from the left support, or overhang length
//! - `x1` = point load position on the overhang, measured from the interior support
//! - `P` = point load, `w` = uniform load intensity
//! - `E` = modulus of elasticity, `I` = second moment of area
//!
//! ## Sign Conventions
//!
//! - Loads: positive downward
//! - Reactions: positive upward (a negative R1 is uplift)
//! - Sagging moment positive; hogging moments are returned as positive magnitudes
//! - Deflection: positive downward, except the `*_upward_*` functions which
//!   return the magnitude of an upward movement
//!
//! ## Overhanging Beam Geometry
//!
//! ```text
//!   R1 ──────── ℓ ──────── R2 ──── a ──── free end
//!   △                      △
//!   |<──────── total span = ℓ + a ─────────>|
//! ```
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1
//! - AISC Steel Construction Manual, Beam Diagrams and Formulas, Cases 1, 7, 24, 26

// =============================================================================
// SIMPLY SUPPORTED - UNIFORM LOAD
// =============================================================================

/// Reactions for a uniform load w over the full span L
///
/// # Formula
/// R1 = R2 = wL/2
#[inline]
pub fn uniform_load_reactions(w: f64, l: f64) -> (f64, f64) {
    let r = w * l / 2.0;
    (r, r)
}

/// Maximum (midspan) moment for a uniform load
///
/// # Formula
/// M_max = wL²/8
///
/// # Example
/// ```rust
/// use timber_core::equations::beam::uniform_load_max_moment;
///
/// // 5 kN/m over 4 m
/// assert_eq!(uniform_load_max_moment(5.0, 4.0), 10.0);
/// ```
#[inline]
pub fn uniform_load_max_moment(w: f64, l: f64) -> f64 {
    w * l * l / 8.0
}

/// Maximum (midspan) deflection for a uniform load
///
/// # Formula
/// δ_max = 5wL⁴/(384EI)
#[inline]
pub fn uniform_load_max_deflection(w: f64, l: f64, e: f64, i: f64) -> f64 {
    5.0 * w * l.powi(4) / (384.0 * e * i)
}

// =============================================================================
// SIMPLY SUPPORTED - POINT LOAD
// =============================================================================

/// Reactions for point load P at distance a from the left support
///
/// ```text
///        P
///        ↓
///    ────┬────────────
///    △   a            △
///   R1  ←───────L────→ R2
/// ```
///
/// # Formulas
/// - R1 = P(L-a)/L
/// - R2 = Pa/L
#[inline]
pub fn point_load_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    let r1 = p * (l - a) / l;
    let r2 = p * a / l;
    (r1, r2)
}

/// Moment under a point load (its own peak)
///
/// # Formula
/// M = Pa(L-a)/L
#[inline]
pub fn point_load_max_moment(p: f64, a: f64, l: f64) -> f64 {
    p * a * (l - a) / l
}

/// Midspan deflection for a point load at distance a from the left support
///
/// # Formula
/// δ_mid = Pb(3L² - 4b²)/(48EI), with b = min(a, L-a)
///
/// Using the shorter distance makes the result symmetric under a ↔ L-a.
/// For a load at midspan this reduces to PL³/(48EI).
#[inline]
pub fn point_load_midspan_deflection(p: f64, a: f64, l: f64, e: f64, i: f64) -> f64 {
    let b = a.min(l - a);
    p * b * (3.0 * l * l - 4.0 * b * b) / (48.0 * e * i)
}

// =============================================================================
// OVERHANGING BEAM - UNIFORM LOAD ON THE OVERHANG
// =============================================================================

/// Reactions for a uniform load w on the overhang only
///
/// # Formulas
/// - R1 = -wa²/(2ℓ)   (uplift)
/// - R2 = wa(2ℓ + a)/(2ℓ)
#[inline]
pub fn overhang_uniform_reactions(w: f64, a: f64, ell: f64) -> (f64, f64) {
    let r1 = -w * a * a / (2.0 * ell);
    let r2 = w * a * (2.0 * ell + a) / (2.0 * ell);
    (r1, r2)
}

/// Hogging moment at R2 for a uniform load on the overhang
///
/// # Formula
/// M_hog = wa²/2
#[inline]
pub fn overhang_uniform_hogging_moment(w: f64, a: f64) -> f64 {
    w * a * a / 2.0
}

/// Peak upward deflection between supports for a uniform load on the overhang
///
/// # Formula
/// δ = wa²ℓ²/(18√3·EI), at x = ℓ/√3 from R1
#[inline]
pub fn overhang_uniform_upward_deflection_between(w: f64, a: f64, ell: f64, e: f64, i: f64) -> f64 {
    w * a * a * ell * ell / (18.0 * 3.0_f64.sqrt() * e * i)
}

/// Free-end deflection for a uniform load on the overhang
///
/// # Formula
/// δ_tip = wa³(4ℓ + 3a)/(24EI)
#[inline]
pub fn overhang_uniform_tip_deflection(w: f64, a: f64, ell: f64, e: f64, i: f64) -> f64 {
    w * a.powi(3) * (4.0 * ell + 3.0 * a) / (24.0 * e * i)
}

// =============================================================================
// OVERHANGING BEAM - POINT LOAD ON THE OVERHANG
// =============================================================================

/// Reactions for point load P on the overhang at x1 from R2
///
/// # Formulas
/// - R1 = -P·x1/ℓ   (uplift)
/// - R2 = P(ℓ + x1)/ℓ
#[inline]
pub fn overhang_point_reactions(p: f64, x1: f64, ell: f64) -> (f64, f64) {
    let r1 = -p * x1 / ell;
    let r2 = p * (ell + x1) / ell;
    (r1, r2)
}

/// Hogging moment at R2 for a point load on the overhang
///
/// # Formula
/// M_hog = P·x1
#[inline]
pub fn overhang_point_hogging_moment(p: f64, x1: f64) -> f64 {
    p * x1
}

/// Peak upward deflection between supports for a point load on the overhang
///
/// # Formula
/// δ = P·x1·ℓ²/(9√3·EI), at x = ℓ/√3 from R1
#[inline]
pub fn overhang_point_upward_deflection_between(p: f64, x1: f64, ell: f64, e: f64, i: f64) -> f64 {
    p * x1 * ell * ell / (9.0 * 3.0_f64.sqrt() * e * i)
}

/// Free-end deflection for a point load on the overhang
///
/// # Formula
/// δ_tip = P·x1²(ℓ + x1)/(3EI)
///
/// Exact when the load sits at the free end (x1 = a). For loads inboard of the
/// tip the deflection at the load point is used, which understates the tip
/// rotation contribution over the remaining length a - x1.
#[inline]
pub fn overhang_point_tip_deflection(p: f64, x1: f64, ell: f64, e: f64, i: f64) -> f64 {
    p * x1 * x1 * (ell + x1) / (3.0 * e * i)
}

// =============================================================================
// OVERHANGING BEAM - COMBINED SAGGING BETWEEN SUPPORTS
// =============================================================================

/// Maximum sagging moment between the supports of an overhanging beam
///
/// The moment between supports is M(x) = R1·x - w·x²/2 where `r1` is the
/// combined left reaction from every uniform load and `w` the back-span rate.
/// The peak is at the point of zero shear x0 = R1/w when that falls strictly
/// inside the back span; otherwise the value at x = ℓ is used. The result is
/// never negative.
///
/// With no back-span load and a positive R1 the diagram is linear and peaks at
/// R2, giving R1·ℓ.
pub fn back_span_sagging_moment(r1: f64, w: f64, ell: f64) -> f64 {
    if w > 0.0 {
        let x0 = r1 / w;
        if x0 > 0.0 && x0 < ell {
            (r1 * x0 - w * x0 * x0 / 2.0).max(0.0)
        } else {
            (r1 * ell - w * ell * ell / 2.0).max(0.0)
        }
    } else if r1 > 0.0 {
        r1 * ell
    } else {
        0.0
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
