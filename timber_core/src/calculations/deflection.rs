//! # Deflection Engine
//!
//! Elastic deflections by superposition of closed-form load cases, in mm.
//! Line loads in kN/m are numerically equal to N/mm, so only spans and point
//! loads need converting.
//!
//! ## Long-term deflection (AS 1720.1 Cl 2.4.5.2)
//!
//! ```text
//! δ_LT = k2·δ(G) + δ(ψl·Q)
//! ```
//!
//! Creep (k2) applies to the permanent load only. Point loads are entered as
//! a single SLS value, so they are placed in the ψl·Q term. When a span has no
//! G / ψl·Q split the whole SLS long-term load is factored by k2 instead.
//!
//! Degenerate geometry or stiffness (L, E or I ≤ 0) gives zero deflection.

use serde::{Deserialize, Serialize};

use crate::equations::{
    overhang_point_tip_deflection, overhang_point_upward_deflection_between, overhang_uniform_tip_deflection,
    overhang_uniform_upward_deflection_between, point_load_midspan_deflection, uniform_load_max_deflection,
};
use crate::loads::{OverhangPointLoad, PointLoad};
use crate::units::{kn_to_n, m_to_mm};

use super::overhanging::OverhangingActions;
use super::simply_supported::SimplySupportedActions;

/// Flexural stiffness inputs E (MPa) and I (mm⁴)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stiffness {
    /// Modulus of elasticity (MPa)
    pub e_mpa: f64,
    /// Second moment of area (mm⁴)
    pub i_mm4: f64,
}

impl Stiffness {
    /// Create from E and I
    pub fn new(e_mpa: f64, i_mm4: f64) -> Self {
        Stiffness { e_mpa, i_mm4 }
    }

    fn is_degenerate(&self, length_mm: f64) -> bool {
        length_mm <= 0.0 || self.e_mpa <= 0.0 || self.i_mm4 <= 0.0
    }
}

// =============================================================================
// SIMPLY SUPPORTED
// =============================================================================

/// Midspan deflection under a UDL (mm)
pub fn simple_udl(w_kn_m: f64, span_m: f64, s: Stiffness) -> f64 {
    let l = m_to_mm(span_m);
    if s.is_degenerate(l) {
        return 0.0;
    }
    uniform_load_max_deflection(w_kn_m, l, s.e_mpa, s.i_mm4)
}

/// Midspan deflection under a point load at `a_m` from the left support (mm)
pub fn simple_point(p_kn: f64, a_m: f64, span_m: f64, s: Stiffness) -> f64 {
    let l = m_to_mm(span_m);
    if s.is_degenerate(l) {
        return 0.0;
    }
    point_load_midspan_deflection(kn_to_n(p_kn), m_to_mm(a_m), l, s.e_mpa, s.i_mm4)
}

/// UDL plus point loads (at their SLS magnitude) on a simple span (mm)
pub fn simple_total(w_kn_m: f64, span_m: f64, s: Stiffness, point_loads: &[PointLoad]) -> f64 {
    simple_udl(w_kn_m, span_m, s)
        + point_loads
            .iter()
            .map(|pl| simple_point(pl.p_sls_kn, pl.a_m, span_m, s))
            .sum::<f64>()
}

// =============================================================================
// OVERHANGING
// =============================================================================

/// Net downward deflection between supports of an overhanging beam (mm).
///
/// Back-span loads deflect the span down and overhang loads lift it; the net
/// is clamped at zero.
pub fn overhang_between_total(
    w_back: f64,
    w_cant: f64,
    back_span_m: f64,
    cantilever_m: f64,
    s: Stiffness,
    back_point_loads: &[PointLoad],
    cant_point_loads: &[OverhangPointLoad],
) -> f64 {
    let ell = m_to_mm(back_span_m);
    let a = m_to_mm(cantilever_m);
    if s.is_degenerate(ell) {
        return 0.0;
    }

    let mut d = simple_total(w_back, back_span_m, s, back_point_loads);
    if a > 0.0 {
        d -= overhang_uniform_upward_deflection_between(w_cant, a, ell, s.e_mpa, s.i_mm4);
    }
    for pl in cant_point_loads.iter().filter(|pl| pl.x_m > 0.0) {
        d -= overhang_point_upward_deflection_between(kn_to_n(pl.p_sls_kn), m_to_mm(pl.x_m), ell, s.e_mpa, s.i_mm4);
    }
    d.max(0.0)
}

/// Free-end deflection of the overhang (mm).
///
/// Only overhang loads contribute; back-span loads lift the tip and are
/// ignored.
pub fn overhang_tip_total(
    w_cant: f64,
    cantilever_m: f64,
    back_span_m: f64,
    s: Stiffness,
    cant_point_loads: &[OverhangPointLoad],
) -> f64 {
    let ell = m_to_mm(back_span_m);
    let a = m_to_mm(cantilever_m);
    if s.is_degenerate(ell) {
        return 0.0;
    }

    let mut d = 0.0;
    if a > 0.0 {
        d += overhang_uniform_tip_deflection(w_cant, a, ell, s.e_mpa, s.i_mm4);
    }
    for pl in cant_point_loads.iter().filter(|pl| pl.x_m > 0.0) {
        d += overhang_point_tip_deflection(kn_to_n(pl.p_sls_kn), m_to_mm(pl.x_m), ell, s.e_mpa, s.i_mm4);
    }
    d
}

// =============================================================================
// SHORT / LONG TERM
// =============================================================================

/// Short- and long-term deflection at one location (mm)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DeflectionPair {
    /// Elastic deflection under G + ψs·Q
    pub short_mm: f64,
    /// Creep-adjusted deflection
    pub long_mm: f64,
}

/// Midspan deflections of a simply-supported beam.
pub fn simply_supported_deflections(actions: &SimplySupportedActions, s: Stiffness, k2: f64) -> DeflectionPair {
    let udl = &actions.udl;
    let span = actions.span_m;
    let pls = actions.point_loads.as_slice();

    let short_mm = simple_total(udl.sls_short, span, s, pls);
    let long_mm = if udl.has_breakdown() {
        k2 * simple_total(udl.dead, span, s, &[]) + simple_total(udl.long_term_live, span, s, pls)
    } else {
        k2 * simple_total(udl.sls_long, span, s, pls)
    };
    DeflectionPair { short_mm, long_mm }
}

/// Deflections of an overhanging beam
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OverhangDeflections {
    /// Between the supports
    pub back_span: DeflectionPair,
    /// At the free end
    pub tip: DeflectionPair,
}

/// Back-span and tip deflections of an overhanging beam.
pub fn overhanging_deflections(actions: &OverhangingActions, s: Stiffness, k2: f64) -> OverhangDeflections {
    let ell = actions.back_span_m;
    let a = actions.cantilever_m;
    let back = &actions.back_udl;
    let cant = &actions.cant_udl;
    let back_pls = actions.back_point_loads.as_slice();
    let cant_pls = actions.cant_point_loads.as_slice();

    let no_back: &[PointLoad] = &[];
    let no_cant: &[OverhangPointLoad] = &[];
    let between = |w_back: f64, w_cant: f64, with_points: bool| {
        let (bp, cp) = if with_points { (back_pls, cant_pls) } else { (no_back, no_cant) };
        overhang_between_total(w_back, w_cant, ell, a, s, bp, cp)
    };
    let tip = |w_cant: f64, with_points: bool| {
        let cp = if with_points { cant_pls } else { no_cant };
        overhang_tip_total(w_cant, a, ell, s, cp)
    };

    let back_short = between(back.sls_short, cant.sls_short, true);
    let back_long = if back.has_breakdown() || cant.has_breakdown() {
        k2 * between(back.dead, cant.dead, false) + between(back.long_term_live, cant.long_term_live, true)
    } else {
        k2 * between(back.sls_long, cant.sls_long, true)
    };

    let tip_short = tip(cant.sls_short, true);
    let tip_long = if cant.has_breakdown() {
        k2 * tip(cant.dead, false) + tip(cant.long_term_live, true)
    } else {
        k2 * tip(cant.sls_long, true)
    };

    OverhangDeflections {
        back_span: DeflectionPair { short_mm: back_short, long_mm: back_long },
        tip: DeflectionPair { short_mm: tip_short, long_mm: tip_long },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::overhanging::{analyse_overhanging, OverhangingInput};
    use crate::calculations::simply_supported::analyse_simply_supported;
    use crate::loads::SpanUdl;

    const E: f64 = 8000.0;
    // 90 x 240
    const I: f64 = 103_680_000.0;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    fn stiff() -> Stiffness {
        Stiffness::new(E, I)
    }

    #[test]
    fn test_simple_udl() {
        // 5 N/mm over 4000 mm
        let expected = 5.0 * 5.0 * 4000.0_f64.powi(4) / (384.0 * E * I);
        assert!(approx_eq(simple_udl(5.0, 4.0, stiff()), expected));
    }

    #[test]
    fn test_degenerate_inputs_give_zero() {
        assert_eq!(simple_udl(5.0, 0.0, stiff()), 0.0);
        assert_eq!(simple_udl(5.0, 4.0, Stiffness::new(0.0, I)), 0.0);
        assert_eq!(simple_point(5.0, 2.0, 4.0, Stiffness::new(E, 0.0)), 0.0);
        assert_eq!(overhang_tip_total(5.0, 1.0, 0.0, stiff(), &[]), 0.0);
        assert_eq!(overhang_between_total(5.0, 5.0, 3.0, 1.0, Stiffness::new(-1.0, I), &[], &[]), 0.0);
    }

    #[test]
    fn test_point_deflection_symmetric() {
        let left = simple_point(6.0, 1.0, 4.0, stiff());
        let right = simple_point(6.0, 3.0, 4.0, stiff());
        assert!(approx_eq(left, right));
    }

    #[test]
    fn test_simple_total_uses_sls_point_magnitude() {
        let pl = PointLoad::new(100.0, 5.0, 2.0);
        let total = simple_total(0.0, 4.0, stiff(), &[pl]);
        assert!(approx_eq(total, simple_point(5.0, 2.0, 4.0, stiff())));
    }

    #[test]
    fn test_between_supports_clamped_at_zero() {
        // Heavy overhang, no back-span load: net upward, reported as zero
        let d = overhang_between_total(0.0, 10.0, 3.0, 1.5, stiff(), &[], &[]);
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_between_supports_net() {
        let down = simple_udl(4.0, 3.0, stiff());
        let up = overhang_uniform_upward_deflection_between(1.0, 1000.0, 3000.0, E, I);
        let d = overhang_between_total(4.0, 1.0, 3.0, 1.0, stiff(), &[], &[]);
        assert!(approx_eq(d, down - up));
    }

    #[test]
    fn test_overhang_point_load_lifts_back_span() {
        let pl = OverhangPointLoad::new(9.0, 3.0, 0.8);
        let d = overhang_between_total(4.0, 0.0, 3.0, 1.0, stiff(), &[], &[pl]);
        // P·x1·ℓ²/(9√3·EI) with P = 3000 N, x1 = 800 mm, ℓ = 3000 mm
        let up = 3000.0 * 800.0 * 3000.0_f64.powi(2) / (9.0 * 3.0_f64.sqrt() * E * I);
        assert!(approx_eq(up, 1.670573695571834));
        assert!(approx_eq(d, simple_udl(4.0, 3.0, stiff()) - up));
        assert!(d < simple_udl(4.0, 3.0, stiff()));
    }

    #[test]
    fn test_tip_from_overhang_loads_only() {
        let d = overhang_tip_total(2.0, 1.0, 3.0, stiff(), &[OverhangPointLoad::new(9.0, 3.0, 1.0)]);
        let udl = 2.0 * 1000.0_f64.powi(3) * (4.0 * 3000.0 + 3.0 * 1000.0) / (24.0 * E * I);
        let point = 3000.0 * 1000.0_f64.powi(2) * (3000.0 + 1000.0) / (3.0 * E * I);
        assert!(approx_eq(d, udl + point));
    }

    fn ss_actions(udl: SpanUdl, point_loads: Vec<PointLoad>) -> SimplySupportedActions {
        analyse_simply_supported(4.0, udl, &point_loads).unwrap()
    }

    #[test]
    fn test_long_term_with_breakdown() {
        let udl = SpanUdl { uls: 6.0, sls_short: 4.1, sls_long: 3.2, dead: 2.0, long_term_live: 1.2 };
        let pl = PointLoad::new(3.0, 2.0, 1.0);
        let pair = simply_supported_deflections(&ss_actions(udl, vec![pl]), stiff(), 2.0);

        let expected_long = 2.0 * simple_udl(2.0, 4.0, stiff()) + simple_total(1.2, 4.0, stiff(), &[pl]);
        assert!(approx_eq(pair.long_mm, expected_long));
        assert!(approx_eq(pair.short_mm, simple_total(4.1, 4.0, stiff(), &[pl])));
    }

    #[test]
    fn test_long_term_fallback_without_breakdown() {
        let udl = SpanUdl { uls: 6.0, sls_short: 4.1, sls_long: 3.2, dead: 0.0, long_term_live: 0.0 };
        let pair = simply_supported_deflections(&ss_actions(udl, vec![]), stiff(), 2.0);
        assert!(!udl.has_breakdown());
        assert!(approx_eq(pair.long_mm, 2.0 * simple_udl(3.2, 4.0, stiff())));
    }

    #[test]
    fn test_overhang_tip_long_term_uses_cantilever_breakdown_only() {
        let input = OverhangingInput {
            total_span_m: 4.0,
            cantilever_m: 1.0,
            back_udl: SpanUdl { uls: 5.0, sls_short: 3.0, sls_long: 2.5, dead: 2.0, long_term_live: 0.5 },
            cant_udl: SpanUdl { uls: 3.0, sls_short: 2.0, sls_long: 1.5, dead: 0.0, long_term_live: 0.0 },
            ..Default::default()
        };
        let actions = analyse_overhanging(&input).unwrap();
        let d = overhanging_deflections(&actions, stiff(), 1.5);

        // Tip falls back to k2 × δ(SLS long) since the overhang has no split
        let expected_tip = 1.5 * overhang_tip_total(1.5, 1.0, 3.0, stiff(), &[]);
        assert!(approx_eq(d.tip.long_mm, expected_tip));

        // Back span uses the split because the back span has one
        let expected_back = 1.5 * overhang_between_total(2.0, 0.0, 3.0, 1.0, stiff(), &[], &[])
            + overhang_between_total(0.5, 0.0, 3.0, 1.0, stiff(), &[], &[]);
        assert!(approx_eq(d.back_span.long_mm, expected_back));
    }
}
