//! # Overhanging Beam Analysis
//!
//! A beam on two supports with one end projecting past the interior support.
//!
//! ```text
//!   R1 ──────── ℓ ──────── R2 ──── a ──── free end
//!   △                      △
//!   |<──────── total span = ℓ + a ─────────>|
//! ```
//!
//! Actions are found by superposing four cases:
//!
//! - **A**: UDL on the back span (R1 to R2)
//! - **B**: UDL on the overhang (R2 to free end), which lifts R1
//! - **C**: point loads on the back span, measured from R1
//! - **D**: point loads on the overhang, measured from R2
//!
//! The UDL sagging moment uses the point of zero shear of the combined UDL
//! cases. Point-load sagging and hogging peaks are added on top of the UDL
//! values. A negative R1 means uplift and needs a hold-down connection.

use serde::{Deserialize, Serialize};

use crate::equations::{
    back_span_sagging_moment, overhang_point_hogging_moment, overhang_point_reactions, overhang_uniform_hogging_moment,
    overhang_uniform_reactions, point_load_max_moment, point_load_reactions, uniform_load_reactions,
};
use crate::errors::{CalcError, CalcResult};
use crate::loads::{OverhangPointLoad, PointLoad, SpanUdl};

/// Geometry and loading of an overhanging beam.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverhangingInput {
    /// Total length ℓ + a (m)
    pub total_span_m: f64,
    /// Overhang length a (m)
    pub cantilever_m: f64,
    /// Design UDL on the back span
    pub back_udl: SpanUdl,
    /// Design UDL on the overhang
    pub cant_udl: SpanUdl,
    /// Point loads between supports, measured from R1
    pub back_point_loads: Vec<PointLoad>,
    /// Point loads on the overhang, measured from R2
    pub cant_point_loads: Vec<OverhangPointLoad>,
}

impl OverhangingInput {
    /// Back span ℓ = total span - overhang (m)
    pub fn back_span_m(&self) -> f64 {
        self.total_span_m - self.cantilever_m
    }

    /// Check geometry and point-load positions.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.total_span_m.is_finite() && self.total_span_m > 0.0) {
            return Err(CalcError::invalid_input(
                "total_span_m",
                self.total_span_m.to_string(),
                "Total span must be positive",
            ));
        }
        if !(self.cantilever_m.is_finite() && self.cantilever_m > 0.0) {
            return Err(CalcError::invalid_input(
                "cantilever_m",
                self.cantilever_m.to_string(),
                "Overhang length must be positive",
            ));
        }
        let ell = self.back_span_m();
        if ell <= 0.0 {
            return Err(CalcError::invalid_geometry(
                self.total_span_m,
                self.cantilever_m,
                "Back span must be positive (overhang must be shorter than the total span)",
            ));
        }
        if let Some(pl) = self.back_point_loads.iter().find(|pl| !pl.is_valid(ell)) {
            return Err(CalcError::invalid_input(
                "point_loads",
                pl.a_m.to_string(),
                format!("Back-span point load must lie strictly between the supports (0 < a < {} m)", ell),
            ));
        }
        if let Some(pl) = self.cant_point_loads.iter().find(|pl| !pl.is_valid(self.cantilever_m)) {
            return Err(CalcError::invalid_input(
                "cantilever_point_loads",
                pl.x_m.to_string(),
                format!("Overhang point load must lie on the overhang (0 < x <= {} m)", self.cantilever_m),
            ));
        }
        Ok(())
    }
}

/// Internal actions for an overhanging beam (kN, kNm).
///
/// Hogging moments are positive magnitudes. R1 is signed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverhangingActions {
    /// Total length (m)
    pub total_span_m: f64,
    /// Back span ℓ (m)
    pub back_span_m: f64,
    /// Overhang a (m)
    pub cantilever_m: f64,
    /// Design UDL on the back span
    pub back_udl: SpanUdl,
    /// Design UDL on the overhang
    pub cant_udl: SpanUdl,
    /// Point loads between supports
    pub back_point_loads: Vec<PointLoad>,
    /// Point loads on the overhang
    pub cant_point_loads: Vec<OverhangPointLoad>,
    /// Peak sagging moment between supports (kNm)
    pub m_sagging: f64,
    /// Hogging moment at R2 (kNm)
    pub m_hogging: f64,
    /// Sagging from the UDLs alone (kNm)
    pub m_sagging_udl: f64,
    /// Hogging from the overhang UDL alone (kNm)
    pub m_hogging_udl: f64,
    /// Sagging from back-span point loads (kNm)
    pub m_sagging_point: f64,
    /// Hogging from overhang point loads (kNm)
    pub m_hogging_point: f64,
    /// Governing moment max(sagging, hogging) (kNm)
    pub m_star: f64,
    /// Design shear max(|R1|, |R2|) (kN)
    pub v_star: f64,
    /// Largest reaction magnitude (kN)
    pub r_max: f64,
    /// End support reaction, negative for uplift (kN)
    pub r1: f64,
    /// Interior support reaction (kN)
    pub r2: f64,
}

impl OverhangingActions {
    /// Whether the end support R1 is pulled upward
    pub fn has_uplift(&self) -> bool {
        self.r1 < 0.0
    }
}

/// Analyse an overhanging beam.
///
/// # Errors
///
/// - `InvalidGeometry` when the overhang is not shorter than the total span
/// - `InvalidInput` for non-positive lengths or point loads off their segment
pub fn analyse_overhanging(input: &OverhangingInput) -> CalcResult<OverhangingActions> {
    input.validate()?;

    let a = input.cantilever_m;
    let ell = input.back_span_m();
    let w_back = input.back_udl.uls;
    let w_cant = input.cant_udl.uls;

    // Case A
    let (r1_back, r2_back) = uniform_load_reactions(w_back, ell);
    // Case B
    let (r1_cant, r2_cant) = overhang_uniform_reactions(w_cant, a, ell);
    let m_hogging_udl = overhang_uniform_hogging_moment(w_cant, a);

    let r1_udl = r1_back + r1_cant;
    let r2_udl = r2_back + r2_cant;
    let m_sagging_udl = back_span_sagging_moment(r1_udl, w_back, ell);

    // Cases C and D
    let mut m_sagging_point = 0.0;
    let mut m_hogging_point = 0.0;
    let mut r1_point = 0.0;
    let mut r2_point = 0.0;
    for pl in &input.back_point_loads {
        m_sagging_point += point_load_max_moment(pl.p_uls_kn, pl.a_m, ell);
        let (r1, r2) = point_load_reactions(pl.p_uls_kn, pl.a_m, ell);
        r1_point += r1;
        r2_point += r2;
    }
    for pl in &input.cant_point_loads {
        m_hogging_point += overhang_point_hogging_moment(pl.p_uls_kn, pl.x_m);
        let (r1, r2) = overhang_point_reactions(pl.p_uls_kn, pl.x_m, ell);
        r1_point += r1;
        r2_point += r2;
    }

    let r1 = r1_udl + r1_point;
    let r2 = r2_udl + r2_point;
    let m_sagging = m_sagging_udl + m_sagging_point;
    let m_hogging = m_hogging_udl + m_hogging_point;
    let r_max = r1.abs().max(r2.abs());

    if r1 < 0.0 {
        tracing::warn!(r1_kn = r1, "R1 in uplift, hold-down connection required");
    }

    let actions = OverhangingActions {
        total_span_m: input.total_span_m,
        back_span_m: ell,
        cantilever_m: a,
        back_udl: input.back_udl,
        cant_udl: input.cant_udl,
        back_point_loads: input.back_point_loads.clone(),
        cant_point_loads: input.cant_point_loads.clone(),
        m_sagging,
        m_hogging,
        m_sagging_udl,
        m_hogging_udl,
        m_sagging_point,
        m_hogging_point,
        m_star: m_sagging.max(m_hogging),
        v_star: r_max,
        r_max,
        r1,
        r2,
    };
    tracing::debug!(
        back_span_m = ell,
        cantilever_m = a,
        m_sagging,
        m_hogging,
        r1,
        r2,
        "overhanging analysis"
    );
    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn uls(w: f64) -> SpanUdl {
        SpanUdl { uls: w, ..Default::default() }
    }

    #[test]
    fn test_overhang_udl_only() {
        let input = OverhangingInput {
            total_span_m: 4.0,
            cantilever_m: 1.0,
            cant_udl: uls(5.0),
            ..Default::default()
        };
        let a = analyse_overhanging(&input).unwrap();
        assert!(approx_eq(a.back_span_m, 3.0));
        assert!(approx_eq(a.r1, -5.0 / 6.0));
        assert!(approx_eq(a.r2, 35.0 / 6.0));
        assert!(approx_eq(a.m_hogging, 2.5));
        assert_eq!(a.m_sagging, 0.0);
        assert!(a.has_uplift());
        assert!(approx_eq(a.v_star, 35.0 / 6.0));
        assert!(approx_eq(a.m_star, 2.5));
    }

    #[test]
    fn test_back_span_udl_only_matches_simple_span() {
        let input = OverhangingInput {
            total_span_m: 5.0,
            cantilever_m: 1.0,
            back_udl: uls(4.0),
            ..Default::default()
        };
        let a = analyse_overhanging(&input).unwrap();
        assert!(approx_eq(a.r1, 8.0));
        assert!(approx_eq(a.r2, 8.0));
        assert!(approx_eq(a.m_sagging, 4.0 * 16.0 / 8.0));
        assert_eq!(a.m_hogging, 0.0);
    }

    #[test]
    fn test_combined_udl_sagging_uses_zero_shear() {
        let input = OverhangingInput {
            total_span_m: 4.0,
            cantilever_m: 1.0,
            back_udl: uls(4.0),
            cant_udl: uls(4.0),
            ..Default::default()
        };
        let a = analyse_overhanging(&input).unwrap();
        // R1 = 4×3/2 - 4×1/(2×3) = 6 - 2/3
        let r1 = 6.0 - 2.0 / 3.0;
        let x0 = r1 / 4.0;
        assert!(approx_eq(a.r1, r1));
        assert!(approx_eq(a.m_sagging, r1 * x0 - 4.0 * x0 * x0 / 2.0));
        assert!(approx_eq(a.m_hogging, 2.0));
        // Equilibrium: R1 + R2 = w × total
        assert!(approx_eq(a.r1 + a.r2, 16.0));
    }

    #[test]
    fn test_point_loads_both_segments() {
        let input = OverhangingInput {
            total_span_m: 4.0,
            cantilever_m: 1.0,
            back_point_loads: vec![PointLoad::new(6.0, 4.0, 1.5)],
            cant_point_loads: vec![OverhangPointLoad::new(3.0, 2.0, 1.0)],
            ..Default::default()
        };
        let a = analyse_overhanging(&input).unwrap();
        // Back: R1 = R2 = 3, M = 6×1.5×1.5/3 = 4.5
        // Tip: R1 = -1, R2 = 4, M_hog = 3
        assert!(approx_eq(a.r1, 2.0));
        assert!(approx_eq(a.r2, 7.0));
        assert!(approx_eq(a.m_sagging_point, 4.5));
        assert!(approx_eq(a.m_hogging_point, 3.0));
        assert!(approx_eq(a.m_star, 4.5));
        assert!(approx_eq(a.r1 + a.r2, 9.0));
    }

    #[test]
    fn test_rejects_overhang_not_shorter_than_total() {
        let input = OverhangingInput {
            total_span_m: 3.0,
            cantilever_m: 3.0,
            ..Default::default()
        };
        let err = analyse_overhanging(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");

        let longer = OverhangingInput { cantilever_m: 3.5, ..input };
        assert_eq!(analyse_overhanging(&longer).unwrap_err().error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_rejects_point_loads_off_segment() {
        let input = OverhangingInput {
            total_span_m: 4.0,
            cantilever_m: 1.0,
            back_point_loads: vec![PointLoad::new(1.0, 1.0, 3.0)],
            ..Default::default()
        };
        assert!(analyse_overhanging(&input).is_err());

        let input = OverhangingInput {
            total_span_m: 4.0,
            cantilever_m: 1.0,
            cant_point_loads: vec![OverhangPointLoad::new(1.0, 1.0, 1.1)],
            ..Default::default()
        };
        assert!(analyse_overhanging(&input).is_err());
    }
}
