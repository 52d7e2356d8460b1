//! # Simply-Supported Beam Analysis
//!
//! Internal actions for a single span on pin-roller supports under a full
//! length UDL plus any number of point loads, by linear superposition.
//!
//! ## Assumptions
//!
//! - Peaks of the UDL and each point load are summed even where they occur at
//!   different positions along the span. This is conservative for moment.
//! - V* is taken as the larger support reaction.
//!
//! ## Example
//!
//! ```rust
//! use timber_core::calculations::simply_supported::analyse_simply_supported;
//! use timber_core::loads::{PointLoad, SpanUdl};
//!
//! let udl = SpanUdl { uls: 5.0, ..Default::default() };
//! let actions = analyse_simply_supported(4.0, udl, &[PointLoad::new(10.0, 7.0, 2.0)]).unwrap();
//!
//! // wL²/8 + PL/4
//! assert!((actions.m_star - 20.0).abs() < 1e-9);
//! assert!((actions.v_star - 15.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::{point_load_max_moment, point_load_reactions, uniform_load_max_moment, uniform_load_reactions};
use crate::errors::{CalcError, CalcResult};
use crate::loads::{PointLoad, SpanUdl};

/// Internal actions for a simply-supported beam (kN, kNm).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplySupportedActions {
    /// Span L (m)
    pub span_m: f64,
    /// Design UDL intensities on the span
    pub udl: SpanUdl,
    /// Point loads included in the analysis
    pub point_loads: Vec<PointLoad>,
    /// Design moment M* (kNm)
    pub m_star: f64,
    /// Design shear V* (kN)
    pub v_star: f64,
    /// Largest support reaction (kN)
    pub r_max: f64,
    /// Left support reaction (kN)
    pub r_left: f64,
    /// Right support reaction (kN)
    pub r_right: f64,
    /// Moment from the UDL alone (kNm)
    pub m_udl: f64,
    /// Sum of point-load peak moments (kNm)
    pub m_point: f64,
    /// Shear from the UDL alone (kN)
    pub v_udl: f64,
}

/// Analyse a simply-supported span.
///
/// Every point load must satisfy 0 < a < L; loads outside the span are an
/// error, never clamped.
pub fn analyse_simply_supported(span_m: f64, udl: SpanUdl, point_loads: &[PointLoad]) -> CalcResult<SimplySupportedActions> {
    if !(span_m.is_finite() && span_m > 0.0) {
        return Err(CalcError::invalid_input("span_m", span_m.to_string(), "Span must be positive"));
    }
    if let Some(pl) = point_loads.iter().find(|pl| !pl.is_valid(span_m)) {
        return Err(CalcError::invalid_input(
            "point_loads",
            pl.a_m.to_string(),
            format!("Point load position must lie strictly within the {} m span", span_m),
        ));
    }

    let l = span_m;
    let m_udl = uniform_load_max_moment(udl.uls, l);
    let (r_udl, _) = uniform_load_reactions(udl.uls, l);

    let mut m_point = 0.0;
    let mut r_left_point = 0.0;
    let mut r_right_point = 0.0;
    for pl in point_loads {
        m_point += point_load_max_moment(pl.p_uls_kn, pl.a_m, l);
        let (ra, rb) = point_load_reactions(pl.p_uls_kn, pl.a_m, l);
        r_left_point += ra;
        r_right_point += rb;
    }

    let r_left = r_udl + r_left_point;
    let r_right = r_udl + r_right_point;
    let r_max = r_left.max(r_right);

    let actions = SimplySupportedActions {
        span_m: l,
        udl,
        point_loads: point_loads.to_vec(),
        m_star: m_udl + m_point,
        v_star: r_max,
        r_max,
        r_left,
        r_right,
        m_udl,
        m_point,
        v_udl: r_udl,
    };
    tracing::debug!(
        span_m = l,
        m_star = actions.m_star,
        v_star = actions.v_star,
        point_loads = point_loads.len(),
        "simply-supported analysis"
    );
    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn udl(uls: f64) -> SpanUdl {
        SpanUdl { uls, sls_short: uls / 1.4, sls_long: uls / 1.6, dead: uls / 2.0, long_term_live: 0.1 }
    }

    #[test]
    fn test_udl_only() {
        let a = analyse_simply_supported(4.0, udl(5.0), &[]).unwrap();
        assert!(approx_eq(a.m_star, 10.0));
        assert!(approx_eq(a.v_star, 10.0));
        assert!(approx_eq(a.r_left, 10.0));
        assert!(approx_eq(a.r_right, 10.0));
        assert_eq!(a.m_point, 0.0);
    }

    #[test]
    fn test_off_centre_point_load() {
        let pl = PointLoad::new(12.0, 8.0, 1.0);
        let a = analyse_simply_supported(4.0, SpanUdl::default(), &[pl]).unwrap();
        // Pa(L-a)/L = 12×1×3/4
        assert!(approx_eq(a.m_star, 9.0));
        assert!(approx_eq(a.r_left, 9.0));
        assert!(approx_eq(a.r_right, 3.0));
        assert!(approx_eq(a.v_star, 9.0));
        assert!(approx_eq(a.r_left + a.r_right, 12.0));
    }

    #[test]
    fn test_point_load_peaks_summed() {
        let loads = [PointLoad::new(10.0, 7.0, 1.0), PointLoad::new(10.0, 7.0, 3.0)];
        let a = analyse_simply_supported(4.0, udl(2.0), &loads).unwrap();
        // 2×16/8 + 2 × (10×1×3/4)
        assert!(approx_eq(a.m_udl, 4.0));
        assert!(approx_eq(a.m_point, 15.0));
        assert!(approx_eq(a.m_star, 19.0));
    }

    #[test]
    fn test_breakdown_carried_through() {
        let u = udl(6.0);
        let a = analyse_simply_supported(3.0, u, &[]).unwrap();
        assert_eq!(a.udl, u);
    }

    #[test]
    fn test_rejects_bad_span_and_positions() {
        assert!(analyse_simply_supported(0.0, udl(5.0), &[]).is_err());
        let err = analyse_simply_supported(4.0, udl(5.0), &[PointLoad::new(1.0, 1.0, 4.0)]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_idempotent() {
        let loads = [PointLoad::new(3.0, 2.0, 0.7)];
        let first = analyse_simply_supported(3.6, udl(4.2), &loads).unwrap();
        let second = analyse_simply_supported(3.6, udl(4.2), &loads).unwrap();
        assert_eq!(first, second);
    }
}
