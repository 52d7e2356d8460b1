//! Concentrated loads
//!
//! Point loads are entered already factored: the caller supplies the ULS
//! and SLS magnitudes directly rather than a G/Q split.
//!
//! Positions are validated with a predicate and never clamped. What happens
//! to an out-of-range load is the caller's decision
//! (see [`PointLoadPolicy`](crate::calculations::PointLoadPolicy)).

use serde::{Deserialize, Serialize};

/// Point load on a simple span or the back span of an overhanging beam.
///
/// `a_m` is measured from the left support (R1).
///
/// ## JSON Example
///
/// ```json
/// { "p_uls_kn": 12.0, "p_sls_kn": 8.0, "a_m": 1.5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Factored ULS magnitude (kN)
    pub p_uls_kn: f64,
    /// SLS magnitude used for deflection (kN)
    pub p_sls_kn: f64,
    /// Distance from the left support (m)
    pub a_m: f64,
}

impl PointLoad {
    /// Create a point load
    pub fn new(p_uls_kn: f64, p_sls_kn: f64, a_m: f64) -> Self {
        PointLoad { p_uls_kn, p_sls_kn, a_m }
    }

    /// Whether the load lies strictly inside a span of `span_m`: 0 < a < L
    pub fn is_valid(&self, span_m: f64) -> bool {
        self.p_uls_kn.is_finite() && self.p_sls_kn.is_finite() && self.a_m > 0.0 && self.a_m < span_m
    }

    /// Distance from the right support, b = L - a
    pub fn distance_from_right(&self, span_m: f64) -> f64 {
        span_m - self.a_m
    }
}

/// Point load on the overhang of an overhanging beam.
///
/// `x_m` is measured from the interior support (R2) towards the free end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverhangPointLoad {
    /// Factored ULS magnitude (kN)
    pub p_uls_kn: f64,
    /// SLS magnitude used for deflection (kN)
    pub p_sls_kn: f64,
    /// Distance from the interior support (m)
    pub x_m: f64,
}

impl OverhangPointLoad {
    /// Create an overhang point load
    pub fn new(p_uls_kn: f64, p_sls_kn: f64, x_m: f64) -> Self {
        OverhangPointLoad { p_uls_kn, p_sls_kn, x_m }
    }

    /// Whether the load lies on the overhang: 0 < x ≤ a (the free end is allowed)
    pub fn is_valid(&self, cantilever_m: f64) -> bool {
        self.p_uls_kn.is_finite() && self.p_sls_kn.is_finite() && self.x_m > 0.0 && self.x_m <= cantilever_m
    }

    /// Distance from the free end, a - x
    pub fn distance_from_tip(&self, cantilever_m: f64) -> f64 {
        cantilever_m - self.x_m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_load_position_is_strict() {
        let span = 4.0;
        assert!(PointLoad::new(10.0, 7.0, 2.0).is_valid(span));
        assert!(!PointLoad::new(10.0, 7.0, 0.0).is_valid(span));
        assert!(!PointLoad::new(10.0, 7.0, 4.0).is_valid(span));
        assert!(!PointLoad::new(10.0, 7.0, 5.0).is_valid(span));
        assert!(!PointLoad::new(10.0, 7.0, -1.0).is_valid(span));
        assert_eq!(PointLoad::new(10.0, 7.0, 1.5).distance_from_right(span), 2.5);
    }

    #[test]
    fn test_overhang_load_allows_tip() {
        let cant = 1.2;
        assert!(OverhangPointLoad::new(5.0, 3.0, 1.2).is_valid(cant));
        assert!(OverhangPointLoad::new(5.0, 3.0, 0.6).is_valid(cant));
        assert!(!OverhangPointLoad::new(5.0, 3.0, 0.0).is_valid(cant));
        assert!(!OverhangPointLoad::new(5.0, 3.0, 1.3).is_valid(cant));
        assert!((OverhangPointLoad::new(5.0, 3.0, 0.5).distance_from_tip(cant) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_non_finite_magnitude_is_invalid() {
        assert!(!PointLoad::new(f64::NAN, 1.0, 2.0).is_valid(4.0));
        assert!(!OverhangPointLoad::new(1.0, f64::INFINITY, 0.5).is_valid(1.0));
    }
}
