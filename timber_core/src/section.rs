//! # Timber Sections
//!
//! Solid rectangular timber sections and the standard NZ sizes offered to
//! callers. A [`TimberSection`] is validated once on construction and then
//! only read.
//!
//! ## Example
//!
//! ```rust
//! use timber_core::section::TimberSection;
//!
//! let section = TimberSection::new(90.0, 240.0).unwrap();
//! assert_eq!(section.label(), "90x240");
//! assert!((section.zx_mm3() - 864_000.0).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::section::{
    bearing_area, rectangular_area, rectangular_moment_of_inertia, rectangular_section_modulus,
    rectangular_shear_area,
};
use crate::errors::{CalcError, CalcResult};

/// Standard NZ sawn and engineered section sizes, (breadth, depth) in mm.
pub const STANDARD_SIZES: [(u32, u32); 22] = [
    (45, 90), (45, 140), (45, 190), (45, 240), (45, 290),
    (65, 90), (65, 140), (65, 190), (65, 240), (65, 290),
    (90, 90), (90, 140), (90, 190), (90, 240), (90, 290),
    (140, 140), (140, 190), (140, 240), (140, 290),
    (190, 190), (190, 240), (190, 290),
];

/// Rectangular timber section bending about its major axis.
///
/// ## JSON Example
///
/// ```json
/// { "breadth_mm": 90.0, "depth_mm": 240.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SectionDimensions")]
pub struct TimberSection {
    /// Breadth b (mm)
    breadth_mm: f64,
    /// Depth d (mm)
    depth_mm: f64,
}

/// Unvalidated dimensions, used so deserialization goes through [`TimberSection::new`].
#[derive(Deserialize)]
struct SectionDimensions {
    breadth_mm: f64,
    depth_mm: f64,
}

impl TryFrom<SectionDimensions> for TimberSection {
    type Error = CalcError;

    fn try_from(dims: SectionDimensions) -> CalcResult<Self> {
        TimberSection::new(dims.breadth_mm, dims.depth_mm)
    }
}

impl TimberSection {
    /// Create a section, rejecting non-positive (or non-finite) dimensions.
    pub fn new(breadth_mm: f64, depth_mm: f64) -> CalcResult<Self> {
        if !(breadth_mm.is_finite() && breadth_mm > 0.0) {
            return Err(CalcError::invalid_input(
                "breadth_mm",
                breadth_mm.to_string(),
                "Section breadth must be positive",
            ));
        }
        if !(depth_mm.is_finite() && depth_mm > 0.0) {
            return Err(CalcError::invalid_input(
                "depth_mm",
                depth_mm.to_string(),
                "Section depth must be positive",
            ));
        }
        Ok(TimberSection {
            breadth_mm,
            depth_mm,
        })
    }

    /// Breadth b (mm)
    pub fn breadth_mm(&self) -> f64 {
        self.breadth_mm
    }

    /// Depth d (mm)
    pub fn depth_mm(&self) -> f64 {
        self.depth_mm
    }

    /// Cross-sectional area (mm²)
    pub fn area_mm2(&self) -> f64 {
        rectangular_area(self.breadth_mm, self.depth_mm)
    }

    /// Section modulus Zx = bd²/6 (mm³)
    pub fn zx_mm3(&self) -> f64 {
        rectangular_section_modulus(self.breadth_mm, self.depth_mm)
    }

    /// Second moment of area Ix = bd³/12 (mm⁴)
    pub fn ix_mm4(&self) -> f64 {
        rectangular_moment_of_inertia(self.breadth_mm, self.depth_mm)
    }

    /// Effective shear area As = 2/3·b·d (mm²)
    pub fn shear_area_mm2(&self) -> f64 {
        rectangular_shear_area(self.breadth_mm, self.depth_mm)
    }

    /// Bearing area Ap = bearing length × b (mm²)
    pub fn bearing_area_mm2(&self, bearing_length_mm: f64) -> f64 {
        bearing_area(bearing_length_mm, self.breadth_mm)
    }

    /// Short label such as "90x240"
    pub fn label(&self) -> String {
        format!("{:.0}x{:.0}", self.breadth_mm, self.depth_mm)
    }

    /// Whether this section matches one of [`STANDARD_SIZES`]
    pub fn is_standard_size(&self) -> bool {
        STANDARD_SIZES
            .iter()
            .any(|&(b, d)| f64::from(b) == self.breadth_mm && f64::from(d) == self.depth_mm)
    }
}

impl std::fmt::Display for TimberSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} mm", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() / b.abs().max(1.0) < 1e-9
    }

    #[test]
    fn test_section_properties() {
        let s = TimberSection::new(90.0, 240.0).unwrap();
        assert!(approx_eq(s.area_mm2(), 21_600.0));
        assert!(approx_eq(s.zx_mm3(), 864_000.0));
        assert!(approx_eq(s.ix_mm4(), 103_680_000.0));
        assert!(approx_eq(s.shear_area_mm2(), 14_400.0));
        assert!(approx_eq(s.bearing_area_mm2(50.0), 4_500.0));
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let err = TimberSection::new(0.0, 240.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(TimberSection::new(90.0, -10.0).is_err());
        assert!(TimberSection::new(f64::NAN, 240.0).is_err());
    }

    #[test]
    fn test_label_and_standard_size() {
        let s = TimberSection::new(45.0, 190.0).unwrap();
        assert_eq!(s.label(), "45x190");
        assert!(s.is_standard_size());
        assert!(!TimberSection::new(50.0, 200.0).unwrap().is_standard_size());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let s = TimberSection::new(65.0, 290.0).unwrap();
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("breadth_mm"));
        let back: TimberSection = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);

        let bad = serde_json::from_str::<TimberSection>(r#"{"breadth_mm": 0.0, "depth_mm": 240.0}"#);
        assert!(bad.is_err());
    }
}
