//! # Timber Grade Table
//!
//! Strength, stiffness and safety-factor data for the fixed set of timber
//! grades the engine designs with, per NZS AS 1720.1:2022 (incorporating
//! AS 1720.1:2010 and NZ Appendix ZZ) and manufacturer literature.
//!
//! ## Product Families
//!
//! - **Sawn timber**: NZ radiata pine SG8 (dry and wet-in-use), Macrocarpa
//! - **Glulam**: Prolam PL8/PL10/PL12/PL17, each with a wet variant
//! - **LVL**: hySPAN, LVL, hyONE, hyCHORD, Nelson Pine, hy90
//!
//! Shear and bearing strengths are optional. A grade without them (Macrocarpa)
//! still designs for bending and deflection, while its shear and bearing checks
//! come back as "manual check required".
//!
//! ## Example
//!
//! ```rust
//! use timber_core::materials::{grade, ProductFamily};
//!
//! let sg8 = grade("SG8").unwrap();
//! assert_eq!(sg8.fb_mpa, 14.0);
//! assert_eq!(sg8.family, ProductFamily::SawnTimber);
//! assert!(grade("SG99").is_err());
//! ```

pub mod engineered_wood;
pub mod sawn_timber;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Broad product family, which decides locked modification factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductFamily {
    /// Visually or machine stress-graded sawn timber
    SawnTimber,
    /// Glued laminated timber
    Glulam,
    /// Laminated veneer lumber
    Lvl,
}

impl ProductFamily {
    /// Whether k9 (strength sharing) must be taken as 1.0 for this family.
    ///
    /// AS 1720.1 Section 8.4.6 sets k9 = 1.0 for LVL, and glulam already
    /// includes lamination sharing in its characteristic values.
    pub fn locks_k9(&self) -> bool {
        matches!(self, ProductFamily::Glulam | ProductFamily::Lvl)
    }

    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductFamily::SawnTimber => "Sawn timber",
            ProductFamily::Glulam => "Glulam",
            ProductFamily::Lvl => "LVL",
        }
    }
}

impl std::fmt::Display for ProductFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Characteristic properties of one timber grade.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "SG8",
///   "family": "SawnTimber",
///   "fb_mpa": 14.0,
///   "fs_mpa": 3.8,
///   "fp_mpa": 6.9,
///   "e_mpa": 8000.0,
///   "phi": 0.8,
///   "k2": 2.0,
///   "density_kg_m3": 450.0,
///   "rho_b": 0.76,
///   "wet_variant": "SG8 Wet in Use"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialGrade {
    /// Grade name as used for lookup
    pub name: String,
    /// Product family
    pub family: ProductFamily,
    /// Characteristic bending strength f'b (MPa)
    pub fb_mpa: f64,
    /// Characteristic shear strength f's (MPa), `None` where no data exists
    pub fs_mpa: Option<f64>,
    /// Characteristic bearing strength perpendicular to grain f'p (MPa), `None` where no data exists
    pub fp_mpa: Option<f64>,
    /// Short-duration modulus of elasticity E (MPa)
    pub e_mpa: f64,
    /// Capacity reduction factor φ
    pub phi: f64,
    /// Creep factor k2 applied to long-term dead load deflection
    pub k2: f64,
    /// Design density for self-weight (kg/m³)
    pub density_kg_m3: f64,
    /// Material constant ρb for the stability factor k12
    pub rho_b: f64,
    /// Name of the wet-in-use variant, if the grade has one
    pub wet_variant: Option<String>,
}

impl MaterialGrade {
    /// The wet-in-use variant of this grade, if one exists in the table.
    pub fn wet_variant(&self) -> Option<&'static MaterialGrade> {
        self.wet_variant.as_deref().and_then(|name| grade(name).ok())
    }

    /// Whether shear and bearing can both be checked for this grade
    pub fn has_complete_data(&self) -> bool {
        self.fs_mpa.is_some() && self.fp_mpa.is_some()
    }
}

/// The full grade table, in presentation order.
static GRADE_TABLE: Lazy<Vec<MaterialGrade>> = Lazy::new(|| {
    let mut grades = sawn_timber::grades();
    grades.extend(engineered_wood::grades());
    grades
});

/// All grades in the table
pub fn all_grades() -> &'static [MaterialGrade] {
    &GRADE_TABLE
}

/// Grade names in presentation order
pub fn grade_names() -> Vec<&'static str> {
    GRADE_TABLE.iter().map(|g| g.name.as_str()).collect()
}

/// Look up a grade by its exact name.
///
/// Unknown names are a configuration error listing the available grades.
pub fn grade(name: &str) -> CalcResult<&'static MaterialGrade> {
    GRADE_TABLE
        .iter()
        .find(|g| g.name == name)
        .ok_or_else(|| CalcError::material_not_found(name, grade_names().join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_grade() {
        let g = grade("Prolam PL12").unwrap();
        assert_eq!(g.fb_mpa, 25.0);
        assert_eq!(g.e_mpa, 11_500.0);
        assert_eq!(g.k2, 1.5);
        assert_eq!(g.family, ProductFamily::Glulam);
    }

    #[test]
    fn test_lookup_unknown_grade_lists_available() {
        let err = grade("MSG10").unwrap_err();
        match err {
            CalcError::MaterialNotFound { material_name, available } => {
                assert_eq!(material_name, "MSG10");
                assert!(available.contains("SG8"));
                assert!(available.contains("hyONE"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names = grade_names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), names.len());
        assert_eq!(names.len(), 17);
    }

    #[test]
    fn test_wet_variants_resolve() {
        for g in all_grades() {
            if let Some(name) = &g.wet_variant {
                let wet = g.wet_variant().unwrap_or_else(|| panic!("{} missing", name));
                assert!(wet.fb_mpa < g.fb_mpa, "{} wet variant should be weaker", g.name);
                assert!(wet.wet_variant.is_none());
            }
        }
        assert_eq!(grade("SG8").unwrap().wet_variant().unwrap().name, "SG8 Wet in Use");
    }

    #[test]
    fn test_missing_data_is_absent_not_zero() {
        let macrocarpa = grade("Macrocarpa").unwrap();
        assert!(macrocarpa.fs_mpa.is_none());
        assert!(macrocarpa.fp_mpa.is_none());
        assert!(!macrocarpa.has_complete_data());
        assert!(grade("SG8").unwrap().has_complete_data());
    }

    #[test]
    fn test_k9_lock_by_family() {
        assert!(grade("hySPAN").unwrap().family.locks_k9());
        assert!(grade("Prolam PL8").unwrap().family.locks_k9());
        assert!(!grade("SG8").unwrap().family.locks_k9());
    }

    #[test]
    fn test_grade_serialization() {
        let g = grade("SG8").unwrap();
        let json = serde_json::to_string(g).unwrap();
        let back: MaterialGrade = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, g);
    }
}
