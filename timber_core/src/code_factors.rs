//! # AS 1720.1 Modification Factors
//!
//! Modification factors for timber design per NZS AS 1720.1:2022.
//!
//! ## Overview
//!
//! Characteristic strengths (f'b, f's, f'p) are multiplied by the capacity
//! factor φ and the applicable modification factors to obtain design
//! capacities:
//!
//! ```text
//! Md   = φ × k1 × k4 × k6 × k9 × k12 × f'b × Z
//! Vd   = φ × k1 × k4 × k6 × f's × As
//! Nd,p = φ × k1 × k4 × k6 × k7 × f'p × Ap
//! ```
//!
//! ## Factor Summary
//!
//! | Factor | Description          | Typical Values       |
//! |--------|----------------------|----------------------|
//! | k1     | Duration of load     | 0.6 - 1.0            |
//! | k4     | Moisture condition   | 0.7 - 1.0            |
//! | k6     | Temperature          | 1.0 in NZ            |
//! | k7     | Bearing length       | 1.0 - 1.75           |
//! | k9     | Strength sharing     | 1.0 - 1.33           |
//! | k12    | Stability            | Calculated, ≤ 1.0    |
//!
//! k2 (creep) is a grade property and lives on
//! [`MaterialGrade`](crate::materials::MaterialGrade).

use serde::{Deserialize, Serialize};

use crate::equations::InterpolationTable;
use crate::errors::{CalcError, CalcResult};
use crate::materials::MaterialGrade;
use crate::section::TimberSection;

// ============================================================================
// Code Clause References
// ============================================================================

/// AS 1720.1 clause references cited in check derivations.
pub mod code_ref {
    // Design checks
    /// Bending capacity
    pub const BENDING: &str = "AS 1720.1 Eq. 3.2(2)";
    /// Shear capacity
    pub const SHEAR: &str = "AS 1720.1 Eq. 3.2(14)";
    /// Bearing capacity perpendicular to grain
    pub const BEARING: &str = "AS 1720.1 Eq. 3.2(16)";
    /// Long-term deflection with creep
    pub const LONG_TERM_DEFLECTION: &str = "AS 1720.1 Cl 2.4.5.2";

    // Modification factors
    /// Duration of load factor k1
    pub const K1: &str = "AS 1720.1 Table 2.3";
    /// Moisture condition factor k4
    pub const K4: &str = "AS 1720.1 Cl 2.4.2";
    /// Temperature factor k6
    pub const K6: &str = "AS 1720.1 Cl 2.4.3";
    /// Bearing length factor k7
    pub const K7: &str = "AS 1720.1 Table 2.6";
    /// Strength sharing factor k9
    pub const K9: &str = "AS 1720.1 Cl 2.4.5";
    /// Stability factor k12
    pub const K12: &str = "AS 1720.1 Cl 3.2.4";
    /// Slenderness coefficient for discrete compression edge restraint
    pub const S1_COMPRESSION_EDGE: &str = "AS 1720.1 Eq. 3.2(4)";

    // Loads
    /// Strength and serviceability load combinations
    pub const LOAD_COMBINATIONS: &str = "AS/NZS 1170.0 Cl 4.2";
}

// ============================================================================
// k1 - Duration of Load
// ============================================================================

/// Duration of load category for k1 per AS 1720.1 Table 2.3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoadDuration {
    /// Short-term loads: k1 = 1.0
    ShortTerm,

    /// Medium-term loads: k1 = 0.8
    /// Examples: floor live load combined with dead load
    #[default]
    MediumTerm,

    /// Long-term loads: k1 = 0.6
    /// Examples: permanent dead load only
    LongTerm,
}

impl LoadDuration {
    /// All load duration variants
    pub const ALL: [LoadDuration; 3] = [
        LoadDuration::ShortTerm,
        LoadDuration::MediumTerm,
        LoadDuration::LongTerm,
    ];

    /// Get the k1 factor value
    pub fn factor(&self) -> f64 {
        match self {
            LoadDuration::ShortTerm => 1.0,
            LoadDuration::MediumTerm => 0.8,
            LoadDuration::LongTerm => 0.6,
        }
    }

    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadDuration::ShortTerm => "Short term (1.0)",
            LoadDuration::MediumTerm => "Medium term (0.8)",
            LoadDuration::LongTerm => "Long term (0.6)",
        }
    }
}

impl std::fmt::Display for LoadDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// k4 - Moisture Condition
// ============================================================================

/// Moisture condition for k4 per AS 1720.1 Cl 2.4.2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MoistureCondition {
    /// Seasoned timber, MC ≤ 15%: k4 = 1.0
    #[default]
    Dry,

    /// Timber that may become wet in service: k4 = 0.7 (minimum)
    Wet,
}

impl MoistureCondition {
    /// All moisture variants
    pub const ALL: [MoistureCondition; 2] = [MoistureCondition::Dry, MoistureCondition::Wet];

    /// Get the k4 factor value
    pub fn factor(&self) -> f64 {
        match self {
            MoistureCondition::Dry => 1.0,
            MoistureCondition::Wet => 0.7,
        }
    }

    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            MoistureCondition::Dry => "Dry (1.0)",
            MoistureCondition::Wet => "Wet (0.7)",
        }
    }
}

impl std::fmt::Display for MoistureCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// k6 for New Zealand conditions (no tropical reduction)
pub const K6_DEFAULT: f64 = 1.0;

// ============================================================================
// k7 - Bearing Length
// ============================================================================

/// AS 1720.1 Table 2.6, (bearing length mm, k7)
pub const K7_TABLE: [(f64, f64); 6] = [
    (12.0, 1.75),
    (25.0, 1.40),
    (50.0, 1.20),
    (75.0, 1.15),
    (125.0, 1.10),
    (150.0, 1.00),
];

const K7_LOOKUP: InterpolationTable<'static> = match InterpolationTable::new(&K7_TABLE) {
    Some(table) => table,
    None => panic!("k7 table is empty"),
};

/// Bearing length factor k7.
///
/// Only bearings at least 75 mm from the member end benefit; end bearings
/// (the usual case for a beam support) take k7 = 1.0.
///
/// # Example
/// ```rust
/// use timber_core::code_factors::k7;
///
/// assert_eq!(k7(50.0, true), 1.0);
/// assert_eq!(k7(50.0, false), 1.2);
/// assert!((k7(100.0, false) - 1.125).abs() < 1e-12);
/// ```
pub fn k7(bearing_length_mm: f64, is_end_bearing: bool) -> f64 {
    if is_end_bearing {
        return 1.0;
    }
    K7_LOOKUP.lookup(bearing_length_mm)
}

// ============================================================================
// k12 - Stability
// ============================================================================

/// Stability factor k12 per AS 1720.1 Cl 3.2.4
///
/// - ρb·S1 ≤ 10: k12 = 1.0
/// - 10 < ρb·S1 ≤ 20: k12 = 1.5 − 0.05·ρb·S1
/// - ρb·S1 > 20: k12 = 200/(ρb·S1)²
///
/// A fully restrained compression edge has S1 = 0 and hence k12 = 1.0.
pub fn k12(rho_b: f64, s1: f64) -> f64 {
    let product = rho_b * s1;
    if product <= 10.0 {
        1.0
    } else if product <= 20.0 {
        1.5 - 0.05 * product
    } else {
        200.0 / (product * product)
    }
}

/// Slenderness coefficient S1 for discrete compression edge restraint
///
/// # Formula
/// S1 = 1.25·(d/b)·(Lay/d)^0.5
///
/// Returns 0.0 (fully restrained) when any input is non-positive.
pub fn s1_compression_edge(depth_mm: f64, breadth_mm: f64, restraint_spacing_mm: f64) -> f64 {
    if breadth_mm <= 0.0 || depth_mm <= 0.0 || restraint_spacing_mm <= 0.0 {
        return 0.0;
    }
    1.25 * (depth_mm / breadth_mm) * (restraint_spacing_mm / depth_mm).sqrt()
}

// ============================================================================
// Design Factor Configuration
// ============================================================================

fn default_k6() -> f64 {
    K6_DEFAULT
}

fn default_bearing_length() -> f64 {
    50.0
}

fn default_true() -> bool {
    true
}

fn default_k9() -> f64 {
    1.0
}

fn default_deflection_limit() -> f64 {
    300.0
}

fn default_deflection_limit_tip() -> f64 {
    150.0
}

/// User-selected factors and limits for one beam design.
///
/// Every field has a default, so a request may give only what it changes.
///
/// ## JSON Example
///
/// ```json
/// {
///   "load_duration": "medium_term",
///   "bearing_length_mm": 75.0,
///   "restraint_spacing_mm": 1200.0,
///   "deflection_limit": 360.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignFactors {
    /// Duration of load category (k1)
    pub load_duration: LoadDuration,

    /// Moisture condition (k4)
    pub moisture: MoistureCondition,

    /// Explicit k4, overriding the moisture condition value
    pub k4: Option<f64>,

    /// Temperature factor k6
    #[serde(default = "default_k6")]
    pub k6: f64,

    /// Bearing length at each support (mm)
    #[serde(default = "default_bearing_length")]
    pub bearing_length_mm: f64,

    /// Whether the bearings are at the member ends (k7 = 1.0)
    #[serde(default = "default_true")]
    pub end_bearing: bool,

    /// Explicit k7, overriding the Table 2.6 lookup
    pub k7: Option<f64>,

    /// Strength sharing factor k9 (forced to 1.0 for glulam and LVL)
    #[serde(default = "default_k9")]
    pub k9: f64,

    /// Explicit k12, overriding the restraint-spacing derivation
    pub k12: Option<f64>,

    /// Compression edge restraint spacing Lay (mm); `None` means fully restrained
    pub restraint_spacing_mm: Option<f64>,

    /// Span deflection limit denominator (span / limit)
    #[serde(default = "default_deflection_limit")]
    pub deflection_limit: f64,

    /// Overhang tip deflection limit denominator (overhang / limit)
    #[serde(default = "default_deflection_limit_tip")]
    pub deflection_limit_tip: f64,
}

impl Default for DesignFactors {
    fn default() -> Self {
        Self {
            load_duration: LoadDuration::default(),
            moisture: MoistureCondition::default(),
            k4: None,
            k6: K6_DEFAULT,
            bearing_length_mm: default_bearing_length(),
            end_bearing: true,
            k7: None,
            k9: default_k9(),
            k12: None,
            restraint_spacing_mm: None,
            deflection_limit: default_deflection_limit(),
            deflection_limit_tip: default_deflection_limit_tip(),
        }
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64, inclusive_min: bool) -> CalcResult<()> {
    let above_min = if inclusive_min { value >= min } else { value > min };
    if value.is_finite() && above_min && value <= max {
        return Ok(());
    }
    let lower = if inclusive_min { "[" } else { "(" };
    Err(CalcError::invalid_input(
        field,
        value.to_string(),
        format!("Must be within {}{}, {}]", lower, min, max),
    ))
}

fn check_positive(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Must be positive"))
    }
}

impl DesignFactors {
    /// Create default factors (medium-term, dry, end bearings, fully restrained)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set load duration
    pub fn with_load_duration(mut self, duration: LoadDuration) -> Self {
        self.load_duration = duration;
        self
    }

    /// Set moisture condition
    pub fn with_moisture(mut self, moisture: MoistureCondition) -> Self {
        self.moisture = moisture;
        self
    }

    /// Set bearing length and whether it is an end bearing
    pub fn with_bearing(mut self, bearing_length_mm: f64, end_bearing: bool) -> Self {
        self.bearing_length_mm = bearing_length_mm;
        self.end_bearing = end_bearing;
        self
    }

    /// Set compression edge restraint spacing for a derived k12
    pub fn with_restraint_spacing(mut self, restraint_spacing_mm: f64) -> Self {
        self.restraint_spacing_mm = Some(restraint_spacing_mm);
        self
    }

    /// Set deflection limit denominators for the span and the overhang tip
    pub fn with_deflection_limits(mut self, span: f64, tip: f64) -> Self {
        self.deflection_limit = span;
        self.deflection_limit_tip = tip;
        self
    }

    /// Check every override lies within its permitted range.
    pub fn validate(&self) -> CalcResult<()> {
        if let Some(k4) = self.k4 {
            check_range("k4", k4, 0.7, 1.0, true)?;
        }
        check_range("k6", self.k6, 0.0, 1.0, false)?;
        if let Some(k7) = self.k7 {
            check_range("k7", k7, 1.0, 1.75, true)?;
        }
        check_range("k9", self.k9, 1.0, 1.33, true)?;
        if let Some(k12) = self.k12 {
            check_range("k12", k12, 0.0, 1.0, false)?;
        }
        if let Some(lay) = self.restraint_spacing_mm {
            check_positive("restraint_spacing_mm", lay)?;
        }
        check_positive("bearing_length_mm", self.bearing_length_mm)?;
        check_positive("deflection_limit", self.deflection_limit)?;
        check_positive("deflection_limit_tip", self.deflection_limit_tip)?;
        Ok(())
    }

    /// Validate and resolve the factors that apply to `grade` in `section`.
    ///
    /// k9 is locked to 1.0 for glulam and LVL regardless of the request.
    pub fn resolve(&self, grade: &MaterialGrade, section: &TimberSection) -> CalcResult<ResolvedFactors> {
        self.validate()?;

        let k9_locked = grade.family.locks_k9();
        if k9_locked && self.k9 != 1.0 {
            tracing::warn!(
                grade = %grade.name,
                requested = self.k9,
                "k9 locked to 1.0 for {} products",
                grade.family
            );
        }
        let k9 = if k9_locked { 1.0 } else { self.k9 };

        let s1 = self
            .restraint_spacing_mm
            .map(|lay| s1_compression_edge(section.depth_mm(), section.breadth_mm(), lay));
        let k12 = match (self.k12, s1) {
            (Some(k12), _) => k12,
            (None, Some(s1)) => k12(grade.rho_b, s1),
            (None, None) => 1.0,
        };

        let resolved = ResolvedFactors {
            load_duration: self.load_duration,
            k1: self.load_duration.factor(),
            k4: self.k4.unwrap_or_else(|| self.moisture.factor()),
            k6: self.k6,
            k7: self.k7.unwrap_or_else(|| k7(self.bearing_length_mm, self.end_bearing)),
            k9,
            k9_locked,
            k12,
            s1,
            bearing_length_mm: self.bearing_length_mm,
            deflection_limit: self.deflection_limit,
            deflection_limit_tip: self.deflection_limit_tip,
        };
        tracing::debug!(?resolved, "resolved design factors");
        Ok(resolved)
    }
}

/// The factor values actually used in the checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedFactors {
    /// Load duration category behind k1
    pub load_duration: LoadDuration,
    /// Duration of load factor
    pub k1: f64,
    /// Moisture condition factor
    pub k4: f64,
    /// Temperature factor
    pub k6: f64,
    /// Bearing length factor
    pub k7: f64,
    /// Strength sharing factor
    pub k9: f64,
    /// True when the product family forced k9 to 1.0
    pub k9_locked: bool,
    /// Stability factor
    pub k12: f64,
    /// Slenderness coefficient, when derived from a restraint spacing
    pub s1: Option<f64>,
    /// Bearing length (mm)
    pub bearing_length_mm: f64,
    /// Span deflection limit denominator
    pub deflection_limit: f64,
    /// Overhang tip deflection limit denominator
    pub deflection_limit_tip: f64,
}

impl Default for ResolvedFactors {
    fn default() -> Self {
        let factors = DesignFactors::default();
        ResolvedFactors {
            load_duration: factors.load_duration,
            k1: factors.load_duration.factor(),
            k4: factors.moisture.factor(),
            k6: factors.k6,
            k7: 1.0,
            k9: factors.k9,
            k9_locked: false,
            k12: 1.0,
            s1: None,
            bearing_length_mm: factors.bearing_length_mm,
            deflection_limit: factors.deflection_limit,
            deflection_limit_tip: factors.deflection_limit_tip,
        }
    }
}

impl ResolvedFactors {
    /// Product of the factors common to every strength check, k1·k4·k6
    pub fn common_product(&self) -> f64 {
        self.k1 * self.k4 * self.k6
    }

    /// Format as a multi-line report
    pub fn format_report(&self) -> String {
        let mut lines = vec![
            format!("k1  = {:.2}  {} ({})", self.k1, self.load_duration, code_ref::K1),
            format!("k4  = {:.2}  ({})", self.k4, code_ref::K4),
            format!("k6  = {:.2}  ({})", self.k6, code_ref::K6),
            format!(
                "k7  = {:.3}  bearing {:.0} mm ({})",
                self.k7,
                self.bearing_length_mm,
                code_ref::K7
            ),
        ];
        let k9_note = if self.k9_locked { "  locked for product family" } else { "" };
        lines.push(format!("k9  = {:.2}{} ({})", self.k9, k9_note, code_ref::K9));
        match self.s1 {
            Some(s1) => lines.push(format!("k12 = {:.3}  S1 = {:.2} ({})", self.k12, s1, code_ref::K12)),
            None => lines.push(format!("k12 = {:.3}  ({})", self.k12, code_ref::K12)),
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::grade;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_k1_values() {
        assert_eq!(LoadDuration::ShortTerm.factor(), 1.0);
        assert_eq!(LoadDuration::MediumTerm.factor(), 0.8);
        assert_eq!(LoadDuration::LongTerm.factor(), 0.6);
        assert_eq!(LoadDuration::default(), LoadDuration::MediumTerm);
    }

    #[test]
    fn test_load_duration_serde_names() {
        let json = serde_json::to_string(&LoadDuration::ShortTerm).unwrap();
        assert_eq!(json, "\"short_term\"");
        let parsed: LoadDuration = serde_json::from_str("\"long_term\"").unwrap();
        assert_eq!(parsed, LoadDuration::LongTerm);
    }

    #[test]
    fn test_k4_values() {
        assert_eq!(MoistureCondition::Dry.factor(), 1.0);
        assert_eq!(MoistureCondition::Wet.factor(), 0.7);
    }

    #[test]
    fn test_k7_end_bearing_is_unity() {
        for &len in &[12.0, 50.0, 150.0] {
            assert_eq!(k7(len, true), 1.0);
        }
    }

    #[test]
    fn test_k7_table_interpolation() {
        assert_eq!(k7(12.0, false), 1.75);
        assert_eq!(k7(5.0, false), 1.75);
        assert_eq!(k7(75.0, false), 1.15);
        assert_eq!(k7(400.0, false), 1.0);
        assert!(approx_eq(k7(37.5, false), 1.30));
    }

    #[test]
    fn test_k12_regions() {
        assert_eq!(k12(0.76, 0.0), 1.0);
        assert_eq!(k12(1.0, 10.0), 1.0);
        assert!(approx_eq(k12(1.0, 15.0), 0.75));
        assert!(approx_eq(k12(1.0, 20.0), 0.5));
        assert!(approx_eq(k12(1.0, 25.0), 0.32));
    }

    #[test]
    fn test_k12_continuous_at_region_boundary() {
        let below = k12(1.0, 20.0);
        let above = k12(1.0, 20.0 + 1e-9);
        assert!((below - above).abs() < 1e-6);
    }

    #[test]
    fn test_s1_compression_edge() {
        // 1.25 × (240/90) × (960/240)^0.5 = 1.25 × 2.6667 × 2 = 6.6667
        assert!(approx_eq(s1_compression_edge(240.0, 90.0, 960.0), 20.0 / 3.0));
        assert_eq!(s1_compression_edge(240.0, 0.0, 960.0), 0.0);
        assert_eq!(s1_compression_edge(240.0, 90.0, 0.0), 0.0);
    }

    #[test]
    fn test_default_factors_validate() {
        let f = DesignFactors::default();
        assert!(f.validate().is_ok());
        assert_eq!(f.bearing_length_mm, 50.0);
        assert_eq!(f.deflection_limit, 300.0);
        assert_eq!(f.deflection_limit_tip, 150.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let f: DesignFactors = serde_json::from_str(r#"{"load_duration": "short_term", "k9": 1.1}"#).unwrap();
        assert_eq!(f.load_duration, LoadDuration::ShortTerm);
        assert_eq!(f.k9, 1.1);
        assert_eq!(f.k6, 1.0);
        assert!(f.end_bearing);
        assert_eq!(f.deflection_limit, 300.0);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let bad_k4 = DesignFactors { k4: Some(0.5), ..Default::default() };
        let err = bad_k4.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let bad_k6 = DesignFactors { k6: 0.0, ..Default::default() };
        assert!(bad_k6.validate().is_err());

        let bad_k7 = DesignFactors { k7: Some(2.0), ..Default::default() };
        assert!(bad_k7.validate().is_err());

        let bad_k9 = DesignFactors { k9: 1.5, ..Default::default() };
        assert!(bad_k9.validate().is_err());

        let bad_k12 = DesignFactors { k12: Some(0.0), ..Default::default() };
        assert!(bad_k12.validate().is_err());

        let bad_bearing = DesignFactors::default().with_bearing(0.0, true);
        assert!(bad_bearing.validate().is_err());

        let bad_limit = DesignFactors::default().with_deflection_limits(300.0, -1.0);
        assert!(bad_limit.validate().is_err());
    }

    #[test]
    fn test_resolve_locks_k9_for_lvl() {
        let section = TimberSection::new(63.0, 240.0).unwrap();
        let f = DesignFactors { k9: 1.2, ..Default::default() };

        let lvl = f.resolve(grade("hySPAN").unwrap(), &section).unwrap();
        assert_eq!(lvl.k9, 1.0);
        assert!(lvl.k9_locked);

        let sawn = f.resolve(grade("SG8").unwrap(), &section).unwrap();
        assert_eq!(sawn.k9, 1.2);
        assert!(!sawn.k9_locked);
    }

    #[test]
    fn test_resolve_derives_k12_from_restraint() {
        let section = TimberSection::new(45.0, 290.0).unwrap();
        let f = DesignFactors::default().with_restraint_spacing(3000.0);
        let r = f.resolve(grade("SG8").unwrap(), &section).unwrap();

        let s1 = s1_compression_edge(290.0, 45.0, 3000.0);
        assert!(approx_eq(r.s1.unwrap(), s1));
        assert!(approx_eq(r.k12, k12(0.76, s1)));
        assert!(r.k12 < 1.0);
    }

    #[test]
    fn test_resolve_k12_override_wins() {
        let section = TimberSection::new(45.0, 290.0).unwrap();
        let f = DesignFactors {
            k12: Some(0.9),
            restraint_spacing_mm: Some(3000.0),
            ..Default::default()
        };
        let r = f.resolve(grade("SG8").unwrap(), &section).unwrap();
        assert_eq!(r.k12, 0.9);
    }

    #[test]
    fn test_resolve_k4_and_k7() {
        let section = TimberSection::new(90.0, 240.0).unwrap();
        let f = DesignFactors::default()
            .with_moisture(MoistureCondition::Wet)
            .with_bearing(75.0, false);
        let r = f.resolve(grade("SG8").unwrap(), &section).unwrap();
        assert_eq!(r.k4, 0.7);
        assert_eq!(r.k7, 1.15);
        assert!(approx_eq(r.common_product(), 0.8 * 0.7));
    }

    #[test]
    fn test_format_report_mentions_factors() {
        let report = ResolvedFactors::default().format_report();
        assert!(report.contains("k1  = 0.80"));
        assert!(report.contains("k12"));
        assert!(report.contains(code_ref::K7));
    }
}
