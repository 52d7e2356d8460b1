//! # Design Check Engine
//!
//! Compares internal actions against AS 1720.1 capacities and produces one
//! [`CheckResult`] per limit state:
//!
//! - Simply supported: bending, shear, bearing, deflection short/long term (5)
//! - Overhanging: bending sagging/hogging, shear, bearing R1/R2, back-span
//!   deflection short/long term, overhang tip deflection short/long term (9)
//!
//! A grade without shear or bearing data does not error. The check comes
//! back failed with zero capacity and a "MANUAL CHECK REQUIRED" note.

use serde::{Deserialize, Serialize};

use crate::code_factors::{code_ref, ResolvedFactors};
use crate::materials::MaterialGrade;
use crate::section::TimberSection;
use crate::units::{KilonewtonMetres, Kilonewtons, NewtonMillimetres, Newtons};

use super::deflection::{overhanging_deflections, simply_supported_deflections, DeflectionPair, Stiffness};
use super::overhanging::OverhangingActions;
use super::simply_supported::SimplySupportedActions;
use super::BeamActions;

/// Utilisation reported when the capacity is zero or negative
pub const UTILISATION_SENTINEL: f64 = 999.0;

/// Utilisation as a percentage, demand / capacity × 100.
///
/// Non-positive capacity yields [`UTILISATION_SENTINEL`].
pub fn utilisation(demand: f64, capacity: f64) -> f64 {
    if capacity > 0.0 {
        demand / capacity * 100.0
    } else {
        UTILISATION_SENTINEL
    }
}

/// Outcome of one design check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "Bending",
///   "demand": 10.0,
///   "capacity": 7.74,
///   "utilisation": 129.2,
///   "passed": false,
///   "unit": "kNm",
///   "details": "phi=0.8, k1=0.8, ..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Check name, e.g. "Bending (hogging)"
    pub name: String,
    /// Design action effect
    pub demand: f64,
    /// Design capacity or allowable value
    pub capacity: f64,
    /// demand / capacity × 100
    pub utilisation: f64,
    /// utilisation ≤ 100
    pub passed: bool,
    /// Unit of demand and capacity
    pub unit: String,
    /// Human-readable derivation
    pub details: String,
}

impl CheckResult {
    /// Build a result, deriving utilisation and pass/fail from demand and capacity.
    pub fn new(
        name: impl Into<String>,
        demand: f64,
        capacity: f64,
        unit: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        let util = utilisation(demand, capacity);
        CheckResult {
            name: name.into(),
            demand,
            capacity,
            utilisation: util,
            passed: util <= 100.0,
            unit: unit.into(),
            details: details.into(),
        }
    }

    /// Failed result for a check the grade has no data for.
    pub fn manual_check_required(name: impl Into<String>, demand: f64, unit: impl Into<String>, data: &str) -> Self {
        let name = name.into();
        tracing::warn!(check = %name, "{} data not available, manual check required", data);
        CheckResult {
            name,
            demand,
            capacity: 0.0,
            utilisation: UTILISATION_SENTINEL,
            passed: false,
            unit: unit.into(),
            details: format!("{} data not available for this grade -- MANUAL CHECK REQUIRED", data),
        }
    }

    /// Whether this result was produced for missing grade data
    pub fn is_manual_check(&self) -> bool {
        self.details.contains("MANUAL CHECK REQUIRED")
    }

    /// Rename the check (builder pattern)
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Format a utilisation as e.g. "85.2% [OK]" or "100.4% [FAIL]".
///
/// One decimal place. Failing values round up so they never print as 100.0%.
pub fn format_utilisation(utilisation: f64) -> String {
    if utilisation <= 100.0 {
        format!("{:.1}% [OK]", utilisation)
    } else {
        format!("{:.1}% [FAIL]", (utilisation * 10.0).ceil() / 10.0)
    }
}

// =============================================================================
// STRENGTH CHECKS
// =============================================================================

/// Bending capacity φMd (kNm)
pub fn bending_capacity_knm(section: &TimberSection, grade: &MaterialGrade, f: &ResolvedFactors) -> f64 {
    let nmm = grade.phi * f.common_product() * f.k9 * f.k12 * grade.fb_mpa * section.zx_mm3();
    KilonewtonMetres::from(NewtonMillimetres(nmm)).value()
}

/// Shear capacity φVd (kN), `None` when the grade has no f's
pub fn shear_capacity_kn(section: &TimberSection, grade: &MaterialGrade, f: &ResolvedFactors) -> Option<f64> {
    grade.fs_mpa.map(|fs| {
        let n = grade.phi * f.common_product() * fs * section.shear_area_mm2();
        Kilonewtons::from(Newtons(n)).value()
    })
}

/// Bearing capacity φNd,p (kN), `None` when the grade has no f'p
pub fn bearing_capacity_kn(section: &TimberSection, grade: &MaterialGrade, f: &ResolvedFactors) -> Option<f64> {
    grade.fp_mpa.map(|fp| {
        let n = grade.phi * f.common_product() * f.k7 * fp * section.bearing_area_mm2(f.bearing_length_mm);
        Kilonewtons::from(Newtons(n)).value()
    })
}

/// Bending check, Md = φ·k1·k4·k6·k9·k12·f'b·Z ≥ M*
pub fn check_bending(m_star_knm: f64, section: &TimberSection, grade: &MaterialGrade, f: &ResolvedFactors) -> CheckResult {
    let details = format!(
        "phi={}, k1={}, k4={}, k6={}, k9={}, k12={:.3}, f'b={} MPa, Zx={:.1}x10^3 mm^3 [{}]",
        grade.phi,
        f.k1,
        f.k4,
        f.k6,
        f.k9,
        f.k12,
        grade.fb_mpa,
        section.zx_mm3() / 1e3,
        code_ref::BENDING
    );
    CheckResult::new("Bending", m_star_knm, bending_capacity_knm(section, grade, f), "kNm", details)
}

/// Shear check, Vd = φ·k1·k4·k6·f's·As ≥ V*
pub fn check_shear(v_star_kn: f64, section: &TimberSection, grade: &MaterialGrade, f: &ResolvedFactors) -> CheckResult {
    let (Some(fs), Some(capacity)) = (grade.fs_mpa, shear_capacity_kn(section, grade, f)) else {
        return CheckResult::manual_check_required("Shear", v_star_kn, "kN", "Shear");
    };
    let details = format!(
        "phi={}, k1={}, k4={}, k6={}, f's={} MPa, As=2/3*{}*{}={:.0} mm^2 [{}]",
        grade.phi,
        f.k1,
        f.k4,
        f.k6,
        fs,
        section.breadth_mm(),
        section.depth_mm(),
        section.shear_area_mm2(),
        code_ref::SHEAR
    );
    CheckResult::new("Shear", v_star_kn, capacity, "kN", details)
}

/// Bearing check, Nd,p = φ·k1·k4·k6·k7·f'p·Ap ≥ N*p
pub fn check_bearing(reaction_kn: f64, section: &TimberSection, grade: &MaterialGrade, f: &ResolvedFactors) -> CheckResult {
    let (Some(fp), Some(capacity)) = (grade.fp_mpa, bearing_capacity_kn(section, grade, f)) else {
        return CheckResult::manual_check_required("Bearing", reaction_kn, "kN", "Bearing");
    };
    let details = format!(
        "phi={}, k1={}, k4={}, k6={}, k7={:.3}, f'p={} MPa, Ap={}*{}={:.0} mm^2 [{}]",
        grade.phi,
        f.k1,
        f.k4,
        f.k6,
        f.k7,
        fp,
        f.bearing_length_mm,
        section.breadth_mm(),
        section.bearing_area_mm2(f.bearing_length_mm),
        code_ref::BEARING
    );
    CheckResult::new("Bearing", reaction_kn, capacity, "kN", details)
}

/// Bearing at both supports of an overhanging beam, (R1, R2).
///
/// An uplifting R1 has nothing bearing on the support. Its result passes with
/// zero demand and records the hold-down requirement.
pub fn check_bearing_overhanging(
    actions: &OverhangingActions,
    section: &TimberSection,
    grade: &MaterialGrade,
    f: &ResolvedFactors,
) -> (CheckResult, CheckResult) {
    let r2 = check_bearing(actions.r2.abs(), section, grade, f).named("Bearing (R2)");

    let r1 = if actions.has_uplift() {
        CheckResult {
            name: "Bearing (R1)".to_string(),
            demand: 0.0,
            capacity: bearing_capacity_kn(section, grade, f).unwrap_or(0.0),
            utilisation: 0.0,
            passed: true,
            unit: "kN".to_string(),
            details: format!(
                "R1 is in UPLIFT ({:.2} kN) -- hold-down connection required",
                actions.r1
            ),
        }
    } else {
        check_bearing(actions.r1.abs(), section, grade, f).named("Bearing (R1)")
    };

    (r1, r2)
}

// =============================================================================
// DEFLECTION CHECKS
// =============================================================================

fn point_load_note(count: usize) -> String {
    if count == 0 {
        String::new()
    } else {
        format!(" + {} point load(s)", count)
    }
}

/// Short- and long-term midspan deflection checks for a simple span.
pub fn check_deflection_simply_supported(
    actions: &SimplySupportedActions,
    section: &TimberSection,
    grade: &MaterialGrade,
    f: &ResolvedFactors,
) -> (CheckResult, CheckResult) {
    let ix = section.ix_mm4();
    let DeflectionPair { short_mm, long_mm } =
        simply_supported_deflections(actions, Stiffness::new(grade.e_mpa, ix), grade.k2);
    let allowable = actions.span_m * 1000.0 / f.deflection_limit;
    let pl_note = point_load_note(actions.point_loads.len());

    let short = CheckResult::new(
        "Deflection (short-term)",
        short_mm,
        allowable,
        "mm",
        format!(
            "E={:.0} MPa, Ix={:.1}x10^6 mm^4, w_sls_short={:.3} kN/m (G+0.7Q){}, delta={:.1} mm, allow=L/{}={:.1} mm",
            grade.e_mpa,
            ix / 1e6,
            actions.udl.sls_short,
            pl_note,
            short_mm,
            f.deflection_limit,
            allowable
        ),
    );
    let long = CheckResult::new(
        "Deflection (long-term)",
        long_mm,
        allowable,
        "mm",
        format!(
            "E={:.0} MPa, Ix={:.1}x10^6 mm^4, k2={}, delta_LT = k2*delta(G) + delta(0.4Q){}, delta_long={:.1} mm, allow=L/{}={:.1} mm [{}]",
            grade.e_mpa,
            ix / 1e6,
            grade.k2,
            pl_note,
            long_mm,
            f.deflection_limit,
            allowable,
            code_ref::LONG_TERM_DEFLECTION
        ),
    );
    (short, long)
}

/// Back-span and tip deflection checks for an overhanging beam:
/// (back short, back long, tip short, tip long).
pub fn check_deflection_overhanging(
    actions: &OverhangingActions,
    section: &TimberSection,
    grade: &MaterialGrade,
    f: &ResolvedFactors,
) -> [CheckResult; 4] {
    let d = overhanging_deflections(actions, Stiffness::new(grade.e_mpa, section.ix_mm4()), grade.k2);
    let k2 = grade.k2;
    let allow_back = actions.back_span_m * 1000.0 / f.deflection_limit;
    let allow_tip = actions.cantilever_m * 1000.0 / f.deflection_limit_tip;

    [
        CheckResult::new(
            "Defl. back span (ST)",
            d.back_span.short_mm,
            allow_back,
            "mm",
            format!("Between supports, short-term. allow=ell/{}={:.1}mm", f.deflection_limit, allow_back),
        ),
        CheckResult::new(
            "Defl. back span (LT)",
            d.back_span.long_mm,
            allow_back,
            "mm",
            format!(
                "Between supports, LT: k2*d(G)+d(0.4Q), k2={}. allow=ell/{}={:.1}mm",
                k2, f.deflection_limit, allow_back
            ),
        ),
        CheckResult::new(
            "Defl. overhang (ST)",
            d.tip.short_mm,
            allow_tip,
            "mm",
            format!("At free end, short-term. allow=a/{}={:.1}mm", f.deflection_limit_tip, allow_tip),
        ),
        CheckResult::new(
            "Defl. overhang (LT)",
            d.tip.long_mm,
            allow_tip,
            "mm",
            format!(
                "At free end, LT: k2*d(G)+d(0.4Q), k2={}. allow=a/{}={:.1}mm",
                k2, f.deflection_limit_tip, allow_tip
            ),
        ),
    ]
}

// =============================================================================
// ALL CHECKS
// =============================================================================

/// Run every check for the beam's support condition, in report order.
pub fn run_all_checks(
    actions: &BeamActions,
    section: &TimberSection,
    grade: &MaterialGrade,
    f: &ResolvedFactors,
) -> Vec<CheckResult> {
    match actions {
        BeamActions::SimplySupported(ss) => {
            let (defl_st, defl_lt) = check_deflection_simply_supported(ss, section, grade, f);
            vec![
                check_bending(ss.m_star, section, grade, f),
                check_shear(ss.v_star, section, grade, f),
                check_bearing(ss.r_max, section, grade, f),
                defl_st,
                defl_lt,
            ]
        }
        BeamActions::Overhanging(oh) => {
            let sag = check_bending(oh.m_sagging, section, grade, f).named("Bending (sagging)");
            let hog = check_bending(oh.m_hogging, section, grade, f).named("Bending (hogging)");
            let shear = check_shear(oh.v_star, section, grade, f);
            let (r1, r2) = check_bearing_overhanging(oh, section, grade, f);
            let mut checks = vec![sag, hog, shear, r1, r2];
            checks.extend(check_deflection_overhanging(oh, section, grade, f));
            checks
        }
    }
}

/// Overall verdict across a set of checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSummary {
    /// Every check passed
    pub all_passed: bool,
    /// Highest utilisation (%)
    pub max_utilisation: f64,
    /// Name of the check with the highest utilisation
    pub governing_check: String,
    /// Names of failing checks, in report order
    pub failing_checks: Vec<String>,
    /// Names of checks that need manual verification
    pub manual_checks: Vec<String>,
}

impl DesignSummary {
    /// Summarise a list of check results
    pub fn from_checks(checks: &[CheckResult]) -> Self {
        let governing = checks
            .iter()
            .fold(None::<&CheckResult>, |best, c| match best {
                Some(b) if b.utilisation >= c.utilisation => Some(b),
                _ => Some(c),
            });
        DesignSummary {
            all_passed: checks.iter().all(|c| c.passed),
            max_utilisation: governing.map_or(0.0, |c| c.utilisation),
            governing_check: governing.map(|c| c.name.clone()).unwrap_or_default(),
            failing_checks: checks.iter().filter(|c| !c.passed).map(|c| c.name.clone()).collect(),
            manual_checks: checks.iter().filter(|c| c.is_manual_check()).map(|c| c.name.clone()).collect(),
        }
    }

    /// One-line verdict, e.g. "PASS - max 85.2% (Bending)"
    pub fn headline(&self) -> String {
        let verdict = if self.all_passed { "PASS" } else { "FAIL" };
        format!("{} - max {:.1}% ({})", verdict, self.max_utilisation, self.governing_check)
    }
}

/// Plain-text table of check results
pub fn format_results_table(checks: &[CheckResult]) -> String {
    let mut out = format!(
        "{:<24} {:>10} {:>10} {:>6}  {:<12}\n",
        "Check", "Demand", "Capacity", "Unit", "Utilisation"
    );
    out.push_str(&"-".repeat(68));
    out.push('\n');
    for c in checks {
        out.push_str(&format!(
            "{:<24} {:>10.2} {:>10.2} {:>6}  {:<12}\n",
            c.name,
            c.demand,
            c.capacity,
            c.unit,
            format_utilisation(c.utilisation)
        ));
    }
    out
}
