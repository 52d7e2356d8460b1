//! # Beam Design Pipeline
//!
//! One request in, one complete result out:
//!
//! 1. Validate section, grade, geometry, loads and factor overrides
//! 2. Self-weight and line loads (cantilever loading defaults to the back span's)
//! 3. Apply the [`PointLoadPolicy`] to out-of-range point loads
//! 4. Analyse ([`analyse_simply_supported`] or [`analyse_overhanging`])
//! 5. Run every design check and summarise
//!
//! ## Example
//!
//! ```rust
//! use timber_core::calculations::design::{calculate, BeamDesignInput};
//!
//! let input = BeamDesignInput::example(false);
//! let result = calculate(&input).unwrap();
//!
//! assert_eq!(result.checks.len(), 5);
//! println!("{}", result.summary.headline());
//! ```

use serde::{Deserialize, Serialize};

use crate::code_factors::{DesignFactors, ResolvedFactors};
use crate::errors::{CalcError, CalcResult};
use crate::loads::{
    calc_self_weight, compute_line_loads, LineLoads, LoadEntry, LoadType, OverhangPointLoad, PointLoad,
    StructuredLoads, TributaryWidth,
};
use crate::materials::grade;
use crate::section::TimberSection;

use super::checks::{format_results_table, run_all_checks, CheckResult, DesignSummary};
use super::overhanging::{analyse_overhanging, OverhangingInput};
use super::simply_supported::analyse_simply_supported;
use super::BeamActions;

/// Support arrangement of the beam.
///
/// ## JSON Examples
///
/// ```json
/// { "type": "simply_supported" }
/// { "type": "overhanging", "cantilever_m": 1.2, "cantilever_loads": [] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SupportCondition {
    /// Pin-roller single span
    #[default]
    SimplySupported,
    /// Back span plus a one-sided overhang at the right-hand end
    Overhanging {
        /// Overhang length a (m), measured beyond the interior support
        cantilever_m: f64,
        /// Loading on the overhang; empty means the back-span loading applies
        #[serde(default)]
        cantilever_loads: Vec<LoadEntry>,
    },
}

/// What to do with a point load whose position lies outside its span
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointLoadPolicy {
    /// Fail the calculation
    #[default]
    Reject,
    /// Drop the load, log a warning and list it in the result
    Exclude,
}

/// Complete beam design request.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "grade": "SG8",
///   "breadth_mm": 90.0,
///   "depth_mm": 240.0,
///   "span_m": 3.6,
///   "support": { "type": "simply_supported" },
///   "loads": [
///     { "load_type": "MidFloor", "dead_kpa": 0.5, "trib": { "Dual": { "left_m": 0.6, "right_m": 0.6 } } }
///   ],
///   "point_loads": [ { "p_uls_kn": 6.0, "p_sls_kn": 4.0, "a_m": 1.8 } ],
///   "factors": { "load_duration": "medium_term" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamDesignInput {
    /// User label (e.g. "B-1")
    #[serde(default)]
    pub label: String,
    /// Grade name as listed in the grade table
    pub grade: String,
    /// Section breadth b (mm)
    pub breadth_mm: f64,
    /// Section depth d (mm)
    pub depth_mm: f64,
    /// Total beam length (m). For overhanging beams this is ℓ + a.
    pub span_m: f64,
    /// Support arrangement
    #[serde(default)]
    pub support: SupportCondition,
    /// Area loads on the (back) span
    pub loads: Vec<LoadEntry>,
    /// Point loads on the (back) span, measured from the left support
    #[serde(default)]
    pub point_loads: Vec<PointLoad>,
    /// Point loads on the overhang, measured from the interior support
    #[serde(default)]
    pub cantilever_point_loads: Vec<OverhangPointLoad>,
    /// Code factor overrides
    #[serde(default)]
    pub factors: DesignFactors,
    /// Handling of out-of-range point loads
    #[serde(default)]
    pub point_load_policy: PointLoadPolicy,
}

impl BeamDesignInput {
    /// Parse a request from JSON
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sample request: a 3.6 m SG8 floor beam, or with `overhang` a 4.2 m
    /// roof beam with a 0.9 m overhang.
    pub fn example(overhang: bool) -> Self {
        if overhang {
            BeamDesignInput {
                label: "RB-1".to_string(),
                grade: "SG8".to_string(),
                breadth_mm: 90.0,
                depth_mm: 240.0,
                span_m: 4.2,
                support: SupportCondition::Overhanging {
                    cantilever_m: 0.9,
                    cantilever_loads: Vec::new(),
                },
                loads: vec![LoadEntry::new(LoadType::Roof, 0.4, TributaryWidth::Single(1.8))],
                point_loads: Vec::new(),
                cantilever_point_loads: vec![OverhangPointLoad::new(2.0, 1.2, 0.9)],
                factors: DesignFactors::default(),
                point_load_policy: PointLoadPolicy::Reject,
            }
        } else {
            BeamDesignInput {
                label: "B-1".to_string(),
                grade: "SG8".to_string(),
                breadth_mm: 90.0,
                depth_mm: 240.0,
                span_m: 3.6,
                support: SupportCondition::SimplySupported,
                loads: vec![LoadEntry::new(
                    LoadType::MidFloor,
                    0.5,
                    TributaryWidth::Dual { left_m: 0.6, right_m: 0.6 },
                )],
                point_loads: vec![PointLoad::new(6.0, 4.0, 1.8)],
                cantilever_point_loads: Vec::new(),
                factors: DesignFactors::default(),
                point_load_policy: PointLoadPolicy::Reject,
            }
        }
    }

    fn validate(&self) -> CalcResult<()> {
        if !(self.span_m.is_finite() && self.span_m > 0.0) {
            return Err(CalcError::invalid_input("span_m", self.span_m.to_string(), "Span must be positive"));
        }
        if self.loads.is_empty() {
            return Err(CalcError::missing_field("loads"));
        }
        self.loads.iter().try_for_each(LoadEntry::validate)?;
        match &self.support {
            SupportCondition::SimplySupported => {
                if !self.cantilever_point_loads.is_empty() {
                    return Err(CalcError::invalid_input(
                        "cantilever_point_loads",
                        self.cantilever_point_loads.len().to_string(),
                        "Overhang point loads require an overhanging support",
                    ));
                }
            }
            SupportCondition::Overhanging {
                cantilever_m,
                cantilever_loads,
            } => {
                cantilever_loads.iter().try_for_each(LoadEntry::validate)?;
                // Geometry only; point loads are policed separately
                OverhangingInput {
                    total_span_m: self.span_m,
                    cantilever_m: *cantilever_m,
                    ..Default::default()
                }
                .validate()?;
            }
        }
        Ok(())
    }
}

/// Complete design result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamDesignResult {
    /// User label echoed from the request
    pub label: String,
    /// Grade name
    pub grade: String,
    /// Section used
    pub section: TimberSection,
    /// Beam self-weight included in G (kN/m)
    pub self_weight_kn_m: f64,
    /// Line loads on the (back) span
    pub line_loads: LineLoads,
    /// Line loads on the overhang, if any
    pub cantilever_line_loads: Option<LineLoads>,
    /// Governing ULS combination on the (back) span
    pub uls_combination: String,
    /// Factors actually applied
    pub factors: ResolvedFactors,
    /// Internal actions
    pub actions: BeamActions,
    /// Design checks in report order
    pub checks: Vec<CheckResult>,
    /// Overall verdict
    pub summary: DesignSummary,
    /// Back-span point loads dropped under [`PointLoadPolicy::Exclude`]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_point_loads: Vec<PointLoad>,
    /// Overhang point loads dropped under [`PointLoadPolicy::Exclude`]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_cantilever_point_loads: Vec<OverhangPointLoad>,
    /// R1 is in uplift and needs a hold-down connection
    pub hold_down_required: bool,
}

impl BeamDesignResult {
    /// True if every check passed
    pub fn passes(&self) -> bool {
        self.summary.all_passed
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain-text report: header, loads, factors, check table and verdict.
    pub fn format_report(&self) -> String {
        let mut out = String::new();
        let title = if self.label.is_empty() { "Beam" } else { self.label.as_str() };
        out.push_str(&format!("{} - {} {} ({})\n\n", title, self.grade, self.section.label(), self.actions.label()));
        out.push_str(&format!(
            "Self-weight {:.4} kN/m, G = {:.3} kN/m, Q = {:.3} kN/m, ULS {} = {:.3} kN/m\n",
            self.self_weight_kn_m,
            self.line_loads.g,
            self.line_loads.q,
            self.uls_combination,
            self.line_loads.w_uls()
        ));
        if let Some(cant) = &self.cantilever_line_loads {
            out.push_str(&format!(
                "Overhang: G = {:.3} kN/m, Q = {:.3} kN/m, ULS = {:.3} kN/m\n",
                cant.g,
                cant.q,
                cant.w_uls()
            ));
        }
        out.push_str(&format!(
            "M* = {:.2} kNm, V* = {:.2} kN, R_max = {:.2} kN\n\n",
            self.actions.m_star(),
            self.actions.v_star(),
            self.actions.r_max()
        ));
        out.push_str(&self.factors.format_report());
        out.push_str("\n\n");
        out.push_str(&format_results_table(&self.checks));
        out.push('\n');
        for c in self.checks.iter().filter(|c| !c.details.is_empty()) {
            out.push_str(&format!("  {}: {}\n", c.name, c.details));
        }
        let excluded = self.excluded_point_loads.len() + self.excluded_cantilever_point_loads.len();
        if excluded > 0 {
            out.push_str(&format!("\n{} point load(s) outside their span were excluded\n", excluded));
        }
        if self.hold_down_required {
            out.push_str("\nR1 is in uplift: provide a hold-down connection\n");
        }
        out.push_str(&format!("\n{}\n", self.summary.headline()));
        out
    }
}

/// Split loads into (kept, excluded) by a validity predicate, honouring the policy.
fn apply_policy<T: Copy>(
    loads: &[T],
    is_valid: impl Fn(&T) -> bool,
    policy: PointLoadPolicy,
    field: &str,
    position: impl Fn(&T) -> f64,
    limit_m: f64,
) -> CalcResult<(Vec<T>, Vec<T>)> {
    let (kept, excluded): (Vec<T>, Vec<T>) = loads.iter().copied().partition(|pl| is_valid(pl));
    if let Some(first) = excluded.first() {
        match policy {
            PointLoadPolicy::Reject => {
                return Err(CalcError::invalid_input(
                    field,
                    position(first).to_string(),
                    format!("Point load position lies outside the {} m span", limit_m),
                ));
            }
            PointLoadPolicy::Exclude => {
                for pl in &excluded {
                    tracing::warn!(field, position_m = position(pl), limit_m, "excluding out-of-range point load");
                }
            }
        }
    }
    Ok((kept, excluded))
}

/// Run the full design for one beam.
///
/// # Errors
///
/// - [`CalcError::InvalidInput`] for non-positive dimensions or spans, bad
///   pressures, bad factor overrides, or point loads outside their span under
///   [`PointLoadPolicy::Reject`]
/// - [`CalcError::MissingField`] when no load entries are given
/// - [`CalcError::MaterialNotFound`] for an unknown grade
/// - [`CalcError::InvalidGeometry`] when the overhang is not shorter than the beam
pub fn calculate(input: &BeamDesignInput) -> CalcResult<BeamDesignResult> {
    let section = TimberSection::new(input.breadth_mm, input.depth_mm)?;
    let grade = grade(&input.grade)?;
    input.validate()?;
    let factors = input.factors.resolve(grade, &section)?;

    let self_weight = calc_self_weight(input.breadth_mm, input.depth_mm, grade.density_kg_m3);
    let line_loads = compute_line_loads(&StructuredLoads::new(input.loads.clone()), self_weight);

    let (actions, cantilever_line_loads, excluded_point_loads, excluded_cantilever_point_loads) = match &input.support {
        SupportCondition::SimplySupported => {
            let span = input.span_m;
            let (kept, excluded) = apply_policy(
                &input.point_loads,
                |pl| pl.is_valid(span),
                input.point_load_policy,
                "point_loads",
                |pl| pl.a_m,
                span,
            )?;
            let ss = analyse_simply_supported(span, line_loads.span_udl(), &kept)?;
            (BeamActions::SimplySupported(ss), None, excluded, Vec::new())
        }
        SupportCondition::Overhanging {
            cantilever_m,
            cantilever_loads,
        } => {
            let cant_lines = if cantilever_loads.is_empty() {
                line_loads
            } else {
                compute_line_loads(&StructuredLoads::new(cantilever_loads.clone()), self_weight)
            };
            let ell = input.span_m - cantilever_m;
            let a = *cantilever_m;
            let (back_kept, back_excluded) = apply_policy(
                &input.point_loads,
                |pl| pl.is_valid(ell),
                input.point_load_policy,
                "point_loads",
                |pl| pl.a_m,
                ell,
            )?;
            let (cant_kept, cant_excluded) = apply_policy(
                &input.cantilever_point_loads,
                |pl| pl.is_valid(a),
                input.point_load_policy,
                "cantilever_point_loads",
                |pl| pl.x_m,
                a,
            )?;
            let oh = analyse_overhanging(&OverhangingInput {
                total_span_m: input.span_m,
                cantilever_m: a,
                back_udl: line_loads.span_udl(),
                cant_udl: cant_lines.span_udl(),
                back_point_loads: back_kept,
                cant_point_loads: cant_kept,
            })?;
            (BeamActions::Overhanging(oh), Some(cant_lines), back_excluded, cant_excluded)
        }
    };

    let checks = run_all_checks(&actions, &section, grade, &factors);
    let summary = DesignSummary::from_checks(&checks);
    let hold_down_required = actions.has_uplift();

    tracing::debug!(
        label = %input.label,
        grade = %grade.name,
        section = %section.label(),
        all_passed = summary.all_passed,
        max_utilisation = summary.max_utilisation,
        governing = %summary.governing_check,
        "beam design complete"
    );

    Ok(BeamDesignResult {
        label: input.label.clone(),
        grade: grade.name.clone(),
        section,
        self_weight_kn_m: self_weight,
        uls_combination: line_loads.uls_combo_label(),
        line_loads,
        cantilever_line_loads,
        factors,
        actions,
        checks,
        summary,
        excluded_point_loads,
        excluded_cantilever_point_loads,
        hold_down_required,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_simply_supported_example() {
        let result = calculate(&BeamDesignInput::example(false)).unwrap();
        assert_eq!(result.checks.len(), 5);
        assert!(result.cantilever_line_loads.is_none());
        assert!(!result.hold_down_required);
        // Mid floor: 1.5 kPa live on 1.2 m
        assert!(approx_eq(result.line_loads.q, 1.8, 1e-9));
        assert!(approx_eq(result.line_loads.g, 0.6 + result.self_weight_kn_m, 1e-9));
        assert_eq!(result.uls_combination, "1.2G + 1.5Q");
    }

    #[test]
    fn test_overhanging_example() {
        let result = calculate(&BeamDesignInput::example(true)).unwrap();
        assert_eq!(result.checks.len(), 9);
        // Cantilever loading defaults to the back-span loading
        assert_eq!(result.cantilever_line_loads, Some(result.line_loads));
    }

    #[test]
    fn test_explicit_cantilever_loads() {
        let mut input = BeamDesignInput::example(true);
        input.support = SupportCondition::Overhanging {
            cantilever_m: 0.9,
            cantilever_loads: vec![LoadEntry::new(LoadType::Roof, 1.0, TributaryWidth::Single(1.8))],
        };
        let result = calculate(&input).unwrap();
        let cant = result.cantilever_line_loads.unwrap();
        assert!(cant.g > result.line_loads.g);
    }

    #[test]
    fn test_empty_loads_rejected() {
        let mut input = BeamDesignInput::example(false);
        input.loads.clear();
        let err = calculate(&input).unwrap_err();
        assert_eq!(err, CalcError::missing_field("loads"));
    }

    #[test]
    fn test_unknown_grade() {
        let mut input = BeamDesignInput::example(false);
        input.grade = "SG99".to_string();
        assert_eq!(calculate(&input).unwrap_err().error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_cantilever_not_shorter_than_span() {
        let mut input = BeamDesignInput::example(true);
        input.support = SupportCondition::Overhanging {
            cantilever_m: 4.2,
            cantilever_loads: Vec::new(),
        };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_point_load_policy() {
        let mut input = BeamDesignInput::example(false);
        input.point_loads.push(PointLoad::new(5.0, 3.0, 10.0));
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");

        input.point_load_policy = PointLoadPolicy::Exclude;
        let result = calculate(&input).unwrap();
        assert_eq!(result.excluded_point_loads, vec![PointLoad::new(5.0, 3.0, 10.0)]);
        match &result.actions {
            BeamActions::SimplySupported(ss) => assert_eq!(ss.point_loads.len(), 1),
            BeamActions::Overhanging(_) => panic!("expected simply-supported actions"),
        }
    }

    #[test]
    fn test_point_load_policy_back_span_of_overhang() {
        // ℓ = 4.2 - 0.9 = 3.3 m; a = 3.5 m lies past the interior support
        let mut input = BeamDesignInput::example(true);
        input.point_loads = vec![PointLoad::new(4.0, 3.0, 1.5), PointLoad::new(5.0, 3.0, 3.5)];
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        input.point_load_policy = PointLoadPolicy::Exclude;
        let result = calculate(&input).unwrap();
        assert_eq!(result.excluded_point_loads, vec![PointLoad::new(5.0, 3.0, 3.5)]);
        assert!(result.excluded_cantilever_point_loads.is_empty());
        match &result.actions {
            BeamActions::Overhanging(oh) => {
                assert_eq!(oh.back_point_loads, vec![PointLoad::new(4.0, 3.0, 1.5)]);
                assert_eq!(oh.cant_point_loads.len(), 1);
            }
            BeamActions::SimplySupported(_) => panic!("expected overhanging actions"),
        }
    }

    #[test]
    fn test_point_load_policy_overhang() {
        // Overhang is 0.9 m; x = 1.0 lies beyond the free end
        let mut input = BeamDesignInput::example(true);
        input.cantilever_point_loads.push(OverhangPointLoad::new(1.0, 0.8, 1.0));
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        input.point_load_policy = PointLoadPolicy::Exclude;
        let result = calculate(&input).unwrap();
        assert_eq!(result.excluded_cantilever_point_loads, vec![OverhangPointLoad::new(1.0, 0.8, 1.0)]);
        assert!(result.excluded_point_loads.is_empty());
        match &result.actions {
            BeamActions::Overhanging(oh) => {
                assert_eq!(oh.cant_point_loads, vec![OverhangPointLoad::new(2.0, 1.2, 0.9)]);
            }
            BeamActions::SimplySupported(_) => panic!("expected overhanging actions"),
        }
        assert!(result.format_report().contains("1 point load(s) outside their span were excluded"));
    }

    #[test]
    fn test_overhang_point_loads_on_simple_span_rejected() {
        let mut input = BeamDesignInput::example(false);
        input.cantilever_point_loads.push(OverhangPointLoad::new(1.0, 1.0, 0.5));
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_json_request_with_defaults() {
        let json = r#"{
            "grade": "SG8",
            "breadth_mm": 90.0,
            "depth_mm": 240.0,
            "span_m": 4.0,
            "loads": [ { "load_type": "Roof", "dead_kpa": 0.5, "trib": { "Single": 1.2 } } ]
        }"#;
        let input = BeamDesignInput::from_json(json).unwrap();
        assert_eq!(input.support, SupportCondition::SimplySupported);
        assert_eq!(input.point_load_policy, PointLoadPolicy::Reject);
        assert_eq!(input.factors, DesignFactors::default());
        assert!(calculate(&input).is_ok());
    }

    #[test]
    fn test_bad_json_is_serialization_error() {
        let err = BeamDesignInput::from_json("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_result_serializes() {
        let result = calculate(&BeamDesignInput::example(true)).unwrap();
        let json = result.to_json().unwrap();
        assert!(json.contains("\"type\": \"overhanging\""));
        let back: BeamDesignResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.checks.len(), result.checks.len());
        assert_eq!(back.summary.governing_check, result.summary.governing_check);
    }

    #[test]
    fn test_report_mentions_every_check() {
        let result = calculate(&BeamDesignInput::example(true)).unwrap();
        let report = result.format_report();
        for c in &result.checks {
            assert!(report.contains(&c.name));
        }
        assert!(report.contains(&result.summary.headline()));
    }

    #[test]
    fn test_idempotent() {
        let input = BeamDesignInput::example(true);
        assert_eq!(calculate(&input).unwrap(), calculate(&input).unwrap());
    }
}
