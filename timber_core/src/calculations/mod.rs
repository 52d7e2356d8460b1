//! # Beam Calculations
//!
//! Analysis, deflection and design checks for single-span timber beams. Each
//! stage is a pure function over JSON-serializable types:
//!
//! - [`simply_supported`] - pin-roller single span
//! - [`overhanging`] - back span with a one-sided overhang
//! - [`deflection`] - closed-form elastic deflections, short and long term
//! - [`checks`] - AS 1720.1 capacity checks and utilisation
//! - [`design`] - the end-to-end pipeline, `calculate(input) -> result`

pub mod checks;
pub mod deflection;
pub mod design;
pub mod overhanging;
pub mod simply_supported;

use serde::{Deserialize, Serialize};

pub use checks::{format_utilisation, run_all_checks, CheckResult, DesignSummary};
pub use design::{calculate, BeamDesignInput, BeamDesignResult, PointLoadPolicy, SupportCondition};
pub use overhanging::{analyse_overhanging, OverhangingActions, OverhangingInput};
pub use simply_supported::{analyse_simply_supported, SimplySupportedActions};

/// Internal actions for either support arrangement.
///
/// Serialized with a `"type"` tag so results from both arrangements can sit
/// in one collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BeamActions {
    /// Single span on pin-roller supports
    SimplySupported(SimplySupportedActions),
    /// Back span with an overhang
    Overhanging(OverhangingActions),
}

impl BeamActions {
    /// Governing design moment M* (kNm)
    pub fn m_star(&self) -> f64 {
        match self {
            BeamActions::SimplySupported(a) => a.m_star,
            BeamActions::Overhanging(a) => a.m_star,
        }
    }

    /// Design shear V* (kN)
    pub fn v_star(&self) -> f64 {
        match self {
            BeamActions::SimplySupported(a) => a.v_star,
            BeamActions::Overhanging(a) => a.v_star,
        }
    }

    /// Largest support reaction magnitude (kN)
    pub fn r_max(&self) -> f64 {
        match self {
            BeamActions::SimplySupported(a) => a.r_max,
            BeamActions::Overhanging(a) => a.r_max,
        }
    }

    /// Whether the end support R1 is in uplift
    pub fn has_uplift(&self) -> bool {
        match self {
            BeamActions::SimplySupported(_) => false,
            BeamActions::Overhanging(a) => a.has_uplift(),
        }
    }

    /// Support arrangement as text
    pub fn label(&self) -> &'static str {
        match self {
            BeamActions::SimplySupported(_) => "Simply supported",
            BeamActions::Overhanging(_) => "Overhanging",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::SpanUdl;

    #[test]
    fn test_accessors_and_tag() {
        let udl = SpanUdl { uls: 5.0, ..Default::default() };
        let actions = BeamActions::SimplySupported(analyse_simply_supported(4.0, udl, &[]).unwrap());
        assert_eq!(actions.m_star(), 10.0);
        assert_eq!(actions.v_star(), 10.0);
        assert!(!actions.has_uplift());

        let json = serde_json::to_string(&actions).unwrap();
        assert!(json.contains("\"type\":\"simply_supported\""));
    }

    #[test]
    fn test_overhanging_uplift_flag() {
        let input = OverhangingInput {
            total_span_m: 4.0,
            cantilever_m: 1.0,
            cant_udl: SpanUdl { uls: 5.0, ..Default::default() },
            ..Default::default()
        };
        let actions = BeamActions::Overhanging(analyse_overhanging(&input).unwrap());
        assert!(actions.has_uplift());
        assert_eq!(actions.label(), "Overhanging");
    }
}
