//! AS/NZS 1170.0 Load Combinations
//!
//! Strength (ULS) and serviceability (SLS) combinations of the dead (G) and
//! imposed (Q) line loads. The beam engine only needs the gravity set:
//!
//! | Name   | Equation      | Use                          |
//! |--------|---------------|------------------------------|
//! | ULS-1  | 1.35G         | Strength, dead dominated     |
//! | ULS-2  | 1.2G + 1.5Q   | Strength, imposed            |
//! | SLS-S  | G + 0.7Q      | Short-term deflection (ψs)   |
//! | SLS-L  | G + 0.4Q      | Long-term deflection (ψl)    |

use serde::{Deserialize, Serialize};

use super::LineLoads;

/// Short-term imposed load factor ψs for floors
pub const PSI_SHORT: f64 = 0.7;

/// Long-term imposed load factor ψl for floors
pub const PSI_LONG: f64 = 0.4;

/// Limit state a combination belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LimitState {
    /// Ultimate (strength)
    Ultimate,
    /// Serviceability, short-term
    ServiceabilityShort,
    /// Serviceability, long-term
    ServiceabilityLong,
}

/// A load combination with factors on G and Q
///
/// # Example
/// ```
/// use timber_core::loads::{LineLoads, LoadCombination, LimitState};
///
/// let combo = LoadCombination::new("ULS-2", "1.2G + 1.5Q", LimitState::Ultimate, 1.2, 1.5);
/// let loads = LineLoads::new(2.0, 1.0);
/// assert!((combo.apply(&loads) - 3.9).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Combination identifier (e.g., "ULS-1")
    pub name: String,

    /// Human-readable equation (e.g., "1.2G + 1.5Q")
    pub equation: String,

    /// Limit state this combination is used for
    pub limit_state: LimitState,

    /// Factor on the dead load G
    pub dead_factor: f64,

    /// Factor on the imposed load Q
    pub live_factor: f64,
}

impl LoadCombination {
    /// Create a new load combination
    pub fn new(
        name: impl Into<String>,
        equation: impl Into<String>,
        limit_state: LimitState,
        dead_factor: f64,
        live_factor: f64,
    ) -> Self {
        LoadCombination {
            name: name.into(),
            equation: equation.into(),
            limit_state,
            dead_factor,
            live_factor,
        }
    }

    /// Factored line load for `loads` (kN/m)
    pub fn apply(&self, loads: &LineLoads) -> f64 {
        self.dead_factor * loads.g + self.live_factor * loads.q
    }
}

/// Strength combinations for gravity loading, in priority order
pub fn uls_combinations() -> Vec<LoadCombination> {
    vec![
        LoadCombination::new("ULS-1", "1.35G", LimitState::Ultimate, 1.35, 0.0),
        LoadCombination::new("ULS-2", "1.2G + 1.5Q", LimitState::Ultimate, 1.2, 1.5),
    ]
}

/// Short-term serviceability combination G + ψs·Q
pub fn sls_short_term() -> LoadCombination {
    LoadCombination::new("SLS-S", "G + 0.7Q", LimitState::ServiceabilityShort, 1.0, PSI_SHORT)
}

/// Long-term serviceability combination G + ψl·Q
pub fn sls_long_term() -> LoadCombination {
    LoadCombination::new("SLS-L", "G + 0.4Q", LimitState::ServiceabilityLong, 1.0, PSI_LONG)
}

/// Find the combination giving the largest factored load.
///
/// Ties go to the earlier combination, so with Q = 0 the 1.35G case governs.
/// Returns `(0.0, "")` for an empty list.
pub fn find_governing_combination<'a>(
    loads: &LineLoads,
    combinations: &'a [LoadCombination],
) -> (f64, &'a str) {
    let mut governing: Option<(f64, &'a str)> = None;
    for combo in combinations {
        let value = combo.apply(loads);
        match governing {
            Some((max, _)) if value <= max => {}
            _ => governing = Some((value, combo.equation.as_str())),
        }
    }
    governing.unwrap_or((0.0, ""))
}
