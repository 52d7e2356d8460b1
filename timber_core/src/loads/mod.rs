//! Load aggregation and combination per AS/NZS 1170
//!
//! Area loads (kPa) on tributary widths are turned into line loads (kN/m) on
//! the beam, beam self-weight is added to the dead load, and the line loads
//! are combined into the design intensities the analysis needs.
//!
//! # Overview
//!
//! - [`LoadType`] - Fixed categories (roof, floors, walls) with their imposed pressure
//! - [`LoadEntry`] - One load type with its dead pressure and tributary width
//! - [`StructuredLoads`] - The entries acting on one span
//! - [`LineLoads`] - Total G and Q with the ULS/SLS combinations applied
//! - [`PointLoad`] / [`OverhangPointLoad`] - Concentrated loads
//!
//! # Example
//!
//! ```
//! use timber_core::loads::{
//!     calc_self_weight, compute_line_loads, LoadEntry, LoadType, StructuredLoads, TributaryWidth,
//! };
//!
//! let loads = StructuredLoads::new(vec![
//!     LoadEntry::new(LoadType::MidFloor, 0.5, TributaryWidth::Dual { left_m: 1.2, right_m: 1.2 }),
//! ]);
//! let sw = calc_self_weight(90.0, 240.0, 450.0);
//! let line = compute_line_loads(&loads, sw);
//!
//! assert!((line.q - 3.6).abs() < 1e-9);
//! assert_eq!(line.uls_combo_label(), "1.2G + 1.5Q");
//! ```

pub mod combinations;
pub mod load_types;
pub mod point;

pub use combinations::{
    find_governing_combination, sls_long_term, sls_short_term, uls_combinations, LimitState,
    LoadCombination, PSI_LONG, PSI_SHORT,
};
pub use load_types::{LoadType, TributaryMode};
pub use point::{OverhangPointLoad, PointLoad};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Gravitational acceleration (m/s²)
pub const GRAVITY: f64 = 9.81;

/// Tributary width of a load entry
///
/// ## JSON Examples
///
/// ```json
/// { "Single": 0.9 }
/// { "Dual": { "left_m": 1.2, "right_m": 0.6 } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TributaryWidth {
    /// One width (m)
    Single(f64),
    /// Widths either side of the beam (m)
    Dual { left_m: f64, right_m: f64 },
}

impl TributaryWidth {
    /// Total width carried by the beam (m)
    pub fn total_m(&self) -> f64 {
        match *self {
            TributaryWidth::Single(w) => w,
            TributaryWidth::Dual { left_m, right_m } => left_m + right_m,
        }
    }

    /// Entry mode this width was given in
    pub fn mode(&self) -> TributaryMode {
        match self {
            TributaryWidth::Single(_) => TributaryMode::Single,
            TributaryWidth::Dual { .. } => TributaryMode::Dual,
        }
    }
}

/// One active load type on a beam
///
/// The imposed pressure is fixed by the load type and not stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadEntry {
    /// Load category
    pub load_type: LoadType,
    /// Dead (permanent) pressure (kPa)
    pub dead_kpa: f64,
    /// Tributary width
    pub trib: TributaryWidth,
}

impl LoadEntry {
    /// Create a load entry
    pub fn new(load_type: LoadType, dead_kpa: f64, trib: TributaryWidth) -> Self {
        LoadEntry { load_type, dead_kpa, trib }
    }

    /// Imposed pressure for this load type (kPa)
    pub fn live_kpa(&self) -> f64 {
        self.load_type.live_kpa()
    }

    /// Total pressure G + Q (kPa)
    pub fn total_kpa(&self) -> f64 {
        self.dead_kpa + self.live_kpa()
    }

    /// Total tributary width (m)
    pub fn trib_width_m(&self) -> f64 {
        self.trib.total_m()
    }

    /// Dead line load (kN/m)
    pub fn dead_line_kn_m(&self) -> f64 {
        self.dead_kpa * self.trib_width_m()
    }

    /// Imposed line load (kN/m)
    pub fn live_line_kn_m(&self) -> f64 {
        self.live_kpa() * self.trib_width_m()
    }

    /// Unfactored line load G + Q (kN/m)
    pub fn udl_kn_m(&self) -> f64 {
        self.total_kpa() * self.trib_width_m()
    }

    /// Check pressures and widths are non-negative and the width mode suits the type.
    pub fn validate(&self) -> CalcResult<()> {
        let field = self.load_type.display_name();
        if !(self.dead_kpa.is_finite() && self.dead_kpa >= 0.0) {
            return Err(CalcError::invalid_input(
                format!("{field} dead_kpa"),
                self.dead_kpa.to_string(),
                "Dead pressure must be zero or positive",
            ));
        }
        let widths = match self.trib {
            TributaryWidth::Single(w) => vec![w],
            TributaryWidth::Dual { left_m, right_m } => vec![left_m, right_m],
        };
        if let Some(w) = widths.into_iter().find(|w| !(w.is_finite() && *w >= 0.0)) {
            return Err(CalcError::invalid_input(
                format!("{field} trib"),
                w.to_string(),
                "Tributary width must be zero or positive",
            ));
        }
        if self.trib.mode() == TributaryMode::Dual && self.load_type.trib_mode() == TributaryMode::Single {
            return Err(CalcError::invalid_input(
                format!("{field} trib"),
                format!("{:?}", self.trib),
                "Left/right tributary widths apply to floor loads only",
            ));
        }
        Ok(())
    }
}

/// The load entries acting on one span
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredLoads {
    /// Active entries
    pub entries: Vec<LoadEntry>,
}

impl StructuredLoads {
    /// Create from a list of entries
    pub fn new(entries: Vec<LoadEntry>) -> Self {
        StructuredLoads { entries }
    }

    /// Add an entry (builder pattern)
    pub fn with_entry(mut self, entry: LoadEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Whether no load types are active
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of dead line loads (kN/m)
    pub fn total_g(&self) -> f64 {
        self.entries.iter().map(LoadEntry::dead_line_kn_m).sum()
    }

    /// Sum of imposed line loads (kN/m)
    pub fn total_q(&self) -> f64 {
        self.entries.iter().map(LoadEntry::live_line_kn_m).sum()
    }

    /// Unfactored total line load (kN/m)
    pub fn total_udl(&self) -> f64 {
        self.total_g() + self.total_q()
    }

    /// Validate every entry
    pub fn validate(&self) -> CalcResult<()> {
        self.entries.iter().try_for_each(LoadEntry::validate)
    }
}

/// Design UDL intensities for one span (kN/m)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpanUdl {
    /// ULS design load
    pub uls: f64,
    /// SLS short-term load G + ψs·Q
    pub sls_short: f64,
    /// SLS long-term load G + ψl·Q
    pub sls_long: f64,
    /// Dead load G
    pub dead: f64,
    /// Long-term imposed load ψl·Q
    pub long_term_live: f64,
}

impl SpanUdl {
    /// Whether the G / ψl·Q split is available for long-term deflection
    pub fn has_breakdown(&self) -> bool {
        self.dead > 0.0 || self.long_term_live > 0.0
    }
}

/// Total unfactored line loads on a span (kN/m)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LineLoads {
    /// Dead load G including self-weight
    pub g: f64,
    /// Imposed load Q
    pub q: f64,
}

impl LineLoads {
    /// Create from G and Q
    pub fn new(g: f64, q: f64) -> Self {
        LineLoads { g, q }
    }

    /// ULS design load max(1.35G, 1.2G + 1.5Q)
    pub fn w_uls(&self) -> f64 {
        find_governing_combination(self, &uls_combinations()).0
    }

    /// Equation of the governing ULS combination
    pub fn uls_combo_label(&self) -> String {
        find_governing_combination(self, &uls_combinations()).1.to_string()
    }

    /// SLS short-term load G + 0.7Q
    pub fn w_sls_short(&self) -> f64 {
        sls_short_term().apply(self)
    }

    /// SLS long-term load G + 0.4Q
    pub fn w_sls_long(&self) -> f64 {
        sls_long_term().apply(self)
    }

    /// Long-term imposed component ψl·Q
    pub fn long_term_live(&self) -> f64 {
        PSI_LONG * self.q
    }

    /// All design intensities for the analysis
    pub fn span_udl(&self) -> SpanUdl {
        SpanUdl {
            uls: self.w_uls(),
            sls_short: self.w_sls_short(),
            sls_long: self.w_sls_long(),
            dead: self.g,
            long_term_live: self.long_term_live(),
        }
    }
}

/// Beam self-weight as a dead line load (kN/m)
///
/// # Formula
/// SW = ρ × b × d × g / 1000, with b and d converted to metres
pub fn calc_self_weight(breadth_mm: f64, depth_mm: f64, density_kg_m3: f64) -> f64 {
    density_kg_m3 * (breadth_mm / 1000.0) * (depth_mm / 1000.0) * GRAVITY / 1000.0
}

/// Sum the load entries into line loads, adding self-weight to G.
pub fn compute_line_loads(loads: &StructuredLoads, self_weight_kn_m: f64) -> LineLoads {
    let line = LineLoads::new(loads.total_g() + self_weight_kn_m, loads.total_q());
    tracing::debug!(
        g = line.g,
        q = line.q,
        w_uls = line.w_uls(),
        combo = %line.uls_combo_label(),
        "computed line loads"
    );
    line
}
