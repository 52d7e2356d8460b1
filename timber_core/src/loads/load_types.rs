//! Load type definitions per AS/NZS 1170.1
//!
//! Each load type carries a fixed imposed (live) pressure and says whether
//! its tributary width is a single value or a left + right pair.

use serde::{Deserialize, Serialize};

/// How the tributary width of a load type is entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TributaryMode {
    /// One width (roofs, walls)
    Single,
    /// Left + right widths (floors spanning onto both sides of the beam)
    Dual,
}

/// Area load categories a beam can carry
///
/// # Example
/// ```
/// use timber_core::loads::{LoadType, TributaryMode};
///
/// assert_eq!(LoadType::MidFloor.live_kpa(), 1.5);
/// assert_eq!(LoadType::Roof.trib_mode(), TributaryMode::Single);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadType {
    /// Roof: 0.25 kPa imposed
    Roof,
    /// Suspended floor: 1.5 kPa imposed
    MidFloor,
    /// Ground floor: 1.5 kPa imposed
    GroundFloor,
    /// First floor wall: dead only
    FirstFloorWall,
    /// Ground floor wall: dead only
    GroundFloorWall,
}

impl LoadType {
    /// All load types in presentation order
    pub const ALL: [LoadType; 5] = [
        LoadType::Roof,
        LoadType::MidFloor,
        LoadType::GroundFloor,
        LoadType::FirstFloorWall,
        LoadType::GroundFloorWall,
    ];

    /// Fixed imposed (live) pressure in kPa
    pub fn live_kpa(&self) -> f64 {
        match self {
            LoadType::Roof => 0.25,
            LoadType::MidFloor | LoadType::GroundFloor => 1.5,
            LoadType::FirstFloorWall | LoadType::GroundFloorWall => 0.0,
        }
    }

    /// Tributary width entry mode
    pub fn trib_mode(&self) -> TributaryMode {
        match self {
            LoadType::MidFloor | LoadType::GroundFloor => TributaryMode::Dual,
            _ => TributaryMode::Single,
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadType::Roof => "Roof",
            LoadType::MidFloor => "Mid Floor",
            LoadType::GroundFloor => "Ground Floor",
            LoadType::FirstFloorWall => "First Floor Wall",
            LoadType::GroundFloorWall => "Ground Floor Wall",
        }
    }
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
