//! Room description model.
//!
//! A [`RoomAnalysis`] is the engine's picture of the space to be conditioned.
//! It is produced upstream (vision analysis, free-text parsing, or a form) and
//! treated as immutable input by the calculator.

use serde::{Deserialize, Serialize};

use crate::inputs::EquipmentKind;

/// Room categories with distinct base loads and ventilation requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Office,
    Conference,
    ServerRoom,
    ResidentialBedroom,
    ResidentialLiving,
    Restaurant,
    Retail,
    Warehouse,
    Gym,
    Classroom,
    Other,
}

/// Ceiling construction as seen from inside the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CeilingType {
    Standard,
    /// Tall interior space (> 3 m), buffered from the roof above.
    High,
    /// Roof slab directly exposed to the exterior.
    Exposed,
    Drop,
}

/// Floor-plan shape. Non-rectangular rooms cool less evenly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomShape {
    Rectangular,
    #[serde(rename = "L-shaped")]
    LShaped,
    Irregular,
}

/// Compass orientation of the window wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    North,
    South,
    East,
    West,
    Unknown,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Orientation::North => "north",
            Orientation::South => "south",
            Orientation::East => "east",
            Orientation::West => "west",
            Orientation::Unknown => "unknown",
        })
    }
}

impl std::fmt::Display for RoomShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RoomShape::Rectangular => "rectangular",
            RoomShape::LShaped => "L-shaped",
            RoomShape::Irregular => "irregular",
        })
    }
}

/// Room dimensions in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    /// Width (m)
    pub width: f64,
    /// Length (m)
    pub length: f64,
    /// Ceiling height (m)
    pub height: f64,
    /// Floor area (m²). Normally width × length, but may be supplied
    /// directly when only the area is known.
    pub area: f64,
    /// Volume (m³) = width × length × height
    pub volume: f64,
}

impl RoomDimensions {
    /// Build dimensions from width × length × height, deriving area and volume.
    pub fn new(width: f64, length: f64, height: f64) -> Self {
        Self {
            width,
            length,
            height,
            area: width * length,
            volume: width * length * height,
        }
    }

    /// Wall perimeter (m) = 2 × (width + length)
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.length)
    }
}

/// Window observations for the room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowAnalysis {
    /// Number of windows
    pub count: u32,
    /// Orientation of the window wall
    pub orientation: Orientation,
    /// Whether the glazing carries a solar film/tint
    pub has_solar_film: bool,
    /// Total glazed area (m²) when independently known.
    /// Defaults to `count × 2 m²` otherwise.
    pub approximate_area: Option<f64>,
}

impl WindowAnalysis {
    /// Effective glazed area used by the calculator (m²).
    pub fn effective_area(&self) -> f64 {
        self.approximate_area
            .unwrap_or(self.count as f64 * 2.0)
    }
}

impl Default for WindowAnalysis {
    fn default() -> Self {
        Self {
            count: 0,
            orientation: Orientation::Unknown,
            has_solar_film: false,
            approximate_area: None,
        }
    }
}

/// Full room description consumed by the load calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomAnalysis {
    pub dimensions: RoomDimensions,
    pub windows: WindowAnalysis,
    pub room_type: RoomType,
    pub ceiling_type: CeilingType,
    pub has_direct_sunlight: bool,
    pub room_shape: RoomShape,
    /// Occupant count estimated by the analyzer. A user-supplied
    /// count in [`crate::inputs::UserInputs`] takes precedence.
    pub estimated_occupancy: u32,
    /// Heat-generating equipment spotted in the room.
    pub detected_equipment: Vec<EquipmentKind>,
    /// Analyzer confidence in this description, 0–1.
    pub confidence_score: f64,
}
