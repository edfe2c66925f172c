//! User-supplied preferences and declared equipment.
//!
//! Every field is optional; the calculator applies the documented defaults
//! (tropical climate, full-day operation, occupancy from the room analysis).

use serde::{Deserialize, Serialize};

/// Climate zone of the installation site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClimateZone {
    Tropical,
    Subtropical,
    Temperate,
    Arid,
}

impl std::fmt::Display for ClimateZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ClimateZone::Tropical => "tropical",
            ClimateZone::Subtropical => "subtropical",
            ClimateZone::Temperate => "temperate",
            ClimateZone::Arid => "arid",
        })
    }
}

/// Daily operating window, used for monthly energy cost estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatingHours {
    Morning,
    Afternoon,
    FullDay,
    Evening,
    #[serde(rename = "24_7")]
    Continuous,
}

/// Purchase-budget preference collected from the user.
///
/// Not consumed by the engine itself; carried through so the presentation
/// layer can pre-select one of the generated tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetPreference {
    Economic,
    Balanced,
    Premium,
}

/// Kinds of heat-generating equipment the reference tables know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentKind {
    Computer,
    Server,
    Printer,
    KitchenSmall,
    KitchenLarge,
    LightingStandard,
    LightingIntense,
    Other,
}

impl EquipmentKind {
    /// Short display tag ("computer", "server", ...).
    pub fn tag(&self) -> &'static str {
        match self {
            EquipmentKind::Computer => "computer",
            EquipmentKind::Server => "server",
            EquipmentKind::Printer => "printer",
            EquipmentKind::KitchenSmall => "kitchen_small",
            EquipmentKind::KitchenLarge => "kitchen_large",
            EquipmentKind::LightingStandard => "lighting_standard",
            EquipmentKind::LightingIntense => "lighting_intense",
            EquipmentKind::Other => "other",
        }
    }
}

/// A line of declared heat-generating equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatEquipment {
    pub kind: EquipmentKind,
    pub quantity: u32,
    /// Per-unit BTU as declared upstream. The calculator prices equipment
    /// from the reference tables; this field is carried for the boundary
    /// layer's benefit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub btu_per_unit: Option<f64>,
}

impl HeatEquipment {
    pub fn new(kind: EquipmentKind, quantity: u32) -> Self {
        Self {
            kind,
            quantity,
            btu_per_unit: None,
        }
    }
}

/// Preferences gathered from the user alongside the room analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInputs {
    /// Overrides [`crate::room::RoomAnalysis::estimated_occupancy`] when present.
    pub occupants: Option<u32>,
    /// Defaults to [`OperatingHours::FullDay`].
    pub operating_hours: Option<OperatingHours>,
    #[serde(default)]
    pub heat_generating_equipment: Vec<HeatEquipment>,
    /// Defaults to [`ClimateZone::Tropical`], the conservative choice for
    /// the target market.
    pub climate_zone: Option<ClimateZone>,
    pub budget_preference: Option<BudgetPreference>,
}

impl UserInputs {
    /// Resolved occupant count: user override, else analyzer estimate.
    pub fn resolved_occupants(&self, estimated: u32) -> u32 {
        self.occupants.unwrap_or(estimated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupants_override_wins_even_at_zero() {
        let inputs = UserInputs {
            occupants: Some(0),
            ..Default::default()
        };
        assert_eq!(inputs.resolved_occupants(6), 0);
        assert_eq!(UserInputs::default().resolved_occupants(6), 6);
    }

    #[test]
    fn operating_hours_serialize_with_original_labels() {
        assert_eq!(
            serde_json::to_string(&OperatingHours::Continuous).unwrap(),
            "\"24_7\""
        );
        assert_eq!(
            serde_json::to_string(&OperatingHours::FullDay).unwrap(),
            "\"full_day\""
        );
    }
}
