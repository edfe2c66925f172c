//! Physical reference constants for thermal load calculation.
//!
//! All tables are keyed by closed enums and looked up through exhaustive
//! matches, so an unknown key is a compile-time error rather than a silent
//! runtime default. The whole set is injected into the calculator as one
//! [`ReferenceData`] value so alternative constant sets can be supplied
//! without touching calculation logic.

use serde::{Deserialize, Serialize};

use crate::inputs::{ClimateZone, EquipmentKind, OperatingHours};
use crate::room::{Orientation, RoomShape, RoomType};

/// Glazing categories with distinct solar heat gain coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlassType {
    ClearSingle,
    ClearDouble,
    Tinted,
    LowE,
    Reflective,
}

/// A value per climate zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimateTable<T> {
    pub tropical: T,
    pub subtropical: T,
    pub temperate: T,
    pub arid: T,
}

impl<T: Copy> ClimateTable<T> {
    pub fn get(&self, zone: ClimateZone) -> T {
        match zone {
            ClimateZone::Tropical => self.tropical,
            ClimateZone::Subtropical => self.subtropical,
            ClimateZone::Temperate => self.temperate,
            ClimateZone::Arid => self.arid,
        }
    }
}

/// A value per room type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomTypeTable<T> {
    pub office: T,
    pub conference: T,
    pub server_room: T,
    pub residential_bedroom: T,
    pub residential_living: T,
    pub restaurant: T,
    pub retail: T,
    pub warehouse: T,
    pub gym: T,
    pub classroom: T,
    pub other: T,
}

impl<T: Copy> RoomTypeTable<T> {
    pub fn get(&self, room_type: RoomType) -> T {
        match room_type {
            RoomType::Office => self.office,
            RoomType::Conference => self.conference,
            RoomType::ServerRoom => self.server_room,
            RoomType::ResidentialBedroom => self.residential_bedroom,
            RoomType::ResidentialLiving => self.residential_living,
            RoomType::Restaurant => self.restaurant,
            RoomType::Retail => self.retail,
            RoomType::Warehouse => self.warehouse,
            RoomType::Gym => self.gym,
            RoomType::Classroom => self.classroom,
            RoomType::Other => self.other,
        }
    }
}

/// A value per glazing type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlassTable<T> {
    pub clear_single: T,
    pub clear_double: T,
    pub tinted: T,
    pub low_e: T,
    pub reflective: T,
}

impl<T: Copy> GlassTable<T> {
    pub fn get(&self, glass: GlassType) -> T {
        match glass {
            GlassType::ClearSingle => self.clear_single,
            GlassType::ClearDouble => self.clear_double,
            GlassType::Tinted => self.tinted,
            GlassType::LowE => self.low_e,
            GlassType::Reflective => self.reflective,
        }
    }
}

/// A value per known heat-generating equipment kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquipmentTable<T> {
    pub computer: T,
    pub server: T,
    pub printer: T,
    pub kitchen_small: T,
    pub kitchen_large: T,
    pub lighting_standard: T,
    pub lighting_intense: T,
}

/// A value per window-wall orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientationTable<T> {
    pub north: T,
    pub south: T,
    pub east: T,
    pub west: T,
    pub unknown: T,
}

impl<T: Copy> OrientationTable<T> {
    pub fn get(&self, orientation: Orientation) -> T {
        match orientation {
            Orientation::North => self.north,
            Orientation::South => self.south,
            Orientation::East => self.east,
            Orientation::West => self.west,
            Orientation::Unknown => self.unknown,
        }
    }
}

/// The full set of physical constants used by the load calculator and the
/// quote generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Design temperature difference outdoor − indoor (°C) per climate zone.
    pub design_delta_t: ClimateTable<f64>,
    /// Ratio of latent (humidity) load to sensible load per climate zone.
    pub latent_factor: ClimateTable<f64>,
    /// Base sensible load per floor area (BTU/h·m²) per room type. Drives
    /// the lighting density rule and the legacy base-load projection.
    pub base_load_per_sqm: RoomTypeTable<f64>,
    /// Required fresh air per occupant (CFM) per room type. Server rooms
    /// are sealed; gyms need the most.
    pub fresh_air_cfm_per_person: RoomTypeTable<f64>,
    /// Peak solar radiation on vertical glazing (BTU/h·m²) per orientation.
    /// West is the afternoon worst case; unknown assumes south.
    pub solar_radiation: OrientationTable<f64>,
    /// Solar heat gain coefficient (0–1) per glazing type.
    pub shgc: GlassTable<f64>,
    /// Heat output (BTU/h) per unit of known equipment kinds.
    pub equipment_btu_table: EquipmentTable<f64>,

    /// Wall thermal transmittance (BTU/h·m²·°C). Fixed conservative
    /// assumption: uninsulated block. Wall construction is not currently a
    /// selectable input.
    pub wall_u_value: f64,
    /// Exposed roof slab transmittance (BTU/h·m²·°C), uninsulated concrete.
    pub roof_u_value: f64,
    /// Single-pane window transmittance (BTU/h·m²·°C).
    pub window_u_value: f64,

    /// Occupant sensible heat (BTU/h per person).
    pub occupant_sensible_btu: f64,
    /// Occupant latent heat (BTU/h per person, metabolic moisture).
    pub occupant_latent_btu: f64,
    /// Fallback BTU/h for equipment kinds outside the reference table.
    pub default_equipment_btu: f64,

    /// Infiltration air-change rate (1/h) for average construction.
    pub infiltration_ach: f64,
    /// Sensible air-load constant: BTU/h per CFM per °F.
    pub btu_per_cfm_deg_f: f64,

    /// Whole-load multipliers per floor-plan shape.
    pub shape_factor_l_shaped: f64,
    pub shape_factor_irregular: f64,
    /// High-ceiling multiplier, applied half-weighted above 3 m.
    pub high_ceiling_factor: f64,

    /// Final safety margin, fraction of the pre-margin total.
    pub safety_margin: f64,
    /// BTU/h per refrigeration ton.
    pub btu_per_ton: f64,
    /// Electricity price (USD/kWh) for operating cost estimates.
    pub energy_cost_per_kwh: f64,
}

impl ReferenceData {
    /// Reference BTU/h for one unit of the given equipment kind.
    pub fn equipment_btu(&self, kind: EquipmentKind) -> f64 {
        let table = &self.equipment_btu_table;
        match kind {
            EquipmentKind::Computer => table.computer,
            EquipmentKind::Server => table.server,
            EquipmentKind::Printer => table.printer,
            EquipmentKind::KitchenSmall => table.kitchen_small,
            EquipmentKind::KitchenLarge => table.kitchen_large,
            EquipmentKind::LightingStandard => table.lighting_standard,
            EquipmentKind::LightingIntense => table.lighting_intense,
            EquipmentKind::Other => self.default_equipment_btu,
        }
    }

    /// Whole-load multiplier for the floor-plan shape (1.0 = rectangular).
    pub fn shape_factor(&self, shape: RoomShape) -> f64 {
        match shape {
            RoomShape::Rectangular => 1.0,
            RoomShape::LShaped => self.shape_factor_l_shaped,
            RoomShape::Irregular => self.shape_factor_irregular,
        }
    }

    /// Estimated compressor hours per month for an operating window.
    pub fn monthly_operating_hours(&self, hours: OperatingHours) -> f64 {
        match hours {
            // 6h × 22 working days
            OperatingHours::Morning => 130.0,
            OperatingHours::Afternoon => 130.0,
            OperatingHours::Evening => 130.0,
            // 12h × 22 working days
            OperatingHours::FullDay => 260.0,
            // 24h × 30 days
            OperatingHours::Continuous => 720.0,
        }
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            design_delta_t: ClimateTable {
                tropical: 12.0,    // 35°C outdoor, 23°C indoor
                subtropical: 10.0, // 33°C outdoor, 23°C indoor
                temperate: 8.0,    // 30°C outdoor, 22°C indoor
                arid: 15.0,        // 40°C outdoor, 25°C indoor
            },
            latent_factor: ClimateTable {
                tropical: 0.35,    // high humidity (>70%)
                subtropical: 0.30,
                temperate: 0.20,
                arid: 0.10,        // low humidity (<40%)
            },
            base_load_per_sqm: RoomTypeTable {
                office: 600.0,
                conference: 650.0,
                server_room: 1000.0,
                residential_bedroom: 500.0,
                residential_living: 550.0,
                restaurant: 700.0,
                retail: 650.0,
                warehouse: 400.0,
                gym: 750.0,
                classroom: 600.0,
                other: 600.0,
            },
            fresh_air_cfm_per_person: RoomTypeTable {
                office: 20.0,
                conference: 20.0,
                server_room: 0.0, // usually sealed
                residential_bedroom: 15.0,
                residential_living: 15.0,
                restaurant: 20.0,
                retail: 20.0,
                warehouse: 10.0,
                gym: 25.0, // higher due to activity
                classroom: 15.0,
                other: 20.0,
            },
            solar_radiation: OrientationTable {
                north: 80.0,  // minimal direct sun
                south: 200.0,
                east: 280.0,  // morning sun
                west: 320.0,  // afternoon sun, hottest
                unknown: 200.0,
            },
            shgc: GlassTable {
                clear_single: 0.86,
                clear_double: 0.76,
                tinted: 0.60, // solar film
                low_e: 0.40,
                reflective: 0.25,
            },
            equipment_btu_table: EquipmentTable {
                computer: 400.0,
                server: 2000.0,
                printer: 500.0,
                kitchen_small: 1500.0,
                kitchen_large: 5000.0,
                lighting_standard: 100.0,
                lighting_intense: 300.0,
            },
            wall_u_value: 2.5,   // uninsulated block
            roof_u_value: 3.0,   // uninsulated concrete slab
            window_u_value: 3.0, // single pane
            occupant_sensible_btu: 250.0,
            occupant_latent_btu: 200.0,
            default_equipment_btu: 300.0,
            infiltration_ach: 0.5, // average construction
            btu_per_cfm_deg_f: 1.08,
            shape_factor_l_shaped: 1.10,
            shape_factor_irregular: 1.15,
            high_ceiling_factor: 1.25,
            safety_margin: 0.10,
            btu_per_ton: 12_000.0,
            energy_cost_per_kwh: 0.18, // Central America estimate
        }
    }
}

/// Cubic feet per cubic meter, for m³/h → CFM conversion.
pub const CUBIC_FEET_PER_CUBIC_METER: f64 = 35.31;

/// BTU/h per watt.
pub const BTU_PER_WATT: f64 = 3.412;

/// °F per °C of temperature difference.
pub const DEG_F_PER_DEG_C: f64 = 1.8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn climate_lookups_are_exhaustive() {
        let reference = ReferenceData::default();
        assert_eq!(reference.design_delta_t.get(ClimateZone::Tropical), 12.0);
        assert_eq!(reference.design_delta_t.get(ClimateZone::Arid), 15.0);
        assert_eq!(reference.latent_factor.get(ClimateZone::Temperate), 0.20);
    }

    #[test]
    fn server_rooms_take_no_fresh_air() {
        let reference = ReferenceData::default();
        assert_eq!(
            reference.fresh_air_cfm_per_person.get(RoomType::ServerRoom),
            0.0
        );
        assert_eq!(reference.fresh_air_cfm_per_person.get(RoomType::Gym), 25.0);
    }

    #[test]
    fn west_orientation_is_the_solar_worst_case() {
        let reference = ReferenceData::default();
        let table = &reference.solar_radiation;
        assert!(table.west > table.east);
        assert!(table.east > table.south);
        assert!(table.south > table.north);
        assert_eq!(table.unknown, table.south);
    }

    #[test]
    fn reference_data_round_trips_through_json() {
        let reference = ReferenceData::default();
        let json = serde_json::to_string(&reference).unwrap();
        let back: ReferenceData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reference);
    }
}
