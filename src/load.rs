//! Multi-factor thermal load calculator.
//!
//! Maps a room description plus user preferences to a required cooling
//! capacity in BTU/h, itemized into physically meaningful categories:
//! envelope transmission and solar gain, internal gains from people,
//! equipment and lighting, infiltration and fresh-air ventilation, the
//! latent (humidity) share, shape/ceiling adjustments and a final safety
//! margin.
//!
//! Every breakdown item is rounded to whole BTU when it is produced and the
//! total is the exact integer sum of the items, so the itemization always
//! reconciles with the headline number. Percentages are recomputed against
//! the final total as a last pass; because each one is rounded
//! independently they need not sum to exactly 100.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::inputs::{ClimateZone, EquipmentKind, UserInputs};
use crate::refdata::{
    GlassType, ReferenceData, BTU_PER_WATT, CUBIC_FEET_PER_CUBIC_METER, DEG_F_PER_DEG_C,
};
use crate::room::{CeilingType, RoomAnalysis};

/// Physical grouping of a breakdown item, used for display ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadGroup {
    Envelope,
    Internal,
    Ventilation,
    Other,
}

/// Language-neutral category tag of a breakdown item. Display labels live
/// in the report layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakdownCategory {
    WallTransmission,
    RoofTransmission,
    CeilingTransmission,
    WindowTransmission,
    SolarGain,
    OccupantsSensible,
    Equipment,
    Lighting,
    Infiltration,
    FreshAir,
    LatentLoad,
    ShapeAdjustment,
    HighCeilingAdjustment,
    SafetyMargin,
}

/// One itemized contribution to the total load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownItem {
    pub category: BreakdownCategory,
    pub group: LoadGroup,
    /// Whole BTU/h contributed by this item.
    pub value: i64,
    /// Share of the final total, rounded to whole percent. 0 when the
    /// total itself is 0.
    pub percentage: i64,
    /// Technical annotation of the term ("49m² × U=2.5 × ΔT=12°C").
    pub detail: String,
}

/// Heat gained through the building shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeLoads {
    pub wall_transmission: i64,
    pub roof_transmission: i64,
    pub window_transmission: i64,
    pub solar_gain: i64,
    pub total: i64,
}

/// Heat generated inside the space. `total` is the sensible share only;
/// occupant latent heat is tracked here but folded into the latent item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalLoads {
    pub occupants_sensible: i64,
    pub occupants_latent: i64,
    pub equipment: i64,
    pub lighting: i64,
    pub total: i64,
}

/// Outside-air loads from leakage and required fresh air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VentilationLoads {
    pub infiltration: i64,
    pub fresh_air: i64,
    pub total: i64,
}

/// The calculator's result: aggregated sub-totals, the final capacity
/// requirement and the itemized breakdown. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalCalculation {
    pub envelope: EnvelopeLoads,
    pub internal: InternalLoads,
    pub ventilation: VentilationLoads,
    pub latent_load: i64,
    pub shape_adjustment: i64,
    pub ceiling_adjustment: i64,
    pub safety_margin: i64,
    /// Required cooling capacity (BTU/h).
    pub total_btu: i64,
    /// Capacity in refrigeration tons, rounded to one decimal.
    pub tonnage: f64,
    pub breakdown: Vec<BreakdownItem>,
}

/// Round a physical term to whole BTU/h.
fn btu(value: f64) -> i64 {
    value.round() as i64
}

/// Round to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calculate the required cooling capacity for a room.
///
/// Pure function of its inputs: identical arguments always produce an
/// identical result. Refuses rooms without a usable floor area; zero
/// occupants, zero windows or missing equipment simply zero out the
/// corresponding terms.
pub fn calculate_thermal_load(
    analysis: &RoomAnalysis,
    inputs: &UserInputs,
    reference: &ReferenceData,
) -> EngineResult<ThermalCalculation> {
    let dims = &analysis.dimensions;
    if !dims.area.is_finite() || dims.area <= 0.0 {
        return Err(EngineError::InvalidRoom(format!(
            "floor area must be positive, got {}",
            dims.area
        )));
    }
    if !(dims.width.is_finite() && dims.length.is_finite() && dims.height.is_finite()) {
        return Err(EngineError::InvalidRoom(
            "room dimensions must be finite".to_string(),
        ));
    }

    let climate = inputs.climate_zone.unwrap_or(ClimateZone::Tropical);
    let delta_t = reference.design_delta_t.get(climate);
    let area = dims.area;
    let height = dims.height;
    let wall_area = dims.perimeter() * height;
    let occupants = inputs.resolved_occupants(analysis.estimated_occupancy);

    let mut breakdown: Vec<BreakdownItem> = Vec::new();

    // 1. Envelope loads

    let wall_transmission = btu(reference.wall_u_value * wall_area * delta_t);
    breakdown.push(BreakdownItem {
        category: BreakdownCategory::WallTransmission,
        group: LoadGroup::Envelope,
        value: wall_transmission,
        percentage: 0,
        detail: format!(
            "{wall_area:.0}m² × U={} × ΔT={delta_t}°C",
            reference.wall_u_value
        ),
    });

    let roof_transmission = match analysis.ceiling_type {
        CeilingType::Exposed => {
            // Full exposure amplifies the slab term by half again.
            let value = btu(reference.roof_u_value * area * delta_t * 1.5);
            breakdown.push(BreakdownItem {
                category: BreakdownCategory::RoofTransmission,
                group: LoadGroup::Envelope,
                value,
                percentage: 0,
                detail: format!("exposed roof, {area:.0}m²"),
            });
            value
        }
        CeilingType::High => {
            // Buffered interior space under a tall roof, not a literal
            // exterior surface.
            let value = btu(area * delta_t * 0.5);
            breakdown.push(BreakdownItem {
                category: BreakdownCategory::CeilingTransmission,
                group: LoadGroup::Envelope,
                value,
                percentage: 0,
                detail: format!("high ceiling ({height:.1}m)"),
            });
            value
        }
        CeilingType::Standard | CeilingType::Drop => 0,
    };

    let window_area = analysis.windows.effective_area();
    let window_transmission = btu(reference.window_u_value * window_area * delta_t);
    if window_area > 0.0 {
        breakdown.push(BreakdownItem {
            category: BreakdownCategory::WindowTransmission,
            group: LoadGroup::Envelope,
            value: window_transmission,
            percentage: 0,
            detail: format!("{} windows, {window_area:.1}m²", analysis.windows.count),
        });
    }

    let glass = if analysis.windows.has_solar_film {
        GlassType::Tinted
    } else {
        GlassType::ClearSingle
    };
    let shgc = reference.shgc.get(glass);
    let radiation = reference.solar_radiation.get(analysis.windows.orientation);
    let solar_gain = btu(window_area * shgc * radiation);
    if window_area > 0.0 {
        let sun = if analysis.has_direct_sunlight {
            ", direct sun"
        } else {
            ""
        };
        breakdown.push(BreakdownItem {
            category: BreakdownCategory::SolarGain,
            group: LoadGroup::Envelope,
            value: solar_gain,
            percentage: 0,
            detail: format!("SHGC={shgc}, {} facing{sun}", analysis.windows.orientation),
        });
    }

    // Both window terms are zero when there is no glazed area, so the
    // totals stay consistent with the emitted items.
    let envelope = EnvelopeLoads {
        wall_transmission,
        roof_transmission,
        window_transmission,
        solar_gain,
        total: wall_transmission + roof_transmission + window_transmission + solar_gain,
    };
    debug!("envelope loads: {} BTU/h", envelope.total);

    // 2. Internal loads

    let occupants_sensible = btu(occupants as f64 * reference.occupant_sensible_btu);
    breakdown.push(BreakdownItem {
        category: BreakdownCategory::OccupantsSensible,
        group: LoadGroup::Internal,
        value: occupants_sensible,
        percentage: 0,
        detail: format!("{occupants} × {} BTU", reference.occupant_sensible_btu),
    });
    let occupants_latent = btu(occupants as f64 * reference.occupant_latent_btu);

    let (equipment, equipment_detail) = equipment_load(analysis, inputs, reference);
    breakdown.push(BreakdownItem {
        category: BreakdownCategory::Equipment,
        group: LoadGroup::Internal,
        value: equipment,
        percentage: 0,
        detail: equipment_detail,
    });

    // Lighting density scales with how intensely the room type is used.
    let lighting_density = if reference.base_load_per_sqm.get(analysis.room_type) > 600.0 {
        15.0
    } else {
        10.0
    };
    let lighting = btu(area * lighting_density * BTU_PER_WATT);
    breakdown.push(BreakdownItem {
        category: BreakdownCategory::Lighting,
        group: LoadGroup::Internal,
        value: lighting,
        percentage: 0,
        detail: format!("{lighting_density} W/m² estimated"),
    });

    let internal = InternalLoads {
        occupants_sensible,
        occupants_latent,
        equipment,
        lighting,
        total: occupants_sensible + equipment + lighting,
    };
    debug!("internal loads: {} BTU/h sensible", internal.total);

    // 3. Ventilation & infiltration

    let delta_t_f = delta_t * DEG_F_PER_DEG_C;
    let infiltration_cfm =
        dims.volume * reference.infiltration_ach * CUBIC_FEET_PER_CUBIC_METER / 60.0;
    let infiltration = btu(infiltration_cfm * reference.btu_per_cfm_deg_f * delta_t_f);
    breakdown.push(BreakdownItem {
        category: BreakdownCategory::Infiltration,
        group: LoadGroup::Ventilation,
        value: infiltration,
        percentage: 0,
        detail: format!("{} ACH, average construction", reference.infiltration_ach),
    });

    let cfm_per_person = reference.fresh_air_cfm_per_person.get(analysis.room_type);
    let fresh_air_cfm = occupants as f64 * cfm_per_person;
    let fresh_air = btu(fresh_air_cfm * reference.btu_per_cfm_deg_f * delta_t_f);
    breakdown.push(BreakdownItem {
        category: BreakdownCategory::FreshAir,
        group: LoadGroup::Ventilation,
        value: fresh_air,
        percentage: 0,
        detail: format!("{cfm_per_person} CFM/person × {occupants}"),
    });

    let ventilation = VentilationLoads {
        infiltration,
        fresh_air,
        total: infiltration + fresh_air,
    };
    debug!("ventilation loads: {} BTU/h", ventilation.total);

    // 4. Latent load (humidity)

    let sensible_subtotal = envelope.total + internal.total + ventilation.total;
    let latent_factor = reference.latent_factor.get(climate);
    let latent_load = btu(sensible_subtotal as f64 * latent_factor);
    breakdown.push(BreakdownItem {
        category: BreakdownCategory::LatentLoad,
        group: LoadGroup::Other,
        value: latent_load,
        percentage: 0,
        detail: format!(
            "{:.0}% of sensible ({climate} climate)",
            latent_factor * 100.0
        ),
    });

    // 5. Shape & ceiling adjustments

    let shape_multiplier = reference.shape_factor(analysis.room_shape);
    let shape_adjustment = if shape_multiplier > 1.0 {
        let value = btu(sensible_subtotal as f64 * (shape_multiplier - 1.0));
        breakdown.push(BreakdownItem {
            category: BreakdownCategory::ShapeAdjustment,
            group: LoadGroup::Other,
            value,
            percentage: 0,
            detail: format!(
                "{} space (+{:.0}%)",
                analysis.room_shape,
                (shape_multiplier - 1.0) * 100.0
            ),
        });
        value
    } else {
        0
    };

    // Half-weighted to avoid double counting with the ceiling
    // transmission term from step 1.
    let ceiling_adjustment = if analysis.ceiling_type == CeilingType::High && height > 3.0 {
        let ceiling_multiplier = reference.high_ceiling_factor;
        let value = btu(sensible_subtotal as f64 * (ceiling_multiplier - 1.0) * 0.5);
        breakdown.push(BreakdownItem {
            category: BreakdownCategory::HighCeilingAdjustment,
            group: LoadGroup::Other,
            value,
            percentage: 0,
            detail: format!("height {height:.1}m > 3m"),
        });
        value
    } else {
        0
    };

    // 6. Safety margin

    let pre_safety_total = sensible_subtotal + latent_load + shape_adjustment + ceiling_adjustment;
    let safety_margin = btu(pre_safety_total as f64 * reference.safety_margin);
    breakdown.push(BreakdownItem {
        category: BreakdownCategory::SafetyMargin,
        group: LoadGroup::Other,
        value: safety_margin,
        percentage: 0,
        detail: format!("{:.0}% safety factor", reference.safety_margin * 100.0),
    });

    // 7. Finalize

    let total_btu = pre_safety_total + safety_margin;
    let tonnage = round1(total_btu as f64 / reference.btu_per_ton);

    // Percentages reflect the final total; independent rounding means they
    // need not sum to exactly 100.
    for item in &mut breakdown {
        item.percentage = if total_btu > 0 {
            ((item.value as f64 / total_btu as f64) * 100.0).round() as i64
        } else {
            0
        };
    }

    debug!("total load: {total_btu} BTU/h ({tonnage} TR)");

    Ok(ThermalCalculation {
        envelope,
        internal,
        ventilation,
        latent_load,
        shape_adjustment,
        ceiling_adjustment,
        safety_margin,
        total_btu,
        tonnage,
        breakdown,
    })
}

/// Combined equipment load: declared lines priced per reference table
/// (unknown kinds fall back to the default), plus one reference unit for
/// each detected kind not already declared.
fn equipment_load(
    analysis: &RoomAnalysis,
    inputs: &UserInputs,
    reference: &ReferenceData,
) -> (i64, String) {
    let mut total = 0.0;
    let mut details: Vec<String> = Vec::new();

    for line in &inputs.heat_generating_equipment {
        if line.quantity == 0 {
            continue;
        }
        total += reference.equipment_btu(line.kind) * line.quantity as f64;
        details.push(format!("{}× {}", line.quantity, line.kind.tag()));
    }

    for &kind in &analysis.detected_equipment {
        // Unknown kinds carry no reference figure; declared kinds are
        // already counted.
        if kind == EquipmentKind::Other {
            continue;
        }
        let declared = inputs
            .heat_generating_equipment
            .iter()
            .any(|line| line.kind == kind && line.quantity > 0);
        if declared {
            continue;
        }
        total += reference.equipment_btu(kind);
        details.push(format!("1× {} (detected)", kind.tag()));
    }

    let detail = if details.is_empty() {
        "no significant equipment".to_string()
    } else {
        details.join(", ")
    };
    (btu(total), detail)
}
