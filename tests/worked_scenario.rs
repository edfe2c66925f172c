//! Integration test for the reference sizing scenario.
//!
//! A 4m × 5m × 2.7m tropical office with 4 occupants, two unfilmed
//! west-facing windows and four computers must size to 12,210 BTU/h
//! (1.0 TR), with every breakdown item matching its hand-calculated value.

use acquote::inputs::{EquipmentKind, HeatEquipment, UserInputs};
use acquote::load::{calculate_thermal_load, BreakdownCategory};
use acquote::refdata::ReferenceData;
use acquote::room::{
    CeilingType, Orientation, RoomAnalysis, RoomDimensions, RoomShape, RoomType, WindowAnalysis,
};

/// Hand-calculated per-item loads for the reference office.
mod expected {
    pub const WALL_TRANSMISSION: i64 = 1458; // 2.5 × 48.6m² × 12°C
    pub const WINDOW_TRANSMISSION: i64 = 144; // 3.0 × 4m² × 12°C
    pub const SOLAR_GAIN: i64 = 1101; // 4m² × 0.86 × 320
    pub const ENVELOPE_TOTAL: i64 = 2703;

    pub const OCCUPANTS_SENSIBLE: i64 = 1000; // 4 × 250
    pub const EQUIPMENT: i64 = 1600; // 4 × 400
    pub const LIGHTING: i64 = 682; // 20m² × 10W/m² × 3.412
    pub const INTERNAL_TOTAL: i64 = 3282;

    pub const INFILTRATION: i64 = 371; // 54m³ × 0.5 ACH → 15.9 CFM
    pub const FRESH_AIR: i64 = 1866; // 4 × 20 CFM × 1.08 × 21.6°F
    pub const VENTILATION_TOTAL: i64 = 2237;

    pub const LATENT_LOAD: i64 = 2878; // 35% of 8222 sensible
    pub const SAFETY_MARGIN: i64 = 1110; // 10% of 11100
    pub const TOTAL_BTU: i64 = 12_210;
    pub const TONNAGE: f64 = 1.0;
}

fn reference_office() -> RoomAnalysis {
    RoomAnalysis {
        dimensions: RoomDimensions::new(4.0, 5.0, 2.7),
        windows: WindowAnalysis {
            count: 2,
            orientation: Orientation::West,
            has_solar_film: false,
            approximate_area: None,
        },
        room_type: RoomType::Office,
        ceiling_type: CeilingType::Standard,
        has_direct_sunlight: true,
        room_shape: RoomShape::Rectangular,
        estimated_occupancy: 4,
        detected_equipment: vec![],
        confidence_score: 0.92,
    }
}

fn reference_inputs() -> UserInputs {
    UserInputs {
        heat_generating_equipment: vec![HeatEquipment::new(EquipmentKind::Computer, 4)],
        ..Default::default()
    }
}

#[test]
fn reference_office_sizes_to_one_ton() {
    let calc = calculate_thermal_load(
        &reference_office(),
        &reference_inputs(),
        &ReferenceData::default(),
    )
    .unwrap();

    assert_eq!(
        calc.envelope.wall_transmission,
        expected::WALL_TRANSMISSION,
        "wall transmission"
    );
    assert_eq!(calc.envelope.roof_transmission, 0, "standard ceiling");
    assert_eq!(
        calc.envelope.window_transmission,
        expected::WINDOW_TRANSMISSION,
        "window transmission"
    );
    assert_eq!(calc.envelope.solar_gain, expected::SOLAR_GAIN, "solar gain");
    assert_eq!(calc.envelope.total, expected::ENVELOPE_TOTAL);

    assert_eq!(
        calc.internal.occupants_sensible,
        expected::OCCUPANTS_SENSIBLE
    );
    assert_eq!(calc.internal.occupants_latent, 800); // 4 × 200, tracked apart
    assert_eq!(calc.internal.equipment, expected::EQUIPMENT);
    assert_eq!(calc.internal.lighting, expected::LIGHTING);
    assert_eq!(calc.internal.total, expected::INTERNAL_TOTAL);

    assert_eq!(calc.ventilation.infiltration, expected::INFILTRATION);
    assert_eq!(calc.ventilation.fresh_air, expected::FRESH_AIR);
    assert_eq!(calc.ventilation.total, expected::VENTILATION_TOTAL);

    assert_eq!(calc.latent_load, expected::LATENT_LOAD);
    assert_eq!(calc.shape_adjustment, 0, "rectangular room");
    assert_eq!(calc.ceiling_adjustment, 0, "2.7m ceiling");
    assert_eq!(calc.safety_margin, expected::SAFETY_MARGIN);

    assert_eq!(calc.total_btu, expected::TOTAL_BTU);
    assert!((calc.tonnage - expected::TONNAGE).abs() < f64::EPSILON);
}

#[test]
fn breakdown_reconciles_with_the_total() {
    let calc = calculate_thermal_load(
        &reference_office(),
        &reference_inputs(),
        &ReferenceData::default(),
    )
    .unwrap();

    let sum: i64 = calc.breakdown.iter().map(|item| item.value).sum();
    assert_eq!(sum, calc.total_btu, "itemization must match the headline");

    // Percentages are rounded independently against the final total, so
    // the sum may drift by up to one point per item.
    let percentage_sum: i64 = calc.breakdown.iter().map(|item| item.percentage).sum();
    let items = calc.breakdown.len() as i64;
    assert!(
        (100 - items..=100 + items).contains(&percentage_sum),
        "percentage sum {percentage_sum} outside tolerance"
    );
}

#[test]
fn breakdown_percentages_reflect_final_total() {
    let calc = calculate_thermal_load(
        &reference_office(),
        &reference_inputs(),
        &ReferenceData::default(),
    )
    .unwrap();

    for item in &calc.breakdown {
        let expected = ((item.value as f64 / calc.total_btu as f64) * 100.0).round() as i64;
        assert_eq!(item.percentage, expected, "{:?}", item.category);
    }

    let safety = calc
        .breakdown
        .iter()
        .find(|item| item.category == BreakdownCategory::SafetyMargin)
        .unwrap();
    assert_eq!(safety.value, expected::SAFETY_MARGIN);
    assert_eq!(safety.percentage, 9); // 1110 / 12210
}
