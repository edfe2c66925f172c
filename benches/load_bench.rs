use criterion::{black_box, criterion_group, criterion_main, Criterion};

use acquote::catalog::Catalog;
use acquote::inputs::{EquipmentKind, HeatEquipment, UserInputs};
use acquote::load::calculate_thermal_load;
use acquote::quote::generate_quote_options;
use acquote::refdata::ReferenceData;
use acquote::room::{
    CeilingType, Orientation, RoomAnalysis, RoomDimensions, RoomShape, RoomType, WindowAnalysis,
};

fn sample_office() -> RoomAnalysis {
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

fn bench_engine(c: &mut Criterion) {
    let analysis = sample_office();
    let inputs = UserInputs {
        heat_generating_equipment: vec![HeatEquipment::new(EquipmentKind::Computer, 4)],
        ..Default::default()
    };
    let reference = ReferenceData::default();
    let catalog = Catalog::default();

    c.bench_function("calculate_thermal_load", |b| {
        b.iter(|| calculate_thermal_load(black_box(&analysis), &inputs, &reference).unwrap())
    });

    let calculation = calculate_thermal_load(&analysis, &inputs, &reference).unwrap();
    c.bench_function("generate_quote_options", |b| {
        b.iter(|| generate_quote_options(black_box(&calculation), &inputs, &catalog, &reference))
    });
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
