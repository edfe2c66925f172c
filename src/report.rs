//! Presentation helpers: grouping, bilingual labels and report rendering.
//!
//! The calculator and quote generator stay language-neutral; every display
//! string (English and Spanish) lives here, together with the legacy
//! flat summary some collaborators still expect.

use serde::{Deserialize, Serialize};

use crate::catalog::PriceRange;
use crate::load::{BreakdownCategory, BreakdownItem, LoadGroup, ThermalCalculation};
use crate::quote::{QuoteOption, QuoteTier};
use crate::refdata::ReferenceData;
use crate::room::RoomAnalysis;

/// Output language for rendered reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
}

/// Breakdown items partitioned by load group, in calculation order.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedBreakdown<'a> {
    pub envelope: Vec<&'a BreakdownItem>,
    pub internal: Vec<&'a BreakdownItem>,
    pub ventilation: Vec<&'a BreakdownItem>,
    pub other: Vec<&'a BreakdownItem>,
}

/// Partition breakdown items by their load group.
pub fn group_breakdown(breakdown: &[BreakdownItem]) -> GroupedBreakdown<'_> {
    let of = |group: LoadGroup| {
        breakdown
            .iter()
            .filter(|item| item.group == group)
            .collect()
    };
    GroupedBreakdown {
        envelope: of(LoadGroup::Envelope),
        internal: of(LoadGroup::Internal),
        ventilation: of(LoadGroup::Ventilation),
        other: of(LoadGroup::Other),
    }
}

/// Display label for a breakdown category.
pub fn category_label(category: BreakdownCategory, language: Language) -> &'static str {
    use BreakdownCategory::*;
    match (category, language) {
        (WallTransmission, Language::En) => "Wall Transmission",
        (WallTransmission, Language::Es) => "Transmision Paredes",
        (RoofTransmission, Language::En) => "Roof Transmission",
        (RoofTransmission, Language::Es) => "Transmision Techo",
        (CeilingTransmission, Language::En) => "Ceiling Transmission",
        (CeilingTransmission, Language::Es) => "Transmision Cielo",
        (WindowTransmission, Language::En) => "Window Transmission",
        (WindowTransmission, Language::Es) => "Transmision Ventanas",
        (SolarGain, Language::En) => "Solar Gain (Windows)",
        (SolarGain, Language::Es) => "Ganancia Solar (Ventanas)",
        (OccupantsSensible, Language::En) => "Occupants (Sensible)",
        (OccupantsSensible, Language::Es) => "Ocupantes (Sensible)",
        (Equipment, Language::En) => "Equipment",
        (Equipment, Language::Es) => "Equipos",
        (Lighting, Language::En) => "Lighting",
        (Lighting, Language::Es) => "Iluminacion",
        (Infiltration, Language::En) => "Infiltration",
        (Infiltration, Language::Es) => "Infiltracion",
        (FreshAir, Language::En) => "Fresh Air (Ventilation)",
        (FreshAir, Language::Es) => "Aire Fresco (Ventilacion)",
        (LatentLoad, Language::En) => "Latent Load (Humidity)",
        (LatentLoad, Language::Es) => "Carga Latente (Humedad)",
        (ShapeAdjustment, Language::En) => "Shape Adjustment",
        (ShapeAdjustment, Language::Es) => "Ajuste por Forma",
        (HighCeilingAdjustment, Language::En) => "High Ceiling Adjustment",
        (HighCeilingAdjustment, Language::Es) => "Ajuste Techo Alto",
        (SafetyMargin, Language::En) => "Safety Margin",
        (SafetyMargin, Language::Es) => "Margen de Seguridad",
    }
}

/// Display label for a load group.
pub fn group_label(group: LoadGroup, language: Language) -> &'static str {
    match (group, language) {
        (LoadGroup::Envelope, Language::En) => "Envelope Loads",
        (LoadGroup::Envelope, Language::Es) => "Cargas de Envolvente",
        (LoadGroup::Internal, Language::En) => "Internal Loads",
        (LoadGroup::Internal, Language::Es) => "Cargas Internas",
        (LoadGroup::Ventilation, Language::En) => "Ventilation & Infiltration",
        (LoadGroup::Ventilation, Language::Es) => "Ventilacion e Infiltracion",
        (LoadGroup::Other, Language::En) => "Adjustments & Margin",
        (LoadGroup::Other, Language::Es) => "Ajustes y Margen",
    }
}

/// Display label for a quote tier.
pub fn tier_label(tier: QuoteTier, language: Language) -> &'static str {
    match (tier, language) {
        (QuoteTier::Economic, Language::En) => "Economic",
        (QuoteTier::Economic, Language::Es) => "Economica",
        (QuoteTier::Recommended, Language::En) => "Recommended",
        (QuoteTier::Recommended, Language::Es) => "Recomendada",
        (QuoteTier::Premium, Language::En) => "Premium",
        (QuoteTier::Premium, Language::Es) => "Premium",
    }
}

/// Fixed pros/cons text block for a tier.
pub fn tier_pros_cons(tier: QuoteTier, language: Language) -> (Vec<&'static str>, Vec<&'static str>) {
    match (tier, language) {
        (QuoteTier::Economic, Language::En) => (
            vec![
                "Lowest upfront cost",
                "Quick availability",
                "Simple installation",
            ],
            vec![
                "Higher energy consumption",
                "Shorter warranty",
                "Basic features only",
            ],
        ),
        (QuoteTier::Economic, Language::Es) => (
            vec![
                "Menor costo inicial",
                "Disponibilidad rapida",
                "Instalacion simple",
            ],
            vec![
                "Mayor consumo energetico",
                "Garantia mas corta",
                "Solo funciones basicas",
            ],
        ),
        (QuoteTier::Recommended, Language::En) => (
            vec![
                "Best value for money",
                "Energy efficient (Inverter)",
                "Extended warranty",
                "WiFi control included",
            ],
            vec!["Moderate upfront investment"],
        ),
        (QuoteTier::Recommended, Language::Es) => (
            vec![
                "Mejor relacion costo-beneficio",
                "Eficiencia energetica (Inverter)",
                "Garantia extendida",
                "Control WiFi incluido",
            ],
            vec!["Inversion inicial moderada"],
        ),
        (QuoteTier::Premium, Language::En) => (
            vec![
                "Maximum energy efficiency",
                "Longest warranty (12 years)",
                "Premium features & quiet operation",
                "Advanced air purification",
            ],
            vec!["Higher upfront cost", "May have longer delivery times"],
        ),
        (QuoteTier::Premium, Language::Es) => (
            vec![
                "Maxima eficiencia energetica",
                "Garantia mas larga (12 anos)",
                "Funciones premium y operacion silenciosa",
                "Purificacion de aire avanzada",
            ],
            vec![
                "Mayor costo inicial",
                "Puede tener tiempos de entrega mas largos",
            ],
        ),
    }
}

/// "12.2K BTU" above one thousand, "950 BTU" below.
pub fn format_btu(btu: i64) -> String {
    if btu >= 1000 {
        format!("{:.1}K BTU", btu as f64 / 1000.0)
    } else {
        format!("{btu} BTU")
    }
}

/// "1.0 TR"
pub fn format_tonnage(tonnage: f64) -> String {
    format!("{tonnage:.1} TR")
}

/// "$1,100 - $1,300 USD"
pub fn format_price(price: &PriceRange) -> String {
    format!(
        "${} - ${} USD",
        group_thousands(price.min),
        group_thousands(price.max)
    )
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Flat load summary kept for collaborators that predate the grouped
/// breakdown. Derived on demand from the canonical calculation; never
/// stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacySummary {
    pub base_btu: i64,
    pub occupant_btu: i64,
    pub equipment_btu: i64,
    pub window_btu: i64,
    pub sunlight_btu: i64,
    pub ceiling_btu: i64,
    pub safety_margin: i64,
    pub total_btu: i64,
}

/// Project the canonical calculation onto the legacy flat summary.
pub fn legacy_summary(
    analysis: &RoomAnalysis,
    calculation: &ThermalCalculation,
    reference: &ReferenceData,
) -> LegacySummary {
    let base_per_sqm = reference.base_load_per_sqm.get(analysis.room_type);
    let solar_gain = calculation.envelope.solar_gain;
    LegacySummary {
        base_btu: (analysis.dimensions.area * base_per_sqm).round() as i64,
        occupant_btu: calculation.internal.occupants_sensible,
        equipment_btu: calculation.internal.equipment,
        window_btu: calculation.envelope.window_transmission + solar_gain,
        sunlight_btu: if analysis.has_direct_sunlight {
            (solar_gain as f64 * 0.3).round() as i64
        } else {
            0
        },
        ceiling_btu: calculation.envelope.roof_transmission + calculation.ceiling_adjustment,
        safety_margin: calculation.safety_margin,
        total_btu: calculation.total_btu,
    }
}

/// Render the calculation and quote options as a plain-text report.
pub fn render_text(
    calculation: &ThermalCalculation,
    options: &[QuoteOption],
    language: Language,
) -> String {
    let mut out = String::new();
    let title = match language {
        Language::En => "Cooling requirement",
        Language::Es => "Requerimiento de enfriamiento",
    };
    out.push_str(&format!(
        "{title}: {} ({})\n",
        format_btu(calculation.total_btu),
        format_tonnage(calculation.tonnage)
    ));

    let grouped = group_breakdown(&calculation.breakdown);
    for (group, items) in [
        (LoadGroup::Envelope, &grouped.envelope),
        (LoadGroup::Internal, &grouped.internal),
        (LoadGroup::Ventilation, &grouped.ventilation),
        (LoadGroup::Other, &grouped.other),
    ] {
        if items.is_empty() {
            continue;
        }
        out.push_str(&format!("\n{}\n", group_label(group, language)));
        for item in items {
            out.push_str(&format!(
                "  {:<28} {:>8} BTU/h  {:>3}%  {}\n",
                category_label(item.category, language),
                item.value,
                item.percentage,
                item.detail
            ));
        }
    }

    for option in options {
        let marker = if option.is_recommended { " *" } else { "" };
        out.push_str(&format!(
            "\n[{}{marker}] {}\n",
            tier_label(option.tier, language),
            format_price(&option.estimated_price)
        ));
        for unit in &option.units {
            out.push_str(&format!(
                "  {} {} - {} (SEER {})\n",
                unit.brand,
                unit.model,
                format_btu(unit.btu_capacity),
                unit.seer
            ));
        }
        let coverage = match language {
            Language::En => "coverage",
            Language::Es => "cobertura",
        };
        let monthly = match language {
            Language::En => "est. monthly cost",
            Language::Es => "costo mensual est.",
        };
        out.push_str(&format!(
            "  {coverage}: {}%  {monthly}: ${:.2}\n",
            option.coverage_percentage, option.estimated_monthly_cost
        ));
    }
    out
}

/// Render the calculation and quote options as Markdown.
pub fn render_markdown(
    calculation: &ThermalCalculation,
    options: &[QuoteOption],
    language: Language,
) -> String {
    let mut out = String::new();
    let (title, breakdown_title, options_title) = match language {
        Language::En => ("# Cooling Quote", "## Load Breakdown", "## Equipment Options"),
        Language::Es => ("# Cotizacion de Enfriamiento", "## Desglose de Cargas", "## Opciones de Equipo"),
    };

    out.push_str(&format!(
        "{title}\n\n**{}** ({})\n\n{breakdown_title}\n\n",
        format_btu(calculation.total_btu),
        format_tonnage(calculation.tonnage)
    ));
    out.push_str("| Category | BTU/h | % | Detail |\n|---|---:|---:|---|\n");
    for item in &calculation.breakdown {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            category_label(item.category, language),
            item.value,
            item.percentage,
            item.detail
        ));
    }

    out.push_str(&format!("\n{options_title}\n"));
    for option in options {
        let marker = if option.is_recommended { " ⭐" } else { "" };
        out.push_str(&format!(
            "\n### {}{marker}\n\n",
            tier_label(option.tier, language)
        ));
        for unit in &option.units {
            out.push_str(&format!(
                "- **{} {}** — {} ({}), SEER {}, {}\n",
                unit.brand,
                unit.model,
                format_btu(unit.btu_capacity),
                format_tonnage(unit.tonnage),
                unit.seer,
                format_price(&unit.price_range)
            ));
        }
        let (pros, cons) = tier_pros_cons(option.tier, language);
        out.push_str(&format!(
            "\n{}: {}%  \n",
            match language {
                Language::En => "Coverage",
                Language::Es => "Cobertura",
            },
            option.coverage_percentage
        ));
        out.push_str(&format!(
            "{}: ${:.2}\n\n",
            match language {
                Language::En => "Estimated monthly cost",
                Language::Es => "Costo mensual estimado",
            },
            option.estimated_monthly_cost
        ));
        for p in pros {
            out.push_str(&format!("- ✔ {p}\n"));
        }
        for c in cons {
            out.push_str(&format!("- ✘ {c}\n"));
        }
    }
    out
}
