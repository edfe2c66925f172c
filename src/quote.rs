//! Tiered equipment selection over the catalog.
//!
//! For each price/quality tier the generator picks a bundle of catalog
//! units that covers a tier-specific target capacity at the best
//! capacity-per-dollar, and prices its monthly operation. A tier with no
//! candidate units is simply omitted; callers always receive between zero
//! and three options.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::{AcUnit, Catalog, PriceRange};
use crate::inputs::{OperatingHours, UserInputs};
use crate::load::ThermalCalculation;
use crate::refdata::ReferenceData;

/// Price/quality tier of a quote option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteTier {
    Economic,
    Recommended,
    Premium,
}

impl QuoteTier {
    pub const ALL: [QuoteTier; 3] = [
        QuoteTier::Economic,
        QuoteTier::Recommended,
        QuoteTier::Premium,
    ];

    /// Tier a unit falls into by its efficiency rating.
    pub fn for_seer(seer: f64) -> Self {
        if seer < 17.0 {
            QuoteTier::Economic
        } else if seer < 21.0 {
            QuoteTier::Recommended
        } else {
            QuoteTier::Premium
        }
    }

    /// Target capacity as a fraction of the calculated requirement.
    /// Economic undershoots slightly (cheaper units run longer), premium
    /// overshoots for headroom.
    pub fn target_factor(&self) -> f64 {
        match self {
            QuoteTier::Economic => 0.9,
            QuoteTier::Recommended => 1.0,
            QuoteTier::Premium => 1.1,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            QuoteTier::Economic => "economic",
            QuoteTier::Recommended => "recommended",
            QuoteTier::Premium => "premium",
        }
    }
}

/// One purchasable bundle satisfying (or best-effort approaching) the
/// calculated capacity requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteOption {
    /// Deterministic identifier: tier plus the selected unit ids.
    pub id: String,
    pub tier: QuoteTier,
    pub units: Vec<AcUnit>,
    /// Combined capacity of the selected units (BTU/h).
    pub total_btu: i64,
    /// Bundle capacity over the tier target, capped at 100.
    pub coverage_percentage: i64,
    pub estimated_price: PriceRange,
    /// Estimated energy cost per month (USD).
    pub estimated_monthly_cost: f64,
    /// True only for the recommended tier.
    pub is_recommended: bool,
}

/// Generate up to three quote options (economic/recommended/premium) for a
/// calculated load. Tiers without catalog candidates are omitted.
pub fn generate_quote_options(
    calculation: &ThermalCalculation,
    inputs: &UserInputs,
    catalog: &Catalog,
    reference: &ReferenceData,
) -> Vec<QuoteOption> {
    let hours = reference
        .monthly_operating_hours(inputs.operating_hours.unwrap_or(OperatingHours::FullDay));

    let mut options = Vec::with_capacity(3);
    for tier in QuoteTier::ALL {
        let candidates = catalog.tier_units(tier);
        if candidates.is_empty() {
            debug!("no catalog units in {} tier, omitting", tier.key());
            continue;
        }
        let target = calculation.total_btu as f64 * tier.target_factor();
        let selected = select_units(&candidates, target);
        if selected.is_empty() {
            continue;
        }
        options.push(build_option(tier, &selected, target, hours, reference));
    }
    options
}

/// Pick units for one tier.
///
/// If at least one unit reaches 80 % of the target on its own, the bundle
/// is assembled greedily by capacity per dollar until the target is
/// covered. Otherwise the tier is served best-effort by its single
/// largest unit and the option reports coverage below 100 %.
fn select_units<'a>(candidates: &[&'a AcUnit], target: f64) -> Vec<&'a AcUnit> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let mut by_capacity: Vec<&AcUnit> = candidates.to_vec();
    by_capacity.sort_by_key(|u| u.btu_capacity);

    let adequate_single = by_capacity
        .iter()
        .any(|u| u.btu_capacity as f64 >= target * 0.8);
    if !adequate_single {
        // Ties broken by catalog order via the stable sort.
        return vec![by_capacity[by_capacity.len() - 1]];
    }

    let mut by_value: Vec<&AcUnit> = candidates.to_vec();
    by_value.sort_by(|a, b| {
        b.capacity_per_dollar()
            .total_cmp(&a.capacity_per_dollar())
    });

    let mut selected = Vec::new();
    let mut combined = 0i64;
    for unit in by_value {
        if combined as f64 >= target {
            break;
        }
        selected.push(unit);
        combined += unit.btu_capacity;
    }
    selected
}

fn build_option(
    tier: QuoteTier,
    selected: &[&AcUnit],
    target: f64,
    hours_per_month: f64,
    reference: &ReferenceData,
) -> QuoteOption {
    let combined_btu: i64 = selected.iter().map(|u| u.btu_capacity).sum();
    let estimated_price = PriceRange {
        min: selected.iter().map(|u| u.price_range.min).sum(),
        max: selected.iter().map(|u| u.price_range.max).sum(),
        installation_included: selected
            .iter()
            .all(|u| u.price_range.installation_included),
    };
    let avg_seer = selected.iter().map(|u| u.seer).sum::<f64>() / selected.len() as f64;
    let estimated_monthly_cost = monthly_operating_cost(
        combined_btu as f64,
        avg_seer,
        hours_per_month,
        reference.energy_cost_per_kwh,
    );

    let coverage_percentage = if target > 0.0 {
        ((combined_btu as f64 / target) * 100.0).round().min(100.0) as i64
    } else {
        100
    };

    let mut id = tier.key().to_string();
    for unit in selected {
        id.push('-');
        id.push_str(&unit.id);
    }

    QuoteOption {
        id,
        tier,
        units: selected.iter().map(|u| (*u).clone()).collect(),
        total_btu: combined_btu,
        coverage_percentage,
        estimated_price,
        estimated_monthly_cost,
        is_recommended: tier == QuoteTier::Recommended,
    }
}

/// Estimated monthly energy cost in USD for running `btu` of capacity.
///
/// Draw is approximated from the seasonal rating via EER ≈ SEER × 0.875.
fn monthly_operating_cost(btu: f64, seer: f64, hours_per_month: f64, cost_per_kwh: f64) -> f64 {
    let watts = btu / (seer * 0.875);
    let kwh = watts / 1000.0 * hours_per_month;
    (kwh * cost_per_kwh * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EnergyRating, UnitType};

    fn test_unit(id: &str, seer: f64, capacity: i64, price_min: u32) -> AcUnit {
        AcUnit {
            id: id.to_string(),
            brand: "Test".to_string(),
            model: id.to_uppercase(),
            btu_capacity: capacity,
            tonnage: capacity as f64 / 12_000.0,
            seer,
            unit_type: UnitType::MiniSplit,
            features: vec![],
            price_range: PriceRange {
                min: price_min,
                max: price_min + 100,
                installation_included: seer >= 17.0,
            },
            warranty: "5 anos".to_string(),
            energy_rating: EnergyRating::B,
        }
    }

    #[test]
    fn seer_boundaries_bucket_correctly() {
        assert_eq!(QuoteTier::for_seer(16.9), QuoteTier::Economic);
        assert_eq!(QuoteTier::for_seer(17.0), QuoteTier::Recommended);
        assert_eq!(QuoteTier::for_seer(20.9), QuoteTier::Recommended);
        assert_eq!(QuoteTier::for_seer(21.0), QuoteTier::Premium);
    }

    #[test]
    fn single_adequate_unit_is_selected() {
        let a = test_unit("a", 14.0, 12_000, 400);
        let candidates = vec![&a];
        let selected = select_units(&candidates, 10_989.0);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "a");
    }

    #[test]
    fn greedy_bundle_prefers_capacity_per_dollar() {
        // Same capacity, cheaper unit wins the first slot and already
        // covers the target alone.
        let cheap = test_unit("cheap", 14.0, 12_000, 400);
        let pricey = test_unit("pricey", 15.0, 12_000, 600);
        let candidates = vec![&pricey, &cheap];
        let selected = select_units(&candidates, 12_000.0);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "cheap");
    }

    #[test]
    fn undersized_tier_falls_back_to_largest_unit() {
        let small = test_unit("small", 14.0, 9_000, 350);
        let medium = test_unit("medium", 15.0, 12_000, 450);
        let candidates = vec![&small, &medium];
        // 80% of 60000 = 48000: nothing qualifies.
        let selected = select_units(&candidates, 60_000.0);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "medium");
    }

    #[test]
    fn coverage_is_capped_at_one_hundred() {
        let unit = test_unit("u", 18.0, 24_000, 900);
        let option = build_option(
            QuoteTier::Recommended,
            &[&unit],
            12_000.0,
            260.0,
            &ReferenceData::default(),
        );
        assert_eq!(option.coverage_percentage, 100);

        let option = build_option(
            QuoteTier::Recommended,
            &[&unit],
            30_000.0,
            260.0,
            &ReferenceData::default(),
        );
        assert_eq!(option.coverage_percentage, 80);
    }

    #[test]
    fn installation_included_requires_every_unit() {
        let with = test_unit("with", 18.0, 12_000, 700);
        let without = test_unit("without", 14.0, 12_000, 400);
        let option = build_option(
            QuoteTier::Recommended,
            &[&with, &without],
            24_000.0,
            260.0,
            &ReferenceData::default(),
        );
        assert!(!option.estimated_price.installation_included);
        assert_eq!(option.estimated_price.min, 1100);
        assert_eq!(option.estimated_price.max, 1300);
    }

    #[test]
    fn monthly_cost_matches_hand_calculation() {
        // 12000 BTU at SEER 16 → EER 14: 857.14W; 260h → 222.86kWh;
        // × 0.18 USD = 40.11
        let cost = monthly_operating_cost(12_000.0, 16.0, 260.0, 0.18);
        assert!((cost - 40.11).abs() < 0.01);
    }

    #[test]
    fn empty_tier_is_omitted_not_an_error() {
        let catalog = Catalog {
            version: "test".to_string(),
            units: vec![test_unit("only-eco", 14.0, 12_000, 400)],
        };
        let calc = sample_calculation(12_210);
        let options = generate_quote_options(
            &calc,
            &UserInputs::default(),
            &catalog,
            &ReferenceData::default(),
        );
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].tier, QuoteTier::Economic);
        assert!(!options[0].is_recommended);
    }

    #[test]
    fn generation_is_deterministic() {
        let catalog = Catalog::default();
        let calc = sample_calculation(12_210);
        let inputs = UserInputs::default();
        let reference = ReferenceData::default();
        let first = generate_quote_options(&calc, &inputs, &catalog, &reference);
        let second = generate_quote_options(&calc, &inputs, &catalog, &reference);
        assert_eq!(first, second);
    }

    fn sample_calculation(total_btu: i64) -> ThermalCalculation {
        use crate::load::{EnvelopeLoads, InternalLoads, VentilationLoads};
        ThermalCalculation {
            envelope: EnvelopeLoads {
                wall_transmission: 0,
                roof_transmission: 0,
                window_transmission: 0,
                solar_gain: 0,
                total: 0,
            },
            internal: InternalLoads {
                occupants_sensible: 0,
                occupants_latent: 0,
                equipment: 0,
                lighting: 0,
                total: 0,
            },
            ventilation: VentilationLoads {
                infiltration: 0,
                fresh_air: 0,
                total: 0,
            },
            latent_load: 0,
            shape_adjustment: 0,
            ceiling_adjustment: 0,
            safety_margin: 0,
            total_btu,
            tonnage: (total_btu as f64 / 12_000.0 * 10.0).round() / 10.0,
            breakdown: vec![],
        }
    }
}
