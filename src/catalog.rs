//! Purchasable equipment catalog.
//!
//! Static inventory of air-conditioning units the quote generator can pick
//! from. The built-in catalog reflects the Central American market the tool
//! targets; alternative catalogs can be loaded from JSON without touching
//! selection logic.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::quote::QuoteTier;

/// Mounting/distribution type of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    MiniSplit,
    Central,
    Cassette,
    Ducted,
    Portable,
}

/// Energy efficiency label shown on the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyRating {
    A,
    B,
    C,
    D,
}

/// Retail price band in USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
    pub installation_included: bool,
}

/// One purchasable unit in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcUnit {
    pub id: String,
    pub brand: String,
    pub model: String,
    /// Rated cooling capacity (BTU/h).
    pub btu_capacity: i64,
    /// Capacity in refrigeration tons (btu_capacity / 12 000).
    pub tonnage: f64,
    /// Seasonal efficiency rating; buckets the unit into a quote tier.
    pub seer: f64,
    pub unit_type: UnitType,
    pub features: Vec<String>,
    pub price_range: PriceRange,
    pub warranty: String,
    pub energy_rating: EnergyRating,
}

impl AcUnit {
    /// Quote tier this unit belongs to, by efficiency rating.
    pub fn tier(&self) -> QuoteTier {
        QuoteTier::for_seer(self.seer)
    }

    /// Capacity bought per dollar at the low end of the price band.
    pub fn capacity_per_dollar(&self) -> f64 {
        self.btu_capacity as f64 / self.price_range.min as f64
    }
}

/// A versioned set of purchasable units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub version: String,
    pub units: Vec<AcUnit>,
}

impl Catalog {
    /// Decode a catalog from JSON (for injecting updated inventories).
    pub fn from_json(json: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Units whose efficiency rating falls in the given tier, in catalog order.
    pub fn tier_units(&self, tier: QuoteTier) -> Vec<&AcUnit> {
        self.units.iter().filter(|u| u.tier() == tier).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        builtin_catalog()
    }
}

#[allow(clippy::too_many_arguments)]
fn unit(
    id: &str,
    brand: &str,
    model: &str,
    btu_capacity: i64,
    seer: f64,
    unit_type: UnitType,
    features: &[&str],
    price_min: u32,
    price_max: u32,
    installation_included: bool,
    warranty: &str,
    energy_rating: EnergyRating,
) -> AcUnit {
    AcUnit {
        id: id.to_string(),
        brand: brand.to_string(),
        model: model.to_string(),
        btu_capacity,
        tonnage: btu_capacity as f64 / 12_000.0,
        seer,
        unit_type,
        features: features.iter().map(|f| f.to_string()).collect(),
        price_range: PriceRange {
            min: price_min,
            max: price_max,
            installation_included,
        },
        warranty: warranty.to_string(),
        energy_rating,
    }
}

/// The built-in inventory: mini-splits from 9 000 to 36 000 BTU, ducted
/// commercial units up to 60 000 BTU and ceiling cassettes, spanning all
/// three efficiency tiers.
pub fn builtin_catalog() -> Catalog {
    use EnergyRating::*;
    use UnitType::*;

    let units = vec![
        // 9,000 BTU (0.75 TR) - small rooms
        unit(
            "midea-eco-9k", "Midea", "Blanc 9K", 9000, 13.0, MiniSplit,
            &["Control remoto", "Modo sleep", "Filtro lavable"],
            320, 400, false, "3 anos compresor", D,
        ),
        unit(
            "carrier-eco-9k", "Carrier", "Comfort 9K", 9000, 14.0, MiniSplit,
            &["Control remoto", "Auto restart", "Timer 24h"],
            350, 430, false, "5 anos compresor", C,
        ),
        unit(
            "lg-rec-9k", "LG", "DualCool 9K", 9000, 18.0, MiniSplit,
            &["Dual Inverter", "WiFi ThinQ", "Modo silencioso"],
            550, 680, true, "10 anos compresor", A,
        ),
        unit(
            "daikin-rec-9k", "Daikin", "Cora 9K", 9000, 19.0, MiniSplit,
            &["Inverter", "WiFi", "Streamer", "Sensor inteligente"],
            600, 720, true, "10 anos compresor", A,
        ),
        unit(
            "mitsubishi-prem-9k", "Mitsubishi Electric", "MSZ-AP09", 9000, 22.0, MiniSplit,
            &["Hyper Inverter", "Plasma Quad", "WiFi", "3D i-see"],
            850, 1000, true, "12 anos compresor", A,
        ),
        unit(
            "fujitsu-prem-9k", "Fujitsu", "Halcyon 9K", 9000, 23.0, MiniSplit,
            &["Inverter", "Ion deodorizer", "WiFi", "Human sensor"],
            900, 1050, true, "12 anos compresor", A,
        ),
        // 12,000 BTU (1 TR) - bedrooms/offices
        unit(
            "midea-eco-12k", "Midea", "Blanc 12K", 12000, 13.0, MiniSplit,
            &["Control remoto", "Modo sleep", "Filtro lavable"],
            380, 480, false, "3 anos compresor", D,
        ),
        unit(
            "lg-eco-12k", "LG", "Standard 12K", 12000, 15.0, MiniSplit,
            &["Control remoto", "Auto restart", "Gold Fin"],
            480, 580, false, "5 anos compresor", B,
        ),
        unit(
            "carrier-rec-12k", "Carrier", "XPower 12K", 12000, 17.0, MiniSplit,
            &["Inverter", "WiFi", "Filtro PM2.5"],
            680, 820, true, "10 anos compresor", A,
        ),
        unit(
            "lg-rec-12k", "LG", "DualCool 12K", 12000, 18.0, MiniSplit,
            &["Dual Inverter", "WiFi ThinQ", "Modo AI", "UVnano"],
            650, 780, true, "10 anos compresor", A,
        ),
        unit(
            "daikin-rec-12k", "Daikin", "Aurora FTXF", 12000, 19.0, MiniSplit,
            &["Inverter", "WiFi", "Modo silencioso", "Sensor inteligente"],
            700, 850, true, "10 anos compresor", A,
        ),
        unit(
            "daikin-prem-12k", "Daikin", "Emura 12K", 12000, 22.0, MiniSplit,
            &["Flash Streamer", "WiFi", "Eye sensor", "Diseno europeo"],
            1000, 1200, true, "12 anos compresor", A,
        ),
        unit(
            "mitsubishi-prem-12k", "Mitsubishi Electric", "MSZ-LN", 12000, 24.0, MiniSplit,
            &["Hyper Inverter", "Plasma Quad", "WiFi", "3D Auto"],
            1100, 1300, true, "12 anos compresor", A,
        ),
        // 15,000 BTU (1.25 TR) - medium rooms
        unit(
            "midea-eco-15k", "Midea", "Xtreme Save 15K", 15000, 14.0, MiniSplit,
            &["Control remoto", "Modo turbo", "Auto limpieza"],
            480, 580, false, "5 anos compresor", C,
        ),
        unit(
            "daikin-rec-15k", "Daikin", "Cora 15K", 15000, 18.0, MiniSplit,
            &["Inverter", "WiFi", "Streamer", "Coanda airflow"],
            780, 920, true, "10 anos compresor", A,
        ),
        unit(
            "mitsubishi-prem-15k", "Mitsubishi Electric", "MSZ-EF15", 15000, 22.0, MiniSplit,
            &["Hyper Inverter", "Plasma Quad", "WiFi"],
            1200, 1400, true, "12 anos compresor", A,
        ),
        // 18,000 BTU (1.5 TR) - large rooms/offices
        unit(
            "midea-eco-18k", "Midea", "Xtreme Save 18K", 18000, 14.0, MiniSplit,
            &["Control remoto", "Modo turbo", "Follow me"],
            550, 680, false, "5 anos compresor", C,
        ),
        unit(
            "lg-eco-18k", "LG", "Standard Plus", 18000, 15.0, MiniSplit,
            &["Control remoto", "Auto restart", "Deshumidificador"],
            600, 750, false, "5 anos compresor", B,
        ),
        unit(
            "daikin-rec-18k", "Daikin", "Cora 18K", 18000, 18.0, MiniSplit,
            &["Inverter", "WiFi", "Streamer", "Sensor movimiento"],
            900, 1080, true, "10 anos compresor", A,
        ),
        unit(
            "lg-rec-18k", "LG", "Dual Inverter", 18000, 20.0, MiniSplit,
            &["Dual Inverter", "WiFi ThinQ", "Purificador de aire", "Modo AI"],
            950, 1150, true, "10 anos compresor", A,
        ),
        unit(
            "daikin-prem-18k", "Daikin", "Emura FTXJ", 18000, 23.0, MiniSplit,
            &["Flash Streamer", "WiFi", "Eye sensor", "Modo econo"],
            1500, 1800, true, "12 anos compresor", A,
        ),
        unit(
            "mitsubishi-prem-18k", "Mitsubishi Electric", "MSZ-LN18", 18000, 24.0, MiniSplit,
            &["Hyper Inverter", "Plasma Quad", "WiFi", "3D i-see"],
            1600, 1900, true, "12 anos compresor", A,
        ),
        // 24,000 BTU (2 TR) - wide spaces
        unit(
            "midea-eco-24k", "Midea", "Forest Pro", 24000, 15.0, MiniSplit,
            &["Control remoto", "Filtro antibacterial", "Modo turbo"],
            750, 900, false, "5 anos compresor", B,
        ),
        unit(
            "daikin-rec-24k", "Daikin", "Cora 24K", 24000, 18.0, MiniSplit,
            &["Inverter", "WiFi", "Streamer", "Coanda airflow"],
            1150, 1380, true, "10 anos compresor", A,
        ),
        unit(
            "lg-rec-24k", "LG", "Dual Inverter 24K", 24000, 19.0, MiniSplit,
            &["Dual Inverter", "WiFi ThinQ", "UVnano", "Modo AI"],
            1250, 1500, true, "10 anos compresor", A,
        ),
        unit(
            "daikin-prem-24k", "Daikin", "Emura 24K", 24000, 21.0, MiniSplit,
            &["Flash Streamer", "WiFi", "Eye sensor", "Diseno europeo"],
            1800, 2150, true, "12 anos compresor", A,
        ),
        unit(
            "mitsubishi-prem-24k", "Mitsubishi Electric", "MSZ-FH", 24000, 22.0, MiniSplit,
            &["Hyper Inverter", "Filtro nanoplatinum", "Modo 3D", "WiFi"],
            1900, 2300, true, "12 anos compresor", A,
        ),
        // 30,000 BTU (2.5 TR) - small commercial
        unit(
            "lg-eco-30k", "LG", "Standard Plus 30K", 30000, 15.0, MiniSplit,
            &["Control remoto", "Auto restart", "Deshumidificador"],
            950, 1150, false, "5 anos compresor", B,
        ),
        unit(
            "daikin-rec-30k", "Daikin", "Skyair 30K", 30000, 18.0, MiniSplit,
            &["Inverter", "WiFi", "Control centralizado"],
            1500, 1850, true, "10 anos compresor", A,
        ),
        unit(
            "mitsubishi-prem-30k", "Mitsubishi Electric", "MSZ-FH30", 30000, 21.0, MiniSplit,
            &["Hyper Inverter", "Plasma Quad", "WiFi", "3D i-see"],
            2200, 2600, true, "12 anos compresor", A,
        ),
        // 36,000 BTU (3 TR) - commercial/restaurants
        unit(
            "carrier-eco-36k", "Carrier", "Commercial 36K", 36000, 14.0, MiniSplit,
            &["Control remoto", "Alta capacidad", "Modo turbo"],
            1100, 1350, false, "5 anos compresor", C,
        ),
        unit(
            "daikin-rec-36k", "Daikin", "Skyair FBQ", 36000, 18.0, MiniSplit,
            &["Inverter", "Alta capacidad", "Control centralizado"],
            1800, 2200, true, "10 anos compresor", A,
        ),
        unit(
            "mitsubishi-prem-36k", "Mitsubishi Electric", "PEA-M36", 36000, 21.0, MiniSplit,
            &["Hyper Inverter", "Comercial", "WiFi", "Control zonal"],
            2600, 3100, true, "12 anos compresor", A,
        ),
        // 48,000 BTU (4 TR) - large commercial, ducted
        unit(
            "carrier-eco-48k", "Carrier", "Commercial 48K", 48000, 14.0, Ducted,
            &["Ductos", "Alta capacidad", "Control basico"],
            2200, 2700, false, "5 anos compresor", C,
        ),
        unit(
            "daikin-rec-48k", "Daikin", "Skyair FBQ 48K", 48000, 18.0, Ducted,
            &["Inverter", "Ductos", "Control i-manager"],
            3500, 4200, true, "10 anos compresor", A,
        ),
        unit(
            "mitsubishi-rec-48k", "Mitsubishi Electric", "PEA-M48", 48000, 20.0, Ducted,
            &["Hyper Inverter", "Ductos", "WiFi", "Control zonal avanzado"],
            4200, 5000, true, "12 anos compresor", A,
        ),
        // 60,000 BTU (5 TR) - commercial/industrial, ducted
        unit(
            "carrier-eco-60k", "Carrier", "40MBQ060", 60000, 14.0, Ducted,
            &["Ductos", "Alta capacidad", "Uso comercial"],
            3800, 4600, false, "5 anos compresor", C,
        ),
        unit(
            "daikin-rec-60k", "Daikin", "Skyair Commercial", 60000, 17.0, Ducted,
            &["Inverter", "Ductos", "BMS compatible"],
            5000, 6000, true, "10 anos compresor", A,
        ),
        unit(
            "mitsubishi-rec-60k", "Mitsubishi Electric", "PEAD-M60", 60000, 19.0, Ducted,
            &["Hyper Inverter", "Ductos premium", "Control centralizado", "BMS"],
            5800, 6800, true, "12 anos compresor", A,
        ),
        // Ceiling cassettes - commercial
        unit(
            "lg-cassette-18k", "LG", "Ceiling Cassette 18K", 18000, 16.0, Cassette,
            &["4-way airflow", "Panel plano", "Control remoto"],
            1200, 1500, true, "7 anos compresor", A,
        ),
        unit(
            "daikin-cassette-24k", "Daikin", "Round Flow 24K", 24000, 19.0, Cassette,
            &["Round flow", "Auto swing", "Sensor presencia", "WiFi"],
            1900, 2350, true, "10 anos compresor", A,
        ),
        unit(
            "mitsubishi-cassette-36k", "Mitsubishi Electric", "PLA-M36", 36000, 20.0, Cassette,
            &["4-way airflow", "i-see sensor 3D", "WiFi", "Operacion silenciosa"],
            3000, 3600, true, "12 anos compresor", A,
        ),
    ];

    Catalog {
        version: "2024.1".to_string(),
        units,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_covers_every_tier() {
        let catalog = Catalog::default();
        assert!(!catalog.tier_units(QuoteTier::Economic).is_empty());
        assert!(!catalog.tier_units(QuoteTier::Recommended).is_empty());
        assert!(!catalog.tier_units(QuoteTier::Premium).is_empty());
    }

    #[test]
    fn tonnage_is_derived_from_capacity() {
        for u in &Catalog::default().units {
            assert!((u.tonnage - u.btu_capacity as f64 / 12_000.0).abs() < 1e-9);
        }
    }

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = Catalog::default();
        let mut ids: Vec<&str> = catalog.units.iter().map(|u| u.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.units.len());
    }

    #[test]
    fn catalog_round_trips_through_json() {
        let catalog = Catalog::default();
        let json = serde_json::to_string(&catalog).unwrap();
        let back = Catalog::from_json(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
