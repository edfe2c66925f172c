use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use acquote::parse::{parse_room_text, synthesize_analysis};
use acquote::report::{self, Language};
use acquote::{
    calculate_thermal_load, generate_quote_options, Catalog, ClimateZone, OperatingHours,
    QuoteOption, QuoteTier, ReferenceData, RoomAnalysis, ThermalCalculation, UserInputs,
};

#[derive(Parser)]
#[command(name = "acquote")]
#[command(about = "Air-conditioning sizing and quoting CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculates the cooling load for a room and quotes equipment options
    Quote {
        /// Free-text room description, e.g. "oficina 4x5x2.7 con 4 personas"
        #[arg(short, long)]
        text: Option<String>,

        /// Path to a RoomAnalysis JSON file (alternative to --text)
        #[arg(short, long)]
        room: Option<PathBuf>,

        /// Occupant count, overriding the description
        #[arg(short, long)]
        occupants: Option<u32>,

        /// Climate zone: tropical, subtropical, temperate or arid
        #[arg(short, long)]
        climate: Option<String>,

        /// Operating window: morning, afternoon, full_day, evening or 24_7
        #[arg(long)]
        hours: Option<String>,

        /// Report language: en or es
        #[arg(short, long, default_value = "en")]
        language: String,

        /// Output format: text, markdown or json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Path to an alternative catalog JSON file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Lists the equipment catalog
    Catalog {
        /// Only show one tier: economic, recommended or premium
        #[arg(short, long)]
        tier: Option<String>,

        /// Path to an alternative catalog JSON file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

/// Full engine output for JSON consumers.
#[derive(Serialize)]
struct QuoteDocument {
    analysis: RoomAnalysis,
    calculation: ThermalCalculation,
    options: Vec<QuoteOption>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Quote {
            text,
            room,
            occupants,
            climate,
            hours,
            language,
            format,
            catalog,
        } => {
            let analysis = load_analysis(text.as_deref(), room.as_deref())?;
            let inputs = UserInputs {
                occupants,
                operating_hours: hours.as_deref().map(parse_hours).transpose()?,
                climate_zone: climate.as_deref().map(parse_climate).transpose()?,
                ..Default::default()
            };
            let reference = ReferenceData::default();
            let catalog = load_catalog(catalog.as_deref())?;

            let calculation = calculate_thermal_load(&analysis, &inputs, &reference)?;
            let options = generate_quote_options(&calculation, &inputs, &catalog, &reference);
            let language = parse_language(&language)?;

            let output = match format.as_str() {
                "text" => report::render_text(&calculation, &options, language),
                "markdown" => report::render_markdown(&calculation, &options, language),
                "json" => serde_json::to_string_pretty(&QuoteDocument {
                    analysis,
                    calculation,
                    options,
                })?,
                other => anyhow::bail!("Unsupported format: {}", other),
            };
            println!("{output}");
        }
        Commands::Catalog { tier, catalog } => {
            let catalog = load_catalog(catalog.as_deref())?;
            let tier = tier.as_deref().map(parse_tier).transpose()?;
            for unit in &catalog.units {
                if let Some(tier) = tier {
                    if unit.tier() != tier {
                        continue;
                    }
                }
                println!(
                    "{:<24} {} {} - {} ({}), SEER {}, {}",
                    unit.id,
                    unit.brand,
                    unit.model,
                    report::format_btu(unit.btu_capacity),
                    report::format_tonnage(unit.tonnage),
                    unit.seer,
                    report::format_price(&unit.price_range),
                );
            }
        }
    }

    Ok(())
}

fn load_analysis(
    text: Option<&str>,
    room: Option<&std::path::Path>,
) -> anyhow::Result<RoomAnalysis> {
    match (text, room) {
        (Some(text), None) => Ok(synthesize_analysis(&parse_room_text(text))),
        (None, Some(path)) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read room file {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse room file {}", path.display()))
        }
        _ => anyhow::bail!("Provide exactly one of --text or --room"),
    }
}

fn load_catalog(path: Option<&std::path::Path>) -> anyhow::Result<Catalog> {
    match path {
        None => Ok(Catalog::default()),
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog {}", path.display()))?;
            Ok(Catalog::from_json(&json)?)
        }
    }
}

fn parse_climate(value: &str) -> anyhow::Result<ClimateZone> {
    match value {
        "tropical" => Ok(ClimateZone::Tropical),
        "subtropical" => Ok(ClimateZone::Subtropical),
        "temperate" => Ok(ClimateZone::Temperate),
        "arid" => Ok(ClimateZone::Arid),
        other => anyhow::bail!("Unknown climate zone: {}", other),
    }
}

fn parse_hours(value: &str) -> anyhow::Result<OperatingHours> {
    match value {
        "morning" => Ok(OperatingHours::Morning),
        "afternoon" => Ok(OperatingHours::Afternoon),
        "full_day" => Ok(OperatingHours::FullDay),
        "evening" => Ok(OperatingHours::Evening),
        "24_7" => Ok(OperatingHours::Continuous),
        other => anyhow::bail!("Unknown operating window: {}", other),
    }
}

fn parse_language(value: &str) -> anyhow::Result<Language> {
    match value {
        "en" => Ok(Language::En),
        "es" => Ok(Language::Es),
        other => anyhow::bail!("Unsupported language: {}", other),
    }
}

fn parse_tier(value: &str) -> anyhow::Result<QuoteTier> {
    match value {
        "economic" => Ok(QuoteTier::Economic),
        "recommended" => Ok(QuoteTier::Recommended),
        "premium" => Ok(QuoteTier::Premium),
        other => anyhow::bail!("Unknown tier: {}", other),
    }
}
