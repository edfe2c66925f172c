//! Air-conditioning quoting engine.
//!
//! Two-stage pipeline over injected reference data:
//!
//! 1. [`load::calculate_thermal_load`] maps a room description
//!    ([`room::RoomAnalysis`]) plus user preferences
//!    ([`inputs::UserInputs`]) to an itemized cooling requirement
//!    ([`load::ThermalCalculation`]).
//! 2. [`quote::generate_quote_options`] covers that requirement with
//!    catalog equipment bundles at up to three price/quality tiers.
//!
//! Both stages are pure, synchronous and deterministic; reference
//! constants and the equipment catalog are read-only values that can be
//! shared freely across concurrent calls.

pub mod catalog;
pub mod error;
pub mod inputs;
pub mod load;
pub mod parse;
pub mod quote;
pub mod refdata;
pub mod report;
pub mod room;

pub use catalog::{AcUnit, Catalog, PriceRange};
pub use error::{EngineError, EngineResult};
pub use inputs::{ClimateZone, EquipmentKind, HeatEquipment, OperatingHours, UserInputs};
pub use load::{calculate_thermal_load, BreakdownItem, ThermalCalculation};
pub use quote::{generate_quote_options, QuoteOption, QuoteTier};
pub use refdata::ReferenceData;
pub use room::{RoomAnalysis, RoomDimensions, RoomType, WindowAnalysis};
