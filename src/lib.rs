//! Sutradhaar unit conversion
//!
//! A registry of measurement categories and units, a pure conversion engine
//! over it, and an adapter that resolves free-text queries like
//! "350f to celsius" into a [`ConversionResult`].

pub mod core;
pub mod shared;

pub use crate::core::features::natural_language::{
    convert_natural_language_command, GeminiExtractor, NaturalLanguageConverter, RuleBasedExtractor,
    UnitExtractor,
};
pub use crate::core::features::unit_converter::{
    conversion_formula, convert, convert_units_command, format_number, get_all_units_command,
    get_categories_command, get_unit_settings, parse_text_command, round_significant, Category, Unit,
    UnitRegistry,
};
pub use crate::shared::error::{AppError, AppResult};
pub use crate::shared::errors::ConversionFailure;
pub use crate::shared::logging::init_tracing;
pub use crate::shared::settings::AppSettings;
pub use crate::shared::types::{ConversionResult, ParsedConversionRequest};
