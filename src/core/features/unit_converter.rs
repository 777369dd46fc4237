//! Unit converter feature
//!
//! Registry of categories/units, the conversion engine and the command
//! functions the host application calls with serialized requests.

mod catalog;
pub mod engine;
pub mod format;
pub mod parsing;
pub mod registry;

pub use engine::{conversion_formula, convert};
pub use format::{format_number, round_significant, DISPLAY_SIGNIFICANT_DIGITS};
pub use registry::{Category, Region, Unit, UnitRegistry, TEMPERATURE};

use crate::shared::error::{AppError, AppResult};
use crate::shared::errors::ERR_NOT_CONVERTIBLE;
use crate::shared::settings::{AppSettings, UnitPreferences};
use crate::shared::types::{
    CategoryDTO, ConvertUnitsRequest, ConvertUnitsResponse, GetUnitsResponse, ParseUnitResponse,
};

// ============================================================================
// Commands - Public API
// ============================================================================

/// Get all available units from the registry, in registration order
pub async fn get_all_units_command() -> AppResult<GetUnitsResponse> {
    let units = UnitRegistry::global()
        .units()
        .map(|(category, unit)| unit.to_dto(&category.name))
        .collect();

    Ok(GetUnitsResponse { units })
}

pub async fn get_categories_command() -> AppResult<Vec<CategoryDTO>> {
    Ok(UnitRegistry::global()
        .list_categories()
        .iter()
        .map(Category::to_dto)
        .collect())
}

/// Convert units using the registry
pub async fn convert_units_command(request: ConvertUnitsRequest) -> AppResult<ConvertUnitsResponse> {
    convert_units_with(UnitRegistry::global(), request)
}

fn convert_units_with(registry: &UnitRegistry, request: ConvertUnitsRequest) -> AppResult<ConvertUnitsResponse> {
    let result = convert(
        registry,
        request.amount,
        &request.from_unit,
        &request.to_unit,
        &request.category,
    )
    .ok_or_else(|| {
        AppError::Calculation(format!(
            "{}: {} -> {} ({})",
            ERR_NOT_CONVERTIBLE, request.from_unit, request.to_unit, request.category
        ))
    })?;

    let formula = conversion_formula(registry, &request.from_unit, &request.to_unit, &request.category);

    Ok(ConvertUnitsResponse {
        result,
        formatted_result: format_number(result),
        formula,
        from_unit: request.from_unit,
        to_unit: request.to_unit,
        category: request.category,
    })
}

/// Parse text input and extract amount, unit, and category
pub async fn parse_text_command(text: String) -> AppResult<ParseUnitResponse> {
    parse_text_with(UnitRegistry::global(), &text)
}

fn parse_text_with(registry: &UnitRegistry, text: &str) -> AppResult<ParseUnitResponse> {
    let (amount, unit_text) = parsing::parse_quantity(text)
        .ok_or_else(|| AppError::Validation(format!("Could not parse unit from text: {}", text)))?;

    let (category, unit) = registry
        .find_unit(&unit_text)
        .ok_or_else(|| AppError::Validation(format!("Unknown unit: {}", unit_text)))?;

    Ok(ParseUnitResponse {
        amount,
        unit: unit.name.clone(),
        category: category.name.clone(),
    })
}

/// Unit preferences from the user's settings, defaults when unreadable
pub async fn get_unit_settings() -> AppResult<UnitPreferences> {
    let settings = AppSettings::load().await.unwrap_or_else(|e| {
        tracing::warn!("failed to load settings, using defaults: {}", e);
        AppSettings::default()
    });
    Ok(settings.preferences)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(amount: f64, from: &str, to: &str, category: &str) -> ConvertUnitsRequest {
        ConvertUnitsRequest {
            amount,
            from_unit: from.to_string(),
            to_unit: to.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_convert_units_response() {
        let registry = UnitRegistry::standard();
        let response = convert_units_with(&registry, request(10.0, "Kilometers", "Miles", "Length")).unwrap();

        assert!((response.result - 6.213_711_922).abs() < 1e-8);
        assert_eq!(response.formatted_result, "6.2137");
        assert_eq!(response.formula, "divide the length value by 1.60934");
        assert_eq!(response.category, "Length");
    }

    #[test]
    fn test_convert_units_not_convertible() {
        let registry = UnitRegistry::standard();
        let err = convert_units_with(&registry, request(1.0, "Meters", "Grams", "Length")).unwrap_err();
        assert!(matches!(err, AppError::Calculation(_)));
    }

    #[test]
    fn test_parse_text() {
        let registry = UnitRegistry::standard();

        let parsed = parse_text_with(&registry, "12 km").unwrap();
        assert_eq!(parsed.amount, 12.0);
        assert_eq!(parsed.unit, "Kilometers");
        assert_eq!(parsed.category, "Length");

        let parsed = parse_text_with(&registry, "98.6°F").unwrap();
        assert_eq!(parsed.unit, "Fahrenheit");
        assert_eq!(parsed.category, "Temperature");

        assert!(parse_text_with(&registry, "12 zorks").is_err());
        assert!(parse_text_with(&registry, "hello").is_err());
    }

    #[tokio::test]
    async fn test_get_all_units_in_registration_order() {
        let response = get_all_units_command().await.unwrap();
        assert_eq!(response.units.len(), UnitRegistry::global().units().count());
        assert_eq!(response.units[0].category, "Length");

        let meters = response.units.iter().find(|u| u.label == "Meters").unwrap();
        assert_eq!(meters.id, "m");
        assert!(meters.is_base);

        let gaj = response.units.iter().find(|u| u.label == "Gaj").unwrap();
        assert_eq!(gaj.region.as_deref(), Some("Indian"));
    }

    #[tokio::test]
    async fn test_get_categories() {
        let categories = get_categories_command().await.unwrap();
        let temperature = categories.iter().find(|c| c.name == "Temperature").unwrap();
        assert_eq!(temperature.base_unit.as_deref(), Some("Celsius"));
        assert_eq!(temperature.units.len(), 3);
    }
}
