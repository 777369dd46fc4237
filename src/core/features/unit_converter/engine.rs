//! Conversion engine
//!
//! Pure functions over a [`UnitRegistry`]. Linear categories go through the
//! base-unit factor table; Temperature uses closed-form affine formulas
//! because its scales have different zero points.

use super::format::round_significant;
use super::registry::{UnitRegistry, TEMPERATURE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "celsius" => Some(Self::Celsius),
            "fahrenheit" => Some(Self::Fahrenheit),
            "kelvin" => Some(Self::Kelvin),
            _ => None,
        }
    }
}

/// Convert `value` from `from_unit` to `to_unit` within `category`.
///
/// Returns `None` when the units cannot be related: unknown names, units
/// outside `category`, or an unsupported temperature pair.
pub fn convert(
    registry: &UnitRegistry,
    value: f64,
    from_unit: &str,
    to_unit: &str,
    category: &str,
) -> Option<f64> {
    // Same unit, no conversion needed
    if from_unit == to_unit {
        return Some(value);
    }

    if category.eq_ignore_ascii_case(TEMPERATURE) {
        return convert_temperature(value, from_unit, to_unit);
    }

    let from_factor = registry.factor_in(category, from_unit)?;
    let to_factor = registry.factor_in(category, to_unit)?;
    let result = value * from_factor / to_factor;

    tracing::trace!(value, from_unit, to_unit, category, result, "converted");
    Some(result)
}

fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> Option<f64> {
    use TemperatureScale::*;

    let from = TemperatureScale::from_name(from_unit)?;
    let to = TemperatureScale::from_name(to_unit)?;

    Some(match (from, to) {
        (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Celsius, Kelvin) => value + 273.15,
        (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Fahrenheit, Kelvin) => (value - 32.0) * 5.0 / 9.0 + 273.15,
        (Kelvin, Celsius) => value - 273.15,
        (Kelvin, Fahrenheit) => (value - 273.15) * 9.0 / 5.0 + 32.0,
        // Same scale under different spelling
        _ => value,
    })
}

/// Human-readable description of the math `convert` performs.
///
/// Display only; never used for computation.
pub fn conversion_formula(
    registry: &UnitRegistry,
    from_unit: &str,
    to_unit: &str,
    category: &str,
) -> String {
    if from_unit == to_unit {
        return format!("1 {} = 1 {}", from_unit, to_unit);
    }

    if category.eq_ignore_ascii_case(TEMPERATURE) {
        return temperature_formula(from_unit, to_unit)
            .unwrap_or(FORMULA_NOT_AVAILABLE)
            .to_string();
    }

    let (Some(from_factor), Some(to_factor)) = (
        registry.factor_in(category, from_unit),
        registry.factor_in(category, to_unit),
    ) else {
        return FORMULA_NOT_AVAILABLE.to_string();
    };

    let ratio = from_factor / to_factor;
    let quantity = category.to_lowercase();
    if ratio >= 1.0 {
        format!("multiply the {} value by {}", quantity, round_significant(ratio, 6))
    } else {
        format!("divide the {} value by {}", quantity, round_significant(1.0 / ratio, 6))
    }
}

const FORMULA_NOT_AVAILABLE: &str = "Formula not available";

fn temperature_formula(from_unit: &str, to_unit: &str) -> Option<&'static str> {
    use TemperatureScale::*;

    let from = TemperatureScale::from_name(from_unit)?;
    let to = TemperatureScale::from_name(to_unit)?;

    match (from, to) {
        (Celsius, Fahrenheit) => Some("°F = (°C × 9/5) + 32"),
        (Celsius, Kelvin) => Some("K = °C + 273.15"),
        (Fahrenheit, Celsius) => Some("°C = (°F - 32) × 5/9"),
        (Fahrenheit, Kelvin) => Some("K = (°F - 32) × 5/9 + 273.15"),
        (Kelvin, Celsius) => Some("°C = K - 273.15"),
        (Kelvin, Fahrenheit) => Some("°F = (K - 273.15) × 9/5 + 32"),
        _ => None,
    }
}
