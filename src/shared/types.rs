use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Structured guess produced by an extraction service for a free-text query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "conversion/")]
pub struct ParsedConversionRequest {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

/// Outcome of a successful conversion, with canonical unit names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "conversion/")]
pub struct ConversionResult {
    pub from_value: f64,
    pub from_unit: String,
    pub to_value: f64,
    pub to_unit: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "conversion/")]
pub struct NaturalLanguageQuery {
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "conversion/")]
pub struct ConvertUnitsRequest {
    pub amount: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "conversion/")]
pub struct ConvertUnitsResponse {
    pub result: f64,
    pub formatted_result: String,
    pub formula: String,
    pub from_unit: String,
    pub to_unit: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "conversion/")]
pub struct ParseUnitResponse {
    pub amount: f64,
    pub unit: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "conversion/")]
pub struct GetUnitsResponse {
    pub units: Vec<UnitDTO>,
}

// Rich Unit Data Transfer Object for frontend
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "conversion/")]
pub struct UnitDTO {
    pub id: String,       // Unit symbol (e.g., "m", "kg")
    pub label: String,    // Display name (e.g., "Meters", "Kilograms")
    pub category: String, // Category (e.g., "Length", "Weight")
    pub region: Option<String>,
    pub is_base: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "conversion/")]
pub struct CategoryDTO {
    pub name: String,
    pub base_unit: Option<String>,
    pub units: Vec<UnitDTO>,
}
