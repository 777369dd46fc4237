use std::sync::Arc;

use async_trait::async_trait;

use crate::core::features::unit_converter::parsing;
use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::ExtractionSettings;
use crate::shared::types::ParsedConversionRequest;

use super::gemini::GeminiExtractor;

/// Turns a free-text query into a structured `{value, fromUnit, toUnit}` guess.
///
/// `catalog` is the rendered `"<unit name> (<symbol>)"` list of every unit the
/// registry knows. Implementations are best-effort; any error is treated by
/// the caller as "no answer this time".
#[async_trait]
pub trait UnitExtractor: Send + Sync {
    async fn extract(&self, query: &str, catalog: &[String]) -> AppResult<ParsedConversionRequest>;
}

/// Offline extractor for "<number> <unit> to <unit>" phrasing
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedExtractor;

#[async_trait]
impl UnitExtractor for RuleBasedExtractor {
    async fn extract(&self, query: &str, _catalog: &[String]) -> AppResult<ParsedConversionRequest> {
        parsing::parse_conversion(query)
            .ok_or_else(|| AppError::Validation(format!("Could not parse conversion from text: {}", query)))
    }
}

/// Pick the extractor configured in settings.
///
/// Falls back to [`RuleBasedExtractor`] when the provider is not "gemini" or
/// no API key is available.
pub fn extractor_from_settings(settings: &ExtractionSettings) -> Arc<dyn UnitExtractor> {
    if settings.provider.eq_ignore_ascii_case("gemini") {
        match GeminiExtractor::from_settings(settings) {
            Ok(extractor) => return Arc::new(extractor),
            Err(e) => tracing::info!("gemini extractor unavailable, using rules: {}", e),
        }
    }

    Arc::new(RuleBasedExtractor)
}
