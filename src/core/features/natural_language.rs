//! Natural-language conversion
//!
//! Turns free text such as "10km to miles" into a [`ConversionResult`].
//! Extraction of `{value, fromUnit, toUnit}` is delegated to a
//! [`UnitExtractor`]; everything after that is resolved locally against the
//! [`UnitRegistry`]. No failure is ever propagated: callers get either a
//! result or a [`ConversionFailure`] reason.

pub mod extractor;
pub mod gemini;

pub use extractor::{extractor_from_settings, RuleBasedExtractor, UnitExtractor};
pub use gemini::GeminiExtractor;

use std::sync::Arc;

use crate::core::features::unit_converter::{
    convert, round_significant, Category, Unit, UnitRegistry, DISPLAY_SIGNIFICANT_DIGITS,
};
use crate::shared::errors::ConversionFailure;
use crate::shared::settings::AppSettings;
use crate::shared::types::{ConversionResult, NaturalLanguageQuery};

/// Queries with fewer tokens are too ambiguous to send for extraction
const MIN_QUERY_TOKENS: usize = 3;

pub struct NaturalLanguageConverter {
    registry: Arc<UnitRegistry>,
    extractor: Arc<dyn UnitExtractor>,
}

impl NaturalLanguageConverter {
    pub fn new(registry: Arc<UnitRegistry>, extractor: Arc<dyn UnitExtractor>) -> Self {
        Self { registry, extractor }
    }

    pub fn registry(&self) -> &UnitRegistry {
        &self.registry
    }

    /// `None` on every failure path; see [`Self::try_convert`] for the reason.
    pub async fn convert_from_natural_language(&self, query: &str) -> Option<ConversionResult> {
        self.try_convert(query).await.ok()
    }

    pub async fn try_convert(&self, query: &str) -> Result<ConversionResult, ConversionFailure> {
        if query.split_whitespace().count() < MIN_QUERY_TOKENS {
            tracing::debug!(query, "query too short for extraction");
            return Err(ConversionFailure::AmbiguousQuery);
        }

        let catalog = self.registry.catalog();
        let parsed = self.extractor.extract(query, &catalog).await.map_err(|e| {
            tracing::warn!(query, "extraction failed: {}", e);
            ConversionFailure::ExtractionFailed
        })?;

        if !parsed.value.is_finite() {
            tracing::debug!(query, value = parsed.value, "extracted value is not finite");
            return Err(ConversionFailure::ExtractionFailed);
        }

        let (category, from, to) = self.resolve(&parsed.from_unit, &parsed.to_unit)?;

        let converted = convert(&self.registry, parsed.value, &from.name, &to.name, &category.name)
            .ok_or_else(|| {
                tracing::debug!(from = %from.name, to = %to.name, "engine could not relate units");
                ConversionFailure::NotConvertible
            })?;

        let result = ConversionResult {
            from_value: parsed.value,
            from_unit: from.name.clone(),
            to_value: round_significant(converted, DISPLAY_SIGNIFICANT_DIGITS),
            to_unit: to.name.clone(),
            category: category.name.clone(),
        };

        tracing::info!(
            "{} {} -> {} {} ({})",
            result.from_value,
            result.from_unit,
            result.to_value,
            result.to_unit,
            result.category
        );

        Ok(result)
    }

    /// Resolve both unit texts to a single category.
    ///
    /// The second unit is looked up inside the first unit's category before
    /// the global first-match rule applies, and the reverse is tried when
    /// the global matches disagree. A symbol shared by two categories
    /// therefore resolves to the category that makes the pair convertible.
    fn resolve(
        &self,
        from_text: &str,
        to_text: &str,
    ) -> Result<(&Category, &Unit, &Unit), ConversionFailure> {
        let unresolved = |text: &str| {
            tracing::debug!(unit = text, "unit not found in registry");
            ConversionFailure::UnresolvedUnit
        };

        let (from_category, from) = self
            .registry
            .find_unit(from_text)
            .ok_or_else(|| unresolved(from_text))?;

        if let Some(to) = from_category.find(to_text) {
            return Ok((from_category, from, to));
        }

        let (to_category, to) = self
            .registry
            .find_unit(to_text)
            .ok_or_else(|| unresolved(to_text))?;

        if let Some(from) = to_category.find(from_text) {
            return Ok((to_category, from, to));
        }

        tracing::debug!(
            from = %from.name,
            from_category = %from_category.name,
            to = %to.name,
            to_category = %to_category.name,
            "units belong to different categories"
        );
        Err(ConversionFailure::CrossCategory)
    }
}

/// Convert a query with the global registry and the configured extractor
pub async fn convert_natural_language_command(request: NaturalLanguageQuery) -> Option<ConversionResult> {
    let settings = AppSettings::load().await.unwrap_or_else(|e| {
        tracing::warn!("failed to load settings, using defaults: {}", e);
        AppSettings::default()
    });

    let converter = NaturalLanguageConverter::new(
        Arc::clone(UnitRegistry::global()),
        extractor_from_settings(&settings.extraction),
    );

    converter.convert_from_natural_language(&request.query).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::shared::error::{AppError, AppResult};
    use crate::shared::types::ParsedConversionRequest;

    /// Returns a canned extraction and counts calls
    struct StubExtractor {
        response: Option<ParsedConversionRequest>,
        calls: AtomicUsize,
    }

    impl StubExtractor {
        fn returning(value: f64, from: &str, to: &str) -> Arc<Self> {
            Arc::new(Self {
                response: Some(ParsedConversionRequest {
                    value,
                    from_unit: from.to_string(),
                    to_unit: to.to_string(),
                }),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                response: None,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl UnitExtractor for StubExtractor {
        async fn extract(&self, _query: &str, catalog: &[String]) -> AppResult<ParsedConversionRequest> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert!(!catalog.is_empty());
            self.response
                .clone()
                .ok_or_else(|| AppError::Network("service unavailable".to_string()))
        }
    }

    fn converter(extractor: Arc<StubExtractor>) -> NaturalLanguageConverter {
        NaturalLanguageConverter::new(Arc::new(UnitRegistry::standard()), extractor)
    }

    #[tokio::test]
    async fn test_short_query_skips_extraction() {
        let stub = StubExtractor::returning(10.0, "km", "mi");
        let nl = converter(stub.clone());

        assert_eq!(nl.try_convert("10km").await, Err(ConversionFailure::AmbiguousQuery));
        assert_eq!(nl.try_convert("10 km").await, Err(ConversionFailure::AmbiguousQuery));
        assert!(nl.convert_from_natural_language("   ").await.is_none());
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_kilometers_to_miles() {
        let nl = converter(StubExtractor::returning(10.0, "kilometers", "miles"));

        let result = nl.convert_from_natural_language("10 km to miles").await.unwrap();
        assert_eq!(
            result,
            ConversionResult {
                from_value: 10.0,
                from_unit: "Kilometers".to_string(),
                to_value: 6.2137,
                to_unit: "Miles".to_string(),
                category: "Length".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_fahrenheit_to_celsius() {
        let nl = converter(StubExtractor::returning(350.0, "f", "celsius"));

        let result = nl.try_convert("350f to celsius").await.unwrap();
        assert_eq!(result.from_unit, "Fahrenheit");
        assert_eq!(result.to_unit, "Celsius");
        assert_eq!(result.category, "Temperature");
        assert_eq!(result.to_value, 176.67);
    }

    #[tokio::test]
    async fn test_extraction_failure() {
        let nl = converter(StubExtractor::failing());
        assert_eq!(
            nl.try_convert("ten kilometres in miles").await,
            Err(ConversionFailure::ExtractionFailed)
        );
    }

    #[tokio::test]
    async fn test_non_finite_extraction() {
        let nl = converter(StubExtractor::returning(f64::NAN, "km", "mi"));
        assert_eq!(
            nl.try_convert("lots of km to mi").await,
            Err(ConversionFailure::ExtractionFailed)
        );
    }

    #[tokio::test]
    async fn test_unresolved_unit() {
        let nl = converter(StubExtractor::returning(3.0, "cubits", "meters"));
        assert_eq!(nl.try_convert("3 cubits to meters").await, Err(ConversionFailure::UnresolvedUnit));

        let nl = converter(StubExtractor::returning(3.0, "meters", "cubits"));
        assert!(nl.convert_from_natural_language("3 meters to cubits").await.is_none());
    }

    #[tokio::test]
    async fn test_cross_category() {
        let nl = converter(StubExtractor::returning(1.0, "meters", "kilograms"));
        assert_eq!(nl.try_convert("1 meter to kilograms").await, Err(ConversionFailure::CrossCategory));
    }

    #[tokio::test]
    async fn test_symbol_collision_resolved_by_pair() {
        let registry = UnitRegistry::new(vec![
            Category::new(
                "Angle",
                vec![
                    Unit::new("Degrees", "deg", 1.0).base(),
                    Unit::new("Minutes of Arc", "min", 1.0 / 60.0),
                ],
            ),
            Category::new(
                "Time",
                vec![
                    Unit::new("Seconds", "s", 1.0).base(),
                    Unit::new("Minutes", "min", 60.0),
                ],
            ),
        ])
        .unwrap();

        let nl = NaturalLanguageConverter::new(
            Arc::new(registry),
            StubExtractor::returning(2.0, "min", "seconds"),
        );

        let result = nl.try_convert("2 min to seconds").await.unwrap();
        assert_eq!(result.category, "Time");
        assert_eq!(result.from_unit, "Minutes");
        assert_eq!(result.to_value, 120.0);
    }

    #[tokio::test]
    async fn test_identity_conversion() {
        let nl = converter(StubExtractor::returning(42.0, "kg", "kilograms"));
        let result = nl.try_convert("42 kg in kilograms").await.unwrap();
        assert_eq!(result.to_value, 42.0);
        assert_eq!(result.category, "Weight");
    }

    #[tokio::test]
    async fn test_rule_based_end_to_end() {
        let nl = NaturalLanguageConverter::new(Arc::new(UnitRegistry::standard()), Arc::new(RuleBasedExtractor));

        let result = nl.try_convert("5 kg to lb").await.unwrap();
        assert_eq!(result.from_unit, "Kilograms");
        assert_eq!(result.to_unit, "Pounds");
        assert_eq!(result.to_value, 11.023);

        let result = nl.try_convert("100 usd to inr").await.unwrap();
        assert_eq!(result.category, "Currency");
        assert_eq!(result.to_value, 8333.3);

        assert_eq!(
            nl.try_convert("what is the time").await,
            Err(ConversionFailure::ExtractionFailed)
        );
    }
}
