use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::ExtractionSettings;
use crate::shared::types::ParsedConversionRequest;

use super::extractor::UnitExtractor;

// -- Strict Serde Structs for the generateContent response --

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Debug, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

/// Extraction through Google's Generative Language API
pub struct GeminiExtractor {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiExtractor {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> AppResult<Self> {
        let http = Client::builder()
            .user_agent("sutradhaar/unit-extractor")
            .build()
            .map_err(|e| AppError::Network(e.to_string()))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            model: model.into(),
            endpoint: endpoint.into(),
        })
    }

    pub fn from_settings(settings: &ExtractionSettings) -> AppResult<Self> {
        let api_key = settings
            .resolve_api_key()
            .ok_or_else(|| AppError::Validation("Missing API Key".to_string()))?;
        Self::new(api_key, settings.model.clone(), settings.endpoint.clone())
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            urlencoding::encode(&self.api_key)
        )
    }
}

#[async_trait]
impl UnitExtractor for GeminiExtractor {
    async fn extract(&self, query: &str, catalog: &[String]) -> AppResult<ParsedConversionRequest> {
        let body = json!({
            "contents": [{
                "parts": [{ "text": build_prompt(query, catalog) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "temperature": 0
            }
        });

        let response = self.http.post(self.url()).json(&body).send().await.map_err(|e| {
            tracing::warn!("Gemini API request failed: {}", e);
            AppError::Network(format!("Gemini API request failed: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(AppError::Network(format!("Gemini API error: {}", response.status())));
        }

        let payload = response.json::<GenerateContentResponse>().await.map_err(|e| {
            AppError::Validation(format!("Failed to parse Gemini response: {}", e))
        })?;

        parse_generate_response(&payload)
    }
}

/// Prompt sent with every query: the raw text and the full unit catalog.
pub fn build_prompt(query: &str, catalog: &[String]) -> String {
    format!(
        "You convert measurement requests into JSON.\n\
         Extract the numeric value, the unit to convert from and the unit to convert to \
         from the user's request. Use unit names from this list when possible:\n\
         {}\n\n\
         Respond with only a JSON object of the form \
         {{\"value\": number, \"fromUnit\": string, \"toUnit\": string}}.\n\n\
         Request: {}",
        catalog.join(", "),
        query
    )
}

pub fn parse_generate_response(payload: &GenerateContentResponse) -> AppResult<ParsedConversionRequest> {
    let text = payload
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .and_then(|content| content.parts.iter().find_map(|p| p.text.as_deref()))
        .ok_or_else(|| AppError::Validation("missing candidate text".to_string()))?;

    parse_extraction_text(text)
}

/// Parse the model's JSON answer, tolerating Markdown code fences.
pub fn parse_extraction_text(text: &str) -> AppResult<ParsedConversionRequest> {
    let trimmed = text.trim();
    let unfenced = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();

    let parsed: ParsedConversionRequest = serde_json::from_str(unfenced)?;
    if !parsed.value.is_finite() {
        return Err(AppError::Validation(format!("Extracted value is not finite: {}", parsed.value)));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_query_and_catalog() {
        let catalog = vec!["Kilometers (km)".to_string(), "Miles (mi)".to_string()];
        let prompt = build_prompt("10 km to miles", &catalog);
        assert!(prompt.contains("Request: 10 km to miles"));
        assert!(prompt.contains("Kilometers (km), Miles (mi)"));
        assert!(prompt.contains("\"fromUnit\""));
    }

    #[test]
    fn test_parse_generate_response() {
        let payload: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {
                        "parts": [{"text": "{\"value\": 10, \"fromUnit\": \"kilometers\", \"toUnit\": \"miles\"}"}],
                        "role": "model"
                    },
                    "finishReason": "STOP"
                }]
            }"#,
        )
        .unwrap();

        let parsed = parse_generate_response(&payload).unwrap();
        assert_eq!(parsed.value, 10.0);
        assert_eq!(parsed.from_unit, "kilometers");
        assert_eq!(parsed.to_unit, "miles");
    }

    #[test]
    fn test_parse_empty_candidates() {
        let payload: GenerateContentResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(parse_generate_response(&payload).is_err());

        let payload: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parse_generate_response(&payload).is_err());
    }

    #[test]
    fn test_parse_fenced_text() {
        let parsed = parse_extraction_text(
            "```json\n{\"value\": 350, \"fromUnit\": \"Fahrenheit\", \"toUnit\": \"Celsius\"}\n```",
        )
        .unwrap();
        assert_eq!(parsed.value, 350.0);
        assert_eq!(parsed.from_unit, "Fahrenheit");
    }

    #[test]
    fn test_parse_malformed_text() {
        assert!(parse_extraction_text("I think you mean miles").is_err());
        assert!(parse_extraction_text(r#"{"value": "ten", "fromUnit": "km", "toUnit": "mi"}"#).is_err());
        assert!(parse_extraction_text(r#"{"value": 10, "fromUnit": "km"}"#).is_err());
    }

    #[test]
    fn test_url_encodes_key() {
        let extractor = GeminiExtractor::new("a b", "gemini-1.5-flash", "https://example.test/v1beta/").unwrap();
        assert_eq!(
            extractor.url(),
            "https://example.test/v1beta/models/gemini-1.5-flash:generateContent?key=a%20b"
        );
    }
}
