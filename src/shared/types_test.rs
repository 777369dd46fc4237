//! Test to trigger ts-rs bindings export
//! Run with: cargo test export_bindings

#[cfg(test)]
mod tests {
    use crate::shared::errors::ConversionFailure;
    use crate::shared::types::*;
    use ts_rs::TS;

    #[test]
    fn export_bindings() {
        // Bindings are written under bindings/conversion/
        ConversionResult::export().expect("Failed to export ConversionResult");
        ParsedConversionRequest::export().expect("Failed to export ParsedConversionRequest");
        ConversionFailure::export().expect("Failed to export ConversionFailure");
    }

    #[test]
    fn conversion_result_uses_camel_case() {
        let result = ConversionResult {
            from_value: 10.0,
            from_unit: "Kilometers".to_string(),
            to_value: 6.2137,
            to_unit: "Miles".to_string(),
            category: "Length".to_string(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["fromValue"], 10.0);
        assert_eq!(json["fromUnit"], "Kilometers");
        assert_eq!(json["toValue"], 6.2137);
        assert_eq!(json["toUnit"], "Miles");
        assert_eq!(json["category"], "Length");
    }

    #[test]
    fn parsed_request_reads_extraction_json() {
        let parsed: ParsedConversionRequest =
            serde_json::from_str(r#"{"value": 10, "fromUnit": "kilometers", "toUnit": "miles"}"#).unwrap();
        assert_eq!(parsed.value, 10.0);
        assert_eq!(parsed.from_unit, "kilometers");
        assert_eq!(parsed.to_unit, "miles");
    }

    #[test]
    fn failure_serializes_with_type_tag() {
        let json = serde_json::to_value(ConversionFailure::CrossCategory).unwrap();
        assert_eq!(json["type"], "CrossCategory");
    }
}
