//! Measurement records and the measurement-document wire format.

use serde::{Deserialize, Serialize};

/// One reading produced by the sensor subsystem.
///
/// All three fields are plain text; the renderer performs no numeric
/// interpretation. Fields absent from the wire document default to empty
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// Name of the measured parameter (e.g. "Temperature").
    #[serde(default)]
    pub parameter: String,
    /// Unit of the value (e.g. "C").
    #[serde(default)]
    pub unit: String,
    /// The reading itself, already formatted as text.
    #[serde(default)]
    pub value: String,
}

/// Wire shape of a measurement document: `{"measurements": [...]}`.
#[derive(Debug, Deserialize)]
struct MeasurementDocument {
    #[serde(default)]
    measurements: Vec<Measurement>,
}

/// Parse a measurement document into its ordered records.
///
/// A document without a `measurements` key holds zero records, which is
/// valid. Input order is preserved.
pub fn parse_measurements(payload: &str) -> Result<Vec<Measurement>, serde_json::Error> {
    let document: MeasurementDocument = serde_json::from_str(payload)?;
    Ok(document.measurements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::record;

    #[test]
    fn parse_document_with_records() {
        let payload = r#"{"measurements":[
            {"parameter":"Temp","unit":"C","value":"21.5"},
            {"parameter":"Humidity","unit":"%","value":"40"}
        ]}"#;
        let records = parse_measurements(payload).unwrap();
        assert_eq!(
            records,
            vec![record("Temp", "C", "21.5"), record("Humidity", "%", "40")]
        );
    }

    #[test]
    fn parse_empty_list() {
        assert!(parse_measurements(r#"{"measurements":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn parse_missing_measurements_key_yields_no_records() {
        assert!(parse_measurements("{}").unwrap().is_empty());
    }

    #[test]
    fn parse_missing_record_fields_default_to_empty() {
        let records = parse_measurements(r#"{"measurements":[{"parameter":"Temp"}]}"#).unwrap();
        assert_eq!(records, vec![record("Temp", "", "")]);
    }

    #[test]
    fn parse_malformed_document_fails() {
        assert!(parse_measurements("not-json").is_err());
        assert!(parse_measurements("").is_err());
    }
}
