//! Raw shape of the filings provider's JSON response.

use serde::{Deserialize, Serialize};

use crate::Error;

/// Literal token the provider sends in place of a missing value.
pub const NULL_TOKEN: &str = "null";

#[derive(Serialize, Deserialize)]
pub struct FilingsResponse {
    pub result: Option<FilingsResult>,
}

#[derive(Serialize, Deserialize)]
pub struct FilingsResult {
    pub rows: Option<Vec<FilingsRow>>,
}

/// One reported statement as a flat list of `{field, value}` pairs.
#[derive(Serialize, Deserialize)]
pub struct FilingsRow {
    pub values: Vec<FieldEntry>,
}

#[derive(Serialize, Deserialize)]
pub struct FieldEntry {
    pub field: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

impl FilingsResponse {
    /// Parses a response body, requiring the `result.rows` path to exist.
    pub fn parse(body: &str) -> Result<FilingsResponse, Error> {
        serde_json::from_str(body).map_err(|e| Error::MalformedResponse(e.to_string()))
    }

    pub fn into_rows(self) -> Result<Vec<FilingsRow>, Error> {
        self.result
            .ok_or_else(|| Error::MalformedResponse("missing `result` object".to_string()))?
            .rows
            .ok_or_else(|| Error::MalformedResponse("missing `result.rows` list".to_string()))
    }
}

impl FieldEntry {
    /// Returns the value as text, or `None` when it is absent, JSON `null`, or
    /// the provider's `"null"` token. Numbers and booleans are rendered as text;
    /// numbers keep the digits the provider sent.
    pub fn text(&self) -> Option<String> {
        match &self.value {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s == NULL_TOKEN => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(value: serde_json::Value) -> FieldEntry {
        FieldEntry {
            field: "netincome".to_string(),
            value,
        }
    }

    #[test]
    fn null_token_and_json_null_have_no_text() {
        assert_eq!(entry(serde_json::json!("null")).text(), None);
        assert_eq!(entry(serde_json::Value::Null).text(), None);
    }

    #[test]
    fn null_token_is_case_sensitive() {
        assert_eq!(entry(serde_json::json!("NULL")).text().as_deref(), Some("NULL"));
    }

    #[test]
    fn numbers_and_flags_become_text() {
        assert_eq!(entry(serde_json::json!(42)).text().as_deref(), Some("42"));
        assert_eq!(entry(serde_json::json!(12.5)).text().as_deref(), Some("12.5"));
        assert_eq!(entry(serde_json::json!(true)).text().as_deref(), Some("true"));
    }

    #[test]
    fn numbers_keep_source_digits() {
        let parsed: FieldEntry =
            serde_json::from_str(r#"{"field": "totalrevenue", "value": 12345678901234.567}"#)
                .unwrap();
        assert_eq!(parsed.text().as_deref(), Some("12345678901234.567"));
    }

    #[test]
    fn missing_value_defaults_to_null() {
        let parsed: FieldEntry = serde_json::from_str(r#"{"field": "ebit"}"#).unwrap();
        assert_eq!(parsed.text(), None);
    }

    #[test]
    fn missing_rows_is_malformed() {
        let resp = FilingsResponse::parse(r#"{"result": {"totalrows": 0}}"#).unwrap();
        let err = resp.into_rows().err().unwrap();
        assert!(err.to_string().contains("result.rows"));
    }

    #[test]
    fn missing_result_is_malformed() {
        let resp = FilingsResponse::parse(r#"{"errors": []}"#).unwrap();
        assert!(matches!(resp.into_rows(), Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert!(matches!(
            FilingsResponse::parse("<html>Service Unavailable</html>"),
            Err(Error::MalformedResponse(_))
        ));
    }
}
