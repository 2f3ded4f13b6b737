use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// Detail decoded from the body of a non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorReport {
    /// `{"error": "..."}`
    SingleMessage(String),
    /// `{"errors": {"field": ["...", ...]}}`
    FieldErrors(BTreeMap<String, Vec<String>>),
    /// Neither shape matched, or the body was not JSON.
    Undecodable,
}

#[derive(Deserialize)]
struct SingleErrorBody {
    error: Option<String>,
}

#[derive(Deserialize)]
struct FieldErrorsBody {
    errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ApiErrorReport {
    /// Trial-decode an error body: single message first, then field errors.
    /// A shape only counts when it carries a non-empty payload.
    pub fn from_body(body: &[u8]) -> Self {
        if let Ok(SingleErrorBody { error: Some(msg) }) = serde_json::from_slice::<SingleErrorBody>(body)
            && !msg.is_empty()
        {
            return Self::SingleMessage(msg);
        }
        if let Ok(FieldErrorsBody {
            errors: Some(fields),
        }) = serde_json::from_slice::<FieldErrorsBody>(body)
            && !fields.is_empty()
        {
            return Self::FieldErrors(fields);
        }
        Self::Undecodable
    }
}

impl fmt::Display for ApiErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleMessage(msg) => f.write_str(msg),
            Self::FieldErrors(fields) => {
                let parts: Vec<String> = fields
                    .iter()
                    .map(|(field, msgs)| format!("{field}: {}", msgs.join(", ")))
                    .collect();
                f.write_str(&parts.join("; "))
            }
            Self::Undecodable => f.write_str("no detail"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_message() {
        let report = ApiErrorReport::from_body(br#"{"error":"bad token"}"#);
        assert_eq!(report, ApiErrorReport::SingleMessage("bad token".to_string()));
    }

    #[test]
    fn field_errors_when_no_single_message() {
        let report = ApiErrorReport::from_body(br#"{"errors":{"token":["invalid"]}}"#);
        let ApiErrorReport::FieldErrors(fields) = &report else {
            unreachable!("expected field errors, got {report:?}");
        };
        assert_eq!(fields["token"], vec!["invalid".to_string()]);
        assert_eq!(report.to_string(), "token: invalid");
    }

    #[test]
    fn empty_single_message_falls_through_to_fields() {
        let report = ApiErrorReport::from_body(br#"{"error":"","errors":{"limit":["too large"]}}"#);
        assert!(matches!(report, ApiErrorReport::FieldErrors(_)));
    }

    #[test]
    fn field_errors_are_joined_in_key_order() {
        let report = ApiErrorReport::from_body(
            br#"{"errors":{"start":["required"],"end":["required","must be a date"]}}"#,
        );
        assert_eq!(
            report.to_string(),
            "end: required, must be a date; start: required"
        );
    }

    #[test]
    fn non_json_is_undecodable() {
        assert_eq!(
            ApiErrorReport::from_body(b"<html>502 Bad Gateway</html>"),
            ApiErrorReport::Undecodable
        );
    }

    #[test]
    fn json_without_either_shape_is_undecodable() {
        assert_eq!(
            ApiErrorReport::from_body(br#"{"status":"down"}"#),
            ApiErrorReport::Undecodable
        );
        assert_eq!(
            ApiErrorReport::from_body(br#"{"errors":{}}"#),
            ApiErrorReport::Undecodable
        );
    }
}
