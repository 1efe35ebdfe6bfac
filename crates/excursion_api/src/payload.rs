//! Inbound excursion payload decoding and validation.
//!
//! # Invariants
//! - All six mutable fields are required; there is no partial payload.
//! - Every problem is reported, one issue per field, in field order.
//! - Domain rules come from `ExcursionFields::violations()`, not a local copy.

use crate::response::FieldIssue;
use excursion_core::ExcursionFields;
use serde_json::{Map, Value};

const FIELD_ORDER: [&str; 6] = [
    "name",
    "description",
    "location",
    "price",
    "duration",
    "max_participants",
];

/// Payload rejection reasons.
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadError {
    /// Body is absent, not JSON, or not a JSON object.
    Malformed(String),
    /// Body is an object but one or more fields are unusable.
    Invalid(Vec<FieldIssue>),
}

/// Decodes a request body into a complete field set.
pub fn parse_excursion_payload(body: Option<&str>) -> Result<ExcursionFields, PayloadError> {
    let raw = match body.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(PayloadError::Malformed("request body is required".to_string())),
    };
    let value: Value = serde_json::from_str(raw)
        .map_err(|err| PayloadError::Malformed(format!("request body is not valid JSON: {err}")))?;
    let object = value
        .as_object()
        .ok_or_else(|| PayloadError::Malformed("request body must be a JSON object".to_string()))?;

    decode_fields(object)
}

fn decode_fields(object: &Map<String, Value>) -> Result<ExcursionFields, PayloadError> {
    let mut issues = Vec::new();

    let name = read_text(object, "name", &mut issues);
    let description = read_text(object, "description", &mut issues);
    let location = read_text(object, "location", &mut issues);
    let price = read_price(object, &mut issues);
    let duration = read_count(object, "duration", &["duration"], &mut issues);
    let max_participants = read_count(
        object,
        "max_participants",
        &["max_participants", "maxParticipants"],
        &mut issues,
    );

    // Missing values are filled with neutral placeholders so domain rules can
    // still run for the fields that did decode.
    let fields = ExcursionFields {
        name: name.unwrap_or_default(),
        description: description.unwrap_or_default(),
        location: location.unwrap_or_default(),
        price: price.unwrap_or(0.0),
        duration: duration.unwrap_or(1),
        max_participants: max_participants.unwrap_or(1),
    };
    for violation in fields.violations() {
        if !issues.iter().any(|issue| issue.field == violation.field()) {
            issues.push(FieldIssue {
                field: violation.field(),
                message: violation.to_string(),
            });
        }
    }

    if issues.is_empty() {
        return Ok(fields);
    }
    issues.sort_by_key(|issue| field_rank(issue.field));
    Err(PayloadError::Invalid(issues))
}

fn read_text(
    object: &Map<String, Value>,
    field: &'static str,
    issues: &mut Vec<FieldIssue>,
) -> Option<String> {
    match object.get(field) {
        Some(Value::String(text)) => Some(text.clone()),
        Some(_) => {
            issues.push(issue(field, format!("{field} must be a string")));
            None
        }
        None => {
            issues.push(issue(field, format!("{field} is required")));
            None
        }
    }
}

fn read_price(object: &Map<String, Value>, issues: &mut Vec<FieldIssue>) -> Option<f64> {
    match object.get("price") {
        Some(Value::Number(number)) => match number.as_f64() {
            Some(value) => Some(value),
            None => {
                issues.push(issue("price", "price must be a finite number".to_string()));
                None
            }
        },
        Some(_) => {
            issues.push(issue("price", "price must be a number".to_string()));
            None
        }
        None => {
            issues.push(issue("price", "price is required".to_string()));
            None
        }
    }
}

fn read_count(
    object: &Map<String, Value>,
    field: &'static str,
    keys: &[&str],
    issues: &mut Vec<FieldIssue>,
) -> Option<u32> {
    let Some(value) = keys.iter().find_map(|key| object.get(*key)) else {
        issues.push(issue(field, format!("{field} is required")));
        return None;
    };

    match value.as_u64() {
        Some(count) => match u32::try_from(count) {
            Ok(count) => Some(count),
            Err(_) => {
                issues.push(issue(field, format!("{field} is too large")));
                None
            }
        },
        None if value.as_i64().is_some() => {
            issues.push(issue(field, format!("{field} must be greater than 0")));
            None
        }
        None => {
            issues.push(issue(field, format!("{field} must be a positive integer")));
            None
        }
    }
}

fn issue(field: &'static str, message: String) -> FieldIssue {
    FieldIssue { field, message }
}

fn field_rank(field: &str) -> usize {
    FIELD_ORDER
        .iter()
        .position(|candidate| *candidate == field)
        .unwrap_or(FIELD_ORDER.len())
}

#[cfg(test)]
mod tests {
    use super::{parse_excursion_payload, PayloadError};

    fn issue_fields(err: PayloadError) -> Vec<&'static str> {
        match err {
            PayloadError::Invalid(issues) => issues.into_iter().map(|i| i.field).collect(),
            other => panic!("expected field issues, got {other:?}"),
        }
    }

    #[test]
    fn accepts_camel_case_participants() {
        let fields = parse_excursion_payload(Some(
            r#"{"name":"Tour","description":"","location":"Old Town","price":12.5,"duration":2,"maxParticipants":9}"#,
        ))
        .unwrap();
        assert_eq!(fields.max_participants, 9);
        assert_eq!(fields.price, 12.5);
    }

    #[test]
    fn reports_every_invalid_field_in_order() {
        let err = parse_excursion_payload(Some(
            r#"{"name":"","description":"Test description","location":"","price":-10,"duration":0,"maxParticipants":0}"#,
        ))
        .unwrap_err();
        assert_eq!(
            issue_fields(err),
            vec!["name", "price", "duration", "max_participants"]
        );
    }

    #[test]
    fn missing_fields_are_required() {
        let err = parse_excursion_payload(Some(r#"{"name":"Only a name"}"#)).unwrap_err();
        assert_eq!(
            issue_fields(err),
            vec!["description", "location", "price", "duration", "max_participants"]
        );
    }

    #[test]
    fn negative_and_fractional_counts_are_rejected() {
        let err = parse_excursion_payload(Some(
            r#"{"name":"x","description":"","location":"","price":1,"duration":-3,"max_participants":2.5}"#,
        ))
        .unwrap_err();
        match err {
            PayloadError::Invalid(issues) => {
                assert_eq!(issues[0].message, "duration must be greater than 0");
                assert_eq!(issues[1].message, "max_participants must be a positive integer");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_bodies_are_rejected() {
        assert!(matches!(
            parse_excursion_payload(None),
            Err(PayloadError::Malformed(_))
        ));
        assert!(matches!(
            parse_excursion_payload(Some("{not json")),
            Err(PayloadError::Malformed(_))
        ));
        assert!(matches!(
            parse_excursion_payload(Some("[1,2,3]")),
            Err(PayloadError::Malformed(_))
        ));
    }
}
