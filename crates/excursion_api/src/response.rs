//! Response envelope and status mapping helpers.

use log::error;
use serde::Serialize;
use serde_json::{json, Value};

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;
pub const STATUS_NO_CONTENT: u16 = 204;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_METHOD_NOT_ALLOWED: u16 = 405;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Transport-neutral response: status code plus optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// `None` only for `204 No Content`.
    pub body: Option<Value>,
}

/// One rejected payload field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

impl ApiResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    /// Serializes `value` as the body, falling back to a 500 envelope.
    pub fn serialized<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(body) => Self::json(status, body),
            Err(err) => {
                error!("event=api_encode module=api status=error error={err}");
                Self::internal_error("Failed to encode response")
            }
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: STATUS_NO_CONTENT,
            body: None,
        }
    }

    pub fn error(status: u16, error: &str, message: impl Into<String>) -> Self {
        Self::json(
            status,
            json!({
                "error": error,
                "message": message.into(),
            }),
        )
    }

    /// Missing record; the message names the requested id.
    pub fn excursion_not_found(id: impl std::fmt::Display) -> Self {
        Self::error(
            STATUS_NOT_FOUND,
            "Not found",
            format!("Excursion with id {id} not found"),
        )
    }

    pub fn route_not_found(path: &str) -> Self {
        Self::error(
            STATUS_NOT_FOUND,
            "Not Found",
            format!("Route {path} not found"),
        )
    }

    pub fn method_not_allowed(method: &str, path: &str) -> Self {
        Self::error(
            STATUS_METHOD_NOT_ALLOWED,
            "Method not allowed",
            format!("Method {method} is not supported for {path}"),
        )
    }

    pub fn invalid_json(message: impl Into<String>) -> Self {
        Self::error(STATUS_BAD_REQUEST, "Invalid JSON", message)
    }

    pub fn validation_failed(details: &[FieldIssue]) -> Self {
        Self::json(
            STATUS_BAD_REQUEST,
            json!({
                "error": "Validation failed",
                "message": "Request validation failed",
                "details": details,
            }),
        )
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::error(STATUS_INTERNAL_ERROR, "Internal server error", message)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiResponse, FieldIssue, STATUS_BAD_REQUEST, STATUS_NOT_FOUND};

    #[test]
    fn not_found_names_missing_id() {
        let response = ApiResponse::excursion_not_found(42);
        assert_eq!(response.status, STATUS_NOT_FOUND);
        let body = response.body.unwrap();
        assert_eq!(body["error"], "Not found");
        assert_eq!(body["message"], "Excursion with id 42 not found");
    }

    #[test]
    fn validation_envelope_lists_details() {
        let response = ApiResponse::validation_failed(&[FieldIssue {
            field: "price",
            message: "price is required".to_string(),
        }]);
        assert_eq!(response.status, STATUS_BAD_REQUEST);
        assert!(!response.is_success());
        let body = response.body.unwrap();
        assert_eq!(body["error"], "Validation failed");
        assert_eq!(body["details"][0]["field"], "price");
    }

    #[test]
    fn no_content_has_empty_body() {
        let response = ApiResponse::no_content();
        assert!(response.is_success());
        assert!(response.body.is_none());
    }
}
