//! Transport-neutral request adapter for the excursion catalog.
//!
//! # Responsibility
//! - Expose the repository contract as method + path + JSON requests.
//! - Own payload validation and status-code mapping so that any server
//!   binding stays a thin pass-through.

pub mod api;
pub mod payload;
pub mod response;

pub use api::{ApiMethod, ApiRequest, ExcursionApi, COLLECTION_PATH, HEALTH_PATH, SERVICE_NAME};
pub use payload::{parse_excursion_payload, PayloadError};
pub use response::{ApiResponse, FieldIssue};
