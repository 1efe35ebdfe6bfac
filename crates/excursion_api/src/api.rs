//! Request routing for the excursion catalog.
//!
//! # Responsibility
//! - Translate method + path + body into service calls.
//! - Map service results and errors to status codes and JSON envelopes.
//!
//! # Invariants
//! - `handle` never panics; every failure becomes a response envelope.
//! - Payloads are fully validated before any repository write.
//! - Log events carry method, route and status only.

use crate::payload::{parse_excursion_payload, PayloadError};
use crate::response::{ApiResponse, FieldIssue, STATUS_CREATED, STATUS_OK};
use chrono::{SecondsFormat, Utc};
use excursion_core::{
    core_version, CoreConfig, ExcursionId, ExcursionRepository, ExcursionService,
    InMemoryExcursionRepository, RepoError, RepoResult,
};
use log::debug;
use serde_json::json;

pub const SERVICE_NAME: &str = "excursion-catalog";
pub const COLLECTION_PATH: &str = "/api/excursions";
pub const HEALTH_PATH: &str = "/health";

/// Supported request methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl ApiMethod {
    /// Parses a case-insensitive method token.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Transport-neutral inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: ApiMethod,
    /// Request path; a query string, if present, is ignored.
    pub path: String,
    /// Raw JSON body, if any.
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: ApiMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

enum Route<'a> {
    Root,
    Health,
    Collection,
    Item(&'a str),
    Unknown,
}

/// Adapter over one excursion service instance.
pub struct ExcursionApi<R: ExcursionRepository = InMemoryExcursionRepository> {
    service: ExcursionService<R>,
}

impl ExcursionApi<InMemoryExcursionRepository> {
    /// Builds an in-memory catalog, seeding it when the config asks for it.
    pub fn from_config(config: &CoreConfig) -> RepoResult<Self> {
        let service = ExcursionService::new(InMemoryExcursionRepository::new());
        if config.seed_defaults {
            service.seed_defaults()?;
        }
        Ok(Self::new(service))
    }
}

impl<R: ExcursionRepository> ExcursionApi<R> {
    pub fn new(service: ExcursionService<R>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &ExcursionService<R> {
        &self.service
    }

    /// Handles one request to completion.
    pub fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let path = normalize_path(&request.path);
        let route = resolve_route(path);
        let response = match (route, request.method) {
            (Route::Root, ApiMethod::Get) => service_info(),
            (Route::Health, ApiMethod::Get) => health(),
            (Route::Collection, ApiMethod::Get) => self.list(),
            (Route::Collection, ApiMethod::Post) => self.create(request.body.as_deref()),
            (Route::Item(raw_id), method) => match parse_id(raw_id) {
                None => ApiResponse::excursion_not_found(raw_id),
                Some(id) => match method {
                    ApiMethod::Get => self.get(id),
                    ApiMethod::Put => self.update(id, request.body.as_deref()),
                    ApiMethod::Delete => self.delete(id),
                    ApiMethod::Post => {
                        ApiResponse::method_not_allowed(method.as_str(), path)
                    }
                },
            },
            (Route::Unknown, _) => ApiResponse::route_not_found(path),
            (_, method) => ApiResponse::method_not_allowed(method.as_str(), path),
        };

        debug!(
            "event=api_request module=api method={} route={} status={}",
            request.method.as_str(),
            route_label(path),
            response.status
        );
        response
    }

    fn list(&self) -> ApiResponse {
        match self.service.list_excursions() {
            Ok(items) => ApiResponse::serialized(STATUS_OK, &items),
            Err(err) => map_repo_error(err),
        }
    }

    fn get(&self, id: ExcursionId) -> ApiResponse {
        match self.service.get_excursion(id) {
            Ok(record) => ApiResponse::serialized(STATUS_OK, &record),
            Err(err) => map_repo_error(err),
        }
    }

    fn create(&self, body: Option<&str>) -> ApiResponse {
        let fields = match parse_excursion_payload(body) {
            Ok(fields) => fields,
            Err(err) => return map_payload_error(err),
        };
        match self.service.create_excursion(fields) {
            Ok(record) => ApiResponse::serialized(STATUS_CREATED, &record),
            Err(err) => map_repo_error(err),
        }
    }

    fn update(&self, id: ExcursionId, body: Option<&str>) -> ApiResponse {
        let fields = match parse_excursion_payload(body) {
            Ok(fields) => fields,
            Err(err) => return map_payload_error(err),
        };
        match self.service.update_excursion(id, fields) {
            Ok(record) => ApiResponse::serialized(STATUS_OK, &record),
            Err(err) => map_repo_error(err),
        }
    }

    fn delete(&self, id: ExcursionId) -> ApiResponse {
        match self.service.delete_excursion(id) {
            Ok(()) => ApiResponse::no_content(),
            Err(err) => map_repo_error(err),
        }
    }
}

fn map_repo_error(err: RepoError) -> ApiResponse {
    match err {
        RepoError::NotFound(id) => ApiResponse::excursion_not_found(id),
        RepoError::Validation(violation) => ApiResponse::validation_failed(&[FieldIssue {
            field: violation.field(),
            message: violation.to_string(),
        }]),
    }
}

fn map_payload_error(err: PayloadError) -> ApiResponse {
    match err {
        PayloadError::Malformed(message) => ApiResponse::invalid_json(message),
        PayloadError::Invalid(issues) => ApiResponse::validation_failed(&issues),
    }
}

fn service_info() -> ApiResponse {
    ApiResponse::json(
        STATUS_OK,
        json!({
            "service": SERVICE_NAME,
            "message": "Welcome to the Excursions API",
            "version": core_version(),
            "endpoints": {
                "health": HEALTH_PATH,
                "excursions": COLLECTION_PATH,
            },
            "excursion_endpoints": {
                "get_all_excursions": format!("GET {COLLECTION_PATH}"),
                "get_excursion_by_id": format!("GET {COLLECTION_PATH}/:id"),
                "create_excursion": format!("POST {COLLECTION_PATH}"),
                "update_excursion": format!("PUT {COLLECTION_PATH}/:id"),
                "delete_excursion": format!("DELETE {COLLECTION_PATH}/:id"),
            },
        }),
    )
}

fn health() -> ApiResponse {
    ApiResponse::json(
        STATUS_OK,
        json!({
            "status": "OK",
            "service": SERVICE_NAME,
            "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            "version": core_version(),
        }),
    )
}

fn normalize_path(raw: &str) -> &str {
    let without_query = raw.split('?').next().unwrap_or(raw);
    let trimmed = without_query.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

fn resolve_route(path: &str) -> Route<'_> {
    if path == "/" {
        return Route::Root;
    }
    if path == HEALTH_PATH {
        return Route::Health;
    }
    if path == COLLECTION_PATH {
        return Route::Collection;
    }
    match path.strip_prefix(COLLECTION_PATH).and_then(|rest| rest.strip_prefix('/')) {
        Some(raw_id) if !raw_id.is_empty() && !raw_id.contains('/') => Route::Item(raw_id),
        _ => Route::Unknown,
    }
}

fn parse_id(raw: &str) -> Option<ExcursionId> {
    if !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

fn route_label(path: &str) -> &'static str {
    match resolve_route(path) {
        Route::Root => "root",
        Route::Health => "health",
        Route::Collection => "collection",
        Route::Item(_) => "item",
        Route::Unknown => "unknown",
    }
}

