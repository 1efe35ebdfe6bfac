//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `excursion_core` and `excursion_api` linkage end to end.
//! - Run a fixed request script and print one line per response.

use excursion_api::{ApiMethod, ApiRequest, ExcursionApi};
use excursion_core::{init_logging_from_config, CoreConfig};
use log::info;
use std::process::ExitCode;

const SMOKE_PAYLOAD: &str = r#"{"name":"Beach Walking Tour","description":"A relaxing walk along beautiful beaches","location":"Coastal Area","price":35.0,"duration":2,"max_participants":15}"#;

fn main() -> ExitCode {
    println!("excursion_core ping={}", excursion_core::ping());
    println!("excursion_core version={}", excursion_core::core_version());

    let config = match CoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging_from_config(&config) {
        eprintln!("logging error: {err}");
        return ExitCode::FAILURE;
    }

    let api = match ExcursionApi::from_config(&config) {
        Ok(api) => api,
        Err(err) => {
            eprintln!("catalog bootstrap error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let script = smoke_script();
    for request in &script {
        let response = api.handle(request);
        let body = response
            .body
            .as_ref()
            .map(|value| value.to_string())
            .unwrap_or_default();
        println!(
            "{} {} -> {} {}",
            request.method.as_str(),
            request.path,
            response.status,
            body
        );
    }
    info!(
        "event=cli_smoke module=cli status=ok requests={}",
        script.len()
    );

    ExitCode::SUCCESS
}

fn smoke_script() -> Vec<ApiRequest> {
    vec![
        ApiRequest::new(ApiMethod::Get, "/health"),
        ApiRequest::new(ApiMethod::Get, "/api/excursions"),
        ApiRequest::new(ApiMethod::Post, "/api/excursions").with_body(SMOKE_PAYLOAD),
        ApiRequest::new(ApiMethod::Get, "/api/excursions/1"),
        ApiRequest::new(ApiMethod::Delete, "/api/excursions/1"),
        ApiRequest::new(ApiMethod::Get, "/api/excursions/1"),
    ]
}
