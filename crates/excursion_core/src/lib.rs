//! Core domain logic for the excursion catalog.
//! This crate is the single source of truth for record identity and lifecycle
//! invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::excursion::{Excursion, ExcursionFields, ExcursionId, ExcursionValidationError};
pub use repo::clock::{Clock, ManualClock, SystemClock};
pub use repo::excursion_repo::{
    ExcursionRepository, InMemoryExcursionRepository, RepoError, RepoResult,
};
pub use service::excursion_service::{default_catalog, ExcursionService};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
