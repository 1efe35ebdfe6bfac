//! Excursion use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for adapters.
//! - Delegate storage and identity allocation to repository implementations.
//! - Emit one metadata-only diagnostic event per operation.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - Log events carry ids and counts only, never record text.

use crate::model::excursion::{Excursion, ExcursionFields, ExcursionId};
use crate::repo::excursion_repo::{ExcursionRepository, RepoError, RepoResult};
use log::{info, warn};

/// Use-case service wrapper for excursion CRUD operations.
pub struct ExcursionService<R: ExcursionRepository> {
    repo: R,
}

impl<R: ExcursionRepository> ExcursionService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the wrapped repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Lists all excursions in creation order.
    pub fn list_excursions(&self) -> RepoResult<Vec<Excursion>> {
        let items = self.repo.list()?;
        info!(
            "event=excursion_list module=service status=ok count={}",
            items.len()
        );
        Ok(items)
    }

    /// Gets one excursion by ID.
    pub fn get_excursion(&self, id: ExcursionId) -> RepoResult<Excursion> {
        log_outcome("excursion_get", Some(id), self.repo.get(id))
    }

    /// Creates an excursion and returns the stored record.
    pub fn create_excursion(&self, fields: ExcursionFields) -> RepoResult<Excursion> {
        let result = self.repo.create(fields);
        let id = result.as_ref().ok().map(|record| record.id);
        log_outcome("excursion_create", id, result)
    }

    /// Replaces every mutable field of an existing excursion.
    ///
    /// Returns repository-level not-found or validation errors unchanged.
    pub fn update_excursion(
        &self,
        id: ExcursionId,
        fields: ExcursionFields,
    ) -> RepoResult<Excursion> {
        log_outcome("excursion_update", Some(id), self.repo.update(id, fields))
    }

    /// Permanently removes an excursion.
    pub fn delete_excursion(&self, id: ExcursionId) -> RepoResult<()> {
        log_outcome("excursion_delete", Some(id), self.repo.delete(id))
    }

    /// Creates the default catalog entries through the regular create path.
    ///
    /// Seeded records consume identities like any other creation.
    pub fn seed_defaults(&self) -> RepoResult<Vec<Excursion>> {
        let mut created = Vec::new();
        for fields in default_catalog() {
            created.push(self.repo.create(fields)?);
        }
        info!(
            "event=excursion_seed module=service status=ok count={}",
            created.len()
        );
        Ok(created)
    }
}

/// Returns the built-in starter catalog.
pub fn default_catalog() -> Vec<ExcursionFields> {
    vec![
        ExcursionFields {
            name: "Mountain Hiking Adventure".to_string(),
            description:
                "A thrilling hike through the scenic mountain trails with breathtaking views"
                    .to_string(),
            location: "Rocky Mountains".to_string(),
            price: 75.00,
            duration: 6,
            max_participants: 12,
        },
        ExcursionFields {
            name: "City Food Tour".to_string(),
            description: "Explore the best local cuisine and hidden food gems in the city"
                .to_string(),
            location: "Downtown".to_string(),
            price: 45.00,
            duration: 3,
            max_participants: 8,
        },
    ]
}

fn log_outcome<T>(
    event: &'static str,
    id: Option<ExcursionId>,
    result: RepoResult<T>,
) -> RepoResult<T> {
    let id_label = id.map_or_else(|| "-".to_string(), |value| value.to_string());
    match &result {
        Ok(_) => info!("event={event} module=service status=ok id={id_label}"),
        Err(RepoError::NotFound(_)) => {
            warn!("event={event} module=service status=error id={id_label} error_code=not_found")
        }
        Err(RepoError::Validation(err)) => warn!(
            "event={event} module=service status=error id={id_label} error_code=validation field={}",
            err.field()
        ),
    }
    result
}
