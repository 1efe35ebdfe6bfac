//! Excursion repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide list/get/create/update/delete over the excursion collection.
//! - Allocate record identities from a monotonically increasing counter.
//!
//! # Invariants
//! - Identities are never reused, even after deletion.
//! - Enumeration order is insertion order minus deleted records.
//! - Every operation runs under one exclusive lock and is atomic with respect
//!   to the others.
//! - Failed operations leave state untouched and consume no identity.

use crate::model::excursion::{
    Excursion, ExcursionFields, ExcursionId, ExcursionValidationError,
};
use crate::repo::clock::{Clock, SystemClock};
use parking_lot::Mutex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

const FIRST_EXCURSION_ID: ExcursionId = 1;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for excursion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RepoError {
    /// No present record has this identity.
    NotFound(ExcursionId),
    /// Write rejected by field validation.
    Validation(ExcursionValidationError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "excursion not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<ExcursionValidationError> for RepoError {
    fn from(value: ExcursionValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for excursion CRUD operations.
///
/// All returned records are independent copies.
pub trait ExcursionRepository: Send + Sync {
    fn list(&self) -> RepoResult<Vec<Excursion>>;
    fn get(&self, id: ExcursionId) -> RepoResult<Excursion>;
    fn create(&self, fields: ExcursionFields) -> RepoResult<Excursion>;
    fn update(&self, id: ExcursionId, fields: ExcursionFields) -> RepoResult<Excursion>;
    fn delete(&self, id: ExcursionId) -> RepoResult<()>;
}

impl<R: ExcursionRepository + ?Sized> ExcursionRepository for Arc<R> {
    fn list(&self) -> RepoResult<Vec<Excursion>> {
        (**self).list()
    }

    fn get(&self, id: ExcursionId) -> RepoResult<Excursion> {
        (**self).get(id)
    }

    fn create(&self, fields: ExcursionFields) -> RepoResult<Excursion> {
        (**self).create(fields)
    }

    fn update(&self, id: ExcursionId, fields: ExcursionFields) -> RepoResult<Excursion> {
        (**self).update(id, fields)
    }

    fn delete(&self, id: ExcursionId) -> RepoResult<()> {
        (**self).delete(id)
    }
}

struct RepoState {
    records: Vec<Excursion>,
    next_id: ExcursionId,
}

impl RepoState {
    fn position(&self, id: ExcursionId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    fn allocate_id(&mut self) -> ExcursionId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Process-local excursion repository.
///
/// Lookup is a linear scan over insertion-ordered records.
pub struct InMemoryExcursionRepository {
    state: Mutex<RepoState>,
    clock: Arc<dyn Clock>,
}

impl InMemoryExcursionRepository {
    /// Creates an empty repository stamped by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty repository with a caller-provided time source.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(RepoState {
                records: Vec::new(),
                next_id: FIRST_EXCURSION_ID,
            }),
            clock,
        }
    }

    /// Number of present records.
    pub fn len(&self) -> usize {
        self.state.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().records.is_empty()
    }
}

impl Default for InMemoryExcursionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ExcursionRepository for InMemoryExcursionRepository {
    fn list(&self) -> RepoResult<Vec<Excursion>> {
        Ok(self.state.lock().records.clone())
    }

    fn get(&self, id: ExcursionId) -> RepoResult<Excursion> {
        let state = self.state.lock();
        state
            .records
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or(RepoError::NotFound(id))
    }

    fn create(&self, fields: ExcursionFields) -> RepoResult<Excursion> {
        fields.validate()?;

        let mut state = self.state.lock();
        let id = state.allocate_id();
        let record = Excursion::new(id, fields, self.clock.now());
        state.records.push(record.clone());
        Ok(record)
    }

    fn update(&self, id: ExcursionId, fields: ExcursionFields) -> RepoResult<Excursion> {
        let mut state = self.state.lock();
        let index = state.position(id).ok_or(RepoError::NotFound(id))?;
        fields.validate()?;

        let record = &mut state.records[index];
        record.replace_fields(fields, self.clock.now());
        Ok(record.clone())
    }

    fn delete(&self, id: ExcursionId) -> RepoResult<()> {
        let mut state = self.state.lock();
        let index = state.position(id).ok_or(RepoError::NotFound(id))?;
        state.records.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ExcursionRepository, InMemoryExcursionRepository, RepoError};
    use crate::model::excursion::ExcursionFields;

    fn fields(name: &str) -> ExcursionFields {
        ExcursionFields {
            name: name.to_string(),
            description: "desc".to_string(),
            location: "somewhere".to_string(),
            price: 10.0,
            duration: 1,
            max_participants: 4,
        }
    }

    #[test]
    fn rejected_create_consumes_no_identity() {
        let repo = InMemoryExcursionRepository::new();

        let err = repo.create(fields("")).unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));

        let created = repo.create(fields("valid")).unwrap();
        assert_eq!(created.id, 1);
    }

    #[test]
    fn update_reports_not_found_before_validation() {
        let repo = InMemoryExcursionRepository::new();
        let err = repo.update(9, fields("")).unwrap_err();
        assert_eq!(err, RepoError::NotFound(9));
    }

    #[test]
    fn len_tracks_present_records() {
        let repo = InMemoryExcursionRepository::default();
        assert!(repo.is_empty());

        let first = repo.create(fields("a")).unwrap();
        repo.create(fields("b")).unwrap();
        repo.delete(first.id).unwrap();

        assert_eq!(repo.len(), 1);
    }
}
