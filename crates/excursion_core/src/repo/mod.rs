//! Repository layer contracts and in-memory implementation.
//!
//! # Responsibility
//! - Define the data access contract for excursion records.
//! - Own record storage and identity allocation behind that contract.
//!
//! # Invariants
//! - Repository writes must enforce `ExcursionFields::validate()` before mutation.
//! - Repository APIs return semantic errors (`NotFound`, `Validation`).
//! - Returned records are copies; callers never alias repository state.

pub mod clock;
pub mod excursion_repo;
