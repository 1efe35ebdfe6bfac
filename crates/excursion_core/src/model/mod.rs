//! Domain model for the excursion catalog.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep field validation next to the data it guards.
//!
//! # Invariants
//! - Every stored excursion is identified by a repository-assigned `ExcursionId`.
//! - Deletion is permanent; there are no tombstones.

pub mod excursion;
