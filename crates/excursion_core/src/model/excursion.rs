//! Excursion domain model.
//!
//! # Responsibility
//! - Define the canonical excursion record and its mutable field set.
//! - Provide field-level validation shared by repository write paths.
//!
//! # Invariants
//! - `id` is assigned by the repository and never reused for another record.
//! - `created_at` is stamped once; `updated_at >= created_at` always holds.
//! - `ExcursionFields` carries every mutable field, so updates are full-replace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Repository-assigned identity of one excursion.
///
/// Allocated from a monotonically increasing counter starting at `1`.
pub type ExcursionId = u64;

/// Complete set of caller-controlled excursion fields.
///
/// Used as input for both create and update. There is no sparse variant:
/// every update overwrites all six fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcursionFields {
    /// Display name; must not be blank.
    pub name: String,
    /// Free-form description text.
    pub description: String,
    /// Free-form location label.
    pub location: String,
    /// Price per participant. Finite and `>= 0`.
    pub price: f64,
    /// Duration in hours. Must be `> 0`.
    pub duration: u32,
    /// Participant capacity. Must be `> 0`.
    pub max_participants: u32,
}

impl ExcursionFields {
    /// Validates field-level domain constraints.
    ///
    /// Returns the first violation in field order.
    pub fn validate(&self) -> Result<(), ExcursionValidationError> {
        match self.violations().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Returns every constraint violation in field order.
    ///
    /// An empty vector means the fields are valid.
    pub fn violations(&self) -> Vec<ExcursionValidationError> {
        let mut violations = Vec::new();

        if self.name.trim().is_empty() {
            violations.push(ExcursionValidationError::EmptyName);
        }
        if !self.price.is_finite() {
            violations.push(ExcursionValidationError::NonFinitePrice);
        } else if self.price < 0.0 {
            violations.push(ExcursionValidationError::NegativePrice(self.price));
        }
        if self.duration == 0 {
            violations.push(ExcursionValidationError::ZeroDuration);
        }
        if self.max_participants == 0 {
            violations.push(ExcursionValidationError::ZeroMaxParticipants);
        }

        violations
    }
}

/// Canonical stored excursion record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Excursion {
    pub id: ExcursionId,
    pub name: String,
    pub description: String,
    pub location: String,
    pub price: f64,
    pub duration: u32,
    pub max_participants: u32,
    /// Set once at creation.
    pub created_at: DateTime<Utc>,
    /// Set at creation and on every update.
    pub updated_at: DateTime<Utc>,
}

impl Excursion {
    /// Builds a freshly created record with `created_at == updated_at`.
    pub fn new(id: ExcursionId, fields: ExcursionFields, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            location: fields.location,
            price: fields.price,
            duration: fields.duration,
            max_participants: fields.max_participants,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites every mutable field and advances `updated_at`.
    ///
    /// # Invariants
    /// - `id` and `created_at` are left untouched.
    /// - `updated_at` never moves backwards, even if `now` does.
    pub fn replace_fields(&mut self, fields: ExcursionFields, now: DateTime<Utc>) {
        self.name = fields.name;
        self.description = fields.description;
        self.location = fields.location;
        self.price = fields.price;
        self.duration = fields.duration;
        self.max_participants = fields.max_participants;
        self.updated_at = now.max(self.updated_at);
    }

    /// Returns the current mutable field values.
    pub fn fields(&self) -> ExcursionFields {
        ExcursionFields {
            name: self.name.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            price: self.price,
            duration: self.duration,
            max_participants: self.max_participants,
        }
    }
}

/// Field constraint violations for excursion writes.
#[derive(Debug, Clone, PartialEq)]
pub enum ExcursionValidationError {
    EmptyName,
    NonFinitePrice,
    NegativePrice(f64),
    ZeroDuration,
    ZeroMaxParticipants,
}

impl ExcursionValidationError {
    /// Name of the offending field, as serialized on the wire.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::NonFinitePrice | Self::NegativePrice(_) => "price",
            Self::ZeroDuration => "duration",
            Self::ZeroMaxParticipants => "max_participants",
        }
    }
}

impl Display for ExcursionValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NonFinitePrice => write!(f, "price must be a finite number"),
            Self::NegativePrice(value) => write!(f, "price ({value}) must be >= 0"),
            Self::ZeroDuration => write!(f, "duration must be greater than 0"),
            Self::ZeroMaxParticipants => write!(f, "max_participants must be greater than 0"),
        }
    }
}

impl Error for ExcursionValidationError {}
