//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep adapter layers decoupled from storage details.

pub mod excursion_service;
