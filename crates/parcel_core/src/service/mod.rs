//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into parcel tracking use-cases.
//! - Keep callers decoupled from storage details.

pub mod parcel_service;
