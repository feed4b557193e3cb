//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the parcel data access contract.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`, `InvalidState`) in
//!   addition to storage errors.

pub mod parcel_repo;
