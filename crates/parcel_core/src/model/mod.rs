//! Domain model for tracked parcels.
//!
//! # Responsibility
//! - Define canonical data structures used by repository and service layers.
//!
//! # Invariants
//! - Every persisted parcel is identified by a storage-assigned `ParcelNumber`.
//! - Deletion is a hard delete and is only legal for registered parcels.

pub mod parcel;
