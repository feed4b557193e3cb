//! Parcel domain model.
//!
//! # Responsibility
//! - Define the tracked shipment record and its delivery status chain.
//! - Provide constructors that stamp creation time for new parcels.
//!
//! # Invariants
//! - `number` is assigned by storage and never reused for another parcel.
//! - `client` and `created_at` never change after creation.
//! - `address` may change only while `status == Registered`.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Storage-assigned parcel identifier.
///
/// `0` marks a parcel that has not been persisted yet.
pub type ParcelNumber = i64;

/// Identifier of the client owning a parcel.
pub type ClientId = i64;

/// Delivery lifecycle state.
///
/// `Registered` is the only state in which a parcel can be re-addressed or
/// deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParcelStatus {
    /// Accepted for delivery, not handed to a courier yet.
    Registered,
    /// In transit.
    Sent,
    /// Handed over to the recipient.
    Delivered,
}

impl ParcelStatus {
    /// Text representation stored in `parcel.status`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Sent => "sent",
            Self::Delivered => "delivered",
        }
    }

    /// Parses stored status text. Returns `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "registered" => Some(Self::Registered),
            "sent" => Some(Self::Sent),
            "delivered" => Some(Self::Delivered),
            _ => None,
        }
    }

    /// Next state in the `registered -> sent -> delivered` chain.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Registered => Some(Self::Sent),
            Self::Sent => Some(Self::Delivered),
            Self::Delivered => None,
        }
    }
}

impl std::fmt::Display for ParcelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracked shipment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Primary key. `0` until the parcel is persisted.
    pub number: ParcelNumber,
    pub client: ClientId,
    pub status: ParcelStatus,
    /// Free-form delivery address.
    pub address: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

impl Parcel {
    /// Creates an unsaved, registered parcel stamped with the current UTC time.
    pub fn new(client: ClientId, address: impl Into<String>) -> Self {
        Self::with_created_at(client, address, now_rfc3339())
    }

    /// Creates an unsaved, registered parcel with a caller-provided timestamp.
    ///
    /// Used by import paths and tests where creation time is already known.
    pub fn with_created_at(
        client: ClientId,
        address: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            number: 0,
            client,
            status: ParcelStatus::Registered,
            address: address.into(),
            created_at: created_at.into(),
        }
    }

    /// Returns whether address change and deletion are currently allowed.
    pub fn is_mutable(&self) -> bool {
        self.status == ParcelStatus::Registered
    }
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
