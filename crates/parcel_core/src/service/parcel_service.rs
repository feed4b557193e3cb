//! Parcel use-case service.
//!
//! # Responsibility
//! - Provide registration and delivery-progress entry points for callers.
//! - Delegate persistence to repository implementations.
//! - Emit one diagnostic event per mutation.
//!
//! # Invariants
//! - Service APIs never bypass repository status guards.
//! - Repository errors are returned unchanged.

use crate::model::parcel::{ClientId, Parcel, ParcelNumber, ParcelStatus};
use crate::repo::parcel_repo::{ParcelRepository, RepoResult};
use log::{info, warn};

/// Use-case service wrapper for parcel tracking.
pub struct ParcelService<R: ParcelRepository> {
    repo: R,
}

impl<R: ParcelRepository> ParcelService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new parcel for `client` stamped with the current time.
    ///
    /// Returns the stored parcel including its assigned number.
    pub fn register(&self, client: ClientId, address: impl Into<String>) -> RepoResult<Parcel> {
        let mut parcel = Parcel::new(client, address);
        parcel.number = self.repo.add_parcel(&parcel).map_err(|err| {
            warn!("event=parcel_register module=service status=error client={client} error={err}");
            err
        })?;
        info!(
            "event=parcel_register module=service status=ok client={} number={}",
            client, parcel.number
        );
        Ok(parcel)
    }

    /// Gets one parcel by number.
    pub fn get(&self, number: ParcelNumber) -> RepoResult<Parcel> {
        self.repo.get_parcel(number)
    }

    /// Lists all parcels of one client.
    pub fn client_parcels(&self, client: ClientId) -> RepoResult<Vec<Parcel>> {
        self.repo.get_parcels_by_client(client)
    }

    /// Advances a parcel one step along `registered -> sent -> delivered`.
    ///
    /// # Contract
    /// - Returns the new status.
    /// - Delivered parcels are left untouched and yield `None`.
    pub fn next_status(&self, number: ParcelNumber) -> RepoResult<Option<ParcelStatus>> {
        let parcel = self.repo.get_parcel(number)?;
        let Some(next) = parcel.status.next() else {
            info!("event=parcel_next_status module=service status=skipped number={number} reason=delivered");
            return Ok(None);
        };

        logged(
            "parcel_next_status",
            number,
            self.repo.set_status(number, next),
        )?;
        Ok(Some(next))
    }

    /// Changes the delivery address of a registered parcel.
    pub fn change_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()> {
        logged(
            "parcel_change_address",
            number,
            self.repo.set_address(number, address),
        )
    }

    /// Deletes a registered parcel.
    pub fn delete(&self, number: ParcelNumber) -> RepoResult<()> {
        logged("parcel_delete", number, self.repo.delete_parcel(number))
    }
}

fn logged<T>(event: &str, number: ParcelNumber, result: RepoResult<T>) -> RepoResult<T> {
    match &result {
        Ok(_) => info!("event={event} module=service status=ok number={number}"),
        Err(err) => warn!("event={event} module=service status=error number={number} error={err}"),
    }
    result
}
