use parcel_core::db::open_db_in_memory;
use parcel_core::{ParcelService, ParcelStatus, RepoError, SqliteParcelRepository};
use std::collections::HashSet;

#[test]
fn register_returns_stored_parcel_with_number() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelRepository::try_new(&conn).unwrap());

    let parcel = service.register(1000, "Moscow, Tverskaya 1").unwrap();
    assert!(parcel.number > 0);
    assert_eq!(parcel.status, ParcelStatus::Registered);

    assert_eq!(service.get(parcel.number).unwrap(), parcel);
}

#[test]
fn next_status_walks_chain_and_stops_at_delivered() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelRepository::try_new(&conn).unwrap());
    let number = service.register(1, "a").unwrap().number;

    assert_eq!(service.next_status(number).unwrap(), Some(ParcelStatus::Sent));
    assert_eq!(
        service.next_status(number).unwrap(),
        Some(ParcelStatus::Delivered)
    );
    assert_eq!(service.next_status(number).unwrap(), None);
    assert_eq!(service.get(number).unwrap().status, ParcelStatus::Delivered);
}

#[test]
fn next_status_on_unknown_parcel_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelRepository::try_new(&conn).unwrap());

    assert!(matches!(
        service.next_status(5),
        Err(RepoError::NotFound(5))
    ));
}

#[test]
fn change_address_and_delete_follow_registered_guard() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelRepository::try_new(&conn).unwrap());
    let kept = service.register(1, "old").unwrap().number;
    let removed = service.register(1, "gone").unwrap().number;

    service.change_address(kept, "new").unwrap();
    service.delete(removed).unwrap();

    service.next_status(kept).unwrap();
    assert!(matches!(
        service.change_address(kept, "newer"),
        Err(RepoError::InvalidState {
            status: ParcelStatus::Sent,
            ..
        })
    ));
    assert!(matches!(
        service.delete(kept),
        Err(RepoError::InvalidState { .. })
    ));

    let remaining: Vec<_> = service.client_parcels(1).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].number, kept);
    assert_eq!(remaining[0].address, "new");
}

#[test]
fn client_parcels_are_scoped_to_client() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelRepository::try_new(&conn).unwrap());

    let mine: HashSet<_> = (0..3)
        .map(|i| service.register(10, format!("box {i}")).unwrap().number)
        .collect();
    service.register(11, "other").unwrap();

    let listed: HashSet<_> = service
        .client_parcels(10)
        .unwrap()
        .into_iter()
        .map(|parcel| parcel.number)
        .collect();
    assert_eq!(listed, mine);
    assert!(service.client_parcels(12).unwrap().is_empty());
}
