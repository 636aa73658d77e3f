use super::*;

/// Tests deleting a reservation by id.
///
/// Expected: Ok(1) and the row is gone
#[tokio::test]
async fn deletes_existing_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::reservation::create_reservation(db, 1).await?;

    let repo = ReservationRepository::new(db);
    let rows = repo.delete(created.id).await?;

    assert_eq!(rows, 1);

    let db_reservation = entity::prelude::Reservation::find_by_id(created.id)
        .one(db)
        .await?;
    assert!(db_reservation.is_none());

    Ok(())
}

/// Tests deleting an unknown reservation id.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);
    let rows = repo.delete(9999).await?;

    assert_eq!(rows, 0);

    Ok(())
}
