use super::*;

/// Tests deleting a reservation through its catway path.
///
/// Expected: Ok and the reservation is gone
#[tokio::test]
async fn deletes_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marina_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::catway::create_catway_with_number(db, 2).await?;
    let created = factory::reservation::create_reservation(db, 2).await?;

    let service = ReservationService::new(db);
    service.delete(2, created.id).await.unwrap();

    let db_reservation = entity::prelude::Reservation::find_by_id(created.id)
        .one(db)
        .await?;
    assert!(db_reservation.is_none());

    Ok(())
}

/// Tests deleting a reservation through the wrong catway path.
///
/// Expected: Err(BadRequest) and the reservation survives
#[tokio::test]
async fn rejects_wrong_catway_path() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marina_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::catway::create_catway_with_number(db, 2).await?;
    factory::catway::create_catway_with_number(db, 3).await?;
    let created = factory::reservation::create_reservation(db, 2).await?;

    let service = ReservationService::new(db);
    let result = service.delete(3, created.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let db_reservation = entity::prelude::Reservation::find_by_id(created.id)
        .one(db)
        .await?;
    assert!(db_reservation.is_some());

    Ok(())
}

/// Tests deleting an unknown reservation id.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marina_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::catway::create_catway_with_number(db, 2).await?;

    let service = ReservationService::new(db);
    let result = service.delete(2, 9999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
