use super::*;

/// Tests booking a reservation on an existing, free catway.
///
/// Expected: Ok with the reservation pinned to the path catway
#[tokio::test]
async fn books_free_interval() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marina_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::catway::create_catway_with_number(db, 2).await?;

    let start = Utc::now() + Duration::days(1);
    let service = ReservationService::new(db);
    let reservation = service
        .create(2, booking(start, start + Duration::days(3)))
        .await
        .unwrap();

    assert_eq!(reservation.catway_number, 2);
    assert_eq!(reservation.client_name, "Jane Martin");

    Ok(())
}

/// Tests booking on a catway that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_catway() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marina_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start = Utc::now() + Duration::days(1);
    let service = ReservationService::new(db);
    let result = service
        .create(404, booking(start, start + Duration::days(3)))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests booking an interval that overlaps an existing reservation.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_overlapping_interval() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marina_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::catway::create_catway_with_number(db, 2).await?;

    let start = Utc::now() + Duration::days(1);
    let end = start + Duration::days(7);
    factory::reservation::ReservationFactory::new(db)
        .catway_number(2)
        .dates(start, end)
        .build()
        .await?;

    let service = ReservationService::new(db);
    let result = service
        .create(2, booking(start + Duration::days(2), end + Duration::days(2)))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests booking back-to-back with an existing reservation.
///
/// The new interval starts at the exact instant the existing one ends;
/// with an exclusive end bound this is not a conflict.
///
/// Expected: Ok
#[tokio::test]
async fn allows_touching_intervals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marina_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::catway::create_catway_with_number(db, 2).await?;

    let start = Utc::now() + Duration::days(1);
    let end = start + Duration::days(7);
    factory::reservation::ReservationFactory::new(db)
        .catway_number(2)
        .dates(start, end)
        .build()
        .await?;

    let service = ReservationService::new(db);
    let result = service.create(2, booking(end, end + Duration::days(7))).await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that an inverted interval is rejected before the conflict scan.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_inverted_interval() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marina_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::catway::create_catway_with_number(db, 2).await?;

    let start = Utc::now() + Duration::days(5);
    let service = ReservationService::new(db);
    let result = service
        .create(2, booking(start, start - Duration::days(1)))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that the same interval can be booked on two different catways.
///
/// Expected: Ok for both
#[tokio::test]
async fn same_interval_on_other_catway_is_free() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marina_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::catway::create_catway_with_number(db, 1).await?;
    factory::catway::create_catway_with_number(db, 2).await?;

    let start = Utc::now() + Duration::days(1);
    let end = start + Duration::days(3);

    let service = ReservationService::new(db);
    service.create(1, booking(start, end)).await.unwrap();
    let second = service.create(2, booking(start, end)).await;

    assert!(second.is_ok());

    Ok(())
}
