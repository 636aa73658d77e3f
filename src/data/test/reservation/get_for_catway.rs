use super::*;

/// Tests listing reservations for one catway ordered by start date.
///
/// Expected: Ok with only that catway's reservations, sorted ascending
#[tokio::test]
async fn returns_catway_reservations_ordered_by_start() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let base = Utc::now() + Duration::days(1);

    let later = factory::reservation::ReservationFactory::new(db)
        .catway_number(5)
        .dates(base + Duration::days(20), base + Duration::days(25))
        .build()
        .await?;
    let earlier = factory::reservation::ReservationFactory::new(db)
        .catway_number(5)
        .dates(base, base + Duration::days(5))
        .build()
        .await?;

    // Noise on another catway
    factory::reservation::create_reservation(db, 6).await?;

    let repo = ReservationRepository::new(db);
    let reservations = repo.get_for_catway(5).await?;

    assert_eq!(reservations.len(), 2);
    assert_eq!(reservations[0].id, earlier.id);
    assert_eq!(reservations[1].id, later.id);

    Ok(())
}

/// Tests listing for a catway with no reservations.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_unbooked_catway() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::reservation::create_reservation(db, 1).await?;

    let repo = ReservationRepository::new(db);
    let reservations = repo.get_for_catway(2).await?;

    assert!(reservations.is_empty());

    Ok(())
}
