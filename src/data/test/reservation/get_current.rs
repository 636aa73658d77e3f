use super::*;

/// Tests that only reservations whose interval contains "now" are returned.
///
/// Expected: Ok with the active reservation only
#[tokio::test]
async fn returns_only_active_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();

    // Active: started yesterday, ends tomorrow
    let active = factory::reservation::ReservationFactory::new(db)
        .catway_number(1)
        .dates(now - Duration::days(1), now + Duration::days(1))
        .build()
        .await?;

    // Past: ended an hour ago
    factory::reservation::ReservationFactory::new(db)
        .catway_number(2)
        .dates(now - Duration::days(3), now - Duration::hours(1))
        .build()
        .await?;

    // Future: starts tomorrow
    factory::reservation::ReservationFactory::new(db)
        .catway_number(3)
        .dates(now + Duration::days(1), now + Duration::days(3))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let current = repo.get_current(now).await?;

    assert_eq!(current.len(), 1);
    assert_eq!(current[0].id, active.id);

    Ok(())
}

/// Tests the boundary instants of the half-open interval.
///
/// A reservation is active at its exact start instant but not at its exact
/// end instant.
///
/// Expected: included at start, excluded at end
#[tokio::test]
async fn boundary_instants_follow_half_open_semantics() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start = Utc::now();
    let end = start + Duration::days(2);
    factory::reservation::ReservationFactory::new(db)
        .catway_number(1)
        .dates(start, end)
        .build()
        .await?;

    let repo = ReservationRepository::new(db);

    let at_start = repo.get_current(start).await?;
    assert_eq!(at_start.len(), 1);

    let at_end = repo.get_current(end).await?;
    assert!(at_end.is_empty());

    Ok(())
}
