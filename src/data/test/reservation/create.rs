use super::*;

/// Tests creating a new reservation.
///
/// Expected: Ok with reservation created and timestamps filled
#[tokio::test]
async fn creates_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start = now_truncated() + Duration::days(1);
    let end = start + Duration::days(3);

    let repo = ReservationRepository::new(db);
    let result = repo
        .create(CreateReservationParam {
            catway_number: 4,
            client_name: "Jane Martin".to_string(),
            boat_name: "Sea Breeze".to_string(),
            start_date: start,
            end_date: end,
        })
        .await;

    assert!(result.is_ok());
    let reservation = result.unwrap();
    assert_eq!(reservation.catway_number, 4);
    assert_eq!(reservation.client_name, "Jane Martin");
    assert_eq!(reservation.boat_name, "Sea Breeze");
    assert_eq!(reservation.start_date, start);
    assert_eq!(reservation.end_date, end);

    // Verify the row exists in the database
    let db_reservation = entity::prelude::Reservation::find_by_id(reservation.id)
        .one(db)
        .await?;
    assert!(db_reservation.is_some());

    Ok(())
}

/// Tests that multiple reservations can coexist on different catways.
///
/// Expected: Ok with distinct ids
#[tokio::test]
async fn creates_reservations_on_different_catways() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::reservation::create_reservation(db, 1).await?;
    let second = factory::reservation::create_reservation(db, 2).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(first.catway_number, 1);
    assert_eq!(second.catway_number, 2);

    Ok(())
}
