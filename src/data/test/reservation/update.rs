use super::*;

/// Tests applying a partial update.
///
/// Verifies that only the supplied fields change and `updated_at` is bumped.
///
/// Expected: Ok(Some(reservation)) with the new boat name
#[tokio::test]
async fn updates_supplied_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::reservation::ReservationFactory::new(db)
        .catway_number(2)
        .client_name("Jane Martin")
        .boat_name("Old Name")
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateReservationParam {
                boat_name: Some("New Name".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_some());
    let reservation = updated.unwrap();
    assert_eq!(reservation.boat_name, "New Name");
    assert_eq!(reservation.client_name, "Jane Martin");
    assert_eq!(reservation.catway_number, 2);
    assert!(reservation.updated_at >= created.updated_at);

    Ok(())
}

/// Tests moving both interval bounds.
///
/// Expected: Ok(Some(reservation)) with the new interval persisted
#[tokio::test]
async fn updates_interval() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::reservation::create_reservation(db, 2).await?;

    let new_start = now_truncated() + Duration::days(30);
    let new_end = new_start + Duration::days(4);

    let repo = ReservationRepository::new(db);
    repo.update(
        created.id,
        UpdateReservationParam {
            start_date: Some(new_start),
            end_date: Some(new_end),
            ..Default::default()
        },
    )
    .await?;

    let db_reservation = entity::prelude::Reservation::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_reservation.start_date, new_start);
    assert_eq!(db_reservation.end_date, new_end);

    Ok(())
}

/// Tests updating a reservation that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);
    let updated = repo
        .update(
            9999,
            UpdateReservationParam {
                client_name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
