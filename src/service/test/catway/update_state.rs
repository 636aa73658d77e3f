use super::*;

/// Tests updating the state of a catway through the service.
///
/// Expected: Ok with the new state
#[tokio::test]
async fn updates_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Catway)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::catway::create_catway_with_number(db, 3).await?;

    let service = CatwayService::new(db);
    let catway = service
        .update_state(
            3,
            UpdateCatwayDto {
                catway_state: "needs repainting".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(catway.catway_state, "needs repainting");

    Ok(())
}

/// Tests updating an unknown catway.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_catway() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Catway)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CatwayService::new(db);
    let result = service
        .update_state(
            404,
            UpdateCatwayDto {
                catway_state: "unused".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that a blank state is rejected before any lookup.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_blank_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Catway)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::catway::create_catway_with_number(db, 3).await?;

    let service = CatwayService::new(db);
    let result = service
        .update_state(
            3,
            UpdateCatwayDto {
                catway_state: "  ".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}
