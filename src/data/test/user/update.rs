use super::*;

/// Tests updating the supplied fields only.
///
/// Verifies that a partial update changes the provided fields, bumps
/// `updated_at`, and leaves everything else intact.
///
/// Expected: Ok(Some(user)) with the new username
#[tokio::test]
async fn updates_supplied_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("old-name")
        .email("jane@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateUserParam {
                username: Some("new-name".to_string()),
                email: None,
                password_hash: None,
            },
        )
        .await?;

    assert!(updated.is_some());
    let user = updated.unwrap();
    assert_eq!(user.username, "new-name");
    assert_eq!(user.email, "jane@example.com");
    assert!(user.updated_at >= created.updated_at);

    Ok(())
}

/// Tests updating the email of a user.
///
/// Expected: Ok(Some(user)) with the new email persisted
#[tokio::test]
async fn updates_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.update(
        created.id,
        UpdateUserParam {
            username: None,
            email: Some("renamed@example.com".to_string()),
            password_hash: None,
        },
    )
    .await?;

    let db_user = entity::prelude::User::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_user.email, "renamed@example.com");

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            9999,
            UpdateUserParam {
                username: Some("ghost".to_string()),
                email: None,
                password_hash: None,
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
