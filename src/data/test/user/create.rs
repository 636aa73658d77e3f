use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository inserts the record, stores the role as its
/// string token, and fills both timestamps.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            username: "jane".to_string(),
            email: "jane@example.com".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            role: Role::User,
        })
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.username, "jane");
    assert_eq!(user.email, "jane@example.com");
    assert_eq!(user.role, Role::User);

    // Verify the row exists in the database
    let db_user = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(db_user.is_some());
    assert_eq!(db_user.unwrap().role, "user");

    Ok(())
}

/// Tests that the unique email index rejects duplicates at the storage level.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(CreateUserParam {
        username: "jane".to_string(),
        email: "jane@example.com".to_string(),
        password_hash: "$argon2id$hash".to_string(),
        role: Role::User,
    })
    .await?;

    let result = repo
        .create(CreateUserParam {
            username: "other".to_string(),
            email: "jane@example.com".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            role: Role::User,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
