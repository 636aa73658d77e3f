use super::*;

/// Tests authenticating with a valid bearer token.
///
/// Expected: Ok with the user the token names
#[tokio::test]
async fn authenticates_valid_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let tokens = TokenService::new(b"test-secret", 24);
    let token = tokens.issue(user.id).unwrap();
    let headers = headers_with_bearer(&token);

    let guard = AuthGuard::new(db, &tokens, &headers);
    let authenticated = guard.require(&[]).await.unwrap();

    assert_eq!(authenticated.id, user.id);
    assert_eq!(authenticated.email, user.email);

    Ok(())
}

/// Tests a request with no Authorization header.
///
/// Expected: Err(MissingToken)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = TokenService::new(b"test-secret", 24);
    let headers = HeaderMap::new();

    let guard = AuthGuard::new(db, &tokens, &headers);
    let result = guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a header that is not a bearer token at all.
///
/// Expected: Err(InvalidToken)
#[tokio::test]
async fn rejects_non_bearer_header() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = TokenService::new(b"test-secret", 24);
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwdw=="));

    let guard = AuthGuard::new(db, &tokens, &headers);
    let result = guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(InvalidToken)
#[tokio::test]
async fn rejects_forged_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let forger = TokenService::new(b"other-secret", 24);
    let token = forger.issue(user.id).unwrap();
    let headers = headers_with_bearer(&token);

    let tokens = TokenService::new(b"test-secret", 24);
    let guard = AuthGuard::new(db, &tokens, &headers);
    let result = guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests an expired token.
///
/// Expected: Err(TokenExpired)
#[tokio::test]
async fn rejects_expired_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let expired_issuer = TokenService::new(b"test-secret", -1);
    let token = expired_issuer.issue(user.id).unwrap();
    let headers = headers_with_bearer(&token);

    let tokens = TokenService::new(b"test-secret", 24);
    let guard = AuthGuard::new(db, &tokens, &headers);
    let result = guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::TokenExpired))
    ));

    Ok(())
}

/// Tests a valid token whose user has since been deleted.
///
/// Expected: Err(UnknownUser)
#[tokio::test]
async fn rejects_token_for_deleted_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = TokenService::new(b"test-secret", 24);
    let token = tokens.issue(424242).unwrap();
    let headers = headers_with_bearer(&token);

    let guard = AuthGuard::new(db, &tokens, &headers);
    let result = guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UnknownUser(424242)))
    ));

    Ok(())
}

/// Tests the admin permission check.
///
/// A regular user is authenticated but denied; an admin passes.
///
/// Expected: Err(AccessDenied) for the user, Ok for the admin
#[tokio::test]
async fn admin_permission_requires_admin_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = TokenService::new(b"test-secret", 24);

    let user = factory::user::create_user(db).await?;
    let user_headers = headers_with_bearer(&tokens.issue(user.id).unwrap());
    let guard = AuthGuard::new(db, &tokens, &user_headers);
    let denied = guard.require(&[Permission::Admin]).await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let admin = factory::user::create_admin(db).await?;
    let admin_headers = headers_with_bearer(&tokens.issue(admin.id).unwrap());
    let guard = AuthGuard::new(db, &tokens, &admin_headers);
    let allowed = guard.require(&[Permission::Admin]).await;
    assert!(allowed.is_ok());

    Ok(())
}
