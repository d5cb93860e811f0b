use super::*;

/// Tests a valid bearer token for an existing user.
///
/// Expected: Ok(User) matching the token subject
#[tokio::test]
async fn accepts_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET, 1);

    let user = factory::user::UserFactory::new(db)
        .email("ada@example.com")
        .name("Ada")
        .build()
        .await?;
    let token = tokens.issue(&User::from_entity(user.clone()))?;

    let headers = headers_with(&format!("Bearer {}", token));
    let result = AuthGuard::new(db, &tokens, &headers).require().await?;

    assert_eq!(result.id, user.id);
    assert_eq!(result.email, "ada@example.com");

    Ok(())
}

/// Tests that the scheme is matched case-insensitively.
///
/// Expected: Ok(User)
#[tokio::test]
async fn accepts_lowercase_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET, 1);

    let user = factory::user::create_user(db).await?;
    let token = tokens.issue(&User::from_entity(user))?;

    let headers = headers_with(&format!("bearer {}", token));
    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET, 1);

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests headers that are not usable bearer tokens.
///
/// Expected: Err(AuthError::InvalidToken) for another scheme, an empty token and garbage
#[tokio::test]
async fn rejects_malformed_headers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET, 1);

    for value in ["Basic dXNlcjpwYXNz", "Bearer ", "Bearer not.a.jwt"] {
        let headers = headers_with(value);
        let result = AuthGuard::new(db, &tokens, &headers).require().await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidToken(_)))
        ));
    }

    Ok(())
}

/// Tests a token signed with another secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET, 1);
    let foreign = TokenService::new("another-secret-key-that-is-also-long-enough", 1);

    let user = factory::user::create_user(db).await?;
    let token = foreign.issue(&User::from_entity(user))?;

    let headers = headers_with(&format!("Bearer {}", token));
    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user has been deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET, 1);

    let user = factory::user::create_user(db).await?;
    let token = tokens.issue(&User::from_entity(user.clone()))?;
    entity::prelude::User::delete_by_id(user.id).exec(db).await?;

    let headers = headers_with(&format!("Bearer {}", token));
    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) if id == user.id
    ));

    Ok(())
}
