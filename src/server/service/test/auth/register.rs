use super::*;

/// Tests registering a new account.
///
/// Expected: Ok with a STUDENT user and a token that verifies to that user
#[tokio::test]
async fn registers_student_with_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET, 1);

    let service = AuthService::new(db, &tokens);
    let result = service
        .register(register_param("a@x.com", "secret1", "Ada"))
        .await?;

    assert_eq!(result.user.email, "a@x.com");
    assert_eq!(result.user.name, "Ada");
    assert_eq!(result.user.role_name(), "STUDENT");

    let claims = tokens.verify(&result.token)?;
    assert_eq!(claims.sub, result.user.id);

    Ok(())
}

/// Tests registering an email that already has an account.
///
/// Expected: Err(EmailTaken)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET, 1);

    let service = AuthService::new(db, &tokens);
    service
        .register(register_param("a@x.com", "secret1", "Ada"))
        .await?;
    let result = service
        .register(register_param("a@x.com", "another", "Other"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::EmailTaken(_)))
    ));

    Ok(())
}

/// Tests registration payload validation.
///
/// Expected: Err(Validation) for a malformed email, a short password and an empty name
#[tokio::test]
async fn rejects_invalid_payloads() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET, 1);

    let service = AuthService::new(db, &tokens);

    for param in [
        register_param("not-an-email", "secret1", "Ada"),
        register_param("@x.com", "secret1", "Ada"),
        register_param("a@x.com", "12345", "Ada"),
        register_param("a@x.com", "secret1", ""),
    ] {
        let result = service.register(param).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::Validation(_)))
        ));
    }

    Ok(())
}
