use super::*;

fn login_param(email: &str, password: &str) -> LoginParam {
    LoginParam {
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Tests logging in with the password used at registration.
///
/// Expected: Ok with the same user
#[tokio::test]
async fn logs_in_with_registered_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET, 1);

    let service = AuthService::new(db, &tokens);
    let registered = service
        .register(register_param("a@x.com", "secret1", "Ada"))
        .await?;

    let result = service.login(login_param("a@x.com", "secret1")).await?;

    assert_eq!(result.user.id, registered.user.id);
    assert_eq!(tokens.verify(&result.token)?.sub, registered.user.id);

    Ok(())
}

/// Tests that a wrong password and an unknown email fail the same way.
///
/// Expected: Err(InvalidCredentials) for both
#[tokio::test]
async fn rejects_wrong_password_and_unknown_email() -> Result<(), AppError> {
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

    let wrong_password = service.login(login_param("a@x.com", "secret2")).await;
    let unknown_email = service.login(login_param("b@x.com", "secret1")).await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_email,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
