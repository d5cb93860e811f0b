use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthResponseDto, LoginDto, RegisterDto},
    },
    server::{
        error::AppError,
        extract::JsonBody,
        model::user::{LoginParam, RegisterParam},
        service::auth::AuthService,
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

#[utoipa::path(
    post,
    path = "/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created and signed in", body = AuthResponseDto),
        (status = 400, description = "Invalid email, password or name", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthService::new(&state.db, &state.tokens)
        .register(RegisterParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(authenticated.into_dto())))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = AuthResponseDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthService::new(&state.db, &state.tokens)
        .login(LoginParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(authenticated.into_dto())))
}
