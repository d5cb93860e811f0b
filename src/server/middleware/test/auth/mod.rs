use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    model::user::User,
    service::auth::token::TokenService,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

const SECRET: &str = "test-secret-key-for-testing-only-min-32-chars";

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}
