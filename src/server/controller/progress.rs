use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        progress::{CourseProgressDto, DashboardDto, ProgressDto, UpdateProgressDto},
    },
    server::{
        error::AppError,
        extract::{JsonBody, Path},
        middleware::auth::AuthGuard,
        model::progress::UpsertProgressParam,
        service::progress::ProgressService,
        state::AppState,
    },
};

pub static PROGRESS_TAG: &str = "progress";

#[utoipa::path(
    post,
    path = "/progress/lesson/{lesson_id}",
    tag = PROGRESS_TAG,
    security(("bearer" = [])),
    params(
        ("lesson_id" = i32, Path, description = "Lesson ID")
    ),
    request_body = UpdateProgressDto,
    responses(
        (status = 200, description = "Progress recorded", body = ProgressDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Lesson not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_lesson_progress(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(lesson_id): Path<i32>,
    JsonBody(payload): JsonBody<UpdateProgressDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let progress = ProgressService::new(&state.db)
        .update(UpsertProgressParam {
            user_id: user.id,
            lesson_id,
            completed: payload.completed,
        })
        .await?;

    Ok((StatusCode::OK, Json(progress.into_dto())))
}

#[utoipa::path(
    get,
    path = "/progress/course/{course_id}",
    tag = PROGRESS_TAG,
    security(("bearer" = [])),
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course lessons and the caller's progress", body = CourseProgressDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_progress(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let progress = ProgressService::new(&state.db)
        .get_course_progress(user.id, course_id)
        .await?;

    Ok((StatusCode::OK, Json(progress.into_dto())))
}

#[utoipa::path(
    get,
    path = "/progress/dashboard",
    tag = PROGRESS_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Enrollments and learning statistics", body = DashboardDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let dashboard = ProgressService::new(&state.db)
        .get_dashboard(user.id)
        .await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}
