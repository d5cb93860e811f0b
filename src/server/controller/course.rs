use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        course::{CourseDetailDto, CourseDto, EnrollmentDto},
    },
    server::{
        error::AppError, extract::Path, middleware::auth::AuthGuard,
        service::course::CourseService, state::AppState,
    },
};

pub static COURSE_TAG: &str = "course";

#[utoipa::path(
    get,
    path = "/courses",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Published courses, newest first", body = Vec<CourseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let courses = CourseService::new(&state.db).get_published().await?;

    let dto: Vec<CourseDto> = courses.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course with its ordered lessons", body = CourseDetailDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

#[utoipa::path(
    post,
    path = "/courses/{id}/enroll",
    tag = COURSE_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 201, description = "Enrolled in the course", body = EnrollmentDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Already enrolled in this course", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn enroll(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let enrollment = CourseService::new(&state.db).enroll(user.id, id).await?;

    Ok((StatusCode::CREATED, Json(enrollment.into_dto())))
}

#[utoipa::path(
    get,
    path = "/courses/my/enrollments",
    tag = COURSE_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Caller's enrollments with courses", body = Vec<EnrollmentDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_enrollments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let enrollments = CourseService::new(&state.db)
        .get_user_enrollments(user.id)
        .await?;

    let dto: Vec<EnrollmentDto> = enrollments.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
