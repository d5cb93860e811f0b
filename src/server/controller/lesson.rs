use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        lesson::{LessonDetailDto, LessonDto},
    },
    server::{error::AppError, extract::Path, service::lesson::LessonService, state::AppState},
};

pub static LESSON_TAG: &str = "lesson";

#[utoipa::path(
    get,
    path = "/lessons/course/{course_id}",
    tag = LESSON_TAG,
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Lessons ordered by position", body = Vec<LessonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_lessons(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let lessons = LessonService::new(&state.db)
        .get_by_course(course_id)
        .await?;

    let dto: Vec<LessonDto> = lessons.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/lessons/{id}",
    tag = LESSON_TAG,
    params(
        ("id" = i32, Path, description = "Lesson ID")
    ),
    responses(
        (status = 200, description = "Lesson with its course", body = LessonDetailDto),
        (status = 404, description = "Lesson not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lesson(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let lesson = LessonService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(lesson.into_dto())))
}
