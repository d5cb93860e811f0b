use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::course::CourseDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LessonDto {
    pub id: i32,
    pub course_id: i32,
    pub title: String,
    pub description: Option<String>,
    /// One of `VIDEO`, `TEXT`, `QUIZ`.
    pub lesson_type: String,
    pub content: String,
    pub duration: i32,
    pub order_index: i32,
}

/// A lesson together with the course it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LessonDetailDto {
    #[serde(flatten)]
    pub lesson: LessonDto,
    pub course: CourseDto,
}
