use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::lesson::LessonDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    /// One of `BEGINNER`, `INTERMEDIATE`, `ADVANCED`.
    pub level: String,
    /// Total length in minutes.
    pub duration: i32,
    pub emoji: Option<String>,
    pub rating: f64,
    pub students: i32,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

/// A course together with its lessons in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseDetailDto {
    #[serde(flatten)]
    pub course: CourseDto,
    pub lessons: Vec<LessonDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentDto {
    pub user_id: i32,
    pub course_id: i32,
    /// Completion percentage, 0 to 100.
    pub progress: i32,
    /// One of `IN_PROGRESS`, `COMPLETED`.
    pub status: String,
    pub enrolled_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<CourseDto>,
}
