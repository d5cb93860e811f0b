use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{course::EnrollmentDto, lesson::LessonDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProgressDto {
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProgressDto {
    pub user_id: i32,
    pub lesson_id: i32,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseProgressDto {
    pub lessons: Vec<LessonDto>,
    pub progress: Vec<ProgressDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsDto {
    pub courses_enrolled: u64,
    pub courses_completed: u64,
    pub total_lessons: u64,
    pub completed_lessons: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub enrollments: Vec<EnrollmentDto>,
    pub stats: DashboardStatsDto,
}
