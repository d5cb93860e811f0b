//! Lesson progress, course progress and dashboard models.

use chrono::{DateTime, Utc};
use entity::enrollment::EnrollmentStatus;

use crate::{
    model::progress::{CourseProgressDto, DashboardDto, DashboardStatsDto, ProgressDto},
    server::model::{course::Enrollment, lesson::Lesson},
};

/// A user's completion record for one lesson.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub user_id: i32,
    pub lesson_id: i32,
    pub completed: bool,
    /// Set while `completed` is true.
    pub completed_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl Progress {
    pub fn into_dto(self) -> ProgressDto {
        ProgressDto {
            user_id: self.user_id,
            lesson_id: self.lesson_id,
            completed: self.completed,
            completed_at: self.completed_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::progress::Model) -> Self {
        Self {
            user_id: entity.user_id,
            lesson_id: entity.lesson_id,
            completed: entity.completed,
            completed_at: entity.completed_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for recording whether a user completed a lesson.
#[derive(Debug, Clone)]
pub struct UpsertProgressParam {
    pub user_id: i32,
    pub lesson_id: i32,
    pub completed: bool,
}

/// Lessons of a course alongside the caller's progress rows for them.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseProgress {
    pub lessons: Vec<Lesson>,
    pub progress: Vec<Progress>,
}

impl CourseProgress {
    pub fn into_dto(self) -> CourseProgressDto {
        CourseProgressDto {
            lessons: self.lessons.into_iter().map(Lesson::into_dto).collect(),
            progress: self.progress.into_iter().map(Progress::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub courses_enrolled: u64,
    pub courses_completed: u64,
    /// Lessons across all enrolled courses.
    pub total_lessons: u64,
    /// Completed progress rows of the user.
    pub completed_lessons: u64,
}

/// The caller's enrollments with aggregate learning statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub enrollments: Vec<Enrollment>,
    pub stats: DashboardStats,
}

impl Dashboard {
    pub fn into_dto(self) -> DashboardDto {
        DashboardDto {
            enrollments: self
                .enrollments
                .into_iter()
                .map(Enrollment::into_dto)
                .collect(),
            stats: DashboardStatsDto {
                courses_enrolled: self.stats.courses_enrolled,
                courses_completed: self.stats.courses_completed,
                total_lessons: self.stats.total_lessons,
                completed_lessons: self.stats.completed_lessons,
            },
        }
    }
}

/// Completion percentage of a course, rounded down.
///
/// A course without lessons counts as 0%.
pub fn completion_percent(completed: u64, total: u64) -> i32 {
    if total == 0 {
        return 0;
    }

    ((completed.min(total) * 100) / total) as i32
}

/// Enrollment status implied by a completion percentage.
pub fn status_for_percent(percent: i32) -> EnrollmentStatus {
    if percent >= 100 {
        EnrollmentStatus::Completed
    } else {
        EnrollmentStatus::InProgress
    }
}
