//! Course and enrollment domain models.
//!
//! Courses make up the public catalog. An enrollment links a user to a course and
//! tracks their completion percentage.

use chrono::{DateTime, Utc};
use entity::{course::CourseLevel, enrollment::EnrollmentStatus};
use sea_orm::ActiveEnum;

use crate::{
    model::course::{CourseDetailDto, CourseDto, EnrollmentDto},
    server::model::lesson::Lesson,
};

/// Course as listed in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: CourseLevel,
    /// Total length in minutes.
    pub duration: i32,
    pub emoji: Option<String>,
    pub rating: f64,
    /// Advertised student count.
    pub students: i32,
    /// Unpublished courses are hidden from the catalog listing.
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

impl Course {
    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            level: self.level.to_value(),
            id: self.id,
            title: self.title,
            description: self.description,
            category: self.category,
            duration: self.duration,
            emoji: self.emoji,
            rating: self.rating,
            students: self.students,
            published: self.published,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            category: entity.category,
            level: entity.level,
            duration: entity.duration,
            emoji: entity.emoji,
            rating: entity.rating,
            students: entity.students,
            published: entity.published,
            created_at: entity.created_at,
        }
    }
}

/// A course with its lessons ordered by `order_index` ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseWithLessons {
    pub course: Course,
    pub lessons: Vec<Lesson>,
}

impl CourseWithLessons {
    pub fn into_dto(self) -> CourseDetailDto {
        CourseDetailDto {
            course: self.course.into_dto(),
            lessons: self.lessons.into_iter().map(Lesson::into_dto).collect(),
        }
    }
}

/// A user's enrollment in a course.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub user_id: i32,
    pub course_id: i32,
    /// Completion percentage, 0 to 100.
    pub progress: i32,
    pub status: EnrollmentStatus,
    pub enrolled_at: DateTime<Utc>,
    /// The enrolled course, when loaded alongside the enrollment.
    pub course: Option<Course>,
}

impl Enrollment {
    pub fn into_dto(self) -> EnrollmentDto {
        EnrollmentDto {
            status: self.status.to_value(),
            user_id: self.user_id,
            course_id: self.course_id,
            progress: self.progress,
            enrolled_at: self.enrolled_at,
            course: self.course.map(Course::into_dto),
        }
    }

    /// Converts an enrollment entity and its optionally loaded course.
    pub fn from_entity(
        entity: entity::enrollment::Model,
        course: Option<entity::course::Model>,
    ) -> Self {
        Self {
            user_id: entity.user_id,
            course_id: entity.course_id,
            progress: entity.progress,
            status: entity.status,
            enrolled_at: entity.enrolled_at,
            course: course.map(Course::from_entity),
        }
    }
}

/// Parameters for inserting a course.
#[derive(Debug, Clone)]
pub struct CreateCourseParam {
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: CourseLevel,
    pub duration: i32,
    pub emoji: Option<String>,
    pub rating: f64,
    pub students: i32,
    pub published: bool,
}

/// Parameters for inserting an enrollment.
#[derive(Debug, Clone)]
pub struct CreateEnrollmentParam {
    pub user_id: i32,
    pub course_id: i32,
    pub progress: i32,
    pub status: EnrollmentStatus,
}

impl CreateEnrollmentParam {
    /// A fresh enrollment with no completed lessons.
    pub fn new(user_id: i32, course_id: i32) -> Self {
        Self {
            user_id,
            course_id,
            progress: 0,
            status: EnrollmentStatus::InProgress,
        }
    }
}
