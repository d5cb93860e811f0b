//! Lesson domain models.

use entity::lesson::LessonType;
use sea_orm::ActiveEnum;

use crate::{
    model::lesson::{LessonDetailDto, LessonDto},
    server::model::course::Course,
};

/// A single lesson of a course.
#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    pub id: i32,
    pub course_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub lesson_type: LessonType,
    /// Markdown body or media reference, depending on the lesson type.
    pub content: String,
    /// Length in minutes.
    pub duration: i32,
    /// Position within the course, unique per course.
    pub order_index: i32,
}

impl Lesson {
    pub fn into_dto(self) -> LessonDto {
        LessonDto {
            lesson_type: self.lesson_type.to_value(),
            id: self.id,
            course_id: self.course_id,
            title: self.title,
            description: self.description,
            content: self.content,
            duration: self.duration,
            order_index: self.order_index,
        }
    }

    pub fn from_entity(entity: entity::lesson::Model) -> Self {
        Self {
            id: entity.id,
            course_id: entity.course_id,
            title: entity.title,
            description: entity.description,
            lesson_type: entity.lesson_type,
            content: entity.content,
            duration: entity.duration,
            order_index: entity.order_index,
        }
    }
}

/// A lesson together with its parent course.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonWithCourse {
    pub lesson: Lesson,
    pub course: Course,
}

impl LessonWithCourse {
    pub fn into_dto(self) -> LessonDetailDto {
        LessonDetailDto {
            lesson: self.lesson.into_dto(),
            course: self.course.into_dto(),
        }
    }
}

/// Parameters for inserting a lesson.
#[derive(Debug, Clone)]
pub struct CreateLessonParam {
    pub course_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub lesson_type: LessonType,
    pub content: String,
    pub duration: i32,
    pub order_index: i32,
}
