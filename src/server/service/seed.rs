//! Demo data for local development.
//!
//! Seeding only runs against a database without courses, so restarting with seeding
//! enabled never duplicates the catalog.

use entity::{
    course::CourseLevel, enrollment::EnrollmentStatus, lesson::LessonType, user::UserRole,
};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        course::CourseRepository, enrollment::EnrollmentRepository, lesson::LessonRepository,
        study_group::StudyGroupRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        course::{CreateCourseParam, CreateEnrollmentParam},
        group::CreateGroupParam,
        lesson::CreateLessonParam,
        user::CreateUserParam,
    },
    util::password::hash_password,
};

pub const DEMO_EMAIL: &str = "john@example.com";
pub const DEMO_PASSWORD: &str = "password123";

const IF_STATEMENTS_CONTENT: &str = r#"# Control Flow - If Statements

## Example

```python
age = 18
if age >= 18:
    print("You are an adult")
else:
    print("You are a minor")
```

## Explanation
An if statement runs a block only when its condition holds."#;

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the demo user, courses, lessons, enrollment and groups.
    ///
    /// # Returns
    /// - `Ok(true)` - Demo data inserted
    /// - `Ok(false)` - The database already has courses; nothing was written
    /// - `Err(AppError)` - Database or hashing error; nothing is written
    pub async fn seed_if_empty(&self) -> Result<bool, AppError> {
        if CourseRepository::new(self.db).count().await? > 0 {
            return Ok(false);
        }

        let password_hash = hash_password(DEMO_PASSWORD)?;

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .create(CreateUserParam {
                email: DEMO_EMAIL.to_string(),
                password_hash,
                name: "John Doe".to_string(),
                role: UserRole::Student,
            })
            .await?;

        let course_repo = CourseRepository::new(&txn);
        let python = course_repo
            .create(course(
                "Python Programming Basics",
                "Learn Python from the ground up until you can write real programs.",
                "Programming",
                CourseLevel::Beginner,
                720,
                "🐍",
                4.8,
                1234,
            ))
            .await?;
        course_repo
            .create(course(
                "Web Development with React",
                "Build web applications with React.",
                "Web Dev",
                CourseLevel::Intermediate,
                1200,
                "⚛️",
                4.9,
                856,
            ))
            .await?;
        let english = course_repo
            .create(course(
                "English for Beginners",
                "Learn English starting from the basics.",
                "Languages",
                CourseLevel::Beginner,
                900,
                "🇬🇧",
                4.7,
                2341,
            ))
            .await?;

        let lessons = [
            ("Introduction to Python", "Meet Python and install it", "Video content here", 10),
            ("Variables and Data Types", "Variables and the built-in data types", "Video content here", 15),
            ("Control Flow - If Statements", "Branching with if statements", IF_STATEMENTS_CONTENT, 12),
            ("Loops in Python", "Repeating work with loops", "Video content here", 18),
        ];
        let lesson_repo = LessonRepository::new(&txn);
        for (index, (title, description, content, duration)) in lessons.into_iter().enumerate() {
            lesson_repo
                .create(CreateLessonParam {
                    course_id: python.id,
                    title: title.to_string(),
                    description: Some(description.to_string()),
                    lesson_type: LessonType::Video,
                    content: content.to_string(),
                    duration,
                    order_index: index as i32 + 1,
                })
                .await?;
        }

        EnrollmentRepository::new(&txn)
            .create(CreateEnrollmentParam {
                user_id: user.id,
                course_id: english.id,
                progress: 35,
                status: EnrollmentStatus::InProgress,
            })
            .await?;

        let group_repo = StudyGroupRepository::new(&txn);
        for (name, description, max_members) in [
            ("Python Study Squad", "Learning Python together", 15),
            ("React Developers", "Learning React together", 10),
        ] {
            group_repo
                .create(
                    &CreateGroupParam {
                        name: name.to_string(),
                        description: Some(description.to_string()),
                        course_id: None,
                        max_members,
                    },
                    0,
                )
                .await?;
        }

        txn.commit().await?;

        Ok(true)
    }
}

#[allow(clippy::too_many_arguments)]
fn course(
    title: &str,
    description: &str,
    category: &str,
    level: CourseLevel,
    duration: i32,
    emoji: &str,
    rating: f64,
    students: i32,
) -> CreateCourseParam {
    CreateCourseParam {
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        level,
        duration,
        emoji: Some(emoji.to_string()),
        rating,
        students,
        published: true,
    }
}
