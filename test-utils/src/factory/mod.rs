//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let course = factory::course::create_course(&db).await?;
//!
//!     // Group of capacity 2 owned by a fresh user
//!     let (owner, group) = factory::helpers::create_group_with_owner(&db, 2).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let course = factory::course::CourseFactory::new(&db)
//!     .title("Rust for Beginners")
//!     .published(false)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `course` - Create course entities
//! - `lesson` - Create lesson entities
//! - `enrollment` - Create user-course enrollments
//! - `study_group` - Create study group entities
//! - `group_member` - Create group membership rows
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod course;
pub mod enrollment;
pub mod group_member;
pub mod helpers;
pub mod lesson;
pub mod study_group;
pub mod user;

pub use course::create_course;
pub use enrollment::create_enrollment;
pub use group_member::create_group_member;
pub use lesson::create_lesson;
pub use study_group::create_study_group;
pub use user::create_user;
