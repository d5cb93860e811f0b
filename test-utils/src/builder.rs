use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Course, Lesson};
///
/// let test = TestBuilder::new()
///     .with_table(Course)
///     .with_table(Lesson)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// Store the database in a temporary file instead of memory.
    on_disk: bool,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            on_disk: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for course catalog operations.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - Course
    /// - Lesson
    /// - Enrollment
    /// - Progress
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_course_tables(self) -> Self {
        self.with_table(User)
            .with_table(Course)
            .with_table(Lesson)
            .with_table(Enrollment)
            .with_table(Progress)
    }

    /// Adds all tables required for study group operations.
    ///
    /// Study groups optionally reference a course, so this includes the course tables
    /// followed by StudyGroup and GroupMember.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_group_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_group_tables(self) -> Self {
        self.with_course_tables()
            .with_table(StudyGroup)
            .with_table(GroupMember)
    }

    /// Stores the database in a temporary file with a multi-connection pool.
    ///
    /// Needed by tests that run writes concurrently, since every connection to
    /// `sqlite::memory:` opens its own empty database.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn on_disk(mut self) -> Self {
        self.on_disk = true;
        self
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = if self.on_disk {
            TestContext::on_disk()?
        } else {
            TestContext::new()
        };

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
