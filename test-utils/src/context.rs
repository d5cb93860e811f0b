use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
};
use tempfile::TempDir;

use crate::error::TestError;

/// Test context containing the database connection for a single test.
///
/// Provides an in-memory SQLite database connection for isolated unit and integration
/// testing. The database is created lazily on first access and persists for the lifetime
/// of the test context.
///
/// A context created with `on_disk()` stores the database in a temporary directory
/// instead, so its pool can hold several connections that contend for SQLite's write
/// lock the way a deployed server does.
pub struct TestContext {
    /// Optional database connection to in-memory SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called.
    pub db: Option<DatabaseConnection>,
    /// Directory holding the database file; removed when the context is dropped.
    dir: Option<TempDir>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Creates a new empty test context.
    ///
    /// # Returns
    /// - New `TestContext` instance with no database connection
    pub fn new() -> Self {
        Self { db: None, dir: None }
    }

    /// Creates a test context backed by a database file in a fresh temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context whose database is created on first access
    /// - `Err(TestError::Io)` - Failed to create the temporary directory
    pub fn on_disk() -> Result<Self, TestError> {
        Ok(Self {
            db: None,
            dir: Some(TempDir::new()?),
        })
    }

    /// Gets or creates the SQLite database connection.
    ///
    /// Returns a reference to the existing database connection if one exists, otherwise
    /// connects to a new in-memory database (or the temporary file of an `on_disk()`
    /// context) and stores the connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to the SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = match &self.dir {
                    Some(dir) => {
                        let url = format!(
                            "sqlite://{}?mode=rwc",
                            dir.path().join("test.db").display()
                        );
                        let mut opt = ConnectOptions::new(url);
                        opt.max_connections(8).sqlx_logging(false);

                        Database::connect(opt).await?
                    }
                    None => Database::connect("sqlite::memory:").await?,
                };

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Typically called internally by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements to execute in order
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}
