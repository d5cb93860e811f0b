use sea_orm::{DbErr, SqlErr};

/// Returns true when the error is a unique or primary key constraint violation.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
