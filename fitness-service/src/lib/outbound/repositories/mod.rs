pub mod memory;
pub mod simulator;
pub mod user;

pub use memory::InMemorySimulatorRepository;
pub use memory::InMemoryUserRepository;
pub use simulator::SqliteSimulatorRepository;
pub use user::SqliteUserRepository;

use sqlx::error::ErrorKind;

/// Constraint failure reported by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConstraintViolation {
    Unique,
    /// Column named in the failed `NOT NULL` constraint.
    NotNull(String),
}

/// Classify a sqlx error as a constraint violation, if it is one.
pub(crate) fn constraint_violation(err: &sqlx::Error) -> Option<ConstraintViolation> {
    let db_err = err.as_database_error()?;

    match db_err.kind() {
        ErrorKind::UniqueViolation => Some(ConstraintViolation::Unique),
        ErrorKind::NotNullViolation => Some(ConstraintViolation::NotNull(
            not_null_column(db_err.message()).to_string(),
        )),
        _ => None,
    }
}

// SQLite reports "NOT NULL constraint failed: <table>.<column>".
fn not_null_column(message: &str) -> &str {
    message
        .rsplit(&['.', ' '][..])
        .next()
        .filter(|column| !column.is_empty())
        .unwrap_or("unknown")
}
