/// Repository errors for domain layer.
/// Absent records are not errors: repositories return `Ok(None)` for them.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.database_error")]
    DatabaseError,
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.corrupted_row")]
    CorruptedRow,
}
