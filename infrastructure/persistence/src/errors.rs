use business::domain::errors::RepositoryError;

/// Maps a failed SELECT to the domain error.
pub(crate) fn read_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            tracing::error!(error = %err, "Row could not be decoded");
            RepositoryError::CorruptedRow
        }
        other => {
            tracing::error!(error = %other, "Query failed");
            RepositoryError::DatabaseError
        }
    }
}

/// Maps a failed INSERT/UPDATE/DELETE to the domain error.
pub(crate) fn write_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %err, "Write failed");
    RepositoryError::Persistence
}
