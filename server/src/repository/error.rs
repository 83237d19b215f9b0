use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Map a `tokio_rusqlite` failure onto a `RepositoryError`.
///
/// - constraint violations → `InvalidData`
/// - `CannotOpen` and closed connections → `ConnectionFailed`
/// - everything else → `QueryFailed`
pub(crate) fn from_sqlite(err: tokio_rusqlite::Error) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, _))
            if sqlite_err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            RepositoryError::InvalidData(err.to_string())
        }
        tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, _))
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::ffi;

    fn sqlite_failure(code: rusqlite::ErrorCode, extended_code: i32) -> tokio_rusqlite::Error {
        let sqlite_err = ffi::Error {
            code,
            extended_code,
        };
        tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, None))
    }

    #[test]
    fn constraint_violation_maps_to_invalid_data() {
        let err = sqlite_failure(
            rusqlite::ErrorCode::ConstraintViolation,
            ffi::SQLITE_CONSTRAINT_NOTNULL,
        );
        assert!(matches!(from_sqlite(err), RepositoryError::InvalidData(_)));
    }

    #[test]
    fn cannot_open_maps_to_connection_failed() {
        let err = sqlite_failure(rusqlite::ErrorCode::CannotOpen, ffi::SQLITE_CANTOPEN);
        assert!(matches!(
            from_sqlite(err),
            RepositoryError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn closed_connection_maps_to_connection_failed() {
        assert_eq!(
            from_sqlite(tokio_rusqlite::Error::ConnectionClosed),
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        );
    }

    #[test]
    fn other_errors_map_to_query_failed() {
        let err = tokio_rusqlite::Error::Other(Box::new(std::io::Error::other("boom")));
        assert!(matches!(from_sqlite(err), RepositoryError::QueryFailed(_)));
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            RepositoryError::QueryFailed("no such table: todos".to_string()).to_string(),
            "Query failed: no such table: todos"
        );
        assert_eq!(
            RepositoryError::ConnectionFailed("timeout".to_string()).to_string(),
            "Connection failed: timeout"
        );
    }
}
