//! Diesel and pool error mapping onto [`RequestStoreError`].

use tracing::debug;

use crate::domain::ports::RequestStoreError;

use super::pool::PoolError;

/// Checkout and build failures mean the database is unreachable.
pub(crate) fn map_pool_error(error: PoolError) -> RequestStoreError {
    RequestStoreError::connection(error.into_message())
}

/// Map Diesel errors, keeping driver detail in debug logs only.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> RequestStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::QueryBuilderError(_) => RequestStoreError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RequestStoreError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            RequestStoreError::query("duplicate identifier")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            RequestStoreError::query("value rejected by schema constraint")
        }
        _ => RequestStoreError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    struct Info;

    impl DatabaseErrorInformation for Info {
        fn message(&self) -> &str {
            "driver detail"
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            None
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            None
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    #[rstest]
    fn closed_connection_is_a_connection_error() {
        let err = map_diesel_error(DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new(Info),
        ));
        assert!(matches!(err, RequestStoreError::Connection { .. }));
    }

    #[rstest]
    #[case(DatabaseErrorKind::UniqueViolation, "duplicate identifier")]
    #[case(DatabaseErrorKind::CheckViolation, "value rejected by schema constraint")]
    #[case(DatabaseErrorKind::SerializationFailure, "database error")]
    fn database_errors_are_query_errors(#[case] kind: DatabaseErrorKind, #[case] message: &str) {
        let err = map_diesel_error(DieselError::DatabaseError(kind, Box::new(Info)));
        assert_eq!(err, RequestStoreError::query(message));
        assert!(!err.to_string().contains("driver detail"));
    }

    #[rstest]
    fn pool_errors_are_connection_errors() {
        let err = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(err, RequestStoreError::connection("timed out"));
    }
}
