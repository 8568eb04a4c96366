use thiserror::Error;

/// Client-supplied data violated a field rule
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,
}

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database error: {operation} failed: {source}")]
    Operation {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },
}

/// Internal error taxonomy
///
/// These never cross the HTTP boundary directly; the API error layer
/// translates them into status codes and wire payloads.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> Self {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }
}
