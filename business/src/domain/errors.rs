/// Storage errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.serialization")]
    Serialization,
    #[error("repository.database_error")]
    DatabaseError,
}

/// Errors raised by the remote read services (stock and catalog).
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("service.not_found")]
    NotFound,
    #[error("service.transport")]
    Transport,
    #[error("service.malformed_response")]
    MalformedResponse,
}
