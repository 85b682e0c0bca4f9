use thiserror::Error;

/// Failure of the hashing primitive itself.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("hashing failed: {0}")]
    HashingFailed(String),

    #[error("hashing worker failed: {0}")]
    WorkerFailed(String),
}

/// The request could not be processed at all.
///
/// Never carries a domain failure; those travel inside the response payload.
#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("rate limit exceeded")]
    Limited,

    #[error("rpc error: {0}")]
    Rpc(#[from] tonic::Status),

    #[error("http error: {0}")]
    Http(String),
}

/// Error of the [`VaultService`](crate::domain::services::vault_service::VaultService) contract.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Endpoint(#[from] EndpointError),

    /// The call was processed and its response carried this failure in `err`,
    /// whether the endpoints are local or behind a transport.
    #[error("{0}")]
    Payload(String),
}
