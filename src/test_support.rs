//! Shared fixtures for unit and cross-transport tests.

use std::net::SocketAddr;

use crate::{
    domain::{
        error::DomainError, models::credential::HashedPassword,
        services::password_service::PasswordHasher,
    },
    endpoint::Endpoints,
    server,
};

/// Hasher whose primitive always fails, like a rejected cost parameter.
#[derive(Clone)]
pub struct FailingPasswordHasher;

pub const FAILURE_MESSAGE: &str = "hashing failed: invalid cost";

impl PasswordHasher for FailingPasswordHasher {
    fn hash(&self, _plain_password: &str) -> Result<HashedPassword, DomainError> {
        Err(DomainError::HashingFailed("invalid cost".to_string()))
    }

    fn verify(&self, _plain_password: &str, _hashed_password: &HashedPassword) -> bool {
        false
    }
}

fn loopback() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 0))
}

/// Serve HTTP on an ephemeral port; returns the base url.
pub async fn spawn_http(endpoints: Endpoints) -> String {
    let listener = server::bind(loopback()).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(server::serve_http(listener, endpoints));
    format!("http://{addr}")
}

/// Serve gRPC on an ephemeral port; returns the dial uri.
pub async fn spawn_grpc(endpoints: Endpoints) -> String {
    let listener = server::bind(loopback()).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(server::serve_grpc(listener, endpoints));
    format!("http://{addr}")
}
