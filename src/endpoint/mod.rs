//! Transport-agnostic endpoints.
//!
//! An [`Endpoint`] turns one vault operation into a plain
//! `request -> Result<response, EndpointError>` function value. Both wire
//! adapters serve the same [`Endpoints`], and the client adapters build one
//! out of outbound calls, so every transport shares a single calling
//! convention.
//!
//! Two error channels:
//! - `Err(EndpointError)`: the request could not be processed at all.
//! - `Ok(response)` with `err` set: the request was processed and the
//!   operation failed.
//!
//! Endpoints take the request alone, with no context argument. A caller
//! cancels by dropping the future; hashing already on the blocking pool
//! still runs to completion.

pub mod ratelimit;

use std::{future::Future, sync::Arc};

use async_trait::async_trait;
use futures_util::{FutureExt, future::BoxFuture};

use self::ratelimit::{Limiter, rate_limit};
use crate::domain::{
    error::{EndpointError, VaultError},
    models::message::{HashRequest, HashResponse, ValidateRequest, ValidateResponse},
    services::vault_service::VaultService,
};

/// A single remotely callable operation.
pub type Endpoint<Req, Resp> =
    Arc<dyn Fn(Req) -> BoxFuture<'static, Result<Resp, EndpointError>> + Send + Sync>;

/// Wraps an endpoint with extra behaviour, e.g. rate limiting.
pub type Middleware<Req, Resp> = Box<dyn Fn(Endpoint<Req, Resp>) -> Endpoint<Req, Resp>>;

/// Build an [`Endpoint`] from an async closure.
pub fn endpoint<Req, Resp, F, Fut>(f: F) -> Endpoint<Req, Resp>
where
    F: Fn(Req) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Resp, EndpointError>> + Send + 'static,
{
    Arc::new(move |request| f(request).boxed())
}

pub fn make_hash_endpoint<S>(service: Arc<S>) -> Endpoint<HashRequest, HashResponse>
where
    S: VaultService + ?Sized + 'static,
{
    endpoint(move |request: HashRequest| {
        let service = Arc::clone(&service);
        async move {
            match service.hash(&request.password).await {
                Ok(hash) => Ok(HashResponse::success(hash)),
                Err(e) => {
                    tracing::warn!(error = %e, "hash failed");
                    Ok(HashResponse::failure(e))
                }
            }
        }
    })
}

pub fn make_validate_endpoint<S>(service: Arc<S>) -> Endpoint<ValidateRequest, ValidateResponse>
where
    S: VaultService + ?Sized + 'static,
{
    endpoint(move |request: ValidateRequest| {
        let service = Arc::clone(&service);
        async move {
            match service.validate(&request.password, &request.hash).await {
                Ok(valid) => Ok(ValidateResponse::success(valid)),
                Err(e) => {
                    tracing::warn!(error = %e, "validate failed");
                    Ok(ValidateResponse::failure(e))
                }
            }
        }
    })
}

/// One endpoint per vault operation.
#[derive(Clone)]
pub struct Endpoints {
    pub hash: Endpoint<HashRequest, HashResponse>,
    pub validate: Endpoint<ValidateRequest, ValidateResponse>,
}

impl Endpoints {
    pub fn new<S>(service: S) -> Self
    where
        S: VaultService + 'static,
    {
        let service = Arc::new(service);
        Self {
            hash: make_hash_endpoint(Arc::clone(&service)),
            validate: make_validate_endpoint(service),
        }
    }

    /// Wrap each endpoint with its own middleware.
    pub fn with<M1, M2>(self, hash: M1, validate: M2) -> Self
    where
        M1: FnOnce(Endpoint<HashRequest, HashResponse>) -> Endpoint<HashRequest, HashResponse>,
        M2: FnOnce(Endpoint<ValidateRequest, ValidateResponse>) -> Endpoint<ValidateRequest, ValidateResponse>,
    {
        Self {
            hash: hash(self.hash),
            validate: validate(self.validate),
        }
    }

    /// Guard both endpoints with one shared token bucket.
    pub fn with_rate_limit(self, limiter: Limiter) -> Self {
        self.with(
            rate_limit::<HashRequest, HashResponse>(Arc::clone(&limiter)),
            rate_limit::<ValidateRequest, ValidateResponse>(limiter),
        )
    }
}

#[async_trait]
impl VaultService for Endpoints {
    async fn hash(&self, password: &str) -> Result<String, VaultError> {
        let request = HashRequest {
            password: password.to_owned(),
        };

        let response = (self.hash)(request).await?;
        match response.err {
            Some(err) if !err.is_empty() => Err(VaultError::Payload(err)),
            _ => Ok(response.hash),
        }
    }

    async fn validate(&self, password: &str, hash: &str) -> Result<bool, VaultError> {
        let request = ValidateRequest {
            password: password.to_owned(),
            hash: hash.to_owned(),
        };

        let response = (self.validate)(request).await?;
        match response.err {
            Some(err) if !err.is_empty() => Err(VaultError::Payload(err)),
            _ => Ok(response.valid),
        }
    }
}
