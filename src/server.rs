//! Listener wiring for both transports.

use std::{io, net::SocketAddr};

use thiserror::Error;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tracing::info;

use crate::{
    config::Config,
    endpoint::Endpoints,
    presentation::{grpc::server::GrpcVault, handlers::http_handler::create_vault_router},
};

/// Why the process stopped serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("http server: {0}")]
    Http(#[source] io::Error),

    #[error("grpc server: {0}")]
    Grpc(#[from] tonic::transport::Error),

    #[error("failed to listen for signals: {0}")]
    SignalHandler(#[source] io::Error),

    #[error("{0} listener closed")]
    Closed(&'static str),

    #[error("received {0}")]
    Terminated(&'static str),
}

pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve `/hash` and `/validate` until the listener fails.
pub async fn serve_http(listener: TcpListener, endpoints: Endpoints) -> Result<(), ServerError> {
    axum::serve(listener, create_vault_router(endpoints))
        .await
        .map_err(ServerError::Http)
}

/// Serve `vault.Vault` until the listener fails.
pub async fn serve_grpc(listener: TcpListener, endpoints: Endpoints) -> Result<(), ServerError> {
    tonic::transport::Server::builder()
        .add_service(GrpcVault::new(endpoints).into_service())
        .serve_with_incoming(TcpListenerStream::new(listener))
        .await?;
    Ok(())
}

/// Resolves on SIGINT or SIGTERM with the signal's name.
async fn termination_signal() -> Result<&'static str, ServerError> {
    let interrupt = async { tokio::signal::ctrl_c().await.map(|()| "SIGINT") };

    #[cfg(unix)]
    let terminate = async {
        let mut signal = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
        signal.recv().await;
        Ok::<_, io::Error>("SIGTERM")
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<io::Result<&'static str>>();

    let received = tokio::select! {
        name = interrupt => name,
        name = terminate => name,
    };
    received.map_err(ServerError::SignalHandler)
}

/// Run both listeners until the first of them fails or a termination signal
/// arrives. In-flight requests are not drained.
pub async fn run(config: &Config, endpoints: Endpoints) -> ServerError {
    let http_listener = match bind(config.http_addr).await {
        Ok(listener) => listener,
        Err(e) => return e,
    };
    let grpc_listener = match bind(config.grpc_addr).await {
        Ok(listener) => listener,
        Err(e) => return e,
    };

    info!(addr = %config.http_addr, "http listening");
    info!(addr = %config.grpc_addr, "grpc listening");

    tokio::select! {
        result = serve_http(http_listener, endpoints.clone()) => {
            result.err().unwrap_or(ServerError::Closed("http"))
        }
        result = serve_grpc(grpc_listener, endpoints) => {
            result.err().unwrap_or(ServerError::Closed("grpc"))
        }
        signal = termination_signal() => match signal {
            Ok(name) => ServerError::Terminated(name),
            Err(e) => e,
        },
    }
}
