//! Cross-transport behaviour over real listeners.

use std::num::NonZeroU32;

use rstest::*;
use tonic::{Code, transport::Channel};

use crate::{
    domain::{
        error::{EndpointError, VaultError},
        models::{
            credential::HashedPassword,
            message::{HashRequest, HashResponse, ValidateRequest, ValidateResponse},
        },
        services::{password_service::PasswordHasher, vault_service::VaultService},
    },
    endpoint::{Endpoints, ratelimit::token_bucket},
    infrastructure::{
        argon2_password_hasher::Argon2PasswordHasher, grpc_client, http_client,
    },
    test_support::{FAILURE_MESSAGE, FailingPasswordHasher, spawn_grpc, spawn_http},
    usecase::vault_usecase::VaultUsecase,
};

struct Clients {
    http: Endpoints,
    grpc: Endpoints,
}

/// One vault served over both transports, like `vaultd` does.
async fn serve(endpoints: Endpoints) -> Clients {
    let http_url = spawn_http(endpoints.clone()).await;
    let grpc_uri = spawn_grpc(endpoints).await;

    Clients {
        http: http_client::new(&http_url),
        grpc: grpc_client::connect(grpc_uri).await.unwrap(),
    }
}

#[fixture]
async fn clients() -> Clients {
    serve(Endpoints::new(VaultUsecase::new(Argon2PasswordHasher::new()))).await
}

#[rstest]
#[tokio::test]
async fn test_hash_over_http_validate_over_grpc(#[future] clients: Clients) {
    let clients = clients.await;

    let hash = clients.http.hash("correct horse").await.unwrap();

    assert!(clients.grpc.validate("correct horse", &hash).await.unwrap());
    assert!(!clients.grpc.validate("wrong horse", &hash).await.unwrap());
}

#[rstest]
#[tokio::test]
async fn test_hash_over_grpc_validate_over_http(#[future] clients: Clients) {
    let clients = clients.await;

    let hash = clients.grpc.hash("correct horse").await.unwrap();

    assert!(clients.http.validate("correct horse", &hash).await.unwrap());
    assert!(!clients.http.validate("wrong horse", &hash).await.unwrap());
}

#[rstest]
#[tokio::test]
async fn test_malformed_hash_is_invalid_on_both(#[future] clients: Clients) {
    let clients = clients.await;

    assert!(!clients.http.validate("pw", "not-a-hash").await.unwrap());
    assert!(!clients.grpc.validate("pw", "not-a-hash").await.unwrap());
}

#[tokio::test]
async fn test_missing_fields_read_as_empty_on_both() {
    let endpoints = Endpoints::new(VaultUsecase::new(Argon2PasswordHasher::new()));
    let http_url = spawn_http(endpoints.clone()).await;
    let grpc_uri = spawn_grpc(endpoints).await;

    let http = reqwest::Client::new();
    let channel = Channel::from_shared(grpc_uri).unwrap().connect().await.unwrap();
    let grpc = grpc_client::new(channel);

    // proto3 has no "absent" for strings, so gRPC sends the empty value
    let validated_over_http: ValidateResponse = http
        .post(format!("{http_url}/validate"))
        .body(r#"{"password":"x"}"#)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let validated_over_grpc = (grpc.validate)(ValidateRequest {
        password: "x".to_string(),
        hash: String::new(),
    })
    .await
    .unwrap();
    assert_eq!(validated_over_http, validated_over_grpc);
    assert_eq!(validated_over_http, ValidateResponse::success(false));

    let hashed_over_http: HashResponse = http
        .post(format!("{http_url}/hash"))
        .body("{}")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let hashed_over_grpc = (grpc.hash)(HashRequest::default()).await.unwrap();
    for hashed in [hashed_over_http, hashed_over_grpc] {
        assert!(hashed.err.is_none());
        assert!(Argon2PasswordHasher::new().verify("", &HashedPassword::from(hashed.hash)));
    }
}

#[tokio::test]
async fn test_domain_failure_reaches_clients_as_error() {
    let clients = serve(Endpoints::new(VaultUsecase::new(FailingPasswordHasher))).await;

    for client in [&clients.http, &clients.grpc] {
        match client.hash("pw").await {
            Err(VaultError::Payload(message)) => assert_eq!(message, FAILURE_MESSAGE),
            other => panic!("expected payload error, got {other:?}"),
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_callers_over_both_transports() {
    let clients = serve(Endpoints::new(VaultUsecase::new(Argon2PasswordHasher::new()))).await;

    let tasks: Vec<_> = (0..12)
        .map(|i| {
            // alternate the transport used for hashing and validating
            let (hasher, validator) = if i % 2 == 0 {
                (clients.http.clone(), clients.grpc.clone())
            } else {
                (clients.grpc.clone(), clients.http.clone())
            };
            tokio::spawn(async move {
                let password = format!("password-{i}");
                let hash = hasher.hash(&password).await.unwrap();
                assert!(validator.validate(&password, &hash).await.unwrap());
                assert!(!validator.validate("someone else", &hash).await.unwrap());
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap();
    }
}

#[tokio::test]
async fn test_rate_limit_is_a_transport_error() {
    let limiter = token_bucket(NonZeroU32::new(1).unwrap(), NonZeroU32::new(1).unwrap());
    let endpoints =
        Endpoints::new(VaultUsecase::new(Argon2PasswordHasher::new())).with_rate_limit(limiter);
    let clients = serve(endpoints).await;

    // the only token goes to the first call
    assert!(!clients.http.validate("pw", "hash").await.unwrap());

    assert!(matches!(
        clients.http.validate("pw", "hash").await,
        Err(VaultError::Endpoint(EndpointError::Limited))
    ));
    match clients.grpc.validate("pw", "hash").await {
        Err(VaultError::Endpoint(EndpointError::Rpc(status))) => {
            assert_eq!(status.code(), Code::ResourceExhausted)
        }
        other => panic!("expected rpc error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_http_vault_is_a_transport_error() {
    // bind then drop to get a port nobody listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = http_client::new(&format!("http://{addr}"));
    assert!(matches!(
        client.hash("pw").await,
        Err(VaultError::Endpoint(EndpointError::Http(_)))
    ));
}
