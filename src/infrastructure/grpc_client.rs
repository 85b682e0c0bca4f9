//! Remote vault over gRPC.
//!
//! The returned [`Endpoints`] satisfy `VaultService`, so code written against
//! the service works unchanged with a remote vault.

use tonic::{
    codegen::StdError,
    transport::{self, Channel},
};

use crate::{
    domain::{
        error::EndpointError,
        models::message::{HashRequest, ValidateRequest},
    },
    endpoint::{Endpoints, endpoint},
    presentation::grpc::{codec, proto::vault_client::VaultClient},
};

/// Build endpoints that call `vault.Vault` over an existing channel.
pub fn new(channel: Channel) -> Endpoints {
    from_client(VaultClient::new(channel))
}

/// Dial `dst` (e.g. `http://127.0.0.1:8081`) and build endpoints on the connection.
pub async fn connect<D>(dst: D) -> Result<Endpoints, transport::Error>
where
    D: TryInto<transport::Endpoint>,
    D::Error: Into<StdError>,
{
    let client = VaultClient::connect(dst).await?;
    Ok(from_client(client))
}

fn from_client(client: VaultClient<Channel>) -> Endpoints {
    let hash_client = client.clone();
    let hash = endpoint(move |request: HashRequest| {
        let mut client = hash_client.clone();
        async move {
            let response = client.hash(codec::encode_hash_request(request)).await?;
            Ok::<_, EndpointError>(codec::decode_hash_response(response.into_inner()))
        }
    });

    let validate = endpoint(move |request: ValidateRequest| {
        let mut client = client.clone();
        async move {
            let response = client
                .validate(codec::encode_validate_request(request))
                .await?;
            Ok::<_, EndpointError>(codec::decode_validate_response(response.into_inner()))
        }
    });

    Endpoints { hash, validate }
}
