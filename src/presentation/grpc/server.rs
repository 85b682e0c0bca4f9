use tonic::{Request, Response, Status};

use super::{
    codec,
    proto::{self, vault_server},
};
use crate::{domain::error::EndpointError, endpoint::Endpoints};

/// gRPC face of the vault: decode, call the endpoint, encode.
#[derive(Clone)]
pub struct GrpcVault {
    endpoints: Endpoints,
}

impl GrpcVault {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    pub fn into_service(self) -> vault_server::VaultServer<Self> {
        vault_server::VaultServer::new(self)
    }
}

pub fn status_from_endpoint_error(error: EndpointError) -> Status {
    match error {
        EndpointError::Limited => Status::resource_exhausted("rate limit exceeded"),
        EndpointError::Rpc(status) => status,
        EndpointError::Http(message) => Status::internal(message),
    }
}

#[tonic::async_trait]
impl vault_server::Vault for GrpcVault {
    async fn hash(
        &self,
        request: Request<proto::HashRequest>,
    ) -> Result<Response<proto::HashResponse>, Status> {
        let request = codec::decode_hash_request(request.into_inner());
        let response = (self.endpoints.hash)(request)
            .await
            .map_err(status_from_endpoint_error)?;
        Ok(Response::new(codec::encode_hash_response(response)))
    }

    async fn validate(
        &self,
        request: Request<proto::ValidateRequest>,
    ) -> Result<Response<proto::ValidateResponse>, Status> {
        let request = codec::decode_validate_request(request.into_inner());
        let response = (self.endpoints.validate)(request)
            .await
            .map_err(status_from_endpoint_error)?;
        Ok(Response::new(codec::encode_validate_response(response)))
    }
}
