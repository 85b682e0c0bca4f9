//! Protobuf messages of the `vault.Vault` service (`proto/vault.proto`) and
//! the generated client/server stubs.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HashRequest {
    #[prost(string, tag = "1")]
    pub password: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HashResponse {
    #[prost(string, tag = "1")]
    pub hash: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub err: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValidateRequest {
    #[prost(string, tag = "1")]
    pub password: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub hash: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValidateResponse {
    #[prost(bool, tag = "1")]
    pub valid: bool,
    #[prost(string, tag = "2")]
    pub err: ::prost::alloc::string::String,
}

include!(concat!(env!("OUT_DIR"), "/vault.Vault.rs"));
