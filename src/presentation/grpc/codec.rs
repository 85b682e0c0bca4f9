//! Field-for-field mapping between the protobuf messages and the shared
//! request/response values. An empty protobuf `err` is the absent error.
//!
//! The server decodes requests and encodes responses; the client does the
//! opposite with the same pairs.

use super::proto;
use crate::domain::models::message::{
    HashRequest, HashResponse, ValidateRequest, ValidateResponse,
};

fn encode_err(err: Option<String>) -> String {
    err.unwrap_or_default()
}

fn decode_err(err: String) -> Option<String> {
    (!err.is_empty()).then_some(err)
}

pub fn encode_hash_request(request: HashRequest) -> proto::HashRequest {
    proto::HashRequest {
        password: request.password,
    }
}

pub fn decode_hash_request(request: proto::HashRequest) -> HashRequest {
    HashRequest {
        password: request.password,
    }
}

pub fn encode_hash_response(response: HashResponse) -> proto::HashResponse {
    proto::HashResponse {
        hash: response.hash,
        err: encode_err(response.err),
    }
}

pub fn decode_hash_response(response: proto::HashResponse) -> HashResponse {
    HashResponse {
        hash: response.hash,
        err: decode_err(response.err),
    }
}

pub fn encode_validate_request(request: ValidateRequest) -> proto::ValidateRequest {
    proto::ValidateRequest {
        password: request.password,
        hash: request.hash,
    }
}

pub fn decode_validate_request(request: proto::ValidateRequest) -> ValidateRequest {
    ValidateRequest {
        password: request.password,
        hash: request.hash,
    }
}

pub fn encode_validate_response(response: ValidateResponse) -> proto::ValidateResponse {
    proto::ValidateResponse {
        valid: response.valid,
        err: encode_err(response.err),
    }
}

pub fn decode_validate_response(response: proto::ValidateResponse) -> ValidateResponse {
    ValidateResponse {
        valid: response.valid,
        err: decode_err(response.err),
    }
}
