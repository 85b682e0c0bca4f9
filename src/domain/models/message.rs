//! Request and response values shared by every transport.
//!
//! The JSON field names are the HTTP wire format; the gRPC codec maps the
//! same fields one-to-one.

use serde::{Deserialize, Serialize};

/// json for hash request
///
/// Absent fields decode as empty strings, matching proto3 on the gRPC side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashRequest {
    pub password: String,
}

/// json for hash response
///
/// `err` is only present when hashing failed, in which case `hash` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashResponse {
    #[serde(default)]
    pub hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,
}

impl HashResponse {
    pub fn success(hash: String) -> Self {
        Self { hash, err: None }
    }

    pub fn failure(err: impl ToString) -> Self {
        Self {
            hash: String::new(),
            err: Some(err.to_string()),
        }
    }
}

/// json for validate request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateRequest {
    pub password: String,
    pub hash: String,
}

/// json for validate response
///
/// A wrong password is `valid: false` without `err`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateResponse {
    #[serde(default)]
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,
}

impl ValidateResponse {
    pub fn success(valid: bool) -> Self {
        Self { valid, err: None }
    }

    pub fn failure(err: impl ToString) -> Self {
        Self {
            valid: false,
            err: Some(err.to_string()),
        }
    }
}
