//! Password hashing service exposed over HTTP/JSON and gRPC.
//!
//! Both transports serve the same [`endpoint::Endpoints`], so a password
//! hashed through one validates through the other.

pub mod config;
pub mod domain;
pub mod endpoint;
pub mod infrastructure;
pub mod logging;
pub mod presentation;
pub mod server;
pub mod usecase;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;
