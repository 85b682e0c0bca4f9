pub mod grpc;
pub mod handlers;
