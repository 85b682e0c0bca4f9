pub mod argon2_password_hasher;
pub mod grpc_client;
pub mod http_client;
