pub mod password_service;
pub mod vault_service;
