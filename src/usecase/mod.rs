pub mod vault_usecase;
