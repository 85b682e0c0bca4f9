pub mod credential;
pub mod message;
