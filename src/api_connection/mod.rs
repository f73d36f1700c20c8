pub mod connection;
pub mod endpoints;

pub use connection::{GenAiClient, GenAiError};
pub use endpoints::{ChatMessage, ChatRole, GenerateContentResponse};
