pub mod chat;
pub mod context;
pub mod error;

pub use chat::{ChatClient, LlmConfig};
pub use context::metrics_to_context;
pub use error::{LlmError, LlmResult};
