use async_trait::async_trait;
use std::fmt::Debug;

use crate::prompts::Conversation;

/// Observes every successful completion.
#[async_trait]
pub trait Interceptor: Send + Sync + Debug {
    async fn save(&self, task: &str, conversation: &Conversation, response: &str) -> std::io::Result<()>;
}

pub mod file;
pub use file::FileInterceptor;
