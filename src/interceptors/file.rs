use super::Interceptor;
use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::prompts::Conversation;

/// Writes each completion as a Markdown transcript into `base_path`.
#[derive(Debug)]
pub struct FileInterceptor {
    base_path: PathBuf,
}

impl FileInterceptor {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

fn transcript(task: &str, conversation: &Conversation, response: &str) -> String {
    let mut content = format!("# Task: {}\n\n", task);
    for message in conversation.messages() {
        content.push_str(&format!("## {}\n\n{}\n\n", message.role, message.content));
    }
    content.push_str(&format!("## response\n\n{}\n", response));
    content
}

#[async_trait]
impl Interceptor for FileInterceptor {
    async fn save(&self, task: &str, conversation: &Conversation, response: &str) -> std::io::Result<()> {
        let timestamp = Utc::now();
        let filename = format!("{}_{}.md", task, timestamp.format("%Y%m%d_%H%M%S_%3f"));
        let file_path = self.base_path.join(filename);

        fs::create_dir_all(&self.base_path).await?;

        let mut file = fs::File::create(&file_path).await?;
        file.write_all(transcript(task, conversation, response).as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }
}
