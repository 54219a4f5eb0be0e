use tracing::info;

use crate::core::{Assistant, CompletionClient};
use crate::documents;
use crate::error::NavigatorError;
use crate::ui::Ui;

pub async fn show<C: CompletionClient>(ui: &mut dyn Ui, assistant: &Assistant<C>) -> Result<(), NavigatorError> {
    ui.header("Upload PDF for Q&A Generation");
    let Some(file) = ui.file_uploader("Upload PDF file", &["pdf"])? else {
        return Ok(());
    };

    let text = documents::extract_text(&file.bytes)?;
    info!(file = %file.name, chars = text.len(), "Extracted PDF text");
    ui.subheader("Generated Questions and Answers");
    let qa = assistant.generate_qa(&text).await?;
    ui.write(&qa);
    Ok(())
}
