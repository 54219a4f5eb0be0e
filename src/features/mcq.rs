use tracing::debug;

use crate::core::{Assistant, CompletionClient};
use crate::error::NavigatorError;
use crate::ui::Ui;

pub const MIN_QUESTIONS: u32 = 1;
pub const MAX_QUESTIONS: u32 = 10;
pub const DEFAULT_QUESTIONS: u32 = 5;

pub async fn show<C: CompletionClient>(ui: &mut dyn Ui, assistant: &Assistant<C>) -> Result<(), NavigatorError> {
    ui.header("Generate MCQs");
    let text = ui.text_area("Enter text for MCQ generation:")?;
    let count = ui.slider("Number of MCQs", MIN_QUESTIONS, MAX_QUESTIONS, DEFAULT_QUESTIONS)?;
    let subject = ui.text_input("Subject")?;
    if !ui.button("Generate MCQs")? {
        return Ok(());
    }

    if text.trim().is_empty() || subject.trim().is_empty() {
        debug!("MCQ form incomplete");
        ui.warning("Please enter text and subject.");
        return Ok(());
    }

    let mcqs = assistant.generate_mcqs(&text, count, subject.trim()).await?;
    ui.subheader("Generated MCQs");
    ui.write(&mcqs);
    Ok(())
}
