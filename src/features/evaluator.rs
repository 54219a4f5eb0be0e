use tracing::info;

use crate::core::{Assistant, CompletionClient};
use crate::documents;
use crate::error::NavigatorError;
use crate::ui::Ui;

pub const ACCEPTED_TYPES: [&str; 3] = ["pdf", "jpg", "png"];
pub const IMAGE_UNSUPPORTED: &str = "Image evaluation is not supported yet. Please upload a PDF.";

/// Extract a PDF of questions and answers and have the model grade them.
pub async fn show<C: CompletionClient>(ui: &mut dyn Ui, assistant: &Assistant<C>) -> Result<(), NavigatorError> {
    ui.header("Upload a file for Q&A Evaluation (PDF or Image)");
    let Some(file) = ui.file_uploader("Upload PDF or Image", &ACCEPTED_TYPES)? else {
        return Ok(());
    };

    ui.subheader("Evaluation Results");
    if !file.has_type(&["pdf"]) {
        info!(file = %file.name, "Skipping image evaluation");
        ui.write(IMAGE_UNSUPPORTED);
        return Ok(());
    }

    let text = documents::extract_text(&file.bytes)?;
    let evaluation = assistant.evaluate(&text).await?;
    ui.write(&evaluation);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::mock::{MockClient, MockResponse};
    use crate::clients::openai::models::OpenAIModel;
    use crate::documents::fixtures::pdf_with_pages;
    use crate::ui::ScriptedUi;

    #[tokio::test]
    async fn images_are_accepted_but_not_evaluated() {
        let (client, handle) = MockClient::new();
        let assistant = Assistant::new(client, OpenAIModel::Gpt4o);
        let mut ui = ScriptedUi::new().file("answers.png", &[0x89, b'P', b'N', b'G']);

        show(&mut ui, &assistant).await.unwrap();
        assert_eq!(ui.subheaders(), vec!["Evaluation Results"]);
        assert_eq!(ui.writes(), vec![IMAGE_UNSUPPORTED]);
        assert_eq!(handle.call_count(), 0);
    }

    #[tokio::test]
    async fn pdf_answers_are_sent_to_the_examiner() {
        let (client, handle) = MockClient::with_responses(vec![MockResponse::text("1. Correct.")]);
        let assistant = Assistant::new(client, OpenAIModel::Gpt4o);
        let pdf = pdf_with_pages(&["Q1 2+2? A: 4"]);
        let mut ui = ScriptedUi::new().file("answers.pdf", &pdf);

        show(&mut ui, &assistant).await.unwrap();
        assert_eq!(ui.writes(), vec!["1. Correct."]);
        let call = &handle.calls()[0];
        assert_eq!(call.messages[0].content, "You are an expert examiner.");
        assert!(call.messages[1].content.contains("2+2"));
    }
}
