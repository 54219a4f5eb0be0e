use crate::core::{Assistant, CompletionClient};
use crate::error::NavigatorError;
use crate::ui::Ui;

pub async fn show<C: CompletionClient>(ui: &mut dyn Ui, assistant: &Assistant<C>) -> Result<(), NavigatorError> {
    ui.title("Topic Summary Generator");
    let text = ui.text_area("Enter text for summary")?;
    if !ui.button("Generate Summary")? || text.trim().is_empty() {
        return Ok(());
    }

    let summary = assistant.summarize(&text).await?;
    ui.write(&summary);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::mock::{MockClient, MockResponse};
    use crate::clients::openai::models::OpenAIModel;
    use crate::ui::ScriptedUi;

    #[tokio::test]
    async fn summary_is_written_below_the_form() {
        let (client, handle) = MockClient::with_responses(vec![MockResponse::text("Short version.")]);
        let assistant = Assistant::new(client, OpenAIModel::Gpt4o);
        let mut ui = ScriptedUi::new().text("A very long text.").press();

        show(&mut ui, &assistant).await.unwrap();
        assert_eq!(ui.writes(), vec!["Short version."]);
        assert_eq!(handle.calls()[0].messages[0].content, "You are an expert summarizer.");
    }

    #[tokio::test]
    async fn empty_text_makes_no_call() {
        let (client, handle) = MockClient::new();
        let assistant = Assistant::new(client, OpenAIModel::Gpt4o);
        let mut ui = ScriptedUi::new().text("").press();

        show(&mut ui, &assistant).await.unwrap();
        assert_eq!(ui.elements().len(), 1);
        assert_eq!(handle.call_count(), 0);
    }
}
