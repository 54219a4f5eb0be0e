use crate::core::{Assistant, CompletionClient};
use crate::error::NavigatorError;
use crate::ui::Ui;

pub async fn show<C: CompletionClient>(ui: &mut dyn Ui, assistant: &Assistant<C>) -> Result<(), NavigatorError> {
    ui.header("Research Bot");
    let query = ui.text_input("Enter your research question:")?;
    if !ui.button("Get Research Answer")? || query.trim().is_empty() {
        return Ok(());
    }

    let answer = assistant.research(query.trim()).await?;
    ui.subheader("Research Bot Answer");
    ui.write(&answer);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::mock::{MockClient, MockResponse};
    use crate::clients::openai::models::OpenAIModel;
    use crate::error::AIError;
    use crate::ui::ScriptedUi;

    #[tokio::test]
    async fn empty_question_renders_nothing_more() {
        let (client, handle) = MockClient::new();
        let assistant = Assistant::new(client, OpenAIModel::Gpt4o);
        let mut ui = ScriptedUi::new().text("   ").press();

        show(&mut ui, &assistant).await.unwrap();
        assert_eq!(ui.elements().len(), 1);
        assert_eq!(handle.call_count(), 0);
    }

    #[tokio::test]
    async fn answer_is_shown_under_subheader() {
        let (client, handle) = MockClient::with_responses(vec![MockResponse::text("Because of Rayleigh scattering.")]);
        let assistant = Assistant::new(client, OpenAIModel::Gpt4o);
        let mut ui = ScriptedUi::new().text("Why is the sky blue?").press();

        show(&mut ui, &assistant).await.unwrap();
        assert_eq!(ui.subheaders(), vec!["Research Bot Answer"]);
        assert_eq!(ui.writes(), vec!["Because of Rayleigh scattering."]);
        assert_eq!(handle.calls()[0].messages[1].content, "Answer this research question: Why is the sky blue?");
    }

    #[tokio::test]
    async fn remote_failure_is_returned() {
        let (client, _handle) = MockClient::with_responses(vec![MockResponse::Authentication]);
        let assistant = Assistant::new(client, OpenAIModel::Gpt4o);
        let mut ui = ScriptedUi::new().text("q").press();

        let err = show(&mut ui, &assistant).await.unwrap_err();
        assert!(matches!(err, NavigatorError::Ai(AIError::OpenAI(_))));
        assert!(ui.subheaders().is_empty());
    }
}
