//! Prompt building: every completion is a two-message conversation, a fixed
//! system persona followed by the user instruction with the form input
//! interpolated into it.
//!
//! Builders never validate. Pages check their required fields before asking
//! for a conversation.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
        }
    }
}

/// One `{role, content}` entry as the completion service expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// Ordered message list sent to the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Total characters across all messages, used for logging.
    pub fn char_len(&self) -> usize {
        self.messages.iter().map(|m| m.content.len()).sum()
    }
}

/// Persona plus instruction, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub persona: String,
    pub instruction: String,
}

impl PromptRequest {
    pub fn new(persona: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self { persona: persona.into(), instruction: instruction.into() }
    }

    pub fn build(&self) -> Conversation {
        build(&self.persona, &self.instruction)
    }
}

/// Build the system/user pair for a persona and an instruction.
pub fn build(persona: &str, instruction: &str) -> Conversation {
    Conversation {
        messages: vec![ChatMessage::system(persona), ChatMessage::user(instruction)],
    }
}

/// The completion-backed tasks the navigator offers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Task<'a> {
    Mcq { text: &'a str, count: u32, subject: &'a str },
    PdfQa { text: &'a str },
    Research { query: &'a str },
    Summary { text: &'a str },
    Evaluation { text: &'a str },
}

impl<'a> Task<'a> {
    pub fn name(&self) -> &'static str {
        match self {
            Task::Mcq { .. } => "mcq",
            Task::PdfQa { .. } => "pdf_qa",
            Task::Research { .. } => "research",
            Task::Summary { .. } => "summary",
            Task::Evaluation { .. } => "evaluation",
        }
    }

    pub fn persona(&self) -> &'static str {
        match self {
            Task::Mcq { .. } => "You are an expert MCQ maker.",
            Task::PdfQa { .. } => "You are an expert question generator.",
            Task::Research { .. } => "You are a research assistant.",
            Task::Summary { .. } => "You are an expert summarizer.",
            Task::Evaluation { .. } => "You are an expert examiner.",
        }
    }

    pub fn instruction(&self) -> String {
        match self {
            Task::Mcq { text, count, subject } => {
                format!("Generate {} MCQs on {} based on the following text: {}", count, subject, text)
            }
            Task::PdfQa { text } => format!("Generate Q&A based on the following text: {}", text),
            Task::Research { query } => format!("Answer this research question: {}", query),
            Task::Summary { text } => format!("Summarize the following text: {}", text),
            Task::Evaluation { text } => format!(
                "Evaluate the questions and answers in the following text. For each answer, say whether it is correct and explain briefly: {}",
                text
            ),
        }
    }

    pub fn request(&self) -> PromptRequest {
        PromptRequest::new(self.persona(), self.instruction())
    }

    pub fn conversation(&self) -> Conversation {
        self.request().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_orders_system_before_user() {
        let conversation = build("You are a tutor.", "Explain fractions");
        let messages = conversation.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], ChatMessage::system("You are a tutor."));
        assert_eq!(messages[1], ChatMessage::user("Explain fractions"));
    }

    #[test]
    fn build_does_not_validate_empty_input() {
        let conversation = build("", "");
        assert_eq!(conversation.messages().len(), 2);
        assert_eq!(conversation.char_len(), 0);
    }

    #[test]
    fn mcq_instruction_interpolates_count_subject_and_text() {
        let task = Task::Mcq { text: "Cells divide by mitosis.", count: 5, subject: "Biology" };
        assert_eq!(task.persona(), "You are an expert MCQ maker.");
        assert_eq!(
            task.instruction(),
            "Generate 5 MCQs on Biology based on the following text: Cells divide by mitosis."
        );
    }

    #[test]
    fn research_and_summary_personas() {
        let research = Task::Research { query: "Why is the sky blue?" }.conversation();
        assert_eq!(research.messages()[0].content, "You are a research assistant.");
        assert_eq!(research.messages()[1].content, "Answer this research question: Why is the sky blue?");

        let summary = Task::Summary { text: "Long text" }.conversation();
        assert_eq!(summary.messages()[0].content, "You are an expert summarizer.");
        assert_eq!(summary.messages()[1].content, "Summarize the following text: Long text");
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_value(ChatMessage::system("x")).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "x");
    }
}
