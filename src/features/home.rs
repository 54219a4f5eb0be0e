use crate::config::NavigatorConfig;
use crate::error::NavigatorError;
use crate::ui::Ui;

pub const TITLE: &str = "Welcome to Knowledge Navigator";

pub const OVERVIEW: &str = "Knowledge Navigator is your AI-powered educational assistant! It provides a range of tools for both students and teachers, \
including MCQ generation, PDF-based Q&A generation, CSV data visualization, and personalized study plans.
Here's what you can do with Knowledge Navigator:
- Generate MCQs from any text for effective revision.
- Upload PDFs and get automated Q&A.
- Visualize CSV data files easily.
- Use the Research Bot to get answers to your academic queries.
- Create personalized study plans and take interactive quizzes.";

pub const FOOTER: &str = "Navigate to different features using the sidebar to explore the various functionalities.";

pub fn show(ui: &mut dyn Ui) {
    ui.title(TITLE);
    ui.write(OVERVIEW);
    ui.write(FOOTER);
}

/// Shown once before the menu when no API key was found. Pages still open.
pub fn startup_notice(ui: &mut dyn Ui, config: &NavigatorConfig) {
    if !config.has_credential() {
        ui.error(&NavigatorError::MissingCredential.to_string());
    }
}
