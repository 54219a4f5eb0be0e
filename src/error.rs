use thiserror::Error;

/// Everything a feature page can fail with.
///
/// Remote and file failures are caught by the page that triggered them and
/// rendered inline; only `Io` (the terminal itself going away) ends the app.
#[derive(Error, Debug)]
pub enum NavigatorError {
    #[error("OpenAI API key not found. Please check the .env file.")]
    MissingCredential,
    #[error("AI error: {0}")]
    Ai(#[from] AIError),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    EmptySelection(String),
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),
    #[error("CSV error: {0}")]
    Tabular(#[from] TabularError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum AIError {
    #[error("OpenAI API error: {0}")]
    OpenAI(#[from] OpenAIError),
    #[error("Mock error: {0}")]
    Mock(String),
}

impl AIError {
    /// Rate limits and transport failures may succeed on a later attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AIError::OpenAI(OpenAIError::RateLimit) | AIError::OpenAI(OpenAIError::Http(_))
        )
    }
}

#[derive(Error, Debug)]
pub enum OpenAIError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("API error: {0}")]
    Api(String),
    #[error("Rate limit exceeded")]
    RateLimit,
    #[error("Authentication failed")]
    Authentication,
}

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("could not read PDF: {0}")]
    Parse(String),
}

#[derive(Error, Debug)]
pub enum TabularError {
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("unknown column '{0}'")]
    UnknownColumn(String),
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("drawing failed: {0}")]
    Drawing(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
