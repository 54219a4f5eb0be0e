//! Sidebar menu and routing to feature pages.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{error, info, instrument};

use crate::core::{Assistant, CompletionClient};
use crate::error::NavigatorError;
use crate::features;
use crate::session::Session;
use crate::ui::Ui;

pub const SIDEBAR_TITLE: &str = "Knowledge Navigator";
pub const SIDEBAR_LABEL: &str = "Choose a Feature";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Feature {
    #[default]
    Home,
    McqGenerator,
    PdfQa,
    CsvVisualization,
    ResearchBot,
    QaEvaluator,
    StudyPlan,
    Quiz,
    ConceptMap,
    TopicSummary,
}

impl Feature {
    /// Menu order.
    pub const ALL: [Feature; 10] = [
        Feature::Home,
        Feature::McqGenerator,
        Feature::PdfQa,
        Feature::CsvVisualization,
        Feature::ResearchBot,
        Feature::QaEvaluator,
        Feature::StudyPlan,
        Feature::Quiz,
        Feature::ConceptMap,
        Feature::TopicSummary,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Feature::Home => "Home",
            Feature::McqGenerator => "MCQ Generator",
            Feature::PdfQa => "PDF Q&A System",
            Feature::CsvVisualization => "CSV Visualization",
            Feature::ResearchBot => "Research Bot",
            Feature::QaEvaluator => "Q&A Evaluator",
            Feature::StudyPlan => "Study Plan Generator",
            Feature::Quiz => "Interactive Quiz",
            Feature::ConceptMap => "Concept Map Generator",
            Feature::TopicSummary => "Topic Summary Generator",
        }
    }

    /// Short command-line name.
    pub fn slug(&self) -> &'static str {
        match self {
            Feature::Home => "home",
            Feature::McqGenerator => "mcq",
            Feature::PdfQa => "pdf-qa",
            Feature::CsvVisualization => "csv",
            Feature::ResearchBot => "research",
            Feature::QaEvaluator => "evaluator",
            Feature::StudyPlan => "study-plan",
            Feature::Quiz => "quiz",
            Feature::ConceptMap => "concept-map",
            Feature::TopicSummary => "summary",
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(Feature::label).collect()
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    /// Match a menu label or slug, ignoring case.
    pub fn from_label(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(s) || f.slug().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(Feature::slug).collect();
            format!("Unknown feature: '{}'. Supported: {}", s, known.join(", "))
        })
    }
}

/// Owns the assistant, the output directory and the session, and renders one
/// feature page per visit.
pub struct Navigator<C: CompletionClient> {
    assistant: Assistant<C>,
    output_dir: PathBuf,
    session: Session,
}

impl<C: CompletionClient> Navigator<C> {
    pub fn new(assistant: Assistant<C>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            assistant,
            output_dir: output_dir.into(),
            session: Session::new(),
        }
    }

    pub fn assistant(&self) -> &Assistant<C> {
        &self.assistant
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Render the page for `feature`.
    pub async fn dispatch(&mut self, ui: &mut dyn Ui, feature: Feature) -> Result<(), NavigatorError> {
        match feature {
            Feature::Home => {
                features::home::show(ui);
                Ok(())
            }
            Feature::McqGenerator => features::mcq::show(ui, &self.assistant).await,
            Feature::PdfQa => features::pdf_qa::show(ui, &self.assistant).await,
            Feature::CsvVisualization => features::csv_viz::show(ui, &self.output_dir),
            Feature::ResearchBot => features::research::show(ui, &self.assistant).await,
            Feature::QaEvaluator => features::evaluator::show(ui, &self.assistant).await,
            Feature::StudyPlan => features::study_plan::show(ui),
            Feature::Quiz => features::quiz::show(ui, self.session.quiz_mut()),
            Feature::ConceptMap => features::concept_map::show(ui, &self.output_dir),
            Feature::TopicSummary => features::summary::show(ui, &self.assistant).await,
        }
    }

    /// One request against the session: select `feature`, render its page and
    /// show any failure inline. Only terminal I/O errors escape.
    #[instrument(target = "knowledge_navigator::menu", skip(self, ui, feature), fields(feature = feature.slug()))]
    pub async fn visit(&mut self, ui: &mut dyn Ui, feature: Feature) -> io::Result<()> {
        self.session.select(feature);
        match self.dispatch(ui, feature).await {
            Ok(()) => Ok(()),
            Err(NavigatorError::Io(e)) => Err(e),
            Err(NavigatorError::Validation(message)) | Err(NavigatorError::EmptySelection(message)) => {
                ui.warning(&message);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Feature page failed");
                ui.error(&failure_message(&e));
                Ok(())
            }
        }
    }

    /// Sidebar loop until the user quits.
    pub async fn run(&mut self, ui: &mut dyn Ui) -> io::Result<()> {
        let labels = Feature::labels();
        loop {
            let current = self.session.feature().index();
            let Some(choice) = ui.sidebar(SIDEBAR_TITLE, SIDEBAR_LABEL, &labels, current)? else {
                info!(visits = self.session.visits(), "Leaving Knowledge Navigator");
                return Ok(());
            };
            let feature = Feature::ALL.get(choice).copied().unwrap_or_default();
            self.visit(ui, feature).await?;
        }
    }
}

/// Inline text for a failed page.
pub fn failure_message(err: &NavigatorError) -> String {
    match err {
        NavigatorError::Ai(e) => format!("Error: {}", e),
        NavigatorError::Document(e) => format!("Error: {}", e),
        NavigatorError::Tabular(e) => format!("Error: {}", e),
        NavigatorError::Render(e) => format!("Error: {}", e),
        other => format!("Error: {}", other),
    }
}
