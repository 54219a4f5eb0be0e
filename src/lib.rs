pub mod chart;
pub mod clients;
pub mod concept_map;
pub mod config;
pub mod core;
pub mod documents;
pub mod error;
pub mod features;
pub mod interceptors;
pub mod menu;
pub mod prompts;
pub mod quiz;
pub mod session;
pub mod study_plan;
pub mod tabular;
pub mod ui;

// Convenient re-exports
pub use crate::core::{Assistant, CompletionClient, RetryConfig};
pub use config::NavigatorConfig;
pub use error::{AIError, NavigatorError};
pub use menu::{Feature, Navigator};
pub use session::Session;
pub use ui::{ScriptedUi, TerminalUi, Ui};
