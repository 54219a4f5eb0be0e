//! The page surface feature handlers render against.
//!
//! Output methods mirror page elements (titles, text, alerts, tables,
//! images); input methods mirror form widgets and return what the user
//! entered. Input errors mean the user or the terminal went away.

use chrono::NaiveDate;
use std::io;
use std::path::{Path, PathBuf};

use crate::tabular::Table;

pub mod script;
pub mod terminal;

pub use script::{Element, Input, ScriptedUi};
pub use terminal::TerminalUi;

/// A file handed to an uploader widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self { name: name.into(), bytes: bytes.into() }
    }

    /// Lower-cased extension without the dot.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
    }

    pub fn has_type(&self, types: &[&str]) -> bool {
        self.extension()
            .map(|ext| types.iter().any(|t| t.eq_ignore_ascii_case(&ext)))
            .unwrap_or(false)
    }
}

pub trait Ui {
    /// Sidebar title plus single-select menu. `None` ends the session.
    fn sidebar(&mut self, title: &str, label: &str, options: &[&str], current: usize) -> io::Result<Option<usize>>;

    fn title(&mut self, text: &str);
    fn header(&mut self, text: &str);
    fn subheader(&mut self, text: &str);
    fn write(&mut self, text: &str);
    fn success(&mut self, text: &str);
    fn warning(&mut self, text: &str);
    fn error(&mut self, text: &str);
    fn table(&mut self, table: &Table);
    fn image(&mut self, caption: &str, path: &Path);

    fn text_input(&mut self, label: &str) -> io::Result<String>;
    fn text_area(&mut self, label: &str) -> io::Result<String>;
    fn slider(&mut self, label: &str, min: u32, max: u32, default: u32) -> io::Result<u32>;
    fn multiselect(&mut self, label: &str, options: &[String], default: &[String]) -> io::Result<Vec<String>>;
    fn date_input(&mut self, label: &str) -> io::Result<NaiveDate>;
    /// Index of the chosen option; the first option is preselected.
    fn radio(&mut self, label: &str, options: &[&str]) -> io::Result<usize>;
    fn button(&mut self, label: &str) -> io::Result<bool>;
    fn file_uploader(&mut self, label: &str, types: &[&str]) -> io::Result<Option<UploadedFile>>;
}

/// File name under the output directory for a rendered artifact.
pub fn artifact_path(output_dir: &Path, stem: &str, extension: &str) -> PathBuf {
    let slug: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    let stamp = chrono::Utc::now().format("%Y%m%d_%H%M%S_%3f");
    let slug = if slug.is_empty() { "untitled".to_string() } else { slug };
    output_dir.join(format!("{}_{}.{}", slug, stamp, extension))
}
