use chrono::NaiveDate;
use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};

use super::{Ui, UploadedFile};
use crate::tabular::Table;

/// One scripted widget answer, consumed in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Text(String),
    Number(u32),
    Choice(usize),
    Choices(Vec<String>),
    Date(NaiveDate),
    Press(bool),
    File(Option<UploadedFile>),
    /// Accept the widget's default value.
    Default,
    /// Leave the sidebar, ending the session.
    Quit,
}

/// Everything a page rendered, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Sidebar(String),
    Title(String),
    Header(String),
    Subheader(String),
    Write(String),
    Success(String),
    Warning(String),
    Error(String),
    Table { columns: usize, rows: usize },
    Image { caption: String, path: PathBuf },
}

/// A `Ui` driven by a fixed list of inputs. Records rendered elements and
/// every widget label it was asked for.
#[derive(Debug, Default)]
pub struct ScriptedUi {
    inputs: VecDeque<Input>,
    elements: Vec<Element>,
    prompts: Vec<String>,
}

impl ScriptedUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(mut self, input: Input) -> Self {
        self.inputs.push_back(input);
        self
    }

    pub fn text(self, text: &str) -> Self {
        self.input(Input::Text(text.to_string()))
    }

    pub fn number(self, n: u32) -> Self {
        self.input(Input::Number(n))
    }

    pub fn choice(self, index: usize) -> Self {
        self.input(Input::Choice(index))
    }

    pub fn choices(self, items: &[&str]) -> Self {
        self.input(Input::Choices(items.iter().map(|s| s.to_string()).collect()))
    }

    pub fn date(self, date: NaiveDate) -> Self {
        self.input(Input::Date(date))
    }

    pub fn press(self) -> Self {
        self.input(Input::Press(true))
    }

    pub fn skip(self) -> Self {
        self.input(Input::Press(false))
    }

    pub fn file(self, name: &str, bytes: &[u8]) -> Self {
        self.input(Input::File(Some(UploadedFile::new(name, bytes.to_vec()))))
    }

    pub fn no_file(self) -> Self {
        self.input(Input::File(None))
    }

    pub fn default_value(self) -> Self {
        self.input(Input::Default)
    }

    pub fn quit(self) -> Self {
        self.input(Input::Quit)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Widget labels in the order they were shown.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
        self.prompts.clear();
    }

    fn texts(&self, pick: fn(&Element) -> Option<&String>) -> Vec<&str> {
        self.elements.iter().filter_map(pick).map(String::as_str).collect()
    }

    pub fn writes(&self) -> Vec<&str> {
        self.texts(|e| if let Element::Write(t) = e { Some(t) } else { None })
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.texts(|e| if let Element::Warning(t) = e { Some(t) } else { None })
    }

    pub fn errors(&self) -> Vec<&str> {
        self.texts(|e| if let Element::Error(t) = e { Some(t) } else { None })
    }

    pub fn successes(&self) -> Vec<&str> {
        self.texts(|e| if let Element::Success(t) = e { Some(t) } else { None })
    }

    pub fn subheaders(&self) -> Vec<&str> {
        self.texts(|e| if let Element::Subheader(t) = e { Some(t) } else { None })
    }

    pub fn images(&self) -> Vec<&Path> {
        self.elements
            .iter()
            .filter_map(|e| if let Element::Image { path, .. } = e { Some(path.as_path()) } else { None })
            .collect()
    }

    fn next(&mut self, label: &str) -> io::Result<Input> {
        self.prompts.push(label.to_string());
        self.inputs.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, format!("no scripted input left for '{}'", label))
        })
    }
}

fn mismatch(label: &str, expected: &str, got: &Input) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("'{}' expects {}, script has {:?}", label, expected, got),
    )
}

impl Ui for ScriptedUi {
    fn sidebar(&mut self, title: &str, label: &str, options: &[&str], _current: usize) -> io::Result<Option<usize>> {
        self.elements.push(Element::Sidebar(title.to_string()));
        match self.next(label)? {
            Input::Choice(i) if i < options.len() => Ok(Some(i)),
            Input::Text(t) => match options.iter().position(|o| *o == t) {
                Some(i) => Ok(Some(i)),
                None => Err(mismatch(label, "a menu label", &Input::Text(t))),
            },
            Input::Quit => Ok(None),
            other => Err(mismatch(label, "a menu choice", &other)),
        }
    }

    fn title(&mut self, text: &str) {
        self.elements.push(Element::Title(text.to_string()));
    }

    fn header(&mut self, text: &str) {
        self.elements.push(Element::Header(text.to_string()));
    }

    fn subheader(&mut self, text: &str) {
        self.elements.push(Element::Subheader(text.to_string()));
    }

    fn write(&mut self, text: &str) {
        self.elements.push(Element::Write(text.to_string()));
    }

    fn success(&mut self, text: &str) {
        self.elements.push(Element::Success(text.to_string()));
    }

    fn warning(&mut self, text: &str) {
        self.elements.push(Element::Warning(text.to_string()));
    }

    fn error(&mut self, text: &str) {
        self.elements.push(Element::Error(text.to_string()));
    }

    fn table(&mut self, table: &Table) {
        self.elements.push(Element::Table { columns: table.headers().len(), rows: table.row_count() });
    }

    fn image(&mut self, caption: &str, path: &Path) {
        self.elements.push(Element::Image { caption: caption.to_string(), path: path.to_path_buf() });
    }

    fn text_input(&mut self, label: &str) -> io::Result<String> {
        match self.next(label)? {
            Input::Text(t) => Ok(t),
            Input::Default => Ok(String::new()),
            other => Err(mismatch(label, "text", &other)),
        }
    }

    fn text_area(&mut self, label: &str) -> io::Result<String> {
        self.text_input(label)
    }

    fn slider(&mut self, label: &str, min: u32, max: u32, default: u32) -> io::Result<u32> {
        match self.next(label)? {
            Input::Number(n) => Ok(n.clamp(min, max)),
            Input::Default => Ok(default),
            other => Err(mismatch(label, "a number", &other)),
        }
    }

    fn multiselect(&mut self, label: &str, options: &[String], default: &[String]) -> io::Result<Vec<String>> {
        match self.next(label)? {
            Input::Choices(items) => Ok(items.into_iter().filter(|i| options.contains(i)).collect()),
            Input::Default => Ok(default.to_vec()),
            other => Err(mismatch(label, "a list of choices", &other)),
        }
    }

    fn date_input(&mut self, label: &str) -> io::Result<NaiveDate> {
        match self.next(label)? {
            Input::Date(d) => Ok(d),
            Input::Default => Ok(chrono::Local::now().date_naive()),
            other => Err(mismatch(label, "a date", &other)),
        }
    }

    fn radio(&mut self, label: &str, options: &[&str]) -> io::Result<usize> {
        match self.next(label)? {
            Input::Choice(i) if i < options.len() => Ok(i),
            Input::Text(t) => options
                .iter()
                .position(|o| *o == t)
                .ok_or_else(|| mismatch(label, "one of the options", &Input::Text(t))),
            Input::Default => Ok(0),
            other => Err(mismatch(label, "an option", &other)),
        }
    }

    fn button(&mut self, label: &str) -> io::Result<bool> {
        match self.next(label)? {
            Input::Press(pressed) => Ok(pressed),
            Input::Default => Ok(false),
            other => Err(mismatch(label, "a button press", &other)),
        }
    }

    fn file_uploader(&mut self, label: &str, types: &[&str]) -> io::Result<Option<UploadedFile>> {
        match self.next(label)? {
            Input::File(Some(file)) if file.has_type(types) => Ok(Some(file)),
            Input::File(Some(file)) => Err(mismatch(label, &format!("one of {:?}", types), &Input::File(Some(file)))),
            Input::File(None) | Input::Default => Ok(None),
            other => Err(mismatch(label, "a file", &other)),
        }
    }
}
