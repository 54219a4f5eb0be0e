use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent},
    style::Stylize,
    terminal,
};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

use super::{Ui, UploadedFile};
use crate::tabular::Table;

const PREVIEW_ROWS: usize = 20;

/// Interactive `Ui` over stdin/stdout.
#[derive(Debug, Default)]
pub struct TerminalUi;

impl TerminalUi {
    pub fn new() -> Self {
        Self
    }

    fn prompt(&self, label: &str) -> io::Result<String> {
        print!("{} ", format!("{}:", label).bold());
        io::stdout().flush()?;
        read_line()
    }

    /// Attempt to read a single keystroke
    fn read_single_key() -> io::Result<KeyCode> {
        // Enable raw mode temporarily
        terminal::enable_raw_mode()?;

        let result = (|| {
            if event::poll(Duration::from_secs(300))? {
                if let Event::Key(KeyEvent { code, .. }) = event::read()? {
                    return Ok(code);
                }
            }
            Ok(KeyCode::Null)
        })();

        terminal::disable_raw_mode()?;
        result
    }
}

fn read_line() -> io::Result<String> {
    let mut input = String::new();
    let n = io::stdin().lock().read_line(&mut input)?;
    if n == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

/// Parse "1,3" style selections into zero-based indices.
fn parse_indices(input: &str, len: usize) -> Option<Vec<usize>> {
    let mut picked = Vec::new();
    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let n: usize = part.parse().ok()?;
        if n == 0 || n > len {
            return None;
        }
        if !picked.contains(&(n - 1)) {
            picked.push(n - 1);
        }
    }
    Some(picked)
}

impl Ui for TerminalUi {
    fn sidebar(&mut self, title: &str, label: &str, options: &[&str], current: usize) -> io::Result<Option<usize>> {
        println!();
        println!("{}", format!("== {} ==", title).bold().cyan());
        for (i, option) in options.iter().enumerate() {
            let marker = if i == current { ">" } else { " " };
            println!(" {} {:>2}. {}", marker, i + 1, option);
        }
        loop {
            let input = match self.prompt(&format!("{} (1-{}, Enter keeps current, q quits)", label, options.len())) {
                Ok(input) => input,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
                Err(e) => return Err(e),
            };
            let input = input.trim();
            if input.is_empty() {
                return Ok(Some(current.min(options.len().saturating_sub(1))));
            }
            if input.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match input.parse::<usize>() {
                Ok(n) if n >= 1 && n <= options.len() => return Ok(Some(n - 1)),
                _ => println!("{}", "Invalid choice.".red()),
            }
        }
    }

    fn title(&mut self, text: &str) {
        println!();
        println!("{}", text.to_uppercase().bold().cyan());
        println!("{}", "=".repeat(text.chars().count()).cyan());
    }

    fn header(&mut self, text: &str) {
        println!();
        println!("{}", text.bold().cyan());
        println!("{}", "-".repeat(text.chars().count()).cyan());
    }

    fn subheader(&mut self, text: &str) {
        println!();
        println!("{}", text.bold());
    }

    fn write(&mut self, text: &str) {
        println!("{}", text);
    }

    fn success(&mut self, text: &str) {
        println!("{}", text.green());
    }

    fn warning(&mut self, text: &str) {
        println!("{}", text.yellow());
    }

    fn error(&mut self, text: &str) {
        println!("{}", text.red());
    }

    fn table(&mut self, table: &Table) {
        println!("{}", table.preview(PREVIEW_ROWS));
    }

    fn image(&mut self, caption: &str, path: &Path) {
        println!("{} {}", format!("{}:", caption).bold(), path.display());
    }

    fn text_input(&mut self, label: &str) -> io::Result<String> {
        self.prompt(label)
    }

    fn text_area(&mut self, label: &str) -> io::Result<String> {
        println!("{} {}", label.bold(), "(finish with an empty line)".dim());
        let mut lines = Vec::new();
        loop {
            let line = match read_line() {
                Ok(line) => line,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof && !lines.is_empty() => break,
                Err(e) => return Err(e),
            };
            if line.is_empty() {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }

    fn slider(&mut self, label: &str, min: u32, max: u32, default: u32) -> io::Result<u32> {
        loop {
            let input = self.prompt(&format!("{} [{}-{}, default {}]", label, min, max, default))?;
            let input = input.trim();
            if input.is_empty() {
                return Ok(default);
            }
            match input.parse::<u32>() {
                Ok(n) if (min..=max).contains(&n) => return Ok(n),
                _ => println!("{}", format!("Enter a whole number from {} to {}.", min, max).red()),
            }
        }
    }

    fn multiselect(&mut self, label: &str, options: &[String], default: &[String]) -> io::Result<Vec<String>> {
        println!("{}", label.bold());
        for (i, option) in options.iter().enumerate() {
            let mark = if default.contains(option) { "x" } else { " " };
            println!("  [{}] {}. {}", mark, i + 1, option);
        }
        loop {
            let input = self.prompt("Numbers separated by commas (Enter keeps [x], - selects none)")?;
            let input = input.trim();
            if input.is_empty() {
                return Ok(default.to_vec());
            }
            if input == "-" {
                return Ok(Vec::new());
            }
            match parse_indices(input, options.len()) {
                Some(indices) => return Ok(indices.into_iter().map(|i| options[i].clone()).collect()),
                None => println!("{}", "Invalid selection.".red()),
            }
        }
    }

    fn date_input(&mut self, label: &str) -> io::Result<NaiveDate> {
        let today = chrono::Local::now().date_naive();
        loop {
            let input = self.prompt(&format!("{} [YYYY-MM-DD, default {}]", label, today))?;
            let input = input.trim();
            if input.is_empty() {
                return Ok(today);
            }
            match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
                Ok(date) => return Ok(date),
                Err(_) => println!("{}", "Enter a date as YYYY-MM-DD.".red()),
            }
        }
    }

    fn radio(&mut self, label: &str, options: &[&str]) -> io::Result<usize> {
        println!("{}", label.bold());
        for (i, option) in options.iter().enumerate() {
            println!("  ({}) {}", i + 1, option);
        }
        loop {
            let input = self.prompt("Choice [default 1]")?;
            let input = input.trim();
            if input.is_empty() {
                return Ok(0);
            }
            match input.parse::<usize>() {
                Ok(n) if n >= 1 && n <= options.len() => return Ok(n - 1),
                _ => println!("{}", "Invalid choice.".red()),
            }
        }
    }

    /// Enter or `y` presses the button; anything else skips it.
    /// Uses single keystroke detection with fallback to Enter
    fn button(&mut self, label: &str) -> io::Result<bool> {
        print!("{} {} ", format!("[ {} ]", label).bold().reverse(), "Enter to press, n to skip:".dim());
        io::stdout().flush()?;

        if let Ok(code) = Self::read_single_key() {
            let pressed = matches!(code, KeyCode::Enter | KeyCode::Char('y' | 'Y'));
            println!("{}", if pressed { "pressed" } else { "skipped" });
            return Ok(pressed);
        }

        // Fallback to readline
        let input = read_line()?;
        Ok(matches!(input.trim(), "" | "y" | "Y"))
    }

    fn file_uploader(&mut self, label: &str, types: &[&str]) -> io::Result<Option<UploadedFile>> {
        let input = self.prompt(&format!("{} ({}; path, Enter for none)", label, types.join(", ")))?;
        let raw = input.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let path = Path::new(raw);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| raw.to_string());
        let named = UploadedFile::new(name.clone(), Vec::new());
        if !named.has_type(types) {
            self.error(&format!("File type not allowed. Expected one of: {}", types.join(", ")));
            return Ok(None);
        }
        match std::fs::read(path) {
            Ok(bytes) => Ok(Some(UploadedFile::new(name, bytes))),
            Err(e) => {
                self.error(&format!("Could not read {}: {}", path.display(), e));
                Ok(None)
            }
        }
    }
}
