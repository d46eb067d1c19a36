//! Terminal rendering for calculator sessions

use std::io::{self, Write};

use console::style;
use keypad_calc::keypad::Keypad;
use keypad_calc::view::{CalculatorView, RecordingView, ViewEvent};
use serde::Serialize;

/// Calculator view that prints to a terminal
///
/// Notices are written as soon as they are shown; the display is kept and
/// written on request so a session prints one result per line of input.
/// A failed notice write is held and returned by the next explicit write.
#[derive(Debug)]
pub struct TerminalView<W: Write> {
    out: W,
    display: String,
    notice: Option<String>,
    error: Option<io::Error>,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode: notices are not printed
    pub quiet: bool,
}

impl<W: Write> TerminalView<W> {
    /// Create a view over any writer
    #[must_use]
    pub fn new(out: W, use_color: bool, quiet: bool) -> Self {
        Self {
            out,
            display: "0".to_string(),
            notice: None,
            error: None,
            use_color,
            quiet,
        }
    }

    /// The last rendered display
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The notice currently shown, if any
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Writes the current display on its own line
    pub fn write_display(&mut self) -> io::Result<()> {
        self.take_error()?;
        let line = if self.use_color {
            style(&self.display).bold().to_string()
        } else {
            self.display.clone()
        };
        writeln!(self.out, "{line}")
    }

    /// Writes the REPL prompt without a newline
    pub fn write_prompt(&mut self) -> io::Result<()> {
        self.take_error()?;
        if self.quiet {
            return Ok(());
        }
        let prompt = if self.use_color {
            style("> ").dim().to_string()
        } else {
            "> ".to_string()
        };
        write!(self.out, "{prompt}")?;
        self.out.flush()
    }

    /// Returns the first error held from a notice write
    fn take_error(&mut self) -> io::Result<()> {
        self.error.take().map_or(Ok(()), Err)
    }
}

impl<W: Write> CalculatorView for TerminalView<W> {
    fn render_result(&mut self, display: &str) {
        self.display = display.to_string();
    }

    fn show_message(&mut self, text: &str) {
        if text.is_empty() {
            self.notice = None;
            return;
        }
        self.notice = Some(text.to_string());
        if self.quiet {
            return;
        }

        let line = if self.use_color {
            format!(
                "{} {}",
                style("⚠").yellow().bold(),
                style(text).yellow()
            )
        } else {
            format!("NOTICE {text}")
        };
        if let Err(err) = writeln!(self.out, "{line}") {
            if self.error.is_none() {
                self.error = Some(err);
            }
        }
    }
}

/// JSON report of a `run` session
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport<'a> {
    /// Tokens pressed, in order
    pub tokens: &'a [String],
    /// Final display
    pub display: &'a str,
    /// Notice shown at the end, if any
    pub message: Option<&'a str>,
    /// Every notice shown during the session, oldest first
    pub notices: Vec<&'a str>,
    /// Every view call made during the session
    pub events: &'a [ViewEvent],
}

impl<'a> SessionReport<'a> {
    /// Builds a report from the tokens and the view that recorded them
    #[must_use]
    pub fn new(tokens: &'a [String], view: &'a RecordingView) -> Self {
        Self {
            tokens,
            display: view.display(),
            message: view.message(),
            notices: view.messages(),
            events: view.events(),
        }
    }

    /// Pretty JSON rendering
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Renders the keypad grid followed by an aligned table of its keys
#[must_use]
pub fn render_keys_text(keypad: &Keypad, use_color: bool) -> String {
    let (rows, cols) = keypad.dimensions();
    let mut out = String::new();
    let header = format!("Keypad ({} keys, {rows}x{cols})", keypad.key_count());
    if use_color {
        out.push_str(&style(header).bold().underlined().to_string());
    } else {
        out.push_str(&header);
    }
    out.push('\n');

    for row in 0..rows {
        let cells: Vec<String> = (0..cols)
            .map(|col| {
                keypad
                    .key_at(row, col)
                    .map_or_else(|| " ".repeat(5), |key| format!("[{:^3}]", key.label))
            })
            .collect();
        out.push_str(cells.join(" ").trim_end());
        out.push('\n');
    }
    out.push('\n');

    for key in keypad.keys() {
        let id = if use_color {
            style(format!("{:<14}", key.id)).cyan().to_string()
        } else {
            format!("{:<14}", key.id)
        };
        out.push_str(&format!(
            "{id} {:>2}  ({}, {})  {}\n",
            key.label,
            key.row,
            key.col,
            key.token()
        ));
    }
    out
}

/// Renders the keypad as a JSON array
pub fn render_keys_json(keypad: &Keypad) -> serde_json::Result<String> {
    serde_json::to_string_pretty(keypad.keys())
}
