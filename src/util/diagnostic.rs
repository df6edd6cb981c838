//! Terminal rendering of errors and warnings.
//!
//! A [`Diagnostic`] names what went wrong, the file it concerns when there is
//! one, any underlying causes as `note` lines, and fixes as `help` lines:
//!
//! ```text
//! error: failed to parse lock /ws/src/app/lock.json
//!   --> /ws/src/app/lock.json
//!   = note: expected value at line 1 column 2
//!   = help: Regenerate lock.json instead of editing it by hand
//! ```

use std::fmt;
use std::path::PathBuf;

/// Canned `help` lines shared by several errors.
pub mod suggestions {
    /// No workspace root could be resolved.
    pub const SET_BERTHPATH: &str =
        "Set BERTHPATH to a workspace directory, or add `paths` under [workspace] in config.toml";

    /// No manifest at or above the starting directory.
    pub const NO_MANIFEST: &str = "Run inside a project that has a manifest.json at its root";

    /// The lock exists but does not parse.
    pub const BROKEN_LOCK: &str = "Regenerate lock.json instead of editing it by hand";

    /// The project directory could not be inspected as a checkout.
    pub const NOT_A_REPOSITORY: &str =
        "Check that the project was checked out with git and is not corrupted";
}

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
}

impl Level {
    fn label(self, color: bool) -> &'static str {
        match (self, color) {
            (Level::Error, false) => "error",
            (Level::Warning, false) => "warning",
            (Level::Error, true) => "\x1b[1;31merror\x1b[0m",
            (Level::Warning, true) => "\x1b[1;33mwarning\x1b[0m",
        }
    }
}

/// An error or warning ready to be shown to the user.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    /// File the diagnostic is about
    pub location: Option<PathBuf>,
    /// Underlying causes, rendered as `note` lines
    pub notes: Vec<String>,
    /// Suggested fixes, rendered as `help` lines
    pub help: Vec<String>,
}

impl Diagnostic {
    fn new(level: Level, message: impl Into<String>) -> Self {
        Diagnostic {
            level,
            message: message.into(),
            location: None,
            notes: Vec::new(),
            help: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Attach an underlying cause.
    pub fn with_context(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Attach a suggested fix.
    pub fn with_suggestion(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    /// Attach the file the diagnostic is about.
    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Render for the terminal, with ANSI colors when `color` is set.
    pub fn format(&self, color: bool) -> String {
        let mut lines = vec![format!("{}: {}", self.level.label(color), self.message)];

        if let Some(path) = &self.location {
            lines.push(format!("  --> {}", path.display()));
        }
        lines.extend(self.notes.iter().map(|n| format!("  = note: {n}")));

        let help = if color { "\x1b[1;32mhelp\x1b[0m" } else { "help" };
        lines.extend(self.help.iter().map(|h| format!("  = {help}: {h}")));

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false))
    }
}

/// Write a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}
