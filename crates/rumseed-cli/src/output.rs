//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use tracing::warn;

use rumseed_core::{application::ProgressReporter, domain::ScaffoldStep};

use crate::cli::GlobalArgs;

/// Writes human-facing progress lines to stdout.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags.
    ///
    /// Colour is dropped when stdout is piped or redirected.
    pub fn new(args: &GlobalArgs) -> Self {
        Self::with_settings(args.quiet, args.no_color || !io::stdout().is_terminal())
    }

    pub fn with_settings(quiet: bool, no_color: bool) -> Self {
        Self {
            quiet,
            no_color,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }
}

/// Progress lines are best-effort: a failed write never aborts the scaffold.
/// Header and final lines go through `?` in the init command instead.
impl ProgressReporter for OutputManager {
    fn report(&self, step: &ScaffoldStep) {
        if let Err(e) = self.success(&step_message(step)) {
            warn!(error = %e, "Failed to write progress line");
        }
    }
}

/// Progress text for one scaffold step, without the status glyph.
pub fn step_message(step: &ScaffoldStep) -> String {
    match step {
        ScaffoldStep::Directory {
            path,
            existed: false,
        } => format!("Created {}", path.display()),
        ScaffoldStep::Directory {
            path,
            existed: true,
        } => format!("Using existing {}", path.display()),
        ScaffoldStep::Settings { path } => format!("Created configuration: {}", path.display()),
        ScaffoldStep::Readme { path } => format!("Created README: {}", path.display()),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
