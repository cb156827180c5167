//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "setup-rum",
    bin_name = "setup-rum",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f680} Initialize a real-user-monitoring project",
    long_about = "setup-rum creates a project skeleton (config/, data/, output/, logs/), \
                  a default config/settings.json and a README.md. Re-running is safe: \
                  directories are reused and generated files are regenerated.",
    after_help = "EXAMPLES:\n\
        \x20 setup-rum --project checkout-web\n\
        \x20 setup-rum -p checkout-web -o ./sites\n\
        \x20 setup-rum -p checkout-web -c ./rum.json\n\
        \x20 setup-rum -p checkout-web --dry-run",
)]
pub struct Cli {
    /// Verbosity and colour flags.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// What to scaffold and where.
    #[command(flatten)]
    pub init: InitArgs,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for project initialization.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project name.  Used verbatim as the directory name and in the README.
    #[arg(
        short = 'p',
        long = "project",
        value_name = "NAME",
        help = "Project name"
    )]
    pub project: String,

    /// Parent directory for the new project folder.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Output directory"
    )]
    pub output: PathBuf,

    /// Extra JSON configuration file.  Loaded and acknowledged, not applied.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Configuration file"
    )]
    pub config: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser, error::ErrorKind};

    #[test]
    fn verify_cli_structure() {
        // clap's internal consistency check — catches conflicts, missing values, etc.
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_long_flags() {
        let cli = Cli::parse_from([
            "setup-rum",
            "--project",
            "demo",
            "--output",
            "/tmp",
            "--config",
            "extra.json",
        ]);
        assert_eq!(cli.init.project, "demo");
        assert_eq!(cli.init.output, PathBuf::from("/tmp"));
        assert_eq!(cli.init.config, Some(PathBuf::from("extra.json")));
        assert!(!cli.init.dry_run);
    }

    #[test]
    fn parse_short_flags() {
        let cli = Cli::parse_from(["setup-rum", "-p", "demo", "-o", "out", "-c", "x.json"]);
        assert_eq!(cli.init.project, "demo");
        assert_eq!(cli.init.output, PathBuf::from("out"));
        assert_eq!(cli.init.config, Some(PathBuf::from("x.json")));
    }

    #[test]
    fn output_defaults_to_current_directory() {
        let cli = Cli::parse_from(["setup-rum", "-p", "demo"]);
        assert_eq!(cli.init.output, PathBuf::from("."));
        assert_eq!(cli.init.config, None);
    }

    #[test]
    fn project_is_required() {
        let err = Cli::try_parse_from(["setup-rum", "--output", "/tmp"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn verbose_counts() {
        let cli = Cli::parse_from(["setup-rum", "-vv", "-p", "demo"]);
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["setup-rum", "--quiet", "--verbose", "-p", "demo"]);
        assert!(result.is_err());
    }

    #[test]
    fn no_color_flag_sets_true() {
        let cli = Cli::parse_from(["setup-rum", "--no-color", "-p", "demo"]);
        assert!(cli.global.no_color);
    }
}
