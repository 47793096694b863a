//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use crate::core::course::CourseOutcome;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  syllabus-qna                                  Launch interactive TUI
  syllabus-qna upload syllabus.pdf              Upload a syllabus PDF
  syllabus-qna topics CO1                       Show topics for CO1
  syllabus-qna ask CO2 \"ten 2 mark questions\"   Generate questions for CO2
  syllabus-qna ask CO2 -                        Read the prompt from stdin
  syllabus-qna info                             Summary of the loaded syllabus
  syllabus-qna format answer.txt                Format a saved answer offline
  syllabus-qna --api-url http://host:5000 info  Use another server

ENVIRONMENT:
  SYLLABUS_API_URL            Service base URL (default http://127.0.0.1:5000)
  SYLLABUS_API_TIMEOUT_SECS   Request timeout in seconds (default 120)
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Upload a syllabus and generate exam questions per course outcome",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Service base URL (overrides SYLLABUS_API_URL)
    #[arg(long, value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Print without colors or bold text
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a syllabus PDF and show the parsed course information
    Upload {
        /// Path to the syllabus PDF
        pdf: PathBuf,
    },
    /// Show the topics of the unit mapped to a course outcome
    Topics {
        /// Course outcome (e.g. CO1)
        co: CourseOutcome,
    },
    /// Generate exam questions for a course outcome
    Ask {
        /// Course outcome (e.g. CO1)
        co: CourseOutcome,
        /// What to generate, e.g. "ten 5 mark questions" ('-' reads stdin)
        prompt: String,
    },
    /// Show a summary of the syllabus loaded on the server
    Info,
    /// Format a generated answer from a file or stdin (no server needed)
    Format {
        /// Answer text file; reads stdin when omitted or '-'
        file: Option<PathBuf>,
    },
    /// Show the effective configuration
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// The TUI runs when no subcommand is given.
    pub fn is_tui(&self) -> bool {
        self.command.is_none()
    }
}
