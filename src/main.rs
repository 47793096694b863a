//! # syllabus-qna
//!
//! Terminal client for a syllabus question-generation service: upload a
//! syllabus PDF, browse topics per course outcome, and generate exam
//! questions.
//!
//! ## Modes
//! - One-shot subcommands (`upload`, `topics`, `ask`, `info`, `format`, ...)
//! - Interactive terminal UI (default, no subcommand)

mod cli;
mod core;
mod run;
mod tui;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands};
use crate::core::config::{self, Overrides};
use crate::core::report::Output;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);
    let style = Output::detect(args.plain);

    // Commands that need no service configuration.
    match &args.command {
        Some(Commands::Completions { shell }) => {
            cli::generate(
                *shell,
                &mut Args::command(),
                crate::core::app::NAME,
                &mut std::io::stdout(),
            );
            return Ok(());
        }
        Some(Commands::Format { file }) => {
            exit_on_error(run::run_format(file.as_ref(), style));
            return Ok(());
        }
        _ => {}
    }

    let overrides = Overrides {
        api_url: args.api_url.clone(),
    };
    let config = config::load(&overrides).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    log::debug!("using service at {}", config.api_url);

    let result = match &args.command {
        Some(Commands::Upload { pdf }) => run::run_upload(&config, pdf, style).await,
        Some(Commands::Topics { co }) => run::run_topics(&config, co, style).await,
        Some(Commands::Ask { co, prompt }) => run::run_ask(&config, co, prompt, style).await,
        Some(Commands::Info) => run::run_info(&config, style).await,
        Some(Commands::Config) => {
            run::run_config(&config);
            Ok(())
        }
        Some(Commands::Format { .. }) | Some(Commands::Completions { .. }) => Ok(()),
        None => run::launch_tui(config).await,
    };
    exit_on_error(result);
    Ok(())
}

/// Print a user-facing error and exit with status 1.
fn exit_on_error(result: Result<(), Box<dyn std::error::Error>>) {
    if let Err(e) = result {
        log::debug!("error detail: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
