//! Application run modes: logger init, one-shot commands, TUI launch.

use std::error::Error;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::core;
use crate::core::answer::format_answer;
use crate::core::api::SyllabusClient;
use crate::core::config::Config;
use crate::core::course::CourseOutcome;
use crate::core::report::{self, Output};

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.is_tui()
        && let Some(path) = core::paths::log_file()
    {
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

fn client(config: &Config) -> Result<SyllabusClient, Box<dyn Error>> {
    Ok(SyllabusClient::new(config)?)
}

/// `upload`: send the PDF and print course information.
pub async fn run_upload(config: &Config, pdf: &Path, style: Output) -> Result<(), Box<dyn Error>> {
    let upload = client(config)?.upload(pdf).await?;
    print!("{}", report::course_info(&upload, style));
    Ok(())
}

/// `topics`: print the topics mapped to a course outcome.
pub async fn run_topics(
    config: &Config,
    co: &CourseOutcome,
    style: Output,
) -> Result<(), Box<dyn Error>> {
    let topics = client(config)?.topics(co).await?;
    print!("{}", report::topics(&topics, style));
    Ok(())
}

/// `ask`: generate questions and print the formatted answer.
pub async fn run_ask(
    config: &Config,
    co: &CourseOutcome,
    prompt_arg: &str,
    style: Output,
) -> Result<(), Box<dyn Error>> {
    let prompt = if prompt_arg == "-" {
        io::read_to_string(io::stdin())?
    } else {
        prompt_arg.to_string()
    };
    let response = client(config)?.ask(co, &prompt).await?;
    print!("{}", report::question(&response, style));
    Ok(())
}

/// `info`: print the syllabus summary from the server.
pub async fn run_info(config: &Config, style: Output) -> Result<(), Box<dyn Error>> {
    let info = client(config)?.syllabus_info().await?;
    print!("{}", report::syllabus_info(&info, style));
    Ok(())
}

/// `format`: format an answer read from a file or stdin. Needs no server.
pub fn run_format(file: Option<&PathBuf>, style: Output) -> Result<(), Box<dyn Error>> {
    let text = match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    print!("{}", report::answer(&format_answer(&text), style));
    Ok(())
}

/// `config`: show the effective configuration and where each value came from.
pub fn run_config(config: &Config) {
    let log_file = core::paths::log_file()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "—".to_string());
    println!(
        "API URL:  {} ({})",
        config.api_url.as_str().trim_end_matches('/'),
        config.api_url_source
    );
    println!(
        "Timeout:  {}s ({})",
        config.timeout.as_secs(),
        config.timeout_source
    );
    println!("TUI log:  {}", log_file);
}

/// Launch the TUI in a blocking thread. Returns on panic or IO error.
pub async fn launch_tui(config: Config) -> Result<(), Box<dyn Error>> {
    let client = client(&config)?;
    let join_result: Result<io::Result<()>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || crate::tui::run(client)).await;

    match join_result {
        Ok(io_result) => io_result?,
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                eprintln!("TUI panic: {}", msg);
            }
            return Err(Box::new(io::Error::other("TUI thread panicked")) as Box<dyn Error>);
        }
    }
    Ok(())
}
