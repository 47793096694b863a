//! TUI (Text User Interface) for the syllabus service: upload, topics, questions.

mod app;
mod constants;
mod draw;
mod handlers;
mod shortcuts;
mod text;

use app::App;

use crossterm::event::{self, Event};
use crossterm::execute;
use std::io::{self};
use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::core::api::SyllabusClient;

use draw::draw;
use handlers::{HandleResult, PendingRequest, Request};

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the TUI loop. Uses a dedicated Tokio runtime for service calls.
pub fn run(client: SyllabusClient) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rt = Arc::new(
        Runtime::new().map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?,
    );

    let mut app = App::new(client.base_url().to_string());

    // Mouse wheel scrolls results.
    execute!(io::stdout(), crossterm::event::EnableMouseCapture)?;

    // Pick up a syllabus uploaded in an earlier session.
    app.begin(Request::SyllabusInfo.action());
    let mut pending: Option<PendingRequest> = Some(handlers::spawn_request(
        &rt,
        client.clone(),
        Request::SyllabusInfo,
    ));

    loop {
        if let Some(ref pr) = pending
            && let Ok(outcome) = pr.result_rx.try_recv()
        {
            let action = pr.action;
            handlers::apply_outcome(&mut app, action, outcome);
            pending = None;
        }
        if app.loading.is_some() {
            app.tick = app.tick.wrapping_add(1);
        }

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(std::time::Duration::from_millis(
            constants::EVENT_POLL_TIMEOUT_MS,
        ))? {
            match event::read()? {
                Event::Mouse(mouse) => {
                    let _ = handlers::handle_mouse(mouse, &mut app);
                }
                Event::Key(key) => {
                    let result = handlers::handle_key(
                        key,
                        handlers::HandleKeyContext {
                            app: &mut app,
                            client: &client,
                            pending: &mut pending,
                            rt: &rt,
                        },
                    );
                    if result == HandleResult::Break {
                        if let Some(pr) = pending.take() {
                            pr.cancel_token.cancel();
                        }
                        break;
                    }
                }
                _ => {}
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
