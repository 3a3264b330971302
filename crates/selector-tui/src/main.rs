//! transcript-selector - Interactive transcript language selector
//!
//! Binds a language selection pane and a foldable transcript region to a
//! host `sequences` endpoint. Fetches run on a tokio runtime; the UI loop
//! stays synchronous and applies completions as they arrive.

mod cli;

use std::io::stdout;
use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use selector_client::{
    BaseUrlResolver, HandlerUrlResolver, SequencesClient, Url, SEQUENCES_HANDLER,
};
use selector_ui::{
    components::{
        render_footer, render_header, render_help_overlay, render_language_select,
        render_transcript_pane,
    },
    event::{handle_event, AppAction},
    App, FetchOutcome,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli)?;

    let init = cli.load_init_args()?;

    let base = Url::parse(&cli.base_url)
        .with_context(|| format!("Invalid base URL: {}", cli.base_url))?;
    let resolver = BaseUrlResolver::new(base);
    let endpoint = resolver
        .handler_url(SEQUENCES_HANDLER)
        .context("Failed to resolve sequences handler URL")?;

    let client = Arc::new(
        SequencesClient::new(endpoint, cli.method, cli.mode)
            .context("Failed to build sequences client")?,
    );

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    // Constructing the app queues the initial fetch for the user's language
    let app = App::new(init);

    run_tui(app, client, &runtime)
}

/// Set up file logging when requested; the terminal itself belongs to the TUI
fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Run the TUI application
fn run_tui(mut app: App, client: Arc<SequencesClient>, runtime: &tokio::runtime::Runtime) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel::<FetchOutcome>();

    // Main event loop
    let result = (|| -> Result<()> {
        loop {
            // Dispatch requests queued by the widget, one task per request
            for request in app.take_pending_fetches() {
                let client = Arc::clone(&client);
                let tx = tx.clone();
                runtime.spawn(async move {
                    let result = client.fetch(&request.lang).await;
                    let _ = tx.send(FetchOutcome {
                        lang: request.lang,
                        result,
                    });
                });
            }

            // Apply completed fetches; stale ones are dropped by the widget
            while let Ok(outcome) = rx.try_recv() {
                app.apply_outcome(outcome);
            }

            // Draw
            terminal.draw(|frame| ui(frame, &app))?;

            // Poll with a timeout so completions keep flowing in
            if event::poll(Duration::from_millis(100))? {
                match handle_event(event::read()?) {
                    AppAction::Quit => break,
                    AppAction::SelectPrev => app.select_prev(),
                    AppAction::SelectNext => app.select_next(),
                    AppAction::ConfirmLanguage => app.confirm_selection(),
                    AppAction::ToggleFold => app.toggle_fold(),
                    AppAction::ScrollUp => app.scroll_up(),
                    AppAction::ScrollDown => app.scroll_down(),
                    AppAction::ToggleHelp => app.show_help = !app.show_help,
                    AppAction::Redraw => {
                        terminal.clear()?;
                    }
                    AppAction::None => {}
                }
            }
        }
        Ok(())
    })();

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

/// Layout: header, language pane beside the transcript region, footer
fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(1)])
        .split(chunks[1]);

    render_language_select(frame, panes[0], app);
    render_transcript_pane(frame, panes[1], app);

    render_footer(frame, chunks[2], app);

    if app.show_help {
        render_help_overlay(frame);
    }
}
