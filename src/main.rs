use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use atinto::app::config::{ConfigSource, FileConfigSource};
use atinto::app::r#loop::run_loop;
use atinto::app::state::{AppState, ErrorSeverity, ErrorState};

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();
    let log_path = atinto::logging::init();
    tracing::info!(log = ?log_path, "starting ATIN 'TO! Operation Center");

    // Load config BEFORE terminal setup. A broken file is reported inside the UI
    // and the session starts from defaults.
    let source = Arc::new(FileConfigSource::from_env());
    let app_state = match source.load().and_then(|config| AppState::from_config(&config)) {
        Ok(state) => state,
        Err(e) => {
            tracing::warn!(error = %e, "config rejected, using defaults");
            AppState {
                last_error: Some(ErrorState::new(e.to_string(), ErrorSeverity::Error)),
                ..Default::default()
            }
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, source).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "run loop failed");
        println!("{err:?}");
    }

    Ok(())
}
