use crate::app::{
    action::Action, command::Command, config::ConfigSource, input::map_event_to_action, reducer,
    state::AppState, ui,
};

use anyhow::Result;
use crossterm::event::{self, Event};
use notify::{RecursiveMode, Watcher};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);
const RELOAD_DEBOUNCE: Duration = Duration::from_millis(500);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    source: Arc<dyn ConfigSource>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, source, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    source: Arc<dyn ConfigSource>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    // Config watcher. Kept alive for the whole loop.
    let _watcher = watch_config(source.as_ref(), action_tx.clone());

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            let command = reducer::update(&mut app_state, action);
            if app_state.should_quit {
                break;
            }
            if let Some(cmd) = command {
                handle_command(cmd, source.clone(), action_tx.clone());
            }
        }
    }

    tracing::info!("run loop finished");
    Ok(())
}

/// Watches the config file's directory and sends a debounced `ConfigChanged`.
/// Returns `None` (no hot reload) when there is nothing to watch.
fn watch_config(
    source: &dyn ConfigSource,
    action_tx: mpsc::Sender<Action>,
) -> Option<notify::RecommendedWatcher> {
    let path = source.path()?;
    let dir = path.parent().filter(|d| d.is_dir())?.to_path_buf();

    let (notify_tx, mut notify_rx) = mpsc::channel(1);
    let file_name = path.file_name().map(ToOwned::to_owned);
    let watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        let Ok(event) = res else {
            return;
        };
        let touches_config = event
            .paths
            .iter()
            .any(|p| p.file_name() == file_name.as_deref());
        if touches_config {
            let _ = notify_tx.try_send(());
        }
    });
    let mut watcher = match watcher {
        Ok(w) => w,
        Err(e) => {
            tracing::warn!(error = %e, "config watcher unavailable");
            return None;
        }
    };
    if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
        tracing::warn!(error = %e, dir = %dir.display(), "cannot watch config directory");
        return None;
    }
    tracing::debug!(path = %path.display(), "watching config");

    tokio::spawn(async move {
        let mut pending = false;
        loop {
            if pending {
                tokio::select! {
                    Some(()) = notify_rx.recv() => {}
                    () = tokio::time::sleep(RELOAD_DEBOUNCE) => {
                        if action_tx.send(Action::ConfigChanged).await.is_err() {
                            break;
                        }
                        pending = false;
                    }
                }
            } else if notify_rx.recv().await.is_some() {
                pending = true;
            } else {
                break;
            }
        }
    });

    Some(watcher)
}

pub(crate) fn handle_command(
    command: Command,
    source: Arc<dyn ConfigSource>,
    tx: mpsc::Sender<Action>,
) {
    match command {
        Command::ReloadConfig => {
            tokio::spawn(async move {
                let loaded = tokio::task::spawn_blocking(move || source.load()).await;
                let action = match loaded {
                    Ok(Ok(config)) => Action::ConfigReloaded(Box::new(config)),
                    Ok(Err(e)) => {
                        tracing::warn!(error = %e, "config reload failed");
                        Action::ErrorOccurred(e.to_string())
                    }
                    Err(e) => Action::ErrorOccurred(format!("config reload task failed: {e}")),
                };
                let _ = tx.send(action).await;
            });
        }
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
