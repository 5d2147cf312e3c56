use atinto::app::state::{AppMode, AppState, BaseLayer, ErrorSeverity, ErrorState, Panel};
use atinto::app::ui;
use ratatui::{backend::TestBackend, Terminal};

/// Renders every screen state at every size up to 100x50 to catch layout panics.
fn sweep(app_state: &mut AppState) {
    for width in 0..100 {
        for height in 0..50 {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            let _ = terminal.draw(|f| {
                ui::draw(f, app_state);
            });
        }
    }
}

fn main() {
    let mut app_state = AppState::default();

    for mode in [AppMode::Normal, AppMode::Help] {
        app_state.mode = mode;
        for focus in [Panel::Terminal, Panel::Map] {
            app_state.focus = focus;
            sweep(&mut app_state);
        }
    }
    app_state.mode = AppMode::Normal;

    // Selection adds the detail panel; satellite adds the graticule.
    app_state
        .map
        .selector
        .select_feature("Scarborough Shoal (Panatag Shoal)")
        .unwrap();
    app_state.map.base_layer = BaseLayer::Satellite;
    app_state.map.legend_open = false;
    sweep(&mut app_state);

    // A long transcript, scrolled back to the top.
    for _ in 0..40 {
        app_state.terminal.interpreter.submit("mission");
    }
    app_state.terminal.scroll_from_bottom = u16::MAX;
    sweep(&mut app_state);

    app_state.last_error = Some(ErrorState::new(
        "Test error message that might be long and cause issues if not handled correctly by the layout engine.",
        ErrorSeverity::Critical,
    ));
    sweep(&mut app_state);

    println!("Layout verification completed successfully!");
}
