use crate::app::command::Command;
use crate::app::config::AppConfig;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Focus & Modes ---
    FocusNext,     // Tab
    FocusTerminal, // Click in the terminal panel
    FocusMap,      // Click in the map panel
    ToggleHelp,    // ? / F1
    CancelMode,    // Esc (close modal, dismiss error)

    // --- Operation Center ---
    TerminalInput(crossterm::event::KeyEvent), // Edit the prompt
    SubmitCommand,                             // Enter
    HistoryPrev,                               // Up
    HistoryNext,                               // Down
    ScrollTranscriptUp(u16),                   // PgUp / wheel
    ScrollTranscriptDown(u16),                 // PgDn / wheel

    // --- Tactical Map ---
    FeatureCursorNext,     // j / Down
    FeatureCursorPrev,     // k / Up
    ConfirmFeature,        // Enter: select the feature under the cursor
    SelectFeature(String), // Marker or list click
    ClearSelection,        // Esc / x: dismiss the detail panel
    ToggleLegend,          // l
    ToggleBaseLayer,       // b

    // --- Async Results ---
    ConfigChanged,                   // Watcher saw the config file change
    ConfigReloaded(Box<AppConfig>),  // Fresh config parsed and validated
    ErrorOccurred(String),           // General error reporting
}
