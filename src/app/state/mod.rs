use super::config::{AppConfig, ConfigError};
use super::keymap::KeyMap;
use std::sync::Arc;
use std::time::Instant;

pub mod error;
pub mod input;
pub mod map;
pub mod terminal;

// Re-exports
pub use error::{ErrorSeverity, ErrorState};
pub use input::PromptInput;
pub use map::{BaseLayer, MapState};
pub use terminal::TerminalState;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Normal, // Working in the terminal or the map
    Help,   // Showing the help overlay
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Panel {
    Terminal,
    Map,
}

impl Panel {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Panel::Terminal => Panel::Map,
            Panel::Map => Panel::Terminal,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Panel::Terminal => "OPERATION CENTER",
            Panel::Map => "TACTICAL MAP",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    // --- Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub focus: Panel,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>,
    pub status_clear_time: Option<Instant>,

    // --- Sessions ---
    pub terminal: TerminalState<'a>,
    pub map: MapState,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme: crate::theme::Theme,
}

impl AppState<'_> {
    /// Builds a fresh session from a validated config.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let mut state = Self::default();
        state.map.legend_open = config.ui.legend_open;
        state.map.base_layer = config.ui.base_layer;
        state.apply_config(config)?;
        Ok(state)
    }

    /// Applies a (re)loaded config to a running session. The transcript and the
    /// view toggles survive; a selection whose feature disappeared is cleared.
    pub fn apply_config(&mut self, config: &AppConfig) -> Result<(), ConfigError> {
        let table = config.command_table()?;
        let registry = config.feature_registry()?;
        let keymap = KeyMap::from_config(&config.keys)?;

        self.terminal.interpreter.set_table(Arc::new(table));
        if self.map.selector.replace_registry(Arc::new(registry)) {
            tracing::info!("selection cleared: feature no longer configured");
        }
        let len = self.map.selector.registry().features().len();
        match self.map.cursor.selected() {
            _ if len == 0 => self.map.cursor.select(None),
            Some(i) if i >= len => self.map.cursor.select(Some(len - 1)),
            None => self.map.cursor.select(Some(0)),
            Some(_) => {}
        }
        self.keymap = Arc::new(keymap);
        self.theme = crate::theme::Theme::from_palette_type(config.ui.theme);
        Ok(())
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_clear_time = Some(Instant::now());
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            focus: Panel::Terminal,
            last_error: None,
            status_message: None,
            status_clear_time: None,
            terminal: TerminalState::default(),
            map: MapState::default(),
            keymap: Arc::new(KeyMap::default()),
            theme: crate::theme::Theme::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::{CommandConfig, FeatureConfig};
    use crate::domain::geo::FeatureCategory;

    #[test]
    fn test_apply_config_swaps_vocabulary_and_keeps_transcript() {
        let mut state = AppState::default();
        state.terminal.interpreter.submit("help");

        let config = AppConfig {
            commands: vec![CommandConfig {
                trigger: "status".to_string(),
                reply: Some("All stations green.".to_string()),
                effect: None,
            }],
            ..Default::default()
        };
        state.apply_config(&config).unwrap();

        assert_eq!(state.terminal.lines().len(), 4);
        assert!(state.terminal.interpreter.table().lookup("status").is_some());
        assert!(state.terminal.interpreter.table().lookup("help").is_some());
    }

    #[test]
    fn test_apply_config_clears_vanished_selection_and_clamps_cursor() {
        let mut state = AppState::default();
        state
            .map
            .selector
            .select_feature("Reed Bank (Recto Bank)")
            .unwrap();
        state.map.cursor.select(Some(4));

        let config = AppConfig {
            features: vec![FeatureConfig {
                id: "Sabina Shoal".to_string(),
                lat: 9.75,
                lon: 116.48,
                category: FeatureCategory::Disputed,
                description: "Escoda Shoal.".to_string(),
                status: "CONTESTED".to_string(),
            }],
            ..Default::default()
        };
        state.apply_config(&config).unwrap();

        assert!(state.map.selector.state().is_empty());
        assert_eq!(state.map.cursor.selected(), Some(0));
    }

    #[test]
    fn test_from_config_applies_ui_section() {
        let mut config = AppConfig::default();
        config.ui.legend_open = false;
        config.ui.base_layer = BaseLayer::Satellite;
        config.ui.theme = crate::theme::PaletteType::Nord;

        let state = AppState::from_config(&config).unwrap();
        assert!(!state.map.legend_open);
        assert_eq!(state.map.base_layer, BaseLayer::Satellite);
        assert_eq!(
            state.theme,
            crate::theme::Theme::from_palette_type(crate::theme::PaletteType::Nord)
        );
        assert_eq!(state.terminal.lines().len(), 2);
    }
}
