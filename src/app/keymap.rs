use super::action::Action;
use super::config::ConfigError;
use super::state::{AppState, Panel};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    pub profile: String,
    /// Extra map-panel bindings, e.g. `"L" = "legend"`.
    pub custom: Option<HashMap<String, String>>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            custom: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    // Bindings live in two layers: `global` works whatever has focus, `map_mode`
    // only while the map panel is focused. The terminal panel sends everything
    // else to the prompt.
    pub global: HashMap<KeyEvent, Action>,
    pub map_mode: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    fn builtin() -> Self {
        let mut global = HashMap::new();
        let mut map_mode = HashMap::new();

        // --- Global ---
        global.insert(ctrl('c'), Action::Quit);
        global.insert(key(KeyCode::Tab), Action::FocusNext);
        global.insert(key(KeyCode::BackTab), Action::FocusNext);
        global.insert(key(KeyCode::F(1)), Action::ToggleHelp);

        // --- Map Panel ---
        map_mode.insert(char_key('q'), Action::Quit);
        map_mode.insert(char_key('j'), Action::FeatureCursorNext);
        map_mode.insert(key(KeyCode::Down), Action::FeatureCursorNext);
        map_mode.insert(char_key('k'), Action::FeatureCursorPrev);
        map_mode.insert(key(KeyCode::Up), Action::FeatureCursorPrev);
        map_mode.insert(key(KeyCode::Enter), Action::ConfirmFeature);
        map_mode.insert(key(KeyCode::Esc), Action::ClearSelection);
        map_mode.insert(char_key('x'), Action::ClearSelection);
        map_mode.insert(char_key('l'), Action::ToggleLegend);
        map_mode.insert(char_key('b'), Action::ToggleBaseLayer);
        map_mode.insert(char_key('?'), Action::ToggleHelp);
        map_mode.insert(char_key('i'), Action::FocusTerminal);
        map_mode.insert(char_key(':'), Action::FocusTerminal);

        Self { global, map_mode }
    }

    pub fn from_config(config: &KeyConfig) -> Result<Self, ConfigError> {
        let mut keymap = Self::builtin();
        if config.profile != "default" {
            tracing::warn!(profile = %config.profile, "unknown key profile, using default");
        }

        if let Some(custom) = &config.custom {
            for (key_name, action_name) in custom {
                let invalid = || ConfigError::InvalidKeyBinding {
                    key: key_name.clone(),
                    action: action_name.clone(),
                };
                let event = parse_key(key_name).ok_or_else(invalid)?;
                let action = parse_action(action_name).ok_or_else(invalid)?;
                keymap.map_mode.insert(event, action);
            }
        }

        Ok(keymap)
    }

    pub fn get_action(&self, event: KeyEvent, state: &AppState) -> Option<Action> {
        let event = normalize(event);
        if let Some(action) = self.global.get(&event) {
            return Some(action.clone());
        }
        if state.focus == Panel::Map {
            return self.map_mode.get(&event).cloned();
        }
        None
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::builtin()
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

// Terminals disagree on whether shifted characters carry SHIFT; bindings are
// stored without it, so strip it from character keys before lookup.
fn normalize(event: KeyEvent) -> KeyEvent {
    let mut modifiers = event.modifiers;
    if matches!(event.code, KeyCode::Char(_)) {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    KeyEvent::new(event.code, modifiers)
}

fn parse_key(name: &str) -> Option<KeyEvent> {
    let lower = name.to_lowercase();
    if let Some(rest) = lower.strip_prefix("ctrl+") {
        let mut chars = rest.chars();
        return match (chars.next(), chars.next()) {
            (Some(c), None) => Some(ctrl(c)),
            _ => None,
        };
    }
    let code = match lower.as_str() {
        "tab" => KeyCode::Tab,
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(key(code))
}

fn parse_action(name: &str) -> Option<Action> {
    let action = match name.to_lowercase().as_str() {
        "quit" => Action::Quit,
        "help" => Action::ToggleHelp,
        "legend" => Action::ToggleLegend,
        "base_layer" => Action::ToggleBaseLayer,
        "focus" => Action::FocusNext,
        "focus_terminal" => Action::FocusTerminal,
        "next" => Action::FeatureCursorNext,
        "prev" => Action::FeatureCursorPrev,
        "select" => Action::ConfirmFeature,
        "dismiss" => Action::ClearSelection,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_focused() -> AppState<'static> {
        AppState {
            focus: Panel::Map,
            ..Default::default()
        }
    }

    #[test]
    fn test_map_keys_only_apply_with_map_focus() {
        let keymap = KeyMap::default();
        let terminal = AppState::default();
        assert_eq!(keymap.get_action(char_key('q'), &terminal), None);
        assert_eq!(keymap.get_action(char_key('q'), &map_focused()), Some(Action::Quit));
    }

    #[test]
    fn test_builtin_char_bindings() {
        let keymap = KeyMap::default();
        let state = map_focused();
        let expected = [
            ('q', Action::Quit),
            ('j', Action::FeatureCursorNext),
            ('k', Action::FeatureCursorPrev),
            ('x', Action::ClearSelection),
            ('l', Action::ToggleLegend),
            ('b', Action::ToggleBaseLayer),
            ('?', Action::ToggleHelp),
            ('i', Action::FocusTerminal),
            (':', Action::FocusTerminal),
        ];
        for (c, action) in expected {
            let event = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
            assert_eq!(keymap.get_action(event, &state), Some(action), "key {c}");
        }
    }

    #[test]
    fn test_global_keys_apply_everywhere() {
        let keymap = KeyMap::default();
        let terminal = AppState::default();
        assert_eq!(keymap.get_action(ctrl('c'), &terminal), Some(Action::Quit));
        assert_eq!(
            keymap.get_action(key(KeyCode::Tab), &terminal),
            Some(Action::FocusNext)
        );
    }

    #[test]
    fn test_shifted_question_mark_opens_help() {
        let keymap = KeyMap::default();
        let event = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(
            keymap.get_action(event, &map_focused()),
            Some(Action::ToggleHelp)
        );
    }

    #[test]
    fn test_custom_bindings() {
        let mut custom = HashMap::new();
        custom.insert("L".to_string(), "legend".to_string());
        custom.insert("ctrl+d".to_string(), "dismiss".to_string());
        custom.insert("f5".to_string(), "base_layer".to_string());
        let keymap = KeyMap::from_config(&KeyConfig {
            profile: "default".to_string(),
            custom: Some(custom),
        })
        .unwrap();

        let state = map_focused();
        assert_eq!(keymap.get_action(char_key('L'), &state), Some(Action::ToggleLegend));
        assert_eq!(keymap.get_action(ctrl('d'), &state), Some(Action::ClearSelection));
        assert_eq!(
            keymap.get_action(key(KeyCode::F(5)), &state),
            Some(Action::ToggleBaseLayer)
        );
    }

    #[test]
    fn test_invalid_custom_binding() {
        let mut custom = HashMap::new();
        custom.insert("zz".to_string(), "legend".to_string());
        let err = KeyMap::from_config(&KeyConfig {
            profile: "default".to_string(),
            custom: Some(custom),
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidKeyBinding { ref key, .. } if key == "zz"));

        let mut custom = HashMap::new();
        custom.insert("z".to_string(), "self_destruct".to_string());
        assert!(KeyMap::from_config(&KeyConfig {
            profile: "default".to_string(),
            custom: Some(custom),
        })
        .is_err());
    }
}
