use crate::domain::geo::{FeatureRegistry, GeoFeature};
use crate::domain::selection::LocationSelector;
use ratatui::widgets::ListState;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseLayer {
    #[default]
    Tactical,
    Satellite,
}

impl BaseLayer {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            BaseLayer::Tactical => BaseLayer::Satellite,
            BaseLayer::Satellite => BaseLayer::Tactical,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            BaseLayer::Tactical => "TACTICAL",
            BaseLayer::Satellite => "SATELLITE",
        }
    }
}

/// Tactical Map panel: the selector plus list cursor and display toggles.
#[derive(Debug, Clone, PartialEq)]
pub struct MapState {
    pub selector: LocationSelector,
    /// Keyboard cursor in the feature list; independent of the selection.
    pub cursor: ListState,
    pub legend_open: bool,
    pub base_layer: BaseLayer,
}

impl MapState {
    #[must_use]
    pub fn new(registry: Arc<FeatureRegistry>) -> Self {
        let cursor = if registry.features().is_empty() {
            ListState::default()
        } else {
            ListState::default().with_selected(Some(0))
        };
        Self {
            selector: LocationSelector::new(registry),
            cursor,
            legend_open: true,
            base_layer: BaseLayer::default(),
        }
    }

    #[must_use]
    pub fn cursor_feature(&self) -> Option<&GeoFeature> {
        self.cursor
            .selected()
            .and_then(|i| self.selector.registry().features().get(i))
    }

    /// Moves the list cursor by `delta`, wrapping at both ends.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.selector.registry().features().len();
        if len == 0 {
            self.cursor.select(None);
            return;
        }
        let next = match self.cursor.selected() {
            Some(i) => (i as isize + delta).rem_euclid(len as isize) as usize,
            None => 0,
        };
        self.cursor.select(Some(next));
    }
}

impl Default for MapState {
    fn default() -> Self {
        Self::new(Arc::new(FeatureRegistry::default()))
    }
}
