use super::geo::{FeatureRegistry, GeoFeature};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("unknown feature id: '{0}'")]
    UnknownFeatureId(String),
}

/// At most one highlighted feature, referenced by id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub selected: Option<String>,
}

impl SelectionState {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }
}

/// Owns the selection for one map session. The registry is shared and read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationSelector {
    registry: Arc<FeatureRegistry>,
    state: SelectionState,
}

impl LocationSelector {
    #[must_use]
    pub fn new(registry: Arc<FeatureRegistry>) -> Self {
        Self {
            registry,
            state: SelectionState::default(),
        }
    }

    /// Selects a registered feature. Selecting the current feature again keeps it
    /// selected. An unknown id is rejected and the current selection is kept.
    pub fn select_feature(&mut self, id: &str) -> Result<SelectionState, SelectionError> {
        let Some(feature) = self.registry.get(id) else {
            tracing::warn!(id, "rejected selection of unknown feature");
            return Err(SelectionError::UnknownFeatureId(id.to_string()));
        };
        tracing::debug!(id, category = %feature.category, "feature selected");
        self.state.selected = Some(feature.id.clone());
        Ok(self.state.clone())
    }

    pub fn clear_selection(&mut self) -> SelectionState {
        self.state.selected = None;
        self.state.clone()
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    #[must_use]
    pub fn selected_feature(&self) -> Option<&GeoFeature> {
        self.state
            .selected
            .as_deref()
            .and_then(|id| self.registry.get(id))
    }

    #[must_use]
    pub fn registry(&self) -> &FeatureRegistry {
        &self.registry
    }

    /// Installs a new registry. Returns true when the current selection no longer
    /// exists in it and was therefore cleared.
    pub fn replace_registry(&mut self, registry: Arc<FeatureRegistry>) -> bool {
        self.registry = registry;
        let stale = self
            .state
            .selected
            .as_deref()
            .is_some_and(|id| self.registry.get(id).is_none());
        if stale {
            self.state.selected = None;
        }
        stale
    }
}

impl Default for LocationSelector {
    fn default() -> Self {
        Self::new(Arc::new(FeatureRegistry::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geo::FeatureCategory;

    const REED: &str = "Reed Bank (Recto Bank)";

    #[test]
    fn test_starts_empty() {
        let selector = LocationSelector::default();
        assert!(selector.state().is_empty());
        assert!(selector.selected_feature().is_none());
    }

    #[test]
    fn test_select_reed_bank() {
        let mut selector = LocationSelector::default();
        let state = selector.select_feature(REED).unwrap();
        assert_eq!(state.selected.as_deref(), Some(REED));

        let feature = selector.selected_feature().unwrap();
        assert_eq!(feature.category, FeatureCategory::Resource);
        assert_eq!(feature.status_label, "RESOURCE ZONE");
    }

    #[test]
    fn test_reselect_is_not_a_toggle() {
        let mut selector = LocationSelector::default();
        for feature in FeatureRegistry::default().features() {
            selector.select_feature(&feature.id).unwrap();
            let again = selector.select_feature(&feature.id).unwrap();
            assert_eq!(again.selected.as_deref(), Some(feature.id.as_str()));
        }
    }

    #[test]
    fn test_unknown_id_is_rejected_and_selection_kept() {
        let mut selector = LocationSelector::default();
        let err = selector.select_feature("Atlantis").unwrap_err();
        assert_eq!(err, SelectionError::UnknownFeatureId("Atlantis".to_string()));
        assert!(selector.state().is_empty());

        selector.select_feature(REED).unwrap();
        assert!(selector.select_feature("").is_err());
        assert_eq!(selector.state().selected.as_deref(), Some(REED));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut selector = LocationSelector::default();
        selector.select_feature(REED).unwrap();
        assert!(selector.clear_selection().is_empty());
        assert!(selector.clear_selection().is_empty());
    }

    #[test]
    fn test_replace_registry_drops_stale_selection() {
        let mut selector = LocationSelector::default();
        selector.select_feature(REED).unwrap();

        let kept = FeatureRegistry::default();
        assert!(!selector.replace_registry(Arc::new(kept)));
        assert_eq!(selector.state().selected.as_deref(), Some(REED));

        let only_first = FeatureRegistry::new(
            FeatureRegistry::default().features()[..1].to_vec(),
            Vec::new(),
        )
        .unwrap();
        assert!(selector.replace_registry(Arc::new(only_first)));
        assert!(selector.state().is_empty());
    }
}
