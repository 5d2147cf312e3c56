use super::keymap::KeyConfig;
use super::state::BaseLayer;
use crate::domain::command::{CommandEffect, CommandEntry, CommandTable, CommandTableError};
use crate::domain::geo::{
    builtin_overlays, FeatureCategory, FeatureRegistry, GeoError, GeoFeature, LatLon,
};
use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "ATINTO_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config syntax: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("command '{trigger}' must set exactly one of `reply` or `effect`")]
    AmbiguousCommand { trigger: String },
    #[error("invalid command table: {0}")]
    Commands(#[from] CommandTableError),
    #[error("invalid feature '{id}': {source}")]
    Feature {
        id: String,
        #[source]
        source: GeoError,
    },
    #[error("invalid feature registry: {0}")]
    Registry(#[from] GeoError),
    #[error("invalid key binding '{key}' = '{action}'")]
    InvalidKeyBinding { key: String, action: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: PaletteType,
    pub legend_open: bool,
    pub base_layer: BaseLayer,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: PaletteType::default(),
            legend_open: true,
            base_layer: BaseLayer::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    Reset,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandConfig {
    pub trigger: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<EffectKind>,
}

impl CommandConfig {
    fn to_entry(&self) -> Result<CommandEntry, ConfigError> {
        let effect = match (&self.reply, self.effect) {
            (Some(text), None) => CommandEffect::FixedReply(text.clone()),
            (None, Some(EffectKind::Reset)) => CommandEffect::ResetTranscript,
            _ => {
                return Err(ConfigError::AmbiguousCommand {
                    trigger: self.trigger.clone(),
                })
            }
        };
        Ok(CommandEntry::new(&self.trigger, effect))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureConfig {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub category: FeatureCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
}

impl FeatureConfig {
    fn to_feature(&self) -> Result<GeoFeature, ConfigError> {
        let coordinates = LatLon::new(self.lat, self.lon).map_err(|source| ConfigError::Feature {
            id: self.id.clone(),
            source,
        })?;
        Ok(GeoFeature {
            id: self.id.clone(),
            coordinates,
            category: self.category,
            description: self.description.clone(),
            status_label: self.status.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub keys: KeyConfig,
    /// Extends or overrides the built-in command table.
    pub commands: Vec<CommandConfig>,
    /// Replaces the built-in feature registry when non-empty.
    pub features: Vec<FeatureConfig>,
}

impl AppConfig {
    pub fn command_table(&self) -> Result<CommandTable, ConfigError> {
        let overrides = self
            .commands
            .iter()
            .map(CommandConfig::to_entry)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CommandTable::default().with_overrides(overrides)?)
    }

    pub fn feature_registry(&self) -> Result<FeatureRegistry, ConfigError> {
        if self.features.is_empty() {
            return Ok(FeatureRegistry::default());
        }
        let features = self
            .features
            .iter()
            .map(FeatureConfig::to_feature)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FeatureRegistry::new(features, builtin_overlays())?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.command_table()?;
        self.feature_registry()?;
        super::keymap::KeyMap::from_config(&self.keys)?;
        Ok(())
    }
}

/// Parses and validates a config document.
pub fn parse(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Where the config comes from. The run loop reloads through this seam.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigSource: Send + Sync {
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// File to watch for changes, if any.
    fn path(&self) -> Option<PathBuf>;
}

#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: Option<PathBuf>,
}

impl FileConfigSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// `$ATINTO_CONFIG`, else `~/.config/atinto/config.toml`.
    #[must_use]
    pub fn from_env() -> Self {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(default_config_path);
        Self { path }
    }
}

impl ConfigSource for FileConfigSource {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        let Some(path) = &self.path else {
            return Ok(AppConfig::default());
        };
        load_file(path)
    }

    fn path(&self) -> Option<PathBuf> {
        self.path.clone()
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("atinto");
        path.push("config.toml");
        path
    })
}

/// A missing file means defaults.
pub fn load_file(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse(&content)?;
    tracing::info!(
        path = %path.display(),
        commands = config.commands.len(),
        features = config.features.len(),
        "config loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
[ui]
theme = "nord"
legend_open = false
base_layer = "satellite"

[keys]
profile = "default"

[[commands]]
trigger = "Status"
reply = "All stations green."

[[commands]]
trigger = "wipe"
effect = "reset"

[[features]]
id = "Sabina Shoal (Escoda Shoal)"
lat = 9.75
lon = 116.48
category = "disputed"
description = "Coast guard standoff site."
status = "CONTESTED"
"#;

    #[test]
    fn test_parse_full_document() {
        let config = parse(SAMPLE).unwrap();
        assert_eq!(config.ui.theme, PaletteType::Nord);
        assert!(!config.ui.legend_open);
        assert_eq!(config.ui.base_layer, BaseLayer::Satellite);

        let table = config.command_table().unwrap();
        assert_eq!(
            table.lookup("status"),
            Some(&CommandEffect::FixedReply("All stations green.".to_string()))
        );
        assert_eq!(table.lookup("WIPE"), Some(&CommandEffect::ResetTranscript));
        assert!(table.lookup("help").is_some());

        let registry = config.feature_registry().unwrap();
        assert_eq!(registry.features().len(), 1);
        assert_eq!(registry.overlays().len(), 3);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = parse("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.ui.legend_open);
        assert_eq!(config.feature_registry().unwrap(), FeatureRegistry::default());
    }

    #[test]
    fn test_command_needs_exactly_one_effect() {
        let both = "[[commands]]\ntrigger = \"x\"\nreply = \"y\"\neffect = \"reset\"\n";
        assert!(matches!(
            parse(both),
            Err(ConfigError::AmbiguousCommand { trigger }) if trigger == "x"
        ));

        let neither = "[[commands]]\ntrigger = \"x\"\n";
        assert!(matches!(
            parse(neither),
            Err(ConfigError::AmbiguousCommand { .. })
        ));
    }

    #[test]
    fn test_duplicate_command_triggers_are_rejected() {
        let doc = "[[commands]]\ntrigger = \"ping\"\nreply = \"a\"\n\n[[commands]]\ntrigger = \"PING\"\nreply = \"b\"\n";
        assert!(matches!(
            parse(doc),
            Err(ConfigError::Commands(CommandTableError::DuplicateTrigger(t))) if t == "ping"
        ));
    }

    #[test]
    fn test_out_of_range_feature_is_rejected() {
        let doc = "[[features]]\nid = \"nowhere\"\nlat = 95.0\nlon = 0.0\ncategory = \"outpost\"\n";
        let err = parse(doc).unwrap_err();
        assert!(matches!(err, ConfigError::Feature { ref id, .. } if id == "nowhere"));
        assert!(err.to_string().contains("latitude 95"));
    }

    #[test]
    fn test_unknown_category_is_a_parse_error() {
        let doc = "[[features]]\nid = \"x\"\nlat = 1.0\nlon = 1.0\ncategory = \"secret\"\n";
        assert!(matches!(parse(doc), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_file_missing_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_file_source_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let source = FileConfigSource::new(file.path());
        assert_eq!(source.path().as_deref(), Some(file.path()));
        let config = source.load().unwrap();
        assert_eq!(config.commands.len(), 2);
    }

    #[test]
    fn test_file_source_reports_bad_syntax() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[ui\ntheme = ").unwrap();
        let err = FileConfigSource::new(file.path()).load().unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = parse(SAMPLE).unwrap();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(parse(&text).unwrap(), config);
    }
}
