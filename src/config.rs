// config.rs
use crate::platform::offline_cache::{DirFetcher, OfflineCache, ASSET_MANIFEST, CACHE_NAME};
use crate::resources::{SetupOptions, Timing, PLAYER_COUNT_RANGE};
use bevy::prelude::*;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_PATH: &str = "config.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config.ron: {0}")]
    Read(#[from] crate::platform::PlatformError),
    #[error("config.ron is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("could not parse config.ron: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Tunables read from `assets/config.ron`. Every field is optional.
#[derive(Resource, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CounterConfig {
    pub default_player_count: usize,
    pub default_life: i64,
    pub long_press_ms: u64,
    pub long_press_multiplier: i64,
    pub merge_window_ms: u64,
    pub indicator_hide_ms: u64,
    pub first_player_badge_ms: u64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            default_player_count: 4,
            default_life: 40,
            long_press_ms: 500,
            long_press_multiplier: 5,
            merge_window_ms: 3000,
            indicator_hide_ms: 2500,
            first_player_badge_ms: 3000,
        }
    }
}

impl CounterConfig {
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(source)?)
    }

    pub fn timing(&self) -> Timing {
        Timing {
            long_press: Duration::from_millis(self.long_press_ms),
            long_press_multiplier: self.long_press_multiplier,
            merge_window: Duration::from_millis(self.merge_window_ms),
            indicator_hide: Duration::from_millis(self.indicator_hide_ms),
            first_player_badge: Duration::from_millis(self.first_player_badge_ms),
        }
    }

    pub fn setup_options(&self) -> SetupOptions {
        let (min, max) = PLAYER_COUNT_RANGE.into_inner();
        SetupOptions {
            player_count: self.default_player_count.clamp(min, max),
            initial_life: self.default_life,
        }
    }
}

/// Primes the offline cache and loads the configuration through it. Falls
/// back to defaults when anything goes wrong.
pub struct ConfigPlugin {
    pub asset_root: PathBuf,
    pub cache_dir: PathBuf,
}

impl Default for ConfigPlugin {
    fn default() -> Self {
        Self {
            asset_root: asset_base_path().join("assets"),
            cache_dir: env::temp_dir().join(CACHE_NAME),
        }
    }
}

/// Same lookup order as Bevy's file asset reader: `BEVY_ASSET_ROOT`, then
/// `CARGO_MANIFEST_DIR`, then the directory of the executable.
fn asset_base_path() -> PathBuf {
    if let Ok(root) = env::var("BEVY_ASSET_ROOT") {
        PathBuf::from(root)
    } else if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        PathBuf::from(manifest_dir)
    } else {
        env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(PathBuf::from))
            .unwrap_or_default()
    }
}

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        let cache = OfflineCache::new(
            &self.cache_dir,
            DirFetcher::new(&self.asset_root),
            ASSET_MANIFEST,
        );
        if let Err(err) = cache.install() {
            debug!("Offline cache not installed: {err}");
        }

        let config = match load(&cache) {
            Ok(config) => {
                info!("Loaded {CONFIG_PATH}");
                config
            }
            Err(err) => {
                warn!("{err}; using default settings");
                CounterConfig::default()
            }
        };

        app.insert_resource(config.setup_options())
            .insert_resource(config);
    }
}

fn load(cache: &OfflineCache<DirFetcher>) -> Result<CounterConfig, ConfigError> {
    let bytes = cache.serve(CONFIG_PATH)?;
    CounterConfig::parse(&String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        assert_eq!(CounterConfig::parse("()").unwrap(), CounterConfig::default());
    }

    #[test]
    fn partial_config_overrides_named_fields() {
        let config = CounterConfig::parse("(default_life: 20, long_press_ms: 750)").unwrap();
        assert_eq!(config.default_life, 20);
        assert_eq!(config.timing().long_press, Duration::from_millis(750));
        assert_eq!(config.timing().merge_window, Duration::from_millis(3000));
    }

    #[test]
    fn bundled_config_parses() {
        let source = include_str!("../assets/config.ron");
        let config = CounterConfig::parse(source).unwrap();
        assert_eq!(config.timing(), Timing::default());
        assert_eq!(config.setup_options(), SetupOptions::default());
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(matches!(
            CounterConfig::parse("(default_life: \"lots\")"),
            Err(ConfigError::Parse(_))
        ));
    }

    fn plugin_config(asset_files: &[(&str, &str)]) -> (CounterConfig, SetupOptions) {
        let assets = tempfile::tempdir().unwrap();
        let cache = tempfile::tempdir().unwrap();
        for (path, body) in asset_files {
            std::fs::write(assets.path().join(path), body).unwrap();
        }

        let mut app = App::new();
        app.add_plugins(ConfigPlugin {
            asset_root: assets.path().to_path_buf(),
            cache_dir: cache.path().to_path_buf(),
        });
        (
            app.world().resource::<CounterConfig>().clone(),
            *app.world().resource::<SetupOptions>(),
        )
    }

    #[test]
    fn plugin_loads_config_from_asset_root() {
        let (config, options) = plugin_config(&[("config.ron", "(default_player_count: 6)")]);
        assert_eq!(config.default_player_count, 6);
        assert_eq!(options.player_count, 6);
    }

    #[test]
    fn plugin_falls_back_to_defaults_when_config_is_missing() {
        let (config, options) = plugin_config(&[]);
        assert_eq!(config, CounterConfig::default());
        assert_eq!(options, SetupOptions::default());
    }

    #[test]
    fn plugin_falls_back_to_defaults_when_config_is_malformed() {
        let (config, _) = plugin_config(&[("config.ron", "(default_life: \"lots\")")]);
        assert_eq!(config, CounterConfig::default());
    }

    #[test]
    fn default_player_count_is_clamped() {
        let config = CounterConfig::parse("(default_player_count: 12)").unwrap();
        assert_eq!(config.setup_options().player_count, 9);
    }
}
