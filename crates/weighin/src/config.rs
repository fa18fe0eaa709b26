use crate::events::AppEvent;
use async_channel::Sender;
use config::builder::DefaultState;
use config::ConfigBuilder;
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use ringscale::{Color, Density, ScaleRange, ScaleStyle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub scale_height: i32,
    pub background: Color,
    pub weight_color: Color,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 720,
            scale_height: 300,
            background: Color::white(),
            weight_color: Color::from_rgba8(0x00, 0xff, 0x00, 0xff),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub range: ScaleRange,
    #[serde(default)]
    pub style: ScaleStyle,
    #[serde(default)]
    pub density: Density,
    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Range values given on the command line; they win over the file and environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub initial: Option<i64>,
}

impl Overrides {
    fn apply(
        &self,
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(builder
            .set_override_option("range.min", self.min)?
            .set_override_option("range.max", self.max)?
            .set_override_option("range.initial", self.initial)?)
    }
}

#[derive(Debug, Clone)]
pub struct ConfigSource {
    path: PathBuf,
    overrides: Overrides,
}

impl ConfigSource {
    pub fn new(path: PathBuf, overrides: Overrides) -> Self {
        Self { path, overrides }
    }

    pub fn default_location(overrides: Overrides) -> Result<Self, ConfigError> {
        Ok(Self::new(get_config_path()?, overrides))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(self.path.clone()).required(false))
            .add_source(
                config::Environment::with_prefix("WEIGHIN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let s = self.overrides.apply(builder)?.build()?;
        Ok(s.try_deserialize()?)
    }
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "weighin", "weighin").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_or_default(source: &ConfigSource) -> Config {
    match source.load() {
        Ok(c) => c,
        Err(e) => {
            log::error!(
                "Failed to load {}: {}, using defaults",
                source.path().display(),
                e
            );
            Config::default()
        }
    }
}

/// Writes [`DEFAULT_CONFIG`] to `path` unless a file is already there.
pub fn write_default_config(path: &Path) -> std::io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(path.to_path_buf())
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

pub async fn run_async_watcher(tx: Sender<AppEvent>, config_path: PathBuf) {
    if let Err(e) = watch_config(&tx, &config_path).await {
        log::error!("Config watcher error: {}", e);
    }
}

async fn watch_config(tx: &Sender<AppEvent>, config_path: &Path) -> Result<(), ConfigError> {
    let Some(config_dir) = config_path.parent() else {
        return Ok(());
    };
    fs_err::create_dir_all(config_dir)?;

    let (bridge_tx, bridge_rx) = async_channel::unbounded();
    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    )?;
    watcher.watch(config_dir, RecursiveMode::NonRecursive)?;
    log::debug!("Watching {}", config_dir.display());

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
    Ok(())
}
