//! Network configuration for campusnet
//!
//! Looked up in order: an explicit `--config` path, `./campusnet.toml`, then
//! `<config dir>/campusnet/campusnet.toml`. With none present the defaults
//! apply and data paths resolve against the working directory.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CampusError, Result};

pub use types::{DataConfig, NetworkConfig, RegistryConfig, CONFIG_FORMAT_VERSION};

/// Config file name searched for in the working directory
pub const CONFIG_FILE: &str = "campusnet.toml";
const CONFIG_DIR: &str = "campusnet";
const CONFIG_DIR_ENV_VAR: &str = "CAMPUSNET_CONFIG_DIR";

impl NetworkConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| CampusError::io_operation("read", path.display(), e))?;
        let config: NetworkConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CampusError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content).map_err(|e| CampusError::io_operation("write", path.display(), e))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.version != CONFIG_FORMAT_VERSION {
            return Err(CampusError::InvalidConfig {
                reason: format!(
                    "unsupported version {} (expected {})",
                    self.version, CONFIG_FORMAT_VERSION
                ),
            });
        }
        let limits = &self.registry;
        if limits.min_classes == 0 {
            return Err(CampusError::InvalidConfig {
                reason: "registry.min_classes must be at least 1".to_string(),
            });
        }
        if limits.min_classes > limits.max_classes {
            return Err(CampusError::InvalidConfig {
                reason: format!(
                    "registry.min_classes ({}) exceeds registry.max_classes ({})",
                    limits.min_classes, limits.max_classes
                ),
            });
        }
        Ok(())
    }
}

/// A configuration together with where it came from
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: NetworkConfig,
    /// File the config was read from, `None` for defaults
    pub source: Option<PathBuf>,
    /// Directory relative data paths are joined onto
    pub base_dir: PathBuf,
}

impl ResolvedConfig {
    pub fn defaults(base_dir: &Path) -> Self {
        ResolvedConfig {
            config: NetworkConfig::default(),
            source: None,
            base_dir: base_dir.to_path_buf(),
        }
    }

    pub fn edges_path(&self) -> PathBuf {
        resolve(&self.base_dir, &self.config.data.edges)
    }

    pub fn classes_path(&self) -> PathBuf {
        resolve(&self.base_dir, &self.config.data.classes)
    }

    /// Point the edge file at `path`, taken as given (relative to the
    /// working directory, not the config file)
    pub fn override_edges(&mut self, path: &Path, cwd: &Path) {
        self.config.data.edges = resolve(cwd, &path.to_string_lossy())
            .to_string_lossy()
            .into_owned();
    }

    pub fn override_classes(&mut self, path: &Path, cwd: &Path) {
        self.config.data.classes = resolve(cwd, &path.to_string_lossy())
            .to_string_lossy()
            .into_owned();
    }
}

fn resolve(base: &Path, raw: &str) -> PathBuf {
    let path = Path::new(raw);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Per-user config file location
pub fn user_config_path() -> Option<PathBuf> {
    // Allow environment variable override for testing
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Find and load the configuration in effect for `cwd`
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<ResolvedConfig> {
    discover_with(explicit, cwd, user_config_path())
}

fn discover_with(
    explicit: Option<&Path>,
    cwd: &Path,
    user_path: Option<PathBuf>,
) -> Result<ResolvedConfig> {
    if let Some(path) = explicit {
        let path = resolve(cwd, &path.to_string_lossy());
        if !path.is_file() {
            return Err(CampusError::not_found("config file", path.display()));
        }
        return from_file(path);
    }

    let local = cwd.join(CONFIG_FILE);
    if local.is_file() {
        return from_file(local);
    }

    if let Some(user) = user_path.filter(|p| p.is_file()) {
        return from_file(user);
    }

    tracing::debug!(cwd = %cwd.display(), "no config file found, using defaults");
    Ok(ResolvedConfig::defaults(cwd))
}

fn from_file(path: PathBuf) -> Result<ResolvedConfig> {
    let config = NetworkConfig::load(&path)?;
    let base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(ResolvedConfig {
        config,
        source: Some(path),
        base_dir,
    })
}
