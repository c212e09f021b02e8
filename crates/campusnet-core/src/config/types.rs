//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Network configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Input data files
    #[serde(default)]
    pub data: DataConfig,

    /// Enrollment limits
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Locations of the edge and class CSV files
///
/// Relative paths resolve against the directory holding the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_edges_path")]
    pub edges: String,

    #[serde(default = "default_classes_path")]
    pub classes: String,
}

/// Bounds on how many classes one student may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default = "default_min_classes")]
    pub min_classes: usize,

    #[serde(default = "default_max_classes")]
    pub max_classes: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            version: CONFIG_FORMAT_VERSION,
            data: DataConfig::default(),
            registry: RegistryConfig::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            edges: default_edges_path(),
            classes: default_classes_path(),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            min_classes: default_min_classes(),
            max_classes: default_max_classes(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_edges_path() -> String {
    "data/edges.csv".to_string()
}

fn default_classes_path() -> String {
    "data/classes.csv".to_string()
}

fn default_min_classes() -> usize {
    1
}

fn default_max_classes() -> usize {
    6
}
