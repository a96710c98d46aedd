//! Layout configuration loaded from YAML

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::export::OutputFormat;
use crate::topology::{self, HexGridGenerator, SiteList};

/// Parameters for one base-station layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Half the distance between neighbouring sites
    #[serde(default = "default_cell_radius")]
    pub cell_radius: f64,
    #[serde(default = "default_tiers")]
    pub tiers: u32,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_name() -> String {
    "three_tier".to_string()
}

fn default_cell_radius() -> f64 {
    200.0
}

fn default_tiers() -> u32 {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            cell_radius: default_cell_radius(),
            tiers: default_tiers(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl TopologyConfig {
    /// Load configuration from YAML file
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&contents)?;
        info!(
            path = %path.as_ref().display(),
            name = %config.name,
            "loaded layout config"
        );
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Save configuration to YAML file
    pub fn to_yaml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        topology::validate(self.cell_radius, self.tiers)
    }

    /// Number of base stations this layout produces
    pub fn expected_sites(&self) -> Result<usize> {
        self.validate()?;
        Ok(topology::site_count(self.tiers))
    }

    pub fn generator(&self) -> Result<HexGridGenerator> {
        HexGridGenerator::new(self.cell_radius, self.tiers)
    }

    pub fn generate(&self) -> Result<SiteList> {
        Ok(self.generator()?.generate())
    }
}

/// Resolves layout files relative to a base directory
pub struct ConfigLoader {
    base_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> anyhow::Result<TopologyConfig> {
        let path = self.base_dir.join(file);
        let config = TopologyConfig::from_yaml(&path)
            .with_context(|| format!("Failed to load layout {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid layout {}", path.display()))?;
        Ok(config)
    }
}
