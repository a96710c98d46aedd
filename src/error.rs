//! Error types for topology generation and layout loading

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TopologyError>;

#[derive(Debug, Error)]
pub enum TopologyError {
    /// Radius or tier count outside what the hexagonal construction defines
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("layout parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl TopologyError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        TopologyError::InvalidConfiguration(msg.into())
    }

    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, TopologyError::InvalidConfiguration(_))
    }
}
