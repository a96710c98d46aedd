pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod spatial;
pub mod topology;

pub use config::{ConfigLoader, TopologyConfig};
pub use error::{Result, TopologyError};
pub use export::{write_sites, OutputFormat};
pub use spatial::Site;
pub use topology::{generate, site_count, HexGridGenerator, SiteList, SiteRecord, MAX_TIERS};
