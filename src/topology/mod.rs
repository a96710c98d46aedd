//! Hexagonal base-station layout generation

mod rings;

use std::ops::Deref;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::error::{Result, TopologyError};
use crate::spatial::Site;

pub use rings::{rings_through, site_count, SubRing, MAX_TIERS, SITES_PER_RING, SUB_RINGS};

/// Generate the site coordinates for a layout of `tier_count` tiers around
/// the origin site.
///
/// Fails with [`TopologyError::InvalidConfiguration`] when the radius is not a
/// positive finite number or the tier count exceeds [`MAX_TIERS`].
pub fn generate(cell_radius: f64, tier_count: u32) -> Result<SiteList> {
    Ok(HexGridGenerator::new(cell_radius, tier_count)?.generate())
}

/// Validated layout parameters. Construction is the only fallible step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexGridGenerator {
    cell_radius: f64,
    tier_count: u32,
}

impl HexGridGenerator {
    pub fn new(cell_radius: f64, tier_count: u32) -> Result<Self> {
        validate(cell_radius, tier_count)?;
        Ok(Self {
            cell_radius,
            tier_count,
        })
    }

    pub fn cell_radius(&self) -> f64 {
        self.cell_radius
    }

    pub fn tier_count(&self) -> u32 {
        self.tier_count
    }

    /// Origin first, then every sub-ring in table order.
    pub fn generate(&self) -> SiteList {
        let mut sites = Vec::with_capacity(site_count(self.tier_count));
        sites.push(Site::ORIGIN);
        for ring in rings_through(self.tier_count) {
            trace!(ring = ring.label, radius = ring.unit_radius() * self.cell_radius);
            sites.extend(ring.unit_sites().map(|unit| unit.scaled(self.cell_radius)));
        }

        debug!(
            cell_radius = self.cell_radius,
            tiers = self.tier_count,
            sites = sites.len(),
            "generated hexagonal layout"
        );

        SiteList {
            sites,
            tier_count: self.tier_count,
        }
    }
}

pub(crate) fn validate(cell_radius: f64, tier_count: u32) -> Result<()> {
    if !cell_radius.is_finite() || cell_radius <= 0.0 {
        warn!(cell_radius, "rejecting non-positive cell radius");
        return Err(TopologyError::invalid(format!(
            "cell radius must be a positive finite number, got {cell_radius}"
        )));
    }
    if tier_count > MAX_TIERS {
        warn!(tier_count, "rejecting unsupported tier count");
        return Err(TopologyError::invalid(format!(
            "tier count must be at most {MAX_TIERS}, got {tier_count}"
        )));
    }
    Ok(())
}

/// Immutable, ordered result of a generation run.
///
/// Dereferences to `[Site]`; index 0 is always the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteList {
    sites: Vec<Site>,
    tier_count: u32,
}

/// One row of the hand-off stream for a plotter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SiteRecord {
    pub index: usize,
    pub tier: u32,
    pub x: f64,
    pub y: f64,
}

impl SiteList {
    pub fn tier_count(&self) -> u32 {
        self.tier_count
    }

    pub fn origin(&self) -> Site {
        self.sites[0]
    }

    /// Sites contributed by one tier; tier 0 is the origin alone
    pub fn tier(&self, tier: u32) -> &[Site] {
        if tier > self.tier_count {
            return &[];
        }
        let start = if tier == 0 { 0 } else { site_count(tier - 1) };
        &self.sites[start..site_count(tier)]
    }

    pub fn tier_of(&self, index: usize) -> Option<u32> {
        if index >= self.sites.len() {
            return None;
        }
        (0..=self.tier_count).find(|&tier| index < site_count(tier))
    }

    /// Distance from the origin to the outermost site
    pub fn max_range(&self) -> f64 {
        self.sites.iter().map(Site::norm).fold(0.0, f64::max)
    }

    pub fn to_pairs(&self) -> Vec<(f64, f64)> {
        self.sites.iter().map(|&site| site.into()).collect()
    }

    pub fn records(&self) -> impl Iterator<Item = SiteRecord> + '_ {
        self.sites.iter().enumerate().map(|(index, site)| SiteRecord {
            index,
            tier: self.tier_of(index).unwrap_or(self.tier_count),
            x: site.x,
            y: site.y,
        })
    }
}

impl Deref for SiteList {
    type Target = [Site];

    fn deref(&self) -> &Self::Target {
        &self.sites
    }
}

impl<'a> IntoIterator for &'a SiteList {
    type Item = &'a Site;
    type IntoIter = std::slice::Iter<'a, Site>;

    fn into_iter(self) -> Self::IntoIter {
        self.sites.iter()
    }
}
