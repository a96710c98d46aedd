//! Sub-ring table for the three-tier hexagonal layout.
//!
//! Every ring holds six sites at angles `k * 60° + offset_deg` for `k = 0..6`.
//! Radii are stored squared, in units of the cell radius, so the irrational
//! ones (`2√3`, `2√7`) stay readable as integers.

use crate::spatial::Site;

/// Sites per sub-ring
pub const SITES_PER_RING: usize = 6;

/// Angular step between sites in one sub-ring
pub const RING_STEP_DEG: f64 = 60.0;

/// Deepest tier the construction defines
pub const MAX_TIERS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubRing {
    pub tier: u32,
    pub label: &'static str,
    pub offset_deg: f64,
    /// Squared radius, as a multiple of the cell radius
    pub radius_sq: f64,
}

impl SubRing {
    /// Distance from the origin for a unit cell radius
    pub fn unit_radius(&self) -> f64 {
        self.radius_sq.sqrt()
    }

    pub fn angle_deg(&self, k: usize) -> f64 {
        k as f64 * RING_STEP_DEG + self.offset_deg
    }

    /// Positions of this ring for a unit cell radius, k = 0..6
    pub fn unit_sites(&self) -> impl Iterator<Item = Site> + '_ {
        let radius = self.unit_radius();
        (0..SITES_PER_RING).map(move |k| Site::polar(radius, self.angle_deg(k)))
    }
}

/// Tier 1: nearest neighbours, one site-spacing out
pub const TIER1: SubRing = SubRing {
    tier: 1,
    label: "tier1",
    offset_deg: 0.0,
    radius_sq: 4.0,
};

/// Tier 2, sub-ring A: two spacings out
pub const TIER2_OUTER: SubRing = SubRing {
    tier: 2,
    label: "tier2-a",
    offset_deg: -30.0,
    radius_sq: 16.0,
};

/// Tier 2, sub-ring B: the mid-edge sites, `2√3` out
pub const TIER2_EDGE: SubRing = SubRing {
    tier: 2,
    label: "tier2-b",
    offset_deg: 0.0,
    radius_sq: 12.0,
};

/// Tier 3 corners, three spacings out
pub const TIER3_OUTER: SubRing = SubRing {
    tier: 3,
    label: "tier3-a",
    offset_deg: -30.0,
    radius_sq: 36.0,
};

/// Tier 3 edge sites, `√28` out, first of the pair
pub const TIER3_EDGE_NEAR: SubRing = SubRing {
    tier: 3,
    label: "tier3-b",
    offset_deg: -50.0,
    radius_sq: 28.0,
};

/// Tier 3 edge sites, `√28` out, second of the pair
pub const TIER3_EDGE_FAR: SubRing = SubRing {
    tier: 3,
    label: "tier3-c",
    offset_deg: -70.0,
    radius_sq: 28.0,
};

/// Emission order after the origin. Tiers are contiguous and ascending.
pub static SUB_RINGS: [SubRing; 6] = [
    TIER1,
    TIER2_OUTER,
    TIER2_EDGE,
    TIER3_OUTER,
    TIER3_EDGE_NEAR,
    TIER3_EDGE_FAR,
];

/// Sub-rings that make up the first `tier_count` tiers
pub fn rings_through(tier_count: u32) -> impl Iterator<Item = &'static SubRing> {
    SUB_RINGS.iter().filter(move |ring| ring.tier <= tier_count)
}

/// Sites in a layout of `tier_count` tiers, origin included: 1, 7, 19, 37.
///
/// Saturates at `usize::MAX` for tier counts far past [`MAX_TIERS`].
pub fn site_count(tier_count: u32) -> usize {
    let t = tier_count as usize;
    t.saturating_add(1)
        .saturating_mul(t)
        .saturating_mul(3)
        .saturating_add(1)
}
