//! Spatial model - planar site coordinates

use serde::{Deserialize, Serialize};

/// Default tolerance for coordinate comparisons, in layout units
pub const COORD_EPSILON: f64 = 1e-9;

/// Base-station location on the plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Site {
    pub x: f64,
    pub y: f64,
}

impl Site {
    pub const ORIGIN: Site = Site { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` along the direction `degrees` counter-clockwise from +x
    pub fn polar(radius: f64, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            x: radius * cos,
            y: radius * sin,
        }
    }

    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between two sites
    pub fn distance_to(&self, other: Site) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Rotate about the origin
    pub fn rotated(&self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    pub fn approx_eq(&self, other: Site, epsilon: f64) -> bool {
        self.distance_to(other) <= epsilon
    }
}

impl From<Site> for (f64, f64) {
    fn from(site: Site) -> Self {
        (site.x, site.y)
    }
}

impl From<(f64, f64)> for Site {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_axes() {
        let east = Site::polar(2.0, 0.0);
        assert!(east.approx_eq(Site::new(2.0, 0.0), COORD_EPSILON));

        let north = Site::polar(2.0, 90.0);
        assert!(north.approx_eq(Site::new(0.0, 2.0), COORD_EPSILON));
    }

    #[test]
    fn test_distance() {
        let a = Site::new(0.0, 0.0);
        let b = Site::new(3.0, 4.0);

        assert!((a.distance_to(b) - 5.0).abs() < COORD_EPSILON);
        assert!((b.norm() - 5.0).abs() < COORD_EPSILON);
    }

    #[test]
    fn test_rotation_keeps_norm() {
        let site = Site::new(3.0, 4.0);
        let turned = site.rotated(60.0);

        assert!((turned.norm() - 5.0).abs() < COORD_EPSILON);
        assert!(turned.rotated(-60.0).approx_eq(site, COORD_EPSILON));
    }

    #[test]
    fn test_tuple_conversion() {
        let site: Site = (1.5, -2.0).into();
        let pair: (f64, f64) = site.scaled(2.0).into();
        assert_eq!(pair, (3.0, -4.0));
    }
}
