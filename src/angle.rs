//! Type-safe angles for jiggle pattern metadata.
//!
//! Uses the `uom` crate so position angles cannot be confused with bare
//! radian/degree doubles at call sites.

use uom::si::angle::{degree, radian, second};

/// Type alias for angles with convenient conversion methods.
pub type Angle = uom::si::f64::Angle;

/// Extension trait for angle conversions used in pointing metadata.
pub trait AngleExt {
    /// Create an angle from radians
    fn from_radians(rad: f64) -> Self;

    /// Get the angle in radians
    fn as_radians(&self) -> f64;

    /// Create an angle from degrees
    fn from_degrees(deg: f64) -> Self;

    /// Get the angle in degrees
    fn as_degrees(&self) -> f64;

    /// Create an angle from arcseconds
    fn from_arcseconds(arcsec: f64) -> Self;

    /// Get the angle in arcseconds
    fn as_arcseconds(&self) -> f64;
}

impl AngleExt for Angle {
    fn from_radians(rad: f64) -> Self {
        Angle::new::<radian>(rad)
    }

    fn as_radians(&self) -> f64 {
        self.get::<radian>()
    }

    fn from_degrees(deg: f64) -> Self {
        Angle::new::<degree>(deg)
    }

    fn as_degrees(&self) -> f64 {
        self.get::<degree>()
    }

    fn from_arcseconds(arcsec: f64) -> Self {
        Angle::new::<second>(arcsec)
    }

    fn as_arcseconds(&self) -> f64 {
        self.get::<second>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_radian_round_trip() {
        let angle = Angle::from_radians(1.25);
        assert_relative_eq!(angle.as_radians(), 1.25, epsilon = 1e-12);
    }

    #[test]
    fn test_degree_conversion() {
        let angle = Angle::from_degrees(180.0);
        assert_relative_eq!(angle.as_radians(), std::f64::consts::PI, epsilon = 1e-12);
        assert_relative_eq!(angle.as_degrees(), 180.0, epsilon = 1e-12);
    }

    #[test]
    fn test_arcsecond_conversion() {
        // 3600 arcsec = 1 degree
        let angle = Angle::from_arcseconds(3600.0);
        assert_relative_eq!(angle.as_degrees(), 1.0, epsilon = 1e-9);
    }
}
