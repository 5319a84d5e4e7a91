//! Axis-aligned bounding extent of a point set.
//!
//! Computes and stores the minimum and maximum X/Y values over a slice of
//! 2D points. Non-finite coordinates are detected and reported as errors
//! rather than silently poisoning the min/max comparisons.

use crate::error::JiggleError;

/// Axis-aligned bounding box of a jiggle pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Minimum X coordinate.
    pub x_min: f64,
    /// Maximum X coordinate.
    pub x_max: f64,
    /// Minimum Y coordinate.
    pub y_min: f64,
    /// Maximum Y coordinate.
    pub y_max: f64,
}

impl Extent {
    /// Compute the extent of a slice of (x, y) points.
    ///
    /// # Returns
    /// * `Ok(Extent)` - Bounding box over all points
    /// * `Err(JiggleError::EmptyPattern)` - If the slice is empty
    /// * `Err(JiggleError::NonFinitePoint)` - If any coordinate is NaN or infinite
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self, JiggleError> {
        let mut bounds: Option<Extent> = None;

        for (index, &(x, y)) in points.iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(JiggleError::NonFinitePoint { index });
            }

            bounds = Some(match bounds {
                None => Extent {
                    x_min: x,
                    x_max: x,
                    y_min: y,
                    y_max: y,
                },
                Some(b) => Extent {
                    x_min: b.x_min.min(x),
                    x_max: b.x_max.max(x),
                    y_min: b.y_min.min(y),
                    y_max: b.y_max.max(y),
                },
            });
        }

        bounds.ok_or(JiggleError::EmptyPattern)
    }

    /// Width of the bounding box (x_max - x_min).
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the bounding box (y_max - y_min).
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Extent as a (x_min, x_max, y_min, y_max) tuple.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.x_min, self.x_max, self.y_min, self.y_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_basic_extent() {
        let extent = Extent::from_points(&[(1.0, -2.0), (3.0, 4.0), (-5.0, 0.0)]).unwrap();

        assert_relative_eq!(extent.x_min, -5.0);
        assert_relative_eq!(extent.x_max, 3.0);
        assert_relative_eq!(extent.y_min, -2.0);
        assert_relative_eq!(extent.y_max, 4.0);
        assert_relative_eq!(extent.width(), 8.0);
        assert_relative_eq!(extent.height(), 6.0);
    }

    #[test]
    fn test_y_bounds_come_from_y_values() {
        // X and Y ranges deliberately differ so a mixed-up axis would show.
        let extent = Extent::from_points(&[(-10.0, 1.0), (10.0, 2.0)]).unwrap();

        assert_eq!(extent.as_tuple(), (-10.0, 10.0, 1.0, 2.0));
    }

    #[test]
    fn test_single_point() {
        let extent = Extent::from_points(&[(2.5, -1.5)]).unwrap();
        assert_eq!(extent.as_tuple(), (2.5, 2.5, -1.5, -1.5));
        assert_relative_eq!(extent.width(), 0.0);
    }

    #[test]
    fn test_empty_points() {
        let result = Extent::from_points(&[]);
        assert!(matches!(result, Err(JiggleError::EmptyPattern)));
    }

    #[test]
    fn test_nan_coordinate() {
        let result = Extent::from_points(&[(1.0, 2.0), (f64::NAN, 0.0)]);
        assert!(matches!(
            result,
            Err(JiggleError::NonFinitePoint { index: 1 })
        ));
    }

    #[test]
    fn test_infinite_coordinate() {
        let result = Extent::from_points(&[(0.0, f64::INFINITY)]);
        assert!(matches!(
            result,
            Err(JiggleError::NonFinitePoint { index: 0 })
        ));
    }
}
