//! SMU jiggle pattern: an ordered list of 2D sky offsets.
//!
//! Patterns are read from a plain-text file with one offset per line. A line
//! is data if and only if it contains at least one digit; all other lines are
//! ignored, which doubles as the comment mechanism (there is no explicit
//! comment marker in the format). Data lines hold exactly two
//! whitespace-separated numbers: the X and Y offsets.

use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::angle::{Angle, AngleExt};
use crate::coord::{CoordinateSystem, Offset};
use crate::error::JiggleError;
use crate::extent::Extent;

/// An ordered sequence of 2D jiggle offsets plus pointing metadata.
///
/// The stored points are never mutated by the scale factor; scaling is
/// applied on the fly in the derived views ([`scaled_points`], [`xy`],
/// [`extent`], [`offsets`]).
///
/// [`scaled_points`]: JigglePattern::scaled_points
/// [`xy`]: JigglePattern::xy
/// [`extent`]: JigglePattern::extent
/// [`offsets`]: JigglePattern::offsets
#[derive(Debug, Clone)]
pub struct JigglePattern {
    /// Unscaled offsets in file order. Duplicates are kept.
    points: Vec<(f64, f64)>,
    /// Multiplicative scale applied in derived views.
    scale: f64,
    /// Source file, when the pattern was loaded from disk.
    filename: Option<PathBuf>,
    /// Pattern name, auto-derived from the filename's basename.
    name: Option<String>,
    /// Frame the offsets are expressed in.
    coordinate_system: CoordinateSystem,
    /// Position angle of the pattern on the sky. Stored metadata only;
    /// not applied to the emitted offsets.
    position_angle: Angle,
}

impl JigglePattern {
    /// Create an empty pattern with default metadata.
    ///
    /// Defaults: scale 1, TRACKING coordinate system, zero position angle.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            scale: 1.0,
            filename: None,
            name: None,
            coordinate_system: CoordinateSystem::default(),
            position_angle: Angle::from_radians(0.0),
        }
    }

    /// Load a pattern from a file.
    ///
    /// The filename and derived pattern name are recorded on the result.
    ///
    /// # Errors
    /// * [`JiggleError::Io`] if the file cannot be opened or read
    /// * [`JiggleError::MalformedLine`] if a data line is not two finite numbers
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, JiggleError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let mut pattern = Self::new();
        pattern.import_from_text(&content)?;
        pattern.set_filename(path);

        debug!(
            path = %path.display(),
            points = pattern.len(),
            "loaded jiggle pattern"
        );
        Ok(pattern)
    }

    /// Generate a square grid of offsets centered on (0, 0).
    ///
    /// Creates `grid_size × grid_size` points separated by `spacing`, in
    /// row-major order. A `grid_size` of 0 yields an empty pattern.
    pub fn centered_grid(grid_size: usize, spacing: f64) -> Self {
        let half_extent = grid_size.saturating_sub(1) as f64 / 2.0;

        let mut points = Vec::with_capacity(grid_size * grid_size);
        for row in 0..grid_size {
            for col in 0..grid_size {
                let x = (col as f64 - half_extent) * spacing;
                let y = (row as f64 - half_extent) * spacing;
                points.push((x, y));
            }
        }

        let mut pattern = Self::new();
        pattern.points = points;
        pattern
    }

    /// Parse pattern text and append its points to this pattern.
    ///
    /// Lines without a digit are skipped; everything else must trim and
    /// split into exactly two finite numeric tokens.
    ///
    /// # Errors
    /// [`JiggleError::MalformedLine`] with the 1-based line number when a
    /// digit-containing line does not yield exactly two finite numbers.
    pub fn import_from_text(&mut self, content: &str) -> Result<(), JiggleError> {
        for (index, line) in content.lines().enumerate() {
            if !line.bytes().any(|b| b.is_ascii_digit()) {
                trace!(line = index + 1, "skipping non-data line");
                continue;
            }

            let malformed = || JiggleError::MalformedLine {
                line: index + 1,
                content: line.trim().to_string(),
            };

            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != 2 {
                return Err(malformed());
            }

            let x: f64 = tokens[0].parse().map_err(|_| malformed())?;
            let y: f64 = tokens[1].parse().map_err(|_| malformed())?;
            if !x.is_finite() || !y.is_finite() {
                return Err(malformed());
            }

            self.points.push((x, y));
        }

        Ok(())
    }

    /// Unscaled pattern points in file order.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Replace the entire point list.
    pub fn set_points(&mut self, points: Vec<(f64, f64)>) {
        self.points = points;
    }

    /// Number of points in the pattern.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the pattern has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Current scale factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Set the scale factor applied in derived views.
    ///
    /// Stored points are unaffected. A value of exactly 0.0 is treated as
    /// "no scaling" (effective scale 1) when views are computed.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    /// Scale used when computing derived views. Zero falls back to 1.
    fn effective_scale(&self) -> f64 {
        if self.scale == 0.0 {
            1.0
        } else {
            self.scale
        }
    }

    /// Pattern points with the scale factor applied to both coordinates.
    pub fn scaled_points(&self) -> Vec<(f64, f64)> {
        let scale = self.effective_scale();
        self.points.iter().map(|&(x, y)| (x * scale, y * scale)).collect()
    }

    /// Scaled coordinates as parallel (xs, ys) arrays of length [`len`].
    ///
    /// [`len`]: JigglePattern::len
    pub fn xy(&self) -> (Vec<f64>, Vec<f64>) {
        self.scaled_points().into_iter().unzip()
    }

    /// Bounding extent of the scaled pattern.
    ///
    /// # Errors
    /// * [`JiggleError::EmptyPattern`] for a pattern with no points
    /// * [`JiggleError::NonFinitePoint`] if any coordinate is NaN or infinite
    pub fn extent(&self) -> Result<Extent, JiggleError> {
        Extent::from_points(&self.scaled_points())
    }

    /// True if any unscaled point is exactly (0, 0).
    ///
    /// Exact floating comparison, and deliberately independent of the scale
    /// factor: a non-origin point scaled to (0, 0) does not count.
    pub fn has_origin(&self) -> bool {
        self.points.iter().any(|&(x, y)| x == 0.0 && y == 0.0)
    }

    /// Scaled points as offsets tagged with the current coordinate system.
    ///
    /// The position angle is not applied; offsets come out unrotated.
    pub fn offsets(&self) -> Vec<Offset> {
        let system = self.coordinate_system;
        self.scaled_points()
            .into_iter()
            .map(|(x, y)| Offset::new(x, y, system))
            .collect()
    }

    /// Pattern name, typically the basename of the source file.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Override the pattern name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Source file path, if the pattern was loaded from disk.
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// Record the source file path and re-derive the name from its basename.
    pub fn set_filename(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if let Some(basename) = path.file_name().and_then(|s| s.to_str()) {
            self.name = Some(basename.to_string());
        }
        self.filename = Some(path.to_path_buf());
    }

    /// Coordinate system the offsets are expressed in.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.coordinate_system
    }

    /// Set the coordinate system tag.
    pub fn set_coordinate_system(&mut self, system: CoordinateSystem) {
        self.coordinate_system = system;
    }

    /// Position angle of the pattern on the sky.
    pub fn position_angle(&self) -> Angle {
        self.position_angle
    }

    /// Set the position angle. Stored metadata only; [`offsets`] does not
    /// rotate by it.
    ///
    /// [`offsets`]: JigglePattern::offsets
    pub fn set_position_angle(&mut self, angle: Angle) {
        self.position_angle = angle;
    }
}

impl Default for JigglePattern {
    fn default() -> Self {
        Self::new()
    }
}
