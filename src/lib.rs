//! Jiggle pattern parsing and geometry for SMU scan sequencing.
//!
//! A jiggle pattern is an ordered list of 2D sky offsets used to steer an
//! instrument through a sequence of pointings via the secondary mirror unit
//! (SMU). This crate parses the plain-text pattern file format and exposes
//! the pattern together with its scale, coordinate system, position angle,
//! and derived quantities (scaled views, bounding extent, origin membership).

pub mod angle;
pub mod coord;
pub mod error;
pub mod extent;
pub mod pattern;

pub use angle::{Angle, AngleExt};
pub use coord::{CoordinateSystem, Offset};
pub use error::JiggleError;
pub use extent::Extent;
pub use pattern::JigglePattern;

/// Crate version from package metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
