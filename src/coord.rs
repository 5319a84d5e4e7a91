//! Coordinate frames and tagged sky offsets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::JiggleError;

/// Reference frame a jiggle offset is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoordinateSystem {
    /// Tracking frame of the current observation (default).
    #[default]
    Tracking,
    /// Azimuth/elevation frame of the antenna.
    Azel,
    /// Mount frame.
    Mount,
    /// Focal plane frame.
    Fplane,
}

impl CoordinateSystem {
    /// Canonical upper-case name used in observation definitions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tracking => "TRACKING",
            Self::Azel => "AZEL",
            Self::Mount => "MOUNT",
            Self::Fplane => "FPLANE",
        }
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoordinateSystem {
    type Err = JiggleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TRACKING" => Ok(Self::Tracking),
            "AZEL" => Ok(Self::Azel),
            "MOUNT" => Ok(Self::Mount),
            "FPLANE" => Ok(Self::Fplane),
            other => Err(JiggleError::UnknownCoordinateSystem(other.to_string())),
        }
    }
}

/// A single 2D sky offset tagged with its reference frame.
///
/// Produced by [`crate::JigglePattern::offsets`], one per scaled pattern
/// point. The pattern's position angle is stored metadata only and is not
/// folded into these coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    /// X offset in pattern units (typically arcseconds).
    pub x: f64,
    /// Y offset in pattern units (typically arcseconds).
    pub y: f64,
    /// Frame the offset is expressed in.
    pub system: CoordinateSystem,
}

impl Offset {
    /// Create a new tagged offset.
    pub fn new(x: f64, y: f64, system: CoordinateSystem) -> Self {
        Self { x, y, system }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_system_round_trip() {
        for system in [
            CoordinateSystem::Tracking,
            CoordinateSystem::Azel,
            CoordinateSystem::Mount,
            CoordinateSystem::Fplane,
        ] {
            let parsed: CoordinateSystem = system.as_str().parse().unwrap();
            assert_eq!(parsed, system);
        }
    }

    #[test]
    fn test_coordinate_system_parse_is_case_insensitive() {
        let parsed: CoordinateSystem = "azel".parse().unwrap();
        assert_eq!(parsed, CoordinateSystem::Azel);

        let parsed: CoordinateSystem = "  Tracking ".parse().unwrap();
        assert_eq!(parsed, CoordinateSystem::Tracking);
    }

    #[test]
    fn test_unknown_coordinate_system() {
        let result: Result<CoordinateSystem, _> = "GALACTIC".parse();
        assert!(matches!(
            result,
            Err(JiggleError::UnknownCoordinateSystem(name)) if name == "GALACTIC"
        ));
    }

    #[test]
    fn test_default_is_tracking() {
        assert_eq!(CoordinateSystem::default(), CoordinateSystem::Tracking);
    }

    #[test]
    fn test_offset_serialization() {
        let offset = Offset::new(1.5, -2.5, CoordinateSystem::Azel);

        let json = serde_json::to_string(&offset).unwrap();
        assert!(json.contains("\"AZEL\""));

        let parsed: Offset = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, offset);
    }
}
