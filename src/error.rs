use thiserror::Error;

/// Errors produced while loading or interrogating a jiggle pattern.
#[derive(Error, Debug)]
pub enum JiggleError {
    /// Pattern file could not be opened or read.
    #[error("failed to read pattern file: {0}")]
    Io(#[from] std::io::Error),

    /// A data line did not decompose into exactly two finite numbers.
    #[error("malformed pattern line {line}: {content:?}")]
    MalformedLine {
        /// 1-based line number in the source text.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },

    /// Extent requested for a pattern with no points.
    #[error("pattern contains no points")]
    EmptyPattern,

    /// A stored point has a NaN or infinite coordinate.
    #[error("non-finite coordinate at point index {index}")]
    NonFinitePoint {
        /// Index of the offending point in the pattern.
        index: usize,
    },

    /// Coordinate system name not one of TRACKING/AZEL/MOUNT/FPLANE.
    #[error("unknown coordinate system: {0:?}")]
    UnknownCoordinateSystem(String),
}
