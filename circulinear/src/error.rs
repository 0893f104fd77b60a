use thiserror::Error;

/// Errors raised when a buffer computation meets a configuration with no valid topological
/// resolution. These are fatal for the call that raised them.
///
/// Positions are global curve positions (see
/// [ContinuousCurve](crate::curve::ContinuousCurve)) converted to `f64` for reporting.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BufferError {
    #[error("circle meets a line through its center at {found} point(s), expected 2")]
    DiameterIntersection { found: usize },

    #[error("intersection at position {position} of contour {contour} was already consumed")]
    ConsumedIntersection { contour: usize, position: f64 },

    #[error("no intersection recorded after position {position} of closed contour {contour}")]
    MissingIntersection { contour: usize, position: f64 },

    #[error("walk around a loop ran off the end of unbounded contour {contour}")]
    UnboundedLoop { contour: usize },

    #[error("{remaining} intersection(s) left but no contour has an unprocessed intersection")]
    NoUnprocessedIntersection { remaining: usize },
}

/// Convenience type alias for results using [`BufferError`].
pub type Result<T> = std::result::Result<T, BufferError>;
