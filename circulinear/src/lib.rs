//! Offsets and buffers of circulinear curves: curves made only of line segments and circular
//! arcs.
//!
//! The [offset::BufferCalculator] computes the exact parallel of a curve, then splits the
//! crossings that offsetting introduces at concave vertices and keeps only the contours that stay
//! at the requested distance from the source. The result is a [domain::Domain] bounded by
//! pairwise disjoint, non self-intersecting contours.
#[macro_use]
mod macros;
pub mod core;
pub mod curve;
pub mod domain;
pub mod error;
pub mod offset;
pub mod topology;

pub use static_aabb2d_index::AABB;

pub use crate::error::{BufferError, Result};
