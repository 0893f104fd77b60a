//! Curve topology utilities: intersections, splitting of self-intersecting curves and of
//! mutually crossing contours, and the distance checks that decide which candidate contours of a
//! buffer are valid.
mod distance;
mod intersect;
mod mutual;
mod position;
mod self_intersect;
mod spatial;

pub use distance::*;
pub use intersect::*;
pub use mutual::*;
pub use position::*;
pub use self_intersect::*;
pub use spatial::*;
