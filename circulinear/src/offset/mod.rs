//! Offset (parallel) curves and the buffer computation built on them.
mod buffer;
mod cap;
mod join;
mod parallel;

pub use buffer::*;
pub use cap::*;
pub use join::*;
pub use parallel::*;

use crate::core::traits::Real;

/// Struct to hold options parameters when computing parallels and buffers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct BufferOptions<T = f64>
where
    T: Real,
{
    /// Fuzzy comparison epsilon used for every equality, containment and crossing decision of
    /// one computation: point equality, shared vertices, sweep inclusion, parallel directions and
    /// the margin of the distance filter.
    pub pos_equal_eps: T,
}

impl<T> BufferOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            pos_equal_eps: T::lit(1e-5),
        }
    }
}

impl<T> Default for BufferOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
