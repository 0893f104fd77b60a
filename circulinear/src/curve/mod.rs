//! Curve primitives the offset engine consumes: line-like and arc elements, chains of elements
//! and the closed/unbounded contours that bound a domain.
//!
//! Capabilities are split into small traits attached per type rather than a deep hierarchy:
//! [Parametrized] (domain, evaluation, projection), [SmoothPieces] (decomposition into
//! [Element]s), [ClosedOriented] (area and orientation of closed curves) and [ExactOffset]
//! (closed-form parallel curve).
mod arc;
mod continuous;
mod contour;
mod curve_set;
mod element;
mod line;

pub use arc::*;
pub use continuous::*;
pub use contour::*;
pub use curve_set::*;
pub use element::*;
pub use line::*;

use crate::core::{math::Vector2, traits::Real};

/// Represents the orientation of a curve.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    /// Curve is open (or unbounded, so it encloses no finite area).
    Open,
    /// Curve is closed and directionally clockwise.
    Clockwise,
    /// Curve is closed and directionally counter clockwise.
    CounterClockwise,
}

/// A curve evaluated over a parameter domain `[t0, t1]`, either bound may be infinite.
pub trait Parametrized<T>
where
    T: Real,
{
    /// Lower bound of the parameter domain.
    fn t0(&self) -> T;

    /// Upper bound of the parameter domain.
    fn t1(&self) -> T;

    /// Point at parameter `t`, `t` must be finite.
    fn point(&self, t: T) -> Vector2<T>;

    /// Parameter of the point on the curve closest to `point`.
    fn position(&self, point: Vector2<T>) -> T;

    /// Derivative direction at parameter `t` (not normalized).
    fn tangent(&self, t: T) -> Vector2<T>;

    /// Shortest distance from `point` to the curve.
    fn distance(&self, point: Vector2<T>) -> T {
        (self.point(self.position(point)) - point).length()
    }

    /// Returns true if the curve ends where it starts.
    fn is_closed(&self) -> bool;

    /// Same curve traversed in the opposite direction.
    fn reverse(&self) -> Self
    where
        Self: Sized;

    /// Portion of the curve between the parameters `t0` and `t1`.
    fn sub_curve(&self, t0: T, t1: T) -> Self
    where
        Self: Sized;

    /// Returns true if both parameter bounds are finite.
    fn is_bounded(&self) -> bool {
        self.t0().is_finite() && self.t1().is_finite()
    }

    /// Start point, `None` if the curve starts at infinity.
    fn first_point(&self) -> Option<Vector2<T>> {
        let t = self.t0();
        t.is_finite().then(|| self.point(t))
    }

    /// End point, `None` if the curve extends to infinity.
    fn last_point(&self) -> Option<Vector2<T>> {
        let t = self.t1();
        t.is_finite().then(|| self.point(t))
    }
}

/// A curve made of a sequence of smooth [Element]s.
pub trait SmoothPieces<T>
where
    T: Real,
{
    /// The smooth pieces in traversal order.
    fn elements(&self) -> &[Element<T>];

    /// Singular points: junctions between consecutive elements plus finite free ends.
    fn vertices(&self) -> Vec<Vector2<T>>;
}

/// A closed curve with an orientation, the region on its left is its inside.
pub trait ClosedOriented<T>
where
    T: Real,
{
    /// Signed enclosed area, positive when counter clockwise. Zero for open/unbounded curves.
    fn signed_area(&self) -> T;

    fn orientation(&self) -> Orientation {
        let area = self.signed_area();
        if area > T::zero() {
            Orientation::CounterClockwise
        } else if area < T::zero() {
            Orientation::Clockwise
        } else {
            Orientation::Open
        }
    }
}

/// Curves with a closed form parallel (offset) curve of the same kind.
///
/// Positive distances offset to the right of the direction of travel, so a counter clockwise
/// contour grows when offset by a positive distance.
pub trait ExactOffset<T>
where
    T: Real,
{
    type Output;

    fn parallel(&self, distance: T) -> Self::Output;
}

/// Maps parameter `t` in `[t0, t1]` into `[0, 1]`.
///
/// Infinite bounds are compacted with `s / (1 + s)` so that positions of unbounded elements still
/// fit the global position encoding of [ContinuousCurve].
pub(crate) fn to_unit<T>(t: T, t0: T, t1: T) -> T
where
    T: Real,
{
    let one = T::one();
    match (t0.is_finite(), t1.is_finite()) {
        (true, true) => {
            let span = t1 - t0;
            if span == T::zero() {
                T::zero()
            } else {
                (t - t0) / span
            }
        }
        (true, false) => {
            if !t.is_finite() {
                return one;
            }
            let s = t - t0;
            s / (one + s)
        }
        (false, true) => {
            if !t.is_finite() {
                return T::zero();
            }
            let s = t1 - t;
            one / (one + s)
        }
        (false, false) => {
            if !t.is_finite() {
                return if t > T::zero() { one } else { T::zero() };
            }
            let v = t / (one + t.abs());
            (v + one) / T::two()
        }
    }
}

/// Inverse of [to_unit].
pub(crate) fn from_unit<T>(u: T, t0: T, t1: T) -> T
where
    T: Real,
{
    let one = T::one();
    match (t0.is_finite(), t1.is_finite()) {
        (true, true) => t0 + u * (t1 - t0),
        (true, false) => {
            if u >= one {
                return T::infinity();
            }
            t0 + u / (one - u)
        }
        (false, true) => {
            if u <= T::zero() {
                return T::neg_infinity();
            }
            t1 - (one - u) / u
        }
        (false, false) => {
            let v = T::two() * u - one;
            if v <= -one {
                return T::neg_infinity();
            }
            if v >= one {
                return T::infinity();
            }
            v / (one - v.abs())
        }
    }
}

/// Clamps `t` into `[t0, t1]`, bounds may be infinite.
#[inline]
pub(crate) fn clamp_param<T>(t: T, t0: T, t1: T) -> T
where
    T: Real,
{
    if t < t0 {
        t0
    } else if t > t1 {
        t1
    } else {
        t
    }
}
