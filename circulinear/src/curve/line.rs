use super::{clamp_param, ExactOffset, Parametrized};
use crate::core::{
    math::{vec2, Vector2},
    traits::Real,
};
use static_aabb2d_index::AABB;

/// Line-like element: `origin + direction * t` for `t` in `[t0, t1]`.
///
/// A segment covers `[0, 1]` (direction is the vector between its end points), a ray covers
/// `[0, inf)` and a straight line covers `(-inf, inf)`. Sub lines keep the origin and direction
/// and only narrow the parameter bounds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line<T = f64> {
    origin: Vector2<T>,
    direction: Vector2<T>,
    t0: T,
    t1: T,
}

impl<T> Line<T>
where
    T: Real,
{
    /// Line through `origin` along `direction` restricted to the parameter range `[t0, t1]`.
    #[inline]
    pub fn new(origin: Vector2<T>, direction: Vector2<T>, t0: T, t1: T) -> Self {
        Line {
            origin,
            direction,
            t0,
            t1,
        }
    }

    /// Segment from `p1` to `p2`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circulinear::curve::*;
    /// # use circulinear::core::math::*;
    /// let seg = Line::segment(vec2(0.0, 0.0), vec2(2.0, 0.0));
    /// assert_eq!(seg.point(0.5), vec2(1.0, 0.0));
    /// assert_eq!(seg.length(), 2.0);
    /// ```
    #[inline]
    pub fn segment(p1: Vector2<T>, p2: Vector2<T>) -> Self {
        Line::new(p1, p2 - p1, T::zero(), T::one())
    }

    /// Ray starting at `origin` and extending to infinity along `direction`.
    #[inline]
    pub fn ray(origin: Vector2<T>, direction: Vector2<T>) -> Self {
        Line::new(origin, direction, T::zero(), T::infinity())
    }

    /// Line extending to infinity in both directions.
    #[inline]
    pub fn straight(origin: Vector2<T>, direction: Vector2<T>) -> Self {
        Line::new(origin, direction, T::neg_infinity(), T::infinity())
    }

    #[inline]
    pub fn origin(&self) -> Vector2<T> {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vector2<T> {
        self.direction
    }

    /// Parameter of the projection of `point` onto the supporting line, not clamped to the
    /// domain. Zero for a degenerate (zero direction) line.
    pub fn unclamped_position(&self, point: Vector2<T>) -> T {
        let len_sq = self.direction.length_squared();
        if len_sq == T::zero() {
            return T::zero();
        }

        (point - self.origin).dot(self.direction) / len_sq
    }

    /// Returns true if parameter `t` lies in the domain, with the tolerance `eps` measured as a
    /// distance along the line.
    pub fn contains_position_eps(&self, t: T, eps: T) -> bool {
        let len = self.direction.length();
        if len == T::zero() {
            return false;
        }

        t.fuzzy_in_range_eps(self.t0, self.t1, eps / len)
    }

    /// Length of the line, infinite for rays and straight lines.
    pub fn length(&self) -> T {
        if !self.is_bounded() {
            return T::infinity();
        }

        self.direction.length() * (self.t1 - self.t0)
    }

    /// Bounding box, `None` if unbounded.
    pub fn bounding_box(&self) -> Option<AABB<T>> {
        let p1 = self.first_point()?;
        let p2 = self.last_point()?;
        Some(AABB::new(
            num_traits::real::Real::min(p1.x, p2.x),
            num_traits::real::Real::min(p1.y, p2.y),
            num_traits::real::Real::max(p1.x, p2.x),
            num_traits::real::Real::max(p1.y, p2.y),
        ))
    }
}

impl<T> Parametrized<T> for Line<T>
where
    T: Real,
{
    #[inline]
    fn t0(&self) -> T {
        self.t0
    }

    #[inline]
    fn t1(&self) -> T {
        self.t1
    }

    #[inline]
    fn point(&self, t: T) -> Vector2<T> {
        self.origin + self.direction.scale(t)
    }

    fn position(&self, point: Vector2<T>) -> T {
        clamp_param(self.unclamped_position(point), self.t0, self.t1)
    }

    #[inline]
    fn tangent(&self, _t: T) -> Vector2<T> {
        self.direction
    }

    #[inline]
    fn is_closed(&self) -> bool {
        false
    }

    fn reverse(&self) -> Self {
        Line::new(self.origin, -self.direction, -self.t1, -self.t0)
    }

    fn sub_curve(&self, t0: T, t1: T) -> Self {
        Line::new(
            self.origin,
            self.direction,
            clamp_param(t0, self.t0, self.t1),
            clamp_param(t1, self.t0, self.t1),
        )
    }
}

impl<T> ExactOffset<T> for Line<T>
where
    T: Real,
{
    type Output = Line<T>;

    /// Translates the line by `distance` along its right hand normal.
    fn parallel(&self, distance: T) -> Line<T> {
        let offset = self.direction.right_perp().normalize().scale(distance);
        Line::new(self.origin + offset, self.direction, self.t0, self.t1)
    }
}

impl<T> Default for Line<T>
where
    T: Real,
{
    fn default() -> Self {
        Line::segment(vec2(T::zero(), T::zero()), vec2(T::zero(), T::zero()))
    }
}
