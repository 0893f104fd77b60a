use super::{clamp_param, ExactOffset, Parametrized};
use crate::core::{
    math::{angle, angle_is_within_sweep_eps, normalize_radians, point_on_circle, vec2, Vector2},
    traits::Real,
};
use static_aabb2d_index::AABB;

/// Circular arc defined by center, radius, start angle and signed sweep angle.
///
/// Positive sweep is counter clockwise. The parameter is the unsigned angle travelled from the
/// start, so the domain is `[0, |sweep|]` and a sweep of a full turn is a circle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Arc<T = f64> {
    center: Vector2<T>,
    radius: T,
    start_angle: T,
    sweep: T,
}

impl<T> Arc<T>
where
    T: Real,
{
    #[inline]
    pub fn new(center: Vector2<T>, radius: T, start_angle: T, sweep: T) -> Self {
        Arc {
            center,
            radius,
            start_angle,
            sweep,
        }
    }

    /// Full circle starting (and ending) at angle zero.
    pub fn circle(center: Vector2<T>, radius: T, ccw: bool) -> Self {
        let sweep = if ccw { T::tau() } else { -T::tau() };
        Arc::new(center, radius, T::zero(), sweep)
    }

    /// Arc around `center` from `start` to the angle of `end`, going counter clockwise if `ccw`
    /// is true. Radius is the distance from `center` to `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circulinear::curve::*;
    /// # use circulinear::core::math::*;
    /// # use circulinear::core::traits::*;
    /// let arc = Arc::from_center_points(vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(0.0, 1.0), true);
    /// assert!(arc.sweep().fuzzy_eq_eps(std::f64::consts::FRAC_PI_2, 1e-12));
    /// let arc = Arc::from_center_points(vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(0.0, 1.0), false);
    /// assert!(arc.sweep().fuzzy_eq_eps(-3.0 * std::f64::consts::FRAC_PI_2, 1e-12));
    /// ```
    pub fn from_center_points(
        center: Vector2<T>,
        start: Vector2<T>,
        end: Vector2<T>,
        ccw: bool,
    ) -> Self {
        let radius = (start - center).length();
        let a1 = angle(center, start);
        let a2 = angle(center, end);
        let mut sweep = normalize_radians(a2 - a1);
        if sweep >= T::tau() {
            sweep = T::zero();
        }
        if !ccw && sweep > T::zero() {
            sweep = sweep - T::tau();
        }

        Arc::new(center, radius, a1, sweep)
    }

    #[inline]
    pub fn center(&self) -> Vector2<T> {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> T {
        self.radius
    }

    #[inline]
    pub fn start_angle(&self) -> T {
        self.start_angle
    }

    #[inline]
    pub fn sweep(&self) -> T {
        self.sweep
    }

    #[inline]
    pub fn end_angle(&self) -> T {
        self.start_angle + self.sweep
    }

    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.sweep >= T::zero()
    }

    /// One for counter clockwise arcs, minus one for clockwise arcs.
    #[inline]
    fn sign(&self) -> T {
        if self.is_ccw() {
            T::one()
        } else {
            -T::one()
        }
    }

    /// Radius of the parallel at `distance` before clamping, negative once the parallel has passed
    /// through the center.
    #[inline]
    pub fn offset_radius(&self, distance: T) -> T {
        self.radius + distance * self.sign()
    }

    /// Polar angle (around the center) of the point at parameter `t`.
    #[inline]
    pub fn angle_at(&self, t: T) -> T {
        self.start_angle + self.sign() * t
    }

    /// Returns true if the polar angle `test_angle` lies within the sweep, `eps` is a distance
    /// tolerance along the arc.
    pub fn contains_angle_eps(&self, test_angle: T, eps: T) -> bool {
        let angle_eps = if self.radius > T::zero() {
            eps / self.radius
        } else {
            eps
        };

        angle_is_within_sweep_eps(test_angle, self.start_angle, self.sweep, angle_eps)
    }

    /// Unit tangent at parameter `t`, independent of the radius (still defined for a zero radius).
    pub fn unit_tangent(&self, t: T) -> Vector2<T> {
        Vector2::from_angle(self.angle_at(t))
            .perp()
            .scale(self.sign())
    }

    pub fn length(&self) -> T {
        self.radius * self.sweep.abs()
    }

    pub fn bounding_box(&self) -> AABB<T> {
        let p1 = self.point(T::zero());
        let p2 = self.point(self.t1());
        let mut result = AABB::new(
            num_traits::real::Real::min(p1.x, p2.x),
            num_traits::real::Real::min(p1.y, p2.y),
            num_traits::real::Real::max(p1.x, p2.x),
            num_traits::real::Real::max(p1.y, p2.y),
        );

        let c = self.center;
        let r = self.radius;
        let half_pi = T::pi() / T::two();
        let crosses = |a: T| angle_is_within_sweep_eps(a, self.start_angle, self.sweep, T::zero());

        if crosses(T::zero()) {
            result.max_x = c.x + r;
        }
        if crosses(half_pi) {
            result.max_y = c.y + r;
        }
        if crosses(T::pi()) {
            result.min_x = c.x - r;
        }
        if crosses(T::pi() + half_pi) {
            result.min_y = c.y - r;
        }

        result
    }
}

impl<T> Parametrized<T> for Arc<T>
where
    T: Real,
{
    #[inline]
    fn t0(&self) -> T {
        T::zero()
    }

    #[inline]
    fn t1(&self) -> T {
        self.sweep.abs()
    }

    #[inline]
    fn point(&self, t: T) -> Vector2<T> {
        point_on_circle(self.radius, self.center, self.angle_at(t))
    }

    fn position(&self, point: Vector2<T>) -> T {
        if point == self.center {
            return T::zero();
        }

        let extent = self.sweep.abs();
        let local = normalize_radians((angle(self.center, point) - self.start_angle) * self.sign());
        if local <= extent {
            return local;
        }

        // outside the sweep, pick the nearer end
        if local - extent < T::tau() - local {
            extent
        } else {
            T::zero()
        }
    }

    fn tangent(&self, t: T) -> Vector2<T> {
        self.unit_tangent(t).scale(self.radius)
    }

    #[inline]
    fn is_closed(&self) -> bool {
        self.sweep.abs() >= T::tau()
    }

    fn reverse(&self) -> Self {
        Arc::new(self.center, self.radius, self.end_angle(), -self.sweep)
    }

    fn sub_curve(&self, t0: T, t1: T) -> Self {
        let extent = self.sweep.abs();
        let t0 = clamp_param(t0, T::zero(), extent);
        let t1 = clamp_param(t1, T::zero(), extent);
        Arc::new(
            self.center,
            self.radius,
            self.angle_at(t0),
            (t1 - t0) * self.sign(),
        )
    }
}

impl<T> ExactOffset<T> for Arc<T>
where
    T: Real,
{
    type Output = Arc<T>;

    /// Concentric arc, the radius grows for counter clockwise arcs offset by a positive distance
    /// and is clamped at zero.
    fn parallel(&self, distance: T) -> Arc<T> {
        let radius = num_traits::real::Real::max(self.offset_radius(distance), T::zero());
        Arc::new(self.center, radius, self.start_angle, self.sweep)
    }
}

impl<T> Default for Arc<T>
where
    T: Real,
{
    fn default() -> Self {
        Arc::circle(vec2(T::zero(), T::zero()), T::one(), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn arc_points_and_positions() {
        let arc = Arc::new(vec2(0.0, 0.0), 2.0, 0.0, PI);
        assert!(arc.point(0.0).fuzzy_eq_eps(vec2(2.0, 0.0), 1e-12));
        assert!(arc.point(FRAC_PI_2).fuzzy_eq_eps(vec2(0.0, 2.0), 1e-12));
        assert!(arc.position(vec2(0.0, 5.0)).fuzzy_eq_eps(FRAC_PI_2, 1e-12));
        // below the x axis, slightly nearer the start
        assert!(arc.position(vec2(1.0, -0.1)).fuzzy_eq_eps(0.0, 1e-12));
        assert!(arc.position(vec2(-1.0, -0.1)).fuzzy_eq_eps(PI, 1e-12));
    }

    #[test]
    fn clockwise_arc_parameterization() {
        let arc = Arc::new(vec2(0.0, 0.0), 1.0, FRAC_PI_2, -FRAC_PI_2);
        assert!(arc.t1().fuzzy_eq_eps(FRAC_PI_2, 1e-12));
        assert!(arc.last_point().unwrap().fuzzy_eq_eps(vec2(1.0, 0.0), 1e-12));
        let mid = arc.point(arc.position(vec2(1.0, 1.0)));
        let s = 0.5f64.sqrt();
        assert!(mid.fuzzy_eq_eps(vec2(s, s), 1e-12));
        // moving clockwise at the top of the circle heads in +x
        assert!(arc.unit_tangent(0.0).fuzzy_eq_eps(vec2(1.0, 0.0), 1e-12));
    }

    #[test]
    fn reverse_and_sub_arc() {
        let arc = Arc::new(vec2(1.0, 1.0), 1.0, 0.0, PI);
        let rev = arc.reverse();
        assert!(rev.first_point().unwrap().fuzzy_eq_eps(vec2(0.0, 1.0), 1e-12));
        assert!(rev.last_point().unwrap().fuzzy_eq_eps(vec2(2.0, 1.0), 1e-12));

        let sub = arc.sub_curve(FRAC_PI_2, PI);
        assert!(sub.first_point().unwrap().fuzzy_eq_eps(vec2(1.0, 2.0), 1e-12));
        assert!(sub.sweep().fuzzy_eq_eps(FRAC_PI_2, 1e-12));
    }

    #[test]
    fn parallel_changes_radius_by_orientation() {
        let ccw = Arc::new(vec2(0.0, 0.0), 2.0, 0.0, PI);
        assert_eq!(ccw.parallel(1.0).radius(), 3.0);
        assert_eq!(ccw.parallel(-1.0).radius(), 1.0);
        assert_eq!(ccw.parallel(-5.0).radius(), 0.0);
        let cw = ccw.reverse();
        assert_eq!(cw.parallel(1.0).radius(), 1.0);
    }

    #[test]
    fn arc_bounding_box() {
        let arc = Arc::new(vec2(0.0, 0.0), 1.0, 0.0, PI);
        let bb = arc.bounding_box();
        assert!(bb.min_x.fuzzy_eq_eps(-1.0, 1e-12));
        assert!(bb.min_y.fuzzy_eq_eps(0.0, 1e-12));
        assert!(bb.max_x.fuzzy_eq_eps(1.0, 1e-12));
        assert!(bb.max_y.fuzzy_eq_eps(1.0, 1e-12));

        let circle = Arc::circle(vec2(2.0, 3.0), 1.0, false);
        assert!(circle.is_closed());
        let bb = circle.bounding_box();
        assert!(bb.min_x.fuzzy_eq_eps(1.0, 1e-12));
        assert!(bb.max_y.fuzzy_eq_eps(4.0, 1e-12));
    }
}
