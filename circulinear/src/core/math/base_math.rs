use super::Vector2;
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use circulinear::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Normalize radians to be between `0` and `2PI`, e.g. `-PI/4` becomes `7PI/4` and `5PI` becomes
/// `PI`.
///
/// # Examples
///
/// ```
/// # use circulinear::core::math::*;
/// # use circulinear::core::traits::*;
/// use std::f64::consts::PI;
/// assert!(normalize_radians(5.0 * PI).fuzzy_eq_eps(PI, 1e-9));
/// assert!(normalize_radians(-PI / 4.0).fuzzy_eq_eps(7.0 * PI / 4.0, 1e-9));
/// // anything between 0 and 2PI inclusive is left unchanged
/// assert!(normalize_radians(0.0).fuzzy_eq_eps(0.0, 1e-9));
/// assert!(normalize_radians(2.0 * PI).fuzzy_eq_eps(2.0 * PI, 1e-9));
/// ```
#[inline]
pub fn normalize_radians<T>(angle: T) -> T
where
    T: Real,
{
    if angle >= T::zero() && angle <= T::tau() {
        return angle;
    }

    angle - (angle / T::tau()).floor() * T::tau()
}

/// Returns the smaller difference between two angles, in `(-PI, PI]`.
///
/// Result is negative if `normalize_radians(angle2 - angle1) > PI`.
///
/// # Examples
///
/// ```
/// # use circulinear::core::math::*;
/// # use circulinear::core::traits::*;
/// use std::f64::consts::PI;
/// assert!(delta_angle(5.0 * PI, 5.0 * PI).fuzzy_eq_eps(0.0, 1e-9));
/// assert!(delta_angle(0.5 * PI, 0.25 * PI).fuzzy_eq_eps(-0.25 * PI, 1e-9));
/// assert!(delta_angle(0.25 * PI, 0.5 * PI).fuzzy_eq_eps(0.25 * PI, 1e-9));
/// ```
#[inline]
pub fn delta_angle<T>(angle1: T, angle2: T) -> T
where
    T: Real,
{
    let mut diff = normalize_radians(angle2 - angle1);
    if diff > T::pi() {
        diff = diff - T::tau();
    }

    diff
}

/// Tests if `test_angle` is between a `start_angle` and `end_angle`.
///
/// Test assumes counter clockwise `start_angle` to `end_angle`, and is inclusive using `epsilon`
/// (an angular tolerance).
///
/// # Examples
///
/// ```
/// # use circulinear::core::math::*;
/// use std::f64::consts::PI;
/// assert!(angle_is_between_eps(PI / 2.0, 0.0, PI, 1e-5));
/// assert!(angle_is_between_eps(0.0, 0.0, PI, 1e-5));
/// assert!(angle_is_between_eps(PI, 0.0, PI, 1e-5));
/// // note: always calculated as going counter clockwise
/// assert!(angle_is_between_eps(0.0, PI, PI / 2.0, 1e-5));
/// ```
#[inline]
pub fn angle_is_between_eps<T>(test_angle: T, start_angle: T, end_angle: T, epsilon: T) -> bool
where
    T: Real,
{
    let end_sweep = normalize_radians(end_angle - start_angle);
    let mid_sweep = normalize_radians(test_angle - start_angle);

    mid_sweep < end_sweep + epsilon || mid_sweep > T::tau() - epsilon
}

/// Tests if `test_angle` is within the `sweep_angle` starting at `start_angle`.
///
/// If `sweep_angle` is positive then sweep is counter clockwise, otherwise it is clockwise.
/// A sweep of a full turn (or more) contains every angle. `epsilon` controls the fuzzy inclusion.
#[inline]
pub fn angle_is_within_sweep_eps<T>(
    test_angle: T,
    start_angle: T,
    sweep_angle: T,
    epsilon: T,
) -> bool
where
    T: Real,
{
    if sweep_angle.abs() >= T::tau() - epsilon {
        return true;
    }

    let end_angle = start_angle + sweep_angle;
    if sweep_angle < T::zero() {
        return angle_is_between_eps(test_angle, end_angle, start_angle, epsilon);
    }

    angle_is_between_eps(test_angle, start_angle, end_angle, epsilon)
}

/// Angle of the direction vector described by `p0` to `p1`.
#[inline]
pub fn angle<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    T::atan2(p1.y - p0.y, p1.x - p0.x)
}

/// Midpoint of a line segment defined by `p0` to `p1`.
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new((p0.x + p1.x) / T::two(), (p0.y + p1.y) / T::two())
}

/// Returns the point on the circle with `radius`, `center`, and polar `angle` in radians given.
#[inline]
pub fn point_on_circle<T>(radius: T, center: Vector2<T>, angle: T) -> Vector2<T>
where
    T: Real,
{
    let (s, c) = angle.sin_cos();
    Vector2::new(center.x + radius * c, center.y + radius * s)
}

/// Returns the point on the line going through `p0` and `p1` at parametric value `t`.
#[inline]
pub fn point_from_parametric<T>(p0: Vector2<T>, p1: Vector2<T>, t: T) -> Vector2<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

/// Returns the parametric value on the line going through `p0` and `p1` at the `point` given.
///
/// Note this function assumes the `point` is on the line and properly handles the cases of vertical
/// and horizontal lines by using the `epsilon` parameter to fuzzy compare for when `p0.x == p1.x`.
#[inline]
pub fn parametric_from_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>, epsilon: T) -> T
where
    T: Real,
{
    if p0.x.fuzzy_eq_eps(p1.x, epsilon) {
        // vertical line, use y coordinate
        (point.y - p0.y) / (p1.y - p0.y)
    } else {
        (point.x - p0.x) / (p1.x - p0.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;
    use crate::core::traits::FuzzyEq;
    use std::f64::consts::PI;

    #[test]
    fn full_sweep_contains_everything() {
        assert!(angle_is_within_sweep_eps(1.234, 0.5, 2.0 * PI, 1e-9));
        assert!(angle_is_within_sweep_eps(-3.0, 0.5, -2.0 * PI, 1e-9));
    }

    #[test]
    fn clockwise_sweep() {
        // clockwise quarter from PI/2 down to 0
        assert!(angle_is_within_sweep_eps(PI / 4.0, PI / 2.0, -PI / 2.0, 1e-9));
        assert!(!angle_is_within_sweep_eps(PI, PI / 2.0, -PI / 2.0, 1e-9));
    }

    #[test]
    fn start_angle_is_inclusive_from_both_sides() {
        // test angle slightly before the start (numerical noise) still counts
        assert!(angle_is_within_sweep_eps(-1e-12, 0.0, PI / 2.0, 1e-9));
    }

    #[test]
    fn parametric_round_trip_vertical() {
        let p0 = vec2(1.0, 0.0);
        let p1 = vec2(1.0, 4.0);
        let t = parametric_from_point(p0, p1, vec2(1.0, 3.0), 1e-9);
        assert!(t.fuzzy_eq_eps(0.75, 1e-12));
        assert!(point_from_parametric(p0, p1, t).fuzzy_eq_eps(vec2(1.0, 3.0), 1e-12));
    }
}
