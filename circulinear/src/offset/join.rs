use crate::{
    core::{
        math::{angle, delta_angle, Vector2},
        traits::Real,
    },
    curve::{Arc, ContinuousCurve, Element, Parametrized},
};

/// Builds the connector inserted at an interior vertex of a curve, between the parallel of the
/// element arriving at the vertex and the parallel of the element leaving it.
pub trait JoinStrategy<T>
where
    T: Real,
{
    /// Connector from the end of `prev.raw_parallel(distance)` to the start of
    /// `next.raw_parallel(distance)`. Empty when the two already meet within `pos_equal_eps`.
    fn create_join(
        &self,
        prev: &Element<T>,
        next: &Element<T>,
        distance: T,
        pos_equal_eps: T,
    ) -> ContinuousCurve<T>;
}

/// Circular arc join around the original vertex with radius `|distance|`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RoundJoin;

/// Straight segment join.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct BevelJoin;

impl<T> JoinStrategy<T> for RoundJoin
where
    T: Real,
{
    fn create_join(
        &self,
        prev: &Element<T>,
        next: &Element<T>,
        distance: T,
        pos_equal_eps: T,
    ) -> ContinuousCurve<T> {
        let (vertex, start, end) = match (
            prev.last_point(),
            prev.raw_parallel(distance).last_point(),
            next.raw_parallel(distance).first_point(),
        ) {
            (Some(v), Some(s), Some(e)) => (v, s, e),
            _ => return ContinuousCurve::new(),
        };

        if start.fuzzy_eq_eps(end, pos_equal_eps) {
            return ContinuousCurve::new();
        }

        let radius = distance.abs();
        let on_circle = |p: Vector2<T>| {
            ((p - vertex).length() - radius).abs() < pos_equal_eps
        };
        if !on_circle(start) || !on_circle(end) {
            // fall back to a straight connector when an end is off the circle
            return Element::segment(start, end).into();
        }

        let a1 = angle(vertex, start);
        let a2 = angle(vertex, end);
        let mut sweep = delta_angle(a1, a2);
        if (sweep.abs() - T::pi()).abs() * radius < pos_equal_eps {
            // reversal of direction, go around the outside of the tip
            sweep = if distance > T::zero() {
                T::pi()
            } else {
                -T::pi()
            };
        }

        Element::Arc(Arc::new(vertex, radius, a1, sweep)).into()
    }
}

impl<T> JoinStrategy<T> for BevelJoin
where
    T: Real,
{
    fn create_join(
        &self,
        prev: &Element<T>,
        next: &Element<T>,
        distance: T,
        pos_equal_eps: T,
    ) -> ContinuousCurve<T> {
        match (
            prev.raw_parallel(distance).last_point(),
            next.raw_parallel(distance).first_point(),
        ) {
            (Some(start), Some(end)) if !start.fuzzy_eq_eps(end, pos_equal_eps) => {
                Element::segment(start, end).into()
            }
            _ => ContinuousCurve::new(),
        }
    }
}
