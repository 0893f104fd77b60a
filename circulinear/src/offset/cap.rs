use crate::{
    core::{
        math::{angle, line_circle_intr, midpoint, LineCircleIntr, Vector2},
        traits::Real,
    },
    curve::{Arc, ContinuousCurve, Element},
    error::{BufferError, Result},
};

/// Builds the connector closing the two parallels of an open curve at one of its free ends.
///
/// `p1` is the end of the parallel arriving at the free end and `p2` the start of the parallel
/// leaving it, the cap bulges out to the right of `p1 -> p2`.
pub trait CapStrategy<T>
where
    T: Real,
{
    fn create_cap(
        &self,
        p1: Vector2<T>,
        p2: Vector2<T>,
        pos_equal_eps: T,
    ) -> Result<ContinuousCurve<T>>;
}

/// Half circle through both points.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RoundCap;

/// Straight segment between the points.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ButtCap;

/// Box extending half the distance between the points past the end.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SquareCap;

impl<T> CapStrategy<T> for RoundCap
where
    T: Real,
{
    fn create_cap(
        &self,
        p1: Vector2<T>,
        p2: Vector2<T>,
        pos_equal_eps: T,
    ) -> Result<ContinuousCurve<T>> {
        if p1.fuzzy_eq_eps(p2, pos_equal_eps) {
            return Ok(ContinuousCurve::new());
        }

        let center = midpoint(p1, p2);
        let radius = (p2 - p1).length() / T::two();

        // the diameter p1 -> p2 must cross the circle at both of its ends
        let found = match line_circle_intr(p1, p2, radius, center, pos_equal_eps) {
            LineCircleIntr::NoIntersect => 0,
            LineCircleIntr::TangentIntersect { .. } => 1,
            LineCircleIntr::TwoIntersects { .. } => 2,
        };
        if found < 2 {
            return Err(BufferError::DiameterIntersection { found });
        }

        let start = angle(center, p1);
        Ok(Element::Arc(Arc::new(center, radius, start, T::pi())).into())
    }
}

impl<T> CapStrategy<T> for ButtCap
where
    T: Real,
{
    fn create_cap(
        &self,
        p1: Vector2<T>,
        p2: Vector2<T>,
        pos_equal_eps: T,
    ) -> Result<ContinuousCurve<T>> {
        if p1.fuzzy_eq_eps(p2, pos_equal_eps) {
            return Ok(ContinuousCurve::new());
        }

        Ok(Element::segment(p1, p2).into())
    }
}

impl<T> CapStrategy<T> for SquareCap
where
    T: Real,
{
    fn create_cap(
        &self,
        p1: Vector2<T>,
        p2: Vector2<T>,
        pos_equal_eps: T,
    ) -> Result<ContinuousCurve<T>> {
        if p1.fuzzy_eq_eps(p2, pos_equal_eps) {
            return Ok(ContinuousCurve::new());
        }

        let chord = p2 - p1;
        let extension = chord.right_perp().normalize().scale(chord.length() / T::two());
        let c1 = p1 + extension;
        let c2 = p2 + extension;
        Ok(ContinuousCurve::from_points(&[p1, c1, c2, p2], false))
    }
}
