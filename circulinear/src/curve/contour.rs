use super::{Arc, ClosedOriented, ContinuousCurve, Element, Parametrized, SmoothPieces};
use crate::core::{math::Vector2, traits::Real};
use static_aabb2d_index::AABB;

/// Continuous curve that separates the plane: either closed and bounded, or open with both ends
/// at infinity. The region on the left of the direction of travel is the inside.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contour<T = f64> {
    curve: ContinuousCurve<T>,
}

impl<T> Contour<T>
where
    T: Real,
{
    /// Wraps `curve` as a contour, marking it closed when both of its ends are finite.
    pub fn new(mut curve: ContinuousCurve<T>) -> Self {
        let bounded = curve.first_point().is_some() && curve.last_point().is_some();
        curve.set_is_closed(bounded);
        Contour { curve }
    }

    /// Closed polygon through `points`.
    pub fn from_points(points: &[Vector2<T>]) -> Self {
        Contour::new(ContinuousCurve::from_points(points, true))
    }

    pub fn from_elements(elements: Vec<Element<T>>) -> Self {
        Contour::new(ContinuousCurve::from_elements(elements, true))
    }

    /// Full circle, counter clockwise when `ccw` is true.
    pub fn circle(center: Vector2<T>, radius: T, ccw: bool) -> Self {
        Contour::from_elements(vec![Arc::circle(center, radius, ccw).into()])
    }

    #[inline]
    pub fn curve(&self) -> &ContinuousCurve<T> {
        &self.curve
    }

    #[inline]
    pub fn into_curve(self) -> ContinuousCurve<T> {
        self.curve
    }

    #[inline]
    pub fn element_count(&self) -> usize {
        self.curve.element_count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.curve.is_empty()
    }

    pub fn length(&self) -> T {
        self.curve.length()
    }

    pub fn bounding_box(&self) -> Option<AABB<T>> {
        self.curve.bounding_box()
    }

    pub fn closest_point(&self, point: Vector2<T>) -> Option<Vector2<T>> {
        self.curve.closest_point(point)
    }
}

impl<T> Parametrized<T> for Contour<T>
where
    T: Real,
{
    fn t0(&self) -> T {
        self.curve.t0()
    }

    fn t1(&self) -> T {
        self.curve.t1()
    }

    fn point(&self, t: T) -> Vector2<T> {
        self.curve.point(t)
    }

    fn position(&self, point: Vector2<T>) -> T {
        self.curve.position(point)
    }

    fn tangent(&self, t: T) -> Vector2<T> {
        self.curve.tangent(t)
    }

    fn distance(&self, point: Vector2<T>) -> T {
        self.curve.distance(point)
    }

    fn is_closed(&self) -> bool {
        self.curve.is_closed()
    }

    fn reverse(&self) -> Self {
        Contour {
            curve: self.curve.reverse(),
        }
    }

    fn sub_curve(&self, t0: T, t1: T) -> Self {
        Contour {
            curve: self.curve.sub_curve(t0, t1),
        }
    }

    fn is_bounded(&self) -> bool {
        self.curve.is_bounded()
    }

    fn first_point(&self) -> Option<Vector2<T>> {
        self.curve.first_point()
    }

    fn last_point(&self) -> Option<Vector2<T>> {
        self.curve.last_point()
    }
}

impl<T> SmoothPieces<T> for Contour<T>
where
    T: Real,
{
    fn elements(&self) -> &[Element<T>] {
        self.curve.elements()
    }

    fn vertices(&self) -> Vec<Vector2<T>> {
        self.curve.vertices()
    }
}

impl<T> ClosedOriented<T> for Contour<T>
where
    T: Real,
{
    fn signed_area(&self) -> T {
        self.curve.signed_area()
    }
}

impl<T> From<Contour<T>> for ContinuousCurve<T> {
    fn from(contour: Contour<T>) -> Self {
        contour.curve
    }
}
