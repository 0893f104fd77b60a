use super::{Arc, ExactOffset, Line, Parametrized};
use crate::core::{
    math::{point_on_circle, Vector2},
    traits::Real,
};
use static_aabb2d_index::AABB;

/// Smooth piece of a circulinear curve.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Element<T = f64> {
    Line(Line<T>),
    Arc(Arc<T>),
}

impl<T> Element<T>
where
    T: Real,
{
    /// Line segment element from `p1` to `p2`.
    #[inline]
    pub fn segment(p1: Vector2<T>, p2: Vector2<T>) -> Self {
        Element::Line(Line::segment(p1, p2))
    }

    #[inline]
    pub fn is_line(&self) -> bool {
        matches!(self, Element::Line(_))
    }

    #[inline]
    pub fn is_arc(&self) -> bool {
        matches!(self, Element::Arc(_))
    }

    pub fn length(&self) -> T {
        match self {
            Element::Line(l) => l.length(),
            Element::Arc(a) => a.length(),
        }
    }

    /// Bounding box, `None` for rays and straight lines.
    pub fn bounding_box(&self) -> Option<AABB<T>> {
        match self {
            Element::Line(l) => l.bounding_box(),
            Element::Arc(a) => Some(a.bounding_box()),
        }
    }

    /// Returns true if the element is bounded and shorter than `eps`.
    pub fn is_degenerate_eps(&self, eps: T) -> bool {
        self.is_bounded() && self.length() < eps
    }

    /// A point strictly inside the parameter domain: the midpoint for bounded elements, one unit
    /// of parameter away from the finite end otherwise.
    pub fn interior_point(&self) -> Vector2<T> {
        let t0 = self.t0();
        let t1 = self.t1();
        let t = match (t0.is_finite(), t1.is_finite()) {
            (true, true) => (t0 + t1) / T::two(),
            (true, false) => t0 + T::one(),
            (false, true) => t1 - T::one(),
            (false, false) => T::zero(),
        };

        self.point(t)
    }

    /// Parallel of the element inside a chain of parallels.
    ///
    /// Same as [ExactOffset::parallel] except for an arc offset past its center: instead of
    /// clamping to a point it collapses into the segment between its end points moved `distance`
    /// along their normals, so the ends of the chain stay `|distance|` away from the source.
    pub fn raw_parallel(&self, distance: T) -> Element<T> {
        match self {
            Element::Arc(a) if !a.is_closed() && a.offset_radius(distance) < T::zero() => {
                let radius = a.offset_radius(distance);
                Element::segment(
                    point_on_circle(radius, a.center(), a.start_angle()),
                    point_on_circle(radius, a.center(), a.end_angle()),
                )
            }
            _ => self.parallel(distance),
        }
    }

    /// Unit direction of travel at parameter `t`.
    pub fn unit_tangent(&self, t: T) -> Vector2<T> {
        match self {
            Element::Line(l) => l.direction().normalize(),
            Element::Arc(a) => a.unit_tangent(t),
        }
    }
}

impl<T> Parametrized<T> for Element<T>
where
    T: Real,
{
    #[inline]
    fn t0(&self) -> T {
        match self {
            Element::Line(l) => l.t0(),
            Element::Arc(a) => a.t0(),
        }
    }

    #[inline]
    fn t1(&self) -> T {
        match self {
            Element::Line(l) => l.t1(),
            Element::Arc(a) => a.t1(),
        }
    }

    #[inline]
    fn point(&self, t: T) -> Vector2<T> {
        match self {
            Element::Line(l) => l.point(t),
            Element::Arc(a) => a.point(t),
        }
    }

    fn position(&self, point: Vector2<T>) -> T {
        match self {
            Element::Line(l) => l.position(point),
            Element::Arc(a) => a.position(point),
        }
    }

    fn tangent(&self, t: T) -> Vector2<T> {
        match self {
            Element::Line(l) => l.tangent(t),
            Element::Arc(a) => a.tangent(t),
        }
    }

    fn is_closed(&self) -> bool {
        match self {
            Element::Line(_) => false,
            Element::Arc(a) => a.is_closed(),
        }
    }

    fn reverse(&self) -> Self {
        match self {
            Element::Line(l) => Element::Line(l.reverse()),
            Element::Arc(a) => Element::Arc(a.reverse()),
        }
    }

    fn sub_curve(&self, t0: T, t1: T) -> Self {
        match self {
            Element::Line(l) => Element::Line(l.sub_curve(t0, t1)),
            Element::Arc(a) => Element::Arc(a.sub_curve(t0, t1)),
        }
    }
}

impl<T> ExactOffset<T> for Element<T>
where
    T: Real,
{
    type Output = Element<T>;

    fn parallel(&self, distance: T) -> Element<T> {
        match self {
            Element::Line(l) => Element::Line(l.parallel(distance)),
            Element::Arc(a) => Element::Arc(a.parallel(distance)),
        }
    }
}

impl<T> From<Line<T>> for Element<T> {
    fn from(line: Line<T>) -> Self {
        Element::Line(line)
    }
}

impl<T> From<Arc<T>> for Element<T> {
    fn from(arc: Arc<T>) -> Self {
        Element::Arc(arc)
    }
}
