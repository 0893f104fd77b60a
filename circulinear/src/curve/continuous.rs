use super::{
    from_unit, to_unit, Arc, ClosedOriented, Element, Line, Parametrized, SmoothPieces,
};
use crate::core::{
    math::{angle, midpoint, Vector2},
    traits::Real,
};
use static_aabb2d_index::AABB;

/// Chain of [Element]s where each element starts where the previous one ends.
///
/// Positions along the chain are global: element `i` occupies `[2i, 2i + 1]` (its own parameter
/// domain mapped onto the unit interval) and the open gap `(2i + 1, 2i + 2)` maps onto the
/// junction between element `i` and `i + 1`. The domain of a chain with `n` elements is
/// `[0, 2n - 1]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContinuousCurve<T = f64> {
    elements: Vec<Element<T>>,
    is_closed: bool,
}

#[inline]
fn index_to_real<T>(i: usize) -> T
where
    T: Real,
{
    T::lit(i as f64)
}

impl<T> ContinuousCurve<T>
where
    T: Real,
{
    /// Create a new empty open curve.
    pub fn new() -> Self {
        ContinuousCurve {
            elements: Vec::new(),
            is_closed: false,
        }
    }

    pub fn with_capacity(capacity: usize, is_closed: bool) -> Self {
        ContinuousCurve {
            elements: Vec::with_capacity(capacity),
            is_closed,
        }
    }

    pub fn from_elements(elements: Vec<Element<T>>, is_closed: bool) -> Self {
        ContinuousCurve {
            elements,
            is_closed,
        }
    }

    /// Polyline through `points`. When `is_closed` is true a closing segment back to the first
    /// point is added unless the last point already equals it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circulinear::curve::*;
    /// # use circulinear::core::math::*;
    /// let square = ContinuousCurve::from_points(
    ///     &[vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(1.0, 1.0), vec2(0.0, 1.0)],
    ///     true,
    /// );
    /// assert_eq!(square.element_count(), 4);
    /// assert_eq!(square.signed_area(), 1.0);
    /// ```
    pub fn from_points(points: &[Vector2<T>], is_closed: bool) -> Self {
        let mut result = ContinuousCurve::with_capacity(points.len(), is_closed);
        for w in points.windows(2) {
            result.push(Element::segment(w[0], w[1]));
        }

        if is_closed && points.len() > 2 {
            let first = points[0];
            let last = points[points.len() - 1];
            if first != last {
                result.push(Element::segment(last, first));
            }
        }

        result
    }

    /// Curve through `(x, y, bulge)` vertices, the bulge of a vertex describes the element that
    /// leaves it: zero for a segment, otherwise `tan(sweep / 4)` of an arc (positive is counter
    /// clockwise). On a closed curve the last vertex bulge describes the closing element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circulinear::curve::*;
    /// # use circulinear::core::math::*;
    /// // half circle below the x axis closed by a segment
    /// let half_disk = ContinuousCurve::from_bulge_points(&[(0.0, 0.0, 1.0), (2.0, 0.0, 0.0)], true);
    /// assert_eq!(half_disk.element_count(), 2);
    /// assert!((half_disk.signed_area() - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    /// ```
    pub fn from_bulge_points(vertices: &[(T, T, T)], is_closed: bool) -> Self {
        let n = vertices.len();
        let mut result = ContinuousCurve::with_capacity(n, is_closed);
        let count = if is_closed && n > 1 { n } else { n.saturating_sub(1) };
        for i in 0..count {
            let (x1, y1, bulge) = vertices[i];
            let (x2, y2, _) = vertices[(i + 1) % n];
            let p1 = Vector2::new(x1, y1);
            let p2 = Vector2::new(x2, y2);
            if bulge == T::zero() {
                result.push(Element::segment(p1, p2));
                continue;
            }

            let sweep = T::lit(4.0) * bulge.atan();
            let chord = p2 - p1;
            let half_chord = chord.length() / T::two();
            let radius = half_chord / (sweep / T::two()).sin().abs();
            let offset = half_chord / (sweep / T::two()).tan();
            let center = midpoint(p1, p2) + chord.unit_perp().scale(offset);
            result.push(Element::Arc(Arc::new(center, radius, angle(center, p1), sweep)));
        }

        result
    }

    #[inline]
    pub fn push(&mut self, element: Element<T>) {
        self.elements.push(element);
    }

    /// Appends all elements of `other` to the end of this curve.
    pub fn extend_from(&mut self, other: &ContinuousCurve<T>) {
        self.elements.extend_from_slice(&other.elements);
    }

    #[inline]
    pub fn set_is_closed(&mut self, is_closed: bool) {
        self.is_closed = is_closed;
    }

    #[inline]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn into_elements(self) -> Vec<Element<T>> {
        self.elements
    }

    /// Element index and element local parameter of the global position `pos`.
    ///
    /// Positions in a junction gap resolve to the end of the preceding element in the first half
    /// of the gap and to the start of the following element in the second half.
    ///
    /// # Panics
    ///
    /// Panics if the curve is empty.
    pub fn local_position(&self, pos: T) -> (usize, T) {
        let n = self.elements.len();
        let max_index = n - 1;
        let index = if pos <= T::zero() {
            0
        } else {
            num_traits::ToPrimitive::to_usize(&(pos / T::two()).floor())
                .map_or(max_index, |i| i.min(max_index))
        };

        let e = &self.elements[index];
        let frac = num_traits::real::Real::max(pos - index_to_real::<T>(2 * index), T::zero());
        if frac <= T::one() {
            return (index, from_unit(frac, e.t0(), e.t1()));
        }

        if index == max_index || frac < T::lit(1.5) {
            return (index, e.t1());
        }

        let next = &self.elements[index + 1];
        (index + 1, next.t0())
    }

    /// Global position of the element local parameter `t` on element `index`.
    pub fn global_position(&self, index: usize, t: T) -> T {
        let e = &self.elements[index];
        index_to_real::<T>(2 * index) + to_unit(t, e.t0(), e.t1())
    }

    /// Index of the element closest to `point` and the closest element parameter.
    ///
    /// Returns `None` if the curve is empty.
    pub fn closest_element(&self, point: Vector2<T>) -> Option<(usize, T)> {
        let mut result = None;
        let mut min_dist = T::infinity();
        for (i, e) in self.elements.iter().enumerate() {
            let t = e.position(point);
            let dist = (e.point(t) - point).length();
            if dist < min_dist || result.is_none() {
                min_dist = dist;
                result = Some((i, t));
            }
        }

        result
    }

    /// Point on the curve closest to `point`, `None` if the curve is empty.
    pub fn closest_point(&self, point: Vector2<T>) -> Option<Vector2<T>> {
        self.closest_element(point)
            .map(|(i, t)| self.elements[i].point(t))
    }

    /// Total length, infinite if unbounded.
    pub fn length(&self) -> T {
        self.elements
            .iter()
            .fold(T::zero(), |acc, e| acc + e.length())
    }

    /// Bounding box of all elements, `None` if empty or unbounded.
    pub fn bounding_box(&self) -> Option<AABB<T>> {
        let mut iter = self.elements.iter();
        let mut result = iter.next()?.bounding_box()?;
        for e in iter {
            let bb = e.bounding_box()?;
            result.min_x = num_traits::real::Real::min(result.min_x, bb.min_x);
            result.min_y = num_traits::real::Real::min(result.min_y, bb.min_y);
            result.max_x = num_traits::real::Real::max(result.max_x, bb.max_x);
            result.max_y = num_traits::real::Real::max(result.max_y, bb.max_y);
        }

        Some(result)
    }

    fn push_range(&self, p0: T, p1: T, out: &mut Vec<Element<T>>) {
        let (i0, a) = self.local_position(p0);
        let (i1, b) = self.local_position(p1);
        if i0 == i1 {
            if a < b {
                out.push(self.elements[i0].sub_curve(a, b));
            }
            return;
        }

        let first = &self.elements[i0];
        if a < first.t1() {
            out.push(first.sub_curve(a, first.t1()));
        }

        out.extend_from_slice(&self.elements[i0 + 1..i1]);

        let last = &self.elements[i1];
        if last.t0() < b {
            out.push(last.sub_curve(last.t0(), b));
        }
    }

    /// Portion of a closed curve from `p0` to the end followed by the start up to `p1`.
    ///
    /// When `p0 == p1` this is the whole loop re-started at `p0`.
    pub fn sub_curve_wrapped(&self, p0: T, p1: T) -> ContinuousCurve<T> {
        let mut elements = Vec::new();
        if !self.elements.is_empty() {
            self.push_range(p0, self.t1(), &mut elements);
            self.push_range(self.t0(), p1, &mut elements);
        }

        ContinuousCurve::from_elements(elements, false)
    }
}

impl<T> Parametrized<T> for ContinuousCurve<T>
where
    T: Real,
{
    #[inline]
    fn t0(&self) -> T {
        T::zero()
    }

    #[inline]
    fn t1(&self) -> T {
        let n = self.elements.len();
        if n == 0 {
            T::zero()
        } else {
            index_to_real::<T>(2 * n - 1)
        }
    }

    fn point(&self, t: T) -> Vector2<T> {
        let (i, local) = self.local_position(t);
        self.elements[i].point(local)
    }

    fn position(&self, point: Vector2<T>) -> T {
        self.closest_element(point)
            .map_or(T::zero(), |(i, t)| self.global_position(i, t))
    }

    fn tangent(&self, t: T) -> Vector2<T> {
        let (i, local) = self.local_position(t);
        self.elements[i].tangent(local)
    }

    fn distance(&self, point: Vector2<T>) -> T {
        self.elements
            .iter()
            .map(|e| e.distance(point))
            .fold(T::infinity(), num_traits::real::Real::min)
    }

    #[inline]
    fn is_closed(&self) -> bool {
        self.is_closed
    }

    fn reverse(&self) -> Self {
        let elements = self.elements.iter().rev().map(|e| e.reverse()).collect();
        ContinuousCurve::from_elements(elements, self.is_closed)
    }

    /// Portion between the global positions `t0` and `t1`. On a closed curve `t0 > t1` wraps
    /// through the end, on an open curve it yields an empty curve.
    fn sub_curve(&self, t0: T, t1: T) -> Self {
        if self.elements.is_empty() {
            return ContinuousCurve::new();
        }

        if t0 > t1 {
            if self.is_closed {
                return self.sub_curve_wrapped(t0, t1);
            }
            return ContinuousCurve::new();
        }

        let mut elements = Vec::new();
        self.push_range(t0, t1, &mut elements);
        ContinuousCurve::from_elements(elements, false)
    }

    fn is_bounded(&self) -> bool {
        self.elements.iter().all(|e| e.is_bounded())
    }

    fn first_point(&self) -> Option<Vector2<T>> {
        self.elements.first()?.first_point()
    }

    fn last_point(&self) -> Option<Vector2<T>> {
        self.elements.last()?.last_point()
    }
}

impl<T> SmoothPieces<T> for ContinuousCurve<T>
where
    T: Real,
{
    #[inline]
    fn elements(&self) -> &[Element<T>] {
        &self.elements
    }

    fn vertices(&self) -> Vec<Vector2<T>> {
        let n = self.elements.len();
        let mut result = Vec::with_capacity(n + 1);
        let include_first = !self.is_closed || n > 1;
        for (i, e) in self.elements.iter().enumerate() {
            if i > 0 || include_first {
                result.extend(e.first_point());
            }
        }

        if !self.is_closed {
            if let Some(p) = self.last_point() {
                result.push(p);
            }
        }

        result
    }
}

impl<T> ClosedOriented<T> for ContinuousCurve<T>
where
    T: Real,
{
    /// Shoelace sum over element chords plus the circular segment area of each arc.
    fn signed_area(&self) -> T {
        if !self.is_closed || !self.is_bounded() {
            return T::zero();
        }

        let mut double_area = T::zero();
        for e in self.elements.iter() {
            let (p1, p2) = match (e.first_point(), e.last_point()) {
                (Some(p1), Some(p2)) => (p1, p2),
                _ => continue,
            };
            double_area = double_area + p1.perp_dot(p2);
            if let Element::Arc(a) = e {
                let s = a.sweep();
                double_area = double_area + a.radius() * a.radius() * (s - s.sin());
            }
        }

        double_area / T::two()
    }
}

impl<T> From<Element<T>> for ContinuousCurve<T> {
    fn from(element: Element<T>) -> Self {
        ContinuousCurve {
            elements: vec![element],
            is_closed: false,
        }
    }
}

impl<T> From<Line<T>> for ContinuousCurve<T> {
    fn from(line: Line<T>) -> Self {
        Element::Line(line).into()
    }
}
