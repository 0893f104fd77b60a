//! Intersections between elements and between whole curves.
use super::{canonical_position, ElementIndex};
use crate::{
    core::{
        math::{circle_circle_intr, line_circle_intr, CircleCircleIntr, LineCircleIntr, Vector2},
        traits::Real,
    },
    curve::{Arc, ContinuousCurve, Element, Line, Parametrized, SmoothPieces},
};

/// Intersection of two curves: the point and its global position on each curve.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IntersectionRecord<T> {
    pub point: Vector2<T>,
    pub position1: T,
    pub position2: T,
}

/// Intersection points of two elements, each point lies on both elements (within `eps`).
///
/// Parallel lines and coincident circles are reported as not intersecting.
///
/// # Examples
///
/// ```
/// # use circulinear::curve::*;
/// # use circulinear::core::math::*;
/// # use circulinear::topology::*;
/// let horizontal = Element::segment(vec2(-1.0, 0.0), vec2(1.0, 0.0));
/// let circle: Element = Arc::circle(vec2(0.0, 0.0), 0.5, true).into();
/// assert_eq!(element_intersections(&horizontal, &circle, 1e-5).len(), 2);
/// ```
pub fn element_intersections<T>(e1: &Element<T>, e2: &Element<T>, eps: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    match (e1, e2) {
        (Element::Line(l1), Element::Line(l2)) => line_line(l1, l2, eps).into_iter().collect(),
        (Element::Line(l), Element::Arc(a)) | (Element::Arc(a), Element::Line(l)) => {
            line_arc(l, a, eps)
        }
        (Element::Arc(a1), Element::Arc(a2)) => arc_arc(a1, a2, eps),
    }
}

/// Intersection points of `element` with `line`, restricted to both domains.
pub fn line_intersections<T>(element: &Element<T>, line: &Line<T>, eps: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    element_intersections(element, &Element::Line(*line), eps)
}

fn line_line<T>(l1: &Line<T>, l2: &Line<T>, eps: T) -> Option<Vector2<T>>
where
    T: Real,
{
    let d1 = l1.direction();
    let d2 = l2.direction();
    let denom = d1.perp_dot(d2);
    let len_product = d1.length() * d2.length();
    // parallel (or degenerate) lines never produce a crossing
    if len_product == T::zero() || (denom / len_product).abs() < eps {
        return None;
    }

    let w = l2.origin() - l1.origin();
    let s = w.perp_dot(d2) / denom;
    let u = w.perp_dot(d1) / denom;
    if l1.contains_position_eps(s, eps) && l2.contains_position_eps(u, eps) {
        Some(l1.point(s))
    } else {
        None
    }
}

fn line_arc<T>(line: &Line<T>, arc: &Arc<T>, eps: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    let mut result = Vec::new();
    if arc.radius() < eps {
        return result;
    }

    let p0 = line.origin();
    let p1 = p0 + line.direction();
    let mut try_add = |t: T| {
        if !line.contains_position_eps(t, eps) {
            return;
        }
        let point = line.point(t);
        let angle = (point - arc.center()).angle();
        if arc.contains_angle_eps(angle, eps) {
            result.push(point);
        }
    };

    match line_circle_intr(p0, p1, arc.radius(), arc.center(), eps) {
        LineCircleIntr::NoIntersect => {}
        LineCircleIntr::TangentIntersect { t0 } => try_add(t0),
        LineCircleIntr::TwoIntersects { t0, t1 } => {
            try_add(t0);
            try_add(t1);
        }
    }

    result
}

fn arc_arc<T>(a1: &Arc<T>, a2: &Arc<T>, eps: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    let mut result = Vec::new();
    if a1.radius() < eps || a2.radius() < eps {
        return result;
    }

    let mut try_add = |point: Vector2<T>| {
        let in1 = a1.contains_angle_eps((point - a1.center()).angle(), eps);
        let in2 = a2.contains_angle_eps((point - a2.center()).angle(), eps);
        if in1 && in2 {
            result.push(point);
        }
    };

    match circle_circle_intr(a1.radius(), a1.center(), a2.radius(), a2.center(), eps) {
        CircleCircleIntr::NoIntersect | CircleCircleIntr::Overlapping => {}
        CircleCircleIntr::TangentIntersect { point } => try_add(point),
        CircleCircleIntr::TwoIntersects { point1, point2 } => {
            try_add(point1);
            try_add(point2);
        }
    }

    result
}

fn push_unique<T>(records: &mut Vec<IntersectionRecord<T>>, record: IntersectionRecord<T>, eps: T)
where
    T: Real,
{
    let duplicate = records.iter().any(|r| {
        r.point.fuzzy_eq_eps(record.point, eps)
            && (r.position1 - record.position1).abs() < eps
            && (r.position2 - record.position2).abs() < eps
    });

    if !duplicate {
        records.push(record);
    }
}

/// All crossings of `curve` with itself, `position1 < position2` in every record.
///
/// Points where two consecutive elements meet (including the closing junction of a closed curve)
/// are not crossings and are skipped.
pub fn self_intersections<T>(curve: &ContinuousCurve<T>, eps: T) -> Vec<IntersectionRecord<T>>
where
    T: Real,
{
    let elements = curve.elements();
    let n = elements.len();
    let index = ElementIndex::new(elements);
    let mut records = Vec::new();

    for (i, e1) in elements.iter().enumerate() {
        for j in index.query_element(e1, eps) {
            if j <= i {
                continue;
            }

            let e2 = &elements[j];
            for point in element_intersections(e1, e2, eps) {
                let adjacent_end = j == i + 1
                    && e1
                        .last_point()
                        .map_or(false, |p| p.fuzzy_eq_eps(point, eps));
                let closing_end = curve.is_closed()
                    && i == 0
                    && j == n - 1
                    && e1
                        .first_point()
                        .map_or(false, |p| p.fuzzy_eq_eps(point, eps));
                if adjacent_end || closing_end {
                    continue;
                }

                let p1 = canonical_position(curve, i, e1.position(point), eps);
                let p2 = canonical_position(curve, j, e2.position(point), eps);
                if p1 == p2 {
                    continue;
                }
                let (position1, position2) = if p1 < p2 { (p1, p2) } else { (p2, p1) };
                push_unique(
                    &mut records,
                    IntersectionRecord {
                        point,
                        position1,
                        position2,
                    },
                    eps,
                );
            }
        }
    }

    records
}

/// All intersections between two distinct curves, `position1` is on `c1` and `position2` on `c2`.
pub fn curve_intersections<T>(
    c1: &ContinuousCurve<T>,
    c2: &ContinuousCurve<T>,
    eps: T,
) -> Vec<IntersectionRecord<T>>
where
    T: Real,
{
    let mut records = Vec::new();
    if let (Some(b1), Some(b2)) = (c1.bounding_box(), c2.bounding_box()) {
        if b1.max_x + eps < b2.min_x
            || b2.max_x + eps < b1.min_x
            || b1.max_y + eps < b2.min_y
            || b2.max_y + eps < b1.min_y
        {
            return records;
        }
    }

    let elements2 = c2.elements();
    let index = ElementIndex::new(elements2);
    for (i, e1) in c1.elements().iter().enumerate() {
        for j in index.query_element(e1, eps) {
            let e2 = &elements2[j];
            for point in element_intersections(e1, e2, eps) {
                let position1 = canonical_position(c1, i, e1.position(point), eps);
                let position2 = canonical_position(c2, j, e2.position(point), eps);
                push_unique(
                    &mut records,
                    IntersectionRecord {
                        point,
                        position1,
                        position2,
                    },
                    eps,
                );
            }
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{math::vec2, traits::FuzzyEq};
    use std::f64::consts::PI;

    #[test]
    fn line_line_cases() {
        let a = Line::segment(vec2(0.0, 0.0), vec2(2.0, 2.0));
        let b = Line::segment(vec2(0.0, 2.0), vec2(2.0, 0.0));
        let p = line_line(&a, &b, 1e-5).unwrap();
        assert!(p.fuzzy_eq_eps(vec2(1.0, 1.0), 1e-12));

        let parallel = Line::segment(vec2(0.0, 1.0), vec2(2.0, 3.0));
        assert!(line_line(&a, &parallel, 1e-5).is_none());

        let short = Line::segment(vec2(0.0, 2.0), vec2(0.5, 1.5));
        assert!(line_line(&a, &short, 1e-5).is_none());
        let ray = Line::ray(vec2(0.0, 2.0), vec2(0.5, -0.5));
        assert!(line_line(&a, &ray, 1e-5).is_some());
    }

    #[test]
    fn line_arc_respects_sweep() {
        let upper: Element = Arc::new(vec2(0.0, 0.0), 1.0, 0.0, PI).into();
        let vertical = Element::segment(vec2(0.0, -2.0), vec2(0.0, 2.0));
        let points = element_intersections(&upper, &vertical, 1e-5);
        assert_eq!(points.len(), 1);
        assert!(points[0].fuzzy_eq_eps(vec2(0.0, 1.0), 1e-9));

        let straight: Element = Line::straight(vec2(5.0, 0.5), vec2(1.0, 0.0)).into();
        assert_eq!(element_intersections(&straight, &upper, 1e-5).len(), 2);
    }

    #[test]
    fn arc_arc_cases() {
        let a: Element = Arc::circle(vec2(0.0, 0.0), 1.0, true).into();
        let b: Element = Arc::circle(vec2(1.0, 0.0), 1.0, true).into();
        let points = element_intersections(&a, &b, 1e-5);
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|p| p.x.fuzzy_eq_eps(0.5, 1e-9)));

        // right half of b does not reach a
        let half: Element = Arc::new(vec2(1.0, 0.0), 1.0, -PI / 2.0, PI).into();
        assert!(element_intersections(&a, &half, 1e-5).is_empty());

        // same circle
        assert!(element_intersections(&a, &a, 1e-5).is_empty());
    }

    #[test]
    fn figure_eight_self_intersects_once() {
        let bowtie = ContinuousCurve::from_points(
            &[vec2(0.0, 0.0), vec2(2.0, 2.0), vec2(2.0, 0.0), vec2(0.0, 2.0)],
            true,
        );
        let records = self_intersections(&bowtie, 1e-5);
        assert_eq!(records.len(), 1);
        assert!(records[0].point.fuzzy_eq_eps(vec2(1.0, 1.0), 1e-9));
        assert_eq!((records[0].position1, records[0].position2), (0.5, 4.5));

        let square = ContinuousCurve::from_points(
            &[vec2(0.0, 0.0), vec2(2.0, 0.0), vec2(2.0, 2.0), vec2(0.0, 2.0)],
            true,
        );
        assert!(self_intersections(&square, 1e-5).is_empty());
    }

    #[test]
    fn crossing_through_vertex_reported_once() {
        let corner = ContinuousCurve::from_points(&[vec2(0.0, 0.0), vec2(1.0, 1.0), vec2(2.0, 0.0)], false);
        let cut = ContinuousCurve::from_points(&[vec2(1.0, 0.0), vec2(1.0, 3.0)], false);
        let records = curve_intersections(&corner, &cut, 1e-5);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].position1, 2.0);
        assert!(records[0].position2.fuzzy_eq_eps(1.0 / 3.0, 1e-9));
    }
}
