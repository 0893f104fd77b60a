use super::{element_intersections, ElementIndex};
use crate::{
    core::{math::Vector2, traits::Real},
    curve::{ContinuousCurve, CurveSet, Element, Parametrized, SmoothPieces},
};
use static_aabb2d_index::AABB;

/// Source geometry of a buffer, indexed for the validity checks applied to candidate contours.
#[derive(Debug)]
pub struct SourceFilter<T>
where
    T: Real,
{
    elements: Vec<Element<T>>,
    vertices: Vec<Vector2<T>>,
    index: ElementIndex<T>,
}

impl<T> SourceFilter<T>
where
    T: Real,
{
    pub fn new(source: &CurveSet<T>) -> Self {
        let mut elements = Vec::new();
        let mut vertices = Vec::new();
        for curve in source.iter() {
            elements.extend_from_slice(curve.elements());
            vertices.extend(curve.vertices());
        }

        let index = ElementIndex::new(&elements);
        SourceFilter {
            elements,
            vertices,
            index,
        }
    }

    /// Filter for a set of isolated points (no elements), every point is a vertex.
    pub fn from_points(points: &[Vector2<T>]) -> Self {
        SourceFilter {
            elements: Vec::new(),
            vertices: points.to_vec(),
            index: ElementIndex::new(&[]),
        }
    }

    /// Shortest distance from `point` to the source.
    pub fn distance(&self, point: Vector2<T>) -> T {
        let to_elements = self
            .elements
            .iter()
            .map(|e| e.distance(point))
            .fold(T::infinity(), num_traits::real::Real::min);
        let to_vertices = self
            .vertices
            .iter()
            .map(|v| (*v - point).length())
            .fold(T::infinity(), num_traits::real::Real::min);
        num_traits::real::Real::min(to_elements, to_vertices)
    }

    /// Returns true if some part of the source lies strictly closer than `threshold` to `point`.
    pub fn is_within(&self, point: Vector2<T>, threshold: T) -> bool {
        if threshold <= T::zero() {
            return false;
        }

        if self
            .vertices
            .iter()
            .any(|v| (*v - point).length() < threshold)
        {
            return true;
        }

        let query = AABB::new(point.x, point.y, point.x, point.y);
        self.index
            .query_box(&query, threshold)
            .into_iter()
            .any(|i| self.elements[i].distance(point) < threshold)
    }

    /// Returns true if `curve` stays at least `distance - eps` away from the source.
    ///
    /// Sampled at every vertex of `curve` and at the midpoint of each of its arcs. Straight
    /// connectors (bevel joins, butt caps) may dip closer than `distance` and are not sampled. A
    /// curve without vertices is sampled at one interior point.
    pub fn keeps_distance(&self, curve: &ContinuousCurve<T>, distance: T, eps: T) -> bool {
        let threshold = distance.abs() - eps;
        let mut samples = curve.vertices();
        if samples.is_empty() {
            samples.extend(curve.elements().first().map(|e| e.interior_point()));
        }
        samples.extend(
            curve
                .elements()
                .iter()
                .filter(|e| e.is_arc())
                .map(|e| e.interior_point()),
        );
        !samples.into_iter().any(|p| self.is_within(p, threshold))
    }

    /// Returns true if `curve` crosses the source anywhere except within `eps` of a source vertex.
    pub fn crosses(&self, curve: &ContinuousCurve<T>, eps: T) -> bool {
        for e in curve.elements() {
            for i in self.index.query_element(e, eps) {
                for point in element_intersections(e, &self.elements[i], eps) {
                    let at_vertex = self.vertices.iter().any(|v| v.fuzzy_eq_eps(point, eps));
                    if !at_vertex {
                        return true;
                    }
                }
            }
        }

        false
    }
}
