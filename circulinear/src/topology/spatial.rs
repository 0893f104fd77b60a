use crate::{core::traits::Real, curve::Element};
use static_aabb2d_index::{
    StaticAABB2DIndex, StaticAABB2DIndexBuildError, StaticAABB2DIndexBuilder, AABB,
};

/// Spatial index over a list of elements.
///
/// Bounded elements are stored in a [StaticAABB2DIndex], rays and straight lines have no bounding
/// box and are returned by every query.
#[derive(Debug)]
pub struct ElementIndex<T>
where
    T: Real,
{
    index: StaticAABB2DIndex<T>,
    /// Element index of each item in the spatial index.
    bounded: Vec<usize>,
    unbounded: Vec<usize>,
}

impl<T> ElementIndex<T>
where
    T: Real,
{
    pub fn new(elements: &[Element<T>]) -> Self {
        let mut boxes = Vec::with_capacity(elements.len());
        let mut bounded = Vec::with_capacity(elements.len());
        let mut unbounded = Vec::new();
        for (i, e) in elements.iter().enumerate() {
            match e.bounding_box() {
                Some(bb) => {
                    boxes.push(bb);
                    bounded.push(i);
                }
                None => unbounded.push(i),
            }
        }

        let mut builder = StaticAABB2DIndexBuilder::new(boxes.len());
        for bb in boxes.iter() {
            builder.add(bb.min_x, bb.min_y, bb.max_x, bb.max_y);
        }

        ElementIndex {
            index: unwrap_spatial_index(builder),
            bounded,
            unbounded,
        }
    }

    /// Indexes of all elements whose bounding box overlaps `bb` grown by `eps`, plus all
    /// unbounded elements. Order is ascending.
    pub fn query_box(&self, bb: &AABB<T>, eps: T) -> Vec<usize> {
        let mut result: Vec<usize> = self
            .index
            .query(bb.min_x - eps, bb.min_y - eps, bb.max_x + eps, bb.max_y + eps)
            .into_iter()
            .map(|i| self.bounded[i])
            .collect();
        result.extend_from_slice(&self.unbounded);
        result.sort_unstable();
        result
    }

    /// Candidate elements that may intersect `element`: every element when `element` is unbounded.
    pub fn query_element(&self, element: &Element<T>, eps: T) -> Vec<usize> {
        match element.bounding_box() {
            Some(bb) => self.query_box(&bb, eps),
            None => {
                let mut all = self.bounded.clone();
                all.extend_from_slice(&self.unbounded);
                all.sort_unstable();
                all
            }
        }
    }

    pub fn len(&self) -> usize {
        self.bounded.len() + self.unbounded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Helper function to unwrap a spatial index from a builder or panic for the unexpected case of
/// failure.
fn unwrap_spatial_index<T>(builder: StaticAABB2DIndexBuilder<T>) -> StaticAABB2DIndex<T>
where
    T: Real,
{
    match builder.build() {
        Ok(x) => x,
        Err(e) => match e {
            StaticAABB2DIndexBuildError::ItemCountError { .. } => {
                unreachable!("internal library error: count mismatch when building spatial index")
            }
            StaticAABB2DIndexBuildError::NumericCastError => {
                panic!("failed to cast numeric type: {e}")
            }
        },
    }
}
