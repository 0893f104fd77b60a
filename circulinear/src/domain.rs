//! Regions of the plane described by their boundary contours.
use crate::{
    core::traits::Real,
    curve::{ClosedOriented, Contour, CurveSet, Parametrized},
};

/// Set of pairwise disjoint contours bounding a region.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Boundary<T = f64> {
    contours: Vec<Contour<T>>,
}

impl<T> Boundary<T>
where
    T: Real,
{
    pub fn new(contours: Vec<Contour<T>>) -> Self {
        Boundary { contours }
    }

    #[inline]
    pub fn contours(&self) -> &[Contour<T>] {
        &self.contours
    }

    #[inline]
    pub fn into_contours(self) -> Vec<Contour<T>> {
        self.contours
    }

    #[inline]
    pub fn push(&mut self, contour: Contour<T>) {
        self.contours.push(contour);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.contours.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Sum of the signed areas of the bounded contours.
    pub fn signed_area(&self) -> T {
        self.contours
            .iter()
            .filter(|c| c.is_bounded())
            .fold(T::zero(), |acc, c| acc + c.signed_area())
    }

    /// The same contours with their orientation flipped.
    pub fn reverse(&self) -> Self {
        Boundary {
            contours: self.contours.iter().map(|c| c.reverse()).collect(),
        }
    }

    /// Contour curves as a [CurveSet], e.g. to buffer the boundary lines themselves.
    pub fn to_curve_set(&self) -> CurveSet<T> {
        self.contours
            .iter()
            .map(|c| c.curve().clone())
            .collect()
    }
}

impl<T> From<Contour<T>> for Boundary<T> {
    fn from(contour: Contour<T>) -> Self {
        Boundary {
            contours: vec![contour],
        }
    }
}

impl<T> From<Vec<Contour<T>>> for Boundary<T> {
    fn from(contours: Vec<Contour<T>>) -> Self {
        Boundary { contours }
    }
}

/// Region of the plane on the left of its boundary contours.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Domain<T = f64> {
    boundary: Boundary<T>,
}

impl<T> Domain<T>
where
    T: Real,
{
    pub fn new(boundary: Boundary<T>) -> Self {
        Domain { boundary }
    }

    /// Domain with no boundary.
    pub fn empty() -> Self {
        Domain {
            boundary: Boundary::new(Vec::new()),
        }
    }

    #[inline]
    pub fn boundary(&self) -> &Boundary<T> {
        &self.boundary
    }

    #[inline]
    pub fn into_boundary(self) -> Boundary<T> {
        self.boundary
    }

    #[inline]
    pub fn contours(&self) -> &[Contour<T>] {
        self.boundary.contours()
    }

    /// Enclosed area, outer contours count positive and holes negative. Unbounded contours do not
    /// contribute.
    pub fn area(&self) -> T {
        self.boundary.signed_area()
    }

    /// Returns true if every contour is bounded and the enclosed area is not negative.
    pub fn is_bounded(&self) -> bool {
        self.boundary.contours().iter().all(|c| c.is_bounded()) && self.area() >= T::zero()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boundary.is_empty()
    }

    /// The rest of the plane: same contours traversed the other way.
    pub fn complement(&self) -> Self {
        Domain {
            boundary: self.boundary.reverse(),
        }
    }
}
