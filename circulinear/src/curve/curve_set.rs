use super::{ContinuousCurve, Contour};
use crate::core::traits::Real;

/// Unordered collection of [ContinuousCurve]s, the input of a two sided buffer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurveSet<T = f64> {
    curves: Vec<ContinuousCurve<T>>,
}

impl<T> CurveSet<T>
where
    T: Real,
{
    pub fn new() -> Self {
        CurveSet { curves: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, curve: ContinuousCurve<T>) {
        self.curves.push(curve);
    }

    #[inline]
    pub fn curves(&self) -> &[ContinuousCurve<T>] {
        &self.curves
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, ContinuousCurve<T>> {
        self.curves.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

impl<T> From<Vec<ContinuousCurve<T>>> for CurveSet<T> {
    fn from(curves: Vec<ContinuousCurve<T>>) -> Self {
        CurveSet { curves }
    }
}

impl<T> From<ContinuousCurve<T>> for CurveSet<T> {
    fn from(curve: ContinuousCurve<T>) -> Self {
        CurveSet {
            curves: vec![curve],
        }
    }
}

impl<T> From<Contour<T>> for CurveSet<T> {
    fn from(contour: Contour<T>) -> Self {
        CurveSet {
            curves: vec![ContinuousCurve::from(contour)],
        }
    }
}

impl<T> FromIterator<ContinuousCurve<T>> for CurveSet<T> {
    fn from_iter<I: IntoIterator<Item = ContinuousCurve<T>>>(iter: I) -> Self {
        CurveSet {
            curves: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a CurveSet<T> {
    type Item = &'a ContinuousCurve<T>;
    type IntoIter = std::slice::Iter<'a, ContinuousCurve<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::math::vec2,
        curve::{ClosedOriented, Parametrized},
    };

    #[test]
    fn from_contour_keeps_closed_curve() {
        let circle = Contour::circle(vec2(1.0, 2.0), 3.0, true);
        let set = CurveSet::from(circle.clone());
        assert_eq!(set.len(), 1);
        let curve = &set.curves()[0];
        assert!(curve.is_closed());
        assert_eq!(curve, circle.curve());
        assert!((curve.signed_area() - 9.0 * std::f64::consts::PI).abs() < 1e-9);
    }
}
