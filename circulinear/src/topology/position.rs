//! Ordered tables keyed by global curve position, used to record where a walk along a curve has
//! to jump to another position (the "twin" of an intersection).
use crate::{
    core::traits::Real,
    curve::{ContinuousCurve, Parametrized, SmoothPieces},
};
use std::{cmp::Ordering, collections::BTreeMap};

/// Floating position usable as an ordered map key. Positions are never NaN.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PosKey<T>(pub T);

impl<T> Eq for PosKey<T> where T: Real {}

impl<T> PartialOrd for PosKey<T>
where
    T: Real,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for PosKey<T>
where
    T: Real,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}

/// Sorted map from positions on one curve to a value describing where to continue.
#[derive(Debug, Clone)]
pub struct PositionTable<T, V> {
    map: BTreeMap<PosKey<T>, V>,
}

impl<T, V> PositionTable<T, V>
where
    T: Real,
{
    pub fn new() -> Self {
        PositionTable {
            map: BTreeMap::new(),
        }
    }

    /// Records `value` at `pos`. Returns false (keeping the existing value) if `pos` is already
    /// present.
    pub fn insert(&mut self, pos: T, value: V) -> bool {
        match self.map.entry(PosKey(pos)) {
            std::collections::btree_map::Entry::Occupied(_) => false,
            std::collections::btree_map::Entry::Vacant(e) => {
                e.insert(value);
                true
            }
        }
    }

    pub fn get(&self, pos: T) -> Option<&V> {
        self.map.get(&PosKey(pos))
    }

    /// First entry with a position strictly greater than `pos`.
    pub fn next_after(&self, pos: T) -> Option<(T, &V)> {
        use std::ops::Bound::{Excluded, Unbounded};
        self.map
            .range((Excluded(PosKey(pos)), Unbounded))
            .next()
            .map(|(k, v)| (k.0, v))
    }

    /// Like [PositionTable::next_after] but wraps around to the first entry.
    pub fn next_after_wrapping(&self, pos: T) -> Option<(T, &V)> {
        self.next_after(pos).or_else(|| self.first())
    }

    pub fn first(&self) -> Option<(T, &V)> {
        self.map.iter().next().map(|(k, v)| (k.0, v))
    }

    pub fn positions(&self) -> impl Iterator<Item = T> + '_ {
        self.map.keys().map(|k| k.0)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<T, V> Default for PositionTable<T, V>
where
    T: Real,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Global position of parameter `t` on element `index` of `curve`, snapped to element ends.
///
/// A point within `eps` of an element start maps to exactly `2 * index`. A point within `eps` of
/// an element end maps to the start of the following element (wrapping to `0` on a closed curve)
/// so that a crossing through a vertex gets a single position whichever element reported it.
pub fn canonical_position<T>(curve: &ContinuousCurve<T>, index: usize, t: T, eps: T) -> T
where
    T: Real,
{
    let elements = curve.elements();
    let e = &elements[index];
    let point = e.point(t);

    if let Some(start) = e.first_point() {
        if point.fuzzy_eq_eps(start, eps) {
            return curve.global_position(index, e.t0());
        }
    }

    if let Some(end) = e.last_point() {
        if point.fuzzy_eq_eps(end, eps) {
            if index + 1 < elements.len() {
                return curve.global_position(index + 1, elements[index + 1].t0());
            }
            if curve.is_closed() {
                return T::zero();
            }
            return curve.global_position(index, e.t1());
        }
    }

    curve.global_position(index, t)
}
