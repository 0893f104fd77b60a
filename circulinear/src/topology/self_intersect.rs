use super::{self_intersections, IntersectionRecord, PosKey, PositionTable};
use crate::{
    core::{math::Vector2, traits::Real},
    curve::{ContinuousCurve, Parametrized},
    error::{BufferError, Result},
};
use log::trace;
use std::collections::BTreeSet;

/// Every pass of the curve through one crossing point.
struct Crossing<T> {
    point: Vector2<T>,
    positions: Vec<T>,
}

impl<T> Crossing<T>
where
    T: Real,
{
    /// Adds `pos` unless the crossing already has a pass on the same element.
    fn add_pass(&mut self, pos: T) {
        let element = (pos / T::two()).floor();
        if !self
            .positions
            .iter()
            .any(|p| (*p / T::two()).floor() == element)
        {
            self.positions.push(pos);
        }
    }
}

/// Groups the records by crossing point.
///
/// Several records meeting at one point (three or more passes, or tangent touches reported by
/// more than one element pair) end up in the same group with one position per pass.
fn group_crossings<T>(records: &[IntersectionRecord<T>], eps: T) -> Vec<Crossing<T>>
where
    T: Real,
{
    let mut groups: Vec<Crossing<T>> = Vec::new();
    for r in records.iter() {
        let index = match groups.iter().position(|g| g.point.fuzzy_eq_eps(r.point, eps)) {
            Some(i) => i,
            None => {
                groups.push(Crossing {
                    point: r.point,
                    positions: Vec::new(),
                });
                groups.len() - 1
            }
        };
        groups[index].add_pass(r.position1);
        groups[index].add_pass(r.position2);
    }

    groups
}

/// Twin table of `curve`: arriving at the k-th pass (in position order) through a crossing point
/// continues from the (k-1)-th pass, the first pass continues from the last.
///
/// The twin map is a permutation of the recorded positions, so every position is arrived at
/// exactly once by the walks below. Free ends of an open curve touching the curve are not
/// crossings and are left out.
fn twin_table<T>(curve: &ContinuousCurve<T>, eps: T) -> PositionTable<T, T>
where
    T: Real,
{
    let records = self_intersections(curve, eps);
    let mut twins = PositionTable::new();
    for mut crossing in group_crossings(&records, eps) {
        if !curve.is_closed() {
            crossing
                .positions
                .retain(|p| *p != curve.t0() && *p != curve.t1());
        }
        if crossing.positions.len() < 2 {
            continue;
        }

        crossing
            .positions
            .sort_by(|a, b| PosKey(*a).cmp(&PosKey(*b)));
        let n = crossing.positions.len();
        trace!(
            "crossing at {:?} with {} passes",
            crossing.point,
            crossing.positions.len()
        );
        for (k, pos) in crossing.positions.iter().enumerate() {
            twins.insert(*pos, crossing.positions[(k + n - 1) % n]);
        }
    }

    twins
}

/// Marks the intersection at `pos` as arrived at, a second arrival means the walk is cycling.
fn consume<T>(consumed: &mut BTreeSet<PosKey<T>>, id: usize, pos: T) -> Result<()>
where
    T: Real,
{
    if consumed.insert(PosKey(pos)) {
        Ok(())
    } else {
        Err(BufferError::ConsumedIntersection {
            contour: id,
            position: pos.as_f64(),
        })
    }
}

/// Splits `curve` at its self-intersections into pieces that do not cross themselves.
///
/// The first piece runs from the start of `curve` to its end (closed again if `curve` is closed),
/// jumping over every loop. Each loop it jumped over is returned as an additional closed piece. A
/// curve without self-intersections is returned unchanged as the only piece. A closed curve
/// crossing itself at its start vertex has no such first piece, all of its pieces are loops.
///
/// Points where the curve passes more than twice, as collapsing parallels produce, split into one
/// piece per pass. Errors report contour `0`, see [split_component] to name the curve.
///
/// # Examples
///
/// ```
/// # use circulinear::curve::*;
/// # use circulinear::core::math::*;
/// # use circulinear::topology::*;
/// let figure_eight = ContinuousCurve::from_points(
///     &[vec2(0.0, 0.0), vec2(2.0, 2.0), vec2(2.0, 0.0), vec2(0.0, 2.0)],
///     true,
/// );
/// let pieces = split_self_intersections(&figure_eight, 1e-5).unwrap();
/// assert_eq!(pieces.len(), 2);
/// assert!(pieces.iter().all(|p| p.is_closed()));
/// ```
pub fn split_self_intersections<T>(
    curve: &ContinuousCurve<T>,
    eps: T,
) -> Result<Vec<ContinuousCurve<T>>>
where
    T: Real,
{
    split_component(curve, 0, eps)
}

/// [split_self_intersections] for the curve `id` of a larger family, errors name `id`.
pub fn split_component<T>(
    curve: &ContinuousCurve<T>,
    id: usize,
    eps: T,
) -> Result<Vec<ContinuousCurve<T>>>
where
    T: Real,
{
    let twins = twin_table(curve, eps);
    if twins.is_empty() {
        return Ok(vec![curve.clone()]);
    }

    trace!(
        "splitting curve {} at {} crossing position(s)",
        id,
        twins.len()
    );

    let mut consumed = BTreeSet::new();
    let mut result = Vec::new();

    // main piece from the start to the end, skipping every loop
    if !(curve.is_closed() && twins.get(curve.t0()).is_some()) {
        let mut piece = ContinuousCurve::new();
        let mut pos = curve.t0();
        while let Some((key, &twin)) = twins.next_after(pos) {
            piece.extend_from(&curve.sub_curve(pos, key));
            consume(&mut consumed, id, key)?;
            trace!("main walk jumps from {:?} to {:?}", key, twin);
            pos = twin;
        }
        piece.extend_from(&curve.sub_curve(pos, curve.t1()));
        piece.set_is_closed(curve.is_closed());
        if !piece.is_empty() {
            result.push(piece);
        }
    }

    // every position not yet arrived at is the end of a loop that starts at its twin
    let seeds: Vec<T> = twins.positions().collect();
    for seed in seeds {
        if consumed.contains(&PosKey(seed)) {
            continue;
        }

        let start = match twins.get(seed) {
            Some(&twin) => twin,
            None => continue,
        };

        let mut piece = ContinuousCurve::new();
        let mut pos = start;
        loop {
            let next = if curve.is_closed() {
                twins.next_after_wrapping(pos)
            } else {
                twins.next_after(pos)
            };
            let (key, twin) = match next {
                Some((key, &twin)) => (key, twin),
                None => {
                    return Err(BufferError::MissingIntersection {
                        contour: id,
                        position: pos.as_f64(),
                    })
                }
            };

            piece.extend_from(&curve.sub_curve(pos, key));
            consume(&mut consumed, id, key)?;
            pos = twin;
            if pos == start {
                break;
            }
        }

        piece.set_is_closed(true);
        if !piece.is_empty() {
            result.push(piece);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{math::vec2, traits::FuzzyEq},
        curve::ClosedOriented,
    };

    #[test]
    fn simple_curve_is_unchanged() {
        let square = ContinuousCurve::from_points(
            &[vec2(0.0, 0.0), vec2(2.0, 0.0), vec2(2.0, 2.0), vec2(0.0, 2.0)],
            true,
        );
        let pieces = split_self_intersections(&square, 1e-5).unwrap();
        assert_eq!(pieces, vec![square]);
    }

    #[test]
    fn figure_eight_lobes() {
        let figure_eight = ContinuousCurve::from_points(
            &[vec2(0.0, 0.0), vec2(2.0, 2.0), vec2(2.0, 0.0), vec2(0.0, 2.0)],
            true,
        );
        let pieces = split_self_intersections(&figure_eight, 1e-5).unwrap();
        assert_eq!(pieces.len(), 2);
        let mut areas: Vec<f64> = pieces.iter().map(|p| p.signed_area()).collect();
        areas.sort_by(|a, b| a.partial_cmp(b).unwrap());
        // left lobe keeps the counter clockwise start, right lobe runs clockwise
        assert!(areas[0].fuzzy_eq_eps(-1.0, 1e-9));
        assert!(areas[1].fuzzy_eq_eps(1.0, 1e-9));
        for p in pieces.iter() {
            assert!(p.first_point().unwrap().fuzzy_eq_eps(p.last_point().unwrap(), 1e-9));
        }
    }

    #[test]
    fn open_curve_with_loop() {
        // goes right, loops back up and crosses its first segment, then continues
        let curve = ContinuousCurve::from_points(
            &[
                vec2(0.0, 0.0),
                vec2(4.0, 0.0),
                vec2(4.0, 2.0),
                vec2(2.0, 2.0),
                vec2(2.0, -2.0),
            ],
            false,
        );
        let pieces = split_self_intersections(&curve, 1e-5).unwrap();
        assert_eq!(pieces.len(), 2);
        assert!(!pieces[0].is_closed());
        assert!(pieces[0].first_point().unwrap().fuzzy_eq_eps(vec2(0.0, 0.0), 1e-9));
        assert!(pieces[0].last_point().unwrap().fuzzy_eq_eps(vec2(2.0, -2.0), 1e-9));
        assert!(pieces[0].length().fuzzy_eq_eps(4.0, 1e-9));
        assert!(pieces[1].is_closed());
        assert!(pieces[1].signed_area().fuzzy_eq_eps(4.0, 1e-9));
    }

    #[test]
    fn point_passed_three_times() {
        // three triangular lobes sharing the origin
        let curve = ContinuousCurve::from_points(
            &[
                vec2(0.0, 0.0),
                vec2(1.0, 0.0),
                vec2(1.0, 1.0),
                vec2(0.0, 0.0),
                vec2(-1.0, 0.0),
                vec2(-1.0, -1.0),
                vec2(0.0, 0.0),
                vec2(0.0, 1.0),
                vec2(-1.0, 1.0),
            ],
            true,
        );
        let pieces = split_component(&curve, 3, 1e-5).unwrap();
        assert_eq!(pieces.len(), 3);
        for p in pieces.iter() {
            assert!(p.is_closed());
            assert_eq!(p.element_count(), 3);
            assert!(p.signed_area().fuzzy_eq_eps(0.5, 1e-9));
        }
    }
}
