use super::{curve_intersections, PosKey, PositionTable};
use crate::{
    core::{math::Vector2, traits::Real},
    curve::{ContinuousCurve, Contour, Parametrized, SmoothPieces},
    error::{BufferError, Result},
};
use log::{debug, trace};
use std::collections::BTreeSet;

/// Where a walk continues after arriving at an intersection: the other contour and the position
/// of the intersection on it.
type Twin<T> = (usize, T);

/// Loops kept once every unbounded contour has been walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopSelection {
    All,
    /// Only loops turning right at their crossings: the outline of the union of the regions on
    /// the left of the contours.
    Union,
}

fn start_tangent<T>(curve: &ContinuousCurve<T>) -> Option<Vector2<T>>
where
    T: Real,
{
    curve.elements().first().map(|e| e.unit_tangent(e.t0()))
}

fn end_tangent<T>(curve: &ContinuousCurve<T>) -> Option<Vector2<T>>
where
    T: Real,
{
    curve.elements().last().map(|e| e.unit_tangent(e.t1()))
}

struct MutualWalk<'a, T>
where
    T: Real,
{
    contours: &'a [Contour<T>],
    tables: Vec<PositionTable<T, Twin<T>>>,
    consumed: BTreeSet<(usize, PosKey<T>)>,
}

impl<'a, T> MutualWalk<'a, T>
where
    T: Real,
{
    fn new(contours: &'a [Contour<T>], eps: T) -> Self {
        let n = contours.len();
        let mut tables: Vec<PositionTable<T, Twin<T>>> =
            (0..n).map(|_| PositionTable::new()).collect();

        for i in 0..n {
            for j in (i + 1)..n {
                let records = curve_intersections(contours[i].curve(), contours[j].curve(), eps);
                for r in records {
                    if tables[i].get(r.position1).is_some() || tables[j].get(r.position2).is_some()
                    {
                        debug!(
                            "intersection of contours {} and {} at {:?} already recorded",
                            i, j, r.point
                        );
                        continue;
                    }
                    tables[i].insert(r.position1, (j, r.position2));
                    tables[j].insert(r.position2, (i, r.position1));
                }
            }
        }

        MutualWalk {
            contours,
            tables,
            consumed: BTreeSet::new(),
        }
    }

    fn total(&self) -> usize {
        self.tables.iter().map(|t| t.len()).sum()
    }

    /// Next recorded intersection after `pos` on contour `id`. Bounded contours wrap around,
    /// unbounded ones stop at their upper bound.
    fn next(&self, id: usize, pos: T) -> Option<(T, Twin<T>)> {
        let table = &self.tables[id];
        let next = if self.contours[id].is_bounded() {
            table.next_after_wrapping(pos)
        } else {
            table.next_after(pos)
        };

        next.map(|(key, &twin)| (key, twin))
    }

    fn consume(&mut self, id: usize, pos: T) -> Result<()> {
        if self.consumed.insert((id, PosKey(pos))) {
            Ok(())
        } else {
            Err(BufferError::ConsumedIntersection {
                contour: id,
                position: pos.as_f64(),
            })
        }
    }

    fn piece(&self, id: usize, from: T, to: T) -> ContinuousCurve<T> {
        let curve = self.contours[id].curve();
        if from < to {
            curve.sub_curve(from, to)
        } else {
            curve.sub_curve_wrapped(from, to)
        }
    }

    /// Walk from the lower bound of unbounded contour `id` until some unbounded contour's upper
    /// bound is reached.
    fn walk_unbounded(&mut self, id: usize) -> Result<Contour<T>> {
        let mut result = ContinuousCurve::new();
        let mut cur = id;
        let mut pos = self.contours[id].t0();
        loop {
            match self.next(cur, pos) {
                Some((key, (other, other_pos))) => {
                    result.extend_from(&self.piece(cur, pos, key));
                    self.consume(cur, key)?;
                    trace!("unbounded walk {}:{:?} -> {}:{:?}", cur, key, other, other_pos);
                    cur = other;
                    pos = other_pos;
                }
                None => {
                    let end = self.contours[cur].t1();
                    result.extend_from(&self.contours[cur].curve().sub_curve(pos, end));
                    return Ok(Contour::new(result));
                }
            }
        }
    }

    /// Walk the closed loop that leaves from `(start_id, start_pos)` until it returns there.
    ///
    /// Also returns the turn direction at the first crossing where the two contours are not
    /// tangent: negative for a right turn, positive for a left turn, zero if every crossing is a
    /// touch.
    fn walk_loop(&mut self, start_id: usize, start_pos: T, eps: T) -> Result<(Contour<T>, T)> {
        let mut result = ContinuousCurve::new();
        let mut turn = T::zero();
        let mut arriving: Option<Vector2<T>> = None;
        let mut cur = start_id;
        let mut pos = start_pos;
        loop {
            let (key, (other, other_pos)) = self
                .next(cur, pos)
                .ok_or(BufferError::UnboundedLoop { contour: cur })?;
            let piece = self.piece(cur, pos, key);
            if let (Some(a), Some(b)) = (arriving, start_tangent(&piece)) {
                let cross = a.perp_dot(b);
                if turn == T::zero() && cross.abs() > eps {
                    turn = cross;
                }
            }
            arriving = end_tangent(&piece).or(arriving);
            result.extend_from(&piece);
            self.consume(cur, key)?;
            trace!("loop walk {}:{:?} -> {}:{:?}", cur, key, other, other_pos);
            cur = other;
            pos = other_pos;
            if cur == start_id && pos == start_pos {
                break;
            }
        }

        result.set_is_closed(true);
        Ok((Contour::new(result), turn))
    }

    fn first_unconsumed(&self) -> Option<(usize, T)> {
        self.tables.iter().enumerate().find_map(|(id, table)| {
            table
                .positions()
                .find(|&p| !self.consumed.contains(&(id, PosKey(p))))
                .map(|p| (id, p))
        })
    }
}

fn split_with<T>(
    contours: &[Contour<T>],
    selection: LoopSelection,
    eps: T,
) -> Result<Vec<Contour<T>>>
where
    T: Real,
{
    let mut walk = MutualWalk::new(contours, eps);
    let total = walk.total();
    if total == 0 {
        return Ok(contours.to_vec());
    }

    debug!(
        "splitting {} contours at {} intersection position(s)",
        contours.len(),
        total
    );

    let mut result: Vec<Contour<T>> = contours
        .iter()
        .zip(walk.tables.iter())
        .filter(|(_, table)| table.is_empty())
        .map(|(c, _)| c.clone())
        .collect();

    for id in 0..contours.len() {
        if !contours[id].is_bounded() && !walk.tables[id].is_empty() {
            let contour = walk.walk_unbounded(id)?;
            result.push(contour);
        }
    }

    loop {
        let remaining = total - walk.consumed.len();
        if remaining == 0 {
            break;
        }

        let (seed_id, seed_pos) = walk
            .first_unconsumed()
            .ok_or(BufferError::NoUnprocessedIntersection { remaining })?;

        // the loop arriving at the seed leaves from its twin
        let (start_id, start_pos) = match walk.tables[seed_id].get(seed_pos) {
            Some(&twin) => twin,
            None => return Err(BufferError::NoUnprocessedIntersection { remaining }),
        };

        let (contour, turn) = walk.walk_loop(start_id, start_pos, eps)?;
        if selection == LoopSelection::Union && turn > T::zero() {
            trace!("dropping loop inside both contours");
            continue;
        }
        result.push(contour);
    }

    Ok(result)
}

/// Splits contours that cross each other into a family of pairwise non-crossing contours.
///
/// Contours without intersections pass through unchanged. Unbounded contours are walked first,
/// each from its lower bound until an upper bound is reached. Every remaining intersection then
/// seeds a closed loop walked across contours until it returns to where it started. Every loop is
/// kept, loops bounding overlaps included.
///
/// Input contours must be free of self-intersections.
pub fn split_contours<T>(contours: &[Contour<T>], eps: T) -> Result<Vec<Contour<T>>>
where
    T: Real,
{
    split_with(contours, LoopSelection::All, eps)
}

/// Merges two contours into the outline of the union of the regions on their left.
///
/// Walks like [split_contours] but drops the loops around the overlap of the two regions, so two
/// partially overlapping counter clockwise circles give a single contour.
pub fn split_contour_pair<T>(c1: &Contour<T>, c2: &Contour<T>, eps: T) -> Result<Vec<Contour<T>>>
where
    T: Real,
{
    split_with(&[c1.clone(), c2.clone()], LoopSelection::Union, eps)
}
