use super::{
    parallel_contour, parallel_curve, BufferOptions, CapStrategy, JoinStrategy, RoundCap,
    RoundJoin,
};
use crate::{
    core::{math::Vector2, traits::Real},
    curve::{ClosedOriented, ContinuousCurve, Contour, CurveSet, Parametrized},
    domain::{Boundary, Domain},
    error::Result,
    topology::{split_component, split_contours, SourceFilter},
};
use log::debug;

/// Computes parallel curves and buffers of circulinear curves.
///
/// Holds only the join and cap strategies and the [BufferOptions], so one value can be built once
/// and shared by every computation.
///
/// # Examples
///
/// ```
/// # use circulinear::curve::*;
/// # use circulinear::core::math::*;
/// # use circulinear::domain::*;
/// # use circulinear::offset::*;
/// let square = Contour::from_points(&[
///     vec2(0.0, 0.0),
///     vec2(4.0, 0.0),
///     vec2(4.0, 4.0),
///     vec2(0.0, 4.0),
/// ]);
/// let calculator = BufferCalculator::<f64>::DEFAULT;
/// let domain = calculator
///     .compute_boundary_buffer(&Boundary::from(square), 1.0)
///     .unwrap();
/// assert_eq!(domain.contours().len(), 1);
/// assert!((domain.area() - (32.0 + std::f64::consts::PI)).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferCalculator<T = f64, J = RoundJoin, C = RoundCap>
where
    T: Real,
{
    join: J,
    cap: C,
    options: BufferOptions<T>,
}

impl BufferCalculator<f64, RoundJoin, RoundCap> {
    /// Round joins, round caps and default options.
    pub const DEFAULT: Self = BufferCalculator {
        join: RoundJoin,
        cap: RoundCap,
        options: BufferOptions {
            pos_equal_eps: 1e-5,
        },
    };
}

impl<T, J, C> Default for BufferCalculator<T, J, C>
where
    T: Real,
    J: JoinStrategy<T> + Default,
    C: CapStrategy<T> + Default,
{
    fn default() -> Self {
        BufferCalculator::new(J::default(), C::default())
    }
}

impl<T, J, C> BufferCalculator<T, J, C>
where
    T: Real,
    J: JoinStrategy<T>,
    C: CapStrategy<T>,
{
    pub fn new(join: J, cap: C) -> Self {
        BufferCalculator {
            join,
            cap,
            options: BufferOptions::new(),
        }
    }

    pub fn with_options(mut self, options: BufferOptions<T>) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn join_strategy(&self) -> &J {
        &self.join
    }

    #[inline]
    pub fn cap_strategy(&self) -> &C {
        &self.cap
    }

    #[inline]
    pub fn options(&self) -> &BufferOptions<T> {
        &self.options
    }

    /// Parallel of `curve` at signed `distance`, positive distances offset to the right.
    ///
    /// The result may cross itself, see [BufferCalculator::compute_buffer] for a cleaned up
    /// region.
    pub fn create_parallel(&self, curve: &ContinuousCurve<T>, distance: T) -> ContinuousCurve<T> {
        parallel_curve(curve, distance, &self.join, self.options.pos_equal_eps)
    }

    /// Parallel of a contour at signed `distance`, a counter clockwise contour grows for positive
    /// distances.
    pub fn create_parallel_contour(&self, contour: &Contour<T>, distance: T) -> Contour<T> {
        parallel_contour(contour, distance, &self.join, self.options.pos_equal_eps)
    }

    /// Region within `|distance|` of the curves in `source`.
    ///
    /// Closed curves produce a ring, open curves a capped band. An end of an open curve that
    /// extends to infinity gets no cap: the band stays open at that end, or splits into two
    /// unbounded contours when both ends are infinite. A zero distance yields an empty domain.
    pub fn compute_buffer(&self, source: &CurveSet<T>, distance: T) -> Result<Domain<T>> {
        let eps = self.options.pos_equal_eps;
        let d = distance.abs();
        if d < eps {
            debug!("buffer distance {:?} is zero, returning empty domain", distance);
            return Ok(Domain::empty());
        }

        let mut candidates = Vec::new();
        for (id, curve) in source.iter().enumerate().filter(|(_, c)| !c.is_empty()) {
            let pieces = split_component(curve, id, eps)?;
            debug!("source curve {} split into {} piece(s)", id, pieces.len());
            for piece in pieces.iter() {
                self.push_band(piece, d, &mut candidates)?;
            }
        }

        let filter = SourceFilter::new(source);
        self.assemble(candidates, &filter, d)
    }

    /// Dilation (`distance > 0`) or erosion (`distance < 0`) of the region enclosed by
    /// `boundary`. Only the parallel on the outer side of each contour is a candidate.
    pub fn compute_boundary_buffer(
        &self,
        boundary: &Boundary<T>,
        distance: T,
    ) -> Result<Domain<T>> {
        let eps = self.options.pos_equal_eps;
        let mut candidates = Vec::new();
        let contours = boundary.contours().iter().enumerate();
        for (id, contour) in contours.filter(|(_, c)| !c.is_empty()) {
            for piece in split_component(contour.curve(), id, eps)? {
                candidates.push(Contour::new(self.create_parallel(&piece, distance)));
            }
        }

        let filter = SourceFilter::new(&boundary.to_curve_set());
        self.assemble(candidates, &filter, distance.abs())
    }

    /// Union of the disks of radius `|distance|` centered at `points`.
    pub fn compute_point_set_buffer(
        &self,
        points: &[Vector2<T>],
        distance: T,
    ) -> Result<Domain<T>> {
        let eps = self.options.pos_equal_eps;
        let d = distance.abs();
        if d < eps {
            return Ok(Domain::empty());
        }

        let mut unique: Vec<Vector2<T>> = Vec::with_capacity(points.len());
        for p in points.iter() {
            if !unique.iter().any(|u| u.fuzzy_eq_eps(*p, eps)) {
                unique.push(*p);
            }
        }

        let candidates = unique
            .iter()
            .map(|p| Contour::circle(*p, d, true))
            .collect();
        let filter = SourceFilter::from_points(&unique);
        self.assemble(candidates, &filter, d)
    }

    /// Candidate contours of the two sided buffer of a curve without self-intersections.
    fn push_band(
        &self,
        curve: &ContinuousCurve<T>,
        d: T,
        candidates: &mut Vec<Contour<T>>,
    ) -> Result<()> {
        let eps = self.options.pos_equal_eps;
        let right = self.create_parallel(curve, d);
        let left = self.create_parallel(curve, -d).reverse();

        if curve.is_closed() {
            candidates.push(Contour::new(right));
            candidates.push(Contour::new(left));
            return Ok(());
        }

        let start_bounded = curve.first_point().is_some();
        let end_bounded = curve.last_point().is_some();
        let mut band = ContinuousCurve::new();
        match (start_bounded, end_bounded) {
            (true, true) => {
                band.extend_from(&right);
                band.extend_from(&self.cap_between(&right, &left, eps)?);
                band.extend_from(&left);
                band.extend_from(&self.cap_between(&left, &right, eps)?);
            }
            (true, false) => {
                band.extend_from(&left);
                band.extend_from(&self.cap_between(&left, &right, eps)?);
                band.extend_from(&right);
            }
            (false, true) => {
                band.extend_from(&right);
                band.extend_from(&self.cap_between(&right, &left, eps)?);
                band.extend_from(&left);
            }
            (false, false) => {
                candidates.push(Contour::new(right));
                candidates.push(Contour::new(left));
                return Ok(());
            }
        }

        candidates.push(Contour::new(band));
        Ok(())
    }

    fn cap_between(
        &self,
        from: &ContinuousCurve<T>,
        to: &ContinuousCurve<T>,
        eps: T,
    ) -> Result<ContinuousCurve<T>> {
        match (from.last_point(), to.first_point()) {
            (Some(p1), Some(p2)) => self.cap.create_cap(p1, p2, eps),
            _ => Ok(ContinuousCurve::new()),
        }
    }

    /// Turns candidate contours into the final domain: re-split, filter the pieces of candidates
    /// that crossed themselves by distance, split against each other and reject contours crossing
    /// or too close to the source.
    fn assemble(
        &self,
        candidates: Vec<Contour<T>>,
        filter: &SourceFilter<T>,
        d: T,
    ) -> Result<Domain<T>> {
        let eps = self.options.pos_equal_eps;
        debug!("assembling buffer from {} candidate(s)", candidates.len());

        let mut contours = Vec::new();
        let mut too_close = 0;
        for (id, candidate) in candidates.iter().enumerate() {
            let pieces = split_component(candidate.curve(), id, eps)?;
            let was_split = pieces.len() > 1;
            for piece in pieces {
                if is_degenerate(&piece, eps) {
                    continue;
                }
                if was_split && !filter.keeps_distance(&piece, d, eps) {
                    too_close += 1;
                    continue;
                }
                contours.push(Contour::new(piece));
            }
        }
        debug!(
            "{} contour(s) kept after self split, {} piece(s) too close to source",
            contours.len(),
            too_close
        );

        let split = split_contours(&contours, eps)?;
        let total = split.len();
        let result: Vec<Contour<T>> = split
            .into_iter()
            .filter(|c| !is_degenerate(c.curve(), eps))
            .filter(|c| !filter.crosses(c.curve(), eps))
            .filter(|c| filter.keeps_distance(c.curve(), d, eps))
            .collect();
        debug!(
            "{} contour(s) after mutual split, {} rejected",
            total,
            total - result.len()
        );

        Ok(Domain::new(Boundary::new(result)))
    }
}

/// Empty curves, bounded curves shorter than `eps` and closed curves enclosing no area (a
/// parallel folded back onto itself).
fn is_degenerate<T>(curve: &ContinuousCurve<T>, eps: T) -> bool
where
    T: Real,
{
    if curve.is_empty() {
        return true;
    }
    if !curve.is_bounded() {
        return false;
    }

    curve.length() < eps || (curve.is_closed() && curve.signed_area().abs() < eps)
}
