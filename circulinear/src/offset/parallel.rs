use super::JoinStrategy;
use crate::{
    core::traits::Real,
    curve::{ContinuousCurve, Contour, Element, Parametrized, SmoothPieces},
};

fn push_join<T, J>(
    result: &mut ContinuousCurve<T>,
    join: &J,
    prev: &Element<T>,
    next: &Element<T>,
    distance: T,
    pos_equal_eps: T,
) where
    T: Real,
    J: JoinStrategy<T>,
{
    let connector = join.create_join(prev, next, distance, pos_equal_eps);
    for e in connector.elements() {
        if !e.is_degenerate_eps(pos_equal_eps) {
            result.push(*e);
        }
    }
}

/// Parallel of a whole chain: each element offset by `distance` with the connectors built by
/// `join` inserted at every interior vertex (and at the closing vertex of a closed curve).
///
/// Arcs offset past their center become segments (see [Element::raw_parallel]). Elements whose
/// parallel is shorter than `pos_equal_eps` are left out, the joins on either side still connect
/// the neighbouring parallels.
pub fn parallel_curve<T, J>(
    curve: &ContinuousCurve<T>,
    distance: T,
    join: &J,
    pos_equal_eps: T,
) -> ContinuousCurve<T>
where
    T: Real,
    J: JoinStrategy<T>,
{
    let elements = curve.elements();
    let n = elements.len();
    let mut result = ContinuousCurve::with_capacity(2 * n, curve.is_closed());

    for (i, e) in elements.iter().enumerate() {
        let offset = e.raw_parallel(distance);
        if !offset.is_degenerate_eps(pos_equal_eps) {
            result.push(offset);
        }

        if i + 1 < n {
            push_join(&mut result, join, e, &elements[i + 1], distance, pos_equal_eps);
        }
    }

    if curve.is_closed() && n > 1 {
        push_join(&mut result, join, &elements[n - 1], &elements[0], distance, pos_equal_eps);
    }

    result
}

/// Parallel of a contour, see [parallel_curve].
pub fn parallel_contour<T, J>(
    contour: &Contour<T>,
    distance: T,
    join: &J,
    pos_equal_eps: T,
) -> Contour<T>
where
    T: Real,
    J: JoinStrategy<T>,
{
    Contour::new(parallel_curve(contour.curve(), distance, join, pos_equal_eps))
}
