/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {
        $crate::assert_fuzzy_eq!($left, $right, 1e-5)
    };
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Construct an open curve from a list of `(x, y, bulge)` tuples, see
/// [ContinuousCurve::from_bulge_points](crate::curve::ContinuousCurve::from_bulge_points).
///
/// # Examples
///
/// ```
/// # use circulinear::curve_open;
/// # use circulinear::curve::*;
/// let curve = curve_open![(0.0, 0.0, 0.0), (2.0, 0.0, 1.0), (4.0, 0.0, 0.0)];
/// assert!(!curve.is_closed());
/// assert_eq!(curve.element_count(), 2);
/// assert!(curve.elements()[0].is_line());
/// assert!(curve.elements()[1].is_arc());
/// ```
#[macro_export]
macro_rules! curve_open {
    ($( $x:expr ),* $(,)?) => {
        $crate::curve::ContinuousCurve::from_bulge_points(&[$( $x ),*], false)
    };
}

/// Construct a closed curve from a list of `(x, y, bulge)` tuples, the last vertex connects back
/// to the first.
///
/// # Examples
///
/// ```
/// # use circulinear::curve_closed;
/// # use circulinear::curve::*;
/// let square = curve_closed![(0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (1.0, 1.0, 0.0), (0.0, 1.0, 0.0)];
/// assert!(square.is_closed());
/// assert_eq!(square.element_count(), 4);
/// assert_eq!(square.signed_area(), 1.0);
/// ```
#[macro_export]
macro_rules! curve_closed {
    ($( $x:expr ),* $(,)?) => {
        $crate::curve::ContinuousCurve::from_bulge_points(&[$( $x ),*], true)
    };
}
