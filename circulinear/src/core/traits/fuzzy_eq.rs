/// Trait for fuzzy equality comparisons with floating point numbers.
///
/// There is deliberately no default epsilon: every comparison takes the tolerance it should use,
/// normally the `pos_equal_eps` carried by
/// [BufferOptions](crate::offset::BufferOptions), so that all predicates in one computation agree.
///
/// # Examples
///
/// ```
/// # use circulinear::core::traits::*;
/// let a = 0.1 + 0.2;
/// let b = 0.3;
///
/// // Direct comparison would fail due to floating point precision
/// assert_ne!(a, b);
///
/// // Fuzzy comparison succeeds
/// assert!(a.fuzzy_eq_eps(b, 1e-9));
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Returns `true` is this object is approximately equal to the other one, using
    /// a provided epsilon value.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Returns `true` if this value is approximately equal to zero, using
    /// a provided epsilon value.
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;
}

macro_rules! impl_fuzzy_eq {
    ($ty:ty) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                (*self - other).abs() < fuzzy_epsilon
            }
            #[inline]
            fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
                self.abs() < fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy_eq!(f32);
impl_fuzzy_eq!(f64);
