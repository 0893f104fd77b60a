use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy compared, ordered
/// and stored in a spatial index.
///
/// Infinite values are meaningful: they bound the parameter domains of rays and straight lines.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyOrd
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + 'static
{
    #[inline]
    fn pi() -> Self {
        Self::lit(std::f64::consts::PI)
    }

    #[inline]
    fn tau() -> Self {
        Self::lit(std::f64::consts::TAU)
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    /// Converts an `f64` literal into `Self`, saturating to the bounded range if it cannot be
    /// represented.
    #[inline]
    fn lit(value: f64) -> Self {
        <Self as num_traits::NumCast>::from(value).unwrap_or_else(|| {
            if value < 0.0 {
                <Self as num_traits::Bounded>::min_value()
            } else {
                <Self as num_traits::Bounded>::max_value()
            }
        })
    }

    #[inline]
    fn infinity() -> Self {
        Self::lit(f64::INFINITY)
    }

    #[inline]
    fn neg_infinity() -> Self {
        Self::lit(f64::NEG_INFINITY)
    }

    /// Returns `false` for infinities and NaN.
    #[inline]
    fn is_finite(self) -> bool {
        self.abs() < Self::infinity()
    }

    /// Lossy conversion used for diagnostics and error payloads.
    #[inline]
    fn as_f64(self) -> f64 {
        num_traits::ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }
}

impl Real for f32 {
    #[inline]
    fn pi() -> Self {
        std::f32::consts::PI
    }

    #[inline]
    fn tau() -> Self {
        std::f32::consts::TAU
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn infinity() -> Self {
        f32::INFINITY
    }

    #[inline]
    fn neg_infinity() -> Self {
        f32::NEG_INFINITY
    }
}

impl Real for f64 {
    #[inline]
    fn pi() -> Self {
        std::f64::consts::PI
    }

    #[inline]
    fn tau() -> Self {
        std::f64::consts::TAU
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn infinity() -> Self {
        f64::INFINITY
    }

    #[inline]
    fn neg_infinity() -> Self {
        f64::NEG_INFINITY
    }
}
