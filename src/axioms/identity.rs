//! Identity-element registry.
//!
//! `HasZero` and `HasOne` are opt-in: a type has an identity element only
//! if an impl says so. The crate registers the built-in numeric types and
//! (with the `complex` feature) `num_complex::Complex<T>` over them. User
//! types register through a plain impl or `#[derive(Identities)]`.
//!
//! Asking for an identity of an unregistered type is a compile error:
//!
//! ```compile_fail
//! let s: String = poly_axioms::zero();
//! ```

/// Additive identity.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no registered additive identity",
    label = "`zero::<{Self}>()` is not defined",
    note = "implement `HasZero` for `{Self}` or `#[derive(Identities)]`"
)]
pub trait HasZero: Sized {
    /// The additive identity of `Self`.
    fn zero() -> Self;

    /// Returns true if `self` equals the additive identity.
    #[inline]
    fn is_zero(&self) -> bool
    where
        Self: PartialEq,
    {
        *self == Self::zero()
    }
}

/// Multiplicative identity.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no registered multiplicative identity",
    label = "`one::<{Self}>()` is not defined",
    note = "implement `HasOne` for `{Self}` or `#[derive(Identities)]`"
)]
pub trait HasOne: Sized {
    /// The multiplicative identity of `Self`.
    fn one() -> Self;

    /// Returns true if `self` equals the multiplicative identity.
    #[inline]
    fn is_one(&self) -> bool
    where
        Self: PartialEq,
    {
        *self == Self::one()
    }
}

/// Returns the additive identity of `T`.
#[inline]
#[must_use]
pub fn zero<T: HasZero>() -> T {
    T::zero()
}

/// Returns the multiplicative identity of `T`.
#[inline]
#[must_use]
pub fn one<T: HasOne>() -> T {
    T::one()
}

mod sealed {
    pub trait Sealed {}
}

/// Built-in numeric types.
///
/// Sealed: the set is closed. It exists so that composite registrations
/// (complex numbers) can say "over a built-in numeric component".
pub trait Arithmetic: Copy + PartialEq + HasZero + HasOne + sealed::Sealed {}

macro_rules! impl_arithmetic {
    ($($t:ty => $zero:expr, $one:expr);* $(;)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl Arithmetic for $t {}

            impl HasZero for $t {
                #[inline(always)]
                fn zero() -> Self { $zero }
            }

            impl HasOne for $t {
                #[inline(always)]
                fn one() -> Self { $one }
            }
        )*
    };
}

impl_arithmetic! {
    i8 => 0, 1;
    i16 => 0, 1;
    i32 => 0, 1;
    i64 => 0, 1;
    i128 => 0, 1;
    isize => 0, 1;
    u8 => 0, 1;
    u16 => 0, 1;
    u32 => 0, 1;
    u64 => 0, 1;
    u128 => 0, 1;
    usize => 0, 1;
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
}

#[cfg(feature = "complex")]
mod complex {
    use super::{Arithmetic, HasOne, HasZero};
    use num_complex::Complex;

    /// `(0, 0)`.
    impl<T: Arithmetic> HasZero for Complex<T> {
        #[inline]
        fn zero() -> Self {
            Complex::new(T::zero(), T::zero())
        }
    }

    /// `(1, 0)`.
    impl<T: Arithmetic> HasOne for Complex<T> {
        #[inline]
        fn one() -> Self {
            Complex::new(T::one(), T::zero())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_identities() {
        assert_eq!(zero::<i32>(), 0);
        assert_eq!(one::<u64>(), 1);
        assert_eq!(zero::<f64>(), 0.0);
        assert_eq!(one::<f32>(), 1.0);
        assert!(0i8.is_zero());
        assert!(!1i8.is_zero());
        assert!(1usize.is_one());
    }

    #[cfg(feature = "complex")]
    #[test]
    fn complex_identities() {
        use num_complex::Complex;

        assert_eq!(zero::<Complex<f64>>(), Complex::new(0.0, 0.0));
        assert_eq!(one::<Complex<i32>>(), Complex::new(1, 0));
    }
}
