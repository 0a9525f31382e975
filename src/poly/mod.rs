//! # Layer 3: Dense Univariate Polynomials
//!
//! `Polynomial<C>` stores coefficients in ascending degree order
//! (index 0 is the constant term) and never holds an empty sequence.
//!
//! Coefficients are not canonicalized on construction or by arithmetic.
//! Call [`Polynomial::trim`] / [`Polynomial::trimmed`] when the canonical
//! form matters. Equality pads the shorter operand with zeros, so trimmed
//! and untrimmed forms of the same value compare equal.
//!
//! ```
//! use poly_axioms::{poly, Polynomial};
//!
//! let a = poly![1, 2];    // 2x + 1
//! let b = poly![3, 0, 1]; // x^2 + 3
//! assert_eq!(&a + &b, poly![4, 2, 1]);
//! assert_eq!(&a - &b, poly![-2, 2, -1]);
//! assert_eq!(&a * &b, poly![3, 6, 1, 2]);
//! ```
//!
//! The coefficient type must be ring-like:
//!
//! ```compile_fail
//! let p = poly_axioms::Polynomial::constant(7u32);
//! ```

mod arith;
mod display;
pub mod parallel;

use alloc::vec;
use alloc::vec::Vec;

use crate::axioms::{HasOne, HasZero, RingLike};
use crate::error::PolynomialError;

pub use parallel::ParallelConfig;

/// Requirements on a polynomial coefficient.
///
/// Ring-like plus cloning (operands are borrowed) and equality (trim and
/// comparison test against zero). Division is never used.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a polynomial coefficient",
    label = "`{Self}` is not a coefficient type",
    note = "coefficients must be ring-like (`+`, `-`, `*`, unary `-`, `HasZero`, `HasOne`), `Clone` and `PartialEq`"
)]
pub trait Coefficient: RingLike + Clone + PartialEq {}

impl<T: RingLike + Clone + PartialEq> Coefficient for T {}

/// A dense univariate polynomial over `C`.
#[derive(Clone, Debug)]
pub struct Polynomial<C: Coefficient> {
    /// Ascending degree order, never empty.
    coeffs: Vec<C>,
}

impl<C: Coefficient> Polynomial<C> {
    /// Creates a polynomial from coefficients in ascending degree order.
    ///
    /// The sequence is stored verbatim; trailing zeros are kept.
    ///
    /// # Errors
    ///
    /// [`PolynomialError::EmptyCoefficients`] if `coeffs` is empty.
    pub fn new(coeffs: Vec<C>) -> Result<Self, PolynomialError> {
        if coeffs.is_empty() {
            return Err(PolynomialError::EmptyCoefficients);
        }
        Ok(Self { coeffs })
    }

    /// Caller guarantees `coeffs` is non-empty.
    #[inline]
    pub(crate) fn from_vec_unchecked(coeffs: Vec<C>) -> Self {
        debug_assert!(!coeffs.is_empty());
        Self { coeffs }
    }

    /// `[first, rest...]`; non-empty by construction. Backs `poly!`.
    #[doc(hidden)]
    pub fn __from_head(first: C, rest: Vec<C>) -> Self {
        let mut coeffs = Vec::with_capacity(rest.len() + 1);
        coeffs.push(first);
        coeffs.extend(rest);
        Self { coeffs }
    }

    /// Degree-0 polynomial `c`.
    #[must_use]
    pub fn constant(c: C) -> Self {
        Self { coeffs: vec![c] }
    }

    /// The canonical zero polynomial `[0]`.
    #[must_use]
    pub fn zero() -> Self {
        Self::constant(C::zero())
    }

    /// The constant polynomial `[1]`.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(C::one())
    }

    /// Coefficients in ascending degree order, as stored.
    #[inline]
    pub fn coeffs(&self) -> &[C] {
        &self.coeffs
    }

    /// Consumes the polynomial, returning its coefficients.
    #[inline]
    pub fn into_coeffs(self) -> Vec<C> {
        self.coeffs
    }

    /// Number of stored coefficients (always at least 1).
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Index of the highest stored coefficient.
    ///
    /// Only meaningful as the mathematical degree on a canonical polynomial.
    #[inline]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Coefficient of `x^i`; zero past the stored length.
    pub fn coeff(&self, i: usize) -> C {
        self.coeffs.get(i).cloned().unwrap_or_else(C::zero)
    }

    /// Highest stored coefficient.
    #[inline]
    pub fn leading_coeff(&self) -> &C {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// True when every stored coefficient is zero.
    pub fn is_zero(&self) -> bool {
        let zero = C::zero();
        self.coeffs.iter().all(|c| *c == zero)
    }

    /// True when there is no trailing zero, or the polynomial is exactly `[0]`.
    pub fn is_canonical(&self) -> bool {
        self.coeffs.len() == 1 || *self.leading_coeff() != C::zero()
    }

    /// Removes trailing zero coefficients in place, keeping at least one.
    pub fn trim(&mut self) {
        let zero = C::zero();
        while self.coeffs.len() > 1 && self.coeffs.last() == Some(&zero) {
            self.coeffs.pop();
        }
    }

    /// Returns the canonical form, leaving `self` unchanged.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        let zero = C::zero();
        let keep = self
            .coeffs
            .iter()
            .rposition(|c| *c != zero)
            .map_or(1, |i| i + 1);
        Self {
            coeffs: self.coeffs[..keep].to_vec(),
        }
    }

    /// Evaluates at `x` by Horner's rule.
    pub fn eval(&self, x: &C) -> C {
        self.coeffs
            .iter()
            .rev()
            .fold(C::zero(), |acc, c| acc * x.clone() + c.clone())
    }
}

impl<C: Coefficient> Default for Polynomial<C> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<C: Coefficient> From<C> for Polynomial<C> {
    fn from(c: C) -> Self {
        Self::constant(c)
    }
}

impl<C: Coefficient> TryFrom<Vec<C>> for Polynomial<C> {
    type Error = PolynomialError;

    fn try_from(coeffs: Vec<C>) -> Result<Self, Self::Error> {
        Self::new(coeffs)
    }
}

impl<C: Coefficient> From<Polynomial<C>> for Vec<C> {
    fn from(p: Polynomial<C>) -> Self {
        p.coeffs
    }
}

impl<C: Coefficient> PartialEq for Polynomial<C> {
    /// Compares coefficient-wise after zero-padding the shorter side.
    fn eq(&self, other: &Self) -> bool {
        let (long, short) = if self.len() >= other.len() {
            (&self.coeffs, &other.coeffs)
        } else {
            (&other.coeffs, &self.coeffs)
        };
        if long[..short.len()] != short[..] {
            return false;
        }
        let zero = C::zero();
        long[short.len()..].iter().all(|c| *c == zero)
    }
}

impl<C: Coefficient + Eq> Eq for Polynomial<C> {}

// Registering the identities makes `Polynomial<C>` itself ring-like, so
// polynomials nest: `Polynomial<Polynomial<i64>>`.
impl<C: Coefficient> HasZero for Polynomial<C> {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl<C: Coefficient> HasOne for Polynomial<C> {
    fn one() -> Self {
        Self::one()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly;

    #[test]
    fn empty_sequence_is_rejected() {
        assert_eq!(Polynomial::<i32>::new(Vec::new()), Err(PolynomialError::EmptyCoefficients));
        assert!(Polynomial::<i32>::try_from(vec![]).is_err());
    }

    #[test]
    fn head_constructor_is_never_empty() {
        let single = Polynomial::__from_head(4, Vec::new());
        assert_eq!(single.coeffs(), &[4]);
        assert_eq!(single.degree(), 0);

        let many = Polynomial::__from_head(1, vec![2, 0]);
        assert_eq!(many.coeffs(), &[1, 2, 0]);
        assert_eq!(many.trimmed().coeffs(), &[1, 2]);
    }

    #[test]
    fn construction_keeps_trailing_zeros() {
        let p = Polynomial::new(vec![1, 0, 0]).unwrap();
        assert_eq!(p.coeffs(), &[1, 0, 0]);
        assert_eq!(p.len(), 3);
        assert!(!p.is_canonical());
    }

    #[test]
    fn default_is_canonical_zero() {
        let p = Polynomial::<i64>::default();
        assert_eq!(p.coeffs(), &[0]);
        assert!(p.is_zero());
        assert!(p.is_canonical());
    }

    #[test]
    fn trim_inner_zero_is_kept() {
        let mut p = poly![0, 0, 5, 0];
        p.trim();
        assert_eq!(p.coeffs(), &[0, 0, 5]);
    }

    #[test]
    fn trim_stops_at_one_coefficient() {
        let p = poly![0, 0, 0];
        assert_eq!(p.trimmed().coeffs(), &[0]);
        assert_eq!(p.coeffs(), &[0, 0, 0]);

        let mut single = poly![0];
        single.trim();
        assert_eq!(single.coeffs(), &[0]);
    }

    #[test]
    fn coeff_past_end_is_zero() {
        let p = poly![3, 4];
        assert_eq!(p.coeff(1), 4);
        assert_eq!(p.coeff(9), 0);
        assert_eq!(*p.leading_coeff(), 4);
        assert_eq!(p.degree(), 1);
    }

    #[test]
    fn eval_horner() {
        // x^2 + 3 at 2
        assert_eq!(poly![3, 0, 1].eval(&2), 7);
        assert_eq!(poly![5].eval(&100), 5);
    }

    #[test]
    fn polynomials_nest() {
        let inner = poly![1, 1];
        let outer = poly![inner.clone(), Polynomial::one()];
        let squared = &outer * &outer;
        assert_eq!(squared.coeff(0), &inner * &inner);
        assert_eq!(squared.coeff(1), &inner + &inner);
        assert_eq!(squared.coeff(2), Polynomial::one());
    }

    #[test]
    fn padded_equality() {
        assert_eq!(poly![1, 2], poly![1, 2, 0, 0]);
        assert_eq!(poly![1, 2, 0], poly![1, 2]);
        assert_ne!(poly![1, 2], poly![1, 2, 3]);
        assert_ne!(poly![1, 3], poly![1, 2]);
    }
}
