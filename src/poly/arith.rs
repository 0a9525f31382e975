//! Polynomial arithmetic.
//!
//! Every output coefficient is produced by an index kernel that reads only
//! its operands, never other outputs. The operators here run the kernels
//! sequentially; `parallel.rs` runs the same kernels under a
//! [`ParallelConfig`](super::ParallelConfig).
//!
//! None of the operations trim their result.

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::parallel::generate;
use super::{Coefficient, Polynomial};

// =============================================================================
// Index kernels
// =============================================================================

/// `coeffs[i]`, or `zero` past the end.
#[inline]
fn padded<C: Clone>(coeffs: &[C], zero: &C, i: usize) -> C {
    coeffs.get(i).unwrap_or(zero).clone()
}

/// `lhs[i] + rhs[i]` with zero padding.
#[inline]
pub(super) fn add_at<C: Coefficient>(lhs: &[C], rhs: &[C], zero: &C, i: usize) -> C {
    padded(lhs, zero, i) + padded(rhs, zero, i)
}

/// `lhs[i] - rhs[i]` with zero padding on whichever side is shorter.
#[inline]
pub(super) fn sub_at<C: Coefficient>(lhs: &[C], rhs: &[C], zero: &C, i: usize) -> C {
    padded(lhs, zero, i) - padded(rhs, zero, i)
}

/// `sum(lhs[i] * rhs[k - i])` over every valid `i`, starting from zero.
pub(super) fn mul_at<C: Coefficient>(lhs: &[C], rhs: &[C], k: usize) -> C {
    let lo = k.saturating_sub(rhs.len() - 1);
    let hi = k.min(lhs.len() - 1);
    (lo..=hi).fold(C::zero(), |acc, i| acc + lhs[i].clone() * rhs[k - i].clone())
}

#[inline]
pub(super) fn sum_len<C: Coefficient>(lhs: &Polynomial<C>, rhs: &Polynomial<C>) -> usize {
    lhs.len().max(rhs.len())
}

#[inline]
pub(super) fn product_len<C: Coefficient>(lhs: &Polynomial<C>, rhs: &Polynomial<C>) -> usize {
    lhs.len() + rhs.len() - 1
}

fn add_poly<C: Coefficient>(lhs: &Polynomial<C>, rhs: &Polynomial<C>) -> Polynomial<C> {
    let zero = C::zero();
    let coeffs = generate(sum_len(lhs, rhs), |i| add_at(&lhs.coeffs, &rhs.coeffs, &zero, i));
    Polynomial::from_vec_unchecked(coeffs)
}

fn sub_poly<C: Coefficient>(lhs: &Polynomial<C>, rhs: &Polynomial<C>) -> Polynomial<C> {
    let zero = C::zero();
    let coeffs = generate(sum_len(lhs, rhs), |i| sub_at(&lhs.coeffs, &rhs.coeffs, &zero, i));
    Polynomial::from_vec_unchecked(coeffs)
}

fn mul_poly<C: Coefficient>(lhs: &Polynomial<C>, rhs: &Polynomial<C>) -> Polynomial<C> {
    let coeffs = generate(product_len(lhs, rhs), |k| mul_at(&lhs.coeffs, &rhs.coeffs, k));
    Polynomial::from_vec_unchecked(coeffs)
}

// =============================================================================
// Unary
// =============================================================================

impl<C: Coefficient> Polynomial<C> {
    /// Unary plus.
    ///
    /// Rust has no unary `+` operator, so each coefficient maps to itself.
    /// Length is unchanged.
    #[must_use]
    pub fn pos(&self) -> Self {
        Self::from_vec_unchecked(generate(self.len(), |i| self.coeffs[i].clone()))
    }
}

impl<C: Coefficient> Neg for Polynomial<C> {
    type Output = Polynomial<C>;

    fn neg(self) -> Polynomial<C> {
        Polynomial::from_vec_unchecked(self.coeffs.into_iter().map(Neg::neg).collect())
    }
}

impl<C: Coefficient> Neg for &Polynomial<C> {
    type Output = Polynomial<C>;

    fn neg(self) -> Polynomial<C> {
        Polynomial::from_vec_unchecked(generate(self.len(), |i| -self.coeffs[i].clone()))
    }
}

// =============================================================================
// Binary (all owned/borrowed combinations)
// =============================================================================

macro_rules! impl_binop {
    ($($Trait:ident :: $method:ident => $kernel:ident),* $(,)?) => {
        $(
            impl<C: Coefficient> $Trait<&Polynomial<C>> for &Polynomial<C> {
                type Output = Polynomial<C>;
                #[inline]
                fn $method(self, rhs: &Polynomial<C>) -> Polynomial<C> { $kernel(self, rhs) }
            }

            impl<C: Coefficient> $Trait<Polynomial<C>> for Polynomial<C> {
                type Output = Polynomial<C>;
                #[inline]
                fn $method(self, rhs: Polynomial<C>) -> Polynomial<C> { $kernel(&self, &rhs) }
            }

            impl<C: Coefficient> $Trait<&Polynomial<C>> for Polynomial<C> {
                type Output = Polynomial<C>;
                #[inline]
                fn $method(self, rhs: &Polynomial<C>) -> Polynomial<C> { $kernel(&self, rhs) }
            }

            impl<C: Coefficient> $Trait<Polynomial<C>> for &Polynomial<C> {
                type Output = Polynomial<C>;
                #[inline]
                fn $method(self, rhs: Polynomial<C>) -> Polynomial<C> { $kernel(self, &rhs) }
            }

            ::paste::paste! {
                impl<C: Coefficient> [<$Trait Assign>]<&Polynomial<C>> for Polynomial<C> {
                    #[inline]
                    fn [<$method _assign>](&mut self, rhs: &Polynomial<C>) { *self = $kernel(self, rhs); }
                }

                impl<C: Coefficient> [<$Trait Assign>]<Polynomial<C>> for Polynomial<C> {
                    #[inline]
                    fn [<$method _assign>](&mut self, rhs: Polynomial<C>) { *self = $kernel(self, &rhs); }
                }
            }
        )*
    };
}

impl_binop! {
    Add::add => add_poly,
    Sub::sub => sub_poly,
    Mul::mul => mul_poly,
}

#[cfg(test)]
mod tests {
    use crate::poly;

    #[test]
    fn add_pads_shorter_operand() {
        let a = poly![1, 2];
        let b = poly![3, 0, 1];
        assert_eq!((&a + &b).coeffs(), &[4, 2, 1]);
        assert_eq!((&b + &a).coeffs(), &[4, 2, 1]);
    }

    #[test]
    fn sub_preserves_operand_order() {
        let a = poly![1, 2];
        let b = poly![3, 0, 1];
        assert_eq!((&a - &b).coeffs(), &[-2, 2, -1]);
        assert_eq!((&b - &a).coeffs(), &[2, -2, 1]);
    }

    #[test]
    fn mul_is_convolution() {
        let a = poly![1, 2];
        let b = poly![3, 0, 1];
        let product = &a * &b;
        assert_eq!(product.coeffs(), &[3, 6, 1, 2]);
        assert_eq!(product.len(), a.len() + b.len() - 1);
    }

    #[test]
    fn results_are_not_trimmed() {
        let a = poly![1, 2, 3];
        let b = poly![0, 0, 3];
        assert_eq!((&a - &b).coeffs(), &[1, 2, 0]);
    }

    #[test]
    fn negation_keeps_length() {
        let p = poly![1, -2, 3, 0];
        assert_eq!((-&p).coeffs(), &[-1, 2, -3, 0]);
        assert_eq!((-p.clone()).coeffs(), &[-1, 2, -3, 0]);
        assert_eq!(p.pos().coeffs(), p.coeffs());
    }

    #[test]
    fn assign_operators() {
        let mut p = poly![1, 1];
        p += poly![0, 0, 1];
        assert_eq!(p.coeffs(), &[1, 1, 1]);
        p -= &poly![1];
        assert_eq!(p.coeffs(), &[0, 1, 1]);
        p *= poly![2];
        assert_eq!(p.coeffs(), &[0, 2, 2]);
    }
}
