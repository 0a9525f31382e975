//! Threshold-selected parallel execution of element-wise operations.
//!
//! Each output coefficient of `map`, `neg`, `pos`, `add`, `sub` and `mul`
//! depends only on the operands, so the output vector can be generated
//! index by index on a rayon pool. Below the threshold (or without the
//! `parallel` feature) the same kernels run sequentially. Results are
//! identical either way.

use alloc::vec::Vec;

use super::arith::{add_at, mul_at, product_len, sub_at, sum_len};
use super::{Coefficient, Polynomial};

/// Configuration for parallel element-wise operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Minimum number of output coefficients to enable parallelism.
    pub parallel_threshold: usize,
}

impl ParallelConfig {
    pub const DEFAULT_THRESHOLD: usize = 4096;

    /// Parallelize results of at least `parallel_threshold` coefficients.
    pub const fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    /// Never parallelize.
    pub const fn sequential() -> Self {
        Self::new(usize::MAX)
    }

    /// Whether a result of `len` coefficients is generated in parallel.
    pub const fn should_parallelize(&self, len: usize) -> bool {
        cfg!(feature = "parallel") && len >= self.parallel_threshold
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

/// Builds `[f(0), f(1), ..., f(len - 1)]` sequentially.
#[inline]
pub(super) fn generate<C, F>(len: usize, f: F) -> Vec<C>
where
    F: FnMut(usize) -> C,
{
    (0..len).map(f).collect()
}

/// Builds `[f(0), ..., f(len - 1)]`, in parallel when `config` allows it.
pub(super) fn generate_with<C, F>(config: &ParallelConfig, len: usize, f: F) -> Vec<C>
where
    C: Send,
    F: Fn(usize) -> C + Sync + Send,
{
    #[cfg(feature = "parallel")]
    if config.should_parallelize(len) {
        use rayon::prelude::*;
        return (0..len).into_par_iter().map(f).collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = config;

    generate(len, f)
}

impl<C: Coefficient + Send + Sync> Polynomial<C> {
    /// Applies `f` to every coefficient. Length is unchanged.
    pub fn map_with<F>(&self, config: &ParallelConfig, f: F) -> Self
    where
        F: Fn(&C) -> C + Sync + Send,
    {
        let coeffs = &self.coeffs;
        Self::from_vec_unchecked(generate_with(config, coeffs.len(), |i| f(&coeffs[i])))
    }

    /// [`Polynomial::pos`] under `config`.
    #[must_use]
    pub fn pos_with(&self, config: &ParallelConfig) -> Self {
        self.map_with(config, C::clone)
    }

    /// Negation under `config`.
    #[must_use]
    pub fn neg_with(&self, config: &ParallelConfig) -> Self {
        self.map_with(config, |c| -c.clone())
    }

    /// `self + rhs` under `config`.
    #[must_use]
    pub fn add_with(&self, rhs: &Self, config: &ParallelConfig) -> Self {
        let zero = C::zero();
        let (lhs, rhs_coeffs) = (&self.coeffs, &rhs.coeffs);
        Self::from_vec_unchecked(generate_with(config, sum_len(self, rhs), |i| {
            add_at(lhs, rhs_coeffs, &zero, i)
        }))
    }

    /// `self - rhs` under `config`.
    #[must_use]
    pub fn sub_with(&self, rhs: &Self, config: &ParallelConfig) -> Self {
        let zero = C::zero();
        let (lhs, rhs_coeffs) = (&self.coeffs, &rhs.coeffs);
        Self::from_vec_unchecked(generate_with(config, sum_len(self, rhs), |i| {
            sub_at(lhs, rhs_coeffs, &zero, i)
        }))
    }

    /// `self * rhs` under `config`.
    #[must_use]
    pub fn mul_with(&self, rhs: &Self, config: &ParallelConfig) -> Self {
        let (lhs, rhs_coeffs) = (&self.coeffs, &rhs.coeffs);
        Self::from_vec_unchecked(generate_with(config, product_len(self, rhs), |k| {
            mul_at(lhs, rhs_coeffs, k)
        }))
    }
}
