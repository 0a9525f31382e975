//! Construction errors.

use thiserror::Error;

/// Errors raised while building a [`Polynomial`](crate::Polynomial).
///
/// Arithmetic, trimming, comparison and formatting never fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PolynomialError {
    /// The coefficient sequence was empty; a polynomial holds at least one.
    #[error("a polynomial needs at least one coefficient")]
    EmptyCoefficients,
}
