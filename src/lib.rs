#![cfg_attr(not(any(feature = "std", test)), no_std)]

// Feature flags handled:
// - std: default, enables std error plumbing
// - parallel: default, rayon fan-out for element-wise operations
// - complex: default, identity elements for num_complex::Complex<T>

//! # poly-axioms
//!
//! Compile-time algebraic capabilities and dense polynomials over any
//! coefficient type that has them.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 1: Axioms                                                  |
//! |  - Addable, Subtractable, Multipliable, Divisible, Negatable      |
//! |  - HasZero / HasOne registry, zero() / one()                      |
//! |  - RingLike, FieldLike                                            |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Detection                                               |
//! |  - axiom_check! (bool per predicate), AxiomReport bitmask         |
//! +-------------------------------------------------------------------+
//!
//! +-------------------------------------------------------------------+
//! |  Layer 3: Polynomial<C: Coefficient>                              |
//! |  - construction, trim, padded equality, + - * and unary ops       |
//! |  - ParallelConfig for threshold-selected rayon fan-out            |
//! +-------------------------------------------------------------------+
//! ```
//!
//! Layer 3 depends only on Layer 1: the coefficient bound is a trait
//! bound, so an unsuitable coefficient type is a compile error naming the
//! missing capability.
//!
//! ## Quick Start
//!
//! ```
//! use poly_axioms::prelude::*;
//!
//! let a = poly![1, 2];    // 2x + 1
//! let b = poly![3, 0, 1]; // x^2 + 3
//! assert_eq!(a.clone() * b.clone(), poly![3, 6, 1, 2]);
//! assert_eq!((&a - &b).to_string(), "-1x^2 + 2x - 2");
//!
//! assert!(axiom_check!(f64: field_like));
//! assert_eq!(zero::<i32>(), 0);
//! ```
//!
//! ## Registering a coefficient type
//!
//! ```
//! use core::ops::{Add, Mul, Neg, Sub};
//! use poly_axioms::prelude::*;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Identities)]
//! #[identities(zero = Z5(0), one = Z5(1))]
//! struct Z5(u8);
//!
//! impl Add for Z5 { type Output = Self; fn add(self, o: Self) -> Self { Z5((self.0 + o.0) % 5) } }
//! impl Sub for Z5 { type Output = Self; fn sub(self, o: Self) -> Self { Z5((self.0 + 5 - o.0) % 5) } }
//! impl Mul for Z5 { type Output = Self; fn mul(self, o: Self) -> Self { Z5((self.0 * o.0) % 5) } }
//! impl Neg for Z5 { type Output = Self; fn neg(self) -> Self { Z5((5 - self.0) % 5) } }
//!
//! let p = poly![Z5(4), Z5(1)];
//! assert_eq!(&p * &p, poly![Z5(1), Z5(3), Z5(1)]);
//! ```

// Allow `::poly_axioms` paths emitted by the derive to work inside the crate itself
extern crate self as poly_axioms;

extern crate alloc;

// Re-export paste for axiom_check!
pub use paste;

pub mod error;

// =============================================================================
// Layer 1: Axioms
// =============================================================================
pub mod axioms;

// =============================================================================
// Layer 2: Detection
// =============================================================================
pub mod detect;

// =============================================================================
// Layer 3: Polynomials
// =============================================================================
pub mod poly;

// Syntax macros (axiom_check!, axiom_report!, poly!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use axioms::{
    one, zero, Addable, Arithmetic, Divisible, FieldLike, HasOne, HasZero, Multipliable,
    Negatable, RingLike, Subtractable,
};
pub use detect::{Axiom, AxiomReport};
pub use error::PolynomialError;
pub use poly::{Coefficient, ParallelConfig, Polynomial};

// Re-export proc-macros
pub use macros::Identities;

#[doc(hidden)]
pub mod __private {
    pub use alloc::vec;
}

/// Common items for working with polynomials and axioms.
pub mod prelude {
    pub use crate::axioms::{
        // Capabilities
        Addable, Divisible, Multipliable, Negatable, Subtractable,
        // Identities
        one, zero, HasOne, HasZero,
        // Classifications
        FieldLike, RingLike,
    };
    pub use crate::poly::{Coefficient, ParallelConfig, Polynomial};
    pub use crate::{axiom_check, axiom_report, poly, Identities};
}
