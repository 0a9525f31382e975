//! # Layer 1: Axioms
//!
//! Compile-time algebraic capabilities of a coefficient type:
//! - `ops.rs`: operator capabilities (`Addable`, `Subtractable`, ...).
//! - `identity.rs`: identity-element registry (`HasZero`, `HasOne`).
//! - `structure.rs`: composite classifications (`RingLike`, `FieldLike`).

pub mod identity;
pub mod ops;
pub mod structure;

pub use identity::{one, zero, Arithmetic, HasOne, HasZero};
pub use ops::{Addable, Divisible, Multipliable, Negatable, Subtractable};
pub use structure::{FieldLike, RingLike};
