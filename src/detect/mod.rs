//! # Layer 2: Axiom Detection
//!
//! Turns the trait-level axioms into plain `bool`s for concrete types.
//!
//! ```
//! use poly_axioms::axiom_check;
//!
//! assert!(axiom_check!(i64: ring_like));
//! assert!(axiom_check!(f32: field_like));
//! assert!(!axiom_check!(u32: negatable));
//! assert!(!axiom_check!(String: addable & has_zero));
//! ```
//!
//! ## Supported predicates
//!
//! addable, subtractable, multipliable, divisible, negatable,
//! has_zero, has_one, ring_like, field_like

pub mod autoref;
pub mod report;

pub use autoref::Detect;
pub use report::{Axiom, AxiomReport};
