//! Procedural macros for the poly-axioms identity registry
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Identities)]` | struct/enum | Register `HasZero` / `HasOne` |
//!
//! ## Example
//!
//! ```ignore
//! // Field-wise: zero = Pair(zero(), zero()), one = Pair(one(), one())
//! #[derive(Identities)]
//! struct Pair(i32, f64);
//!
//! // Explicit expressions
//! #[derive(Identities)]
//! #[identities(zero = Mod7(0), one = Mod7(1))]
//! struct Mod7(u8);
//!
//! // Additive group only: no HasOne impl
//! #[derive(Identities)]
//! #[identities(additive_only)]
//! struct Displacement { dx: f64, dy: f64 }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

// =============================================================================
// Module Declarations (common / user)
// =============================================================================

mod common;
mod user;

/// Register a type's additive and multiplicative identities.
///
/// Generates `impl ::poly_axioms::HasZero` and `impl ::poly_axioms::HasOne`.
///
/// # Attributes
///
/// - `#[identities(zero = EXPR)]`: additive identity expression
/// - `#[identities(one = EXPR)]`: multiplicative identity expression
/// - `#[identities(additive_only)]`: skip the `HasOne` impl
///
/// Without an expression, structs build the identity field by field.
/// Unit structs and enums need explicit expressions.
#[proc_macro_derive(Identities, attributes(identities))]
pub fn derive_identities(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::identities::expand_derive_identities(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
