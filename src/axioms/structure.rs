//! Composite algebraic classifications.
//!
//! ```text
//! RingLike  = Addable + Subtractable + Multipliable + Negatable + HasZero + HasOne
//! FieldLike = RingLike + Divisible
//! ```
//!
//! Both are blanket-implemented; nothing opts in explicitly. Unsigned
//! integers fail `RingLike` because they are not `Negatable`:
//!
//! ```compile_fail
//! fn ring<T: poly_axioms::RingLike>() {}
//! ring::<u32>();
//! ```

use super::identity::{HasOne, HasZero};
use super::ops::{Addable, Divisible, Multipliable, Negatable, Subtractable};

/// Addition, subtraction, multiplication, negation and both identities.
///
/// No division is required.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not ring-like",
    label = "`{Self}` is missing a ring capability",
    note = "ring-like requires `+`, `-`, `*`, unary `-` (all returning `{Self}`) plus registered `HasZero` and `HasOne`"
)]
pub trait RingLike: Addable + Subtractable + Multipliable + Negatable + HasZero + HasOne {}

impl<T> RingLike for T where T: Addable + Subtractable + Multipliable + Negatable + HasZero + HasOne {}

/// A ring-like type that also divides.
///
/// Integer types qualify structurally: `i32 / i32 -> i32` exists even though
/// it truncates.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not field-like",
    label = "`{Self}` is missing a field capability",
    note = "field-like requires everything ring-like requires plus `/` returning `{Self}`"
)]
pub trait FieldLike: RingLike + Divisible {}

impl<T> FieldLike for T where T: RingLike + Divisible {}
