//! Autoref-based axiom detection.
//!
//! For each predicate `p` bound to trait `P`:
//! 1. A fallback trait declares `const IS_P: bool = false`, implemented for
//!    every `Detect<X>`.
//! 2. An inherent impl on `Detect<X>` where `X: P` declares `IS_P = true`.
//!
//! Path resolution of `Detect::<Concrete>::IS_P` prefers the inherent const
//! when its bound holds and otherwise falls back to the trait const. The
//! fallback trait must be in scope at the use site; `axiom_check!` imports
//! all of them.
//!
//! ## Limitation
//!
//! Only **concrete types** resolve correctly. Inside `fn f<T>()` the
//! inherent impl is never selected and every predicate reads `false`.

use core::marker::PhantomData;

use crate::axioms::{
    Addable, Divisible, FieldLike, HasOne, HasZero, Multipliable, Negatable, RingLike, Subtractable,
};

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T>(PhantomData<T>);

/// Generate fallback trait + inherent const for one predicate.
macro_rules! impl_detect {
    ($($pred:ident => $Trait:path),* $(,)?) => {
        $(
            ::paste::paste! {
                #[doc(hidden)]
                pub trait [<$pred:camel Fallback>] { const [<IS_ $pred:upper>]: bool = false; }
                impl<T> [<$pred:camel Fallback>] for Detect<T> {}
                impl<T: $Trait> Detect<T> { pub const [<IS_ $pred:upper>]: bool = true; }
            }
        )*
    };
}

impl_detect! {
    addable => Addable,
    subtractable => Subtractable,
    multipliable => Multipliable,
    divisible => Divisible,
    negatable => Negatable,
    has_zero => HasZero,
    has_one => HasOne,
    ring_like => RingLike,
    field_like => FieldLike,
}
