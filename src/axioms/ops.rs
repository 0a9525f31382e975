//! Operator capabilities.
//!
//! Each trait asserts exactly one operator whose result type is `Self`.
//! A type with `Add<Output = Wider>` is *not* `Addable`: no implicit
//! widening or narrowing is accepted.
//!
//! All five traits are blanket-implemented, so a type acquires them by
//! implementing the matching `core::ops` trait.

use core::ops::{Add, Div, Mul, Neg, Sub};

/// `T + T -> T`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not addable",
    label = "`{Self} + {Self}` must be defined and produce `{Self}`",
    note = "implement `core::ops::Add<Output = {Self}>` for `{Self}`"
)]
pub trait Addable: Add<Output = Self> + Sized {}

impl<T: Add<Output = T>> Addable for T {}

/// `T - T -> T`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not subtractable",
    label = "`{Self} - {Self}` must be defined and produce `{Self}`",
    note = "implement `core::ops::Sub<Output = {Self}>` for `{Self}`"
)]
pub trait Subtractable: Sub<Output = Self> + Sized {}

impl<T: Sub<Output = T>> Subtractable for T {}

/// `T * T -> T`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not multipliable",
    label = "`{Self} * {Self}` must be defined and produce `{Self}`",
    note = "implement `core::ops::Mul<Output = {Self}>` for `{Self}`"
)]
pub trait Multipliable: Mul<Output = Self> + Sized {}

impl<T: Mul<Output = T>> Multipliable for T {}

/// `T / T -> T`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not divisible",
    label = "`{Self} / {Self}` must be defined and produce `{Self}`",
    note = "implement `core::ops::Div<Output = {Self}>` for `{Self}`"
)]
pub trait Divisible: Div<Output = Self> + Sized {}

impl<T: Div<Output = T>> Divisible for T {}

/// `-T -> T`.
///
/// Unsigned integers are not negatable: Rust defines no `Neg` for them.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not negatable",
    label = "`-{Self}` must be defined and produce `{Self}`",
    note = "implement `core::ops::Neg<Output = {Self}>` for `{Self}`"
)]
pub trait Negatable: Neg<Output = Self> + Sized {}

impl<T: Neg<Output = T>> Negatable for T {}
