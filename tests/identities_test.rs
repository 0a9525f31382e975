//! Tests for zero()/one() and #[derive(Identities)]

mod common;

use common::Z7;
use poly_axioms::prelude::*;

// =============================================================================
// Built-in Identities
// =============================================================================

#[test]
fn test_numeric_zero_and_one() {
    assert_eq!(zero::<i8>(), 0);
    assert_eq!(one::<i128>(), 1);
    assert_eq!(zero::<u16>(), 0);
    assert_eq!(one::<usize>(), 1);
    assert_eq!(zero::<f32>(), 0.0);
    assert_eq!(one::<f64>(), 1.0);
}

#[cfg(feature = "complex")]
#[test]
fn test_complex_zero_and_one() {
    use num_complex::Complex;

    assert_eq!(zero::<Complex<f64>>(), Complex::new(0.0, 0.0));
    assert_eq!(one::<Complex<f64>>(), Complex::new(1.0, 0.0));
    assert_eq!(one::<Complex<i32>>(), Complex::new(1, 0));
}

#[test]
fn test_identity_laws() {
    for x in [-7i64, -1, 0, 1, 42, i64::MAX] {
        assert_eq!(zero::<i64>() + x, x);
        assert_eq!(x * one::<i64>(), x);
    }
    for x in [-2.5f64, 0.0, 1.0, 1e300] {
        assert_eq!(zero::<f64>() + x, x);
        assert_eq!(x * one::<f64>(), x);
    }
    for v in 0..7 {
        let x = Z7::new(v);
        assert_eq!(zero::<Z7>() + x, x);
        assert_eq!(x * one::<Z7>(), x);
    }
}

// =============================================================================
// Derive: field-wise
// =============================================================================

#[derive(Debug, PartialEq, Identities)]
struct Pair(i32, f64);

#[derive(Debug, PartialEq, Identities)]
struct Named {
    re: f32,
    im: f32,
}

#[derive(Debug, PartialEq, Identities)]
struct Wrapper<T> {
    inner: T,
}

#[test]
fn test_tuple_struct_fieldwise() {
    assert_eq!(Pair::zero(), Pair(0, 0.0));
    assert_eq!(Pair::one(), Pair(1, 1.0));
}

#[test]
fn test_named_struct_fieldwise() {
    assert_eq!(zero::<Named>(), Named { re: 0.0, im: 0.0 });
    assert_eq!(one::<Named>(), Named { re: 1.0, im: 1.0 });
}

#[test]
fn test_generic_struct_fieldwise() {
    assert_eq!(zero::<Wrapper<i64>>(), Wrapper { inner: 0 });
    assert_eq!(one::<Wrapper<Z7>>(), Wrapper { inner: Z7(1) });
    assert!(axiom_check!(Wrapper<u8>: has_zero & has_one));
    assert!(!axiom_check!(Wrapper<String>: has_zero));
}

// =============================================================================
// Derive: explicit expressions and additive-only
// =============================================================================

#[derive(Debug, PartialEq, Identities)]
#[identities(zero = Level::Ground, one = Level::Unit)]
enum Level {
    Ground,
    Unit,
}

#[derive(Debug, PartialEq, Identities)]
#[identities(one = Offset(1, 0))]
struct Offset(i32, i32);

#[derive(Debug, PartialEq, Identities)]
#[identities(additive_only)]
struct Displacement {
    dx: f64,
    dy: f64,
}

#[test]
fn test_enum_with_explicit_identities() {
    assert_eq!(Level::zero(), Level::Ground);
    assert_eq!(Level::one(), Level::Unit);
}

#[test]
fn test_mixed_explicit_and_fieldwise() {
    assert_eq!(Offset::zero(), Offset(0, 0));
    assert_eq!(Offset::one(), Offset(1, 0));
}

#[test]
fn test_additive_only_skips_one() {
    assert_eq!(zero::<Displacement>(), Displacement { dx: 0.0, dy: 0.0 });
    assert!(axiom_check!(Displacement: has_zero));
    assert!(!axiom_check!(Displacement: has_one));
}

#[test]
fn test_is_zero_and_is_one() {
    assert!(Z7(0).is_zero());
    assert!(!Z7(3).is_zero());
    assert!(Z7(1).is_one());
    assert!(Pair(0, 0.0).is_zero());
}
