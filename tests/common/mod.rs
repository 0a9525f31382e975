//! Shared coefficient types for integration tests.

#![allow(dead_code)]

use core::ops::{Add, Div, Mul, Neg, Sub};
use poly_axioms::Identities;

/// Integers modulo 7.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Identities)]
#[identities(zero = Z7(0), one = Z7(1))]
pub struct Z7(pub u8);

impl Z7 {
    pub fn new(v: i64) -> Self {
        Z7(v.rem_euclid(7) as u8)
    }

    fn inv(self) -> Self {
        // Fermat: a^5 = a^-1 mod 7
        let mut acc = Z7(1);
        for _ in 0..5 {
            acc = acc * self;
        }
        acc
    }
}

impl Add for Z7 {
    type Output = Z7;
    fn add(self, rhs: Z7) -> Z7 {
        Z7((self.0 + rhs.0) % 7)
    }
}

impl Sub for Z7 {
    type Output = Z7;
    fn sub(self, rhs: Z7) -> Z7 {
        Z7((self.0 + 7 - rhs.0) % 7)
    }
}

impl Mul for Z7 {
    type Output = Z7;
    fn mul(self, rhs: Z7) -> Z7 {
        Z7((self.0 * rhs.0) % 7)
    }
}

impl Div for Z7 {
    type Output = Z7;
    fn div(self, rhs: Z7) -> Z7 {
        self * rhs.inv()
    }
}

impl Neg for Z7 {
    type Output = Z7;
    fn neg(self) -> Z7 {
        Z7((7 - self.0) % 7)
    }
}

/// Has every operator but registers no identity elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Unregistered(pub i32);

impl Add for Unregistered {
    type Output = Unregistered;
    fn add(self, rhs: Self) -> Self {
        Unregistered(self.0 + rhs.0)
    }
}

impl Sub for Unregistered {
    type Output = Unregistered;
    fn sub(self, rhs: Self) -> Self {
        Unregistered(self.0 - rhs.0)
    }
}

impl Mul for Unregistered {
    type Output = Unregistered;
    fn mul(self, rhs: Self) -> Self {
        Unregistered(self.0 * rhs.0)
    }
}

impl Neg for Unregistered {
    type Output = Unregistered;
    fn neg(self) -> Self {
        Unregistered(-self.0)
    }
}

/// Addition that widens: `Narrow + Narrow -> i64`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Narrow(pub i32);

impl Add for Narrow {
    type Output = i64;
    fn add(self, rhs: Self) -> i64 {
        i64::from(self.0) + i64::from(rhs.0)
    }
}
