//! Axiom reports.
//!
//! An [`AxiomReport`] is the satisfied-axiom bitmask of one concrete type,
//! captured by `axiom_report!`. It answers "which capability is missing"
//! at runtime, e.g. for test output or error messages in client code.

use core::fmt;

/// One primitive axiom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axiom {
    Addable,
    Subtractable,
    Multipliable,
    Divisible,
    Negatable,
    HasZero,
    HasOne,
}

impl Axiom {
    /// Every axiom, in bit order.
    pub const ALL: [Axiom; 7] = [
        Axiom::Addable,
        Axiom::Subtractable,
        Axiom::Multipliable,
        Axiom::Divisible,
        Axiom::Negatable,
        Axiom::HasZero,
        Axiom::HasOne,
    ];

    /// Axioms making up `RingLike`.
    pub const RING: [Axiom; 6] = [
        Axiom::Addable,
        Axiom::Subtractable,
        Axiom::Multipliable,
        Axiom::Negatable,
        Axiom::HasZero,
        Axiom::HasOne,
    ];

    /// Axioms making up `FieldLike`.
    pub const FIELD: [Axiom; 7] = Self::ALL;

    /// Predicate name as accepted by `axiom_check!`.
    pub const fn name(self) -> &'static str {
        match self {
            Axiom::Addable => "addable",
            Axiom::Subtractable => "subtractable",
            Axiom::Multipliable => "multipliable",
            Axiom::Divisible => "divisible",
            Axiom::Negatable => "negatable",
            Axiom::HasZero => "has_zero",
            Axiom::HasOne => "has_one",
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Axiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Satisfied axioms of a single type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AxiomReport {
    type_name: &'static str,
    mask: u8,
}

impl AxiomReport {
    /// Builds a report from one flag per axiom, in [`Axiom::ALL`] order.
    pub const fn new(type_name: &'static str, flags: [bool; 7]) -> Self {
        let mut mask = 0u8;
        let mut i = 0;
        while i < flags.len() {
            if flags[i] {
                mask |= Axiom::ALL[i].bit();
            }
            i += 1;
        }
        Self { type_name, mask }
    }

    /// Name of the reported type.
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Raw bitmask, bit `n` set when `Axiom::ALL[n]` holds.
    pub const fn mask(&self) -> u8 {
        self.mask
    }

    /// Whether `axiom` holds.
    pub const fn has(&self, axiom: Axiom) -> bool {
        self.mask & axiom.bit() != 0
    }

    pub const fn is_ring_like(&self) -> bool {
        self.has_all(&Axiom::RING)
    }

    pub const fn is_field_like(&self) -> bool {
        self.has_all(&Axiom::FIELD)
    }

    const fn has_all(&self, axioms: &[Axiom]) -> bool {
        let mut i = 0;
        while i < axioms.len() {
            if !self.has(axioms[i]) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Axioms that hold.
    pub fn satisfied(&self) -> impl Iterator<Item = Axiom> + '_ {
        Axiom::ALL.into_iter().filter(|a| self.has(*a))
    }

    /// Axioms preventing the type from being ring-like.
    pub fn missing_for_ring(&self) -> impl Iterator<Item = Axiom> + '_ {
        Axiom::RING.into_iter().filter(|a| !self.has(*a))
    }

    /// Axioms preventing the type from being field-like.
    pub fn missing_for_field(&self) -> impl Iterator<Item = Axiom> + '_ {
        Axiom::FIELD.into_iter().filter(|a| !self.has(*a))
    }
}

impl fmt::Display for AxiomReport {
    /// `i32: field-like` or `u32: missing negatable`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.type_name)?;
        if self.is_field_like() {
            return f.write_str("field-like");
        }
        if self.is_ring_like() {
            return f.write_str("ring-like, missing divisible");
        }
        f.write_str("missing")?;
        for (i, axiom) in self.missing_for_ring().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{axiom}")?;
        }
        Ok(())
    }
}
