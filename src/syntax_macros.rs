//! Declarative front-end macros.

// =============================================================================
// axiom_check! - boolean axiom query on a concrete type
// =============================================================================

/// Evaluates a conjunction of axiom predicates for a concrete type.
///
/// # Example
///
/// ```
/// use poly_axioms::axiom_check;
///
/// assert!(axiom_check!(i32: addable & multipliable & has_one));
/// assert!(!axiom_check!(u8: ring_like));
/// assert!(!axiom_check!(String: has_zero));
/// ```
///
/// Predicates: `addable`, `subtractable`, `multipliable`, `divisible`,
/// `negatable`, `has_zero`, `has_one`, `ring_like`, `field_like`.
#[macro_export]
macro_rules! axiom_check {
    ($ty:ty : $($pred:ident)&+) => {{
        #[allow(unused_imports)]
        use $crate::detect::autoref::*;
        $crate::paste::paste! {
            true $(&& $crate::detect::Detect::<$ty>::[<IS_ $pred:upper>])+
        }
    }};
}

// =============================================================================
// axiom_report! - full AxiomReport for a concrete type
// =============================================================================

/// Captures every primitive axiom of a concrete type as an
/// [`AxiomReport`](crate::AxiomReport).
///
/// ```
/// use poly_axioms::{axiom_report, Axiom};
///
/// let report = axiom_report!(u16);
/// assert!(!report.is_ring_like());
/// assert_eq!(report.missing_for_ring().collect::<Vec<_>>(), [Axiom::Negatable]);
/// ```
#[macro_export]
macro_rules! axiom_report {
    ($ty:ty) => {
        $crate::AxiomReport::new(
            ::core::any::type_name::<$ty>(),
            [
                $crate::axiom_check!($ty: addable),
                $crate::axiom_check!($ty: subtractable),
                $crate::axiom_check!($ty: multipliable),
                $crate::axiom_check!($ty: divisible),
                $crate::axiom_check!($ty: negatable),
                $crate::axiom_check!($ty: has_zero),
                $crate::axiom_check!($ty: has_one),
            ],
        )
    };
}

// =============================================================================
// poly! - non-empty polynomial literal
// =============================================================================

/// Builds a [`Polynomial`](crate::Polynomial) from coefficients in ascending
/// degree order. At least one coefficient is required by the grammar, so the
/// result is never empty and no error is possible.
///
/// ```
/// use poly_axioms::poly;
///
/// let p = poly![1, 0, 3]; // 3x^2 + 1
/// assert_eq!(p.degree(), 2);
/// ```
///
/// ```compile_fail
/// let p: poly_axioms::Polynomial<i32> = poly_axioms::poly![];
/// ```
///
/// The only vector constructor open to callers is the checked one:
///
/// ```compile_fail
/// let p = poly_axioms::Polynomial::<i32>::from_vec_unchecked(Vec::new());
/// ```
#[macro_export]
macro_rules! poly {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::Polynomial::__from_head($first, $crate::__private::vec![$($rest),*])
    };
}
