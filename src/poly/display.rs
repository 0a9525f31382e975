//! Text rendering.
//!
//! `{}` writes every stored term from the highest degree down:
//! `[1, 0, 3]` renders as `3x^2 + 0x + 1`. Trailing zeros are printed, so an
//! untrimmed polynomial looks untrimmed. A negative non-leading coefficient
//! joins with ` - `: `[-2, 2, -1]` renders as `-1x^2 + 2x - 2`.
//!
//! `{:#}` writes the stored coefficient list in ascending order:
//! `[1, 0, 3]`.
//!
//! A precision (`{:.2}`, `{:#.2}`) is forwarded to every coefficient.
//! Width and fill are not applied per term.

use alloc::string::String;
use core::fmt;

use super::{Coefficient, Polynomial};

fn render(c: &impl fmt::Display, precision: Option<usize>) -> String {
    match precision {
        Some(p) => alloc::format!("{c:.p$}"),
        None => alloc::format!("{c}"),
    }
}

/// Wraps renderings with an inner sign, e.g. complex `1+2i` -> `(1+2i)`.
fn term(c: &impl fmt::Display, precision: Option<usize>) -> String {
    let s = render(c, precision);
    if s.char_indices().skip(1).any(|(_, ch)| ch == '+' || ch == '-') {
        alloc::format!("({s})")
    } else {
        s
    }
}

impl<C: Coefficient + fmt::Display> fmt::Display for Polynomial<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        if f.alternate() {
            f.write_str("[")?;
            for (i, c) in self.coeffs.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                f.write_str(&render(c, precision))?;
            }
            return f.write_str("]");
        }

        for (i, c) in self.coeffs.iter().enumerate().rev() {
            let c = term(c, precision);
            let c = if i + 1 < self.coeffs.len() {
                match c.strip_prefix('-') {
                    Some(magnitude) => {
                        f.write_str(" - ")?;
                        magnitude
                    }
                    None => {
                        f.write_str(" + ")?;
                        c.as_str()
                    }
                }
            } else {
                c.as_str()
            };
            match i {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c}x")?,
                _ => write!(f, "{c}x^{i}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use crate::poly;

    #[test]
    fn descending_terms() {
        assert_eq!(format!("{}", poly![1, 2]), "2x + 1");
        assert_eq!(format!("{}", poly![3, 0, 1]), "1x^2 + 0x + 3");
        assert_eq!(format!("{}", poly![7]), "7");
    }

    #[test]
    fn untrimmed_terms_are_shown() {
        let p = poly![0, 0, 5, 0];
        assert_eq!(format!("{p}"), "0x^3 + 5x^2 + 0x + 0");
        assert_eq!(format!("{}", p.trimmed()), "5x^2 + 0x + 0");
    }

    #[test]
    fn alternate_is_coefficient_list() {
        assert_eq!(format!("{:#}", poly![0, 0, 5, 0]), "[0, 0, 5, 0]");
        assert_eq!(format!("{:#}", poly![-1.5]), "[-1.5]");
    }

    #[test]
    fn negative_leading_sign_is_not_wrapped() {
        assert_eq!(format!("{}", poly![-2, 2, -1]), "-1x^2 + 2x - 2");
    }

    #[test]
    fn negative_inner_terms_use_minus() {
        assert_eq!(format!("{}", poly![3, -1, 0, 2]), "2x^3 + 0x^2 - 1x + 3");
        assert_eq!(format!("{}", poly![-1.5, -0.5]), "-0.5x - 1.5");
        assert_eq!(format!("{:#}", poly![-2, 2, -1]), "[-2, 2, -1]");
    }

    #[test]
    fn precision_reaches_every_coefficient() {
        let p = poly![1.23456, 2.0];
        assert_eq!(format!("{p:.2}"), "2.00x + 1.23");
        assert_eq!(format!("{p:#.1}"), "[1.2, 2.0]");
        assert_eq!(format!("{:.3}", poly![-0.5, 1.0]), "1.000x - 0.500");
        assert_eq!(format!("{:.2}", poly![3, 4]), "4x + 3");
    }

    #[cfg(feature = "complex")]
    #[test]
    fn complex_terms_are_parenthesised() {
        use num_complex::Complex;
        let p = poly![Complex::new(1, 2), Complex::new(0, -1)];
        assert_eq!(format!("{p}"), "(0-1i)x + (1+2i)");
    }
}
