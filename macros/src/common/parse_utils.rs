//! Attribute parsing
//!
//! Accepted forms, freely combined and repeated across attributes:
//!
//! ```text
//! #[identities(zero = <expr>)]
//! #[identities(one = <expr>)]
//! #[identities(additive_only)]
//! ```

use syn::{Attribute, Expr};

/// Parsed `#[identities(...)]` options.
#[derive(Default)]
pub struct IdentityAttrs {
    pub zero: Option<Expr>,
    pub one: Option<Expr>,
    pub additive_only: bool,
}

impl IdentityAttrs {
    /// Collect every `#[identities(...)]` attribute on the item.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = IdentityAttrs::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("identities")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("zero") {
                    set_once(&mut out.zero, meta.value()?.parse()?, &meta.path, "zero")
                } else if meta.path.is_ident("one") {
                    set_once(&mut out.one, meta.value()?.parse()?, &meta.path, "one")
                } else if meta.path.is_ident("additive_only") {
                    out.additive_only = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `zero = ...`, `one = ...` or `additive_only`"))
                }
            })?;
        }

        if out.additive_only {
            if let Some(one) = &out.one {
                return Err(syn::Error::new_spanned(
                    one,
                    "`one = ...` conflicts with `additive_only`",
                ));
            }
        }
        Ok(out)
    }
}

fn set_once(slot: &mut Option<Expr>, value: Expr, path: &syn::Path, key: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new_spanned(path, format!("duplicate `{key}` identity")));
    }
    *slot = Some(value);
    Ok(())
}
