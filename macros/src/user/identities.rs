use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, WherePredicate};

use crate::common::IdentityAttrs;

/// Which identity is being generated.
#[derive(Clone, Copy)]
enum Identity {
    Zero,
    One,
}

impl Identity {
    fn trait_path(self) -> TokenStream2 {
        match self {
            Identity::Zero => quote! { ::poly_axioms::HasZero },
            Identity::One => quote! { ::poly_axioms::HasOne },
        }
    }

    fn method(self) -> TokenStream2 {
        match self {
            Identity::Zero => quote! { zero },
            Identity::One => quote! { one },
        }
    }

    fn key(self) -> &'static str {
        match self {
            Identity::Zero => "zero",
            Identity::One => "one",
        }
    }
}

/// #[derive(Identities)] emits one impl per registered identity.
///
/// An explicit `#[identities(zero = ..)]` expression is used verbatim.
/// Otherwise every field gets `::poly_axioms::zero()` (or `one()`), and
/// generic structs gain a `FieldTy: HasZero` bound per field.
pub fn expand_derive_identities(input: DeriveInput) -> syn::Result<TokenStream2> {
    let attrs = IdentityAttrs::from_attrs(&input.attrs)?;

    let mut out = expand_identity(&input, Identity::Zero, attrs.zero.as_ref())?;
    if !attrs.additive_only {
        out.extend(expand_identity(&input, Identity::One, attrs.one.as_ref())?);
    }
    Ok(out)
}

fn expand_identity(
    input: &DeriveInput,
    identity: Identity,
    explicit: Option<&syn::Expr>,
) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let trait_path = identity.trait_path();
    let method = identity.method();

    let mut generics = input.generics.clone();
    let body = match explicit {
        Some(expr) => quote! { #expr },
        None => {
            let fields = struct_fields(input, identity)?;
            if !input.generics.params.is_empty() {
                let where_clause = generics.make_where_clause();
                for field in fields.iter() {
                    let ty = &field.ty;
                    let bound: WherePredicate = syn::parse_quote! { #ty: #trait_path };
                    where_clause.predicates.push(bound);
                }
            }
            fieldwise_body(fields, &method)
        }
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics #trait_path for #ident #ty_generics #where_clause {
            #[inline]
            fn #method() -> Self {
                #body
            }
        }
    })
}

/// Fields of a struct, or an error for shapes with no field-wise identity.
fn struct_fields(input: &DeriveInput, identity: Identity) -> syn::Result<&Fields> {
    let hint = format!(
        "add `#[identities({} = ...)]` to `{}`",
        identity.key(),
        input.ident
    );
    match &input.data {
        Data::Struct(data) if matches!(data.fields, Fields::Unit) => Err(syn::Error::new_spanned(
            &input.ident,
            format!("cannot derive a field-wise {} for a unit struct; {hint}", identity.key()),
        )),
        Data::Struct(data) => Ok(&data.fields),
        Data::Enum(_) => Err(syn::Error::new_spanned(
            &input.ident,
            format!("cannot derive a field-wise {} for an enum; {hint}", identity.key()),
        )),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            format!("cannot derive a field-wise {} for a union; {hint}", identity.key()),
        )),
    }
}

fn fieldwise_body(fields: &Fields, method: &TokenStream2) -> TokenStream2 {
    match fields {
        Fields::Named(named) => {
            let names = named.named.iter().map(|f| &f.ident);
            quote! { Self { #( #names: ::poly_axioms::#method(), )* } }
        }
        Fields::Unnamed(unnamed) => {
            let values = unnamed.unnamed.iter().map(|_| quote! { ::poly_axioms::#method() });
            quote! { Self( #( #values ),* ) }
        }
        Fields::Unit => quote! { Self },
    }
}
