//! `#[derive(TrialDecode)]` expansion
//!
//! Every variant of the enum becomes one catalog entry, in declaration
//! order. Variants must be newtypes (`Name(Shape)`); the wrapped type is the
//! candidate shape and must implement `Deserialize` and `Serialize`.
//!
//! Input:
//! ```ignore
//! #[derive(TrialDecode)]
//! enum HoverProviderCapability {
//!     Bool(bool),
//!     Options(HoverOptions),
//! }
//! ```
//!
//! Generated output (abridged):
//! ```ignore
//! impl ::lspkit_core::TrialDecode for HoverProviderCapability {
//!     const UNION: &'static str = "HoverProviderCapability";
//!     const CANDIDATES: &'static [::lspkit_core::Candidate<Self>] = &[
//!         ::lspkit_core::Candidate::new("Bool", |raw| ::lspkit_core::codec::probe(raw, HoverProviderCapability::Bool)),
//!         ::lspkit_core::Candidate::new("Options", |raw| ::lspkit_core::codec::probe(raw, HoverProviderCapability::Options)),
//!     ];
//!     fn variant(&self) -> &'static str { ... }
//! }
//! impl<'de> Deserialize<'de> for HoverProviderCapability { /* trial decode */ }
//! impl Serialize for HoverProviderCapability { /* active variant only */ }
//! ```

use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Error, Fields};

pub fn derive(input: DeriveInput) -> syn::Result<TokenStream> {
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new(
            input.generics.span(),
            "TrialDecode unions cannot be generic",
        ));
    }

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(Error::new(
                ident.span(),
                "TrialDecode can only be derived for enums",
            ))
        }
    };

    if data.variants.is_empty() {
        return Err(Error::new(
            ident.span(),
            "TrialDecode needs at least one candidate variant",
        ));
    }

    for variant in &data.variants {
        match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {}
            _ => {
                return Err(Error::new(
                    variant.span(),
                    "TrialDecode variants must wrap exactly one shape, e.g. `Options(HoverOptions)`",
                ))
            }
        }
    }

    let union_name = ident.to_string();
    let variants: Vec<_> = data.variants.iter().map(|v| &v.ident).collect();
    let names: Vec<String> = variants.iter().map(|v| v.to_string()).collect();

    Ok(quote! {
        impl ::lspkit_core::TrialDecode for #ident {
            const UNION: &'static str = #union_name;

            const CANDIDATES: &'static [::lspkit_core::Candidate<Self>] = &[
                #(
                    ::lspkit_core::Candidate::new(
                        #names,
                        |raw: &::lspkit_core::__private::serde_json::Value| {
                            ::lspkit_core::codec::probe(raw, #ident::#variants)
                        },
                    ),
                )*
            ];

            fn variant(&self) -> &'static str {
                match self {
                    #( #ident::#variants(_) => #names, )*
                }
            }
        }

        impl<'de> ::lspkit_core::__private::serde::Deserialize<'de> for #ident {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::lspkit_core::__private::serde::Deserializer<'de>,
            {
                ::lspkit_core::codec::deserialize_union(deserializer)
            }
        }

        impl ::lspkit_core::__private::serde::Serialize for #ident {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::lspkit_core::__private::serde::Serializer,
            {
                match self {
                    #(
                        #ident::#variants(inner) => {
                            ::lspkit_core::__private::serde::Serialize::serialize(inner, serializer)
                        }
                    )*
                }
            }
        }
    })
}
