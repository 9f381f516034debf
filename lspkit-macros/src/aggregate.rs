//! `#[derive(Aggregate)]` expansion
//!
//! Generates the field-by-field decode routine of a record and a
//! `Deserialize` impl that routes through it. Serialization is left to
//! `#[derive(Serialize)]` on the same struct.
//!
//! Wire keys are the camelCase form of the field name unless
//! `#[wire(rename = "...")]` says otherwise. How a field is read depends on
//! its `#[wire(...)]` marker and on whether its type is spelled `Option<_>`:
//!
//! | marker       | `Option<T>`                   | `T`                               |
//! |--------------|-------------------------------|-----------------------------------|
//! | (none)       | `optional`                    | `required`                        |
//! | `required`   | `required` (nullable)         | `required`                        |
//! | `default`    | n/a                           | `optional`, absent = `Default`    |
//! | `ambiguous`  | `ambiguous`                   | `required_ambiguous`              |
//! | `nested`     | `nested`                      | `required_nested`                 |
//! | `base`       | n/a                           | `layer` (same object)             |
//!
//! Every type parameter of the record gets an `Aggregate` bound: generic
//! records are revision-generic containers whose parameters are the
//! sub-records a later revision swaps in.

use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{
    parse_quote, Data, DeriveInput, Error, Field, Fields, GenericArgument, GenericParam, LitStr,
    PathArguments, Type,
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Kind {
    Plain,
    Ambiguous,
    Nested,
    Base,
}

struct WireField {
    kind: Kind,
    required: bool,
    default: bool,
    rename: Option<String>,
}

impl WireField {
    fn parse(field: &Field) -> syn::Result<Self> {
        let mut wire = WireField {
            kind: Kind::Plain,
            required: false,
            default: false,
            rename: None,
        };

        for attr in field.attrs.iter().filter(|a| a.path().is_ident("wire")) {
            attr.parse_nested_meta(|meta| {
                let kind = if meta.path.is_ident("ambiguous") {
                    Kind::Ambiguous
                } else if meta.path.is_ident("nested") {
                    Kind::Nested
                } else if meta.path.is_ident("base") {
                    Kind::Base
                } else if meta.path.is_ident("required") {
                    wire.required = true;
                    return Ok(());
                } else if meta.path.is_ident("default") {
                    wire.default = true;
                    return Ok(());
                } else if meta.path.is_ident("rename") {
                    let key: LitStr = meta.value()?.parse()?;
                    wire.rename = Some(key.value());
                    return Ok(());
                } else {
                    return Err(meta.error(
                        "expected one of `ambiguous`, `nested`, `base`, `required`, `default`, `rename`",
                    ));
                };

                if wire.kind != Kind::Plain {
                    return Err(meta.error("a field takes at most one of `ambiguous`, `nested`, `base`"));
                }
                wire.kind = kind;
                Ok(())
            })?;
        }

        Ok(wire)
    }
}

fn is_option(ty: &Type) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };
    let Some(last) = path.path.segments.last() else {
        return false;
    };
    if last.ident != "Option" {
        return false;
    }
    match &last.arguments {
        PathArguments::AngleBracketed(args) => {
            args.args.len() == 1 && matches!(args.args.first(), Some(GenericArgument::Type(_)))
        }
        _ => false,
    }
}

/// `hover_provider` -> `hoverProvider`, `r#type` -> `type`
fn camel_case(ident: &str) -> String {
    let ident = ident.strip_prefix("r#").unwrap_or(ident);
    let mut out = String::with_capacity(ident.len());
    let mut upper_next = false;
    for ch in ident.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

fn read_expr(field: &Field, wire: &WireField) -> syn::Result<TokenStream> {
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| Error::new(field.span(), "Aggregate fields must be named"))?;
    let key = wire
        .rename
        .clone()
        .unwrap_or_else(|| camel_case(&ident.to_string()));
    let optional = is_option(&field.ty);

    let expr = match wire.kind {
        Kind::Base => {
            if optional {
                return Err(Error::new(field.ty.span(), "a `base` layer cannot be optional"));
            }
            quote!(fields.layer()?)
        }
        Kind::Ambiguous if optional => quote!(fields.ambiguous(#key)?),
        Kind::Ambiguous => quote!(fields.required_ambiguous(#key)?),
        Kind::Nested if optional => quote!(fields.nested(#key)?),
        Kind::Nested => quote!(fields.required_nested(#key)?),
        Kind::Plain if wire.default => {
            if optional {
                return Err(Error::new(
                    field.ty.span(),
                    "`default` is for non-optional fields; an absent `Option` is already `None`",
                ));
            }
            quote!(fields.optional(#key)?.unwrap_or_default())
        }
        Kind::Plain if optional && !wire.required => quote!(fields.optional(#key)?),
        Kind::Plain => quote!(fields.required(#key)?),
    };

    Ok(quote!(#ident: #expr))
}

pub fn derive(input: DeriveInput) -> syn::Result<TokenStream> {
    let ident = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            Fields::Unit => {
                return Ok(expand(&input, Vec::new()));
            }
            Fields::Unnamed(_) => {
                return Err(Error::new(
                    ident.span(),
                    "Aggregate records need named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                ident.span(),
                "Aggregate can only be derived for structs",
            ))
        }
    };

    let reads = fields
        .iter()
        .map(|field| {
            let wire = WireField::parse(field)?;
            read_expr(field, &wire)
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(expand(&input, reads))
}

fn expand(input: &DeriveInput, reads: Vec<TokenStream>) -> TokenStream {
    let ident = &input.ident;

    let mut generics = input.generics.clone();
    let type_params: Vec<_> = generics.type_params().map(|p| p.ident.clone()).collect();
    {
        let where_clause = generics.make_where_clause();
        for param in &type_params {
            where_clause
                .predicates
                .push(parse_quote!(#param: ::lspkit_core::Aggregate));
        }
    }

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut de_generics = generics.clone();
    de_generics.params.insert(0, GenericParam::Lifetime(parse_quote!('de)));
    let (de_impl_generics, _, _) = de_generics.split_for_impl();

    let body = if matches!(&input.data, Data::Struct(s) if matches!(s.fields, Fields::Unit)) {
        quote!(Self)
    } else {
        quote!(Self { #(#reads,)* })
    };

    quote! {
        impl #impl_generics ::lspkit_core::Aggregate for #ident #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn decode_fields(
                fields: &::lspkit_core::FieldReader<'_>,
            ) -> ::lspkit_core::Result<Self> {
                ::core::result::Result::Ok(#body)
            }
        }

        impl #de_impl_generics ::lspkit_core::__private::serde::Deserialize<'de>
            for #ident #ty_generics #where_clause
        {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::lspkit_core::__private::serde::Deserializer<'de>,
            {
                ::lspkit_core::codec::deserialize_aggregate(deserializer)
            }
        }
    }
}
