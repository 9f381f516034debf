//! `#[handler(Method)]` attribute implementation
//!
//! Turns an async function into a factory returning
//! `Box<dyn lspkit_server::Handler>` bound to one protocol method. The
//! method marker type supplies the parameter and result types, so the
//! function signature is checked against the catalog at compile time.
//!
//! Input:
//! ```ignore
//! #[handler(InlayHintRequest)]
//! async fn inlay_hints(params: InlayHintParams) -> Result<Option<Vec<InlayHint>>> {
//!     Ok(None)
//! }
//! ```
//!
//! Generated output:
//! ```ignore
//! fn inlay_hints() -> Box<dyn ::lspkit_server::Handler> {
//!     async fn inner_handler(params: InlayHintParams) -> Result<Option<Vec<InlayHint>>> {
//!         Ok(None)
//!     }
//!     ::lspkit_server::from_method_fn::<InlayHintRequest, _, _>(
//!         move |_ctx, params| inner_handler(params),
//!     )
//! }
//! ```
//!
//! The function may take `(ctx, params)`, `(params)` or nothing.

use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Error, FnArg, ItemFn, Path};

pub fn expand(method: Path, input_fn: ItemFn) -> syn::Result<TokenStream> {
    let fn_name = &input_fn.sig.ident;
    let fn_vis = &input_fn.vis;
    let fn_attrs = &input_fn.attrs;

    if input_fn.sig.asyncness.is_none() {
        return Err(Error::new(
            input_fn.sig.fn_token.span(),
            "#[handler] functions must be async",
        ));
    }

    if let Some(FnArg::Receiver(receiver)) = input_fn.sig.inputs.first() {
        return Err(Error::new(
            receiver.span(),
            "#[handler] functions cannot take self",
        ));
    }

    let call = match input_fn.sig.inputs.len() {
        0 => quote!(move |_ctx, _params| inner_handler()),
        1 => quote!(move |_ctx, params| inner_handler(params)),
        2 => quote!(move |ctx, params| inner_handler(ctx, params)),
        _ => {
            return Err(Error::new(
                input_fn.sig.inputs.span(),
                "#[handler] functions take at most (ctx, params)",
            ))
        }
    };

    let mut inner = input_fn.clone();
    inner.attrs.clear();
    inner.vis = syn::Visibility::Inherited;
    inner.sig.ident = syn::Ident::new("inner_handler", input_fn.sig.ident.span());

    Ok(quote! {
        #(#fn_attrs)*
        #fn_vis fn #fn_name() -> ::std::boxed::Box<dyn ::lspkit_server::Handler> {
            #inner

            ::lspkit_server::from_method_fn::<#method, _, _>(#call)
        }
    })
}
