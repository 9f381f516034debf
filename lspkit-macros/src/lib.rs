//! Procedural macros for lspkit
//!
//! Protocol records are declared as plain Rust types and these macros
//! generate the decoding machinery around them:
//!
//! - `#[derive(TrialDecode)]`: variant catalog, `Deserialize` by structural
//!   trial and `Serialize` by selection for an untagged union enum
//! - `#[derive(Aggregate)]`: field-by-field decode routine (and a matching
//!   `Deserialize`) for a record, with `#[wire(...)]` markers for ambiguous,
//!   nested and layered fields
//! - `#[handler(Method)]`: turns an async function into a handler bound to a
//!   protocol method
//!
//! The derives are normally used through `lspkit_core`, which re-exports them
//! next to the traits they implement.
//!
//! # Examples
//!
//! ```ignore
//! use lspkit_core::{Aggregate, TrialDecode};
//! use serde::Serialize;
//!
//! #[derive(Debug, TrialDecode)]
//! pub enum InlayHintLabel {
//!     String(String),
//!     LabelParts(Vec<InlayHintLabelPart>),
//! }
//!
//! #[derive(Debug, Serialize, Aggregate)]
//! #[serde(rename_all = "camelCase")]
//! pub struct InlayHint {
//!     pub position: Position,
//!     #[wire(ambiguous)]
//!     pub label: InlayHintLabel,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub padding_left: Option<bool>,
//! }
//! ```

mod aggregate;
mod handler;
mod trial;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput, ItemFn, Path};

/// Derive `TrialDecode`, `Deserialize` and `Serialize` for an untagged union
///
/// Each variant must wrap exactly one shape. Candidates are tried in
/// declaration order, so list primitives first and the least constrained
/// record last.
#[proc_macro_derive(TrialDecode)]
pub fn derive_trial_decode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    trial::derive(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Derive `Aggregate` and `Deserialize` for a record
///
/// Field markers:
/// - `#[wire(ambiguous)]`: resolve by trial decode
/// - `#[wire(nested)]`: decode as a nested aggregate (errors carry the path)
/// - `#[wire(base)]`: decode a base-revision record from the same object
/// - `#[wire(required)]`: key must exist even though the type is `Option`
/// - `#[wire(default)]`: absent key decodes as `Default::default()`
/// - `#[wire(rename = "key")]`: explicit wire key
#[proc_macro_derive(Aggregate, attributes(wire))]
pub fn derive_aggregate(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    aggregate::derive(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Attribute macro binding an async function to a protocol method
///
/// ```ignore
/// #[handler(Shutdown)]
/// async fn shutdown() -> lspkit_core::Result<()> {
///     Ok(())
/// }
///
/// let router = RouterBuilder::new().handler(Shutdown::NAME, shutdown()).build();
/// ```
#[proc_macro_attribute]
pub fn handler(attr: TokenStream, item: TokenStream) -> TokenStream {
    let method = parse_macro_input!(attr as Path);
    let input_fn = parse_macro_input!(item as ItemFn);
    handler::expand(method, input_fn)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
