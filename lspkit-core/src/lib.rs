//! Shape resolution core for lspkit
//!
//! Language server protocol messages are full of fields that may carry one
//! of several shapes with nothing on the wire saying which:
//! `hoverProvider` is `boolean | HoverOptions`, an inlay hint label is
//! `string | InlayHintLabelPart[]`, and so on. This crate provides the
//! machinery every protocol record is built on:
//!
//! - **Types**: the [`TrialDecode`] and [`Aggregate`] traits, and variant
//!   catalogs ([`Candidate`])
//! - **Codec**: the trial decoder, the field-by-field aggregate decoder
//!   ([`FieldReader`]) and the encoder
//! - **Error handling**: decode failure kinds plus the reserved JSON-RPC and
//!   LSP error codes
//! - **Observability**: `tracing` + OpenTelemetry setup
//!
//! The derive macros `TrialDecode` and `Aggregate` are re-exported next to
//! the traits of the same name.
//!
//! # Example
//!
//! ```rust
//! use lspkit_core::{codec, TrialDecode};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Deserialize, Serialize)]
//! struct MarkupContent {
//!     kind: String,
//!     value: String,
//! }
//!
//! #[derive(Debug, TrialDecode)]
//! enum Tooltip {
//!     String(String),
//!     Markup(MarkupContent),
//! }
//!
//! let tooltip: Tooltip = serde_json::from_str(r#"{"kind":"markdown","value":"**x**"}"#).unwrap();
//! assert_eq!(tooltip.variant(), "Markup");
//!
//! let text = codec::encode(&Tooltip::String("plain".into())).unwrap();
//! assert_eq!(text, r#""plain""#);
//! ```

// Lets derived code refer to `::lspkit_core` from inside this crate too
extern crate self as lspkit_core;

pub mod codec;
pub mod error;
pub mod observability;
pub mod types;

pub use codec::{decode, decode_str, encode, encode_object, trial_decode, FieldReader};
pub use error::{Error, ErrorCode, ResponseError, Result, ShapeMismatch};
pub use observability::{init_observability, shutdown_observability, ObservabilityConfig};
pub use types::{json_kind, Aggregate, Candidate, Probe, TrialDecode};

pub use lspkit_macros::{Aggregate, TrialDecode};

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
}
