//! # lspkit-protocol
//!
//! Typed records of the Language Server Protocol, revisions 3.16 and 3.17.
//!
//! - [`base`]: structures shared by both revisions
//! - [`v3_16`]: the base revision's capabilities and handshake
//! - [`v3_17`]: the additive 3.17 layer (type hierarchy, inlay hints, inline
//!   values, pull diagnostics, position encodings)
//! - [`methods`]: the method catalog and the typed [`Method`] markers
//!
//! Fields that accept several wire shapes are enums deriving
//! `TrialDecode`; their variant order is the order in which shapes are
//! tried. Records deriving `Aggregate` decode field by field and report
//! failures with a dotted wire path.
//!
//! # Examples
//!
//! ```rust
//! use lspkit_protocol::v3_17::{InitializeResult, InlayHintProviderCapability, ServerCapabilities};
//! use lspkit_core::codec;
//! use serde_json::json;
//!
//! let raw = json!({
//!     "capabilities": {
//!         "hoverProvider": true,
//!         "inlayHintProvider": {"resolveProvider": true}
//!     },
//!     "positionEncoding": "utf-8"
//! });
//!
//! let result: InitializeResult = codec::decode(&raw).unwrap();
//! let caps: &ServerCapabilities = &result.base.capabilities;
//! assert!(caps.base.hover_provider.is_some());
//! assert!(matches!(caps.inlay_hint_provider, Some(InlayHintProviderCapability::Options(_))));
//! ```

pub mod base;
pub mod methods;
pub mod v3_16;
pub mod v3_17;

pub use base::{
    DocumentUri, IntegerOrString, LspAny, LspArray, LspObject, Position, ProgressToken, Range,
    RequestId,
};
pub use methods::{lookup, Direction, Method, MethodKind, MethodRecord, CATALOG};
pub use v3_17::PositionEncodingKind;
