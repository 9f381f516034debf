//! # lspkit
//!
//! Typed Language Server Protocol 3.16/3.17 records with trial-based decoding
//! of union-typed fields.
//!
//! This crate re-exports the workspace crates under one name:
//!
//! - [`core`]: trial decoding, aggregate decoding, the codec, error codes and
//!   observability setup
//! - [`protocol`]: the 3.16 and 3.17 records, variant catalogs and the method
//!   catalog
//! - [`server`]: handler adapters and a router that validates params against
//!   the method catalog
//! - [`macros`]: `#[derive(TrialDecode)]`, `#[derive(Aggregate)]` and
//!   `#[handler(Method)]`
//!
//! # Decoding capabilities
//!
//! ```rust
//! use lspkit::protocol::v3_16::server::HoverProviderCapability;
//! use lspkit::protocol::v3_17::ServerCapabilities;
//! use serde_json::json;
//!
//! let caps: ServerCapabilities =
//!     lspkit::decode(&json!({"hoverProvider": {"workDoneProgress": true}})).unwrap();
//! assert!(matches!(caps.base.hover_provider, Some(HoverProviderCapability::Options(_))));
//!
//! let err = lspkit::decode::<ServerCapabilities>(&json!({"hoverProvider": 7})).unwrap_err();
//! assert_eq!(err.field(), Some("hoverProvider"));
//! ```
//!
//! # Serving methods
//!
//! ```rust
//! use lspkit::protocol::methods::Shutdown;
//! use lspkit::server::{from_method_fn, RouterBuilder};
//!
//! let router = RouterBuilder::new()
//!     .method::<Shutdown>(from_method_fn::<Shutdown, _, _>(|_ctx, ()| async { Ok(()) }))
//!     .build();
//! assert_eq!(router.methods(), vec!["shutdown".to_string()]);
//! ```

pub use lspkit_core as core;
pub use lspkit_macros as macros;
pub use lspkit_protocol as protocol;
pub use lspkit_server as server;

pub use lspkit_core::{
    decode, encode, trial_decode, Aggregate, Error, ErrorCode, ResponseError, Result,
    TrialDecode,
};
pub use lspkit_protocol::{lookup, Method, MethodRecord, PositionEncodingKind, CATALOG};
pub use lspkit_server::{Router, RouterBuilder};
