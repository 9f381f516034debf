//! # lspkit-server
//!
//! Typed dispatch of Language Server Protocol methods.
//!
//! A [`Router`] maps method names to [`Handler`]s. For every method listed in
//! the catalog (`lspkit_protocol::methods::CATALOG`) the params are validated
//! against the method's shape first; a failure is answered with
//! `InvalidParams` and the dotted path of the offending field. Handlers are
//! usually built from async functions with [`from_method_fn`] or the
//! `#[handler(Method)]` attribute from `lspkit-macros`.
//!
//! Transport framing (`Content-Length` headers, stdio or sockets) is left to
//! the embedding server; the router only sees a method name, an optional id
//! and the params value.
//!
//! ```rust
//! use lspkit_server::{from_method_fn, RouterBuilder};
//! use lspkit_protocol::methods::{Initialize, Shutdown};
//! use lspkit_protocol::v3_17::{InitializeResult, ServerCapabilities};
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let router = RouterBuilder::new()
//!     .method::<Initialize>(from_method_fn::<Initialize, _, _>(|_ctx, _params| async {
//!         Ok(InitializeResult::new(ServerCapabilities::default()))
//!     }))
//!     .method::<Shutdown>(from_method_fn::<Shutdown, _, _>(|_ctx, ()| async { Ok(()) }))
//!     .build();
//!
//! let result = router
//!     .route_response("initialize", 1.into(), Some(json!({"processId": null, "rootUri": null, "capabilities": {}})))
//!     .await
//!     .unwrap();
//! assert_eq!(result, json!({"capabilities": {}}));
//! # }
//! ```


pub mod handler;
pub mod metrics;
pub mod router;

pub use handler::{
    from_fn, from_method_fn, from_typed_fn, AsyncHandler, Handler, HandlerResult,
    RequestContext,
};
pub use metrics::DispatchMetrics;
pub use router::{Router, RouterBuilder};

pub use lspkit_core::{Error, ErrorCode, ResponseError, Result};
