//! Handler traits and adapters for protocol methods
//!
//! A [`Handler`] receives the request context and the raw `params` value and
//! produces the raw `result` value. Most code does not implement it by hand
//! but builds one from an async function:
//!
//! 1. [`from_fn`]: raw JSON in, raw JSON out
//! 2. [`from_typed_fn`]: serde types in and out
//! 3. [`from_method_fn`]: types taken from a [`Method`] marker, so the
//!    signature always matches the catalog
//! 4. `#[handler(Method)]` from `lspkit-macros`, which expands to (3)
//!
//! # Examples
//!
//! ```rust
//! use lspkit_server::{from_fn, from_method_fn, RequestContext};
//! use lspkit_protocol::methods::{InlayHintRequest, Shutdown};
//!
//! let shutdown = from_method_fn::<Shutdown, _, _>(|_ctx, ()| async { Ok(()) });
//!
//! let inlay_hints = from_method_fn::<InlayHintRequest, _, _>(|ctx: RequestContext, params| async move {
//!     tracing::debug!(method = ctx.method(), uri = %params.text_document.uri, "computing hints");
//!     Ok(None)
//! });
//!
//! let echo = from_fn(|params| async move { Ok(params.unwrap_or_default()) });
//! ```

use lspkit_core::{codec, Error, Result};
use lspkit_protocol::methods::{self, Method, MethodRecord};
use lspkit_protocol::RequestId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed future returned by every handler
pub type HandlerResult = Pin<Box<dyn Future<Output = Result<Value>> + Send>>;

/// What a handler knows about the message it is answering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    method: String,
    id: Option<RequestId>,
}

impl RequestContext {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            id: None,
        }
    }

    /// Context of a request carrying `id`
    pub fn with_id(mut self, id: RequestId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// Request id; `None` for notifications
    pub fn id(&self) -> Option<&RequestId> {
        self.id.as_ref()
    }

    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }

    /// Catalog record of the method, if it is a known one
    pub fn record(&self) -> Option<&'static MethodRecord> {
        methods::lookup(&self.method)
    }
}

/// Handler for one method
///
/// `params` is `None` when the message had no `params` member.
///
/// Errors are turned into response errors by the router:
/// - decode failures and `Error::InvalidParams` → -32602
/// - `Error::MethodNotFound` → -32601
/// - `Error::Response` keeps its own code
/// - anything else → -32603
pub trait Handler: Send + Sync {
    fn handle(&self, ctx: RequestContext, params: Option<Value>) -> HandlerResult;
}

/// Adapter from an async function to [`Handler`]
pub struct AsyncHandler<F, Fut>
where
    F: Fn(RequestContext, Option<Value>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value>> + Send + 'static,
{
    func: F,
}

impl<F, Fut> AsyncHandler<F, Fut>
where
    F: Fn(RequestContext, Option<Value>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value>> + Send + 'static,
{
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F, Fut> Handler for AsyncHandler<F, Fut>
where
    F: Fn(RequestContext, Option<Value>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value>> + Send + 'static,
{
    fn handle(&self, ctx: RequestContext, params: Option<Value>) -> HandlerResult {
        Box::pin((self.func)(ctx, params))
    }
}

/// Handler over raw JSON params
pub fn from_fn<F, Fut>(func: F) -> Box<dyn Handler>
where
    F: Fn(Option<Value>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value>> + Send + 'static,
{
    Box::new(AsyncHandler::new(move |_ctx: RequestContext, params: Option<Value>| {
        func(params)
    }))
}

fn decode_params<P: DeserializeOwned>(params: Option<Value>) -> Result<P> {
    // A missing params member decodes like null, which suits `()`
    let raw = params.unwrap_or(Value::Null);
    P::deserialize(&raw).map_err(|e| Error::InvalidParams(e.to_string()))
}

/// Handler over serde parameter and result types
///
/// Params that fail to decode yield `Error::InvalidParams`.
pub fn from_typed_fn<P, R, F, Fut>(func: F) -> Box<dyn Handler>
where
    P: DeserializeOwned + Send + 'static,
    R: Serialize + Send + 'static,
    F: Fn(P) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R>> + Send + 'static,
{
    let func = Arc::new(func);

    Box::new(AsyncHandler::new(move |_ctx: RequestContext, params: Option<Value>| {
        let func = Arc::clone(&func);
        async move {
            let params: P = decode_params(params)?;
            let result = func(params).await?;
            codec::to_value(&result)
        }
    }))
}

/// Handler for the method `M`
///
/// Parameter and result types come from the marker, and the function also
/// receives the [`RequestContext`].
pub fn from_method_fn<M, F, Fut>(func: F) -> Box<dyn Handler>
where
    M: Method + 'static,
    F: Fn(RequestContext, M::Params) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<M::Result>> + Send + 'static,
{
    let func = Arc::new(func);

    Box::new(AsyncHandler::new(move |ctx: RequestContext, params: Option<Value>| {
        let func = Arc::clone(&func);
        async move {
            let params: M::Params = decode_params(params)?;
            let result = func(ctx, params).await?;
            codec::to_value(&result)
        }
    }))
}
