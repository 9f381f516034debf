//! Method routing
//!
//! The router maps method names to handlers. Before a handler runs, the
//! params of every method found in the catalog are checked against the
//! method's params shape, so handlers only ever see well-shaped input and a
//! malformed message is answered with `InvalidParams` naming the offending
//! field. Methods outside the catalog (experimental or `$/` extensions) are
//! passed through untouched.
//!
//! Routers are `Arc`-backed and cheap to clone.
//!
//! ```rust
//! use lspkit_server::{from_method_fn, RouterBuilder};
//! use lspkit_protocol::methods::Shutdown;
//!
//! let router = RouterBuilder::new()
//!     .method::<Shutdown>(from_method_fn::<Shutdown, _, _>(|_ctx, ()| async { Ok(()) }))
//!     .build();
//! assert!(router.has_method("shutdown"));
//! ```

use crate::handler::{Handler, RequestContext};
use crate::metrics::DispatchMetrics;
use lspkit_core::{Error, ResponseError, Result};
use lspkit_protocol::methods::{self, Method};
use lspkit_protocol::RequestId;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct Router {
    handlers: Arc<HashMap<String, Arc<dyn Handler>>>,
    metrics: Option<Arc<DispatchMetrics>>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(HashMap::new()),
            metrics: None,
        }
    }

    /// Register a handler, replacing any previous one for `method`
    pub fn register(&mut self, method: impl Into<String>, handler: Box<dyn Handler>) {
        let handlers = Arc::make_mut(&mut self.handlers);
        handlers.insert(method.into(), Arc::from(handler));
    }

    pub fn set_metrics(&mut self, metrics: Arc<DispatchMetrics>) {
        self.metrics = Some(metrics);
    }

    pub fn get(&self, method: &str) -> Option<Arc<dyn Handler>> {
        self.handlers.get(method).cloned()
    }

    pub fn has_method(&self, method: &str) -> bool {
        self.handlers.contains_key(method)
    }

    pub fn methods(&self) -> Vec<String> {
        self.handlers.keys().cloned().collect()
    }

    /// Dispatch a notification, or a request whose id the handler does not need
    pub async fn route(&self, method: &str, params: Option<Value>) -> Result<Value> {
        self.dispatch(RequestContext::new(method), params).await
    }

    /// Dispatch a request carrying `id`
    pub async fn route_request(
        &self,
        method: &str,
        id: RequestId,
        params: Option<Value>,
    ) -> Result<Value> {
        self.dispatch(RequestContext::new(method).with_id(id), params)
            .await
    }

    /// Like [`route_request`](Self::route_request), with the error already in
    /// wire form
    pub async fn route_response(
        &self,
        method: &str,
        id: RequestId,
        params: Option<Value>,
    ) -> std::result::Result<Value, ResponseError> {
        self.route_request(method, id, params)
            .await
            .map_err(|e| e.to_response_error())
    }

    async fn dispatch(&self, ctx: RequestContext, params: Option<Value>) -> Result<Value> {
        let method = ctx.method().to_string();
        let start = Instant::now();

        let outcome = self.run(ctx, params).await;

        if let Some(metrics) = &self.metrics {
            let status = if outcome.is_ok() { "success" } else { "error" };
            metrics.record_request(&method, status, start.elapsed().as_secs_f64());
            if let Err(e) = &outcome {
                metrics.record_error(&method, e.to_response_error().code.0);
            }
        }

        outcome
    }

    async fn run(&self, ctx: RequestContext, params: Option<Value>) -> Result<Value> {
        let handler = match self.get(ctx.method()) {
            Some(handler) => handler,
            None => {
                tracing::warn!(method = ctx.method(), "no handler registered");
                return Err(Error::MethodNotFound(ctx.method().to_string()));
            }
        };

        if let Some(record) = methods::lookup(ctx.method()) {
            let raw = params.as_ref().unwrap_or(&Value::Null);
            if let Err(e) = record.validate_params(raw) {
                let field = e.field().unwrap_or_default();
                tracing::debug!(method = record.name, field, error = %e, "params rejected");
                if let Some(metrics) = &self.metrics {
                    metrics.record_decode_failure(record.name, field);
                }
                return Err(e);
            }
        }

        tracing::debug!(method = ctx.method(), id = ?ctx.id(), "dispatching");
        handler.handle(ctx, params).await
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RouterBuilder {
    router: Router,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self {
            router: Router::new(),
        }
    }

    pub fn handler(mut self, method: impl Into<String>, handler: Box<dyn Handler>) -> Self {
        self.router.register(method, handler);
        self
    }

    /// Register a handler under `M::NAME`
    pub fn method<M: Method>(self, handler: Box<dyn Handler>) -> Self {
        self.handler(M::NAME, handler)
    }

    /// Record [`DispatchMetrics`] on the global meter
    pub fn with_metrics(self, scope: &'static str) -> Self {
        self.metrics(Arc::new(DispatchMetrics::new(scope)))
    }

    pub fn metrics(mut self, metrics: Arc<DispatchMetrics>) -> Self {
        self.router.set_metrics(metrics);
        self
    }

    pub fn build(self) -> Router {
        self.router
    }
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
