//! Method catalog
//!
//! Every supported method has two faces:
//!
//! - a marker type implementing [`Method`], which ties the method name to its
//!   Rust parameter and result types for typed handlers;
//! - a [`MethodRecord`] in the static [`CATALOG`], looked up by name at
//!   runtime, whose [`Shape`]s validate raw JSON with the same decoders.
//!
//! Both are immutable and shared freely across threads.
//!
//! # Examples
//!
//! ```rust
//! use lspkit_protocol::methods::{self, InlayHintRequest, Method, MethodKind};
//! use serde_json::json;
//!
//! let record = methods::lookup("textDocument/inlayHint").unwrap();
//! assert_eq!(record.kind, MethodKind::Request);
//! assert_eq!(record.name, InlayHintRequest::NAME);
//!
//! let params = json!({
//!     "textDocument": {"uri": "file:///main.rs"},
//!     "range": {"start": {"line": 0, "character": 0}, "end": {"line": 40, "character": 0}}
//! });
//! assert!(record.validate_params(&params).is_ok());
//! assert!(record.validate_params(&json!({"range": 3})).is_err());
//! ```

use crate::base::CancelParams;
use crate::v3_17::{
    InitializeError, InitializeParams, InitializeResult, InitializedParams, InlayHint,
    InlayHintParams, InlineValue, InlineValueParams, TypeHierarchyItem,
    TypeHierarchyPrepareParams, TypeHierarchySubtypesParams, TypeHierarchySupertypesParams,
};
use lspkit_core::{codec, Aggregate, Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Request (answered) or notification (fire and forget)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    Request,
    Notification,
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodKind::Request => f.write_str("request"),
            MethodKind::Notification => f.write_str("notification"),
        }
    }
}

/// Who sends the method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    ClientToServer,
    ServerToClient,
    Both,
}

/// A method with its wire name and Rust parameter and result types
///
/// Methods without params use `()` for `Params` (decoded from `null`);
/// notifications and void requests use `()` for `Result`.
pub trait Method {
    const NAME: &'static str;
    const KIND: MethodKind;
    const DIRECTION: Direction;

    type Params: DeserializeOwned + Serialize + Send + 'static;
    type Result: DeserializeOwned + Serialize + Send + 'static;
}

/// Named validator for one payload shape
#[derive(Clone, Copy)]
pub struct Shape {
    pub name: &'static str,
    pub validate: fn(&Value) -> Result<()>,
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape").field("name", &self.name).finish()
    }
}

fn aggregate<A: Aggregate>(raw: &Value) -> Result<()> {
    codec::decode::<A>(raw).map(drop)
}

fn serde_shape<T: DeserializeOwned>(raw: &Value) -> Result<()> {
    codec::from_value::<T>(raw).map(drop)
}

fn void(raw: &Value) -> Result<()> {
    if raw.is_null() {
        Ok(())
    } else {
        Err(Error::Serialization(format!(
            "expected null, found {}",
            lspkit_core::json_kind(raw)
        )))
    }
}

const VOID: Shape = Shape {
    name: "null",
    validate: void,
};

const TYPE_HIERARCHY_ITEMS: Shape = Shape {
    name: "TypeHierarchyItem[] | null",
    validate: serde_shape::<Option<Vec<TypeHierarchyItem>>>,
};

/// Static descriptor of one method
#[derive(Debug, Clone, Copy)]
pub struct MethodRecord {
    pub name: &'static str,
    pub kind: MethodKind,
    pub direction: Direction,
    /// `None` when the method takes no params
    pub params: Option<Shape>,
    /// `None` for notifications
    pub result: Option<Shape>,
    /// Shape of `error.data`, when the method defines one
    pub error_data: Option<Shape>,
}

impl MethodRecord {
    /// Check raw params against the method's parameter shape
    ///
    /// Methods without params accept only `null` (the caller maps a missing
    /// `params` member to `null`).
    ///
    /// # Errors
    ///
    /// The decode failure of the shape, or `InvalidParams` when the shape
    /// has no structured error to report.
    pub fn validate_params(&self, raw: &Value) -> Result<()> {
        let outcome = match &self.params {
            Some(shape) => (shape.validate)(raw),
            None if raw.is_null() => Ok(()),
            None => Err(Error::InvalidParams(format!(
                "{} takes no params, found {}",
                self.name,
                lspkit_core::json_kind(raw)
            ))),
        };

        outcome.map_err(|e| {
            tracing::trace!(method = self.name, error = %e, "params do not match");
            if e.is_decode_failure() {
                e
            } else {
                Error::InvalidParams(e.to_string())
            }
        })
    }

    /// Check a raw result against the method's result shape
    pub fn validate_result(&self, raw: &Value) -> Result<()> {
        match &self.result {
            Some(shape) => (shape.validate)(raw),
            None => Err(Error::Internal(format!(
                "{} is a notification and has no result",
                self.name
            ))),
        }
    }

    /// Check `error.data` of a failed response
    pub fn validate_error_data(&self, raw: &Value) -> Result<()> {
        match &self.error_data {
            Some(shape) => (shape.validate)(raw),
            None => Ok(()),
        }
    }

    pub fn is_request(&self) -> bool {
        self.kind == MethodKind::Request
    }
}

macro_rules! methods {
    ($(
        $(#[$meta:meta])*
        $marker:ident = $name:literal, $kind:ident, $direction:ident, $params:ty => $result:ty;
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug)]
            pub enum $marker {}

            impl Method for $marker {
                const NAME: &'static str = $name;
                const KIND: MethodKind = MethodKind::$kind;
                const DIRECTION: Direction = Direction::$direction;

                type Params = $params;
                type Result = $result;
            }
        )*
    };
}

methods! {
    /// `initialize`
    Initialize = "initialize", Request, ClientToServer, InitializeParams => InitializeResult;
    /// `initialized`
    Initialized = "initialized", Notification, ClientToServer, InitializedParams => ();
    /// `shutdown`
    Shutdown = "shutdown", Request, ClientToServer, () => ();
    /// `exit`
    Exit = "exit", Notification, ClientToServer, () => ();
    /// `$/cancelRequest`
    Cancel = "$/cancelRequest", Notification, Both, CancelParams => ();
    /// `textDocument/prepareTypeHierarchy`
    PrepareTypeHierarchy = "textDocument/prepareTypeHierarchy", Request, ClientToServer,
        TypeHierarchyPrepareParams => Option<Vec<TypeHierarchyItem>>;
    /// `typeHierarchy/supertypes`
    TypeHierarchySupertypes = "typeHierarchy/supertypes", Request, ClientToServer,
        TypeHierarchySupertypesParams => Option<Vec<TypeHierarchyItem>>;
    /// `typeHierarchy/subtypes`
    TypeHierarchySubtypes = "typeHierarchy/subtypes", Request, ClientToServer,
        TypeHierarchySubtypesParams => Option<Vec<TypeHierarchyItem>>;
    /// `textDocument/inlayHint`
    InlayHintRequest = "textDocument/inlayHint", Request, ClientToServer,
        InlayHintParams => Option<Vec<InlayHint>>;
    /// `inlayHint/resolve`
    InlayHintResolve = "inlayHint/resolve", Request, ClientToServer, InlayHint => InlayHint;
    /// `workspace/inlayHint/refresh`
    InlayHintRefresh = "workspace/inlayHint/refresh", Request, ServerToClient, () => ();
    /// `textDocument/inlineValue`
    InlineValueRequest = "textDocument/inlineValue", Request, ClientToServer,
        InlineValueParams => Option<Vec<InlineValue>>;
    /// `workspace/inlineValue/refresh`
    InlineValueRefresh = "workspace/inlineValue/refresh", Request, ServerToClient, () => ();
}

/// Every method this crate models
pub static CATALOG: &[MethodRecord] = &[
    MethodRecord {
        name: Initialize::NAME,
        kind: MethodKind::Request,
        direction: Direction::ClientToServer,
        params: Some(Shape {
            name: "InitializeParams",
            validate: aggregate::<InitializeParams>,
        }),
        result: Some(Shape {
            name: "InitializeResult",
            validate: aggregate::<InitializeResult>,
        }),
        error_data: Some(Shape {
            name: "InitializeError",
            validate: serde_shape::<InitializeError>,
        }),
    },
    MethodRecord {
        name: Initialized::NAME,
        kind: MethodKind::Notification,
        direction: Direction::ClientToServer,
        params: Some(Shape {
            name: "InitializedParams",
            validate: aggregate::<InitializedParams>,
        }),
        result: None,
        error_data: None,
    },
    MethodRecord {
        name: Shutdown::NAME,
        kind: MethodKind::Request,
        direction: Direction::ClientToServer,
        params: None,
        result: Some(VOID),
        error_data: None,
    },
    MethodRecord {
        name: Exit::NAME,
        kind: MethodKind::Notification,
        direction: Direction::ClientToServer,
        params: None,
        result: None,
        error_data: None,
    },
    MethodRecord {
        name: Cancel::NAME,
        kind: MethodKind::Notification,
        direction: Direction::Both,
        params: Some(Shape {
            name: "CancelParams",
            validate: aggregate::<CancelParams>,
        }),
        result: None,
        error_data: None,
    },
    MethodRecord {
        name: PrepareTypeHierarchy::NAME,
        kind: MethodKind::Request,
        direction: Direction::ClientToServer,
        params: Some(Shape {
            name: "TypeHierarchyPrepareParams",
            validate: aggregate::<TypeHierarchyPrepareParams>,
        }),
        result: Some(TYPE_HIERARCHY_ITEMS),
        error_data: None,
    },
    MethodRecord {
        name: TypeHierarchySupertypes::NAME,
        kind: MethodKind::Request,
        direction: Direction::ClientToServer,
        params: Some(Shape {
            name: "TypeHierarchySupertypesParams",
            validate: aggregate::<TypeHierarchySupertypesParams>,
        }),
        result: Some(TYPE_HIERARCHY_ITEMS),
        error_data: None,
    },
    MethodRecord {
        name: TypeHierarchySubtypes::NAME,
        kind: MethodKind::Request,
        direction: Direction::ClientToServer,
        params: Some(Shape {
            name: "TypeHierarchySubtypesParams",
            validate: aggregate::<TypeHierarchySubtypesParams>,
        }),
        result: Some(TYPE_HIERARCHY_ITEMS),
        error_data: None,
    },
    MethodRecord {
        name: InlayHintRequest::NAME,
        kind: MethodKind::Request,
        direction: Direction::ClientToServer,
        params: Some(Shape {
            name: "InlayHintParams",
            validate: aggregate::<InlayHintParams>,
        }),
        result: Some(Shape {
            name: "InlayHint[] | null",
            validate: serde_shape::<Option<Vec<InlayHint>>>,
        }),
        error_data: None,
    },
    MethodRecord {
        name: InlayHintResolve::NAME,
        kind: MethodKind::Request,
        direction: Direction::ClientToServer,
        params: Some(Shape {
            name: "InlayHint",
            validate: aggregate::<InlayHint>,
        }),
        result: Some(Shape {
            name: "InlayHint",
            validate: aggregate::<InlayHint>,
        }),
        error_data: None,
    },
    MethodRecord {
        name: InlayHintRefresh::NAME,
        kind: MethodKind::Request,
        direction: Direction::ServerToClient,
        params: None,
        result: Some(VOID),
        error_data: None,
    },
    MethodRecord {
        name: InlineValueRequest::NAME,
        kind: MethodKind::Request,
        direction: Direction::ClientToServer,
        params: Some(Shape {
            name: "InlineValueParams",
            validate: aggregate::<InlineValueParams>,
        }),
        result: Some(Shape {
            name: "InlineValue[] | null",
            validate: serde_shape::<Option<Vec<InlineValue>>>,
        }),
        error_data: None,
    },
    MethodRecord {
        name: InlineValueRefresh::NAME,
        kind: MethodKind::Request,
        direction: Direction::ServerToClient,
        params: None,
        result: Some(VOID),
        error_data: None,
    },
];

/// Look up a method record by wire name
pub fn lookup(name: &str) -> Option<&'static MethodRecord> {
    CATALOG.iter().find(|record| record.name == name)
}

/// Record of a typed method
pub fn record<M: Method>() -> Option<&'static MethodRecord> {
    lookup(M::NAME)
}
