//! Error types for lspkit
//!
//! Two families of errors live here and they must not be confused:
//!
//! - **Error**: failures raised while decoding or encoding protocol values,
//!   and while dispatching a decoded message to a handler (uses thiserror)
//! - **ResponseError** / **ErrorCode**: the wire-level error object and the
//!   reserved integer codes a peer sends back in a response
//!
//! # Decode Failure Kinds
//!
//! - `ShapeMismatch`: an ambiguous field is present but none of its candidate
//!   shapes accepted it
//! - `MalformedPrimitive`: a single-shape field has the wrong JSON type
//! - `MissingField`: a required key is absent
//! - `NotAnObject`: an aggregate was handed something other than an object
//!
//! A missing *optional* field is not an error at all; it decodes as absent.
//!
//! # Reserved Codes
//!
//! JSON-RPC 2.0 reserves `-32768..=-32000`. Inside it the language server
//! protocol names two bands:
//! - `-32099..=-32000`: JSON-RPC implementation band
//!   (`ServerNotInitialized`, `UnknownErrorCode`)
//! - `-32899..=-32800`: LSP band
//!   (`RequestFailed`, `ServerCancelled`, `ContentModified`, `RequestCancelled`)
//!
//! # Examples
//!
//! ```rust
//! use lspkit_core::{Error, ErrorCode, ResponseError};
//!
//! let error = Error::MethodNotFound("textDocument/unknown".into());
//! assert_eq!(error.to_response_error().code, ErrorCode::METHOD_NOT_FOUND);
//!
//! let cancelled = ResponseError::request_cancelled();
//! assert_eq!(cancelled.code.0, -32800);
//! assert!(cancelled.code.is_lsp_reserved());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for lspkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error raised while decoding, encoding or dispatching protocol values
///
/// Decode failures always fail the enclosing aggregate as a whole; no partial
/// value is ever produced. Field paths are dotted wire keys relative to the
/// value handed to the decoder, e.g. `capabilities.textDocument.inlayHint`.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// An error object received from (or destined for) the peer
    #[error("LSP error: {0}")]
    Response(#[from] ResponseError),

    /// An ambiguous field matched none of its candidate shapes
    #[error("field `{field}`: {source}")]
    ShapeMismatch {
        /// Dotted wire path of the field
        field: String,
        /// The trial that failed, carrying the last candidate's error
        source: ShapeMismatch,
    },

    /// A single-shape field is present but has the wrong JSON type
    #[error("field `{field}` is malformed: {message}")]
    MalformedPrimitive {
        /// Dotted wire path of the field
        field: String,
        /// Underlying serde message
        message: String,
    },

    /// A required key is absent from the wire object
    #[error("missing required field `{field}`")]
    MissingField {
        /// Dotted wire path of the field
        field: String,
    },

    /// An aggregate decode was handed something other than a JSON object
    #[error("expected a JSON object{}, found {found}", describe_path(.path))]
    NotAnObject {
        /// Dotted wire path of the value (empty for the root)
        path: String,
        /// JSON kind that was found instead
        found: &'static str,
    },

    /// Serialization to or from JSON text failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The method is not in the catalog, or no handler is registered for it
    #[error("Method not found: {0}")]
    MethodNotFound(String),

    /// Parameters could not be decoded into the method's parameter shape
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// Unexpected failure inside a handler
    #[error("Internal error: {0}")]
    Internal(String),
}

fn describe_path(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" at `{}`", path)
    }
}

impl Error {
    /// True for the decode failure kinds (shape, primitive, missing, object)
    pub fn is_decode_failure(&self) -> bool {
        matches!(
            self,
            Error::ShapeMismatch { .. }
                | Error::MalformedPrimitive { .. }
                | Error::MissingField { .. }
                | Error::NotAnObject { .. }
        )
    }

    /// Dotted wire path of the offending field, for decode failures
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::ShapeMismatch { field, .. }
            | Error::MalformedPrimitive { field, .. }
            | Error::MissingField { field } => Some(field),
            Error::NotAnObject { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Convert into the wire error object sent back to the peer
    ///
    /// Decode failures surface as `InvalidParams` because they only reach a
    /// response when a request's params failed to decode.
    pub fn to_response_error(&self) -> ResponseError {
        match self {
            Error::Response(e) => e.clone(),
            Error::MethodNotFound(method) => ResponseError::method_not_found(method.as_str()),
            Error::InvalidParams(msg) => ResponseError::invalid_params(msg.as_str()),
            e if e.is_decode_failure() => ResponseError::invalid_params(e.to_string()),
            e => ResponseError::internal_error(e.to_string()),
        }
    }
}

/// Failure of a trial decode: no candidate shape accepted the value
///
/// Only the **last** candidate's error is kept. Catalogs list primitive and
/// loosely constrained shapes first, so the last attempt is normally the most
/// specific one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{found} matched none of the {attempts} shapes of {union} (last tried {candidate}: {message})")]
pub struct ShapeMismatch {
    /// Name of the union type being decoded
    pub union: &'static str,
    /// Name of the last candidate attempted
    pub candidate: &'static str,
    /// Number of candidates attempted
    pub attempts: usize,
    /// JSON kind of the rejected value
    pub found: &'static str,
    /// Error reported by the last candidate
    pub message: String,
}

/// Integer error code carried in a response error object
///
/// The named constants are the codes fixed by JSON-RPC 2.0 and by the
/// language server protocol; they are wire values and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(pub i32);

impl ErrorCode {
    /// Invalid JSON was received
    pub const PARSE_ERROR: Self = Self(-32700);
    /// The JSON sent is not a valid request object
    pub const INVALID_REQUEST: Self = Self(-32600);
    /// The method does not exist or is not available
    pub const METHOD_NOT_FOUND: Self = Self(-32601);
    /// Invalid method parameters
    pub const INVALID_PARAMS: Self = Self(-32602);
    /// Internal JSON-RPC error
    pub const INTERNAL_ERROR: Self = Self(-32603);

    /// Start of the JSON-RPC implementation band. Not a real error code.
    pub const JSONRPC_RESERVED_ERROR_RANGE_START: Self = Self(-32099);
    /// A request arrived before `initialize`
    pub const SERVER_NOT_INITIALIZED: Self = Self(-32002);
    /// Unknown error
    pub const UNKNOWN_ERROR_CODE: Self = Self(-32001);
    /// End of the JSON-RPC implementation band. Not a real error code.
    pub const JSONRPC_RESERVED_ERROR_RANGE_END: Self = Self(-32000);

    /// Start of the LSP band. Not a real error code.
    pub const LSP_RESERVED_ERROR_RANGE_START: Self = Self(-32899);
    /// A syntactically correct request failed; the message says why
    pub const REQUEST_FAILED: Self = Self(-32803);
    /// The server cancelled a request that supports server cancellation
    pub const SERVER_CANCELLED: Self = Self(-32802);
    /// The document changed outside normal conditions while computing
    pub const CONTENT_MODIFIED: Self = Self(-32801);
    /// The client cancelled the request and the server noticed
    pub const REQUEST_CANCELLED: Self = Self(-32800);
    /// End of the LSP band. Not a real error code.
    pub const LSP_RESERVED_ERROR_RANGE_END: Self = Self(-32800);

    /// Whether the code lies in the JSON-RPC implementation band
    pub fn is_jsonrpc_reserved(self) -> bool {
        (Self::JSONRPC_RESERVED_ERROR_RANGE_START.0..=Self::JSONRPC_RESERVED_ERROR_RANGE_END.0)
            .contains(&self.0)
    }

    /// Whether the code lies in the LSP band
    pub fn is_lsp_reserved(self) -> bool {
        (Self::LSP_RESERVED_ERROR_RANGE_START.0..=Self::LSP_RESERVED_ERROR_RANGE_END.0)
            .contains(&self.0)
    }

    /// Protocol name of a named code
    ///
    /// `-32800` reports `RequestCancelled`; the range-end marker shares its
    /// value but is not a code in its own right.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Self::PARSE_ERROR => "ParseError",
            Self::INVALID_REQUEST => "InvalidRequest",
            Self::METHOD_NOT_FOUND => "MethodNotFound",
            Self::INVALID_PARAMS => "InvalidParams",
            Self::INTERNAL_ERROR => "InternalError",
            Self::SERVER_NOT_INITIALIZED => "ServerNotInitialized",
            Self::UNKNOWN_ERROR_CODE => "UnknownErrorCode",
            Self::REQUEST_FAILED => "RequestFailed",
            Self::SERVER_CANCELLED => "ServerCancelled",
            Self::CONTENT_MODIFIED => "ContentModified",
            Self::REQUEST_CANCELLED => "RequestCancelled",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", self.0, name),
            None => write!(f, "{}", self.0),
        }
    }
}

impl From<i32> for ErrorCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

/// Response error object as it appears on the wire
///
/// ```json
/// {"code": -32801, "message": "content modified", "data": {...}}
/// ```
///
/// `data` is free-form; `initialize` uses it to carry an `InitializeError`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseError {
    /// Numeric error code
    pub code: ErrorCode,

    /// Short human-readable description
    pub message: String,

    /// Optional structured payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ResponseError {
    /// Create an error with code and message
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lspkit_core::{ErrorCode, ResponseError};
    ///
    /// let error = ResponseError::new(ErrorCode::UNKNOWN_ERROR_CODE, "something odd");
    /// assert!(error.data.is_none());
    /// ```
    pub fn new(code: impl Into<ErrorCode>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }

    /// Create an error carrying a structured payload
    pub fn with_data(
        code: impl Into<ErrorCode>,
        message: impl Into<String>,
        data: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: Some(data),
        }
    }

    /// Parse error (-32700)
    pub fn parse_error() -> Self {
        Self::new(ErrorCode::PARSE_ERROR, "Parse error")
    }

    /// Invalid request (-32600)
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::INVALID_REQUEST, msg)
    }

    /// Method not found (-32601)
    ///
    /// ```rust
    /// use lspkit_core::ResponseError;
    ///
    /// let error = ResponseError::method_not_found("textDocument/frobnicate");
    /// assert_eq!(error.message, "Method not found: textDocument/frobnicate");
    /// ```
    pub fn method_not_found(method: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::METHOD_NOT_FOUND,
            format!("Method not found: {}", method.into()),
        )
    }

    /// Invalid params (-32602)
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::INVALID_PARAMS, msg)
    }

    /// Internal error (-32603)
    pub fn internal_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::INTERNAL_ERROR, msg)
    }

    /// Server not initialized (-32002)
    pub fn server_not_initialized() -> Self {
        Self::new(ErrorCode::SERVER_NOT_INITIALIZED, "Server not initialized")
    }

    /// Request failed (-32803)
    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::REQUEST_FAILED, msg)
    }

    /// Server cancelled (-32802)
    pub fn server_cancelled() -> Self {
        Self::new(ErrorCode::SERVER_CANCELLED, "Server cancelled the request")
    }

    /// Content modified (-32801)
    pub fn content_modified() -> Self {
        Self::new(ErrorCode::CONTENT_MODIFIED, "Content modified")
    }

    /// Request cancelled (-32800)
    pub fn request_cancelled() -> Self {
        Self::new(ErrorCode::REQUEST_CANCELLED, "Request cancelled")
    }
}

impl fmt::Display for ResponseError {
    /// Formats as "[code] message", e.g. "[-32601] Method not found: foo"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.0, self.message)
    }
}

impl std::error::Error for ResponseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reserved_code_values() {
        assert_eq!(ErrorCode::LSP_RESERVED_ERROR_RANGE_START.0, -32899);
        assert_eq!(ErrorCode::REQUEST_FAILED.0, -32803);
        assert_eq!(ErrorCode::SERVER_CANCELLED.0, -32802);
        assert_eq!(ErrorCode::CONTENT_MODIFIED.0, -32801);
        assert_eq!(ErrorCode::REQUEST_CANCELLED.0, -32800);
        assert_eq!(ErrorCode::LSP_RESERVED_ERROR_RANGE_END.0, -32800);
        assert_eq!(ErrorCode::JSONRPC_RESERVED_ERROR_RANGE_START.0, -32099);
        assert_eq!(ErrorCode::SERVER_NOT_INITIALIZED.0, -32002);
        assert_eq!(ErrorCode::UNKNOWN_ERROR_CODE.0, -32001);
        assert_eq!(ErrorCode::JSONRPC_RESERVED_ERROR_RANGE_END.0, -32000);
    }

    #[test]
    fn test_reserved_bands() {
        for code in [
            ErrorCode::REQUEST_FAILED,
            ErrorCode::SERVER_CANCELLED,
            ErrorCode::CONTENT_MODIFIED,
            ErrorCode::REQUEST_CANCELLED,
        ] {
            assert!(code.is_lsp_reserved(), "{} should be in the LSP band", code);
            assert!(!code.is_jsonrpc_reserved());
        }

        assert!(ErrorCode::SERVER_NOT_INITIALIZED.is_jsonrpc_reserved());
        assert!(!ErrorCode::METHOD_NOT_FOUND.is_jsonrpc_reserved());
        assert!(!ErrorCode::METHOD_NOT_FOUND.is_lsp_reserved());
        assert!(!ErrorCode(-32900).is_lsp_reserved());
    }

    #[test]
    fn test_code_names() {
        assert_eq!(ErrorCode::REQUEST_CANCELLED.name(), Some("RequestCancelled"));
        assert_eq!(ErrorCode::CONTENT_MODIFIED.name(), Some("ContentModified"));
        assert_eq!(ErrorCode(1001).name(), None);
        assert_eq!(ErrorCode::SERVER_CANCELLED.to_string(), "-32802 (ServerCancelled)");
        assert_eq!(ErrorCode(7).to_string(), "7");
    }

    #[test]
    fn test_code_serializes_as_integer() {
        let error = ResponseError::content_modified();
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value, json!({"code": -32801, "message": "Content modified"}));
    }

    #[test]
    fn test_response_error_deserialization() {
        let json = r#"{"code":-32802,"message":"cancelled","data":{"retry":false}}"#;
        let error: ResponseError = serde_json::from_str(json).unwrap();

        assert_eq!(error.code, ErrorCode::SERVER_CANCELLED);
        assert_eq!(error.message, "cancelled");
        assert_eq!(error.data, Some(json!({"retry": false})));
    }

    #[test]
    fn test_response_error_display() {
        let error = ResponseError::method_not_found("unknownMethod");
        let display = format!("{}", error);

        assert!(display.contains("-32601"));
        assert!(display.contains("Method not found"));
    }

    #[test]
    fn test_standard_constructors() {
        let errors = vec![
            (ResponseError::parse_error(), -32700),
            (ResponseError::invalid_request("test"), -32600),
            (ResponseError::method_not_found("test"), -32601),
            (ResponseError::invalid_params("test"), -32602),
            (ResponseError::internal_error("test"), -32603),
            (ResponseError::server_not_initialized(), -32002),
            (ResponseError::request_failed("test"), -32803),
            (ResponseError::server_cancelled(), -32802),
            (ResponseError::content_modified(), -32801),
            (ResponseError::request_cancelled(), -32800),
        ];

        for (error, expected_code) in errors {
            assert_eq!(error.code.0, expected_code);
            assert!(!error.message.is_empty());
        }
    }

    #[test]
    fn test_decode_failures_map_to_invalid_params() {
        let mismatch = Error::ShapeMismatch {
            field: "hoverProvider".into(),
            source: ShapeMismatch {
                union: "HoverProviderCapability",
                candidate: "Options",
                attempts: 2,
                found: "number",
                message: "invalid type".into(),
            },
        };
        assert!(mismatch.is_decode_failure());
        assert_eq!(mismatch.field(), Some("hoverProvider"));
        assert_eq!(mismatch.to_response_error().code, ErrorCode::INVALID_PARAMS);

        let missing = Error::MissingField { field: "textDocument".into() };
        assert_eq!(missing.to_response_error().code, ErrorCode::INVALID_PARAMS);
        assert!(missing.to_string().contains("textDocument"));
    }

    #[test]
    fn test_other_errors_map_to_their_codes() {
        let not_found = Error::MethodNotFound("foo/bar".into());
        assert_eq!(not_found.to_response_error().code, ErrorCode::METHOD_NOT_FOUND);
        assert!(!not_found.is_decode_failure());

        let internal = Error::Internal("boom".into());
        assert_eq!(internal.to_response_error().code, ErrorCode::INTERNAL_ERROR);

        let passthrough = Error::from(ResponseError::content_modified());
        assert_eq!(passthrough.to_response_error(), ResponseError::content_modified());
    }

    #[test]
    fn test_not_an_object_display() {
        let root = Error::NotAnObject { path: String::new(), found: "array" };
        assert_eq!(root.to_string(), "expected a JSON object, found array");

        let nested = Error::NotAnObject { path: "capabilities".into(), found: "string" };
        assert_eq!(
            nested.to_string(),
            "expected a JSON object at `capabilities`, found string"
        );
    }

    #[test]
    fn test_shape_mismatch_display() {
        let mismatch = ShapeMismatch {
            union: "HoverProviderCapability",
            candidate: "Options",
            attempts: 2,
            found: "number",
            message: "invalid type: integer `3`, expected struct HoverOptions".into(),
        };
        let display = mismatch.to_string();
        assert!(display.starts_with("number matched none of the 2 shapes of HoverProviderCapability"));
        assert!(display.contains("last tried Options"));
    }
}
