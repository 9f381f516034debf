//! Basic structures shared by every protocol revision
//!
//! Free-form payloads (`data`, `experimental`, `initializationOptions`) are
//! [`LspAny`]; everything else is typed. Records that appear as a candidate
//! of a union, or as a layer of a larger record, derive [`Aggregate`] so they
//! are decoded strictly from a JSON object. Leaf records such as
//! [`Position`] use plain serde.

use lspkit_core::{Aggregate, TrialDecode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Any JSON value
pub type LspAny = Value;

/// A JSON object
pub type LspObject = Map<String, Value>;

/// A JSON array
pub type LspArray = Vec<Value>;

/// URI of a text document
pub type DocumentUri = String;

/// Any other URI
pub type Uri = String;

/// `integer | string`
#[derive(Debug, Clone, PartialEq, Eq, Hash, TrialDecode)]
pub enum IntegerOrString {
    Integer(i32),
    String(String),
}

/// Token used to report progress, chosen by whoever starts the work
pub type ProgressToken = IntegerOrString;

/// JSON-RPC request id
pub type RequestId = IntegerOrString;

impl From<i32> for IntegerOrString {
    fn from(value: i32) -> Self {
        IntegerOrString::Integer(value)
    }
}

impl From<&str> for IntegerOrString {
    fn from(value: &str) -> Self {
        IntegerOrString::String(value.to_string())
    }
}

/// Zero-based line and character offset
///
/// How `character` counts depends on the negotiated position encoding
/// (UTF-16 code units unless something else was agreed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Half-open range between two positions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub uri: DocumentUri,
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextDocumentIdentifier {
    pub uri: DocumentUri,
}

/// A text document plus a position inside it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentPositionParams {
    pub text_document: TextDocumentIdentifier,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEdit {
    pub range: Range,
    pub new_text: String,
}

/// Reference to a command registered on the client or server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub title: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<LspAny>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkupKind {
    #[serde(rename = "plaintext")]
    PlainText,
    #[serde(rename = "markdown")]
    Markdown,
}

/// Human-readable text in plain text or markdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupContent {
    pub kind: MarkupKind,
    pub value: String,
}

/// Symbol kind as an open integer set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolKind(pub i32);

impl SymbolKind {
    pub const FILE: Self = Self(1);
    pub const MODULE: Self = Self(2);
    pub const NAMESPACE: Self = Self(3);
    pub const PACKAGE: Self = Self(4);
    pub const CLASS: Self = Self(5);
    pub const METHOD: Self = Self(6);
    pub const PROPERTY: Self = Self(7);
    pub const FIELD: Self = Self(8);
    pub const CONSTRUCTOR: Self = Self(9);
    pub const ENUM: Self = Self(10);
    pub const INTERFACE: Self = Self(11);
    pub const FUNCTION: Self = Self(12);
    pub const VARIABLE: Self = Self(13);
    pub const CONSTANT: Self = Self(14);
    pub const STRING: Self = Self(15);
    pub const NUMBER: Self = Self(16);
    pub const BOOLEAN: Self = Self(17);
    pub const ARRAY: Self = Self(18);
    pub const OBJECT: Self = Self(19);
    pub const KEY: Self = Self(20);
    pub const NULL: Self = Self(21);
    pub const ENUM_MEMBER: Self = Self(22);
    pub const STRUCT: Self = Self(23);
    pub const EVENT: Self = Self(24);
    pub const OPERATOR: Self = Self(25);
    pub const TYPE_PARAMETER: Self = Self(26);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolTag(pub i32);

impl SymbolTag {
    pub const DEPRECATED: Self = Self(1);
}

/// Adds an optional `workDoneToken` to request params
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct WorkDoneProgressParams {
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
}

/// Adds an optional `partialResultToken` to request params
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct PartialResultParams {
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_result_token: Option<ProgressToken>,
}

/// Base of most server `XxxOptions` records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct WorkDoneProgressOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

pub type DocumentSelector = Vec<DocumentFilter>;

/// Base of every `XxxRegistrationOptions` record
///
/// `documentSelector` must be present; `null` means "use the selector the
/// client provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentRegistrationOptions {
    #[wire(required)]
    pub document_selector: Option<DocumentSelector>,
}

/// Registration id usable to unregister later
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
pub struct StaticRegistrationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceValue {
    Off,
    Messages,
    Verbose,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceFolder {
    pub uri: Uri,
    pub name: String,
}

/// `name` and optional `version` of a client or server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Params of `$/cancelRequest`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Aggregate)]
pub struct CancelParams {
    #[wire(ambiguous)]
    pub id: RequestId,
}
