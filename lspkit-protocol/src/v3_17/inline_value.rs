//! Inline values (`textDocument/inlineValue`, `workspace/inlineValue/refresh`)

use crate::base::{
    Range, StaticRegistrationOptions, TextDocumentIdentifier, TextDocumentRegistrationOptions,
    WorkDoneProgressOptions, WorkDoneProgressParams,
};
use crate::v3_16::server::{registration_options, work_done_options};
use lspkit_core::{Aggregate, TrialDecode};
use serde::{Deserialize, Serialize};

pub use crate::v3_16::client::DynamicRegistrationClientCapabilities as InlineValueClientCapabilities;
pub use crate::v3_16::client::RefreshClientCapabilities as InlineValueWorkspaceClientCapabilities;

work_done_options!(InlineValueOptions);

registration_options!(InlineValueRegistrationOptions => InlineValueOptions);

/// `inlineValueProvider`
#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum InlineValueProviderCapability {
    Bool(bool),
    RegistrationOptions(InlineValueRegistrationOptions),
    Options(InlineValueOptions),
}

/// Where the debuggee stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineValueContext {
    /// Stack frame id as the debug adapter reports it
    pub frame_id: i32,
    pub stopped_location: Range,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct InlineValueParams {
    #[wire(base)]
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    pub text_document: TextDocumentIdentifier,
    pub range: Range,
    pub context: InlineValueContext,
}

/// The value given directly as text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Aggregate)]
pub struct InlineValueText {
    pub range: Range,
    pub text: String,
}

/// The value looked up by variable name; without `variableName` the name is
/// taken from the document at `range`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct InlineValueVariableLookup {
    pub range: Range,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,
    pub case_sensitive_lookup: bool,
}

/// The value computed by evaluating an expression; without `expression` it
/// is taken from the document at `range`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Aggregate)]
pub struct InlineValueEvaluatableExpression {
    pub range: Range,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

/// One inline value
///
/// The expression shape accepts any object with a `range`, so it is tried
/// last.
#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum InlineValue {
    Text(InlineValueText),
    VariableLookup(InlineValueVariableLookup),
    EvaluatableExpression(InlineValueEvaluatableExpression),
}
