//! Inlay hints (`textDocument/inlayHint`, `inlayHint/resolve`,
//! `workspace/inlayHint/refresh`)
//!
//! A hint's `label` is a plain string or a list of label parts, and both the
//! hint and each part may carry a `tooltip` that is a string or markup. All
//! three slots are explicit sum types.

use crate::base::{
    Command, LspAny, Location, MarkupContent, Position, Range, StaticRegistrationOptions,
    TextDocumentIdentifier, TextDocumentRegistrationOptions, TextEdit, WorkDoneProgressOptions,
    WorkDoneProgressParams,
};
use crate::v3_16::server::registration_options;
use lspkit_core::{Aggregate, TrialDecode};
use serde::{Deserialize, Serialize};

pub use crate::v3_16::client::RefreshClientCapabilities as InlayHintWorkspaceClientCapabilities;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlayHintResolveSupport {
    pub properties: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlayHintClientCapabilities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolve_support: Option<InlayHintResolveSupport>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct InlayHintOptions {
    #[wire(base)]
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_provider: Option<bool>,
}

registration_options!(InlayHintRegistrationOptions => InlayHintOptions);

/// `inlayHintProvider`
#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum InlayHintProviderCapability {
    Bool(bool),
    RegistrationOptions(InlayHintRegistrationOptions),
    Options(InlayHintOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct InlayHintParams {
    #[wire(base)]
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    pub text_document: TextDocumentIdentifier,
    pub range: Range,
}

/// Open integer set; the protocol defines `Type` and `Parameter`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InlayHintKind(pub i32);

impl InlayHintKind {
    pub const TYPE: Self = Self(1);
    pub const PARAMETER: Self = Self(2);
}

/// `string | MarkupContent`
#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum InlayHintTooltip {
    String(String),
    MarkupContent(MarkupContent),
}

#[derive(Debug, Clone, PartialEq, Serialize, Aggregate)]
pub struct InlayHintLabelPart {
    pub value: String,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<InlayHintTooltip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
}

/// `string | InlayHintLabelPart[]`
#[derive(Debug, Clone, PartialEq, TrialDecode)]
pub enum InlayHintLabel {
    String(String),
    LabelParts(Vec<InlayHintLabelPart>),
}

impl From<&str> for InlayHintLabel {
    fn from(label: &str) -> Self {
        InlayHintLabel::String(label.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct InlayHint {
    pub position: Position,
    #[wire(ambiguous)]
    pub label: InlayHintLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<InlayHintKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_edits: Option<Vec<TextEdit>>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<InlayHintTooltip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<LspAny>,
}

impl InlayHint {
    pub fn new(position: Position, label: impl Into<InlayHintLabel>) -> Self {
        Self {
            position,
            label: label.into(),
            kind: None,
            text_edits: None,
            tooltip: None,
            padding_left: None,
            padding_right: None,
            data: None,
        }
    }
}
