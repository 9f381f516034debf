//! Client capabilities, protocol revision 3.17
//!
//! Each extended sub-record holds its 3.16 counterpart as a flattened base
//! plus the fields 3.17 adds; both decode from the same JSON object.

use super::diagnostic::{DiagnosticClientCapabilities, DiagnosticWorkspaceClientCapabilities};
use super::inlay_hint::{InlayHintClientCapabilities, InlayHintWorkspaceClientCapabilities};
use super::inline_value::{InlineValueClientCapabilities, InlineValueWorkspaceClientCapabilities};
use super::position_encoding::PositionEncodingKind;
use super::type_hierarchy::TypeHierarchyClientCapabilities;
use crate::v3_16;
use lspkit_core::Aggregate;
use serde::{Deserialize, Serialize};

/// Which stale requests the client cancels, and which it retries after a
/// `ContentModified` error
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaleRequestSupport {
    pub cancel: bool,
    pub retry_on_content_modified: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct GeneralClientCapabilities {
    #[wire(base)]
    #[serde(flatten)]
    pub base: v3_16::GeneralClientCapabilities,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale_request_support: Option<StaleRequestSupport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_encodings: Option<Vec<PositionEncodingKind>>,
}

impl GeneralClientCapabilities {
    /// Encodings the client accepts, in its order of preference
    ///
    /// A client that lists none only speaks UTF-16.
    pub fn offered_position_encodings(&self) -> Vec<PositionEncodingKind> {
        match &self.position_encodings {
            Some(offered) if !offered.is_empty() => offered.clone(),
            _ => vec![PositionEncodingKind::UTF16],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceClientCapabilities {
    #[wire(base)]
    #[serde(flatten)]
    pub base: v3_16::WorkspaceClientCapabilities,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inlay_hint: Option<InlayHintWorkspaceClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_value: Option<InlineValueWorkspaceClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<DiagnosticWorkspaceClientCapabilities>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentClientCapabilities {
    #[wire(base)]
    #[serde(flatten)]
    pub base: v3_16::TextDocumentClientCapabilities,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<DiagnosticClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_hierarchy: Option<TypeHierarchyClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inlay_hint: Option<InlayHintClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_value: Option<InlineValueClientCapabilities>,
}

/// Capabilities a 3.17 client announces in `initialize`
pub type ClientCapabilities = v3_16::ClientCapabilities<
    WorkspaceClientCapabilities,
    TextDocumentClientCapabilities,
    GeneralClientCapabilities,
>;
