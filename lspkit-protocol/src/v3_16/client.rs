//! Client capabilities, protocol revision 3.16
//!
//! [`ClientCapabilities`] is generic over its `workspace`, `textDocument` and
//! `general` sub-records. Revision 3.17 extends exactly those three, so it
//! reuses this container with its own sub-records instead of redeclaring the
//! keys (which would emit them twice).
//!
//! Capability groups whose internals nothing in this crate inspects
//! (`completion`, `codeAction`, `publishDiagnostics`, ...) are kept as raw
//! [`LspObject`]s so they survive a decode/encode cycle untouched.

use crate::base::{LspAny, LspObject, MarkupKind};
use lspkit_core::Aggregate;
use serde::{Deserialize, Serialize};

/// `{ dynamicRegistration?: boolean }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicRegistrationClientCapabilities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
}

/// Shared by declaration, definition, typeDefinition and implementation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GotoClientCapabilities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_support: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshClientCapabilities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_support: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentSyncClientCapabilities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub will_save: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub will_save_wait_until: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did_save: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverClientCapabilities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_format: Option<Vec<MarkupKind>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegularExpressionsClientCapabilities {
    pub engine: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownClientCapabilities {
    pub parser: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowDocumentClientCapabilities {
    pub support: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct WindowClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_done_progress: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_message: Option<LspObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_document: Option<ShowDocumentClientCapabilities>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct GeneralClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_expressions: Option<RegularExpressionsClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<MarkdownClientCapabilities>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_edit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_edit: Option<LspObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_change_configuration: Option<DynamicRegistrationClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_change_watched_files: Option<DynamicRegistrationClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<LspObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execute_command: Option<DynamicRegistrationClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_folders: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_tokens: Option<RefreshClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_lens: Option<RefreshClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_operations: Option<LspObject>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentClientCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronization: Option<TextDocumentSyncClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion: Option<LspObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<HoverClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_help: Option<LspObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration: Option<GotoClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<GotoClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_definition: Option<GotoClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation: Option<GotoClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<DynamicRegistrationClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_highlight: Option<DynamicRegistrationClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_symbol: Option<LspObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_action: Option<LspObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_lens: Option<DynamicRegistrationClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_link: Option<LspObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_provider: Option<DynamicRegistrationClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatting: Option<DynamicRegistrationClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_formatting: Option<DynamicRegistrationClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_type_formatting: Option<DynamicRegistrationClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rename: Option<LspObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_diagnostics: Option<LspObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folding_range: Option<LspObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_range: Option<DynamicRegistrationClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_editing_range: Option<DynamicRegistrationClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_hierarchy: Option<DynamicRegistrationClientCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_tokens: Option<LspObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moniker: Option<DynamicRegistrationClientCapabilities>,
}

/// Capabilities a client announces in `initialize`
///
/// `W`, `T` and `G` are the workspace, text document and general
/// sub-records of the protocol revision in use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct ClientCapabilities<
    W = WorkspaceClientCapabilities,
    T = TextDocumentClientCapabilities,
    G = GeneralClientCapabilities,
> {
    #[wire(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<W>,
    #[wire(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_document: Option<T>,
    #[wire(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowClientCapabilities>,
    #[wire(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general: Option<G>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experimental: Option<LspAny>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use lspkit_core::{codec, Error};
    use serde_json::{json, Value};

    #[test]
    fn test_client_capabilities_round_trip() {
        let raw = json!({
            "workspace": {"applyEdit": true, "workspaceEdit": {"documentChanges": true}},
            "textDocument": {
                "hover": {"contentFormat": ["markdown", "plaintext"]},
                "completion": {"completionItem": {"snippetSupport": true}},
                "definition": {"linkSupport": true}
            },
            "window": {"workDoneProgress": true},
            "general": {"markdown": {"parser": "marked", "version": "1.1.0"}},
            "experimental": {"anything": [1, 2, 3]}
        });

        let caps: ClientCapabilities = codec::decode(&raw).unwrap();
        let text_document = caps.text_document.as_ref().unwrap();
        assert_eq!(
            text_document.hover.as_ref().unwrap().content_format,
            Some(vec![MarkupKind::Markdown, MarkupKind::PlainText])
        );
        assert_eq!(Value::Object(codec::encode_object(&caps).unwrap()), raw);
    }

    #[test]
    fn test_nested_error_carries_path() {
        let err = codec::decode::<ClientCapabilities>(&json!({
            "textDocument": {"hover": {"contentFormat": ["html"]}}
        }))
        .unwrap_err();
        match err {
            Error::MalformedPrimitive { field, .. } => assert_eq!(field, "textDocument.hover"),
            other => panic!("unexpected error: {:?}", other),
        }

        let err = codec::decode::<ClientCapabilities>(&json!({"workspace": true})).unwrap_err();
        assert!(matches!(err, Error::NotAnObject { ref path, found: "boolean" } if path == "workspace"));
    }
}
