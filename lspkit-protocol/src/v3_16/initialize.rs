//! `initialize` handshake records, protocol revision 3.16

use super::client::ClientCapabilities;
use super::server::ServerCapabilities;
use crate::base::{DocumentUri, LspAny, PeerInfo, TraceValue, WorkDoneProgressParams, WorkspaceFolder};
use lspkit_core::Aggregate;
use serde::{Deserialize, Serialize};

/// Params of the `initialize` request
///
/// `processId` and `rootUri` must be present but may be `null`. `C` is the
/// client capability record of the revision in use.
#[derive(Debug, Clone, PartialEq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams<C = ClientCapabilities> {
    #[wire(base)]
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    #[wire(required)]
    pub process_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_info: Option<PeerInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_path: Option<String>,
    #[wire(required)]
    pub root_uri: Option<DocumentUri>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initialization_options: Option<LspAny>,
    #[wire(nested)]
    pub capabilities: C,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<TraceValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_folders: Option<Vec<WorkspaceFolder>>,
}

impl<C: Default> Default for InitializeParams<C> {
    fn default() -> Self {
        Self {
            work_done_progress_params: WorkDoneProgressParams::default(),
            process_id: None,
            client_info: None,
            locale: None,
            root_path: None,
            root_uri: None,
            initialization_options: None,
            capabilities: C::default(),
            trace: None,
            workspace_folders: None,
        }
    }
}

/// Result of the `initialize` request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult<S = ServerCapabilities> {
    #[wire(nested)]
    pub capabilities: S,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_info: Option<PeerInfo>,
}

/// `data` of an `initialize` error response
///
/// With `retry: true` the client may show the message and retry the
/// handshake.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializeError {
    pub retry: bool,
}

/// Params of the `initialized` notification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Aggregate)]
pub struct InitializedParams {}
