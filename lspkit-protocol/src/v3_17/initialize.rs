//! `initialize` handshake records, protocol revision 3.17

use super::client::ClientCapabilities;
use super::position_encoding::PositionEncodingKind;
use super::server::ServerCapabilities;
use crate::v3_16;
use lspkit_core::Aggregate;
use serde::Serialize;

pub use crate::v3_16::{InitializeError, InitializedParams};

/// Params of the `initialize` request with 3.17 client capabilities
pub type InitializeParams = v3_16::InitializeParams<ClientCapabilities>;

/// Result of the `initialize` request
///
/// Adds the position encoding the server chose. Absent means UTF-16.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    #[wire(base)]
    #[serde(flatten)]
    pub base: v3_16::InitializeResult<ServerCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_encoding: Option<PositionEncodingKind>,
}

impl InitializeResult {
    pub fn new(capabilities: ServerCapabilities) -> Self {
        Self {
            base: v3_16::InitializeResult {
                capabilities,
                server_info: None,
            },
            position_encoding: None,
        }
    }

    /// Encoding both sides use for `Position::character`
    pub fn effective_position_encoding(&self) -> PositionEncodingKind {
        PositionEncodingKind::effective(self.position_encoding.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lspkit_core::codec;
    use serde_json::{json, Value};

    #[test]
    fn test_initialize_params_with_317_capabilities() {
        let params: InitializeParams = codec::decode(&json!({
            "processId": null,
            "rootUri": "file:///work",
            "capabilities": {
                "general": {"positionEncodings": ["utf-32"]},
                "textDocument": {"typeHierarchy": {"dynamicRegistration": true}}
            }
        }))
        .unwrap();

        let general = params.capabilities.general.unwrap();
        assert_eq!(general.position_encodings, Some(vec![PositionEncodingKind::UTF32]));
        let text_document = params.capabilities.text_document.unwrap();
        assert_eq!(
            text_document.type_hierarchy.unwrap().dynamic_registration,
            Some(true)
        );
    }

    #[test]
    fn test_initialize_result_position_encoding() {
        let raw = json!({
            "capabilities": {"inlineValueProvider": true},
            "serverInfo": {"name": "lspkit-demo", "version": "1.0"},
            "positionEncoding": "utf-8"
        });
        let result: InitializeResult = codec::decode(&raw).unwrap();
        assert_eq!(result.effective_position_encoding(), PositionEncodingKind::UTF8);
        assert_eq!(result.base.server_info.as_ref().unwrap().name, "lspkit-demo");
        assert_eq!(Value::Object(codec::encode_object(&result).unwrap()), raw);

        let result = InitializeResult::new(ServerCapabilities::default());
        assert_eq!(result.effective_position_encoding(), PositionEncodingKind::UTF16);
        assert_eq!(
            Value::Object(codec::encode_object(&result).unwrap()),
            json!({"capabilities": {}})
        );
    }
}
