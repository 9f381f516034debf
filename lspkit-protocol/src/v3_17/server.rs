//! Server capabilities, protocol revision 3.17

use super::diagnostic::DiagnosticServerCapabilities;
use super::inlay_hint::InlayHintProviderCapability;
use super::inline_value::InlineValueProviderCapability;
use super::type_hierarchy::TypeHierarchyProviderCapability;
use crate::v3_16;
use lspkit_core::Aggregate;
use serde::Serialize;

/// The 3.16 server capabilities plus the four providers 3.17 adds
///
/// A 3.16 capability object decodes as a 3.17 one with the new providers
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct ServerCapabilities {
    #[wire(base)]
    #[serde(flatten)]
    pub base: v3_16::ServerCapabilities,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic_provider: Option<DiagnosticServerCapabilities>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_hierarchy_provider: Option<TypeHierarchyProviderCapability>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inlay_hint_provider: Option<InlayHintProviderCapability>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_value_provider: Option<InlineValueProviderCapability>,
}

impl From<v3_16::ServerCapabilities> for ServerCapabilities {
    fn from(base: v3_16::ServerCapabilities) -> Self {
        Self {
            base,
            ..Default::default()
        }
    }
}
