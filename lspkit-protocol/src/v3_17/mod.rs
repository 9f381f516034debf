//! Protocol revision 3.17
//!
//! An additive layer over [`crate::v3_16`]: every extended record embeds its
//! 3.16 counterpart and adds optional fields, so any valid 3.16 payload
//! decodes here too.

pub mod client;
pub mod diagnostic;
pub mod initialize;
pub mod inlay_hint;
pub mod inline_value;
pub mod position_encoding;
pub mod server;
pub mod type_hierarchy;

pub use client::{
    ClientCapabilities, GeneralClientCapabilities, StaleRequestSupport,
    TextDocumentClientCapabilities, WorkspaceClientCapabilities,
};
pub use diagnostic::{DiagnosticOptions, DiagnosticRegistrationOptions, DiagnosticServerCapabilities};
pub use initialize::{InitializeError, InitializeParams, InitializeResult, InitializedParams};
pub use inlay_hint::{
    InlayHint, InlayHintKind, InlayHintLabel, InlayHintLabelPart, InlayHintOptions,
    InlayHintParams, InlayHintProviderCapability, InlayHintRegistrationOptions, InlayHintTooltip,
};
pub use inline_value::{
    InlineValue, InlineValueContext, InlineValueEvaluatableExpression, InlineValueOptions,
    InlineValueParams, InlineValueProviderCapability, InlineValueRegistrationOptions,
    InlineValueText, InlineValueVariableLookup,
};
pub use position_encoding::PositionEncodingKind;
pub use server::ServerCapabilities;
pub use type_hierarchy::{
    TypeHierarchyItem, TypeHierarchyOptions, TypeHierarchyPrepareParams,
    TypeHierarchyProviderCapability, TypeHierarchyRegistrationOptions,
    TypeHierarchySubtypesParams, TypeHierarchySupertypesParams,
};
