//! Type hierarchy (`textDocument/prepareTypeHierarchy`,
//! `typeHierarchy/supertypes`, `typeHierarchy/subtypes`)

use crate::base::{
    DocumentUri, LspAny, PartialResultParams, Range, StaticRegistrationOptions, SymbolKind,
    SymbolTag, TextDocumentPositionParams, TextDocumentRegistrationOptions,
    WorkDoneProgressOptions, WorkDoneProgressParams,
};
use crate::v3_16::server::{registration_options, work_done_options};
use lspkit_core::{Aggregate, TrialDecode};
use serde::{Deserialize, Serialize};

pub use crate::v3_16::client::DynamicRegistrationClientCapabilities as TypeHierarchyClientCapabilities;

work_done_options!(TypeHierarchyOptions);

registration_options!(TypeHierarchyRegistrationOptions => TypeHierarchyOptions);

/// `typeHierarchyProvider`
#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum TypeHierarchyProviderCapability {
    Bool(bool),
    RegistrationOptions(TypeHierarchyRegistrationOptions),
    Options(TypeHierarchyOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Aggregate)]
pub struct TypeHierarchyPrepareParams {
    #[wire(base)]
    #[serde(flatten)]
    pub text_document_position_params: TextDocumentPositionParams,
    #[wire(base)]
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
}

/// One node of a type hierarchy
///
/// `data` is opaque to the client and handed back unchanged in the
/// supertypes and subtypes requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeHierarchyItem {
    pub name: String,
    pub kind: SymbolKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<SymbolTag>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub uri: DocumentUri,
    pub range: Range,
    pub selection_range: Range,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<LspAny>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Aggregate)]
pub struct TypeHierarchySupertypesParams {
    #[wire(base)]
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    #[wire(base)]
    #[serde(flatten)]
    pub partial_result_params: PartialResultParams,
    pub item: TypeHierarchyItem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Aggregate)]
pub struct TypeHierarchySubtypesParams {
    #[wire(base)]
    #[serde(flatten)]
    pub work_done_progress_params: WorkDoneProgressParams,
    #[wire(base)]
    #[serde(flatten)]
    pub partial_result_params: PartialResultParams,
    pub item: TypeHierarchyItem,
}
