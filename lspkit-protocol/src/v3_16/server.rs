//! Server capabilities, protocol revision 3.16
//!
//! Most `xxxProvider` fields are untagged unions. Every union lists its
//! candidates in trial order:
//!
//! 1. `bool` (or another primitive)
//! 2. `XxxRegistrationOptions`, which requires `documentSelector`
//! 3. `XxxOptions`, which is optional-only and accepts any object
//!
//! Swapping 2 and 3 would make the registration shape unreachable.

use crate::base::{
    DocumentSelector, LspAny, LspObject, StaticRegistrationOptions,
    TextDocumentRegistrationOptions, WorkDoneProgressOptions,
};
use lspkit_core::{Aggregate, TrialDecode};
use serde::{Deserialize, Serialize};

/// Declares `XxxOptions` records that carry nothing beyond
/// `workDoneProgress`.
macro_rules! work_done_options {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
            pub struct $name {
                #[wire(base)]
                #[serde(flatten)]
                pub work_done_progress_options: WorkDoneProgressOptions,
            }
        )*
    };
}

/// Declares `XxxRegistrationOptions` records: a document selector, the
/// options record and an optional registration id, all in one object.
macro_rules! registration_options {
    ($($(#[$meta:meta])* $name:ident => $options:ty),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
            pub struct $name {
                #[wire(base)]
                #[serde(flatten)]
                pub text_document_registration_options: TextDocumentRegistrationOptions,
                #[wire(base)]
                #[serde(flatten)]
                pub options: $options,
                #[wire(base)]
                #[serde(flatten)]
                pub static_registration_options: StaticRegistrationOptions,
            }
        )*
    };
}

pub(crate) use registration_options;
pub(crate) use work_done_options;

work_done_options!(
    HoverOptions,
    DeclarationOptions,
    DefinitionOptions,
    TypeDefinitionOptions,
    ImplementationOptions,
    ReferenceOptions,
    DocumentHighlightOptions,
    DocumentColorOptions,
    DocumentFormattingOptions,
    DocumentRangeFormattingOptions,
    FoldingRangeOptions,
    SelectionRangeOptions,
    LinkedEditingRangeOptions,
    CallHierarchyOptions,
    MonikerOptions,
    WorkspaceSymbolOptions,
);

registration_options!(
    DeclarationRegistrationOptions => DeclarationOptions,
    TypeDefinitionRegistrationOptions => TypeDefinitionOptions,
    ImplementationRegistrationOptions => ImplementationOptions,
    DocumentColorRegistrationOptions => DocumentColorOptions,
    FoldingRangeRegistrationOptions => FoldingRangeOptions,
    SelectionRangeRegistrationOptions => SelectionRangeOptions,
    LinkedEditingRangeRegistrationOptions => LinkedEditingRangeOptions,
    CallHierarchyRegistrationOptions => CallHierarchyOptions,
    SemanticTokensRegistrationOptions => SemanticTokensOptions,
);

/// Moniker registration has no registration id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
pub struct MonikerRegistrationOptions {
    #[wire(base)]
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,
    #[wire(base)]
    #[serde(flatten)]
    pub options: MonikerOptions,
}

impl TextDocumentRegistrationOptions {
    /// Registration for the given selector
    pub fn new(document_selector: Option<DocumentSelector>) -> Self {
        Self { document_selector }
    }
}

/// How the client syncs document changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextDocumentSyncKind(pub i32);

impl TextDocumentSyncKind {
    pub const NONE: Self = Self(0);
    pub const FULL: Self = Self(1);
    pub const INCREMENTAL: Self = Self(2);
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct SaveOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_text: Option<bool>,
}

/// `save` of [`TextDocumentSyncOptions`]
#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum TextDocumentSyncSave {
    Bool(bool),
    Options(SaveOptions),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentSyncOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_close: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<TextDocumentSyncKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_save: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_save_wait_until: Option<bool>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save: Option<TextDocumentSyncSave>,
}

/// `textDocumentSync`: a bare kind or the full options record
#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum TextDocumentSyncCapability {
    Kind(TextDocumentSyncKind),
    Options(TextDocumentSyncOptions),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct CompletionOptions {
    #[wire(base)]
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_characters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_commit_characters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_provider: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct SignatureHelpOptions {
    #[wire(base)]
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_characters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrigger_characters: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct CodeLensOptions {
    #[wire(base)]
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_provider: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct DocumentLinkOptions {
    #[wire(base)]
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_provider: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct DocumentOnTypeFormattingOptions {
    pub first_trigger_character: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_trigger_character: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteCommandOptions {
    #[wire(base)]
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
    pub commands: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSymbolOptions {
    #[wire(base)]
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct CodeActionOptions {
    #[wire(base)]
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_action_kinds: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_provider: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct RenameOptions {
    #[wire(base)]
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepare_provider: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTokensLegend {
    pub token_types: Vec<String>,
    pub token_modifiers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
pub struct SemanticTokensFullOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<bool>,
}

/// `range` of [`SemanticTokensOptions`]: a flag or an (empty) object
#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum SemanticTokensRange {
    Bool(bool),
    Object(LspObject),
}

/// `full` of [`SemanticTokensOptions`]
#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum SemanticTokensFull {
    Bool(bool),
    Options(SemanticTokensFullOptions),
}

/// Unlike most options records this one has a required `legend`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
pub struct SemanticTokensOptions {
    #[wire(base)]
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
    pub legend: SemanticTokensLegend,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<SemanticTokensRange>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full: Option<SemanticTokensFull>,
}

#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum HoverProviderCapability {
    Bool(bool),
    Options(HoverOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum DeclarationProviderCapability {
    Bool(bool),
    RegistrationOptions(DeclarationRegistrationOptions),
    Options(DeclarationOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum DefinitionProviderCapability {
    Bool(bool),
    Options(DefinitionOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum TypeDefinitionProviderCapability {
    Bool(bool),
    RegistrationOptions(TypeDefinitionRegistrationOptions),
    Options(TypeDefinitionOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum ImplementationProviderCapability {
    Bool(bool),
    RegistrationOptions(ImplementationRegistrationOptions),
    Options(ImplementationOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum ReferencesProviderCapability {
    Bool(bool),
    Options(ReferenceOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum DocumentHighlightProviderCapability {
    Bool(bool),
    Options(DocumentHighlightOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum DocumentSymbolProviderCapability {
    Bool(bool),
    Options(DocumentSymbolOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum CodeActionProviderCapability {
    Bool(bool),
    Options(CodeActionOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum ColorProviderCapability {
    Bool(bool),
    RegistrationOptions(DocumentColorRegistrationOptions),
    Options(DocumentColorOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum DocumentFormattingProviderCapability {
    Bool(bool),
    Options(DocumentFormattingOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum DocumentRangeFormattingProviderCapability {
    Bool(bool),
    Options(DocumentRangeFormattingOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum RenameProviderCapability {
    Bool(bool),
    Options(RenameOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum FoldingRangeProviderCapability {
    Bool(bool),
    RegistrationOptions(FoldingRangeRegistrationOptions),
    Options(FoldingRangeOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum SelectionRangeProviderCapability {
    Bool(bool),
    RegistrationOptions(SelectionRangeRegistrationOptions),
    Options(SelectionRangeOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum LinkedEditingRangeProviderCapability {
    Bool(bool),
    RegistrationOptions(LinkedEditingRangeRegistrationOptions),
    Options(LinkedEditingRangeOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum CallHierarchyProviderCapability {
    Bool(bool),
    RegistrationOptions(CallHierarchyRegistrationOptions),
    Options(CallHierarchyOptions),
}

/// No boolean form: semantic tokens always need a legend
#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum SemanticTokensServerCapabilities {
    RegistrationOptions(SemanticTokensRegistrationOptions),
    Options(SemanticTokensOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum MonikerProviderCapability {
    Bool(bool),
    RegistrationOptions(MonikerRegistrationOptions),
    Options(MonikerOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum WorkspaceSymbolProviderCapability {
    Bool(bool),
    Options(WorkspaceSymbolOptions),
}

/// `changeNotifications`: a flag, or the id to unregister with later
#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum ChangeNotifications {
    Bool(bool),
    Id(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceFoldersServerCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported: Option<bool>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_notifications: Option<ChangeNotifications>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOperationPatternKind {
    File,
    Folder,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOperationPatternOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_case: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOperationPattern {
    pub glob: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<FileOperationPatternKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<FileOperationPatternOptions>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOperationFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    pub pattern: FileOperationPattern,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOperationRegistrationOptions {
    pub filters: Vec<FileOperationFilter>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct FileOperationsServerCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_create: Option<FileOperationRegistrationOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_create: Option<FileOperationRegistrationOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_rename: Option<FileOperationRegistrationOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_rename: Option<FileOperationRegistrationOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_delete: Option<FileOperationRegistrationOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_delete: Option<FileOperationRegistrationOptions>,
}

/// `workspace` of [`ServerCapabilities`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceServerCapabilities {
    #[wire(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_folders: Option<WorkspaceFoldersServerCapabilities>,
    #[wire(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_operations: Option<FileOperationsServerCapabilities>,
}

/// Capabilities a 3.16 server announces in its `initialize` result
///
/// Every ambiguous provider field is decoded independently; a field holding
/// a value that none of its shapes accepts fails the whole record with
/// `ShapeMismatch` naming that field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct ServerCapabilities {
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_document_sync: Option<TextDocumentSyncCapability>,
    #[wire(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_provider: Option<CompletionOptions>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_provider: Option<HoverProviderCapability>,
    #[wire(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_help_provider: Option<SignatureHelpOptions>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration_provider: Option<DeclarationProviderCapability>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition_provider: Option<DefinitionProviderCapability>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_definition_provider: Option<TypeDefinitionProviderCapability>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation_provider: Option<ImplementationProviderCapability>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references_provider: Option<ReferencesProviderCapability>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_highlight_provider: Option<DocumentHighlightProviderCapability>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_symbol_provider: Option<DocumentSymbolProviderCapability>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_action_provider: Option<CodeActionProviderCapability>,
    #[wire(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_lens_provider: Option<CodeLensOptions>,
    #[wire(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_link_provider: Option<DocumentLinkOptions>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_provider: Option<ColorProviderCapability>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_formatting_provider: Option<DocumentFormattingProviderCapability>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_range_formatting_provider: Option<DocumentRangeFormattingProviderCapability>,
    #[wire(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_on_type_formatting_provider: Option<DocumentOnTypeFormattingOptions>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rename_provider: Option<RenameProviderCapability>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folding_range_provider: Option<FoldingRangeProviderCapability>,
    #[wire(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execute_command_provider: Option<ExecuteCommandOptions>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_range_provider: Option<SelectionRangeProviderCapability>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_editing_range_provider: Option<LinkedEditingRangeProviderCapability>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_hierarchy_provider: Option<CallHierarchyProviderCapability>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_tokens_provider: Option<SemanticTokensServerCapabilities>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moniker_provider: Option<MonikerProviderCapability>,
    #[wire(ambiguous)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_symbol_provider: Option<WorkspaceSymbolProviderCapability>,
    #[wire(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<WorkspaceServerCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experimental: Option<LspAny>,
}
