//! Pull diagnostics capabilities
//!
//! Unlike the other 3.17 providers, `diagnosticProvider` has no boolean
//! form, and its options carry two required flags.

use crate::base::{
    StaticRegistrationOptions, TextDocumentRegistrationOptions, WorkDoneProgressOptions,
};
use crate::v3_16::server::registration_options;
use lspkit_core::{Aggregate, TrialDecode};
use serde::{Deserialize, Serialize};

pub use crate::v3_16::client::RefreshClientCapabilities as DiagnosticWorkspaceClientCapabilities;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticClientCapabilities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_document_support: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Aggregate)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticOptions {
    #[wire(base)]
    #[serde(flatten)]
    pub work_done_progress_options: WorkDoneProgressOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    pub inter_file_dependencies: bool,
    pub workspace_diagnostics: bool,
}

registration_options!(DiagnosticRegistrationOptions => DiagnosticOptions);

/// `diagnosticProvider`
#[derive(Debug, Clone, PartialEq, Eq, TrialDecode)]
pub enum DiagnosticServerCapabilities {
    RegistrationOptions(DiagnosticRegistrationOptions),
    Options(DiagnosticOptions),
}

#[cfg(test)]
mod tests {
    use super::*;
    use lspkit_core::{trial_decode, TrialDecode};
    use serde_json::json;

    #[test]
    fn test_diagnostic_provider_shapes() {
        let raw = json!({"interFileDependencies": true, "workspaceDiagnostics": false});
        let provider: DiagnosticServerCapabilities = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(provider.variant(), "Options");
        assert_eq!(serde_json::to_value(&provider).unwrap(), raw);

        let raw = json!({
            "documentSelector": [{"language": "python"}],
            "identifier": "pyright",
            "interFileDependencies": true,
            "workspaceDiagnostics": true
        });
        let provider: DiagnosticServerCapabilities = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(provider.variant(), "RegistrationOptions");
        assert_eq!(serde_json::to_value(&provider).unwrap(), raw);
    }

    #[test]
    fn test_diagnostic_provider_rejects_bool_and_partial_options() {
        let err = trial_decode::<DiagnosticServerCapabilities>(&json!(true)).unwrap_err();
        assert_eq!(err.found, "boolean");
        assert_eq!(err.attempts, 2);

        let err = trial_decode::<DiagnosticServerCapabilities>(&json!({"interFileDependencies": true}))
            .unwrap_err();
        assert!(err.message.contains("workspaceDiagnostics"));
    }
}
