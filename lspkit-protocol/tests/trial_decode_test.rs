//! Trial decoding and layering across the public protocol API

use lspkit_core::{codec, trial_decode, Error, TrialDecode};
use lspkit_protocol::v3_16::server::{
    CallHierarchyProviderCapability, CodeActionProviderCapability, ColorProviderCapability,
    DeclarationProviderCapability, FoldingRangeProviderCapability, HoverProviderCapability,
    MonikerProviderCapability, SemanticTokensServerCapabilities, TextDocumentSyncCapability,
};
use lspkit_protocol::v3_17::{
    DiagnosticServerCapabilities, InlayHintLabel, InlayHintProviderCapability, InlayHintTooltip,
    InlineValue, InlineValueProviderCapability, ServerCapabilities, TypeHierarchyProviderCapability,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

/// Decode each sample, check the chosen candidate and the re-encoded value
fn check_catalog<U>(samples: Vec<(Value, &str)>)
where
    U: TrialDecode + DeserializeOwned + Serialize,
{
    for (raw, expected) in samples {
        let decoded: U = trial_decode(&raw).unwrap();
        assert_eq!(decoded.variant(), expected, "{}: {}", U::UNION, raw);
        assert_eq!(serde_json::to_value(&decoded).unwrap(), raw, "{}", U::UNION);
    }
}

fn registration() -> Value {
    json!({"documentSelector": [{"language": "rust"}], "id": "reg-1"})
}

#[test]
fn test_provider_catalogs_round_trip() {
    check_catalog::<HoverProviderCapability>(vec![
        (json!(false), "Bool"),
        (json!({"workDoneProgress": true}), "Options"),
    ]);
    check_catalog::<DeclarationProviderCapability>(vec![
        (json!(true), "Bool"),
        (registration(), "RegistrationOptions"),
        (json!({}), "Options"),
    ]);
    check_catalog::<ColorProviderCapability>(vec![
        (json!(true), "Bool"),
        (registration(), "RegistrationOptions"),
        (json!({"workDoneProgress": false}), "Options"),
    ]);
    check_catalog::<FoldingRangeProviderCapability>(vec![
        (json!(true), "Bool"),
        (registration(), "RegistrationOptions"),
    ]);
    check_catalog::<CallHierarchyProviderCapability>(vec![
        (json!(true), "Bool"),
        (registration(), "RegistrationOptions"),
    ]);
    check_catalog::<MonikerProviderCapability>(vec![
        (json!(true), "Bool"),
        (json!({"documentSelector": null}), "RegistrationOptions"),
        (json!({}), "Options"),
    ]);
    check_catalog::<CodeActionProviderCapability>(vec![
        (json!(true), "Bool"),
        (json!({"codeActionKinds": ["quickfix"], "resolveProvider": true}), "Options"),
    ]);
    check_catalog::<TextDocumentSyncCapability>(vec![
        (json!(0), "Kind"),
        (json!({"openClose": true, "change": 2}), "Options"),
    ]);
    check_catalog::<SemanticTokensServerCapabilities>(vec![
        (
            json!({"documentSelector": null, "legend": {"tokenTypes": [], "tokenModifiers": []}}),
            "RegistrationOptions",
        ),
        (
            json!({"legend": {"tokenTypes": ["type"], "tokenModifiers": ["static"]}, "full": true}),
            "Options",
        ),
    ]);
}

#[test]
fn test_317_catalogs_round_trip() {
    check_catalog::<TypeHierarchyProviderCapability>(vec![
        (json!(true), "Bool"),
        (registration(), "RegistrationOptions"),
        (json!({}), "Options"),
    ]);
    check_catalog::<InlayHintProviderCapability>(vec![
        (json!(false), "Bool"),
        (json!({"documentSelector": null, "resolveProvider": true}), "RegistrationOptions"),
        (json!({"resolveProvider": false}), "Options"),
    ]);
    check_catalog::<InlineValueProviderCapability>(vec![
        (json!(true), "Bool"),
        (registration(), "RegistrationOptions"),
        (json!({"workDoneProgress": true}), "Options"),
    ]);
    check_catalog::<DiagnosticServerCapabilities>(vec![
        (
            json!({"documentSelector": null, "interFileDependencies": false, "workspaceDiagnostics": false}),
            "RegistrationOptions",
        ),
        (
            json!({"interFileDependencies": true, "workspaceDiagnostics": true}),
            "Options",
        ),
    ]);
    check_catalog::<InlayHintTooltip>(vec![
        (json!("docs"), "String"),
        (json!({"kind": "plaintext", "value": "docs"}), "MarkupContent"),
    ]);
    check_catalog::<InlayHintLabel>(vec![
        (json!("-> bool"), "String"),
        (json!([{"value": "-> "}, {"value": "bool"}]), "LabelParts"),
    ]);
    check_catalog::<InlineValue>(vec![
        (
            json!({"range": {"start": {"line": 0, "character": 0}, "end": {"line": 0, "character": 3}}, "text": "42"}),
            "Text",
        ),
        (
            json!({"range": {"start": {"line": 0, "character": 0}, "end": {"line": 0, "character": 3}}}),
            "EvaluatableExpression",
        ),
    ]);
}

#[test]
fn test_value_matching_no_candidate() {
    // Surfaces the per-candidate trace events when run with --nocapture
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();

    for raw in [json!(7), json!("yes"), json!([true])] {
        let err = trial_decode::<HoverProviderCapability>(&raw).unwrap_err();
        assert_eq!(err.union, "HoverProviderCapability");
        assert_eq!(err.attempts, 2);
    }

    let err = codec::decode::<ServerCapabilities>(&json!({"hoverProvider": 7})).unwrap_err();
    match err {
        Error::ShapeMismatch { field, source } => {
            assert_eq!(field, "hoverProvider");
            assert_eq!(source.found, "number");
            assert_eq!(source.candidate, "Options");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_hover_provider_options_example() {
    let raw = json!({"hoverProvider": {"workDoneProgress": true}});
    let caps: ServerCapabilities = codec::decode(&raw).unwrap();

    match &caps.base.hover_provider {
        Some(HoverProviderCapability::Options(options)) => {
            assert_eq!(options.work_done_progress_options.work_done_progress, Some(true));
        }
        other => panic!("unexpected hover provider: {:?}", other),
    }
    assert_eq!(Value::Object(codec::encode_object(&caps).unwrap()), raw);
}

#[test]
fn test_missing_ambiguous_field_is_absent() {
    let caps: ServerCapabilities = codec::decode(&json!({})).unwrap();
    assert!(caps.base.hover_provider.is_none());
    assert!(caps.inlay_hint_provider.is_none());
    assert!(codec::encode_object(&caps).unwrap().is_empty());

    // Explicit null reads the same as a missing key
    let caps: ServerCapabilities =
        codec::decode(&json!({"hoverProvider": null, "inlayHintProvider": null})).unwrap();
    assert!(caps.base.hover_provider.is_none());
    assert!(caps.inlay_hint_provider.is_none());
}

#[test]
fn test_layering_populates_base_and_delta() {
    let caps: ServerCapabilities =
        codec::decode(&json!({"hoverProvider": true, "inlayHintProvider": true})).unwrap();
    assert_eq!(caps.base.hover_provider, Some(HoverProviderCapability::Bool(true)));
    assert_eq!(caps.inlay_hint_provider, Some(InlayHintProviderCapability::Bool(true)));

    let caps: ServerCapabilities = codec::decode(&json!({"hoverProvider": false})).unwrap();
    assert_eq!(caps.base.hover_provider, Some(HoverProviderCapability::Bool(false)));
    assert!(caps.inlay_hint_provider.is_none());
}

#[test]
fn test_empty_object_resolves_to_first_listed_shape() {
    // {} fails the registration shape and lands on the optional-only one,
    // every time
    for _ in 0..5 {
        let decoded: InlayHintProviderCapability = trial_decode(&json!({})).unwrap();
        assert_eq!(decoded.variant(), "Options");
    }
}
