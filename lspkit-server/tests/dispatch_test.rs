//! Handlers declared with `#[handler]` dispatched through a router

use lspkit_core::{ErrorCode, Result};
use lspkit_macros::handler;
use lspkit_protocol::methods::{
    Initialize, InlayHintResolve, InlineValueRequest, Method, PrepareTypeHierarchy, Shutdown,
};
use lspkit_protocol::v3_17::{
    InitializeParams, InitializeResult, InlayHint, InlineValue, InlineValueParams,
    InlineValueProviderCapability, InlineValueText, PositionEncodingKind, ServerCapabilities,
    TypeHierarchyItem, TypeHierarchyPrepareParams,
};
use lspkit_server::{RequestContext, Router, RouterBuilder};
use serde_json::{json, Value};

#[handler(Initialize)]
async fn initialize(params: InitializeParams) -> Result<InitializeResult> {
    let offered = params
        .capabilities
        .general
        .as_ref()
        .map(|general| general.offered_position_encodings())
        .unwrap_or_else(|| vec![PositionEncodingKind::UTF16]);

    let mut result = InitializeResult::new(ServerCapabilities {
        inline_value_provider: Some(InlineValueProviderCapability::Bool(true)),
        ..Default::default()
    });
    if offered.contains(&PositionEncodingKind::UTF8) {
        result.position_encoding = Some(PositionEncodingKind::UTF8);
    }
    Ok(result)
}

#[handler(Shutdown)]
async fn shutdown() -> Result<()> {
    Ok(())
}

#[handler(PrepareTypeHierarchy)]
async fn prepare(
    ctx: RequestContext,
    _params: TypeHierarchyPrepareParams,
) -> Result<Option<Vec<TypeHierarchyItem>>> {
    assert!(ctx.id().is_some());
    Ok(None)
}

#[handler(InlineValueRequest)]
async fn inline_values(params: InlineValueParams) -> Result<Option<Vec<InlineValue>>> {
    Ok(Some(vec![InlineValue::Text(InlineValueText {
        range: params.context.stopped_location,
        text: format!("frame {}", params.context.frame_id),
    })]))
}

#[handler(InlayHintResolve)]
async fn resolve(mut hint: InlayHint) -> Result<InlayHint> {
    hint.padding_left = Some(true);
    Ok(hint)
}

fn router() -> Router {
    RouterBuilder::new()
        .method::<Initialize>(initialize())
        .method::<Shutdown>(shutdown())
        .method::<PrepareTypeHierarchy>(prepare())
        .method::<InlineValueRequest>(inline_values())
        .handler(InlayHintResolve::NAME, resolve())
        .build()
}

fn range(line: u32) -> Value {
    json!({"start": {"line": line, "character": 0}, "end": {"line": line, "character": 4}})
}

#[tokio::test]
async fn test_initialize_negotiates_encoding() {
    let router = router();

    let params = json!({
        "processId": 42,
        "rootUri": "file:///project",
        "capabilities": {"general": {"positionEncodings": ["utf-8", "utf-16"]}}
    });
    let result = router
        .route_response("initialize", 1.into(), Some(params))
        .await
        .unwrap();
    assert_eq!(
        result,
        json!({"capabilities": {"inlineValueProvider": true}, "positionEncoding": "utf-8"})
    );

    let params = json!({"processId": null, "rootUri": null, "capabilities": {}});
    let result = router
        .route_response("initialize", 2.into(), Some(params))
        .await
        .unwrap();
    assert_eq!(result, json!({"capabilities": {"inlineValueProvider": true}}));
}

#[tokio::test]
async fn test_initialize_missing_capabilities() {
    let err = router()
        .route_response("initialize", 1.into(), Some(json!({"processId": 1, "rootUri": null})))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("capabilities"), "{}", err.message);
}

#[tokio::test]
async fn test_shutdown_and_exit() {
    let router = router();
    assert_eq!(router.route_request("shutdown", 9.into(), None).await.unwrap(), Value::Null);

    let err = router.route_response("exit", 10.into(), None).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::METHOD_NOT_FOUND);
}

#[tokio::test]
async fn test_context_reaches_handler() {
    let params = json!({
        "textDocument": {"uri": "file:///shape.rs"},
        "position": {"line": 3, "character": 7}
    });
    let result = router()
        .route_request("textDocument/prepareTypeHierarchy", "a".into(), Some(params))
        .await
        .unwrap();
    assert_eq!(result, Value::Null);
}

#[tokio::test]
async fn test_inline_values() {
    let params = json!({
        "textDocument": {"uri": "file:///main.rs"},
        "range": range(0),
        "context": {"frameId": 3, "stoppedLocation": range(12)}
    });
    let result = router()
        .route_request("textDocument/inlineValue", 4.into(), Some(params))
        .await
        .unwrap();
    assert_eq!(result, json!([{"range": range(12), "text": "frame 3"}]));
}

#[tokio::test]
async fn test_resolve_keeps_label_shape() {
    let hint = json!({
        "position": {"line": 1, "character": 8},
        "label": [{"value": ": "}, {"value": "Vec<u8>", "tooltip": "alloc::vec::Vec"}]
    });
    let result = router()
        .route_request("inlayHint/resolve", 5.into(), Some(hint.clone()))
        .await
        .unwrap();

    let mut expected = hint;
    expected["paddingLeft"] = json!(true);
    assert_eq!(result, expected);

    let err = router()
        .route_response("inlayHint/resolve", 6.into(), Some(json!({"position": {"line": 1, "character": 8}, "label": 3})))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
}
