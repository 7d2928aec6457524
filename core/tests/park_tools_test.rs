/// Unit tests for the park tools
mod common;

use common::{park, ScriptedSource, Step};
use parkvoice_core::nps::NpsError;
use parkvoice_core::tools::native::register_park_tools;
use parkvoice_core::{NpsClient, ToolError, ToolRegistry};
use serde_json::json;
use std::sync::Arc;

fn registry(steps: Vec<Step>) -> ToolRegistry {
    let client = NpsClient::with_source(Arc::new(ScriptedSource::new(steps)), "KEY").with_seed(3);
    let registry = ToolRegistry::new();
    register_park_tools(&registry, Arc::new(client));
    registry
}

#[test]
fn test_registered_names_and_schemas() {
    let registry = registry(vec![]);
    assert_eq!(
        registry.names(),
        vec![
            "parks:describe",
            "parks:list_by_state",
            "parks:locate",
            "parks:quiz"
        ]
    );

    let schema = registry.get("parks:locate").unwrap().parameters();
    assert_eq!(schema["required"][0], "park");
    assert!(schema["properties"]["park"].is_object());
}

#[tokio::test]
async fn test_list_by_state() {
    let registry = registry(vec![Step::Parks(vec![
        park("Great Smoky Mountains National Park", "NC,TN", "National Park"),
        park("Appalachian", "NC,TN", "National Scenic Trail"),
    ])]);

    let out = registry
        .call("parks:list_by_state", json!({"state": "tennessee"}))
        .await
        .unwrap();
    assert_eq!(
        out,
        json!({
            "found": true,
            "state": "tennessee",
            "parks": ["Great Smoky Mountains National Park"]
        })
    );
}

#[tokio::test]
async fn test_locate_and_not_found() {
    let registry = registry(vec![Step::Parks(vec![park(
        "Great Smoky Mountains National Park",
        "NC,TN",
        "National Park",
    )])]);

    let out = registry
        .call("parks:locate", json!({"park": "smoky"}))
        .await
        .unwrap();
    assert_eq!(out["location"], "north carolina and tennessee");

    // Script exhausted: empty result set
    let out = registry
        .call("parks:describe", json!({"park": "smoky"}))
        .await
        .unwrap();
    assert_eq!(out, json!({"found": false}));
}

#[tokio::test]
async fn test_missing_argument() {
    let registry = registry(vec![]);
    let err = registry
        .call("parks:describe", json!({"park": "  "}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::InvalidArguments(_)));
}

#[tokio::test]
async fn test_client_error_is_execution_failure() {
    let registry = registry(vec![Step::Fail(NpsError::Status(500))]);
    let err = registry.call("parks:quiz", json!({})).await.unwrap_err();
    match err {
        ToolError::ExecutionFailed(msg) => assert!(msg.contains("500")),
        other => panic!("unexpected error: {other}"),
    }
}
