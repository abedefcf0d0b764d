use axum::http::StatusCode;
use http_body_util::BodyExt;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Send a GET request via `oneshot` and return (status, parsed JSON body).
async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
    let app = docflow_server::build_router();
    let req = axum::http::Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

// ---------------------------------------------------------------------------
// /api/catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn catalog_returns_seven_phases() {
    let (status, body) = get("/api/catalog").await;
    assert_eq!(status, StatusCode::OK);
    let phases = body["phases"].as_array().unwrap();
    assert_eq!(phases.len(), 7);

    let stage_count: usize = phases
        .iter()
        .map(|p| p["stages"].as_array().unwrap().len())
        .sum();
    assert_eq!(stage_count, 23);
}

#[tokio::test]
async fn catalog_external_filter_keeps_only_external_doc_stages() {
    let (status, body) = get("/api/catalog?filter=external").await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<&str> = body["phases"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|p| p["stages"].as_array().unwrap().iter())
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["5b", "6c"]);
}

#[tokio::test]
async fn catalog_bad_filter_is_400() {
    let (status, body) = get("/api/catalog?filter=bogus").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

// ---------------------------------------------------------------------------
// /api/catalog/stages/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn stage_lookup_returns_detail_with_phase() {
    let (status, body) = get("/api/catalog/stages/2a").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "2a");
    assert!(body["phase"].as_str().unwrap().contains("Planning"));
    assert!(body["internal_docs"].as_array().unwrap().len() > 0);
}

#[tokio::test]
async fn unknown_stage_is_404() {
    let (status, body) = get("/api/catalog/stages/9z").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("9z"));
}

// ---------------------------------------------------------------------------
// /api/graph and /api/analysis
// ---------------------------------------------------------------------------

#[tokio::test]
async fn graph_has_node_per_stage_and_typed_edges() {
    let (status, body) = get("/api/graph").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nodes"].as_array().unwrap().len(), 23);

    for edge in body["edges"].as_array().unwrap() {
        let kind = edge["type"].as_str().unwrap();
        assert!(kind == "dependency" || kind == "dataflow");
        if kind == "dataflow" {
            assert!(edge["label"].is_string());
        } else {
            assert!(edge.get("label").is_none());
        }
    }
}

#[tokio::test]
async fn analysis_summary_counts_doc_creators() {
    let (status, body) = get("/api/analysis").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["stages"], 23);
    assert_eq!(body["summary"]["internal_doc_creators"], 10);
    assert_eq!(body["summary"]["external_doc_creators"], 2);

    let high_risk: Vec<&str> = body["high_risk"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert!(high_risk.contains(&"2a"));
}

// ---------------------------------------------------------------------------
// /api/usecases and /api/structure
// ---------------------------------------------------------------------------

#[tokio::test]
async fn usecases_returns_ten_cases() {
    let (status, body) = get("/api/usecases").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 10);
    assert_eq!(body[0]["category"], "New Engineer Onboarding");
}

#[tokio::test]
async fn structure_bundles_guide_practices_schedule_templates() {
    let (status, body) = get("/api/structure").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categories"].as_array().unwrap().len(), 9);
    assert_eq!(body["best_practices"].as_array().unwrap().len(), 10);
    assert_eq!(body["maintenance_schedule"].as_array().unwrap().len(), 4);
    assert_eq!(body["templates"].as_array().unwrap().len(), 4);
}

// ---------------------------------------------------------------------------
// Static fallback
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_path_serves_spa_index() {
    let app = docflow_server::build_router();
    let req = axum::http::Request::builder()
        .uri("/some/client/route")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let ct = response
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .unwrap();
    assert_eq!(ct, "text/html");
}
