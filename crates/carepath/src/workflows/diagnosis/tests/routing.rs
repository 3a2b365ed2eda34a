use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::diagnosis::{diagnosis_router, DiagnosisService, ModelVersion};

fn post_request(body: serde_json::Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post("/api/v1/diagnosis")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn submit_route_returns_a_complete_record() {
    let (service, leads) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post_request(json!({
            "answers": { "4": 3, "19": 0, "23": "Replay the shift in your head for hours" },
            "profession": "med-surg nurse",
            "postal_code": "50010"
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("type_key").and_then(serde_json::Value::as_str),
        Some("scholar")
    );
    assert!(payload.get("profile").and_then(|p| p.get("title")).is_some());
    assert!(payload.get("stress").is_some());

    let events = leads.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].profession.as_deref(), Some("med-surg nurse"));
}

#[tokio::test]
async fn submit_route_accepts_the_legacy_model() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post_request(json!({
            "answers": { "101": "3" },
            "model": "legacy_axis"
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("type_key").and_then(serde_json::Value::as_str),
        Some("SCTP")
    );
    assert!(payload.get("stress").is_none());
}

#[tokio::test]
async fn submit_route_reports_lead_transport_failures() {
    let service = DiagnosisService::new(
        engine(),
        Arc::new(FailingLeads),
        ModelVersion::Archetype,
    );
    let router = diagnosis_router(Arc::new(service));

    let response = router
        .oneshot(post_request(json!({ "answers": {} })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .contains("transport"));
}

#[tokio::test]
async fn questions_route_serves_both_catalogs() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/diagnosis/questions")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let questions = payload
        .get("questions")
        .and_then(serde_json::Value::as_array)
        .expect("questions array");
    assert_eq!(questions.len(), 26);
    let legacy = payload
        .get("legacy_questions")
        .and_then(serde_json::Value::as_array)
        .expect("legacy questions array");
    assert_eq!(legacy.len(), 16);
}
