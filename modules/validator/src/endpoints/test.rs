use actix_http::StatusCode;
use actix_web::test::{call_and_read_body_json, call_service, init_service, TestRequest};
use actix_web::App;
use serde_json::{json, Value};
use test_log::test;

use crate::configure;

#[test(actix_web::test)]
async fn check_update_version_deficiency() {
    let app = init_service(App::new().configure(configure)).await;

    let req = TestRequest::post()
        .uri("/check-update")
        .set_json(json!({
            "vehicle_id": "V002",
            "package_id": "PKG_BMS_30",
            "ecus": [{"type": "BCM", "major": 1, "minor": 1, "patch": 5}],
            "rules": [{"required_type": "BCM", "min_major": 1, "min_minor": 2, "min_patch": 0}],
        }))
        .to_request();

    let body: Value = call_and_read_body_json(&app, req).await;

    assert_eq!(body["vehicle_id"], "V002");
    assert_eq!(body["package_id"], "PKG_BMS_30");
    assert_eq!(body["is_available"], false);
    assert_eq!(body["details"][0]["rule"], "BCM");
    assert_eq!(body["details"][0]["status"], "FAIL");
    let reason = body["details"][0]["reason"].as_str().unwrap();
    assert!(reason.contains("1.1.5"), "reason: {reason}");
    assert!(reason.contains("1.2.0"), "reason: {reason}");
}

#[test(actix_web::test)]
async fn check_update_pass() {
    let app = init_service(App::new().configure(configure)).await;

    let req = TestRequest::post()
        .uri("/check-update")
        .set_json(json!({
            "vehicle_id": "V001",
            "package_id": "PKG_BMS_30",
            "ecus": [
                {"type": "BMS", "major": 2, "minor": 0, "patch": 0},
                {"type": "BCM", "major": 1, "minor": 5, "patch": 0},
            ],
            "rules": [{"required_type": "BCM", "min_major": 1, "min_minor": 2, "min_patch": 0}],
        }))
        .to_request();

    let body: Value = call_and_read_body_json(&app, req).await;

    assert_eq!(body["is_available"], true);
    assert_eq!(
        body["details"],
        json!([{
            "rule": "BCM",
            "status": "PASS",
            "current_version": "1.5.0",
            "required_version": "1.2.0",
        }])
    );
}

#[test(actix_web::test)]
async fn check_update_empty_rules() {
    let app = init_service(App::new().configure(configure)).await;

    let req = TestRequest::post()
        .uri("/check-update")
        .set_json(json!({
            "vehicle_id": "V001",
            "package_id": "PKG_EMPTY",
            "ecus": [{"type": "BMS", "major": 2, "minor": 0, "patch": 0}],
            "rules": [],
        }))
        .to_request();

    let body: Value = call_and_read_body_json(&app, req).await;

    assert_eq!(body["is_available"], true);
    assert_eq!(body["details"], json!([]));
}

#[test(actix_web::test)]
async fn check_update_missing_field_is_rejected() {
    let app = init_service(App::new().configure(configure)).await;

    // no package_id
    let req = TestRequest::post()
        .uri("/check-update")
        .set_json(json!({
            "vehicle_id": "V001",
            "ecus": [],
            "rules": [],
        }))
        .to_request();

    let resp = call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[test(actix_web::test)]
async fn check_update_negative_version_is_rejected() {
    let app = init_service(App::new().configure(configure)).await;

    let req = TestRequest::post()
        .uri("/check-update")
        .set_json(json!({
            "vehicle_id": "V001",
            "package_id": "PKG_BMS_30",
            "ecus": [{"type": "BCM", "major": -1, "minor": 0, "patch": 0}],
            "rules": [],
        }))
        .to_request();

    let resp = call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
