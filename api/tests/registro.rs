use axum::http::StatusCode;
use axum_test::TestServer;
use registro_api::{build_router, ApiState};
use serde_json::json;

fn server(state: ApiState) -> TestServer {
    TestServer::new(build_router(state)).unwrap()
}

fn lead() -> serde_json::Value {
    json!({
        "nombre": "Ana",
        "cedula": "12345678",
        "telefono": "3001234567",
        "email": "ana@x.com",
        "monto": "50000"
    })
}

#[tokio::test]
async fn probe_reports_environment_and_version() {
    let response = server(ApiState::default()).get("/api/registro").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "ok": true, "env": "prod", "version": "v2" }));
}

#[tokio::test]
async fn probe_uses_configured_values() {
    let state = ApiState {
        environment: "staging".into(),
        version: "v3".into(),
        ..ApiState::default()
    };
    let response = server(state).get("/api/registro").await;

    response.assert_json(&json!({ "ok": true, "env": "staging", "version": "v3" }));
}

#[tokio::test]
async fn lead_is_acknowledged() {
    let response = server(ApiState::default()).post("/api/registro").json(&lead()).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "ok": true }));
}

#[tokio::test]
async fn any_well_formed_json_is_acknowledged() {
    let server = server(ApiState::default());

    for body in [json!({}), json!({ "nombre": 1 }), json!([1, 2, 3]), json!("texto")] {
        let response = server.post("/api/registro").json(&body).await;
        response.assert_status_ok();
        response.assert_json(&json!({ "ok": true }));
    }
}

#[tokio::test]
async fn malformed_json_gets_json_error() {
    let response = server(ApiState::default())
        .post("/api/registro")
        .text("{not json")
        .content_type("application/json")
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["ok"], json!(false));
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn lead_is_acknowledged_whatever_the_content_type() {
    let server = server(ApiState::default());
    let body = lead().to_string();

    let response = server
        .post("/api/registro")
        .text(&body)
        .content_type("text/plain;charset=UTF-8")
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({ "ok": true }));

    let response = server.post("/api/registro").bytes(body.into_bytes().into()).await;
    response.assert_status_ok();
    response.assert_json(&json!({ "ok": true }));
}

#[tokio::test]
async fn empty_body_gets_json_error() {
    let response = server(ApiState::default())
        .post("/api/registro")
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["ok"], json!(false));
}

#[tokio::test]
async fn strict_mode_accepts_valid_lead() {
    let state = ApiState { validate_payload: true, ..ApiState::default() };
    let response = server(state).post("/api/registro").json(&lead()).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "ok": true }));
}

#[tokio::test]
async fn strict_mode_reports_field_errors() {
    let state = ApiState { validate_payload: true, ..ApiState::default() };
    let mut body = lead();
    body["cedula"] = json!("1234567");
    body["email"] = json!("a@b");

    let response = server(state)
        .post("/api/registro")
        .json(&body)
        .expect_failure()
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    response.assert_json(&json!({
        "ok": false,
        "errors": {
            "cedula": "La cédula debe tener entre 8 y 10 dígitos",
            "email": "El email no es válido"
        }
    }));
}

#[tokio::test]
async fn strict_mode_rejects_wrong_shape() {
    let state = ApiState { validate_payload: true, ..ApiState::default() };
    let response = server(state)
        .post("/api/registro")
        .json(&json!({ "nombre": "Ana" }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["ok"], json!(false));
}
