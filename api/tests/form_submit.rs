//! The form controller driven against a live intake server.

use lead_client::{http_controller, ClientConfig, HttpTransport, SubmitOutcome};
use lead_forms::{Amount, Field, SubmissionStatus};
use registro_api::{build_router, ApiState};
use std::time::Duration;

async fn spawn_server(state: ApiState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, build_router(state)).await.unwrap();
    });
    format!("http://{addr}/api/registro")
}

fn config(endpoint: String) -> ClientConfig {
    ClientConfig {
        success_display_ms: 50,
        ..ClientConfig::with_endpoint(endpoint)
    }
}

#[tokio::test]
async fn valid_form_is_accepted_then_cleared() {
    let endpoint = spawn_server(ApiState { validate_payload: true, ..ApiState::default() }).await;
    let form = http_controller(config(endpoint)).unwrap();

    form.on_field_change("nombre", "Ana").unwrap();
    form.on_field_change("cedula", "12.345.678").unwrap();
    form.on_field_change("telefono", "300-123-4567").unwrap();
    form.on_field_change("email", "ana@x.com").unwrap();
    form.select_amount(Amount::Basic);

    let outcome = form.submit().await;
    assert!(outcome.is_accepted(), "{outcome:?}");
    assert_eq!(form.status(), SubmissionStatus::Succeeded);

    tokio::time::sleep(Duration::from_millis(200)).await;
    let snapshot = form.snapshot();
    assert_eq!(snapshot.status, SubmissionStatus::Idle);
    assert!(snapshot.values.is_blank());
}

#[tokio::test]
async fn invalid_form_never_reaches_server() {
    let endpoint = spawn_server(ApiState::default()).await;
    let form = http_controller(config(endpoint)).unwrap();

    form.on_field_change("nombre", "Ana").unwrap();
    let SubmitOutcome::Invalid(errors) = form.submit().await else {
        panic!("expected validation failure")
    };
    assert!(errors.contains(Field::Cedula));
    assert!(!errors.contains(Field::Nombre));
    assert_eq!(form.status(), SubmissionStatus::Idle);
}

#[tokio::test]
async fn probe_round_trip() {
    let endpoint = spawn_server(ApiState::default()).await;
    let transport = HttpTransport::new(&ClientConfig::with_endpoint(endpoint)).unwrap();

    let info = transport.probe().await.unwrap();
    assert!(info.ok);
    assert_eq!(info.env, "prod");
}
