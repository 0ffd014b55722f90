use academiq_cli::core::render::render_predictions;
use academiq_cli::domain::model::RequestLifecycle;
use academiq_cli::domain::ports::{ConfigProvider, PredictionApi};
use academiq_cli::{FormController, HttpPredictionApi};
use httpmock::prelude::*;

struct TestConfig {
    url: String,
}

impl ConfigProvider for TestConfig {
    fn api_base_url(&self) -> &str {
        &self.url
    }
}

fn api_for(server: &MockServer) -> HttpPredictionApi {
    HttpPredictionApi::new(&TestConfig {
        url: server.base_url(),
    })
}

fn mock_schemas(server: &MockServer, input: &[&str], output: &[&str]) {
    server.mock(|when, then| {
        when.method(GET).path("/courses/input");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "courses": input }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/courses/output");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "courses": output }));
    });
}

#[tokio::test]
async fn full_flow_from_bootstrap_to_rendered_predictions() {
    let server = MockServer::start();
    mock_schemas(&server, &["Math", "Physics"], &["AdvMath"]);
    server.mock(|when, then| {
        when.method(GET).path("/model/info");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "model_name": "XGBoost",
                "input_courses": ["Math", "Physics"],
                "output_courses": ["AdvMath"],
                "metrics": {"r2": 0.91, "rmse": 4.2, "cv_r2": 0.88}
            }));
    });
    let predict_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/predict")
            .json_body(serde_json::json!({
                "grades": {"Math": 90.0, "Physics": 90.0}
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "predictions": {"AdvMath": 88.4},
                "model_used": "XGBoost"
            }));
    });

    let api = api_for(&server);
    let mut form = FormController::bootstrap(&api).await.unwrap();

    // Seeded straight from the input schema, every grade at the default.
    assert_eq!(form.schema().input_courses, vec!["Math", "Physics"]);
    assert_eq!(form.schema().output_courses, vec!["AdvMath"]);
    assert_eq!(form.sheet().get("Math"), Some(50.0));
    assert_eq!(form.sheet().get("Physics"), Some(50.0));
    assert_eq!(form.lifecycle(), &RequestLifecycle::Idle);

    let info = form.schema().model_info.as_ref().unwrap();
    assert_eq!(info.model_name, "XGBoost");
    assert_eq!(info.metrics.get("r2"), Some(&0.91));

    form.set_grade("Math", "75");
    assert_eq!(form.sheet().get("Math"), Some(75.0));

    form.set_all("90");
    assert_eq!(form.sheet().get("Math"), Some(90.0));
    assert_eq!(form.sheet().get("Physics"), Some(90.0));

    form.submit(&api).await;
    predict_mock.assert();

    assert_eq!(form.lifecycle(), &RequestLifecycle::Success);
    let outcome = form.last_result().unwrap();
    assert_eq!(outcome.predictions.get("AdvMath"), Some(&88.4));

    let rows = render_predictions(&form.schema().output_courses, outcome);
    assert_eq!(rows, vec![("AdvMath".to_string(), "88.40".to_string())]);
}

#[tokio::test]
async fn bootstrap_fails_when_either_schema_fetch_fails() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/courses/input");
        then.status(200)
            .json_body(serde_json::json!({ "courses": ["Math"] }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/courses/output");
        then.status(503)
            .json_body(serde_json::json!({"detail": "Model not loaded"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/model/info");
        then.status(200)
            .json_body(serde_json::json!({"model_name": "XGBoost"}));
    });

    let api = api_for(&server);
    assert!(FormController::bootstrap(&api).await.is_err());
}

#[tokio::test]
async fn model_info_failure_is_soft_and_does_not_block_the_form() {
    let server = MockServer::start();
    mock_schemas(&server, &["Math"], &["AdvMath"]);
    server.mock(|when, then| {
        when.method(GET).path("/model/info");
        then.status(503)
            .json_body(serde_json::json!({"detail": "Model not loaded"}));
    });
    server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(200)
            .json_body(serde_json::json!({"predictions": {"AdvMath": 70.0}}));
    });

    let api = api_for(&server);
    let mut form = FormController::bootstrap(&api).await.unwrap();

    assert!(form.schema().model_info.is_none());

    form.submit(&api).await;
    assert_eq!(form.lifecycle(), &RequestLifecycle::Success);
}

#[tokio::test]
async fn health_probe_reports_backend_state() {
    let server = MockServer::start();
    let health_mock = server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "status": "healthy",
                "model_loaded": true,
                "model_name": "XGBoost"
            }));
    });

    let api = api_for(&server);
    let report = api.health().await.unwrap();

    health_mock.assert();
    assert_eq!(report.status, "healthy");
    assert!(report.model_loaded);
    assert_eq!(report.model_name.as_deref(), Some("XGBoost"));
}
