use std::io::Write;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use api::{decode_dataset, Dataset, Record};
use server::{loader, router, AppState};

fn sample_state() -> server::SharedState {
    let dataset: Dataset = vec![
        Record {
            country: Some("France".into()),
            language: Some("Go".into()),
            ..Record::default()
        },
        Record {
            country: Some("Japan".into()),
            language: Some("Rust".into()),
            ..Record::default()
        },
    ]
    .into();
    AppState::new(dataset, "Hello from the backend!").shared()
}

#[tokio::test]
async fn data_route_serves_envelope() {
    let response = router(sample_state())
        .oneshot(Request::get("/api/data").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["message"], "Hello from the backend!");
    assert_eq!(json["data"][0]["Country"], "France");

    // The UI decoder must accept exactly what the server emits.
    let dataset = decode_dataset(&bytes).unwrap();
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset[1].language.as_deref(), Some("Rust"));
}

#[tokio::test]
async fn health_route_answers() {
    let response = router(sample_state())
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let response = router(sample_state())
        .oneshot(Request::get("/api/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn json_dataset_file_loads() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"[{{"Species":"Iris-setosa","SepalLengthCm":5.1,"SepalWidthCm":3.5}}]"#
    )
    .unwrap();

    let dataset = loader::load_dataset(file.path()).unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset[0].number("SepalWidthCm"), Some(3.5));
}

#[test]
fn csv_dataset_file_loads() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "Species,SepalLengthCm,SepalWidthCm").unwrap();
    writeln!(file, "Iris-virginica,6.3,3.3").unwrap();

    let dataset = loader::load_dataset(file.path()).unwrap();
    assert_eq!(dataset[0].text("Species").as_deref(), Some("Iris-virginica"));
}

#[test]
fn missing_file_is_an_error() {
    assert!(loader::load_dataset(std::path::Path::new("/definitely/missing.csv")).is_err());
}
