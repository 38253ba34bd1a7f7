use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use doctor_cell::handlers::*;
use shared_config::AppConfig;
use shared_models::error::AppError;
use shared_utils::test_utils::MockRows;

fn mock_config(mock_server: &MockServer) -> Arc<AppConfig> {
    Arc::new(AppConfig {
        supabase_url: mock_server.uri(),
        supabase_anon_key: "test-anon-key".to_string(),
        supabase_jwt_secret: "test-secret-key-for-jwt-validation-must-be-long-enough".to_string(),
        port: 3000,
    })
}

#[tokio::test]
async fn test_list_doctors() {
    let mock_server = MockServer::start().await;
    let doctor_id = Uuid::new_v4().to_string();

    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockRows::doctor(&doctor_id, "Dr. A", "Cardiology")
        ])))
        .mount(&mock_server)
        .await;

    let result = list_doctors(State(mock_config(&mock_server))).await;

    assert!(result.is_ok(), "Expected list_doctors to succeed, but got error: {:?}", result.err());
    let Json(body) = result.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["name"], "Dr. A");
}

#[tokio::test]
async fn test_create_doctor_success() {
    let mock_server = MockServer::start().await;
    let doctor_id = Uuid::new_v4().to_string();

    Mock::given(method("POST"))
        .and(path("/rest/v1/doctors"))
        .and(header("Prefer", "return=representation"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            MockRows::doctor(&doctor_id, "Dr. A", "Cardiology")
        ])))
        .mount(&mock_server)
        .await;

    let result = create_doctor(
        State(mock_config(&mock_server)),
        Json(json!({ "name": "Dr. A", "category": "Cardiology" })),
    )
    .await;

    assert!(result.is_ok(), "Expected create_doctor to succeed, but got error: {:?}", result.err());
    let (status, Json(body)) = result.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Doctor created successfully");
    assert!(body["data"]["image"].is_null());
    assert!(body["data"]["schedule"].is_null());
}

#[tokio::test]
async fn test_create_doctor_validation_error() {
    let mock_server = MockServer::start().await;

    let result = create_doctor(
        State(mock_config(&mock_server)),
        Json(json!({ "name": "", "category": "Cardiology" })),
    )
    .await;

    match result.unwrap_err() {
        AppError::Validation(errors) => {
            assert_eq!(errors["name"], vec!["The name field is required"]);
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_doctor_invalid_schedule_day() {
    let mock_server = MockServer::start().await;

    let result = create_doctor(
        State(mock_config(&mock_server)),
        Json(json!({
            "name": "Dr. A",
            "category": "Cardiology",
            "schedule": [{ "day": "Funday", "time_range": "09:00 - 12:00" }]
        })),
    )
    .await;

    match result.unwrap_err() {
        AppError::Validation(errors) => {
            assert!(errors.contains_key("schedule.0.day"));
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_doctor_success() {
    let mock_server = MockServer::start().await;
    let doctor_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .and(query_param("id", format!("eq.{doctor_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockRows::doctor(&doctor_id.to_string(), "Dr. A", "Cardiology")
        ])))
        .mount(&mock_server)
        .await;

    let result = get_doctor(State(mock_config(&mock_server)), Path(doctor_id)).await;

    assert!(result.is_ok(), "Expected get_doctor to succeed, but got error: {:?}", result.err());
    let Json(body) = result.unwrap();
    assert_eq!(body["data"]["id"], doctor_id.to_string());
}

#[tokio::test]
async fn test_get_doctor_not_found() {
    let mock_server = MockServer::start().await;
    let doctor_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let result = get_doctor(State(mock_config(&mock_server)), Path(doctor_id)).await;

    match result.unwrap_err() {
        AppError::NotFound(message) => assert_eq!(message, "Doctor not found"),
        other => panic!("Expected NotFound error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_doctor_success() {
    let mock_server = MockServer::start().await;
    let doctor_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .and(query_param("id", format!("eq.{doctor_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockRows::doctor(&doctor_id.to_string(), "Dr. A", "Cardiology")
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/doctors"))
        .and(query_param("id", format!("eq.{doctor_id}")))
        .and(header("Prefer", "return=representation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockRows::doctor(&doctor_id.to_string(), "Dr. B", "Dermatology")
        ])))
        .mount(&mock_server)
        .await;

    let result = update_doctor(
        State(mock_config(&mock_server)),
        Path(doctor_id),
        Json(json!({ "name": "Dr. B", "category": "Dermatology" })),
    )
    .await;

    assert!(result.is_ok(), "Expected update_doctor to succeed, but got error: {:?}", result.err());
    let Json(body) = result.unwrap();
    assert_eq!(body["message"], "Doctor updated successfully");
    assert_eq!(body["data"]["name"], "Dr. B");
}

#[tokio::test]
async fn test_update_missing_doctor_is_not_found_even_with_invalid_payload() {
    let mock_server = MockServer::start().await;
    let doctor_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let result = update_doctor(
        State(mock_config(&mock_server)),
        Path(doctor_id),
        Json(json!({ "name": "" })),
    )
    .await;

    match result.unwrap_err() {
        AppError::NotFound(message) => assert_eq!(message, "Doctor not found"),
        other => panic!("Expected NotFound error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_doctor_success() {
    let mock_server = MockServer::start().await;
    let doctor_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .and(query_param("id", format!("eq.{doctor_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockRows::doctor(&doctor_id.to_string(), "Dr. A", "Cardiology")
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/doctors"))
        .and(query_param("id", format!("eq.{doctor_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockRows::doctor(&doctor_id.to_string(), "Dr. A", "Cardiology")
        ])))
        .mount(&mock_server)
        .await;

    let result = delete_doctor(State(mock_config(&mock_server)), Path(doctor_id)).await;

    assert!(result.is_ok(), "Expected delete_doctor to succeed, but got error: {:?}", result.err());
    let Json(body) = result.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Doctor deleted successfully");
}

#[tokio::test]
async fn test_delete_missing_doctor_is_not_found() {
    let mock_server = MockServer::start().await;
    let doctor_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let result = delete_doctor(State(mock_config(&mock_server)), Path(doctor_id)).await;

    match result.unwrap_err() {
        AppError::NotFound(message) => assert_eq!(message, "Doctor not found"),
        other => panic!("Expected NotFound error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_doctors_persistence_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .respond_with(ResponseTemplate::new(500).set_body_string("storage exploded"))
        .mount(&mock_server)
        .await;

    let result = list_doctors(State(mock_config(&mock_server))).await;

    match result.unwrap_err() {
        AppError::Database { message, detail } => {
            assert_eq!(message, "Failed to fetch doctors");
            assert!(detail.contains("storage exploded"));
        }
        other => panic!("Expected Database error, got {other:?}"),
    }
}
