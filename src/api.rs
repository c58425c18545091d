//! HTTP surface for the student registry.
//!
//! This module exposes a compact Axum router with the CRUD endpoints plus one
//! derived read:
//!
//! - `GET /healthcheck` – Liveness probe returning `{"status":"hello"}`.
//! - `POST /students` – Create a student, returning `{"id": <int>}` with 201.
//! - `GET /students` – List all students as a JSON array.
//! - `GET /students/{id}` – Fetch one student.
//! - `PUT /students/{id}` – Replace a student's fields (id preserved).
//! - `DELETE /students/{id}` – Remove a student.
//! - `GET /students/{id}/summary` – Render a one-sentence text summary.
//!
//! Handlers are thin: parse the path id, decode and validate the body, call one
//! store method, serialize the result. Every failure maps to a plain-text 400
//! or 404 response; nothing is retried.

use crate::store::{NewStudent, Student, StudentStore};
use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Build the HTTP router over an explicitly constructed store.
///
/// The store is injected rather than read from a global so tests can run
/// against isolated instances in parallel.
pub fn create_router(store: Arc<StudentStore>) -> Router {
    Router::new()
        .route("/healthcheck", get(health_check))
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/students/:id/summary", get(student_summary))
        .with_state(store)
}

/// Request-terminating errors, each mapped to a single HTTP status.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Path parameter was not a valid positive integer.
    #[error("Invalid student ID")]
    InvalidId,
    /// Request body was missing or not decodable as JSON.
    #[error("Invalid request body")]
    MalformedBody,
    /// Body decoded but failed the field presence checks.
    #[error("Invalid student data")]
    InvalidFields,
    /// The referenced id does not exist in the store.
    #[error("Student not found")]
    NotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidId | Self::MalformedBody | Self::InvalidFields => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
        };
        (status, self.to_string()).into_response()
    }
}

/// Parse a raw path segment as a positive student id.
fn parse_id(raw: &str) -> Result<u64, ApiError> {
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::InvalidId),
    }
}

/// Decode and validate a request body, folding both failure modes into errors.
fn accept_body(body: Result<Json<NewStudent>, JsonRejection>) -> Result<NewStudent, ApiError> {
    let Json(new) = body.map_err(|_| ApiError::MalformedBody)?;
    if !new.is_valid() {
        return Err(ApiError::InvalidFields);
    }
    Ok(new)
}

/// Response body for `GET /healthcheck`.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "hello" })
}

/// Response body for `POST /students`.
#[derive(Serialize)]
struct CreatedResponse {
    /// Identifier assigned to the newly created student.
    id: u64,
}

/// Create a student from a validated body and return its assigned id.
async fn create_student(
    State(store): State<Arc<StudentStore>>,
    body: Result<Json<NewStudent>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let new = accept_body(body)?;
    let id = store.add(new);
    tracing::info!(id, "Student created");
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Return a snapshot of all students. Order is unspecified.
async fn list_students(State(store): State<Arc<StudentStore>>) -> Json<Vec<Student>> {
    Json(store.get_all())
}

/// Fetch a single student by id.
async fn get_student(
    State(store): State<Arc<StudentStore>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Student>, ApiError> {
    let id = parse_id(&raw_id)?;
    store.get(id).map(Json).ok_or(ApiError::NotFound)
}

/// Replace an existing student's fields, keeping its id.
async fn update_student(
    State(store): State<Arc<StudentStore>>,
    Path(raw_id): Path<String>,
    body: Result<Json<NewStudent>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    let new = accept_body(body)?;
    if !store.update(id, new) {
        return Err(ApiError::NotFound);
    }
    tracing::info!(id, "Student updated");
    Ok(StatusCode::OK)
}

/// Remove a student by id.
async fn delete_student(
    State(store): State<Arc<StudentStore>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    if !store.delete(id) {
        return Err(ApiError::NotFound);
    }
    tracing::info!(id, "Student deleted");
    Ok(StatusCode::OK)
}

/// Response body for `GET /students/{id}/summary`.
#[derive(Serialize)]
struct SummaryResponse {
    summary: String,
}

/// Render the fixed-sentence summary for one student.
async fn student_summary(
    State(store): State<Arc<StudentStore>>,
    Path(raw_id): Path<String>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let id = parse_id(&raw_id)?;
    let student = store.get(id).ok_or(ApiError::NotFound)?;
    let summary = format!(
        "Student {} is {} years old and can be contacted at {}.",
        student.name, student.age, student.email
    );
    Ok(Json(SummaryResponse { summary }))
}

#[cfg(test)]
mod tests {
    use super::create_router;
    use crate::store::StudentStore;
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(Arc::new(StudentStore::new()))
    }

    fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(value) => builder
                .header("content-type", "application/json")
                .body(Body::from(value.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request")
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn healthcheck_reports_hello() {
        let response = app()
            .oneshot(request(Method::GET, "/healthcheck", None))
            .await
            .expect("router response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "hello"}));
    }

    #[tokio::test]
    async fn create_then_summary_round_trip() {
        let app = app();

        let payload = json!({
            "name": "John Doe",
            "age": 20,
            "email": "john@example.com"
        });
        let response = app
            .clone()
            .oneshot(request(Method::POST, "/students", Some(payload)))
            .await
            .expect("router response");
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await, json!({"id": 1}));

        let response = app
            .oneshot(request(Method::GET, "/students/1/summary", None))
            .await
            .expect("router response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "summary":
                    "Student John Doe is 20 years old and can be contacted at john@example.com."
            })
        );
    }

    #[tokio::test]
    async fn create_rejects_zero_age() {
        let payload = json!({
            "name": "John Doe",
            "age": 0,
            "email": "john@example.com"
        });
        let response = app()
            .oneshot(request(Method::POST, "/students", Some(payload)))
            .await
            .expect("router response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_rejects_malformed_json() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/students")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .expect("request"),
            )
            .await
            .expect("router response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_missing_student_is_not_found() {
        let payload = json!({
            "name": "Jane Doe",
            "age": 22,
            "email": "jane@example.com"
        });
        let response = app()
            .oneshot(request(Method::PUT, "/students/999", Some(payload)))
            .await
            .expect("router response");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_numeric_or_zero_id_is_bad_request() {
        for uri in ["/students/abc", "/students/abc/summary", "/students/0"] {
            let response = app()
                .oneshot(request(Method::GET, uri, None))
                .await
                .expect("router response");
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");
        }
    }

    #[tokio::test]
    async fn get_and_delete_missing_student_are_not_found() {
        let app = app();

        let response = app
            .clone()
            .oneshot(request(Method::GET, "/students/42", None))
            .await
            .expect("router response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(request(Method::DELETE, "/students/42", None))
            .await
            .expect("router response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn body_id_is_ignored_on_create() {
        let payload = json!({
            "id": 777,
            "name": "John Doe",
            "age": 20,
            "email": "john@example.com"
        });
        let response = app()
            .oneshot(request(Method::POST, "/students", Some(payload)))
            .await
            .expect("router response");

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await, json!({"id": 1}));
    }
}
