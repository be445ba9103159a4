use axum::routing::{get, post};
use axum::{Json, Router};
use itertools::Itertools;
use serde_json::{Map, Value};
use strum::IntoEnumIterator;

use super::error::{ApiError, ApiResult};
use super::http_service::{respond, HttpService};
use super::payload::{Payload, ResultBody};
use crate::error::KernelResult;
use crate::scalar::ScalarOperation;

pub struct CalculatorService;

impl HttpService for CalculatorService {
    fn name(&self) -> &'static str {
        "calculator"
    }

    fn router(&self) -> Router {
        Router::new()
            .route("/", get(home))
            .route("/calculate", post(calculate))
    }
}

async fn home() -> String {
    format!(
        "Calculator service is running! Supported operations: {}",
        ScalarOperation::iter().join(", ")
    )
}

// strings are matched verbatim; a missing or null operation reads as `None`,
// any other value by its JSON text
fn operation_of(fields: &Map<String, Value>) -> KernelResult<ScalarOperation> {
    match fields.get("operation") {
        Some(Value::String(name)) => ScalarOperation::parse(name),
        None | Some(Value::Null) => ScalarOperation::parse("None"),
        Some(other) => ScalarOperation::parse(&other.to_string()),
    }
}

fn operands_of(fields: &Map<String, Value>) -> ApiResult<(f64, f64)> {
    let (a, b) = match (fields.get("a"), fields.get("b")) {
        (Some(a), Some(b)) if !a.is_null() && !b.is_null() => (a, b),
        _ => return Err(ApiError::bad_request("Operands 'a' and 'b' are required")),
    };
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(ApiError::bad_request("Operands 'a' and 'b' must be numbers")),
    }
}

/// `POST /calculate` with `{"operation": ..., "a": ..., "b": ...}`.
///
/// The operation name is validated before the operands, so a request with an
/// unknown operation and missing operands reports the operation.
pub async fn calculate(payload: Payload) -> ApiResult<Json<ResultBody<f64>>> {
    let fields = match payload {
        Ok(Json(Value::Object(fields))) if !fields.is_empty() => fields,
        _ => return Err(ApiError::bad_request("No input data provided")),
    };
    let operation = operation_of(&fields).map_err(|err| {
        log::warn!("calculate: {err}");
        ApiError::from(err)
    })?;
    let (a, b) = operands_of(&fields)?;
    log::debug!("calculate: {operation}({a}, {b})");
    respond("calculate", operation.apply(a, b))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use serde_json::json;

    use super::*;

    async fn call(body: Value) -> (StatusCode, Value) {
        let response = calculate(Ok(Json(body))).await.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_divide() {
        let (status, body) = call(json!({"operation": "divide", "a": 10, "b": 2})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"result": 5.0}));
    }

    #[tokio::test]
    async fn test_exponent() {
        let (status, body) = call(json!({"operation": "exponent", "a": 2, "b": 3})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"result": 8.0}));
    }

    #[tokio::test]
    async fn test_divide_by_zero() {
        let (status, body) = call(json!({"operation": "divide", "a": 10, "b": 0})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Division by zero is not allowed"}));
    }

    #[tokio::test]
    async fn test_unsupported_operation_is_checked_first() {
        let (status, body) = call(json!({"operation": "modulo"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Operation 'modulo' not supported"}));
    }

    #[tokio::test]
    async fn test_missing_or_non_string_operation() {
        let (status, body) = call(json!({"a": 1, "b": 2})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Operation 'None' not supported"}));
        let (_, body) = call(json!({"operation": null, "a": 1, "b": 2})).await;
        assert_eq!(body, json!({"error": "Operation 'None' not supported"}));
        let (_, body) = call(json!({"operation": 5, "a": 1, "b": 2})).await;
        assert_eq!(body, json!({"error": "Operation '5' not supported"}));
        let (_, body) = call(json!({"operation": "Add", "a": 1, "b": 2})).await;
        assert_eq!(body, json!({"error": "Operation 'Add' not supported"}));
    }

    #[tokio::test]
    async fn test_overflow_is_rejected() {
        let (status, body) = call(json!({"operation": "exponent", "a": 10, "b": 400})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"error": "Result is too large to be represented as a finite number"})
        );
        let (status, _) = call(json!({"operation": "multiply", "a": 1e308, "b": 10})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_home_lists_operations() {
        assert_eq!(
            home().await,
            "Calculator service is running! Supported operations: add, subtract, multiply, divide, exponent"
        );
    }

    #[tokio::test]
    async fn test_missing_operands() {
        let (status, body) = call(json!({"operation": "add", "a": 1})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Operands 'a' and 'b' are required"}));
        let (status, _) = call(json!({"operation": "add", "a": 1, "b": null})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_numeric_operands() {
        let (status, body) = call(json!({"operation": "add", "a": "1", "b": 2})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Operands 'a' and 'b' must be numbers"}));
    }

    #[tokio::test]
    async fn test_empty_body() {
        let (status, body) = call(json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "No input data provided"}));
    }
}
