use axum::routing::{get, post};
use axum::{Json, Router};

use super::error::ApiResult;
use super::http_service::{respond, HttpService};
use super::payload::{
    parse_payload, MatrixPairRequest, MatrixRequest, Payload, ResultBody, ScaledMatrixRequest,
    ScaledVectorRequest, VectorPairRequest, VectorRequest,
};
use crate::dense_matrix::{self, Matrix};
use crate::vector::{self, Vector};

pub struct MatrixService;

impl HttpService for MatrixService {
    fn name(&self) -> &'static str {
        "matrix"
    }

    fn router(&self) -> Router {
        Router::new()
            .route("/", get(home))
            .route("/add", post(add_matrices))
            .route("/subtract", post(subtract_matrices))
            .route("/multiply", post(multiply_matrices))
            .route("/scalar-multiply", post(scalar_multiply_matrix))
            .route("/rref", post(rref_matrix))
            .route("/rank", post(rank))
            .route("/inverse", post(inverse_matrix))
            .route("/row-space", post(row_space))
            .route("/column-space", post(column_space))
            .route("/vector/add", post(add_vectors))
            .route("/vector/subtract", post(subtract_vectors))
            .route("/vector/scalar-multiply", post(scalar_multiply_vector))
            .route("/vector/dot", post(dot_product))
            .route("/vector/cross", post(cross_product))
            .route("/vector/normalize", post(normalize_vector))
    }
}

type MatrixResponse = ApiResult<Json<ResultBody<Matrix>>>;
type VectorResponse = ApiResult<Json<ResultBody<Vector>>>;

async fn home() -> &'static str {
    "Matrix service is running!"
}

pub async fn add_matrices(payload: Payload) -> MatrixResponse {
    let MatrixPairRequest { matrix1, matrix2 } = parse_payload(payload)?;
    respond("add", dense_matrix::add(&matrix1, &matrix2))
}

pub async fn subtract_matrices(payload: Payload) -> MatrixResponse {
    let MatrixPairRequest { matrix1, matrix2 } = parse_payload(payload)?;
    respond("subtract", dense_matrix::subtract(&matrix1, &matrix2))
}

pub async fn multiply_matrices(payload: Payload) -> MatrixResponse {
    let MatrixPairRequest { matrix1, matrix2 } = parse_payload(payload)?;
    respond("multiply", dense_matrix::multiply(&matrix1, &matrix2))
}

pub async fn scalar_multiply_matrix(payload: Payload) -> MatrixResponse {
    let ScaledMatrixRequest { scalar, matrix } = parse_payload(payload)?;
    respond("scalar-multiply", dense_matrix::scalar_multiply(scalar, &matrix))
}

pub async fn rref_matrix(payload: Payload) -> MatrixResponse {
    let MatrixRequest { matrix } = parse_payload(payload)?;
    respond("rref", dense_matrix::rref(&matrix))
}

pub async fn rank(payload: Payload) -> ApiResult<Json<ResultBody<usize>>> {
    let MatrixRequest { matrix } = parse_payload(payload)?;
    respond("rank", dense_matrix::rank(&matrix))
}

pub async fn inverse_matrix(payload: Payload) -> MatrixResponse {
    let MatrixRequest { matrix } = parse_payload(payload)?;
    respond("inverse", dense_matrix::inverse(&matrix))
}

pub async fn row_space(payload: Payload) -> MatrixResponse {
    let MatrixRequest { matrix } = parse_payload(payload)?;
    respond("row-space", dense_matrix::row_space(&matrix))
}

pub async fn column_space(payload: Payload) -> MatrixResponse {
    let MatrixRequest { matrix } = parse_payload(payload)?;
    respond("column-space", dense_matrix::column_space(&matrix))
}

pub async fn add_vectors(payload: Payload) -> VectorResponse {
    let VectorPairRequest { vector1, vector2 } = parse_payload(payload)?;
    respond("vector/add", vector::add(&vector1, &vector2))
}

pub async fn subtract_vectors(payload: Payload) -> VectorResponse {
    let VectorPairRequest { vector1, vector2 } = parse_payload(payload)?;
    respond("vector/subtract", vector::subtract(&vector1, &vector2))
}

pub async fn scalar_multiply_vector(payload: Payload) -> VectorResponse {
    let ScaledVectorRequest { scalar, vector } = parse_payload(payload)?;
    respond("vector/scalar-multiply", vector::scalar_multiply(scalar, &vector))
}

pub async fn dot_product(payload: Payload) -> ApiResult<Json<ResultBody<f64>>> {
    let VectorPairRequest { vector1, vector2 } = parse_payload(payload)?;
    respond("vector/dot", vector::dot(&vector1, &vector2))
}

pub async fn cross_product(payload: Payload) -> VectorResponse {
    let VectorPairRequest { vector1, vector2 } = parse_payload(payload)?;
    respond("vector/cross", vector::cross(&vector1, &vector2))
}

pub async fn normalize_vector(payload: Payload) -> VectorResponse {
    let VectorRequest { vector } = parse_payload(payload)?;
    respond("vector/normalize", vector::normalize(&vector))
}

#[cfg(test)]
mod tests {
    use std::future::Future;

    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use serde_json::{json, Value};

    use super::*;

    async fn call<H, F, R>(handler: H, body: Value) -> (StatusCode, Value)
    where
        H: FnOnce(Payload) -> F,
        F: Future<Output = R>,
        R: IntoResponse,
    {
        let response = handler(Ok(Json(body))).await.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_add() {
        let (status, body) = call(
            add_matrices,
            json!({"matrix1": [[1, 2], [3, 4]], "matrix2": [[5, 6], [7, 8]]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"result": [[6.0, 8.0], [10.0, 12.0]]}));
    }

    #[tokio::test]
    async fn test_add_dimension_mismatch() {
        let (status, body) = call(
            add_matrices,
            json!({"matrix1": [[1, 2], [3, 4]], "matrix2": [[1, 2, 3], [4, 5, 6], [7, 8, 9]]}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"error": "Matrices must have the same dimensions for addition."})
        );
    }

    #[tokio::test]
    async fn test_multiply_dimension_mismatch() {
        let (status, _) = call(
            multiply_matrices,
            json!({"matrix1": [[1, 2, 3]], "matrix2": [[1, 2, 3]]}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_matrix_is_server_error() {
        let (status, body) = call(subtract_matrices, json!({"matrix1": [[1]]})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("matrix2"));
    }

    #[tokio::test]
    async fn test_ragged_matrix_is_server_error() {
        let (status, _) = call(rref_matrix, json!({"matrix": [[1, 2], [3]]})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_rref() {
        let (status, body) = call(rref_matrix, json!({"matrix": [[0, 2, 4], [0, 1, 2]]})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"result": [[0.0, 1.0, 2.0], [0.0, 0.0, 0.0]]}));
    }

    #[tokio::test]
    async fn test_rank() {
        let (status, body) = call(rank, json!({"matrix": [[1, 2], [2, 4]]})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"result": 1}));
    }

    #[tokio::test]
    async fn test_inverse() {
        let (status, body) = call(inverse_matrix, json!({"matrix": [[2, 0], [0, 2]]})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"result": [[0.5, 0.0], [0.0, 0.5]]}));
        let (status, body) = call(inverse_matrix, json!({"matrix": [[1, 2], [2, 4]]})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"error": "Matrix is singular and cannot be inverted."})
        );
        let (status, _) = call(inverse_matrix, json!({"matrix": [[1, 2, 3]]})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_spaces() {
        let matrix = json!({"matrix": [[0, 2, 4], [0, 1, 2]]});
        let (_, body) = call(row_space, matrix.clone()).await;
        assert_eq!(body, json!({"result": [[0.0, 1.0, 2.0]]}));
        let (_, body) = call(column_space, matrix).await;
        assert_eq!(body, json!({"result": [[2.0, 1.0], [4.0, 2.0]]}));
    }

    #[tokio::test]
    async fn test_vector_endpoints() {
        let pair = json!({"vector1": [1, 2, 3], "vector2": [4, 5, 6]});
        let (_, body) = call(dot_product, pair.clone()).await;
        assert_eq!(body, json!({"result": 32.0}));
        let (_, body) = call(add_vectors, pair.clone()).await;
        assert_eq!(body, json!({"result": [5.0, 7.0, 9.0]}));
        let (_, body) = call(cross_product, pair).await;
        assert_eq!(body, json!({"result": [-3.0, 6.0, -3.0]}));
        let (_, body) = call(scalar_multiply_vector, json!({"scalar": 2, "vector": [1, -1]})).await;
        assert_eq!(body, json!({"result": [2.0, -2.0]}));
    }

    #[tokio::test]
    async fn test_normalize_zero_vector() {
        let (status, body) = call(normalize_vector, json!({"vector": [0, 0]})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Cannot normalize the zero vector."}));
    }

    #[tokio::test]
    async fn test_cross_requires_three_dimensions() {
        let (status, _) = call(
            cross_product,
            json!({"vector1": [1, 2], "vector2": [3, 4]}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_scalar_multiply_matrix() {
        let (status, body) = call(
            scalar_multiply_matrix,
            json!({"scalar": -2, "matrix": [[1, 2], [3, 4]]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"result": [[-2.0, -4.0], [-6.0, -8.0]]}));
    }

    #[tokio::test]
    async fn test_subtract_vectors() {
        let (status, body) = call(
            subtract_vectors,
            json!({"vector1": [1, 2, 3], "vector2": [3, 2, 1]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"result": [-2.0, 0.0, 2.0]}));
        let (status, _) = call(subtract_vectors, json!({"vector1": [1], "vector2": [1, 2]})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_overflowing_product_is_rejected() {
        let (status, body) = call(
            multiply_matrices,
            json!({"matrix1": [[1e308]], "matrix2": [[10]]}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"error": "Result is too large to be represented as a finite number"})
        );
        let (status, _) = call(dot_product, json!({"vector1": [1e308, 1e308], "vector2": [10, 10]})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
