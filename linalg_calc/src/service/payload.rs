use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{ApiError, ApiResult};
use crate::dense_matrix::Matrix;
use crate::vector::Vector;

/// Request body as handed over by axum; rejections are rendered by the handler.
pub type Payload = Result<Json<Value>, JsonRejection>;

#[derive(Debug, Serialize, PartialEq)]
pub struct ResultBody<T> {
    pub result: T,
}

#[derive(Debug, Deserialize)]
pub struct MatrixPairRequest {
    pub matrix1: Matrix,
    pub matrix2: Matrix,
}

#[derive(Debug, Deserialize)]
pub struct MatrixRequest {
    pub matrix: Matrix,
}

#[derive(Debug, Deserialize)]
pub struct ScaledMatrixRequest {
    pub scalar: f64,
    pub matrix: Matrix,
}

#[derive(Debug, Deserialize)]
pub struct VectorPairRequest {
    pub vector1: Vector,
    pub vector2: Vector,
}

#[derive(Debug, Deserialize)]
pub struct VectorRequest {
    pub vector: Vector,
}

#[derive(Debug, Deserialize)]
pub struct ScaledVectorRequest {
    pub scalar: f64,
    pub vector: Vector,
}

pub fn parse_payload<T: DeserializeOwned>(payload: Payload) -> ApiResult<T> {
    let Json(body) = payload.map_err(|rejection| ApiError::internal(rejection.body_text()))?;
    serde_json::from_value(body).map_err(|err| ApiError::internal(err.to_string()))
}
