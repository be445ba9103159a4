use axum::Json;
use axum::Router;

use super::error::{ApiError, ApiResult};
use super::payload::ResultBody;
use crate::error::{KernelError, KernelResult};

pub trait HttpService {
    fn name(&self) -> &'static str;
    fn router(&self) -> Router;
}

/// Results that can be written as JSON numbers. serde_json renders ±∞ and
/// NaN as `null`, so those never leave a handler as a success.
pub trait FiniteResult {
    fn is_finite_result(&self) -> bool;
}

impl FiniteResult for f64 {
    fn is_finite_result(&self) -> bool {
        self.is_finite()
    }
}

impl FiniteResult for usize {
    fn is_finite_result(&self) -> bool {
        true
    }
}

impl<T: FiniteResult> FiniteResult for Vec<T> {
    fn is_finite_result(&self) -> bool {
        self.iter().all(FiniteResult::is_finite_result)
    }
}

fn finite<T: FiniteResult>(outcome: KernelResult<T>) -> KernelResult<T> {
    match outcome {
        Ok(result) if !result.is_finite_result() => Err(KernelError::Domain(
            "Result is too large to be represented as a finite number".into(),
        )),
        other => other,
    }
}

// renders a kernel outcome for `endpoint`, logging failures
pub fn respond<T: FiniteResult>(
    endpoint: &str,
    outcome: KernelResult<T>,
) -> ApiResult<Json<ResultBody<T>>> {
    match finite(outcome) {
        Ok(result) => {
            log::debug!("{endpoint}: ok");
            Ok(Json(ResultBody { result }))
        }
        Err(err) => {
            log::warn!("{endpoint}: {} - {err}", err.kind());
            Err(ApiError::from(err))
        }
    }
}
