use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use trip_planner_lib::service::ErrorBody;
use trip_planner_services::PlannerError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The body is not JSON at all, or was sent with the wrong content type.
    #[error("{0}")]
    BadRequest(String),
    /// Well-formed JSON that does not fit the expected shape.
    #[error("{0}")]
    Unprocessable(String),
    #[error(transparent)]
    Planner(#[from] PlannerError),
    #[error("The requested resource {path} was not found")]
    NotFound { path: String, request_id: Option<String> },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) | ApiError::Planner(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Unprocessable(_) => "unprocessable_entity",
            ApiError::Planner(_) => "validation_error",
            ApiError::NotFound { .. } => "not_found",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_) => ApiError::Unprocessable(rejection.body_text()),
            _ => ApiError::BadRequest(rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");

        let request_id = match &self {
            ApiError::NotFound { request_id, .. } => request_id.clone(),
            _ => None,
        };

        let body = ErrorBody {
            error: self.kind().to_string(),
            message: self.to_string(),
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_the_request_id() {
        let err = ApiError::NotFound { path: "/nope".into(), request_id: Some("r-1".into()) };
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.kind(), "not_found");
        assert_eq!(err.to_string(), "The requested resource /nope was not found");
    }

    #[test]
    fn planner_errors_are_validation_errors() {
        let err = ApiError::from(PlannerError::EmptyMessage);
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.kind(), "validation_error");
        assert_eq!(err.to_string(), "message must not be empty");
    }
}
