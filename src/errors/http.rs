use crate::errors::{error::ErrorResponse, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(errors) => HttpError::BadRequest(errors.join("; ")),

            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            // Query failures are logged server-side; the client only ever
            // sees the generic message.
            ServiceError::Repo(repo_err) => {
                error!("❌ Repository failure: {repo_err:?}");
                HttpError::Internal("Internal server error".into())
            }

            ServiceError::Internal(msg) => {
                error!("❌ Internal failure: {msg}");
                HttpError::Internal("Internal server error".into())
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse { message: msg });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RepositoryError;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = HttpError::from(ServiceError::Validation(vec![
            "Missing required fields".into(),
        ]));

        match err {
            HttpError::BadRequest(msg) => assert_eq!(msg, "Missing required fields"),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn not_found_keeps_entity_message() {
        let err = HttpError::from(ServiceError::NotFound("Order not found.".into()));

        match err {
            HttpError::NotFound(msg) => assert_eq!(msg, "Order not found."),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn repository_errors_never_leak_detail() {
        let repo_err = RepositoryError::Sqlx(sqlx::Error::PoolClosed);
        let err = HttpError::from(ServiceError::Repo(repo_err));

        match err {
            HttpError::Internal(msg) => assert_eq!(msg, "Internal server error"),
            other => panic!("expected Internal, got {other:?}"),
        }
    }

    #[test]
    fn status_codes_match_error_kinds() {
        let cases = [
            (HttpError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (HttpError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (
                HttpError::Internal("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
