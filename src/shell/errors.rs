use crate::modules::time_logs::core::errors::ApplicationError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApplicationError::Domain(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApplicationError::Repository(error) => {
                tracing::error!(error = %error, "time log repository error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let message = match status {
            StatusCode::NOT_FOUND => "Not Found.",
            StatusCode::FORBIDDEN => "This action is unauthorized.",
            StatusCode::UNPROCESSABLE_ENTITY => "The given data was invalid.",
            _ => "Server Error.",
        };
        (status, message).into_response()
    }
}
