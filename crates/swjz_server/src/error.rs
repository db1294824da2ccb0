//! SWJZ server error type.

use axum::{http::StatusCode, response::IntoResponse, Json};
use swjz_api::response as res;

pub type ServerResult<T> = Result<T, ServerError>;

/// An error and the status it is reported with.
pub struct ServerError {
    status: StatusCode,
    report: eyre::Report,
}

impl ServerError {
    pub fn not_found(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self {
            status: StatusCode::NOT_FOUND,
            report: eyre::eyre!(message),
        }
    }
}

impl<E> From<E> for ServerError
where
    E: Into<eyre::Error>,
{
    fn from(value: E) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            report: value.into(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        if self.status.is_server_error() {
            tracing::error!("Request failed: {:?}", self.report);
        } else {
            tracing::info!("Request failed: {}", self.report);
        }
        let err = res::Error {
            message: format!("{:#}", self.report),
        };
        (self.status, Json(err)).into_response()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn any_error_is_internal() {
        let err = ServerError::from(eyre::eyre!("connection refused"));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_keeps_its_status() {
        let err = ServerError::not_found("No character with id 9999");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
