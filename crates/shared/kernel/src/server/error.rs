use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use std::borrow::Cow;
use tracing::{debug, error};

use super::ApiStateError;

/// Transport-level failure, rendered as a plain-text body with a matching status code.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or rejected input.
    #[error("{message}")]
    BadRequest { message: Cow<'static, str> },

    /// The request is well-formed but the current state cannot serve it.
    #[error("{message}")]
    Conflict { message: Cow<'static, str> },

    /// The path exists but does not accept this HTTP verb.
    #[error("Invalid request method {method}")]
    MethodNotAllowed { method: Method },

    /// Anything the caller cannot fix. Details are logged, not returned.
    #[error("Internal server error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    pub fn conflict(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Conflict { message: message.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::Internal { .. } = &self {
            error!(error = %self, "Request failed");
            return (status, "Internal server error").into_response();
        }

        debug!(status = status.as_u16(), error = %self, "Request rejected");
        (status, self.to_string()).into_response()
    }
}

impl From<ApiStateError> for ApiError {
    fn from(err: ApiStateError) -> Self {
        Self::Internal { message: err.to_string().into(), context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// Router-wide fallback for a known path hit with the wrong verb.
#[allow(clippy::unused_async)]
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed { method }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn bad_request_renders_message_as_text() {
        let response = ApiError::bad_request("Pack size already exists").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Pack size already exists");
    }

    #[tokio::test]
    async fn internal_error_hides_details() {
        let response = ApiError::Internal {
            message: "slice missing".into(),
            context: Some("lookup".into()),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Internal server error");
    }

    #[tokio::test]
    async fn wrong_verb_maps_to_405() {
        let err = method_not_allowed(Method::GET).await;
        assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.to_string(), "Invalid request method GET");
    }
}
