use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::render;
use crate::tools::ToolError;

/// Per-request failure taxonomy.
///
/// None of these ever aborts the process; every variant terminates its own
/// request with a generic page. Diagnostic detail is logged where the error
/// arises, never written into the response body.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("not found")]
    NotFound,

    #[error("forbidden")]
    Forbidden,

    #[error("upstream tool failed: {0}")]
    Upstream(#[from] ToolError),

    #[error("read failure: {0}")]
    ReadFailure(#[from] std::io::Error),
}

impl WebError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebError::NotFound => StatusCode::NOT_FOUND,
            WebError::Forbidden => StatusCode::FORBIDDEN,
            WebError::Upstream(_) => StatusCode::BAD_GATEWAY,
            WebError::ReadFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Terminal response for this error, echoing only the requested link.
    pub fn respond(&self, link: &str) -> Response {
        let status = self.status_code();
        let page = render::error_page(status.as_u16(), link).into_string();
        (status, Html(page)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(WebError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(WebError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        let upstream = WebError::Upstream(ToolError::BadOutput {
            tool: "getIcon".to_string(),
            detail: "garbage".to_string(),
        });
        assert_eq!(upstream.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_response_body_leaks_no_detail() {
        let err = WebError::Upstream(ToolError::BadOutput {
            tool: "/opt/secret/getIcon".to_string(),
            detail: "internal".to_string(),
        });
        let response = err.respond("/media/pic.png.icon");
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
