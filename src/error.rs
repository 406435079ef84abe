use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Errors that abort rendering a frontend page.
///
/// A failed call to the backend is not one of these: it is shown to the user
/// as part of the page (see `frontend::view`).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Template rendering error: {0}")]
    Template(#[from] tera::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Internal error: {:?}", self);
        let status = StatusCode::INTERNAL_SERVER_ERROR;

        let body = format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <title>Error {}</title>
</head>
<body style="padding: 2rem; font-family: Arial">
    <h1>Error {}</h1>
    <p>Internal server error</p>
    <a href="/">Return to homepage</a>
</body>
</html>"#,
            status.as_u16(),
            status.as_u16(),
        );

        (status, Html(body)).into_response()
    }
}

/// Failure of the frontend's request to the backend.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to backend failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("backend returned {0}")]
    Status(reqwest::StatusCode),

    #[error("backend response was not a message: {0}")]
    Decode(#[source] reqwest::Error),
}
