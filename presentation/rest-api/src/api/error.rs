use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Implemented by endpoint response enums so that both domain errors and
/// request rejections land in the matching status variant.
pub trait FromErrorResponse: Sized {
    fn from_error_response(status: StatusCode, json: Json<ErrorResponse>) -> Self;

    fn from_error<E: IntoErrorResponse>(err: E) -> Self {
        let (status, json) = err.into_error_response();
        Self::from_error_response(status, json)
    }
}

/// Translates an error raised while extracting the request (credentials,
/// path parameters, body) into the uniform JSON error body.
pub fn rejection(err: poem::Error) -> (StatusCode, Json<ErrorResponse>) {
    let status = err.status();
    let body = match status {
        StatusCode::UNAUTHORIZED => ErrorResponse::new("Unauthorized", "auth.unauthorized"),
        StatusCode::FORBIDDEN => ErrorResponse::new("Forbidden", "auth.forbidden"),
        s if s.is_client_error() => {
            tracing::debug!("Request rejected: {err}");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("ValidationError", "request.invalid")),
            );
        }
        _ => {
            tracing::error!("Request extraction failed: {err}");
            ErrorResponse::new("InternalError", "request.extraction_failed")
        }
    };
    (status, Json(body))
}
