use crate::permission::error::Error;
use actix_web::http::{header, header::HeaderValue, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::InvalidValues(_) | Error::Json(_) => StatusCode::BAD_REQUEST,
            Error::Service(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::warn!("Permission request failed: {}", self);
        }

        let mut res = HttpResponse::build(status).json(json!({
            "code": status.as_u16(),
            "message": self.to_string(),
        }));
        // Proxies love to cache error pages permanently. Explicitly say not to do that.
        let headers = res.headers_mut();
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
        res
    }
}
