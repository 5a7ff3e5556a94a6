use std::borrow::Cow;

use axum::response::IntoResponse;
use axum::Json;
use hyper::StatusCode;

use crate::validators::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ApiErrorCode(pub u16);

impl ApiErrorCode {
    /// The requested route does not exist.
    pub const ROUTE_NOT_FOUND: Self = Self(404);
    /// A required query parameter is missing, empty, or malformed.
    pub const INVALID_QUERY: Self = Self(1000);
    /// The `sort` parameter is not a known ordering.
    pub const INVALID_SORT: Self = Self(1001);
    pub const INVALID_DATE_RANGE: Self = Self(1002);
    /// The NYTimes API could not be reached or rejected the request.
    pub const UPSTREAM_ERROR: Self = Self(3000);
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status_code: StatusCode,
    pub status: Cow<'static, str>,
    pub error_code: ApiErrorCode,
    pub error: Cow<'static, str>,
}

impl ApiError {
    pub fn new(status_code: StatusCode, error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status_code,
            status: status_code.canonical_reason().unwrap_or("unknown").into(),
            error_code,
            error: error.into(),
        }
    }

    pub fn bad_request(error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_code, error)
    }

    pub fn not_found(error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
        Self::new(StatusCode::NOT_FOUND, error_code, error)
    }

    pub fn unprocessable_entity(error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, error_code, error)
    }

    pub fn internal_server_error(error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, error_code, error)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        let error_code = match err {
            ValidationError::InvalidSort => ApiErrorCode::INVALID_SORT,
            ValidationError::BeginDateInFuture
            | ValidationError::EndDateInFuture
            | ValidationError::EndBeforeBegin { .. } => ApiErrorCode::INVALID_DATE_RANGE,
        };

        Self::bad_request(error_code, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::http::Response<axum::body::Body> {
        (self.status_code, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn validation_errors_are_bad_requests() {
        let err = ApiError::from(ValidationError::InvalidSort);
        assert_eq!(err.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code, ApiErrorCode::INVALID_SORT);
        assert_eq!(err.error, "Sort parameter must be one of: relevance, newest, oldest");

        let err = ApiError::from(ValidationError::EndBeforeBegin {
            begin: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        });
        assert_eq!(err.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code, ApiErrorCode::INVALID_DATE_RANGE);
        assert_eq!(err.status, "Bad Request");
    }
}
