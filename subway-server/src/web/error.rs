//! Mapping of domain errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

use super::dto::ErrorResponse;
use crate::domain::{InvalidLineName, InvalidStationName};
use crate::lines::LineError;
use crate::sections::SectionError;

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Unprocessable { message: String },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Conflict { message }
            | AppError::Unprocessable { message } => message,
        }
    }
}

impl From<SectionError> for AppError {
    fn from(e: SectionError) -> Self {
        let message = e.to_string();
        match e {
            SectionError::NotExistingStation(_) | SectionError::StationNotInSection(_) => {
                AppError::NotFound { message }
            }
            SectionError::DuplicatedStation(_) => AppError::Conflict { message },
            SectionError::InvalidPosition { .. } => AppError::BadRequest { message },
            SectionError::SectionsSizeUnderTwo { .. } => AppError::Unprocessable { message },
        }
    }
}

impl From<LineError> for AppError {
    fn from(e: LineError) -> Self {
        match e {
            LineError::Section(inner) => inner.into(),
            LineError::DuplicatedLine(_) => AppError::Conflict {
                message: e.to_string(),
            },
            LineError::LineNotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            LineError::SameTermini(_) => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl From<InvalidStationName> for AppError {
    fn from(e: InvalidStationName) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<InvalidLineName> for AppError {
    fn from(e: InvalidLineName) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(%status, message = self.message(), "request rejected");

        let body = Json(ErrorResponse {
            error: self.message().to_string(),
        });
        (status, body).into_response()
    }
}
