use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::models::CommentStatus;

/// ApiError
///
/// The error kinds raised by the core. Each is raised at its point of
/// detection and propagates with `?` to the request boundary; no store
/// mutation happens after a failed check, so every failure path leaves the
/// data untouched.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A referenced Post/Comment/User id did not resolve.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The acting principal is neither the resource's author nor an admin.
    #[error("you are not the creator of this resource")]
    OwnershipViolation,

    /// Moderation targeted the comment's current status.
    #[error("comment status is already {0:?}")]
    InvalidModerationTransition(CommentStatus),

    /// No authenticated principal where one is required. Raised by the
    /// extractor, ahead of any store access.
    #[error("authentication required")]
    Unauthorized,

    /// Authenticated but lacking the admin role required by the route.
    #[error("admin role required")]
    Forbidden,

    /// Store-level failure. Not retried; surfaced as a generic failure.
    #[error("database error")]
    Database(#[from] sqlx::Error),
}

/// ErrorBody
///
/// The client-facing failure envelope rendered at the request boundary.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl ApiError {
    /// Maps each error kind to its HTTP status.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::OwnershipViolation => StatusCode::FORBIDDEN,
            ApiError::InvalidModerationTransition(_) => StatusCode::CONFLICT,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    /// The single catch point: log the failure, then render the error
    /// envelope. Caller-input and authorization failures log at WARN; store
    /// failures at ERROR with the driver detail kept out of the response.
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::Database(e) => {
                tracing::error!(error = ?e, "store failure");
            }
            other => {
                tracing::warn!(%status, "{other}");
            }
        }

        let body = ErrorBody {
            success: false,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::NotFound("post").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::OwnershipViolation.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::InvalidModerationTransition(CommentStatus::Approved).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Unauthorized.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::Database(sqlx::Error::PoolClosed).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
