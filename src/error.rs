//! Error taxonomy shared by every operation, with HTTP mappings for the API.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Every rule violation an operation can signal. Detection is synchronous
/// and nothing is partially applied: each operation performs at most one
/// store mutation, after all its checks have passed.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum AppError {
    /// No identity, an identity that does not resolve, or a caller missing
    /// the unique id an operation requires.
    #[error("Not authenticated")]
    Unauthenticated,
    /// Authenticated but lacking the required role or ownership.
    #[error("Insufficient permissions")]
    Forbidden,
    /// A referenced entity id does not resolve.
    #[error("Not found")]
    NotFound,
    /// Target tournament is missing, closed to registration, or already over.
    #[error("Tournament not open")]
    TournamentNotOpen,
    /// The owner already registered a team for this tournament.
    #[error("A team is already registered for this tournament")]
    DuplicateRegistration,
    /// The tournament reached its team capacity.
    #[error("Tournament is full")]
    TournamentFull,
    /// The user already has a player profile.
    #[error("Player profile already exists")]
    ProfileExists,
    /// A malformed field (e.g. an OTP that is not six digits).
    #[error("{0}")]
    InvalidInput(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::TournamentNotOpen
            | AppError::DuplicateRegistration
            | AppError::TournamentFull
            | AppError::ProfileExists => StatusCode::CONFLICT,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
