use std::fmt::Debug;

pub mod assistant;
pub mod progress;
pub mod tokens;

#[derive(Debug)]
pub enum UseCaseError {
    BadRequest(String),          // 400
    Unauthorized,                // 401
    NotFound(String),            // 404
    Conflict(String),            // 409
    InvalidToken,                // 400, deliberately undifferentiated
    NotConfigured(String),       // 503
    InternalServerError(String), // 500
}

pub(crate) fn error_500(e: impl Debug) -> UseCaseError {
    UseCaseError::InternalServerError(format!("{:?}", e))
}
