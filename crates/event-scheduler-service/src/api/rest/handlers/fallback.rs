//! Responses for requests no route accepts

use crate::error::ApiError;

/// Any method other than GET, POST or OPTIONS on the events path
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Any path other than the events path
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
