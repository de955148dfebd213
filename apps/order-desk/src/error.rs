//! # API Error Type
//!
//! Error payload handed to the presentation layer and the driver binary.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Order Desk                         │
//! │                                                                         │
//! │  Unknown size/crust/topping ─── CoreError ─────┐                       │
//! │                                                 │                       │
//! │  Sink refused / offline ─────── SinkError ─────┼──► ApiError ──► JSON  │
//! │                                                 │                       │
//! │  Bad request body / stdin ───── serde / io ────┘                       │
//! │                                                                         │
//! │  Field validation never gets here: it lives in FieldErrors and comes   │
//! │  back as SubmitOutcome::Rejected.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pizza_core::CoreError;
use serde::Serialize;

use crate::sink::SinkError;

/// Error returned from order desk commands.
///
/// ```json
/// {
///   "code": "INVALID_INPUT",
///   "message": "Unknown pizza size: party"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A field name, menu key or value was not recognized
    InvalidInput,

    /// The order sink failed
    SubmissionFailed,

    /// The request body could not be read or parsed
    BadRequest,

    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidInput, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadRequest, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::invalid_input(err.to_string())
    }
}

impl From<SinkError> for ApiError {
    fn from(err: SinkError) -> Self {
        match err {
            SinkError::Serialization(e) => {
                tracing::error!("Order encoding failed: {}", e);
                ApiError::internal("Could not encode order")
            }
            other => ApiError::new(ErrorCode::SubmissionFailed, other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::bad_request(format!("Invalid order request: {}", err))
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::bad_request(format!("Could not read order request: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_core_error() {
        let err: ApiError = CoreError::UnknownSize("party".to_string()).into();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.message, "Unknown pizza size: party");

        let err: ApiError = CoreError::UnknownField("coupon".to_string()).into();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_from_sink_error() {
        let err: ApiError = SinkError::Unavailable("kitchen offline".to_string()).into();
        assert_eq!(err.code, ErrorCode::SubmissionFailed);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::bad_request("empty body");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "BAD_REQUEST");
        assert_eq!(json["message"], "empty body");
        assert_eq!(err.to_string(), "[BadRequest] empty body");
    }
}
