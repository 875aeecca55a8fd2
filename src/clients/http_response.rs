//! HTTP response types for the Cloze API SDK.
//!
//! This module provides [`InboundResponse`], the raw result of one completed
//! exchange, and [`interpret`], which classifies it into a decoded JSON value
//! or an [`ApiError`].

use serde_json::Value;

use crate::clients::errors::{
    ApiError, AUTHENTICATION_MESSAGE, RATE_LIMIT_MESSAGE, UNKNOWN_API_ERROR,
};

/// The status code and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InboundResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The raw response body.
    pub body: String,
}

impl InboundResponse {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` if the status code is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Classifies a response into a decoded value or an [`ApiError`].
///
/// Checks run in this order:
///
/// 1. `429` is [`ApiError::RateLimit`], whatever the body.
/// 2. `401` is [`ApiError::Authentication`], whatever the body.
/// 3. A body that is not JSON is [`ApiError::Api`] naming the status code.
/// 4. An `errorcode` other than `null` or the number `0` is
///    [`ApiError::Api`] with that code and the body's `message` (or
///    `"Unknown API error"`).
/// 5. Anything else is returned verbatim.
///
/// # Errors
///
/// Returns the classified [`ApiError`] for cases 1 to 4.
///
/// # Example
///
/// ```rust
/// use cloze_sdk::clients::{interpret, InboundResponse};
/// use serde_json::json;
///
/// let ok = interpret(InboundResponse::new(200, r#"{"errorcode":0,"user":{"id":"42"}}"#)).unwrap();
/// assert_eq!(ok, json!({"errorcode": 0, "user": {"id": "42"}}));
///
/// let err = interpret(InboundResponse::new(200, r#"{"errorcode":7,"message":"Nope"}"#)).unwrap_err();
/// assert_eq!(err.errorcode(), Some(7));
/// assert_eq!(err.message(), "API error: Nope");
/// ```
pub fn interpret(response: InboundResponse) -> Result<Value, ApiError> {
    match response.status {
        429 => {
            return Err(ApiError::RateLimit {
                message: RATE_LIMIT_MESSAGE.to_string(),
                response: Some(response),
            })
        }
        401 => {
            return Err(ApiError::Authentication {
                message: AUTHENTICATION_MESSAGE.to_string(),
                response: Some(response),
            })
        }
        _ => {}
    }

    let data: Value = match serde_json::from_str(&response.body) {
        Ok(data) => data,
        Err(_) => {
            return Err(ApiError::Api {
                message: format!("Invalid response format. Status: {}", response.status),
                errorcode: None,
                response: Some(response),
            })
        }
    };

    if let Some(errorcode) = error_code(&data) {
        let message = match data.get("message") {
            Some(Value::String(message)) => message.clone(),
            Some(Value::Null) | None => UNKNOWN_API_ERROR.to_string(),
            Some(other) => other.to_string(),
        };
        return Err(ApiError::Api {
            message: format!("API error: {message}"),
            errorcode: errorcode.into_code(),
            response: Some(response),
        });
    }

    Ok(data)
}

/// A non-zero `errorcode` found in a response body.
enum ErrorCode {
    Numeric(i64),
    /// Present and non-zero, but not representable as an integer.
    Opaque,
}

impl ErrorCode {
    const fn into_code(self) -> Option<i64> {
        match self {
            Self::Numeric(code) => Some(code),
            Self::Opaque => None,
        }
    }
}

/// Returns the body's `errorcode` when it signals a failure.
///
/// Only an absent code, `null` or the JSON number `0` mean success; any
/// other value, including `"0"` and `false`, is an error. Whole-number
/// floats such as `1.0` keep their integer value.
fn error_code(data: &Value) -> Option<ErrorCode> {
    match data.get("errorcode")? {
        Value::Null => None,
        Value::Number(number) => {
            if let Some(code) = number.as_i64() {
                (code != 0).then_some(ErrorCode::Numeric(code))
            } else {
                match number.as_f64() {
                    Some(value) if value == 0.0 => None,
                    Some(value) => Some(
                        whole_number(value).map_or(ErrorCode::Opaque, ErrorCode::Numeric),
                    ),
                    None => Some(ErrorCode::Opaque),
                }
            }
        }
        Value::String(text) => Some(
            text.trim()
                .parse::<i64>()
                .map_or(ErrorCode::Opaque, ErrorCode::Numeric),
        ),
        _ => Some(ErrorCode::Opaque),
    }
}

/// Returns `value` as an `i64` if it is a finite whole number in range.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn whole_number(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then(|| value as i64)
}
