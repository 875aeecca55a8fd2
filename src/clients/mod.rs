//! HTTP client types for Cloze API communication.
//!
//! This module provides the request pipeline every API call runs through:
//! build the request, perform one exchange, classify the response.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ClozeClient`]: The client core; owns the config and a transport
//! - [`ApiRequest`]: A call to be executed, built with [`ApiRequest::builder`]
//! - [`OutboundRequest`]: The fully prepared HTTP request
//! - [`InboundResponse`]: Status and raw body of a completed exchange
//! - [`interpret`]: Turns an [`InboundResponse`] into a value or an [`ApiError`]
//! - [`Transport`]: The swappable HTTP layer, with [`ReqwestTransport`] as default
//! - [`ApiError`]: The classified failure of a call
//! - [`RetryPolicy`]: Optional caller-side backoff for rate-limited calls
//!
//! # Example
//!
//! ```rust,ignore
//! use cloze_sdk::clients::{ApiRequest, HttpMethod};
//!
//! let request = ApiRequest::builder(HttpMethod::Get, "/v1/people/find")
//!     .query_param("pagesize", 10)
//!     .build();
//!
//! let page = client.execute(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! The client never retries. A 429 surfaces as [`ApiError::RateLimit`];
//! wrap the call in [`with_rate_limit_retry`] to back off and try again.

mod client;
mod errors;
mod http_request;
mod http_response;
pub mod retry;
mod transport;

pub use client::ClozeClient;
pub use errors::{ApiError, AUTHENTICATION_MESSAGE, RATE_LIMIT_MESSAGE, UNKNOWN_API_ERROR};
pub use http_request::{
    ApiRequest, ApiRequestBuilder, HttpMethod, OutboundRequest, QueryParams, QueryValue,
};
pub use http_response::{interpret, InboundResponse};
pub use retry::{with_rate_limit_retry, RetryPolicy};
pub use transport::{ReqwestTransport, Transport, TransportError};
