//! # Cloze API Rust SDK
//!
//! A Rust SDK for the Cloze CRM API, providing type-safe configuration,
//! credential handling and an async HTTP client with a small, closed error
//! taxonomy.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ClozeConfig`] and [`ClozeConfigBuilder`]
//! - Validated newtypes for API keys, OAuth tokens and the base URL
//! - A single request pipeline, [`ClozeClient::execute`], that every
//!   resource goes through
//! - Resource modules for people, companies, projects, the timeline, team,
//!   analytics, account settings and webhooks
//! - Tagged errors via [`ApiError`] so callers can branch on the failure kind
//!
//! ## Quick Start
//!
//! ```rust
//! use cloze_sdk::{ApiKey, ClozeConfig};
//!
//! let config = ClozeConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.cloze.com");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use cloze_sdk::{ApiError, ClozeClient, ClozeConfig, OAuthToken};
//! use cloze_sdk::resources::FindParams;
//!
//! let config = ClozeConfig::builder()
//!     .oauth_token(OAuthToken::new("oauth-token").unwrap())
//!     .build()?;
//! let client = ClozeClient::new(config)?;
//!
//! let profile = client.account().profile().await?;
//!
//! match client.people().find(FindParams::new().pagesize(50)).await {
//!     Ok(page) => println!("{page}"),
//!     Err(ApiError::RateLimit { .. }) => println!("Slow down"),
//!     Err(other) => return Err(other.into()),
//! }
//! ```
//!
//! ## Configuration from the Environment
//!
//! [`ClozeConfig::from_env`] reads `CLOZE_API_KEY`, `CLOZE_OAUTH_TOKEN`,
//! `CLOZE_BASE_URL`, `CLOZE_TIMEOUT_SECS` and `CLOZE_SSL_VERIFY`.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: The client is `Send + Sync` and can be shared across tasks
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No hidden retries**: Every call is exactly one HTTP exchange

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

/// SDK version, sent in the `User-Agent` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export public types at crate root for convenience
pub use auth::Credentials;
pub use config::{ApiKey, BaseUrl, ClozeConfig, ClozeConfigBuilder, OAuthToken, API_VERSION};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, ApiRequest, ApiRequestBuilder, ClozeClient, HttpMethod, InboundResponse,
    OutboundRequest, QueryParams, QueryValue, ReqwestTransport, RetryPolicy, Transport,
    TransportError,
};
