//! Authentication types for the Cloze API SDK.
//!
//! Cloze accepts either an API key or an OAuth 2.0 access token, both sent
//! as `Authorization: Bearer <value>`. API-key clients may additionally pass
//! the key as an `api_key` query parameter on individual requests.
//!
//! # Example
//!
//! ```rust
//! use cloze_sdk::{ApiKey, Credentials};
//!
//! let credentials = Credentials::from_api_key(ApiKey::new("my-key").unwrap());
//! assert_eq!(credentials.authorization_header(), "Bearer my-key");
//! ```

mod credentials;

pub use credentials::Credentials;
