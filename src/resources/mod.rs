//! Resource modules for the Cloze API.
//!
//! Each resource groups related endpoints and borrows the [`ClozeClient`]
//! it was obtained from. Resources hold no state of their own: every method
//! shapes its arguments into a path, query parameters and body, then calls
//! [`ClozeClient::execute`].
//!
//! # Overview
//!
//! - [`Account`]: profile, custom fields, segments, stages, steps and views
//! - [`Analytics`]: activity, funnel, lead, project and team reports
//! - [`People`], [`Companies`], [`Projects`]: record CRUD, search and feeds
//! - [`Team`]: members, nodes and roles
//! - [`Timeline`]: communications, content, to-dos and message opens
//! - [`Webhooks`]: change-event subscriptions
//!
//! # Example
//!
//! ```rust,ignore
//! use cloze_sdk::resources::FindParams;
//!
//! let page = client
//!     .people()
//!     .find(FindParams::new().pagesize(50).pagenumber(1))
//!     .await?;
//! ```

mod account;
mod analytics;
mod params;
mod records;
mod team;
mod timeline;
mod webhooks;

pub use account::{Account, RelationType};
pub use analytics::Analytics;
pub use params::{FeedParams, FindParams};
pub use records::{Companies, People, Projects, RecordKind, RecordResource};
pub use team::Team;
pub use timeline::{MessageOpensParams, Timeline};
pub use webhooks::{Subscription, Webhooks};

use serde::Serialize;
use serde_json::Value;

use crate::clients::ApiError;

/// Serializes a caller-supplied payload into a JSON body.
///
/// A payload that cannot be represented as JSON is a malformed call and is
/// rejected before any request is built.
pub(crate) fn to_body<T: Serialize + ?Sized>(payload: &T) -> Result<Value, ApiError> {
    serde_json::to_value(payload)
        .map_err(|e| ApiError::validation(format!("Request body is not valid JSON: {e}")))
}

/// Wraps `payload` in a single-key object, e.g. `{"queries": ...}`.
pub(crate) fn wrap_body<T: Serialize + ?Sized>(key: &str, payload: &T) -> Result<Value, ApiError> {
    let mut body = serde_json::Map::new();
    body.insert(key.to_string(), to_body(payload)?);
    Ok(Value::Object(body))
}
