//! Pagination parameters shared by the people, company and project resources.

use crate::clients::{QueryParams, QueryValue};

/// Parameters for `find` operations (page-number pagination).
///
/// Extra query parameters are sent first; `pagenumber`, `pagesize` and
/// `countonly` override extras with the same name.
///
/// # Example
///
/// ```rust
/// use cloze_sdk::resources::FindParams;
///
/// let params = FindParams::new()
///     .pagenumber(2)
///     .pagesize(25)
///     .param("freeformquery", "acme");
///
/// let query = params.into_query();
/// assert_eq!(query["pagenumber"].to_string(), "2");
/// assert_eq!(query["freeformquery"].to_string(), "acme");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FindParams {
    /// One-based page number.
    pub pagenumber: Option<u32>,
    /// Number of records per page.
    pub pagesize: Option<u32>,
    /// Return only the number of matches.
    pub countonly: Option<bool>,
    /// Additional query, sort and group-by parameters.
    pub extra: QueryParams,
}

impl FindParams {
    /// Creates empty parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page number.
    #[must_use]
    pub const fn pagenumber(mut self, pagenumber: u32) -> Self {
        self.pagenumber = Some(pagenumber);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn pagesize(mut self, pagesize: u32) -> Self {
        self.pagesize = Some(pagesize);
        self
    }

    /// Requests only the match count.
    #[must_use]
    pub const fn countonly(mut self, countonly: bool) -> Self {
        self.countonly = Some(countonly);
        self
    }

    /// Adds an extra query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Converts the parameters into query parameters.
    #[must_use]
    pub fn into_query(self) -> QueryParams {
        let mut query = self.extra;
        if let Some(pagenumber) = self.pagenumber {
            query.insert("pagenumber".to_string(), pagenumber.into());
        }
        if let Some(pagesize) = self.pagesize {
            query.insert("pagesize".to_string(), pagesize.into());
        }
        if let Some(countonly) = self.countonly {
            query.insert("countonly".to_string(), countonly.into());
        }
        query
    }
}

/// Parameters for `feed` operations (cursor pagination).
///
/// Pass the cursor returned by the previous call to continue where it left
/// off. Empty strings are treated as unset.
///
/// # Example
///
/// ```rust
/// use cloze_sdk::resources::FeedParams;
///
/// let query = FeedParams::new().cursor("abc").scope("team").into_query();
/// assert_eq!(query["cursor"].to_string(), "abc");
/// assert!(!query.contains_key("segment"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedParams {
    /// Opaque cursor from a previous feed response.
    pub cursor: Option<String>,
    /// Filter by segment.
    pub segment: Option<String>,
    /// Filter by stage.
    pub stage: Option<String>,
    /// Filter by scope (`team`, `local`, ...).
    pub scope: Option<String>,
    /// Additional query parameters.
    pub extra: QueryParams,
}

impl FeedParams {
    /// Creates empty parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cursor.
    #[must_use]
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Sets the segment filter.
    #[must_use]
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segment = Some(segment.into());
        self
    }

    /// Sets the stage filter.
    #[must_use]
    pub fn stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = Some(stage.into());
        self
    }

    /// Sets the scope filter.
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Adds an extra query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Converts the parameters into query parameters.
    #[must_use]
    pub fn into_query(self) -> QueryParams {
        let mut query = self.extra;
        let named = [
            ("cursor", self.cursor),
            ("segment", self.segment),
            ("stage", self.stage),
            ("scope", self.scope),
        ];
        for (key, value) in named {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                query.insert(key.to_string(), QueryValue::String(value));
            }
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_find_params_produce_no_query() {
        assert!(FindParams::new().into_query().is_empty());
    }

    #[test]
    fn test_find_params_named_values_override_extras() {
        let query = FindParams::new()
            .param("pagesize", 999)
            .pagesize(10)
            .countonly(true)
            .into_query();

        assert_eq!(query["pagesize"], QueryValue::Integer(10));
        assert_eq!(query["countonly"], QueryValue::Bool(true));
        assert!(!query.contains_key("pagenumber"));
    }

    #[test]
    fn test_find_params_keep_zero_values() {
        let query = FindParams::new().pagenumber(0).countonly(false).into_query();
        assert_eq!(query["pagenumber"], QueryValue::Integer(0));
        assert_eq!(query["countonly"], QueryValue::Bool(false));
    }

    #[test]
    fn test_feed_params_skip_empty_strings() {
        let query = FeedParams::new()
            .cursor("")
            .segment("customer")
            .stage("lead")
            .scope("team")
            .into_query();

        assert!(!query.contains_key("cursor"));
        assert_eq!(query["segment"].to_string(), "customer");
        assert_eq!(query["stage"].to_string(), "lead");
        assert_eq!(query["scope"].to_string(), "team");
    }

    #[test]
    fn test_feed_params_keep_extras() {
        let query = FeedParams::new().param("updated_since", 1_700_000_000_i64).into_query();
        assert_eq!(query["updated_since"], QueryValue::Integer(1_700_000_000));
    }
}
