pub mod blog;
pub mod prefix;
pub mod tag;
#[cfg(test)]
mod tests;

use crate::urls::QueryParams;

/// A matched legacy URL's modern equivalent, before query merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    /// Site-relative target URL
    pub url: String,

    /// Parameters that override anything inherited from the request
    pub explicit_params: QueryParams,

    /// Whether the incoming request's query string is carried over
    pub inherit_query: bool,
}

impl RedirectTarget {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            explicit_params: QueryParams::new(),
            inherit_query: true,
        }
    }

    /// Target that drops the incoming query string entirely.
    pub fn without_query(url: impl Into<String>) -> Self {
        Self {
            inherit_query: false,
            ..Self::new(url)
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.explicit_params.insert(key.into(), value.into());
        self
    }
}
