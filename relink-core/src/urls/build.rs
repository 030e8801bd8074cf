use std::collections::BTreeMap;
use url::form_urlencoded;

/// Query parameters with unique keys.
///
/// A `BTreeMap` keeps serialization deterministic; insertion order of the
/// incoming request is irrelevant once keys are unique.
pub type QueryParams = BTreeMap<String, String>;

/// Builds the final redirect URL from a base target and query parameters.
///
/// `raw_query` is the query string of the raw request line. The host
/// rewrites incoming paths before its standard query parsing runs, so its
/// parsed mapping cannot be trusted; callers pass the raw string and it is
/// parsed here. Malformed input degrades to an empty mapping, never an
/// error.
///
/// `explicit` wins on key collision. A non-empty merged mapping is appended
/// to `base_url`, preserving any query component `base_url` already carries.
pub fn build_url(raw_query: &str, base_url: &str, explicit: &QueryParams) -> String {
    let mut params: QueryParams = form_urlencoded::parse(raw_query.as_bytes())
        .into_owned()
        .collect();

    for (key, value) in explicit {
        params.insert(key.clone(), value.clone());
    }

    if params.is_empty() {
        return base_url.to_string();
    }

    let encoded = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(&params)
        .finish();

    let separator = if base_url.contains('?') { '&' } else { '?' };

    format!("{base_url}{separator}{encoded}")
}
