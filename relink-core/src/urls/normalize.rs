use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use url::Url;

// Characters never acceptable in a Location header value, beyond controls.
const UNSAFE: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');

/// Normalizes a redirect target into an absolute, safely-escaped URL.
///
/// - An already-absolute target is re-serialized through the `url` crate,
///   which percent-escapes anything unsafe.
/// - A relative target is resolved against `site_base` when one is
///   configured.
/// - Without a base, the target becomes a root-relative reference, which is
///   still a valid `Location` value.
pub fn normalize_url(site_base: Option<&Url>, target: &str) -> String {
    if let Ok(absolute) = Url::parse(target) {
        return absolute.to_string();
    }

    if let Some(base) = site_base {
        let relative = target.trim_start_matches('/');
        if let Ok(joined) = base.join(relative) {
            return joined.to_string();
        }
    }

    root_relative(target)
}

fn root_relative(target: &str) -> String {
    let escaped = utf8_percent_encode(target, UNSAFE).to_string();

    if escaped.starts_with('/') {
        escaped
    } else {
        format!("/{escaped}")
    }
}
