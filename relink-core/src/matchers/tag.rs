use crate::ctx::Segments;
use crate::matchers::RedirectTarget;

/// Forwards the retired `/tag/<tag>` pages to the site search.
///
/// Always matches; the tag is free-form text and goes out as the `q`
/// parameter, encoded by the URL builder.
pub fn forward(segments: &Segments) -> RedirectTarget {
    RedirectTarget::new("search").with_param("q", segments.get(0))
}
