use crate::ctx::Segments;
use crate::matchers::RedirectTarget;

/// Forwards URLs under the deprecated generic `/pg/` prefix.
///
/// Always matches: the prefix is simply stripped, the remaining segments
/// become the target path verbatim, and the request's query parameters ride
/// along via the URL builder.
pub fn forward(segments: &Segments) -> RedirectTarget {
    RedirectTarget::new(segments.join())
}
