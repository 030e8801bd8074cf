use crate::ctx::Segments;
use crate::host::{EntityDirectory, EntityKind};
use crate::matchers::RedirectTarget;
use tracing::debug;

/// Forwards blog URLs from two historical schemes.
///
/// Pre-reorganization:
/// - Group blogs page: `/blog/group:<id>/`
/// - Group blog view:  `/blog/group:<id>/read/<entry>/<title>`
///
/// Post-reorganization (pre-current):
/// - Group blogs page: `/blog/owner/group:<id>/`
/// - Group blog view:  `/blog/read/<entry>`
/// - User forms:       `/blog/<username>/{read,archive,friends,new,owner}/...`
///
/// Returns `None` for anything that is not one of those shapes, leaving the
/// request untouched for default routing.
pub fn forward(segments: &Segments, entities: &dyn EntityDirectory) -> Option<RedirectTarget> {
    let mut page = segments.clone();
    page.pad_to(4);

    // Both historical group forms put the group marker in segment 0 or 1.
    if let Some(id) = group_marker(page.get(0)).or_else(|| group_marker(page.get(1))) {
        let is_group = entities
            .entity_by_id(id)
            .is_some_and(|entity| entity.kind == EntityKind::Group);

        if is_group {
            let url = if !page.get(2).is_empty() {
                format!("blog/view/{}/", page.get(2))
            } else {
                format!("blog/group/{id}/all")
            };

            debug!(group = id, url = %url, "forwarding legacy group blog URL");
            // The old group URLs carried invalid query strings; drop them.
            return Some(RedirectTarget::without_query(url));
        }
    }

    if page.get(0).is_empty() {
        return None;
    }

    // Old single-entry direct-read form.
    if page.get(0) == "read" {
        return Some(RedirectTarget::new(format!("blog/view/{}/", page.get(1))));
    }

    // Anything else starts with a username, or is not ours at all.
    let user = entities.user_by_name(page.get(0))?;

    let section = match page.get(1) {
        "" => "owner",
        other => other,
    };

    let url = match section {
        "read" => format!("blog/view/{}/{}", page.get(2), page.get(3)),
        "archive" => format!("blog/archive/{}/{}/{}", page.get(0), page.get(2), page.get(3)),
        "friends" => format!("blog/friends/{}", page.get(0)),
        "new" => format!("blog/add/{}", user.id),
        "owner" => format!("blog/owner/{}", page.get(0)),
        _ => return None,
    };

    debug!(user = page.get(0), url = %url, "forwarding legacy user blog URL");
    Some(RedirectTarget::new(url))
}

/// Does `segment` look like `group:<digits>`?
///
/// Structured replacement for the original's regex over a re-joined path
/// string; the match is against one whole segment, nothing else.
fn group_marker(segment: &str) -> Option<u64> {
    let digits = segment.strip_prefix("group:")?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    digits.parse().ok()
}
