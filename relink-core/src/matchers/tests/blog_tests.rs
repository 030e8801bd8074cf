use super::test_helpers::StubDirectory;
use crate::ctx::Segments;
use crate::host::EntityKind;
use crate::matchers::{RedirectTarget, blog};
use pretty_assertions::assert_eq;

fn segments(parts: &[&str]) -> Segments {
    parts.iter().copied().collect()
}

fn assert_target(actual: Option<RedirectTarget>, url: &str, inherit_query: bool) {
    match actual {
        Some(target) => {
            assert_eq!(target.url, url);
            assert_eq!(target.inherit_query, inherit_query);
            assert!(target.explicit_params.is_empty());
        }
        None => panic!("expected a redirect target for {url}, got pass-through"),
    }
}

//-----------------------------------------------------------------------------
// Group-owned URLs
//-----------------------------------------------------------------------------
#[test]
fn group_view_drops_query_params() {
    // Arrange: pre-reorg form /blog/group:<id>/read/<entry>/<title>
    let directory = StubDirectory::default().with_group(42);

    // Act
    let target = blog::forward(&segments(&["group:42", "read", "99", "title"]), &directory);

    // Assert: entry comes from segment 2, incoming query is not inherited.
    assert_target(target, "blog/view/99/", false);
}

#[test]
fn group_page_without_entry_lists_all() {
    let directory = StubDirectory::default().with_group(42);

    let target = blog::forward(&segments(&["group:42", ""]), &directory);

    assert_target(target, "blog/group/42/all", false);
}

#[test]
fn group_marker_in_second_segment_matches() {
    // 1.7.5-era form: /blog/owner/group:<id>/
    let directory = StubDirectory::default().with_group(7);

    let target = blog::forward(&segments(&["owner", "group:7", ""]), &directory);

    assert_target(target, "blog/group/7/all", false);
}

#[test]
fn group_view_entry_taken_verbatim_from_third_segment() {
    // Whatever sits in segment 2 becomes the entry reference, even when the
    // path carried an interior empty segment.
    let directory = StubDirectory::default().with_group(42);

    let target = blog::forward(&segments(&["group:42", "", "99"]), &directory);

    assert_target(target, "blog/view/99/", false);
}

#[test]
fn unresolvable_group_id_falls_through_to_user_logic() {
    // No entity 42, no user named "group:42" either: pass through.
    let directory = StubDirectory::default();

    let target = blog::forward(&segments(&["group:42", "", "read", "99"]), &directory);

    assert_eq!(target, None);
}

#[test]
fn non_group_entity_does_not_match_group_form() {
    let directory = StubDirectory::default().with_entity(42, EntityKind::Other);

    let target = blog::forward(&segments(&["group:42", ""]), &directory);

    assert_eq!(target, None);
}

#[test]
fn malformed_group_marker_is_not_a_group_url() {
    let directory = StubDirectory::default()
        .with_group(42)
        .with_user("group:42abc", 3);

    let target = blog::forward(&segments(&["group:42abc", ""]), &directory);

    assert_target(target, "blog/owner/group:42abc", true);
}

//-----------------------------------------------------------------------------
// Direct-read form
//-----------------------------------------------------------------------------
#[test]
fn read_forwards_to_view_keeping_query() {
    let directory = StubDirectory::default();

    let target = blog::forward(&segments(&["read", "123"]), &directory);

    assert_target(target, "blog/view/123/", true);
}

//-----------------------------------------------------------------------------
// User-owned URLs
//-----------------------------------------------------------------------------
#[test]
fn bare_username_defaults_to_owner_listing() {
    let directory = StubDirectory::default().with_user("alice", 7);

    let target = blog::forward(&segments(&["alice"]), &directory);

    assert_target(target, "blog/owner/alice", true);
}

#[test]
fn user_read_includes_entry_and_title() {
    let directory = StubDirectory::default().with_user("alice", 7);

    let target = blog::forward(&segments(&["alice", "read", "55", "my-post"]), &directory);

    assert_target(target, "blog/view/55/my-post", true);
}

#[test]
fn user_archive_keeps_username_and_dates() {
    let directory = StubDirectory::default().with_user("alice", 7);

    let target = blog::forward(
        &segments(&["alice", "archive", "2010-01", "2010-02"]),
        &directory,
    );

    assert_target(target, "blog/archive/alice/2010-01/2010-02", true);
}

#[test]
fn user_friends_listing() {
    let directory = StubDirectory::default().with_user("alice", 7);

    let target = blog::forward(&segments(&["alice", "friends"]), &directory);

    assert_target(target, "blog/friends/alice", true);
}

#[test]
fn user_new_uses_resolved_numeric_id() {
    let directory = StubDirectory::default().with_user("alice", 7);

    let target = blog::forward(&segments(&["alice", "new"]), &directory);

    assert_target(target, "blog/add/7", true);
}

//-----------------------------------------------------------------------------
// Pass-through
//-----------------------------------------------------------------------------
#[test]
fn empty_segments_pass_through() {
    let directory = StubDirectory::default();

    assert_eq!(blog::forward(&Segments::new(), &directory), None);
}

#[test]
fn empty_first_segment_passes_through() {
    let directory = StubDirectory::default();

    assert_eq!(blog::forward(&segments(&["", "read", "1"]), &directory), None);
}

#[test]
fn unknown_username_passes_through() {
    let directory = StubDirectory::default();

    assert_eq!(blog::forward(&segments(&["nobody", "owner"]), &directory), None);
}

#[test]
fn unknown_section_passes_through() {
    let directory = StubDirectory::default().with_user("alice", 7);

    assert_eq!(blog::forward(&segments(&["alice", "bogus"]), &directory), None);
}
