/// Classification of a host entity, as far as legacy forwarding cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Group,
    /// Anything else the host stores (content items, sites, ...)
    Other,
}

/// Minimal view of a host entity resolved by numeric id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub id: u64,
    pub kind: EntityKind,
}

/// Minimal view of a host user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
}

/// Entity lookups the plugin delegates to the host platform.
///
/// Both calls are blocking; the host serializes request handling so no
/// coordination happens on this side. A failed lookup is not an error here,
/// it simply turns into a routing pass-through.
pub trait EntityDirectory: Send + Sync {
    /// Resolve an entity by its numeric identifier.
    fn entity_by_id(&self, id: u64) -> Option<Entity>;

    /// Resolve a user account by its unique username.
    fn user_by_name(&self, username: &str) -> Option<User>;
}
