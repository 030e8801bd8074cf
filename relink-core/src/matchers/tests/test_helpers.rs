use crate::host::{Entity, EntityDirectory, EntityKind, User};
use std::collections::HashMap;

/// In-memory entity directory for matcher tests.
#[derive(Default)]
pub(crate) struct StubDirectory {
    entities: HashMap<u64, Entity>,
    users: HashMap<String, User>,
}

impl StubDirectory {
    pub fn with_group(mut self, id: u64) -> Self {
        self.entities.insert(
            id,
            Entity {
                id,
                kind: EntityKind::Group,
            },
        );
        self
    }

    pub fn with_entity(mut self, id: u64, kind: EntityKind) -> Self {
        self.entities.insert(id, Entity { id, kind });
        self
    }

    pub fn with_user(mut self, name: &str, id: u64) -> Self {
        self.users.insert(
            name.to_string(),
            User {
                id,
                name: name.to_string(),
            },
        );
        self
    }
}

impl EntityDirectory for StubDirectory {
    fn entity_by_id(&self, id: u64) -> Option<Entity> {
        self.entities.get(&id).cloned()
    }

    fn user_by_name(&self, username: &str) -> Option<User> {
        self.users.get(username).cloned()
    }
}
