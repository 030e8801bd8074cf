use relink_core::host::{
    Entity, EntityDirectory, EntityKind, Presenter, SettingsStore, User,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory stand-in for every host collaborator the plugin talks to:
/// settings store, entity directory, and presenter.
///
/// Flash messages and rendered landing pages are recorded so tests can
/// assert on host-side effects.
#[derive(Default)]
pub struct FakeHost {
    settings: Mutex<HashMap<String, String>>,
    entities: Mutex<HashMap<u64, Entity>>,
    users: Mutex<HashMap<String, User>>,
    pub flashes: Mutex<Vec<String>>,
}

impl FakeHost {
    pub fn new() -> Arc<Self> {
        let host = Self::default();
        host.set_setting("site_url", "http://elgg.example.org");
        Arc::new(host)
    }

    pub fn set_setting(&self, key: &str, value: &str) {
        self.settings
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn add_group(&self, id: u64) {
        self.entities.lock().unwrap().insert(
            id,
            Entity {
                id,
                kind: EntityKind::Group,
            },
        );
    }

    pub fn add_user(&self, name: &str, id: u64) {
        self.users.lock().unwrap().insert(
            name.to_string(),
            User {
                id,
                name: name.to_string(),
            },
        );
    }

    pub fn flashes(&self) -> Vec<String> {
        self.flashes.lock().unwrap().clone()
    }
}

impl SettingsStore for FakeHost {
    fn plugin_setting(&self, key: &str) -> Option<String> {
        self.settings.lock().unwrap().get(key).cloned()
    }
}

impl EntityDirectory for FakeHost {
    fn entity_by_id(&self, id: u64) -> Option<Entity> {
        self.entities.lock().unwrap().get(&id).cloned()
    }

    fn user_by_name(&self, username: &str) -> Option<User> {
        self.users.lock().unwrap().get(username).cloned()
    }
}

impl Presenter for FakeHost {
    fn render_landing(&self, target_url: &str) -> String {
        format!("<html><body>This page has moved to <a href=\"{target_url}\">{target_url}</a></body></html>")
    }

    fn register_flash(&self, message: &str) {
        self.flashes.lock().unwrap().push(message.to_string());
    }

    fn localize(&self, key: &str) -> String {
        match key {
            "changebookmark" => "Please update your bookmarks".to_string(),
            other => other.to_string(),
        }
    }
}
