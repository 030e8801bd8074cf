pub mod host;
pub mod registry;

pub use host::FakeHost;
pub use registry::TestRegistry;

use relink_core::plugin::LegacyUrls;
use std::sync::Arc;

/// Builds the plugin wired to a fake host and registered in a test registry.
pub fn plugin_under_test(host: Arc<FakeHost>) -> TestRegistry {
    let plugin = LegacyUrls::new(host.clone(), host.clone(), host);

    let mut registry = TestRegistry::default();
    plugin
        .register(&mut registry)
        .expect("plugin registration failed");

    registry
}
