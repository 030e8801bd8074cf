/// Setting key selecting the redirect delivery strategy.
pub const REDIRECT_METHOD_KEY: &str = "redirect_method";

/// Setting key holding the installation's absolute base URL.
pub const SITE_URL_KEY: &str = "site_url";

/// Read-only access to this plugin's scoped settings in the host store.
pub trait SettingsStore: Send + Sync {
    fn plugin_setting(&self, key: &str) -> Option<String>;
}
