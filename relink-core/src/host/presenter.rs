/// Localization key for the "please update your bookmark" message.
pub const CHANGE_BOOKMARK_KEY: &str = "changebookmark";

/// Rendering, flash-message, and localization calls into the host platform.
pub trait Presenter: Send + Sync {
    /// Render the "this URL has moved" notice inside the host's error-style
    /// page layout and return the complete page body.
    fn render_landing(&self, target_url: &str) -> String;

    /// Queue a non-fatal user-visible warning to be shown on the next page
    /// the user sees (the host's flash-message mechanism).
    fn register_flash(&self, message: &str);

    /// Translate a message key for the current user's language.
    fn localize(&self, key: &str) -> String;
}
