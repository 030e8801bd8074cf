use http::Uri;

/// Request context handed to the plugin by the host for one inbound request.
#[derive(Debug, Clone)]
pub struct RequestCtx {
    /// Raw URI from the request line, before the host's rewrite rules run.
    /// The host's parsed-query mapping is unreliable after those rewrites,
    /// so query extraction always starts from this value.
    pub original_uri: Uri,

    /// Path the host is routing on (post-rewrite)
    pub route_path: String,

    /// Active view/rendering mode of the client
    pub view_mode: ViewMode,
}

impl RequestCtx {
    pub fn new(original_uri: Uri, view_mode: ViewMode) -> Self {
        let route_path = original_uri.path().to_string();

        Self {
            original_uri,
            route_path,
            view_mode,
        }
    }

    /// Query string of the raw request line; empty when absent.
    pub fn raw_query(&self) -> &str {
        self.original_uri.query().unwrap_or("")
    }
}

/// The host's active rendering mode for this request.
///
/// Interstitial HTML is only acceptable for the default mode or for modes
/// that gracefully fall back to it; anything else (JSON, RSS, ...) must get
/// a plain redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewMode {
    pub name: String,
    pub fallback_capable: bool,
}

impl ViewMode {
    pub const DEFAULT_NAME: &'static str = "default";

    pub fn new(name: impl Into<String>, fallback_capable: bool) -> Self {
        Self {
            name: name.into(),
            fallback_capable,
        }
    }

    /// The host's standard HTML rendering mode.
    pub fn default_view() -> Self {
        Self::new(Self::DEFAULT_NAME, true)
    }

    pub fn is_default(&self) -> bool {
        self.name == Self::DEFAULT_NAME
    }

    /// Whether a full HTML page can safely be served to this client.
    pub fn renders_html(&self) -> bool {
        self.is_default() || self.fallback_capable
    }
}
