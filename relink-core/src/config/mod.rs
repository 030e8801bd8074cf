use crate::host::{REDIRECT_METHOD_KEY, SITE_URL_KEY, SettingsStore};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;
use url::Url;

/// How a legacy URL is forwarded to its modern equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectMethod {
    /// 301 + `Location`, nothing else
    #[default]
    Immediate,

    /// Queue a "update your bookmark" flash message, then redirect as
    /// `immediate`
    ImmediateError,

    /// Serve an interstitial notice page instead of redirecting; the user
    /// clicks through themselves
    Landing,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown redirect method `{0}`")]
pub struct RedirectMethodParseError(String);

impl FromStr for RedirectMethod {
    type Err = RedirectMethodParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "immediate" => Ok(Self::Immediate),
            "immediate_error" => Ok(Self::ImmediateError),
            "landing" => Ok(Self::Landing),
            other => Err(RedirectMethodParseError(other.to_string())),
        }
    }
}

/// Per-installation configuration, resolved once per redirect decision.
///
/// The settings store is the host's; nothing here is cached between
/// requests, so an admin changing the method takes effect immediately.
#[derive(Debug, Clone)]
pub struct PluginConfig {
    pub redirect_method: RedirectMethod,

    /// Absolute base URL of the installation, used to normalize relative
    /// redirect targets. `None` falls back to root-relative targets.
    pub site_url: Option<Url>,
}

impl PluginConfig {
    pub fn load(settings: &dyn SettingsStore) -> Self {
        let redirect_method = match settings.plugin_setting(REDIRECT_METHOD_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|err: RedirectMethodParseError| {
                warn!(%err, "falling back to immediate redirects");
                RedirectMethod::Immediate
            }),
            None => RedirectMethod::default(),
        };

        let site_url = settings.plugin_setting(SITE_URL_KEY).and_then(|mut raw| {
            // A trailing slash keeps Url::join appending instead of replacing
            // the last path component.
            if !raw.ends_with('/') {
                raw.push('/');
            }

            match Url::parse(&raw) {
                Ok(url) => Some(url),
                Err(err) => {
                    warn!(%err, site_url = %raw, "ignoring unparseable site URL");
                    None
                }
            }
        });

        Self {
            redirect_method,
            site_url,
        }
    }
}
