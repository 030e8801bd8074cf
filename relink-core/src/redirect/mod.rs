#[cfg(test)]
mod tests;

use crate::config::{PluginConfig, RedirectMethod};
use crate::ctx::{RequestCtx, ResponseCtx};
use crate::host::{CHANGE_BOOKMARK_KEY, Presenter};
use crate::urls::normalize_url;
use tracing::debug;

/// Produces the terminal response for a matched legacy URL.
///
/// The configured method decides delivery, with one override: a
/// non-default view mode that cannot fall back to HTML rendering always
/// gets a plain `immediate` redirect, never an interstitial page.
pub fn dispatch(
    target: &str,
    ctx: &RequestCtx,
    config: &PluginConfig,
    presenter: &dyn Presenter,
) -> ResponseCtx {
    let mut method = config.redirect_method;

    if !ctx.view_mode.renders_html() {
        method = RedirectMethod::Immediate;
    }

    debug!(?method, target, "forwarding legacy URL");

    match method {
        RedirectMethod::Landing => landing(target, presenter),
        RedirectMethod::ImmediateError => {
            // Queue the warning first, then redirect exactly as `immediate`.
            presenter.register_flash(&presenter.localize(CHANGE_BOOKMARK_KEY));
            immediate(target, config)
        }
        RedirectMethod::Immediate => immediate(target, config),
    }
}

/// Interstitial notice page. Deliberately *not* a redirect: the user sees a
/// warning to update their bookmark and clicks through to the new URL
/// themselves.
fn landing(target: &str, presenter: &dyn Presenter) -> ResponseCtx {
    let body = presenter.render_landing(target);

    ResponseCtx::html_page(body)
}

fn immediate(target: &str, config: &PluginConfig) -> ResponseCtx {
    let location = normalize_url(config.site_url.as_ref(), target);

    ResponseCtx::moved_permanently(&location)
}
