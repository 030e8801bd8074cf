use anyhow::{Result, anyhow};
use http::Uri;
use relink_core::ctx::{RequestCtx, Segments, ViewMode};
use relink_core::outcome::RouteOutcome;
use relink_core::plugin::{PageHandler, PageRegistry};
use std::collections::HashMap;

/// Minimal page-routing layer standing in for the host's dispatcher.
///
/// Drives registered handlers the way the host would: the first path
/// segment selects a page handler (or route hook), the rest of the path
/// becomes the handler's segment list.
#[derive(Default)]
pub struct TestRegistry {
    pages: HashMap<String, PageHandler>,
    hooks: HashMap<String, PageHandler>,
}

impl TestRegistry {
    /// Routes a raw request line (path + optional query) in the default
    /// view mode.
    pub fn request(&self, raw: &str) -> RouteOutcome {
        self.request_as(raw, ViewMode::default_view())
    }

    pub fn request_as(&self, raw: &str, view_mode: ViewMode) -> RouteOutcome {
        let uri: Uri = raw.parse().expect("invalid test URI");
        let ctx = RequestCtx::new(uri, view_mode);

        let path = ctx.route_path.clone();
        let body = path.strip_prefix('/').unwrap_or(&path);
        let (prefix, rest) = match body.split_once('/') {
            Some((prefix, rest)) => (prefix, rest),
            None => (body, ""),
        };

        let segments = Segments::from_path(rest);

        if let Some(handler) = self.pages.get(prefix) {
            return handler(&ctx, &segments);
        }

        if let Some(hook) = self.hooks.get(prefix) {
            return hook(&ctx, &segments);
        }

        RouteOutcome::PassThrough
    }
}

impl PageRegistry for TestRegistry {
    fn register_page_handler(&mut self, prefix: &str, handler: PageHandler) -> Result<()> {
        if self.pages.contains_key(prefix) {
            return Err(anyhow!("duplicate page handler for prefix `{prefix}`"));
        }

        self.pages.insert(prefix.to_string(), handler);
        Ok(())
    }

    fn register_route_hook(&mut self, route: &str, hook: PageHandler) -> Result<()> {
        if self.hooks.contains_key(route) {
            return Err(anyhow!("duplicate route hook for `{route}`"));
        }

        self.hooks.insert(route.to_string(), hook);
        Ok(())
    }
}
