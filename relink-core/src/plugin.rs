use crate::config::PluginConfig;
use crate::ctx::{RequestCtx, Segments};
use crate::host::{EntityDirectory, Presenter, SettingsStore};
use crate::matchers::{RedirectTarget, blog, prefix, tag};
use crate::outcome::RouteOutcome;
use crate::redirect::dispatch;
use crate::urls::build_url;
use anyhow::Result;
use std::sync::Arc;

/// Legacy page prefix for tag searches.
pub const TAG_PREFIX: &str = "tag";

/// Legacy generic page prefix retired by the host's routing reorganization.
pub const PG_PREFIX: &str = "pg";

/// Route whose resolution the blog forwarder hooks into.
pub const BLOG_ROUTE: &str = "blog";

/// A page handler the host invokes with the segments after its prefix.
pub type PageHandler = Arc<dyn Fn(&RequestCtx, &Segments) -> RouteOutcome + Send + Sync>;

/// The host's registration surface for legacy handlers.
///
/// Page handlers own their prefix outright; a route hook runs before the
/// named route resolves and may take over the request by returning
/// `Handled`.
pub trait PageRegistry {
    fn register_page_handler(&mut self, prefix: &str, handler: PageHandler) -> Result<()>;

    fn register_route_hook(&mut self, route: &str, hook: PageHandler) -> Result<()>;
}

/// The legacy-URL forwarding plugin.
///
/// Holds its host collaborators behind `Arc<dyn Trait>` so one instance can
/// serve every worker the host runs; per-request state never leaves the
/// handler call.
pub struct LegacyUrls {
    settings: Arc<dyn SettingsStore>,
    entities: Arc<dyn EntityDirectory>,
    presenter: Arc<dyn Presenter>,
}

impl LegacyUrls {
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        entities: Arc<dyn EntityDirectory>,
        presenter: Arc<dyn Presenter>,
    ) -> Arc<Self> {
        Arc::new(Self {
            settings,
            entities,
            presenter,
        })
    }

    /// Wires the plugin into the host's routing: page handlers for `tag`
    /// and `pg`, and a resolution hook on the `blog` route.
    pub fn register(self: &Arc<Self>, registry: &mut dyn PageRegistry) -> Result<()> {
        let plugin = Arc::clone(self);
        registry.register_page_handler(
            TAG_PREFIX,
            Arc::new(move |ctx, segments| plugin.handle_tag(ctx, segments)),
        )?;

        let plugin = Arc::clone(self);
        registry.register_page_handler(
            PG_PREFIX,
            Arc::new(move |ctx, segments| plugin.handle_pg(ctx, segments)),
        )?;

        let plugin = Arc::clone(self);
        registry.register_route_hook(
            BLOG_ROUTE,
            Arc::new(move |ctx, segments| plugin.handle_blog_route(ctx, segments)),
        )?;

        Ok(())
    }

    /// `/tag/<tag>` → site search. Always handled.
    pub fn handle_tag(&self, ctx: &RequestCtx, segments: &Segments) -> RouteOutcome {
        self.complete(ctx, tag::forward(segments))
    }

    /// `/pg/<anything>` → same path without the prefix. Always handled.
    pub fn handle_pg(&self, ctx: &RequestCtx, segments: &Segments) -> RouteOutcome {
        self.complete(ctx, prefix::forward(segments))
    }

    /// Blog route hook: forwards recognized historical blog URLs, passes
    /// everything else through to default resolution untouched.
    pub fn handle_blog_route(&self, ctx: &RequestCtx, segments: &Segments) -> RouteOutcome {
        match blog::forward(segments, self.entities.as_ref()) {
            Some(target) => self.complete(ctx, target),
            None => RouteOutcome::PassThrough,
        }
    }

    /// Builds the final URL for a matched target and dispatches the
    /// redirect. Settings are read here, once per decision.
    fn complete(&self, ctx: &RequestCtx, target: RedirectTarget) -> RouteOutcome {
        let config = PluginConfig::load(self.settings.as_ref());

        let raw_query = if target.inherit_query {
            ctx.raw_query()
        } else {
            ""
        };

        let url = build_url(raw_query, &target.url, &target.explicit_params);

        RouteOutcome::Handled(dispatch(&url, ctx, &config, self.presenter.as_ref()))
    }
}
