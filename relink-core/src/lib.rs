pub mod config;
pub mod ctx;
pub mod host;
pub mod logging;
pub mod matchers;
pub mod outcome;
pub mod plugin;
pub mod redirect;
pub mod urls;
