//! Interactive terminal browser
//!
//! Renders the site in the terminal with iocraft. The router runs
//! unchanged; only the history and viewport are terminal-specific.

pub mod animation;
pub mod app;
pub mod browser;
pub mod components;
pub mod message;
pub mod router;

pub use app::run_browser;
