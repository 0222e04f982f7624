//! Minimal configuration module for the site core
//!
//! Only exports data types. Locating and reading config files is done in
//! the CLI layer.

pub mod types;

pub use types::{NotFoundMode, SiteConfig};
