//! UI components for the terminal browser
//!
//! This module contains reusable UI components for the interactive interface.

pub mod logo;
pub mod navbar;
pub mod page_view;
pub mod status_line;

pub use logo::BlinkLogo;
pub use navbar::Navbar;
pub use page_view::PageView;
pub use status_line::StatusLine;
