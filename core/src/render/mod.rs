//! Page rendering for terminal and HTML output

pub mod html;
pub mod text;

pub use html::HtmlRenderer;
pub use text::{text_width, wrap_text, LineStyle, StyledLine, TextRenderer, DEFAULT_WIDTH};
