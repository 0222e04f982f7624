//! CLI command implementations

pub mod browse;
pub mod export;
pub mod render;
pub mod routes;

pub use browse::browse_command;
pub use export::export_command;
pub use render::{render_command, RenderFormat};
pub use routes::routes_command;
