//! Route listing command

use anyhow::Result;
use blink_core::KnownRoute;
use colored::Colorize;
use tracing::info;

/// List the site's known routes
pub async fn routes_command() -> Result<()> {
    info!("Listing known routes");

    println!("🧭 Known Routes\n");

    for route in KnownRoute::ALL {
        println!("  {} {}", format!("{:<16}", route.path()).cyan().bold(), route.label());
    }

    println!("\n💡 Any other path shows the not-found page (or a blank body with --not-found blank)");

    Ok(())
}
