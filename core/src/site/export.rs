//! Static site export

use super::{page_selector, SiteContent};
use crate::config::{NotFoundMode, SiteConfig};
use crate::error::Result;
use crate::render::HtmlRenderer;
use crate::router::{KnownRoute, RoutePath};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Files written by [`export_site`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub out_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

impl ExportReport {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// File a route is written to, relative to the output directory
pub fn route_file(route: KnownRoute) -> PathBuf {
    match route {
        KnownRoute::Home => PathBuf::from("index.html"),
        other => Path::new(other.path().trim_start_matches('/')).join("index.html"),
    }
}

/// Write every page of the site as HTML under `out_dir`
///
/// A `404.html` is added when unknown paths show the not-found page.
pub async fn export_site(
    config: &SiteConfig,
    content: &SiteContent,
    out_dir: &Path,
) -> Result<ExportReport> {
    let renderer = HtmlRenderer::new(content, config.site_name.clone())?;
    let selector = page_selector(config.not_found);
    let mut report = ExportReport {
        out_dir: out_dir.to_path_buf(),
        files: Vec::new(),
    };

    fs::create_dir_all(out_dir).await?;

    for route in KnownRoute::ALL {
        let path = RoutePath::from(route);
        let page = selector.select(&path).into_output();
        let html = renderer.document(&path, page.as_ref())?;
        let file = out_dir.join(route_file(route));
        write_file(&file, &html).await?;
        report.files.push(file);
    }

    if config.not_found == NotFoundMode::Page {
        let path = RoutePath::new("/404");
        let page = selector.select(&path).into_output();
        let html = renderer.document(&path, page.as_ref())?;
        let file = out_dir.join("404.html");
        write_file(&file, &html).await?;
        report.files.push(file);
    }

    info!(
        "Exported {} pages to {}",
        report.len(),
        out_dir.display()
    );
    Ok(report)
}

async fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, contents).await?;
    debug!("Wrote {}", path.display());
    Ok(())
}
