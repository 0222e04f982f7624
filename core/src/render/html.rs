//! HTML rendering with handlebars templates

use crate::error::{RenderError, Result};
use crate::router::RoutePath;
use crate::site::{nav_items, Section, SiteContent, SitePage, SitePageKind};
use handlebars::Handlebars;
use serde_json::{json, Value};
use tracing::debug;

const TEMPLATES: [(&str, &str); 6] = [
    ("layout", include_str!("templates/layout.hbs")),
    ("navbar", include_str!("templates/navbar.hbs")),
    ("footer", include_str!("templates/footer.hbs")),
    ("actions", include_str!("templates/actions.hbs")),
    ("page", include_str!("templates/page.hbs")),
    ("not_found", include_str!("templates/not_found.hbs")),
];

/// Renders full HTML documents for the site
pub struct HtmlRenderer<'a> {
    content: &'a SiteContent,
    site_name: String,
    registry: Handlebars<'static>,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(content: &'a SiteContent, site_name: impl Into<String>) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);

        for (name, source) in TEMPLATES {
            registry
                .register_template_string(name, source)
                .map_err(|e| RenderError::Template {
                    name: name.to_string(),
                    message: e.to_string(),
                })?;
        }

        Ok(Self {
            content,
            site_name: site_name.into(),
            registry,
        })
    }

    /// Render the document for `current`; `page` is `None` for a blank body
    pub fn document(&self, current: &RoutePath, page: Option<&SitePage>) -> Result<String> {
        let (title, body) = match page.map(|page| page.kind) {
            Some(SitePageKind::Page(route)) => match self.content.page(route) {
                Some(page) => {
                    let sections: Vec<Value> = page
                        .sections
                        .iter()
                        .map(section_view)
                        .collect::<Result<_>>()?;
                    let data = json!({
                        "route": route,
                        "title": page.title,
                        "subtitle": page.subtitle,
                        "sections": sections,
                    });
                    (page.title.clone(), self.render("page", current, &data)?)
                }
                None => (route.label().to_string(), String::new()),
            },
            Some(SitePageKind::NotFound) => (
                self.content.not_found.title.clone(),
                self.render("not_found", current, &self.content.not_found)?,
            ),
            None => (self.site_name.clone(), String::new()),
        };

        debug!(path = %current, title = %title, "Rendering HTML document");

        let data = json!({
            "title": title,
            "site_name": self.site_name,
            "brand": self.content.brand,
            "nav": nav_items(self.content, current),
            "footer": self.content.footer,
            "body": body,
        });
        self.render("layout", current, &data)
    }

    fn render<T: serde::Serialize>(
        &self,
        template: &str,
        current: &RoutePath,
        data: &T,
    ) -> Result<String> {
        self.registry.render(template, data).map_err(|e| {
            RenderError::Page {
                path: current.to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }
}

/// Template data for a section; comparison cells become display text
fn section_view(section: &Section) -> Result<Value> {
    let mut value = serde_json::to_value(section)?;

    if let Section::Comparison { rows, .. } = section {
        let rows: Vec<Value> = rows
            .iter()
            .map(|row| {
                json!({
                    "feature": row.feature,
                    "ours": row.ours.to_string(),
                    "theirs": row.theirs.to_string(),
                })
            })
            .collect();
        value["rows"] = Value::Array(rows);
    }

    Ok(value)
}
