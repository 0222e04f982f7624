//! Site content model
//!
//! Page copy is data. The default content ships embedded in the crate and
//! can be replaced with a JSON file of the same shape.

use crate::error::{ContentError, Result};
use crate::router::{KnownRoute, Link, RoutePath};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use tokio::fs;

const DEFAULT_CONTENT: &str = include_str!("content.json");

/// Complete content of the site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav: Vec<NavEntry>,
    pub footer: FooterContent,
    pub not_found: NotFoundContent,
    pub pages: Vec<PageContent>,
}

/// Product name and tagline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
}

/// Navigation bar entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavEntry {
    pub label: String,
    pub path: RoutePath,
}

/// Plain hyperlink leaving the router (footer, downloads)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub label: String,
    pub href: String,
}

/// Footer content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterContent {
    pub quick_links: Vec<ExternalLink>,
    pub social: Vec<ExternalLink>,
    pub copyright: String,
    pub powered_by: String,
}

/// Copy shown for unknown paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotFoundContent {
    pub title: String,
    pub message: String,
    pub link_label: String,
}

/// One page of the site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    pub route: KnownRoute,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub sections: Vec<Section>,
}

/// Button or call to action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub label: String,
    pub target: ActionTarget,
}

/// Where an action leads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionTarget {
    /// Client-side navigation to a site route
    Route(RoutePath),
    /// Regular link to an external URL
    Url(String),
}

impl ActionTarget {
    /// Value for the rendered `href` attribute
    pub fn href(&self) -> &str {
        match self {
            ActionTarget::Route(path) => path.as_str(),
            ActionTarget::Url(url) => url,
        }
    }
}

/// Card with a title, description and optional tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Headline figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Titled list of bullet points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    pub title: String,
    pub points: Vec<String>,
}

/// Term explained in a formula legend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub term: String,
    pub meaning: String,
}

/// Comparison table cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Flag(bool),
    Text(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Flag(true) => f.write_str("✓"),
            Cell::Flag(false) => f.write_str("✗"),
            Cell::Text(text) => f.write_str(text),
        }
    }
}

/// Comparison table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub feature: String,
    pub ours: Cell,
    pub theirs: Cell,
}

/// Video shown while a demo is active
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub title: String,
    pub caption: String,
    pub src: String,
}

/// Toggleable demo card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub video: Video,
}

/// Typed page section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Hero {
        headline: Vec<String>,
        lead: String,
        #[serde(default)]
        actions: Vec<Action>,
    },
    Cards {
        #[serde(default)]
        heading: Option<String>,
        items: Vec<Card>,
    },
    Stats {
        #[serde(default)]
        heading: Option<String>,
        items: Vec<Stat>,
        #[serde(default)]
        note: Option<String>,
    },
    Steps {
        heading: String,
        items: Vec<Card>,
    },
    Checklists {
        heading: String,
        items: Vec<Checklist>,
    },
    Prose {
        heading: String,
        paragraphs: Vec<String>,
    },
    Formula {
        heading: String,
        intro: String,
        formula: String,
        legend: Vec<LegendEntry>,
        #[serde(default)]
        lists: Vec<Checklist>,
    },
    Comparison {
        heading: String,
        columns: [String; 3],
        rows: Vec<ComparisonRow>,
    },
    Tags {
        heading: String,
        intro: String,
        items: Vec<String>,
    },
    Demos {
        caption: String,
        items: Vec<Demo>,
    },
    Actions {
        heading: String,
        body: String,
        actions: Vec<Action>,
    },
}

impl Section {
    /// Actions declared by this section
    pub fn actions(&self) -> &[Action] {
        match self {
            Section::Hero { actions, .. } | Section::Actions { actions, .. } => actions,
            _ => &[],
        }
    }
}

impl SiteContent {
    /// Parse the embedded default content
    pub fn load_default() -> Result<Self> {
        Self::from_json(DEFAULT_CONTENT)
    }

    /// Parse content from a JSON string and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Load content from a JSON file
    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref()).await?;
        Self::from_json(&json)
    }

    /// Check that every known route has exactly one page and every
    /// internal action points at a known route
    pub fn validate(&self) -> std::result::Result<(), ContentError> {
        let mut seen = HashSet::new();
        for page in &self.pages {
            if !seen.insert(page.route) {
                return Err(ContentError::DuplicatePage {
                    path: page.route.path().to_string(),
                });
            }
        }

        if let Some(missing) = KnownRoute::ALL.iter().find(|route| !seen.contains(route)) {
            return Err(ContentError::MissingPage {
                path: missing.path().to_string(),
            });
        }

        for action in self.pages.iter().flat_map(|p| &p.sections).flat_map(Section::actions) {
            if let ActionTarget::Route(path) = &action.target {
                if path.known().is_none() {
                    return Err(ContentError::UnknownActionTarget {
                        label: action.label.clone(),
                        path: path.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Page content for a known route
    pub fn page(&self, route: KnownRoute) -> Option<&PageContent> {
        self.pages.iter().find(|page| page.route == route)
    }

    /// Navigation bar entries as links
    pub fn nav_links(&self) -> Vec<Link> {
        self.nav
            .iter()
            .map(|entry| Link::new(entry.path.clone(), entry.label.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_content_is_valid() {
        let content = SiteContent::load_default().unwrap();
        assert_eq!(content.brand.name, "Blink OS");
        assert_eq!(content.pages.len(), KnownRoute::ALL.len());
        for route in KnownRoute::ALL {
            assert!(content.page(route).is_some(), "missing page for {}", route);
        }
    }

    #[test]
    fn test_nav_order_matches_routes() {
        let content = SiteContent::load_default().unwrap();
        let paths: Vec<&str> = content.nav.iter().map(|e| e.path.as_str()).collect();
        let expected: Vec<&str> = KnownRoute::ALL.iter().map(KnownRoute::path).collect();
        assert_eq!(paths, expected);
        assert_eq!(content.nav_links()[2].label(), "How It Works");
    }

    #[test]
    fn test_comparison_cells() {
        let content = SiteContent::load_default().unwrap();
        let page = content.page(KnownRoute::Applications).unwrap();
        let rows = page
            .sections
            .iter()
            .find_map(|s| match s {
                Section::Comparison { rows, .. } => Some(rows),
                _ => None,
            })
            .unwrap();

        let open_source = rows.iter().find(|r| r.feature == "Open Source").unwrap();
        assert_eq!(open_source.ours, Cell::Flag(true));
        assert_eq!(open_source.ours.to_string(), "✓");
        assert_eq!(open_source.theirs.to_string(), "✗");
        assert_eq!(rows[0].ours.to_string(), "Free");
    }

    #[test]
    fn test_missing_page_is_rejected() {
        let mut content = SiteContent::load_default().unwrap();
        content.pages.retain(|p| p.route != KnownRoute::Demo);
        assert!(matches!(
            content.validate(),
            Err(ContentError::MissingPage { path }) if path == "/demo"
        ));
    }

    #[test]
    fn test_duplicate_page_is_rejected() {
        let mut content = SiteContent::load_default().unwrap();
        let home = content.page(KnownRoute::Home).unwrap().clone();
        content.pages.push(home);
        assert!(matches!(
            content.validate(),
            Err(ContentError::DuplicatePage { .. })
        ));
    }

    #[test]
    fn test_unknown_action_target_is_rejected() {
        let mut content = SiteContent::load_default().unwrap();
        content.pages[0].sections.push(Section::Actions {
            heading: "Pricing".to_string(),
            body: String::new(),
            actions: vec![Action {
                label: "See pricing".to_string(),
                target: ActionTarget::Route(RoutePath::from("/pricing")),
            }],
        });
        assert!(matches!(
            content.validate(),
            Err(ContentError::UnknownActionTarget { path, .. }) if path == "/pricing"
        ));
    }

    #[tokio::test]
    async fn test_from_path_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("content.json");
        let content = SiteContent::load_default().unwrap();
        std::fs::write(&path, serde_json::to_string_pretty(&content).unwrap()).unwrap();

        let loaded = SiteContent::from_path(&path).await.unwrap();
        assert_eq!(loaded, content);
    }

    #[tokio::test]
    async fn test_from_path_missing_file() {
        let dir = tempdir().unwrap();
        let result = SiteContent::from_path(dir.path().join("nope.json")).await;
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }
}
