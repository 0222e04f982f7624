//! Plain text rendering of pages
//!
//! Produces styled lines that a terminal front end colors as it likes, or
//! that [`TextRenderer::document`] flattens to plain text.

use crate::router::RoutePath;
use crate::site::{
    nav_items, Checklist, DemoState, PageContent, Section, SiteContent, SitePage, SitePageKind,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width used when the caller has no better idea
pub const DEFAULT_WIDTH: usize = 78;

/// Visual role of a rendered line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Subtitle,
    Heading,
    Body,
    Bullet,
    /// Figures, formulas and other highlighted text
    Accent,
    Muted,
    /// In-site link; the index counts site links on the page in order
    Link(usize),
    /// Link leaving the site
    External,
    /// Demo card; `true` while the demo is active
    Demo(bool),
    Blank,
}

/// One line of rendered output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub text: String,
    pub style: LineStyle,
}

impl StyledLine {
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn blank() -> Self {
        Self::new(String::new(), LineStyle::Blank)
    }
}

/// Wrap text to fit within specified width, breaking at word boundaries
/// Uses unicode-aware width calculation for proper handling of CJK characters
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines: Vec<String> = Vec::new();

    for line in text.lines() {
        if UnicodeWidthStr::width(line) <= max_width {
            lines.push(line.to_string());
            continue;
        }

        let mut current_line = String::new();
        let mut current_width = 0;

        for word in line.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);

            if word_width > max_width {
                if !current_line.is_empty() {
                    lines.push(std::mem::take(&mut current_line));
                    current_width = 0;
                }

                // Break the word itself
                for ch in word.chars() {
                    let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                    if current_width + ch_width > max_width && !current_line.is_empty() {
                        lines.push(std::mem::take(&mut current_line));
                        current_width = 0;
                    }
                    current_line.push(ch);
                    current_width += ch_width;
                }
            } else if current_width > 0 && current_width + 1 + word_width > max_width {
                lines.push(std::mem::replace(&mut current_line, word.to_string()));
                current_width = word_width;
            } else {
                if current_width > 0 {
                    current_line.push(' ');
                    current_width += 1;
                }
                current_line.push_str(word);
                current_width += word_width;
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Calculate the display width of text considering Unicode characters
pub fn text_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Renders site content as styled text lines
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer<'a> {
    content: &'a SiteContent,
    width: usize,
}

impl<'a> TextRenderer<'a> {
    pub fn new(content: &'a SiteContent, width: usize) -> Self {
        Self {
            content,
            width: width.max(20),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Body of a selected page; `None` renders nothing
    pub fn page(&self, page: Option<&SitePage>, demos: &DemoState) -> Vec<StyledLine> {
        match page.map(|page| page.kind) {
            Some(SitePageKind::Page(route)) => self
                .content
                .page(route)
                .map(|page| self.page_content(page, demos))
                .unwrap_or_default(),
            Some(SitePageKind::NotFound) => self.not_found(),
            None => Vec::new(),
        }
    }

    /// Lines for one page of content
    pub fn page_content(&self, page: &PageContent, demos: &DemoState) -> Vec<StyledLine> {
        let mut out = Lines::new(self.width);
        out.wrapped(&page.title, LineStyle::Title);
        if let Some(subtitle) = &page.subtitle {
            out.wrapped(subtitle, LineStyle::Subtitle);
        }

        for section in &page.sections {
            out.blank();
            self.section(&mut out, section, demos);
        }

        out.lines
    }

    fn section(&self, out: &mut Lines, section: &Section, demos: &DemoState) {
        match section {
            Section::Hero {
                headline,
                lead,
                actions,
            } => {
                for line in headline {
                    out.wrapped(line, LineStyle::Title);
                }
                out.wrapped(lead, LineStyle::Body);
                out.actions(actions);
            }
            Section::Cards { heading, items } => {
                if let Some(heading) = heading {
                    out.wrapped(heading, LineStyle::Heading);
                }
                for card in items {
                    out.bullet(&card.title, LineStyle::Accent);
                    out.indented(&card.description, LineStyle::Body);
                    if !card.tags.is_empty() {
                        out.indented(&card.tags.join(" · "), LineStyle::Muted);
                    }
                }
            }
            Section::Stats {
                heading,
                items,
                note,
            } => {
                if let Some(heading) = heading {
                    out.wrapped(heading, LineStyle::Heading);
                }
                for stat in items {
                    out.bullet(&format!("{}  {}", stat.value, stat.label), LineStyle::Accent);
                }
                if let Some(note) = note {
                    out.wrapped(note, LineStyle::Muted);
                }
            }
            Section::Steps { heading, items } => {
                out.wrapped(heading, LineStyle::Heading);
                for (number, step) in items.iter().enumerate() {
                    out.wrapped(&format!("{}. {}", number + 1, step.title), LineStyle::Accent);
                    out.indented(&step.description, LineStyle::Body);
                }
            }
            Section::Checklists { heading, items } => {
                out.wrapped(heading, LineStyle::Heading);
                for list in items {
                    out.checklist(list);
                }
            }
            Section::Prose {
                heading,
                paragraphs,
            } => {
                out.wrapped(heading, LineStyle::Heading);
                for (i, paragraph) in paragraphs.iter().enumerate() {
                    if i > 0 {
                        out.blank();
                    }
                    out.wrapped(paragraph, LineStyle::Body);
                }
            }
            Section::Formula {
                heading,
                intro,
                formula,
                legend,
                lists,
            } => {
                out.wrapped(heading, LineStyle::Heading);
                out.wrapped(intro, LineStyle::Body);
                out.indented(formula, LineStyle::Accent);
                for entry in legend {
                    out.indented(&format!("{} = {}", entry.term, entry.meaning), LineStyle::Muted);
                }
                for list in lists {
                    out.checklist(list);
                }
            }
            Section::Comparison {
                heading,
                columns,
                rows,
            } => {
                out.wrapped(heading, LineStyle::Heading);
                let first = rows
                    .iter()
                    .map(|row| text_width(&row.feature))
                    .chain(std::iter::once(text_width(&columns[0])))
                    .max()
                    .unwrap_or(0);
                let second = rows
                    .iter()
                    .map(|row| text_width(&row.ours.to_string()))
                    .chain(std::iter::once(text_width(&columns[1])))
                    .max()
                    .unwrap_or(0);

                out.push(
                    table_row(&columns[0], &columns[1], &columns[2], first, second),
                    LineStyle::Accent,
                );
                for row in rows {
                    out.push(
                        table_row(
                            &row.feature,
                            &row.ours.to_string(),
                            &row.theirs.to_string(),
                            first,
                            second,
                        ),
                        LineStyle::Body,
                    );
                }
            }
            Section::Tags {
                heading,
                intro,
                items,
            } => {
                out.wrapped(heading, LineStyle::Heading);
                out.wrapped(intro, LineStyle::Body);
                out.wrapped(&items.join(" · "), LineStyle::Muted);
            }
            Section::Demos { caption, items } => {
                out.wrapped(caption, LineStyle::Muted);
                for (number, demo) in items.iter().enumerate() {
                    let active = demos.is_active(&demo.id);
                    let marker = if active { "▼" } else { "▶" };
                    out.push(
                        format!("[{}] {} {}", number + 1, marker, demo.title),
                        LineStyle::Demo(active),
                    );
                    out.indented(&demo.description, LineStyle::Body);
                }

                if let Some(demo) = demos.active_demo(items) {
                    out.blank();
                    out.wrapped(&demo.video.title, LineStyle::Heading);
                    out.indented(&format!("▶ {}", demo.video.src), LineStyle::Accent);
                    out.wrapped(&demo.video.caption, LineStyle::Muted);
                }
            }
            Section::Actions {
                heading,
                body,
                actions,
            } => {
                out.wrapped(heading, LineStyle::Heading);
                out.wrapped(body, LineStyle::Body);
                out.actions(actions);
            }
        }
    }

    /// Lines shown for paths that name no page
    pub fn not_found(&self) -> Vec<StyledLine> {
        let not_found = &self.content.not_found;
        let mut out = Lines::new(self.width);
        out.wrapped(&not_found.title, LineStyle::Title);
        out.blank();
        out.wrapped(&not_found.message, LineStyle::Body);
        out.blank();
        out.push(format!("→ {}", not_found.link_label), LineStyle::Link(0));
        out.lines
    }

    /// Single navbar line, with the active entry bracketed
    pub fn navbar(&self, current: &RoutePath) -> StyledLine {
        let entries: Vec<String> = nav_items(self.content, current)
            .into_iter()
            .map(|item| {
                if item.active {
                    format!("[{}]", item.label)
                } else {
                    item.label
                }
            })
            .collect();
        StyledLine::new(
            format!("{}  |  {}", self.content.brand.name, entries.join("  ")),
            LineStyle::Heading,
        )
    }

    /// Footer lines
    pub fn footer(&self) -> Vec<StyledLine> {
        let footer = &self.content.footer;
        let labels = |links: &[crate::site::ExternalLink]| {
            links
                .iter()
                .map(|link| link.label.as_str())
                .collect::<Vec<_>>()
                .join(" · ")
        };

        let mut out = Lines::new(self.width);
        out.wrapped(&self.content.brand.name, LineStyle::Heading);
        out.wrapped(&self.content.brand.tagline, LineStyle::Muted);
        out.wrapped(&labels(&footer.quick_links), LineStyle::External);
        out.wrapped(&labels(&footer.social), LineStyle::External);
        out.wrapped(&footer.copyright, LineStyle::Muted);
        out.wrapped(&format!("Powered by {}", footer.powered_by), LineStyle::Muted);
        out.lines
    }

    /// Full plain-text document: navbar, page body and footer
    pub fn document(
        &self,
        current: &RoutePath,
        page: Option<&SitePage>,
        demos: &DemoState,
    ) -> String {
        let rule = StyledLine::new("─".repeat(self.width), LineStyle::Muted);
        let mut lines = vec![self.navbar(current), rule.clone()];
        lines.extend(self.page(page, demos));
        lines.push(rule);
        lines.extend(self.footer());

        let mut text = lines
            .into_iter()
            .map(|line| line.text)
            .collect::<Vec<_>>()
            .join("\n");
        text.push('\n');
        text
    }
}

fn table_row(a: &str, b: &str, c: &str, first: usize, second: usize) -> String {
    let pad = |s: &str, width: usize| {
        let fill = width.saturating_sub(text_width(s));
        format!("{}{}", s, " ".repeat(fill))
    };
    format!("{}  {}  {}", pad(a, first), pad(b, second), c)
}

/// Line accumulator that wraps to a fixed width
struct Lines {
    width: usize,
    links: usize,
    lines: Vec<StyledLine>,
}

impl Lines {
    fn new(width: usize) -> Self {
        Self {
            width,
            links: 0,
            lines: Vec::new(),
        }
    }

    fn push(&mut self, text: String, style: LineStyle) {
        self.lines.push(StyledLine::new(text, style));
    }

    fn blank(&mut self) {
        self.lines.push(StyledLine::blank());
    }

    fn wrapped(&mut self, text: &str, style: LineStyle) {
        for line in wrap_text(text, self.width) {
            self.push(line, style);
        }
    }

    fn indented(&mut self, text: &str, style: LineStyle) {
        for line in wrap_text(text, self.width.saturating_sub(2)) {
            self.push(format!("  {}", line), style);
        }
    }

    fn bullet(&mut self, text: &str, style: LineStyle) {
        for (i, line) in wrap_text(text, self.width.saturating_sub(2))
            .into_iter()
            .enumerate()
        {
            let prefix = if i == 0 { "• " } else { "  " };
            self.push(format!("{}{}", prefix, line), style);
        }
    }

    fn checklist(&mut self, list: &Checklist) {
        self.wrapped(&list.title, LineStyle::Accent);
        for point in &list.points {
            self.bullet(point, LineStyle::Bullet);
        }
    }

    fn actions(&mut self, actions: &[crate::site::Action]) {
        use crate::site::ActionTarget;

        for action in actions {
            match &action.target {
                ActionTarget::Route(_) => {
                    let index = self.links;
                    self.links += 1;
                    self.push(format!("→ {}", action.label), LineStyle::Link(index));
                }
                ActionTarget::Url(url) => {
                    self.push(format!("↗ {} ({})", action.label, url), LineStyle::External);
                }
            }
        }
    }
}
