//! Page assembly by literal placeholder substitution
//!
//! There is no template language here: a template is a string holding
//! `{{name}}` tokens, and assembly replaces them with already rendered text.
//! Static pages use the skeleton embedded in the binary; blog posts use a
//! template file loaded from the source tree once per build.

use crate::config::SiteConfig;
use crate::content::UNDEFINED;

/// Built-in skeleton for static pages
const PAGE_SKELETON: &str = include_str!("page.html");

pub const TITLE: &str = "{{title}}";
pub const DATE: &str = "{{date}}";
pub const CONTENT: &str = "{{content}}";
const SITE: &str = "{{site}}";
const YEAR: &str = "{{year}}";

/// Replace the first occurrence of `token`; a missing token is skipped
pub fn substitute(template: &str, token: &str, value: &str) -> String {
    template.replacen(token, value, 1)
}

/// Assemble a complete document for a static page
///
/// Site-wide values fill every occurrence of their token; the title and body
/// fill their first one, body last so that page text is never rescanned.
pub fn render_static_page(config: &SiteConfig, title: &str, body_html: &str) -> String {
    let html = PAGE_SKELETON
        .replace(SITE, &config.title)
        .replace(YEAR, &config.copyright_year);
    let html = substitute(&html, TITLE, title);
    substitute(&html, CONTENT, body_html)
}

/// A blog post template with `{{title}}`, `{{date}}` and `{{content}}` tokens
#[derive(Debug, Clone)]
pub struct PostTemplate {
    source: String,
}

impl PostTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Fill title, then date, then content, each into the first occurrence
    /// left by the previous step
    pub fn render(&self, title: &str, date: &str, content: &str) -> String {
        let html = substitute(&self.source, TITLE, title);
        let html = substitute(&html, DATE, date);
        substitute(&html, CONTENT, content)
    }

    /// Render a post whose metadata may be missing; gaps are written as the
    /// literal `undefined`
    pub fn render_post(&self, title: Option<&str>, date: Option<&str>, content: &str) -> String {
        self.render(
            title.unwrap_or(UNDEFINED),
            date.unwrap_or(UNDEFINED),
            content,
        )
    }
}
