//! Recent posts preview rendered from the metadata index
//!
//! The browser copy of this logic lives in the `js/main.js` asset and fetches
//! `/content/blog/posts.json` at page load. The same rendering is available
//! here so a build can bake the preview into `index.html`.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Display;

use crate::content::{PostSummary, UNDEFINED};
use crate::helpers;

/// Element id of the preview container
pub const CONTAINER_ID: &str = "posts-container";

/// Shown when the index cannot be fetched or parsed
pub const FALLBACK: &str = "<p>Blog posts coming soon...</p>";

/// Default number of posts in the preview
pub const DEFAULT_LIMIT: usize = 3;

lazy_static! {
    static ref CONTAINER_OPEN: Regex =
        Regex::new(r#"<([A-Za-z][A-Za-z0-9-]*)[^>]*\sid\s*=\s*["']posts-container["'][^>]*>"#)
            .expect("container pattern is valid");
}

/// Renders the first `limit` index entries as post cards
#[derive(Debug, Clone, Copy)]
pub struct RecentPosts {
    limit: usize,
}

impl RecentPosts {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Render cards for the leading entries, in index order
    pub fn render(&self, posts: &[PostSummary]) -> String {
        posts.iter().take(self.limit).map(render_card).collect()
    }

    /// Render from the raw index text, falling back on any failure
    pub fn render_index<E: Display>(&self, index: Result<String, E>) -> String {
        let raw = match index {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Post index unavailable: {}", e);
                return FALLBACK.to_string();
            }
        };

        match serde_json::from_str::<Vec<PostSummary>>(&raw) {
            Ok(posts) => self.render(&posts),
            Err(e) => {
                tracing::warn!("Post index unreadable: {}", e);
                FALLBACK.to_string()
            }
        }
    }
}

impl Default for RecentPosts {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

/// One preview card; missing fields print as `undefined`
fn render_card(post: &PostSummary) -> String {
    format!(
        r#"<article class="post-card"><h3><a href="/blog/{}">{}</a></h3><time>{}</time><p>{}</p></article>"#,
        post.slug.as_deref().unwrap_or(UNDEFINED),
        post.title.as_deref().unwrap_or(UNDEFINED),
        helpers::locale_date(post.date.as_deref()),
        post.excerpt.as_deref().unwrap_or(UNDEFINED),
    )
}

/// Replace the inner HTML of the `#posts-container` element
///
/// Returns `None` when the page has no such element. The container is closed
/// by the first matching end tag, so it must not nest an element of its own
/// tag name.
pub fn fill_container(html: &str, inner: &str) -> Option<String> {
    let caps = CONTAINER_OPEN.captures(html)?;
    let open = caps.get(0)?;
    let close_tag = format!("</{}>", &caps[1]);
    let close = html[open.end()..].find(&close_tag)? + open.end();

    let mut out = String::with_capacity(html.len() + inner.len());
    out.push_str(&html[..open.end()]);
    out.push_str(inner);
    out.push_str(&html[close..]);
    Some(out)
}
