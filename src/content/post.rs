//! Content documents, page kinds and the post summary model

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::FrontMatter;
use crate::helpers;

/// A source document read from a content directory
#[derive(Debug, Clone)]
pub struct ContentDocument {
    /// Slug (file name minus `.md`)
    pub slug: String,

    /// Full source file path
    pub source: PathBuf,

    /// Full file contents
    pub raw: String,

    /// Parsed front-matter (empty for pages)
    pub front_matter: FrontMatter,

    /// Text after the front-matter block
    pub body: String,
}

impl ContentDocument {
    /// A document whose whole text is body; used for static pages
    pub fn plain(slug: String, source: PathBuf, raw: String) -> Self {
        Self {
            slug,
            source,
            body: raw.clone(),
            raw,
            front_matter: FrontMatter::default(),
        }
    }

    /// A document with its front-matter split off; used for blog posts
    pub fn with_front_matter(slug: String, source: PathBuf, raw: String) -> Self {
        let (front_matter, body) = FrontMatter::parse(&raw);
        let body = body.to_string();
        Self {
            slug,
            source,
            raw,
            front_matter,
            body,
        }
    }
}

/// The two content classes and what each needs for assembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageKind {
    /// A standalone page, titled after its slug
    StaticPage { slug: String, title: String },

    /// A dated blog post, described by its front-matter
    BlogPost {
        slug: String,
        title: Option<String>,
        date: Option<String>,
        excerpt: Option<String>,
    },
}

impl PageKind {
    /// Describe a static page document
    pub fn page(doc: &ContentDocument) -> Self {
        PageKind::StaticPage {
            slug: doc.slug.clone(),
            title: helpers::capitalize(&doc.slug),
        }
    }

    /// Describe a blog post document
    pub fn post(doc: &ContentDocument) -> Self {
        let fm = &doc.front_matter;
        PageKind::BlogPost {
            slug: doc.slug.clone(),
            title: fm.get("title").map(str::to_string),
            date: fm.get("date").map(str::to_string),
            excerpt: fm.get("excerpt").map(str::to_string),
        }
    }

    pub fn slug(&self) -> &str {
        match self {
            PageKind::StaticPage { slug, .. } | PageKind::BlogPost { slug, .. } => slug,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            PageKind::StaticPage { title, .. } => Some(title),
            PageKind::BlogPost { title, .. } => title.as_deref(),
        }
    }

    /// Publication date; static pages have none
    pub fn date(&self) -> Option<&str> {
        match self {
            PageKind::StaticPage { .. } => None,
            PageKind::BlogPost { date, .. } => date.as_deref(),
        }
    }

    /// Project a blog post onto its index entry; `None` for static pages
    pub fn summary(&self) -> Option<PostSummary> {
        match self {
            PageKind::StaticPage { .. } => None,
            PageKind::BlogPost {
                slug,
                title,
                date,
                excerpt,
            } => Some(PostSummary {
                slug: Some(slug.clone()),
                title: title.clone(),
                date: date.clone(),
                excerpt: excerpt.clone(),
            }),
        }
    }
}

/// An entry of the `posts.json` metadata index
///
/// Missing values are left out of the JSON object entirely. The slug is
/// optional only so that hand-edited indexes still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}
