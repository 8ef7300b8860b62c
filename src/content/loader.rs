//! Content loader - discovers and reads pages and posts from the source directory

use std::path::{Path, PathBuf};
use tokio::fs;

use super::ContentDocument;
use crate::error::{Result, SiteError};
use crate::helpers;
use crate::Site;

/// Static pages, relative to the source directory
pub const PAGES_DIR: &str = "content/pages";

/// Blog posts, relative to the source directory
pub const BLOG_DIR: &str = "content/blog";

/// Loads content from the source directory
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    pub fn pages_dir(&self) -> PathBuf {
        self.site.source_dir.join(PAGES_DIR)
    }

    pub fn blog_dir(&self) -> PathBuf {
        self.site.source_dir.join(BLOG_DIR)
    }

    /// Markdown file names in the pages directory, in listing order
    pub async fn list_pages(&self) -> Result<Vec<String>> {
        list_markdown(&self.pages_dir()).await
    }

    /// Markdown file names in the blog directory, in listing order
    pub async fn list_posts(&self) -> Result<Vec<String>> {
        list_markdown(&self.blog_dir()).await
    }

    /// Read a static page; its text is body only
    pub async fn read_page(&self, name: &str) -> Result<ContentDocument> {
        let path = self.pages_dir().join(name);
        let raw = read_to_string(&path).await?;
        Ok(ContentDocument::plain(
            helpers::slug_from_name(name),
            path,
            raw,
        ))
    }

    /// Read a blog post and split off its front-matter
    pub async fn read_post(&self, name: &str) -> Result<ContentDocument> {
        let path = self.blog_dir().join(name);
        let raw = read_to_string(&path).await?;
        Ok(ContentDocument::with_front_matter(
            helpers::slug_from_name(name),
            path,
            raw,
        ))
    }

    /// Load all pages from content/pages
    pub async fn load_pages(&self) -> Result<Vec<ContentDocument>> {
        let mut pages = Vec::new();
        for name in self.list_pages().await? {
            pages.push(self.read_page(&name).await?);
        }
        Ok(pages)
    }

    /// Load all posts from content/blog
    pub async fn load_posts(&self) -> Result<Vec<ContentDocument>> {
        let mut posts = Vec::new();
        for name in self.list_posts().await? {
            posts.push(self.read_post(&name).await?);
        }
        Ok(posts)
    }
}

/// List the markdown entries of a directory without sorting
///
/// Entries are matched on name alone, as a directory listing would be.
pub async fn list_markdown(dir: &Path) -> Result<Vec<String>> {
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| SiteError::io(dir, e))?;

    let mut names = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| SiteError::io(dir, e))?
    {
        let name = entry.file_name().to_string_lossy().into_owned();
        if helpers::is_markdown_name(&name) {
            names.push(name);
        } else {
            tracing::debug!("Skipping non-markdown entry {:?}", entry.path());
        }
    }

    Ok(names)
}

async fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| SiteError::io(path, e))
}
