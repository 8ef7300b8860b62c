//! Generator module - drives pages and posts through parse, render and
//! assembly and writes the output tree

use std::path::{Path, PathBuf};
use tokio::fs;

use crate::content::loader::ContentLoader;
use crate::content::{ContentDocument, MarkdownRenderer, PageKind, PostSummary};
use crate::error::{Result, SiteError};
use crate::recent::{self, RecentPosts};
use crate::templates::{self, PostTemplate};
use crate::Site;

/// Assets copied verbatim, relative to both source and output roots
pub const STATIC_ASSETS: [&str; 3] = ["index.html", "css/main.css", "js/main.js"];

/// Blog post template, relative to the source directory
pub const POST_TEMPLATE: &str = "templates/blog-post.html";

/// Output directory for rendered posts
pub const BLOG_OUTPUT_DIR: &str = "blog";

/// Metadata index, relative to the output directory
pub const POST_INDEX: &str = "content/blog/posts.json";

/// What a build produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub pages: usize,
    pub posts: usize,
}

/// Static site generator
pub struct Generator<'a> {
    site: &'a Site,
    loader: ContentLoader<'a>,
    markdown: MarkdownRenderer,
}

impl<'a> Generator<'a> {
    /// Create a new generator
    pub fn new(site: &'a Site) -> Self {
        Self {
            site,
            loader: ContentLoader::new(site),
            markdown: MarkdownRenderer::new(),
        }
    }

    /// Generate the entire site
    pub async fn generate(&self) -> Result<BuildReport> {
        // Ensure public directory exists
        create_dir_all(&self.site.public_dir).await?;

        self.copy_static_assets().await?;

        let pages = self.generate_pages().await?;
        tracing::info!("Generated {} pages", pages);

        let template = self.load_post_template().await?;
        let names = self.loader.list_posts().await?;
        let summaries = self.generate_posts(&template, &names).await?;
        tracing::info!("Generated {} posts", summaries.len());

        self.write_post_index(&summaries).await?;

        if self.site.config.prerender_recent_posts {
            self.prerender_recent_posts().await?;
        }

        Ok(BuildReport {
            pages,
            posts: summaries.len(),
        })
    }

    /// Copy the fixed asset list; the copies touch disjoint paths
    async fn copy_static_assets(&self) -> Result<()> {
        let [index, css, js] = STATIC_ASSETS.map(|asset| {
            copy_file(
                self.site.source_dir.join(asset),
                self.site.public_dir.join(asset),
            )
        });
        tokio::try_join!(index, css, js)?;
        Ok(())
    }

    /// Render every markdown file in content/pages to `<slug>.html`
    async fn generate_pages(&self) -> Result<usize> {
        let names = self.loader.list_pages().await?;

        for name in &names {
            let doc = self.loader.read_page(name).await?;
            let kind = PageKind::page(&doc);
            let html = templates::render_static_page(
                &self.site.config,
                kind.title().unwrap_or_default(),
                &self.markdown.render(&doc.body),
            );

            let output_path = self.site.public_dir.join(format!("{}.html", kind.slug()));
            write_file(&output_path, html).await?;
            tracing::debug!("Generated page: {:?}", output_path);
        }

        Ok(names.len())
    }

    async fn load_post_template(&self) -> Result<PostTemplate> {
        let path = self.site.source_dir.join(POST_TEMPLATE);
        let source = fs::read_to_string(&path)
            .await
            .map_err(|e| SiteError::io(&path, e))?;
        Ok(PostTemplate::new(source))
    }

    /// Render the named posts to `blog/<slug>.html`, one at a time, and
    /// collect their summaries in the order given
    pub async fn generate_posts(
        &self,
        template: &PostTemplate,
        names: &[String],
    ) -> Result<Vec<PostSummary>> {
        let mut summaries = Vec::with_capacity(names.len());
        let blog_dir = self.site.public_dir.join(BLOG_OUTPUT_DIR);

        for name in names {
            let doc = self.loader.read_post(name).await?;
            warn_missing_keys(&doc);
            let kind = PageKind::post(&doc);
            let html = template.render_post(
                kind.title(),
                kind.date(),
                &self.markdown.render(&doc.body),
            );

            let output_path = blog_dir.join(format!("{}.html", kind.slug()));
            write_file(&output_path, html).await?;
            tracing::debug!("Generated post: {:?}", output_path);

            summaries.extend(kind.summary());
        }

        Ok(summaries)
    }

    /// Write the metadata index as a compact JSON array
    async fn write_post_index(&self, summaries: &[PostSummary]) -> Result<()> {
        let output_path = self.site.public_dir.join(POST_INDEX);
        let json = serde_json::to_string(summaries)?;
        write_file(&output_path, json).await?;
        tracing::info!("Generated {}", POST_INDEX);
        Ok(())
    }

    /// Fill the recent posts container of the copied index page
    async fn prerender_recent_posts(&self) -> Result<()> {
        let index_path = self.site.public_dir.join(POST_INDEX);
        let cards = RecentPosts::new(self.site.config.recent_posts)
            .render_index(fs::read_to_string(&index_path).await);

        let page_path = self.site.public_dir.join(STATIC_ASSETS[0]);
        let page = fs::read_to_string(&page_path)
            .await
            .map_err(|e| SiteError::io(&page_path, e))?;

        match recent::fill_container(&page, &cards) {
            Some(html) => {
                write_file(&page_path, html).await?;
                tracing::info!("Prerendered recent posts into {:?}", page_path);
            }
            None => tracing::debug!(
                "No #{} element in {:?}, leaving it unchanged",
                recent::CONTAINER_ID,
                page_path
            ),
        }
        Ok(())
    }
}

fn warn_missing_keys(doc: &ContentDocument) {
    for key in ["title", "date", "excerpt"] {
        if doc.front_matter.get(key).is_none() {
            tracing::warn!("Post {:?} has no `{}` in its front-matter", doc.source, key);
        }
    }
}

async fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| SiteError::io(path, e))
}

async fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent).await?;
    }
    fs::write(path, contents)
        .await
        .map_err(|e| SiteError::io(path, e))
}

async fn copy_file(src: PathBuf, dest: PathBuf) -> Result<()> {
    if let Some(parent) = dest.parent() {
        create_dir_all(parent).await?;
    }
    fs::copy(&src, &dest)
        .await
        .map_err(|e| SiteError::io(&src, e))?;
    tracing::debug!("Copied {:?}", dest);
    Ok(())
}
