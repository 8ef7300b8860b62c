//! List site content

use std::fmt::Write;

use crate::content::loader::ContentLoader;
use crate::content::{PageKind, UNDEFINED};
use crate::error::Result;
use crate::Site;

/// Content classes that can be listed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Post,
    Page,
}

impl std::str::FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "post" | "posts" => Ok(ContentType::Post),
            "page" | "pages" => Ok(ContentType::Page),
            _ => Err(format!("Unknown type: {}. Available: post, page", s)),
        }
    }
}

/// Print site content of one class, in directory listing order
pub async fn run(site: &Site, content_type: ContentType) -> Result<()> {
    print!("{}", render(site, content_type).await?);
    Ok(())
}

/// Build the listing text
pub async fn render(site: &Site, content_type: ContentType) -> Result<String> {
    let loader = ContentLoader::new(site);
    let mut out = String::new();

    match content_type {
        ContentType::Post => {
            let posts = loader.load_posts().await?;
            let _ = writeln!(out, "Posts ({}):", posts.len());
            for doc in &posts {
                let kind = PageKind::post(doc);
                let _ = writeln!(
                    out,
                    "  {} - {} [{}]",
                    kind.date().unwrap_or(UNDEFINED),
                    kind.title().unwrap_or(UNDEFINED),
                    kind.slug()
                );
            }
        }
        ContentType::Page => {
            let pages = loader.load_pages().await?;
            let _ = writeln!(out, "Pages ({}):", pages.len());
            for doc in &pages {
                let kind = PageKind::page(doc);
                let _ = writeln!(
                    out,
                    "  {} [{}]",
                    kind.title().unwrap_or_default(),
                    kind.slug()
                );
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init;

    #[test]
    fn test_parse_content_type() {
        assert_eq!("posts".parse::<ContentType>(), Ok(ContentType::Post));
        assert_eq!("page".parse::<ContentType>(), Ok(ContentType::Page));
        assert!("tags".parse::<ContentType>().is_err());
    }

    #[tokio::test]
    async fn test_render_listing() {
        let dir = tempfile::tempdir().unwrap();
        init::init_site(dir.path()).unwrap();
        let site = Site::new(dir.path()).unwrap();

        let posts = render(&site, ContentType::Post).await.unwrap();
        assert!(posts.starts_with("Posts (2):"));
        assert!(posts.contains("  2024-01-15 - Hello World [hello-world]"));

        let pages = render(&site, ContentType::Page).await.unwrap();
        assert!(pages.starts_with("Pages (2):"));
        assert!(pages.contains("  About [about]"));
        assert!(pages.contains("  Faq [faq]"));
    }
}
