//! Initialize a new site

use std::fs;
use std::path::Path;

use crate::error::{Result, SiteError};
use crate::CONFIG_FILE;

/// Files written by `init`, relative to the target directory
const SCAFFOLD: &[(&str, &str)] = &[
    ("src/index.html", include_str!("scaffold/index.html")),
    ("src/css/main.css", include_str!("scaffold/main.css")),
    ("src/js/main.js", include_str!("scaffold/main.js")),
    (
        "src/templates/blog-post.html",
        include_str!("scaffold/blog-post.html"),
    ),
    ("src/content/pages/about.md", include_str!("scaffold/about.md")),
    ("src/content/pages/faq.md", include_str!("scaffold/faq.md")),
    (
        "src/content/blog/hello-world.md",
        include_str!("scaffold/hello-world.md"),
    ),
    (
        "src/content/blog/writing-posts.md",
        include_str!("scaffold/writing-posts.md"),
    ),
];

const DEFAULT_CONFIG: &str = r#"# Site
title: Your Site
copyright_year: '2024'

# Directory
source_dir: src
public_dir: dist

# Recent posts
recent_posts: 3
prerender_recent_posts: false
"#;

/// Initialize a new site in the given directory
///
/// Existing files are left untouched, so running it twice is harmless.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir).map_err(|e| SiteError::io(target_dir, e))?;

    write_if_missing(&target_dir.join(CONFIG_FILE), DEFAULT_CONFIG)?;
    for (relative, contents) in SCAFFOLD {
        write_if_missing(&target_dir.join(relative), contents)?;
    }

    Ok(())
}

fn write_if_missing(path: &Path, contents: &str) -> Result<()> {
    if path.exists() {
        tracing::info!("Skipping existing {:?}", path);
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| SiteError::io(path, e))?;
    tracing::debug!("Created {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Site;

    #[test]
    fn test_init_site() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        for (relative, _) in SCAFFOLD {
            assert!(dir.path().join(relative).is_file(), "missing {}", relative);
        }
        let template = fs::read_to_string(dir.path().join("src/templates/blog-post.html")).unwrap();
        for token in ["{{title}}", "{{date}}", "{{content}}"] {
            assert!(template.contains(token));
        }

        // The generated config round-trips to the defaults
        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.config.title, "Your Site");
        assert_eq!(site.config.copyright_year, "2024");
    }

    #[test]
    fn test_init_keeps_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let about = dir.path().join("src/content/pages/about.md");
        fs::create_dir_all(about.parent().unwrap()).unwrap();
        fs::write(&about, "# Mine").unwrap();

        init_site(dir.path()).unwrap();
        assert_eq!(fs::read_to_string(&about).unwrap(), "# Mine");
    }
}
