//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, SiteError};

/// Main site configuration
///
/// Every key is optional; a missing `_config.yml` yields the defaults, which
/// reproduce the fixed `src/` -> `dist/` layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub copyright_year: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,

    // Recent posts preview
    pub recent_posts: usize,
    pub prerender_recent_posts: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Your Site".to_string(),
            copyright_year: "2024".to_string(),

            source_dir: "src".to_string(),
            public_dir: "dist".to_string(),

            recent_posts: 3,
            prerender_recent_posts: false,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| SiteError::io(path, e))?;
        // An empty file deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content).map_err(|source| SiteError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Your Site");
        assert_eq!(config.source_dir, "src");
        assert_eq!(config.public_dir, "dist");
        assert_eq!(config.recent_posts, 3);
        assert!(!config.prerender_recent_posts);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
public_dir: public
recent_posts: 5
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.public_dir, "public");
        assert_eq!(config.recent_posts, 5);
        // Unset keys keep their defaults
        assert_eq!(config.source_dir, "src");
        assert_eq!(config.copyright_year, "2024");
    }

    #[test]
    fn test_load_empty_and_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");

        fs::write(&path, "").unwrap();
        assert_eq!(SiteConfig::load(&path).unwrap().title, "Your Site");

        fs::write(&path, "recent_posts: many\n").unwrap();
        assert!(matches!(
            SiteConfig::load(&path),
            Err(SiteError::Config { .. })
        ));
    }
}
