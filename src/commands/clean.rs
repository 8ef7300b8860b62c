//! Clean the public directory

use std::fs;

use crate::error::{Result, SiteError};
use crate::Site;

/// Delete the public directory; a missing one is not an error
pub fn run(site: &Site) -> Result<()> {
    if site.public_dir.exists() {
        fs::remove_dir_all(&site.public_dir).map_err(|e| SiteError::io(&site.public_dir, e))?;
        tracing::info!("Deleted: {:?}", site.public_dir);
    }

    Ok(())
}
