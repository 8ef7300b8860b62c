//! Build the static site

use std::time::Instant;

use crate::error::Result;
use crate::generator::{BuildReport, Generator};
use crate::Site;

/// Run one full build from the source tree into the public directory
pub async fn run(site: &Site) -> Result<BuildReport> {
    let start = Instant::now();
    tracing::info!(
        "Building {:?} into {:?}",
        site.source_dir,
        site.public_dir
    );

    let report = Generator::new(site).generate().await?;

    tracing::info!(
        "Built {} pages and {} posts in {:.2}s",
        report.pages,
        report.posts,
        start.elapsed().as_secs_f64()
    );
    Ok(report)
}
