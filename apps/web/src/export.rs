use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

/// Directory name badges are referenced under, relative to the page.
pub const ASSETS_PREFIX: &str = "assets";

/// Writes a rendered page to `path`, creating parent directories as needed.
/// Returns the number of bytes written.
pub async fn export_page(path: &Path, html: &str) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    tokio::fs::write(path, html)
        .await
        .with_context(|| format!("Failed to write page to {}", path.display()))?;

    info!("Exported page to {} ({} bytes)", path.display(), html.len());
    Ok(html.len())
}

/// Recursively copies `src` into `dest`. A missing `src` copies nothing.
/// Returns the number of files copied.
pub async fn copy_assets(src: &Path, dest: &Path) -> Result<usize> {
    match tokio::fs::metadata(src).await {
        Ok(meta) if meta.is_dir() => {}
        _ => {
            info!("No assets directory at {}, skipping copy", src.display());
            return Ok(0);
        }
    }

    let mut copied = 0;
    let mut pending: Vec<(PathBuf, PathBuf)> = vec![(src.to_path_buf(), dest.to_path_buf())];

    while let Some((from, to)) = pending.pop() {
        tokio::fs::create_dir_all(&to)
            .await
            .with_context(|| format!("Failed to create directory {}", to.display()))?;

        let mut entries = tokio::fs::read_dir(&from)
            .await
            .with_context(|| format!("Failed to read directory {}", from.display()))?;

        while let Some(entry) = entries.next_entry().await? {
            let target = to.join(entry.file_name());
            if entry.file_type().await?.is_dir() {
                pending.push((entry.path(), target));
            } else {
                tokio::fs::copy(entry.path(), &target)
                    .await
                    .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
                copied += 1;
            }
        }
    }

    info!("Copied {copied} asset files to {}", dest.display());
    Ok(copied)
}

/// Writes the page and places the assets directory beside it, so relative
/// `assets/...` references resolve the same way they do when served.
pub async fn export_site(path: &Path, html: &str, assets_dir: &Path) -> Result<()> {
    export_page(path, html).await?;

    let site_root = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    copy_assets(assets_dir, &site_root.join(ASSETS_PREFIX)).await?;
    Ok(())
}
