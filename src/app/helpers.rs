//! Async helper functions

use std::path::PathBuf;

use anyhow::Context;

use crate::features::Settings;

/// Write default settings on first run so the file is discoverable
///
/// Returns the path written, or `None` when a settings file already exists.
pub async fn ensure_settings_file(settings: Settings) -> anyhow::Result<Option<PathBuf>> {
    let path = Settings::file_path().context("could not determine config directory")?;

    if tokio::fs::try_exists(&path)
        .await
        .with_context(|| format!("checking {}", path.display()))?
    {
        return Ok(None);
    }

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let content = settings.to_json()?;
    tokio::fs::write(&path, content)
        .await
        .with_context(|| format!("writing {}", path.display()))?;

    tracing::info!("Wrote default settings to {}", path.display());
    Ok(Some(path))
}
