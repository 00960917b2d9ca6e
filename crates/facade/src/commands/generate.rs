//! Page generation command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use facade_pages::{GenerateConfig, PageGenerator};

use crate::config;

/// Run the generate command.
pub async fn run(config_path: &Path, app_dir: Option<PathBuf>, no_patches: bool) -> Result<()> {
    tracing::info!("Generating pages...");

    let file_config = config::load(config_path)?;

    let config = GenerateConfig {
        root: PathBuf::from("."),
        app_dir: app_dir.unwrap_or_else(|| PathBuf::from(&file_config.site.app_dir)),
        components_dir: PathBuf::from(&file_config.site.components_dir),
        brand: file_config.site.brand,
        financing_url: file_config.site.financing_url,
        financing_label: file_config.site.financing_label,
        glossary_path: file_config.data.glossary.map(PathBuf::from),
        catalog_path: file_config.data.calculators.map(PathBuf::from),
        apply_patches: !no_patches && file_config.patch.enabled,
    };

    let result = PageGenerator::new(config).generate().await?;

    tracing::info!("Wrote {} pages in {}ms", result.pages, result.duration_ms);

    if result.patched_files > 0 {
        tracing::info!(
            "Patched {} files ({} replacements)",
            result.patched_files,
            result.replacements
        );
    }

    tracing::info!("Output: {}", result.app_dir.display());

    Ok(())
}
