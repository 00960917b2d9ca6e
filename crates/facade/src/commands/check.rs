//! Data asset validation and app directory report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use facade_glossary::{Category, Glossary};
use facade_pages::{Catalog, Page};

use crate::config;

/// Run the check command.
pub async fn run(config_path: &Path) -> Result<()> {
    let file_config = config::load(config_path)?;

    // Glossary asset
    let glossary = match &file_config.data.glossary {
        Some(path) => Glossary::load(Path::new(path)).context("Invalid glossary asset")?,
        None => Glossary::builtin(),
    };

    tracing::info!("Glossary: {} terms", glossary.len());
    for category in Category::ALL {
        let count = glossary.count_in(category);
        if count == 0 {
            // The pill still renders; it just filters to an empty list.
            tracing::warn!("  {}: no terms", category.label());
        } else {
            tracing::info!("  {}: {} terms", category.label(), count);
        }
    }

    // Catalog asset
    let catalog = match &file_config.data.calculators {
        Some(path) => Catalog::load(Path::new(path)).context("Invalid catalog asset")?,
        None => Catalog::builtin(),
    };

    tracing::info!(
        "Catalog: {} calculators ({} free), {} benefits",
        catalog.calculators.len(),
        catalog.free_count(),
        catalog.benefits.len()
    );

    // App directory report
    let app_dir = PathBuf::from(&file_config.site.app_dir);
    if !app_dir.exists() {
        tracing::warn!(
            "App directory not found: {}. Run 'facade generate' first.",
            app_dir.display()
        );
        return Ok(());
    }

    let mut total_pages = 0;
    for entry in WalkDir::new(&app_dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && path.file_name().and_then(|n| n.to_str()) == Some("page.tsx") {
            total_pages += 1;
        }
    }

    let mut present = 0;
    for page in Page::ALL {
        let path = app_dir.join(page.route()).join("page.tsx");
        if path.exists() {
            present += 1;
            tracing::info!("  /{}: present", page.route());
        } else {
            tracing::warn!("  /{}: missing", page.route());
        }
    }

    tracing::info!(
        "{} of {} page files under {} are facade-managed",
        present,
        total_pages,
        app_dir.display()
    );

    Ok(())
}
