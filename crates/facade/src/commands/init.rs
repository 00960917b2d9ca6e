//! Scaffold configuration and data assets in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing facade...");

    // Check if config already exists
    let config_path = Path::new("site.toml");
    if config_path.exists() && !yes {
        tracing::warn!("site.toml already exists. Use --yes to overwrite.");
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG).context("Failed to write site.toml")?;
    tracing::info!("Created site.toml");

    let data_dir = Path::new("data");
    if !data_dir.exists() {
        fs::create_dir_all(data_dir).context("Failed to create data directory")?;
    }

    // Scaffold the glossary asset
    let glossary_path = data_dir.join("glossary.yaml");
    if !glossary_path.exists() || yes {
        fs::write(&glossary_path, facade_glossary::BUILTIN_GLOSSARY)
            .context("Failed to write data/glossary.yaml")?;
        tracing::info!("Created data/glossary.yaml");
    }

    // Scaffold the calculator catalog asset
    let catalog_path = data_dir.join("calculators.yaml");
    if !catalog_path.exists() || yes {
        fs::write(&catalog_path, facade_pages::BUILTIN_CATALOG)
            .context("Failed to write data/calculators.yaml")?;
        tracing::info!("Created data/calculators.yaml");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'facade generate' to write the pages.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Facade Configuration

[site]
# App router directory pages are written under
app_dir = "app"

# Shared components directory (patch targets)
components_dir = "components"

# Brand name shown on the sign-in page
brand = "Acquirely"

# Outbound financing-contact destination
financing_url = "https://startinggatefinancial.com"
financing_label = "Starting Gate Financial"

[data]
# Data assets; comment out to use the built-in data
glossary = "data/glossary.yaml"
calculators = "data/calculators.yaml"

[patch]
# Apply the built-in navbar/pricing patches after writing pages
enabled = true
"#;
