//! Terminal view of the glossary filter.

use std::path::Path;

use anyhow::Result;

use facade_glossary::{visible_terms, CategoryFilter, Glossary};

use crate::config;

/// Run the glossary command.
pub async fn run(
    config_path: &Path,
    query: Option<String>,
    category: Option<String>,
    show: Option<String>,
) -> Result<()> {
    let file_config = config::load(config_path)?;

    let glossary = match &file_config.data.glossary {
        Some(path) => Glossary::load(Path::new(path))?,
        None => Glossary::builtin(),
    };

    if let Some(symbol) = show {
        let Some(record) = glossary.get(&symbol) else {
            anyhow::bail!("Unknown term: {}", symbol);
        };

        println!("{}", record.term);
        println!("{}", record.full);
        println!();
        println!("{}", record.detail);
        return Ok(());
    }

    let filter = match category.as_deref() {
        Some(id) => CategoryFilter::from_id(id).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown category: {} (expected all, financing, valuation, real-estate)",
                id
            )
        })?,
        None => CategoryFilter::All,
    };

    let search = query.unwrap_or_default();
    let visible = visible_terms(glossary.terms(), filter, &search);

    if visible.is_empty() {
        println!("No terms found for \"{}\"", search);
        return Ok(());
    }

    for record in visible {
        println!(
            "{:<16} {:<12} {}",
            record.term,
            record.category.id(),
            record.short
        );
    }

    Ok(())
}
