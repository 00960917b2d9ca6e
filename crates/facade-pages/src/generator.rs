//! Page generation: render the marketing pages and patch the host app.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use facade_glossary::{Glossary, GlossaryError};

use crate::catalog::{Catalog, CatalogError};
use crate::patch::{self, PatchError};
use crate::templates::{ProductContext, ResourcesContext, SignInContext, TemplateEngine};

/// Configuration for a generate run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Project root the app lives under
    pub root: PathBuf,

    /// App router directory, relative to the root
    pub app_dir: PathBuf,

    /// Shared components directory, relative to the root
    pub components_dir: PathBuf,

    /// Brand name shown on the sign-in page
    pub brand: String,

    /// Outbound financing-contact destination
    pub financing_url: String,

    /// Link text for the financing destination
    pub financing_label: String,

    /// Glossary data asset; builtin data when `None`
    pub glossary_path: Option<PathBuf>,

    /// Calculator catalog asset; builtin data when `None`
    pub catalog_path: Option<PathBuf>,

    /// Apply the built-in patch set after writing pages
    pub apply_patches: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            app_dir: PathBuf::from("app"),
            components_dir: PathBuf::from("components"),
            brand: "Acquirely".to_string(),
            financing_url: "https://startinggatefinancial.com".to_string(),
            financing_label: "Starting Gate Financial".to_string(),
            glossary_path: None,
            catalog_path: None,
            apply_patches: true,
        }
    }
}

/// Result of a generate run.
#[derive(Debug)]
pub struct GenerateResult {
    /// Number of page files written
    pub pages: usize,

    /// Number of files changed by patches
    pub patched_files: usize,

    /// Total patch occurrences replaced
    pub replacements: usize,

    /// Total run time in milliseconds
    pub duration_ms: u64,

    /// App directory pages were written under
    pub app_dir: PathBuf,
}

/// Errors that can occur during generation.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Glossary(#[from] GlossaryError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write page: {0}")]
    WriteError(String),
}

/// The generated routes, relative to the app directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    SignIn,
    Product,
    Resources,
}

impl Page {
    /// All generated pages.
    pub const ALL: [Page; 3] = [Page::SignIn, Page::Product, Page::Resources];

    /// Route segment under the app directory.
    pub fn route(&self) -> &'static str {
        match self {
            Self::SignIn => "sign-in",
            Self::Product => "product",
            Self::Resources => "resources",
        }
    }
}

/// Marketing page generator.
pub struct PageGenerator {
    config: GenerateConfig,
    templates: TemplateEngine,
}

impl PageGenerator {
    /// Create a generator for the given configuration.
    pub fn new(config: GenerateConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    /// Render and write all pages, then apply patches when enabled.
    pub async fn generate(&self) -> Result<GenerateResult, GenerateError> {
        let start = Instant::now();

        let glossary = self.load_glossary()?;
        let catalog = self.load_catalog()?;

        let app_dir = self.config.root.join(&self.config.app_dir);

        // Pages are independent; render and write them in parallel.
        let results: Vec<Result<(), GenerateError>> = Page::ALL
            .par_iter()
            .map(|page| self.write_page(*page, &app_dir, &glossary, &catalog))
            .collect();

        for result in results {
            result?;
        }

        let (patched_files, replacements) = if self.config.apply_patches {
            self.apply_patches()
        } else {
            (0, 0)
        };

        Ok(GenerateResult {
            pages: Page::ALL.len(),
            patched_files,
            replacements,
            duration_ms: start.elapsed().as_millis() as u64,
            app_dir,
        })
    }

    fn load_glossary(&self) -> Result<Glossary, GlossaryError> {
        match &self.config.glossary_path {
            Some(path) => {
                let glossary = Glossary::load(path)?;
                tracing::info!("Loaded {} terms from {}", glossary.len(), path.display());
                Ok(glossary)
            }
            None => Ok(Glossary::builtin()),
        }
    }

    fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.config.catalog_path {
            Some(path) => {
                let catalog = Catalog::load(path)?;
                tracing::info!(
                    "Loaded {} calculators from {}",
                    catalog.calculators.len(),
                    path.display()
                );
                Ok(catalog)
            }
            None => Ok(Catalog::builtin()),
        }
    }

    fn render(
        &self,
        page: Page,
        glossary: &Glossary,
        catalog: &Catalog,
    ) -> Result<String, GenerateError> {
        let rendered = match page {
            Page::SignIn => self.templates.render_sign_in(&SignInContext {
                brand: self.config.brand.clone(),
                financing_url: self.config.financing_url.clone(),
                financing_label: self.config.financing_label.clone(),
            }),
            Page::Product => self.templates.render_product(&ProductContext::new(catalog)),
            Page::Resources => self.templates.render_resources(&ResourcesContext::new(
                &self.config.financing_url,
                &self.config.financing_label,
                glossary,
            )),
        };

        rendered.map_err(|e| GenerateError::TemplateError(e.to_string()))
    }

    fn write_page(
        &self,
        page: Page,
        app_dir: &Path,
        glossary: &Glossary,
        catalog: &Catalog,
    ) -> Result<(), GenerateError> {
        let source = self.render(page, glossary, catalog)?;

        let dir = app_dir.join(page.route());
        fs::create_dir_all(&dir).map_err(|e| {
            GenerateError::WriteError(format!("{}: {}", dir.display(), e))
        })?;

        let path = dir.join("page.tsx");
        fs::write(&path, source)
            .map_err(|e| GenerateError::WriteError(format!("{}: {}", path.display(), e)))?;

        tracing::info!("Wrote {}", path.display());

        Ok(())
    }

    /// Apply the built-in patch set. A missing target is a warning, not a
    /// failure: the host app may not carry every patched file.
    fn apply_patches(&self) -> (usize, usize) {
        let mut patched_files = 0;
        let mut replacements = 0;

        let patches =
            patch::builtin_patches(&self.config.components_dir, &self.config.app_dir);

        for entry in &patches {
            match patch::apply(&self.config.root, entry) {
                Ok(outcome) if outcome.replacements > 0 => {
                    patched_files += 1;
                    replacements += outcome.replacements;
                }
                Ok(_) => {}
                Err(PatchError::TargetNotFound(path)) => {
                    tracing::warn!("Skipping patch '{}': {} not found", entry.name, path);
                }
                Err(e) => {
                    tracing::warn!("Patch '{}' failed: {}", entry.name, e);
                }
            }
        }

        (patched_files, replacements)
    }
}
