//! Product-page catalog: calculator cards and benefit rows.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// One calculator card on the product page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorCard {
    /// Lucide icon identifier
    pub icon: String,

    /// Brand color slug for the icon tile
    pub color: String,

    pub name: String,

    pub description: String,

    /// Bullet list shown on the card
    pub features: Vec<String>,

    /// Route the card links to
    pub href: String,

    /// Available without an account
    pub free: bool,
}

/// One entry in the benefits row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benefit {
    /// Lucide icon identifier
    pub icon: String,

    pub title: String,

    pub description: String,
}

/// The product page's data payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub calculators: Vec<CalculatorCard>,
    pub benefits: Vec<Benefit>,
}

impl Catalog {
    /// Parse a catalog from YAML source.
    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog =
            serde_yaml::from_str(source).map_err(|e| CatalogError::InvalidYaml(e.to_string()))?;

        let mut seen: Vec<String> = Vec::new();
        for calculator in &catalog.calculators {
            let key = calculator.name.to_lowercase();
            if seen.contains(&key) {
                return Err(CatalogError::DuplicateCalculator(calculator.name.clone()));
            }
            seen.push(key);

            if !calculator.href.starts_with('/') {
                return Err(CatalogError::InvalidHref {
                    name: calculator.name.clone(),
                    href: calculator.href.clone(),
                });
            }
        }

        Ok(catalog)
    }

    /// Load a catalog from a YAML file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let source = fs::read_to_string(path)
            .map_err(|e| CatalogError::ReadError(format!("{}: {}", path.display(), e)))?;

        Self::from_yaml(&source)
    }

    /// The built-in production catalog.
    pub fn builtin() -> Self {
        Self::from_yaml(BUILTIN_CATALOG).expect("Built-in catalog must be valid")
    }

    /// Number of calculators available without an account.
    pub fn free_count(&self) -> usize {
        self.calculators.iter().filter(|c| c.free).count()
    }
}

/// Errors that can occur when loading a catalog asset.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    ReadError(String),

    #[error("Invalid YAML in catalog: {0}")]
    InvalidYaml(String),

    #[error("Duplicate calculator: {0}")]
    DuplicateCalculator(String),

    #[error("Calculator '{name}' has a non-rooted href: {href}")]
    InvalidHref { name: String, href: String },
}

/// The production catalog, also scaffolded to `data/calculators.yaml` by
/// `facade init`.
pub const BUILTIN_CATALOG: &str = r#"calculators:
  - icon: "BarChart3"
    color: "sgf-green"
    name: "DSCR Calculator"
    description: "Calculate Debt Service Coverage Ratio to assess loan affordability and lender requirements."
    features: ["Loan amortization", "Monthly payment breakdown", "DSCR benchmarking"]
    href: "/calculators/dscr"
    free: true

  - icon: "DollarSign"
    color: "sgf-gold"
    name: "Business Loan Calculator"
    description: "Calculate monthly payments, total interest, and view full amortization schedules."
    features: ["SBA 7(a) & 504 loans", "Conventional financing", "Payment schedules"]
    href: "/calculators/business-loan"
    free: true

  - icon: "TrendingUp"
    color: "sgf-green"
    name: "Acquisition Analyzer"
    description: "Comprehensive deal analysis with ROI projections, equity build-up, and scenario modeling."
    features: ["10-year equity schedule", "Cash-on-cash returns", "Scenario modeling"]
    href: "/calculators/acquisition"
    free: true

  - icon: "Calculator"
    color: "sgf-gold"
    name: "Business Valuation"
    description: "Multiple valuation methods including SDE, EBITDA, revenue multiples, and DCF analysis."
    features: ["SDE multiple method", "EBITDA analysis", "DCF valuation"]
    href: "/calculators/valuation"
    free: false

  - icon: "Home"
    color: "sgf-green"
    name: "Real Estate Investor Pro"
    description: "Analyze Buy & Hold, Fix & Flip, and BRRRR investment strategies with full ROI modeling."
    features: ["Buy & Hold analysis", "Fix & Flip calculator", "BRRRR strategy"]
    href: "/calculators/rei-pro"
    free: false

  - icon: "Building2"
    color: "sgf-gold"
    name: "CRE Loan Sizer"
    description: "Size commercial real estate loans based on NOI, cap rates, and lender requirements."
    features: ["NOI analysis", "Cap rate calculator", "Lender requirements"]
    href: "/calculators/cre-loan-sizer"
    free: false

  - icon: "Building2"
    color: "sgf-green"
    name: "Commercial Property Analyzer"
    description: "Analyze office, retail, industrial, and NNN properties with market intelligence."
    features: ["9 property types", "NNN lease calculator", "Market benchmarks"]
    href: "/calculators/commercial-property"
    free: false

benefits:
  - icon: "Shield"
    title: "Lender-Grade Accuracy"
    description: "Built by financing professionals using the exact formulas lenders use to evaluate deals."

  - icon: "Zap"
    title: "Instant Results"
    description: "Real-time calculations as you type. No waiting, no page refreshes."

  - icon: "Users"
    title: "Client-Ready Reports"
    description: "Export professional PDF reports to share with clients, lenders, and partners."
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.calculators.len(), 7);
        assert_eq!(catalog.benefits.len(), 3);
        assert_eq!(catalog.free_count(), 3);
        assert_eq!(catalog.calculators[0].name, "DSCR Calculator");
    }

    #[test]
    fn errors_on_duplicate_calculator() {
        let result = Catalog::from_yaml(
            r#"
calculators:
  - { icon: "Home", color: "sgf-green", name: "Twin", description: "One.", features: [], href: "/a", free: true }
  - { icon: "Home", color: "sgf-green", name: "twin", description: "Two.", features: [], href: "/b", free: true }
benefits: []
"#,
        );

        assert!(matches!(result, Err(CatalogError::DuplicateCalculator(_))));
    }

    #[test]
    fn errors_on_relative_href() {
        let result = Catalog::from_yaml(
            r#"
calculators:
  - { icon: "Home", color: "sgf-green", name: "Solo", description: "One.", features: [], href: "calculators/solo", free: true }
benefits: []
"#,
        );

        assert!(
            matches!(result, Err(CatalogError::InvalidHref { href, .. }) if href == "calculators/solo")
        );
    }
}
