//! Glossary asset loading and validation.

use std::fs;
use std::path::Path;

use crate::term::{Category, TermRecord};

/// An ordered, validated set of term records.
///
/// The order of the underlying list is the display order; filtering never
/// re-sorts it.
#[derive(Debug, Clone)]
pub struct Glossary {
    terms: Vec<TermRecord>,
}

impl Glossary {
    /// Parse a glossary from YAML source.
    pub fn from_yaml(source: &str) -> Result<Self, GlossaryError> {
        let terms: Vec<TermRecord> = serde_yaml::from_str(source)
            .map_err(|e| GlossaryError::InvalidYaml(e.to_string()))?;

        validate(&terms)?;

        Ok(Self { terms })
    }

    /// Load a glossary from a YAML file.
    pub fn load(path: &Path) -> Result<Self, GlossaryError> {
        let source = fs::read_to_string(path)
            .map_err(|e| GlossaryError::ReadError(format!("{}: {}", path.display(), e)))?;

        Self::from_yaml(&source)
    }

    /// The built-in production glossary.
    pub fn builtin() -> Self {
        Self::from_yaml(BUILTIN_GLOSSARY).expect("Built-in glossary must be valid")
    }

    /// All records, in display order.
    pub fn terms(&self) -> &[TermRecord] {
        &self.terms
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the glossary holds no records.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Look up a record by its symbol (case-insensitive).
    pub fn get(&self, term: &str) -> Option<&TermRecord> {
        self.terms
            .iter()
            .find(|record| record.term.eq_ignore_ascii_case(term))
    }

    /// Categories that actually occur in the data, in first-seen order.
    ///
    /// The pill list (`Category::ALL`) must stay a superset of this.
    pub fn categories_present(&self) -> Vec<Category> {
        let mut present = Vec::new();
        for record in &self.terms {
            if !present.contains(&record.category) {
                present.push(record.category);
            }
        }
        present
    }

    /// Number of records in one category.
    pub fn count_in(&self, category: Category) -> usize {
        self.terms.iter().filter(|t| t.category == category).count()
    }
}

fn validate(terms: &[TermRecord]) -> Result<(), GlossaryError> {
    let mut seen: Vec<String> = Vec::new();

    for record in terms {
        let key = record.term.to_lowercase();
        if seen.contains(&key) {
            return Err(GlossaryError::DuplicateTerm(record.term.clone()));
        }
        seen.push(key);

        for (field, value) in [
            ("term", &record.term),
            ("full", &record.full),
            ("short", &record.short),
            ("detail", &record.detail),
        ] {
            if value.trim().is_empty() {
                return Err(GlossaryError::EmptyField {
                    term: record.term.clone(),
                    field,
                });
            }
        }
    }

    Ok(())
}

/// Errors that can occur when loading a glossary asset.
#[derive(Debug, thiserror::Error)]
pub enum GlossaryError {
    #[error("Failed to read glossary file: {0}")]
    ReadError(String),

    #[error("Invalid YAML in glossary: {0}")]
    InvalidYaml(String),

    #[error("Duplicate term: {0}")]
    DuplicateTerm(String),

    #[error("Term '{term}' has an empty '{field}' field")]
    EmptyField { term: String, field: &'static str },
}

/// The production term list, also scaffolded to `data/glossary.yaml` by
/// `facade init` so deployments can edit it without rebuilding.
pub const BUILTIN_GLOSSARY: &str = r#"- term: "DSCR"
  category: "financing"
  full: "Debt Service Coverage Ratio"
  short: "A ratio measuring cash flow available to cover debt payments."
  detail: "DSCR = Net Operating Income / Total Debt Service. Lenders typically require a minimum DSCR of 1.25x, meaning the business generates 25% more cash flow than needed to cover loan payments. A DSCR below 1.0 means the business cannot cover its debt from operations alone."

- term: "SDE"
  category: "valuation"
  full: "Seller's Discretionary Earnings"
  short: "Total financial benefit a full-time owner-operator derives from a business."
  detail: "SDE = Net Profit + Owner's Salary + Non-cash expenses + One-time expenses + Personal expenses run through the business. SDE is the most common metric used to value small businesses under $5M in value. Typical SDE multiples range from 1.5x to 3.5x depending on industry and business size."

- term: "EBITDA"
  category: "valuation"
  full: "Earnings Before Interest, Taxes, Depreciation & Amortization"
  short: "A measure of core business profitability excluding financing and accounting decisions."
  detail: "EBITDA is used to value mid-market businesses typically over $1M in earnings. It removes the effects of financing decisions, tax environments, and non-cash accounting entries to show the true operating profitability. EBITDA multiples typically range from 3x to 8x for small-to-mid market businesses."

- term: "NOI"
  category: "real-estate"
  full: "Net Operating Income"
  short: "A property's annual income after operating expenses, before debt service."
  detail: "NOI = Gross Rental Income - Vacancy Loss - Operating Expenses. NOI does not include mortgage payments, capital expenditures, or depreciation. It is the primary metric used to value commercial real estate and determine loan sizing through DSCR analysis."

- term: "Cap Rate"
  category: "real-estate"
  full: "Capitalization Rate"
  short: "The rate of return on a real estate investment based on expected income."
  detail: "Cap Rate = NOI / Property Value. A higher cap rate generally indicates higher risk and higher potential return. Market cap rates vary significantly by property type and location. Office typically 6.5-8.5%, Industrial 4.5-6.5%, Retail 5.5-7.5%, NNN Lease 4.0-6.0%."

- term: "LTV"
  category: "financing"
  full: "Loan-to-Value Ratio"
  short: "The ratio of a loan amount to the appraised value of the asset."
  detail: "LTV = Loan Amount / Appraised Value. SBA loans typically allow up to 90% LTV, while conventional commercial loans usually require 75-80% LTV. Higher LTV means less down payment required but higher risk for the lender, often resulting in higher interest rates."

- term: "SBA 7(a)"
  category: "financing"
  full: "Small Business Administration 7(a) Loan Program"
  short: "The SBA's primary loan program for small business acquisition and growth."
  detail: "SBA 7(a) loans can be used for business acquisition, working capital, equipment, and real estate. Maximum loan amount is $5M. Down payment typically 10-30%. Terms up to 10 years for business acquisition, 25 years for real estate. Rates are Prime + 2.75% for loans over $50K."

- term: "DCF"
  category: "valuation"
  full: "Discounted Cash Flow"
  short: "A valuation method that estimates value based on projected future cash flows."
  detail: "DCF analysis discounts future cash flows back to present value using a discount rate (typically WACC or required rate of return). More appropriate for businesses with predictable, growing cash flows. The terminal value often represents 60-80% of total DCF value for stable businesses."

- term: "GRM"
  category: "real-estate"
  full: "Gross Rent Multiplier"
  short: "A quick valuation metric comparing property price to gross annual rent."
  detail: "GRM = Property Price / Gross Annual Rent. Used as a quick screening tool rather than a precise valuation method. A GRM of 8-12 is common in many markets. Lower GRM may indicate a better deal, but does not account for expenses or vacancy."

- term: "CoC"
  category: "real-estate"
  full: "Cash-on-Cash Return"
  short: "Annual pre-tax cash flow as a percentage of total cash invested."
  detail: "CoC = Annual Pre-Tax Cash Flow / Total Cash Invested. Measures the return on the actual cash you put into the deal. A CoC of 8-12% is generally considered good for real estate. Unlike cap rate, CoC accounts for financing and is specific to your deal terms."

- term: "BRRRR"
  category: "real-estate"
  full: "Buy, Rehab, Rent, Refinance, Repeat"
  short: "A real estate investment strategy to recycle capital across multiple properties."
  detail: "BRRRR investors buy undervalued properties, add value through renovation, rent them out, then refinance to pull out equity and repeat the process. The goal is to recapture most or all of the initial investment while retaining the rental property and cash flow."

- term: "NNN"
  category: "real-estate"
  full: "Triple Net Lease"
  short: "A lease where the tenant pays rent plus property taxes, insurance, and maintenance."
  detail: "In a NNN lease, the landlord receives a true net income with minimal management responsibility. NNN properties are valued highly by investors for their passive income characteristics. Cap rates for NNN properties are typically lower (4-6%) due to the reduced risk and management burden."

- term: "Amortization"
  category: "financing"
  full: "Loan Amortization"
  short: "The process of paying off a loan through scheduled, regular payments over time."
  detail: "Each payment covers both interest and principal. Early in the loan term, most of the payment goes toward interest. As the loan matures, more goes to principal. A 25-year amortization schedule is common for SBA and commercial real estate loans."

- term: "Working Capital"
  category: "financing"
  full: "Working Capital"
  short: "The difference between current assets and current liabilities."
  detail: "Working Capital = Current Assets - Current Liabilities. Adequate working capital is essential for day-to-day business operations. Lenders often require borrowers to maintain minimum working capital ratios. In business acquisitions, sufficient working capital post-close is a key underwriting consideration."
"#;
