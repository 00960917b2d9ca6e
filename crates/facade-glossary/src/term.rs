//! Term records and the category enumeration.

use serde::{Deserialize, Serialize};

/// Domain bucket for a glossary term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Financing,
    Valuation,
    RealEstate,
}

impl Category {
    /// All categories, in the order the filter pills are displayed.
    pub const ALL: [Category; 3] = [Category::Financing, Category::Valuation, Category::RealEstate];

    /// Stable identifier, matching the serialized form of record categories.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Financing => "financing",
            Self::Valuation => "valuation",
            Self::RealEstate => "real-estate",
        }
    }

    /// Display label for the filter pill.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Financing => "Financing",
            Self::Valuation => "Valuation",
            Self::RealEstate => "Real Estate",
        }
    }

    /// Icon name for the filter pill (lucide identifier).
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Financing => "Calculator",
            Self::Valuation => "TrendingUp",
            Self::RealEstate => "Building2",
        }
    }

    /// Parse a category from its identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.id() == id)
    }
}

/// One glossary entry.
///
/// Records are loaded once at startup and never mutated. `term` is the
/// short symbol shown on the card; `detail` is only shown after selection
/// and is deliberately excluded from search matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermRecord {
    /// Short symbol or abbreviation, unique within the glossary
    pub term: String,

    /// Domain bucket
    pub category: Category,

    /// Expanded name of the term
    pub full: String,

    /// One-sentence definition
    pub short: String,

    /// Multi-sentence explanation with domain figures
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn category_ids_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_id(category.id()), Some(category));
        }
    }

    #[test]
    fn rejects_unknown_category_id() {
        assert_eq!(Category::from_id("crypto"), None);
        assert_eq!(Category::from_id("Real Estate"), None);
    }

    #[test]
    fn deserializes_kebab_case_categories() {
        let record: TermRecord = serde_yaml::from_str(
            r#"
term: "NOI"
category: "real-estate"
full: "Net Operating Income"
short: "Income after operating expenses."
detail: "NOI = Gross Rental Income - Vacancy Loss - Operating Expenses."
"#,
        )
        .unwrap();

        assert_eq!(record.category, Category::RealEstate);
    }

    #[test]
    fn rejects_unknown_category_in_record() {
        let result: Result<TermRecord, _> = serde_yaml::from_str(
            r#"
term: "XYZ"
category: "insurance"
full: "Example"
short: "Example."
detail: "Example."
"#,
        );

        assert!(result.is_err());
    }
}
