//! Category and search filtering over the term list.

use crate::term::{Category, TermRecord};

/// Active category restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No restriction
    #[default]
    All,
    /// Only terms in one category
    Only(Category),
}

impl CategoryFilter {
    /// Parse a filter from a pill identifier ("all" or a category id).
    pub fn from_id(id: &str) -> Option<Self> {
        if id == "all" {
            return Some(Self::All);
        }
        Category::from_id(id).map(Self::Only)
    }

    /// Pill identifier for this filter.
    pub fn id(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.id(),
        }
    }

    /// Whether a record in `category` passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => *only == category,
        }
    }
}

/// Select the terms to display for the current filter state.
///
/// A term is visible iff it passes the category filter and, when `search`
/// is non-empty, the search text is a case-insensitive substring of its
/// symbol, full name, or short definition. The `detail` text is never
/// matched. Results keep the source list's order; nothing is re-ranked.
pub fn visible_terms<'a>(
    terms: &'a [TermRecord],
    category: CategoryFilter,
    search: &str,
) -> Vec<&'a TermRecord> {
    let needle = search.to_lowercase();

    terms
        .iter()
        .filter(|record| category.matches(record.category))
        .filter(|record| {
            needle.is_empty()
                || record.term.to_lowercase().contains(&needle)
                || record.full.to_lowercase().contains(&needle)
                || record.short.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Per-session filter state for the glossary view.
///
/// Created on mount, updated on each input, discarded on unmount. The
/// selection key drives detail-view visibility.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    search: String,
    category: CategoryFilter,
    selected: Option<String>,
}

impl FilterState {
    /// Empty search, all categories, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search text (called per keystroke, no debounce).
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Current search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replace the category restriction. `CategoryFilter::All` resets it.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Current category restriction.
    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    /// Open the detail view for a term.
    pub fn select(&mut self, term: impl Into<String>) {
        self.selected = Some(term.into());
    }

    /// Close the detail view (close control or scrim click).
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Terms visible under the current search and category filters.
    pub fn visible<'a>(&self, terms: &'a [TermRecord]) -> Vec<&'a TermRecord> {
        visible_terms(terms, self.category, &self.search)
    }

    /// Resolve the selected term against the list, if any.
    pub fn selected_term<'a>(&self, terms: &'a [TermRecord]) -> Option<&'a TermRecord> {
        let key = self.selected.as_deref()?;
        terms.iter().find(|record| record.term == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::Glossary;
    use pretty_assertions::assert_eq;

    fn symbols(visible: &[&TermRecord]) -> Vec<&str> {
        visible.iter().map(|t| t.term.as_str()).collect()
    }

    #[test]
    fn search_is_case_insensitive() {
        let glossary = Glossary::builtin();

        let lower = visible_terms(glossary.terms(), CategoryFilter::All, "dscr");
        let upper = visible_terms(glossary.terms(), CategoryFilter::All, "DSCR");

        assert_eq!(symbols(&lower), symbols(&upper));
        assert!(symbols(&lower).contains(&"DSCR"));
    }

    #[test]
    fn category_filter_restricts_to_that_category() {
        let glossary = Glossary::builtin();

        for category in Category::ALL {
            let visible =
                visible_terms(glossary.terms(), CategoryFilter::Only(category), "");
            assert!(!visible.is_empty());
            assert!(visible.iter().all(|t| t.category == category));
        }
    }

    #[test]
    fn all_with_empty_search_returns_full_list_in_order() {
        let glossary = Glossary::builtin();

        let visible = visible_terms(glossary.terms(), CategoryFilter::All, "");

        let expected: Vec<&str> = glossary.terms().iter().map(|t| t.term.as_str()).collect();
        assert_eq!(symbols(&visible), expected);
    }

    #[test]
    fn filtering_is_idempotent() {
        let glossary = Glossary::builtin();

        let first = visible_terms(glossary.terms(), CategoryFilter::Only(Category::Valuation), "e");
        let second = visible_terms(glossary.terms(), CategoryFilter::Only(Category::Valuation), "e");

        assert_eq!(symbols(&first), symbols(&second));
    }

    #[test]
    fn ratio_search_matches_short_and_full_fields() {
        let glossary = Glossary::builtin();

        let visible = visible_terms(glossary.terms(), CategoryFilter::All, "ratio");
        let found = symbols(&visible);

        // DSCR matches on its short definition, LTV on its full name.
        assert!(found.contains(&"DSCR"));
        assert!(found.contains(&"LTV"));
        assert!(!found.contains(&"SDE"));
    }

    #[test]
    fn real_estate_category_is_exact_set() {
        let glossary = Glossary::builtin();

        let visible = visible_terms(
            glossary.terms(),
            CategoryFilter::Only(Category::RealEstate),
            "",
        );

        assert_eq!(
            symbols(&visible),
            vec!["NOI", "Cap Rate", "GRM", "CoC", "BRRRR", "NNN"]
        );
    }

    #[test]
    fn no_match_yields_empty_result() {
        let glossary = Glossary::builtin();

        let visible = visible_terms(glossary.terms(), CategoryFilter::All, "zzz-no-match");

        assert!(visible.is_empty());
    }

    #[test]
    fn detail_text_is_not_searched() {
        let glossary = Glossary::builtin();

        // "1.25x" appears only in the DSCR detail text.
        let visible = visible_terms(glossary.terms(), CategoryFilter::All, "1.25x");

        assert!(visible.is_empty());
    }

    #[test]
    fn category_and_search_compose_as_and() {
        let glossary = Glossary::builtin();

        let visible = visible_terms(
            glossary.terms(),
            CategoryFilter::Only(Category::Financing),
            "ratio",
        );

        assert_eq!(symbols(&visible), vec!["DSCR", "LTV"]);
    }

    #[test]
    fn selection_resolves_full_name_and_detail() {
        let glossary = Glossary::builtin();
        let mut state = FilterState::new();

        state.select("EBITDA");

        let selected = state.selected_term(glossary.terms()).unwrap();
        assert_eq!(
            selected.full,
            "Earnings Before Interest, Taxes, Depreciation & Amortization"
        );
        assert!(selected.detail.contains("mid-market businesses"));

        state.clear_selection();
        assert!(state.selected_term(glossary.terms()).is_none());
    }

    #[test]
    fn state_transitions_recompute_visibility() {
        let glossary = Glossary::builtin();
        let mut state = FilterState::new();

        assert_eq!(state.visible(glossary.terms()).len(), glossary.len());

        state.set_category(CategoryFilter::Only(Category::RealEstate));
        state.set_search("rent");
        let visible = state.visible(glossary.terms());
        assert!(visible.iter().all(|t| t.category == Category::RealEstate));
        assert!(symbols(&visible).contains(&"GRM"));

        state.set_category(CategoryFilter::All);
        state.set_search("");
        assert_eq!(state.visible(glossary.terms()).len(), glossary.len());
    }

    #[test]
    fn pill_ids_parse_back_to_filters() {
        assert_eq!(CategoryFilter::from_id("all"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_id("real-estate"),
            Some(CategoryFilter::Only(Category::RealEstate))
        );
        assert_eq!(CategoryFilter::from_id("bonds"), None);
    }
}
