use std::collections::BTreeMap;

/// Value of the "all" option in every categorical select box.
pub const ALL_CODE: &str = "all";

/// Selection of one categorical filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Build from a `<select>` value, where [`ALL_CODE`] and "" mean no filter.
    pub fn from_select(value: &str) -> Self {
        if value.is_empty() || value == ALL_CODE {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    /// Value to put back into the `<select>`.
    pub fn select_value(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CODE,
            CategoryFilter::Only(code) => code,
        }
    }

    /// Exact, case-sensitive match against a record's code.
    pub fn accepts(&self, code: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(expected) => code == Some(expected.as_str()),
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, CategoryFilter::All)
    }
}

/// Search text plus categorical selections of one list view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search_term: String,
    pub categories: BTreeMap<&'static str, CategoryFilter>,
}

impl FilterState {
    pub fn category(&self, key: &str) -> &CategoryFilter {
        static ALL: CategoryFilter = CategoryFilter::All;
        self.categories.get(key).unwrap_or(&ALL)
    }

    /// Lowercased search term, `None` only when the term is empty.
    /// Whitespace is kept and matched literally.
    pub fn normalized_search(&self) -> Option<String> {
        if self.search_term.is_empty() {
            None
        } else {
            Some(self.search_term.to_lowercase())
        }
    }
}

/// Full UI state of a list page: filters, sorting and the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub filter: FilterState,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
}

impl ListState {
    pub fn new(sort_field: &str, page_size: usize) -> Self {
        Self {
            filter: FilterState::default(),
            sort_field: sort_field.to_string(),
            sort_ascending: true,
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn set_search(&mut self, term: String) {
        self.filter.search_term = term;
        self.page = 0;
    }

    pub fn set_category(&mut self, key: &'static str, filter: CategoryFilter) {
        self.filter.categories.insert(key, filter);
        self.page = 0;
    }

    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
        self.page = 0;
    }

    /// Same field flips direction, another field sorts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_select() {
        assert_eq!(CategoryFilter::from_select("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_select(""), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_select("approved"),
            CategoryFilter::Only("approved".into())
        );
    }

    #[test]
    fn test_accepts_is_case_sensitive() {
        let f = CategoryFilter::Only("approved".into());
        assert!(f.accepts(Some("approved")));
        assert!(!f.accepts(Some("Approved")));
        assert!(!f.accepts(None));
        assert!(CategoryFilter::All.accepts(None));
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut s = ListState::new("title", 50);
        s.page = 3;
        s.set_category("status", CategoryFilter::Only("paid".into()));
        assert_eq!(s.page, 0);

        s.page = 2;
        s.set_search("acme".into());
        assert_eq!(s.page, 0);
    }

    #[test]
    fn test_toggle_sort() {
        let mut s = ListState::new("title", 50);
        s.toggle_sort("title");
        assert!(!s.sort_ascending);
        s.toggle_sort("due_date");
        assert_eq!(s.sort_field, "due_date");
        assert!(s.sort_ascending);
    }

    #[test]
    fn test_normalized_search() {
        let mut f = FilterState::default();
        assert_eq!(f.normalized_search(), None);
        f.search_term = "ACME".into();
        assert_eq!(f.normalized_search().as_deref(), Some("acme"));
        f.search_term = "Acme ".into();
        assert_eq!(f.normalized_search().as_deref(), Some("acme "));
        f.search_term = " ".into();
        assert_eq!(f.normalized_search().as_deref(), Some(" "));
    }
}
