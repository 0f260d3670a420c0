//! Generic filterable, sortable, paginated record list.
//!
//! A page builds one [`ListViewController`] from field accessors and feeds it
//! the fetched collection together with the page's [`ListState`].

pub mod cell;
pub mod page;
pub mod state;

use crate::shared::list_utils::{sort_list, Sortable};
use contracts::shared::categorical::Categorical;

pub use page::{Column, Kpi, RecordListPage};
pub use state::{CategoryFilter, FilterState, ListState, ALL_CODE};

/// Accessor of a free-text field that takes part in the search.
pub type SearchField<T> = fn(&T) -> Option<&str>;

/// One categorical dimension of a list (status, type, priority, ...).
pub struct CategoryField<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub value: fn(&T) -> Option<&'static str>,
    pub options: Vec<(&'static str, &'static str)>,
}

impl<T> CategoryField<T> {
    /// Dimension backed by a closed enum; the options come from `E::all()`.
    pub fn of<E: Categorical>(
        key: &'static str,
        label: &'static str,
        value: fn(&T) -> Option<&'static str>,
    ) -> Self {
        Self {
            key,
            label,
            value,
            options: E::options(),
        }
    }
}

impl<T> Clone for CategoryField<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            value: self.value,
            options: self.options.clone(),
        }
    }
}

/// One page of the derived list
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub rows: Vec<T>,
    /// Number of records after filtering, before pagination.
    pub total_count: usize,
    pub total_pages: usize,
    /// Page actually shown, clamped to the last page.
    pub page: usize,
}

pub struct ListViewController<T> {
    search_fields: Vec<SearchField<T>>,
    categories: Vec<CategoryField<T>>,
}

impl<T> Clone for ListViewController<T> {
    fn clone(&self) -> Self {
        Self {
            search_fields: self.search_fields.clone(),
            categories: self.categories.clone(),
        }
    }
}

impl<T> Default for ListViewController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListViewController<T> {
    pub fn new() -> Self {
        Self {
            search_fields: Vec::new(),
            categories: Vec::new(),
        }
    }

    pub fn search(mut self, field: SearchField<T>) -> Self {
        self.search_fields.push(field);
        self
    }

    pub fn category(mut self, field: CategoryField<T>) -> Self {
        self.categories.push(field);
        self
    }

    pub fn categories(&self) -> &[CategoryField<T>] {
        &self.categories
    }

    /// A record passes when the search term is empty or found (case-insensitive)
    /// in any search field, and every categorical filter is "all" or equal to
    /// the record's code.
    pub fn matches(&self, item: &T, filter: &FilterState) -> bool {
        if let Some(term) = filter.normalized_search() {
            let found = self.search_fields.iter().any(|field| {
                field(item)
                    .map(|text| text.to_lowercase().contains(&term))
                    .unwrap_or(false)
            });
            if !found {
                return false;
            }
        }

        self.categories
            .iter()
            .all(|cat| filter.category(cat.key).accepts((cat.value)(item)))
    }

    /// Number of active filters, for the filter panel badge.
    pub fn active_filters_count(&self, filter: &FilterState) -> usize {
        let search = usize::from(filter.normalized_search().is_some());
        let categories = self
            .categories
            .iter()
            .filter(|cat| filter.category(cat.key).is_active())
            .count();
        search + categories
    }
}

impl<T: Clone> ListViewController<T> {
    pub fn filter(&self, items: &[T], filter: &FilterState) -> Vec<T> {
        items
            .iter()
            .filter(|item| self.matches(item, filter))
            .cloned()
            .collect()
    }
}

impl<T: Clone + Sortable> ListViewController<T> {
    /// Filter, then sort, then cut out the requested page.
    pub fn apply(&self, items: &[T], state: &ListState) -> ListPage<T> {
        let mut data = self.filter(items, &state.filter);
        sort_list(&mut data, &state.sort_field, state.sort_ascending);

        let total_count = data.len();
        let page_size = state.page_size.max(1);
        let total_pages = if total_count == 0 {
            1
        } else {
            (total_count + page_size - 1) / page_size
        };
        let page = state.page.min(total_pages - 1);
        let start = page * page_size;
        let end = (start + page_size).min(total_count);
        let rows = data.get(start..end).unwrap_or(&[]).to_vec();

        ListPage {
            rows,
            total_count,
            total_pages,
            page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_aml_case::AmlCaseStatus;
    use std::cmp::Ordering;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        client_name: String,
        assigned_to: Option<String>,
        status: Option<AmlCaseStatus>,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "client_name" => self.client_name.cmp(&other.client_name),
                _ => self.id.cmp(&other.id),
            }
        }
    }

    fn case(id: &str, client: &str, status: Option<AmlCaseStatus>) -> Row {
        Row {
            id: id.into(),
            client_name: client.into(),
            assigned_to: Some("Dana Reeve".into()),
            status,
        }
    }

    fn controller() -> ListViewController<Row> {
        ListViewController::<Row>::new()
            .search(|c: &Row| Some(c.client_name.as_str()))
            .search(|c: &Row| c.assigned_to.as_deref())
            .category(CategoryField::of::<AmlCaseStatus>("status", "Status", |c: &Row| {
                c.status.map(|s| s.code())
            }))
    }

    fn collection() -> Vec<Row> {
        vec![
            case("1", "Acme Ltd", Some(AmlCaseStatus::Approved)),
            case("2", "Brook & Sons", Some(AmlCaseStatus::PendingReview)),
            case("3", "Cobalt Trust", Some(AmlCaseStatus::Expired)),
        ]
    }

    #[test]
    fn test_identity_filter_returns_everything() {
        let items = collection();
        let filtered = controller().filter(&items, &FilterState::default());
        assert_eq!(filtered, items);
    }

    #[test]
    fn test_status_filter_scenario() {
        let items = collection();
        let mut filter = FilterState::default();
        filter
            .categories
            .insert("status", CategoryFilter::Only("approved".into()));
        let filtered = controller().filter(&items, &filter);
        assert_eq!(filtered.len(), 1);
        assert!(filtered
            .iter()
            .all(|c| c.status == Some(AmlCaseStatus::Approved)));
    }

    #[test]
    fn test_every_result_has_selected_code() {
        let mut items = collection();
        items.push(case("4", "Delta plc", None));
        items.push(case("5", "Echo LLP", Some(AmlCaseStatus::Unknown)));
        for status in AmlCaseStatus::all() {
            let mut filter = FilterState::default();
            filter
                .categories
                .insert("status", CategoryFilter::Only(status.code().into()));
            for c in controller().filter(&items, &filter) {
                assert_eq!(c.status, Some(*status));
            }
        }
    }

    #[test]
    fn test_search_is_case_insensitive_over_any_field() {
        let items = collection();
        let filter = FilterState {
            search_term: "BROOK".into(),
            ..Default::default()
        };
        assert_eq!(controller().filter(&items, &filter).len(), 1);

        let by_assignee = FilterState {
            search_term: "reeve".into(),
            ..Default::default()
        };
        assert_eq!(controller().filter(&items, &by_assignee).len(), 3);

        let nothing = FilterState {
            search_term: "zzz".into(),
            ..Default::default()
        };
        assert!(controller().filter(&items, &nothing).is_empty());
    }

    #[test]
    fn test_search_keeps_whitespace() {
        let items = collection();
        let search = |term: &str| {
            let filter = FilterState {
                search_term: term.into(),
                ..Default::default()
            };
            controller().filter(&items, &filter).len()
        };
        assert_eq!(search("ltd"), 1);
        assert_eq!(search("ltd "), 0);
        assert_eq!(search("brook "), 1);
        // every row is assigned to "Dana Reeve"
        assert_eq!(search(" "), 3);
    }

    #[test]
    fn test_search_and_category_combine() {
        let items = collection();
        let mut filter = FilterState {
            search_term: "acme".into(),
            ..Default::default()
        };
        filter
            .categories
            .insert("status", CategoryFilter::Only("expired".into()));
        assert!(controller().filter(&items, &filter).is_empty());
        assert_eq!(controller().active_filters_count(&filter), 2);
    }

    #[test]
    fn test_apply_sorts_and_paginates() {
        let items = collection();
        let mut state = ListState::new("client_name", 2);
        state.sort_ascending = false;

        let first = controller().apply(&items, &state);
        assert_eq!(first.total_count, 3);
        assert_eq!(first.total_pages, 2);
        let names: Vec<&str> = first.rows.iter().map(|c| c.client_name.as_str()).collect();
        assert_eq!(names, vec!["Cobalt Trust", "Brook & Sons"]);

        state.page = 1;
        let second = controller().apply(&items, &state);
        assert_eq!(second.rows.len(), 1);
        assert_eq!(second.rows[0].client_name, "Acme Ltd");
    }

    #[test]
    fn test_apply_clamps_page_after_filtering() {
        let items = collection();
        let mut state = ListState::new("client_name", 1);
        state.page = 2;
        state.filter.search_term = "acme".into();

        let page = controller().apply(&items, &state);
        assert_eq!(page.page, 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.rows.len(), 1);
    }

    #[test]
    fn test_apply_on_empty_collection() {
        let page = controller().apply(&[], &ListState::new("client_name", 50));
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 0);
        assert!(page.rows.is_empty());
    }
}
