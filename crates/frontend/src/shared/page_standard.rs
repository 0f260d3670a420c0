//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a004_aml_case--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The entity part of the id is the aggregate directory name, so an id copied
//! from the DOM inspector leads straight to `domain/a004_aml_case/`.

/// Record list with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Multi-step create form.
pub const PAGE_CAT_WIZARD: &str = "wizard";

/// KPI dashboard.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Login and other system pages.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_WIZARD,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_SYSTEM,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, cat)) if !entity.is_empty() && !cat.is_empty())
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

/// Page id of an entity in a category
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{}--{}", entity, category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        let id = page_id("a001_job", PAGE_CAT_WIZARD);
        assert_eq!(id, "a001_job--wizard");
        assert!(is_valid_page_id(&id));
        assert!(!is_valid_page_id("a001_job"));
        assert!(!is_valid_page_id("--list"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category("list"));
        assert!(!is_known_category("legacy"));
    }
}
