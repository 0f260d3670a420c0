use crate::shared::config::{DEFAULT_PAGE_SIZE, LIST_PAGE_SIZE_OPTIONS};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// "3 / 7 (312 records)", or "No records" for an empty list
fn pager_text(page: usize, total_pages: usize, total_count: usize) -> String {
    if total_count == 0 {
        return "No records".to_string();
    }
    let record_word = if total_count == 1 { "record" } else { "records" };
    format!(
        "{} / {} ({} {})",
        page + 1,
        total_pages.max(1),
        total_count,
        record_word
    )
}

fn has_next(page: usize, total_pages: usize) -> bool {
    page + 1 < total_pages
}

/// First/previous/next/last buttons, position text and a page size select
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    /// Records after filtering
    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)]
    page_size: Signal<usize>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,

    /// Defaults to LIST_PAGE_SIZE_OPTIONS
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| LIST_PAGE_SIZE_OPTIONS.to_vec());

    let at_start = move || current_page.get() == 0;
    let at_end = move || !has_next(current_page.get(), total_pages.get());

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=at_start
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get_untracked();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=at_start
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || pager_text(current_page.get(), total_pages.get(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get_untracked();
                    if has_next(page, total_pages.get_untracked()) {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=at_end
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get_untracked().saturating_sub(1))
                disabled=at_end
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(DEFAULT_PAGE_SIZE);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {format!("{} / page", size)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pager_text() {
        assert_eq!(pager_text(0, 1, 0), "No records");
        assert_eq!(pager_text(0, 1, 1), "1 / 1 (1 record)");
        assert_eq!(pager_text(2, 7, 312), "3 / 7 (312 records)");
    }

    #[test]
    fn test_has_next() {
        assert!(has_next(0, 2));
        assert!(!has_next(1, 2));
        assert!(!has_next(0, 0));
    }
}
