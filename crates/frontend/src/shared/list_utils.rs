//! Sorting helpers and the debounced search box shared by all list pages
use crate::shared::config::SEARCH_DEBOUNCE_MS;
use crate::shared::icons::icon;
use chrono::NaiveDate;
use contracts::shared::categorical::Categorical;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

/// Types that can be sorted by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sorts the list by the given field
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Case-insensitive text comparison
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Missing dates sort after real dates in ascending order. `sort_list`
/// reverses the whole comparison, so a descending sort puts them first.
pub fn cmp_date(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Missing amounts count as 0
pub fn cmp_amount(a: Option<f64>, b: Option<f64>) -> Ordering {
    a.unwrap_or(0.0).total_cmp(&b.unwrap_or(0.0))
}

/// Enum values sort in declaration order; missing and unknown values last
pub fn cmp_category<E: Categorical>(a: Option<E>, b: Option<E>) -> Ordering {
    let rank = |v: Option<E>| {
        v.and_then(|v| E::all().iter().position(|x| *x == v))
            .unwrap_or(usize::MAX)
    };
    rank(a).cmp(&rank(b))
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class of the sort indicator; the active column is highlighted
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Text the box must switch to when the applied filter moved away from
/// what it shows, e.g. after "Clear filters" elsewhere on the page
fn resync_text(shown: &str, applied: &str) -> Option<String> {
    (shown != applied).then(|| applied.to_string())
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value (for highlighting the box)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new value once typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    // every keystroke bumps the counter, only the last pending timer fires
    let keystrokes = RwSignal::new(0u64);

    // external resets win over a pending debounce
    Effect::new(move |_| {
        let applied = value.get();
        if let Some(text) = resync_text(&input_value.get_untracked(), &applied) {
            keystrokes.update(|k| *k += 1);
            set_input_value.set(text);
        }
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        keystrokes.update(|k| *k += 1);
        let mine = keystrokes.get_untracked();
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if keystrokes.try_get_untracked() == Some(mine) {
                on_change.run(new_value);
            }
        });
    };

    let is_filter_active = move || !value.get().is_empty();

    let clear_filter = move |_| {
        keystrokes.update(|k| *k += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {icon("x")}
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmp_date_puts_missing_last() {
        let d = NaiveDate::from_ymd_opt(2026, 1, 1);
        assert_eq!(cmp_date(d, None), Ordering::Less);
        assert_eq!(cmp_date(None, d), Ordering::Greater);
    }

    struct Dated(&'static str, Option<NaiveDate>);

    impl Sortable for Dated {
        fn compare_by_field(&self, other: &Self, _field: &str) -> Ordering {
            cmp_date(self.1, other.1)
        }
    }

    #[test]
    fn test_sort_by_date_descending_puts_missing_first() {
        let mut rows = vec![
            Dated("a", NaiveDate::from_ymd_opt(2026, 1, 1)),
            Dated("b", None),
            Dated("c", NaiveDate::from_ymd_opt(2026, 3, 1)),
        ];
        sort_list(&mut rows, "due", true);
        assert_eq!(rows.iter().map(|r| r.0).collect::<Vec<_>>(), ["a", "c", "b"]);
        sort_list(&mut rows, "due", false);
        assert_eq!(rows.iter().map(|r| r.0).collect::<Vec<_>>(), ["b", "c", "a"]);
    }

    #[test]
    fn test_resync_text_after_external_clear() {
        assert_eq!(resync_text("acme", "").as_deref(), Some(""));
        assert_eq!(resync_text("acme", "acme"), None);
        assert_eq!(resync_text("", "brook").as_deref(), Some("brook"));
    }

    #[test]
    fn test_cmp_amount_treats_missing_as_zero() {
        assert_eq!(cmp_amount(None, Some(0.0)), Ordering::Equal);
        assert_eq!(cmp_amount(Some(-1.0), None), Ordering::Less);
    }

    #[test]
    fn test_cmp_category_uses_declaration_order() {
        use contracts::enums::Priority;
        assert_eq!(
            cmp_category(Some(Priority::Low), Some(Priority::Urgent)),
            Ordering::Less
        );
        assert_eq!(
            cmp_category(Some(Priority::Unknown), Some(Priority::Low)),
            Ordering::Greater
        );
        assert_eq!(cmp_category::<Priority>(None, Some(Priority::Low)), Ordering::Greater);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("title", "title", true), " ▲");
        assert_eq!(get_sort_indicator("title", "title", false), " ▼");
        assert_eq!(get_sort_indicator("title", "fee", true), " ⇅");
    }
}
