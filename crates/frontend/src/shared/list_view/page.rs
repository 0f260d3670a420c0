use chrono::NaiveDate;
use contracts::domain::common::AggregateRoot;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use thaw::*;

use super::{CategoryFilter, ListPage, ListState, ListViewController, ALL_CODE};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::aggregate::today;
use crate::shared::api::ApiClient;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::config::DEFAULT_PAGE_SIZE;
use crate::shared::data_fetcher::{use_fetch, LoadState};
use crate::shared::icons::icon;
use crate::shared::list_utils::{SearchInput, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use crate::system::auth::context::use_access_token;

/// One table column of a record list
pub struct Column<T> {
    pub title: &'static str,
    /// Field name passed to `Sortable`; `None` for a plain header
    pub sort_field: Option<&'static str>,
    pub align_right: bool,
    pub render: fn(&T) -> AnyView,
}

impl<T> Column<T> {
    pub fn new(title: &'static str, render: fn(&T) -> AnyView) -> Self {
        Self {
            title,
            sort_field: None,
            align_right: false,
            render,
        }
    }

    pub fn sortable(mut self, field: &'static str) -> Self {
        self.sort_field = Some(field);
        self
    }

    pub fn right(mut self) -> Self {
        self.align_right = true;
        self
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

/// One KPI card above the table
#[derive(Debug, Clone, PartialEq)]
pub struct Kpi {
    pub label: &'static str,
    pub icon: &'static str,
    pub value: f64,
    pub format: ValueFormat,
    pub status: IndicatorStatus,
    pub subtitle: Option<String>,
    /// Change in percent against the previous period
    pub change_percent: Option<f64>,
}

impl Kpi {
    pub fn new(label: &'static str, icon: &'static str, value: f64, format: ValueFormat) -> Self {
        Self {
            label,
            icon,
            value,
            format,
            status: IndicatorStatus::Neutral,
            subtitle: None,
            change_percent: None,
        }
    }

    pub fn count(label: &'static str, icon: &'static str, value: usize) -> Self {
        Self::new(label, icon, value as f64, ValueFormat::Integer)
    }

    pub fn money(label: &'static str, icon: &'static str, value: f64) -> Self {
        Self::new(label, icon, value, ValueFormat::gbp())
    }

    pub fn percent(label: &'static str, icon: &'static str, value: f64) -> Self {
        Self::new(label, icon, value, ValueFormat::Percent { decimals: 1 })
    }

    pub fn status(mut self, status: IndicatorStatus) -> Self {
        self.status = status;
        self
    }

    /// Warning colour when `value > 0`
    pub fn warn_if_positive(self) -> Self {
        if self.value > 0.0 {
            self.status(IndicatorStatus::Warning)
        } else {
            self
        }
    }

    /// Error colour when `value > 0`
    pub fn alert_if_positive(self) -> Self {
        if self.value > 0.0 {
            self.status(IndicatorStatus::Bad)
        } else {
            self
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn change(mut self, percent: Option<f64>) -> Self {
        self.change_percent = percent;
        self
    }
}

/// KPI builder, computed over the full (unfiltered) collection
pub type KpiFn<T> = fn(&[T], NaiveDate) -> Vec<Kpi>;

/// Complete list page of one aggregate: KPI cards, filters, sortable table
/// and pagination over the collection fetched from `R::endpoint()`.
///
/// The collection is fetched once per mount and again whenever
/// `AppGlobalContext::data_version` is bumped or the session changes.
#[component]
pub fn RecordListPage<T>(
    controller: ListViewController<T>,
    columns: Vec<Column<T>>,
    /// Initial sort column
    default_sort: &'static str,
    #[prop(optional)] sort_descending: bool,
    #[prop(optional)] kpis: Option<KpiFn<T>>,
    /// Shows the "New ..." button
    #[prop(optional)]
    on_create: Option<Callback<()>>,
    #[prop(optional, into)] search_placeholder: String,
) -> impl IntoView
where
    T: AggregateRoot + DeserializeOwned + Clone + PartialEq + Sortable + Send + Sync + 'static,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let access_token = use_access_token();

    let fetch = use_fetch(move || {
        ctx.data_version.track();
        let client = ApiClient::with_token(access_token.get());
        async move { client.list::<T>().await }
    });

    let list_state = RwSignal::new({
        let mut s = ListState::new(default_sort, DEFAULT_PAGE_SIZE);
        s.sort_ascending = !sort_descending;
        s
    });
    let filters_open = RwSignal::new(false);
    let controller = StoredValue::new(controller);
    let columns = StoredValue::new(columns);

    let page = Memo::new(move |_| {
        fetch.state.with(|state| {
            state.data().map(|items| {
                controller.with_value(|c| list_state.with(|s| c.apply(items, s)))
            })
        })
    });

    let kpi_cards = Memo::new(move |_| {
        let builder = kpis?;
        fetch
            .state
            .with(|state| state.data().map(|items| builder(items, today())))
    });

    let total_count = Signal::derive(move || page.with(|p| p.as_ref().map(|p| p.total_count)));
    let active_filters_count = Signal::derive(move || {
        controller.with_value(|c| list_state.with(|s| c.active_filters_count(&s.filter)))
    });

    let search_term = Signal::derive(move || list_state.with(|s| s.filter.search_term.clone()));
    let on_search = Callback::new(move |term: String| list_state.update(|s| s.set_search(term)));

    let category_selects = move || {
        controller.with_value(|c| {
            c.categories()
                .iter()
                .map(|cat| {
                    let key = cat.key;
                    let options = cat.options.clone();
                    let selected = move || {
                        list_state.with(|s| s.filter.category(key).select_value().to_string())
                    };
                    view! {
                        <div class="form__group">
                            <label class="form__label">{cat.label}</label>
                            <select
                                class="form__select"
                                prop:value=selected
                                on:change=move |ev| {
                                    let filter = CategoryFilter::from_select(&event_target_value(&ev));
                                    list_state.update(|s| s.set_category(key, filter));
                                }
                            >
                                <option value=ALL_CODE>"All"</option>
                                {options
                                    .into_iter()
                                    .map(|(code, label)| view! { <option value=code>{label}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    let filter_tags = move || {
        let search = list_state.with(|s| s.filter.normalized_search().map(|_| s.filter.search_term.clone()));
        let search_tag = search.map(|term| {
            view! {
                <FilterTag
                    label=format!("Search: {}", term)
                    on_remove=Callback::new(move |_| list_state.update(|s| s.set_search(String::new())))
                />
            }
        });
        let category_tags = controller.with_value(|c| {
            c.categories()
                .iter()
                .filter_map(|cat| {
                    let code = list_state.with(|s| match s.filter.category(cat.key) {
                        CategoryFilter::Only(code) => Some(code.clone()),
                        CategoryFilter::All => None,
                    })?;
                    let shown = cat
                        .options
                        .iter()
                        .find(|(c, _)| *c == code)
                        .map(|(_, label)| label.to_string())
                        .unwrap_or(code);
                    let key = cat.key;
                    Some(view! {
                        <FilterTag
                            label=format!("{}: {}", cat.label, shown)
                            on_remove=Callback::new(move |_| {
                                list_state.update(|s| s.set_category(key, CategoryFilter::All))
                            })
                        />
                    })
                })
                .collect_view()
        });
        view! {
            {search_tag}
            {category_tags}
        }
    };

    let header_cells = move || {
        columns.with_value(|cols| {
            cols.iter()
                .map(|col| {
                    let col = *col;
                    let align = if col.align_right { "right" } else { "left" };
                    match col.sort_field {
                        Some(field) => view! {
                            <SortableHeaderCell
                                label=col.title
                                sort_field=field
                                current_sort_field=Signal::derive(move || list_state.with(|s| s.sort_field.clone()))
                                sort_ascending=Signal::derive(move || list_state.with(|s| s.sort_ascending))
                                on_sort=Callback::new(move |f: String| list_state.update(|s| s.toggle_sort(&f)))
                                align=align
                            />
                        }
                        .into_any(),
                        None => view! { <TableHeaderCell>{col.title}</TableHeaderCell> }.into_any(),
                    }
                })
                .collect_view()
        })
    };

    let render_row = move |row: T| {
        let cells = columns.with_value(|cols| {
            cols.iter()
                .map(|col| {
                    let col = *col;
                    let class = if col.align_right { "text-right" } else { "" };
                    let cell = (col.render)(&row);
                    view! {
                        <TableCell class=class>
                            <TableCellLayout truncate=true>{cell}</TableCellLayout>
                        </TableCell>
                    }
                })
                .collect_view()
        });
        view! { <TableRow>{cells}</TableRow> }
    };

    let rows = move || page.with(|p| p.as_ref().map(|p| p.rows.clone()).unwrap_or_default());

    let body = move || match fetch.state.with(|s| s.error().cloned()) {
        Some(err) => view! {
            <div class="alert alert--error">
                <div class="alert__title">{icon("alert-triangle")} {err.kind.title()}</div>
                <div class="alert__message">{err.message.clone()}</div>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| fetch.reload()>
                    "Retry"
                </Button>
            </div>
        }
        .into_any(),
        None if fetch.state.with(LoadState::is_loading) => view! {
            <div class="page__loading">
                <Spinner label="Loading..." />
            </div>
        }
        .into_any(),
        None => view! {
            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>{header_cells()}</TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=rows
                            key=|row: &T| row.id().to_string()
                            children=render_row
                        />
                    </TableBody>
                </Table>
                <Show when=move || total_count.get() == Some(0)>
                    <div class="table__empty">
                        {move || {
                            if active_filters_count.get() > 0 {
                                "No records match the filters"
                            } else {
                                "No records yet"
                            }
                        }}
                    </div>
                </Show>
            </div>
        }
        .into_any(),
    };

    let current = move |f: fn(&ListPage<T>) -> usize, fallback: usize| {
        Signal::derive(move || page.with(|p| p.as_ref().map(f).unwrap_or(fallback)))
    };

    view! {
        <PageFrame page_id=page_id(&T::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <PageHeader title=T::list_name() count=total_count>
                {on_create.map(|cb| view! {
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| cb.run(())>
                        {icon("plus")}
                        {format!(" New {}", T::element_name())}
                    </Button>
                })}
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| fetch.reload()
                    disabled=Signal::derive(move || fetch.state.with(LoadState::is_loading))
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || kpi_cards.get().map(|cards| view! {
                    <div class="stat-cards">
                        {cards
                            .into_iter()
                            .map(|k| view! {
                                <StatCard
                                    label=k.label
                                    icon_name=k.icon
                                    value=Some(k.value)
                                    format=k.format
                                    status=k.status
                                    subtitle=k.subtitle
                                    change_percent=k.change_percent
                                />
                            })
                            .collect_view()}
                    </div>
                })}

                <FilterPanel
                    is_expanded=filters_open
                    active_filters_count=active_filters_count
                    pagination_controls=move || view! {
                        <PaginationControls
                            current_page=current(|p| p.page, 0)
                            total_pages=current(|p| p.total_pages, 1)
                            total_count=current(|p| p.total_count, 0)
                            page_size=Signal::derive(move || list_state.with(|s| s.page_size))
                            on_page_change=Callback::new(move |p: usize| list_state.update(|s| s.page = p))
                            on_page_size_change=Callback::new(move |size: usize| list_state.update(|s| s.set_page_size(size)))
                        />
                    }
                    filter_content=move || {
                        let placeholder = search_placeholder.clone();
                        view! {
                            <Flex gap=FlexGap::Small align=FlexAlign::End>
                                <div style="flex: 1; max-width: 360px;">
                                    <SearchInput
                                        value=search_term
                                        on_change=on_search
                                        placeholder=placeholder
                                    />
                                </div>
                                {category_selects()}
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| list_state.update(|s| s.clear_filters())
                                    disabled=Signal::derive(move || active_filters_count.get() == 0)
                                >
                                    "Clear filters"
                                </Button>
                            </Flex>
                        }
                    }
                    filter_tags=filter_tags
                />

                {body}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kpi_status_helpers() {
        let k = Kpi::count("Overdue", "alert-triangle", 3).alert_if_positive();
        assert_eq!(k.status, IndicatorStatus::Bad);
        assert_eq!(k.format, ValueFormat::Integer);

        let k = Kpi::count("Expiring", "clock", 0).warn_if_positive();
        assert_eq!(k.status, IndicatorStatus::Neutral);

        let k = Kpi::money("Outstanding", "pound", 120.5).subtitle("3 invoices");
        assert_eq!(k.subtitle.as_deref(), Some("3 invoices"));
        assert_eq!(k.format, ValueFormat::gbp());
    }
}
