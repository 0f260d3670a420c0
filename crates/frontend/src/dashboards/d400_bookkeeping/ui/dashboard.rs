use contracts::dashboards::d400_bookkeeping::BookkeepingDashboardStats;
use contracts::shared::indicators::IndicatorStatus;
use leptos::prelude::*;
use thaw::*;

use crate::dashboards::d400_bookkeeping::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api::ApiClient;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::data_fetcher::{use_fetch, LoadState};
use crate::shared::icons::icon;
use crate::shared::list_view::Kpi;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DASHBOARD};
use crate::system::auth::context::use_access_token;

fn balance_status(value: f64) -> IndicatorStatus {
    if value < 0.0 {
        IndicatorStatus::Bad
    } else {
        IndicatorStatus::Good
    }
}

/// Cards of the dashboard, in display order
pub fn stats_kpis(stats: &BookkeepingDashboardStats) -> Vec<Kpi> {
    let bank = stats.bank_balance.unwrap_or(0.0);
    let revenue = stats.revenue_this_month.unwrap_or(0.0);
    let expenses = stats.expenses_this_month.unwrap_or(0.0);
    let net = revenue - expenses;

    vec![
        Kpi::money("Bank balance", "database", bank).status(balance_status(bank)),
        Kpi::money(
            "Receivables",
            "trending-up",
            stats.outstanding_receivables.unwrap_or(0.0),
        ),
        Kpi::money("Overdue receivables", "alert-triangle", stats.overdue_receivables.unwrap_or(0.0))
            .alert_if_positive(),
        Kpi::money(
            "Payables",
            "trending-down",
            stats.outstanding_payables.unwrap_or(0.0),
        ),
        Kpi::count(
            "Unreconciled transactions",
            "refresh",
            stats.unreconciled_transactions as usize,
        )
        .warn_if_positive()
        .subtitle(format!("{:.0}% reconciled", stats.reconciled_percent())),
        Kpi::money("Revenue this month", "pound", revenue).change(stats.revenue_change_percent()),
        Kpi::money("Expenses this month", "bar-chart", expenses),
        Kpi::money("Net this month", "briefcase", net).status(balance_status(net)),
    ]
}

#[component]
pub fn BookkeepingDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let access_token = use_access_token();

    let fetch = use_fetch(move || {
        ctx.data_version.track();
        let client = ApiClient::with_token(access_token.get());
        async move { api::get_stats(&client).await }
    });

    let content = move || match fetch.state.get() {
        LoadState::Loading => view! {
            <div class="page__loading">
                <Spinner label="Loading..." />
            </div>
        }
        .into_any(),
        LoadState::Failed(err) => view! {
            <div class="alert alert--error">
                <div class="alert__title">{icon("alert-triangle")} {err.kind.title()}</div>
                <div class="alert__message">{err.message}</div>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| fetch.reload()>
                    "Retry"
                </Button>
            </div>
        }
        .into_any(),
        LoadState::Loaded(stats) => view! {
            <div class="stat-cards">
                {stats_kpis(&stats)
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
        }
        .into_any(),
    };

    view! {
        <PageFrame page_id=page_id("d400_bookkeeping", PAGE_CAT_DASHBOARD) category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Bookkeeping">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| fetch.reload()
                    disabled=Signal::derive(move || fetch.state.with(LoadState::is_loading))
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>
            <div class="page__content">{content}</div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> BookkeepingDashboardStats {
        BookkeepingDashboardStats {
            bank_balance: Some(-250.0),
            outstanding_receivables: Some(4_000.0),
            outstanding_payables: Some(1_500.0),
            overdue_receivables: Some(900.0),
            unreconciled_transactions: 5,
            reconciled_transactions: 15,
            revenue_this_month: Some(12_000.0),
            revenue_last_month: Some(10_000.0),
            expenses_this_month: Some(13_000.0),
        }
    }

    fn card<'a>(kpis: &'a [Kpi], label: &str) -> &'a Kpi {
        kpis.iter().find(|k| k.label == label).unwrap()
    }

    #[test]
    fn test_stats_kpis() {
        let kpis = stats_kpis(&stats());
        assert_eq!(kpis.len(), 8);
        assert_eq!(card(&kpis, "Bank balance").status, IndicatorStatus::Bad);
        assert_eq!(card(&kpis, "Overdue receivables").status, IndicatorStatus::Bad);

        let unreconciled = card(&kpis, "Unreconciled transactions");
        assert_eq!(unreconciled.value, 5.0);
        assert_eq!(unreconciled.status, IndicatorStatus::Warning);
        assert_eq!(unreconciled.subtitle.as_deref(), Some("75% reconciled"));

        let revenue = card(&kpis, "Revenue this month");
        assert!((revenue.change_percent.unwrap() - 20.0).abs() < 1e-9);

        let net = card(&kpis, "Net this month");
        assert_eq!(net.value, -1_000.0);
        assert_eq!(net.status, IndicatorStatus::Bad);
    }

    #[test]
    fn test_missing_figures_count_as_zero() {
        let kpis = stats_kpis(&BookkeepingDashboardStats::default());
        assert!(kpis.iter().all(|k| k.value == 0.0));
        assert_eq!(card(&kpis, "Bank balance").status, IndicatorStatus::Good);
        assert_eq!(card(&kpis, "Revenue this month").change_percent, None);
        assert_eq!(
            card(&kpis, "Unreconciled transactions").subtitle.as_deref(),
            Some("0% reconciled")
        );
    }
}
