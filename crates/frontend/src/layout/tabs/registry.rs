//! Tab content registry: maps `tab.key` to its view.
//!
//! Every tab key of the console is listed here.

use crate::dashboards::d400_bookkeeping::BookkeepingDashboard;
use crate::domain::a001_job::ui::create::JobCreateWizard;
use crate::domain::a001_job::ui::list::JobList;
use crate::domain::a002_invoice::ui::create::InvoiceCreateWizard;
use crate::domain::a002_invoice::ui::list::InvoiceList;
use crate::domain::a003_deadline::ui::list::DeadlineList;
use crate::domain::a004_aml_case::ui::list::AmlCaseList;
use crate::domain::a005_vat_return::ui::list::VatReturnList;
use crate::domain::a006_fixed_asset::ui::list::FixedAssetList;
use crate::domain::a007_charity_fund::ui::list::CharityFundList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_title;
use leptos::prelude::*;

/// Callbacks of a create wizard tab: cancel closes the tab, success closes
/// it and brings the list tab forward.
fn wizard_callbacks(
    wizard_key: &str,
    list_key: &'static str,
    tabs_store: AppGlobalContext,
) -> (Callback<()>, Callback<String>) {
    let key_for_cancel = wizard_key.to_string();
    let key_for_done = wizard_key.to_string();
    let on_cancel = Callback::new(move |_| tabs_store.close_tab(&key_for_cancel));
    let on_created = Callback::new(move |id: String| {
        log::debug!("{} created '{}'", list_key, id);
        tabs_store.close_tab(&key_for_done);
        tabs_store.open_tab(list_key, &tab_title(list_key));
    });
    (on_cancel, on_created)
}

/// Content of the tab with the given key, or a placeholder for unknown keys
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Domain Aggregates (a001-a007)
        // ═══════════════════════════════════════════════════════════════════
        "a001_job" => view! { <JobList /> }.into_any(),
        "a001_job_new" => {
            let (on_cancel, on_created) = wizard_callbacks(key, "a001_job", tabs_store);
            view! { <JobCreateWizard on_cancel=on_cancel on_created=on_created /> }.into_any()
        }
        "a002_invoice" => view! { <InvoiceList /> }.into_any(),
        "a002_invoice_new" => {
            let (on_cancel, on_created) = wizard_callbacks(key, "a002_invoice", tabs_store);
            view! { <InvoiceCreateWizard on_cancel=on_cancel on_created=on_created /> }
                .into_any()
        }
        "a003_deadline" => view! { <DeadlineList /> }.into_any(),
        "a004_aml_case" => view! { <AmlCaseList /> }.into_any(),
        "a005_vat_return" => view! { <VatReturnList /> }.into_any(),
        "a006_fixed_asset" => view! { <FixedAssetList /> }.into_any(),
        "a007_charity_fund" => view! { <CharityFundList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Dashboards (d4xx)
        // ═══════════════════════════════════════════════════════════════════
        "d400_bookkeeping" => view! { <BookkeepingDashboard /> }.into_any(),

        _ => {
            log::warn!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
