use chrono::NaiveDate;
use contracts::domain::a002_invoice::{Invoice, InvoiceStatus};
use contracts::shared::categorical::Categorical;
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_title;
use crate::shared::aggregate::{count, is_past, percentage, sum, today};
use crate::shared::components::table::number_format::format_gbp;
use crate::shared::list_utils::{cmp_amount, cmp_category, cmp_date, cmp_text, Sortable};
use crate::shared::list_view::{cell, CategoryField, Column, Kpi, ListViewController, RecordListPage};

impl Sortable for Invoice {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "invoice_number" => cmp_text(&self.invoice_number, &other.invoice_number),
            "client_name" => cmp_text(&self.client_name, &other.client_name),
            "status" => cmp_category(self.status, other.status),
            "issue_date" => cmp_date(self.issue_date, other.issue_date),
            "due_date" => cmp_date(self.due_date, other.due_date),
            "net_amount" => cmp_amount(self.net_amount, other.net_amount),
            "total_amount" => cmp_amount(self.total_amount, other.total_amount),
            _ => Ordering::Equal,
        }
    }
}

/// Issued and not yet settled
fn is_outstanding(inv: &Invoice) -> bool {
    matches!(
        inv.status,
        Some(InvoiceStatus::Sent | InvoiceStatus::PartiallyPaid | InvoiceStatus::Overdue)
    )
}

fn is_overdue(inv: &Invoice, today: NaiveDate) -> bool {
    inv.status == Some(InvoiceStatus::Overdue) || (is_outstanding(inv) && is_past(inv.due_date, today))
}

fn controller() -> ListViewController<Invoice> {
    ListViewController::<Invoice>::new()
        .search(|i: &Invoice| Some(i.invoice_number.as_str()))
        .search(|i: &Invoice| Some(i.client_name.as_str()))
        .category(CategoryField::of::<InvoiceStatus>("status", "Status", |i: &Invoice| {
            i.status.map(|s| s.code())
        }))
}

fn columns() -> Vec<Column<Invoice>> {
    vec![
        Column::new("Number", |i: &Invoice| cell::text(&i.invoice_number)).sortable("invoice_number"),
        Column::new("Client", |i: &Invoice| cell::text(&i.client_name)).sortable("client_name"),
        Column::new("Status", |i: &Invoice| cell::badge(i.status)).sortable("status"),
        Column::new("Issued", |i: &Invoice| cell::date(i.issue_date)).sortable("issue_date"),
        Column::new("Due", |i: &Invoice| cell::due_date(i.due_date, today(), is_outstanding(i)))
            .sortable("due_date"),
        Column::new("Net", |i: &Invoice| cell::money(i.net_amount)).sortable("net_amount").right(),
        Column::new("VAT", |i: &Invoice| cell::money(i.vat_amount)).right(),
        Column::new("Total", |i: &Invoice| cell::total_money(i.total_amount))
            .sortable("total_amount")
            .right(),
    ]
}

fn invoice_kpis(items: &[Invoice], today: NaiveDate) -> Vec<Kpi> {
    let billed = |i: &Invoice| !matches!(i.status, Some(InvoiceStatus::Void | InvoiceStatus::Draft));
    let outstanding = sum(items, |i| if is_outstanding(i) { i.total_amount } else { None });
    let overdue = count(items, |i| is_overdue(i, today));
    let overdue_amount = sum(items, |i| if is_overdue(i, today) { i.total_amount } else { None });
    let invoiced = sum(items, |i| if billed(i) { i.total_amount } else { None });
    let drafts = count(items, |i| i.status == Some(InvoiceStatus::Draft));
    let paid = percentage(items, |i| i.status == Some(InvoiceStatus::Paid));

    vec![
        Kpi::money("Outstanding", "pound", outstanding),
        Kpi::count("Overdue", "alert-triangle", overdue)
            .alert_if_positive()
            .subtitle(format_gbp(overdue_amount)),
        Kpi::money("Invoiced", "file-text", invoiced),
        Kpi::count("Drafts", "edit", drafts),
        Kpi::percent("Paid", "check", paid),
    ]
}

#[component]
pub fn InvoiceList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let on_create =
        Callback::new(move |_| ctx.open_tab("a002_invoice_new", &tab_title("a002_invoice_new")));

    view! {
        <RecordListPage
            controller=controller()
            columns=columns()
            default_sort="issue_date"
            sort_descending=true
            kpis=invoice_kpis
            on_create=on_create
            search_placeholder="Search number or client..."
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(id: &str, status: Option<InvoiceStatus>, due_day: u32, total: f64) -> Invoice {
        Invoice {
            id: id.into(),
            invoice_number: format!("INV-{}", id),
            client_name: "Acme Ltd".into(),
            status,
            issue_date: NaiveDate::from_ymd_opt(2026, 9, 1),
            due_date: NaiveDate::from_ymd_opt(2026, 10, due_day),
            net_amount: Some(total / 1.2),
            vat_amount: None,
            total_amount: Some(total),
        }
    }

    #[test]
    fn test_kpis() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        let items = vec![
            invoice("1", Some(InvoiceStatus::Sent), 30, 1200.0),
            invoice("2", Some(InvoiceStatus::Sent), 1, 600.0),
            invoice("3", Some(InvoiceStatus::Paid), 1, 300.0),
            invoice("4", Some(InvoiceStatus::Void), 1, 999.0),
            invoice("5", Some(InvoiceStatus::Draft), 30, 50.0),
            invoice("6", None, 30, 10.0),
        ];
        let kpis = invoice_kpis(&items, today);
        assert_eq!(kpis[0].value, 1800.0);
        assert_eq!(kpis[1].value, 1.0);
        assert_eq!(kpis[1].subtitle.as_deref(), Some("£600.00"));
        assert_eq!(kpis[2].value, 2110.0);
        assert_eq!(kpis[3].value, 1.0);
    }

    #[test]
    fn test_unknown_status_is_not_outstanding() {
        let inv = invoice("1", Some(InvoiceStatus::Unknown), 1, 10.0);
        assert!(!is_outstanding(&inv));
        assert!(!is_overdue(&inv, NaiveDate::from_ymd_opt(2026, 12, 1).unwrap()));
    }
}
