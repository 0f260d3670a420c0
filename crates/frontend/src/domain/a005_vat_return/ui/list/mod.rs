use chrono::NaiveDate;
use contracts::domain::a005_vat_return::{VatReturn, VatReturnStatus, VatScheme};
use contracts::shared::categorical::Categorical;
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::aggregate::{count, expiring_soon_opt, is_past, sum, today};
use crate::shared::config::EXPIRY_HORIZON_DAYS;
use crate::shared::date_utils::format_date_opt;
use crate::shared::list_utils::{cmp_amount, cmp_category, cmp_date, cmp_text, Sortable};
use crate::shared::list_view::{cell, CategoryField, Column, Kpi, ListViewController, RecordListPage};

impl Sortable for VatReturn {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "client_name" => cmp_text(&self.client_name, &other.client_name),
            "period_end" => cmp_date(self.period_end, other.period_end),
            "due_date" => cmp_date(self.due_date, other.due_date),
            "scheme" => cmp_category(self.scheme, other.scheme),
            "status" => cmp_category(self.status, other.status),
            "net_vat" => cmp_amount(self.net_vat, other.net_vat),
            _ => Ordering::Equal,
        }
    }
}

/// Not yet with HMRC
fn is_unsubmitted(r: &VatReturn) -> bool {
    !matches!(
        r.status,
        Some(VatReturnStatus::Submitted | VatReturnStatus::Accepted)
    )
}

fn period(r: &VatReturn) -> String {
    match (r.period_start, r.period_end) {
        (None, None) => "-".to_string(),
        (start, end) => format!("{} – {}", format_date_opt(start), format_date_opt(end)),
    }
}

fn controller() -> ListViewController<VatReturn> {
    ListViewController::<VatReturn>::new()
        .search(|r: &VatReturn| Some(r.client_name.as_str()))
        .category(CategoryField::of::<VatReturnStatus>(
            "status",
            "Status",
            |r: &VatReturn| r.status.map(|s| s.code()),
        ))
        .category(CategoryField::of::<VatScheme>("scheme", "Scheme", |r: &VatReturn| {
            r.scheme.map(|s| s.code())
        }))
}

fn columns() -> Vec<Column<VatReturn>> {
    vec![
        Column::new("Client", |r: &VatReturn| cell::text(&r.client_name)).sortable("client_name"),
        Column::new("Period", |r: &VatReturn| cell::text(&period(r))).sortable("period_end"),
        Column::new("Scheme", |r: &VatReturn| cell::badge(r.scheme)).sortable("scheme"),
        Column::new("Status", |r: &VatReturn| cell::badge(r.status)).sortable("status"),
        Column::new("Due", |r: &VatReturn| cell::due_date(r.due_date, today(), is_unsubmitted(r)))
            .sortable("due_date"),
        Column::new("VAT due", |r: &VatReturn| cell::money(r.vat_due)).right(),
        Column::new("Reclaimed", |r: &VatReturn| cell::money(r.vat_reclaimed)).right(),
        Column::new("Net VAT", |r: &VatReturn| cell::signed_money(r.net_vat))
            .sortable("net_vat")
            .right(),
    ]
}

fn vat_kpis(items: &[VatReturn], today: NaiveDate) -> Vec<Kpi> {
    let due_soon = count(items, |r| {
        is_unsubmitted(r) && expiring_soon_opt(r.due_date, today, EXPIRY_HORIZON_DAYS)
    });
    let late = count(items, |r| is_unsubmitted(r) && is_past(r.due_date, today));
    let for_review = count(items, |r| r.status == Some(VatReturnStatus::ReadyForReview));
    let rejected = count(items, |r| r.status == Some(VatReturnStatus::Rejected));
    let payable = sum(items, |r| if is_unsubmitted(r) { r.net_vat } else { None });

    vec![
        Kpi::count("Due soon", "calendar", due_soon)
            .warn_if_positive()
            .subtitle(format!("next {} days", EXPIRY_HORIZON_DAYS)),
        Kpi::count("Late", "alert-triangle", late).alert_if_positive(),
        Kpi::count("Ready for review", "eye", for_review),
        Kpi::count("Rejected", "x", rejected).alert_if_positive(),
        Kpi::money("Net VAT to file", "pound", payable),
    ]
}

#[component]
pub fn VatReturnList() -> impl IntoView {
    view! {
        <RecordListPage
            controller=controller()
            columns=columns()
            default_sort="due_date"
            kpis=vat_kpis
            search_placeholder="Search client..."
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vat(id: &str, status: VatReturnStatus, due: Option<NaiveDate>, net: f64) -> VatReturn {
        VatReturn {
            id: id.into(),
            client_name: "Acme Ltd".into(),
            period_start: NaiveDate::from_ymd_opt(2026, 7, 1),
            period_end: NaiveDate::from_ymd_opt(2026, 9, 30),
            due_date: due,
            scheme: Some(VatScheme::Standard),
            status: Some(status),
            vat_due: None,
            vat_reclaimed: None,
            net_vat: Some(net),
        }
    }

    #[test]
    fn test_kpis() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 10).unwrap();
        let day = |d: i64| Some(today + chrono::Duration::days(d));
        let items = vec![
            vat("1", VatReturnStatus::Draft, day(20), 1500.0),
            vat("2", VatReturnStatus::ReadyForReview, day(-1), -200.0),
            vat("3", VatReturnStatus::Submitted, day(-5), 900.0),
            vat("4", VatReturnStatus::Rejected, day(45), 100.0),
        ];
        let kpis = vat_kpis(&items, today);
        assert_eq!(kpis[0].value, 1.0);
        assert_eq!(kpis[1].value, 1.0);
        assert_eq!(kpis[2].value, 1.0);
        assert_eq!(kpis[3].value, 1.0);
        assert_eq!(kpis[4].value, 1400.0);
    }

    #[test]
    fn test_period_label() {
        let r = vat("1", VatReturnStatus::Draft, None, 0.0);
        assert_eq!(period(&r), "01/07/2026 – 30/09/2026");
    }
}
