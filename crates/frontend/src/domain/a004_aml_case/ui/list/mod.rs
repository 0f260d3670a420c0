use chrono::NaiveDate;
use contracts::domain::a004_aml_case::{AmlCase, AmlCaseStatus, RiskLevel};
use contracts::shared::categorical::Categorical;
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::aggregate::{count, expiring_soon_opt, is_past, percentage, today};
use crate::shared::config::EXPIRY_HORIZON_DAYS;
use crate::shared::list_utils::{cmp_category, cmp_date, cmp_text, Sortable};
use crate::shared::list_view::{cell, CategoryField, Column, Kpi, ListViewController, RecordListPage};

impl Sortable for AmlCase {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "client_name" => cmp_text(&self.client_name, &other.client_name),
            "risk_level" => cmp_category(self.risk_level, other.risk_level),
            "status" => cmp_category(self.status, other.status),
            "assigned_to" => cmp_text(
                self.assigned_to.as_deref().unwrap_or(""),
                other.assigned_to.as_deref().unwrap_or(""),
            ),
            "id_document_expiry" => cmp_date(self.id_document_expiry, other.id_document_expiry),
            "next_review_date" => cmp_date(self.next_review_date, other.next_review_date),
            _ => Ordering::Equal,
        }
    }
}

fn is_awaiting_review(c: &AmlCase) -> bool {
    matches!(
        c.status,
        Some(AmlCaseStatus::PendingReview | AmlCaseStatus::InformationRequested)
    )
}

fn controller() -> ListViewController<AmlCase> {
    ListViewController::<AmlCase>::new()
        .search(|c: &AmlCase| Some(c.client_name.as_str()))
        .search(|c: &AmlCase| c.assigned_to.as_deref())
        .category(CategoryField::of::<AmlCaseStatus>("status", "Status", |c: &AmlCase| {
            c.status.map(|s| s.code())
        }))
        .category(CategoryField::of::<RiskLevel>("risk_level", "Risk", |c: &AmlCase| {
            c.risk_level.map(|r| r.code())
        }))
}

fn columns() -> Vec<Column<AmlCase>> {
    vec![
        Column::new("Client", |c: &AmlCase| cell::text(&c.client_name)).sortable("client_name"),
        Column::new("Risk", |c: &AmlCase| cell::badge(c.risk_level)).sortable("risk_level"),
        Column::new("Status", |c: &AmlCase| cell::badge(c.status)).sortable("status"),
        Column::new("Assigned to", |c: &AmlCase| cell::opt_text(c.assigned_to.as_deref()))
            .sortable("assigned_to"),
        Column::new("ID expiry", |c: &AmlCase| cell::due_date(c.id_document_expiry, today(), true))
            .sortable("id_document_expiry"),
        Column::new("Next review", |c: &AmlCase| cell::date(c.next_review_date))
            .sortable("next_review_date"),
    ]
}

fn aml_kpis(items: &[AmlCase], today: NaiveDate) -> Vec<Kpi> {
    let high_risk = count(items, |c| c.risk_level == Some(RiskLevel::High));
    let awaiting = count(items, is_awaiting_review);
    let ids_expiring = count(items, |c| {
        expiring_soon_opt(c.id_document_expiry, today, EXPIRY_HORIZON_DAYS)
    });
    let ids_expired = count(items, |c| is_past(c.id_document_expiry, today));
    let reviews_due = count(items, |c| {
        c.next_review_date.map(|d| d <= today).unwrap_or(false)
    });
    let approved = percentage(items, |c| c.status == Some(AmlCaseStatus::Approved));

    vec![
        Kpi::count("High risk", "shield-alert", high_risk).alert_if_positive(),
        Kpi::count("Awaiting review", "clock", awaiting).warn_if_positive(),
        Kpi::count("IDs expiring", "calendar", ids_expiring)
            .warn_if_positive()
            .subtitle(format!("next {} days", EXPIRY_HORIZON_DAYS)),
        Kpi::count("IDs expired", "alert-triangle", ids_expired).alert_if_positive(),
        Kpi::count("Reviews due", "eye", reviews_due).warn_if_positive(),
        Kpi::percent("Approved", "check", approved),
    ]
}

#[component]
pub fn AmlCaseList() -> impl IntoView {
    view! {
        <RecordListPage
            controller=controller()
            columns=columns()
            default_sort="next_review_date"
            kpis=aml_kpis
            search_placeholder="Search client or assignee..."
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(
        id: &str,
        risk: Option<RiskLevel>,
        status: Option<AmlCaseStatus>,
        id_expiry: Option<NaiveDate>,
    ) -> AmlCase {
        AmlCase {
            id: id.into(),
            client_name: format!("Client {}", id),
            risk_level: risk,
            status,
            assigned_to: None,
            id_document_expiry: id_expiry,
            next_review_date: None,
        }
    }

    #[test]
    fn test_id_expiry_kpis() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        let day = |d: i64| Some(today + chrono::Duration::days(d));
        let items = vec![
            case("1", Some(RiskLevel::High), Some(AmlCaseStatus::Approved), day(15)),
            case("2", Some(RiskLevel::Low), Some(AmlCaseStatus::PendingReview), day(31)),
            case("3", None, Some(AmlCaseStatus::Expired), day(-1)),
            case("4", Some(RiskLevel::Unknown), None, day(0)),
        ];
        let kpis = aml_kpis(&items, today);
        assert_eq!(kpis[0].value, 1.0);
        assert_eq!(kpis[1].value, 1.0);
        // 15 days out counts, 31 days out and today do not
        assert_eq!(kpis[2].value, 1.0);
        assert_eq!(kpis[3].value, 1.0);
        assert_eq!(kpis[5].value, 25.0);
    }

    #[test]
    fn test_filter_by_risk() {
        let items = vec![
            case("1", Some(RiskLevel::High), None, None),
            case("2", Some(RiskLevel::Low), None, None),
            case("3", None, None, None),
        ];
        let mut state = crate::shared::list_view::ListState::new("client_name", 50);
        state.set_category(
            "risk_level",
            crate::shared::list_view::CategoryFilter::Only("high".into()),
        );
        let page = controller().apply(&items, &state);
        assert_eq!(page.total_count, 1);
        assert_eq!(page.rows[0].id, "1");
    }
}
