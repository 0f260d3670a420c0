use chrono::NaiveDate;
use contracts::domain::a003_deadline::{Deadline, DeadlineStatus, DeadlineType};
use contracts::shared::categorical::Categorical;
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::aggregate::{count, percentage, today, DueState};
use crate::shared::config::EXPIRY_HORIZON_DAYS;
use crate::shared::list_utils::{cmp_category, cmp_date, cmp_text, Sortable};
use crate::shared::list_view::{cell, CategoryField, Column, Kpi, ListViewController, RecordListPage};

impl Sortable for Deadline {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "title" => cmp_text(&self.title, &other.title),
            "client_name" => cmp_text(&self.client_name, &other.client_name),
            "deadline_type" => cmp_category(self.deadline_type, other.deadline_type),
            "status" => cmp_category(self.status, other.status),
            "due_date" => cmp_date(self.due_date, other.due_date),
            _ => Ordering::Equal,
        }
    }
}

fn is_open(d: &Deadline) -> bool {
    d.status != Some(DeadlineStatus::Filed)
}

/// Due state of an open deadline; filed or undated ones have none
fn due_state(d: &Deadline, today: NaiveDate) -> Option<DueState> {
    if !is_open(d) {
        return None;
    }
    d.due_date
        .map(|date| DueState::classify(date, today, EXPIRY_HORIZON_DAYS))
}

fn controller() -> ListViewController<Deadline> {
    ListViewController::<Deadline>::new()
        .search(|d: &Deadline| Some(d.title.as_str()))
        .search(|d: &Deadline| Some(d.client_name.as_str()))
        .category(CategoryField::of::<DeadlineStatus>("status", "Status", |d: &Deadline| {
            d.status.map(|s| s.code())
        }))
        .category(CategoryField::of::<DeadlineType>(
            "deadline_type",
            "Type",
            |d: &Deadline| d.deadline_type.map(|t| t.code()),
        ))
}

fn columns() -> Vec<Column<Deadline>> {
    vec![
        Column::new("Deadline", |d: &Deadline| cell::text(&d.title)).sortable("title"),
        Column::new("Client", |d: &Deadline| cell::text(&d.client_name)).sortable("client_name"),
        Column::new("Type", |d: &Deadline| cell::badge(d.deadline_type)).sortable("deadline_type"),
        Column::new("Status", |d: &Deadline| cell::badge(d.status)).sortable("status"),
        Column::new("Due", |d: &Deadline| cell::due_date(d.due_date, today(), is_open(d)))
            .sortable("due_date"),
    ]
}

fn deadline_kpis(items: &[Deadline], today: NaiveDate) -> Vec<Kpi> {
    let in_state = |state: DueState| count(items, |d| due_state(d, today) == Some(state));
    let overdue = count(items, |d| {
        d.status == Some(DeadlineStatus::Overdue) || due_state(d, today) == Some(DueState::Expired)
    });
    let filed = percentage(items, |d| d.status == Some(DeadlineStatus::Filed));

    vec![
        Kpi::count("Overdue", "alert-triangle", overdue).alert_if_positive(),
        Kpi::count("Due today", "clock", in_state(DueState::DueToday)).warn_if_positive(),
        Kpi::count("Due soon", "calendar", in_state(DueState::ExpiringSoon))
            .subtitle(format!("next {} days", EXPIRY_HORIZON_DAYS)),
        Kpi::percent("Filed", "check", filed),
    ]
}

#[component]
pub fn DeadlineList() -> impl IntoView {
    view! {
        <RecordListPage
            controller=controller()
            columns=columns()
            default_sort="due_date"
            kpis=deadline_kpis
            search_placeholder="Search deadline or client..."
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deadline(id: &str, status: DeadlineStatus, due: Option<NaiveDate>) -> Deadline {
        Deadline {
            id: id.into(),
            title: "VAT Q3".into(),
            client_name: "Acme Ltd".into(),
            deadline_type: Some(DeadlineType::VatReturn),
            status: Some(status),
            due_date: due,
        }
    }

    #[test]
    fn test_kpis() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 10).unwrap();
        let day = |d: i64| Some(today + chrono::Duration::days(d));
        let items = vec![
            deadline("1", DeadlineStatus::Upcoming, day(-2)),
            deadline("2", DeadlineStatus::Overdue, None),
            deadline("3", DeadlineStatus::InProgress, day(0)),
            deadline("4", DeadlineStatus::Upcoming, day(15)),
            deadline("5", DeadlineStatus::Upcoming, day(31)),
            deadline("6", DeadlineStatus::Filed, day(-40)),
        ];
        let kpis = deadline_kpis(&items, today);
        assert_eq!(kpis[0].value, 2.0);
        assert_eq!(kpis[1].value, 1.0);
        assert_eq!(kpis[2].value, 1.0);
        assert!((kpis[3].value - 100.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_filed_deadline_has_no_due_state() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 10).unwrap();
        let d = deadline("1", DeadlineStatus::Filed, Some(today));
        assert_eq!(due_state(&d, today), None);
    }
}
