use chrono::NaiveDate;
use contracts::domain::a001_job::{Job, JobStatus, JobType};
use contracts::enums::Priority;
use contracts::shared::categorical::Categorical;
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_title;
use crate::shared::aggregate::{count, expiring_soon_opt, is_past, percentage, sum, today};
use crate::shared::config::EXPIRY_HORIZON_DAYS;
use crate::shared::list_utils::{cmp_amount, cmp_category, cmp_date, cmp_text, Sortable};
use crate::shared::list_view::{cell, CategoryField, Column, Kpi, ListViewController, RecordListPage};

impl Sortable for Job {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "title" => cmp_text(&self.title, &other.title),
            "client_name" => cmp_text(&self.client_name, &other.client_name),
            "job_type" => cmp_category(self.job_type, other.job_type),
            "status" => cmp_category(self.status, other.status),
            "priority" => cmp_category(self.priority, other.priority),
            "assignee" => cmp_text(
                self.assignee.as_deref().unwrap_or(""),
                other.assignee.as_deref().unwrap_or(""),
            ),
            "due_date" => cmp_date(self.due_date, other.due_date),
            "fee" => cmp_amount(self.fee, other.fee),
            _ => Ordering::Equal,
        }
    }
}

fn is_open(job: &Job) -> bool {
    job.status != Some(JobStatus::Completed)
}

fn controller() -> ListViewController<Job> {
    ListViewController::<Job>::new()
        .search(|j: &Job| Some(j.title.as_str()))
        .search(|j: &Job| Some(j.client_name.as_str()))
        .search(|j: &Job| j.assignee.as_deref())
        .category(CategoryField::of::<JobStatus>("status", "Status", |j: &Job| {
            j.status.map(|s| s.code())
        }))
        .category(CategoryField::of::<JobType>("job_type", "Type", |j: &Job| {
            j.job_type.map(|t| t.code())
        }))
        .category(CategoryField::of::<Priority>("priority", "Priority", |j: &Job| {
            j.priority.map(|p| p.code())
        }))
}

fn columns() -> Vec<Column<Job>> {
    vec![
        Column::new("Title", |j: &Job| cell::text(&j.title)).sortable("title"),
        Column::new("Client", |j: &Job| cell::text(&j.client_name)).sortable("client_name"),
        Column::new("Type", |j: &Job| cell::badge(j.job_type)).sortable("job_type"),
        Column::new("Status", |j: &Job| cell::badge(j.status)).sortable("status"),
        Column::new("Priority", |j: &Job| cell::badge(j.priority)).sortable("priority"),
        Column::new("Assignee", |j: &Job| cell::opt_text(j.assignee.as_deref())).sortable("assignee"),
        Column::new("Due", |j: &Job| cell::due_date(j.due_date, today(), is_open(j)))
            .sortable("due_date"),
        Column::new("Fee", |j: &Job| cell::money(j.fee)).sortable("fee").right(),
    ]
}

fn job_kpis(items: &[Job], today: NaiveDate) -> Vec<Kpi> {
    let open = count(items, is_open);
    let overdue = count(items, |j| is_open(j) && is_past(j.due_date, today));
    let due_soon = count(items, |j| {
        is_open(j) && expiring_soon_opt(j.due_date, today, EXPIRY_HORIZON_DAYS)
    });
    let wip_fees = sum(items, |j| if is_open(j) { j.fee } else { None });
    let completed = percentage(items, |j| j.status == Some(JobStatus::Completed));

    vec![
        Kpi::count("Open jobs", "briefcase", open).subtitle(format!("of {} total", items.len())),
        Kpi::count("Overdue", "alert-triangle", overdue).alert_if_positive(),
        Kpi::count("Due soon", "clock", due_soon)
            .warn_if_positive()
            .subtitle(format!("next {} days", EXPIRY_HORIZON_DAYS)),
        Kpi::money("Fees in progress", "pound", wip_fees),
        Kpi::percent("Completed", "check", completed),
    ]
}

#[component]
pub fn JobList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let on_create = Callback::new(move |_| ctx.open_tab("a001_job_new", &tab_title("a001_job_new")));

    view! {
        <RecordListPage
            controller=controller()
            columns=columns()
            default_sort="due_date"
            kpis=job_kpis
            on_create=on_create
            search_placeholder="Search title, client or assignee..."
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::ListState;

    fn job(id: &str, status: JobStatus, due: Option<NaiveDate>, fee: Option<f64>) -> Job {
        Job {
            id: id.into(),
            title: format!("Job {}", id),
            client_id: "c-1".into(),
            client_name: "Acme Ltd".into(),
            job_type: Some(JobType::Bookkeeping),
            status: Some(status),
            priority: Some(Priority::Medium),
            assignee: None,
            due_date: due,
            budget_hours: None,
            fee,
        }
    }

    fn date(d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2026, 10, d)
    }

    #[test]
    fn test_kpis() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 10).unwrap();
        let items = vec![
            job("1", JobStatus::InProgress, date(1), Some(500.0)),
            job("2", JobStatus::NotStarted, date(20), Some(250.0)),
            job("3", JobStatus::Completed, date(2), Some(1000.0)),
            job("4", JobStatus::OnHold, None, None),
        ];
        let kpis = job_kpis(&items, today);
        assert_eq!(kpis[0].value, 3.0);
        assert_eq!(kpis[1].value, 1.0);
        assert_eq!(kpis[2].value, 1.0);
        assert_eq!(kpis[3].value, 750.0);
        assert_eq!(kpis[4].value, 25.0);
    }

    #[test]
    fn test_kpis_on_empty_collection() {
        let kpis = job_kpis(&[], NaiveDate::from_ymd_opt(2026, 10, 10).unwrap());
        assert!(kpis.iter().all(|k| k.value == 0.0));
    }

    #[test]
    fn test_filter_by_status_and_sort_by_due_date() {
        let items = vec![
            job("1", JobStatus::InProgress, date(20), None),
            job("2", JobStatus::Completed, date(5), None),
            job("3", JobStatus::InProgress, None, None),
            job("4", JobStatus::InProgress, date(3), None),
        ];
        let mut state = ListState::new("due_date", 50);
        state.set_category(
            "status",
            crate::shared::list_view::CategoryFilter::Only("in_progress".into()),
        );
        let page = controller().apply(&items, &state);
        let ids: Vec<&str> = page.rows.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "1", "3"]);
    }
}
