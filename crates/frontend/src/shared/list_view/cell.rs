//! Renderers for table cells, shared by the column definitions of every list.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::shared::components::table::TableCellMoney;
use crate::shared::components::ui::badge::StatusBadge;
use crate::shared::date_utils::format_date_opt;
use crate::shared::status_presentation::{present, Presentable};

pub fn text(value: &str) -> AnyView {
    value.to_string().into_any()
}

/// Missing or blank text renders as a dash
pub fn opt_text(value: Option<&str>) -> AnyView {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("-")
        .to_string()
        .into_any()
}

pub fn date(value: Option<NaiveDate>) -> AnyView {
    format_date_opt(value).into_any()
}

pub fn money(value: Option<f64>) -> AnyView {
    view! { <TableCellMoney value=value /> }.into_any()
}

/// Bold money, for totals
pub fn total_money(value: Option<f64>) -> AnyView {
    view! { <TableCellMoney value=value bold=true /> }.into_any()
}

/// Money coloured green/red by sign
pub fn signed_money(value: Option<f64>) -> AnyView {
    view! { <TableCellMoney value=value color_by_sign=true /> }.into_any()
}

pub fn badge<E: Presentable>(value: Option<E>) -> AnyView {
    view! { <StatusBadge presentation=present(value) /> }.into_any()
}

/// Date with a hint of how far it is from today
pub fn due_date(value: Option<NaiveDate>, today: NaiveDate, open: bool) -> AnyView {
    use crate::shared::aggregate::days_until;
    use crate::shared::date_utils::describe_days;

    match value {
        Some(d) if open => {
            let days = days_until(d, today);
            let class = if days < 0 { "text-error" } else { "text-muted" };
            view! {
                <span>
                    {format_date_opt(Some(d))}
                    " "
                    <span class=class>{format!("({})", describe_days(days))}</span>
                </span>
            }
            .into_any()
        }
        other => date(other),
    }
}
