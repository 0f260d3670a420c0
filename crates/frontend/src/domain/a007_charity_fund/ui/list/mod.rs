use chrono::NaiveDate;
use contracts::domain::a007_charity_fund::{CharityFund, FundStatus, FundType};
use contracts::shared::categorical::Categorical;
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::aggregate::{count, expiring_soon_opt, sum, today};
use crate::shared::config::EXPIRY_HORIZON_DAYS;
use crate::shared::list_utils::{cmp_amount, cmp_category, cmp_date, cmp_text, Sortable};
use crate::shared::list_view::{cell, CategoryField, Column, Kpi, ListViewController, RecordListPage};

impl Sortable for CharityFund {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "fund_type" => cmp_category(self.fund_type, other.fund_type),
            "status" => cmp_category(self.status, other.status),
            "balance" => cmp_amount(self.balance, other.balance),
            "income" => cmp_amount(self.income, other.income),
            "expenditure" => cmp_amount(self.expenditure, other.expenditure),
            "restriction_end_date" => {
                cmp_date(self.restriction_end_date, other.restriction_end_date)
            }
            _ => Ordering::Equal,
        }
    }
}

/// Funds whose use is limited by the donor
fn is_restricted(f: &CharityFund) -> bool {
    matches!(f.fund_type, Some(FundType::Restricted | FundType::Endowment))
}

fn controller() -> ListViewController<CharityFund> {
    ListViewController::<CharityFund>::new()
        .search(|f: &CharityFund| Some(f.name.as_str()))
        .category(CategoryField::of::<FundType>("fund_type", "Type", |f: &CharityFund| {
            f.fund_type.map(|t| t.code())
        }))
        .category(CategoryField::of::<FundStatus>("status", "Status", |f: &CharityFund| {
            f.status.map(|s| s.code())
        }))
}

fn columns() -> Vec<Column<CharityFund>> {
    vec![
        Column::new("Fund", |f: &CharityFund| cell::text(&f.name)).sortable("name"),
        Column::new("Type", |f: &CharityFund| cell::badge(f.fund_type)).sortable("fund_type"),
        Column::new("Status", |f: &CharityFund| cell::badge(f.status)).sortable("status"),
        Column::new("Income", |f: &CharityFund| cell::money(f.income)).sortable("income").right(),
        Column::new("Expenditure", |f: &CharityFund| cell::money(f.expenditure))
            .sortable("expenditure")
            .right(),
        Column::new("Balance", |f: &CharityFund| cell::signed_money(f.balance))
            .sortable("balance")
            .right(),
        Column::new("Restriction ends", |f: &CharityFund| {
            cell::due_date(f.restriction_end_date, today(), f.status != Some(FundStatus::Closed))
        })
        .sortable("restriction_end_date"),
    ]
}

fn fund_kpis(items: &[CharityFund], today: NaiveDate) -> Vec<Kpi> {
    let balance = sum(items, |f| f.balance);
    let restricted = sum(items, |f| if is_restricted(f) { f.balance } else { None });
    let income = sum(items, |f| f.income);
    let expenditure = sum(items, |f| f.expenditure);
    let in_deficit = count(items, |f| f.balance.map(|b| b < 0.0).unwrap_or(false));
    let ending = count(items, |f| {
        f.status != Some(FundStatus::Closed)
            && expiring_soon_opt(f.restriction_end_date, today, EXPIRY_HORIZON_DAYS)
    });

    vec![
        Kpi::money("Total funds", "landmark", balance),
        Kpi::money("Restricted", "lock", restricted),
        Kpi::money("Income", "trending-up", income),
        Kpi::money("Expenditure", "trending-down", expenditure),
        Kpi::count("Funds in deficit", "alert-triangle", in_deficit).alert_if_positive(),
        Kpi::count("Restrictions ending", "clock", ending)
            .warn_if_positive()
            .subtitle(format!("next {} days", EXPIRY_HORIZON_DAYS)),
    ]
}

#[component]
pub fn CharityFundList() -> impl IntoView {
    view! {
        <RecordListPage
            controller=controller()
            columns=columns()
            default_sort="name"
            kpis=fund_kpis
            search_placeholder="Search fund name..."
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fund(id: &str, fund_type: Option<FundType>, balance: Option<f64>) -> CharityFund {
        CharityFund {
            id: id.into(),
            name: format!("Fund {}", id),
            fund_type,
            status: Some(FundStatus::Active),
            balance,
            income: Some(100.0),
            expenditure: None,
            restriction_end_date: None,
        }
    }

    #[test]
    fn test_kpis() {
        let items = vec![
            fund("1", Some(FundType::Unrestricted), Some(5000.0)),
            fund("2", Some(FundType::Restricted), Some(1200.0)),
            fund("3", Some(FundType::Endowment), Some(-50.0)),
            fund("4", None, None),
        ];
        let kpis = fund_kpis(&items, NaiveDate::from_ymd_opt(2026, 10, 1).unwrap());
        assert_eq!(kpis[0].value, 6150.0);
        assert_eq!(kpis[1].value, 1150.0);
        assert_eq!(kpis[2].value, 400.0);
        assert_eq!(kpis[3].value, 0.0);
        assert_eq!(kpis[4].value, 1.0);
        assert_eq!(kpis[5].value, 0.0);
    }
}
