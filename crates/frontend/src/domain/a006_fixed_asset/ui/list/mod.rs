use chrono::NaiveDate;
use contracts::domain::a006_fixed_asset::{AssetCategory, AssetStatus, DepreciationMethod, FixedAsset};
use contracts::shared::categorical::Categorical;
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::aggregate::{count, sum};
use crate::shared::components::table::number_format::format_percent;
use crate::shared::list_utils::{cmp_amount, cmp_category, cmp_date, cmp_text, Sortable};
use crate::shared::list_view::{cell, CategoryField, Column, Kpi, ListViewController, RecordListPage};

impl Sortable for FixedAsset {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "category" => cmp_category(self.category, other.category),
            "status" => cmp_category(self.status, other.status),
            "depreciation_method" => {
                cmp_category(self.depreciation_method, other.depreciation_method)
            }
            "purchase_date" => cmp_date(self.purchase_date, other.purchase_date),
            "cost" => cmp_amount(self.cost, other.cost),
            "net_book_value" => cmp_amount(self.net_book_value, other.net_book_value),
            _ => Ordering::Equal,
        }
    }
}

fn is_held(a: &FixedAsset) -> bool {
    a.status != Some(AssetStatus::Disposed)
}

fn controller() -> ListViewController<FixedAsset> {
    ListViewController::<FixedAsset>::new()
        .search(|a: &FixedAsset| Some(a.name.as_str()))
        .category(CategoryField::of::<AssetCategory>(
            "category",
            "Category",
            |a: &FixedAsset| a.category.map(|c| c.code()),
        ))
        .category(CategoryField::of::<AssetStatus>("status", "Status", |a: &FixedAsset| {
            a.status.map(|s| s.code())
        }))
        .category(CategoryField::of::<DepreciationMethod>(
            "depreciation_method",
            "Method",
            |a: &FixedAsset| a.depreciation_method.map(|m| m.code()),
        ))
}

fn columns() -> Vec<Column<FixedAsset>> {
    vec![
        Column::new("Asset", |a: &FixedAsset| cell::text(&a.name)).sortable("name"),
        Column::new("Category", |a: &FixedAsset| cell::badge(a.category)).sortable("category"),
        Column::new("Status", |a: &FixedAsset| cell::badge(a.status)).sortable("status"),
        Column::new("Method", |a: &FixedAsset| cell::badge(a.depreciation_method))
            .sortable("depreciation_method"),
        Column::new("Purchased", |a: &FixedAsset| cell::date(a.purchase_date))
            .sortable("purchase_date"),
        Column::new("Cost", |a: &FixedAsset| cell::money(a.cost)).sortable("cost").right(),
        Column::new("Depreciation", |a: &FixedAsset| cell::money(a.accumulated_depreciation))
            .right(),
        Column::new("Written off", |a: &FixedAsset| {
            cell::opt_text(a.depreciated_percent().map(|p| format_percent(p, 0)).as_deref())
        })
        .right(),
        Column::new("Net book value", |a: &FixedAsset| cell::total_money(a.net_book_value))
            .sortable("net_book_value")
            .right(),
    ]
}

fn asset_kpis(items: &[FixedAsset], _today: NaiveDate) -> Vec<Kpi> {
    let held = |a: &FixedAsset, v: Option<f64>| if is_held(a) { v } else { None };
    let cost = sum(items, |a| held(a, a.cost));
    let depreciation = sum(items, |a| held(a, a.accumulated_depreciation));
    let nbv = sum(items, |a| held(a, a.net_book_value));
    let active = count(items, |a| a.status == Some(AssetStatus::Active));
    let fully = count(items, |a| a.status == Some(AssetStatus::FullyDepreciated));

    vec![
        Kpi::money("Cost", "package", cost),
        Kpi::money("Accumulated depreciation", "trending-down", depreciation),
        Kpi::money("Net book value", "pound", nbv),
        Kpi::count("Active assets", "check", active),
        Kpi::count("Fully depreciated", "archive", fully),
    ]
}

#[component]
pub fn FixedAssetList() -> impl IntoView {
    view! {
        <RecordListPage
            controller=controller()
            columns=columns()
            default_sort="purchase_date"
            sort_descending=true
            kpis=asset_kpis
            search_placeholder="Search asset name..."
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(id: &str, status: AssetStatus, cost: f64, acc: f64) -> FixedAsset {
        FixedAsset {
            id: id.into(),
            name: format!("Asset {}", id),
            category: Some(AssetCategory::ComputerEquipment),
            status: Some(status),
            depreciation_method: Some(DepreciationMethod::StraightLine),
            purchase_date: None,
            cost: Some(cost),
            accumulated_depreciation: Some(acc),
            net_book_value: Some(cost - acc),
        }
    }

    #[test]
    fn test_disposed_assets_are_left_out_of_totals() {
        let items = vec![
            asset("1", AssetStatus::Active, 1000.0, 250.0),
            asset("2", AssetStatus::FullyDepreciated, 500.0, 500.0),
            asset("3", AssetStatus::Disposed, 9000.0, 1000.0),
        ];
        let kpis = asset_kpis(&items, NaiveDate::from_ymd_opt(2026, 10, 1).unwrap());
        assert_eq!(kpis[0].value, 1500.0);
        assert_eq!(kpis[1].value, 750.0);
        assert_eq!(kpis[2].value, 750.0);
        assert_eq!(kpis[3].value, 1.0);
        assert_eq!(kpis[4].value, 1.0);
    }
}
