//! Tab titles, keyed the same way as the registry.
//!
//! Aggregate list tabs take `list_name` from contracts.

use contracts::domain::a001_job::Job;
use contracts::domain::a002_invoice::Invoice;
use contracts::domain::a003_deadline::Deadline;
use contracts::domain::a004_aml_case::AmlCase;
use contracts::domain::a005_vat_return::VatReturn;
use contracts::domain::a006_fixed_asset::FixedAsset;
use contracts::domain::a007_charity_fund::CharityFund;
use contracts::domain::common::AggregateRoot;

/// Readable title of a tab, empty for an unknown key
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Aggregates ────────────────────────────────────────────────────
        "a001_job" => Job::list_name(),
        "a001_job_new" => "New job",
        "a002_invoice" => Invoice::list_name(),
        "a002_invoice_new" => "New invoice",
        "a003_deadline" => Deadline::list_name(),
        "a004_aml_case" => AmlCase::list_name(),
        "a005_vat_return" => VatReturn::list_name(),
        "a006_fixed_asset" => FixedAsset::list_name(),
        "a007_charity_fund" => CharityFund::list_name(),

        // ── Dashboards (d4xx) ─────────────────────────────────────────────
        "d400_bookkeeping" => "Bookkeeping",

        _ => "",
    }
}

/// Title for a new tab; falls back to the key itself
pub fn tab_title(key: &str) -> String {
    match tab_label_for_key(key) {
        "" => key.to_string(),
        label => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_tabs_use_aggregate_names() {
        assert_eq!(tab_label_for_key(&Job::full_name()), "Jobs");
        assert_eq!(tab_label_for_key(&Invoice::full_name()), "Invoices");
        assert_eq!(tab_label_for_key("a004_aml_case"), "AML / KYC");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(tab_label_for_key("z999"), "");
        assert_eq!(tab_title("z999"), "z999");
        assert_eq!(tab_title("a001_job_new"), "New job");
    }
}
