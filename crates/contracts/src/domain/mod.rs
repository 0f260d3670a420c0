pub mod a001_job;
pub mod a002_invoice;
pub mod a003_deadline;
pub mod a004_aml_case;
pub mod a005_vat_return;
pub mod a006_fixed_asset;
pub mod a007_charity_fund;
pub mod common;
