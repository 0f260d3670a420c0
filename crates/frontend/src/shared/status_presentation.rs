//! Mapping of closed enums to badge label, colour and icon.
//!
//! Every mapping is total: `None` and the `Unknown` variant render with the
//! neutral gray style.

use contracts::domain::a001_job::{JobStatus, JobType};
use contracts::domain::a002_invoice::InvoiceStatus;
use contracts::domain::a003_deadline::{DeadlineStatus, DeadlineType};
use contracts::domain::a004_aml_case::{AmlCaseStatus, RiskLevel};
use contracts::domain::a005_vat_return::{VatReturnStatus, VatScheme};
use contracts::domain::a006_fixed_asset::{AssetCategory, AssetStatus, DepreciationMethod};
use contracts::domain::a007_charity_fund::{FundStatus, FundType};
use contracts::enums::Priority;
use contracts::shared::categorical::Categorical;

pub const NEUTRAL: &str = "badge--neutral";
pub const PRIMARY: &str = "badge--primary";
pub const SUCCESS: &str = "badge--success";
pub const WARNING: &str = "badge--warning";
pub const ERROR: &str = "badge--error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub label: &'static str,
    pub color_class: &'static str,
    pub icon: &'static str,
}

impl Presentation {
    pub const fn new(label: &'static str, color_class: &'static str, icon: &'static str) -> Self {
        Self {
            label,
            color_class,
            icon,
        }
    }

    /// Neutral gray badge for missing or unrecognised values
    pub const fn fallback() -> Self {
        Self::new("Unknown", NEUTRAL, "help-circle")
    }
}

pub trait Presentable: Categorical {
    /// Colour class and icon of a known value; `None` falls back to neutral.
    fn style(&self) -> Option<(&'static str, &'static str)>;

    fn presentation(&self) -> Presentation {
        match self.style() {
            Some((color_class, icon)) => Presentation::new(self.display_name(), color_class, icon),
            None => Presentation::fallback(),
        }
    }
}

/// Presentation of an optional enum value
pub fn present<E: Presentable>(value: Option<E>) -> Presentation {
    value
        .map(|v| v.presentation())
        .unwrap_or_else(Presentation::fallback)
}

/// Presentation of a raw wire code
pub fn present_code<E: Presentable>(code: Option<&str>) -> Presentation {
    present(code.and_then(E::from_code))
}

impl Presentable for Priority {
    fn style(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Priority::Low => Some((NEUTRAL, "arrow-down")),
            Priority::Medium => Some((PRIMARY, "minus")),
            Priority::High => Some((WARNING, "arrow-up")),
            Priority::Urgent => Some((ERROR, "alert-triangle")),
            Priority::Unknown => None,
        }
    }
}

impl Presentable for JobType {
    fn style(&self) -> Option<(&'static str, &'static str)> {
        match self {
            JobType::Bookkeeping => Some((PRIMARY, "book")),
            JobType::VatReturn => Some((PRIMARY, "percent")),
            JobType::AnnualAccounts => Some((PRIMARY, "file-text")),
            JobType::Payroll => Some((PRIMARY, "users")),
            JobType::SelfAssessment => Some((PRIMARY, "user")),
            JobType::CorporationTax => Some((PRIMARY, "building")),
            JobType::Advisory => Some((PRIMARY, "message-square")),
            JobType::Unknown => None,
        }
    }
}

impl Presentable for JobStatus {
    fn style(&self) -> Option<(&'static str, &'static str)> {
        match self {
            JobStatus::NotStarted => Some((NEUTRAL, "circle")),
            JobStatus::InProgress => Some((PRIMARY, "play")),
            JobStatus::AwaitingClient => Some((WARNING, "clock")),
            JobStatus::InReview => Some((PRIMARY, "eye")),
            JobStatus::OnHold => Some((WARNING, "pause")),
            JobStatus::Completed => Some((SUCCESS, "check")),
            JobStatus::Unknown => None,
        }
    }
}

impl Presentable for InvoiceStatus {
    fn style(&self) -> Option<(&'static str, &'static str)> {
        match self {
            InvoiceStatus::Draft => Some((NEUTRAL, "edit")),
            InvoiceStatus::Sent => Some((PRIMARY, "send")),
            InvoiceStatus::PartiallyPaid => Some((WARNING, "pie-chart")),
            InvoiceStatus::Paid => Some((SUCCESS, "check")),
            InvoiceStatus::Overdue => Some((ERROR, "alert-triangle")),
            InvoiceStatus::Void => Some((NEUTRAL, "x")),
            InvoiceStatus::Unknown => None,
        }
    }
}

impl Presentable for DeadlineType {
    fn style(&self) -> Option<(&'static str, &'static str)> {
        match self {
            DeadlineType::Unknown => None,
            _ => Some((PRIMARY, "calendar")),
        }
    }
}

impl Presentable for DeadlineStatus {
    fn style(&self) -> Option<(&'static str, &'static str)> {
        match self {
            DeadlineStatus::Upcoming => Some((PRIMARY, "calendar")),
            DeadlineStatus::InProgress => Some((WARNING, "play")),
            DeadlineStatus::Filed => Some((SUCCESS, "check")),
            DeadlineStatus::Overdue => Some((ERROR, "alert-triangle")),
            DeadlineStatus::Unknown => None,
        }
    }
}

impl Presentable for RiskLevel {
    fn style(&self) -> Option<(&'static str, &'static str)> {
        match self {
            RiskLevel::Low => Some((SUCCESS, "shield")),
            RiskLevel::Medium => Some((WARNING, "shield")),
            RiskLevel::High => Some((ERROR, "shield-alert")),
            RiskLevel::Unknown => None,
        }
    }
}

impl Presentable for AmlCaseStatus {
    fn style(&self) -> Option<(&'static str, &'static str)> {
        match self {
            AmlCaseStatus::PendingReview => Some((WARNING, "clock")),
            AmlCaseStatus::InformationRequested => Some((PRIMARY, "mail")),
            AmlCaseStatus::Approved => Some((SUCCESS, "check")),
            AmlCaseStatus::Rejected => Some((ERROR, "x")),
            AmlCaseStatus::Expired => Some((ERROR, "alert-triangle")),
            AmlCaseStatus::Unknown => None,
        }
    }
}

impl Presentable for VatScheme {
    fn style(&self) -> Option<(&'static str, &'static str)> {
        match self {
            VatScheme::Unknown => None,
            _ => Some((NEUTRAL, "percent")),
        }
    }
}

impl Presentable for VatReturnStatus {
    fn style(&self) -> Option<(&'static str, &'static str)> {
        match self {
            VatReturnStatus::Draft => Some((NEUTRAL, "edit")),
            VatReturnStatus::ReadyForReview => Some((WARNING, "eye")),
            VatReturnStatus::Submitted => Some((PRIMARY, "send")),
            VatReturnStatus::Accepted => Some((SUCCESS, "check")),
            VatReturnStatus::Rejected => Some((ERROR, "x")),
            VatReturnStatus::Unknown => None,
        }
    }
}

impl Presentable for AssetCategory {
    fn style(&self) -> Option<(&'static str, &'static str)> {
        match self {
            AssetCategory::Unknown => None,
            _ => Some((NEUTRAL, "package")),
        }
    }
}

impl Presentable for AssetStatus {
    fn style(&self) -> Option<(&'static str, &'static str)> {
        match self {
            AssetStatus::Active => Some((SUCCESS, "check")),
            AssetStatus::FullyDepreciated => Some((WARNING, "trending-down")),
            AssetStatus::Disposed => Some((NEUTRAL, "archive")),
            AssetStatus::Unknown => None,
        }
    }
}

impl Presentable for DepreciationMethod {
    fn style(&self) -> Option<(&'static str, &'static str)> {
        match self {
            DepreciationMethod::Unknown => None,
            _ => Some((NEUTRAL, "trending-down")),
        }
    }
}

impl Presentable for FundType {
    fn style(&self) -> Option<(&'static str, &'static str)> {
        match self {
            FundType::Unrestricted => Some((SUCCESS, "unlock")),
            FundType::Designated => Some((PRIMARY, "bookmark")),
            FundType::Restricted => Some((WARNING, "lock")),
            FundType::Endowment => Some((PRIMARY, "landmark")),
            FundType::Unknown => None,
        }
    }
}

impl Presentable for FundStatus {
    fn style(&self) -> Option<(&'static str, &'static str)> {
        match self {
            FundStatus::Active => Some((SUCCESS, "check")),
            FundStatus::Closed => Some((NEUTRAL, "archive")),
            FundStatus::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_value() {
        let p = present(Some(AmlCaseStatus::Approved));
        assert_eq!(p.label, "Approved");
        assert_eq!(p.color_class, SUCCESS);
    }

    #[test]
    fn test_missing_and_unknown_fall_back_to_neutral() {
        assert_eq!(present::<InvoiceStatus>(None), Presentation::fallback());
        assert_eq!(
            present(Some(InvoiceStatus::Unknown)),
            Presentation::fallback()
        );
        assert_eq!(
            present_code::<JobStatus>(Some("archived")),
            Presentation::fallback()
        );
        assert_eq!(present_code::<JobStatus>(None).color_class, NEUTRAL);
    }

    #[test]
    fn test_every_known_value_has_a_style() {
        fn check<E: Presentable>() {
            for v in E::all() {
                assert!(v.style().is_some(), "{:?} has no style", v);
                assert_eq!(v.presentation().label, v.display_name());
            }
        }
        check::<Priority>();
        check::<JobType>();
        check::<JobStatus>();
        check::<InvoiceStatus>();
        check::<DeadlineType>();
        check::<DeadlineStatus>();
        check::<RiskLevel>();
        check::<AmlCaseStatus>();
        check::<VatScheme>();
        check::<VatReturnStatus>();
        check::<AssetCategory>();
        check::<AssetStatus>();
        check::<DepreciationMethod>();
        check::<FundType>();
        check::<FundStatus>();
    }
}
