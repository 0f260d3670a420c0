use crate::domain::common::AggregateRoot;
use crate::shared::categorical::Categorical;
use crate::shared::validation::{require_id, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Client risk rating assigned during customer due diligence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[serde(other)]
    Unknown,
}

impl Categorical for RiskLevel {
    fn code(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Unknown => "unknown",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low risk",
            RiskLevel::Medium => "Medium risk",
            RiskLevel::High => "High risk",
            RiskLevel::Unknown => "Unknown",
        }
    }

    fn all() -> &'static [Self] {
        &[RiskLevel::Low, RiskLevel::Medium, RiskLevel::High]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmlCaseStatus {
    PendingReview,
    InformationRequested,
    Approved,
    Rejected,
    Expired,
    #[serde(other)]
    Unknown,
}

impl Categorical for AmlCaseStatus {
    fn code(&self) -> &'static str {
        match self {
            AmlCaseStatus::PendingReview => "pending_review",
            AmlCaseStatus::InformationRequested => "information_requested",
            AmlCaseStatus::Approved => "approved",
            AmlCaseStatus::Rejected => "rejected",
            AmlCaseStatus::Expired => "expired",
            AmlCaseStatus::Unknown => "unknown",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            AmlCaseStatus::PendingReview => "Pending review",
            AmlCaseStatus::InformationRequested => "Information requested",
            AmlCaseStatus::Approved => "Approved",
            AmlCaseStatus::Rejected => "Rejected",
            AmlCaseStatus::Expired => "Expired",
            AmlCaseStatus::Unknown => "Unknown",
        }
    }

    fn all() -> &'static [Self] {
        &[
            AmlCaseStatus::PendingReview,
            AmlCaseStatus::InformationRequested,
            AmlCaseStatus::Approved,
            AmlCaseStatus::Rejected,
            AmlCaseStatus::Expired,
        ]
    }
}

/// AML/KYC due diligence case for one client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmlCase {
    pub id: String,
    pub client_name: String,
    pub risk_level: Option<RiskLevel>,
    pub status: Option<AmlCaseStatus>,
    pub assigned_to: Option<String>,
    pub id_document_expiry: Option<NaiveDate>,
    pub next_review_date: Option<NaiveDate>,
}

impl Validate for AmlCase {
    fn validate(&self) -> Result<(), String> {
        require_id(&self.id)
    }
}

impl AggregateRoot for AmlCase {
    fn id(&self) -> &str {
        &self.id
    }

    fn caption(&self) -> String {
        self.client_name.clone()
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "aml_case"
    }

    fn element_name() -> &'static str {
        "AML case"
    }

    fn list_name() -> &'static str {
        "AML / KYC"
    }

    fn endpoint() -> &'static str {
        "/aml-kyc/cases"
    }
}
