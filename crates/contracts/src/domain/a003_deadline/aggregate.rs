use crate::domain::common::AggregateRoot;
use crate::shared::categorical::Categorical;
use crate::shared::validation::{require_id, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Statutory filing the deadline belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineType {
    VatReturn,
    AnnualAccounts,
    ConfirmationStatement,
    CorporationTax,
    SelfAssessment,
    PayrollRti,
    #[serde(other)]
    Unknown,
}

impl Categorical for DeadlineType {
    fn code(&self) -> &'static str {
        match self {
            DeadlineType::VatReturn => "vat_return",
            DeadlineType::AnnualAccounts => "annual_accounts",
            DeadlineType::ConfirmationStatement => "confirmation_statement",
            DeadlineType::CorporationTax => "corporation_tax",
            DeadlineType::SelfAssessment => "self_assessment",
            DeadlineType::PayrollRti => "payroll_rti",
            DeadlineType::Unknown => "unknown",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            DeadlineType::VatReturn => "VAT return",
            DeadlineType::AnnualAccounts => "Annual accounts",
            DeadlineType::ConfirmationStatement => "Confirmation statement",
            DeadlineType::CorporationTax => "Corporation tax",
            DeadlineType::SelfAssessment => "Self assessment",
            DeadlineType::PayrollRti => "Payroll RTI",
            DeadlineType::Unknown => "Unknown",
        }
    }

    fn all() -> &'static [Self] {
        &[
            DeadlineType::VatReturn,
            DeadlineType::AnnualAccounts,
            DeadlineType::ConfirmationStatement,
            DeadlineType::CorporationTax,
            DeadlineType::SelfAssessment,
            DeadlineType::PayrollRti,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineStatus {
    Upcoming,
    InProgress,
    Filed,
    Overdue,
    #[serde(other)]
    Unknown,
}

impl Categorical for DeadlineStatus {
    fn code(&self) -> &'static str {
        match self {
            DeadlineStatus::Upcoming => "upcoming",
            DeadlineStatus::InProgress => "in_progress",
            DeadlineStatus::Filed => "filed",
            DeadlineStatus::Overdue => "overdue",
            DeadlineStatus::Unknown => "unknown",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            DeadlineStatus::Upcoming => "Upcoming",
            DeadlineStatus::InProgress => "In progress",
            DeadlineStatus::Filed => "Filed",
            DeadlineStatus::Overdue => "Overdue",
            DeadlineStatus::Unknown => "Unknown",
        }
    }

    fn all() -> &'static [Self] {
        &[
            DeadlineStatus::Upcoming,
            DeadlineStatus::InProgress,
            DeadlineStatus::Filed,
            DeadlineStatus::Overdue,
        ]
    }
}

/// Statutory deadline for a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deadline {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub client_name: String,
    pub deadline_type: Option<DeadlineType>,
    pub status: Option<DeadlineStatus>,
    pub due_date: Option<NaiveDate>,
}

impl Validate for Deadline {
    fn validate(&self) -> Result<(), String> {
        require_id(&self.id)
    }
}

impl AggregateRoot for Deadline {
    fn id(&self) -> &str {
        &self.id
    }

    fn caption(&self) -> String {
        self.title.clone()
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "deadline"
    }

    fn element_name() -> &'static str {
        "Deadline"
    }

    fn list_name() -> &'static str {
        "Deadlines"
    }

    fn endpoint() -> &'static str {
        "/compliance/deadlines"
    }
}
