use crate::domain::common::AggregateRoot;
use crate::enums::Priority;
use crate::shared::categorical::Categorical;
use crate::shared::validation::{non_negative, require_id, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Enums
// ============================================================================

/// Kind of engagement work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    Bookkeeping,
    VatReturn,
    AnnualAccounts,
    Payroll,
    SelfAssessment,
    CorporationTax,
    Advisory,
    #[serde(other)]
    Unknown,
}

impl Categorical for JobType {
    fn code(&self) -> &'static str {
        match self {
            JobType::Bookkeeping => "bookkeeping",
            JobType::VatReturn => "vat_return",
            JobType::AnnualAccounts => "annual_accounts",
            JobType::Payroll => "payroll",
            JobType::SelfAssessment => "self_assessment",
            JobType::CorporationTax => "corporation_tax",
            JobType::Advisory => "advisory",
            JobType::Unknown => "unknown",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            JobType::Bookkeeping => "Bookkeeping",
            JobType::VatReturn => "VAT return",
            JobType::AnnualAccounts => "Annual accounts",
            JobType::Payroll => "Payroll",
            JobType::SelfAssessment => "Self assessment",
            JobType::CorporationTax => "Corporation tax",
            JobType::Advisory => "Advisory",
            JobType::Unknown => "Unknown",
        }
    }

    fn all() -> &'static [Self] {
        &[
            JobType::Bookkeeping,
            JobType::VatReturn,
            JobType::AnnualAccounts,
            JobType::Payroll,
            JobType::SelfAssessment,
            JobType::CorporationTax,
            JobType::Advisory,
        ]
    }
}

/// Workflow status of a job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    NotStarted,
    InProgress,
    AwaitingClient,
    InReview,
    OnHold,
    Completed,
    #[serde(other)]
    Unknown,
}

impl Categorical for JobStatus {
    fn code(&self) -> &'static str {
        match self {
            JobStatus::NotStarted => "not_started",
            JobStatus::InProgress => "in_progress",
            JobStatus::AwaitingClient => "awaiting_client",
            JobStatus::InReview => "in_review",
            JobStatus::OnHold => "on_hold",
            JobStatus::Completed => "completed",
            JobStatus::Unknown => "unknown",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            JobStatus::NotStarted => "Not started",
            JobStatus::InProgress => "In progress",
            JobStatus::AwaitingClient => "Awaiting client",
            JobStatus::InReview => "In review",
            JobStatus::OnHold => "On hold",
            JobStatus::Completed => "Completed",
            JobStatus::Unknown => "Unknown",
        }
    }

    fn all() -> &'static [Self] {
        &[
            JobStatus::NotStarted,
            JobStatus::InProgress,
            JobStatus::AwaitingClient,
            JobStatus::InReview,
            JobStatus::OnHold,
            JobStatus::Completed,
        ]
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A unit of client work tracked by the practice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub client_id: String,
    #[serde(default)]
    pub client_name: String,
    pub job_type: Option<JobType>,
    pub status: Option<JobStatus>,
    pub priority: Option<Priority>,
    pub assignee: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub budget_hours: Option<f64>,
    pub fee: Option<f64>,
}

impl Validate for Job {
    fn validate(&self) -> Result<(), String> {
        require_id(&self.id)?;
        non_negative("budget_hours", self.budget_hours)?;
        non_negative("fee", self.fee)?;
        Ok(())
    }
}

impl AggregateRoot for Job {
    fn id(&self) -> &str {
        &self.id
    }

    fn caption(&self) -> String {
        self.title.clone()
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "job"
    }

    fn element_name() -> &'static str {
        "Job"
    }

    fn list_name() -> &'static str {
        "Jobs"
    }

    fn endpoint() -> &'static str {
        "/practice-management/jobs"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Payload for `POST /practice-management/jobs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateJobDto {
    pub title: String,
    pub client_id: String,
    pub job_type: JobType,
    pub priority: Priority,
    pub assignee: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub budget_hours: Option<f64>,
    pub fee: Option<f64>,
    pub notes: Option<String>,
}

impl Validate for CreateJobDto {
    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".into());
        }
        if self.client_id.trim().is_empty() {
            return Err("Client is required".into());
        }
        non_negative("budget_hours", self.budget_hours)?;
        non_negative("fee", self.fee)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_with_unknown_and_null_categories() {
        let json = r#"{
            "id": "job-1",
            "title": "Year end accounts",
            "client_id": "c-9",
            "job_type": "forensic_audit",
            "status": null,
            "priority": "high",
            "due_date": "2026-11-30",
            "fee": 1250.0
        }"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.job_type, Some(JobType::Unknown));
        assert_eq!(job.status, None);
        assert_eq!(job.priority, Some(Priority::High));
        assert_eq!(job.client_name, "");
        assert_eq!(job.budget_hours, None);
        assert!(job.validate().is_ok());
    }

    #[test]
    fn test_job_with_negative_fee_is_invalid() {
        let json = r#"{"id": "job-2", "title": "Payroll", "client_id": "c-1", "fee": -10}"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert!(job.validate().is_err());
    }

    #[test]
    fn test_job_without_title_fails_to_decode() {
        let json = r#"{"id": "job-3", "client_id": "c-1"}"#;
        assert!(serde_json::from_str::<Job>(json).is_err());
    }

    #[test]
    fn test_create_dto_requires_title_and_client() {
        let dto = CreateJobDto {
            title: " ".into(),
            client_id: "c-1".into(),
            job_type: JobType::Payroll,
            priority: Priority::Medium,
            assignee: None,
            due_date: None,
            budget_hours: None,
            fee: None,
            notes: None,
        };
        assert_eq!(dto.validate().unwrap_err(), "Title is required");
    }

    #[test]
    fn test_tab_key() {
        assert_eq!(Job::full_name(), "a001_job");
    }
}
