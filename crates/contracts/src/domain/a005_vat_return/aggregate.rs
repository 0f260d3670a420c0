use crate::domain::common::AggregateRoot;
use crate::shared::categorical::Categorical;
use crate::shared::validation::{finite, non_negative, require_id, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VatScheme {
    Standard,
    FlatRate,
    Cash,
    Annual,
    #[serde(other)]
    Unknown,
}

impl Categorical for VatScheme {
    fn code(&self) -> &'static str {
        match self {
            VatScheme::Standard => "standard",
            VatScheme::FlatRate => "flat_rate",
            VatScheme::Cash => "cash",
            VatScheme::Annual => "annual",
            VatScheme::Unknown => "unknown",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            VatScheme::Standard => "Standard",
            VatScheme::FlatRate => "Flat rate",
            VatScheme::Cash => "Cash accounting",
            VatScheme::Annual => "Annual accounting",
            VatScheme::Unknown => "Unknown",
        }
    }

    fn all() -> &'static [Self] {
        &[
            VatScheme::Standard,
            VatScheme::FlatRate,
            VatScheme::Cash,
            VatScheme::Annual,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VatReturnStatus {
    Draft,
    ReadyForReview,
    Submitted,
    Accepted,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl Categorical for VatReturnStatus {
    fn code(&self) -> &'static str {
        match self {
            VatReturnStatus::Draft => "draft",
            VatReturnStatus::ReadyForReview => "ready_for_review",
            VatReturnStatus::Submitted => "submitted",
            VatReturnStatus::Accepted => "accepted",
            VatReturnStatus::Rejected => "rejected",
            VatReturnStatus::Unknown => "unknown",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            VatReturnStatus::Draft => "Draft",
            VatReturnStatus::ReadyForReview => "Ready for review",
            VatReturnStatus::Submitted => "Submitted",
            VatReturnStatus::Accepted => "Accepted",
            VatReturnStatus::Rejected => "Rejected",
            VatReturnStatus::Unknown => "Unknown",
        }
    }

    fn all() -> &'static [Self] {
        &[
            VatReturnStatus::Draft,
            VatReturnStatus::ReadyForReview,
            VatReturnStatus::Submitted,
            VatReturnStatus::Accepted,
            VatReturnStatus::Rejected,
        ]
    }
}

/// VAT return for one client and one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatReturn {
    pub id: String,
    pub client_name: String,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub scheme: Option<VatScheme>,
    pub status: Option<VatReturnStatus>,
    pub vat_due: Option<f64>,
    pub vat_reclaimed: Option<f64>,
    /// Positive when payable, negative when a repayment is due.
    pub net_vat: Option<f64>,
}

impl VatReturn {
    /// Period label like "2026-07-01 – 2026-09-30"
    pub fn period_label(&self) -> String {
        match (self.period_start, self.period_end) {
            (Some(s), Some(e)) => format!("{} – {}", s, e),
            (Some(s), None) => format!("from {}", s),
            (None, Some(e)) => format!("to {}", e),
            (None, None) => "-".to_string(),
        }
    }
}

impl Validate for VatReturn {
    fn validate(&self) -> Result<(), String> {
        require_id(&self.id)?;
        non_negative("vat_due", self.vat_due)?;
        non_negative("vat_reclaimed", self.vat_reclaimed)?;
        finite("net_vat", self.net_vat)?;
        if let (Some(s), Some(e)) = (self.period_start, self.period_end) {
            if e < s {
                return Err("period_end is before period_start".into());
            }
        }
        Ok(())
    }
}

impl AggregateRoot for VatReturn {
    fn id(&self) -> &str {
        &self.id
    }

    fn caption(&self) -> String {
        format!("{} {}", self.client_name, self.period_label())
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "vat_return"
    }

    fn element_name() -> &'static str {
        "VAT return"
    }

    fn list_name() -> &'static str {
        "VAT returns"
    }

    fn endpoint() -> &'static str {
        "/tax/vat-returns"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_period_is_invalid() {
        let json = r#"{
            "id": "vat-1",
            "client_name": "Acme Ltd",
            "period_start": "2026-09-30",
            "period_end": "2026-07-01",
            "net_vat": -150.0
        }"#;
        let r: VatReturn = serde_json::from_str(json).unwrap();
        assert_eq!(r.validate().unwrap_err(), "period_end is before period_start");
    }

    #[test]
    fn test_repayment_is_valid() {
        let json = r#"{"id": "vat-2", "client_name": "Acme Ltd", "net_vat": -150.0, "scheme": "flat_rate"}"#;
        let r: VatReturn = serde_json::from_str(json).unwrap();
        assert_eq!(r.scheme, Some(VatScheme::FlatRate));
        assert!(r.validate().is_ok());
        assert_eq!(r.period_label(), "-");
    }
}
