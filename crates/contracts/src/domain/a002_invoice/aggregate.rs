use crate::domain::common::AggregateRoot;
use crate::shared::categorical::Categorical;
use crate::shared::validation::{finite, non_negative, require_id, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Billing status of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    PartiallyPaid,
    Paid,
    Overdue,
    Void,
    #[serde(other)]
    Unknown,
}

impl Categorical for InvoiceStatus {
    fn code(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::PartiallyPaid => "partially_paid",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Void => "void",
            InvoiceStatus::Unknown => "unknown",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "Draft",
            InvoiceStatus::Sent => "Sent",
            InvoiceStatus::PartiallyPaid => "Partially paid",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Overdue => "Overdue",
            InvoiceStatus::Void => "Void",
            InvoiceStatus::Unknown => "Unknown",
        }
    }

    fn all() -> &'static [Self] {
        &[
            InvoiceStatus::Draft,
            InvoiceStatus::Sent,
            InvoiceStatus::PartiallyPaid,
            InvoiceStatus::Paid,
            InvoiceStatus::Overdue,
            InvoiceStatus::Void,
        ]
    }
}

/// Sales invoice issued to a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    #[serde(default)]
    pub client_name: String,
    pub status: Option<InvoiceStatus>,
    pub issue_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub net_amount: Option<f64>,
    pub vat_amount: Option<f64>,
    pub total_amount: Option<f64>,
}

impl Validate for Invoice {
    fn validate(&self) -> Result<(), String> {
        require_id(&self.id)?;
        // credit notes come through the same endpoint with negative amounts
        finite("net_amount", self.net_amount)?;
        finite("vat_amount", self.vat_amount)?;
        finite("total_amount", self.total_amount)?;
        Ok(())
    }
}

impl AggregateRoot for Invoice {
    fn id(&self) -> &str {
        &self.id
    }

    fn caption(&self) -> String {
        self.invoice_number.clone()
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "invoice"
    }

    fn element_name() -> &'static str {
        "Invoice"
    }

    fn list_name() -> &'static str {
        "Invoices"
    }

    fn endpoint() -> &'static str {
        "/billing/invoices"
    }
}

/// Payload for `POST /billing/invoices`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateInvoiceDto {
    pub client_name: String,
    pub issue_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub net_amount: f64,
    pub vat_rate_percent: f64,
    pub description: Option<String>,
}

impl CreateInvoiceDto {
    pub fn vat_amount(&self) -> f64 {
        (self.net_amount * self.vat_rate_percent / 100.0 * 100.0).round() / 100.0
    }

    pub fn total_amount(&self) -> f64 {
        self.net_amount + self.vat_amount()
    }
}

impl Validate for CreateInvoiceDto {
    fn validate(&self) -> Result<(), String> {
        if self.client_name.trim().is_empty() {
            return Err("Client is required".into());
        }
        non_negative("net_amount", Some(self.net_amount))?;
        non_negative("vat_rate_percent", Some(self.vat_rate_percent))?;
        if let Some(due) = self.due_date {
            if due < self.issue_date {
                return Err("Due date is before issue date".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> CreateInvoiceDto {
        CreateInvoiceDto {
            client_name: "Acme Ltd".into(),
            issue_date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2026, 10, 31),
            net_amount: 1000.0,
            vat_rate_percent: 20.0,
            description: None,
        }
    }

    #[test]
    fn test_vat_and_total() {
        let d = dto();
        assert_eq!(d.vat_amount(), 200.0);
        assert_eq!(d.total_amount(), 1200.0);
    }

    #[test]
    fn test_due_before_issue_is_rejected() {
        let mut d = dto();
        d.due_date = NaiveDate::from_ymd_opt(2026, 9, 1);
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_credit_note_amounts_are_valid() {
        let json = r#"{"id": "inv-7", "invoice_number": "CN-0007", "status": "paid", "total_amount": -120.0}"#;
        let inv: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(inv.status, Some(InvoiceStatus::Paid));
        assert!(inv.validate().is_ok());
    }
}
