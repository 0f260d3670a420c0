use crate::domain::common::AggregateRoot;
use crate::shared::categorical::Categorical;
use crate::shared::validation::{finite, non_negative, require_id, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// SORP fund classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundType {
    Unrestricted,
    Designated,
    Restricted,
    Endowment,
    #[serde(other)]
    Unknown,
}

impl Categorical for FundType {
    fn code(&self) -> &'static str {
        match self {
            FundType::Unrestricted => "unrestricted",
            FundType::Designated => "designated",
            FundType::Restricted => "restricted",
            FundType::Endowment => "endowment",
            FundType::Unknown => "unknown",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            FundType::Unrestricted => "Unrestricted",
            FundType::Designated => "Designated",
            FundType::Restricted => "Restricted",
            FundType::Endowment => "Endowment",
            FundType::Unknown => "Unknown",
        }
    }

    fn all() -> &'static [Self] {
        &[
            FundType::Unrestricted,
            FundType::Designated,
            FundType::Restricted,
            FundType::Endowment,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundStatus {
    Active,
    Closed,
    #[serde(other)]
    Unknown,
}

impl Categorical for FundStatus {
    fn code(&self) -> &'static str {
        match self {
            FundStatus::Active => "active",
            FundStatus::Closed => "closed",
            FundStatus::Unknown => "unknown",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            FundStatus::Active => "Active",
            FundStatus::Closed => "Closed",
            FundStatus::Unknown => "Unknown",
        }
    }

    fn all() -> &'static [Self] {
        &[FundStatus::Active, FundStatus::Closed]
    }
}

/// Charity fund with its movements for the current year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharityFund {
    pub id: String,
    pub name: String,
    pub fund_type: Option<FundType>,
    pub status: Option<FundStatus>,
    /// Fund balances may be in deficit, so only finiteness is checked.
    pub balance: Option<f64>,
    pub income: Option<f64>,
    pub expenditure: Option<f64>,
    pub restriction_end_date: Option<NaiveDate>,
}

impl Validate for CharityFund {
    fn validate(&self) -> Result<(), String> {
        require_id(&self.id)?;
        finite("balance", self.balance)?;
        non_negative("income", self.income)?;
        non_negative("expenditure", self.expenditure)?;
        Ok(())
    }
}

impl AggregateRoot for CharityFund {
    fn id(&self) -> &str {
        &self.id
    }

    fn caption(&self) -> String {
        self.name.clone()
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "charity_fund"
    }

    fn element_name() -> &'static str {
        "Fund"
    }

    fn list_name() -> &'static str {
        "Charity funds"
    }

    fn endpoint() -> &'static str {
        "/charity/funds"
    }
}
