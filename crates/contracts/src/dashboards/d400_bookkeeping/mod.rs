use crate::shared::validation::{finite, non_negative, Validate};
use serde::{Deserialize, Serialize};

/// Response of `GET /bookkeeping/dashboard-stats`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookkeepingDashboardStats {
    pub bank_balance: Option<f64>,
    pub outstanding_receivables: Option<f64>,
    pub outstanding_payables: Option<f64>,
    pub overdue_receivables: Option<f64>,
    #[serde(default)]
    pub unreconciled_transactions: u32,
    #[serde(default)]
    pub reconciled_transactions: u32,
    pub revenue_this_month: Option<f64>,
    pub revenue_last_month: Option<f64>,
    pub expenses_this_month: Option<f64>,
}

impl BookkeepingDashboardStats {
    /// Share of bank lines already reconciled, 0 when there are no lines.
    pub fn reconciled_percent(&self) -> f64 {
        let total =
            u64::from(self.reconciled_transactions) + u64::from(self.unreconciled_transactions);
        if total == 0 {
            return 0.0;
        }
        self.reconciled_transactions as f64 / total as f64 * 100.0
    }

    /// Month-on-month revenue change in percent, `None` without a base.
    pub fn revenue_change_percent(&self) -> Option<f64> {
        let current = self.revenue_this_month?;
        let previous = self.revenue_last_month.filter(|p| *p != 0.0)?;
        Some((current - previous) / previous.abs() * 100.0)
    }
}

impl Validate for BookkeepingDashboardStats {
    fn validate(&self) -> Result<(), String> {
        finite("bank_balance", self.bank_balance)?;
        non_negative("outstanding_receivables", self.outstanding_receivables)?;
        non_negative("outstanding_payables", self.outstanding_payables)?;
        non_negative("overdue_receivables", self.overdue_receivables)?;
        finite("revenue_this_month", self.revenue_this_month)?;
        finite("revenue_last_month", self.revenue_last_month)?;
        finite("expenses_this_month", self.expenses_this_month)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconciled_percent_without_lines() {
        let stats = BookkeepingDashboardStats::default();
        assert_eq!(stats.reconciled_percent(), 0.0);
    }

    #[test]
    fn test_reconciled_percent() {
        let stats = BookkeepingDashboardStats {
            reconciled_transactions: 30,
            unreconciled_transactions: 10,
            ..Default::default()
        };
        assert_eq!(stats.reconciled_percent(), 75.0);
    }

    #[test]
    fn test_reconciled_percent_with_counts_near_u32_max() {
        let stats = BookkeepingDashboardStats {
            reconciled_transactions: u32::MAX,
            unreconciled_transactions: 1,
            ..Default::default()
        };
        let pct = stats.reconciled_percent();
        assert!(pct.is_finite());
        assert!(pct > 99.9 && pct < 100.0);
    }

    #[test]
    fn test_revenue_change() {
        let stats = BookkeepingDashboardStats {
            revenue_this_month: Some(120.0),
            revenue_last_month: Some(100.0),
            ..Default::default()
        };
        let change = stats.revenue_change_percent().unwrap();
        assert!((change - 20.0).abs() < 1e-9);

        let no_base = BookkeepingDashboardStats {
            revenue_this_month: Some(120.0),
            revenue_last_month: Some(0.0),
            ..Default::default()
        };
        assert_eq!(no_base.revenue_change_percent(), None);
    }
}
