use contracts::dashboards::d400_bookkeeping::BookkeepingDashboardStats;

use crate::shared::api::{ApiClient, ApiError};

const STATS_PATH: &str = "/bookkeeping/dashboard-stats";

/// Current bookkeeping figures of the practice
pub async fn get_stats(client: &ApiClient) -> Result<BookkeepingDashboardStats, ApiError> {
    client.get(STATS_PATH).await
}
