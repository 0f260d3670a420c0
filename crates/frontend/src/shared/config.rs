//! Compile-time settings of the console

/// Port the REST backend listens on, on the same host as the page
pub const API_PORT: u16 = 3000;

/// Every resource path is mounted under this prefix
pub const API_PREFIX: &str = "/api";

pub const LIST_PAGE_SIZE_OPTIONS: [usize; 4] = [25, 50, 100, 200];
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// KPI cards count documents expiring within this many days
pub const EXPIRY_HORIZON_DAYS: i64 = 30;

pub const SEARCH_DEBOUNCE_MS: u32 = 300;
