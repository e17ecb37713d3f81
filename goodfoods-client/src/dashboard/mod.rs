//! Manager dashboard: aggregation and periodic refresh

pub mod refresher;
pub mod stats;

pub use refresher::{DashboardRefresher, DashboardState, REFRESH_INTERVAL, RefreshOutcome, RefreshTask};
pub use stats::{
    DashboardSnapshot, DashboardStats, ReservationRow, VenuePerformance, percentage, recent_rows,
    venue_performance,
};
