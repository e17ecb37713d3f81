//! Dashboard aggregation
//!
//! Pure functions over the admin reservation list. Only `confirmed`
//! reservations count as occupied; `pending` and `cancelled` never do,
//! whether or not they lie in the past.

use chrono::FixedOffset;
use serde::Serialize;
use shared::models::Reservation;

/// Rows shown in the recent reservations table
pub const RECENT_ROWS: usize = 10;
/// Venues shown in the performance ranking
pub const TOP_VENUES: usize = 4;

/// UTC+05:30
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// `round(part / whole * 100)`, 0 when `whole` is 0
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

/// Headline figures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_reservations: usize,
    pub confirmed_bookings: usize,
    /// Confirmed share of all reservations, percent
    pub occupancy_rate: u32,
    pub avg_party_size: u32,
}

impl DashboardStats {
    pub fn from_reservations(reservations: &[Reservation]) -> Self {
        let total = reservations.len();
        let confirmed = reservations.iter().filter(|r| r.is_confirmed()).count();
        let avg_party_size = if total == 0 {
            0
        } else {
            let seats: u64 = reservations.iter().map(|r| u64::from(r.party_size)).sum();
            (seats as f64 / total as f64).round() as u32
        };

        Self {
            total_reservations: total,
            confirmed_bookings: confirmed,
            occupancy_rate: percentage(confirmed, total),
            avg_party_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenuePerformance {
    pub venue_name: String,
    pub total: usize,
    pub confirmed: usize,
    /// Confirmation rate, percent
    pub rate: u32,
}

/// Top venues by confirmation rate.
///
/// Groups by venue name in first-appearance order; ties keep that order.
pub fn venue_performance(reservations: &[Reservation]) -> Vec<VenuePerformance> {
    let mut groups: Vec<VenuePerformance> = Vec::new();
    for r in reservations {
        let entry = match groups.iter().position(|g| g.venue_name == r.venue_name) {
            Some(i) => &mut groups[i],
            None => {
                groups.push(VenuePerformance {
                    venue_name: r.venue_name.clone(),
                    total: 0,
                    confirmed: 0,
                    rate: 0,
                });
                let last = groups.len() - 1;
                &mut groups[last]
            }
        };
        entry.total += 1;
        if r.is_confirmed() {
            entry.confirmed += 1;
        }
    }

    for g in &mut groups {
        g.rate = percentage(g.confirmed, g.total);
    }
    // sort_by is stable
    groups.sort_by(|a, b| b.rate.cmp(&a.rate));
    groups.truncate(TOP_VENUES);
    groups
}

/// One line of the recent reservations table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationRow {
    pub id: String,
    pub venue_name: String,
    /// `d/m/yyyy` in IST, or the raw string when unparseable
    pub date: String,
    /// `hh:mm am|pm` in IST, empty when unparseable
    pub time: String,
    pub party_size: u32,
    pub status: &'static str,
}

impl From<&Reservation> for ReservationRow {
    fn from(r: &Reservation) -> Self {
        let (date, time) = match (r.starts_at(), FixedOffset::east_opt(IST_OFFSET_SECS)) {
            (Some(start), Some(ist)) => {
                let local = start.with_timezone(&ist);
                (
                    local.format("%-d/%-m/%Y").to_string(),
                    local.format("%I:%M %P").to_string(),
                )
            }
            _ => (r.datetime.clone(), String::new()),
        };

        Self {
            id: r.id.clone(),
            venue_name: r.venue_name.clone(),
            date,
            time,
            party_size: r.party_size,
            status: r.status.label(),
        }
    }
}

/// First [`RECENT_ROWS`] reservations in list order
pub fn recent_rows(reservations: &[Reservation]) -> Vec<ReservationRow> {
    reservations
        .iter()
        .take(RECENT_ROWS)
        .map(ReservationRow::from)
        .collect()
}

/// Everything the dashboard renders, recomputed per refresh
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    pub top_venues: Vec<VenuePerformance>,
    pub recent: Vec<ReservationRow>,
}

impl DashboardSnapshot {
    pub fn from_reservations(reservations: &[Reservation]) -> Self {
        Self {
            stats: DashboardStats::from_reservations(reservations),
            top_venues: venue_performance(reservations),
            recent: recent_rows(reservations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::reservation;
    use shared::models::ReservationStatus::{Cancelled, Confirmed, Pending};

    #[test]
    fn test_empty_list_is_all_zero() {
        assert_eq!(DashboardStats::from_reservations(&[]), DashboardStats::default());
        assert!(venue_performance(&[]).is_empty());
        assert!(recent_rows(&[]).is_empty());
    }

    #[test]
    fn test_headline_figures() {
        let list = vec![
            reservation("r1", "A", "2025-12-01T19:00:00", Confirmed, 2),
            reservation("r2", "A", "2025-12-01T19:00:00", Pending, 3),
            reservation("r3", "B", "2025-12-01T19:00:00", Cancelled, 4),
        ];
        let stats = DashboardStats::from_reservations(&list);
        assert_eq!(stats.total_reservations, 3);
        assert_eq!(stats.confirmed_bookings, 1);
        assert_eq!(stats.occupancy_rate, 33);
        assert_eq!(stats.avg_party_size, 3);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(5, 0), 0);
        assert_eq!(percentage(4, 4), 100);
    }

    #[test]
    fn test_venue_ranking_is_stable_and_capped() {
        let list = vec![
            reservation("r1", "A", "x", Pending, 2),
            reservation("r2", "B", "x", Confirmed, 2),
            reservation("r3", "C", "x", Confirmed, 2),
            reservation("r4", "D", "x", Cancelled, 2),
            reservation("r5", "E", "x", Confirmed, 2),
            reservation("r6", "A", "x", Confirmed, 2),
        ];
        let ranking = venue_performance(&list);
        let names: Vec<_> = ranking.iter().map(|v| v.venue_name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "E", "A"]);
        assert_eq!(ranking[3].rate, 50);
        assert_eq!(ranking[3].total, 2);
    }

    #[test]
    fn test_rows_render_in_ist() {
        let list = vec![reservation("r1", "A", "2025-12-01T19:00:00", Confirmed, 2)];
        let rows = recent_rows(&list);
        assert_eq!(rows[0].date, "2/12/2025");
        assert_eq!(rows[0].time, "12:30 am");
        assert_eq!(rows[0].status, "Confirmed");
    }

    #[test]
    fn test_unparseable_datetime_is_shown_raw() {
        let row = ReservationRow::from(&reservation("r1", "A", "soon", Pending, 2));
        assert_eq!(row.date, "soon");
        assert!(row.time.is_empty());
        assert_eq!(row.status, "Pending");
    }

    #[test]
    fn test_recent_rows_capped_at_ten() {
        let list: Vec<_> = (0..15)
            .map(|i| reservation(&format!("r{i}"), "A", "2025-12-01T19:00:00", Confirmed, 2))
            .collect();
        let rows = recent_rows(&list);
        assert_eq!(rows.len(), RECENT_ROWS);
        assert_eq!(rows[0].id, "r0");
        assert_eq!(rows[9].id, "r9");
    }
}
