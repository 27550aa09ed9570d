use crate::domain::ports::Clock;
use crate::utils::error::Result;
use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

/// Half-open range of local hours during which an office counts as open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusWindow {
    pub open_hour: u32,
    pub close_hour: u32,
}

impl StatusWindow {
    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.open_hour && hour < self.close_hour
    }
}

/// 9:00 to 19:00, shared by every office.
///
/// The per-office `hours` text (e.g. Saturday mornings) is display-only and is
/// not consulted here, so the badge can disagree with the published hours.
pub const BUSINESS_HOURS: StatusWindow = StatusWindow {
    open_hour: 9,
    close_hour: 19,
};

/// Whether offices are open at `now_local_hour` (0-23). Hours past 23 are closed.
pub fn compute_open_status(now_local_hour: u32) -> bool {
    BUSINESS_HOURS.contains(now_local_hour)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSnapshot {
    pub is_open: bool,
    pub local_hour: u32,
    pub checked_at: NaiveDateTime,
    /// Number of refreshes before this one.
    pub sequence: u64,
}

impl StatusSnapshot {
    pub fn at(checked_at: NaiveDateTime, sequence: u64) -> Self {
        let local_hour = checked_at.hour();
        Self {
            is_open: compute_open_status(local_hour),
            local_hour,
            checked_at,
            sequence,
        }
    }

    pub fn from_clock(clock: &dyn Clock, sequence: u64) -> Self {
        Self::at(clock.now(), sequence)
    }

    /// Badge text.
    pub fn label(&self) -> &'static str {
        if self.is_open {
            "ACTIVE"
        } else {
            "OFFLINE"
        }
    }

    /// One JSON line, as printed by `--watch --json`.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_window_boundaries() {
        assert!(compute_open_status(9));
        assert!(compute_open_status(18));
        assert!(!compute_open_status(19));
        assert!(!compute_open_status(8));
    }

    #[test]
    fn test_every_hour_of_the_day() {
        for hour in 0..24 {
            assert_eq!(compute_open_status(hour), (9..=18).contains(&hour), "hour {}", hour);
        }
        assert!(!compute_open_status(24));
    }

    #[test]
    fn test_snapshot_label() {
        let morning = NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let snapshot = StatusSnapshot::at(morning, 0);
        assert!(snapshot.is_open);
        assert_eq!(snapshot.local_hour, 9);
        assert_eq!(snapshot.label(), "ACTIVE");

        let late = morning.with_hour(22).unwrap();
        assert_eq!(StatusSnapshot::at(late, 1).label(), "OFFLINE");
    }

    #[test]
    fn test_snapshot_to_json() {
        let noon = NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let json = StatusSnapshot::at(noon, 3).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["is_open"], true);
        assert_eq!(value["local_hour"], 12);
        assert_eq!(value["sequence"], 3);
        assert_eq!(value["checked_at"], "2024-03-04T12:00:00");
        assert!(!json.contains('\n'));
    }
}
