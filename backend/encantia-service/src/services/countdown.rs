/// Event countdown arithmetic
///
/// Uses fixed 365-day years and 30-day months over the millisecond delta,
/// matching what the events page has always displayed. An event already
/// under way clamps to all zeros.
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
const MS_PER_MONTH: i64 = 30 * MS_PER_DAY;
const MS_PER_YEAR: i64 = 365 * MS_PER_DAY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct TimeRemaining {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

pub fn time_remaining(start: DateTime<Utc>, now: DateTime<Utc>) -> TimeRemaining {
    let total = (start - now).num_milliseconds().max(0);

    TimeRemaining {
        years: total / MS_PER_YEAR,
        months: (total % MS_PER_YEAR) / MS_PER_MONTH,
        days: (total % MS_PER_MONTH) / MS_PER_DAY,
        hours: (total % MS_PER_DAY) / MS_PER_HOUR,
        minutes: (total % MS_PER_HOUR) / MS_PER_MINUTE,
        seconds: (total % MS_PER_MINUTE) / MS_PER_SECOND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn counts_down_future_event() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        let start = at("2025-03-02T01:02:03Z");
        let remaining = time_remaining(start, now);
        assert_eq!(
            remaining,
            TimeRemaining {
                years: 0,
                months: 0,
                days: 1,
                hours: 1,
                minutes: 2,
                seconds: 3
            }
        );
    }

    #[test]
    fn year_uses_fixed_365_days() {
        let now = at("2025-01-01T00:00:00Z");
        let start = at("2026-01-01T00:00:00Z");
        let remaining = time_remaining(start, now);
        assert_eq!(remaining.years, 1);
        assert_eq!(remaining.months, 0);
        assert_eq!(remaining.days, 0);
    }

    #[test]
    fn elapsed_event_clamps_to_zero() {
        let now = at("2025-06-01T00:00:00Z");
        let start = at("2025-01-01T00:00:00Z");
        assert_eq!(
            time_remaining(start, now),
            TimeRemaining {
                years: 0,
                months: 0,
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 0
            }
        );
    }
}
