//! Date-range enumeration over the bucket's key hierarchy.
//!
//! GOES products are partitioned by `{product}/{year}/{day-of-year}/{hour}/`,
//! so a calendar date range expands into one key prefix per hour of every day
//! in the range.

use chrono::{Datelike, NaiveDate};

/// Hours in one day-of-year partition.
const HOURS_PER_DAY: u32 = 24;

/// An inclusive-start, exclusive-end range of calendar dates.
///
/// Iteration covers `[start, end)`. A range where `end <= start` is simply
/// empty; it is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First date in the range (inclusive).
    pub start: NaiveDate,
    /// Date the range stops before (exclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Enumerates every `(year, day-of-year, hour)` slot in the range.
    ///
    /// Days come out chronologically and hours 0 through 23 within each day.
    /// The iterator is a pure function of the range; nothing is cached or
    /// mutated.
    pub fn hour_slots(&self) -> impl Iterator<Item = HourSlot> {
        let total_days = (self.end - self.start).num_days().max(0) as usize;

        self.start.iter_days().take(total_days).flat_map(|day| {
            let year = day.year();
            let day_of_year = day.ordinal();
            (0..HOURS_PER_DAY).map(move |hour| HourSlot {
                year,
                day_of_year,
                hour,
            })
        })
    }
}

/// One hour within one day-of-year, the unit the bucket is partitioned by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourSlot {
    /// Calendar year.
    pub year: i32,
    /// Day within the year, 1 through 366.
    pub day_of_year: u32,
    /// Hour of the day, 0 through 23.
    pub hour: u32,
}

impl HourSlot {
    /// Builds the remote key prefix for this slot.
    ///
    /// The day-of-year is zero-padded to three digits and the hour to two,
    /// matching the bucket's naming convention, e.g.
    /// `ABI-L2-LSAC/2021/294/05/`.
    pub fn key_prefix(&self, base: &str) -> String {
        format!(
            "{}/{}/{:03}/{:02}/",
            base, self.year, self.day_of_year, self.hour
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_end_date_is_exclusive() {
        let range = DateRange {
            start: date(2021, 10, 21),
            end: date(2021, 10, 23),
        };

        let days: Vec<u32> = range
            .hour_slots()
            .filter(|slot| slot.hour == 0)
            .map(|slot| slot.day_of_year)
            .collect();

        // Oct 21 and Oct 22 of 2021, never Oct 23
        assert_eq!(days, vec![294, 295]);
        assert_eq!(range.hour_slots().count(), 2 * 24);
    }

    #[test]
    fn test_hours_are_zero_padded() {
        let range = DateRange {
            start: date(2021, 10, 21),
            end: date(2021, 10, 22),
        };

        let prefixes: Vec<String> = range
            .hour_slots()
            .map(|slot| slot.key_prefix("ABI-L2-LSAC"))
            .collect();

        assert_eq!(prefixes.len(), 24);
        assert_eq!(prefixes[0], "ABI-L2-LSAC/2021/294/00/");
        assert_eq!(prefixes[5], "ABI-L2-LSAC/2021/294/05/");
        assert_eq!(prefixes[23], "ABI-L2-LSAC/2021/294/23/");

        for prefix in &prefixes {
            let hour = prefix.trim_end_matches('/').rsplit('/').next().unwrap();
            assert_eq!(hour.len(), 2);
        }
    }

    #[test]
    fn test_empty_when_end_equals_start() {
        let range = DateRange {
            start: date(2021, 10, 21),
            end: date(2021, 10, 21),
        };
        assert_eq!(range.hour_slots().count(), 0);
    }

    #[test]
    fn test_empty_when_end_precedes_start() {
        let range = DateRange {
            start: date(2022, 6, 16),
            end: date(2021, 10, 21),
        };
        assert_eq!(range.hour_slots().count(), 0);
    }

    #[test]
    fn test_prefix_format() {
        let slot = HourSlot {
            year: 2021,
            day_of_year: 294,
            hour: 5,
        };
        assert_eq!(slot.key_prefix("ABI-L2-LSAC"), "ABI-L2-LSAC/2021/294/05/");
    }

    #[test]
    fn test_day_of_year_resets_across_year_boundary() {
        let range = DateRange {
            start: date(2021, 12, 31),
            end: date(2022, 1, 2),
        };

        let days: Vec<(i32, u32)> = range
            .hour_slots()
            .filter(|slot| slot.hour == 0)
            .map(|slot| (slot.year, slot.day_of_year))
            .collect();

        assert_eq!(days, vec![(2021, 365), (2022, 1)]);
    }
}
