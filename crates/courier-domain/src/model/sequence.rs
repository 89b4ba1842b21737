//! Daily document counter

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Last number issued on a given date.
///
/// Asking for a number on a different date restarts the count at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCounter {
    pub date: NaiveDate,
    pub last: u32,
}

impl DailyCounter {
    pub fn new(date: NaiveDate) -> Self {
        Self { date, last: 0 }
    }

    /// Issue the next number for `date`.
    ///
    /// Returns `None` and leaves the counter untouched once the day's
    /// numbers are exhausted.
    pub fn advance(&mut self, date: NaiveDate) -> Option<u32> {
        let last = if self.date == date { self.last } else { 0 };
        let next = last.checked_add(1)?;
        *self = Self { date, last: next };
        Some(next)
    }

    /// Last number issued on `date`, 0 if none
    pub fn current(&self, date: NaiveDate) -> u32 {
        if self.date == date {
            self.last
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn test_advance_same_day() {
        let mut counter = DailyCounter::new(day(19));
        assert_eq!(counter.advance(day(19)), Some(1));
        assert_eq!(counter.advance(day(19)), Some(2));
        assert_eq!(counter.current(day(19)), 2);
    }

    #[test]
    fn test_resets_on_new_day() {
        let mut counter = DailyCounter::new(day(19));
        counter.advance(day(19));
        counter.advance(day(19));
        assert_eq!(counter.current(day(20)), 0);
        assert_eq!(counter.advance(day(20)), Some(1));
        assert_eq!(counter.date, day(20));
    }

    #[test]
    fn test_exhausted_counter_is_unchanged() {
        let mut counter = DailyCounter { date: day(19), last: u32::MAX };
        assert_eq!(counter.advance(day(19)), None);
        assert_eq!(counter.current(day(19)), u32::MAX);

        // A new day still starts over
        assert_eq!(counter.advance(day(20)), Some(1));
    }
}
