use chrono::{Datelike, NaiveDate, Utc};

/// A resolved (year, month) value. The day is implicitly the 1st.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarPoint {
    pub year: i32,
    pub month: u32,
}

impl CalendarPoint {
    /// Returns `None` unless `year` is in 1..=9999 and `month` in 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if !(1..=9999).contains(&year) || !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Whole months from `self` to `end`, clamped at zero for reversed ranges.
    pub fn months_until(&self, end: &CalendarPoint) -> u32 {
        let delta = (end.year - self.year) * 12 + (end.month as i32 - self.month as i32);
        delta.max(0) as u32
    }
}

/// Source of "today" for open-ended ranges.
pub trait Clock: Send + Sync {
    fn today(&self) -> CalendarPoint;
}

/// Reads the wall clock (UTC).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarPoint {
        CalendarPoint::from_date(Utc::now().date_naive())
    }
}

/// Always reports the same point. Used to pin "current" in tests.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CalendarPoint);

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> CalendarPoint {
        self.0
    }
}
