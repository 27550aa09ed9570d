use crate::domain::ports::Clock;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Reads the host's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to. Counts how often it is read.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<NaiveDateTime>,
    reads: AtomicUsize,
}

impl ManualClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
            reads: AtomicUsize::new(0),
        }
    }

    /// `hour:minute` on an arbitrary fixed day. Out-of-range values clamp to 23:59.
    pub fn at(hour: u32, minute: u32) -> Self {
        Self::new(fixed_day().and_time(time_of_day(hour, minute)))
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.lock() = now;
    }

    pub fn set_time(&self, hour: u32, minute: u32) {
        let mut now = self.lock();
        *now = now.date().and_time(time_of_day(hour, minute));
    }

    pub fn advance(&self, by: TimeDelta) {
        let mut now = self.lock();
        *now += by;
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, NaiveDateTime> {
        // the guarded value is plain data, a poisoned lock still holds a valid time
        self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.reads.fetch_add(1, Ordering::SeqCst);
        *self.lock()
    }
}

fn fixed_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default()
}

fn time_of_day(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour.min(23), minute.min(59), 0).unwrap_or_default()
}
