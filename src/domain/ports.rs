use chrono::{NaiveDateTime, Timelike};

/// Source of local wall-clock time. Injected so the status refresher can be
/// driven by a fake clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn local_hour(&self) -> u32 {
        self.now().hour()
    }
}
