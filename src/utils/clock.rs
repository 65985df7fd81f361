use chrono::{Local, NaiveDateTime, Timelike};

/// Source of "now" for record timestamps. Lets tests pin the wall clock.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    /// Current time truncated to the minute, the resolution of the log files.
    fn now_minute(&self) -> NaiveDateTime {
        let now = self.now();
        now.with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(now)
    }
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
