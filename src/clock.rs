use crate::schedule::{Recurring, Step};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::time::Duration;

pub const DEFAULT_ZONE: Tz = chrono_tz::Asia::Manila;
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

const TIME_FORMAT: &str = "%I:%M:%S %p";
const DATE_FORMAT: &str = "%A, %B %-d, %Y";

pub trait TimeSource {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTime;

impl TimeSource for SystemTime {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockReading {
    pub time: String,
    pub date: String,
}

/// Formats an instant in `zone` the way the page shows it (`03:07:09 PM`,
/// `Saturday, October 18, 2025`).
pub fn read_clock(instant: DateTime<Utc>, zone: Tz) -> ClockReading {
    let local = instant.with_timezone(&zone);

    ClockReading {
        time: local.format(TIME_FORMAT).to_string(),
        date: local.format(DATE_FORMAT).to_string(),
    }
}

pub fn parse_zone(name: &str) -> Option<Tz> {
    name.trim().parse::<Tz>().ok()
}

/// Once-per-second clock poll for a fixed zone.
#[derive(Clone, Debug)]
pub struct ClockTicker<S> {
    source: S,
    zone: Tz,
}

impl<S: TimeSource> ClockTicker<S> {
    pub fn new(source: S, zone: Tz) -> Self {
        Self { source, zone }
    }
}

impl<S: TimeSource> Recurring for ClockTicker<S> {
    type Output = ClockReading;

    fn step(&mut self) -> Step<ClockReading> {
        Step::again(read_clock(self.source.now(), self.zone), TICK_INTERVAL)
    }
}
