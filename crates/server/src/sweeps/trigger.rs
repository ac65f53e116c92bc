//! When a sweep fires next.

use time::{Date, Duration, OffsetDateTime, Time};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Once a month on `day` at `hour:minute` UTC. `day` must exist in every month (1..=28).
    Monthly { day: u8, hour: u8, minute: u8 },
    /// A fixed pause between the end of one run and the start of the next.
    Interval(std::time::Duration),
}

impl Trigger {
    /// First fire instant strictly after `now`, or `None` if the trigger is malformed.
    pub fn next_fire_after(&self, now: OffsetDateTime) -> Option<OffsetDateTime> {
        match *self {
            Trigger::Interval(period) => {
                let period = Duration::try_from(period).ok()?;
                Some(now + period)
            }
            Trigger::Monthly { day, hour, minute } => {
                let now = now.to_offset(time::UtcOffset::UTC);
                let at = Time::from_hms(hour, minute, 0).ok()?;
                let this_month =
                    Date::from_calendar_date(now.year(), now.month(), day).ok()?;
                let candidate = this_month.with_time(at).assume_utc();
                if candidate > now {
                    return Some(candidate);
                }
                let (year, month) = match now.month() {
                    time::Month::December => (now.year() + 1, time::Month::January),
                    m => (now.year(), m.next()),
                };
                let next_month = Date::from_calendar_date(year, month, day).ok()?;
                Some(next_month.with_time(at).assume_utc())
            }
        }
    }

    /// How long to sleep from `now` until the next fire.
    pub fn delay_from(&self, now: OffsetDateTime) -> Option<std::time::Duration> {
        let next = self.next_fire_after(now)?;
        Some(std::time::Duration::try_from(next - now).unwrap_or_default())
    }
}
