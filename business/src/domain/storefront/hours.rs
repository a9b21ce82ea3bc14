use chrono::{NaiveTime, Timelike, Weekday};

use super::errors::BusinessError;

const TIME_FORMAT: &str = "%H:%M";

/// Opening window for a single day, with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    open: NaiveTime,
    close: NaiveTime,
}

impl OpeningHours {
    pub fn new(open: NaiveTime, close: NaiveTime) -> Self {
        Self { open, close }
    }

    /// Parses `HH:MM` strings as stored by the admin hours form.
    pub fn parse(open: &str, close: &str) -> Result<Self, BusinessError> {
        let open = NaiveTime::parse_from_str(open.trim(), TIME_FORMAT)
            .map_err(|_| BusinessError::InvalidHours)?;
        let close = NaiveTime::parse_from_str(close.trim(), TIME_FORMAT)
            .map_err(|_| BusinessError::InvalidHours)?;
        Ok(Self { open, close })
    }

    pub fn open(&self) -> NaiveTime {
        self.open
    }

    pub fn close(&self) -> NaiveTime {
        self.close
    }

    /// Both bounds are inclusive. Seconds are ignored.
    pub fn contains(&self, time: NaiveTime) -> bool {
        let now = minutes_of_day(time);
        now >= minutes_of_day(self.open) && now <= minutes_of_day(self.close)
    }
}

fn minutes_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Weekly schedule, indexed from Sunday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessHours {
    days: [Option<OpeningHours>; 7],
}

impl BusinessHours {
    pub fn with_day(mut self, day: Weekday, hours: OpeningHours) -> Self {
        self.set(day, Some(hours));
        self
    }

    pub fn set(&mut self, day: Weekday, hours: Option<OpeningHours>) {
        self.days[day.num_days_from_sunday() as usize] = hours;
    }

    pub fn get(&self, day: Weekday) -> Option<&OpeningHours> {
        self.days[day.num_days_from_sunday() as usize].as_ref()
    }

    /// Returns true if at least one day has hours configured.
    pub fn is_configured(&self) -> bool {
        self.days.iter().any(Option::is_some)
    }

    /// Determines whether the business takes orders at the given local time.
    ///
    /// Business rules:
    /// - No hours configured for any day -> open
    /// - No hours configured for this day -> closed
    /// - Otherwise open between `open` and `close`, inclusive
    pub fn is_open_at(&self, day: Weekday, time: NaiveTime) -> bool {
        if !self.is_configured() {
            return true;
        }

        match self.get(day) {
            Some(hours) => hours.contains(time),
            None => false,
        }
    }
}
