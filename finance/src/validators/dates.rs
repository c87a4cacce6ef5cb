use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use shared::utils::brazilian_format;

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

// Tried after RFC 3339, with a trailing `Z` rewritten as `+00:00`.
const ZONED_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z", "%Y-%m-%d %H:%M:%S%.f%:z"];

/// A parsed date: either a fixed instant or a wall-clock time with no zone,
/// which is read in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInstant {
    Zoned(DateTime<Utc>),
    Local(NaiveDateTime),
}

impl DateInstant {
    fn is_after_now(&self) -> bool {
        match self {
            DateInstant::Zoned(dt) => *dt > Utc::now(),
            DateInstant::Local(dt) => *dt > Local::now().naive_local(),
        }
    }

    fn is_before_now(&self) -> bool {
        match self {
            DateInstant::Zoned(dt) => *dt < Utc::now(),
            DateInstant::Local(dt) => *dt < Local::now().naive_local(),
        }
    }
}

/// Values that can be read as a calendar instant.
pub trait DateLike {
    fn to_date_instant(&self) -> Option<DateInstant>;
}

fn parse_zoned(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    let normalized = match s.strip_suffix(|c: char| c.eq_ignore_ascii_case(&'Z')) {
        Some(rest) => format!("{rest}+00:00"),
        None => s.to_string(),
    };
    ZONED_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&normalized, fmt).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

impl DateLike for str {
    fn to_date_instant(&self) -> Option<DateInstant> {
        let s = self.trim();
        if let Some(dt) = parse_zoned(s) {
            return Some(DateInstant::Zoned(dt));
        }
        if let Some(dt) = DATE_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        {
            return Some(DateInstant::Local(dt));
        }
        // Date-only forms are taken at local midnight
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .or_else(|| brazilian_format::parse_date(s).ok())
            .map(|date| DateInstant::Local(date.and_time(NaiveTime::MIN)))
    }
}

impl DateLike for String {
    fn to_date_instant(&self) -> Option<DateInstant> {
        self.as_str().to_date_instant()
    }
}

impl DateLike for NaiveDate {
    fn to_date_instant(&self) -> Option<DateInstant> {
        Some(DateInstant::Local(self.and_time(NaiveTime::MIN)))
    }
}

impl DateLike for NaiveDateTime {
    fn to_date_instant(&self) -> Option<DateInstant> {
        Some(DateInstant::Local(*self))
    }
}

impl<Tz: TimeZone> DateLike for DateTime<Tz> {
    fn to_date_instant(&self) -> Option<DateInstant> {
        Some(DateInstant::Zoned(self.with_timezone(&Utc)))
    }
}

pub fn validate_date<T: DateLike + ?Sized>(value: &T) -> bool {
    value.to_date_instant().is_some()
}

/// A valid date strictly after the current instant.
pub fn validate_future_date<T: DateLike + ?Sized>(value: &T) -> bool {
    value.to_date_instant().is_some_and(|dt| dt.is_after_now())
}

/// A valid date strictly before the current instant.
pub fn validate_past_date<T: DateLike + ?Sized>(value: &T) -> bool {
    value.to_date_instant().is_some_and(|dt| dt.is_before_now())
}
