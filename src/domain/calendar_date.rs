use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// Anything that falls on a single calendar day.
///
/// Zoned timestamps resolve to the day in their own timezone, so a date built
/// as midnight in Brussels stays on that day when serialized.
pub trait CalendarDate {
    fn calendar_date(&self) -> NaiveDate;

    /// `YYYY-MM-DD`, the format the gateway expects for date parameters.
    fn to_gateway_format(&self) -> String {
        self.calendar_date().format("%Y-%m-%d").to_string()
    }
}

impl CalendarDate for NaiveDate {
    fn calendar_date(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDate for NaiveDateTime {
    fn calendar_date(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDate for DateTime<Tz> {
    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }
}
