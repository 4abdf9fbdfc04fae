use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

// `utc_offset_minutes` is positive when local time runs behind UTC, the
// convention the lunar julian-day arithmetic expects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moment {
    pub epoch_millis: i64,
    pub utc_offset_minutes: i32,
    pub hour: u8,
    pub minute: u8,
    pub day: u8,
    pub month_index: u8,
    pub weekday_index: u8,
}

impl Moment {
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self {
            epoch_millis: datetime.timestamp_millis(),
            utc_offset_minutes: -datetime.offset().fix().local_minus_utc() / 60,
            hour: datetime.hour() as u8,
            minute: datetime.minute() as u8,
            day: datetime.day() as u8,
            month_index: datetime.month0() as u8,
            weekday_index: datetime.weekday().num_days_from_sunday() as u8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockParts {
    pub hour: String,
    pub minute: String,
    pub is_pm: bool,
}

#[must_use]
pub fn format_clock(hour: u8, minute: u8, twelve_hour: bool) -> ClockParts {
    let hour_text = if twelve_hour {
        let wrapped = hour % 12;
        let wrapped = if wrapped == 0 { 12 } else { wrapped };
        wrapped.to_string()
    } else {
        format!("{hour:02}")
    };

    ClockParts {
        hour: hour_text,
        minute: format!("{minute:02}"),
        is_pm: hour >= 12,
    }
}

#[must_use]
pub fn format_date(moment: &Moment) -> String {
    let day_name = DAY_NAMES
        .get(usize::from(moment.weekday_index))
        .copied()
        .unwrap_or("");
    let month = MONTH_NAMES
        .get(usize::from(moment.month_index))
        .copied()
        .unwrap_or("");
    format!("{day_name} {month} {}", moment.day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moment(value: &str) -> Moment {
        Moment::from_datetime(&DateTime::parse_from_rfc3339(value).expect("valid fixture"))
    }

    #[test]
    fn twelve_hour_mode_wraps_and_skips_padding() {
        let parts = format_clock(0, 5, true);
        assert_eq!(parts.hour, "12");
        assert_eq!(parts.minute, "05");
        assert!(!parts.is_pm);

        let parts = format_clock(13, 7, true);
        assert_eq!(parts.hour, "1");
        assert_eq!(parts.minute, "07");
        assert!(parts.is_pm);

        assert_eq!(format_clock(12, 0, true).hour, "12");
    }

    #[test]
    fn twenty_four_hour_mode_zero_pads() {
        let parts = format_clock(9, 30, false);
        assert_eq!(parts.hour, "09");
        assert_eq!(parts.minute, "30");
        assert!(!parts.is_pm);

        assert_eq!(format_clock(0, 0, false).hour, "00");
        assert_eq!(format_clock(23, 59, false).hour, "23");
    }

    #[test]
    fn meridiem_flips_at_noon() {
        assert!(!format_clock(11, 59, true).is_pm);
        assert!(format_clock(12, 0, true).is_pm);
    }

    #[test]
    fn date_uses_short_english_names() {
        assert_eq!(format_date(&moment("2026-08-07T09:00:00Z")), "Fri Aug 7");
        assert_eq!(format_date(&moment("1999-12-25T09:00:00Z")), "Sat Dec 25");
    }

    #[test]
    fn date_with_out_of_range_indices_stays_total() {
        let mut broken = moment("2026-08-07T09:00:00Z");
        broken.month_index = 13;
        broken.weekday_index = 9;
        assert_eq!(format_date(&broken), "  7");
    }

    #[test]
    fn moment_captures_local_fields_and_offset() {
        let eastern = moment("2026-08-07T14:05:00-04:00");
        assert_eq!(eastern.hour, 14);
        assert_eq!(eastern.minute, 5);
        assert_eq!(eastern.day, 7);
        assert_eq!(eastern.month_index, 7);
        assert_eq!(eastern.weekday_index, 5);
        assert_eq!(eastern.utc_offset_minutes, 240);

        let utc = moment("2026-08-07T18:05:00Z");
        assert_eq!(utc.epoch_millis, eastern.epoch_millis);
        assert_eq!(utc.utc_offset_minutes, 0);
    }
}
