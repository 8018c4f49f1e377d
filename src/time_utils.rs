// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for schedule date/time handling.
//!
//! Activities live on the host's local calendar: dates are plain
//! `NaiveDate`s and times of day are `NaiveTime`s serialized as `"HH:MM"`.

use chrono::{Days, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Wire format for times of day.
pub const TIME_OF_DAY_FORMAT: &str = "%H:%M";

/// The host's current local wall-clock time, without timezone.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Compute the instant a reminder becomes due: activity start minus lead.
pub fn trigger_time(date: NaiveDate, start_time: NaiveTime, lead_minutes: u32) -> NaiveDateTime {
    date.and_time(start_time) - Duration::minutes(i64::from(lead_minutes))
}

/// The 7 calendar dates of the week containing `anchor`, Sunday first.
pub fn week_of(anchor: NaiveDate) -> [NaiveDate; 7] {
    let first = anchor.week(Weekday::Sun).first_day();
    std::array::from_fn(|i| first + Days::new(i as u64))
}

/// Serde adapter for `NaiveTime` as `"HH:MM"`.
///
/// Deserialization also accepts `"HH:MM:SS"` so clients that send full
/// clock times keep working; seconds are truncated on output.
pub mod time_of_day {
    use super::TIME_OF_DAY_FORMAT;
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(TIME_OF_DAY_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, TIME_OF_DAY_FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_trigger_time_subtracts_lead() {
        let trigger = trigger_time(date(2024, 6, 1), time(7, 0), 15);
        assert_eq!(trigger, date(2024, 6, 1).and_time(time(6, 45)));
    }

    #[test]
    fn test_trigger_time_crosses_midnight() {
        let trigger = trigger_time(date(2024, 6, 1), time(0, 10), 30);
        assert_eq!(trigger, date(2024, 5, 31).and_time(time(23, 40)));
    }

    #[test]
    fn test_week_of_starts_sunday_and_contains_anchor() {
        // 2024-06-05 is a Wednesday; its week runs Sun 06-02 .. Sat 06-08.
        let week = week_of(date(2024, 6, 5));
        assert_eq!(week[0], date(2024, 6, 2));
        assert_eq!(week[6], date(2024, 6, 8));
        assert!(week.contains(&date(2024, 6, 5)));
    }

    #[test]
    fn test_week_of_anchor_on_sunday() {
        let week = week_of(date(2024, 6, 2));
        assert_eq!(week[0], date(2024, 6, 2));
    }

    #[test]
    fn test_time_of_day_round_trip() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrapper {
            #[serde(with = "time_of_day")]
            t: NaiveTime,
        }

        let parsed: Wrapper = serde_json::from_str(r#"{"t":"07:30"}"#).unwrap();
        assert_eq!(parsed.t, time(7, 30));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#"{"t":"07:30"}"#);

        let with_seconds: Wrapper = serde_json::from_str(r#"{"t":"07:30:15"}"#).unwrap();
        assert_eq!(with_seconds.t, NaiveTime::from_hms_opt(7, 30, 15).unwrap());
    }
}
