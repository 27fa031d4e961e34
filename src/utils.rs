use chrono::{DateTime, Datelike as _, FixedOffset, Local, NaiveDate, TimeZone as _, Timelike as _, Weekday};

pub fn get_today_range(time: &DateTime<FixedOffset>) -> (DateTime<FixedOffset>, DateTime<FixedOffset>) {
    let start_of_day = time.with_hour(0).unwrap().with_minute(0).unwrap().with_second(0).unwrap();
    let end_of_day = time.with_hour(23).unwrap().with_minute(59).unwrap().with_second(59).unwrap();

    (start_of_day, end_of_day)
}

/// Timestamp bounds covering `[start_date 00:00:00, end_date 23:59:59]` in local time,
/// for matching timestamp columns against a date-granular period.
pub fn period_range(start_date: NaiveDate, end_date: NaiveDate) -> (DateTime<FixedOffset>, DateTime<FixedOffset>) {
    let start = Local
        .from_local_datetime(&start_date.and_hms_opt(0, 0, 0).unwrap())
        .unwrap()
        .fixed_offset();
    let end = Local
        .from_local_datetime(&end_date.and_hms_opt(23, 59, 59).unwrap())
        .unwrap()
        .fixed_offset();

    (start, end)
}

/// Inclusive day count of a period, both bounds counted.
pub fn period_day_count(start_date: NaiveDate, end_date: NaiveDate) -> i64 {
    (end_date - start_date).num_days() + 1
}

pub fn is_weekday(date: NaiveDate) -> bool {
    date.weekday() != Weekday::Sat && date.weekday() != Weekday::Sun
}

pub fn page_count(total_items: u64, page_size: u64) -> u64 {
    total_items.div_ceil(page_size)
}
