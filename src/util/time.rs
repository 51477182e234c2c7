//! Bulletin calendar arithmetic.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Days of news history shown in the public feed.
const NEWS_FEED_DAYS: u64 = 14;

/// The Sunday of the current bulletin week. A Sunday maps to itself.
pub fn upcoming_sunday(today: NaiveDate) -> NaiveDate {
    let offset = match today.weekday() {
        Weekday::Sun => 0,
        weekday => 7 - weekday.num_days_from_sunday() as u64,
    };

    today + Days::new(offset)
}

/// Oldest bulletin date still shown in the news feed.
pub fn news_cutoff(sunday: NaiveDate) -> NaiveDate {
    sunday - Days::new(NEWS_FEED_DAYS)
}

/// Friday-to-Friday window bracketing a service Sunday, used by the
/// printable bulletin.
pub fn bulletin_window(sunday: NaiveDate) -> (NaiveDate, NaiveDate) {
    (sunday - Days::new(2), sunday + Days::new(5))
}

/// The service Sunday through the following Saturday, used for the
/// printed bulletin's celebrations section.
pub fn celebration_week(sunday: NaiveDate) -> (NaiveDate, NaiveDate) {
    (sunday, sunday + Days::new(6))
}

/// The month after the given date's month.
pub fn next_month(date: NaiveDate) -> u32 {
    if date.month() == 12 {
        1
    } else {
        date.month() + 1
    }
}
