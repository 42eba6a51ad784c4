//! Date helper functions

use chrono::{Datelike, NaiveDate};

use crate::i18n::Locale;

/// Format a date in full form
///
/// # Examples
/// ```ignore
/// full_date(&date, Locale::En) // -> "October 20, 2024"
/// full_date(&date, Locale::Ru) // -> "20 октября 2024 г."
/// ```
pub fn full_date(date: &NaiveDate, locale: Locale) -> String {
    let month = locale.month_name_in_date(date.month());
    match locale {
        Locale::En => format!("{} {}, {}", month, date.day(), date.year()),
        Locale::Ru => format!("{} {} {} г.", date.day(), month, date.year()),
    }
}

/// Day and month only, as shown next to archive entries
pub fn day_month(date: &NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::En => date.format("%m/%d").to_string(),
        Locale::Ru => date.format("%d.%m").to_string(),
    }
}

/// Month heading such as "October 2024" or "октябрь 2024 г."
pub fn month_year(year: i32, month: u32, locale: Locale) -> String {
    let name = locale.month_name(month);
    match locale {
        Locale::En => format!("{} {}", name, year),
        Locale::Ru => format!("{} {} г.", name, year),
    }
}
