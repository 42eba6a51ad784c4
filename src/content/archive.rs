//! Monthly archive keys

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;

use crate::helpers::month_year;
use crate::i18n::Locale;

/// Calendar month + year an article was published in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: &NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Localized archive heading
    pub fn label(&self, locale: Locale) -> String {
        month_year(self.year, self.month, locale)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(Locale::En))
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_label() {
        let key = MonthKey::of(&NaiveDate::from_ymd_opt(2024, 10, 20).unwrap());
        assert_eq!(key.to_string(), "October 2024");
        assert_eq!(key.label(Locale::Ru), "октябрь 2024 г.");
    }

    #[test]
    fn test_calendar_ordering() {
        let sep = MonthKey { year: 2024, month: 9 };
        let oct = MonthKey { year: 2024, month: 10 };
        let jan = MonthKey { year: 2025, month: 1 };
        assert!(sep < oct && oct < jan);
    }
}
