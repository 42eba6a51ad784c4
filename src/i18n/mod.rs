//! Internationalization (i18n) support for date labels

use std::str::FromStr;

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_RU: [&str; 12] = [
    "январь",
    "февраль",
    "март",
    "апрель",
    "май",
    "июнь",
    "июль",
    "август",
    "сентябрь",
    "октябрь",
    "ноябрь",
    "декабрь",
];

/// Genitive forms, used in "20 октября 2024 г."
const MONTHS_RU_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    /// Standalone month name (1-based month)
    pub fn month_name(self, month: u32) -> &'static str {
        let idx = month_index(month);
        match self {
            Self::En => MONTHS_EN[idx],
            Self::Ru => MONTHS_RU[idx],
        }
    }

    /// Month name as it appears inside a full date
    pub fn month_name_in_date(self, month: u32) -> &'static str {
        let idx = month_index(month);
        match self {
            Self::En => MONTHS_EN[idx],
            Self::Ru => MONTHS_RU_GENITIVE[idx],
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    /// Accepts bare codes and region variants such as `ru-RU` or `en_US`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Ok(Self::En),
            "ru" => Ok(Self::Ru),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}

fn month_index(month: u32) -> usize {
    (month.clamp(1, 12) - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(Locale::En.month_name(10), "October");
        assert_eq!(Locale::Ru.month_name(10), "октябрь");
        assert_eq!(Locale::Ru.month_name_in_date(10), "октября");
        assert_eq!(Locale::En.month_name_in_date(1), "January");
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!("ru-RU".parse::<Locale>(), Ok(Locale::Ru));
        assert_eq!("en_US".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::En));
        assert!("de".parse::<Locale>().is_err());
    }
}
