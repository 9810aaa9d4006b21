use chrono::{Datelike, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho",
    "Julho", "Agosto", "Setembro", "Outubro", "Novembro", "Dezembro",
];

/// Reporting period. `month` is zero-indexed (0 = January).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateSelection {
    pub month: u32,
    pub year: i32,
}

impl DateSelection {
    /// Builds a selection, carrying out-of-range months into the year
    /// (month 12 of 2024 is January 2025, month -1 is December of the year before).
    pub fn new(year: i32, month: i32) -> Self {
        let (year, month) = normalize(year, month);
        Self { month, year }
    }

    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            month: today.month0(),
            year: today.year(),
        }
    }

    pub fn next_month(self) -> Self {
        Self::new(self.year, self.month as i32 + 1)
    }

    pub fn previous_month(self) -> Self {
        Self::new(self.year, self.month as i32 - 1)
    }

    pub fn next_year(self) -> Self {
        Self { year: self.year.saturating_add(1), ..self }
    }

    pub fn previous_year(self) -> Self {
        Self { year: self.year.saturating_sub(1), ..self }
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }

    pub fn business_days(&self) -> u32 {
        business_days(self.year, self.month as i32)
    }
}

impl std::fmt::Display for DateSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.month_name(), self.year)
    }
}

// Saturates at the first and last month an `i32` year can express.
fn normalize(year: i32, month: i32) -> (i32, u32) {
    let total = (year as i64 * 12 + month as i64)
        .clamp(i32::MIN as i64 * 12, i32::MAX as i64 * 12 + 11);
    (total.div_euclid(12) as i32, total.rem_euclid(12) as u32)
}

// Years chrono cannot represent are mapped onto the same position in the
// 400-year Gregorian cycle, which repeats both leap years and weekdays.
fn representable_year(year: i32) -> i32 {
    if NaiveDate::MIN.year() < year && year < NaiveDate::MAX.year() {
        year
    } else {
        2000 + year.rem_euclid(400)
    }
}

fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(representable_year(year), month, 1)
}

pub fn is_leap_year(year: i32) -> bool {
    days_in_month(year, 2) == 29
}

/// Days in a month, `month` being 1-based. Zero for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = first_of_month(year, month) else {
        return 0;
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), month + 1, 1)
    };
    next.map_or(0, |next| (next - first).num_days() as u32)
}

/// Weekday of a date, `month` being 1-based.
pub fn weekday_of(year: i32, month: u32, day: u32) -> Option<Weekday> {
    NaiveDate::from_ymd_opt(representable_year(year), month, day).map(|date| date.weekday())
}

/// Counts Monday..=Friday dates in the given zero-indexed month. Holidays are not considered.
pub fn business_days(year: i32, month: i32) -> u32 {
    let (year, month0) = normalize(year, month);
    let Some(first) = first_of_month(year, month0 + 1) else {
        return 0;
    };

    first.iter_days()
        .take_while(|date| date.month0() == month0)
        .filter(|date| !matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
        .count() as u32
}
