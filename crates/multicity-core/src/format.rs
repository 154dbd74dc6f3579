// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Multicity contributors

//! Russian display formatting for dates, stay lengths and amounts.

use chrono::{Datelike, NaiveDate, Weekday};

const MONTHS_GENITIVE: [&str; 12] = [
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

/// `1234567` -> `"1 234 567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Amount rounded to the nearest thousand (halves up), e.g. `"51 000 ₽"`.
pub fn rubles_rounded(amount: u64) -> String {
    let rounded = amount.saturating_add(500) / 1000 * 1000;
    format!("{} ₽", group_thousands(rounded))
}

/// Noun form agreeing with `n`: день / дня / дней.
pub fn day_noun(n: u32) -> &'static str {
    let tens = n % 100;
    let ones = n % 10;
    if (11..=14).contains(&tens) {
        "дней"
    } else if ones == 1 {
        "день"
    } else if (2..=4).contains(&ones) {
        "дня"
    } else {
        "дней"
    }
}

pub fn days_label(n: u32) -> String {
    format!("{} {}", n, day_noun(n))
}

/// `"1 июня"`
pub fn day_month(date: NaiveDate) -> String {
    format!("{} {}", date.day(), MONTHS_GENITIVE[date.month0() as usize])
}

/// `"ср, 4 июня"`
pub fn weekday_day_month(date: NaiveDate) -> String {
    let weekday = match date.weekday() {
        Weekday::Mon => "пн",
        Weekday::Tue => "вт",
        Weekday::Wed => "ср",
        Weekday::Thu => "чт",
        Weekday::Fri => "пт",
        Weekday::Sat => "сб",
        Weekday::Sun => "вс",
    };
    format!("{}, {}", weekday, day_month(date))
}
