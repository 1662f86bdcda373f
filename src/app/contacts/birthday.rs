//! 近期生日窗口
//!
//! 以 `today` 到下一次生日的天数来判断：把生日的月/日投影到今年，
//! 若今年已过则投影到明年。偏移量满足 `0 <= offset <= N` 即在 `N` 天窗口内。
//! 直接比较真实日期，跨月和跨年都不需要特殊处理。
//!
//! 2 月 29 日的生日在平年按 3 月 1 日计算。

use super::model::Contact;
use chrono::{Datelike, NaiveDate};

/// 默认窗口天数
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    today: NaiveDate,
    days: u32,
}

impl BirthdayWindow {
    pub fn new(today: NaiveDate, days: u32) -> Self {
        Self { today, days }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Days from `today` until the next occurrence of `birthday`, in `0..=365`.
    pub fn offset(&self, birthday: NaiveDate) -> i64 {
        (next_occurrence(birthday, self.today) - self.today).num_days()
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, birthday: NaiveDate) -> bool {
        let offset = self.offset(birthday);
        0 <= offset && offset <= i64::from(self.days)
    }

    /// Keep the contacts inside the window, soonest birthday first.
    pub fn select(&self, contacts: Vec<Contact>) -> Vec<Contact> {
        let mut matched: Vec<(i64, Contact)> = contacts
            .into_iter()
            .map(|contact| (self.offset(contact.birthday), contact))
            .filter(|(offset, _)| *offset <= i64::from(self.days))
            .collect();
        matched.sort_by_key(|(offset, contact)| (*offset, contact.id));
        matched.into_iter().map(|(_, contact)| contact).collect()
    }
}

/// First date on or after `today` with the birthday's month and day.
fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    match anniversary_in(birthday, today.year()) {
        Some(date) if date >= today => date,
        _ => anniversary_in(birthday, today.year() + 1).unwrap_or(NaiveDate::MAX),
    }
}

fn anniversary_in(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}
