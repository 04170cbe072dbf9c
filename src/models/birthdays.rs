//! Weekly birthday reminders.
//!
//! Every birthday is projected onto the calendar around `today` and kept if
//! it lands in the reminder window. A contact is congratulated on the
//! weekday of the projected date, except that weekend birthdays move to the
//! following Monday.

use crate::models::Record;
use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;
use std::ops::Range;

/// Days in one reminder week.
const WEEK: usize = 7;

/// Contact names grouped by congratulation day.
///
/// Days run from today's weekday forward through the week; days with no
/// birthdays are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyBirthdays {
    days: Vec<(Weekday, Vec<String>)>,
}

impl WeeklyBirthdays {
    /// True when nobody has a birthday this week.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of days with at least one birthday.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Names to congratulate on `day`, in address book order.
    pub fn names(&self, day: Weekday) -> Option<&[String]> {
        self.days
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, names)| names.as_slice())
    }

    /// Names for `day` joined with `", "`.
    pub fn get(&self, day: Weekday) -> Option<String> {
        self.names(day).map(|names| names.join(", "))
    }

    /// `(weekday name, joined names)` in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, String)> + '_ {
        self.days
            .iter()
            .map(|(day, names)| (weekday_name(*day), names.join(", ")))
    }
}

impl fmt::Display for WeeklyBirthdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .iter()
            .map(|(day, names)| format!("{}: {}", day, names))
            .collect::<Vec<_>>();
        f.write_str(&lines.join("\n"))
    }
}

/// Full English weekday name.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Weekday a birthday on `date` is celebrated. Saturday and Sunday map to Monday.
pub fn congratulation_day(date: NaiveDate) -> Weekday {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => Weekday::Mon,
        day => day,
    }
}

/// Day offsets from `today` that count as "this week".
///
/// On Monday the window reaches back over the weekend that just passed,
/// on Sunday it reaches back to Saturday.
pub fn reminder_window(today: NaiveDate) -> Range<i64> {
    match today.weekday() {
        Weekday::Mon => -2..5,
        Weekday::Sun => -1..6,
        _ => 0..7,
    }
}

/// Group the birthdays of `records` falling in the reminder window around `today`.
pub fn upcoming_birthdays<'a, I>(records: I, today: NaiveDate) -> WeeklyBirthdays
where
    I: IntoIterator<Item = &'a Record>,
{
    let window = reminder_window(today);
    let mut groups: Vec<(Weekday, Vec<String>)> = Vec::new();

    for record in records {
        let Some(birthday) = record.birthday() else {
            continue;
        };

        let Some(date) = birthday.in_year(today.year()) else {
            continue;
        };
        if !window.contains(&(date - today).num_days()) {
            continue;
        }

        let day = congratulation_day(date);
        let name = record.name().to_string();
        match groups.iter_mut().find(|(d, _)| *d == day) {
            Some((_, names)) => names.push(name),
            None => groups.push((day, vec![name])),
        }
    }

    let days = std::iter::successors(Some(today.weekday()), |d| Some(d.succ()))
        .take(WEEK)
        .filter_map(|day| {
            groups
                .iter()
                .position(|(d, _)| *d == day)
                .map(|index| groups.swap_remove(index))
        })
        .collect();

    WeeklyBirthdays { days }
}
