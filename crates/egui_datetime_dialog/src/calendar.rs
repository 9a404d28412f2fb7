use chrono::{Datelike as _, NaiveDate};

/// One row of the month grid, Monday first. `None` for days of the neighboring months.
pub(crate) type Week = [Option<NaiveDate>; 7];

pub(crate) const WEEKDAY_NAMES: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// The weeks of `month` (1-based) of `year`.
pub(crate) fn month_weeks(year: i32, month: u32) -> Vec<Week> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return vec![];
    };

    let mut weeks = vec![];
    let mut week: Week = [None; 7];
    for day in first.iter_days().take_while(|day| day.month() == month) {
        let column = day.weekday().num_days_from_monday() as usize;
        week[column] = Some(day);
        if column == 6 {
            weeks.push(week);
            week = [None; 7];
        }
    }
    if week.iter().any(Option::is_some) {
        weeks.push(week);
    }

    weeks
}

pub(crate) fn last_day_of_month(year: i32, month: u32) -> u32 {
    let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 28;
    };
    date.with_day(31)
        .map(|_| 31)
        .or_else(|| date.with_day(30).map(|_| 30))
        .or_else(|| date.with_day(29).map(|_| 29))
        .unwrap_or(28)
}

/// The month after `(year, month)`.
pub(crate) fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// The month before `(year, month)`.
pub(crate) fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

pub(crate) fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}
