// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Modified Julian Day to calendar conversion.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{Error, Result};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Calendar year of an observation start time given as an integer MJD plus
/// seconds elapsed within that day.
///
/// The seconds only contribute whole elapsed days, so a start time one
/// second before midnight on New Year's Eve still lands in the old year.
pub fn mjd_to_year(day: i64, seconds: f64) -> Result<i32> {
    let day = day + (seconds / SECONDS_PER_DAY) as i64;
    // MJD 0 is 1858-11-17.
    let epoch = NaiveDate::from_ymd_opt(1858, 11, 17).ok_or(Error::MjdOutOfRange(day))?;
    let date = if day >= 0 {
        epoch.checked_add_days(Days::new(day as u64))
    } else {
        epoch.checked_sub_days(Days::new(day.unsigned_abs()))
    };
    Ok(date.ok_or(Error::MjdOutOfRange(day))?.year())
}

#[cfg(test)]
#[path = "epoch_tests.rs"]
mod tests;
