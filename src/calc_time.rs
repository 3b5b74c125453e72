/*  calc_time.rs -- Julian day conversion
    This file is part of suncalc.
    Copyright (C) 2024 The suncalc developers

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use chrono::{DateTime, Utc};

pub const MS_PER_DAY: f64 = 86_400_000.0;
/// Julian day of 1970-01-01T00:00:00Z
pub const J1970: f64 = 2_440_587.5;
/// Julian day of the J2000.0 epoch
pub const J2000: f64 = 2_451_545.0;

pub fn to_julian_day(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / MS_PER_DAY + J1970
}

/// Returns `None` for a non-finite day or one chrono cannot represent
pub fn from_julian_day(jd: f64) -> Option<DateTime<Utc>> {
    let ms = ((jd - J1970) * MS_PER_DAY).round();
    if ms.is_finite() && ms.abs() < i64::MAX as f64 {
        DateTime::from_timestamp_millis(ms as i64)
    } else {
        None
    }
}

/// Days since J2000.0, the time argument of every position formula
pub fn to_days(time: DateTime<Utc>) -> f64 {
    to_julian_day(time) - J2000
}
