/*  sun_times.rs -- Sunrise, sunset and twilight times
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

use crate::{
    calc_coords::{declination, hour_angle, observer_angle, RAD},
    calc_solar::{ecliptic_longitude, solar_mean_anomaly},
    calc_time::{from_julian_day, to_days, J2000},
    error::types::SunTimeError,
    types::{Crossing, Location, SunTime, SunTimes},
};
use chrono::{DateTime, Utc};
use std::{
    f64::consts::TAU,
    sync::{OnceLock, PoisonError, RwLock},
};
use tracing::{debug, trace};

/// Julian day fraction of the mean solar transit on the Greenwich meridian
const J0: f64 = 0.0009;

pub const SOLAR_NOON: &str = "solar-noon";
pub const NADIR: &str = "nadir";

/// Sun altitudes in degrees with their morning and evening labels
pub const DEFAULT_SUN_TIMES: [(f64, &str, &str); 6] = [
    (-0.833, "sunrise", "sunset"),
    (-0.3, "sunrise-end", "sunset-start"),
    (-6.0, "dawn", "dusk"),
    (-12.0, "nautical-dawn", "nautical-dusk"),
    (-18.0, "night-end", "night"),
    (6.0, "golden-hour-end", "golden-hour"),
];

/// Ordered set of altitude thresholds solved by [sun_times_with]
#[derive(Debug, Clone, PartialEq)]
pub struct SunTimeSet(Vec<SunTime>);

impl Default for SunTimeSet {
    fn default() -> Self {
        Self(
            DEFAULT_SUN_TIMES
                .iter()
                .filter_map(|&(a, m, e)| SunTime::new(a, m, e).ok())
                .collect(),
        )
    }
}

impl SunTimeSet {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Labels are not checked for duplicates, lookups return the first one
    pub fn push(&mut self, time: SunTime) {
        self.0.push(time);
    }

    pub fn iter(&self) -> impl Iterator<Item = &SunTime> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Extend<SunTime> for SunTimeSet {
    fn extend<I: IntoIterator<Item = SunTime>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

//

fn registry() -> &'static RwLock<SunTimeSet> {
    static REGISTRY: OnceLock<RwLock<SunTimeSet>> = OnceLock::new();
    REGISTRY.get_or_init(Default::default)
}

/// Registers a threshold with the process-wide set used by [sun_times]
pub fn add_time(
    angle: f64,
    morning: impl Into<String>,
    evening: impl Into<String>,
) -> Result<(), SunTimeError> {
    let time = SunTime::new(angle, morning, evening)?;
    debug!(angle, morning = %time.morning, evening = %time.evening, "add time");
    registry()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .push(time);
    Ok(())
}

/// Copy of the process-wide threshold set
pub fn registered_times() -> SunTimeSet {
    registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Sun times for the day of `time` using the process-wide threshold set
pub fn sun_times(time: DateTime<Utc>, loc: &Location) -> SunTimes {
    sun_times_with(&registered_times(), time, loc)
}

//

fn julian_cycle(d: f64, lw: f64) -> f64 {
    (d - J0 - lw / TAU).round()
}

fn approx_transit(ht: f64, lw: f64, n: f64) -> f64 {
    J0 + (ht + lw) / TAU + n
}

fn solar_transit_j(ds: f64, m: f64, l: f64) -> f64 {
    J2000 + ds + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin()
}

/// Solar noon, nadir, and the morning and evening crossing of every
/// threshold in `set` for the solar day nearest to `time`. The observer's
/// height lowers the horizon and widens the day.
pub fn sun_times_with(
    set: &SunTimeSet,
    time: DateTime<Utc>,
    loc: &Location,
) -> SunTimes {
    let lw = RAD * -*loc.lon;
    let phi = RAD * *loc.lat;
    let dh = observer_angle(*loc.height);

    let d = to_days(time);
    let n = julian_cycle(d, lw);
    let ds = approx_transit(0.0, lw, n);

    let m = solar_mean_anomaly(ds);
    let l = ecliptic_longitude(m);
    let dec = declination(l, 0.0);

    let j_noon = solar_transit_j(ds, m, l);
    debug!(n, j_noon, dec, dh, "solar transit");

    let mut times = SunTimes::default();
    times.push(SOLAR_NOON, from_julian_day(j_noon).into());
    times.push(NADIR, from_julian_day(j_noon - 0.5).into());

    for t in set.iter() {
        let h0 = (t.angle() + dh) * RAD;
        let w = hour_angle(h0, phi, dec);
        let (morning, evening) = if w.is_nan() {
            trace!(angle = t.angle(), "sun never crosses this altitude");
            (Crossing::Never, Crossing::Never)
        } else {
            let j_set = solar_transit_j(approx_transit(w, lw, n), m, l);
            let j_rise = j_noon - (j_set - j_noon);
            (from_julian_day(j_rise).into(), from_julian_day(j_set).into())
        };
        times.push(&t.morning, morning);
        times.push(&t.evening, evening);
    }

    times
}
