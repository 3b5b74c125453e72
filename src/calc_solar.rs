/*  calc_solar.rs -- Solar position calculations
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
    calc_coords::{
        altitude, azimuth, declination, right_ascension, sidereal_time, RAD,
    },
    calc_time::to_days,
    types::{EquatorialCoords, Location, SunPosition},
};
use chrono::{DateTime, Utc};
use std::f64::consts::PI;

/// Longitude of the perihelion of the earth
const PERIHELION: f64 = 102.9372 * RAD;

pub fn solar_mean_anomaly(d: f64) -> f64 {
    RAD * (357.5291 + 0.98560028 * d)
}

pub fn ecliptic_longitude(m: f64) -> f64 {
    // equation of center
    let c = RAD
        * (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin());
    m + c + PERIHELION + PI
}

/// The ecliptic latitude of the sun is taken as 0
pub fn sun_coords(d: f64) -> EquatorialCoords {
    let l = ecliptic_longitude(solar_mean_anomaly(d));
    EquatorialCoords {
        ra: right_ascension(l, 0.0),
        dec: declination(l, 0.0),
    }
}

/// Position of the sun's center, without refraction
pub fn sun_position(time: DateTime<Utc>, loc: &Location) -> SunPosition {
    let lw = RAD * -*loc.lon;
    let phi = RAD * *loc.lat;
    let d = to_days(time);

    let c = sun_coords(d);
    let h = sidereal_time(d, lw) - c.ra;

    SunPosition {
        azimuth: azimuth(h, phi, c.dec),
        altitude: altitude(h, phi, c.dec),
    }
}
