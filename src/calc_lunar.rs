/*  calc_lunar.rs -- Lunar position, illumination and rise/set calculations
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

// Formulas from https://aa.quae.nl/en/reken/hemelpositie.html

use crate::{
    calc_coords::{
        altitude, astro_refraction, azimuth, declination, right_ascension,
        sidereal_time, RAD,
    },
    calc_solar::sun_coords,
    calc_time::to_days,
    types::{
        EquatorialCoords, Location, MoonIllumination, MoonPosition, MoonTimes,
    },
};
use chrono::{DateTime, TimeDelta, Utc};
use std::f64::consts::PI;
use tracing::debug;

/// Mean distance from the earth to the sun in km
pub const SUN_DISTANCE: f64 = 149_598_000.0;
/// Altitude of the moon's center when its upper limb touches the horizon
pub const MOON_RISE_ALTITUDE: f64 = 0.133 * RAD;

/// Geocentric equatorial coordinates of the moon with its distance in km
pub fn moon_coords(d: f64) -> (EquatorialCoords, f64) {
    let l = RAD * (218.316 + 13.176396 * d); // mean longitude
    let m = RAD * (134.963 + 13.064993 * d); // mean anomaly
    let f = RAD * (93.272 + 13.229350 * d); // mean distance

    let lon = l + RAD * 6.289 * m.sin();
    let lat = RAD * 5.127 * f.sin();
    let dist = 385_001.0 - 20_905.0 * m.cos();

    let coords = EquatorialCoords {
        ra: right_ascension(lon, lat),
        dec: declination(lon, lat),
    };
    (coords, dist)
}

pub fn moon_position(time: DateTime<Utc>, loc: &Location) -> MoonPosition {
    let lw = RAD * -*loc.lon;
    let phi = RAD * *loc.lat;
    let d = to_days(time);

    let (c, distance) = moon_coords(d);
    let h = sidereal_time(d, lw) - c.ra;
    let alt = altitude(h, phi, c.dec);
    // formula 14.1 of "Astronomical Algorithms" 2nd edition by Jean Meeus
    let parallactic_angle =
        h.sin().atan2(phi.tan() * c.dec.cos() - c.dec.sin() * h.cos());

    MoonPosition {
        azimuth: azimuth(h, phi, c.dec),
        altitude: alt + astro_refraction(alt),
        distance,
        parallactic_angle,
    }
}

/// Calculations for illumination parameters of the moon, based on
/// chapter 48 of "Astronomical Algorithms" 2nd edition by Jean Meeus
pub fn moon_illumination(time: DateTime<Utc>) -> MoonIllumination {
    let d = to_days(time);
    let s = sun_coords(d);
    let (m, m_dist) = moon_coords(d);

    // geocentric elongation of the moon from the sun
    let phi = (s.dec.sin() * m.dec.sin()
        + s.dec.cos() * m.dec.cos() * (s.ra - m.ra).cos())
    .acos();
    // selenocentric elongation of the earth from the sun
    let inc = (SUN_DISTANCE * phi.sin())
        .atan2(m_dist - SUN_DISTANCE * phi.cos());
    let angle = (s.dec.cos() * (s.ra - m.ra).sin()).atan2(
        s.dec.sin() * m.dec.cos()
            - s.dec.cos() * m.dec.sin() * (s.ra - m.ra).cos(),
    );

    // waxing while the bright limb faces west of north
    let sign = if angle < 0.0 { -1.0 } else { 1.0 };
    MoonIllumination {
        fraction: (1.0 + inc.cos()) / 2.0,
        phase: 0.5 + 0.5 * inc * sign / PI,
        angle,
    }
}

/// Moonrise and moonset during the UTC day that contains `time`.
///
/// The apparent altitude is sampled every hour and each two hour window is
/// fitted with a parabola whose roots give the crossings. A day may lack a
/// rise or a set since the moon rises about 50 minutes later every day.
pub fn moon_times(time: DateTime<Utc>, loc: &Location) -> MoonTimes {
    let start = time
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map_or(time, |t| t.and_utc());
    let hours_later = |h: f64| {
        start + TimeDelta::milliseconds((h * 3_600_000.0).round() as i64)
    };
    let alt = |h: f64| {
        moon_position(hours_later(h), loc).altitude - MOON_RISE_ALTITUDE
    };

    let (mut rise, mut set) = (None, None);
    let mut h0 = alt(0.0);
    let mut ye = 0.0;

    for i in (1..=24).step_by(2).map(f64::from) {
        let h1 = alt(i);
        let h2 = alt(i + 1.0);

        let a = (h0 + h2) / 2.0 - h1;
        let b = (h2 - h0) / 2.0;
        let xe = -b / (2.0 * a);
        ye = (a * xe + b) * xe + h1;
        let d = b * b - 4.0 * a * h1;

        let mut roots = 0;
        let (mut x1, mut x2) = (0.0, 0.0);
        if d >= 0.0 {
            let dx = d.sqrt() / (a.abs() * 2.0);
            x1 = xe - dx;
            x2 = xe + dx;
            if x1.abs() <= 1.0 {
                roots += 1;
            }
            if x2.abs() <= 1.0 {
                roots += 1;
            }
            if x1 < -1.0 {
                x1 = x2;
            }
        }

        match roots {
            1 if h0 < 0.0 => rise = Some(i + x1),
            1 => set = Some(i + x1),
            2 => {
                rise = Some(i + if ye < 0.0 { x2 } else { x1 });
                set = Some(i + if ye < 0.0 { x1 } else { x2 });
            }
            _ => {}
        }

        if rise.is_some() && set.is_some() {
            break;
        }
        h0 = h2;
    }

    debug!(?rise, ?set, "moon crossings in hours after {start}");
    let none = rise.is_none() && set.is_none();
    MoonTimes {
        rise: rise.map(hours_later),
        set: set.map(hours_later),
        always_up: none && ye > 0.0,
        always_down: none && ye <= 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn test_moon_position() -> anyhow::Result<()> {
        let t = "2013-03-05T00:00:00Z".parse()?;
        let loc = Location::try_from((50.5, 30.5))?;
        let p = moon_position(t, &loc);
        assert!(close(p.azimuth, -0.9783999522438226, 1e-4));
        assert!(close(p.altitude, 0.014551482243892251, 1e-4));
        assert!(close(p.distance, 364121.37256256194, 1e-3));
        Ok(())
    }

    #[test]
    fn test_parallactic_angle() -> anyhow::Result<()> {
        let loc = Location::try_from((50.5, 30.5))?;
        let p = moon_position("2013-03-05T00:00:00Z".parse()?, &loc);
        assert!(close(p.parallactic_angle, -0.5983208494144371, 1e-6));

        // the moon crosses the meridian around 04:20 that night
        let p = moon_position("2013-03-05T04:20:00Z".parse()?, &loc);
        assert!(p.azimuth.abs() < 0.01);
        assert!(p.parallactic_angle.abs() < 0.01);

        // east of the meridian before transit, west after
        let p = moon_position("2013-03-05T07:00:00Z".parse()?, &loc);
        assert!(p.azimuth > 0.0 && p.parallactic_angle > 0.0);
        Ok(())
    }

    #[test]
    fn test_apparent_altitude_is_raised() -> anyhow::Result<()> {
        let loc = Location::try_from((-33.9, 18.4))?;
        let start: DateTime<Utc> = "2020-01-01T00:00:00Z".parse()?;
        for h in 0..48 {
            let t = start + TimeDelta::hours(h);
            let d = to_days(t);
            let (c, _) = moon_coords(d);
            let ha = sidereal_time(d, RAD * -*loc.lon) - c.ra;
            let geometric = altitude(ha, RAD * *loc.lat, c.dec);
            let p = moon_position(t, &loc);
            assert!(p.altitude > geometric);
        }
        Ok(())
    }

    #[test]
    fn test_moon_illumination() -> anyhow::Result<()> {
        let m = moon_illumination("2013-03-05T00:00:00Z".parse()?);
        assert!(close(m.fraction, 0.4848068202456373, 1e-6));
        assert!(close(m.phase, 0.7548368838538762, 1e-6));
        assert!(close(m.angle, 1.6732942678578346, 1e-6));
        Ok(())
    }

    #[test]
    fn test_synodic_month() -> anyhow::Result<()> {
        let start: DateTime<Utc> = "2024-01-01T00:00:00Z".parse()?;
        let (mut min, mut max) = (f64::MAX, f64::MIN);
        for h in (0..=(30 * 24)).step_by(3) {
            let m = moon_illumination(start + TimeDelta::hours(h));
            assert!((0.0..=1.0).contains(&m.fraction));
            assert!((0.0..=1.0).contains(&m.phase));
            min = min.min(m.fraction);
            max = max.max(m.fraction);
        }
        // 2024-01-11 new moon, 2024-01-25 full moon
        assert!(min < 0.01, "{min}");
        assert!(max > 0.99, "{max}");
        Ok(())
    }

    #[test]
    fn test_phase_grows_through_the_month() -> anyhow::Result<()> {
        // from just after the new moon of 2024-01-11 to just before the next
        let start: DateTime<Utc> = "2024-01-12T00:00:00Z".parse()?;
        let mut prev = 0.0;
        for day in 0..27 {
            let m = moon_illumination(start + TimeDelta::days(day));
            assert!(m.phase > prev, "day {day}: {} <= {prev}", m.phase);
            prev = m.phase;
        }
        let full = moon_illumination("2024-01-25T17:54:00Z".parse()?);
        assert!(close(full.phase, 0.5, 0.02));
        Ok(())
    }

    #[test]
    fn test_moon_times() -> anyhow::Result<()> {
        let t: DateTime<Utc> = "2013-03-05T00:00:00Z".parse()?;
        let loc = Location::try_from((50.5, 30.5))?;
        let times = moon_times(t, &loc);
        let day = t..t + TimeDelta::days(1);

        for c in [times.rise, times.set].into_iter().flatten() {
            assert!(day.contains(&c));
            let alt = moon_position(c, &loc).altitude;
            assert!(close(alt, MOON_RISE_ALTITUDE, 0.2 * RAD), "{c}: {alt}");
        }
        assert!(times.rise.is_some() || times.set.is_some());
        assert!(!times.always_up && !times.always_down);
        Ok(())
    }

    #[test]
    fn test_moon_times_near_the_pole() -> anyhow::Result<()> {
        let loc = Location::try_from((89.9, 0.0))?;
        let start: DateTime<Utc> = "2024-01-01T00:00:00Z".parse()?;
        let circumpolar = (0..28)
            .map(|d| moon_times(start + TimeDelta::days(d), &loc))
            .filter(|m| m.always_up || m.always_down)
            .count();
        assert!(circumpolar > 20, "{circumpolar}");
        Ok(())
    }
}
