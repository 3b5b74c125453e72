/*  types_parse.rs -- FromStr implementation for types
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
    error::parse::*,
    types::{Height, Latitude, Location, Longitude, SunTime},
};
use chrono::{DateTime, Utc};
use frunk::{hlist_pat, validated::IntoValidated};
use std::str::FromStr;

impl FromStr for Latitude {
    type Err = LatitudeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.trim()
            .parse::<f64>()
            .map_err(|e| LatitudeError::Parse(e, s.into()))?
            .try_into()?)
    }
}

impl FromStr for Longitude {
    type Err = LongitudeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.trim()
            .parse::<f64>()
            .map_err(|e| LongitudeError::Parse(e, s.into()))?
            .try_into()?)
    }
}

impl FromStr for Height {
    type Err = HeightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.trim()
            .parse::<f64>()
            .map_err(|e| HeightError::Parse(e, s.into()))?
            .try_into()?)
    }
}

/// `LAT:LON` in degrees, the height is left at its default
impl FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match *s.split(':').collect::<Vec<_>>().as_slice() {
            [lat, lon] => {
                let lat =
                    lat.parse::<Latitude>().map_err(LocationErrorT::Latitude);
                let lon =
                    lon.parse::<Longitude>().map_err(LocationErrorT::Longitude);
                let hlist_pat![lat, lon] =
                    (lat.into_validated() + lon).into_result()?;
                Ok(Self {
                    lat,
                    lon,
                    ..Default::default()
                })
            }
            _ => Err(LocationError::Fmt),
        }
    }
}

/// `ANGLE:MORNING:EVENING`, e.g. `-4:custom-dawn:custom-dusk`
impl FromStr for SunTime {
    type Err = SunTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match *s.split(':').map(str::trim).collect::<Vec<_>>().as_slice() {
            [angle, morning, evening] => {
                let angle = angle
                    .parse::<f64>()
                    .map_err(|e| SunTimeError::Parse(e, angle.into()))?;
                Ok(Self::new(angle, morning, evening)?)
            }
            _ => Err(SunTimeError::Fmt),
        }
    }
}

/// RFC 3339 date and time with any offset, normalized to UTC
pub fn parse_time(s: &str) -> Result<DateTime<Utc>, TimeError> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| TimeError(e, s.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_location() -> anyhow::Result<()> {
        let loc: Location = "50.5:30.5".parse()?;
        assert_eq!(loc, Location::try_from((50.5, 30.5))?);
        let loc: Location = " -33.9 : 18.4 ".parse()?;
        assert_eq!(*loc.lat, -33.9);
        assert_eq!(*loc.lon, 18.4);
        assert_eq!(*loc.height, 0.0);
        Ok(())
    }

    #[test]
    fn test_location_errors() {
        assert!(matches!(
            "50.5".parse::<Location>(),
            Err(LocationError::Fmt)
        ));
        assert!(matches!(
            "1:2:3".parse::<Location>(),
            Err(LocationError::Fmt)
        ));

        let e = "north:200".parse::<Location>().unwrap_err();
        assert_snapshot!(e, @r###"
        - invalid float literal (north)
        - longitude must be between -180° and 180° (200)
        "###);
    }

    #[test]
    fn test_height() -> anyhow::Result<()> {
        assert_eq!(*"2000".parse::<Height>()?, 2000.0);
        assert!("-1".parse::<Height>().is_err());
        assert!("high".parse::<Height>().is_err());
        Ok(())
    }

    #[test]
    fn test_sun_time() -> anyhow::Result<()> {
        let t: SunTime = "-4:custom-dawn:custom-dusk".parse()?;
        assert_eq!(t.angle(), -4.0);
        assert_eq!(t.morning, "custom-dawn");
        assert_eq!(t.evening, "custom-dusk");

        assert!(matches!(
            "-4:custom-dawn".parse::<SunTime>(),
            Err(SunTimeError::Fmt)
        ));
        assert_snapshot!("100:a:b".parse::<SunTime>().unwrap_err(), @"- sun time angle must be between -90° and 90° (100)");
        assert_snapshot!("-4::b".parse::<SunTime>().unwrap_err(), @"- sun time labels must not be empty");
        Ok(())
    }

    #[test]
    fn test_time() -> anyhow::Result<()> {
        let t = parse_time("2013-03-05T02:00:00+02:00")?;
        assert_eq!(t, "2013-03-05T00:00:00Z".parse::<DateTime<Utc>>()?);
        assert!(parse_time("2013-03-05").is_err());
        Ok(())
    }
}
