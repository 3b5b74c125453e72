/*  types.rs -- Common types
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

use crate::error::types::{
    HeightError, LatitudeError, LocationError, LocationErrorT,
    LongitudeError, SunTimeError,
};
use chrono::{DateTime, Utc};
use frunk::{hlist_pat, validated::IntoValidated};
use std::ops::Deref;

pub const DEFAULT_LATITUDE: f64 = 0.0; // Null Island
pub const DEFAULT_LONGITUDE: f64 = 0.0;
pub const DEFAULT_HEIGHT: f64 = 0.0;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;
pub const MIN_HEIGHT: f64 = 0.0;
pub const MIN_SUN_TIME_ANGLE: f64 = -90.0;
pub const MAX_SUN_TIME_ANGLE: f64 = 90.0;

/// Degrees, positive north
#[derive(Debug, Clone, Copy)]
pub struct Latitude(f64);
/// Degrees, positive east
#[derive(Debug, Clone, Copy)]
pub struct Longitude(f64);
/// Observer height above the horizon in meters
#[derive(Debug, Clone, Copy)]
pub struct Height(f64);

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Location {
    pub lat: Latitude,
    pub lon: Longitude,
    pub height: Height,
}

/// Right ascension and declination in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    pub ra: f64,
    pub dec: f64,
}

/// Radians. Azimuth is measured from south, positive towards west
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    pub azimuth: f64,
    pub altitude: f64,
}

/// Radians, except for the distance in kilometers.
/// `altitude` is the apparent altitude: the geometric altitude raised by
/// atmospheric refraction. Azimuth and parallactic angle are geometric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    pub azimuth: f64,
    pub altitude: f64,
    pub distance: f64,
    pub parallactic_angle: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonIllumination {
    /// Illuminated fraction of the disk, 0 to 1
    pub fraction: f64,
    /// 0 new moon, 0.25 first quarter, 0.5 full moon, 0.75 last quarter
    pub phase: f64,
    /// Position angle of the bright limb's midpoint, counterclockwise from
    /// the north point of the disk (radians)
    pub angle: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoonTimes {
    pub rise: Option<DateTime<Utc>>,
    pub set: Option<DateTime<Utc>>,
    pub always_up: bool,
    pub always_down: bool,
}

/// A pair of sun times at which the center of the sun crosses `angle`
/// degrees of altitude, once in the morning and once in the evening
#[derive(Debug, Clone, PartialEq)]
pub struct SunTime {
    angle: f64,
    pub morning: String,
    pub evening: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    At(DateTime<Utc>),
    /// The sun does not reach the altitude on this day at this latitude
    Never,
}

/// Sun times keyed by label, in the order they were solved
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SunTimes(Vec<(String, Crossing)>);

//

impl Default for Latitude {
    fn default() -> Self {
        Self(DEFAULT_LATITUDE)
    }
}

impl Default for Longitude {
    fn default() -> Self {
        Self(DEFAULT_LONGITUDE)
    }
}

impl Default for Height {
    fn default() -> Self {
        Self(DEFAULT_HEIGHT)
    }
}

//

impl TryFrom<f64> for Latitude {
    type Error = LatitudeError;

    fn try_from(n: f64) -> Result<Self, Self::Error> {
        if (MIN_LATITUDE..=MAX_LATITUDE).contains(&n) {
            Ok(Self(n))
        } else {
            Err(LatitudeError(n))
        }
    }
}

impl TryFrom<f64> for Longitude {
    type Error = LongitudeError;

    fn try_from(n: f64) -> Result<Self, Self::Error> {
        if (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&n) {
            Ok(Self(n))
        } else {
            Err(LongitudeError(n))
        }
    }
}

impl TryFrom<f64> for Height {
    type Error = HeightError;

    fn try_from(n: f64) -> Result<Self, Self::Error> {
        if n >= MIN_HEIGHT && n.is_finite() {
            Ok(Self(n))
        } else {
            Err(HeightError(n))
        }
    }
}

impl TryFrom<(f64, f64)> for Location {
    type Error = LocationError;

    fn try_from((lat, lon): (f64, f64)) -> Result<Self, Self::Error> {
        (lat, lon, DEFAULT_HEIGHT).try_into()
    }
}

impl TryFrom<(f64, f64, f64)> for Location {
    type Error = LocationError;

    fn try_from(
        (lat, lon, height): (f64, f64, f64),
    ) -> Result<Self, Self::Error> {
        let lat = Latitude::try_from(lat).map_err(LocationErrorT::from);
        let lon = Longitude::try_from(lon).map_err(LocationErrorT::from);
        let height = Height::try_from(height).map_err(LocationErrorT::from);
        let hlist_pat![lat, lon, height] =
            (lat.into_validated() + lon + height).into_result()?;
        Ok(Self { lat, lon, height })
    }
}

impl Location {
    pub fn with_height(self, height: Height) -> Self {
        Self { height, ..self }
    }
}

impl SunTime {
    pub fn new(
        angle: f64,
        morning: impl Into<String>,
        evening: impl Into<String>,
    ) -> Result<Self, SunTimeError> {
        let (morning, evening) = (morning.into(), evening.into());
        if !(MIN_SUN_TIME_ANGLE..=MAX_SUN_TIME_ANGLE).contains(&angle) {
            Err(SunTimeError::Angle(angle))
        } else if morning.is_empty() || evening.is_empty() {
            Err(SunTimeError::EmptyLabel)
        } else {
            Ok(Self {
                angle,
                morning,
                evening,
            })
        }
    }

    /// Altitude in degrees
    pub fn angle(&self) -> f64 {
        self.angle
    }
}

impl Crossing {
    pub fn time(self) -> Option<DateTime<Utc>> {
        match self {
            Self::At(t) => Some(t),
            Self::Never => None,
        }
    }
}

impl From<Option<DateTime<Utc>>> for Crossing {
    fn from(t: Option<DateTime<Utc>>) -> Self {
        t.map_or(Self::Never, Self::At)
    }
}

impl SunTimes {
    pub(crate) fn push(&mut self, label: &str, crossing: Crossing) {
        self.0.push((label.to_owned(), crossing));
    }

    /// `None` if no threshold has this label
    pub fn get(&self, label: &str) -> Option<Crossing> {
        self.0.iter().find(|(l, _)| l == label).map(|(_, c)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Crossing)> {
        self.0.iter().map(|(l, c)| (l.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// These newtypes only enforce the bounds of the inner value, so they deref
// to it like the plain number they stand for. No DerefMut on purpose.

impl Deref for Latitude {
    type Target = f64;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for Longitude {
    type Target = f64;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for Height {
    type Target = f64;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

//

fn eq(lhs: f64, rhs: f64) -> bool {
    (lhs * 1e6).round() == (rhs * 1e6).round()
}

impl PartialEq for Latitude {
    fn eq(&self, other: &Self) -> bool {
        eq(**self, **other)
    }
}
impl PartialEq for Longitude {
    fn eq(&self, other: &Self) -> bool {
        eq(**self, **other)
    }
}
impl PartialEq for Height {
    fn eq(&self, other: &Self) -> bool {
        eq(**self, **other)
    }
}
