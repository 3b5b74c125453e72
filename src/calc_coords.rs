/*  calc_coords.rs -- Coordinate transforms shared by the sun and the moon
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
// All angles are in radians unless the name says otherwise

pub const RAD: f64 = std::f64::consts::PI / 180.0;
/// Obliquity of the ecliptic
pub const OBLIQUITY: f64 = 23.4397 * RAD;

pub fn right_ascension(l: f64, b: f64) -> f64 {
    (l.sin() * OBLIQUITY.cos() - b.tan() * OBLIQUITY.sin()).atan2(l.cos())
}

pub fn declination(l: f64, b: f64) -> f64 {
    (b.sin() * OBLIQUITY.cos() + b.cos() * OBLIQUITY.sin() * l.sin()).asin()
}

/// Measured from south, positive towards west
pub fn azimuth(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(h.cos() * phi.sin() - dec.tan() * phi.cos())
}

pub fn altitude(h: f64, phi: f64, dec: f64) -> f64 {
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos()).asin()
}

/// `lw` is the west longitude, i.e. the negated east longitude
pub fn sidereal_time(d: f64, lw: f64) -> f64 {
    RAD * (280.16 + 360.9856235 * d) - lw
}

/// Apparent raise of a body near the horizon, to be added to its altitude.
/// Bennett's formula (arc-minutes) rewritten for radians; negative altitudes
/// are evaluated as 0 since the denominator approaches zero below it.
pub fn astro_refraction(h: f64) -> f64 {
    let h = h.max(0.0);
    0.0002967 / (h + 0.00312536 / (h + 0.08901179)).tan()
}

/// Hour angle at which a body of declination `dec` reaches altitude `h`.
/// NaN when the body never gets there on this day at this latitude.
pub fn hour_angle(h: f64, phi: f64, dec: f64) -> f64 {
    ((h.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())).acos()
}

/// Dip of the horizon in degrees for an observer `height` meters above it
pub fn observer_angle(height: f64) -> f64 {
    -2.076 * height.sqrt() / 60.0
}
