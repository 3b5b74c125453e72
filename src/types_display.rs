/*  types_display.rs -- Display implementation for common types
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

use crate::types::{
    Crossing, Location, MoonIllumination, MoonPosition, MoonTimes,
    SunPosition, SunTimes,
};
use anstyle::{AnsiColor, Color, Style};
use chrono::{DateTime, SecondsFormat, Utc};
use itertools::Itertools;
use std::fmt::{Display, Formatter, Result as FmtResult};

pub const HEADER: Style = Style::new().bold().underline();
pub const BODY: Style = Style::new().bold();
pub const ERR: Style =
    Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold();

fn time(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn deg(rad: f64) -> String {
    format!("{:.2}°", rad.to_degrees())
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let (lat, lon) = (*self.lat, *self.lon);
        let ns = if lat >= 0.0 { "N" } else { "S" };
        let ew = if lon >= 0.0 { "E" } else { "W" };
        write!(f, "{:.4}°{ns}, {:.4}°{ew}", lat.abs(), lon.abs())?;
        if *self.height > 0.0 {
            write!(f, ", {}m", *self.height)?;
        }
        Ok(())
    }
}

impl Display for Crossing {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::At(t) => f.write_str(&time(*t)),
            Self::Never => f.write_str("never"),
        }
    }
}

impl Display for SunPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let Self { azimuth, altitude } = self;
        write!(
            f,
            "{BODY}Azimuth{BODY:#}: {}
{BODY}Altitude{BODY:#}: {}",
            deg(*azimuth),
            deg(*altitude)
        )
    }
}

impl Display for MoonPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let Self {
            azimuth,
            altitude,
            distance,
            parallactic_angle,
        } = self;
        write!(
            f,
            "{BODY}Azimuth{BODY:#}: {}
{BODY}Altitude{BODY:#}: {}
{BODY}Distance{BODY:#}: {distance:.0} km
{BODY}Parallactic angle{BODY:#}: {}",
            deg(*azimuth),
            deg(*altitude),
            deg(*parallactic_angle)
        )
    }
}

/// Name of the eighth of the lunar cycle that `phase` falls in
pub fn phase_name(phase: f64) -> &'static str {
    const NAMES: [&str; 8] = [
        "new moon",
        "waxing crescent",
        "first quarter",
        "waxing gibbous",
        "full moon",
        "waning gibbous",
        "last quarter",
        "waning crescent",
    ];
    let i = (phase.rem_euclid(1.0) * 8.0).round() as usize % 8;
    NAMES[i]
}

impl Display for MoonIllumination {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let Self {
            fraction,
            phase,
            angle,
        } = self;
        write!(
            f,
            "{BODY}Illuminated{BODY:#}: {:.1}%
{BODY}Phase{BODY:#}: {phase:.3} ({})
{BODY}Bright limb angle{BODY:#}: {}",
            fraction * 100.0,
            phase_name(*phase),
            deg(*angle)
        )
    }
}

impl Display for SunTimes {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let width = self.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
        let s = self
            .iter()
            .map(|(l, c)| format!("{BODY}{l:<width$}{BODY:#}  {c}"))
            .join("\n");
        f.write_str(&s)
    }
}

impl Display for MoonTimes {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let opt = |t: Option<DateTime<Utc>>| t.map_or("none".into(), time);
        write!(
            f,
            "{BODY}Rise{BODY:#}: {}
{BODY}Set{BODY:#}: {}",
            opt(self.rise),
            opt(self.set)
        )?;
        if self.always_up {
            write!(f, "\n{BODY}Always up{BODY:#}")?;
        } else if self.always_down {
            write!(f, "\n{BODY}Always down{BODY:#}")?;
        }
        Ok(())
    }
}
