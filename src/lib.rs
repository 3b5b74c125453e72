/*  lib.rs -- Sun and moon calculations
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

//! Sun position, sunlight phases, moon position and moon phase.
//!
//! All angles are in radians. Azimuth is measured from south, positive
//! towards west. All instants are UTC.
//!
//! ```
//! use suncalc::{sun_position, sun_times, Crossing, Location};
//!
//! let loc = Location::try_from((50.5, 30.5)).unwrap();
//! let time = "2013-03-05T00:00:00Z".parse().unwrap();
//! let pos = sun_position(time, &loc);
//! assert!(pos.altitude < 0.0);
//!
//! let times = sun_times(time, &loc);
//! assert!(matches!(times.get("sunrise"), Some(Crossing::At(_))));
//! ```

mod calc_coords;
mod calc_lunar;
mod calc_solar;
mod calc_time;
mod cli;
mod config;
pub mod error;
mod sun_times;
mod types;
mod types_display;
mod types_parse;
mod utils;

pub use calc_coords::{astro_refraction, observer_angle, RAD};
pub use calc_lunar::{moon_illumination, moon_position, moon_times};
pub use calc_solar::sun_position;
pub use calc_time::{from_julian_day, to_days, to_julian_day};
pub use sun_times::{
    add_time, registered_times, sun_times, sun_times_with, SunTimeSet,
    DEFAULT_SUN_TIMES, NADIR, SOLAR_NOON,
};
pub use types::{
    Crossing, Height, Latitude, Location, Longitude, MoonIllumination,
    MoonPosition, MoonTimes, SunPosition, SunTime, SunTimes,
};
pub use types_display::phase_name;
pub use types_parse::parse_time;

use crate::{
    cli::ClapColorChoiceExt,
    config::{Config, ConfigBuilder, Mode},
    error::SuncalcError,
    types_display::{BODY, HEADER},
    utils::IsDefault,
};
use anstream::AutoStream;
use chrono::SecondsFormat;
use std::io;
use tracing::{error, info, warn, Level};
use tracing_subscriber::fmt::writer::MakeWriterExt;

pub fn main() {
    let res = (|| -> Result<(), SuncalcError> {
        let c = ConfigBuilder::new(|verbosity, color| {
            let choice = color.to_choice();
            let stdout = move || AutoStream::new(io::stdout(), choice).lock();
            let stderr = move || AutoStream::new(io::stderr(), choice).lock();
            let stdio = stderr.with_max_level(Level::WARN).or_else(stdout);

            tracing_subscriber::fmt()
                .with_writer(stdio)
                .with_max_level(verbosity.level_filter())
                .without_time()
                .with_level(false)
                .with_target(false)
                .init();
        })?
        .build()?;

        run(&c);
        Ok(())
    })();

    if let Err(e) = res {
        error!("{e}");
        std::process::exit(e.exit_code());
    }
}

/// Height alone does not move the observer off the default position
fn is_default_position(loc: &Location) -> bool {
    loc.lat.is_default() && loc.lon.is_default()
}

fn run(c: &Config) {
    let Config {
        mode,
        location: loc,
        time,
        sun_times: set,
    } = c;

    let at = time.to_rfc3339_opts(SecondsFormat::Secs, true);
    if *mode != Mode::Phase && is_default_position(loc) {
        warn!("Warning: using default location ({loc})");
    }
    let head = |title: &str| {
        format!(
            "{HEADER}{title}{HEADER:#}
{BODY}Time{BODY:#}: {at}
{BODY}Location{BODY:#}: {loc}"
        )
    };

    match mode {
        Mode::Sun => {
            info!("{}\n{}", head("Sun"), sun_position(*time, loc));
        }
        Mode::Moon => {
            info!("{}\n{}", head("Moon"), moon_position(*time, loc));
        }
        Mode::Phase => {
            let m = moon_illumination(*time);
            info!(
                "{HEADER}Moon phase{HEADER:#}\n{BODY}Time{BODY:#}: {at}\n{m}"
            );
        }
        Mode::Times => {
            let times = sun_times_with(set, *time, loc);
            info!("{}\n\n{times}", head("Sun times"));
        }
        Mode::MoonTimes => {
            info!("{}\n{}", head("Moon times"), moon_times(*time, loc));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_position() -> anyhow::Result<()> {
        assert!(is_default_position(&Location::default()));
        assert!(is_default_position(&Location::try_from((0.0, 0.0, 120.0))?));
        assert!(!is_default_position(&Location::try_from((0.0, 30.5))?));
        assert!(!is_default_position(&Location::try_from((50.5, 0.0))?));
        Ok(())
    }
}
