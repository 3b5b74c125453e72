/*  cli.rs -- Command line interface
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
    types::{Height, Location, SunTime},
    types_parse::parse_time,
};
use chrono::{DateTime, Utc};
use clap::{ArgAction, Args, ColorChoice, Parser, Subcommand};
use const_format::formatcp;
use std::{path::PathBuf, str::FromStr};
use tracing::level_filters::LevelFilter;

const VERSION: &str = {
    const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_DESCRIBE: &str = env!("VERGEN_GIT_DESCRIBE");

    formatcp!("{PKG_VERSION} ({GIT_DESCRIBE})")
};

const VERSION_LONG: &str = {
    const RUSTC_SEMVER: &str = env!("VERGEN_RUSTC_SEMVER");
    const RUSTC_HOST_TRIPLE: &str = env!("VERGEN_RUSTC_HOST_TRIPLE");
    const CARGO_FEATURES: &str = env!("VERGEN_CARGO_FEATURES");
    const CARGO_TARGET_TRIPLE: &str = env!("VERGEN_CARGO_TARGET_TRIPLE");

    formatcp!(
        "{VERSION}

rustc version:       {RUSTC_SEMVER}
rustc host triple:   {RUSTC_HOST_TRIPLE}
cargo features:      {CARGO_FEATURES}
cargo target triple: {CARGO_TARGET_TRIPLE}"
    )
};

const ABOUT: &str = "Sun and moon positions, sunlight phases and moon phases";

const AFTER_HELP: &str = "Angles are printed in degrees. \
Azimuth is measured from south, positive towards west.
All times are UTC.";

#[derive(Debug, Parser)]
#[command(version = VERSION, long_version = VERSION_LONG, about = ABOUT)]
#[command(after_help = AFTER_HELP, propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub mode: ModeArgs,

    #[command(flatten)]
    pub verbosity: VerbosityArgs,

    #[arg(long, global = true, display_order(100), value_name = "WHEN")]
    pub color: Option<ColorChoice>,
}

#[derive(Debug, Subcommand)]
pub enum ModeArgs {
    /// Position of the sun
    Sun {
        #[command(flatten)]
        c: CmdArgs,
    },

    /// Position of the moon
    Moon {
        #[command(flatten)]
        c: CmdArgs,
    },

    /// Illuminated fraction and phase of the moon
    Phase {
        #[arg(long, short, value_name = "RFC3339", value_parser = parse_time)]
        time: Option<DateTime<Utc>>,
    },

    /// Sunrise, sunset, twilight and golden hour times
    Times {
        #[command(flatten)]
        c: CmdArgs,

        /// Observer height above the horizon
        #[arg(long, value_name = "METERS", value_parser = Height::from_str)]
        height: Option<Height>,

        /// Additional sun altitude to solve for, in degrees
        #[arg(
            long,
            short,
            value_name = "ANGLE:MORNING:EVENING",
            value_parser = SunTime::from_str,
            allow_hyphen_values = true,
            action = ArgAction::Append,
        )]
        add: Vec<SunTime>,
    },

    /// Moonrise and moonset during the UTC day
    MoonTimes {
        #[command(flatten)]
        c: CmdArgs,
    },
}

#[derive(Debug, Args)]
pub struct CmdArgs {
    #[arg(
        long,
        short,
        value_name = "LATITUDE:LONGITUDE",
        value_parser = Location::from_str,
        allow_hyphen_values = true,
    )]
    pub location: Option<Location>,

    /// Defaults to now
    #[arg(long, short, value_name = "RFC3339", value_parser = parse_time)]
    pub time: Option<DateTime<Utc>>,

    #[arg(long, short, display_order(100), value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// `--quiet` wins over `--verbose`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Args)]
pub struct VerbosityArgs {
    #[arg(long, short, global = true, display_order(100))]
    pub quiet: bool,
    #[arg(long, short, global = true, display_order(100))]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl From<VerbosityArgs> for Verbosity {
    fn from(v: VerbosityArgs) -> Self {
        match v {
            VerbosityArgs { quiet: true, .. } => Self::Quiet,
            VerbosityArgs { verbose: true, .. } => Self::Verbose,
            _ => Self::Normal,
        }
    }
}

impl Verbosity {
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::WARN,
            Self::Normal => LevelFilter::INFO,
            Self::Verbose => LevelFilter::DEBUG,
        }
    }
}

pub trait ClapColorChoiceExt {
    fn to_choice(self) -> anstream::ColorChoice;
}

impl ClapColorChoiceExt for ColorChoice {
    fn to_choice(self) -> anstream::ColorChoice {
        match self {
            ColorChoice::Auto => anstream::ColorChoice::Auto,
            ColorChoice::Always => anstream::ColorChoice::Always,
            ColorChoice::Never => anstream::ColorChoice::Never,
        }
    }
}
