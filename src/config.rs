/*  config.rs -- Command line and config file settings
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
    cli::{CliArgs, CmdArgs, ModeArgs, Verbosity},
    error::config::{ConfigError, ConfigFileError},
    sun_times::SunTimeSet,
    types::{Height, Location, SunTime},
    utils::CollectResult,
};
use chrono::{DateTime, Utc};
use clap::{ColorChoice, Parser};
use const_format::formatcp;
use serde::{de, Deserialize, Deserializer};
use std::{fs::File, io::Read, path::Path};
use tracing::debug;

pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Sun,
    Moon,
    Phase,
    Times,
    MoonTimes,
}

/// Merge of cli arguments and config files from highest priority to lowest:
/// 1. CLI arguments
/// 2. User config file
/// 3. System config file (Unix-like OS's only)
/// 4. Default values
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub mode: Mode,
    pub location: Location,
    pub time: DateTime<Utc>,
    pub sun_times: SunTimeSet,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigBuilder {
    mode: Mode,
    location: Location,
    height: Option<Height>,
    time: Option<DateTime<Utc>>,
    extra_times: Vec<SunTimeEntry>,
    cli_times: Vec<SunTime>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct ConfigFile {
    location: Option<Location>,
    height: Option<Height>,
    #[serde(default)]
    time: Vec<SunTimeEntry>,
}

/// A `[[time]]` table, validated once every file is read
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct SunTimeEntry {
    angle: f64,
    morning: String,
    evening: String,
}

impl ConfigBuilder {
    /// `init` runs right after the command line is parsed, before any
    /// config file is read, so that logging is ready for the rest
    pub fn new(
        init: impl FnOnce(Verbosity, ColorChoice),
    ) -> Result<Self, ConfigError> {
        let cli_args = CliArgs::parse();
        init(cli_args.verbosity.into(), cli_args.color.unwrap_or_default());

        let mut cfg = Self::default();
        if let Some(path) = Self::config_path_from_mode(&cli_args.mode) {
            let config_file = ConfigFile::new(path)?;
            cfg.merge_with_config_file(config_file);
        }
        cfg.merge_with_cli_args(cli_args);
        Ok(cfg)
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let Self {
            mode,
            location,
            height,
            time,
            extra_times,
            cli_times,
        } = self;

        let mut sun_times = SunTimeSet::default();
        sun_times.extend(
            extra_times
                .into_iter()
                .map(|t| SunTime::new(t.angle, t.morning, t.evening))
                .collect_result()?,
        );
        sun_times.extend(cli_times);

        let location = match height {
            Some(h) => location.with_height(h),
            None => location,
        };

        let c = Config {
            mode,
            location,
            time: time.unwrap_or_else(Utc::now),
            sun_times,
        };
        debug!(?c, "config");
        Ok(c)
    }

    fn config_path_from_mode(mode: &ModeArgs) -> Option<Option<&Path>> {
        match mode {
            ModeArgs::Phase { .. } => None,
            ModeArgs::Sun {
                c: CmdArgs { config, .. },
            }
            | ModeArgs::Moon {
                c: CmdArgs { config, .. },
            }
            | ModeArgs::Times {
                c: CmdArgs { config, .. },
                ..
            }
            | ModeArgs::MoonTimes {
                c: CmdArgs { config, .. },
            } => Some(config.as_deref()),
        }
    }

    fn merge_with_cli_args(&mut self, cli_args: CliArgs) {
        let CliArgs {
            mode,
            verbosity: _,
            color: _,
        } = cli_args;

        match mode {
            ModeArgs::Sun { c } => {
                self.merge_with_cmd_args(c);
                self.mode = Mode::Sun;
            }
            ModeArgs::Moon { c } => {
                self.merge_with_cmd_args(c);
                self.mode = Mode::Moon;
            }
            ModeArgs::Phase { time } => {
                if let Some(t) = time {
                    self.time = Some(t);
                }
                self.mode = Mode::Phase;
            }
            ModeArgs::Times { c, height, add } => {
                self.merge_with_cmd_args(c);
                if let Some(t) = height {
                    self.height = Some(t);
                }
                self.cli_times = add;
                self.mode = Mode::Times;
            }
            ModeArgs::MoonTimes { c } => {
                self.merge_with_cmd_args(c);
                self.mode = Mode::MoonTimes;
            }
        }
    }

    fn merge_with_cmd_args(&mut self, args: CmdArgs) {
        let CmdArgs {
            location,
            time,
            config: _,
        } = args;

        if let Some(t) = location {
            self.location = t;
        }
        if let Some(t) = time {
            self.time = Some(t);
        }
    }

    fn merge_with_config_file(&mut self, config: ConfigFile) {
        let ConfigFile {
            location,
            height,
            time,
        } = config;

        if let Some(t) = location {
            self.location = t;
        }
        if let Some(t) = height {
            self.height = Some(t);
        }
        self.extra_times.extend(time);
    }
}

impl ConfigFile {
    fn new(config_path: Option<&Path>) -> Result<Self, ConfigFileError> {
        #[cfg(unix)]
        let system_config =
            Path::new(formatcp!("/etc/{PKG_NAME}/config.toml"));
        let local_config =
            dirs::config_dir().map(|d| d.join(PKG_NAME).join("config.toml"));
        let user_config = config_path
            .map(|p| match p.is_file() {
                true => Ok(p),
                false => Err(ConfigFileError::PathNotFile(p.into())),
            })
            .transpose()?
            .or(local_config.as_deref())
            .ok_or(ConfigFileError::ConfigDirNotFound)?;

        let mut config = Self::default();
        #[cfg(unix)]
        config.merge(Self::read(system_config)?);
        config.merge(Self::read(user_config)?);
        Ok(config)
    }

    /// A missing file reads as an empty one
    fn read(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.is_file() {
            return Ok(Self::default());
        }

        let mut buf = String::new();
        File::open(path)
            .and_then(|mut f| f.read_to_string(&mut buf))
            .map_err(|e| ConfigFileError::OpenFailed(e, path.into()))?;
        debug!(path = %path.display(), "reading config file");
        toml::from_str(&buf)
            .map_err(|e| ConfigFileError::DeserializeFailed(e, path.into()))
    }

    fn merge(&mut self, other: Self) {
        let Self {
            location,
            height,
            time,
        } = other;

        if let Some(t) = location {
            self.location = Some(t);
        }
        if let Some(t) = height {
            self.height = Some(t);
        }
        self.time.extend(time);
    }
}

//

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        String::deserialize(d)?.parse().map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Height {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        f64::deserialize(d)?.try_into().map_err(de::Error::custom)
    }
}
