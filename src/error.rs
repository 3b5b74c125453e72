/*  error.rs -- Errors
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

use crate::types_display::ERR;
use config::ConfigError;
use itertools::Itertools;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub struct VecError<E: Error>(pub Vec<E>);
impl<E: Error> Display for VecError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let err =
            |e: &E| "- ".to_string() + &e.to_string().lines().join("\n  ");
        let s = self.0.iter().map(err).join("\n");
        f.write_str(&s)
    }
}

//

#[derive(Debug)]
pub struct SuncalcError(SuncalcErrorKind);

impl Display for SuncalcError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sep = "\n".to_string() + &" ".repeat("error: ".len());
        let s = format!("{ERR}error:{ERR:#} {}", self.0).lines().join(&sep);
        f.write_str(&s)
    }
}

impl Error for SuncalcError {}

impl SuncalcError {
    pub fn exit_code(&self) -> exitcode::ExitCode {
        match self.0 {
            SuncalcErrorKind::Config(_) => exitcode::CONFIG,
        }
    }
}

#[derive(Debug, Error)]
enum SuncalcErrorKind {
    #[error("configuration failed:\n{0}")]
    Config(#[from] ConfigError),
}

pub mod types {
    use super::*;
    use crate::types::{
        MAX_LATITUDE, MAX_LONGITUDE, MAX_SUN_TIME_ANGLE, MIN_LATITUDE,
        MIN_LONGITUDE, MIN_SUN_TIME_ANGLE,
    };

    #[derive(Debug, Error)]
    #[error(
        "latitude must be between {MIN_LATITUDE}° and {MAX_LATITUDE}° ({0})"
    )]
    pub struct LatitudeError(pub f64);

    #[derive(Debug, Error)]
    #[error("longitude must be between {MIN_LONGITUDE}° and {MAX_LONGITUDE}° ({0})")]
    pub struct LongitudeError(pub f64);

    #[derive(Debug, Error)]
    #[error("height must not be negative ({0})")]
    pub struct HeightError(pub f64);

    #[derive(Debug, Error)]
    pub enum LocationErrorT {
        #[error(transparent)]
        Latitude(#[from] LatitudeError),
        #[error(transparent)]
        Longitude(#[from] LongitudeError),
        #[error(transparent)]
        Height(#[from] HeightError),
    }

    #[derive(Debug, Error)]
    #[error("location:\n{0}")]
    pub struct LocationError(#[from] VecError<LocationErrorT>);

    #[derive(Debug, Error)]
    pub enum SunTimeError {
        #[error("sun time angle must be between {MIN_SUN_TIME_ANGLE}° and {MAX_SUN_TIME_ANGLE}° ({0})")]
        Angle(f64),
        #[error("sun time labels must not be empty")]
        EmptyLabel,
    }

    impl From<Vec<LocationErrorT>> for LocationError {
        fn from(v: Vec<LocationErrorT>) -> Self {
            Self(VecError(v))
        }
    }
}

pub mod parse {
    use super::*;
    use std::num::ParseFloatError;

    #[derive(Debug, Error)]
    pub enum LatitudeError {
        #[error("{0} ({1})")]
        Parse(ParseFloatError, String),
        #[error("{0}")]
        Type(#[from] types::LatitudeError),
    }

    #[derive(Debug, Error)]
    pub enum LongitudeError {
        #[error("{0} ({1})")]
        Parse(ParseFloatError, String),
        #[error("{0}")]
        Type(#[from] types::LongitudeError),
    }

    #[derive(Debug, Error)]
    pub enum HeightError {
        #[error("{0} ({1})")]
        Parse(ParseFloatError, String),
        #[error("{0}")]
        Type(#[from] types::HeightError),
    }

    #[derive(Debug, Error)]
    pub enum LocationErrorT {
        #[error(transparent)]
        Latitude(#[from] LatitudeError),
        #[error(transparent)]
        Longitude(#[from] LongitudeError),
    }

    #[derive(Debug, Error)]
    pub enum LocationError {
        #[error("{0}")]
        Multiple(#[from] VecError<LocationErrorT>),
        #[error("- invalid format, expected LATITUDE:LONGITUDE")]
        Fmt,
    }

    #[derive(Debug, Error)]
    pub enum SunTimeError {
        #[error("- {0} ({1})")]
        Parse(ParseFloatError, String),
        #[error("- {0}")]
        Type(#[from] types::SunTimeError),
        #[error("- invalid format, expected ANGLE:MORNING:EVENING")]
        Fmt,
    }

    #[derive(Debug, Error)]
    #[error("{0} ({1})")]
    pub struct TimeError(pub chrono::ParseError, pub String);

    impl From<Vec<LocationErrorT>> for LocationError {
        fn from(v: Vec<LocationErrorT>) -> Self {
            Self::Multiple(VecError(v))
        }
    }
}

pub mod config {
    use super::*;
    use std::{io, path::PathBuf};

    #[derive(Debug, Error)]
    pub enum ConfigError {
        #[error("{0}")]
        File(#[from] ConfigFileError),
        #[error("invalid sun times:\n{0}")]
        SunTimes(#[from] VecError<types::SunTimeError>),
    }

    #[derive(Debug, Error)]
    pub enum ConfigFileError {
        #[error("given path is not a file ({0})")]
        PathNotFile(PathBuf),
        #[error("unable to find configuration file. Use the -c flag.")]
        ConfigDirNotFound,
        #[error("unable to read file ({1}):\n{0}")]
        OpenFailed(io::Error, PathBuf),
        #[error("unable to deserialize file ({1}):\n{0}")]
        DeserializeFailed(toml::de::Error, PathBuf),
    }
}

impl From<ConfigError> for SuncalcError {
    fn from(e: ConfigError) -> Self {
        Self(SuncalcErrorKind::Config(e))
    }
}

#[cfg(test)]
mod tests {
    use super::{config::*, *};
    use insta::assert_snapshot;
    use std::path::PathBuf;

    #[test]
    fn test_vec_error_indents_nested_lines() {
        let e = VecError(vec![
            ConfigError::SunTimes(VecError(vec![
                types::SunTimeError::Angle(120.0),
                types::SunTimeError::EmptyLabel,
            ])),
            ConfigError::File(ConfigFileError::PathNotFile(PathBuf::from(
                "/nonexistent",
            ))),
        ]);
        assert_snapshot!(e, @r###"
        - invalid sun times:
          - sun time angle must be between -90° and 90° (120)
          - sun time labels must not be empty
        - given path is not a file (/nonexistent)
        "###);
    }

    #[test]
    fn test_exit_code() {
        let e = SuncalcError::from(ConfigError::from(
            ConfigFileError::ConfigDirNotFound,
        ));
        assert_eq!(e.exit_code(), exitcode::CONFIG);
    }
}
