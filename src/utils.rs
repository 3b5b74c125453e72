/*  utils.rs -- Small shared helpers
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

use crate::error::VecError;
use itertools::Itertools;
use std::error::Error;

pub trait IsDefault {
    fn is_default(&self) -> bool;
}
impl<T: Default + PartialEq> IsDefault for T {
    fn is_default(&self) -> bool {
        *self == T::default()
    }
}

/// Collects every error instead of stopping at the first one
pub trait CollectResult<T, E: Error> {
    fn collect_result(self) -> Result<Vec<T>, VecError<E>>;
}
impl<I, T, E: Error> CollectResult<T, E> for I
where
    I: Itertools<Item = Result<T, E>>,
{
    fn collect_result(self) -> Result<Vec<T>, VecError<E>> {
        let (v, e): (Vec<T>, Vec<E>) = self.partition_result();
        if e.is_empty() {
            Ok(v)
        } else {
            Err(VecError(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::types::SunTimeError, types::SunTime};

    #[test]
    fn test_collect_result() {
        let ok = [(1.0, "a"), (2.0, "b")]
            .into_iter()
            .map(|(n, l)| SunTime::new(n, l, l))
            .collect_result();
        assert_eq!(ok.map(|v| v.len()).ok(), Some(2));

        let err = [(100.0, "a"), (2.0, ""), (3.0, "c")]
            .into_iter()
            .map(|(n, l)| SunTime::new(n, l, l))
            .collect_result();
        let Err(VecError(e)) = err else {
            panic!("expected errors")
        };
        assert!(matches!(
            e.as_slice(),
            [SunTimeError::Angle(_), SunTimeError::EmptyLabel]
        ));
    }

    #[test]
    fn test_is_default() {
        assert!(0.0_f64.is_default());
        assert!(!Some(1).is_default());
    }
}
