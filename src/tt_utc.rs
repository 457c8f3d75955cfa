// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # TT − UTC Correction Layer
//!
//! Terrestrial Time runs ahead of UTC by the accumulated leap-second count
//! plus the fixed 32.184 s TAI offset.  This crate models the difference as
//! a single constant, [`TtUtcOffset`], instead of a leap-second table: the
//! value drifts only when a leap second is inserted, so updating it is a
//! configuration change rather than a code change.
//!
//! ## Integration with Time Scales
//!
//! The correction is applied **automatically** by the UTC-axis scale
//! markers ([`UTC`](super::UTC), [`UnixTime`](super::UnixTime)), which are
//! bound to the default value.  Callers that need a corrected offset pass a
//! `TtUtcOffset` explicitly through the `*_with` constructors
//! ([`Time::from_utc_with`](super::Time::from_utc_with),
//! [`Time::from_unix_millis_with`](super::Time::from_unix_millis_with)).
//!
//! ## Quick Example
//! ```rust
//! use areotime::{MarsSolDate, TtUtcOffset};
//! use chrono::DateTime;
//!
//! let dt = DateTime::from_timestamp(946_728_000, 0).unwrap();
//! // 69.184 s default, valid since the 2017 leap second
//! let msd = MarsSolDate::from_utc(dt);
//! // same instant with an explicitly corrected offset
//! let offset = TtUtcOffset::new(69.184).unwrap();
//! let msd2 = MarsSolDate::from_utc_with(dt, offset);
//! assert_eq!(msd, msd2);
//! ```

use crate::error::TimeError;
use qtty::{Day, Days, Seconds};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The TT − UTC offset, in seconds.
///
/// Defaults to 69.184 s (37 leap seconds + 32.184 s), the value in force
/// since 2017-01-01.  Construction validates finiteness; a NaN or infinite
/// offset would silently poison every downstream conversion.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct TtUtcOffset {
    seconds: Seconds,
}

impl TtUtcOffset {
    /// The default TT − UTC value in seconds.
    pub const DEFAULT_SECONDS: f64 = 69.184;

    /// The default offset (69.184 s).
    pub const DEFAULT: Self = Self {
        seconds: Seconds::new(Self::DEFAULT_SECONDS),
    };

    /// Create an offset from a raw seconds value.
    ///
    /// Returns [`TimeError::NonFiniteInput`] for NaN or infinite input.
    pub fn new(seconds: f64) -> Result<Self, TimeError> {
        if !seconds.is_finite() {
            return Err(TimeError::NonFiniteInput {
                context: "TT-UTC offset seconds",
                value: seconds,
            });
        }
        Ok(Self {
            seconds: Seconds::new(seconds),
        })
    }

    /// The offset in seconds.
    #[inline]
    pub const fn seconds(&self) -> Seconds {
        self.seconds
    }

    /// The offset converted to days, ready for Julian-day arithmetic.
    #[inline]
    pub fn to_days(&self) -> Days {
        self.seconds.to::<Day>()
    }
}

impl Default for TtUtcOffset {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(feature = "serde")]
impl Serialize for TtUtcOffset {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.seconds.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TtUtcOffset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Self::new(v).map_err(serde::de::Error::custom)
    }
}
