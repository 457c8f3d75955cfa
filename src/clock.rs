// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Coordinated Mars Time clock rendering.
//!
//! [`MarsClock`] decomposes an MTC value (hours on a 24-hour scale) into
//! zero-padded `HH:MM:SS` fields by **successive truncation** — never
//! rounding.  Rounding the seconds field would let `:60` appear at the top
//! of a minute; truncation keeps every field inside its radix, and a carry
//! guard absorbs the one case floating error can still produce.
//!
//! Negative and over-range inputs wrap into `[0, 24)` with the Euclidean
//! remainder, the same discipline used for MTC extraction itself.

use crate::error::TimeError;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// Hours in one sol on the MTC scale.
const HOURS_PER_SOL: f64 = 24.0;

/// Wrap an MTC value into `[0, 24)`.
///
/// Euclidean remainder, so negative inputs land in range instead of
/// carrying their sign through:
///
/// ```
/// use areotime::wrap_mtc;
///
/// assert_eq!(wrap_mtc(30.0), 6.0);
/// assert_eq!(wrap_mtc(-1.5), 22.5);
/// assert_eq!(wrap_mtc(24.0), 0.0);
/// ```
#[inline]
pub fn wrap_mtc(mtc: f64) -> f64 {
    mtc.rem_euclid(HOURS_PER_SOL)
}

/// Add a per-location offset (in hours, positive east) to an MTC value and
/// re-wrap into `[0, 24)`.
///
/// The offset comes from the caller — typically a site longitude converted
/// to hours; no location table ships with this crate.
///
/// ```
/// use areotime::apply_local_offset;
///
/// let local = apply_local_offset(18.0, 12.0).unwrap();
/// assert_eq!(local, 6.0);
/// ```
pub fn apply_local_offset(mtc: f64, offset_hours: f64) -> Result<f64, TimeError> {
    if !mtc.is_finite() {
        return Err(TimeError::NonFiniteInput {
            context: "MTC hours",
            value: mtc,
        });
    }
    if !offset_hours.is_finite() {
        return Err(TimeError::NonFiniteInput {
            context: "local offset hours",
            value: offset_hours,
        });
    }
    Ok(wrap_mtc(mtc + offset_hours))
}

/// Day or night on the Martian surface, judged from the MTC hour.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SolPhase {
    /// 06:00 ≤ MTC < 18:00.
    Day,
    /// The other half of the sol.
    Night,
}

/// A Coordinated Mars Time of day as zero-padded `HH:MM:SS` fields.
///
/// Hours are in `[0, 23]`, minutes and seconds in `[0, 59]`, always; the
/// constructors wrap and carry so no field can escape its range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MarsClock {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl MarsClock {
    /// Decompose an MTC value into clock fields.
    ///
    /// The value is wrapped into `[0, 24)`, then hours, minutes, and
    /// seconds are extracted by successive truncation.  Returns
    /// [`TimeError::NonFiniteInput`] for NaN or infinite input.
    ///
    /// ```
    /// use areotime::MarsClock;
    ///
    /// let clock = MarsClock::from_mtc(14.885_279_4).unwrap();
    /// assert_eq!(clock.to_string(), "14:53:07");
    /// ```
    pub fn from_mtc(mtc: f64) -> Result<Self, TimeError> {
        if !mtc.is_finite() {
            return Err(TimeError::NonFiniteInput {
                context: "MTC hours",
                value: mtc,
            });
        }
        let wrapped = wrap_mtc(mtc);
        let hours_f = wrapped.trunc();
        let minutes_f = ((wrapped - hours_f) * 60.0).trunc();
        let seconds_f = (((wrapped - hours_f) * 60.0 - minutes_f) * 60.0).trunc();

        let mut hours = hours_f as u8;
        let mut minutes = minutes_f as u8;
        let mut seconds = seconds_f as u8;
        // rem_euclid can return the modulus itself for values a rounding
        // error below zero, and the scaled fractions can land exactly on
        // 60; carry instead of emitting an out-of-range digit.
        if seconds == 60 {
            seconds = 0;
            minutes += 1;
        }
        if minutes == 60 {
            minutes = 0;
            hours += 1;
        }
        if hours == 24 {
            hours = 0;
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Decompose an MTC value shifted by a per-location offset.
    ///
    /// Equivalent to [`apply_local_offset`] followed by
    /// [`from_mtc`](Self::from_mtc).
    pub fn from_mtc_offset(mtc: f64, offset_hours: f64) -> Result<Self, TimeError> {
        Self::from_mtc(apply_local_offset(mtc, offset_hours)?)
    }

    /// The hours field, in `[0, 23]`.
    #[inline]
    pub const fn hours(&self) -> u8 {
        self.hours
    }

    /// The minutes field, in `[0, 59]`.
    #[inline]
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    /// The seconds field, in `[0, 59]`.
    #[inline]
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Day or night at this time of sol, using the 06:00–18:00 day window.
    #[inline]
    pub const fn phase(&self) -> SolPhase {
        if self.hours >= 6 && self.hours < 18 {
            SolPhase::Day
        } else {
            SolPhase::Night
        }
    }
}

impl fmt::Display for MarsClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

// Serde support for MarsClock.
//
// Serialises the fields as zero-padded two-digit strings, matching the
// shape existing JSON consumers of the clock display expect.
#[cfg(feature = "serde")]
impl Serialize for MarsClock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("MarsClock", 3)?;
        s.serialize_field("hours", &format!("{:02}", self.hours))?;
        s.serialize_field("minutes", &format!("{:02}", self.minutes))?;
        s.serialize_field("seconds", &format!("{:02}", self.seconds))?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for MarsClock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            hours: String,
            minutes: String,
            seconds: String,
        }

        fn field<E: serde::de::Error>(name: &str, raw: &str, max: u8) -> Result<u8, E> {
            let v: u8 = raw
                .parse()
                .map_err(|_| E::custom(format!("invalid {name} field: {raw:?}")))?;
            if v > max {
                return Err(E::custom(format!("{name} field out of range: {v}")));
            }
            Ok(v)
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Self {
            hours: field("hours", &raw.hours, 23)?,
            minutes: field("minutes", &raw.minutes, 59)?,
            seconds: field("seconds", &raw.seconds, 59)?,
        })
    }
}
