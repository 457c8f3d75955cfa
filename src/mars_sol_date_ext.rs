// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Mars Sol Date (`Time<MSD>`) specific extensions.
//!
//! The sol count, the Coordinated Mars Time of day, the calendar sol index,
//! and the Martian year are all projections of a single `Time<MSD>` value;
//! the methods here extract them without ever mutating the instant.

use qtty::Seconds;

use super::clock::MarsClock;
use super::error::TimeError;
use super::instant::Time;
use super::scales::{JD, MSD};

impl Time<MSD> {
    /// One Martian solar day: 24 h 39 m 35.244 s of Earth time.
    pub const SECONDS_PER_SOL: Seconds = Seconds::new(88_775.244);

    /// Length of a Martian year in sols under the fixed-length convention.
    ///
    /// The true year length varies with Mars's orbit; this constant is a
    /// documented approximation that drifts from the Ls-based calendar over
    /// long timespans and is kept literal for output compatibility.
    pub const SOLS_PER_MARTIAN_YEAR: f64 = 668.6;

    /// Sol count at the start of Martian year 1 under the same convention.
    pub const YEAR_ONE_EPOCH: Self = Self::new(44_796.0 - 0.000_96 + 4.5);

    /// The calendar sol index: the integer part of the sol count, truncated
    /// toward negative infinity.
    ///
    /// Negative for instants before the sol-zero reference epoch; callers
    /// must not conflate negative with invalid.
    ///
    /// ```
    /// use areotime::MarsSolDate;
    ///
    /// assert_eq!(MarsSolDate::new(44791.62).sol(), 44791);
    /// assert_eq!(MarsSolDate::new(-0.25).sol(), -1);
    /// ```
    #[inline]
    pub fn sol(&self) -> i64 {
        self.value().floor() as i64
    }

    /// Coordinated Mars Time: the fractional sol scaled to a 24-hour range.
    ///
    /// Uses the Euclidean remainder, so the result is in `[0, 24)` even for
    /// negative sol counts; a truncating remainder here would leak negative
    /// hours.
    ///
    /// ```
    /// use areotime::MarsSolDate;
    ///
    /// assert_eq!(MarsSolDate::new(44791.0).mtc(), 0.0);
    /// assert!((MarsSolDate::new(44791.5).mtc() - 12.0).abs() < 1e-12);
    /// assert!(MarsSolDate::new(-10930.31).mtc() >= 0.0);
    /// ```
    #[inline]
    pub fn mtc(&self) -> f64 {
        self.value().rem_euclid(1.0) * 24.0
    }

    /// The Martian year index: a step function of the sol count with
    /// [`SOLS_PER_MARTIAN_YEAR`](Self::SOLS_PER_MARTIAN_YEAR)-sol years
    /// anchored at [`YEAR_ONE_EPOCH`](Self::YEAR_ONE_EPOCH).
    ///
    /// Zero or negative before year 1; those are valid results.
    ///
    /// ```
    /// use areotime::MarsSolDate;
    ///
    /// // J2000 precedes the year-1 epoch by a few sols
    /// assert_eq!(MarsSolDate::new(44791.62).martian_year(), 0);
    /// assert_eq!(MarsSolDate::YEAR_ONE_EPOCH.martian_year(), 1);
    /// ```
    #[inline]
    pub fn martian_year(&self) -> i64 {
        let sols_since_year_one = self.value() - Self::YEAR_ONE_EPOCH.value();
        (sols_since_year_one / Self::SOLS_PER_MARTIAN_YEAR).floor() as i64 + 1
    }

    /// The Coordinated Mars Time as a fixed-width clock.
    ///
    /// Fails only for a non-finite sol count (e.g. an instant built from
    /// `Time::new(f64::NAN)`).
    #[inline]
    pub fn clock(&self) -> Result<MarsClock, TimeError> {
        MarsClock::from_mtc(self.mtc())
    }

    /// The local mean time at a site offset from the prime meridian by
    /// `offset_hours`, as a fixed-width clock.
    ///
    /// The offset is caller-supplied (positive east); the sum is re-wrapped
    /// into `[0, 24)`.
    #[inline]
    pub fn local_clock(&self, offset_hours: f64) -> Result<MarsClock, TimeError> {
        MarsClock::from_mtc_offset(self.mtc(), offset_hours)
    }

    /// Convenience: JD(TT) value corresponding to this sol count.
    ///
    /// Kept as a convenience wrapper for `self.to::<JD>()`.
    #[inline]
    pub fn to_jd(&self) -> Time<JD> {
        self.to::<JD>()
    }
}
