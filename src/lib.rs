// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Mars Timekeeping Module
//!
//! This crate converts Earth instants into Mars time: the Mars Sol Date,
//! the Coordinated Mars Time of day, a rollover-correct clock display, and
//! the Martian year index.
//!
//! # Core types
//!
//! - [`Time<S>`] — generic instant parameterised by a [`TimeScale`] marker.
//! - [`TimeScale`] — trait that defines a time scale (epoch offset + conversions).
//! - [`JulianDate`] — type alias for `Time<JD>`.
//! - [`MarsSolDate`] — type alias for `Time<MSD>`.
//! - [`MarsClock`] — zero-padded `HH:MM:SS` Mars time of day.
//! - [`SolPhase`] — day/night judged from the MTC hour.
//! - [`TtUtcOffset`] — the configurable TT − UTC offset (69.184 s default).
//!
//! # Time scales
//!
//! The following markers implement [`TimeScale`]:
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`JD`] | Julian Date (TT axis) |
//! | [`TT`] | Terrestrial Time |
//! | [`UTC`] | Julian day on the UTC axis |
//! | [`UnixTime`] | Unix / POSIX time |
//! | [`MSD`] | Mars Sol Date |
//!
//! # The Earth→Mars pipeline
//!
//! Every conversion routes through Julian Date in Terrestrial Time:
//!
//! ```text
//! Earth instant → JD(TT) → MSD → { MTC, sol, Martian year }
//! ```
//!
//! All steps are pure arithmetic over `f64` — stateless, reentrant, and
//! invertible — so a caller polling once per second (the typical live-clock
//! cadence) just recomputes from the current instant:
//!
//! ```rust
//! use areotime::MarsSolDate;
//! use chrono::DateTime;
//!
//! // 2000-01-01T12:00:00 UTC
//! let dt = DateTime::from_timestamp(946_728_000, 0).unwrap();
//! let msd = MarsSolDate::from_utc(dt);
//!
//! assert_eq!(msd.sol(), 44791);
//! assert_eq!(msd.martian_year(), 0);
//! assert_eq!(msd.clock().unwrap().to_string(), "14:53:07");
//! ```
//!
//! # TT − UTC
//!
//! The difference **TT − UTC** is applied automatically by the UTC-axis
//! scales using the default [`TtUtcOffset`].  The value changes only when a
//! leap second is inserted; pass a corrected offset through the `*_with`
//! constructors when one lands.

mod clock;
mod error;
pub(crate) mod instant;
mod julian_date_ext;
mod mars_sol_date_ext;
pub(crate) mod scales;
mod tt_utc;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use clock::{apply_local_offset, wrap_mtc, MarsClock, SolPhase};
pub use error::TimeError;
pub use instant::{Time, TimeScale};
pub use scales::{UnixTime, JD, MSD, TT, UTC};
pub use tt_utc::TtUtcOffset;

// ── Type aliases ──────────────────────────────────────────────────────────

/// Julian Date — continuous count of days since the Julian Period.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

/// Mars Sol Date — continuous count of Martian solar days.
///
/// This is a type alias for [`Time<MSD>`].  The sol index, Coordinated
/// Mars Time, clock display, and Martian year are all derived from it.
pub type MarsSolDate = Time<MSD>;
