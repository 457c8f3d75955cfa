// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Generic time–scale parameterised instant.
//!
//! [`Time<S>`] is the core type of this crate.  It stores a scalar
//! quantity in [`Days`] whose *meaning* is determined by the compile-time
//! marker `S: TimeScale`.  All arithmetic (addition/subtraction of
//! durations, difference between instants), UTC conversion, serialisation,
//! and display are implemented generically — no code duplication.
//!
//! Domain-specific methods that only make sense for a particular scale
//! (e.g. [`Time::<MSD>::sol()`](crate::MSD)) are placed in inherent `impl`
//! blocks gated on the concrete marker type.
//!
//! Every `Time<S>` value is an immutable `Copy` scalar; conversions are
//! pure functions of their inputs, so concurrent callers never need
//! coordination.

use crate::error::TimeError;
use crate::tt_utc::TtUtcOffset;
use chrono::{DateTime, Utc};
use qtty::*;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for time scales.
///
/// A **time scale** defines:
///
/// 1. A human-readable **label** (e.g. `"JD"`, `"UTC"`, `"MSD"`).
/// 2. A pair of conversion functions between the scale's native quantity
///    (in [`Days`]) and **Julian Date in TT** (JD(TT)) — the canonical
///    internal representation used throughout the crate.
///
/// For pure *epoch counters* (JD, Unix Time) the conversions are trivial
/// constant offsets that the compiler will inline and fold away.
///
/// For the *Mars sol count* ([`MSD`](crate::MSD)) the conversions are an
/// affine rescaling of the day axis, still branch-free arithmetic.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Display label used by [`Time`] formatting.
    const LABEL: &'static str;

    /// Convert a quantity in this scale's native unit to an absolute JD(TT).
    fn to_jd_tt(value: Days) -> Days;

    /// Convert an absolute JD(TT) back to this scale's native quantity.
    fn from_jd_tt(jd_tt: Days) -> Days;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S> — the generic instant
// ═══════════════════════════════════════════════════════════════════════════

/// A point on time scale `S`.
///
/// Internally stores a single `Days` quantity whose interpretation depends on
/// `S: TimeScale`.  The struct is `Copy` and zero-cost: `PhantomData` is
/// zero-sized, so `Time<S>` is layout-identical to `Days` (a single `f64`).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

/// JD(UTC) of the Unix epoch, shared by the timestamp conversions below.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Milliseconds in one Earth day.
const MILLIS_PER_DAY: f64 = 86_400_000.0;

impl<S: TimeScale> Time<S> {
    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw scalar (days since the scale's epoch).
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
            _scale: PhantomData,
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Absolute Julian Day (TT) corresponding to this instant.
    #[inline]
    pub fn julian_day(&self) -> Days {
        S::to_jd_tt(self.quantity)
    }

    /// Absolute Julian Day (TT) as scalar.
    #[inline]
    pub fn julian_day_value(&self) -> f64 {
        self.julian_day().value()
    }

    /// Build an instant from an absolute Julian Day (TT).
    #[inline]
    pub fn from_julian_day(jd: Days) -> Self {
        Self::from_days(S::from_jd_tt(jd))
    }

    // ── cross-scale conversion (mirroring qtty's .to::<T>()) ─────────

    /// Convert this instant to another time scale.
    ///
    /// The conversion routes through the canonical JD(TT) intermediate:
    ///
    /// ```text
    /// self → JD(TT) → target
    /// ```
    ///
    /// For pure epoch-offset scales this compiles down to a single
    /// addition/subtraction; for [`MSD`](crate::MSD) it is the full
    /// Earth→Mars rescaling.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::<T>::from_julian_day(S::to_jd_tt(self.quantity))
    }

    // ── UTC helpers ───────────────────────────────────────────────────

    /// Convert to a `chrono::DateTime<Utc>` using the default TT − UTC
    /// offset.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        self.to_utc_with(TtUtcOffset::DEFAULT)
    }

    /// Convert to a `chrono::DateTime<Utc>` with an explicit TT − UTC
    /// offset.
    pub fn to_utc_with(&self, offset: TtUtcOffset) -> Option<DateTime<Utc>> {
        let jd_utc = self.julian_day() - offset.to_days();
        let seconds_since_epoch = (jd_utc - Days::new(UNIX_EPOCH_JD)).to::<Second>().value();
        let secs = seconds_since_epoch.floor() as i64;
        let nanos = ((seconds_since_epoch - secs as f64) * 1e9) as u32;
        DateTime::<Utc>::from_timestamp(secs, nanos)
    }

    /// Build an instant from a `chrono::DateTime<Utc>` using the default
    /// TT − UTC offset.
    ///
    /// The timestamp is placed on the UTC Julian-day axis, shifted onto the
    /// TT axis by the fixed offset, and converted to the target scale, so
    /// the resulting `Time<S>` is on the target scale's axis.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self::from_utc_with(datetime, TtUtcOffset::DEFAULT)
    }

    /// Build an instant from a `chrono::DateTime<Utc>` with an explicit
    /// TT − UTC offset.
    pub fn from_utc_with(datetime: DateTime<Utc>, offset: TtUtcOffset) -> Self {
        let seconds_since_epoch = Seconds::new(datetime.timestamp() as f64);
        let nanos = Seconds::new(datetime.timestamp_subsec_nanos() as f64 / 1e9);
        let jd_utc = Days::new(UNIX_EPOCH_JD) + (seconds_since_epoch + nanos).to::<Day>();
        Self::from_julian_day(jd_utc + offset.to_days())
    }

    /// Build an instant from milliseconds since the Unix epoch, using the
    /// default TT − UTC offset.
    ///
    /// This is the raw-timestamp entry point for callers that do not go
    /// through `chrono`.  Non-finite input is rejected with
    /// [`TimeError::NonFiniteInput`]; no default instant is ever
    /// substituted.
    pub fn from_unix_millis(millis: f64) -> Result<Self, TimeError> {
        Self::from_unix_millis_with(millis, TtUtcOffset::DEFAULT)
    }

    /// Build an instant from milliseconds since the Unix epoch with an
    /// explicit TT − UTC offset.
    pub fn from_unix_millis_with(millis: f64, offset: TtUtcOffset) -> Result<Self, TimeError> {
        if !millis.is_finite() {
            return Err(TimeError::NonFiniteInput {
                context: "unix milliseconds",
                value: millis,
            });
        }
        let jd_utc = Days::new(UNIX_EPOCH_JD + millis / MILLIS_PER_DAY);
        Ok(Self::from_julian_day(jd_utc + offset.to_days()))
    }

    // ── min / max ─────────────────────────────────────────────────────

    /// Element-wise minimum.
    #[inline]
    pub const fn min(self, other: Self) -> Self {
        Self::from_days(self.quantity.min_const(other.quantity))
    }

    /// Element-wise maximum.
    #[inline]
    pub const fn max(self, other: Self) -> Self {
        Self::from_days(self.quantity.max_const(other.quantity))
    }

    /// Mean (midpoint) between two instants on the same time scale.
    #[inline]
    pub const fn mean(self, other: Self) -> Self {
        Self::from_days(self.quantity.const_add(other.quantity).const_div(2.0))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Generic trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Display ───────────────────────────────────────────────────────────────

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl<S: TimeScale> AddAssign<Days> for Time<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl<S: TimeScale> SubAssign<Days> for Time<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

impl<S: TimeScale> std::ops::Div<Days> for Time<S> {
    type Output = f64;
    #[inline]
    fn div(self, rhs: Days) -> Self::Output {
        (self.quantity / rhs).simplify().value()
    }
}

impl<S: TimeScale> std::ops::Div<f64> for Time<S> {
    type Output = f64;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        (self.quantity / rhs).value()
    }
}

// ── From/Into Days ────────────────────────────────────────────────────────

impl<S: TimeScale> From<Days> for Time<S> {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl<S: TimeScale> From<Time<S>> for Days {
    #[inline]
    fn from(time: Time<S>) -> Self {
        time.quantity
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::super::scales::{JD, MSD, UTC};
    use super::*;

    #[test]
    fn test_julian_day_creation() {
        let jd = Time::<JD>::new(2_451_545.0);
        assert_eq!(jd.quantity(), Days::new(2_451_545.0));
    }

    #[test]
    fn test_jd_utc_roundtrip() {
        // from_utc applies TT−UTC (UTC→TT); to_utc inverts it (TT→UTC).
        let datetime = DateTime::from_timestamp(946_728_000, 0).unwrap();
        let jd = Time::<JD>::from_utc(datetime);
        let back = jd.to_utc().expect("to_utc");
        let delta_ns =
            back.timestamp_nanos_opt().unwrap() - datetime.timestamp_nanos_opt().unwrap();
        assert!(delta_ns.abs() < 1_000, "roundtrip error: {} ns", delta_ns);
    }

    #[test]
    fn test_from_utc_applies_tt_offset() {
        // 2000-01-01 12:00:00 UTC → JD(UTC)=2451545.0; TT−UTC = 69.184 s
        let datetime = DateTime::from_timestamp(946_728_000, 0).unwrap();
        let jd = Time::<JD>::from_utc(datetime);
        let offset_secs = (jd.quantity() - Days::new(2_451_545.0)).to::<Second>();
        assert!(
            (offset_secs - Seconds::new(69.184)).abs() < Seconds::new(1e-6),
            "TT−UTC correction = {} s, expected 69.184 s",
            offset_secs
        );
    }

    #[test]
    fn test_from_utc_with_custom_offset() {
        let datetime = DateTime::from_timestamp(946_728_000, 0).unwrap();
        let offset = TtUtcOffset::new(70.184).unwrap();
        let jd = Time::<JD>::from_utc_with(datetime, offset);
        let offset_secs = (jd.quantity() - Days::new(2_451_545.0)).to::<Second>();
        assert!((offset_secs - Seconds::new(70.184)).abs() < Seconds::new(1e-6));

        let back = jd.to_utc_with(offset).expect("to_utc_with");
        let delta_ns =
            back.timestamp_nanos_opt().unwrap() - datetime.timestamp_nanos_opt().unwrap();
        assert!(delta_ns.abs() < 1_000);
    }

    #[test]
    fn test_from_unix_millis_j2000() {
        // 946728000000 ms = 2000-01-01T12:00:00 UTC → JD(UTC) exactly 2451545.0
        let jd = Time::<JD>::from_unix_millis(946_728_000_000.0).unwrap();
        assert!((jd.quantity() - Days::new(2_451_545.000_800_741)).abs() < Days::new(1e-9));
    }

    #[test]
    fn test_from_unix_millis_matches_from_utc() {
        let datetime = DateTime::from_timestamp(1_700_000_000, 250_000_000).unwrap();
        let from_dt = Time::<MSD>::from_utc(datetime);
        let from_ms = Time::<MSD>::from_unix_millis(1_700_000_000_250.0).unwrap();
        assert!((from_dt.quantity() - from_ms.quantity()).abs() < Days::new(1e-9));
    }

    #[test]
    fn test_from_unix_millis_rejects_non_finite() {
        assert!(Time::<JD>::from_unix_millis(f64::NAN).is_err());
        assert!(Time::<JD>::from_unix_millis(f64::INFINITY).is_err());
        assert!(Time::<MSD>::from_unix_millis(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_const_min_max() {
        const A: Time<JD> = Time::<JD>::new(10.0);
        const B: Time<JD> = Time::<JD>::new(14.0);
        const MIN: Time<JD> = A.min(B);
        const MAX: Time<JD> = A.max(B);
        assert_eq!(MIN.quantity(), Days::new(10.0));
        assert_eq!(MAX.quantity(), Days::new(14.0));
    }

    #[test]
    fn test_mean_and_const_mean() {
        let a = Time::<MSD>::new(10.0);
        let b = Time::<MSD>::new(14.0);
        assert_eq!(a.mean(b).quantity(), Days::new(12.0));
        assert_eq!(b.mean(a).quantity(), Days::new(12.0));

        const MID: Time<JD> = Time::<JD>::new(10.0).mean(Time::<JD>::new(14.0));
        assert_eq!(MID.quantity(), Days::new(12.0));
    }

    #[test]
    fn test_into_days() {
        let jd = Time::<JD>::new(2_451_547.5);
        let days: Days = jd.into();
        assert_eq!(days, 2_451_547.5);

        let roundtrip = Time::<JD>::from(days);
        assert_eq!(roundtrip, jd);
    }

    #[test]
    fn test_msd_creation() {
        let msd = Time::<MSD>::new(44_791.5);
        assert_eq!(msd.quantity(), Days::new(44_791.5));
    }

    #[test]
    fn test_msd_utc_roundtrip() {
        let datetime = DateTime::from_timestamp(946_728_000, 0).unwrap();
        let msd = Time::<MSD>::from_utc(datetime);
        let back = msd.to_utc().expect("to_utc");
        let delta_ns =
            back.timestamp_nanos_opt().unwrap() - datetime.timestamp_nanos_opt().unwrap();
        assert!(delta_ns.abs() < 1_000, "roundtrip error: {} ns", delta_ns);
    }

    #[test]
    fn test_msd_add_sub_days() {
        let msd = Time::<MSD>::new(44_791.0);
        assert_eq!((msd + Days::new(1.5)).quantity(), Days::new(44_792.5));
        assert_eq!((msd - Days::new(1.5)).quantity(), Days::new(44_789.5));
    }

    #[test]
    fn test_msd_sub_msd() {
        let a = Time::<MSD>::new(44_792.0);
        let b = Time::<MSD>::new(44_791.0);
        assert_eq!(a - b, Days::new(1.0));
    }

    #[test]
    fn test_msd_comparison() {
        let a = Time::<MSD>::new(44_791.0);
        let b = Time::<MSD>::new(44_792.0);
        assert!(a < b);
        assert!(b > a);
    }

    #[test]
    fn test_display_jd() {
        let jd = Time::<JD>::new(2_451_545.0);
        let s = format!("{jd}");
        assert!(s.contains("Julian Day"));
    }

    #[test]
    fn test_display_msd() {
        let msd = Time::<MSD>::new(44_791.5);
        let s = format!("{msd}");
        assert!(s.contains("MSD"));
    }

    #[test]
    fn test_add_assign_sub_assign() {
        let mut msd = Time::<MSD>::new(44_791.0);
        msd += Days::new(1.0);
        assert_eq!(msd.quantity(), Days::new(44_792.0));
        msd -= Days::new(0.5);
        assert_eq!(msd.quantity(), Days::new(44_791.5));
    }

    #[test]
    fn test_div_days_and_f64() {
        let jd = Time::<JD>::new(100.0);
        assert!((jd / Days::new(2.0) - 50.0).abs() < 1e-12);
        assert!((jd / 4.0 - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_to_method_utc_jd() {
        let utc = Time::<UTC>::new(2_451_545.0);
        let jd = utc.to::<JD>();
        let expected = Days::new(2_451_545.0) + Seconds::new(69.184).to::<Day>();
        assert!((jd.quantity() - expected).abs() < Days::new(1e-10));
    }
}
