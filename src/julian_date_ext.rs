// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date (`Time<JD>`) specific extensions.

use super::instant::Time;
use super::scales::{JD, MSD};

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 TT  (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// Convenience: Mars Sol Date corresponding to this JD(TT).
    ///
    /// Kept as a convenience wrapper for `self.to::<MSD>()`.
    #[inline]
    pub fn to_msd(&self) -> Time<MSD> {
        self.to::<MSD>()
    }
}
