// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for the areotime crate.

/// Error type for all fallible operations in the areotime crate.
///
/// A negative sol count or Martian year is a valid result for instants
/// before the reference epoch, not an error; the only rejectable inputs
/// are non-finite numerics, which are never silently replaced by a
/// default instant.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum TimeError {
    /// Returned when a numeric input is NaN or infinite.
    #[error("non-finite {context}: {value}")]
    NonFiniteInput {
        /// Which input was rejected.
        context: &'static str,
        /// The offending value.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_non_finite_input() {
        let e = TimeError::NonFiniteInput {
            context: "unix milliseconds",
            value: f64::NAN,
        };
        assert_eq!(e.to_string(), "non-finite unix milliseconds: NaN");
    }

    #[test]
    fn error_non_finite_infinity() {
        let e = TimeError::NonFiniteInput {
            context: "local offset hours",
            value: f64::INFINITY,
        };
        assert_eq!(e.to_string(), "non-finite local offset hours: inf");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<TimeError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<TimeError>();
    }
}
