// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! A password is six digits, and a candidate is only worth checking if its
//! digits never decrease. Rather than testing every integer in the range,
//! the walk below steps directly from one non-decreasing candidate to the
//! next, so the adjacency rules are the only per-candidate work left.

use itertools::Itertools;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Number of digits in a password.
pub const WIDTH: usize = 6;

/// A six-digit password, stored most significant digit first.
///
/// The derived `Ord` compares digit arrays lexicographically, which matches
/// numeric order because every password has the same width.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Password([u8; WIDTH]);

impl Password {
    /// Parse a password from exactly [`WIDTH`] ASCII digits.
    pub fn parse(s: &str) -> Option<Password> {
        if s.len() != WIDTH {
            return None;
        }
        let mut digits = [0; WIDTH];
        for (digit, c) in digits.iter_mut().zip(s.chars()) {
            *digit = c.to_digit(10)?.try_into().ok()?;
        }
        Some(Password(digits))
    }

    /// The smallest password with non-decreasing digits that is greater than
    /// or equal to `self`.
    ///
    /// Scans for the first digit lower than its predecessor, then raises it
    /// and everything after it to that predecessor. `254032` becomes
    /// `255555`, and an already non-decreasing password is returned as-is.
    pub fn monotone_ceiling(mut self) -> Password {
        for i in 1..WIDTH {
            if self.0[i] < self.0[i - 1] {
                let floor = self.0[i - 1];
                self.0[i..].fill(floor);
                break;
            }
        }
        self
    }

    /// Advance to the next password with non-decreasing digits, returning
    /// `false` once every digit is 9 and no successor exists.
    ///
    /// The rightmost digit below 9 is incremented, and every digit after it
    /// is set to the same value, so the result is the immediate successor
    /// among non-decreasing passwords. Only call this on a password whose
    /// digits already never decrease.
    pub fn bump(&mut self) -> bool {
        let Some(pos) = self.0.iter().rposition(|&digit| digit < 9) else {
            return false;
        };
        let next = self.0[pos] + 1;
        self.0[pos..].fill(next);
        true
    }

    /// Whether some digit appears twice in a row.
    pub fn has_pair(&self) -> bool {
        self.0.iter().tuple_windows().any(|(a, b)| a == b)
    }

    /// Whether some digit appears exactly twice in a row, with no third
    /// repeat on either side.
    pub fn has_isolated_pair(&self) -> bool {
        self.0
            .iter()
            .dedup_with_count()
            .any(|(count, _)| count == 2)
    }
}

impl Display for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for digit in self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

/// Count the passwords in `low..high` that satisfy the rules.
///
/// Returns the number with at least one pair of adjacent equal digits, and
/// the number where some such pair is not part of a longer run. Passwords
/// with a decreasing digit are never visited at all: the walk starts at
/// [`Password::monotone_ceiling`] and steps with [`Password::bump`], so both
/// counts only ever consider non-decreasing candidates.
pub fn count_valid(low: Password, high: Password) -> (u64, u64) {
    let mut pairs = 0;
    let mut isolated = 0;
    let mut candidate = low.monotone_ceiling();
    while candidate < high {
        if candidate.has_pair() {
            pairs += 1;
        }
        if candidate.has_isolated_pair() {
            isolated += 1;
        }
        if !candidate.bump() {
            break;
        }
    }
    (pairs, isolated)
}

#[derive(Debug, PartialEq, Eq)]
pub enum RangeError {
    /// The input had no `-` between the bounds.
    MissingSeparator,
    /// A bound was not exactly six ASCII digits.
    BadBound(String),
    /// The low bound was above the high bound.
    Inverted,
}

impl Display for RangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::MissingSeparator => {
                write!(f, "expected a range of the form low-high")
            }
            RangeError::BadBound(bound) => {
                write!(f, "range bound {bound:?} is not a six-digit password")
            }
            RangeError::Inverted => {
                write!(f, "the low end of the range is above the high end")
            }
        }
    }
}

impl Error for RangeError {}

/// Parse a `low-high` range, tolerating whitespace around either bound.
pub fn parse_range(text: &str) -> Result<(Password, Password), RangeError> {
    let Some((low, high)) = text.split_once('-') else {
        return Err(RangeError::MissingSeparator);
    };
    let parse_bound = |bound: &str| {
        let bound = bound.trim();
        Password::parse(bound).ok_or_else(|| RangeError::BadBound(bound.to_owned()))
    };
    let (low, high) = (parse_bound(low)?, parse_bound(high)?);
    if low > high {
        return Err(RangeError::Inverted);
    }
    Ok((low, high))
}
