//! Core types for the curdle score store.
//!
//! The on-disk unit is a fixed 21-byte line: a 10-byte name field, a 10-byte
//! score field, and a terminating newline. [`PlayerName`] and [`ScoreBounds`]
//! make values that cannot be serialized into those fields unrepresentable,
//! so the codec never has to truncate.

use serde::Serialize;

use curdle_error::{CurdleError, Result};

/// Size of one field (name or score) in a record line, in bytes.
pub const FIELD_SIZE: usize = 10;

/// Size of one record line in bytes: `name[10]` + `score[10]` + `'\n'`.
pub const RECORD_SIZE: usize = 2 * FIELD_SIZE + 1;

/// Maximum significant bytes in a player name; byte 9 of the field is
/// always the terminating `'\0'`.
pub const NAME_MAX: usize = FIELD_SIZE - 1;

/// A player name that fits the on-disk name field.
///
/// At most [`NAME_MAX`] bytes, with no interior `'\0'` (the field
/// terminator) and no `'\n'` (the record terminator).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlayerName(String);

impl PlayerName {
    /// Validate and wrap a player name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.len() > NAME_MAX {
            return Err(CurdleError::invalid_input(format!(
                "player name {name:?} is {} bytes, limit is {NAME_MAX}",
                name.len()
            )));
        }
        if name.bytes().any(|byte| byte == b'\0' || byte == b'\n') {
            return Err(CurdleError::invalid_input(format!(
                "player name {name:?} contains a field or record terminator"
            )));
        }
        Ok(Self(name))
    }

    /// The name text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name as it appears on disk: null-padded to the full field width.
    #[must_use]
    pub fn padded_bytes(&self) -> [u8; FIELD_SIZE] {
        let mut field = [0_u8; FIELD_SIZE];
        field[..self.0.len()].copy_from_slice(self.0.as_bytes());
        field
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One player's (name, cumulative score) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRecord {
    /// Player the record belongs to.
    pub name: PlayerName,
    /// Latest cumulative score.
    pub score: i64,
}

impl ScoreRecord {
    /// Construct a record. Bounds are enforced by the mutator, not here.
    #[must_use]
    pub const fn new(name: PlayerName, score: i64) -> Self {
        Self { name, score }
    }
}

/// Permissible score range, as a configuration value.
///
/// The two presets resolve the historical disagreement over the range: both
/// endpoints' decimal text (sign included) occupies at most [`FIELD_SIZE`]
/// bytes, so every in-bounds score is encodable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBounds {
    min: i64,
    max: i64,
}

impl ScoreBounds {
    /// Symmetric range: `-999_999_999..=999_999_999`. The default.
    pub const SYMMETRIC: Self = Self {
        min: -999_999_999,
        max: 999_999_999,
    };

    /// Permissive range: `-999_999_999..=9_999_999_999`, the widest positive
    /// value whose digits fill the score field exactly.
    pub const PERMISSIVE: Self = Self {
        min: -999_999_999,
        max: 9_999_999_999,
    };

    /// Construct custom bounds, rejecting endpoints whose decimal text would
    /// not fit the score field.
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if min > max {
            return Err(CurdleError::invalid_input(format!(
                "score bounds inverted: {min} > {max}"
            )));
        }
        for endpoint in [min, max] {
            if decimal_width(endpoint) > FIELD_SIZE {
                return Err(CurdleError::invalid_input(format!(
                    "score bound {endpoint} does not fit a {FIELD_SIZE}-byte field"
                )));
            }
        }
        Ok(Self { min, max })
    }

    /// Lower bound (inclusive).
    #[must_use]
    pub const fn min(&self) -> i64 {
        self.min
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Whether an accumulated value lies within the range.
    ///
    /// Takes `i128` so callers can test a sum that may already have left the
    /// `i64` range.
    #[must_use]
    pub const fn contains(&self, score: i128) -> bool {
        score >= self.min as i128 && score <= self.max as i128
    }
}

impl Default for ScoreBounds {
    fn default() -> Self {
        Self::SYMMETRIC
    }
}

/// Number of bytes the decimal text of `value` occupies, sign included.
fn decimal_width(value: i64) -> usize {
    // 20 digits max for i64, plus sign; a heap format here is fine because
    // this only runs at configuration time.
    format!("{value}").len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_name_accepts_up_to_nine_bytes() {
        let name = PlayerName::new("BobFoster").expect("nine bytes should fit");
        assert_eq!(name.as_str(), "BobFoster");
        assert_eq!(name.padded_bytes(), *b"BobFoster\0");
    }

    #[test]
    fn player_name_rejects_ten_bytes() {
        let err = PlayerName::new("Bartholomew").expect_err("too long");
        assert_eq!(err.kind(), "invalid-input");
    }

    #[test]
    fn player_name_rejects_embedded_terminators() {
        assert!(PlayerName::new("Bob\0Fos").is_err());
        assert!(PlayerName::new("Bob\nFos").is_err());
    }

    #[test]
    fn padded_bytes_null_fill_the_field() {
        let name = PlayerName::new("Al").expect("valid");
        assert_eq!(name.padded_bytes(), *b"Al\0\0\0\0\0\0\0\0");
    }

    #[test]
    fn symmetric_bounds_are_default() {
        assert_eq!(ScoreBounds::default(), ScoreBounds::SYMMETRIC);
        assert!(ScoreBounds::SYMMETRIC.contains(999_999_999));
        assert!(!ScoreBounds::SYMMETRIC.contains(1_000_000_000));
        assert!(!ScoreBounds::SYMMETRIC.contains(-1_000_000_000));
    }

    #[test]
    fn permissive_bounds_allow_ten_digit_positives() {
        assert!(ScoreBounds::PERMISSIVE.contains(9_999_999_999));
        assert!(!ScoreBounds::PERMISSIVE.contains(10_000_000_000));
        assert!(!ScoreBounds::PERMISSIVE.contains(-1_000_000_000));
    }

    #[test]
    fn custom_bounds_must_fit_the_field() {
        assert!(ScoreBounds::new(-999_999_999, 9_999_999_999).is_ok());
        // 11 characters with the sign.
        let err = ScoreBounds::new(-9_999_999_999, 0).expect_err("too wide");
        assert_eq!(err.kind(), "invalid-input");
        assert!(ScoreBounds::new(10, -10).is_err());
    }

    #[test]
    fn record_serializes_for_reporting() {
        let record = ScoreRecord::new(PlayerName::new("Alice").expect("valid"), 50);
        let json = serde_json::to_string(&record).expect("serializable");
        assert_eq!(json, r#"{"name":"Alice","score":50}"#);
    }
}
