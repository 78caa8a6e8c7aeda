//! Record codec: between [`ScoreRecord`] and the 21-byte wire line.
//!
//! Layout (21 bytes):
//! - `name[10]` — ASCII, left-justified, null-padded; byte 9 is always `'\0'`
//! - `score[10]` — decimal text with optional leading `'-'`, left-justified,
//!   null-padded; a 10-character value fills the field exactly
//! - `'\n'` — record terminator
//!
//! Structural delimiters (the NUL at byte 9, the newline at byte 20, the
//! digit-or-sign at byte 10) are validated by the locator before a line
//! reaches [`decode_record`]; the codec only re-checks what the locator
//! cannot: that the score text is actually a number.

use curdle_error::{CurdleError, Result};
use curdle_types::{FIELD_SIZE, PlayerName, RECORD_SIZE, ScoreRecord};

/// Encode a record into its exact wire representation.
///
/// The inputs are already constrained ([`PlayerName`] fits its field, the
/// mutator bounds-checks the score before encoding), so encoding cannot
/// fail or truncate.
#[must_use]
pub fn encode_record(record: &ScoreRecord) -> [u8; RECORD_SIZE] {
    let mut line = [0_u8; RECORD_SIZE];
    line[..FIELD_SIZE].copy_from_slice(&record.name.padded_bytes());
    let score_text = record.score.to_string();
    line[FIELD_SIZE..FIELD_SIZE + score_text.len()].copy_from_slice(score_text.as_bytes());
    line[RECORD_SIZE - 1] = b'\n';
    line
}

/// Decode a record from a structurally validated wire line.
///
/// Fails with [`CurdleError::Parse`] when the score field is not a decimal
/// integer (including trailing non-numeric bytes after the digits), and
/// with [`CurdleError::CorruptStore`] when a field is not valid UTF-8.
pub fn decode_record(line: &[u8; RECORD_SIZE]) -> Result<ScoreRecord> {
    let name_text = field_text(&line[..FIELD_SIZE])?;
    let score_text = field_text(&line[FIELD_SIZE..2 * FIELD_SIZE])?;

    let name = PlayerName::new(name_text)?;
    let score = score_text.parse::<i64>().map_err(|_| {
        CurdleError::parse(format!(
            "score field {score_text:?} for player {name_text:?} is not a number"
        ))
    })?;

    Ok(ScoreRecord::new(name, score))
}

/// Significant text of a field: everything before the first NUL.
fn field_text(field: &[u8]) -> Result<&str> {
    let end = field.iter().position(|&byte| byte == b'\0');
    let significant = end.map_or(field, |end| &field[..end]);
    std::str::from_utf8(significant)
        .map_err(|_| CurdleError::corrupt(format!("field {significant:?} is not valid UTF-8")))
}
