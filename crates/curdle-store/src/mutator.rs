//! Store mutator: find-or-append with overflow-checked accumulation.
//!
//! The read-accumulate-write sequence holds no lock; it is correct only
//! under the single-writer assumption documented in the crate root.

use std::io::{Read, Seek, SeekFrom, Write};

use serde::Serialize;
use tracing::debug;

use curdle_error::{CurdleError, Result};
use curdle_types::{PlayerName, RECORD_SIZE, ScoreBounds, ScoreRecord};

use crate::codec::{decode_record, encode_record};
use crate::locator::find_record;

/// Outcome of a successful adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjustedScore {
    /// Player whose record was written.
    pub player: PlayerName,
    /// New cumulative score on disk.
    pub score: i64,
    /// Byte offset of the written record.
    #[serde(skip)]
    pub offset: u64,
    /// True when a new record was appended, false when one was updated.
    pub created: bool,
}

/// Adjust `name`'s score by `delta` in an open store.
///
/// An existing record is updated in place; an absent player gets a record
/// appended at end of file. Nothing is written when the accumulated score
/// leaves `bounds` or when any earlier step fails; writes are whole 21-byte
/// records or not attempted.
pub fn adjust_score_file<F: Read + Write + Seek>(
    file: &mut F,
    name: &PlayerName,
    delta: i64,
    bounds: ScoreBounds,
) -> Result<AdjustedScore> {
    let located = find_record(file, name)?;

    let (offset, previous, created) = match located {
        Some(offset) => {
            file.seek(SeekFrom::Start(offset))?;
            let mut line = [0_u8; RECORD_SIZE];
            file.read_exact(&mut line)?;
            let existing = decode_record(&line)?;
            (offset, existing.score, false)
        }
        None => {
            let end = file.seek(SeekFrom::End(0))?;
            (end, 0, true)
        }
    };

    // i128 so the sum itself can never wrap; bounds decide representability.
    let total = i128::from(previous) + i128::from(delta);
    if !bounds.contains(total) {
        return Err(CurdleError::Overflow {
            score: total,
            min: bounds.min(),
            max: bounds.max(),
        });
    }
    let score = i64::try_from(total).map_err(|_| CurdleError::Overflow {
        score: total,
        min: bounds.min(),
        max: bounds.max(),
    })?;

    let record = ScoreRecord::new(name.clone(), score);
    file.seek(SeekFrom::Start(offset))?;
    file.write_all(&encode_record(&record))?;

    debug!(player = %name, score, offset, created, "score record written");
    Ok(AdjustedScore {
        player: name.clone(),
        score,
        offset,
        created,
    })
}
