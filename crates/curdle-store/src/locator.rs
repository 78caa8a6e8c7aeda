//! Record locator: sequential scan of the store for a player's line.
//!
//! The scan validates the structure of every record it passes over and
//! aborts on the first violation. Continuing past a corrupt line risks
//! matching garbage as a player record, so a violation anywhere before the
//! match poisons the whole store.

use std::io::{Read, Seek, SeekFrom};

use tracing::trace;

use curdle_error::{CurdleError, Result};
use curdle_types::{FIELD_SIZE, PlayerName, RECORD_SIZE};

/// Find the byte offset of `name`'s record, scanning from offset 0.
///
/// Returns `Ok(None)` when the store holds no record for the player. The
/// first matching record wins; uniqueness is the mutator's concern, not
/// enforced here.
pub fn find_record<F: Read + Seek>(file: &mut F, name: &PlayerName) -> Result<Option<u64>> {
    file.seek(SeekFrom::Start(0))?;
    let needle = name.padded_bytes();
    let mut offset = 0_u64;
    let mut line = [0_u8; RECORD_SIZE];

    loop {
        let read = read_line(file, &mut line)?;
        if read == 0 {
            trace!(player = %name, offset, "player not found in store");
            return Ok(None);
        }
        if read < RECORD_SIZE {
            return Err(CurdleError::corrupt(format!(
                "partial record at offset {offset}: {read} of {RECORD_SIZE} bytes"
            )));
        }

        validate_line(&line, offset)?;

        if line[..FIELD_SIZE] == needle {
            trace!(player = %name, offset, "player record located");
            return Ok(Some(offset));
        }
        offset += RECORD_SIZE as u64;
    }
}

/// Check the structural invariants of one record line.
///
/// `offset` is used for diagnostics only.
pub(crate) fn validate_line(line: &[u8; RECORD_SIZE], offset: u64) -> Result<()> {
    if line[RECORD_SIZE - 1] != b'\n' {
        return Err(CurdleError::corrupt(format!(
            "record at offset {offset} not newline-terminated"
        )));
    }
    if line[FIELD_SIZE - 1] != b'\0' {
        return Err(CurdleError::corrupt(format!(
            "name field at offset {offset} not null-terminated"
        )));
    }
    let score_lead = line[FIELD_SIZE];
    if !score_lead.is_ascii_digit() && score_lead != b'-' {
        return Err(CurdleError::corrupt(format!(
            "score field at offset {offset} malformed: leading byte {score_lead:#04x}"
        )));
    }
    Ok(())
}

/// Fill `line` from the reader, tolerating short reads mid-record.
///
/// Returns the number of bytes read: 0 at end of store, less than the full
/// line only when the store ends mid-record.
fn read_line<F: Read>(file: &mut F, line: &mut [u8; RECORD_SIZE]) -> Result<usize> {
    let mut filled = 0;
    while filled < RECORD_SIZE {
        match file.read(&mut line[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err.into()),
        }
    }
    Ok(filled)
}
