//! Privileged session: the top-level score adjustment entry point.
//!
//! The scores file is owned by the game's service user, so the open is
//! bracketed by an effective-uid elevation. The elevation window covers the
//! `open(2)` and nothing else; the caller identity is restored before any
//! record byte is read or written, and restoration happens on the open
//! failure path too.

use std::fs::OpenOptions;
use std::path::Path;

use nix::sys::stat::stat;
use nix::unistd::Uid;
use tracing::{debug, info};

use curdle_error::{CurdleError, Result};
use curdle_privsep::EuidGuard;
use curdle_types::{PlayerName, RECORD_SIZE};

use crate::config::StoreConfig;
use crate::mutator::{AdjustedScore, adjust_score_file};

/// Adjust `player_name`'s score by `delta`, creating the record if absent.
///
/// Validates the inputs, opens the store as `owner`, verifies the store's
/// length is whole records, and delegates to the mutator. The file closes
/// on drop whatever the outcome; the first failure aborts the rest of the
/// sequence.
pub fn adjust_score(
    config: &StoreConfig,
    owner: Uid,
    player_name: &str,
    delta: i64,
) -> Result<AdjustedScore> {
    if !config.bounds.contains(i128::from(delta)) {
        return Err(CurdleError::invalid_input(format!(
            "delta {delta} outside representable score range {}..={}",
            config.bounds.min(),
            config.bounds.max()
        )));
    }
    let name = PlayerName::new(player_name)?;

    // Elevation window: open only. Restore runs whether or not the open
    // succeeded, and a restore failure outranks an open failure because the
    // process must not keep running elevated.
    let guard = EuidGuard::assume(owner)?;
    let opened = OpenOptions::new()
        .read(true)
        .write(true)
        .open(config.path());
    guard.restore()?;
    let mut file = opened?;

    let len = file.metadata()?.len();
    if len % RECORD_SIZE as u64 != 0 {
        return Err(CurdleError::corrupt(format!(
            "store length {len} is not a multiple of the {RECORD_SIZE}-byte record size"
        )));
    }
    debug!(path = %config.path().display(), len, %owner, "score store opened");

    let outcome = adjust_score_file(&mut file, &name, delta, config.bounds)?;
    info!(
        player = %outcome.player,
        score = outcome.score,
        created = outcome.created,
        "score adjusted"
    );
    Ok(outcome)
}

/// The uid that owns the store file.
///
/// Used by callers that default the session owner to the file's actual
/// owner instead of hard-coding a uid.
pub fn store_owner(path: &Path) -> Result<Uid> {
    let status = stat(path).map_err(|errno| {
        CurdleError::privilege(format!(
            "stat({}) failed while resolving store owner: {errno}",
            path.display()
        ))
    })?;
    Ok(Uid::from_raw(status.st_uid))
}
