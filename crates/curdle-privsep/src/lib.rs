//! Scoped effective-uid elevation.
//!
//! The score store is owned by a separate principal, so the process briefly
//! assumes that owner's effective uid to `open(2)` the file, then drops back
//! to the invoking identity before any record data is touched.
//!
//! [`EuidGuard`] models the elevation window as a guarded acquisition:
//! [`EuidGuard::restore`] is the explicit, fallible hand-back on the main
//! path, and `Drop` restores unconditionally on every early-exit path.

use nix::unistd::{Uid, geteuid, seteuid};
use tracing::{debug, error};

use curdle_error::{CurdleError, Result};

/// Guard over a temporary effective-uid elevation.
///
/// While the guard is live the process runs with the target identity; the
/// original identity is restored exactly once, either by [`restore`] or by
/// `Drop`.
///
/// [`restore`]: EuidGuard::restore
#[derive(Debug)]
pub struct EuidGuard {
    original: Uid,
    restored: bool,
}

impl EuidGuard {
    /// Switch the effective uid to `target`, remembering the current one.
    pub fn assume(target: Uid) -> Result<Self> {
        let original = geteuid();
        seteuid(target).map_err(|errno| {
            CurdleError::privilege(format!("seteuid({target}) failed: {errno}"))
        })?;
        debug!(%target, %original, "assumed store owner identity");
        Ok(Self {
            original,
            restored: false,
        })
    }

    /// The effective uid held before elevation.
    #[must_use]
    pub const fn original(&self) -> Uid {
        self.original
    }

    /// Restore the original effective uid, consuming the guard.
    ///
    /// Prefer this over relying on `Drop`: a failed restoration is a real
    /// error (the process would keep running elevated) and only the explicit
    /// form can report it.
    pub fn restore(mut self) -> Result<()> {
        self.restored = true;
        seteuid(self.original).map_err(|errno| {
            CurdleError::privilege(format!(
                "seteuid({}) failed to restore caller identity: {errno}",
                self.original
            ))
        })?;
        debug!(original = %self.original, "restored caller identity");
        Ok(())
    }
}

impl Drop for EuidGuard {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        // Drop cannot propagate; log and continue. The explicit restore()
        // path exists so callers normally never get here.
        if let Err(errno) = seteuid(self.original) {
            error!(original = %self.original, %errno, "failed to restore effective uid");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Assuming the identity the process already holds is always permitted,
    // so these run unprivileged.

    #[test]
    fn assume_own_euid_and_restore() {
        let euid = geteuid();
        let guard = EuidGuard::assume(euid).expect("own euid is assumable");
        assert_eq!(guard.original(), euid);
        guard.restore().expect("restore to own euid");
        assert_eq!(geteuid(), euid);
    }

    #[test]
    fn drop_restores_without_explicit_call() {
        let euid = geteuid();
        {
            let _guard = EuidGuard::assume(euid).expect("own euid is assumable");
        }
        assert_eq!(geteuid(), euid);
    }

    #[test]
    fn assume_foreign_uid_fails_unprivileged() {
        if geteuid().is_root() {
            // Root can assume anything; nothing to assert here.
            return;
        }
        let err = EuidGuard::assume(Uid::from_raw(0)).expect_err("not permitted");
        assert_eq!(err.kind(), "privilege");
    }
}
