//! Store location and score-range configuration.

use std::path::{Path, PathBuf};

use curdle_types::ScoreBounds;

/// Canonical location of the scores file in a deployed game.
///
/// The file is provisioned by the packager, owned by the game's service
/// user, and not writable by players directly.
pub const DEFAULT_STORE_PATH: &str = "/var/lib/curdle/scores";

/// Where the store lives and which score range it enforces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path of the scores file.
    pub path: PathBuf,
    /// Permissible score range.
    pub bounds: ScoreBounds,
}

impl StoreConfig {
    /// Configuration for a store at `path` with the default symmetric
    /// bounds.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            bounds: ScoreBounds::SYMMETRIC,
        }
    }

    /// Replace the score bounds.
    #[must_use]
    pub fn with_bounds(mut self, bounds: ScoreBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Path of the scores file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_the_deployed_store() {
        let config = StoreConfig::default();
        assert_eq!(config.path(), Path::new(DEFAULT_STORE_PATH));
        assert_eq!(config.bounds, ScoreBounds::SYMMETRIC);
    }

    #[test]
    fn bounds_are_replaceable() {
        let config = StoreConfig::new("/tmp/scores").with_bounds(ScoreBounds::PERMISSIVE);
        assert_eq!(config.bounds, ScoreBounds::PERMISSIVE);
    }
}
