//! Content loaders for reading catalogs from JSON files.
//!
//! Loaders turn data files into the structures the engine consumes: set
//! definitions for [`crate::tables::StaticTables`], achievement catalogs,
//! and boss templates. Formats mirror the persisted snapshot shapes, so the
//! same serde definitions cover both.

pub mod achievements;
pub mod bosses;
pub mod sets;

pub use achievements::AchievementLoader;
pub use bosses::BossLoader;
pub use sets::SetLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
