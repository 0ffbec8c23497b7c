//! Equipment-set catalog loader.

use std::path::Path;

use quest_core::equipment::SetDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Set catalog structure for JSON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetCatalog {
    pub sets: Vec<SetDefinition>,
}

/// Loader for equipment-set catalogs from JSON files.
pub struct SetLoader;

impl SetLoader {
    /// Load set definitions from a JSON file.
    pub fn load(path: &Path) -> LoadResult<Vec<SetDefinition>> {
        let content = read_file(path)?;
        let catalog: SetCatalog = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse set catalog JSON: {}", e))?;

        for set in &catalog.sets {
            if set.pieces.is_empty() {
                anyhow::bail!("Set '{}' defines no pieces", set.id);
            }
        }

        tracing::debug!(path = %path.display(), sets = catalog.sets.len(), "loaded set catalog");
        Ok(catalog.sets)
    }
}
