//! Achievement catalog loader.

use std::path::Path;

use quest_core::achievement::AchievementState;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Achievement catalog structure for JSON files.
///
/// Entries are full [`AchievementState`] values; progress and unlock fields
/// default to locked-at-zero, so catalog files only need id, condition, and
/// reward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementCatalog {
    pub achievements: Vec<AchievementState>,
}

/// Loader for achievement catalogs from JSON files.
pub struct AchievementLoader;

impl AchievementLoader {
    /// Load an achievement catalog from a JSON file.
    pub fn load(path: &Path) -> LoadResult<Vec<AchievementState>> {
        let content = read_file(path)?;
        let catalog: AchievementCatalog = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse achievement catalog JSON: {}", e))?;

        let mut seen = std::collections::BTreeSet::new();
        for achievement in &catalog.achievements {
            if !seen.insert(&achievement.id) {
                anyhow::bail!("Duplicate achievement id '{}'", achievement.id);
            }
        }

        tracing::debug!(
            path = %path.display(),
            achievements = catalog.achievements.len(),
            "loaded achievement catalog"
        );
        Ok(catalog.achievements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_achievements;
    use std::io::Write;

    #[test]
    fn round_trips_the_default_catalog() {
        let catalog = AchievementCatalog {
            achievements: default_achievements(),
        };
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string_pretty(&catalog).unwrap().as_bytes())
            .unwrap();

        let loaded = AchievementLoader::load(file.path()).unwrap();
        assert_eq!(loaded, default_achievements());
    }

    #[test]
    fn sparse_entries_default_to_locked() {
        let json = r#"{
            "achievements": [{
                "id": "first-steps",
                "condition": { "kind": "task_completed_count", "target": 1 }
            }]
        }"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = AchievementLoader::load(file.path()).unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(!loaded[0].unlocked);
        assert_eq!(loaded[0].progress, 0);
        assert_eq!(loaded[0].reward.experience, 0);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"{
            "achievements": [
                {"id": "dup", "condition": {"kind": "streak_days", "target": 3}},
                {"id": "dup", "condition": {"kind": "streak_days", "target": 5}}
            ]
        }"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        assert!(AchievementLoader::load(file.path()).is_err());
    }
}
