//! Boss template catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bosses::BossTemplate;
use crate::loaders::{LoadResult, read_file};

/// Boss roster structure for JSON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossCatalog {
    pub bosses: Vec<BossTemplate>,
}

/// Loader for boss template catalogs from JSON files.
pub struct BossLoader;

impl BossLoader {
    /// Load boss templates from a JSON file.
    pub fn load(path: &Path) -> LoadResult<Vec<BossTemplate>> {
        let content = read_file(path)?;
        let catalog: BossCatalog = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse boss catalog JSON: {}", e))?;

        for template in &catalog.bosses {
            if template.max_health <= 0 {
                anyhow::bail!(
                    "Boss template '{}' has non-positive max health",
                    template.id
                );
            }
        }

        tracing::debug!(path = %path.display(), bosses = catalog.bosses.len(), "loaded boss catalog");
        Ok(catalog.bosses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bosses::starter_bosses;
    use std::io::Write;

    #[test]
    fn round_trips_the_starter_roster() {
        let catalog = BossCatalog {
            bosses: starter_bosses(),
        };
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string_pretty(&catalog).unwrap().as_bytes())
            .unwrap();

        let loaded = BossLoader::load(file.path()).unwrap();
        assert_eq!(loaded, starter_bosses());
    }

    #[test]
    fn effects_deserialize_by_kind_tag() {
        let json = r#"{
            "bosses": [{
                "id": "warden",
                "name": "The Warden",
                "max_health": 500,
                "effects": [
                    {"kind": "damage_reduction", "value": 15},
                    {"kind": "increasing_resistance", "start": 5, "max": 40, "increment": 5}
                ],
                "duration_days": 10
            }]
        }"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = BossLoader::load(file.path()).unwrap();
        assert_eq!(loaded[0].effects.len(), 2);
        assert_eq!(loaded[0].rarity, quest_core::equipment::Rarity::Common);
    }

    #[test]
    fn non_positive_health_is_rejected() {
        let json = r#"{"bosses": [{"id": "x", "name": "X", "max_health": 0}]}"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        assert!(BossLoader::load(file.path()).is_err());
    }
}
