//! JSON persistence for named banner sets
//!
//! The on-disk format is a plain JSON object mapping set names to banner
//! sets, with banners stored as their banner-code strings. A valid-JSON
//! round-trip is the only durability guarantee.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::set::{BannerSet, SetError};

/// Error type for loading and saving the set store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A loaded set violated the configuration invariants
    #[error("invalid banner set {name:?}: {source}")]
    InvalidSet {
        name: String,
        #[source]
        source: SetError,
    },
}

/// Load every banner set from `path`, validating each one.
pub fn load_sets(path: &Path) -> Result<BTreeMap<String, BannerSet>, StoreError> {
    let data = fs::read_to_string(path)?;
    let sets: BTreeMap<String, BannerSet> = serde_json::from_str(&data)?;
    for (name, set) in &sets {
        set.validate().map_err(|source| StoreError::InvalidSet {
            name: name.clone(),
            source,
        })?;
    }
    Ok(sets)
}

/// Save every banner set to `path` as pretty-printed JSON.
pub fn save_sets(path: &Path, sets: &BTreeMap<String, BannerSet>) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let data = serde_json::to_string_pretty(sets)?;
    fs::write(path, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::Banner;
    use crate::palette::{Color, Direction};
    use crate::split::SplitMode;

    #[test]
    fn test_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sets.json");

        let mut set =
            BannerSet::new(Direction::Right, Direction::Down, '-', '/', SplitMode::Longest)
                .unwrap();
        set.insert_banner("flag", Banner::solid(Color::Lime)).unwrap();
        let mut sets = BTreeMap::new();
        sets.insert("main".to_string(), set);

        save_sets(&path, &sets).unwrap();
        let loaded = load_sets(&path).unwrap();
        assert_eq!(loaded, sets);
    }

    #[test]
    fn test_load_rejects_invalid_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sets.json");
        fs::write(
            &path,
            r#"{"bad": {
                "banners": {},
                "writing_direction": "right",
                "newline_direction": "left",
                "space_char": "-",
                "newline_char": "/",
                "split_mode": "no"
            }}"#,
        )
        .unwrap();
        assert!(matches!(
            load_sets(&path),
            Err(StoreError::InvalidSet { name, .. }) if name == "bad"
        ));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/sets.json");
        save_sets(&path, &BTreeMap::new()).unwrap();
        assert!(path.exists());
    }
}
