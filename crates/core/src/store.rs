use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Catalog;
use crate::error::Result;

/// Whole-document persistence for the catalog aggregate.
///
/// One JSON file holds everything; every save rewrites it in full. Writes
/// go to a sibling temp file first and land via rename, so a crash mid-save
/// leaves the previous document intact.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the catalog back. An absent, unreadable, or corrupt document
    /// yields an empty catalog rather than an error; the user starts fresh
    /// and the next save overwrites whatever was there.
    pub fn load(&self) -> Catalog {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Catalog::default();
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "unreadable catalog, starting empty");
                return Catalog::default();
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "corrupt catalog, starting empty");
                Catalog::default()
            }
        }
    }

    pub fn save(&self, catalog: &Catalog) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec_pretty(catalog)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "catalog saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Genre;

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("shelf.json"));
        let catalog = store.load();
        assert_eq!(catalog, Catalog::default());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shelf.json");
        fs::write(&path, b"{ not json").unwrap();
        let catalog = Store::new(&path).load();
        assert_eq!(catalog, Catalog::default());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("shelf.json"));

        let mut catalog = Catalog::default();
        let folder = catalog.add_folder("Horror", None).unwrap();
        let film = catalog
            .add_film("The Ghost", "spooky", Genre::Horror, 4, 110, None)
            .unwrap();
        catalog.file_film(&folder.id, &film.id).unwrap();
        catalog.add_wish("Dune", "", Genre::SciFi, 155, None).unwrap();

        store.save(&catalog).unwrap();
        assert_eq!(store.load(), catalog);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("nested/deeper/shelf.json"));
        store.save(&Catalog::default()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("shelf.json"));
        store.save(&Catalog::default()).unwrap();
        assert!(!dir.path().join("shelf.json.tmp").exists());
    }

    #[test]
    fn test_save_overwrites_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("shelf.json"));

        let mut catalog = Catalog::default();
        catalog.add_folder("A", None).unwrap();
        store.save(&catalog).unwrap();

        catalog.add_folder("B", None).unwrap();
        store.save(&catalog).unwrap();

        assert_eq!(store.load().folders.len(), 2);
    }
}
