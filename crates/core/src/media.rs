use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::new_id;
use crate::error::{Error, Result};

/// Owned directory of imported cover images.
///
/// Covers referenced by the catalog must outlive whatever file the user
/// picked them from, so importing copies the source into this directory
/// under a generated name. Paths already inside the directory are used
/// as-is.
#[derive(Debug, Clone)]
pub struct MediaDir {
    dir: PathBuf,
}

impl MediaDir {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Whether `path` already points inside this directory.
    pub fn contains(&self, path: &Path) -> bool {
        path.starts_with(&self.dir)
    }

    /// Copy `source` into the directory as `img_<id>.<ext>` and return the
    /// new path. The source file is left in place.
    pub fn import(&self, source: &Path) -> Result<PathBuf> {
        if !source.is_file() {
            return Err(Error::CoverNotFound(source.to_path_buf()));
        }
        let ext = source
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("jpg");
        let dest = self.dir.join(format!("img_{}.{ext}", new_id()));
        fs::copy(source, &dest)?;
        tracing::debug!(source = %source.display(), dest = %dest.display(), "cover imported");
        Ok(dest)
    }
}
