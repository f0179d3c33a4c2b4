pub mod catalog;
pub mod domain;
pub mod error;
pub mod media;
pub mod stats;
pub mod store;

use std::path::{Path, PathBuf};

pub use catalog::MoveResult;
pub use domain::{Catalog, CatalogStats, Film, Folder, Genre, Wish};
pub use error::{Error, Result};

use media::MediaDir;
use store::Store;

const CATALOG_FILE: &str = "shelf.json";
const IMAGES_DIR: &str = "images";

/// The film shelf: a catalog of watched films, folders, and a wishlist,
/// persisted as one JSON document inside a data directory the shelf owns.
///
/// Every mutating call applies the change in memory and then saves the
/// whole aggregate; an `Err` from a mutation means the document on disk
/// still reflects the state before the call.
pub struct Shelf {
    catalog: Catalog,
    store: Store,
    media: MediaDir,
}

impl Shelf {
    /// Open the shelf at `data_dir`, creating the directory, the catalog
    /// document, and the image directory on first use. A corrupt document
    /// is logged and replaced by an empty catalog on the next save.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir)?;
        let store = Store::new(data_dir.join(CATALOG_FILE));
        let media = MediaDir::open(data_dir.join(IMAGES_DIR))?;
        let catalog = store.load();
        tracing::debug!(
            dir = %data_dir.display(),
            folders = catalog.folders.len(),
            films = catalog.all_films.len(),
            wishes = catalog.wishlist.len(),
            "shelf opened"
        );
        Ok(Self { catalog, store, media })
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn folders(&self) -> &[Folder] {
        &self.catalog.folders
    }

    pub fn films(&self) -> &[Film] {
        &self.catalog.all_films
    }

    pub fn wishlist(&self) -> &[Wish] {
        &self.catalog.wishlist
    }

    pub fn folder(&self, folder_id: &str) -> Option<&Folder> {
        self.catalog.folder(folder_id)
    }

    pub fn film(&self, film_id: &str) -> Option<&Film> {
        self.catalog.film(film_id)
    }

    // ── Folders ──────────────────────────────────────────────────────

    pub fn add_folder(&mut self, name: &str, cover: Option<&Path>) -> Result<Folder> {
        catalog::check_folder_name(name)?;
        let cover = self.import_cover(cover)?;
        let folder = self.catalog.add_folder(name, cover)?;
        self.persist()?;
        Ok(folder)
    }

    pub fn delete_folder(&mut self, folder_id: &str) -> Result<Folder> {
        let folder = self.catalog.delete_folder(folder_id)?;
        self.persist()?;
        Ok(folder)
    }

    // ── Films ────────────────────────────────────────────────────────

    pub fn add_film(
        &mut self,
        title: &str,
        description: &str,
        genre: Genre,
        rating: u8,
        duration: u32,
        cover: Option<&Path>,
    ) -> Result<Film> {
        catalog::check_title(title)?;
        catalog::check_duration(duration)?;
        let cover = self.import_cover(cover)?;
        let film = self
            .catalog
            .add_film(title, description, genre, rating, duration, cover)?;
        self.persist()?;
        Ok(film)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_film_to_folder(
        &mut self,
        folder_id: &str,
        title: &str,
        description: &str,
        genre: Genre,
        rating: u8,
        duration: u32,
        cover: Option<&Path>,
    ) -> Result<Film> {
        catalog::check_title(title)?;
        catalog::check_duration(duration)?;
        if self.catalog.folder(folder_id).is_none() {
            return Err(Error::FolderNotFound(folder_id.to_string()));
        }
        let cover = self.import_cover(cover)?;
        let film = self.catalog.add_film_to_folder(
            folder_id,
            title,
            description,
            genre,
            rating,
            duration,
            cover,
        )?;
        self.persist()?;
        Ok(film)
    }

    pub fn file_film(&mut self, folder_id: &str, film_id: &str) -> Result<()> {
        self.catalog.file_film(folder_id, film_id)?;
        self.persist()
    }

    pub fn delete_film_from_folder(&mut self, folder_id: &str, film_id: &str) -> Result<Film> {
        let film = self.catalog.delete_film_from_folder(folder_id, film_id)?;
        self.persist()?;
        Ok(film)
    }

    /// Replace every copy of `film.id` with the given fields. A cover path
    /// pointing outside the image directory is imported first, so edits can
    /// hand in a freshly picked file. Returns the number of copies touched.
    pub fn update_film(&mut self, film: &Film) -> Result<usize> {
        catalog::check_title(&film.title)?;
        catalog::check_duration(film.duration)?;
        if self.catalog.film(&film.id).is_none() {
            return Err(Error::FilmNotFound(film.id.clone()));
        }
        let mut film = film.clone();
        if let Some(cover) = film.cover_image.as_deref() {
            if !self.media.contains(cover) {
                film.cover_image = Some(self.media.import(cover)?);
            }
        }
        let replaced = self.catalog.update_film(&film)?;
        self.persist()?;
        Ok(replaced)
    }

    pub fn delete_film(&mut self, film_id: &str) -> Result<usize> {
        let removed = self.catalog.delete_film(film_id)?;
        self.persist()?;
        Ok(removed)
    }

    /// Relocate a film between folders. Only a `Moved` outcome changes the
    /// catalog, so only that outcome triggers a save; the other outcomes
    /// report why nothing happened.
    pub fn move_film(&mut self, film_id: &str, target_folder_id: &str) -> Result<MoveResult> {
        let outcome = self.catalog.move_film(film_id, target_folder_id);
        if outcome == MoveResult::Moved {
            self.persist()?;
        }
        Ok(outcome)
    }

    // ── Wishlist ─────────────────────────────────────────────────────

    pub fn add_wish(
        &mut self,
        title: &str,
        description: &str,
        genre: Genre,
        duration: u32,
        cover: Option<&Path>,
    ) -> Result<Wish> {
        catalog::check_title(title)?;
        catalog::check_duration(duration)?;
        let cover = self.import_cover(cover)?;
        let wish = self
            .catalog
            .add_wish(title, description, genre, duration, cover)?;
        self.persist()?;
        Ok(wish)
    }

    pub fn remove_wish(&mut self, wish_id: &str) -> Result<Wish> {
        let wish = self.catalog.remove_wish(wish_id)?;
        self.persist()?;
        Ok(wish)
    }

    pub fn convert_wish(
        &mut self,
        wish_id: &str,
        rating: u8,
        destination_folder_id: Option<&str>,
    ) -> Result<Film> {
        let film = self
            .catalog
            .convert_wish(wish_id, rating, destination_folder_id)?;
        self.persist()?;
        Ok(film)
    }

    // ── Views ────────────────────────────────────────────────────────

    pub fn ranked_films(&self) -> Vec<&Film> {
        self.catalog.ranked_films()
    }

    pub fn alphabetical_films(&self) -> Vec<&Film> {
        self.catalog.alphabetical_films()
    }

    pub fn search_films(&self, query: &str) -> Vec<&Film> {
        self.catalog.search_films(query)
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            total_films: self.catalog.all_films.len(),
            total_folders: self.catalog.folders.len(),
            total_wishes: self.catalog.wishlist.len(),
            total_minutes: stats::total_minutes_watched(&self.catalog.all_films),
            most_watched: stats::most_watched_genre(&self.catalog.all_films),
        }
    }

    // ── Internals ────────────────────────────────────────────────────

    fn import_cover(&self, cover: Option<&Path>) -> Result<Option<PathBuf>> {
        match cover {
            Some(path) if self.media.contains(path) => Ok(Some(path.to_path_buf())),
            Some(path) => Ok(Some(self.media.import(path)?)),
            None => Ok(None),
        }
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.catalog)
    }
}
