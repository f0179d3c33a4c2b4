use std::path::PathBuf;

use crate::domain::{new_id, Catalog, Film, Folder, Genre, Wish};
use crate::error::{Error, Result};

/// Outcome of [`Catalog::move_film`]. `NoChange` and the not-found cases
/// are ordinary outcomes, not errors; callers surface them as messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The film was removed from its prior folder and appended to the target.
    Moved,
    /// The film already sits in the target folder.
    NoChange,
    /// No folder currently contains the film.
    SourceNotFound,
    /// The target folder id does not exist.
    TargetNotFound,
    /// The current folder was located but the film entry was gone.
    FilmNotFound,
}

const MIN_RATING: u8 = 1;
const MAX_RATING: u8 = 5;

/// Clamp a user-supplied rating into the valid 1..=5 range. Out-of-range
/// input is corrected, never rejected.
pub fn clamp_rating(rating: u8) -> u8 {
    rating.clamp(MIN_RATING, MAX_RATING)
}

pub(crate) fn check_folder_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::EmptyFolderName);
    }
    Ok(())
}

pub(crate) fn check_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::EmptyTitle);
    }
    Ok(())
}

pub(crate) fn check_duration(duration: u32) -> Result<()> {
    if duration < 1 {
        return Err(Error::InvalidDuration(duration));
    }
    Ok(())
}

/// In-memory mutation and query operations on the aggregate.
///
/// All operations are pure list manipulation; persistence happens one level
/// up in [`crate::Shelf`], which saves the whole aggregate after each
/// successful mutation. Invariants maintained here:
///
/// - ids are unique within `all_films` and within any one folder;
/// - editing or deleting a film by id touches every copy of that id, in
///   `all_films` and in every folder, so copies never diverge;
/// - a film is filed in at most one folder (`move_film` enforces this after
///   the fact, `file_film` up front).
impl Catalog {
    // ── Folders ──────────────────────────────────────────────────────

    pub fn folder(&self, id: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    pub fn add_folder(&mut self, name: &str, cover_image: Option<PathBuf>) -> Result<Folder> {
        check_folder_name(name)?;
        let folder = Folder {
            id: new_id(),
            name: name.to_string(),
            cover_image,
            films: Vec::new(),
        };
        self.folders.push(folder.clone());
        Ok(folder)
    }

    /// Drop a folder and its contained film copies. Entries in `all_films`
    /// are untouched. Returns the removed folder.
    pub fn delete_folder(&mut self, folder_id: &str) -> Result<Folder> {
        let idx = self
            .folders
            .iter()
            .position(|f| f.id == folder_id)
            .ok_or_else(|| Error::FolderNotFound(folder_id.to_string()))?;
        Ok(self.folders.remove(idx))
    }

    // ── Films ────────────────────────────────────────────────────────

    /// Create a film in the flat `all_films` list (no folder placement).
    pub fn add_film(
        &mut self,
        title: &str,
        description: &str,
        genre: Genre,
        rating: u8,
        duration: u32,
        cover_image: Option<PathBuf>,
    ) -> Result<Film> {
        check_title(title)?;
        check_duration(duration)?;
        let film = Film {
            id: new_id(),
            title: title.to_string(),
            description: description.to_string(),
            genre,
            rating: clamp_rating(rating),
            duration,
            cover_image,
        };
        self.all_films.push(film.clone());
        Ok(film)
    }

    /// Create a film directly inside a folder. The new film gets a fresh id
    /// and exists only as that folder's copy; it is not added to `all_films`.
    #[allow(clippy::too_many_arguments)]
    pub fn add_film_to_folder(
        &mut self,
        folder_id: &str,
        title: &str,
        description: &str,
        genre: Genre,
        rating: u8,
        duration: u32,
        cover_image: Option<PathBuf>,
    ) -> Result<Film> {
        check_title(title)?;
        check_duration(duration)?;
        let folder = self
            .folders
            .iter_mut()
            .find(|f| f.id == folder_id)
            .ok_or_else(|| Error::FolderNotFound(folder_id.to_string()))?;
        let film = Film {
            id: new_id(),
            title: title.to_string(),
            description: description.to_string(),
            genre,
            rating: clamp_rating(rating),
            duration,
            cover_image,
        };
        folder.films.push(film.clone());
        Ok(film)
    }

    /// File an existing film (same id, no copy-with-new-id) into a folder.
    /// A film lives in at most one folder, so this fails with `AlreadyFiled`
    /// if any folder already holds the id; use `move_film` to relocate.
    pub fn file_film(&mut self, folder_id: &str, film_id: &str) -> Result<()> {
        if self.folder(folder_id).is_none() {
            return Err(Error::FolderNotFound(folder_id.to_string()));
        }
        if let Some(holder) = self.folders.iter().find(|f| f.films.iter().any(|x| x.id == film_id)) {
            return Err(Error::AlreadyFiled {
                film_id: film_id.to_string(),
                folder_id: holder.id.clone(),
            });
        }
        let film = self
            .film(film_id)
            .cloned()
            .ok_or_else(|| Error::FilmNotFound(film_id.to_string()))?;
        let folder = self
            .folders
            .iter_mut()
            .find(|f| f.id == folder_id)
            .ok_or_else(|| Error::FolderNotFound(folder_id.to_string()))?;
        folder.films.push(film);
        Ok(())
    }

    /// Remove one film copy from one folder. Other locations are untouched.
    pub fn delete_film_from_folder(&mut self, folder_id: &str, film_id: &str) -> Result<Film> {
        let folder = self
            .folders
            .iter_mut()
            .find(|f| f.id == folder_id)
            .ok_or_else(|| Error::FolderNotFound(folder_id.to_string()))?;
        let idx = folder
            .films
            .iter()
            .position(|x| x.id == film_id)
            .ok_or_else(|| Error::FilmNotFound(film_id.to_string()))?;
        Ok(folder.films.remove(idx))
    }

    /// Look a film up by id: `all_films` first, then every folder in order.
    pub fn film(&self, film_id: &str) -> Option<&Film> {
        if let Some(film) = self.all_films.iter().find(|x| x.id == film_id) {
            return Some(film);
        }
        self.folders
            .iter()
            .flat_map(|f| f.films.iter())
            .find(|x| x.id == film_id)
    }

    /// Full-field replace of every copy of `film.id`, wherever it lives.
    /// Returns the number of copies replaced.
    pub fn update_film(&mut self, film: &Film) -> Result<usize> {
        check_title(&film.title)?;
        check_duration(film.duration)?;
        let mut replacement = film.clone();
        replacement.rating = clamp_rating(film.rating);

        let mut replaced = 0;
        if let Some(entry) = self.all_films.iter_mut().find(|x| x.id == film.id) {
            *entry = replacement.clone();
            replaced += 1;
        }
        for folder in &mut self.folders {
            if let Some(entry) = folder.films.iter_mut().find(|x| x.id == film.id) {
                *entry = replacement.clone();
                replaced += 1;
            }
        }
        if replaced == 0 {
            return Err(Error::FilmNotFound(film.id.clone()));
        }
        Ok(replaced)
    }

    /// Remove every copy of the id, from `all_films` and from every folder.
    /// Returns the number of copies removed.
    pub fn delete_film(&mut self, film_id: &str) -> Result<usize> {
        let before = self.all_films.len();
        self.all_films.retain(|x| x.id != film_id);
        let mut removed = before - self.all_films.len();

        for folder in &mut self.folders {
            let before = folder.films.len();
            folder.films.retain(|x| x.id != film_id);
            removed += before - folder.films.len();
        }
        if removed == 0 {
            return Err(Error::FilmNotFound(film_id.to_string()));
        }
        Ok(removed)
    }

    /// Relocate a film from its current folder to the target folder. The
    /// `all_films` entry, if one exists, is untouched. If copies of the id
    /// have drifted into more than one folder, the first folder in `folders`
    /// order counts as current and every other copy is removed by the move,
    /// including a stale copy already sitting in the target.
    pub fn move_film(&mut self, film_id: &str, target_folder_id: &str) -> MoveResult {
        let current_id = match self
            .folders
            .iter()
            .find(|f| f.films.iter().any(|x| x.id == film_id))
        {
            Some(folder) => folder.id.clone(),
            None => return MoveResult::SourceNotFound,
        };
        if self.folder(target_folder_id).is_none() {
            return MoveResult::TargetNotFound;
        }
        if current_id == target_folder_id {
            return MoveResult::NoChange;
        }

        // Sweep every folder, the target included, so the push below never
        // leaves the target holding the id twice.
        let mut moved: Option<Film> = None;
        for folder in &mut self.folders {
            if let Some(idx) = folder.films.iter().position(|x| x.id == film_id) {
                let film = folder.films.remove(idx);
                if moved.is_none() {
                    moved = Some(film);
                }
            }
        }
        let film = match moved {
            Some(film) => film,
            None => return MoveResult::FilmNotFound,
        };

        match self.folders.iter_mut().find(|f| f.id == target_folder_id) {
            Some(target) => {
                target.films.push(film);
                MoveResult::Moved
            }
            // Target existed above; single-threaded, so unreachable in practice.
            None => MoveResult::TargetNotFound,
        }
    }

    // ── Wishlist ─────────────────────────────────────────────────────

    pub fn add_wish(
        &mut self,
        title: &str,
        description: &str,
        genre: Genre,
        duration: u32,
        cover_image: Option<PathBuf>,
    ) -> Result<Wish> {
        check_title(title)?;
        check_duration(duration)?;
        let wish = Wish {
            id: new_id(),
            title: title.to_string(),
            description: description.to_string(),
            genre,
            duration,
            cover_image,
        };
        self.wishlist.push(wish.clone());
        Ok(wish)
    }

    pub fn remove_wish(&mut self, wish_id: &str) -> Result<Wish> {
        let idx = self
            .wishlist
            .iter()
            .position(|w| w.id == wish_id)
            .ok_or_else(|| Error::WishNotFound(wish_id.to_string()))?;
        Ok(self.wishlist.remove(idx))
    }

    /// Turn a wish into a watched film: a new Film with a fresh id is
    /// created (in the destination folder if one is given, otherwise in
    /// `all_films`) and the wish is removed. Both changes land in the same
    /// in-memory mutation, so one save covers the whole conversion.
    pub fn convert_wish(
        &mut self,
        wish_id: &str,
        rating: u8,
        destination_folder_id: Option<&str>,
    ) -> Result<Film> {
        // Validate everything up front so a failure leaves no partial state.
        if self.wishlist.iter().all(|w| w.id != wish_id) {
            return Err(Error::WishNotFound(wish_id.to_string()));
        }
        if let Some(folder_id) = destination_folder_id {
            if self.folder(folder_id).is_none() {
                return Err(Error::FolderNotFound(folder_id.to_string()));
            }
        }

        let wish = self.remove_wish(wish_id)?;
        match destination_folder_id {
            Some(folder_id) => self.add_film_to_folder(
                folder_id,
                &wish.title,
                &wish.description,
                wish.genre,
                rating,
                wish.duration,
                wish.cover_image.clone(),
            ),
            None => self.add_film(
                &wish.title,
                &wish.description,
                wish.genre,
                rating,
                wish.duration,
                wish.cover_image.clone(),
            ),
        }
    }

    // ── Derived views ────────────────────────────────────────────────

    /// Films by rating, best first. Stable: equal ratings keep their
    /// `all_films` insertion order.
    pub fn ranked_films(&self) -> Vec<&Film> {
        let mut films: Vec<&Film> = self.all_films.iter().collect();
        films.sort_by(|a, b| b.rating.cmp(&a.rating));
        films
    }

    /// Films by title, case-insensitive. Stable on ties.
    pub fn alphabetical_films(&self) -> Vec<&Film> {
        let mut films: Vec<&Film> = self.all_films.iter().collect();
        films.sort_by_key(|x| x.title.to_lowercase());
        films
    }

    /// Case-insensitive substring search over title, genre name, and the
    /// rating digit, in alphabetical order. A blank query matches everything.
    pub fn search_films(&self, query: &str) -> Vec<&Film> {
        let q = query.trim().to_lowercase();
        let films = self.alphabetical_films();
        if q.is_empty() {
            return films;
        }
        films
            .into_iter()
            .filter(|x| {
                x.title.to_lowercase().contains(&q)
                    || x.genre.as_str().to_lowercase().contains(&q)
                    || x.rating.to_string().contains(&q)
            })
            .collect()
    }
}
