use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use filmshelf_core::{Film, Genre, MoveResult, Shelf};

/// Render a 1..=5 rating as filled and hollow stars.
pub(crate) fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    let mut out = "\u{2605}".repeat(filled);
    out.push_str(&"\u{2606}".repeat(5 - filled));
    out
}

/// One-line user message for each move outcome.
pub(crate) fn move_message(outcome: MoveResult) -> &'static str {
    match outcome {
        MoveResult::Moved => "Film moved.",
        MoveResult::NoChange => "Film is already in that folder; nothing to do.",
        MoveResult::SourceNotFound => "Film is not in any folder; file it first.",
        MoveResult::TargetNotFound => "Target folder not found.",
        MoveResult::FilmNotFound => "Film not found.",
    }
}

fn film_table(films: &[&Film]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("ID"),
        Cell::new("Title"),
        Cell::new("Genre"),
        Cell::new("Rating"),
        Cell::new("Minutes"),
    ]);
    for film in films {
        table.add_row(vec![
            Cell::new(&film.id),
            Cell::new(&film.title),
            Cell::new(film.genre.as_str()),
            Cell::new(stars(film.rating)),
            Cell::new(film.duration),
        ]);
    }
    table
}

pub fn list(shelf: &Shelf) -> Result<()> {
    let films = shelf.alphabetical_films();
    if films.is_empty() {
        println!("No films yet. Use `filmshelf films add` to record one.");
        return Ok(());
    }
    println!("{}", film_table(&films));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn add(
    shelf: &mut Shelf,
    title: String,
    description: String,
    genre: Genre,
    rating: u8,
    duration: u32,
    cover: Option<PathBuf>,
    folder: Option<String>,
) -> Result<()> {
    let film = match folder {
        Some(folder_id) => shelf.add_film_to_folder(
            &folder_id,
            &title,
            &description,
            genre,
            rating,
            duration,
            cover.as_deref(),
        )?,
        None => shelf.add_film(&title, &description, genre, rating, duration, cover.as_deref())?,
    };
    println!("Added film: {} ({})", film.title, film.id);
    Ok(())
}

pub fn file(shelf: &mut Shelf, folder_id: String, film_id: String) -> Result<()> {
    shelf.file_film(&folder_id, &film_id)?;
    println!("Film filed into folder {folder_id}.");
    Ok(())
}

pub fn unfile(shelf: &mut Shelf, folder_id: String, film_id: String) -> Result<()> {
    let film = shelf.delete_film_from_folder(&folder_id, &film_id)?;
    println!("Removed {} from folder {folder_id}.", film.title);
    Ok(())
}

pub fn mv(shelf: &mut Shelf, film_id: String, folder_id: String) -> Result<()> {
    let outcome = shelf.move_film(&film_id, &folder_id)?;
    println!("{}", move_message(outcome));
    Ok(())
}

/// Apply the given overrides to the stored film and replace every copy.
#[allow(clippy::too_many_arguments)]
pub fn edit(
    shelf: &mut Shelf,
    id: String,
    title: Option<String>,
    description: Option<String>,
    genre: Option<Genre>,
    rating: Option<u8>,
    duration: Option<u32>,
    cover: Option<PathBuf>,
) -> Result<()> {
    let mut film = shelf
        .film(&id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("film not found: {id}"))?;
    if let Some(title) = title {
        film.title = title;
    }
    if let Some(description) = description {
        film.description = description;
    }
    if let Some(genre) = genre {
        film.genre = genre;
    }
    if let Some(rating) = rating {
        film.rating = rating;
    }
    if let Some(duration) = duration {
        film.duration = duration;
    }
    if let Some(cover) = cover {
        film.cover_image = Some(cover);
    }

    let replaced = shelf.update_film(&film)?;
    println!("Updated {} ({replaced} copies)", film.title);
    Ok(())
}

pub fn rm(shelf: &mut Shelf, id: String) -> Result<()> {
    let removed = shelf.delete_film(&id)?;
    println!("Deleted film ({removed} copies removed).");
    Ok(())
}

pub fn show(shelf: &Shelf, id: String) -> Result<()> {
    let film = shelf
        .film(&id)
        .ok_or_else(|| anyhow::anyhow!("film not found: {id}"))?;
    println!("{} ({})", film.title, film.id);
    println!("  Genre:    {}", film.genre.as_str());
    println!("  Rating:   {}", stars(film.rating));
    println!("  Duration: {} min", film.duration);
    if !film.description.is_empty() {
        println!("  About:    {}", film.description);
    }
    if let Some(cover) = &film.cover_image {
        println!("  Cover:    {}", cover.display());
    }
    Ok(())
}

pub fn ranking(shelf: &Shelf) -> Result<()> {
    let films = shelf.ranked_films();
    if films.is_empty() {
        println!("No films yet.");
        return Ok(());
    }
    println!("{}", film_table(&films));
    Ok(())
}

pub fn search(shelf: &Shelf, query: String) -> Result<()> {
    let films = shelf.search_films(&query);
    if films.is_empty() {
        println!("No films match '{query}'.");
        return Ok(());
    }
    println!("{}", film_table(&films));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── stars ───────────────────────────────────────────────────────

    #[test]
    fn test_stars_renders_filled_and_hollow() {
        assert_eq!(stars(1), "\u{2605}\u{2606}\u{2606}\u{2606}\u{2606}");
        assert_eq!(stars(5), "\u{2605}\u{2605}\u{2605}\u{2605}\u{2605}");
    }

    #[test]
    fn test_stars_caps_at_five() {
        assert_eq!(stars(9), "\u{2605}\u{2605}\u{2605}\u{2605}\u{2605}");
    }

    // ── move_message ────────────────────────────────────────────────

    #[test]
    fn test_move_messages_are_distinct() {
        let outcomes = [
            MoveResult::Moved,
            MoveResult::NoChange,
            MoveResult::SourceNotFound,
            MoveResult::TargetNotFound,
            MoveResult::FilmNotFound,
        ];
        let mut messages: Vec<&str> = outcomes.iter().map(|o| move_message(*o)).collect();
        messages.sort_unstable();
        messages.dedup();
        assert_eq!(messages.len(), outcomes.len());
    }
}
