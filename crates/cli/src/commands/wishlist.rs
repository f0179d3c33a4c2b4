use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use filmshelf_core::{Genre, Shelf};

pub fn list(shelf: &Shelf) -> Result<()> {
    if shelf.wishlist().is_empty() {
        println!("Wishlist is empty. Use `filmshelf wishlist add` to note a film.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("ID"),
        Cell::new("Title"),
        Cell::new("Genre"),
        Cell::new("Minutes"),
    ]);
    for wish in shelf.wishlist() {
        table.add_row(vec![
            Cell::new(&wish.id),
            Cell::new(&wish.title),
            Cell::new(wish.genre.as_str()),
            Cell::new(wish.duration),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn add(
    shelf: &mut Shelf,
    title: String,
    description: String,
    genre: Genre,
    duration: u32,
    cover: Option<PathBuf>,
) -> Result<()> {
    let wish = shelf.add_wish(&title, &description, genre, duration, cover.as_deref())?;
    println!("Added to wishlist: {} ({})", wish.title, wish.id);
    Ok(())
}

pub fn rm(shelf: &mut Shelf, id: String) -> Result<()> {
    let wish = shelf.remove_wish(&id)?;
    println!("Removed from wishlist: {}", wish.title);
    Ok(())
}

pub fn convert(
    shelf: &mut Shelf,
    id: String,
    rating: u8,
    folder: Option<String>,
) -> Result<()> {
    let film = shelf.convert_wish(&id, rating, folder.as_deref())?;
    match folder {
        Some(folder_id) => println!(
            "Watched! {} is now a film in folder {folder_id} ({})",
            film.title, film.id
        ),
        None => println!("Watched! {} is now a film ({})", film.title, film.id),
    }
    Ok(())
}
