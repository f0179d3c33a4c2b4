use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use filmshelf_core::{Folder, Shelf};

pub(crate) fn cover_label(folder: &Folder) -> String {
    match &folder.cover_image {
        Some(path) => path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string()),
        None => "\u{2014}".to_string(),
    }
}

pub fn list(shelf: &Shelf) -> Result<()> {
    if shelf.folders().is_empty() {
        println!("No folders yet. Use `filmshelf folders add <name>` to create one.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("ID"),
        Cell::new("Name"),
        Cell::new("Films"),
        Cell::new("Cover"),
    ]);
    for folder in shelf.folders() {
        table.add_row(vec![
            Cell::new(&folder.id),
            Cell::new(&folder.name),
            Cell::new(folder.films.len()),
            Cell::new(cover_label(folder)),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn add(shelf: &mut Shelf, name: String, cover: Option<PathBuf>) -> Result<()> {
    let folder = shelf.add_folder(&name, cover.as_deref())?;
    println!("Added folder: {} ({})", folder.name, folder.id);
    Ok(())
}

pub fn rm(shelf: &mut Shelf, id: String) -> Result<()> {
    let folder = shelf.delete_folder(&id)?;
    println!(
        "Removed folder: {} ({} films removed with it)",
        folder.name,
        folder.films.len()
    );
    Ok(())
}

pub fn show(shelf: &Shelf, id: String) -> Result<()> {
    let folder = shelf
        .folder(&id)
        .ok_or_else(|| anyhow::anyhow!("folder not found: {id}"))?;

    println!("{} ({})", folder.name, folder.id);
    if folder.films.is_empty() {
        println!("  (empty)");
        return Ok(());
    }

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
    for film in &folder.films {
        table.add_row(vec![
            Cell::new(&film.id),
            Cell::new(&film.title),
            Cell::new(film.genre.as_str()),
            Cell::new(super::films::stars(film.rating)),
            Cell::new(film.duration),
        ]);
    }
    println!("{table}");
    Ok(())
}
