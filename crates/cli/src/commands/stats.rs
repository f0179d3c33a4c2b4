use anyhow::Result;
use filmshelf_core::Shelf;

/// Render minutes as "Xh YYm", or bare minutes under an hour.
pub(crate) fn format_minutes(minutes: u64) -> String {
    if minutes < 60 {
        return format!("{minutes}m");
    }
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}

pub fn run(shelf: &Shelf) -> Result<()> {
    let stats = shelf.stats();

    let most_watched = match stats.most_watched {
        Some((genre, count)) => format!("{} ({count} films)", genre.as_str()),
        None => "\u{2014}".to_string(),
    };

    println!();
    println!("  Filmshelf Statistics");
    println!("  ====================");
    println!();
    println!("   Films:        {:>6}", stats.total_films);
    println!("   Folders:      {:>6}", stats.total_folders);
    println!("   Wishlist:     {:>6}", stats.total_wishes);
    println!("   Watch time:   {}", format_minutes(stats.total_minutes));
    println!("   Most watched: {most_watched}");
    println!();

    Ok(())
}
