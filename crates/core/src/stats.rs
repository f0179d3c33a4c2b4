use crate::domain::{Film, Genre};

/// Genre carried by the most films, with its count. Ties break toward the
/// genre encountered first in list order. `None` when the list is empty.
pub fn most_watched_genre(films: &[Film]) -> Option<(Genre, usize)> {
    let mut counts: Vec<(Genre, usize)> = Vec::new();
    for film in films {
        match counts.iter_mut().find(|(g, _)| *g == film.genre) {
            Some((_, n)) => *n += 1,
            None => counts.push((film.genre, 1)),
        }
    }
    // Only a strictly greater count displaces the leader, so ties keep the
    // earlier genre.
    counts
        .into_iter()
        .fold(None, |best: Option<(Genre, usize)>, (genre, n)| match best {
            Some((_, m)) if m >= n => best,
            _ => Some((genre, n)),
        })
}

/// Sum of durations across the list, in minutes.
pub fn total_minutes_watched(films: &[Film]) -> u64 {
    films.iter().map(|x| u64::from(x.duration)).sum()
}
