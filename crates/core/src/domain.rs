use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Closed set of film categories. Distinct from [`Folder`], which is a
/// user-named bucket and carries no classification semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Horror,
    SciFi,
    Romance,
    Documentary,
}

impl Genre {
    pub const ALL: [Genre; 7] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::Horror,
        Genre::SciFi,
        Genre::Romance,
        Genre::Documentary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "ACTION",
            Genre::Comedy => "COMEDY",
            Genre::Drama => "DRAMA",
            Genre::Horror => "HORROR",
            Genre::SciFi => "SCI_FI",
            Genre::Romance => "ROMANCE",
            Genre::Documentary => "DOCUMENTARY",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        Genre::ALL
            .iter()
            .find(|g| g.as_str() == normalized)
            .copied()
            .ok_or_else(|| Error::UnknownGenre(s.to_string()))
    }
}

/// A watched film. `rating` is clamped into 1..=5 at every creation and
/// update site; `duration` is whole minutes and always >= 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub id: String,
    pub title: String,
    pub description: String,
    pub genre: Genre,
    pub rating: u8,
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<PathBuf>,
}

/// A user-named bucket of watched films. Names are not required to be
/// unique; identity is the id. Films inside are owned copies, not
/// references into `all_films`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<PathBuf>,
    #[serde(default)]
    pub films: Vec<Film>,
}

/// A not-yet-watched candidate film. Unrated by definition; converting it
/// to a [`Film`] assigns a fresh id and deletes the wish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wish {
    pub id: String,
    pub title: String,
    pub description: String,
    pub genre: Genre,
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<PathBuf>,
}

/// The persisted aggregate: everything the catalog knows, saved as a unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub folders: Vec<Folder>,
    #[serde(default)]
    pub all_films: Vec<Film>,
    #[serde(default)]
    pub wishlist: Vec<Wish>,
}

/// Summary numbers for the statistics view, derived from `all_films`.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStats {
    pub total_films: usize,
    pub total_folders: usize,
    pub total_wishes: usize,
    pub total_minutes: u64,
    /// Most watched genre and how many films carry it, if any films exist.
    pub most_watched: Option<(Genre, usize)>,
}

/// Generate a fresh opaque identity token.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_parse_accepts_common_spellings() {
        assert_eq!("horror".parse::<Genre>().unwrap(), Genre::Horror);
        assert_eq!("SCI_FI".parse::<Genre>().unwrap(), Genre::SciFi);
        assert_eq!("sci-fi".parse::<Genre>().unwrap(), Genre::SciFi);
        assert_eq!(" Drama ".parse::<Genre>().unwrap(), Genre::Drama);
    }

    #[test]
    fn test_genre_parse_rejects_unknown() {
        let err = "musical".parse::<Genre>().unwrap_err();
        assert!(matches!(err, Error::UnknownGenre(_)));
    }

    #[test]
    fn test_genre_display_roundtrip() {
        for genre in Genre::ALL {
            assert_eq!(genre.to_string().parse::<Genre>().unwrap(), genre);
        }
    }

    #[test]
    fn test_genre_serializes_screaming_snake() {
        let json = serde_json::to_string(&Genre::SciFi).unwrap();
        assert_eq!(json, "\"SCI_FI\"");
    }

    #[test]
    fn test_catalog_field_names_are_camel_case() {
        let catalog = Catalog::default();
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.contains("\"allFilms\""));
        assert!(json.contains("\"folders\""));
        assert!(json.contains("\"wishlist\""));
    }

    #[test]
    fn test_catalog_deserializes_with_missing_collections() {
        // Older documents may omit collections entirely.
        let catalog: Catalog = serde_json::from_str("{}").unwrap();
        assert!(catalog.folders.is_empty());
        assert!(catalog.all_films.is_empty());
        assert!(catalog.wishlist.is_empty());
    }

    #[test]
    fn test_new_ids_are_unique() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
    }
}
