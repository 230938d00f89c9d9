use crate::movie::Movie;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Movie metadata compiled into the binary, used when no metadata file is configured.
const BUNDLED_METADATA: &str = include_str!("../resources/movie_metadata.json");

/// Source of movie records queried by the command actions.
///
/// Implementations own loading, caching and matching policy. Results are
/// returned in the order the implementation chooses; callers never re-sort.
#[cfg_attr(test, mockall::automock)]
pub trait MovieCatalog {
    /// All movies directed by `director`.
    fn directed_by(&self, director: &str) -> anyhow::Result<Vec<Movie>>;

    /// All movies released in `year`.
    fn released_year_by(&self, year: i32) -> anyhow::Result<Vec<Movie>>;
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("can't read movie metadata from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed movie metadata: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Catalog backed by a list of movies held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    movies: Vec<Movie>,
}

impl InMemoryCatalog {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// Parse a JSON array of movies.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let movies: Vec<Movie> = serde_json::from_str(text)?;
        Ok(Self::new(movies))
    }

    /// Load the catalog from a JSON metadata file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&text)?;
        info!(
            "loaded {} movies from {}",
            catalog.movies.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Catalog built from the metadata shipped with the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(BUNDLED_METADATA)?;
        info!("loaded {} bundled movies", catalog.movies.len());
        Ok(catalog)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }
}

impl MovieCatalog for InMemoryCatalog {
    /// Case-insensitive substring match on the director name.
    fn directed_by(&self, director: &str) -> anyhow::Result<Vec<Movie>> {
        let needle = director.to_lowercase();
        Ok(self
            .movies
            .iter()
            .filter(|movie| movie.director().to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    fn released_year_by(&self, year: i32) -> anyhow::Result<Vec<Movie>> {
        Ok(self
            .movies
            .iter()
            .filter(|movie| movie.release_year() == year)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    fn movie(title: &str, year: i32, director: &str) -> Movie {
        Movie::new(
            title,
            year,
            director,
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        )
    }

    fn sample() -> InMemoryCatalog {
        InMemoryCatalog::new(vec![
            movie("Transformers", 2007, "Michael Bay"),
            movie("The Martian", 2015, "Ridley Scott"),
            movie("Pain & Gain", 2013, "Michael Bay"),
            movie("Inside Out", 2015, "Pete Docter"),
        ])
    }

    #[test]
    fn test_directed_by_ignores_case_and_keeps_order() {
        let found = sample().directed_by("michael bay").unwrap();
        let titles: Vec<&str> = found.iter().map(Movie::title).collect();
        assert_eq!(titles, vec!["Transformers", "Pain & Gain"]);
    }

    #[test]
    fn test_directed_by_unknown_director_is_empty() {
        assert!(sample().directed_by("Nobody").unwrap().is_empty());
    }

    #[test]
    fn test_released_year_by() {
        let found = sample().released_year_by(2015).unwrap();
        let titles: Vec<&str> = found.iter().map(Movie::title).collect();
        assert_eq!(titles, vec!["The Martian", "Inside Out"]);
        assert!(sample().released_year_by(1900).unwrap().is_empty());
    }

    #[test]
    fn test_from_path_reads_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title":"Dunkirk","releaseYear":2017,"director":"Christopher Nolan","watchedDate":"2017-08-01"}}]"#
        )
        .unwrap();

        let catalog = InMemoryCatalog::from_path(file.path()).unwrap();

        assert_eq!(catalog.movies().len(), 1);
        assert_eq!(catalog.movies()[0].title(), "Dunkirk");
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");

        let err = InMemoryCatalog::from_path(&missing).unwrap_err();

        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = InMemoryCatalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_bundled_metadata_parses() {
        let catalog = InMemoryCatalog::bundled().unwrap();
        assert!(!catalog.movies().is_empty());
        assert_eq!(catalog.directed_by("Michael Bay").unwrap().len(), 2);
    }
}
