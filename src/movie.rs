use chrono::NaiveDate;
use serde::Deserialize;

/// Display pattern used for [`Movie::watched_date`] in command output.
pub const WATCHED_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single entry of the movie catalog.
///
/// Movies are created once by a catalog loader and never mutated afterwards,
/// so the fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    title: String,
    release_year: i32,
    director: String,
    watched_date: NaiveDate,
}

impl Movie {
    /// Create a movie record.
    pub fn new(
        title: impl Into<String>,
        release_year: i32,
        director: impl Into<String>,
        watched_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            release_year,
            director: director.into(),
            watched_date,
        }
    }

    /// Title as listed in the metadata.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Year the movie was released.
    pub fn release_year(&self) -> i32 {
        self.release_year
    }

    /// Director name as listed in the metadata.
    pub fn director(&self) -> &str {
        &self.director
    }

    /// Day the movie was watched.
    pub fn watched_date(&self) -> NaiveDate {
        self.watched_date
    }

    /// Watched date rendered with [`WATCHED_DATE_FORMAT`].
    pub fn formatted_watched_date(&self) -> String {
        self.watched_date.format(WATCHED_DATE_FORMAT).to_string()
    }
}
