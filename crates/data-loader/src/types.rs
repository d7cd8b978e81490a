//! Core domain types for imported and catalog movies.
//!
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (MovieId)
//! - Structs with public fields and `Option<T>` for optional data
//! - Serde derives so records can be written out as JSON

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier for a movie record. Not guaranteed unique within a batch.
pub type MovieId = u32;

// =============================================================================
// Defaults
// =============================================================================
// Values substituted when an imported row leaves a required field blank

pub const DEFAULT_TITLE: &str = "Unknown Title";
pub const DEFAULT_OVERVIEW: &str = "No overview available";
pub const DEFAULT_POSTER_PATH: &str = "https://placehold.co/400x600?text=No+Poster";
pub const DEFAULT_GENRE: &str = "Uncategorized";

/// Date format used for `release_date` (`YYYY-MM-DD`)
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's UTC date as `YYYY-MM-DD`, the fallback release date
pub fn today() -> String {
    Utc::now().date_naive().format(RELEASE_DATE_FORMAT).to_string()
}

// =============================================================================
// MovieRecord
// =============================================================================

/// One movie entry, either parsed from CSV or supplied by a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    pub overview: String,
    /// ISO date, e.g. "2010-07-15"
    pub release_date: String,
    /// URL or relative path to the poster image
    pub poster_path: String,
    /// Average vote on a 0.0 - 10.0 scale
    pub vote_average: f32,
    /// Ordered, never empty
    pub genres: Vec<String>,
    /// Free-form running time, e.g. "2h 22m"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cast: Option<Vec<String>>,
}

impl MovieRecord {
    /// Creates a record where every required field holds its default value
    pub fn with_defaults(id: MovieId) -> Self {
        Self {
            id,
            title: DEFAULT_TITLE.to_string(),
            overview: DEFAULT_OVERVIEW.to_string(),
            release_date: today(),
            poster_path: DEFAULT_POSTER_PATH.to_string(),
            vote_average: 0.0,
            genres: vec![DEFAULT_GENRE.to_string()],
            duration: None,
            director: None,
            cast: None,
        }
    }

    /// Parsed `release_date`
    ///
    /// Accepts a plain date ("2010-07-15"), an RFC 3339 timestamp (taken as
    /// its UTC date), or a bare year ("2010", read as January 1st). Returns
    /// `None` when the date can't be read.
    pub fn release_day(&self) -> Option<NaiveDate> {
        parse_release_date(&self.release_date)
    }

    /// Calendar year of `release_date`, see [`MovieRecord::release_day`]
    pub fn release_year(&self) -> Option<i32> {
        self.release_day().map(|day| day.year())
    }

    /// Whether any of this record's genres equals `genre` exactly
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

/// Reads a release date in any of the forms `MovieRecord::release_day` accepts
pub fn parse_release_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    if let Ok(day) = NaiveDate::parse_from_str(date, RELEASE_DATE_FORMAT) {
        return Some(day);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(date) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }
    if date.len() == 4 && date.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveDate::from_ymd_opt(date.parse().ok()?, 1, 1);
    }
    None
}
