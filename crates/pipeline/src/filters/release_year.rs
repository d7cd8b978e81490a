//! Filter for the user's release-year window.

use crate::preference::UserPreference;
use crate::traits::Filter;
use data_loader::MovieRecord;

/// Keeps movies released within the preference's inclusive year range.
///
/// ## Algorithm
/// 1. Read the year from each movie's release date
/// 2. Keep it if `min_year <= year <= max_year`
/// 3. Movies with an unreadable release date are dropped
pub struct ReleaseYearFilter;

impl Filter for ReleaseYearFilter {
    fn name(&self) -> &str {
        "ReleaseYearFilter"
    }

    fn apply(&self, movies: Vec<MovieRecord>, preference: &UserPreference) -> Vec<MovieRecord> {
        let (min_year, max_year) = (preference.min_year(), preference.max_year());
        movies
            .into_iter()
            .filter(|movie| {
                movie
                    .release_year()
                    .is_some_and(|year| year >= min_year && year <= max_year)
            })
            .collect()
    }
}
