//! Filter to keep only movies in the user's chosen genres.

use crate::preference::UserPreference;
use crate::traits::Filter;
use data_loader::MovieRecord;

/// Keeps movies sharing at least one genre with the preference.
///
/// ## Algorithm
/// 1. If the preference names no genres, keep everything
/// 2. Otherwise keep movies where any genre equals a preferred genre
///    (case-sensitive, exact)
pub struct GenreMatchFilter;

impl Filter for GenreMatchFilter {
    fn name(&self) -> &str {
        "GenreMatchFilter"
    }

    fn apply(&self, movies: Vec<MovieRecord>, preference: &UserPreference) -> Vec<MovieRecord> {
        if preference.genres.is_empty() {
            return movies;
        }

        movies
            .into_iter()
            .filter(|movie| preference.genres.iter().any(|genre| movie.has_genre(genre)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::{ids, movie};

    fn catalog() -> Vec<MovieRecord> {
        vec![
            movie(1, "2000-01-01", 8.0, &["Action", "Adventure"]),
            movie(2, "1995-01-01", 7.0, &["Drama"]),
            movie(3, "2005-01-01", 6.0, &["Sci-Fi"]),
        ]
    }

    #[test]
    fn test_genre_match_filter() {
        let preference = UserPreference::builder().genres(["Drama", "Adventure"]).build();

        let filtered = GenreMatchFilter.apply(catalog(), &preference);

        assert_eq!(ids(&filtered), vec![1, 2]);
    }

    #[test]
    fn test_no_genres_keeps_everything() {
        let preference = UserPreference::default();

        let filtered = GenreMatchFilter.apply(catalog(), &preference);

        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_genre_match_is_case_sensitive() {
        let preference = UserPreference::builder().genre("sci-fi").build();

        let filtered = GenreMatchFilter.apply(catalog(), &preference);

        assert!(filtered.is_empty());
    }
}
