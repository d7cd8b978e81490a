//! Filter to ensure a minimum vote average.

use crate::preference::UserPreference;
use crate::traits::Filter;
use data_loader::MovieRecord;

/// Removes movies rated below the preference's minimum.
///
/// A movie exactly at the threshold passes.
pub struct MinimumRatingFilter;

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply(&self, movies: Vec<MovieRecord>, preference: &UserPreference) -> Vec<MovieRecord> {
        movies
            .into_iter()
            .filter(|movie| movie.vote_average >= preference.rating)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::{ids, movie};

    #[test]
    fn test_minimum_rating_filter() {
        let movies = vec![
            movie(1, "2000-01-01", 8.5, &["Drama"]),
            movie(2, "2000-01-01", 6.9, &["Drama"]),
            movie(3, "2000-01-01", 7.0, &["Drama"]),
            movie(4, "2000-01-01", 0.0, &["Drama"]),
        ];
        let preference = UserPreference::builder().rating(7.0).build();

        let filtered = MinimumRatingFilter.apply(movies, &preference);

        assert_eq!(ids(&filtered), vec![1, 3]);
    }
}
