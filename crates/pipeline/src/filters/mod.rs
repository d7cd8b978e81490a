//! Filter implementations for the recommendation pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod genre_match;
pub mod release_year;
pub mod minimum_rating;

// Re-export for convenience
pub use genre_match::GenreMatchFilter;
pub use release_year::ReleaseYearFilter;
pub use minimum_rating::MinimumRatingFilter;

#[cfg(test)]
pub(crate) mod test_support {
    use data_loader::MovieRecord;

    /// A movie with just the fields the filters look at
    pub fn movie(id: u32, release_date: &str, vote_average: f32, genres: &[&str]) -> MovieRecord {
        let mut movie = MovieRecord::with_defaults(id);
        movie.title = format!("Movie {}", id);
        movie.release_date = release_date.to_string();
        movie.vote_average = vote_average;
        movie.genres = genres.iter().map(|g| g.to_string()).collect();
        movie
    }

    pub fn ids(movies: &[MovieRecord]) -> Vec<u32> {
        movies.iter().map(|m| m.id).collect()
    }
}
