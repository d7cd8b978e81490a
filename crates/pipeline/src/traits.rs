//! Core traits for the recommendation pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a movie catalog.

use crate::preference::UserPreference;
use data_loader::MovieRecord;

/// Core trait for filtering movies against a preference.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across threads
/// - Filters take ownership of the Vec<MovieRecord> and return the survivors
/// - Filtering can't fail: an empty result is a normal outcome
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of movies.
    ///
    /// # Arguments
    /// * `movies` - The movies to filter (takes ownership)
    /// * `preference` - The user's criteria
    ///
    /// # Returns
    /// The movies that pass, in their original relative order
    fn apply(&self, movies: Vec<MovieRecord>, preference: &UserPreference) -> Vec<MovieRecord>;
}
