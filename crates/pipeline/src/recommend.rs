//! Preference-driven recommendations and category browsing.
//!
//! ## Algorithm
//! 1. Genre filter (skipped when no genres are chosen)
//! 2. Release-year window
//! 3. Minimum rating
//! 4. Rank by rating, highest first (stable)
//!
//! Keywords on the preference are accepted but never consulted.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{GenreMatchFilter, MinimumRatingFilter, ReleaseYearFilter};
use crate::preference::UserPreference;
use crate::ranking::rank_by_rating;
use data_loader::MovieRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Runs the standard filter pipeline followed by rating ranking.
pub struct Recommender {
    pipeline: FilterPipeline,
}

impl Recommender {
    /// Genre -> release year -> minimum rating
    pub fn new() -> Self {
        Self {
            pipeline: FilterPipeline::new()
                .add_filter(GenreMatchFilter)
                .add_filter(ReleaseYearFilter)
                .add_filter(MinimumRatingFilter),
        }
    }

    /// Filter and rank a copy of `catalog`.
    ///
    /// Returns the full ranked list; callers truncate for display.
    pub fn recommend(&self, catalog: &[MovieRecord], preference: &UserPreference) -> Vec<MovieRecord> {
        if !preference.keywords.is_empty() {
            debug!(
                "Ignoring {} keywords, keyword matching is not supported",
                preference.keywords.len()
            );
        }

        let filtered = self.pipeline.apply(catalog.to_vec(), preference);
        rank_by_rating(filtered)
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter and rank `catalog` against `preference` with the standard pipeline
pub fn generate_recommendations(
    catalog: &[MovieRecord],
    preference: &UserPreference,
) -> Vec<MovieRecord> {
    Recommender::new().recommend(catalog, preference)
}

// =============================================================================
// Categories
// =============================================================================

/// Browsing tabs, each backed by one genre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationCategory {
    Action,
    Comedy,
    Drama,
    Horror,
    SciFi,
    Family,
    Romance,
    Documentary,
}

impl RecommendationCategory {
    pub const ALL: [RecommendationCategory; 8] = [
        RecommendationCategory::Action,
        RecommendationCategory::Comedy,
        RecommendationCategory::Drama,
        RecommendationCategory::Horror,
        RecommendationCategory::SciFi,
        RecommendationCategory::Family,
        RecommendationCategory::Romance,
        RecommendationCategory::Documentary,
    ];

    /// Genre name as it appears on movie records
    ///
    /// Example: SciFi -> "Sci-Fi"
    pub fn genre_name(self) -> &'static str {
        match self {
            RecommendationCategory::Action => "Action",
            RecommendationCategory::Comedy => "Comedy",
            RecommendationCategory::Drama => "Drama",
            RecommendationCategory::Horror => "Horror",
            RecommendationCategory::SciFi => "Sci-Fi",
            RecommendationCategory::Family => "Family",
            RecommendationCategory::Romance => "Romance",
            RecommendationCategory::Documentary => "Documentary",
        }
    }

    /// Short key used in URLs and on the command line
    pub fn key(self) -> &'static str {
        match self {
            RecommendationCategory::Action => "action",
            RecommendationCategory::Comedy => "comedy",
            RecommendationCategory::Drama => "drama",
            RecommendationCategory::Horror => "horror",
            RecommendationCategory::SciFi => "scifi",
            RecommendationCategory::Family => "family",
            RecommendationCategory::Romance => "romance",
            RecommendationCategory::Documentary => "documentary",
        }
    }
}

impl fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown category '{0}', expected one of: action, comedy, drama, horror, scifi, family, romance, documentary")]
pub struct UnknownCategory(pub String);

impl FromStr for RecommendationCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        RecommendationCategory::ALL
            .into_iter()
            .find(|category| category.key() == key)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Movies in a category's genre, in catalog order
///
/// Same as the genre filter with a one-genre preference and no year or
/// rating constraints.
pub fn category_movies(catalog: &[MovieRecord], category: RecommendationCategory) -> Vec<MovieRecord> {
    let preference = UserPreference::builder()
        .genre(category.genre_name())
        .build();
    FilterPipeline::new()
        .add_filter(GenreMatchFilter)
        .apply(catalog.to_vec(), &preference)
}
