//! User preference criteria for recommendations.
//!
//! A preference bundles the genres, release-year window, minimum rating
//! and keywords picked in the preference form. Nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Most genres a preference may hold
pub const MAX_GENRES: usize = 5;
/// Most keywords a preference may hold
pub const MAX_KEYWORDS: usize = 5;

pub const MIN_RATING: f32 = 1.0;
pub const MAX_RATING: f32 = 10.0;
/// Ratings are picked on a 0.5 grid
pub const RATING_STEP: f32 = 0.5;

pub const DEFAULT_YEAR_RANGE: (i32, i32) = (1990, 2023);
pub const DEFAULT_MIN_RATING: f32 = 7.0;

/// Filter criteria for [`crate::generate_recommendations`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreference {
    /// Empty means "any genre"
    pub genres: Vec<String>,
    /// Inclusive `(min, max)` release years
    pub year_range: (i32, i32),
    /// Minimum vote average
    pub rating: f32,
    /// Collected from the user but not used for filtering
    pub keywords: Vec<String>,
}

impl UserPreference {
    /// Start from the form defaults
    pub fn builder() -> UserPreferenceBuilder {
        UserPreferenceBuilder::default()
    }

    pub fn min_year(&self) -> i32 {
        self.year_range.0
    }

    pub fn max_year(&self) -> i32 {
        self.year_range.1
    }
}

impl Default for UserPreference {
    fn default() -> Self {
        Self {
            genres: Vec::new(),
            year_range: DEFAULT_YEAR_RANGE,
            rating: DEFAULT_MIN_RATING,
            keywords: Vec::new(),
        }
    }
}

/// Builds a [`UserPreference`] within the limits of the preference form.
///
/// ## Usage
/// ```ignore
/// let preference = UserPreference::builder()
///     .genre("Sci-Fi")
///     .years(2000, 2015)
///     .rating(8.0)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct UserPreferenceBuilder {
    preference: UserPreference,
}

impl UserPreferenceBuilder {
    /// Add a genre. Duplicates and genres past [`MAX_GENRES`] are ignored.
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        let genre = genre.into();
        let genres = &mut self.preference.genres;
        if genres.len() < MAX_GENRES && !genres.contains(&genre) {
            genres.push(genre);
        }
        self
    }

    pub fn genres<I, S>(self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        genres.into_iter().fold(self, |builder, genre| builder.genre(genre))
    }

    /// Set the inclusive year window; reversed bounds are swapped
    pub fn years(mut self, min_year: i32, max_year: i32) -> Self {
        self.preference.year_range = (min_year.min(max_year), min_year.max(max_year));
        self
    }

    /// Set the minimum rating, snapped to the 0.5 grid within 1.0 - 10.0
    pub fn rating(mut self, rating: f32) -> Self {
        self.preference.rating = snap_rating(rating);
        self
    }

    /// Add a keyword. Blank, duplicate and surplus keywords are ignored.
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into().trim().to_string();
        let keywords = &mut self.preference.keywords;
        if !keyword.is_empty() && keywords.len() < MAX_KEYWORDS && !keywords.contains(&keyword) {
            keywords.push(keyword);
        }
        self
    }

    pub fn keywords<I, S>(self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        keywords
            .into_iter()
            .fold(self, |builder, keyword| builder.keyword(keyword))
    }

    pub fn build(self) -> UserPreference {
        self.preference
    }
}

fn snap_rating(rating: f32) -> f32 {
    if rating.is_nan() {
        return MIN_RATING;
    }
    let snapped = (rating / RATING_STEP).round() * RATING_STEP;
    snapped.clamp(MIN_RATING, MAX_RATING)
}
