//! Pipeline for filtering and ranking movies against user preferences.
//!
//! This crate provides:
//! - UserPreference and its builder
//! - Filter trait and implementations for catalog filtering
//! - FilterPipeline for composing filters
//! - Rating ranking, the standard Recommender, and category browsing
//!
//! ## Architecture
//! A recommendation request processes the catalog in stages:
//! 1. Filters remove movies outside the chosen genres, years, and rating
//! 2. The survivors are ranked by vote average (stable)
//! 3. Callers truncate the ranked list for display
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{generate_recommendations, UserPreference};
//!
//! let preference = UserPreference::builder()
//!     .genre("Sci-Fi")
//!     .years(2000, 2015)
//!     .rating(8.0)
//!     .build();
//!
//! let picks = generate_recommendations(&catalog, &preference);
//! ```

pub mod preference;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod ranking;
pub mod recommend;

// Re-export main types
pub use preference::{UserPreference, UserPreferenceBuilder};
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use ranking::{by_rating_desc, rank_by_rating};
pub use recommend::{
    category_movies, generate_recommendations, RecommendationCategory, Recommender, UnknownCategory,
};
