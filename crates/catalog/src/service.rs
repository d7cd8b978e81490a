//! # Catalog Service
//!
//! Async queries over a catalog source:
//! 1. Fetch the whole catalog or a single movie
//! 2. Top rated and most recent listings
//! 3. Genre and category browsing
//! 4. Preference-driven recommendations

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use crate::source::CatalogSource;
use data_loader::{MovieId, MovieRecord};
use pipeline::{category_movies, rank_by_rating, RecommendationCategory, Recommender, UserPreference};

/// Query service shared by every caller of the catalog
#[derive(Clone)]
pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
    recommender: Arc<Recommender>,
}

impl CatalogService {
    /// Create a service over `source` with the standard recommender
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            recommender: Arc::new(Recommender::new()),
        }
    }

    /// Name of the underlying source
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Every movie in the catalog
    pub async fn fetch_movies(&self) -> Result<Vec<MovieRecord>> {
        Ok(self.source.movies().to_vec())
    }

    /// The first movie with this id, if any
    pub async fn fetch_movie_by_id(&self, id: MovieId) -> Result<Option<MovieRecord>> {
        Ok(self.source.movies().iter().find(|m| m.id == id).cloned())
    }

    /// Highest rated movies first; ties keep catalog order
    pub async fn top_rated(&self, limit: usize) -> Result<Vec<MovieRecord>> {
        let mut movies = rank_by_rating(self.source.movies().to_vec());
        movies.truncate(limit);
        Ok(movies)
    }

    /// Newest releases first; movies with unreadable dates go last
    pub async fn recent(&self, limit: usize) -> Result<Vec<MovieRecord>> {
        let mut movies = self.source.movies().to_vec();
        movies.sort_by_key(|m| std::cmp::Reverse(m.release_day()));
        movies.truncate(limit);
        Ok(movies)
    }

    /// Movies carrying `genre`, compared case-insensitively
    pub async fn movies_by_genre(&self, genre: &str) -> Result<Vec<MovieRecord>> {
        let wanted = genre.to_lowercase();
        Ok(self
            .source
            .movies()
            .iter()
            .filter(|m| m.genres.iter().any(|g| g.to_lowercase() == wanted))
            .cloned()
            .collect())
    }

    /// Movies for a browsing tab
    pub async fn category_movies(&self, category: RecommendationCategory) -> Result<Vec<MovieRecord>> {
        let movies = category_movies(self.source.movies(), category);
        info!("Category {} matched {} movies", category, movies.len());
        Ok(movies)
    }

    /// Filter and rank the catalog against `preference`
    ///
    /// The work runs on the blocking pool so large imported catalogs don't
    /// stall the runtime.
    pub async fn recommendations(&self, preference: &UserPreference) -> Result<Vec<MovieRecord>> {
        let start_time = Instant::now();

        let recommendations = tokio::task::spawn_blocking({
            let source = self.source.clone();
            let recommender = self.recommender.clone();
            let preference = preference.clone();
            move || recommender.recommend(source.movies(), &preference)
        })
        .await
        .context("Recommendation task panicked")?;

        info!(
            "Generated {} recommendations from {} movies in {:.2?}",
            recommendations.len(),
            self.source.movies().len(),
            start_time.elapsed()
        );
        Ok(recommendations)
    }
}
