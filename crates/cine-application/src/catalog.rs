//! Catalog listing and search.

use crate::navigation::OnEnter;
use async_trait::async_trait;
use cine_core::Result;
use cine_core::api::CatalogApi;
use cine_core::movie::{MovieId, RatingAggregate};
use cine_core::ui::Renderer;
use cine_core::view::{CatalogState, MovieCard};
use futures::future::join_all;
use std::sync::Arc;

/// Fetches a movie's average, degrading to "no ratings" when the lookup fails.
pub(crate) async fn fetch_rating(api: &dyn CatalogApi, movie_id: MovieId) -> RatingAggregate {
    match api.rating_average(movie_id).await {
        Ok(aggregate) => aggregate,
        Err(e) => {
            tracing::warn!("[Catalog] Rating lookup failed for movie {}: {}", movie_id, e);
            RatingAggregate::unrated(movie_id)
        }
    }
}

/// Renders the catalog list.
///
/// Cards appear in server order. With `parallel_ratings` the averages are
/// fetched concurrently, otherwise one after another.
pub struct CatalogLoader {
    api: Arc<dyn CatalogApi>,
    renderer: Arc<dyn Renderer>,
    parallel_ratings: bool,
}

impl CatalogLoader {
    pub fn new(api: Arc<dyn CatalogApi>, renderer: Arc<dyn Renderer>, parallel_ratings: bool) -> Self {
        Self {
            api,
            renderer,
            parallel_ratings,
        }
    }

    /// Lists every movie. Returns the number of cards rendered.
    pub async fn load_all(&self) -> Result<usize> {
        self.load(None).await
    }

    /// Lists movies whose title matches `query`. A blank query lists everything.
    pub async fn search(&self, query: &str) -> Result<usize> {
        let query = query.trim();
        if query.is_empty() {
            self.load(None).await
        } else {
            self.load(Some(query)).await
        }
    }

    async fn load(&self, title: Option<&str>) -> Result<usize> {
        self.renderer.render_catalog(CatalogState::Loading);

        let movies = match self.api.list_movies(title).await {
            Ok(movies) => movies,
            Err(e) => {
                tracing::error!("[Catalog] Failed to list movies: {}", e);
                self.renderer.render_catalog(CatalogState::Failed);
                return Err(e);
            }
        };

        if movies.is_empty() {
            self.renderer.render_catalog(if title.is_some() {
                CatalogState::NoMatches
            } else {
                CatalogState::Empty
            });
            return Ok(0);
        }

        self.renderer.render_catalog(CatalogState::Ready);
        let api = self.api.as_ref();
        if self.parallel_ratings {
            let ratings = join_all(movies.iter().map(|movie| fetch_rating(api, movie.id))).await;
            for (movie, rating) in movies.iter().zip(&ratings) {
                self.renderer.append_card(&MovieCard::compose(movie, rating));
            }
        } else {
            for movie in &movies {
                let rating = fetch_rating(api, movie.id).await;
                self.renderer.append_card(&MovieCard::compose(movie, &rating));
            }
        }

        tracing::debug!("[Catalog] Rendered {} card(s)", movies.len());
        Ok(movies.len())
    }
}

/// Reloads the catalog whenever the home view is entered.
pub struct ReloadCatalog(pub Arc<CatalogLoader>);

#[async_trait]
impl OnEnter for ReloadCatalog {
    async fn on_enter(&self) {
        // Failures are already rendered as the catalog's error state.
        let _ = self.0.load_all().await;
    }
}
