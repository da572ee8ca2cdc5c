//! The detail view of a single movie.

use crate::alert::AlertPresenter;
use crate::catalog::fetch_rating;
use crate::navigation::Navigator;
use crate::session_store::SessionStore;
use cine_core::api::CatalogApi;
use cine_core::movie::MovieId;
use cine_core::ui::Renderer;
use cine_core::view::{CommentsView, DetailAffordances, MovieDetail, ViewName};
use cine_core::{Result, text};
use std::sync::{Arc, RwLock};

/// Loads and renders a movie with its rating and comments.
///
/// Remembers the movie last opened; rating and commenting act on it.
pub struct DetailLoader {
    api: Arc<dyn CatalogApi>,
    renderer: Arc<dyn Renderer>,
    session: Arc<SessionStore>,
    navigator: Arc<Navigator>,
    alerts: Arc<AlertPresenter>,
    current_movie: RwLock<Option<MovieId>>,
}

impl DetailLoader {
    pub fn new(
        api: Arc<dyn CatalogApi>,
        renderer: Arc<dyn Renderer>,
        session: Arc<SessionStore>,
        navigator: Arc<Navigator>,
        alerts: Arc<AlertPresenter>,
    ) -> Self {
        Self {
            api,
            renderer,
            session,
            navigator,
            alerts,
            current_movie: RwLock::new(None),
        }
    }

    /// Opens the detail view for `movie_id`.
    ///
    /// A movie that cannot be fetched shows an error alert and leaves the
    /// active view and the open movie alone. Rating and comment failures degrade to "no ratings"
    /// and an empty comment list.
    pub async fn load_detail(&self, movie_id: MovieId) -> Result<MovieDetail> {
        let movie = match self.api.get_movie(movie_id).await {
            Ok(movie) => movie,
            Err(e) => {
                tracing::error!("[Detail] Failed to load movie {}: {}", movie_id, e);
                self.alerts.error(e.user_message(text::DETAIL_FAILED));
                return Err(e);
            }
        };
        self.set_current_movie(Some(movie_id));
        let rating = fetch_rating(self.api.as_ref(), movie_id).await;

        let detail = MovieDetail::compose(&movie, &rating);
        self.renderer.render_detail(&detail);
        self.renderer
            .set_detail_affordances(DetailAffordances::for_session(self.session.is_logged_in()));

        self.load_comments(movie_id).await;
        self.navigator.show(ViewName::Detail).await;

        Ok(detail)
    }

    /// Renders the comment list for `movie_id`.
    pub async fn load_comments(&self, movie_id: MovieId) -> CommentsView {
        let comments = match self.api.list_comments(movie_id).await {
            Ok(comments) => CommentsView::from_comments(&comments),
            Err(e) => {
                tracing::warn!("[Detail] Failed to load comments for {}: {}", movie_id, e);
                CommentsView::Empty
            }
        };
        self.renderer.render_comments(&comments);
        comments
    }

    pub fn current_movie(&self) -> Option<MovieId> {
        *self.current_movie.read().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn set_current_movie(&self, movie_id: Option<MovieId>) {
        *self.current_movie.write().unwrap_or_else(|e| e.into_inner()) = movie_id;
    }
}
