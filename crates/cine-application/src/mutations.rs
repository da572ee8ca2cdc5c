//! User actions that change server or session state.
//!
//! Each action validates locally, calls the API once and reports the outcome
//! as an alert. Failures are returned after being shown.

use crate::app::CineApp;
use crate::scheduler::TimerSlot;
use cine_core::{CineError, Result};
use cine_core::api::{CommentSubmission, RatingSubmission};
use cine_core::form::{CommentForm, LoginForm, MovieForm, RegisterForm, validate_stars};
use cine_core::movie::{Movie, MovieId};
use cine_core::session::UserSession;
use cine_core::text;
use cine_core::ui::FormId;
use cine_core::view::{CommentsView, ViewName};

/// Outcome of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined the confirmation prompt.
    Cancelled,
}

impl CineApp {
    /// Creates an account, then goes to the login view.
    pub async fn register(&self, form: &RegisterForm) -> Result<()> {
        let registration = form
            .validate()
            .map_err(|e| self.report("Register", e, text::REGISTER_FAILED))?;

        match self.api.register(&registration).await {
            Ok(_) => {
                tracing::info!("[CineApp] Registered {}", registration.email);
                self.alerts.success(text::REGISTER_OK);
                self.renderer.clear_form(FormId::Register);
                self.navigator
                    .navigate_after(ViewName::Login, self.timings.register_redirect());
                Ok(())
            }
            Err(e) => Err(self.report("Register", e, text::REGISTER_FAILED)),
        }
    }

    /// Authenticates and stores the session, then goes home.
    pub async fn login(&self, form: &LoginForm) -> Result<UserSession> {
        let credentials = form
            .validate()
            .map_err(|e| self.report("Login", e, text::LOGIN_FAILED))?;

        let user = self
            .api
            .login(&credentials)
            .await
            .map_err(|e| self.report("Login", e, text::LOGIN_FAILED))?;
        self.session
            .login(user.clone())
            .map_err(|e| self.report("Login", e, text::LOGIN_FAILED))?;

        self.alerts.success(text::LOGIN_OK);
        self.renderer.clear_form(FormId::Login);
        self.navigator
            .navigate_after(ViewName::Home, self.timings.login_redirect());
        Ok(user)
    }

    /// Forgets the session, then goes home.
    pub fn logout(&self) -> Result<()> {
        let cleared = self.session.logout();
        if let Err(e) = &cleared {
            tracing::warn!("[CineApp] Stored session could not be removed: {}", e);
        }
        self.alerts.success(text::LOGOUT_OK);
        self.navigator
            .navigate_after(ViewName::Home, self.timings.logout_redirect());
        cleared
    }

    /// Adds a movie to the catalog, then goes home.
    ///
    /// Returns the created record when the server sent one back.
    pub async fn add_movie(&self, form: &MovieForm) -> Result<Option<Movie>> {
        self.require_session(text::LOGIN_REQUIRED_ADD)
            .map_err(|e| self.report("Add movie", e, text::MOVIE_ADD_FAILED))?;
        let new_movie = form
            .validate()
            .map_err(|e| self.report("Add movie", e, text::MOVIE_ADD_FAILED))?;

        let created = self
            .api
            .create_movie(&new_movie)
            .await
            .map_err(|e| self.report("Add movie", e, text::MOVIE_ADD_FAILED))?;

        match &created {
            Some(movie) => tracing::info!("[CineApp] Added movie {} ({})", movie.id, movie.title),
            None => tracing::info!("[CineApp] Added movie {}", new_movie.title),
        }
        self.alerts.success(text::MOVIE_ADDED);
        self.renderer.clear_form(FormId::AddMovie);
        self.navigator
            .navigate_after(ViewName::Home, self.timings.movie_created_redirect());
        Ok(created)
    }

    /// Deletes the movie open in the detail view.
    pub async fn delete_current_movie(&self) -> Result<DeleteOutcome> {
        let movie_id = self
            .current_movie_or_err()
            .map_err(|e| self.report("Delete movie", e, text::MOVIE_DELETE_FAILED))?;
        self.delete_movie(movie_id).await
    }

    /// Deletes a movie after the user confirms.
    ///
    /// From the home view the catalog reloads in place; from any other view
    /// the client returns home after a short delay.
    pub async fn delete_movie(&self, movie_id: MovieId) -> Result<DeleteOutcome> {
        self.require_session(text::LOGIN_REQUIRED_DELETE)
            .map_err(|e| self.report("Delete movie", e, text::MOVIE_DELETE_FAILED))?;

        if !self.renderer.confirm(text::CONFIRM_DELETE) {
            tracing::debug!("[CineApp] Delete of movie {} cancelled", movie_id);
            return Ok(DeleteOutcome::Cancelled);
        }

        let message = self
            .api
            .delete_movie(movie_id)
            .await
            .map_err(|e| self.report("Delete movie", e, text::MOVIE_DELETE_FAILED))?;

        tracing::info!("[CineApp] Deleted movie {}", movie_id);
        self.alerts.success(
            message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| text::MOVIE_DELETED.to_string()),
        );
        if self.detail.current_movie() == Some(movie_id) {
            self.detail.set_current_movie(None);
            self.scheduler.cancel(TimerSlot::DetailRefresh);
        }

        if self.navigator.current() == ViewName::Home {
            // Failures are already rendered as the catalog's error state.
            let _ = self.catalog.load_all().await;
        } else {
            self.navigator
                .navigate_after(ViewName::Home, self.timings.movie_deleted_redirect());
        }
        Ok(DeleteOutcome::Deleted)
    }

    /// Rates the open movie with 1 to 5 stars.
    ///
    /// The stars are highlighted before the request goes out, and the detail
    /// view reloads shortly after the server accepts it.
    pub async fn rate_movie(&self, stars: u8) -> Result<()> {
        let user = self
            .require_session(text::LOGIN_REQUIRED_RATE)
            .map_err(|e| self.report("Rate movie", e, text::RATING_FAILED))?;
        let stars = validate_stars(stars)
            .map_err(|e| self.report("Rate movie", e, text::RATING_FAILED))?;
        let movie_id = self
            .current_movie_or_err()
            .map_err(|e| self.report("Rate movie", e, text::RATING_FAILED))?;

        self.renderer.render_stars(stars);

        let submission = RatingSubmission {
            user_id: user.id,
            movie_id,
            stars,
        };
        self.api
            .submit_rating(&submission)
            .await
            .map_err(|e| self.report("Rate movie", e, text::RATING_FAILED))?;

        self.alerts.success(text::rated(stars));
        let detail = self.detail.clone();
        self.scheduler.schedule(
            TimerSlot::DetailRefresh,
            self.timings.rating_refresh(),
            async move {
                // Failures are shown as alerts by the loader.
                let _ = detail.load_detail(movie_id).await;
            },
        );
        Ok(())
    }

    /// Posts a comment on the open movie and reloads the comment list.
    pub async fn add_comment(&self, form: &CommentForm) -> Result<CommentsView> {
        let user = self
            .require_session(text::LOGIN_REQUIRED_COMMENT)
            .map_err(|e| self.report("Comment", e, text::COMMENT_FAILED))?;
        let comment_text = form
            .validate()
            .map_err(|e| self.report("Comment", e, text::COMMENT_FAILED))?;
        let movie_id = self
            .current_movie_or_err()
            .map_err(|e| self.report("Comment", e, text::COMMENT_FAILED))?;

        let submission = CommentSubmission {
            user_id: user.id,
            movie_id,
            text: comment_text,
        };
        self.api
            .submit_comment(&submission)
            .await
            .map_err(|e| self.report("Comment", e, text::COMMENT_FAILED))?;

        self.alerts.success(text::COMMENT_ADDED);
        self.renderer.clear_form(FormId::Comment);
        Ok(self.detail.load_comments(movie_id).await)
    }

    /// The movie on screen. Outside the detail view there is none.
    fn current_movie_or_err(&self) -> Result<MovieId> {
        self.detail
            .current_movie()
            .filter(|_| self.navigator.current() == ViewName::Detail)
            .ok_or_else(|| CineError::validation(text::NO_MOVIE_SELECTED))
    }
}
