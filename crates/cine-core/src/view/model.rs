//! View models. Rebuilt on every load; nothing here outlives one render pass.

use serde::Serialize;

use crate::movie::{Comment, Movie, MovieId, RatingAggregate};
use crate::session::UserSession;
use crate::text;

/// Catalog list placeholder state. Cards are appended separately once `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CatalogState {
    Loading,
    /// The list was cleared and is about to receive cards.
    Ready,
    /// No movies in the catalog.
    Empty,
    /// A search matched nothing.
    NoMatches,
    Failed,
}

impl CatalogState {
    /// Placeholder text shown in the list area, if any.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(text::CATALOG_LOADING),
            Self::Ready => None,
            Self::Empty => Some(text::CATALOG_EMPTY),
            Self::NoMatches => Some(text::SEARCH_EMPTY),
            Self::Failed => Some(text::CATALOG_FAILED),
        }
    }
}

/// One catalog card: a movie with its rating label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieCard {
    pub movie_id: MovieId,
    pub title: String,
    pub year: Option<i32>,
    pub genre: String,
    pub poster_url: String,
    pub rating_label: String,
}

impl MovieCard {
    pub fn compose(movie: &Movie, rating: &RatingAggregate) -> Self {
        Self {
            movie_id: movie.id,
            title: movie.title.clone(),
            year: movie.year,
            genre: movie.genre.clone(),
            poster_url: movie.poster_url.clone(),
            rating_label: rating.label(),
        }
    }
}

/// The detail panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetail {
    pub movie_id: MovieId,
    pub title: String,
    pub director: String,
    pub year: Option<i32>,
    pub genre: String,
    pub synopsis: String,
    pub poster_url: String,
    pub rating_label: String,
}

impl MovieDetail {
    pub fn compose(movie: &Movie, rating: &RatingAggregate) -> Self {
        Self {
            movie_id: movie.id,
            title: movie.title.clone(),
            director: movie.director.clone(),
            year: movie.year,
            genre: movie.genre.clone(),
            synopsis: movie.synopsis.clone(),
            poster_url: movie.poster_url.clone(),
            rating_label: rating.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentItem {
    pub author: String,
    pub text: String,
    pub date: String,
}

impl From<&Comment> for CommentItem {
    fn from(comment: &Comment) -> Self {
        Self {
            author: comment.author_name.clone(),
            text: comment.text.clone(),
            date: comment.display_date(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CommentsView {
    Items(Vec<CommentItem>),
    /// No comments, or the list could not be loaded.
    Empty,
}

impl CommentsView {
    pub fn from_comments(comments: &[Comment]) -> Self {
        if comments.is_empty() {
            Self::Empty
        } else {
            Self::Items(comments.iter().map(CommentItem::from).collect())
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Items(items) => items.len(),
            Self::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Header affordances driven by login status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionIndicators {
    pub greeting: Option<String>,
    pub show_login: bool,
    pub show_register: bool,
    pub show_add_movie: bool,
    pub show_logout: bool,
}

impl SessionIndicators {
    pub fn for_session(session: Option<&UserSession>) -> Self {
        match session {
            Some(user) => Self {
                greeting: Some(text::greeting(&user.name)),
                show_login: false,
                show_register: false,
                show_add_movie: true,
                show_logout: true,
            },
            None => Self::logged_out(),
        }
    }

    pub fn logged_out() -> Self {
        Self {
            greeting: None,
            show_login: true,
            show_register: true,
            show_add_movie: false,
            show_logout: false,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.greeting.is_some()
    }
}

/// Detail-view sections that only make sense with a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetailAffordances {
    pub can_delete: bool,
    pub show_rating: bool,
    pub show_comment: bool,
}

impl DetailAffordances {
    pub fn for_session(logged_in: bool) -> Self {
        Self {
            can_delete: logged_in,
            show_rating: logged_in,
            show_comment: logged_in,
        }
    }
}
