//! Catalog API port.
//!
//! The REST server is an external collaborator; the client only depends on
//! this trait. `cine-infrastructure` provides the HTTP implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::movie::{Comment, Movie, MovieId, NewMovie, RatingAggregate};
use crate::session::UserSession;

/// `POST /usuarios/cadastro` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

/// `POST /usuarios/login` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

/// `POST /avaliacoes` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingSubmission {
    #[serde(rename = "usuarioId")]
    pub user_id: i64,
    #[serde(rename = "filmeId")]
    pub movie_id: MovieId,
    #[serde(rename = "nota")]
    pub stars: u8,
}

/// `POST /comentarios` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentSubmission {
    #[serde(rename = "usuarioId")]
    pub user_id: i64,
    #[serde(rename = "filmeId")]
    pub movie_id: MovieId,
    #[serde(rename = "texto")]
    pub text: String,
}

/// Remote operations on users, movies, ratings and comments.
///
/// Every method is one network round trip. Errors follow the client taxonomy:
/// `Transport` when no response arrived, `Server` for non-2xx or
/// `success: false`.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Creates an account. Returns the server's confirmation message, if any.
    async fn register(&self, registration: &Registration) -> Result<Option<String>>;

    /// Authenticates and returns the user record to keep as the session.
    async fn login(&self, credentials: &Credentials) -> Result<UserSession>;

    /// Lists movies, optionally filtered server-side by title.
    async fn list_movies(&self, title: Option<&str>) -> Result<Vec<Movie>>;

    async fn get_movie(&self, id: MovieId) -> Result<Movie>;

    /// Creates a movie. Any 2xx is a success; the created record is returned
    /// when the server echoes one back.
    async fn create_movie(&self, movie: &NewMovie) -> Result<Option<Movie>>;

    /// Deletes a movie (ratings and comments cascade server-side).
    /// Returns the server's message, if any.
    async fn delete_movie(&self, id: MovieId) -> Result<Option<String>>;

    async fn rating_average(&self, id: MovieId) -> Result<RatingAggregate>;

    async fn submit_rating(&self, rating: &RatingSubmission) -> Result<()>;

    async fn list_comments(&self, id: MovieId) -> Result<Vec<Comment>>;

    async fn submit_comment(&self, comment: &CommentSubmission) -> Result<()>;
}
