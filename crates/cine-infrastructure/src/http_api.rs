//! HttpCatalogApi - REST implementation of the catalog API port.
//!
//! Talks JSON to the catalog server over `reqwest`. Every request carries the
//! configured timeout. Responses are mapped onto the client error taxonomy:
//! no response → `Transport`, non-2xx or `success: false` → `Server` (with the
//! body's `message` when there is one), undecodable body → `Serialization`.

use async_trait::async_trait;
use cine_core::api::{CatalogApi, CommentSubmission, Credentials, RatingSubmission, Registration};
use cine_core::config::ApiSettings;
use cine_core::movie::{AverageBody, Comment, Movie, MovieId, NewMovie, RatingAggregate};
use cine_core::session::UserSession;
use cine_core::{CineError, Result};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Catalog API client over HTTP.
#[derive(Clone)]
pub struct HttpCatalogApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

/// `{ success, message }` envelope of the user endpoints.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    data: Option<T>,
}

/// Body of error and delete responses.
#[derive(Debug, Default, Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: Option<String>,
}

impl HttpCatalogApi {
    /// Creates a client for the API at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn from_settings(settings: &ApiSettings) -> Self {
        Self::new(settings.base_url.clone(), settings.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder, what: &str) -> Result<Response> {
        request
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| transport_error(what, e))
    }

    /// Passes 2xx responses through; turns anything else into `Server`.
    async fn ensure_success(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        Err(CineError::server(status.as_u16(), server_message(&text)))
    }

    async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
        let text = response
            .text()
            .await
            .map_err(|e| transport_error(what, e))?;
        serde_json::from_str(&text).map_err(|e| CineError::Serialization {
            format: "JSON".to_string(),
            message: format!("{}: {}", what, e),
        })
    }

    /// Reads a `{ success, message, data }` envelope. The envelope decides the
    /// outcome, whatever the status code.
    async fn read_envelope<T: DeserializeOwned>(
        response: Response,
        what: &str,
    ) -> Result<Envelope<T>> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| transport_error(what, e))?;
        interpret_envelope(status, &text)
    }
}

/// Maps a `reqwest` failure onto the client taxonomy.
fn transport_error(what: &str, err: reqwest::Error) -> CineError {
    if err.is_decode() {
        CineError::Serialization {
            format: "JSON".to_string(),
            message: format!("{}: {}", what, err),
        }
    } else {
        CineError::transport(format!("{}: {}", what, err))
    }
}

/// Extracts `message` from an error body, if it is JSON and has one.
fn server_message(text: &str) -> Option<String> {
    serde_json::from_str::<MessageBody>(text)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty())
}

fn interpret_envelope<T: DeserializeOwned>(status: StatusCode, text: &str) -> Result<Envelope<T>> {
    let envelope: Envelope<T> = match serde_json::from_str(text) {
        Ok(envelope) => envelope,
        Err(_) if !status.is_success() => {
            return Err(CineError::server(status.as_u16(), server_message(text)));
        }
        Err(e) => return Err(e.into()),
    };
    if !envelope.success {
        return Err(if status.is_success() {
            CineError::rejected(envelope.message)
        } else {
            CineError::server(status.as_u16(), envelope.message)
        });
    }
    Ok(envelope)
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn register(&self, registration: &Registration) -> Result<Option<String>> {
        tracing::debug!("[Api] POST /usuarios/cadastro email={}", registration.email);
        let request = self
            .client
            .post(self.endpoint("/usuarios/cadastro"))
            .json(registration);
        let response = self.send(request, "register").await?;
        let envelope: Envelope<serde_json::Value> = Self::read_envelope(response, "register").await?;
        Ok(envelope.message)
    }

    async fn login(&self, credentials: &Credentials) -> Result<UserSession> {
        tracing::debug!("[Api] POST /usuarios/login email={}", credentials.email);
        let request = self
            .client
            .post(self.endpoint("/usuarios/login"))
            .json(credentials);
        let response = self.send(request, "login").await?;
        let envelope: Envelope<UserSession> = Self::read_envelope(response, "login").await?;
        envelope.data.ok_or_else(|| CineError::Serialization {
            format: "JSON".to_string(),
            message: "login: response has no user data".to_string(),
        })
    }

    async fn list_movies(&self, title: Option<&str>) -> Result<Vec<Movie>> {
        let mut request = self.client.get(self.endpoint("/filmes"));
        if let Some(title) = title.filter(|t| !t.trim().is_empty()) {
            tracing::debug!("[Api] GET /filmes?titulo={}", title);
            request = request.query(&[("titulo", title)]);
        } else {
            tracing::debug!("[Api] GET /filmes");
        }
        let response = Self::ensure_success(self.send(request, "list movies").await?).await?;
        Self::read_json(response, "list movies").await
    }

    async fn get_movie(&self, id: MovieId) -> Result<Movie> {
        tracing::debug!("[Api] GET /filmes/{}", id);
        let request = self.client.get(self.endpoint(&format!("/filmes/{}", id)));
        let response = Self::ensure_success(self.send(request, "get movie").await?).await?;
        Self::read_json(response, "get movie").await
    }

    async fn create_movie(&self, movie: &NewMovie) -> Result<Option<Movie>> {
        tracing::debug!("[Api] POST /filmes titulo={}", movie.title);
        let request = self.client.post(self.endpoint("/filmes")).json(movie);
        let response = Self::ensure_success(self.send(request, "create movie").await?).await?;
        let text = response.text().await.unwrap_or_default();
        match serde_json::from_str::<Movie>(&text) {
            Ok(created) => Ok(Some(created)),
            Err(e) => {
                tracing::debug!("[Api] Created movie body not readable: {}", e);
                Ok(None)
            }
        }
    }

    async fn delete_movie(&self, id: MovieId) -> Result<Option<String>> {
        tracing::debug!("[Api] DELETE /filmes/{}", id);
        let request = self.client.delete(self.endpoint(&format!("/filmes/{}", id)));
        let response = Self::ensure_success(self.send(request, "delete movie").await?).await?;
        // Body is optional; an empty or non-JSON body is still a success.
        let text = response.text().await.unwrap_or_default();
        Ok(server_message(&text))
    }

    async fn rating_average(&self, id: MovieId) -> Result<RatingAggregate> {
        tracing::debug!("[Api] GET /avaliacoes/filme/{}/media", id);
        let request = self
            .client
            .get(self.endpoint(&format!("/avaliacoes/filme/{}/media", id)));
        let response = Self::ensure_success(self.send(request, "rating average").await?).await?;
        let body: AverageBody = Self::read_json(response, "rating average").await?;
        Ok(RatingAggregate::new(id, body.media))
    }

    async fn submit_rating(&self, rating: &RatingSubmission) -> Result<()> {
        tracing::debug!(
            "[Api] POST /avaliacoes filme={} nota={}",
            rating.movie_id,
            rating.stars
        );
        let request = self.client.post(self.endpoint("/avaliacoes")).json(rating);
        Self::ensure_success(self.send(request, "submit rating").await?).await?;
        Ok(())
    }

    async fn list_comments(&self, id: MovieId) -> Result<Vec<Comment>> {
        tracing::debug!("[Api] GET /comentarios/filme/{}", id);
        let request = self
            .client
            .get(self.endpoint(&format!("/comentarios/filme/{}", id)));
        let response = Self::ensure_success(self.send(request, "list comments").await?).await?;
        Self::read_json(response, "list comments").await
    }

    async fn submit_comment(&self, comment: &CommentSubmission) -> Result<()> {
        tracing::debug!("[Api] POST /comentarios filme={}", comment.movie_id);
        let request = self.client.post(self.endpoint("/comentarios")).json(comment);
        Self::ensure_success(self.send(request, "submit comment").await?).await?;
        Ok(())
    }
}
