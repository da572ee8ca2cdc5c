//! Movie domain model.

use serde::{Deserialize, Serialize};

/// Server-assigned movie identifier.
pub type MovieId = i64;

/// A movie as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "sinopse", default)]
    pub synopsis: String,
    #[serde(rename = "diretor", default)]
    pub director: String,
    #[serde(rename = "ano", default)]
    pub year: Option<i32>,
    #[serde(rename = "genero", default)]
    pub genre: String,
    #[serde(rename = "posterUrl", default)]
    pub poster_url: String,
}

/// Payload for creating a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "sinopse")]
    pub synopsis: String,
    #[serde(rename = "diretor")]
    pub director: String,
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "genero")]
    pub genre: String,
    #[serde(rename = "posterUrl")]
    pub poster_url: String,
}

impl NewMovie {
    /// Materializes the payload as a stored movie with the given id.
    pub fn into_movie(self, id: MovieId) -> Movie {
        Movie {
            id,
            title: self.title,
            synopsis: self.synopsis,
            director: self.director,
            year: Some(self.year),
            genre: self.genre,
            poster_url: self.poster_url,
        }
    }
}
