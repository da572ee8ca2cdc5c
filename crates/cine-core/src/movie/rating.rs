//! Rating aggregate.

use serde::{Deserialize, Deserializer};

use super::MovieId;
use crate::text;

/// Server-computed mean of all ratings for one movie.
///
/// Only lives for one render pass. An average of zero means "no ratings".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingAggregate {
    pub movie_id: MovieId,
    pub average: f64,
}

impl RatingAggregate {
    pub fn new(movie_id: MovieId, average: f64) -> Self {
        Self { movie_id, average }
    }

    /// The aggregate used when the fetch failed.
    pub fn unrated(movie_id: MovieId) -> Self {
        Self::new(movie_id, 0.0)
    }

    pub fn has_ratings(&self) -> bool {
        self.average.is_finite() && self.average > 0.0
    }

    /// Display label: one decimal, or the no-ratings text. Never "0.0".
    pub fn label(&self) -> String {
        if self.has_ratings() {
            format!("{:.1}", self.average)
        } else {
            text::NO_RATINGS.to_string()
        }
    }
}

/// Body of `GET /avaliacoes/filme/{id}/media`.
#[derive(Debug, Clone, Deserialize)]
pub struct AverageBody {
    #[serde(default, deserialize_with = "lenient_average")]
    pub media: f64,
}

/// Accepts a number, a numeric string, or null. Anything else counts as zero.
fn lenient_average<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}
