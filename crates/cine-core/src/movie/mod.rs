//! Movie catalog domain module.
//!
//! # Module Structure
//!
//! - `model`: Movies as the API returns them and the create payload
//! - `rating`: Per-movie rating aggregate
//! - `comment`: Comments attached to a movie

mod comment;
mod model;
mod rating;

pub use comment::Comment;
pub use model::{Movie, MovieId, NewMovie};
pub use rating::{AverageBody, RatingAggregate};
