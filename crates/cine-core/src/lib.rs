//! Domain layer of the Cine movie catalog client.
//!
//! Holds the models, validation rules and the ports (`CatalogApi`,
//! `KeyValueStore`, `Renderer`) the application layer is written against.

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod movie;
pub mod session;
pub mod text;
pub mod ui;
pub mod view;

// Re-export common error type
pub use error::{CineError, Result};
