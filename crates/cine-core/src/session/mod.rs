//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: The logged-in user record
//! - `repository`: Persistent key-value storage port the record lives in

mod model;
mod repository;

pub use model::{SESSION_KEY, UserSession};
pub use repository::KeyValueStore;
