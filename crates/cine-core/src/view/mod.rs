//! Views and the view models rendered into them.
//!
//! # Module Structure
//!
//! - `name`: The mutually exclusive full-screen views
//! - `model`: Per-render composites (cards, detail panel, comments, indicators)
//! - `alert`: Transient notifications

mod alert;
mod model;
mod name;

pub use alert::{Alert, AlertId, AlertKind};
pub use model::{
    CatalogState, CommentItem, CommentsView, DetailAffordances, MovieCard, MovieDetail,
    SessionIndicators,
};
pub use name::ViewName;
