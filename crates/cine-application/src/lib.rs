//! Application layer of the Cine client.
//!
//! [`CineApp`] drives the views: it loads the catalog, opens movie details,
//! runs the user's mutations and owns the session and the delayed actions.
//! Rendering and I/O go through the ports defined in `cine-core`.
//!
//! # Module Structure
//!
//! - `app`: Composition root and read-only actions
//! - `mutations`: Register, login, logout, add, delete, rate, comment
//! - `catalog` / `detail`: Loaders for the two data views
//! - `session_store`: The logged-in user, in memory and in storage
//! - `alert` / `navigation` / `scheduler`: Alerts, view switching, delayed actions

pub mod alert;
pub mod app;
pub mod catalog;
pub mod detail;
pub mod mutations;
pub mod navigation;
pub mod scheduler;
pub mod session_store;

#[cfg(test)]
mod testing;

pub use app::CineApp;
pub use mutations::DeleteOutcome;
pub use navigation::OnEnter;
pub use scheduler::{Scheduler, TimerSlot};
