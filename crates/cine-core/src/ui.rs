//! Rendering port.
//!
//! Stands in for the page a browser front-end would draw into. Calls are
//! synchronous and must not block, except [`Renderer::confirm`], which is the
//! blocking yes/no prompt.

use crate::view::{
    Alert, AlertId, CatalogState, CommentsView, DetailAffordances, MovieCard, MovieDetail,
    SessionIndicators, ViewName,
};

/// Forms the user fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormId {
    Register,
    Login,
    AddMovie,
    Comment,
}

pub trait Renderer: Send + Sync {
    /// Deactivates every view and activates `view`.
    fn show_view(&self, view: ViewName);

    /// Replaces the catalog list with a placeholder state.
    fn render_catalog(&self, state: CatalogState);

    /// Appends one card to the catalog list.
    fn append_card(&self, card: &MovieCard);

    fn render_detail(&self, detail: &MovieDetail);

    fn set_detail_affordances(&self, affordances: DetailAffordances);

    fn render_comments(&self, comments: &CommentsView);

    /// Highlights the first `stars` rating stars.
    fn render_stars(&self, stars: u8);

    fn render_session(&self, indicators: &SessionIndicators);

    fn show_alert(&self, alert: &Alert);

    /// Starts the fade-out transition of an alert.
    fn fade_alert(&self, id: AlertId);

    /// Removes an alert. Removing an absent alert is a no-op.
    fn remove_alert(&self, id: AlertId);

    fn clear_form(&self, form: FormId);

    /// Blocking yes/no prompt.
    fn confirm(&self, message: &str) -> bool;
}
