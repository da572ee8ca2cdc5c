//! Application root wiring the components together.

use crate::alert::AlertPresenter;
use crate::catalog::{CatalogLoader, ReloadCatalog};
use crate::detail::DetailLoader;
use crate::navigation::Navigator;
use crate::scheduler::Scheduler;
use crate::session_store::SessionStore;
use cine_core::api::CatalogApi;
use cine_core::config::{ClientConfig, UiTimings};
use cine_core::movie::MovieId;
use cine_core::session::{KeyValueStore, UserSession};
use cine_core::ui::Renderer;
use cine_core::view::{AlertId, MovieDetail, ViewName};
use cine_core::{CineError, Result};
use std::sync::Arc;

/// The catalog client.
///
/// Owns the session, the active view and the pending timers. Every user
/// action goes through one of its methods; rendering goes to the injected
/// [`Renderer`].
pub struct CineApp {
    pub(crate) api: Arc<dyn CatalogApi>,
    pub(crate) renderer: Arc<dyn Renderer>,
    pub(crate) timings: UiTimings,
    pub(crate) scheduler: Arc<Scheduler>,
    pub(crate) session: Arc<SessionStore>,
    pub(crate) alerts: Arc<AlertPresenter>,
    pub(crate) navigator: Arc<Navigator>,
    pub(crate) catalog: Arc<CatalogLoader>,
    pub(crate) detail: Arc<DetailLoader>,
}

impl CineApp {
    pub fn new(
        api: Arc<dyn CatalogApi>,
        store: Arc<dyn KeyValueStore>,
        renderer: Arc<dyn Renderer>,
        config: &ClientConfig,
    ) -> Self {
        let scheduler = Arc::new(Scheduler::new());
        let session = Arc::new(SessionStore::new(store, renderer.clone()));
        let alerts = Arc::new(AlertPresenter::new(
            renderer.clone(),
            scheduler.clone(),
            config.ui.clone(),
        ));
        let navigator = Arc::new(Navigator::new(renderer.clone(), scheduler.clone()));
        let catalog = Arc::new(CatalogLoader::new(
            api.clone(),
            renderer.clone(),
            config.catalog.parallel_ratings,
        ));
        let detail = Arc::new(DetailLoader::new(
            api.clone(),
            renderer.clone(),
            session.clone(),
            navigator.clone(),
            alerts.clone(),
        ));

        navigator.on_enter(ViewName::Home, Arc::new(ReloadCatalog(catalog.clone())));

        Self {
            api,
            renderer,
            timings: config.ui.clone(),
            scheduler,
            session,
            alerts,
            navigator,
            catalog,
            detail,
        }
    }

    /// Restores the stored session and shows the home view.
    pub async fn start(&self) -> Option<UserSession> {
        let session = self.session.restore();
        self.navigator.show(ViewName::Home).await;
        tracing::info!(
            "[CineApp] Started ({})",
            if session.is_some() { "logged in" } else { "logged out" }
        );
        session
    }

    /// Switches to `view` immediately.
    pub async fn navigate(&self, view: ViewName) {
        self.navigator.show(view).await;
    }

    /// Filters the catalog by title, bringing the home view forward first.
    ///
    /// The home view is switched to without its usual full reload, so only
    /// the filtered list is fetched.
    pub async fn search(&self, query: &str) -> Result<usize> {
        if self.navigator.current() != ViewName::Home {
            self.navigator.switch(ViewName::Home);
        }
        self.catalog.search(query).await
    }

    /// Lists the whole catalog without changing views.
    pub async fn reload_catalog(&self) -> Result<usize> {
        self.catalog.load_all().await
    }

    /// Opens the detail view of a movie.
    pub async fn open_movie(&self, movie_id: MovieId) -> Result<MovieDetail> {
        self.detail.load_detail(movie_id).await
    }

    /// Manually closes an alert. Closing one that is already gone is a no-op.
    pub fn dismiss_alert(&self, id: AlertId) -> bool {
        self.alerts.dismiss(id)
    }

    pub fn current_alert(&self) -> Option<AlertId> {
        self.alerts.current()
    }

    pub fn current_view(&self) -> ViewName {
        self.navigator.current()
    }

    pub fn current_movie(&self) -> Option<MovieId> {
        self.detail.current_movie()
    }

    pub fn current_user(&self) -> Option<UserSession> {
        self.session.current()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    pub fn has_pending_navigation(&self) -> bool {
        self.navigator.has_pending()
    }

    /// Logs `err` and shows it as an error alert.
    pub(crate) fn report(&self, operation: &str, err: CineError, fallback: &str) -> CineError {
        if err.is_local() {
            tracing::debug!("[CineApp] {} rejected: {}", operation, err);
        } else {
            tracing::error!("[CineApp] {} failed: {}", operation, err);
        }
        self.alerts.error(err.user_message(fallback));
        err
    }

    /// The current user, or an `Unauthenticated` error carrying `message`.
    pub(crate) fn require_session(&self, message: &str) -> Result<UserSession> {
        self.session
            .current()
            .ok_or_else(|| CineError::unauthenticated(message))
    }
}
