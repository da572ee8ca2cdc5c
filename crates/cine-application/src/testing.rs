//! Test doubles for the API and renderer ports.

use async_trait::async_trait;
use cine_core::api::{CatalogApi, CommentSubmission, Credentials, RatingSubmission, Registration};
use cine_core::movie::{Comment, Movie, MovieId, NewMovie, RatingAggregate};
use cine_core::session::UserSession;
use cine_core::ui::{FormId, Renderer};
use cine_core::view::{
    Alert, AlertId, CatalogState, CommentsView, DetailAffordances, MovieCard, MovieDetail,
    SessionIndicators, ViewName,
};
use cine_core::{CineError, Result};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, Ordering};

pub fn movie(id: MovieId, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        synopsis: format!("Sinopse de {}", title),
        director: "Diretor".to_string(),
        year: Some(2000 + id as i32),
        genre: "Drama".to_string(),
        poster_url: String::new(),
    }
}

/// Every request the fake received, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Register(String),
    Login(String),
    ListMovies(Option<String>),
    GetMovie(MovieId),
    CreateMovie(String),
    DeleteMovie(MovieId),
    RatingAverage(MovieId),
    SubmitRating(RatingSubmission),
    ListComments(MovieId),
    SubmitComment(CommentSubmission),
}

struct FakeUser {
    session: UserSession,
    password: String,
}

#[derive(Default)]
struct FakeState {
    movies: Vec<Movie>,
    ratings: HashMap<MovieId, Vec<u8>>,
    comments: HashMap<MovieId, Vec<Comment>>,
    users: Vec<FakeUser>,
    failing_ratings: HashSet<MovieId>,
    failing_comments: bool,
    next_id: i64,
    calls: Vec<ApiCall>,
    cards_at_rating: Vec<(MovieId, usize)>,
}

/// In-memory catalog server.
///
/// Deleting a movie drops its ratings and comments, like the real server.
#[derive(Default)]
pub struct FakeCatalogApi {
    state: Mutex<FakeState>,
    offline: AtomicBool,
    card_witness: Mutex<Option<Arc<RecordingRenderer>>>,
}

impl FakeCatalogApi {
    pub fn new() -> Self {
        let api = Self::default();
        api.state.lock().unwrap().next_id = 100;
        api
    }

    pub fn with_movie(self, movie: Movie) -> Self {
        self.state.lock().unwrap().movies.push(movie);
        self
    }

    pub fn with_ratings(self, movie_id: MovieId, stars: &[u8]) -> Self {
        self.state
            .lock()
            .unwrap()
            .ratings
            .insert(movie_id, stars.to_vec());
        self
    }

    pub fn with_comment(self, movie_id: MovieId, comment: Comment) -> Self {
        self.state
            .lock()
            .unwrap()
            .comments
            .entry(movie_id)
            .or_default()
            .push(comment);
        self
    }

    pub fn with_user(self, id: i64, name: &str, email: &str, password: &str) -> Self {
        self.state.lock().unwrap().users.push(FakeUser {
            session: UserSession::new(id, name, email),
            password: password.to_string(),
        });
        self
    }

    pub fn fail_rating_for(self, movie_id: MovieId) -> Self {
        self.state.lock().unwrap().failing_ratings.insert(movie_id);
        self
    }

    pub fn fail_comments(self) -> Self {
        self.state.lock().unwrap().failing_comments = true;
        self
    }

    /// Makes every request fail as if the server were unreachable.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Notes how many cards `renderer` holds whenever a rating is requested.
    pub fn watch_cards(&self, renderer: Arc<RecordingRenderer>) {
        *self.card_witness.lock().unwrap() = Some(renderer);
    }

    /// `(movie, cards already rendered)` for each rating request.
    pub fn cards_at_rating(&self) -> Vec<(MovieId, usize)> {
        self.state.lock().unwrap().cards_at_rating.clone()
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    pub fn movie_ids(&self) -> Vec<MovieId> {
        self.state.lock().unwrap().movies.iter().map(|m| m.id).collect()
    }

    pub fn comments_for(&self, movie_id: MovieId) -> Vec<Comment> {
        self.state
            .lock()
            .unwrap()
            .comments
            .get(&movie_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Records `call` and returns the state, or fails when offline.
    fn begin(&self, call: ApiCall) -> Result<std::sync::MutexGuard<'_, FakeState>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if self.offline.load(Ordering::SeqCst) {
            return Err(CineError::transport("connection refused"));
        }
        Ok(state)
    }
}

#[async_trait]
impl CatalogApi for FakeCatalogApi {
    async fn register(&self, registration: &Registration) -> Result<Option<String>> {
        let mut state = self.begin(ApiCall::Register(registration.email.clone()))?;
        if state
            .users
            .iter()
            .any(|u| u.session.email == registration.email)
        {
            return Err(CineError::rejected(Some("Email já cadastrado".to_string())));
        }
        state.next_id += 1;
        let id = state.next_id;
        state.users.push(FakeUser {
            session: UserSession::new(id, &registration.name, &registration.email),
            password: registration.password.clone(),
        });
        Ok(Some("Usuário cadastrado".to_string()))
    }

    async fn login(&self, credentials: &Credentials) -> Result<UserSession> {
        let state = self.begin(ApiCall::Login(credentials.email.clone()))?;
        state
            .users
            .iter()
            .find(|u| u.session.email == credentials.email && u.password == credentials.password)
            .map(|u| u.session.clone())
            .ok_or_else(|| CineError::server(401, None))
    }

    async fn list_movies(&self, title: Option<&str>) -> Result<Vec<Movie>> {
        let state = self.begin(ApiCall::ListMovies(title.map(str::to_string)))?;
        let needle = title.map(str::to_lowercase);
        Ok(state
            .movies
            .iter()
            .filter(|m| {
                needle
                    .as_deref()
                    .is_none_or(|n| m.title.to_lowercase().contains(n))
            })
            .cloned()
            .collect())
    }

    async fn get_movie(&self, id: MovieId) -> Result<Movie> {
        let state = self.begin(ApiCall::GetMovie(id))?;
        state
            .movies
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| CineError::server(404, Some("Filme não encontrado".to_string())))
    }

    async fn create_movie(&self, movie: &NewMovie) -> Result<Option<Movie>> {
        let mut state = self.begin(ApiCall::CreateMovie(movie.title.clone()))?;
        state.next_id += 1;
        let created = movie.clone().into_movie(state.next_id);
        state.movies.push(created.clone());
        Ok(Some(created))
    }

    async fn delete_movie(&self, id: MovieId) -> Result<Option<String>> {
        let mut state = self.begin(ApiCall::DeleteMovie(id))?;
        let before = state.movies.len();
        state.movies.retain(|m| m.id != id);
        if state.movies.len() == before {
            return Err(CineError::server(404, Some("Filme não encontrado".to_string())));
        }
        state.ratings.remove(&id);
        state.comments.remove(&id);
        Ok(None)
    }

    async fn rating_average(&self, id: MovieId) -> Result<RatingAggregate> {
        let rendered = self
            .card_witness
            .lock()
            .unwrap()
            .as_ref()
            .map(|renderer| renderer.cards().len());
        let mut state = self.begin(ApiCall::RatingAverage(id))?;
        if let Some(rendered) = rendered {
            state.cards_at_rating.push((id, rendered));
        }
        if state.failing_ratings.contains(&id) {
            return Err(CineError::server(500, None));
        }
        let average = match state.ratings.get(&id) {
            Some(stars) if !stars.is_empty() => {
                stars.iter().map(|s| f64::from(*s)).sum::<f64>() / stars.len() as f64
            }
            _ => 0.0,
        };
        Ok(RatingAggregate::new(id, average))
    }

    async fn submit_rating(&self, rating: &RatingSubmission) -> Result<()> {
        let mut state = self.begin(ApiCall::SubmitRating(*rating))?;
        state
            .ratings
            .entry(rating.movie_id)
            .or_default()
            .push(rating.stars);
        Ok(())
    }

    async fn list_comments(&self, id: MovieId) -> Result<Vec<Comment>> {
        let state = self.begin(ApiCall::ListComments(id))?;
        if state.failing_comments {
            return Err(CineError::server(500, None));
        }
        Ok(state.comments.get(&id).cloned().unwrap_or_default())
    }

    async fn submit_comment(&self, comment: &CommentSubmission) -> Result<()> {
        let mut state = self.begin(ApiCall::SubmitComment(comment.clone()))?;
        let author = state
            .users
            .iter()
            .find(|u| u.session.id == comment.user_id)
            .map(|u| u.session.name.clone())
            .unwrap_or_else(|| "Anônimo".to_string());
        state
            .comments
            .entry(comment.movie_id)
            .or_default()
            .push(Comment::new(author, comment.text.clone(), None));
        Ok(())
    }
}

/// Every call the renderer received, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    ShowView(ViewName),
    Catalog(CatalogState),
    Card(MovieCard),
    Detail(MovieDetail),
    Affordances(DetailAffordances),
    Comments(CommentsView),
    Stars(u8),
    Session(SessionIndicators),
    ShowAlert(Alert),
    FadeAlert(AlertId),
    RemoveAlert(AlertId),
    ClearForm(FormId),
    Confirm(String),
}

pub struct RecordingRenderer {
    events: Mutex<Vec<RenderEvent>>,
    confirm_answer: AtomicBool,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            confirm_answer: AtomicBool::new(true),
        }
    }

    /// Sets the answer given to confirmation prompts.
    pub fn answer_confirm(&self, answer: bool) {
        self.confirm_answer.store(answer, Ordering::SeqCst);
    }

    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    fn record(&self, event: RenderEvent) {
        self.events.lock().unwrap().push(event);
    }

    pub fn shown_views(&self) -> Vec<ViewName> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                RenderEvent::ShowView(view) => Some(view),
                _ => None,
            })
            .collect()
    }

    pub fn active_view(&self) -> Option<ViewName> {
        self.shown_views().last().copied()
    }

    pub fn catalog_state(&self) -> Option<CatalogState> {
        self.events().into_iter().rev().find_map(|e| match e {
            RenderEvent::Catalog(state) => Some(state),
            _ => None,
        })
    }

    /// Cards appended since the catalog list was last reset.
    pub fn cards(&self) -> Vec<MovieCard> {
        let mut cards = Vec::new();
        for event in self.events() {
            match event {
                RenderEvent::Catalog(_) => cards.clear(),
                RenderEvent::Card(card) => cards.push(card),
                _ => {}
            }
        }
        cards
    }

    pub fn detail(&self) -> Option<MovieDetail> {
        self.events().into_iter().rev().find_map(|e| match e {
            RenderEvent::Detail(detail) => Some(detail),
            _ => None,
        })
    }

    pub fn affordances(&self) -> Option<DetailAffordances> {
        self.events().into_iter().rev().find_map(|e| match e {
            RenderEvent::Affordances(affordances) => Some(affordances),
            _ => None,
        })
    }

    pub fn comments(&self) -> Option<CommentsView> {
        self.events().into_iter().rev().find_map(|e| match e {
            RenderEvent::Comments(comments) => Some(comments),
            _ => None,
        })
    }

    pub fn stars(&self) -> Option<u8> {
        self.events().into_iter().rev().find_map(|e| match e {
            RenderEvent::Stars(stars) => Some(stars),
            _ => None,
        })
    }

    pub fn session_indicators(&self) -> Option<SessionIndicators> {
        self.events().into_iter().rev().find_map(|e| match e {
            RenderEvent::Session(indicators) => Some(indicators),
            _ => None,
        })
    }

    /// Alerts shown and not yet removed.
    pub fn visible_alerts(&self) -> Vec<Alert> {
        let mut visible: Vec<Alert> = Vec::new();
        for event in self.events() {
            match event {
                RenderEvent::ShowAlert(alert) => visible.push(alert),
                RenderEvent::RemoveAlert(id) => visible.retain(|a| a.id != id),
                _ => {}
            }
        }
        visible
    }

    /// Every alert message shown, in order.
    pub fn alert_messages(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                RenderEvent::ShowAlert(alert) => Some(alert.message),
                _ => None,
            })
            .collect()
    }

    pub fn last_alert(&self) -> Option<Alert> {
        self.events().into_iter().rev().find_map(|e| match e {
            RenderEvent::ShowAlert(alert) => Some(alert),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn show_view(&self, view: ViewName) {
        self.record(RenderEvent::ShowView(view));
    }

    fn render_catalog(&self, state: CatalogState) {
        self.record(RenderEvent::Catalog(state));
    }

    fn append_card(&self, card: &MovieCard) {
        self.record(RenderEvent::Card(card.clone()));
    }

    fn render_detail(&self, detail: &MovieDetail) {
        self.record(RenderEvent::Detail(detail.clone()));
    }

    fn set_detail_affordances(&self, affordances: DetailAffordances) {
        self.record(RenderEvent::Affordances(affordances));
    }

    fn render_comments(&self, comments: &CommentsView) {
        self.record(RenderEvent::Comments(comments.clone()));
    }

    fn render_stars(&self, stars: u8) {
        self.record(RenderEvent::Stars(stars));
    }

    fn render_session(&self, indicators: &SessionIndicators) {
        self.record(RenderEvent::Session(indicators.clone()));
    }

    fn show_alert(&self, alert: &Alert) {
        self.record(RenderEvent::ShowAlert(alert.clone()));
    }

    fn fade_alert(&self, id: AlertId) {
        self.record(RenderEvent::FadeAlert(id));
    }

    fn remove_alert(&self, id: AlertId) {
        self.record(RenderEvent::RemoveAlert(id));
    }

    fn clear_form(&self, form: FormId) {
        self.record(RenderEvent::ClearForm(form));
    }

    fn confirm(&self, message: &str) -> bool {
        self.record(RenderEvent::Confirm(message.to_string()));
        self.confirm_answer.load(Ordering::SeqCst)
    }
}
