//! Terminal implementation of the rendering port.
//!
//! Keeps a model of what is on screen and prints each change as it happens.
//! `show` reprints the whole model.

use cine_core::form::MAX_STARS;
use cine_core::movie::MovieId;
use cine_core::text;
use cine_core::ui::{FormId, Renderer};
use cine_core::view::{
    Alert, AlertId, AlertKind, CatalogState, CommentsView, DetailAffordances, MovieCard,
    MovieDetail, SessionIndicators, ViewName,
};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::sync::{Mutex, MutexGuard};

/// What the user currently sees.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Screen {
    pub view: Option<ViewName>,
    pub catalog: Option<CatalogState>,
    pub cards: Vec<MovieCard>,
    pub detail: Option<MovieDetail>,
    pub affordances: Option<DetailAffordances>,
    pub comments: Option<CommentsView>,
    pub stars: u8,
    pub session: Option<SessionIndicators>,
    pub alert: Option<Alert>,
    /// A new detail arrived and has not been printed yet.
    pub detail_pending: bool,
}

type ConfirmFn = Box<dyn Fn(&str) -> bool + Send + Sync>;

pub struct TerminalRenderer {
    screen: Mutex<Screen>,
    out: Mutex<Box<dyn Write + Send>>,
    confirm: ConfirmFn,
}

impl TerminalRenderer {
    /// Prints to stdout and asks confirmations on stdin.
    pub fn stdout() -> Self {
        Self::with_output(Box::new(io::stdout()), ask_on_stdin)
    }

    pub fn with_output(
        out: Box<dyn Write + Send>,
        confirm: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            screen: Mutex::new(Screen::default()),
            out: Mutex::new(out),
            confirm: Box::new(confirm),
        }
    }

    pub fn screen(&self) -> Screen {
        self.lock_screen().clone()
    }

    /// Movie id of the `index`-th listed card (1-based).
    pub fn card_id(&self, index: usize) -> Option<MovieId> {
        let screen = self.lock_screen();
        index
            .checked_sub(1)
            .and_then(|i| screen.cards.get(i))
            .map(|card| card.movie_id)
    }

    /// Prints a plain informational line.
    pub fn note(&self, message: &str) {
        self.print(&[message.bright_black().to_string()]);
    }

    pub fn print_lines(&self, lines: &[String]) {
        self.print(lines);
    }

    /// Reprints the current view from the screen model.
    pub fn print_screen(&self) {
        let screen = self.screen();
        let mut lines = Vec::new();
        if let Some(session) = &screen.session {
            lines.push(format_session(session));
        }
        match screen.view {
            Some(ViewName::Detail) => lines.extend(detail_lines(&screen)),
            Some(ViewName::Home) => {
                lines.push(view_title(ViewName::Home));
                match screen.catalog.and_then(|state| state.placeholder()) {
                    Some(placeholder) => lines.push(placeholder.bright_black().to_string()),
                    None => lines.extend(
                        screen
                            .cards
                            .iter()
                            .enumerate()
                            .map(|(i, card)| format_card(i + 1, card)),
                    ),
                }
            }
            Some(view) => lines.push(view_title(view)),
            None => {}
        }
        if let Some(alert) = &screen.alert {
            lines.push(format_alert(alert));
        }
        self.print(&lines);
    }

    fn print(&self, lines: &[String]) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        for line in lines {
            let _ = writeln!(out, "{}", line);
        }
        let _ = out.flush();
    }

    fn lock_screen(&self) -> MutexGuard<'_, Screen> {
        self.screen.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Renderer for TerminalRenderer {
    fn show_view(&self, view: ViewName) {
        let lines = {
            let mut screen = self.lock_screen();
            screen.view = Some(view);
            if view == ViewName::Detail {
                screen.detail_pending = false;
                detail_lines(&screen)
            } else {
                vec![String::new(), view_title(view)]
            }
        };
        self.print(&lines);
    }

    fn render_catalog(&self, state: CatalogState) {
        {
            let mut screen = self.lock_screen();
            screen.catalog = Some(state);
            screen.cards.clear();
        }
        if let Some(placeholder) = state.placeholder() {
            let line = match state {
                CatalogState::Failed => placeholder.red().to_string(),
                _ => placeholder.bright_black().to_string(),
            };
            self.print(&[line]);
        }
    }

    fn append_card(&self, card: &MovieCard) {
        let index = {
            let mut screen = self.lock_screen();
            screen.cards.push(card.clone());
            screen.cards.len()
        };
        self.print(&[format_card(index, card)]);
    }

    fn render_detail(&self, detail: &MovieDetail) {
        let mut screen = self.lock_screen();
        screen.detail = Some(detail.clone());
        screen.detail_pending = true;
        screen.stars = 0;
    }

    fn set_detail_affordances(&self, affordances: DetailAffordances) {
        self.lock_screen().affordances = Some(affordances);
    }

    fn render_comments(&self, comments: &CommentsView) {
        let visible = {
            let mut screen = self.lock_screen();
            screen.comments = Some(comments.clone());
            // A pending detail prints its comments along with it.
            screen.view == Some(ViewName::Detail) && !screen.detail_pending
        };
        if visible {
            self.print(&comment_lines(comments));
        }
    }

    fn render_stars(&self, stars: u8) {
        self.lock_screen().stars = stars;
        self.print(&[format_stars(stars)]);
    }

    fn render_session(&self, indicators: &SessionIndicators) {
        let changed = {
            let mut screen = self.lock_screen();
            let changed = screen.session.as_ref() != Some(indicators);
            screen.session = Some(indicators.clone());
            changed
        };
        if changed {
            self.print(&[format_session(indicators)]);
        }
    }

    fn show_alert(&self, alert: &Alert) {
        self.lock_screen().alert = Some(alert.clone());
        self.print(&[format_alert(alert)]);
    }

    fn fade_alert(&self, id: AlertId) {
        tracing::trace!("[Terminal] Alert #{} fading", id);
    }

    fn remove_alert(&self, id: AlertId) {
        let mut screen = self.lock_screen();
        if screen.alert.as_ref().is_some_and(|alert| alert.id == id) {
            screen.alert = None;
        }
    }

    fn clear_form(&self, form: FormId) {
        // Forms are prompted field by field; nothing stays on screen.
        tracing::trace!("[Terminal] Form {:?} cleared", form);
    }

    fn confirm(&self, message: &str) -> bool {
        (self.confirm)(message)
    }
}

fn ask_on_stdin(message: &str) -> bool {
    print!("{} {} ", message.bright_yellow(), "[s/N]".bright_black());
    let _ = io::stdout().flush();
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "sim" | "y" | "yes"
    )
}

fn view_title(view: ViewName) -> String {
    let title = match view {
        ViewName::Home => "Catálogo de Filmes",
        ViewName::Login => "Login",
        ViewName::Register => "Cadastro",
        ViewName::AddMovie => "Adicionar Filme",
        ViewName::Detail => "Detalhes",
    };
    format!("=== {} ===", title).bright_magenta().bold().to_string()
}

pub fn format_card(index: usize, card: &MovieCard) -> String {
    let year = card.year.map(|y| format!(" ({})", y)).unwrap_or_default();
    format!(
        "{:>3}. {}{} {} {} {}",
        index,
        card.title.bold(),
        year,
        card.genre.bright_black(),
        "★".yellow(),
        card.rating_label
    )
}

pub fn format_stars(stars: u8) -> String {
    let filled = stars.min(MAX_STARS) as usize;
    let empty = MAX_STARS as usize - filled;
    format!("{}{}", "★".repeat(filled).yellow(), "☆".repeat(empty))
}

pub fn format_session(indicators: &SessionIndicators) -> String {
    let actions: Vec<&str> = [
        (indicators.show_login, "login"),
        (indicators.show_register, "register"),
        (indicators.show_add_movie, "add"),
        (indicators.show_logout, "logout"),
    ]
    .into_iter()
    .filter_map(|(shown, name)| shown.then_some(name))
    .collect();

    match &indicators.greeting {
        Some(greeting) => format!("{} | {}", greeting.bright_green(), actions.join(", ")),
        None => format!("{}", actions.join(", ").bright_black()),
    }
}

pub fn format_alert(alert: &Alert) -> String {
    match alert.kind {
        AlertKind::Success => format!("✔ {}", alert.message).bright_green().to_string(),
        AlertKind::Error => format!("✖ {}", alert.message).bright_red().to_string(),
    }
}

fn detail_lines(screen: &Screen) -> Vec<String> {
    let Some(detail) = &screen.detail else {
        return vec![view_title(ViewName::Detail)];
    };
    let mut lines = vec![
        String::new(),
        format!("=== {} ===", detail.title).bright_magenta().bold().to_string(),
        format!("Diretor: {}", detail.director),
        format!(
            "Ano: {}",
            detail.year.map(|y| y.to_string()).unwrap_or_default()
        ),
        format!("Gênero: {}", detail.genre),
        format!("Avaliação: {} {}", "★".yellow(), detail.rating_label),
    ];
    if !detail.poster_url.is_empty() {
        lines.push(format!("Pôster: {}", detail.poster_url.bright_blue()));
    }
    lines.push(String::new());
    lines.push(detail.synopsis.clone());

    if let Some(affordances) = screen.affordances {
        let mut actions = Vec::new();
        if affordances.show_rating {
            actions.push("rate <1-5>");
        }
        if affordances.show_comment {
            actions.push("comment");
        }
        if affordances.can_delete {
            actions.push("delete");
        }
        if !actions.is_empty() {
            lines.push(String::new());
            lines.push(format!("Ações: {}", actions.join(", ")).bright_black().to_string());
        }
    }

    if let Some(comments) = &screen.comments {
        lines.push(String::new());
        lines.extend(comment_lines(comments));
    }
    lines
}

fn comment_lines(comments: &CommentsView) -> Vec<String> {
    let mut lines = vec!["Comentários".bold().to_string()];
    match comments {
        CommentsView::Items(items) => {
            for item in items {
                lines.push(format!(
                    "  {} {} {}",
                    item.author.bright_cyan(),
                    item.date.bright_black(),
                    item.text
                ));
            }
        }
        CommentsView::Empty => lines.push(format!("  {}", text::NO_COMMENTS.bright_black())),
    }
    lines
}
