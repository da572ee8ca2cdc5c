//! Binds REPL commands to client operations.

use crate::commands::{Command, Target, help_lines};
use crate::forms::{self, FieldReader};
use crate::renderer::TerminalRenderer;
use anyhow::Result;
use cine_application::CineApp;
use cine_core::movie::MovieId;
use cine_core::view::ViewName;
use colored::Colorize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Repl {
    app: Arc<CineApp>,
    renderer: Arc<TerminalRenderer>,
}

impl Repl {
    pub fn new(app: Arc<CineApp>, renderer: Arc<TerminalRenderer>) -> Self {
        Self { app, renderer }
    }

    /// Runs one command. Operation failures were already shown as alerts,
    /// so only REPL-level errors (e.g. a broken terminal) are returned.
    pub async fn execute(&self, command: Command, fields: &mut dyn FieldReader) -> Result<Flow> {
        tracing::debug!("[Repl] {:?}", command);
        match command {
            Command::Home => self.app.navigate(ViewName::Home).await,
            Command::Search(query) => {
                let _ = self.app.search(&query).await;
            }
            Command::Open(target) => {
                if let Some(movie_id) = self.resolve(target) {
                    let _ = self.app.open_movie(movie_id).await;
                }
            }
            Command::Login => {
                self.app.navigate(ViewName::Login).await;
                if let Some(form) = forms::read_login(fields)? {
                    let _ = self.app.login(&form).await;
                }
            }
            Command::Register => {
                self.app.navigate(ViewName::Register).await;
                if let Some(form) = forms::read_register(fields)? {
                    let _ = self.app.register(&form).await;
                }
            }
            Command::Add => {
                self.app.navigate(ViewName::AddMovie).await;
                if let Some(form) = forms::read_movie(fields)? {
                    let _ = self.app.add_movie(&form).await;
                }
            }
            Command::Delete(None) => {
                let _ = self.app.delete_current_movie().await;
            }
            Command::Delete(Some(target)) => {
                if let Some(movie_id) = self.resolve(target) {
                    let _ = self.app.delete_movie(movie_id).await;
                }
            }
            Command::Rate(stars) => {
                let _ = self.app.rate_movie(stars).await;
            }
            Command::Comment => {
                if let Some(form) = forms::read_comment(fields)? {
                    let _ = self.app.add_comment(&form).await;
                }
            }
            Command::Logout => {
                let _ = self.app.logout();
            }
            Command::Dismiss => match self.app.current_alert() {
                Some(id) => {
                    self.app.dismiss_alert(id);
                }
                None => self.renderer.note("Nenhum alerta visível."),
            },
            Command::Show => self.renderer.print_screen(),
            Command::Help => self.renderer.print_lines(&help_lines()),
            Command::Quit => {
                self.renderer
                    .print_lines(&["Até logo!".bright_green().to_string()]);
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    fn resolve(&self, target: Target) -> Option<MovieId> {
        match target {
            Target::Id(movie_id) => Some(movie_id),
            Target::Card(index) => {
                let movie_id = self.renderer.card_id(index);
                if movie_id.is_none() {
                    self.renderer
                        .note(&format!("Nenhum filme na posição {} da lista.", index));
                }
                movie_id
            }
        }
    }
}
