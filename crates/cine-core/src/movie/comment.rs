//! Comment domain model.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

/// A comment on a movie, in server order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "CommentBody")]
pub struct Comment {
    pub author_name: String,
    pub text: String,
    /// Raw creation timestamp as sent by the server.
    pub created_at: Option<String>,
}

impl Comment {
    pub fn new(
        author_name: impl Into<String>,
        text: impl Into<String>,
        created_at: Option<String>,
    ) -> Self {
        Self {
            author_name: author_name.into(),
            text: text.into(),
            created_at,
        }
    }

    /// Creation date as `dd/mm/yyyy`; falls back to the raw value.
    pub fn display_date(&self) -> String {
        let Some(raw) = self.created_at.as_deref() else {
            return String::new();
        };
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return timestamp.format("%d/%m/%Y").to_string();
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return date.format("%d/%m/%Y").to_string();
        }
        raw.to_string()
    }
}

#[derive(Deserialize)]
struct CommentBody {
    #[serde(default)]
    usuario: Option<AuthorBody>,
    #[serde(default)]
    texto: String,
    #[serde(rename = "dataCriacao", default)]
    data_criacao: Option<String>,
}

#[derive(Deserialize)]
struct AuthorBody {
    #[serde(default)]
    nome: String,
}

impl From<CommentBody> for Comment {
    fn from(body: CommentBody) -> Self {
        Self {
            author_name: body.usuario.map(|u| u.nome).unwrap_or_default(),
            text: body.texto,
            created_at: body.data_criacao,
        }
    }
}
