//! Field-by-field prompts for the client's forms.

use anyhow::Result;
use cine_core::form::{CommentForm, LoginForm, MovieForm, RegisterForm};
use rustyline::error::ReadlineError;
use rustyline::history::History;
use rustyline::{Editor, Helper};

/// Source of form field values.
pub trait FieldReader {
    /// Reads one field. `None` means the user abandoned the form.
    fn read_field(&mut self, label: &str) -> Result<Option<String>>;
}

impl<H: Helper, I: History> FieldReader for Editor<H, I> {
    fn read_field(&mut self, label: &str) -> Result<Option<String>> {
        match self.readline(&format!("  {}: ", label)) {
            Ok(value) => Ok(Some(value)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Reads `labels` in order, stopping at the first abandoned field.
fn read_fields<const N: usize>(
    reader: &mut dyn FieldReader,
    labels: [&str; N],
) -> Result<Option<[String; N]>> {
    let mut values: [String; N] = std::array::from_fn(|_| String::new());
    for (value, label) in values.iter_mut().zip(labels) {
        match reader.read_field(label)? {
            Some(read) => *value = read,
            None => return Ok(None),
        }
    }
    Ok(Some(values))
}

pub fn read_register(reader: &mut dyn FieldReader) -> Result<Option<RegisterForm>> {
    Ok(read_fields(reader, ["Nome", "Email", "Senha"])?.map(|[name, email, password]| {
        RegisterForm {
            name,
            email,
            password,
        }
    }))
}

pub fn read_login(reader: &mut dyn FieldReader) -> Result<Option<LoginForm>> {
    Ok(read_fields(reader, ["Email", "Senha"])?
        .map(|[email, password]| LoginForm { email, password }))
}

pub fn read_movie(reader: &mut dyn FieldReader) -> Result<Option<MovieForm>> {
    let labels = ["Título", "Sinopse", "Diretor", "Ano", "Gênero", "URL do pôster"];
    Ok(read_fields(reader, labels)?.map(
        |[title, synopsis, director, year, genre, poster_url]| MovieForm {
            title,
            synopsis,
            director,
            year,
            genre,
            poster_url,
        },
    ))
}

pub fn read_comment(reader: &mut dyn FieldReader) -> Result<Option<CommentForm>> {
    Ok(read_fields(reader, ["Comentário"])?.map(|[text]| CommentForm { text }))
}
