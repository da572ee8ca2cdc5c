//! Form input and local validation.
//!
//! Validation never touches the network. A form that fails validation yields
//! `CineError::Validation` carrying the message to show.

use crate::api::{Credentials, Registration};
use crate::error::{CineError, Result};
use crate::movie::NewMovie;
use crate::text;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_STARS: u8 = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<Registration> {
        if self.name.is_empty() || self.email.is_empty() || self.password.is_empty() {
            return Err(CineError::validation(text::FILL_ALL_FIELDS));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CineError::validation(text::PASSWORD_TOO_SHORT));
        }
        Ok(Registration {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(CineError::validation(text::FILL_ALL_FIELDS));
        }
        Ok(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Add-movie form. Every field but the poster is required; the year must be an integer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieForm {
    pub title: String,
    pub synopsis: String,
    pub director: String,
    pub year: String,
    pub genre: String,
    pub poster_url: String,
}

impl MovieForm {
    pub fn validate(&self) -> Result<NewMovie> {
        let required = [
            &self.title,
            &self.synopsis,
            &self.director,
            &self.year,
            &self.genre,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(CineError::validation(text::FILL_ALL_FIELDS));
        }
        let year = self
            .year
            .trim()
            .parse::<i32>()
            .map_err(|_| CineError::validation(text::INVALID_YEAR))?;

        Ok(NewMovie {
            title: self.title.trim().to_string(),
            synopsis: self.synopsis.trim().to_string(),
            director: self.director.trim().to_string(),
            year,
            genre: self.genre.trim().to_string(),
            poster_url: self.poster_url.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentForm {
    pub text: String,
}

impl CommentForm {
    /// Rejects blank text. The accepted text is returned as entered.
    pub fn validate(&self) -> Result<String> {
        if self.text.trim().is_empty() {
            return Err(CineError::validation(text::INVALID_COMMENT));
        }
        Ok(self.text.clone())
    }
}

/// Checks a star value picked in the rating widget.
pub fn validate_stars(stars: u8) -> Result<u8> {
    if (1..=MAX_STARS).contains(&stars) {
        Ok(stars)
    } else {
        Err(CineError::validation(text::INVALID_STARS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(name: &str, email: &str, password: &str) -> RegisterForm {
        RegisterForm {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_register_requires_all_fields() {
        let err = register("", "a@b.c", "secret1").validate().unwrap_err();
        assert_eq!(err, CineError::validation(text::FILL_ALL_FIELDS));
    }

    #[test]
    fn test_register_password_length() {
        let err = register("Ana", "a@b.c", "12345").validate().unwrap_err();
        assert_eq!(err, CineError::validation(text::PASSWORD_TOO_SHORT));

        let ok = register("Ana", "a@b.c", "123456").validate().unwrap();
        assert_eq!(ok.password, "123456");
    }

    #[test]
    fn test_password_length_counts_characters() {
        // Six characters, more than six bytes.
        assert!(register("Ana", "a@b.c", "ãéíõúç").validate().is_ok());
    }

    #[test]
    fn test_login_requires_both_fields() {
        let form = LoginForm {
            email: "a@b.c".to_string(),
            password: String::new(),
        };
        assert!(form.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_movie_form_parses_year() {
        let mut form = MovieForm {
            title: " Aquarius ".to_string(),
            synopsis: "Clara...".to_string(),
            director: "Kleber Mendonça Filho".to_string(),
            year: "2016".to_string(),
            genre: "Drama".to_string(),
            poster_url: String::new(),
        };
        let movie = form.validate().unwrap();
        assert_eq!(movie.title, "Aquarius");
        assert_eq!(movie.year, 2016);

        form.year = "dois mil".to_string();
        assert_eq!(
            form.validate().unwrap_err(),
            CineError::validation(text::INVALID_YEAR)
        );

        form.year = " ".to_string();
        assert_eq!(
            form.validate().unwrap_err(),
            CineError::validation(text::FILL_ALL_FIELDS)
        );
    }

    #[test]
    fn test_comment_rejects_whitespace() {
        let blank = CommentForm {
            text: "   ".to_string(),
        };
        assert!(blank.validate().is_err());

        let ok = CommentForm {
            text: "Great movie".to_string(),
        };
        assert_eq!(ok.validate().unwrap(), "Great movie");
    }

    #[test]
    fn test_star_bounds() {
        assert!(validate_stars(0).is_err());
        assert!(validate_stars(6).is_err());
        assert_eq!(validate_stars(5).unwrap(), 5);
    }
}
