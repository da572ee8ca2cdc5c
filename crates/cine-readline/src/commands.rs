//! REPL command table and parser.

use anyhow::{Result, anyhow, bail};
use cine_core::movie::MovieId;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Command keywords, in the order `help` lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    Home,
    Search,
    Open,
    Login,
    Register,
    Add,
    Delete,
    Rate,
    Comment,
    Logout,
    Dismiss,
    Show,
    Help,
    Quit,
}

impl Keyword {
    pub fn usage(&self) -> &'static str {
        match self {
            Keyword::Home => "home",
            Keyword::Search => "search <título>",
            Keyword::Open => "open <n> | open #<id>",
            Keyword::Login => "login",
            Keyword::Register => "register",
            Keyword::Add => "add",
            Keyword::Delete => "delete [<n> | #<id>]",
            Keyword::Rate => "rate <1-5>",
            Keyword::Comment => "comment",
            Keyword::Logout => "logout",
            Keyword::Dismiss => "dismiss",
            Keyword::Show => "show",
            Keyword::Help => "help",
            Keyword::Quit => "quit",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Keyword::Home => "Lista todos os filmes",
            Keyword::Search => "Busca filmes pelo título",
            Keyword::Open => "Abre os detalhes de um filme da lista (ou pelo id)",
            Keyword::Login => "Entra com email e senha",
            Keyword::Register => "Cria uma conta",
            Keyword::Add => "Adiciona um filme ao catálogo",
            Keyword::Delete => "Exclui o filme aberto (ou o indicado)",
            Keyword::Rate => "Avalia o filme aberto",
            Keyword::Comment => "Comenta o filme aberto",
            Keyword::Logout => "Sai da conta",
            Keyword::Dismiss => "Fecha o alerta visível",
            Keyword::Show => "Mostra a tela atual novamente",
            Keyword::Help => "Mostra esta ajuda",
            Keyword::Quit => "Sai do programa",
        }
    }

    /// Every keyword as typed, for completion.
    pub fn names() -> Vec<String> {
        Keyword::iter().map(|k| k.to_string()).collect()
    }
}

/// A movie picked from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// 1-based position in the listed cards.
    Card(usize),
    Id(MovieId),
}

impl FromStr for Target {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(id) = s.strip_prefix('#') {
            return id
                .parse()
                .map(Target::Id)
                .map_err(|_| anyhow!("Id inválido: {}", s));
        }
        match s.parse::<usize>() {
            Ok(n) if n > 0 => Ok(Target::Card(n)),
            _ => bail!("Número inválido: {}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Home,
    Search(String),
    Open(Target),
    Login,
    Register,
    Add,
    Delete(Option<Target>),
    Rate(u8),
    Comment,
    Logout,
    Dismiss,
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let keyword = match word {
            "exit" => Keyword::Quit,
            _ => Keyword::from_str(&word.to_lowercase())
                .map_err(|_| anyhow!("Comando desconhecido: {}. Digite 'help'.", word))?,
        };

        let command = match keyword {
            Keyword::Home => Command::Home,
            Keyword::Search => Command::Search(rest.to_string()),
            Keyword::Open => {
                if rest.is_empty() {
                    bail!("Uso: {}", keyword.usage());
                }
                Command::Open(rest.parse()?)
            }
            Keyword::Login => Command::Login,
            Keyword::Register => Command::Register,
            Keyword::Add => Command::Add,
            Keyword::Delete => {
                if rest.is_empty() {
                    Command::Delete(None)
                } else {
                    Command::Delete(Some(rest.parse()?))
                }
            }
            Keyword::Rate => {
                let stars = rest
                    .parse::<u8>()
                    .map_err(|_| anyhow!("Uso: {}", keyword.usage()))?;
                Command::Rate(stars)
            }
            Keyword::Comment => Command::Comment,
            Keyword::Logout => Command::Logout,
            Keyword::Dismiss => Command::Dismiss,
            Keyword::Show => Command::Show,
            Keyword::Help => Command::Help,
            Keyword::Quit => Command::Quit,
        };
        Ok(command)
    }
}

/// Help text, one line per command.
pub fn help_lines() -> Vec<String> {
    Keyword::iter()
        .map(|k| format!("{:<24} {}", k.usage(), k.description()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("home".parse::<Command>().unwrap(), Command::Home);
        assert_eq!("  LOGOUT ".parse::<Command>().unwrap(), Command::Logout);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_search_keeps_the_whole_title() {
        assert_eq!(
            "search Auto da Compadecida".parse::<Command>().unwrap(),
            Command::Search("Auto da Compadecida".to_string())
        );
        assert_eq!(
            "search".parse::<Command>().unwrap(),
            Command::Search(String::new())
        );
    }

    #[test]
    fn test_targets() {
        assert_eq!(
            "open 2".parse::<Command>().unwrap(),
            Command::Open(Target::Card(2))
        );
        assert_eq!(
            "open #15".parse::<Command>().unwrap(),
            Command::Open(Target::Id(15))
        );
        assert_eq!(
            "delete".parse::<Command>().unwrap(),
            Command::Delete(None)
        );
        assert!("open".parse::<Command>().is_err());
        assert!("open 0".parse::<Command>().is_err());
        assert!("open #abc".parse::<Command>().is_err());
    }

    #[test]
    fn test_rate_takes_a_number() {
        assert_eq!("rate 4".parse::<Command>().unwrap(), Command::Rate(4));
        // Range is checked by the app so the user sees the proper alert.
        assert_eq!("rate 9".parse::<Command>().unwrap(), Command::Rate(9));
        assert!("rate cinco".parse::<Command>().is_err());
    }

    #[test]
    fn test_unknown_command() {
        let err = "voar".parse::<Command>().unwrap_err();
        assert!(err.to_string().contains("voar"));
    }

    #[test]
    fn test_help_lists_every_keyword() {
        let lines = help_lines();
        assert_eq!(lines.len(), Keyword::iter().count());
        assert!(lines[0].starts_with("home"));
        assert!(Keyword::names().contains(&"search".to_string()));
    }
}
