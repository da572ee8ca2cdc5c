use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// One full-screen UI section. Exactly one is visible at a time.
///
/// The string forms are the section identifiers of the catalog front-end.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum ViewName {
    #[strum(serialize = "home")]
    Home,
    #[strum(serialize = "login")]
    Login,
    #[strum(serialize = "cadastro")]
    Register,
    #[strum(serialize = "addFilme")]
    AddMovie,
    #[strum(serialize = "detalhes")]
    Detail,
}
