//! User-facing strings.
//!
//! The catalog API and its users speak Brazilian Portuguese, so every text the
//! client shows lives here.

pub const CONNECTION_FAILED: &str =
    "Erro ao conectar com o servidor. Verifique se a API está rodando!";

// Forms
pub const FILL_ALL_FIELDS: &str = "Preencha todos os campos";
pub const PASSWORD_TOO_SHORT: &str = "A senha deve ter pelo menos 6 caracteres";
pub const INVALID_YEAR: &str = "Ano inválido";
pub const INVALID_COMMENT: &str = "Digite um comentário válido";
pub const INVALID_STARS: &str = "Avaliação deve ser entre 1 e 5";

// Session
pub const REGISTER_OK: &str = "Cadastro realizado com sucesso!";
pub const REGISTER_FAILED: &str = "Erro ao cadastrar";
pub const LOGIN_OK: &str = "Login realizado com sucesso!";
pub const LOGIN_FAILED: &str = "Email ou senha inválidos";
pub const LOGOUT_OK: &str = "Logout realizado com sucesso!";

// Identity gates
pub const LOGIN_REQUIRED_ADD: &str = "Você precisa estar logado para adicionar filmes";
pub const LOGIN_REQUIRED_DELETE: &str = "Você precisa estar logado para excluir filmes";
pub const LOGIN_REQUIRED_RATE: &str = "Você precisa estar logado para avaliar";
pub const LOGIN_REQUIRED_COMMENT: &str = "Você precisa estar logado para comentar";
pub const NO_MOVIE_SELECTED: &str = "Nenhum filme selecionado";

// Movies
pub const MOVIE_ADDED: &str = "Filme adicionado com sucesso!";
pub const MOVIE_ADD_FAILED: &str = "Erro ao adicionar filme";
pub const MOVIE_DELETED: &str = "Filme excluído com sucesso!";
pub const MOVIE_DELETE_FAILED: &str = "Erro ao excluir filme";
pub const CONFIRM_DELETE: &str = "Tem certeza que deseja excluir este filme?";
pub const DETAIL_FAILED: &str = "Erro ao carregar detalhes do filme";

// Catalog
pub const CATALOG_LOADING: &str = "Carregando filmes...";
pub const CATALOG_EMPTY: &str = "Nenhum filme cadastrado ainda. Seja o primeiro a adicionar!";
pub const SEARCH_EMPTY: &str = "Nenhum filme encontrado.";
pub const CATALOG_FAILED: &str = "Erro ao carregar filmes. Verifique se a API está rodando!";
pub const NO_RATINGS: &str = "Sem avaliações";

// Ratings and comments
pub const RATING_FAILED: &str = "Erro ao avaliar filme";
pub const COMMENT_ADDED: &str = "Comentário adicionado com sucesso!";
pub const COMMENT_FAILED: &str = "Erro ao adicionar comentário";
pub const NO_COMMENTS: &str = "Nenhum comentário ainda. Seja o primeiro!";

/// Greeting shown in the session indicator.
pub fn greeting(name: &str) -> String {
    format!("Olá, {}", name)
}

/// Confirmation shown after a rating is accepted.
pub fn rated(stars: u8) -> String {
    format!("Você avaliou com {} estrela(s)!", stars)
}
