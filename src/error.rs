pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors arising while loading a puzzle description.
///
/// Unsatisfiable puzzles are not errors: the solver reports those as a
/// `None` solution. Asking the puzzle about a slot id it never issued is a
/// contract violation by the caller and panics instead of surfacing here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid grid structure: {0}")]
    InvalidStructure(String),

    #[error("invalid word list: {0}")]
    InvalidWordList(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
