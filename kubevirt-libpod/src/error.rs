use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// No pod matched the query
    #[error("{0}")]
    NotFound(String),

    /// The list call itself failed
    #[error(transparent)]
    Kube(#[from] kube::Error),
}

impl Error {
    pub(crate) fn not_found(message: impl ToString) -> Self {
        Self::NotFound(message.to_string())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
