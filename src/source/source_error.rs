#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("HTTP Error Status Code = {0}")]
    HttpStatus(u16),

    #[error("Loading was interrupted")]
    Interrupted,

    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    JoinError(#[from] tokio::task::JoinError),
}
