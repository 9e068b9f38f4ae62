use objdispatch_core::Error as DispatchError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("Not found: {path}")]
    NotFound { path: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
