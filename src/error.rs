use thiserror::Error;


#[derive(Error, Debug)]
pub enum Error {
    /// The backend refused the cost parameters
    #[error("invalid hash parameters: {0}")]
    InvalidParams(String),

    #[error("hashing failed: {0}")]
    Hash(#[from] argon2::password_hash::Error),

    /// Writing the report failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
