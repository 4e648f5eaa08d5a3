use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Panic hook error: {0}")]
    PanicHook(String),
}

pub type Result<T> = std::result::Result<T, Error>;
