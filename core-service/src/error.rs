use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Runtime initialization failed: {0}")]
    Runtime(#[from] core_runtime::Error),

    #[error("Bridge call failed: {0}")]
    Guard(#[from] core_guard::GuardError),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
