use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("SDK initialization failed: {0}")]
    InitializationFailed(String),

    #[error("Runtime error: {0}")]
    Runtime(#[from] core_runtime::Error),
}

pub type Result<T> = std::result::Result<T, SdkError>;
