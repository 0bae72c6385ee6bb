use thiserror::Error;

#[derive(Error, Debug)]
pub enum AcaraError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resolver error: {0}")]
    Resolve(String),
}
