/// Console error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConsoleError>;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Client error: {0}")]
    Client(#[from] taller_client::ClientError),

    #[error(transparent)]
    Dashboard(#[from] taller_dashboard::DashboardError),

    #[error(transparent)]
    Photo(#[from] taller_core::PhotoError),
}

impl From<config::ConfigError> for ConsoleError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
