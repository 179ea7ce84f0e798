use thiserror::Error;

/// Failures that stop the server from starting or serving.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("leptos configuration error: {0}")]
    Leptos(String),

    #[error("telemetry setup failed: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
