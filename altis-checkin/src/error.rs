use altis_seating::SeatingError;

#[derive(Debug, thiserror::Error)]
pub enum CheckinError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Flight {flight}: {source}")]
    Seating {
        flight: String,
        source: SeatingError,
    },

    #[error("Failed to print boarding cards: {0}")]
    Io(#[from] std::io::Error),
}

pub type CheckinResult<T> = Result<T, CheckinError>;
