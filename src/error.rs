use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Country service returned an empty listing")]
    EmptyCountryList,

    #[error("no songs found for {0}")]
    NoTracks(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
