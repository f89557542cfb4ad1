use url::Url;

use crate::error::{AppError, Result};

const RESTCOUNTRIES_ENDPOINT: &str = "https://restcountries.com/v3.1/all";
const AUDIOSCROBBLER_ENDPOINT: &str = "http://ws.audioscrobbler.com/2.0/";

#[derive(Debug, Clone)]
pub struct Config {
    pub lastfm_api_key: String,
    pub countries_endpoint: Url,
    pub charts_endpoint: Url,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let lastfm_api_key = std::env::var("LASTFM_API_KEY")
            .map_err(|_| AppError::Config("LASTFM_API_KEY not set".into()))?;

        let countries_endpoint = endpoint_from_env("COUNTRIES_API_URL", RESTCOUNTRIES_ENDPOINT)?;
        let charts_endpoint = endpoint_from_env("LASTFM_API_URL", AUDIOSCROBBLER_ENDPOINT)?;

        Ok(Self {
            lastfm_api_key,
            countries_endpoint,
            charts_endpoint,
        })
    }
}

fn endpoint_from_env(var: &str, default: &str) -> Result<Url> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| AppError::Config(format!("{} is not a valid URL: {}", var, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoints_are_valid_urls() {
        assert!(Url::parse(RESTCOUNTRIES_ENDPOINT).is_ok());
        assert!(Url::parse(AUDIOSCROBBLER_ENDPOINT).is_ok());
    }
}
