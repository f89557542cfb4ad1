use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::charts::models::{TopTrack, TopTracksResponse};
use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct ChartsClient {
    http_client: Client,
    endpoint: Url,
    api_key: String,
}

impl ChartsClient {
    pub fn new(endpoint: Url, api_key: String) -> Self {
        Self {
            http_client: Client::new(),
            endpoint,
            api_key,
        }
    }

    /// Fetch the highest-ranked track for a country.
    pub async fn top_track(&self, country: &str) -> Result<TopTrack> {
        debug!("Fetching top track for {}", country);

        let payload: TopTracksResponse = self
            .http_client
            .get(self.endpoint.clone())
            .query(&[
                ("method", "geo.gettoptracks"),
                ("country", country),
                ("api_key", self.api_key.as_str()),
                ("format", "json"),
            ])
            .send()
            .await?
            .json()
            .await?;

        first_track(payload, country)
    }
}

fn first_track(payload: TopTracksResponse, country: &str) -> Result<TopTrack> {
    let track = payload
        .tracks
        .track
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NoTracks(country.to_string()))?;

    Ok(TopTrack {
        name: track.name,
        artist: track.artist.name,
    })
}
