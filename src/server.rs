use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::charts::ChartsClient;
use crate::config::Config;
use crate::countries::CountryClient;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopTrackReply {
    pub country: String,
    pub song: String,
    pub artist: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone)]
pub struct AppState {
    pub countries: CountryClient,
    pub charts: ChartsClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            countries: CountryClient::new(config.countries_endpoint.clone()),
            charts: ChartsClient::new(
                config.charts_endpoint.clone(),
                config.lastfm_api_key.clone(),
            ),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/random-country-music", get(random_country_music))
        .with_state(state)
}

async fn random_country_music(State(state): State<AppState>) -> Response {
    let country = match state.countries.random_country().await {
        Ok(country) => country,
        Err(e) => {
            warn!("Country lookup failed: {}", e);
            return fetch_failure("Failed to fetch country");
        }
    };

    let track = match state.charts.top_track(&country).await {
        Ok(track) => track,
        Err(e) => {
            warn!("Top track lookup failed: {}", e);
            return fetch_failure("Failed to fetch song");
        }
    };

    Json(TopTrackReply {
        country,
        song: track.name,
        artist: track.artist,
    })
    .into_response()
}

fn fetch_failure(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}
