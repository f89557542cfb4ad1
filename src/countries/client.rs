use rand::seq::IndexedRandom;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::countries::models::Country;
use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct CountryClient {
    http_client: Client,
    endpoint: Url,
}

impl CountryClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http_client: Client::new(),
            endpoint,
        }
    }

    /// Fetch the full country listing and pick one entry uniformly at random.
    pub async fn random_country(&self) -> Result<String> {
        let countries: Vec<Country> = self
            .http_client
            .get(self.endpoint.clone())
            .send()
            .await?
            .json()
            .await?;

        debug!("Fetched {} countries", countries.len());

        pick_random(&countries)
    }
}

// Uses the thread-local generator, which is seeded once per thread.
fn pick_random(countries: &[Country]) -> Result<String> {
    countries
        .choose(&mut rand::rng())
        .map(|country| country.name.common.clone())
        .ok_or(AppError::EmptyCountryList)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picked_country_is_a_member_of_the_listing() {
        let countries = vec![
            Country::mock("Brazil"),
            Country::mock("Japan"),
            Country::mock("Norway"),
        ];
        let names: Vec<&str> = countries.iter().map(|c| c.name.common.as_str()).collect();

        for _ in 0..50 {
            let picked = pick_random(&countries).unwrap();
            assert!(names.contains(&picked.as_str()));
        }
    }

    #[test]
    fn single_entry_listing_always_picks_that_entry() {
        let countries = vec![Country::mock("Brazil")];
        assert_eq!(pick_random(&countries).unwrap(), "Brazil");
    }

    #[test]
    fn empty_listing_is_an_error() {
        let err = pick_random(&[]).unwrap_err();
        assert!(matches!(err, AppError::EmptyCountryList));
    }

    #[test]
    fn listing_parses_with_extra_fields() {
        let payload = r#"[
            {"name":{"common":"Brazil","official":"Federative Republic of Brazil"},"region":"Americas"},
            {"name":{"common":"Japan","official":"Japan"},"region":"Asia"}
        ]"#;
        let countries: Vec<Country> = serde_json::from_str(payload).unwrap();
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].name.common, "Brazil");
        assert_eq!(countries[1].name.common, "Japan");
    }
}
